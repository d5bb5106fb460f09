//! # Code-Sample Generator
//!
//! Renders a ready-to-paste HTTP call against a generated endpoint in one of
//! three styles: a shell `curl` command, a browser `fetch` call, or a Python
//! `requests` script.
//!
//! ## Method Rules
//!
//! | Method   | URL                  | Body                         |
//! |----------|----------------------|------------------------------|
//! | `GET`    | as given             | none                         |
//! | `POST`   | as given             | example payload or `{}`      |
//! | `PUT`    | `{id}` replaced by 1 | example payload or `{}`      |
//! | `DELETE` | `{id}` replaced by 1 | none                         |
//!
//! Every call sends `accept: application/json`; calls with a body also send
//! `Content-Type: application/json`. Output is a pure function of the inputs.

use postapi_core::PostApiError;
use postapi_ir::{ID_PLACEHOLDER, MethodTag};
use serde_json::{Map, Value};

/// Literal substituted for `{id}` in single-item URLs
pub const EXAMPLE_ID: &str = "1";

// ============================================================================
// SnippetStyle
// ============================================================================

/// Output style of a code sample
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SnippetStyle {
    /// `curl` command line
    #[default]
    Shell,
    /// Browser `fetch` call
    BrowserFetch,
    /// Python `requests` script
    ScriptingHttp,
}

impl SnippetStyle {
    /// All styles in display order
    pub fn all() -> &'static [SnippetStyle] {
        &[
            SnippetStyle::Shell,
            SnippetStyle::BrowserFetch,
            SnippetStyle::ScriptingHttp,
        ]
    }

    /// Tab label
    pub fn label(&self) -> &'static str {
        match self {
            SnippetStyle::Shell => "cURL",
            SnippetStyle::BrowserFetch => "JavaScript",
            SnippetStyle::ScriptingHttp => "Python",
        }
    }

    /// Fence language for Markdown code blocks
    pub fn fence_language(&self) -> &'static str {
        match self {
            SnippetStyle::Shell => "bash",
            SnippetStyle::BrowserFetch => "javascript",
            SnippetStyle::ScriptingHttp => "python",
        }
    }
}

impl std::str::FromStr for SnippetStyle {
    type Err = PostApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "shell" | "curl" | "sh" => Ok(SnippetStyle::Shell),
            "fetch" | "js" | "javascript" | "browser" => Ok(SnippetStyle::BrowserFetch),
            "python" | "py" | "requests" => Ok(SnippetStyle::ScriptingHttp),
            other => Err(PostApiError::validation(format!(
                "Unknown snippet style '{}' (expected shell, fetch or python)",
                other
            ))),
        }
    }
}

// ============================================================================
// HttpMethod
// ============================================================================

/// HTTP verb of a sample call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }

    /// Check if calls with this verb carry a JSON body
    pub fn has_body(&self) -> bool {
        matches!(self, HttpMethod::Post | HttpMethod::Put)
    }

    /// Check if the `{id}` placeholder is substituted
    pub fn fills_id(&self) -> bool {
        matches!(self, HttpMethod::Put | HttpMethod::Delete)
    }
}

impl From<MethodTag> for HttpMethod {
    fn from(tag: MethodTag) -> Self {
        match tag {
            MethodTag::Get | MethodTag::GetById => HttpMethod::Get,
            MethodTag::Post => HttpMethod::Post,
            MethodTag::Put => HttpMethod::Put,
            MethodTag::Delete => HttpMethod::Delete,
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for HttpMethod {
    type Err = PostApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "GET" => Ok(HttpMethod::Get),
            "POST" => Ok(HttpMethod::Post),
            "PUT" => Ok(HttpMethod::Put),
            "DELETE" => Ok(HttpMethod::Delete),
            _ => Err(PostApiError::UnknownMethod(s.trim().to_string())),
        }
    }
}

// ============================================================================
// Public API
// ============================================================================

/// Render a code sample
///
/// `example_body` is only used for verbs that carry a body; `None` falls back
/// to an empty object.
pub fn generate(
    style: SnippetStyle,
    method: HttpMethod,
    full_url: &str,
    example_body: Option<&Value>,
) -> String {
    let url = if method.fills_id() {
        full_url.replace(ID_PLACEHOLDER, EXAMPLE_ID)
    } else {
        full_url.to_string()
    };

    let body = method.has_body().then(|| {
        let empty = Value::Object(Map::new());
        pretty_json(example_body.unwrap_or(&empty))
    });

    match style {
        SnippetStyle::Shell => shell(method, &url, body.as_deref()),
        SnippetStyle::BrowserFetch => browser_fetch(method, &url, body.as_deref()),
        SnippetStyle::ScriptingHttp => {
            let payload = method
                .has_body()
                .then(|| example_body.cloned().unwrap_or_else(|| Value::Object(Map::new())));
            scripting_http(method, &url, payload.as_ref())
        }
    }
}

/// Render samples in every style, in display order
pub fn generate_all(
    method: HttpMethod,
    full_url: &str,
    example_body: Option<&Value>,
) -> Vec<(SnippetStyle, String)> {
    SnippetStyle::all()
        .iter()
        .map(|style| (*style, generate(*style, method, full_url, example_body)))
        .collect()
}

// ============================================================================
// Styles
// ============================================================================

fn shell(method: HttpMethod, url: &str, body: Option<&str>) -> String {
    let mut out = String::with_capacity(256);
    out.push_str(&format!("curl -X {} \"{}\" \\\n", method, url));
    out.push_str("  -H \"accept: application/json\"");

    if let Some(body) = body {
        out.push_str(" \\\n  -H \"Content-Type: application/json\"");
        out.push_str(&format!(" \\\n  -d '{}'", body.replace('\'', "'\\''")));
    }

    out
}

fn browser_fetch(method: HttpMethod, url: &str, body: Option<&str>) -> String {
    let mut out = String::with_capacity(384);
    out.push_str(&format!("fetch({}, {{\n", js_string(url)));
    out.push_str(&format!("  method: \"{}\",\n", method));
    out.push_str("  headers: {\n");

    match body {
        Some(body) => {
            out.push_str("    \"accept\": \"application/json\",\n");
            out.push_str("    \"Content-Type\": \"application/json\"\n");
            out.push_str("  },\n");
            out.push_str(&format!("  body: JSON.stringify({})\n", indent_tail(body, "  ")));
        }
        None => {
            out.push_str("    \"accept\": \"application/json\"\n");
            out.push_str("  }\n");
        }
    }

    out.push_str("})\n");
    out.push_str("  .then((res) => res.json())\n");
    out.push_str("  .then((data) => console.log(data));");
    out
}

fn scripting_http(method: HttpMethod, url: &str, payload: Option<&Value>) -> String {
    let mut out = String::with_capacity(384);
    out.push_str("import requests\n\n");
    out.push_str(&format!("url = {}\n", js_string(url)));
    out.push_str("headers = {\n");
    out.push_str("    \"accept\": \"application/json\",\n");
    if payload.is_some() {
        out.push_str("    \"Content-Type\": \"application/json\",\n");
    }
    out.push_str("}\n");

    let verb = method.as_str().to_ascii_lowercase();
    match payload {
        Some(payload) => {
            out.push_str(&format!("payload = {}\n\n", python_literal(payload, 0)));
            out.push_str(&format!(
                "response = requests.{}(url, headers=headers, json=payload)\n",
                verb
            ));
        }
        None => {
            out.push_str(&format!("\nresponse = requests.{}(url, headers=headers)\n", verb));
        }
    }

    out.push_str("print(response.status_code)\n");
    out.push_str("print(response.json())");
    out
}

// ============================================================================
// Helpers
// ============================================================================

/// Two-space pretty JSON
fn pretty_json(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
}

/// Double-quoted string literal valid in JavaScript and Python
fn js_string(s: &str) -> String {
    Value::String(s.to_string()).to_string()
}

/// Indent every line after the first
fn indent_tail(text: &str, indent: &str) -> String {
    text.lines()
        .enumerate()
        .map(|(i, line)| {
            if i == 0 {
                line.to_string()
            } else {
                format!("{}{}", indent, line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render JSON as a Python literal with four-space indentation
fn python_literal(value: &Value, depth: usize) -> String {
    let pad = "    ".repeat(depth + 1);
    let close = "    ".repeat(depth);

    match value {
        Value::Null => "None".to_string(),
        Value::Bool(true) => "True".to_string(),
        Value::Bool(false) => "False".to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => js_string(s),
        Value::Array(items) if items.is_empty() => "[]".to_string(),
        Value::Array(items) => {
            let mut out = String::from("[\n");
            for item in items {
                out.push_str(&format!("{}{},\n", pad, python_literal(item, depth + 1)));
            }
            out.push_str(&format!("{}]", close));
            out
        }
        Value::Object(map) if map.is_empty() => "{}".to_string(),
        Value::Object(map) => {
            let mut out = String::from("{\n");
            for (key, item) in map {
                out.push_str(&format!(
                    "{}{}: {},\n",
                    pad,
                    js_string(key),
                    python_literal(item, depth + 1)
                ));
            }
            out.push_str(&format!("{}}}", close));
            out
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
