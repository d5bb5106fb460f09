//! Commands that never touch the backend

use crate::cli::Command;
use crate::output::Printer;
use anyhow::{Context as _, Result, anyhow, bail};
use postapi_codegen::{HttpMethod, SampleTemplate, SnippetStyle, generate, generate_samples};
use postapi_ir::{
    derive_slug, load_resource_file, parse_method_list, routes_for, validate_resource_draft,
};
use serde_json::Value;
use std::path::Path;

pub fn run(command: Command, printer: &Printer) -> Result<()> {
    match command {
        Command::Validate { file } => validate(&file, printer),
        Command::Slug { name } => {
            println!("{}", derive_slug(&name.join(" ")));
            Ok(())
        }
        Command::Routes { slug, methods } => {
            let tags = parse_method_list(&methods)?;
            if tags.is_empty() {
                bail!("Please select at least one method");
            }
            for route in routes_for(&slug, &tags) {
                printer.route(&route);
            }
            Ok(())
        }
        Command::Snippet {
            method,
            url,
            body,
            style,
        } => {
            println!("{}", snippet(&method, &url, body.as_deref(), &style)?);
            Ok(())
        }
        Command::Sample { template, count } => {
            let template: SampleTemplate = template.parse()?;
            let samples = generate_samples(template, count);
            println!("{}", serde_json::to_string_pretty(&samples)?);
            Ok(())
        }
        other => Err(anyhow!("{:?} needs the backend", other)),
    }
}

/// Render one code sample from command-line strings
pub fn snippet(method: &str, url: &str, body: Option<&str>, style: &str) -> Result<String> {
    let method: HttpMethod = method.parse()?;
    let style: SnippetStyle = style.parse()?;
    let body: Option<Value> = body
        .map(serde_json::from_str)
        .transpose()
        .context("--body is not valid JSON")?;
    Ok(generate(style, method, url, body.as_ref()))
}

/// Check a resource definition file and report every problem
fn validate(path: &Path, printer: &Printer) -> Result<()> {
    let draft = load_resource_file(path)?.into_draft()?;
    let report = validate_resource_draft(&draft);

    for warning in &report.warnings {
        printer.warning(&warning.to_string());
    }
    for error in &report.errors {
        printer.error(&error.to_string());
    }
    if report.has_errors() {
        bail!("{} is not valid", path.display());
    }

    printer.success(&format!("{} is valid", path.display()));
    printer.field("name", draft.name());
    printer.field("slug", draft.slug().value());
    match draft.primary_key() {
        Some(key) => printer.field("primary key", key),
        None => printer.field(
            "primary key",
            format!("not set (candidates: {})", draft.candidate_keys().join(", ")),
        ),
    }
    for route in draft.routes() {
        printer.route(&route);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snippet_fills_id_for_delete() {
        let out = snippet("DELETE", "http://x/api/shop/products/{id}", None, "curl").unwrap();
        assert!(out.contains("http://x/api/shop/products/1"));
        assert!(!out.contains("{id}"));
    }

    #[test]
    fn test_snippet_rejects_bad_input() {
        assert!(snippet("PATCH", "http://x", None, "curl").is_err());
        assert!(snippet("POST", "http://x", Some("{oops"), "curl").is_err());
        assert!(snippet("GET", "http://x", None, "cobol").is_err());
    }

    #[test]
    fn test_validate_file() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("good.json");
        std::fs::write(
            &good,
            r#"{"name":"Products","methods":["GET","POST"],"primaryKey":"sku","mockData":[{"sku":"A1"}]}"#,
        )
        .unwrap();
        assert!(validate(&good, &Printer::default()).is_ok());

        let bad = dir.path().join("bad.json");
        std::fs::write(&bad, r#"{"name":"Products","methods":[],"mockData":[1,2]}"#).unwrap();
        assert!(validate(&bad, &Printer::default()).is_err());
    }
}
