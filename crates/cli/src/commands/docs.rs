//! `postapi docs <slug>`

use super::user_facing;
use crate::settings::Settings;
use anyhow::Result;
use postapi_app::DocsPage;
use postapi_client::Gateway;
use postapi_codegen::{DocsConfig, SnippetStyle};

/// Docs are public: no session is needed
pub async fn run(settings: &Settings, slug: &str, styles: &[String], all_styles: bool) -> Result<()> {
    let config = docs_config(settings.api_base(), styles, all_styles)?;
    let gateway = Gateway::anonymous(&settings.client_config())?;

    let page = DocsPage::load(&gateway, slug, config)
        .await
        .map_err(user_facing)?;
    print!("{}", page.render());
    Ok(())
}

fn docs_config(api_base: &str, styles: &[String], all_styles: bool) -> Result<DocsConfig> {
    let mut config = DocsConfig::new(api_base);
    if all_styles {
        return Ok(config.with_all_styles());
    }
    if !styles.is_empty() {
        config.styles = styles
            .iter()
            .map(|s| s.parse::<SnippetStyle>())
            .collect::<Result<Vec<_>, _>>()?;
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_docs_config_styles() {
        let config = docs_config("http://x", &[], false).unwrap();
        assert_eq!(config.styles, vec![SnippetStyle::Shell]);

        let config = docs_config("http://x", &["python".to_string(), "fetch".to_string()], false).unwrap();
        assert_eq!(config.styles, vec![SnippetStyle::ScriptingHttp, SnippetStyle::BrowserFetch]);

        let config = docs_config("http://x", &[], true).unwrap();
        assert_eq!(config.styles.len(), 3);

        assert!(docs_config("http://x", &["cobol".to_string()], false).is_err());
    }
}
