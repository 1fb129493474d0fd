// src/config.rs
use gloo::net::http::Request;
use serde::Deserialize;

pub const CONFIG_URL: &str = "./site-config.json";

/// Fixed values attached to every contact-form submission.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct SiteConfig {
    /// Form `action`: the relay that turns the POST into an email.
    pub relay_action: String,
    pub subject: String,
    pub captcha: bool,
    /// Section the relay sends the visitor back to.
    pub return_anchor: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            relay_action: "https://formsubmit.co/yassine99zbir@gmail.com".into(),
            subject: "Nouveau message du site JLM Mundiapolis".into(),
            captcha: false,
            return_anchor: "contact".into(),
        }
    }
}

pub async fn fetch_site_config(url: &str) -> Result<SiteConfig, String> {
    let resp = Request::get(url)
        .send()
        .await
        .map_err(|e| format!("Failed fetching {url}: {e}"))?;
    if !resp.ok() {
        return Err(format!("Failed fetching {url}: HTTP {}", resp.status()));
    }
    resp.json::<SiteConfig>()
        .await
        .map_err(|e| format!("Failed parsing {url}: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let cfg: SiteConfig =
            serde_json::from_str(r#"{ "subject": "Hello" }"#).unwrap();
        assert_eq!(
            cfg,
            SiteConfig {
                subject: "Hello".into(),
                ..SiteConfig::default()
            }
        );
    }

    #[test]
    fn bundled_config_matches_defaults() {
        let cfg: SiteConfig =
            serde_json::from_str(include_str!("../site-config.json")).unwrap();
        assert_eq!(cfg, SiteConfig::default());
    }

    #[test]
    fn config_is_fetched_next_to_the_page() {
        assert!(CONFIG_URL.starts_with("./"));
        assert!(CONFIG_URL.ends_with(".json"));
        assert!(include_str!("../index.html").contains("site-config.json"));
    }
}
