//! App and browser URLs for a three-word location.

use crate::config::DeepLinkConfig;

/// Both targets of the `/open` page for one `words` value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeepLink {
    /// e.g. `gismap://location?words=river.bold.cat`
    pub app_url: String,
    /// e.g. `https://word3map.onrender.com/web-map?words=river.bold.cat`
    pub web_url: String,
}

impl DeepLink {
    /// `words` is percent-encoded as a single URI component, so reserved
    /// characters (`&`, `#`, `=`, spaces, quotes) cannot escape the query.
    pub fn new(config: &DeepLinkConfig, words: &str) -> Self {
        let encoded = urlencoding::encode(words);

        Self {
            app_url: format!(
                "{}://{}?words={}",
                config.app_scheme, config.app_host, encoded
            ),
            web_url: format!("{}{}?words={}", config.web_origin, config.web_path, encoded),
        }
    }
}
