use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct GisMapConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub deep_link: DeepLinkConfig,
    pub observability: ObservabilityConfig,
}

/// Where the `/open` page sends the browser.
#[derive(Debug, Clone, Deserialize)]
pub struct DeepLinkConfig {
    /// Custom URI scheme registered by the native app, without `://`.
    pub app_scheme: String,
    pub app_host: String,
    /// Origin of the browser fallback, without a trailing slash.
    pub web_origin: String,
    pub web_path: String,
    pub fallback_delay_ms: u64,
}

impl Default for DeepLinkConfig {
    fn default() -> Self {
        Self {
            app_scheme: "gismap".to_string(),
            app_host: "location".to_string(),
            web_origin: "https://word3map.onrender.com".to_string(),
            web_path: "/web-map".to_string(),
            fallback_delay_ms: 1000,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ObservabilityConfig {
    pub log_level: String,
    /// When unset, traces are only logged locally.
    pub otlp_endpoint: Option<String>,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            otlp_endpoint: None,
        }
    }
}

impl GisMapConfig {
    pub fn load() -> Result<Self, AppError> {
        let common_config = core_config::Config::load()?;
        let is_prod = env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string()) == "prod";
        let defaults = DeepLinkConfig::default();

        let fallback_delay_ms = get_env(
            "GISMAP_FALLBACK_DELAY_MS",
            Some(&defaults.fallback_delay_ms.to_string()),
            is_prod,
        )?
        .parse()
        .map_err(|e| {
            AppError::ConfigError(anyhow::anyhow!(
                "GISMAP_FALLBACK_DELAY_MS must be a whole number of milliseconds: {}",
                e
            ))
        })?;

        Ok(GisMapConfig {
            common: common_config,
            deep_link: DeepLinkConfig {
                app_scheme: get_env("GISMAP_APP_SCHEME", Some(&defaults.app_scheme), is_prod)?,
                app_host: get_env("GISMAP_APP_HOST", Some(&defaults.app_host), is_prod)?,
                web_origin: get_env("GISMAP_WEB_ORIGIN", Some(&defaults.web_origin), is_prod)?
                    .trim_end_matches('/')
                    .to_string(),
                web_path: get_env("GISMAP_WEB_PATH", Some(&defaults.web_path), is_prod)?,
                fallback_delay_ms,
            },
            observability: ObservabilityConfig {
                log_level: get_env("LOG_LEVEL", Some("info"), is_prod)?,
                otlp_endpoint: env::var("OTLP_ENDPOINT").ok().filter(|s| !s.is_empty()),
            },
        })
    }
}

fn get_env(key: &str, default: Option<&str>, is_prod: bool) -> Result<String, AppError> {
    match env::var(key) {
        Ok(val) => Ok(val),
        Err(_) => {
            if is_prod {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required in production but not set",
                    key
                )))
            } else if let Some(def) = default {
                Ok(def.to_string())
            } else {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required but not set",
                    key
                )))
            }
        }
    }
}
