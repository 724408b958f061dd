use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Build-time override, e.g. `HRMS_API_URL=https://hr.example.com trunk build`.
const BUILD_API_BASE_URL: Option<&str> = option_env!("HRMS_API_URL");

/// Partial configuration as supplied by one source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    #[serde(default, alias = "API_BASE_URL")]
    pub api_base_url: Option<String>,
    #[serde(default, alias = "TIME_ZONE")]
    pub time_zone: Option<String>,
}

impl RuntimeConfig {
    /// Fills every field this source left blank from `fallback`.
    pub fn or(self, fallback: RuntimeConfig) -> RuntimeConfig {
        RuntimeConfig {
            api_base_url: non_blank(self.api_base_url).or(non_blank(fallback.api_base_url)),
            time_zone: non_blank(self.time_zone).or(non_blank(fallback.time_zone)),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.api_base_url.is_some() && self.time_zone.is_some()
    }

    fn build_time() -> RuntimeConfig {
        RuntimeConfig {
            api_base_url: BUILD_API_BASE_URL.map(str::to_string),
            time_zone: None,
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Settled, immutable configuration handed to the API client and the pages.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub time_zone: Tz,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            time_zone: Tz::UTC,
        }
    }
}

impl AppConfig {
    pub fn resolve(runtime: RuntimeConfig) -> Self {
        let defaults = AppConfig::default();
        let api_base_url = runtime
            .api_base_url
            .map(|url| url.trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or(defaults.api_base_url);
        let time_zone = match runtime.time_zone {
            Some(name) => name.parse::<Tz>().unwrap_or_else(|_| {
                log::warn!("Unknown time zone {name:?}; falling back to UTC");
                Tz::UTC
            }),
            None => defaults.time_zone,
        };
        Self {
            api_base_url,
            time_zone,
        }
    }
}

/// Resolves the configuration once at startup: page globals, then `config.json`,
/// then the build-time environment, then defaults.
pub async fn load() -> AppConfig {
    let mut runtime = browser::snapshot_from_globals().unwrap_or_default();
    if runtime.is_complete() {
        log::debug!("Runtime config taken from window.__HRMS_ENV");
    } else if let Some(file) = browser::fetch_runtime_config().await {
        log::debug!("Runtime config merged with config.json");
        runtime = runtime.or(file);
    }
    AppConfig::resolve(runtime.or(RuntimeConfig::build_time()))
}

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::RuntimeConfig;

    /// Reads `window.__HRMS_ENV = { API_BASE_URL: "...", TIME_ZONE: "..." }` if present.
    pub fn snapshot_from_globals() -> Option<RuntimeConfig> {
        let window = web_sys::window()?;
        let any = js_sys::Reflect::get(&window, &"__HRMS_ENV".into()).ok()?;
        if any.is_undefined() || any.is_null() {
            return None;
        }
        let json = js_sys::JSON::stringify(&any).ok()?.as_string()?;
        serde_json::from_str(&json).ok()
    }

    pub async fn fetch_runtime_config() -> Option<RuntimeConfig> {
        let origin = web_sys::window()?.location().origin().ok()?;
        let resp = reqwest::Client::new()
            .get(format!("{}/config.json", origin))
            .send()
            .await
            .ok()?;
        if !resp.status().is_success() {
            return None;
        }
        resp.json::<RuntimeConfig>().await.ok()
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod browser {
    use super::RuntimeConfig;

    pub fn snapshot_from_globals() -> Option<RuntimeConfig> {
        None
    }

    pub async fn fetch_runtime_config() -> Option<RuntimeConfig> {
        None
    }
}
