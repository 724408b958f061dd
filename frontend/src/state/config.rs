use crate::{api::ApiClient, config::AppConfig};
use leptos::*;

pub fn use_app_config() -> AppConfig {
    use_context::<AppConfig>().unwrap_or_default()
}

/// The client provided by the app root, or one built from the ambient config.
pub fn use_api_client() -> ApiClient {
    use_context::<ApiClient>().unwrap_or_else(|| ApiClient::new(&use_app_config()))
}
