use leptos::*;

pub const DEFAULT_IMAGE_BASE_URL: &str = "http://localhost:3001/";

/// Client-side settings shared through leptos context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Prefix joined to each campsite's relative image path.
    pub image_base_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            image_base_url: option_env!("CAMPSITE_IMAGE_BASE_URL")
                .unwrap_or(DEFAULT_IMAGE_BASE_URL)
                .to_string(),
        }
    }
}

impl AppConfig {
    pub fn image_url(&self, image: &str) -> String {
        format!("{}{}", self.image_base_url, image)
    }
}

pub fn provide_app_config(config: AppConfig) {
    provide_context(config);
}

/// The configuration in context, or the defaults when none was provided.
pub fn use_app_config() -> AppConfig {
    use_context::<AppConfig>().unwrap_or_default()
}
