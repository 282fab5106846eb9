use contracts::shared::config::{load_config_or_default, AppConfig};
use leptos::prelude::*;

/// Общий контекст приложения
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub config: StoredValue<AppConfig>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        let config = load_config_or_default(None).unwrap_or_else(|e| {
            log::error!("Failed to load configuration: {}", e);
            AppConfig::default()
        });
        Self {
            config: StoredValue::new(config),
        }
    }

    /// Задержка из раздела `delays`
    pub fn delay(&self, pick: impl Fn(&AppConfig) -> u32) -> u32 {
        self.config.with_value(|c| pick(c))
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_app_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext context not found")
}
