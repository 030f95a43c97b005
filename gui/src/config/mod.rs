// GUI configuration, mirroring assets/config/default.json
pub mod theme;

use engine::config::settings::ViewerSettings;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub version: String,
    pub app: AppSettings,
    #[serde(default)]
    pub viewer: ViewerSettings,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppSettings {
    pub title: String,
    pub theme: String, // "dark" or "light"
}

impl AppConfig {
    pub fn load_default() -> Result<Self, anyhow::Error> {
        let config_str = include_str!("../../assets/config/default.json");
        Self::from_json_str(config_str)
    }

    pub fn from_json_str(json: &str) -> Result<Self, anyhow::Error> {
        let config: AppConfig = serde_json::from_str(json)?;
        config.viewer.validate()?;
        Ok(config)
    }
}
