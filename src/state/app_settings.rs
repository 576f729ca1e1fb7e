use log::LevelFilter;
use std::path::PathBuf;
use wc_api::client::{DataRoot, OPEN_DATA_URL};

#[derive(Debug, Clone)]
pub struct AppSettings {
    pub full_screen: bool,
    pub log_level: Option<LevelFilter>,
    pub data_root: DataRoot,
    pub export_dir: PathBuf,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            full_screen: false,
            log_level: None,
            data_root: DataRoot::Remote(OPEN_DATA_URL.to_string()),
            export_dir: PathBuf::from("."),
        }
    }
}

impl AppSettings {
    /// Read `WCTUI_*` overrides from the environment.
    pub fn load() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let mut settings = Self::default();

        if let Some(dir) = get("WCTUI_DATA_DIR") {
            settings.data_root = DataRoot::Local(PathBuf::from(dir));
        } else if let Some(url) = get("WCTUI_DATA_URL") {
            settings.data_root = DataRoot::Remote(url.trim_end_matches('/').to_string());
        }
        if let Some(dir) = get("WCTUI_EXPORT_DIR") {
            settings.export_dir = PathBuf::from(dir);
        }
        settings.log_level = get("WCTUI_LOG").and_then(|l| l.parse::<LevelFilter>().ok());

        settings
    }
}
