use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;
use dioxus::logger::tracing::{warn, Level};
use serde::Deserialize;

use crate::domain::table::pagination::{DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS};

const CONFIG_FILE_NAME: &str = "settings.json";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub window_title: String,
    pub log_level: String,
    pub initial_page_size: usize,
    pub include_checkbox_column: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window_title: "Deltadesk".to_string(),
            log_level: "info".to_string(),
            initial_page_size: DEFAULT_PAGE_SIZE,
            include_checkbox_column: true,
        }
    }
}

impl AppConfig {
    pub fn log_level(&self) -> Level {
        self.log_level.parse().unwrap_or(Level::INFO)
    }

    /// Replaces values the table cannot honour. Returns the names of the
    /// fields that were reset.
    pub fn normalize(&mut self) -> Vec<&'static str> {
        let mut reset = Vec::new();
        if !PAGE_SIZE_OPTIONS.contains(&self.initial_page_size) {
            self.initial_page_size = DEFAULT_PAGE_SIZE;
            reset.push("initial_page_size");
        }
        if self.log_level.parse::<Level>().is_err() {
            self.log_level = "info".to_string();
            reset.push("log_level");
        }
        if self.window_title.trim().is_empty() {
            self.window_title = AppConfig::default().window_title;
            reset.push("window_title");
        }
        reset
    }
}

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("com", "deltadesk", "deltadesk")
        .ok_or_else(|| anyhow!("unable to resolve application directories"))
}

pub fn default_config_path() -> Result<PathBuf> {
    Ok(project_dirs()?.config_dir().join(CONFIG_FILE_NAME))
}

/// Reads `path`; a missing file yields the defaults.
pub fn read_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(AppConfig::default())
        }
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Startup never fails on configuration: unreadable or invalid settings fall
/// back to defaults. Runs before the logger exists, so problems are returned
/// for the caller to log once logging is up.
pub fn load_config() -> (AppConfig, Vec<String>) {
    let mut problems = Vec::new();
    let mut config = match default_config_path() {
        Ok(path) => read_config(&path).unwrap_or_else(|err| {
            problems.push(err.to_string());
            AppConfig::default()
        }),
        Err(err) => {
            problems.push(err.to_string());
            AppConfig::default()
        }
    };
    for field in config.normalize() {
        problems.push(format!("invalid `{field}` in settings, using default"));
    }
    (config, problems)
}

pub fn report_config_problems(problems: &[String]) {
    for problem in problems {
        warn!(%problem, "configuration fallback");
    }
}

pub fn ensure_webview_data_dir(base_data_dir: &Path) -> Result<PathBuf> {
    let webview_data_dir = base_data_dir.join("webview2");
    std::fs::create_dir_all(&webview_data_dir).with_context(|| {
        format!(
            "failed to create webview dir: {}",
            webview_data_dir.display()
        )
    })?;
    Ok(webview_data_dir)
}

pub fn default_webview_data_dir() -> Result<PathBuf> {
    ensure_webview_data_dir(project_dirs()?.data_local_dir())
}
