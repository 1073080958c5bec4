use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::warn;

/// Relative location of the project config under a project root.
pub const PROJECT_CONFIG_PATH: &str = ".ticks/config.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectConfig {
    #[serde(default)]
    pub list: ListConfig,
    #[serde(default)]
    pub output: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListConfig {
    /// Title given to a fresh list when no document is loaded.
    #[serde(default = "default_list_title")]
    pub default_title: String,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            default_title: default_list_title(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UserConfig {
    #[serde(default)]
    pub output: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EffectiveConfig {
    pub default_title: String,
    /// Normalized output preference (`pretty`, `text`, or `json`), if any.
    pub output: Option<String>,
}

/// Load `<project_root>/.ticks/config.toml`, or defaults when it is absent.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_project_config(project_root: &Path) -> Result<ProjectConfig> {
    let path = project_root.join(PROJECT_CONFIG_PATH);
    if !path.exists() {
        return Ok(ProjectConfig::default());
    }

    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    toml::from_str::<ProjectConfig>(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))
}

/// Load `ticks/config.toml` from the platform config directory.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_user_config() -> Result<UserConfig> {
    let Some(config_dir) = dirs::config_dir() else {
        return Ok(UserConfig::default());
    };
    load_user_config_from(&config_dir)
}

/// Load `ticks/config.toml` under an explicit config directory.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_user_config_from(config_dir: &Path) -> Result<UserConfig> {
    let path = config_dir.join("ticks/config.toml");
    if !path.exists() {
        return Ok(UserConfig::default());
    }

    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    toml::from_str::<UserConfig>(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))
}

/// Merge project and user config. Project values win.
///
/// # Errors
///
/// Returns an error if either config file is present but malformed.
pub fn resolve_config(project_root: &Path) -> Result<EffectiveConfig> {
    let project = load_project_config(project_root)?;
    let user = load_user_config()?;
    Ok(merge(project, &user))
}

fn merge(project: ProjectConfig, user: &UserConfig) -> EffectiveConfig {
    let output = [project.output.as_deref(), user.output.as_deref()]
        .into_iter()
        .flatten()
        .find_map(|raw| {
            let mode = normalize_output_mode(raw);
            if mode.is_none() {
                warn!(value = raw, "ignoring unknown output mode in config");
            }
            mode
        })
        .map(str::to_string);

    EffectiveConfig {
        default_title: project.list.default_title,
        output,
    }
}

/// Map an output mode name to its canonical form.
///
/// Accepts `pretty`, `text`, `json`, and the legacy aliases `human` and `table`.
#[must_use]
pub fn normalize_output_mode(raw: &str) -> Option<&'static str> {
    match raw.trim().to_ascii_lowercase().as_str() {
        // canonical values
        "pretty" => Some("pretty"),
        "text" => Some("text"),
        "json" => Some("json"),
        // legacy compatibility
        "human" => Some("pretty"),
        "table" => Some("text"),
        _ => None,
    }
}

fn default_list_title() -> String {
    "Todos".to_string()
}
