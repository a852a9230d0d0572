//! Configuration loading and root folder resolution

use crate::{Error, Result};
use std::path::{Path, PathBuf};

/// Database file name inside the root folder
pub const DATABASE_FILE: &str = "sentimap.db";

/// Root folder resolution priority order:
/// 1. Command-line argument (highest priority)
/// 2. Environment variable
/// 3. TOML config file
/// 4. OS-dependent compiled default (fallback)
pub fn resolve_root_folder(cli_arg: Option<&str>, env_var_name: &str) -> PathBuf {
    // Priority 1: Command-line argument
    if let Some(path) = cli_arg {
        return PathBuf::from(path);
    }

    // Priority 2: Environment variable
    if let Ok(path) = std::env::var(env_var_name) {
        if !path.trim().is_empty() {
            return PathBuf::from(path);
        }
    }

    // Priority 3: TOML config file
    if let Ok(config_path) = locate_config_file() {
        if let Ok(toml_content) = std::fs::read_to_string(&config_path) {
            if let Ok(config) = toml::from_str::<toml::Value>(&toml_content) {
                if let Some(root_folder) = config.get("root_folder").and_then(|v| v.as_str()) {
                    return PathBuf::from(root_folder);
                }
            }
        }
    }

    // Priority 4: OS-dependent compiled default
    default_root_folder()
}

/// Get default configuration file path for the platform
fn locate_config_file() -> Result<PathBuf> {
    if cfg!(target_os = "linux") {
        // Try ~/.config/sentimap/config.toml first, then /etc/sentimap/config.toml
        let user_config = dirs::config_dir().map(|d| d.join("sentimap").join("config.toml"));
        let system_config = PathBuf::from("/etc/sentimap/config.toml");

        if let Some(path) = user_config {
            if path.exists() {
                return Ok(path);
            }
        }
        if system_config.exists() {
            return Ok(system_config);
        }
        Err(Error::Config("No config file found".to_string()))
    } else {
        let path = dirs::config_dir()
            .map(|d| d.join("sentimap").join("config.toml"))
            .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))?;

        if path.exists() {
            Ok(path)
        } else {
            Err(Error::Config(format!("Config file not found: {:?}", path)))
        }
    }
}

/// Get OS-dependent default root folder path
fn default_root_folder() -> PathBuf {
    if cfg!(target_os = "linux") {
        // ~/.local/share/sentimap (or /var/lib/sentimap for system-wide)
        dirs::data_local_dir()
            .map(|d| d.join("sentimap"))
            .unwrap_or_else(|| PathBuf::from("/var/lib/sentimap"))
    } else if cfg!(target_os = "macos") {
        dirs::data_dir()
            .map(|d| d.join("sentimap"))
            .unwrap_or_else(|| PathBuf::from("/Library/Application Support/sentimap"))
    } else if cfg!(target_os = "windows") {
        dirs::data_local_dir()
            .map(|d| d.join("sentimap"))
            .unwrap_or_else(|| PathBuf::from("C:\\ProgramData\\sentimap"))
    } else {
        PathBuf::from("./sentimap_data")
    }
}

/// Ensure the root folder exists, creating it if necessary
pub fn ensure_root_folder(root: &Path) -> Result<()> {
    std::fs::create_dir_all(root)?;
    Ok(())
}

/// Database file path inside the root folder
pub fn database_path(root: &Path) -> PathBuf {
    root.join(DATABASE_FILE)
}
