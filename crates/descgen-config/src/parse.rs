//! Loading, format detection, and structural validation of robot configurations.
//!
//! Configurations are usually YAML (`/etc/clearpath/robot.yaml`), but the same
//! schema is accepted as TOML. The format is chosen from the file extension.

use std::collections::HashSet;
use std::path::Path;

use crate::error::{ConfigError, Result};
use crate::model::{is_parameter_name, Parameters, RobotConfig};

/// Configuration path used when the caller does not supply one.
pub const DEFAULT_CONFIG_PATH: &str = "/etc/clearpath/robot.yaml";

/// Serialization format of a configuration document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Yaml,
    Toml,
}

impl ConfigFormat {
    /// Detect the format from a path's extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml" | "yml") => Some(Self::Yaml),
            Some("toml") => Some(Self::Toml),
            _ => None,
        }
    }
}

/// A validation issue found in a configuration.
#[derive(Debug, Clone)]
pub struct ValidationIssue {
    /// Human-readable description.
    pub message: String,
}

/// Load and validate a configuration file.
pub fn load_config(path: &Path) -> Result<RobotConfig> {
    if !path.exists() {
        return Err(ConfigError::NotFound {
            path: path.to_path_buf(),
        });
    }
    let format = ConfigFormat::from_path(path).ok_or_else(|| ConfigError::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;
    let content = std::fs::read_to_string(path)?;
    parse_config(&content, format)
}

/// Parse and validate a configuration from a string.
pub fn parse_config(content: &str, format: ConfigFormat) -> Result<RobotConfig> {
    let config: RobotConfig = match format {
        ConfigFormat::Yaml => serde_yaml::from_str(content)?,
        ConfigFormat::Toml => toml::from_str(content)?,
    };
    validate_config(&config).map_err(|issues| ConfigError::Validation {
        detail: issues
            .into_iter()
            .map(|i| i.message)
            .collect::<Vec<_>>()
            .join("; "),
    })?;
    Ok(config)
}

/// Validate a configuration for structural correctness.
///
/// Registry membership of model identifiers is not checked here.
pub fn validate_config(config: &RobotConfig) -> std::result::Result<(), Vec<ValidationIssue>> {
    let mut issues = Vec::new();

    // The serial number becomes a file name.
    let serial = config.serial_number.trim();
    if serial.is_empty() {
        issues.push(ValidationIssue {
            message: "serial number is empty".into(),
        });
    } else if serial != config.serial_number {
        issues.push(ValidationIssue {
            message: format!(
                "serial number '{}' has leading or trailing whitespace",
                config.serial_number
            ),
        });
    } else if serial.contains(['/', '\\']) || serial == "." || serial == ".." {
        issues.push(ValidationIssue {
            message: format!("serial number '{serial}' is not a valid file name"),
        });
    }

    if config.platform.model.trim().is_empty() {
        issues.push(ValidationIssue {
            message: "platform model is empty".into(),
        });
    }

    for (i, decoration) in config.platform.decorations.iter().enumerate() {
        if decoration.kind.trim().is_empty() {
            issues.push(ValidationIssue {
                message: format!("decoration #{i} has an empty type"),
            });
        }
        check_parameter_names(
            &format!("decoration '{}'", decoration.kind),
            &decoration.parameters,
            &mut issues,
        );
    }

    let mut seen = HashSet::new();
    for (i, mount) in config.mounts.iter().enumerate() {
        if mount.name.trim().is_empty() {
            issues.push(ValidationIssue {
                message: format!("mount #{i} has an empty name"),
            });
        } else if !seen.insert(mount.name.as_str()) {
            issues.push(ValidationIssue {
                message: format!("duplicate mount name '{}'", mount.name),
            });
        }
        if mount.model.trim().is_empty() {
            issues.push(ValidationIssue {
                message: format!("mount '{}' has an empty model", mount.name),
            });
        }
        check_parameter_names(
            &format!("mount '{}'", mount.name),
            &mount.parameters,
            &mut issues,
        );
    }

    if issues.is_empty() {
        Ok(())
    } else {
        Err(issues)
    }
}

/// Parameter names end up as XML attribute names.
fn check_parameter_names(owner: &str, parameters: &Parameters, issues: &mut Vec<ValidationIssue>) {
    for name in parameters.keys().filter(|n| !is_parameter_name(n)) {
        issues.push(ValidationIssue {
            message: format!("{owner} has invalid parameter name '{name}'"),
        });
    }
}
