//! In-memory robot configuration model.
//!
//! A configuration names exactly one platform, the decorations fitted to that
//! platform, and the mounts attached to the robot. Model identifiers are kept
//! as plain strings here; whether a model is supported is decided by the
//! generator's registries, not by the parser.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Model-specific parameters, ordered by name.
pub type Parameters = BTreeMap<String, ParameterValue>;

/// Link that mounts attach to when the configuration does not name one.
pub const DEFAULT_PARENT_LINK: &str = "base_link";

/// The complete configuration of one robot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RobotConfig {
    /// Serial number (e.g., "a200-0001"); names the generated artifact.
    pub serial_number: String,
    /// The robot's base platform.
    pub platform: PlatformConfig,
    /// Accessory and sensor mounts, in document order.
    #[serde(default)]
    pub mounts: Vec<Mount>,
}

impl RobotConfig {
    /// Create a configuration with no decorations or mounts.
    pub fn new(serial_number: impl Into<String>, platform_model: impl Into<String>) -> Self {
        Self {
            serial_number: serial_number.into(),
            platform: PlatformConfig {
                model: platform_model.into(),
                decorations: Vec::new(),
            },
            mounts: Vec::new(),
        }
    }

    /// Decorations with `enabled = true`, in document order.
    pub fn enabled_decorations(&self) -> impl Iterator<Item = &Decoration> + '_ {
        self.platform.decorations.iter().filter(|d| d.enabled)
    }
}

/// Platform section of a configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformConfig {
    /// Platform model identifier (e.g., "a200", "j100").
    pub model: String,
    /// Decorations fitted to the platform, in document order.
    #[serde(default)]
    pub decorations: Vec<Decoration>,
}

/// A platform decoration such as a bumper or top plate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Decoration {
    /// Decoration type identifier (e.g., "front_bumper").
    #[serde(rename = "type")]
    pub kind: String,
    /// Only enabled decorations are generated.
    #[serde(default)]
    pub enabled: bool,
    /// Type-specific parameters.
    #[serde(default)]
    pub parameters: Parameters,
}

impl Decoration {
    /// Create a decoration with no parameters.
    pub fn new(kind: impl Into<String>, enabled: bool) -> Self {
        Self {
            kind: kind.into(),
            enabled,
            parameters: Parameters::new(),
        }
    }

    /// Builder-style parameter setter.
    pub fn with_parameter(
        mut self,
        name: impl Into<String>,
        value: impl Into<ParameterValue>,
    ) -> Self {
        self.parameters.insert(name.into(), value.into());
        self
    }
}

/// An accessory or sensor mount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mount {
    /// Unique mount name, used for labelling and link naming.
    pub name: String,
    /// Mount model identifier (e.g., "fath_pivot").
    pub model: String,
    /// Link the mount is attached to.
    #[serde(default = "default_parent")]
    pub parent: String,
    /// Position relative to the parent link, in metres.
    #[serde(default)]
    pub xyz: Option<[f64; 3]>,
    /// Orientation relative to the parent link (roll, pitch, yaw), in radians.
    #[serde(default)]
    pub rpy: Option<[f64; 3]>,
    /// Model-specific parameters.
    #[serde(default)]
    pub parameters: Parameters,
}

fn default_parent() -> String {
    DEFAULT_PARENT_LINK.to_string()
}

impl Mount {
    /// Create a mount on the default parent link with no transform.
    pub fn new(name: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            model: model.into(),
            parent: default_parent(),
            xyz: None,
            rpy: None,
            parameters: Parameters::new(),
        }
    }

    /// Builder-style parent link setter.
    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = parent.into();
        self
    }

    /// Builder-style pose setter.
    pub fn with_pose(mut self, xyz: [f64; 3], rpy: [f64; 3]) -> Self {
        self.xyz = Some(xyz);
        self.rpy = Some(rpy);
        self
    }

    /// Builder-style parameter setter.
    pub fn with_parameter(
        mut self,
        name: impl Into<String>,
        value: impl Into<ParameterValue>,
    ) -> Self {
        self.parameters.insert(name.into(), value.into());
        self
    }
}

/// A scalar parameter value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParameterValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
}

impl fmt::Display for ParameterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(x) => f.write_str(&format_float(*x)),
            Self::String(s) => f.write_str(s),
        }
    }
}

impl From<bool> for ParameterValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for ParameterValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for ParameterValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for ParameterValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for ParameterValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

/// Whether `name` can be used as a macro parameter name.
///
/// Parameter names become XML attribute names, so they are restricted to
/// `[A-Za-z_][A-Za-z0-9_.-]*`.
pub fn is_parameter_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
}

/// Render a float with at least one decimal place (`0` becomes `0.0`).
pub fn format_float(value: f64) -> String {
    let s = value.to_string();
    if value.is_finite() && !s.contains('.') {
        format!("{s}.0")
    } else {
        s
    }
}
