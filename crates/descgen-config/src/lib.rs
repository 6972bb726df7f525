//! Robot configuration model and loading for the description generator.
//!
//! Parses a robot configuration document (YAML or TOML) into a [`RobotConfig`]:
//! - **Platform:** model identifier plus the decorations fitted to it
//! - **Mounts:** named accessory/sensor mounts with pose and parameters
//!
//! Validation here is structural only. Whether a model is supported is decided
//! by the generator's registries.

pub mod error;
pub mod model;
pub mod parse;

pub use error::{ConfigError, Result};
pub use model::{
    format_float, is_parameter_name, Decoration, Mount, ParameterValue, Parameters,
    PlatformConfig, RobotConfig, DEFAULT_PARENT_LINK,
};
pub use parse::{
    load_config, parse_config, validate_config, ConfigFormat, ValidationIssue, DEFAULT_CONFIG_PATH,
};
