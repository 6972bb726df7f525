//! Entity descriptors: configuration entity → template reference.
//!
//! Each supported platform, decoration, and mount model is an enum variant
//! backed by a static record. Resolution is a table lookup; supporting a new
//! model means adding a row, never a new branch in the generator.

pub mod decoration;
pub mod mount;
pub mod platform;

use descgen_config::Parameters;

use crate::origin::Origin;

pub use decoration::{describe_decoration, DecorationKind};
pub use mount::{describe_mount, MountModel};
pub use platform::{describe_platform, PlatformModel};

/// Package holding platform and decoration templates.
pub const PLATFORM_PACKAGE: &str = "clearpath_platform_description";
/// Package holding mount templates.
pub const MOUNTS_PACKAGE: &str = "clearpath_mounts_description";

/// Everything the generator needs to reference one entity's template.
#[derive(Debug, Clone, PartialEq)]
pub struct Descriptor {
    /// Package that provides the template file.
    pub package: &'static str,
    /// Template file stem (without extension).
    pub file: &'static str,
    /// Directory of the file inside the package, with trailing slash.
    pub path: &'static str,
    /// Macro defined by the template.
    pub macro_name: &'static str,
    /// Arguments to the macro call, in emission order.
    pub parameters: MacroParams,
    /// Placement of the entity; mounts only.
    pub origin: Option<Origin>,
}

/// Ordered macro arguments.
///
/// Insertion order is emission order. Setting an existing name replaces its
/// value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MacroParams(Vec<(String, String)>);

impl MacroParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `name`, replacing an existing value or appending a new entry.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.0.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.0.push((name, value)),
        }
    }

    /// Overlay configuration parameters onto these.
    pub fn overlay(&mut self, parameters: &Parameters) {
        for (name, value) in parameters {
            self.set(name.as_str(), value.to_string());
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MacroParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (k, v) in iter {
            params.set(k, v);
        }
        params
    }
}
