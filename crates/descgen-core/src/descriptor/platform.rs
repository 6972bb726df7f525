//! Platform registry.

use super::{Descriptor, MacroParams, PLATFORM_PACKAGE};
use crate::error::UnsupportedEntityError;

/// Supported robot platforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlatformModel {
    /// Husky.
    A200,
    /// Jackal.
    J100,
    /// Dingo-D.
    Dd100,
    /// Dingo-O.
    Dd150,
    /// Ridgeback.
    R100,
    /// Warthog.
    W200,
}

struct PlatformRecord {
    model: PlatformModel,
    id: &'static str,
    name: &'static str,
    path: &'static str,
}

const PLATFORMS: &[PlatformRecord] = &[
    PlatformRecord {
        model: PlatformModel::A200,
        id: "a200",
        name: "Husky",
        path: "urdf/a200/",
    },
    PlatformRecord {
        model: PlatformModel::J100,
        id: "j100",
        name: "Jackal",
        path: "urdf/j100/",
    },
    PlatformRecord {
        model: PlatformModel::Dd100,
        id: "dd100",
        name: "Dingo-D",
        path: "urdf/dd100/",
    },
    PlatformRecord {
        model: PlatformModel::Dd150,
        id: "dd150",
        name: "Dingo-O",
        path: "urdf/dd150/",
    },
    PlatformRecord {
        model: PlatformModel::R100,
        id: "r100",
        name: "Ridgeback",
        path: "urdf/r100/",
    },
    PlatformRecord {
        model: PlatformModel::W200,
        id: "w200",
        name: "Warthog",
        path: "urdf/w200/",
    },
];

impl PlatformModel {
    /// Resolve a configuration identifier.
    pub fn lookup(id: &str) -> Option<Self> {
        PLATFORMS.iter().find(|r| r.id == id).map(|r| r.model)
    }

    /// All registered platforms, in registry order.
    pub fn all() -> impl Iterator<Item = Self> {
        PLATFORMS.iter().map(|r| r.model)
    }

    /// Configuration identifier; also the template file and macro name.
    pub fn as_str(self) -> &'static str {
        self.record().id
    }

    /// Product name.
    pub fn display_name(self) -> &'static str {
        self.record().name
    }

    fn record(self) -> &'static PlatformRecord {
        // Rows are in variant order.
        &PLATFORMS[self as usize]
    }
}

/// Resolve the template reference for a platform model identifier.
pub fn describe_platform(
    model: &str,
) -> Result<(PlatformModel, Descriptor), UnsupportedEntityError> {
    let platform = PlatformModel::lookup(model).ok_or_else(|| UnsupportedEntityError::Platform {
        model: model.to_string(),
    })?;
    let record = platform.record();
    Ok((
        platform,
        Descriptor {
            package: PLATFORM_PACKAGE,
            file: record.id,
            path: record.path,
            macro_name: record.id,
            parameters: MacroParams::new(),
            origin: None,
        },
    ))
}
