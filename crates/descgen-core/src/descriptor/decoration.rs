//! Decoration registry.
//!
//! Resolution is two-stage. The decoration type selects the template file and
//! macro; the (platform, type) pair selects the default arguments, since the
//! same bumper attaches differently to different chassis. A type with no row
//! for the platform is unsupported on it.

use descgen_config::Decoration;

use super::platform::PlatformModel;
use super::{Descriptor, MacroParams, PLATFORM_PACKAGE};
use crate::error::UnsupportedEntityError;

/// Supported decoration types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecorationKind {
    FrontBumper,
    RearBumper,
    TopPlate,
    FrontFender,
    RearFender,
}

struct DecorationTemplate {
    kind: DecorationKind,
    id: &'static str,
    file: &'static str,
}

/// Template per type, in variant order.
const TEMPLATES: &[DecorationTemplate] = &[
    DecorationTemplate {
        kind: DecorationKind::FrontBumper,
        id: "front_bumper",
        file: "bumper",
    },
    DecorationTemplate {
        kind: DecorationKind::RearBumper,
        id: "rear_bumper",
        file: "bumper",
    },
    DecorationTemplate {
        kind: DecorationKind::TopPlate,
        id: "top_plate",
        file: "top_plate",
    },
    DecorationTemplate {
        kind: DecorationKind::FrontFender,
        id: "front_fender",
        file: "fender",
    },
    DecorationTemplate {
        kind: DecorationKind::RearFender,
        id: "rear_fender",
        file: "fender",
    },
];

const DECORATIONS_PATH: &str = "urdf/decorations/";

struct Placement {
    platform: PlatformModel,
    kind: DecorationKind,
    parameters: &'static [(&'static str, &'static str)],
}

const PLACEMENTS: &[Placement] = &[
    Placement {
        platform: PlatformModel::A200,
        kind: DecorationKind::FrontBumper,
        parameters: &[
            ("name", "front_bumper"),
            ("parent_link", "front_bumper_mount"),
            ("model", "default"),
            ("extension", "0.0"),
        ],
    },
    Placement {
        platform: PlatformModel::A200,
        kind: DecorationKind::RearBumper,
        parameters: &[
            ("name", "rear_bumper"),
            ("parent_link", "rear_bumper_mount"),
            ("model", "default"),
            ("extension", "0.0"),
        ],
    },
    Placement {
        platform: PlatformModel::A200,
        kind: DecorationKind::TopPlate,
        parameters: &[
            ("name", "top_plate"),
            ("parent_link", "top_plate_mount"),
            ("model", "default"),
        ],
    },
    Placement {
        platform: PlatformModel::W200,
        kind: DecorationKind::FrontBumper,
        parameters: &[
            ("name", "front_bumper"),
            ("parent_link", "base_link"),
            ("xyz", "0.73 0.0 0.18"),
        ],
    },
    Placement {
        platform: PlatformModel::W200,
        kind: DecorationKind::RearBumper,
        parameters: &[
            ("name", "rear_bumper"),
            ("parent_link", "base_link"),
            ("xyz", "-0.73 0.0 0.18"),
        ],
    },
    Placement {
        platform: PlatformModel::J100,
        kind: DecorationKind::FrontFender,
        parameters: &[("name", "front_fender"), ("parent_link", "front_fender_mount")],
    },
    Placement {
        platform: PlatformModel::J100,
        kind: DecorationKind::RearFender,
        parameters: &[("name", "rear_fender"), ("parent_link", "rear_fender_mount")],
    },
];

impl DecorationKind {
    /// Resolve a configuration identifier.
    pub fn lookup(id: &str) -> Option<Self> {
        TEMPLATES.iter().find(|t| t.id == id).map(|t| t.kind)
    }

    /// Configuration identifier; also the macro name.
    pub fn as_str(self) -> &'static str {
        self.template().id
    }

    /// Decoration types available on a platform, in registry order.
    pub fn supported_on(platform: PlatformModel) -> impl Iterator<Item = Self> {
        PLACEMENTS
            .iter()
            .filter(move |p| p.platform == platform)
            .map(|p| p.kind)
    }

    fn template(self) -> &'static DecorationTemplate {
        &TEMPLATES[self as usize]
    }
}

/// Resolve the template reference for an enabled decoration on `platform`.
pub fn describe_decoration(
    platform: PlatformModel,
    decoration: &Decoration,
) -> Result<Descriptor, UnsupportedEntityError> {
    debug_assert!(decoration.enabled, "disabled decorations are filtered by the caller");

    let unsupported = || UnsupportedEntityError::Decoration {
        platform: platform.as_str().to_string(),
        decoration: decoration.kind.clone(),
    };

    let kind = DecorationKind::lookup(&decoration.kind).ok_or_else(unsupported)?;
    let template = kind.template();

    let placement = PLACEMENTS
        .iter()
        .find(|p| p.platform == platform && p.kind == kind)
        .ok_or_else(unsupported)?;

    let mut parameters: MacroParams = placement.parameters.iter().copied().collect();
    parameters.overlay(&decoration.parameters);

    Ok(Descriptor {
        package: PLATFORM_PACKAGE,
        file: template.file,
        path: DECORATIONS_PATH,
        macro_name: template.id,
        parameters,
        origin: None,
    })
}
