//! Mount registry.
//!
//! Mount templates are self-naming: the template file and macro are both the
//! model identifier.

use descgen_config::Mount;

use super::{Descriptor, MacroParams, MOUNTS_PACKAGE};
use crate::error::UnsupportedEntityError;
use crate::origin::Origin;

/// Supported mount models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MountModel {
    FathPivot,
    FlirPtu,
    Bracket,
    Post,
}

struct MountRecord {
    model: MountModel,
    id: &'static str,
    path: &'static str,
    defaults: &'static [(&'static str, &'static str)],
}

/// One row per model, in variant order.
const MOUNTS: &[MountRecord] = &[
    MountRecord {
        model: MountModel::FathPivot,
        id: "fath_pivot",
        path: "urdf/",
        defaults: &[("angle", "0.0")],
    },
    MountRecord {
        model: MountModel::FlirPtu,
        id: "flir_ptu",
        path: "urdf/",
        defaults: &[],
    },
    MountRecord {
        model: MountModel::Bracket,
        id: "bracket",
        path: "urdf/",
        defaults: &[("model", "horizontal"), ("extension", "0")],
    },
    MountRecord {
        model: MountModel::Post,
        id: "post",
        path: "urdf/",
        defaults: &[("model", "single"), ("spacing", "0.09"), ("height", "0.1")],
    },
];

impl MountModel {
    /// Resolve a configuration identifier.
    pub fn lookup(id: &str) -> Option<Self> {
        MOUNTS.iter().find(|r| r.id == id).map(|r| r.model)
    }

    /// All registered mount models, in registry order.
    pub fn all() -> impl Iterator<Item = Self> {
        MOUNTS.iter().map(|r| r.model)
    }

    /// Configuration identifier; also the template file and macro name.
    pub fn as_str(self) -> &'static str {
        self.record().id
    }

    fn record(self) -> &'static MountRecord {
        &MOUNTS[self as usize]
    }
}

/// Resolve the template reference for a mount.
///
/// Arguments are `name` and `parent_link`, then the model's defaults, then the
/// mount's own parameters. The origin is always present.
pub fn describe_mount(mount: &Mount) -> Result<Descriptor, UnsupportedEntityError> {
    let model = MountModel::lookup(&mount.model).ok_or_else(|| UnsupportedEntityError::MountModel {
        mount: mount.name.clone(),
        model: mount.model.clone(),
    })?;
    let record = model.record();

    let mut parameters = MacroParams::new();
    parameters.set("name", mount.name.as_str());
    parameters.set("parent_link", mount.parent.as_str());
    for (name, value) in record.defaults {
        parameters.set(*name, *value);
    }
    parameters.overlay(&mount.parameters);

    Ok(Descriptor {
        package: MOUNTS_PACKAGE,
        file: record.id,
        path: record.path,
        macro_name: record.id,
        parameters,
        origin: Some(Origin::from_pose(mount.xyz, mount.rpy)),
    })
}
