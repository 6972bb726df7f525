//! Generation engine for robot description files.
//!
//! Maps a [`RobotConfig`](descgen_config::RobotConfig) onto an ordered stream
//! of include directives and macro calls:
//! - **Descriptors:** table-driven lookup of the template package, file, path,
//!   macro, and arguments for each platform, decoration, and mount
//! - **Origin:** the pose block attached to mount macro calls
//! - **Sink:** the append-only output contract the generator writes through
//! - **Generator:** the fixed common → platform → decorations → mounts sequence

pub mod descriptor;
pub mod error;
pub mod generator;
pub mod origin;
pub mod sink;

pub use descriptor::{
    describe_decoration, describe_mount, describe_platform, DecorationKind, Descriptor,
    MacroParams, MountModel, PlatformModel, MOUNTS_PACKAGE, PLATFORM_PACKAGE,
};
pub use error::{GenerateError, SinkError, UnsupportedEntityError};
pub use generator::{generate, GenerateOutput, GenerationSummary, Generator};
pub use origin::Origin;
pub use sink::{Block, Directive, Document, OutputSink};
