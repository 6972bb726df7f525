//! Generation orchestrator.
//!
//! Emits the description in four fixed stages: common macros, platform,
//! decorations, mounts. The sink is closed only after every stage succeeds, so
//! an unsupported entity leaves the output unfinalized.

use descgen_config::RobotConfig;
use tracing::{debug, info};

use crate::descriptor::{
    describe_decoration, describe_mount, describe_platform, Descriptor, PlatformModel,
    PLATFORM_PACKAGE,
};
use crate::error::GenerateError;
use crate::sink::{Block, OutputSink};

/// Shared macros included before anything else.
pub const COMMON_FILE: &str = "common";
pub const COMMON_PATH: &str = "urdf/";

/// Counts from a completed run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerationSummary {
    pub decorations: usize,
    pub skipped_decorations: usize,
    pub mounts: usize,
}

/// Output of a successful generation run.
pub struct GenerateOutput<S> {
    /// The closed sink.
    pub sink: S,
    pub summary: GenerationSummary,
}

/// Drives one generation run over a configuration.
///
/// `generate` consumes the generator, so a sink can never be written twice.
pub struct Generator<'a, S: OutputSink> {
    config: &'a RobotConfig,
    sink: S,
    summary: GenerationSummary,
}

impl<'a, S: OutputSink> Generator<'a, S> {
    pub fn new(config: &'a RobotConfig, sink: S) -> Self {
        Self {
            config,
            sink,
            summary: GenerationSummary::default(),
        }
    }

    /// Run all stages and close the sink.
    pub fn generate(mut self) -> Result<GenerateOutput<S>, GenerateError> {
        info!(serial = %self.config.serial_number, "generating description");

        // Stage 1: Common macros
        self.sink
            .write_include(PLATFORM_PACKAGE, COMMON_FILE, COMMON_PATH)?;

        // Stage 2: Platform
        let platform = self.generate_platform()?;
        self.sink.write_blank_line()?;

        // Stage 3: Decorations
        self.generate_decorations(platform)?;
        self.sink.write_blank_line()?;

        // Stage 4: Mounts
        self.generate_mounts()?;
        self.sink.write_blank_line()?;

        self.sink.close()?;

        info!(
            decorations = self.summary.decorations,
            skipped = self.summary.skipped_decorations,
            mounts = self.summary.mounts,
            "description generated"
        );
        Ok(GenerateOutput {
            sink: self.sink,
            summary: self.summary,
        })
    }

    fn generate_platform(&mut self) -> Result<PlatformModel, GenerateError> {
        let config = self.config;
        self.sink.write_comment("Platform")?;
        let (platform, descriptor) = describe_platform(&config.platform.model)?;
        debug!(model = platform.as_str(), "platform");
        self.write_entity(&descriptor)?;
        Ok(platform)
    }

    fn generate_decorations(&mut self, platform: PlatformModel) -> Result<(), GenerateError> {
        let config = self.config;
        self.sink.write_comment("Decorations")?;
        self.sink.write_blank_line()?;
        for decoration in config.enabled_decorations() {
            let descriptor = describe_decoration(platform, decoration)?;
            debug!(decoration = %decoration.kind, file = descriptor.file, "decoration");
            self.write_entity(&descriptor)?;
            self.summary.decorations += 1;
        }
        let skipped = config.platform.decorations.len() - self.summary.decorations;
        if skipped > 0 {
            debug!(skipped, "skipped disabled decorations");
        }
        self.summary.skipped_decorations = skipped;
        Ok(())
    }

    fn generate_mounts(&mut self) -> Result<(), GenerateError> {
        let config = self.config;
        self.sink.write_comment("Mounts")?;
        self.sink.write_blank_line()?;
        for mount in &config.mounts {
            self.sink.write_comment(&mount.name)?;
            let descriptor = describe_mount(mount)?;
            debug!(mount = %mount.name, model = descriptor.macro_name, "mount");
            self.write_entity(&descriptor)?;
            self.sink.write_blank_line()?;
            self.summary.mounts += 1;
        }
        Ok(())
    }

    /// Include the descriptor's template and call its macro.
    fn write_entity(&mut self, descriptor: &Descriptor) -> Result<(), GenerateError> {
        self.sink
            .write_include(descriptor.package, descriptor.file, descriptor.path)?;
        let blocks: Vec<Block> = descriptor.origin.map(Block::Origin).into_iter().collect();
        self.sink
            .write_macro(descriptor.macro_name, &descriptor.parameters, &blocks)?;
        Ok(())
    }
}

/// Generate a configuration into `sink`, returning the closed sink.
pub fn generate<S: OutputSink>(
    config: &RobotConfig,
    sink: S,
) -> Result<GenerateOutput<S>, GenerateError> {
    Generator::new(config, sink).generate()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::MacroParams;
    use crate::error::{SinkError, UnsupportedEntityError};
    use crate::origin::Origin;
    use crate::sink::{Directive, Document};
    use descgen_config::{Decoration, Mount};

    fn include(package: &str, file: &str, path: &str) -> Directive {
        Directive::Include {
            package: package.into(),
            file: file.into(),
            path: path.into(),
        }
    }

    fn comment(text: &str) -> Directive {
        Directive::Comment(text.into())
    }

    fn husky() -> RobotConfig {
        let mut config = RobotConfig::new("a200-0001", "a200");
        config.platform.decorations = vec![
            Decoration::new("front_bumper", true),
            Decoration::new("rear_bumper", false),
            Decoration::new("top_plate", true),
        ];
        config.mounts = vec![
            Mount::new("lidar", "fath_pivot").with_pose([0.2, 0.0, 0.3], [0.0; 3]),
            Mount::new("ptu", "flir_ptu"),
            Mount::new("camera_bracket", "bracket").with_parent("top_plate_link"),
        ];
        config
    }

    #[test]
    fn end_to_end_sequence() {
        let mut config = RobotConfig::new("a200-0001", "a200");
        config.platform.decorations = vec![Decoration::new("front_bumper", true)];
        config.mounts =
            vec![Mount::new("lidar", "fath_pivot").with_pose([0.2, 0.0, 0.3], [0.0; 3])];

        let doc = generate(&config, Document::new()).unwrap().sink;
        assert!(doc.is_closed());

        let significant: Vec<_> = doc
            .directives()
            .iter()
            .filter(|d| **d != Directive::BlankLine)
            .cloned()
            .collect();

        let expected = vec![
            include("clearpath_platform_description", "common", "urdf/"),
            comment("Platform"),
            include("clearpath_platform_description", "a200", "urdf/a200/"),
            Directive::Macro {
                name: "a200".into(),
                parameters: MacroParams::new(),
                blocks: vec![],
            },
            comment("Decorations"),
            include("clearpath_platform_description", "bumper", "urdf/decorations/"),
            Directive::Macro {
                name: "front_bumper".into(),
                parameters: [
                    ("name", "front_bumper"),
                    ("parent_link", "front_bumper_mount"),
                    ("model", "default"),
                    ("extension", "0.0"),
                ]
                .into_iter()
                .collect(),
                blocks: vec![],
            },
            comment("Mounts"),
            comment("lidar"),
            include("clearpath_mounts_description", "fath_pivot", "urdf/"),
            Directive::Macro {
                name: "fath_pivot".into(),
                parameters: [("name", "lidar"), ("parent_link", "base_link"), ("angle", "0.0")]
                    .into_iter()
                    .collect(),
                blocks: vec![Block::Origin(Origin::new([0.2, 0.0, 0.3], [0.0; 3]))],
            },
        ];
        assert_eq!(significant, expected);
    }

    #[test]
    fn blank_line_layout() {
        let config = RobotConfig::new("a200-0001", "a200");
        let doc = generate(&config, Document::new()).unwrap().sink;
        assert_eq!(
            &doc.directives()[4..],
            &[
                Directive::BlankLine,
                comment("Decorations"),
                Directive::BlankLine,
                Directive::BlankLine,
                comment("Mounts"),
                Directive::BlankLine,
                Directive::BlankLine,
            ]
        );
    }

    #[test]
    fn directive_counts() {
        let config = husky();
        let output = generate(&config, Document::new()).unwrap();
        let doc = output.sink;

        // common + platform + 2 enabled decorations + 3 mounts
        assert_eq!(doc.include_count(), 1 + 1 + 2 + 3);
        assert_eq!(
            doc.macro_names(),
            ["a200", "front_bumper", "top_plate", "fath_pivot", "flir_ptu", "bracket"]
        );
        assert_eq!(
            output.summary,
            GenerationSummary {
                decorations: 2,
                skipped_decorations: 1,
                mounts: 3,
            }
        );
    }

    #[test]
    fn disabling_a_decoration_removes_exactly_its_directives() {
        let config = husky();
        let mut toggled = config.clone();
        toggled.platform.decorations[2].enabled = false;

        let before = generate(&config, Document::new()).unwrap().sink;
        let after = generate(&toggled, Document::new()).unwrap().sink;

        assert_eq!(before.directives().len(), after.directives().len() + 2);
        let removed: Vec<_> = before
            .directives()
            .iter()
            .filter(|d| !after.directives().contains(d))
            .collect();
        assert_eq!(removed.len(), 2);
        assert!(matches!(removed[0], Directive::Include { file, .. } if file == "top_plate"));
        assert!(matches!(removed[1], Directive::Macro { name, .. } if name == "top_plate"));
    }

    #[test]
    fn mount_order_is_stable() {
        let mut config = husky();
        config.mounts.reverse();
        let doc = generate(&config, Document::new()).unwrap().sink;

        let labels: Vec<_> = doc
            .directives()
            .iter()
            .filter_map(|d| match d {
                Directive::Comment(c) => Some(c.as_str()),
                _ => None,
            })
            .skip(3)
            .collect();
        assert_eq!(labels, ["camera_bracket", "ptu", "lidar"]);
    }

    #[test]
    fn unset_pose_emits_zero_origin() {
        let config = husky();
        let doc = generate(&config, Document::new()).unwrap().sink;
        let ptu_blocks = doc.directives().iter().find_map(|d| match d {
            Directive::Macro { name, blocks, .. } if name == "flir_ptu" => Some(blocks.clone()),
            _ => None,
        });
        assert_eq!(ptu_blocks, Some(vec![Block::Origin(Origin::ZERO)]));
    }

    #[test]
    fn unsupported_platform_aborts_before_close() {
        let config = RobotConfig::new("gen-0001", "generic");
        let mut doc = Document::new();
        let err = generate(&config, &mut doc).err().unwrap();

        assert!(matches!(
            err,
            GenerateError::Unsupported(UnsupportedEntityError::Platform { ref model })
                if model == "generic"
        ));
        assert!(!doc.is_closed());
        assert_eq!(doc.macro_names().len(), 0);
    }

    #[test]
    fn unsupported_decoration_aborts() {
        let mut config = RobotConfig::new("j100-0001", "j100");
        config.platform.decorations = vec![Decoration::new("top_plate", true)];
        let mut doc = Document::new();
        let err = generate(&config, &mut doc).err().unwrap();
        assert!(matches!(
            err,
            GenerateError::Unsupported(UnsupportedEntityError::Decoration { .. })
        ));
        assert!(!doc.is_closed());
    }

    #[test]
    fn disabled_unsupported_decoration_is_ignored() {
        let mut config = RobotConfig::new("j100-0001", "j100");
        config.platform.decorations = vec![Decoration::new("top_plate", false)];
        assert!(generate(&config, Document::new()).is_ok());
    }

    #[test]
    fn unsupported_mount_aborts_after_earlier_mounts() {
        let mut config = husky();
        config.mounts.push(Mount::new("stand", "sick_stand"));
        let mut doc = Document::new();
        let err = generate(&config, &mut doc).err().unwrap();
        assert!(matches!(
            err,
            GenerateError::Unsupported(UnsupportedEntityError::MountModel { ref mount, .. })
                if mount == "stand"
        ));
        assert!(!doc.is_closed());
    }

    #[test]
    fn closed_sink_is_rejected() {
        let config = husky();
        let mut doc = Document::new();
        doc.close().unwrap();
        let err = generate(&config, &mut doc).err().unwrap();
        assert!(matches!(err, GenerateError::Sink(SinkError::Closed)));
    }

    #[test]
    fn generation_is_deterministic() {
        let config = husky();
        let a = generate(&config, Document::new()).unwrap().sink;
        let b = generate(&config, Document::new()).unwrap().sink;
        assert_eq!(a, b);
    }
}
