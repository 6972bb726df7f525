//! `descgen [CONFIG]` — load a configuration and write its description.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use descgen_config::{load_config, RobotConfig, DEFAULT_CONFIG_PATH};
use descgen_core::{generate, Document};
use descgen_xacro::{XacroFile, XacroWriter};
use tracing::info;

/// Pick the configuration path: an explicit argument must exist, otherwise
/// the default location is used.
pub fn resolve_config_path(arg: Option<&Path>) -> Result<PathBuf> {
    match arg {
        Some(path) if !path.is_file() => {
            bail!("configuration file '{}' does not exist", path.display())
        }
        Some(path) => Ok(path.to_path_buf()),
        None => Ok(PathBuf::from(DEFAULT_CONFIG_PATH)),
    }
}

fn load(config_path: &Path) -> Result<RobotConfig> {
    let config = load_config(config_path)
        .with_context(|| format!("loading configuration {}", config_path.display()))?;
    info!(
        path = %config_path.display(),
        serial = %config.serial_number,
        platform = %config.platform.model,
        "loaded configuration"
    );
    Ok(config)
}

/// Generate `<output_dir>/<serial>.urdf.xacro`, returning its path.
pub fn to_dir(config_path: &Path, output_dir: &Path) -> Result<PathBuf> {
    let config = load(config_path)?;
    let sink = XacroFile::create(output_dir, &config.serial_number)
        .with_context(|| format!("creating output in {}", output_dir.display()))?;
    let output = generate(&config, sink)
        .with_context(|| format!("generating description for {}", config.serial_number))?;
    Ok(output.sink.path().to_path_buf())
}

/// Generate the description onto standard output.
pub fn to_stdout(config_path: &Path) -> Result<()> {
    let stdout = io::stdout();
    to_writer(config_path, stdout.lock())
}

/// Generate in memory and render only once every entity has resolved, so a
/// failed run writes nothing to `out`.
fn to_writer<W: Write>(config_path: &Path, out: W) -> Result<()> {
    let config = load(config_path)?;
    let document = generate(&config, Document::new())
        .with_context(|| format!("generating description for {}", config.serial_number))?
        .sink;
    let mut writer = XacroWriter::new(out, &config.serial_number)?;
    document.replay(&mut writer)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const HUSKY: &str = r#"
serial_number: a200-0001
platform:
  model: a200
  decorations:
    - type: front_bumper
      enabled: true
    - type: top_plate
      enabled: false
mounts:
  - name: lidar_mount
    model: fath_pivot
    xyz: [0.2, 0.0, 0.3]
    rpy: [0.0, 0.0, 0.0]
"#;

    #[test]
    fn explicit_missing_config_is_rejected() {
        let err = resolve_config_path(Some(Path::new("/nonexistent/robot.yaml"))).unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn default_config_path() {
        assert_eq!(
            resolve_config_path(None).unwrap(),
            PathBuf::from("/etc/clearpath/robot.yaml")
        );
    }

    #[test]
    fn generates_named_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("robot.yaml");
        fs::write(&config, HUSKY).unwrap();

        let path = to_dir(&config, dir.path()).unwrap();
        assert_eq!(path, dir.path().join("a200-0001.urdf.xacro"));

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("<xacro:a200/>"));
        assert!(text.contains("<xacro:front_bumper "));
        assert!(!text.contains("top_plate"));
        assert!(text.contains("<!-- lidar_mount -->"));
        assert!(text.contains(r#"<origin xyz="0.2 0.0 0.3" rpy="0.0 0.0 0.0"/>"#));
    }

    #[test]
    fn toml_configuration() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("robot.toml");
        fs::write(
            &config,
            "serial_number = \"j100-0042\"\n[platform]\nmodel = \"j100\"\n",
        )
        .unwrap();

        let path = to_dir(&config, dir.path()).unwrap();
        assert!(fs::read_to_string(path).unwrap().contains("<xacro:j100/>"));
    }

    #[test]
    fn unsupported_platform_reports_and_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("robot.yaml");
        fs::write(&config, "serial_number: gen-0001\nplatform:\n  model: generic\n").unwrap();
        let out = dir.path().join("out");

        let err = to_dir(&config, &out).unwrap_err();
        assert!(format!("{err:#}").contains("unsupported platform model 'generic'"));
        assert!(!out.join("gen-0001.urdf.xacro").exists());
    }

    #[test]
    fn renders_to_writer() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("robot.yaml");
        fs::write(&config, HUSKY).unwrap();

        let mut out = Vec::new();
        to_writer(&config, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("<?xml version=\"1.0\"?>\n<robot name=\"a200-0001\""));
        assert!(text.contains("<xacro:fath_pivot name=\"lidar_mount\""));
        assert!(text.ends_with("</robot>\n"));
    }

    #[test]
    fn failed_run_writes_nothing_to_writer() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("robot.yaml");
        let yaml = format!("{HUSKY}  - name: stand\n    model: sick_stand\n");
        fs::write(&config, yaml).unwrap();

        let mut out = Vec::new();
        let err = to_writer(&config, &mut out).unwrap_err();
        assert!(format!("{err:#}").contains("sick_stand"));
        assert!(out.is_empty());
    }

    #[test]
    fn invalid_configuration_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("robot.yaml");
        fs::write(&config, "serial_number: ''\nplatform:\n  model: a200\n").unwrap();

        let err = to_dir(&config, dir.path()).unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("loading configuration"));
        assert!(msg.contains("serial number is empty"));
    }
}
