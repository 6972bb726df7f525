//! `descgen --list-supported` — registered platforms, decorations and mounts.

use anyhow::Result;
use descgen_core::{DecorationKind, MountModel, PlatformModel};

/// Print the registries.
pub fn run() -> Result<()> {
    print!("{}", render());
    Ok(())
}

fn render() -> String {
    let mut out = String::from("Platforms:\n");
    for platform in PlatformModel::all() {
        let decorations: Vec<_> = DecorationKind::supported_on(platform)
            .map(|d| d.as_str())
            .collect();
        let decorations = if decorations.is_empty() {
            "-".to_string()
        } else {
            decorations.join(", ")
        };
        out.push_str(&format!(
            "  {:<8} {:<12} decorations: {decorations}\n",
            platform.as_str(),
            platform.display_name()
        ));
    }
    out.push_str("\nMounts:\n");
    for mount in MountModel::all() {
        out.push_str(&format!("  {}\n", mount.as_str()));
    }
    out
}
