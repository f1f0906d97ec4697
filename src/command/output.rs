//! `key=value` step outputs for GitHub Actions

use std::io::Write;
use std::path::Path;

use tracing::debug;

use crate::version::game_version::build_id;

/// Render the output lines for a resolved release.
pub fn render_outputs(version: &str, manifest_id: Option<&str>) -> String {
    let mut lines = format!("version={}\nbuild-id={}\n", version, build_id(version));
    if let Some(manifest_id) = manifest_id.filter(|m| !m.is_empty()) {
        lines.push_str(&format!("manifest-id={}\n", manifest_id));
    }
    lines
}

/// Append the output lines to `path`. Without a path nothing is written.
pub fn append_outputs(
    path: Option<&Path>,
    version: &str,
    manifest_id: Option<&str>,
) -> std::io::Result<()> {
    let Some(path) = path else {
        return Ok(());
    };

    debug!("Writing step outputs to {:?}", path);
    let mut file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;
    file.write_all(render_outputs(version, manifest_id).as_bytes())
}
