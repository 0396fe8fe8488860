use std::path::Path;

use anyhow::Context;
use log::info;

use crate::capture::Capture;
use crate::report::analyze;

/// Print what is extracted from a single capture as YAML, without touching any workbook.
pub(crate) fn inspect(capture_path: &str) -> Result<(), anyhow::Error> {
    let yaml = render(Path::new(capture_path))?;
    print!("{yaml}");

    Ok(())
}

fn render(path: &Path) -> Result<String, anyhow::Error> {
    let capture = Capture::read(path)?;
    info!(
        "Inspecting {path:?} ({} lines, {})",
        capture.lines().len(),
        capture.encoding().name()
    );

    let device = analyze(&capture);

    serde_yaml::to_string(&device).context("Serializing records")
}
