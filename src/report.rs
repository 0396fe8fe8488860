use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Context};
use log::{debug, error, info, warn};

use crate::capture::Capture;
use crate::cdp::parse_cdp_neighbors;
use crate::join::join_records;
use crate::status::parse_interface_status;
use crate::types::DeviceReport;
use crate::workbook::{sheet_name, write_sheet};

const CAPTURE_FILE_EXT: &str = "txt";

/// Parse every capture in `input_dir` and store one sheet per device in the
/// workbook at `output`.
///
/// A capture that fails is logged and skipped; the remaining captures are
/// still processed and the failures are reported once the batch is done.
pub(crate) fn report(input_dir: &str, output: &str) -> Result<(), anyhow::Error> {
    let captures = list_captures(Path::new(input_dir))?;
    let output = Path::new(output);

    let mut failed = 0;
    for path in &captures {
        info!("Reading capture {path:?}...");

        if let Err(err) = report_capture(path, output) {
            error!("Processing {path:?} failed: {err:#}");
            failed += 1;
        }
    }

    info!("Processed {} capture(s), {failed} failed", captures.len());

    if failed > 0 {
        bail!("{failed} of {} capture(s) could not be processed", captures.len());
    }

    Ok(())
}

/// Capture files of `input_dir`, sorted by name.
fn list_captures(input_dir: &Path) -> Result<Vec<PathBuf>, anyhow::Error> {
    let mut captures = Vec::new();

    for entry in fs::read_dir(input_dir)? {
        let entry = entry?;
        let path = entry.path();

        if entry.metadata()?.is_dir()
            || path
                .extension()
                .and_then(OsStr::to_str)
                .unwrap_or_default()
                .ne(CAPTURE_FILE_EXT)
        {
            warn!("Ignoring unexpected entry: {path:?}");
            continue;
        }

        captures.push(path);
    }

    captures.sort();

    Ok(captures)
}

fn report_capture(path: &Path, output: &Path) -> Result<(), anyhow::Error> {
    let capture = Capture::read(path)?;
    debug!("Decoded {path:?} as {}", capture.encoding().name());

    let device = analyze(&capture);
    if device.interfaces.is_empty() {
        warn!("No interface status table found in {path:?}");
    }

    let fallback = path
        .file_stem()
        .and_then(OsStr::to_str)
        .ok_or_else(|| anyhow!("Invalid file path"))?;
    let sheet = sheet_name(&device.device_name, fallback);

    write_sheet(output, &sheet, &device.interfaces).context("Storing sheet")?;
    info!("Saved sheet '{sheet}' to {output:?}");

    Ok(())
}

/// Run the status and CDP parsers over a capture and join their results.
pub(crate) fn analyze(capture: &Capture) -> DeviceReport {
    let device_name = capture.hostname();

    let mut interfaces = parse_interface_status(capture, &device_name);
    let neighbors = parse_cdp_neighbors(capture);
    debug!(
        "Device '{device_name}': {} interface(s), {} CDP neighbor(s)",
        interfaces.len(),
        neighbors.len()
    );

    join_records(&mut interfaces, &neighbors, capture);

    DeviceReport {
        device_name,
        interfaces,
        neighbors,
    }
}
