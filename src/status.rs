//! Parser for the "show interfaces status" table.
//!
//! Column widths of this table vary between IOS releases and platforms, so the
//! boundaries are measured on the header line of each capture instead of being
//! hardcoded.

use std::sync::LazyLock;

use regex::Regex;

use crate::capture::Capture;
use crate::types::InterfaceRecord;

const HEADER_START: &str = "Port";
const HEADER_END: &str = "Type";

/// Start of the err-disabled report that follows the status table.
const TERMINATOR: &str = "show interfaces status err-disabled";

/// Data rows start the Speed column one character before its header keyword.
const SPEED_COLUMN_SHIFT: usize = 1;

static PROMPT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\S+#$").expect("static regex must compile"));

/// Character offsets of the status table columns, measured on the header line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ColumnLayout {
    name: usize,
    status: usize,
    vlan: usize,
    duplex: usize,
    speed: usize,
    media_type: usize,
}

impl ColumnLayout {
    /// Measure the layout on a header line such as
    /// `Port      Name               Status       Vlan       Duplex  Speed Type`.
    ///
    /// Returns `None` if the line is not a status table header.
    pub(crate) fn from_header(line: &str) -> Option<Self> {
        let trimmed = line.trim();
        if !trimmed.starts_with(HEADER_START) || !trimmed.ends_with(HEADER_END) {
            return None;
        }

        // Each keyword is searched on its own; the header is not guaranteed to
        // list them at fixed distances from each other.
        let column = |keyword: &str| line.find(keyword).map(|idx| line[..idx].chars().count());

        Some(Self {
            name: column("Name")?,
            status: column("Status")?,
            vlan: column("Vlan")?,
            duplex: column("Duplex")?,
            speed: column("Speed")?,
            media_type: column("Type")?,
        })
    }

    /// Split a data row into an interface record for `device_name`.
    pub(crate) fn slice_row(&self, line: &str, device_name: &str) -> InterfaceRecord {
        let chars: Vec<char> = line.chars().collect();
        let speed = self.speed.saturating_sub(SPEED_COLUMN_SHIFT);

        InterfaceRecord {
            device_name: device_name.to_string(),
            interface_id: field(&chars, 0, Some(self.name)),
            description: field(&chars, self.name, Some(self.status)),
            status: field(&chars, self.status, Some(self.vlan)),
            vlan: field(&chars, self.vlan, Some(self.duplex)),
            duplex: field(&chars, self.duplex, Some(speed)),
            speed: field(&chars, speed, Some(self.media_type)),
            media_type: field(&chars, self.media_type, None),
            ..Default::default()
        }
    }
}

/// Trimmed characters `start..end` of a row; out of range parts are empty.
fn field(chars: &[char], start: usize, end: Option<usize>) -> String {
    let end = end.unwrap_or(chars.len()).min(chars.len());
    if start >= end {
        return String::new();
    }

    chars[start..end].iter().collect::<String>().trim().to_string()
}

/// Extract one record per data row of the first status table in the capture.
///
/// Prompt-only lines and repeated header lines are skipped and the scan ends
/// at the err-disabled report. A capture without a status table yields no
/// records.
pub(crate) fn parse_interface_status(
    capture: &Capture,
    device_name: &str,
) -> Vec<InterfaceRecord> {
    let mut lines = capture.lines().iter();

    let Some(layout) = lines.by_ref().find_map(|line| ColumnLayout::from_header(line)) else {
        return Vec::new();
    };

    let mut records = Vec::new();
    for line in lines {
        // Paged or re-issued output repeats the header.
        if PROMPT.is_match(line.trim()) || ColumnLayout::from_header(line).is_some() {
            continue;
        }
        if line.to_lowercase().contains(TERMINATOR) {
            break;
        }

        records.push(layout.slice_row(line, device_name));
    }

    records
}
