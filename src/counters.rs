//! Error counter checks on "show interfaces" output.

use std::sync::LazyLock;

use regex::Regex;

use crate::capture::Capture;

/// Input error or CRC counts at or above this value are reported.
pub(crate) const ERROR_THRESHOLD: u64 = 5;

/// Lines starting with one of these open the block of a new interface.
const BLOCK_PREFIXES: [&str; 2] = ["GigabitEthernet", "FastEthernet"];

static INPUT_ERRORS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+)\s+input errors, (\d+)\s+CRC").expect("static regex must compile")
});

/// Lines of the "show interfaces" block of `interface` (full name), header
/// line included. Empty if the interface has no block in the capture.
///
/// Only Ethernet interface headers open a block, so names of other kinds
/// (port channels, VLANs) and the empty name never match.
pub(crate) fn interface_block<'a>(capture: &'a Capture, interface: &str) -> &'a [String] {
    let lines = capture.lines();

    if interface.is_empty() {
        return &[];
    }
    let Some(start) = lines
        .iter()
        .position(|line| is_block_start(line) && line.starts_with(interface))
    else {
        return &[];
    };
    let end = lines[start + 1..]
        .iter()
        .position(|line| is_block_start(line))
        .map_or(lines.len(), |offset| start + 1 + offset);

    &lines[start..end]
}

fn is_block_start(line: &str) -> bool {
    BLOCK_PREFIXES.iter().any(|prefix| line.starts_with(prefix))
}

/// The trimmed counter line of `interface` when its input errors or CRC
/// errors reach `ERROR_THRESHOLD`, otherwise an empty string.
pub(crate) fn error_observation(capture: &Capture, interface: &str) -> String {
    interface_block(capture, interface)
        .iter()
        .filter(|line| line.contains("input errors") && line.contains("CRC"))
        .find(|line| exceeds_threshold(line))
        .map(|line| line.trim().to_string())
        .unwrap_or_default()
}

fn exceeds_threshold(line: &str) -> bool {
    let Some(captures) = INPUT_ERRORS.captures(line) else {
        return false;
    };

    // Counts too large to parse are certainly above the threshold.
    let count = |idx: usize| captures[idx].parse::<u64>().unwrap_or(u64::MAX);

    count(1) >= ERROR_THRESHOLD || count(2) >= ERROR_THRESHOLD
}
