//! Conversion between full interface names ("GigabitEthernet1/0/1") as used in
//! `show interfaces` and CDP output, and the abbreviated form ("Gi1/0/1") used
//! by the status table.

/// Known (full, short) prefix pairs. Other interface kinds pass through unchanged.
const PREFIXES: [(&str, &str); 2] = [("GigabitEthernet", "Gi"), ("FastEthernet", "Fa")];

/// Abbreviate a full interface name, e.g. "FastEthernet0/1" -> "Fa0/1".
pub(crate) fn normalize(name: &str) -> String {
    for (full, short) in PREFIXES {
        if let Some(rest) = name.strip_prefix(full) {
            return format!("{short}{rest}");
        }
    }
    name.to_string()
}

/// Expand an abbreviated interface name, e.g. "Gi1/0/1" -> "GigabitEthernet1/0/1".
pub(crate) fn expand(name: &str) -> String {
    for (full, short) in PREFIXES {
        // Already expanded names must not grow a second prefix.
        if name.starts_with(full) {
            return name.to_string();
        }
        if let Some(rest) = name.strip_prefix(short) {
            return format!("{full}{rest}");
        }
    }
    name.to_string()
}
