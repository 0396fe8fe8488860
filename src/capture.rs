use std::fs;
use std::path::Path;

use anyhow::{anyhow, Context};
use encoding_rs::Encoding;

/// Encodings tried, in order, for captures without a byte-order mark.
/// WINDOWS_1252 is also what the "iso-8859-1" label resolves to.
fn fallback_encodings() -> [&'static Encoding; 3] {
    [
        encoding_rs::UTF_8,
        encoding_rs::WINDOWS_1252,
        encoding_rs::UTF_16LE,
    ]
}

const HOSTNAME_MARKER: &str = "hostname";

/// The CLI session transcript of a single device, split into lines.
#[derive(Debug)]
pub struct Capture {
    lines: Vec<String>,
    encoding: &'static Encoding,
}

impl Capture {
    pub(crate) fn read(path: &Path) -> Result<Self, anyhow::Error> {
        let bytes = fs::read(path).context("Reading capture")?;
        let (text, encoding) = decode(&bytes)?;

        Ok(Self::from_text(&text, encoding))
    }

    pub(crate) fn from_text(text: &str, encoding: &'static Encoding) -> Self {
        Self {
            lines: text.lines().map(str::to_string).collect(),
            encoding,
        }
    }

    pub(crate) fn lines(&self) -> &[String] {
        &self.lines
    }

    pub(crate) fn encoding(&self) -> &'static Encoding {
        self.encoding
    }

    /// Device name from the first `hostname <name>` line of the running config.
    pub(crate) fn hostname(&self) -> String {
        self.lines
            .iter()
            .find_map(|line| line.strip_prefix(HOSTNAME_MARKER))
            .map(|rest| rest.trim().to_string())
            .unwrap_or_default()
    }
}

#[cfg(test)]
impl From<&str> for Capture {
    fn from(text: &str) -> Self {
        Self::from_text(text, encoding_rs::UTF_8)
    }
}

/// Decode raw capture bytes, honouring a byte-order mark first and otherwise
/// taking the first fallback encoding that decodes without replacement characters.
fn decode(bytes: &[u8]) -> Result<(String, &'static Encoding), anyhow::Error> {
    if let Some((encoding, bom_len)) = Encoding::for_bom(bytes) {
        return encoding
            .decode_without_bom_handling_and_without_replacement(&bytes[bom_len..])
            .map(|text| (text.into_owned(), encoding))
            .ok_or_else(|| {
                anyhow!(
                    "Capture is not valid {} despite its byte-order mark",
                    encoding.name()
                )
            });
    }

    let candidates = fallback_encodings();

    candidates
        .iter()
        .find_map(|&encoding| {
            encoding
                .decode_without_bom_handling_and_without_replacement(bytes)
                .map(|text| (text.into_owned(), encoding))
        })
        .ok_or_else(|| {
            let tried: Vec<&str> = candidates.iter().map(|e| e.name()).collect();
            anyhow!("Unable to decode capture, tried: {}", tried.join(", "))
        })
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use crate::capture::{decode, Capture};

    #[test]
    fn decode_utf8() -> Result<(), anyhow::Error> {
        let (text, encoding) = decode("hostname SW-Café\n".as_bytes())?;

        assert_eq!(text, "hostname SW-Café\n");
        assert_eq!(encoding, encoding_rs::UTF_8);
        Ok(())
    }

    #[test]
    fn decode_falls_back_to_latin1() -> Result<(), anyhow::Error> {
        // "Café" in ISO-8859-1 is not valid UTF-8.
        let (text, encoding) = decode(b"description Caf\xe9")?;

        assert_eq!(text, "description Café");
        assert_eq!(encoding, encoding_rs::WINDOWS_1252);
        Ok(())
    }

    #[test]
    fn decode_utf16_with_bom() -> Result<(), anyhow::Error> {
        let mut bytes = vec![0xFF, 0xFE];
        for unit in "hostname SW1\r\n".encode_utf16() {
            bytes.extend_from_slice(&unit.to_le_bytes());
        }

        let (text, encoding) = decode(&bytes)?;

        assert_eq!(text, "hostname SW1\r\n");
        assert_eq!(encoding, encoding_rs::UTF_16LE);
        Ok(())
    }

    #[test]
    fn decode_fails_on_broken_bom_payload() {
        // UTF-8 BOM followed by an invalid UTF-8 sequence.
        let error = decode(&[0xEF, 0xBB, 0xBF, 0xC3, 0x28]).unwrap_err();
        assert!(error.to_string().contains("byte-order mark"));
    }

    #[test]
    fn lines_drop_line_endings() {
        let capture = Capture::from("SW1#show clock\r\n*10:00:00 UTC\r\n\r\nSW1#");

        assert_eq!(
            capture.lines(),
            ["SW1#show clock", "*10:00:00 UTC", "", "SW1#"]
        );
    }

    #[test]
    fn hostname_from_first_match() {
        let capture = Capture::from("!\nhostname  CORE-SW01 \n!\nhostname OTHER\n");
        assert_eq!(capture.hostname(), "CORE-SW01");
    }

    #[test]
    fn hostname_requires_line_start() {
        let capture = Capture::from("SW1#show run | include hostname\n ip domain-name x\n");
        assert_eq!(capture.hostname(), "");
    }

    #[test]
    fn read_fails_due_to_missing_file() {
        let error = Capture::read(Path::new("<missing>")).unwrap_err();
        assert!(format!("{error:#}").contains("No such file or directory"))
    }
}
