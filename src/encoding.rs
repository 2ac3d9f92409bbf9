//! Character sets for byte, Kanji and Hanzi mode data.
//!
//! Latin-1 and ASCII are handled strictly here because the WHATWG labels used
//! by `encoding_rs` alias both of them to windows-1252.

use core::fmt;
use core::str::FromStr;

use encoding_rs::{Encoding, GBK, REPLACEMENT, SHIFT_JIS, UTF_16BE, UTF_16LE, UTF_8, X_USER_DEFINED};

use crate::error::{QrError, Result};

/// A text encoding used to turn text into bytes.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum TextEncoding {
    /// ISO/IEC 8859-1, the default byte mode encoding.
    Latin1,
    /// 7-bit US-ASCII.
    Ascii,
    /// Shift JIS, used by Kanji mode.
    ShiftJis,
    /// The GB2312 family (encoded as GBK), used by Hanzi mode.
    Gb2312,
    Utf8,
    /// Any other single or multi byte charset known to `encoding_rs`.
    Other(&'static Encoding),
}

const LATIN1_LABELS: &[&str] = &[
    "iso-8859-1", "iso8859-1", "iso_8859-1", "iso88591", "latin1", "latin-1", "l1", "cp819",
];
const ASCII_LABELS: &[&str] = &["ascii", "us-ascii", "iso646-us"];

impl TextEncoding {
    /// Looks up an encoding by one of its common labels, e.g. `"utf-8"` or `"cp1252"`.
    pub fn for_label(label: &str) -> Result<Self> {
        let normalized = label.trim().to_ascii_lowercase();
        if LATIN1_LABELS.contains(&normalized.as_str()) {
            return Ok(TextEncoding::Latin1);
        }
        if ASCII_LABELS.contains(&normalized.as_str()) {
            return Ok(TextEncoding::Ascii);
        }
        let encoding = Encoding::for_label(normalized.as_bytes())
            .ok_or_else(|| QrError::Encoding(format!("unknown encoding \"{}\"", label)))?;
        if encoding == UTF_8 {
            Ok(TextEncoding::Utf8)
        } else if encoding == SHIFT_JIS {
            Ok(TextEncoding::ShiftJis)
        } else if encoding == GBK {
            Ok(TextEncoding::Gb2312)
        } else if encoding == UTF_16BE
            || encoding == UTF_16LE
            || encoding == REPLACEMENT
            || encoding == X_USER_DEFINED
        {
            Err(QrError::Encoding(format!("cannot encode text as \"{}\"", label)))
        } else {
            Ok(TextEncoding::Other(encoding))
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            TextEncoding::Latin1 => "iso-8859-1",
            TextEncoding::Ascii => "ascii",
            TextEncoding::ShiftJis => "shift_jis",
            TextEncoding::Gb2312 => "gb2312",
            TextEncoding::Utf8 => "utf-8",
            TextEncoding::Other(encoding) => encoding.name(),
        }
    }

    /// Encodes `text`, failing if any character is not representable.
    pub fn encode(self, text: &str) -> Result<Vec<u8>> {
        let unencodable = || {
            QrError::Encoding(format!("cannot encode {:?} as \"{}\"", text, self.name()))
        };
        match self {
            TextEncoding::Latin1 => text
                .chars()
                .map(|c| u8::try_from(u32::from(c)).map_err(|_| unencodable()))
                .collect(),
            TextEncoding::Ascii => {
                if text.is_ascii() {
                    Ok(text.as_bytes().to_vec())
                } else {
                    Err(unencodable())
                }
            }
            TextEncoding::Utf8 => Ok(text.as_bytes().to_vec()),
            TextEncoding::ShiftJis => encode_with(SHIFT_JIS, text).ok_or_else(unencodable),
            TextEncoding::Gb2312 => encode_with(GBK, text).ok_or_else(unencodable),
            TextEncoding::Other(encoding) => encode_with(encoding, text).ok_or_else(unencodable),
        }
    }

    /// Returns the ECI assignment number of this encoding.
    pub fn eci_designator(self) -> Result<u8> {
        let designator = match self {
            TextEncoding::Latin1 => Some(3),
            TextEncoding::Ascii => Some(27),
            TextEncoding::ShiftJis => Some(20),
            TextEncoding::Gb2312 => Some(29),
            TextEncoding::Utf8 => Some(26),
            TextEncoding::Other(encoding) => match encoding.name() {
                "ISO-8859-2" => Some(4),
                "ISO-8859-3" => Some(5),
                "ISO-8859-4" => Some(6),
                "ISO-8859-5" => Some(7),
                "ISO-8859-6" => Some(8),
                "ISO-8859-7" => Some(9),
                "ISO-8859-8" | "ISO-8859-8-I" => Some(10),
                "ISO-8859-10" => Some(12),
                "ISO-8859-13" => Some(15),
                "ISO-8859-14" => Some(16),
                "ISO-8859-15" => Some(17),
                "ISO-8859-16" => Some(18),
                "windows-1250" => Some(21),
                "windows-1251" => Some(22),
                "windows-1252" => Some(23),
                "windows-1256" => Some(24),
                "Big5" => Some(28),
                "gb18030" => Some(29),
                "EUC-KR" => Some(30),
                _ => None,
            },
        };
        designator.ok_or_else(|| {
            QrError::Encoding(format!("unknown ECI assignment number for \"{}\"", self.name()))
        })
    }
}

fn encode_with(encoding: &'static Encoding, text: &str) -> Option<Vec<u8>> {
    let (bytes, _, had_errors) = encoding.encode(text);
    (!had_errors).then(|| bytes.into_owned())
}

impl FromStr for TextEncoding {
    type Err = QrError;

    fn from_str(s: &str) -> Result<Self> {
        TextEncoding::for_label(s)
    }
}

impl fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
