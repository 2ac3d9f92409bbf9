//! Versions, error correction levels and masks, plus the search for the
//! smallest version which holds a sequence of segments.

use core::fmt;
use core::str::FromStr;

use tracing::debug;

use crate::consts;
use crate::error::{DataOverflow, QrError, Result};
use crate::segment::Segments;

/// A QR Code version (1–40) or a Micro QR Code version (M1–M4).
///
/// Micro versions are stored as the values -3 (M1) to 0 (M4), therefore the
/// derived ordering ranks every Micro QR Code below QR Code version 1.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Version(i8);

impl Version {
    pub const M1: Version = Version(-3);
    pub const M2: Version = Version(-2);
    pub const M3: Version = Version(-1);
    pub const M4: Version = Version(0);

    /// The smallest QR Code version.
    pub const MIN: Version = Version(1);

    /// The largest QR Code version.
    pub const MAX: Version = Version(40);

    /// Creates a QR Code version from a number in the range [1, 40].
    pub fn new(ver: u8) -> Result<Self> {
        if (1..=40).contains(&ver) {
            Ok(Self(ver as i8))
        } else {
            Err(unsupported_version(&ver.to_string()))
        }
    }

    /// Returns the signed value: -3 to 0 for M1 to M4, 1 to 40 otherwise.
    pub const fn value(self) -> i8 {
        self.0
    }

    pub const fn is_micro(self) -> bool {
        self.0 < 1
    }

    /// Returns the width and height of the symbol, in modules.
    pub const fn size(self) -> usize {
        if self.is_micro() {
            (self.0 + 4) as usize * 2 + 9
        } else {
            self.0 as usize * 4 + 17
        }
    }

    /// Iterates all versions from `min` to `max` (inclusive), in standard order.
    pub fn range(min: Version, max: Version) -> impl Iterator<Item = Version> {
        (min.0..=max.0).map(Version)
    }

    pub(crate) const fn index(self) -> usize {
        (self.0 + 3) as usize
    }

    /// Returns whether this version provides the given error correction level.
    ///
    /// M1 only supports `None`, all other versions require a level.
    pub fn supports_error(self, error: Option<ErrorLevel>) -> bool {
        consts::symbol_capacity(self, error).is_some()
    }
}

fn unsupported_version(token: &str) -> QrError {
    QrError::Version(format!(
        "unsupported version \"{}\". Supported: M1, M2, M3, M4 and 1 .. 40",
        token
    ))
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_micro() {
            write!(f, "M{}", self.0 + 4)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

impl FromStr for Version {
    type Err = QrError;

    fn from_str(s: &str) -> Result<Self> {
        let token = s.trim();
        match token.to_ascii_uppercase().as_str() {
            "M1" => Ok(Version::M1),
            "M2" => Ok(Version::M2),
            "M3" => Ok(Version::M3),
            "M4" => Ok(Version::M4),
            _ => token
                .parse::<u8>()
                .ok()
                .and_then(|v| Version::new(v).ok())
                .ok_or_else(|| unsupported_version(token)),
        }
    }
}

/// Error correction level.
///
/// The derived ordering runs from the weakest (`L`) to the strongest (`H`) level.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum ErrorLevel {
    /// Tolerates ~7% erroneous codewords.
    L,
    /// Tolerates ~15% erroneous codewords.
    M,
    /// Tolerates ~25% erroneous codewords.
    Q,
    /// Tolerates ~30% erroneous codewords.
    H,
}

impl ErrorLevel {
    pub const ALL: [ErrorLevel; 4] = [ErrorLevel::L, ErrorLevel::M, ErrorLevel::Q, ErrorLevel::H];

    pub fn name(self) -> &'static str {
        match self {
            ErrorLevel::L => "L",
            ErrorLevel::M => "M",
            ErrorLevel::Q => "Q",
            ErrorLevel::H => "H",
        }
    }

    /// Returns the 2-bit indicator used by the QR Code format information.
    pub(crate) fn format_bits(self) -> usize {
        match self {
            ErrorLevel::L => 1,
            ErrorLevel::M => 0,
            ErrorLevel::Q => 3,
            ErrorLevel::H => 2,
        }
    }
}

impl fmt::Display for ErrorLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ErrorLevel {
    type Err = QrError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "L" => Ok(ErrorLevel::L),
            "M" => Ok(ErrorLevel::M),
            "Q" => Ok(ErrorLevel::Q),
            "H" => Ok(ErrorLevel::H),
            _ => Err(QrError::ErrorLevel(format!(
                "illegal error correction level \"{}\". Supported values: L, M, Q, H",
                s
            ))),
        }
    }
}

/// A data mask pattern, 0–7 for QR Codes and 0–3 for Micro QR Codes.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Mask(u8);

impl Mask {
    /// Validates the mask against the symbol family.
    pub fn new(mask: u8, is_micro: bool) -> Result<Self> {
        let count = if is_micro { 4 } else { 8 };
        if mask < count {
            Ok(Self(mask))
        } else if is_micro {
            Err(QrError::Mask(format!(
                "invalid data mask \"{}\" for Micro QR Code. Must be in range 0 .. 3",
                mask
            )))
        } else {
            Err(QrError::Mask(format!(
                "invalid data mask \"{}\". Must be in range 0 .. 7",
                mask
            )))
        }
    }

    pub(crate) const fn from_index(mask: u8) -> Self {
        Self(mask)
    }

    /// Returns the pattern number.
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Mask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Parses a user supplied mask token such as `"3"`.
pub fn parse_mask(token: &str) -> Result<u8> {
    token.trim().parse::<u8>().map_err(|_| {
        QrError::Mask(format!(
            "invalid data mask \"{}\". Must be an integer or a string which represents an integer value",
            token
        ))
    })
}

/// Finds the smallest version which holds the segments.
///
/// `micro` restricts the search to Micro QR Codes (`Some(true)`), to QR Codes
/// (`Some(false)`) or allows both. Without an explicit error level, M1 is
/// tried without error correction and every other version with level L.
pub fn find_version(
    segments: &Segments,
    error: Option<ErrorLevel>,
    eci: bool,
    micro: Option<bool>,
    is_sa: bool,
) -> Result<Version> {
    // ECI headers exist for QR Codes only
    let needs_eci = eci && segments.iter().any(|segment| segment.needs_eci());
    let micro = match micro {
        Some(true) if needs_eci => {
            return Err(QrError::Version("Micro QR Codes do not support ECI".into()))
        }
        _ if needs_eci => Some(false),
        micro => micro,
    };
    if micro == Some(true) {
        if let Some(mode) = segments.modes().find(|mode| !mode.is_supported_by(Version::M4)) {
            return Err(QrError::Mode(format!(
                "mode \"{}\" is not available in Micro QR Codes",
                mode
            )));
        }
    }
    let max = if micro == Some(true) { Version::M4 } else { Version::MAX };
    let mut min = if micro == Some(false) { Version::MIN } else { Version::M1 };
    if min.is_micro() {
        min = segments
            .modes()
            .map(|mode| mode.min_version())
            .max()
            .unwrap_or(Version::M1);
        if error.is_some() {
            min = min.max(Version::M2);
        }
    }
    for version in Version::range(min, max) {
        let level = if version == Version::M1 {
            error
        } else {
            error.or(Some(ErrorLevel::L))
        };
        let capacity = match consts::symbol_capacity(version, level) {
            Some(capacity) => capacity,
            None => continue,
        };
        if let Some(bits) = segments.bit_length_with_overhead(version, eci, is_sa) {
            if bits <= capacity {
                debug!(version = %version, bits, capacity, "found version");
                return Ok(version);
            }
        }
    }
    let kind = match micro {
        Some(true) => "Micro QR Code",
        Some(false) => "QR Code",
        None => "(Micro) QR Code",
    };
    Err(DataOverflow::NoVersion { kind }.into())
}
