//! Turning user content into encoded data segments.

use core::fmt;
use core::str::FromStr;

use crate::bitbuffer::BitBuffer;
use crate::consts::{self, ALPHANUMERIC_CHARS, ECI_OVERHEAD, STRUCTURED_APPEND_OVERHEAD};
use crate::encoding::TextEncoding;
use crate::error::{QrError, Result};
use crate::version::Version;

/// Describes how a segment's data bits are interpreted.
///
/// The derived ordering ranks the modes by the range of data they accept,
/// a mode may be replaced by any greater one (except that Kanji and Hanzi
/// only accept double byte characters of their character set).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Mode {
    Numeric,
    Alphanumeric,
    Byte,
    Kanji,
    Hanzi,
}

impl Mode {
    pub const ALL: [Mode; 5] = [Mode::Numeric, Mode::Alphanumeric, Mode::Byte, Mode::Kanji, Mode::Hanzi];

    /// Returns the 4-bit mode indicator used by QR Codes.
    pub(crate) fn indicator(self) -> u32 {
        match self {
            Mode::Numeric => 0x1,
            Mode::Alphanumeric => 0x2,
            Mode::Byte => 0x4,
            Mode::Kanji => 0x8,
            Mode::Hanzi => 0xD,
        }
    }

    /// Returns the mode indicator used by Micro QR Codes, `None` for Hanzi.
    pub(crate) fn micro_indicator(self) -> Option<u32> {
        match self {
            Mode::Numeric => Some(0),
            Mode::Alphanumeric => Some(1),
            Mode::Byte => Some(2),
            Mode::Kanji => Some(3),
            Mode::Hanzi => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Mode::Numeric => "numeric",
            Mode::Alphanumeric => "alphanumeric",
            Mode::Byte => "byte",
            Mode::Kanji => "kanji",
            Mode::Hanzi => "hanzi",
        }
    }

    /// Returns the smallest version which supports this mode.
    pub fn min_version(self) -> Version {
        match self {
            Mode::Numeric => Version::M1,
            Mode::Alphanumeric => Version::M2,
            Mode::Byte | Mode::Kanji => Version::M3,
            Mode::Hanzi => Version::MIN,
        }
    }

    pub fn is_supported_by(self, version: Version) -> bool {
        consts::char_count_bits(self, version).is_some()
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Mode {
    type Err = QrError;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim().to_ascii_lowercase();
        Mode::ALL
            .into_iter()
            .find(|mode| mode.name() == name)
            .ok_or_else(|| {
                QrError::Mode(format!(
                    "illegal mode \"{}\". Supported values: numeric, alphanumeric, byte, kanji, hanzi",
                    s
                ))
            })
    }
}

/// A single piece of user data.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Data {
    Text(String),
    /// Raw bytes, always written as they are.
    Bytes(Vec<u8>),
    /// An integer, encoded through its decimal representation.
    Integer(i64),
}

impl From<&str> for Data {
    fn from(text: &str) -> Self {
        Data::Text(text.to_owned())
    }
}

impl From<String> for Data {
    fn from(text: String) -> Self {
        Data::Text(text)
    }
}

impl From<Vec<u8>> for Data {
    fn from(bytes: Vec<u8>) -> Self {
        Data::Bytes(bytes)
    }
}

impl From<&[u8]> for Data {
    fn from(bytes: &[u8]) -> Self {
        Data::Bytes(bytes.to_vec())
    }
}

impl From<i64> for Data {
    fn from(n: i64) -> Self {
        Data::Integer(n)
    }
}

impl From<i32> for Data {
    fn from(n: i32) -> Self {
        Data::Integer(i64::from(n))
    }
}

impl From<u32> for Data {
    fn from(n: u32) -> Self {
        Data::Integer(i64::from(n))
    }
}

/// One item of mixed content, optionally with its own mode and encoding.
///
/// A missing mode or encoding falls back to the one of the whole request.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Part {
    pub data: Data,
    pub mode: Option<Mode>,
    pub encoding: Option<TextEncoding>,
}

impl Part {
    pub fn new(data: impl Into<Data>) -> Self {
        Self {
            data: data.into(),
            mode: None,
            encoding: None,
        }
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = Some(mode);
        self
    }

    pub fn with_encoding(mut self, encoding: TextEncoding) -> Self {
        self.encoding = Some(encoding);
        self
    }
}

/// The content of a symbol: a single datum, or a list of parts which are
/// encoded as consecutive segments.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Content {
    Single(Data),
    Parts(Vec<Part>),
}

macro_rules! content_from {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Content {
                fn from(data: $ty) -> Self {
                    Content::Single(data.into())
                }
            }
        )*
    };
}

content_from!(Data, &str, String, Vec<u8>, &[u8], i64, i32, u32);

impl From<Vec<Part>> for Content {
    fn from(parts: Vec<Part>) -> Self {
        Content::Parts(parts)
    }
}

/// An encoded data segment: the data bits plus what is needed to write the
/// segment header.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Segment {
    pub(crate) bits: BitBuffer,
    pub(crate) char_count: usize,
    pub(crate) mode: Mode,
    pub(crate) encoding: Option<TextEncoding>,
}

impl Segment {
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Number of characters; bytes in byte mode, double byte characters in
    /// Kanji and Hanzi mode.
    pub fn char_count(&self) -> usize {
        self.char_count
    }

    /// The character set of a byte mode segment.
    pub fn encoding(&self) -> Option<TextEncoding> {
        self.encoding
    }

    pub fn bits(&self) -> &BitBuffer {
        &self.bits
    }

    /// Returns whether the segment needs an ECI header when ECI is enabled.
    pub(crate) fn needs_eci(&self) -> bool {
        self.mode == Mode::Byte && self.encoding.map_or(false, |e| e != TextEncoding::Latin1)
    }
}

/// An ordered list of segments. Adjacent segments with the same mode and
/// encoding are merged on insertion.
#[derive(Clone, Default, PartialEq, Eq, Debug)]
pub struct Segments {
    segments: Vec<Segment>,
    bit_length: usize,
}

impl Segments {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, segment: Segment) {
        self.bit_length += segment.bits.len();
        if let Some(prev) = self.segments.last_mut() {
            if prev.mode == segment.mode && prev.encoding == segment.encoding {
                prev.bits.extend(&segment.bits);
                prev.char_count += segment.char_count;
                return;
            }
        }
        self.segments.push(segment);
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Segment> + '_ {
        self.segments.iter()
    }

    pub fn modes(&self) -> impl Iterator<Item = Mode> + '_ {
        self.segments.iter().map(|s| s.mode)
    }

    /// Sum of the data bits of all segments, without any header.
    pub fn bit_length(&self) -> usize {
        self.bit_length
    }

    /// Returns the number of bits the segments occupy in the given version,
    /// including mode indicators, character count indicators and optional
    /// ECI and Structured Append headers.
    ///
    /// `None` means the version cannot represent the segments, either since
    /// it lacks a mode or since a character count exceeds its indicator.
    pub fn bit_length_with_overhead(&self, version: Version, eci: bool, is_sa: bool) -> Option<usize> {
        let mode_bits = if version.is_micro() { version.index() } else { 4 };
        let mut total = self.bit_length;
        if is_sa {
            total += STRUCTURED_APPEND_OVERHEAD;
        }
        for segment in &self.segments {
            let cci = consts::char_count_bits(segment.mode, version)?;
            if segment.char_count >> cci != 0 {
                return None;
            }
            total += mode_bits + usize::from(cci);
            if segment.mode == Mode::Hanzi {
                total += 4;
            }
            if eci && segment.needs_eci() {
                total += ECI_OVERHEAD;
            }
        }
        Some(total)
    }
}

impl<'a> IntoIterator for &'a Segments {
    type Item = &'a Segment;
    type IntoIter = core::slice::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

/// Creates the segments for `content`.
///
/// `mode` and `encoding` apply to the whole content; parts of mixed content
/// may override them.
pub fn prepare_data(content: &Content, mode: Option<Mode>, encoding: Option<TextEncoding>) -> Result<Segments> {
    let mut segments = Segments::new();
    match content {
        Content::Single(data) => segments.push(make_segment(data, mode, encoding)?),
        Content::Parts(parts) => {
            if parts.is_empty() {
                return Err(QrError::InvalidArgument("the content must not be an empty list".into()));
            }
            for part in parts {
                segments.push(make_segment(
                    &part.data,
                    part.mode.or(mode),
                    part.encoding.or(encoding),
                )?);
            }
        }
    }
    Ok(segments)
}

/// Converts `data` into bytes and reports the character set used.
///
/// Text without an explicit encoding is tried as ISO/IEC 8859-1, then as
/// Shift JIS and finally as UTF-8. Hanzi text is always GB2312.
pub(crate) fn data_to_bytes(
    data: &Data,
    encoding: Option<TextEncoding>,
    hanzi: bool,
) -> Result<(Vec<u8>, TextEncoding)> {
    let text = match data {
        Data::Bytes(bytes) => return Ok((bytes.clone(), encoding.unwrap_or(TextEncoding::Latin1))),
        Data::Text(text) => text.clone(),
        Data::Integer(n) => n.to_string(),
    };
    if hanzi {
        return Ok((TextEncoding::Gb2312.encode(&text)?, TextEncoding::Gb2312));
    }
    if let Some(encoding) = encoding {
        return Ok((encoding.encode(&text)?, encoding));
    }
    let fallbacks = [TextEncoding::Latin1, TextEncoding::ShiftJis];
    for encoding in fallbacks {
        if let Ok(bytes) = encoding.encode(&text) {
            return Ok((bytes, encoding));
        }
    }
    Ok((text.into_bytes(), TextEncoding::Utf8))
}

/// Creates a single segment, guessing the mode if none is given.
pub fn make_segment(data: &Data, mode: Option<Mode>, encoding: Option<TextEncoding>) -> Result<Segment> {
    let (bytes, encoding) = data_to_bytes(data, encoding, mode == Some(Mode::Hanzi))?;
    // A requested byte mode is kept even if the data look like Kanji
    let guessed = if mode == Some(Mode::Byte) { Mode::Byte } else { find_mode(&bytes) };
    let mode = match mode {
        Some(mode) if mode < guessed => {
            return Err(QrError::Mode(format!(
                "the provided mode \"{}\" is not applicable for {:?}. Proposal: {}",
                mode,
                String::from_utf8_lossy(&bytes),
                guessed
            )))
        }
        Some(mode) => mode,
        None => guessed,
    };
    let mut bits = BitBuffer::with_capacity(bytes.len() * 8);
    match mode {
        Mode::Numeric => {
            for chunk in bytes.chunks(3) {
                let value = chunk.iter().fold(0, |acc, &b| acc * 10 + u32::from(b - b'0'));
                bits.append_bits(value, chunk.len() as u8 * 3 + 1);
            }
        }
        Mode::Alphanumeric => {
            for chunk in bytes.chunks(2) {
                match *chunk {
                    [a, b] => bits.append_bits(alphanumeric_value(a)? * 45 + alphanumeric_value(b)?, 11),
                    [a] => bits.append_bits(alphanumeric_value(a)?, 6),
                    _ => {}
                }
            }
        }
        Mode::Byte => bits.append_bytes(&bytes),
        Mode::Kanji | Mode::Hanzi => {
            let kanji = mode == Mode::Kanji;
            if !(if kanji { is_kanji(&bytes) } else { is_hanzi(&bytes) }) {
                return Err(QrError::Mode(format!(
                    "the provided data cannot be encoded in {} mode",
                    mode
                )));
            }
            for pair in bytes.chunks_exact(2) {
                let code = (u32::from(pair[0]) << 8) | u32::from(pair[1]);
                bits.append_bits(if kanji { pack_kanji(code) } else { pack_hanzi(code) }, 13);
            }
        }
    }
    let char_count = match mode {
        Mode::Kanji | Mode::Hanzi => bytes.len() / 2,
        _ => bytes.len(),
    };
    Ok(Segment {
        bits,
        char_count,
        mode,
        encoding: (mode == Mode::Byte).then_some(encoding),
    })
}

fn alphanumeric_value(b: u8) -> Result<u32> {
    ALPHANUMERIC_CHARS
        .iter()
        .position(|&c| c == b)
        .map(|pos| pos as u32)
        .ok_or_else(|| QrError::Mode(format!("{:?} is not an alphanumeric character", char::from(b))))
}

fn pack_kanji(code: u32) -> u32 {
    let diff = if code <= 0x9FFC { code - 0x8140 } else { code - 0xC140 };
    (diff >> 8) * 0xC0 + (diff & 0xFF)
}

fn pack_hanzi(code: u32) -> u32 {
    let diff = if code <= 0xAAFE { code - 0xA1A1 } else { code - 0xA6A1 };
    (diff >> 8) * 0x60 + (diff & 0xFF)
}

/// Returns the most compact mode for the bytes.
pub fn find_mode(data: &[u8]) -> Mode {
    if is_numeric(data) {
        Mode::Numeric
    } else if is_alphanumeric(data) {
        Mode::Alphanumeric
    } else if is_kanji(data) {
        Mode::Kanji
    } else {
        Mode::Byte
    }
}

pub fn is_numeric(data: &[u8]) -> bool {
    !data.is_empty() && data.iter().all(u8::is_ascii_digit)
}

pub fn is_alphanumeric(data: &[u8]) -> bool {
    !data.is_empty() && data.iter().all(|b| ALPHANUMERIC_CHARS.contains(b))
}

/// Returns whether the bytes are a sequence of Shift JIS double byte
/// characters in the ranges 0x8140–0x9FFC and 0xE040–0xEBBF.
pub fn is_kanji(data: &[u8]) -> bool {
    !data.is_empty()
        && data.len() % 2 == 0
        && data.chunks_exact(2).all(|pair| {
            let code = u16::from_be_bytes([pair[0], pair[1]]);
            (0x8140..=0x9FFC).contains(&code) || (0xE040..=0xEBBF).contains(&code)
        })
}

/// Returns whether the bytes are a sequence of GB2312 double byte
/// characters in the ranges 0xA1A1–0xAAFE and 0xB0A1–0xFAFE.
pub fn is_hanzi(data: &[u8]) -> bool {
    !data.is_empty()
        && data.len() % 2 == 0
        && data.chunks_exact(2).all(|pair| {
            let code = u16::from_be_bytes([pair[0], pair[1]]);
            pair[1] >= 0xA1
                && pair[1] != 0xFF
                && ((0xA1A1..=0xAAFE).contains(&code) || (0xB0A1..=0xFAFE).contains(&code))
        })
}
