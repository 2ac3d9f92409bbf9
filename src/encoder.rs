//! Encoding content into (Micro) QR Codes and Structured Append sequences.

use tracing::debug;

use crate::codewords::{make_data_codewords, make_final_message, StructuredAppendInfo};
use crate::consts::{self, ECI_OVERHEAD, STRUCTURED_APPEND_OVERHEAD};
use crate::encoding::TextEncoding;
use crate::error::{DataOverflow, QrError, Result};
use crate::mask::find_and_apply_best_mask;
use crate::matrix::Matrix;
use crate::qrcode::{QrCode, QrCodeSequence};
use crate::segment::{data_to_bytes, make_segment, prepare_data, Content, Data, Mode, Segments};
use crate::version::{find_version, ErrorLevel, Mask, Version};

/// Maximum number of symbols in a Structured Append sequence.
const MAX_SEQUENCE_SYMBOLS: usize = 16;

/// Parameters of [`encode`] and [`encode_sequence`].
///
/// The default selects everything automatically and raises the error
/// correction level if the symbol has room for it.
///
/// # Example
///
/// ```rust
/// use isoqr::{encode, EncodeOptions, ErrorLevel};
///
/// let options = EncodeOptions::default().with_error(ErrorLevel::Q).with_micro(false);
/// let qr = encode("HELLO WORLD", &options).unwrap();
/// assert_eq!(qr.designator(), "1-Q");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct EncodeOptions {
    /// Minimum error correction level; `None` means L (no error correction for M1).
    pub error: Option<ErrorLevel>,
    /// Exact version; `None` selects the smallest version which fits.
    pub version: Option<Version>,
    /// Mode of the whole content; `None` guesses the mode.
    pub mode: Option<Mode>,
    /// Data mask pattern; `None` selects the best pattern.
    pub mask: Option<u8>,
    /// Character set of text content; `None` tries ISO/IEC 8859-1, Shift JIS and UTF-8.
    pub encoding: Option<TextEncoding>,
    /// Writes an ECI header in front of byte segments which are not ISO/IEC 8859-1.
    pub eci: bool,
    /// `Some(true)` allows Micro QR Codes only, `Some(false)` QR Codes only.
    pub micro: Option<bool>,
    /// Raises the error correction level as far as the version allows.
    pub boost_error: bool,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            error: None,
            version: None,
            mode: None,
            mask: None,
            encoding: None,
            eci: false,
            micro: None,
            boost_error: true,
        }
    }
}

impl EncodeOptions {
    /// Sets the minimum error correction level. Default: L, or none for M1.
    pub fn with_error(mut self, error: ErrorLevel) -> Self {
        self.error = Some(error);
        self
    }

    /// Requests an exact version. Default: the smallest version which fits.
    pub fn with_version(mut self, version: Version) -> Self {
        self.version = Some(version);
        self
    }

    /// Forces the mode of the whole content. Default: guessed per content.
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = Some(mode);
        self
    }

    /// Forces a data mask pattern. Default: the pattern with the best score.
    pub fn with_mask(mut self, mask: u8) -> Self {
        self.mask = Some(mask);
        self
    }

    /// Sets the character set of text content. Default: ISO/IEC 8859-1, Shift JIS or UTF-8.
    pub fn with_encoding(mut self, encoding: TextEncoding) -> Self {
        self.encoding = Some(encoding);
        self
    }

    /// Enables ECI headers for byte segments which are not ISO/IEC 8859-1. Default: off.
    pub fn with_eci(mut self, eci: bool) -> Self {
        self.eci = eci;
        self
    }

    /// Restricts the symbol to Micro QR Codes (`true`) or QR Codes (`false`). Default: either.
    pub fn with_micro(mut self, micro: bool) -> Self {
        self.micro = Some(micro);
        self
    }

    /// Enables raising the error correction level within the version. Default: on.
    pub fn with_boost_error(mut self, boost_error: bool) -> Self {
        self.boost_error = boost_error;
        self
    }
}

/// Creates a QR Code or Micro QR Code.
///
/// All options are validated before any encoding work starts. Returns a
/// [`DataOverflow`] error if no allowed symbol holds the content.
pub fn encode(content: impl Into<Content>, options: &EncodeOptions) -> Result<QrCode> {
    let content = content.into();
    let micro = options.micro;
    let requested = options.version;
    if let Some(version) = requested {
        match micro {
            Some(false) if version.is_micro() => {
                return Err(QrError::Version(format!(
                    "a Micro QR Code version \"{}\" was provided but micro is false",
                    version
                )))
            }
            Some(true) if !version.is_micro() => {
                return Err(QrError::Version(format!(
                    "a QR Code version \"{}\" was provided but micro is true",
                    version
                )))
            }
            _ => {}
        }
        if let Some(mode) = options.mode {
            if !mode.is_supported_by(version) {
                return Err(QrError::Mode(format!(
                    "mode \"{}\" is not available in version {}",
                    mode, version
                )));
            }
        }
    }
    let is_micro = micro == Some(true) || requested.map_or(false, Version::is_micro);
    let error = options.error;
    if error == Some(ErrorLevel::H) && is_micro {
        return Err(QrError::ErrorLevel(
            "error correction level \"H\" is not available for Micro QR Codes".into(),
        ));
    }
    if let (Some(version), Some(level)) = (requested, error) {
        if !version.supports_error(error) {
            return Err(QrError::ErrorLevel(format!(
                "error correction level \"{}\" is not available in version {}",
                level, version
            )));
        }
    }
    if options.eci && is_micro {
        return Err(QrError::Version("Micro QR Codes do not support ECI".into()));
    }
    let segments = prepare_data(&content, options.mode, options.encoding)?;
    let guessed = find_version(&segments, error, options.eci, micro, false)?;
    let version = match requested {
        Some(version) if guessed > version => {
            return Err(DataOverflow::VersionTooSmall {
                requested: version,
                proposal: guessed,
            }
            .into())
        }
        Some(version) => version,
        None => guessed,
    };
    let error = if version == Version::M1 {
        None
    } else {
        error.or(Some(ErrorLevel::L))
    };
    let mask = options
        .mask
        .map(|mask| Mask::new(mask, version.is_micro()))
        .transpose()?;
    encode_segments(segments, error, version, mask, options.eci, options.boost_error, None)
}

/// Builds the symbol of already validated segments.
pub(crate) fn encode_segments(
    segments: Segments,
    error: Option<ErrorLevel>,
    version: Version,
    mask: Option<Mask>,
    eci: bool,
    boost_error: bool,
    sa_info: Option<&StructuredAppendInfo>,
) -> Result<QrCode> {
    let error = if boost_error {
        boost_error_level(version, error, &segments, eci, sa_info.is_some())
    } else {
        error
    };
    let codewords = make_data_codewords(&segments, version, error, eci, sa_info)?;
    let message = make_final_message(version, error, &codewords);
    let is_micro = version.is_micro();
    let mut matrix = Matrix::new(version);
    matrix.add_finder_patterns(is_micro);
    matrix.add_alignment_patterns(version);
    matrix.add_codewords(&message, version);
    let supplied = mask.is_some();
    let mask = find_and_apply_best_mask(&mut matrix, version, mask);
    matrix.add_format_info(version, error, mask);
    matrix.add_version_info(version);
    debug!(
        version = %version,
        error = error.map_or("-", ErrorLevel::name),
        segments = segments.len(),
        mask = mask.value(),
        mask_supplied = supplied,
        "encoded symbol"
    );
    Ok(QrCode::new(matrix, version, error, mask, segments))
}

/// Returns the highest error correction level whose capacity still holds the
/// segments. Mixed content, level H and M1 are left alone.
pub(crate) fn boost_error_level(
    version: Version,
    error: Option<ErrorLevel>,
    segments: &Segments,
    eci: bool,
    is_sa: bool,
) -> Option<ErrorLevel> {
    let current = match error {
        Some(level) if level != ErrorLevel::H && segments.len() == 1 => level,
        _ => return error,
    };
    let Some(bits) = segments.bit_length_with_overhead(version, eci, is_sa) else {
        return error;
    };
    let mut boosted = current;
    for level in ErrorLevel::ALL.into_iter().filter(|&level| level > current) {
        match consts::symbol_capacity(version, Some(level)) {
            Some(capacity) if capacity >= bits => boosted = level,
            Some(_) => {}
            None => break,
        }
    }
    if boosted != current {
        debug!(version = %version, from = %current, to = %boosted, "boosted error level");
    }
    Some(boosted)
}

/// Creates a sequence of QR Codes in Structured Append mode, spreading the
/// content over up to 16 symbols.
///
/// Either `options.version` or `symbol_count` must be given. Without a
/// symbol count, content which fits into one symbol of the requested version
/// yields a sequence of a single ordinary QR Code. Micro QR Codes are not
/// supported and the content must consist of a single mode.
pub fn encode_sequence(
    content: impl Into<Content>,
    options: &EncodeOptions,
    symbol_count: Option<usize>,
) -> Result<QrCodeSequence> {
    let content = content.into();
    let requested = options.version;
    if let Some(version) = requested {
        if version.is_micro() {
            return Err(QrError::Version(format!(
                "Structured Append does not accept Micro QR Code versions. Provided: \"{}\"",
                version
            )));
        }
    } else if symbol_count.is_none() {
        return Err(QrError::InvalidArgument(
            "please provide a QR Code version or the symbol count".into(),
        ));
    }
    if options.micro == Some(true) {
        return Err(QrError::Version("Structured Append is not available for Micro QR Codes".into()));
    }
    if let Some(count) = symbol_count {
        if !(1..=MAX_SEQUENCE_SYMBOLS).contains(&count) {
            return Err(QrError::InvalidArgument(format!(
                "the symbol count must be in range 1 .. {}",
                MAX_SEQUENCE_SYMBOLS
            )));
        }
    }
    let error = options.error.or(Some(ErrorLevel::L));
    let mask = options.mask.map(|mask| Mask::new(mask, false)).transpose()?;
    let segments = prepare_data(&content, options.mode, options.encoding)?;

    if symbol_count.is_none() {
        if let Ok(guessed) = find_version(&segments, error, options.eci, Some(false), false) {
            let version = requested.unwrap_or(guessed);
            if guessed <= version {
                let qr = encode_segments(segments, error, version, mask, options.eci, options.boost_error, None)?;
                return Ok(QrCodeSequence::new(vec![qr]));
            }
        }
    }
    let Some(segment) = segments.iter().next().filter(|_| segments.len() == 1) else {
        return Err(QrError::InvalidArgument(
            "Structured Append cannot handle more than one mode".into(),
        ));
    };
    let mode = segment.mode();
    let encoding = segment.encoding().or(options.encoding);
    let data = match &content {
        Content::Single(data) => data,
        Content::Parts(parts) if parts.len() == 1 => &parts[0].data,
        Content::Parts(_) => {
            return Err(QrError::InvalidArgument(
                "Structured Append cannot handle more than one part".into(),
            ))
        }
    };
    let units = Units::new(data);
    if let Some(count) = symbol_count {
        if units.len() < count {
            return Err(QrError::InvalidArgument(format!(
                "the content is not long enough to be divided into {} symbols",
                count
            )));
        }
    }
    let (parity_bytes, _) = data_to_bytes(data, None, false)?;
    let parity = parity_bytes.iter().fold(0u8, |acc, &b| acc ^ b);

    let make_chunk = |chunk: Data| -> Result<Segments> {
        let mut segs = Segments::new();
        segs.push(make_segment(&chunk, Some(mode), encoding)?);
        Ok(segs)
    };
    let (version, chunks) = match symbol_count {
        Some(count) => {
            let chunks = units.divide(count).into_iter().map(make_chunk).collect::<Result<Vec<_>>>()?;
            let mut version = Version::MIN;
            for chunk in &chunks {
                version = version.max(find_version(chunk, error, options.eci, Some(false), true)?);
            }
            let version = match requested {
                Some(requested) if requested < version => {
                    return Err(DataOverflow::VersionTooSmall { requested, proposal: version }.into())
                }
                Some(requested) => requested,
                None => version,
            };
            (version, chunks)
        }
        None => {
            // Checked above, a version is present if no symbol count is given
            let version = requested.unwrap_or(Version::MAX);
            let capacity = consts::symbol_capacity(version, error).unwrap_or(0);
            let header = STRUCTURED_APPEND_OVERHEAD + if options.eci { ECI_OVERHEAD } else { 0 };
            // Lower bound, the headers of the further symbols are ignored
            let estimate = ((segment.bits().len() + header + capacity - 1) / capacity.max(1)).max(1);
            let mut found = None;
            for count in estimate..=MAX_SEQUENCE_SYMBOLS.min(units.len()) {
                let chunks = units.divide(count).into_iter().map(make_chunk).collect::<Result<Vec<_>>>()?;
                if chunks.iter().all(|chunk| fits(chunk, version, error, options.eci)) {
                    found = Some(chunks);
                    break;
                }
            }
            let chunks = found.ok_or(DataOverflow::StructuredAppend { version })?;
            (version, chunks)
        }
    };
    let total = chunks.len();
    debug!(symbols = total, parity, version = %version, "structured append");
    let symbols = chunks
        .into_iter()
        .enumerate()
        .map(|(index, chunk)| {
            let info = StructuredAppendInfo {
                index: index as u8,
                total: total as u8,
                parity,
            };
            encode_segments(chunk, error, version, mask, options.eci, options.boost_error, Some(&info))
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(QrCodeSequence::new(symbols))
}

fn fits(segments: &Segments, version: Version, error: Option<ErrorLevel>, eci: bool) -> bool {
    match (
        segments.bit_length_with_overhead(version, eci, true),
        consts::symbol_capacity(version, error),
    ) {
        (Some(bits), Some(capacity)) => bits <= capacity,
        _ => false,
    }
}

/// The content of a Structured Append sequence split into its smallest
/// units: characters of text, bytes of binary data.
enum Units {
    Chars(Vec<char>),
    Bytes(Vec<u8>),
}

impl Units {
    fn new(data: &Data) -> Self {
        match data {
            Data::Text(text) => Units::Chars(text.chars().collect()),
            Data::Integer(n) => Units::Chars(n.to_string().chars().collect()),
            Data::Bytes(bytes) => Units::Bytes(bytes.clone()),
        }
    }

    fn len(&self) -> usize {
        match self {
            Units::Chars(chars) => chars.len(),
            Units::Bytes(bytes) => bytes.len(),
        }
    }

    /// Splits into `count` chunks whose lengths differ by at most one, the
    /// longer chunks first.
    fn divide(&self, count: usize) -> Vec<Data> {
        let (k, m) = (self.len() / count, self.len() % count);
        (0..count)
            .map(|i| {
                let range = i * k + i.min(m)..(i + 1) * k + (i + 1).min(m);
                match self {
                    Units::Chars(chars) => Data::Text(chars[range].iter().collect()),
                    Units::Bytes(bytes) => Data::Bytes(bytes[range].to_vec()),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segment::Part;
    use proptest::prelude::*;

    fn rows(qr: &QrCode) -> Vec<String> {
        qr.matrix()
            .rows()
            .map(|row| row.iter().map(|m| if m.is_dark() { '1' } else { '0' }).collect())
            .collect()
    }

    fn options() -> EncodeOptions {
        EncodeOptions::default()
    }

    const I2_MASK2: &[&str] = &[
        "111111100101101111111",
        "100000100111101000001",
        "101110101000001011101",
        "101110101100001011101",
        "101110101011101011101",
        "100000101000101000001",
        "111111101010101111111",
        "000000001001100000000",
        "101111100100101111100",
        "000101011010100101100",
        "001000110101010011111",
        "000010000100000111100",
        "000111111001010010000",
        "000000001011111001100",
        "111111100110101100000",
        "100000101011111000101",
        "101110101000100101100",
        "101110101100100100000",
        "101110101011010010100",
        "100000100000000110110",
        "111111101111010010100",
    ];
    const I2_AUTO: &[&str] = &[
        "111111101101101111111",
        "100000101010001000001",
        "101110100110101011101",
        "101110101100001011101",
        "101110100110001011101",
        "100000100110001000001",
        "111111101010101111111",
        "000000001100000000000",
        "101101110010001001011",
        "000101011010100101100",
        "100101111000111110010",
        "110100010010110001010",
        "000111111001010010000",
        "000000001110010100001",
        "111111101000011010110",
        "100000101011111000101",
        "101110100101001000001",
        "101110101010010010110",
        "101110101011010010100",
        "100000100101101011011",
        "111111101001100100010",
    ];
    const I3_AUTO: &[&str] = &[
        "1111111010101",
        "1000001011101",
        "1011101001101",
        "1011101001111",
        "1011101011100",
        "1000001010001",
        "1111111001111",
        "0000000001100",
        "1101000010001",
        "0110101010101",
        "1110011111110",
        "0001010000110",
        "1110100110111",
    ];
    const M1_12345: &[&str] = &[
        "11111110101",
        "10000010110",
        "10111010100",
        "10111010000",
        "10111010111",
        "10000010011",
        "11111110100",
        "00000000011",
        "11001110011",
        "01010001100",
        "11110000011",
    ];
    const M3_HELLO: &[&str] = &[
        "111111101010101",
        "100000100010100",
        "101110100001111",
        "101110100000011",
        "101110100110011",
        "100000101001110",
        "111111101110110",
        "000000000110001",
        "100011001111010",
        "011100110011000",
        "100001001101101",
        "011011101011110",
        "100101010111101",
        "011110110000101",
        "110100010110111",
    ];
    const V7_FOX: &[&str] = &[
        "111111100111100011101011011100100000101111111",
        "100000100101000111111010001000010101001000001",
        "101110101000111101110100111110100101001011101",
        "101110100010110100101010001000011101101011101",
        "101110101101000001011111100011110011101011101",
        "100000101001011100011000111111000100001000001",
        "111111101010101010101010101010101010101111111",
        "000000000110100000001000110101010001000000000",
        "010010101101101101011111111101111010010110100",
        "000100011001111110000011001001101111111101110",
        "111111100011101101110000101110100111001010110",
        "001010010000101111110000100101000111110111001",
        "001001101110001111001011101101100100010110001",
        "001000000111010100110100111000110000101010110",
        "111111111010110001011000110110011011001000010",
        "101010010011111001011000011100101011100011011",
        "000101100000100011110110010100001101011001101",
        "001110001010011001111000000011011101101101001",
        "000101101001001101010111100111011100011111110",
        "001011000110000111000010000011001111000110100",
        "011011111100001110001111101001101000111110100",
        "101010001010111110101000111100101100100011101",
        "110010101011000010011010110110010100101011000",
        "010110001110000100011000111111001010100010010",
        "111111111101100101101111110110101100111110011",
        "001100001111010100011011000011100001001111011",
        "111110111110111100110111100001100100100101111",
        "101110001110110101100000100011010001010001001",
        "101111110011001111100011011000111010000010000",
        "001001011101111000010011001101101110110001110",
        "001010110011011100001110101110100111011100010",
        "000100011101100011101111111101100111100110011",
        "110011101111000000101101000000000101111011000",
        "110111010100010011101101000101110001001101000",
        "000010101001011010110010101100111010000111110",
        "011110001100010011011100111100110000110111011",
        "100110100110111001001111101000011010111110100",
        "000000001111110110111000110111001110100011000",
        "111111100011101011101010100111000111101011110",
        "100000100001110010101000100001001100100010111",
        "101110101100001100111111110101101100111110100",
        "101110100101000000101000001010111101011010110",
        "101110100001011010100111110110000100000010000",
        "100000101101101001011101000110111100110111000",
        "111111100101001101100100011110001011000011101",
    ];

    #[test]
    fn annex_i_qr_code_with_fixed_mask() {
        let opts = options()
            .with_error(ErrorLevel::M)
            .with_version(Version::MIN)
            .with_mask(2)
            .with_boost_error(false);
        let qr = encode("01234567", &opts).unwrap();
        assert_eq!(qr.designator(), "1-M");
        assert_eq!(qr.mask().value(), 2);
        assert_eq!(rows(&qr), I2_MASK2);
    }

    #[test]
    fn annex_i_qr_code_best_mask() {
        let opts = options().with_error(ErrorLevel::M).with_micro(false).with_boost_error(false);
        let qr = encode("01234567", &opts).unwrap();
        assert_eq!(qr.mask().value(), 3);
        assert_eq!(rows(&qr), I2_AUTO);
    }

    #[test]
    fn annex_i_micro_qr_code() {
        let opts = options()
            .with_error(ErrorLevel::L)
            .with_version(Version::M2)
            .with_boost_error(false);
        let qr = encode("01234567", &opts).unwrap();
        assert_eq!(qr.designator(), "M2-L");
        assert_eq!(qr.mask().value(), 1);
        assert_eq!(rows(&qr), I3_AUTO);
        // The data leaves room for level M
        let qr = encode("01234567", &opts.with_boost_error(true)).unwrap();
        assert_eq!(qr.designator(), "M2-M");
        assert_eq!(qr.mask().value(), 1);
    }

    #[test]
    fn m1_symbol() {
        let qr = encode("12345", &options().with_micro(true)).unwrap();
        assert_eq!(qr.designator(), "M1");
        assert_eq!(qr.mask().value(), 2);
        assert_eq!(rows(&qr), M1_12345);
        let qr = encode(12345, &options()).unwrap();
        assert_eq!(rows(&qr), M1_12345);
    }

    #[test]
    fn m3_symbol() {
        let qr = encode("Hello", &options().with_micro(true)).unwrap();
        assert_eq!(qr.designator(), "M3-M");
        assert_eq!(qr.mask().value(), 2);
        assert_eq!(rows(&qr), M3_HELLO);
    }

    #[test]
    fn version_7_symbol() {
        let opts = options()
            .with_version(Version::new(7).unwrap())
            .with_error(ErrorLevel::Q)
            .with_boost_error(false);
        let qr = encode("The quick brown fox jumps over the lazy dog.", &opts).unwrap();
        assert_eq!(qr.size(), 45);
        assert_eq!(qr.mask().value(), 4);
        assert_eq!(rows(&qr), V7_FOX);
    }

    #[test]
    fn automatic_selection() {
        let cases: Vec<(Content, EncodeOptions, &str, Mode)> = vec![
            ("ABCDEF".into(), options().with_micro(false), "1-H", Mode::Alphanumeric),
            ("ABCDEF".into(), options().with_micro(false).with_boost_error(false), "1-L", Mode::Alphanumeric),
            ("".into(), options(), "M3-M", Mode::Byte),
            ("".into(), options().with_micro(false), "1-H", Mode::Byte),
            ("01234".into(), options(), "M1", Mode::Numeric),
            ("A".into(), options().with_error(ErrorLevel::L), "M2-M", Mode::Alphanumeric),
            ("A".into(), options().with_error(ErrorLevel::L).with_boost_error(false), "M2-L", Mode::Alphanumeric),
            ("A".into(), options().with_error(ErrorLevel::L).with_version(Version::M3), "M3-M", Mode::Alphanumeric),
            ("A".into(), options().with_error(ErrorLevel::L).with_version(Version::M4), "M4-Q", Mode::Alphanumeric),
            ("书读百遍其义自现".into(), options(), "2-M", Mode::Byte),
            ("汉字".into(), options(), "M3-M", Mode::Byte),
            ("Ä".into(), options().with_micro(false), "1-H", Mode::Byte),
            ("点茗".into(), options(), "M3-M", Mode::Kanji),
            ((-12345i64).into(), options().with_micro(true), "M2-L", Mode::Alphanumeric),
            ("HELLO WORLD".into(), options().with_error(ErrorLevel::Q).with_micro(false), "1-Q", Mode::Alphanumeric),
            ("Hello".into(), options().with_version(Version::MIN), "1-H", Mode::Byte),
        ];
        for (content, opts, designator, mode) in cases {
            let qr = encode(content.clone(), &opts).unwrap();
            assert_eq!(qr.designator(), designator, "{:?}", content);
            assert_eq!(qr.mode(), Some(mode), "{:?}", content);
        }
    }

    #[test]
    fn eci_symbol() {
        let opts = options().with_encoding(TextEncoding::Utf8).with_eci(true).with_micro(false);
        let qr = encode("Märchen", &opts).unwrap();
        assert_eq!(qr.designator(), "1-Q");
        // An ECI header forces a QR Code even if micro is not restricted
        let qr = encode("Märchen", &options().with_encoding(TextEncoding::Utf8).with_eci(true)).unwrap();
        assert!(!qr.is_micro());
        assert_eq!(encode("Märchen", &options().with_encoding(TextEncoding::Utf8)).unwrap().designator(), "M3-L");
    }

    #[test]
    fn eci_without_header_allows_micro() {
        let qr = encode("12345", &options().with_eci(true)).unwrap();
        assert_eq!(qr.version(), Version::M1);
        let opts = options().with_eci(true).with_error(ErrorLevel::Q).with_boost_error(false);
        assert_eq!(encode("e", &opts).unwrap().designator(), "M4-Q");
        let opts = options()
            .with_eci(true)
            .with_error(ErrorLevel::M)
            .with_encoding(TextEncoding::Utf8)
            .with_boost_error(false);
        assert_eq!(encode("33014673", &opts).unwrap().designator(), "M2-M");
        // Latin-1 byte data never gets a header
        let opts = options().with_eci(true).with_mode(Mode::Byte).with_error(ErrorLevel::L).with_boost_error(false);
        assert_eq!(encode("oleö©", &opts).unwrap().designator(), "M3-L");
    }

    #[test]
    fn hanzi_symbol() {
        let qr = encode("书读百遍其义自现", &options().with_mode(Mode::Hanzi)).unwrap();
        assert_eq!(qr.mode(), Some(Mode::Hanzi));
        assert_eq!(qr.version(), Version::MIN);
        let err = encode("书读", &options().with_mode(Mode::Hanzi).with_micro(true)).unwrap_err();
        assert!(matches!(err, QrError::Mode(_)));
    }

    #[test]
    fn validation_errors() {
        let err = |content: &str, opts: EncodeOptions| encode(content, &opts).unwrap_err();
        assert!(matches!(err("1", options().with_micro(false).with_version(Version::M2)), QrError::Version(_)));
        assert!(matches!(err("1", options().with_micro(true).with_version(Version::MIN)), QrError::Version(_)));
        assert!(matches!(err("a", options().with_mode(Mode::Byte).with_version(Version::M2)), QrError::Mode(_)));
        assert!(matches!(err("abc", options().with_mode(Mode::Numeric)), QrError::Mode(_)));
        assert!(matches!(err("1", options().with_micro(true).with_error(ErrorLevel::H)), QrError::ErrorLevel(_)));
        assert!(matches!(err("1", options().with_version(Version::M4).with_error(ErrorLevel::H)), QrError::ErrorLevel(_)));
        assert!(matches!(err("1", options().with_version(Version::M2).with_error(ErrorLevel::Q)), QrError::ErrorLevel(_)));
        assert!(matches!(err("1", options().with_version(Version::M1).with_error(ErrorLevel::L)), QrError::ErrorLevel(_)));
        assert!(matches!(err("1", options().with_micro(true).with_eci(true)), QrError::Version(_)));
        assert!(matches!(err("1", options().with_micro(false).with_mask(8)), QrError::Mask(_)));
        assert!(matches!(err("1", options().with_micro(true).with_mask(4)), QrError::Mask(_)));
        assert!(matches!(err("Ä", options().with_encoding(TextEncoding::Ascii)), QrError::Encoding(_)));
    }

    #[test]
    fn overflow_errors() {
        let err = encode("123456", &options().with_version(Version::M1)).unwrap_err();
        assert_eq!(
            err,
            QrError::DataOverflow(DataOverflow::VersionTooSmall {
                requested: Version::M1,
                proposal: Version::M2
            })
        );
        let err = encode("A".repeat(36), &options().with_micro(true)).unwrap_err();
        assert!(err.is_data_overflow());
        let err = encode("A".repeat(4297), &options()).unwrap_err();
        assert!(err.is_data_overflow());
        assert!(encode("A".repeat(4296), &options()).is_ok());
    }

    #[test]
    fn mixed_parts_inherit_options() {
        let parts = vec![
            Part::new("ABCDEFGHIJ"),
            Part::new("0123456789"),
            Part::new("Märchen").with_encoding(TextEncoding::Utf8),
        ];
        let qr = encode(parts, &options().with_error(ErrorLevel::M)).unwrap();
        let modes: Vec<Mode> = qr.segments().modes().collect();
        assert_eq!(modes, vec![Mode::Alphanumeric, Mode::Numeric, Mode::Byte]);
        // Mixed content is never boosted
        assert_eq!(qr.error(), Some(ErrorLevel::M));
    }

    #[test]
    fn boost_respects_version_limits() {
        let segs = prepare_data(&"1".into(), None, None).unwrap();
        assert_eq!(boost_error_level(Version::M2, Some(ErrorLevel::L), &segs, false, false), Some(ErrorLevel::M));
        assert_eq!(boost_error_level(Version::M4, Some(ErrorLevel::L), &segs, false, false), Some(ErrorLevel::Q));
        assert_eq!(boost_error_level(Version::MIN, Some(ErrorLevel::L), &segs, false, false), Some(ErrorLevel::H));
        assert_eq!(boost_error_level(Version::M1, None, &segs, false, false), None);
        assert_eq!(boost_error_level(Version::MIN, Some(ErrorLevel::H), &segs, false, false), Some(ErrorLevel::H));
    }

    #[test]
    fn structured_append_single_symbol() {
        let opts = options().with_version(Version::MAX).with_error(ErrorLevel::L);
        let seq = encode_sequence("A".repeat(4296), &opts, None).unwrap();
        assert_eq!(seq.len(), 1);
        assert_eq!(seq[0].designator(), "40-L");
        let seq = encode_sequence("Hello", &options().with_version(Version::MIN), None).unwrap();
        assert_eq!(seq.len(), 1);
        assert_eq!(seq[0].designator(), "1-H");
    }

    #[test]
    fn structured_append_by_version() {
        let opts = options().with_version(Version::MAX).with_error(ErrorLevel::L);
        let seq = encode_sequence("A".repeat(4297), &opts, None).unwrap();
        assert_eq!(seq.len(), 2);
        assert!(seq.iter().all(|qr| qr.designator() == "40-Q"));

        let opts = options().with_version(Version::MIN).with_error(ErrorLevel::M);
        let seq = encode_sequence("0123456789".repeat(20), &opts, None).unwrap();
        assert_eq!(seq.len(), 8);
        for qr in &seq {
            assert_eq!(qr.designator(), "1-M");
            assert_eq!(qr.mode(), Some(Mode::Numeric));
            assert_eq!(qr.segments().iter().next().unwrap().char_count(), 25);
        }
    }

    #[test]
    fn structured_append_by_count() {
        let seq = encode_sequence("ABCDEFGHIJKLMNOPQRSTUVWXYZ", &options(), Some(3)).unwrap();
        assert_eq!(seq.len(), 3);
        let counts: Vec<usize> = seq.iter().map(|qr| qr.segments().iter().next().unwrap().char_count()).collect();
        assert_eq!(counts, vec![9, 9, 8]);
        assert!(seq.iter().all(|qr| qr.designator() == "1-Q"));
        let seq = encode_sequence(Data::Bytes(vec![0xFF; 40]), &options(), Some(2)).unwrap();
        assert_eq!(seq.len(), 2);
        assert_eq!(seq[1].mode(), Some(Mode::Byte));
    }

    #[test]
    fn structured_append_header_bits() {
        let seq = encode_sequence("ABCDEFGHIJKLMNOPQRSTUVWXYZ", &options(), Some(3)).unwrap();
        // Parity is the XOR of all bytes of the content
        let parity = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ".iter().fold(0u8, |acc, b| acc ^ b);
        assert_eq!(parity, 27);
        let segs = seq[1].segments().clone();
        let info = StructuredAppendInfo { index: 1, total: 3, parity };
        let codewords = make_data_codewords(&segs, Version::MIN, Some(ErrorLevel::Q), false, Some(&info)).unwrap();
        assert_eq!(codewords[0], 0b0011_0001);
        assert_eq!(codewords[1], 0b0010_0001);
        let qr = encode_segments(segs, Some(ErrorLevel::Q), Version::MIN, None, false, false, Some(&info)).unwrap();
        assert_eq!(rows(&qr), rows(&seq[1]));
    }

    #[test]
    fn structured_append_errors() {
        let err = encode_sequence("ABC", &options(), None).unwrap_err();
        assert!(matches!(err, QrError::InvalidArgument(_)));
        let err = encode_sequence("ABC", &options().with_version(Version::M4), None).unwrap_err();
        assert!(matches!(err, QrError::Version(_)));
        assert!(matches!(encode_sequence("ABC", &options(), Some(0)), Err(QrError::InvalidArgument(_))));
        assert!(matches!(encode_sequence("ABC", &options(), Some(17)), Err(QrError::InvalidArgument(_))));
        assert!(matches!(encode_sequence("AB", &options(), Some(3)), Err(QrError::InvalidArgument(_))));
        let parts = vec![Part::new("ABC"), Part::new("abc")];
        let err = encode_sequence(parts, &options(), Some(2)).unwrap_err();
        assert!(matches!(err, QrError::InvalidArgument(_)));
        let err = encode_sequence("A".repeat(3000), &options().with_version(Version::MIN), None).unwrap_err();
        assert_eq!(err, QrError::DataOverflow(DataOverflow::StructuredAppend { version: Version::MIN }));
        let err = encode_sequence("A".repeat(200), &options().with_version(Version::MIN), Some(2)).unwrap_err();
        assert!(matches!(err, QrError::DataOverflow(DataOverflow::VersionTooSmall { .. })));
    }

    #[test]
    fn structured_append_parity() {
        let parity = |content: Content| {
            let data = match content {
                Content::Single(data) => data,
                Content::Parts(_) => unreachable!(),
            };
            data_to_bytes(&data, None, false).unwrap().0.iter().fold(0u8, |acc, b| acc ^ b)
        };
        assert_eq!(parity("123456789".into()), 49);
        assert_eq!(parity(123456789.into()), 49);
        assert_eq!(parity("Mürrisch".into()), 160);
        assert_eq!(parity("0123456789日本".into()), 0x85);
    }

    // Character capacities (numeric, alphanumeric, byte) per version and
    // error level; 0 marks a mode the version lacks.
    const CHAR_CAPACITY: &[(&str, usize, usize, usize)] = &[
        ("M1", 5, 0, 0),
        ("M2-L", 10, 6, 0),
        ("M2-M", 8, 5, 0),
        ("M3-L", 23, 14, 9),
        ("M3-M", 18, 11, 7),
        ("M4-L", 35, 21, 15),
        ("M4-M", 30, 18, 13),
        ("M4-Q", 21, 13, 9),
        ("1-L", 41, 25, 17),
        ("1-M", 34, 20, 14),
        ("1-Q", 27, 16, 11),
        ("1-H", 17, 10, 7),
        ("2-L", 77, 47, 32),
        ("2-M", 63, 38, 26),
        ("2-Q", 48, 29, 20),
        ("2-H", 34, 20, 14),
        ("3-L", 127, 77, 53),
        ("3-M", 101, 61, 42),
        ("3-Q", 77, 47, 32),
        ("3-H", 58, 35, 24),
        ("4-L", 187, 114, 78),
        ("4-M", 149, 90, 62),
        ("4-Q", 111, 67, 46),
        ("4-H", 82, 50, 34),
        ("5-L", 255, 154, 106),
        ("5-M", 202, 122, 84),
        ("5-Q", 144, 87, 60),
        ("5-H", 106, 64, 44),
        ("6-L", 322, 195, 134),
        ("6-M", 255, 154, 106),
        ("6-Q", 178, 108, 74),
        ("6-H", 139, 84, 58),
        ("7-L", 370, 224, 154),
        ("7-M", 293, 178, 122),
        ("7-Q", 207, 125, 86),
        ("7-H", 154, 93, 64),
        ("8-L", 461, 279, 192),
        ("8-M", 365, 221, 152),
        ("8-Q", 259, 157, 108),
        ("8-H", 202, 122, 84),
        ("9-L", 552, 335, 230),
        ("9-M", 432, 262, 180),
        ("9-Q", 312, 189, 130),
        ("9-H", 235, 143, 98),
        ("10-L", 652, 395, 271),
        ("10-M", 513, 311, 213),
        ("10-Q", 364, 221, 151),
        ("10-H", 288, 174, 119),
        ("11-L", 772, 468, 321),
        ("11-M", 604, 366, 251),
        ("11-Q", 427, 259, 177),
        ("11-H", 331, 200, 137),
        ("12-L", 883, 535, 367),
        ("12-M", 691, 419, 287),
        ("12-Q", 489, 296, 203),
        ("12-H", 374, 227, 155),
        ("13-L", 1022, 619, 425),
        ("13-M", 796, 483, 331),
        ("13-Q", 580, 352, 241),
        ("13-H", 427, 259, 177),
        ("14-L", 1101, 667, 458),
        ("14-M", 871, 528, 362),
        ("14-Q", 621, 376, 258),
        ("14-H", 468, 283, 194),
        ("15-L", 1250, 758, 520),
        ("15-M", 991, 600, 412),
        ("15-Q", 703, 426, 292),
        ("15-H", 530, 321, 220),
        ("16-L", 1408, 854, 586),
        ("16-M", 1082, 656, 450),
        ("16-Q", 775, 470, 322),
        ("16-H", 602, 365, 250),
        ("17-L", 1548, 938, 644),
        ("17-M", 1212, 734, 504),
        ("17-Q", 876, 531, 364),
        ("17-H", 674, 408, 280),
        ("18-L", 1725, 1046, 718),
        ("18-M", 1346, 816, 560),
        ("18-Q", 948, 574, 394),
        ("18-H", 746, 452, 310),
        ("19-L", 1903, 1153, 792),
        ("19-M", 1500, 909, 624),
        ("19-Q", 1063, 644, 442),
        ("19-H", 813, 493, 338),
        ("20-L", 2061, 1249, 858),
        ("20-M", 1600, 970, 666),
        ("20-Q", 1159, 702, 482),
        ("20-H", 919, 557, 382),
        ("21-L", 2232, 1352, 929),
        ("21-M", 1708, 1035, 711),
        ("21-Q", 1224, 742, 509),
        ("21-H", 969, 587, 403),
        ("22-L", 2409, 1460, 1003),
        ("22-M", 1872, 1134, 779),
        ("22-Q", 1358, 823, 565),
        ("22-H", 1056, 640, 439),
        ("23-L", 2620, 1588, 1091),
        ("23-M", 2059, 1248, 857),
        ("23-Q", 1468, 890, 611),
        ("23-H", 1108, 672, 461),
        ("24-L", 2812, 1704, 1171),
        ("24-M", 2188, 1326, 911),
        ("24-Q", 1588, 963, 661),
        ("24-H", 1228, 744, 511),
        ("25-L", 3057, 1853, 1273),
        ("25-M", 2395, 1451, 997),
        ("25-Q", 1718, 1041, 715),
        ("25-H", 1286, 779, 535),
        ("26-L", 3283, 1990, 1367),
        ("26-M", 2544, 1542, 1059),
        ("26-Q", 1804, 1094, 751),
        ("26-H", 1425, 864, 593),
        ("27-L", 3517, 2132, 1465),
        ("27-M", 2701, 1637, 1125),
        ("27-Q", 1933, 1172, 805),
        ("27-H", 1501, 910, 625),
        ("28-L", 3669, 2223, 1528),
        ("28-M", 2857, 1732, 1190),
        ("28-Q", 2085, 1263, 868),
        ("28-H", 1581, 958, 658),
        ("29-L", 3909, 2369, 1628),
        ("29-M", 3035, 1839, 1264),
        ("29-Q", 2181, 1322, 908),
        ("29-H", 1677, 1016, 698),
        ("30-L", 4158, 2520, 1732),
        ("30-M", 3289, 1994, 1370),
        ("30-Q", 2358, 1429, 982),
        ("30-H", 1782, 1080, 742),
        ("31-L", 4417, 2677, 1840),
        ("31-M", 3486, 2113, 1452),
        ("31-Q", 2473, 1499, 1030),
        ("31-H", 1897, 1150, 790),
        ("32-L", 4686, 2840, 1952),
        ("32-M", 3693, 2238, 1538),
        ("32-Q", 2670, 1618, 1112),
        ("32-H", 2022, 1226, 842),
        ("33-L", 4965, 3009, 2068),
        ("33-M", 3909, 2369, 1628),
        ("33-Q", 2805, 1700, 1168),
        ("33-H", 2157, 1307, 898),
        ("34-L", 5253, 3183, 2188),
        ("34-M", 4134, 2506, 1722),
        ("34-Q", 2949, 1787, 1228),
        ("34-H", 2301, 1394, 958),
        ("35-L", 5529, 3351, 2303),
        ("35-M", 4343, 2632, 1809),
        ("35-Q", 3081, 1867, 1283),
        ("35-H", 2361, 1431, 983),
        ("36-L", 5836, 3537, 2431),
        ("36-M", 4588, 2780, 1911),
        ("36-Q", 3244, 1966, 1351),
        ("36-H", 2524, 1530, 1051),
        ("37-L", 6153, 3729, 2563),
        ("37-M", 4775, 2894, 1989),
        ("37-Q", 3417, 2071, 1423),
        ("37-H", 2625, 1591, 1093),
        ("38-L", 6479, 3927, 2699),
        ("38-M", 5039, 3054, 2099),
        ("38-Q", 3599, 2181, 1499),
        ("38-H", 2735, 1658, 1139),
        ("39-L", 6743, 4087, 2809),
        ("39-M", 5313, 3220, 2213),
        ("39-Q", 3791, 2298, 1579),
        ("39-H", 2927, 1774, 1219),
        ("40-L", 7089, 4296, 2953),
        ("40-M", 5596, 3391, 2331),
        ("40-Q", 3993, 2420, 1663),
        ("40-H", 3057, 1852, 1273),
    ];

    #[test]
    fn character_capacities() {
        let levels: Vec<(Version, Option<ErrorLevel>)> = Version::range(Version::M1, Version::MAX)
            .flat_map(|version| {
                [None, Some(ErrorLevel::L), Some(ErrorLevel::M), Some(ErrorLevel::Q), Some(ErrorLevel::H)]
                    .into_iter()
                    .filter(move |&error| version.supports_error(error))
                    .map(move |error| (version, error))
            })
            .collect();
        assert_eq!(levels.len(), CHAR_CAPACITY.len());
        for (&(version, error), &(designator, numeric, alphanumeric, byte)) in levels.iter().zip(CHAR_CAPACITY) {
            let opts = EncodeOptions {
                error,
                micro: Some(version.is_micro()),
                mask: Some(0),
                boost_error: false,
                ..options()
            };
            let next = Version::range(version, Version::MAX)
                .skip(1)
                .take_while(|next| next.is_micro() == version.is_micro())
                .find(|next| next.supports_error(error.or(Some(ErrorLevel::L))))
                .map(|next| format!("{}-{}", next, error.unwrap_or(ErrorLevel::L)));
            for (unit, count) in [("1", numeric), ("A", alphanumeric), ("a", byte)] {
                if count == 0 {
                    continue;
                }
                let qr = encode(unit.repeat(count), &opts).unwrap();
                assert_eq!(qr.designator(), designator, "{} x {}", unit, count);
                match (&next, encode(unit.repeat(count + 1), &opts)) {
                    (Some(next), Ok(qr)) => assert_eq!(&qr.designator(), next, "{} x {}", unit, count + 1),
                    (None, Err(err)) => assert!(err.is_data_overflow(), "{} x {}", unit, count + 1),
                    (next, result) => panic!(
                        "{} x {}: expected {:?}, got {:?}",
                        unit,
                        count + 1,
                        next,
                        result.map(|qr| qr.designator())
                    ),
                }
            }
        }
    }

    fn holds(segments: &Segments, version: Version, error: Option<ErrorLevel>) -> bool {
        let level = if version == Version::M1 { error } else { error.or(Some(ErrorLevel::L)) };
        match (consts::symbol_capacity(version, level), segments.bit_length_with_overhead(version, false, false)) {
            (Some(capacity), Some(bits)) => bits <= capacity,
            _ => false,
        }
    }

    fn content_strategy() -> impl Strategy<Value = String> {
        prop_oneof!["[0-9]{1,400}", "[A-Z0-9 $%*+./:-]{1,250}", "[a-z]{1,180}"]
    }

    fn micro_strategy() -> impl Strategy<Value = Option<bool>> {
        prop_oneof![Just(None), Just(Some(true)), Just(Some(false))]
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn mask_selection_is_deterministic(text in "[ -~]{0,60}") {
            let a = encode(text.as_str(), &options()).unwrap();
            let b = encode(text.as_str(), &options()).unwrap();
            prop_assert_eq!(a.mask(), b.mask());
            prop_assert_eq!(a.matrix(), b.matrix());
        }

        #[test]
        fn version_is_minimal(text in content_strategy(), level in 0usize..5, micro in micro_strategy()) {
            let error = ErrorLevel::ALL.get(level).copied();
            let segs = prepare_data(&text.as_str().into(), None, None).unwrap();
            if let Ok(version) = find_version(&segs, error, false, micro, false) {
                prop_assert!(holds(&segs, version, error));
                prop_assert!(micro.map_or(true, |micro| micro == version.is_micro()));
                let min = if micro == Some(false) { Version::MIN } else { Version::M1 };
                for smaller in Version::range(min, version).filter(|&v| v < version) {
                    prop_assert!(!holds(&segs, smaller, error), "{} also holds the data", smaller);
                }
            } else {
                let max = if micro == Some(true) { Version::M4 } else { Version::MAX };
                let min = if micro == Some(false) { Version::MIN } else { Version::M1 };
                prop_assert!(Version::range(min, max).all(|v| !holds(&segs, v, error)));
            }
        }

        #[test]
        fn boost_keeps_the_version(text in "[A-Z0-9 ]{0,80}") {
            let boosted = encode(text.as_str(), &options()).unwrap();
            let plain = encode(text.as_str(), &options().with_boost_error(false)).unwrap();
            prop_assert_eq!(boosted.version(), plain.version());
            prop_assert!(boosted.error() >= plain.error());
        }

        #[test]
        fn boost_matches_manual_level(text in "[a-z0-9]{0,80}") {
            let boosted = encode(text.as_str(), &options().with_micro(false)).unwrap();
            let manual = EncodeOptions {
                error: boosted.error(),
                version: Some(boosted.version()),
                boost_error: false,
                ..options()
            };
            let manual = encode(text.as_str(), &manual).unwrap();
            prop_assert_eq!(boosted.matrix(), manual.matrix());
            prop_assert_eq!(boosted.designator(), manual.designator());
        }
    }
}
