//! Static tables of ISO/IEC 18004.
//!
//! Versions index the tables in the order M1, M2, M3, M4, 1 .. 40 and error
//! levels in the order L, M, Q, H, followed by a column for "no error
//! correction level" which only M1 uses.

use crate::segment::Mode;
use crate::version::{ErrorLevel, Version};

pub(crate) static ALPHANUMERIC_CHARS: &[u8; 45] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ $%*+-./:";

pub(crate) const MODE_STRUCTURED_APPEND: u32 = 0x3;
pub(crate) const MODE_ECI: u32 = 0x7;
/// Subset indicator written after the Hanzi mode indicator (GB2312).
pub(crate) const HANZI_SUBSET_GB2312: u32 = 0x1;

/// Bits of a Structured Append header: mode, position, total and parity.
pub(crate) const STRUCTURED_APPEND_OVERHEAD: usize = 4 + 4 + 4 + 8;
/// Bits of an ECI header: mode indicator and an 8-bit assignment number.
pub(crate) const ECI_OVERHEAD: usize = 4 + 8;

pub(crate) const PAD_CODEWORDS: [u8; 2] = [0b1110_1100, 0b0001_0001];

/// One group of equally sized Reed-Solomon blocks.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) struct EcBlocks {
    pub num_blocks: usize,
    pub num_total: usize,
    pub num_data: usize,
}

const fn ec(num_blocks: usize, num_total: usize, num_data: usize) -> EcBlocks {
    EcBlocks {
        num_blocks,
        num_total,
        num_data,
    }
}

fn error_column(error: Option<ErrorLevel>) -> usize {
    match error {
        Some(ErrorLevel::L) => 0,
        Some(ErrorLevel::M) => 1,
        Some(ErrorLevel::Q) => 2,
        Some(ErrorLevel::H) => 3,
        None => 4,
    }
}

/// Returns the data capacity in bits or `None` if the version does not
/// support the error level.
pub(crate) fn symbol_capacity(version: Version, error: Option<ErrorLevel>) -> Option<usize> {
    let bits = SYMBOL_CAPACITY[version.index()][error_column(error)];
    (bits > 0).then_some(usize::from(bits))
}

pub(crate) fn ecc_blocks(version: Version, error: Option<ErrorLevel>) -> &'static [EcBlocks] {
    ECC_BLOCKS[version.index()][error_column(error)]
}

/// Width of the character count indicator, `None` if the version does not
/// support the mode.
pub(crate) fn char_count_bits(mode: Mode, version: Version) -> Option<u8> {
    let column = if version.is_micro() {
        version.index()
    } else {
        match version.value() {
            1..=9 => 4,
            10..=26 => 5,
            _ => 6,
        }
    };
    let row = match mode {
        Mode::Numeric => 0,
        Mode::Alphanumeric => 1,
        Mode::Byte => 2,
        Mode::Kanji => 3,
        Mode::Hanzi => 4,
    };
    let bits = CHAR_COUNT_BITS[row][column];
    (bits > 0).then_some(bits)
}

// Columns: M1, M2, M3, M4, 1-9, 10-26, 27-40
static CHAR_COUNT_BITS: [[u8; 7]; 5] = [
    [3, 4, 5, 6, 10, 12, 14], // numeric
    [0, 3, 4, 5, 9, 11, 13],  // alphanumeric
    [0, 0, 4, 5, 8, 16, 16],  // byte
    [0, 0, 3, 4, 8, 10, 12],  // kanji
    [0, 0, 0, 0, 8, 10, 12],  // hanzi
];

pub(crate) fn terminator_length(version: Version) -> usize {
    match version {
        Version::M1 => 3,
        Version::M2 => 5,
        Version::M3 => 7,
        Version::M4 => 9,
        _ => 4,
    }
}

/// Symbol number used by the Micro QR Code format information.
pub(crate) fn micro_symbol_number(version: Version, error: Option<ErrorLevel>) -> Option<usize> {
    use ErrorLevel::*;
    match (version, error) {
        (Version::M1, None) => Some(0),
        (Version::M2, Some(L)) => Some(1),
        (Version::M2, Some(M)) => Some(2),
        (Version::M3, Some(L)) => Some(3),
        (Version::M3, Some(M)) => Some(4),
        (Version::M4, Some(L)) => Some(5),
        (Version::M4, Some(M)) => Some(6),
        (Version::M4, Some(Q)) => Some(7),
        _ => None,
    }
}

/// Number of zero bits which follow the final codeword.
pub(crate) fn remainder_bits(version: Version) -> usize {
    match version.value() {
        2..=6 => 7,
        14..=20 | 28..=34 => 3,
        21..=27 => 4,
        _ => 0,
    }
}

pub(crate) fn alignment_positions(version: Version) -> &'static [usize] {
    match version.value() {
        v @ 2..=40 => ALIGNMENT_POS[(v - 2) as usize],
        _ => &[],
    }
}

pub(crate) fn version_info(version: Version) -> Option<u32> {
    match version.value() {
        v @ 7..=40 => Some(VERSION_INFO[(v - 7) as usize]),
        _ => None,
    }
}

pub(crate) fn generator_polynomial(degree: usize) -> Option<&'static [u8]> {
    GEN_POLY
        .iter()
        .find(|(d, _)| *d == degree)
        .map(|(_, poly)| *poly)
}

/// Data capacity in bits, indexed by version and error level (`L`, `M`, `Q`, `H`, none).
/// Zero marks an unsupported combination.
pub(crate) static SYMBOL_CAPACITY: [[u16; 5]; 44] = [
    [0, 0, 0, 0, 20], // M1
    [40, 32, 0, 0, 0], // M2
    [84, 68, 0, 0, 0], // M3
    [128, 112, 80, 0, 0], // M4
    [152, 128, 104, 72, 0], // 1
    [272, 224, 176, 128, 0], // 2
    [440, 352, 272, 208, 0], // 3
    [640, 512, 384, 288, 0], // 4
    [864, 688, 496, 368, 0], // 5
    [1088, 864, 608, 480, 0], // 6
    [1248, 992, 704, 528, 0], // 7
    [1552, 1232, 880, 688, 0], // 8
    [1856, 1456, 1056, 800, 0], // 9
    [2192, 1728, 1232, 976, 0], // 10
    [2592, 2032, 1440, 1120, 0], // 11
    [2960, 2320, 1648, 1264, 0], // 12
    [3424, 2672, 1952, 1440, 0], // 13
    [3688, 2920, 2088, 1576, 0], // 14
    [4184, 3320, 2360, 1784, 0], // 15
    [4712, 3624, 2600, 2024, 0], // 16
    [5176, 4056, 2936, 2264, 0], // 17
    [5768, 4504, 3176, 2504, 0], // 18
    [6360, 5016, 3560, 2728, 0], // 19
    [6888, 5352, 3880, 3080, 0], // 20
    [7456, 5712, 4096, 3248, 0], // 21
    [8048, 6256, 4544, 3536, 0], // 22
    [8752, 6880, 4912, 3712, 0], // 23
    [9392, 7312, 5312, 4112, 0], // 24
    [10208, 8000, 5744, 4304, 0], // 25
    [10960, 8496, 6032, 4768, 0], // 26
    [11744, 9024, 6464, 5024, 0], // 27
    [12248, 9544, 6968, 5288, 0], // 28
    [13048, 10136, 7288, 5608, 0], // 29
    [13880, 10984, 7880, 5960, 0], // 30
    [14744, 11640, 8264, 6344, 0], // 31
    [15640, 12328, 8920, 6760, 0], // 32
    [16568, 13048, 9368, 7208, 0], // 33
    [17528, 13800, 9848, 7688, 0], // 34
    [18448, 14496, 10288, 7888, 0], // 35
    [19472, 15312, 10832, 8432, 0], // 36
    [20528, 15936, 11408, 8768, 0], // 37
    [21616, 16816, 12016, 9136, 0], // 38
    [22496, 17728, 12656, 9776, 0], // 39
    [23648, 18672, 13328, 10208, 0], // 40
];

/// Error correction block layout, indexed like [`SYMBOL_CAPACITY`].
pub(crate) static ECC_BLOCKS: [[&[EcBlocks]; 5]; 44] = [
    [&[], &[], &[], &[], &[ec(1, 5, 3)]], // M1
    [&[ec(1, 10, 5)], &[ec(1, 10, 4)], &[], &[], &[]], // M2
    [&[ec(1, 17, 11)], &[ec(1, 17, 9)], &[], &[], &[]], // M3
    [&[ec(1, 24, 16)], &[ec(1, 24, 14)], &[ec(1, 24, 10)], &[], &[]], // M4
    [&[ec(1, 26, 19)], &[ec(1, 26, 16)], &[ec(1, 26, 13)], &[ec(1, 26, 9)], &[]], // 1
    [&[ec(1, 44, 34)], &[ec(1, 44, 28)], &[ec(1, 44, 22)], &[ec(1, 44, 16)], &[]], // 2
    [&[ec(1, 70, 55)], &[ec(1, 70, 44)], &[ec(2, 35, 17)], &[ec(2, 35, 13)], &[]], // 3
    [&[ec(1, 100, 80)], &[ec(2, 50, 32)], &[ec(2, 50, 24)], &[ec(4, 25, 9)], &[]], // 4
    [&[ec(1, 134, 108)], &[ec(2, 67, 43)], &[ec(2, 33, 15), ec(2, 34, 16)], &[ec(2, 33, 11), ec(2, 34, 12)], &[]], // 5
    [&[ec(2, 86, 68)], &[ec(4, 43, 27)], &[ec(4, 43, 19)], &[ec(4, 43, 15)], &[]], // 6
    [&[ec(2, 98, 78)], &[ec(4, 49, 31)], &[ec(2, 32, 14), ec(4, 33, 15)], &[ec(4, 39, 13), ec(1, 40, 14)], &[]], // 7
    [&[ec(2, 121, 97)], &[ec(2, 60, 38), ec(2, 61, 39)], &[ec(4, 40, 18), ec(2, 41, 19)], &[ec(4, 40, 14), ec(2, 41, 15)], &[]], // 8
    [&[ec(2, 146, 116)], &[ec(3, 58, 36), ec(2, 59, 37)], &[ec(4, 36, 16), ec(4, 37, 17)], &[ec(4, 36, 12), ec(4, 37, 13)], &[]], // 9
    [&[ec(2, 86, 68), ec(2, 87, 69)], &[ec(4, 69, 43), ec(1, 70, 44)], &[ec(6, 43, 19), ec(2, 44, 20)], &[ec(6, 43, 15), ec(2, 44, 16)], &[]], // 10
    [&[ec(4, 101, 81)], &[ec(1, 80, 50), ec(4, 81, 51)], &[ec(4, 50, 22), ec(4, 51, 23)], &[ec(3, 36, 12), ec(8, 37, 13)], &[]], // 11
    [&[ec(2, 116, 92), ec(2, 117, 93)], &[ec(6, 58, 36), ec(2, 59, 37)], &[ec(4, 46, 20), ec(6, 47, 21)], &[ec(7, 42, 14), ec(4, 43, 15)], &[]], // 12
    [&[ec(4, 133, 107)], &[ec(8, 59, 37), ec(1, 60, 38)], &[ec(8, 44, 20), ec(4, 45, 21)], &[ec(12, 33, 11), ec(4, 34, 12)], &[]], // 13
    [&[ec(3, 145, 115), ec(1, 146, 116)], &[ec(4, 64, 40), ec(5, 65, 41)], &[ec(11, 36, 16), ec(5, 37, 17)], &[ec(11, 36, 12), ec(5, 37, 13)], &[]], // 14
    [&[ec(5, 109, 87), ec(1, 110, 88)], &[ec(5, 65, 41), ec(5, 66, 42)], &[ec(5, 54, 24), ec(7, 55, 25)], &[ec(11, 36, 12), ec(7, 37, 13)], &[]], // 15
    [&[ec(5, 122, 98), ec(1, 123, 99)], &[ec(7, 73, 45), ec(3, 74, 46)], &[ec(15, 43, 19), ec(2, 44, 20)], &[ec(3, 45, 15), ec(13, 46, 16)], &[]], // 16
    [&[ec(1, 135, 107), ec(5, 136, 108)], &[ec(10, 74, 46), ec(1, 75, 47)], &[ec(1, 50, 22), ec(15, 51, 23)], &[ec(2, 42, 14), ec(17, 43, 15)], &[]], // 17
    [&[ec(5, 150, 120), ec(1, 151, 121)], &[ec(9, 69, 43), ec(4, 70, 44)], &[ec(17, 50, 22), ec(1, 51, 23)], &[ec(2, 42, 14), ec(19, 43, 15)], &[]], // 18
    [&[ec(3, 141, 113), ec(4, 142, 114)], &[ec(3, 70, 44), ec(11, 71, 45)], &[ec(17, 47, 21), ec(4, 48, 22)], &[ec(9, 39, 13), ec(16, 40, 14)], &[]], // 19
    [&[ec(3, 135, 107), ec(5, 136, 108)], &[ec(3, 67, 41), ec(13, 68, 42)], &[ec(15, 54, 24), ec(5, 55, 25)], &[ec(15, 43, 15), ec(10, 44, 16)], &[]], // 20
    [&[ec(4, 144, 116), ec(4, 145, 117)], &[ec(17, 68, 42)], &[ec(17, 50, 22), ec(6, 51, 23)], &[ec(19, 46, 16), ec(6, 47, 17)], &[]], // 21
    [&[ec(2, 139, 111), ec(7, 140, 112)], &[ec(17, 74, 46)], &[ec(7, 54, 24), ec(16, 55, 25)], &[ec(34, 37, 13)], &[]], // 22
    [&[ec(4, 151, 121), ec(5, 152, 122)], &[ec(4, 75, 47), ec(14, 76, 48)], &[ec(11, 54, 24), ec(14, 55, 25)], &[ec(16, 45, 15), ec(14, 46, 16)], &[]], // 23
    [&[ec(6, 147, 117), ec(4, 148, 118)], &[ec(6, 73, 45), ec(14, 74, 46)], &[ec(11, 54, 24), ec(16, 55, 25)], &[ec(30, 46, 16), ec(2, 47, 17)], &[]], // 24
    [&[ec(8, 132, 106), ec(4, 133, 107)], &[ec(8, 75, 47), ec(13, 76, 48)], &[ec(7, 54, 24), ec(22, 55, 25)], &[ec(22, 45, 15), ec(13, 46, 16)], &[]], // 25
    [&[ec(10, 142, 114), ec(2, 143, 115)], &[ec(19, 74, 46), ec(4, 75, 47)], &[ec(28, 50, 22), ec(6, 51, 23)], &[ec(33, 46, 16), ec(4, 47, 17)], &[]], // 26
    [&[ec(8, 152, 122), ec(4, 153, 123)], &[ec(22, 73, 45), ec(3, 74, 46)], &[ec(8, 53, 23), ec(26, 54, 24)], &[ec(12, 45, 15), ec(28, 46, 16)], &[]], // 27
    [&[ec(3, 147, 117), ec(10, 148, 118)], &[ec(3, 73, 45), ec(23, 74, 46)], &[ec(4, 54, 24), ec(31, 55, 25)], &[ec(11, 45, 15), ec(31, 46, 16)], &[]], // 28
    [&[ec(7, 146, 116), ec(7, 147, 117)], &[ec(21, 73, 45), ec(7, 74, 46)], &[ec(1, 53, 23), ec(37, 54, 24)], &[ec(19, 45, 15), ec(26, 46, 16)], &[]], // 29
    [&[ec(5, 145, 115), ec(10, 146, 116)], &[ec(19, 75, 47), ec(10, 76, 48)], &[ec(15, 54, 24), ec(25, 55, 25)], &[ec(23, 45, 15), ec(25, 46, 16)], &[]], // 30
    [&[ec(13, 145, 115), ec(3, 146, 116)], &[ec(2, 74, 46), ec(29, 75, 47)], &[ec(42, 54, 24), ec(1, 55, 25)], &[ec(23, 45, 15), ec(28, 46, 16)], &[]], // 31
    [&[ec(17, 145, 115)], &[ec(10, 74, 46), ec(23, 75, 47)], &[ec(10, 54, 24), ec(35, 55, 25)], &[ec(19, 45, 15), ec(35, 46, 16)], &[]], // 32
    [&[ec(17, 145, 115), ec(1, 146, 116)], &[ec(14, 74, 46), ec(21, 75, 47)], &[ec(29, 54, 24), ec(19, 55, 25)], &[ec(11, 45, 15), ec(46, 46, 16)], &[]], // 33
    [&[ec(13, 145, 115), ec(6, 146, 116)], &[ec(14, 74, 46), ec(23, 75, 47)], &[ec(44, 54, 24), ec(7, 55, 25)], &[ec(59, 46, 16), ec(1, 47, 17)], &[]], // 34
    [&[ec(12, 151, 121), ec(7, 152, 122)], &[ec(12, 75, 47), ec(26, 76, 48)], &[ec(39, 54, 24), ec(14, 55, 25)], &[ec(22, 45, 15), ec(41, 46, 16)], &[]], // 35
    [&[ec(6, 151, 121), ec(14, 152, 122)], &[ec(6, 75, 47), ec(34, 76, 48)], &[ec(46, 54, 24), ec(10, 55, 25)], &[ec(2, 45, 15), ec(64, 46, 16)], &[]], // 36
    [&[ec(17, 152, 122), ec(4, 153, 123)], &[ec(29, 74, 46), ec(14, 75, 47)], &[ec(49, 54, 24), ec(10, 55, 25)], &[ec(24, 45, 15), ec(46, 46, 16)], &[]], // 37
    [&[ec(4, 152, 122), ec(18, 153, 123)], &[ec(13, 74, 46), ec(32, 75, 47)], &[ec(48, 54, 24), ec(14, 55, 25)], &[ec(42, 45, 15), ec(32, 46, 16)], &[]], // 38
    [&[ec(20, 147, 117), ec(4, 148, 118)], &[ec(40, 75, 47), ec(7, 76, 48)], &[ec(43, 54, 24), ec(22, 55, 25)], &[ec(10, 45, 15), ec(67, 46, 16)], &[]], // 39
    [&[ec(19, 148, 118), ec(6, 149, 119)], &[ec(18, 75, 47), ec(31, 76, 48)], &[ec(34, 54, 24), ec(34, 55, 25)], &[ec(20, 45, 15), ec(61, 46, 16)], &[]], // 40
];

/// Format information for QR Codes, indexed by `error_bits << 3 | mask`.
pub(crate) static FORMAT_INFO: [u16; 32] = [
    0x5412, 0x5125, 0x5e7c, 0x5b4b, 0x45f9, 0x40ce, 0x4f97, 0x4aa0,
    0x77c4, 0x72f3, 0x7daa, 0x789d, 0x662f, 0x6318, 0x6c41, 0x6976,
    0x1689, 0x13be, 0x1ce7, 0x19d0, 0x0762, 0x0255, 0x0d0c, 0x083b,
    0x355f, 0x3068, 0x3f31, 0x3a06, 0x24b4, 0x2183, 0x2eda, 0x2bed,
];

/// Format information for Micro QR Codes, indexed by `symbol_number << 2 | mask`.
pub(crate) static FORMAT_INFO_MICRO: [u16; 32] = [
    0x4445, 0x4172, 0x4e2b, 0x4b1c, 0x55ae, 0x5099, 0x5fc0, 0x5af7,
    0x6793, 0x62a4, 0x6dfd, 0x68ca, 0x7678, 0x734f, 0x7c16, 0x7921,
    0x06de, 0x03e9, 0x0cb0, 0x0987, 0x1735, 0x1202, 0x1d5b, 0x186c,
    0x2508, 0x203f, 0x2f66, 0x2a51, 0x34e3, 0x31d4, 0x3e8d, 0x3bba,
];

/// Version information for versions 7 to 40.
pub(crate) static VERSION_INFO: [u32; 34] = [
    0x07c94, 0x085bc, 0x09a99, 0x0a4d3, 0x0bbf6, 0x0c762, 0x0d847, 0x0e60d,
    0x0f928, 0x10b78, 0x1145d, 0x12a17, 0x13532, 0x149a6, 0x15683, 0x168c9,
    0x177ec, 0x18ec4, 0x191e1, 0x1afab, 0x1b08e, 0x1cc1a, 0x1d33f, 0x1ed75,
    0x1f250, 0x209d5, 0x216f0, 0x228ba, 0x2379f, 0x24b0b, 0x2542e, 0x26a64,
    0x27541, 0x28c69,
];

/// Center coordinates of the alignment patterns for versions 2 to 40.
pub(crate) static ALIGNMENT_POS: [&[usize]; 39] = [
    &[6, 18], // 2
    &[6, 22], // 3
    &[6, 26], // 4
    &[6, 30], // 5
    &[6, 34], // 6
    &[6, 22, 38], // 7
    &[6, 24, 42], // 8
    &[6, 26, 46], // 9
    &[6, 28, 50], // 10
    &[6, 30, 54], // 11
    &[6, 32, 58], // 12
    &[6, 34, 62], // 13
    &[6, 26, 46, 66], // 14
    &[6, 26, 48, 70], // 15
    &[6, 26, 50, 74], // 16
    &[6, 30, 54, 78], // 17
    &[6, 30, 56, 82], // 18
    &[6, 30, 58, 86], // 19
    &[6, 34, 62, 90], // 20
    &[6, 28, 50, 72, 94], // 21
    &[6, 26, 50, 74, 98], // 22
    &[6, 30, 54, 78, 102], // 23
    &[6, 28, 54, 80, 106], // 24
    &[6, 32, 58, 84, 110], // 25
    &[6, 30, 58, 86, 114], // 26
    &[6, 34, 62, 90, 118], // 27
    &[6, 26, 50, 74, 98, 122], // 28
    &[6, 30, 54, 78, 102, 126], // 29
    &[6, 26, 52, 78, 104, 130], // 30
    &[6, 30, 56, 82, 108, 134], // 31
    &[6, 34, 60, 86, 112, 138], // 32
    &[6, 30, 58, 86, 114, 142], // 33
    &[6, 34, 62, 90, 118, 146], // 34
    &[6, 30, 54, 78, 102, 126, 150], // 35
    &[6, 24, 50, 76, 102, 128, 154], // 36
    &[6, 28, 54, 80, 106, 132, 158], // 37
    &[6, 32, 58, 84, 110, 136, 162], // 38
    &[6, 26, 54, 82, 110, 138, 166], // 39
    &[6, 30, 58, 86, 114, 142, 170], // 40
];

/// Generator polynomials in exponent form, keyed by the number of error correction codewords.
pub(crate) static GEN_POLY: [(usize, &[u8]); 18] = [
    (2, &[25, 1]),
    (5, &[113, 164, 166, 119, 10]),
    (6, &[166, 0, 134, 5, 176, 15]),
    (7, &[87, 229, 146, 149, 238, 102, 21]),
    (8, &[175, 238, 208, 249, 215, 252, 196, 28]),
    (10, &[251, 67, 46, 61, 118, 70, 64, 94, 32, 45]),
    (13, &[74, 152, 176, 100, 86, 100, 106, 104, 130, 218, 206, 140, 78]),
    (14, &[199, 249, 155, 48, 190, 124, 218, 137, 216, 87, 207, 59, 22, 91]),
    (15, &[8, 183, 61, 91, 202, 37, 51, 58, 58, 237, 140, 124, 5, 99, 105]),
    (16, &[120, 104, 107, 109, 102, 161, 76, 3, 91, 191, 147, 169, 182, 194, 225, 120]),
    (17, &[43, 139, 206, 78, 43, 239, 123, 206, 214, 147, 24, 99, 150, 39, 243, 163, 136]),
    (18, &[215, 234, 158, 94, 184, 97, 118, 170, 79, 187, 152, 148, 252, 179, 5, 98, 96, 153]),
    (20, &[17, 60, 79, 50, 61, 163, 26, 187, 202, 180, 221, 225, 83, 239, 156, 164, 212, 212, 188, 190]),
    (22, &[210, 171, 247, 242, 93, 230, 14, 109, 221, 53, 200, 74, 8, 172, 98, 80, 219, 134, 160, 105, 165, 231]),
    (24, &[229, 121, 135, 48, 211, 117, 251, 126, 159, 180, 169, 152, 192, 226, 228, 218, 111, 0, 117, 232, 87, 96, 227, 21]),
    (26, &[173, 125, 158, 2, 103, 182, 118, 17, 145, 201, 111, 28, 165, 53, 161, 21, 245, 142, 13, 102, 48, 227, 153, 145, 218, 70]),
    (28, &[168, 223, 200, 104, 224, 234, 108, 180, 110, 190, 195, 147, 205, 27, 232, 201, 21, 43, 245, 87, 42, 195, 212, 119, 242, 37, 9, 123]),
    (30, &[41, 173, 145, 152, 216, 31, 179, 182, 50, 48, 110, 86, 239, 96, 222, 125, 42, 173, 226, 193, 224, 130, 156, 37, 251, 216, 238, 40, 192, 180]),
];

/// GF(256) logarithms for the prime polynomial 0x11d.
pub(crate) static GALOIS_LOG: [u8; 256] = [
    0, 0, 1, 25, 2, 50, 26, 198, 3, 223, 51, 238, 27, 104, 199, 75,
    4, 100, 224, 14, 52, 141, 239, 129, 28, 193, 105, 248, 200, 8, 76, 113,
    5, 138, 101, 47, 225, 36, 15, 33, 53, 147, 142, 218, 240, 18, 130, 69,
    29, 181, 194, 125, 106, 39, 249, 185, 201, 154, 9, 120, 77, 228, 114, 166,
    6, 191, 139, 98, 102, 221, 48, 253, 226, 152, 37, 179, 16, 145, 34, 136,
    54, 208, 148, 206, 143, 150, 219, 189, 241, 210, 19, 92, 131, 56, 70, 64,
    30, 66, 182, 163, 195, 72, 126, 110, 107, 58, 40, 84, 250, 133, 186, 61,
    202, 94, 155, 159, 10, 21, 121, 43, 78, 212, 229, 172, 115, 243, 167, 87,
    7, 112, 192, 247, 140, 128, 99, 13, 103, 74, 222, 237, 49, 197, 254, 24,
    227, 165, 153, 119, 38, 184, 180, 124, 17, 68, 146, 217, 35, 32, 137, 46,
    55, 63, 209, 91, 149, 188, 207, 205, 144, 135, 151, 178, 220, 252, 190, 97,
    242, 86, 211, 171, 20, 42, 93, 158, 132, 60, 57, 83, 71, 109, 65, 162,
    31, 45, 67, 216, 183, 123, 164, 118, 196, 23, 73, 236, 127, 12, 111, 246,
    108, 161, 59, 82, 41, 157, 85, 170, 251, 96, 134, 177, 187, 204, 62, 90,
    203, 89, 95, 176, 156, 169, 160, 81, 11, 245, 22, 235, 122, 117, 44, 215,
    79, 174, 213, 233, 230, 231, 173, 232, 116, 214, 244, 234, 168, 80, 88, 175,
];

/// GF(256) antilogarithms, repeated once so exponent sums need no reduction.
pub(crate) static GALOIS_EXP: [u8; 510] = [
    1, 2, 4, 8, 16, 32, 64, 128, 29, 58, 116, 232, 205, 135, 19, 38,
    76, 152, 45, 90, 180, 117, 234, 201, 143, 3, 6, 12, 24, 48, 96, 192,
    157, 39, 78, 156, 37, 74, 148, 53, 106, 212, 181, 119, 238, 193, 159, 35,
    70, 140, 5, 10, 20, 40, 80, 160, 93, 186, 105, 210, 185, 111, 222, 161,
    95, 190, 97, 194, 153, 47, 94, 188, 101, 202, 137, 15, 30, 60, 120, 240,
    253, 231, 211, 187, 107, 214, 177, 127, 254, 225, 223, 163, 91, 182, 113, 226,
    217, 175, 67, 134, 17, 34, 68, 136, 13, 26, 52, 104, 208, 189, 103, 206,
    129, 31, 62, 124, 248, 237, 199, 147, 59, 118, 236, 197, 151, 51, 102, 204,
    133, 23, 46, 92, 184, 109, 218, 169, 79, 158, 33, 66, 132, 21, 42, 84,
    168, 77, 154, 41, 82, 164, 85, 170, 73, 146, 57, 114, 228, 213, 183, 115,
    230, 209, 191, 99, 198, 145, 63, 126, 252, 229, 215, 179, 123, 246, 241, 255,
    227, 219, 171, 75, 150, 49, 98, 196, 149, 55, 110, 220, 165, 87, 174, 65,
    130, 25, 50, 100, 200, 141, 7, 14, 28, 56, 112, 224, 221, 167, 83, 166,
    81, 162, 89, 178, 121, 242, 249, 239, 195, 155, 43, 86, 172, 69, 138, 9,
    18, 36, 72, 144, 61, 122, 244, 245, 247, 243, 251, 235, 203, 139, 11, 22,
    44, 88, 176, 125, 250, 233, 207, 131, 27, 54, 108, 216, 173, 71, 142, 1,
    2, 4, 8, 16, 32, 64, 128, 29, 58, 116, 232, 205, 135, 19, 38, 76,
    152, 45, 90, 180, 117, 234, 201, 143, 3, 6, 12, 24, 48, 96, 192, 157,
    39, 78, 156, 37, 74, 148, 53, 106, 212, 181, 119, 238, 193, 159, 35, 70,
    140, 5, 10, 20, 40, 80, 160, 93, 186, 105, 210, 185, 111, 222, 161, 95,
    190, 97, 194, 153, 47, 94, 188, 101, 202, 137, 15, 30, 60, 120, 240, 253,
    231, 211, 187, 107, 214, 177, 127, 254, 225, 223, 163, 91, 182, 113, 226, 217,
    175, 67, 134, 17, 34, 68, 136, 13, 26, 52, 104, 208, 189, 103, 206, 129,
    31, 62, 124, 248, 237, 199, 147, 59, 118, 236, 197, 151, 51, 102, 204, 133,
    23, 46, 92, 184, 109, 218, 169, 79, 158, 33, 66, 132, 21, 42, 84, 168,
    77, 154, 41, 82, 164, 85, 170, 73, 146, 57, 114, 228, 213, 183, 115, 230,
    209, 191, 99, 198, 145, 63, 126, 252, 229, 215, 179, 123, 246, 241, 255, 227,
    219, 171, 75, 150, 49, 98, 196, 149, 55, 110, 220, 165, 87, 174, 65, 130,
    25, 50, 100, 200, 141, 7, 14, 28, 56, 112, 224, 221, 167, 83, 166, 81,
    162, 89, 178, 121, 242, 249, 239, 195, 155, 43, 86, 172, 69, 138, 9, 18,
    36, 72, 144, 61, 122, 244, 245, 247, 243, 251, 235, 203, 139, 11, 22, 44,
    88, 176, 125, 250, 233, 207, 131, 27, 54, 108, 216, 173, 71, 142,
];
