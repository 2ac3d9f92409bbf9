//! Assembling the data bit stream and the final codeword sequence.

use crate::bitbuffer::BitBuffer;
use crate::consts::{self, MODE_ECI, MODE_STRUCTURED_APPEND, PAD_CODEWORDS};
use crate::error::{QrError, Result};
use crate::reed_solomon::ReedSolomonGenerator;
use crate::segment::{Mode, Segment, Segments};
use crate::version::{ErrorLevel, Version};

/// Header fields of one symbol of a Structured Append sequence.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) struct StructuredAppendInfo {
    /// Zero based position of the symbol.
    pub index: u8,
    /// Number of symbols in the sequence.
    pub total: u8,
    /// XOR of all bytes of the complete content.
    pub parity: u8,
}

impl StructuredAppendInfo {
    fn write(&self, buf: &mut BitBuffer) {
        buf.append_bits(MODE_STRUCTURED_APPEND, 4);
        buf.append_bits(u32::from(self.index), 4);
        buf.append_bits(u32::from(self.total) - 1, 4);
        buf.append_bits(u32::from(self.parity), 8);
    }
}

/// Writes the optional ECI header, the mode and character count indicators
/// and the data bits of a segment.
pub(crate) fn write_segment(buf: &mut BitBuffer, segment: &Segment, version: Version, eci: bool) -> Result<()> {
    let mode = segment.mode();
    if eci && segment.needs_eci() {
        if let Some(encoding) = segment.encoding() {
            buf.append_bits(MODE_ECI, 4);
            buf.append_bits(u32::from(encoding.eci_designator()?), 8);
        }
    }
    let unsupported = || QrError::Mode(format!("mode \"{}\" is not available in version {}", mode, version));
    if !version.is_micro() {
        buf.append_bits(mode.indicator(), 4);
        if mode == Mode::Hanzi {
            buf.append_bits(consts::HANZI_SUBSET_GB2312, 4);
        }
    } else if version != Version::M1 {
        let indicator = mode.micro_indicator().ok_or_else(unsupported)?;
        buf.append_bits(indicator, version.index() as u8);
    }
    let cci = consts::char_count_bits(mode, version).ok_or_else(unsupported)?;
    buf.append_bits(segment.char_count() as u32, cci);
    buf.extend(segment.bits());
    Ok(())
}

/// Appends up to the terminator length of zero bits without exceeding the capacity.
pub(crate) fn write_terminator(buf: &mut BitBuffer, capacity: usize, version: Version) {
    let remaining = capacity.saturating_sub(buf.len());
    buf.append_zeros(remaining.min(consts::terminator_length(version)));
}

/// Pads to the next codeword boundary. M1 and M3 end with a 4-bit codeword
/// and are left as they are.
pub(crate) fn write_padding_bits(buf: &mut BitBuffer, version: Version) {
    if !has_short_codeword(version) {
        buf.append_zeros((8 - buf.len() % 8) % 8);
    }
}

/// Fills the remaining data capacity with the alternating pad codewords, or
/// with zero bits for M1 and M3.
pub(crate) fn write_pad_codewords(buf: &mut BitBuffer, version: Version, capacity: usize) {
    if has_short_codeword(version) {
        buf.append_zeros(capacity.saturating_sub(buf.len()));
    } else {
        let count = (capacity / 8).saturating_sub(buf.len() / 8);
        for &pad in PAD_CODEWORDS.iter().cycle().take(count) {
            buf.append_bits(u32::from(pad), 8);
        }
    }
}

fn has_short_codeword(version: Version) -> bool {
    version == Version::M1 || version == Version::M3
}

/// Builds the data codewords of a symbol. The returned bytes fill the data
/// capacity; for M1 and M3 the low nibble of the final codeword is zero.
pub(crate) fn make_data_codewords(
    segments: &Segments,
    version: Version,
    error: Option<ErrorLevel>,
    eci: bool,
    sa_info: Option<&StructuredAppendInfo>,
) -> Result<Vec<u8>> {
    let capacity = consts::symbol_capacity(version, error).ok_or_else(|| {
        QrError::ErrorLevel(format!(
            "error correction level \"{}\" is not available in version {}",
            error.map_or("-", ErrorLevel::name),
            version
        ))
    })?;
    let mut buf = BitBuffer::with_capacity(capacity);
    if let Some(info) = sa_info {
        info.write(&mut buf);
    }
    for segment in segments {
        write_segment(&mut buf, segment, version, eci)?;
    }
    if buf.len() > capacity {
        return Err(QrError::InvalidArgument(format!(
            "{} bits exceed the capacity of {} bits",
            buf.len(),
            capacity
        )));
    }
    write_terminator(&mut buf, capacity, version);
    write_padding_bits(&mut buf, version);
    write_pad_codewords(&mut buf, version, capacity);
    debug_assert_eq!((buf.len() + 7) / 8, (capacity + 7) / 8);
    Ok(buf.to_bytes())
}

/// Splits the data codewords into blocks, appends the error correction
/// codewords and interleaves everything into the bit stream placed into the
/// matrix, including the remainder bits.
pub(crate) fn make_final_message(version: Version, error: Option<ErrorLevel>, codewords: &[u8]) -> BitBuffer {
    let ec_infos = consts::ecc_blocks(version, error);
    let short_last = has_short_codeword(version);
    let mut data_blocks: Vec<&[u8]> = Vec::new();
    let mut error_blocks: Vec<Vec<u8>> = Vec::new();
    let mut rest = codewords;
    for info in ec_infos {
        let rs = ReedSolomonGenerator::new(info.num_total - info.num_data);
        for _ in 0..info.num_blocks {
            let (block, tail) = rest.split_at(info.num_data);
            error_blocks.push(rs.compute_remainder(block));
            data_blocks.push(block);
            rest = tail;
        }
    }
    assert!(rest.is_empty(), "codewords do not match the block layout");

    let max_data = ec_infos.iter().map(|b| b.num_data).max().unwrap_or(0);
    let max_ec = ec_infos.iter().map(|b| b.num_total - b.num_data).max().unwrap_or(0);
    let total: usize = ec_infos.iter().map(|b| b.num_blocks * b.num_total).sum();
    let mut buf = BitBuffer::with_capacity(total * 8 + 7);
    for i in 0..max_data {
        for block in &data_blocks {
            match block.get(i) {
                // Micro QR Codes consist of a single block
                Some(&cw) if short_last && i + 1 == block.len() => buf.append_bits(u32::from(cw >> 4), 4),
                Some(&cw) => buf.append_bits(u32::from(cw), 8),
                None => {}
            }
        }
    }
    for i in 0..max_ec {
        for block in &error_blocks {
            if let Some(&cw) = block.get(i) {
                buf.append_bits(u32::from(cw), 8);
            }
        }
    }
    buf.append_zeros(consts::remainder_bits(version));
    buf
}
