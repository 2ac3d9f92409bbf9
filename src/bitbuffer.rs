use core::fmt;

/// An append-only sequence of bits, packed MSB first into bytes.
///
/// Bits beyond [`len`](BitBuffer::len) in the final byte are always zero, so
/// [`to_bytes`](BitBuffer::to_bytes) yields zero-padded codewords.
#[derive(Clone, Default, PartialEq, Eq, Debug)]
pub struct BitBuffer {
    data: Vec<u8>,
    length: usize,
}

impl BitBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(bits: usize) -> Self {
        Self {
            data: Vec::with_capacity((bits + 7) / 8),
            length: 0,
        }
    }

    /// Returns the number of bits.
    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Appends the given number of low-order bits of `val`, most significant first.
    pub fn append_bits(&mut self, val: u32, len: u8) {
        assert!(len <= 31 && (val >> len) == 0, "value does not fit into {} bits", len);
        for i in (0..len).rev() {
            self.push((val >> i) & 1 != 0);
        }
    }

    pub fn push(&mut self, bit: bool) {
        let shift = 7 - (self.length & 7);
        if shift == 7 {
            self.data.push(0);
        }
        if bit {
            let last = self.data.len() - 1;
            self.data[last] |= 1 << shift;
        }
        self.length += 1;
    }

    /// Appends each byte as eight bits.
    pub fn append_bytes(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.append_bits(u32::from(b), 8);
        }
    }

    pub fn append_zeros(&mut self, count: usize) {
        for _ in 0..count {
            self.push(false);
        }
    }

    pub fn extend(&mut self, other: &BitBuffer) {
        if self.length % 8 == 0 {
            self.data.extend_from_slice(&other.data);
            self.length += other.length;
        } else {
            for bit in other.iter() {
                self.push(bit);
            }
        }
    }

    /// Returns the bit at the given position.
    pub fn get(&self, index: usize) -> bool {
        assert!(index < self.length, "bit index out of range");
        (self.data[index >> 3] >> (7 - (index & 7))) & 1 != 0
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.length).map(move |i| self.get(i))
    }

    /// Returns the bits as 8-bit codewords, the last one padded with zeros.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.data.clone()
    }
}

impl fmt::Display for BitBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.iter() {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_bits_msb_first() {
        let mut buf = BitBuffer::new();
        buf.append_bits(0b101, 3);
        buf.append_bits(0x1, 4);
        assert_eq!(buf.len(), 7);
        assert_eq!(buf.to_string(), "1010001");
        assert_eq!(buf.to_bytes(), vec![0b1010_0010]);
    }

    #[test]
    fn to_bytes_pads_last_group() {
        let mut buf = BitBuffer::new();
        buf.append_bytes(&[0xEC, 0x11]);
        buf.append_bits(0xF, 4);
        assert_eq!(buf.to_bytes(), vec![0xEC, 0x11, 0xF0]);
    }

    #[test]
    fn extend_unaligned() {
        let mut a = BitBuffer::new();
        a.append_bits(0b1, 1);
        let mut b = BitBuffer::new();
        b.append_bits(0b0110, 4);
        a.extend(&b);
        assert_eq!(a.to_string(), "10110");

        let mut c = BitBuffer::new();
        c.append_bytes(&[0xAB]);
        c.extend(&a);
        assert_eq!(c.to_string(), "1010101110110");
    }

    #[test]
    fn zero_length_append_is_noop() {
        let mut buf = BitBuffer::new();
        buf.append_bits(0, 0);
        assert!(buf.is_empty());
        assert!(buf.to_bytes().is_empty());
    }
}
