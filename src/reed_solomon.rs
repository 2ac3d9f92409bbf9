use crate::consts::{self, GALOIS_EXP, GALOIS_LOG};

/// Computes Reed-Solomon error correction codewords over GF(2^8/0x11D).
///
/// The divisor is the generator polynomial of the given degree without its
/// leading term, coefficients stored highest power first.
pub(crate) struct ReedSolomonGenerator {
    divisor: Vec<u8>,
}

impl ReedSolomonGenerator {
    /// Panics if no error correction block uses `degree` codewords.
    pub fn new(degree: usize) -> Self {
        let exponents = match consts::generator_polynomial(degree) {
            Some(exponents) => exponents,
            None => panic!("no generator polynomial of degree {}", degree),
        };
        Self {
            divisor: exponents.iter().map(|&e| GALOIS_EXP[usize::from(e)]).collect(),
        }
    }

    pub fn degree(&self) -> usize {
        self.divisor.len()
    }

    /// Returns the remainder of `data` times x^degree divided by the
    /// generator polynomial, i.e. the error correction codewords.
    pub fn compute_remainder(&self, data: &[u8]) -> Vec<u8> {
        let mut result = vec![0u8; self.degree()];
        for b in data {
            let factor = b ^ result[0];
            result.copy_within(1.., 0);
            let last = result.len() - 1;
            result[last] = 0;
            for (x, &y) in result.iter_mut().zip(self.divisor.iter()) {
                *x ^= multiply(y, factor);
            }
        }
        result
    }
}

fn multiply(x: u8, y: u8) -> u8 {
    if x == 0 || y == 0 {
        return 0;
    }
    GALOIS_EXP[usize::from(GALOIS_LOG[usize::from(x)]) + usize::from(GALOIS_LOG[usize::from(y)])]
}
