//! Encoded symbols and the view renderers take of them.

use core::ops::Index;

use crate::error::{QrError, Result};
use crate::matrix::{Matrix, Module, ModuleType};
use crate::segment::{Mode, Segments};
use crate::version::{ErrorLevel, Mask, Version};

/// A finished QR Code or Micro QR Code symbol.
///
/// Instances are immutable after creation. Use [`crate::encoder::encode`] or
/// one of the `make*` functions at the crate root to create one.
///
/// # Example
///
/// ```rust
/// let qr = isoqr::make_qr("Hello, World!").unwrap();
///
/// assert_eq!(qr.designator(), "1-M");
/// assert_eq!(qr.size(), 21);
/// assert!(qr.get_module(0, 0));
/// ```
#[derive(Clone, Debug)]
pub struct QrCode {
    matrix: Matrix,
    version: Version,
    error: Option<ErrorLevel>,
    mask: Mask,
    segments: Segments,
}

impl QrCode {
    pub(crate) fn new(
        matrix: Matrix,
        version: Version,
        error: Option<ErrorLevel>,
        mask: Mask,
        segments: Segments,
    ) -> Self {
        Self { matrix, version, error, mask, segments }
    }

    /// Returns the module matrix.
    pub fn matrix(&self) -> &Matrix {
        &self.matrix
    }

    /// Returns this symbol's version, M1..M4 or 1..40.
    pub fn version(&self) -> Version {
        self.version
    }

    /// Returns the error correction level, `None` for M1.
    pub fn error(&self) -> Option<ErrorLevel> {
        self.error
    }

    /// Returns the applied mask, in the range [0, 3] for Micro QR Codes and
    /// [0, 7] otherwise.
    pub fn mask(&self) -> Mask {
        self.mask
    }

    /// Returns the encoded segments.
    pub fn segments(&self) -> &Segments {
        &self.segments
    }

    /// Returns the width and height in modules, without quiet zone.
    pub fn size(&self) -> usize {
        self.matrix.size()
    }

    pub fn is_micro(&self) -> bool {
        self.version.is_micro()
    }

    /// Returns the mode if all segments share it, `None` for mixed content.
    pub fn mode(&self) -> Option<Mode> {
        let mut modes = self.segments.modes();
        let first = modes.next()?;
        modes.all(|mode| mode == first).then_some(first)
    }

    /// Returns the version and error level, e.g. "M1", "M3-L" or "1-H".
    pub fn designator(&self) -> String {
        match self.error {
            Some(error) => format!("{}-{}", self.version, error),
            None => self.version.to_string(),
        }
    }

    /// Returns the recommended quiet zone: 2 modules for Micro QR Codes, 4 otherwise.
    pub fn default_border_size(&self) -> usize {
        if self.is_micro() {
            2
        } else {
            4
        }
    }

    /// Returns the rendered width and height of the symbol, including the
    /// quiet zone. `border` defaults to [`QrCode::default_border_size`].
    pub fn symbol_size(&self, scale: usize, border: Option<usize>) -> Result<(usize, usize)> {
        if scale == 0 {
            return Err(QrError::InvalidArgument("scale must be greater than 0".into()));
        }
        let border = border.unwrap_or_else(|| self.default_border_size());
        let dim = (self.size() + 2 * border) * scale;
        Ok((dim, dim))
    }

    /// Returns the color of the module at the given coordinates.
    ///
    /// Returns `true` for dark modules and `false` for light modules.
    /// Coordinates outside the symbol's bounds return `false`.
    ///
    /// # Arguments
    ///
    /// * `x` - X-coordinate (0 is left).
    /// * `y` - Y-coordinate (0 is top).
    pub fn get_module(&self, x: i32, y: i32) -> bool {
        let range = 0..self.size() as i32;
        range.contains(&x) && range.contains(&y) && self.matrix.is_dark(y as usize, x as usize)
    }

    /// Iterates over the rows of the rendered symbol. Each module, the quiet
    /// zone included, is repeated `scale` times in both directions; `true`
    /// is dark.
    pub fn matrix_iter(
        &self,
        scale: usize,
        border: Option<usize>,
    ) -> Result<impl Iterator<Item = Vec<bool>> + '_> {
        Ok(self
            .matrix_iter_detail(scale, border)?
            .map(|row| row.into_iter().map(Module::is_dark).collect()))
    }

    /// Like [`QrCode::matrix_iter`], but yields the tagged modules. The quiet
    /// zone is reported as light [`ModuleType::QuietZone`] modules.
    pub fn matrix_iter_detail(
        &self,
        scale: usize,
        border: Option<usize>,
    ) -> Result<impl Iterator<Item = Vec<Module>> + '_> {
        let (width, _) = self.symbol_size(scale, border)?;
        let border = border.unwrap_or_else(|| self.default_border_size()) as isize;
        let size = self.size() as isize;
        let quiet = Module::Light(ModuleType::QuietZone);
        let module_at = move |row: isize, col: isize| {
            let (r, c) = (row - border, col - border);
            if (0..size).contains(&r) && (0..size).contains(&c) {
                self.matrix.get(r as usize, c as usize)
            } else {
                quiet
            }
        };
        Ok((0..width).map(move |y| {
            let row = (y / scale) as isize;
            (0..width).map(|x| module_at(row, (x / scale) as isize)).collect()
        }))
    }
}

/// The symbols of a Structured Append sequence, in reading order.
#[derive(Clone, Debug)]
pub struct QrCodeSequence {
    symbols: Vec<QrCode>,
}

impl QrCodeSequence {
    pub(crate) fn new(symbols: Vec<QrCode>) -> Self {
        Self { symbols }
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&QrCode> {
        self.symbols.get(index)
    }

    pub fn iter(&self) -> core::slice::Iter<'_, QrCode> {
        self.symbols.iter()
    }
}

impl Index<usize> for QrCodeSequence {
    type Output = QrCode;

    fn index(&self, index: usize) -> &QrCode {
        &self.symbols[index]
    }
}

impl IntoIterator for QrCodeSequence {
    type Item = QrCode;
    type IntoIter = std::vec::IntoIter<QrCode>;

    fn into_iter(self) -> Self::IntoIter {
        self.symbols.into_iter()
    }
}

impl<'a> IntoIterator for &'a QrCodeSequence {
    type Item = &'a QrCode;
    type IntoIter = core::slice::Iter<'a, QrCode>;

    fn into_iter(self) -> Self::IntoIter {
        self.symbols.iter()
    }
}
