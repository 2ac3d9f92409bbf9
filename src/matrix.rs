//! The module grid of a symbol and the placement of its function patterns,
//! codewords, format and version information.

use crate::bitbuffer::BitBuffer;
use crate::consts;
use crate::version::{ErrorLevel, Mask, Version};

/// The role of a module within the symbol.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum ModuleType {
    FinderPattern,
    Separator,
    Timing,
    Alignment,
    Format,
    Version,
    /// The single dark module next to the lower left finder pattern.
    DarkModule,
    Data,
    /// Border around the symbol, only produced by renderers.
    QuietZone,
}

/// A single module of the matrix.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Module {
    /// Not yet assigned. A finished symbol contains no unset modules.
    Unset,
    /// Reserved for format or version information which is written last.
    Reserved(ModuleType),
    Light(ModuleType),
    Dark(ModuleType),
}

impl Module {
    #[inline]
    pub fn is_dark(self) -> bool {
        matches!(self, Module::Dark(_))
    }

    pub fn module_type(self) -> Option<ModuleType> {
        match self {
            Module::Unset => None,
            Module::Reserved(t) | Module::Light(t) | Module::Dark(t) => Some(t),
        }
    }

    pub(crate) fn with_color(module_type: ModuleType, dark: bool) -> Self {
        if dark {
            Module::Dark(module_type)
        } else {
            Module::Light(module_type)
        }
    }

    pub(crate) fn is_data(self) -> bool {
        matches!(self, Module::Light(ModuleType::Data) | Module::Dark(ModuleType::Data))
    }

    /// Inverts a light or dark module, keeping its type.
    pub(crate) fn toggled(self) -> Self {
        match self {
            Module::Light(t) => Module::Dark(t),
            Module::Dark(t) => Module::Light(t),
            other => other,
        }
    }
}

/// A square grid of modules, addressed by row and column.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Matrix {
    size: usize,
    modules: Vec<Module>,
}

impl Matrix {
    /// Creates the matrix of `version` with the format and version areas
    /// reserved and the timing patterns drawn.
    pub(crate) fn new(version: Version) -> Self {
        let size = version.size();
        let mut matrix = Self {
            size,
            modules: vec![Module::Unset; size * size],
        };
        if version.value() >= 7 {
            for i in 0..6 {
                for j in size - 11..size - 8 {
                    matrix.set(i, j, Module::Reserved(ModuleType::Version));
                    matrix.set(j, i, Module::Reserved(ModuleType::Version));
                }
            }
        }
        for i in 0..9 {
            matrix.set(i, 8, Module::Reserved(ModuleType::Format));
            matrix.set(8, i, Module::Reserved(ModuleType::Format));
        }
        if !version.is_micro() {
            for i in 1..=8 {
                matrix.set(size - i, 8, Module::Reserved(ModuleType::Format));
                matrix.set(8, size - i, Module::Reserved(ModuleType::Format));
            }
        }
        matrix.add_timing_patterns(version.is_micro());
        matrix
    }

    /// Returns the width and height, in modules.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Panics if the position is outside the matrix.
    pub fn get(&self, row: usize, col: usize) -> Module {
        assert!(row < self.size && col < self.size, "position out of range");
        self.modules[row * self.size + col]
    }

    #[inline]
    pub fn is_dark(&self, row: usize, col: usize) -> bool {
        self.get(row, col).is_dark()
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, module: Module) {
        self.modules[row * self.size + col] = module;
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Module]> + '_ {
        self.modules.chunks(self.size)
    }

    pub(crate) fn modules(&self) -> &[Module] {
        &self.modules
    }

    pub(crate) fn modules_mut(&mut self) -> &mut [Module] {
        &mut self.modules
    }

    fn add_timing_patterns(&mut self, is_micro: bool) {
        let (fixed, stop) = if is_micro { (0, self.size) } else { (6, self.size - 8) };
        for i in 8..stop {
            let module = Module::with_color(ModuleType::Timing, i % 2 == 0);
            self.set(i, fixed, module);
            self.set(fixed, i, module);
        }
    }

    /// Draws the finder patterns including their separators: one in the
    /// upper left corner for Micro QR Codes, three for QR Codes.
    pub(crate) fn add_finder_patterns(&mut self, is_micro: bool) {
        let size = self.size;
        self.add_finder_pattern(3, 3);
        if !is_micro {
            self.add_finder_pattern(3, size - 4);
            self.add_finder_pattern(size - 4, 3);
        }
    }

    fn add_finder_pattern(&mut self, row: usize, col: usize) {
        for dr in -4i32..=4 {
            for dc in -4i32..=4 {
                let (r, c) = (row as i32 + dr, col as i32 + dc);
                if r < 0 || c < 0 || r >= self.size as i32 || c >= self.size as i32 {
                    continue;
                }
                let module = match dr.abs().max(dc.abs()) {
                    4 => Module::Light(ModuleType::Separator),
                    2 => Module::Light(ModuleType::FinderPattern),
                    _ => Module::Dark(ModuleType::FinderPattern),
                };
                self.set(r as usize, c as usize, module);
            }
        }
    }

    /// Draws the alignment patterns of QR Codes from version 2 onwards.
    pub(crate) fn add_alignment_patterns(&mut self, version: Version) {
        let positions = consts::alignment_positions(version);
        let size = self.size;
        for &row in positions {
            for &col in positions {
                let overlaps_finder = (row == 6 && (col == 6 || col + 7 == size)) || (col == 6 && row + 7 == size);
                if overlaps_finder {
                    continue;
                }
                for dr in -2i32..=2 {
                    for dc in -2i32..=2 {
                        let dark = dr.abs().max(dc.abs()) != 1;
                        self.set(
                            (row as i32 + dr) as usize,
                            (col as i32 + dc) as usize,
                            Module::with_color(ModuleType::Alignment, dark),
                        );
                    }
                }
            }
        }
    }

    /// Places the final message bits into the unset modules, in two module
    /// wide columns running alternately upwards and downwards from the right.
    pub(crate) fn add_codewords(&mut self, bits: &BitBuffer, version: Version) {
        let size = self.size;
        let is_micro = version.is_micro();
        // M1 and M3 would otherwise start in the upper right corner
        let inc = if version == Version::M1 || version == Version::M3 { 2 } else { 0 };
        let mut bits_iter = bits.iter();
        let mut placed = 0;
        let mut right = size - 1;
        while right > 0 {
            let column = if !is_micro && right <= 6 { right - 1 } else { right };
            for vertical in 0..size {
                for z in 0..2 {
                    let j = column - z;
                    let mut upwards = ((column + inc) & 2) == 0;
                    if !is_micro {
                        upwards ^= j < 6;
                    }
                    let i = if upwards { size - 1 - vertical } else { vertical };
                    if self.get(i, j) != Module::Unset {
                        continue;
                    }
                    if let Some(bit) = bits_iter.next() {
                        self.set(i, j, Module::with_color(ModuleType::Data, bit));
                        placed += 1;
                    }
                }
            }
            if right < 2 {
                break;
            }
            right -= 2;
        }
        assert_eq!(placed, bits.len(), "codewords do not fit the data region");
    }

    /// Writes the 15 format information bits and, for QR Codes, the dark module.
    pub(crate) fn add_format_info(&mut self, version: Version, error: Option<ErrorLevel>, mask: Mask) {
        let is_micro = version.is_micro();
        let format_info = calc_format_info(version, error, mask);
        let size = self.size;
        let bit = |i: usize| Module::with_color(ModuleType::Format, (format_info >> i) & 1 != 0);
        let mut offset = usize::from(is_micro);
        for i in 0..8 {
            if i == 6 && !is_micro {
                offset += 1;
            }
            self.set(i + offset, 8, bit(i));
            if !is_micro {
                self.set(8, size - 1 - i, bit(i));
            }
        }
        let mut offset = usize::from(is_micro);
        for i in 0..8 {
            if i == 6 && !is_micro {
                offset = 1;
            }
            self.set(8, i + offset, bit(14 - i));
            if !is_micro {
                self.set(size - 1 - i, 8, bit(14 - i));
            }
        }
        if !is_micro {
            self.set(size - 8, 8, Module::Dark(ModuleType::DarkModule));
        }
    }

    /// Writes the 18 version information bits of QR Codes from version 7 onwards.
    pub(crate) fn add_version_info(&mut self, version: Version) {
        let Some(info) = consts::version_info(version) else {
            return;
        };
        let size = self.size;
        for i in 0..6 {
            for k in 0..3 {
                let module = Module::with_color(ModuleType::Version, (info >> (i * 3 + k)) & 1 != 0);
                self.set(size - 11 + k, i, module);
                self.set(i, size - 11 + k, module);
            }
        }
    }
}

/// Returns the 15-bit BCH coded format information.
pub(crate) fn calc_format_info(version: Version, error: Option<ErrorLevel>, mask: Mask) -> u16 {
    let mask = usize::from(mask.value());
    if version.is_micro() {
        // Validated before the matrix is built
        let symbol_number = consts::micro_symbol_number(version, error).unwrap_or(0);
        consts::FORMAT_INFO_MICRO[symbol_number << 2 | mask]
    } else {
        let error_bits = error.map_or(0, ErrorLevel::format_bits);
        consts::FORMAT_INFO[error_bits << 3 | mask]
    }
}
