//! # isoqr
//!
//! A Rust library for encoding QR Codes and Micro QR Codes according to ISO/IEC 18004.
//!
//! `isoqr` turns text, binary data or integers into a module matrix. It supports all
//! versions (M1 to M4 and 1 to 40), all error correction levels, the numeric,
//! alphanumeric, byte, Kanji and Hanzi modes, ECI and Structured Append.
//!
//! ## Features
//!
//! - Automatic selection of the smallest symbol, the mode and the data mask.
//! - Mixed content: a list of parts, each with its own mode and character set.
//! - Raises the error correction level if the symbol has room for it.
//! - Splits large content over up to 16 symbols (Structured Append).
//! - Renders symbols as in-memory image buffers, SVG strings or text.
//! - Safe Rust implementation with no unsafe code.
//!
//! ## Installation
//!
//! Add to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! isoqr = "0.1" # Replace with the latest version
//! ```
//!
//! ## Example
//!
//! Encode a Micro QR Code if the content permits it, a QR Code otherwise:
//!
//! ```rust
//! let qr = isoqr::make("Hello").unwrap();
//! assert_eq!(qr.designator(), "M3-M");
//!
//! for row in qr.matrix_iter(1, None).unwrap() {
//!     let line: String = row.iter().map(|&dark| if dark { '#' } else { ' ' }).collect();
//!     println!("{}", line);
//! }
//! ```
//!
//! Choose the symbol parameters:
//!
//! ```rust
//! use isoqr::{encode, EncodeOptions, ErrorLevel, Version};
//!
//! let options = EncodeOptions::default()
//!     .with_version(Version::new(5).unwrap())
//!     .with_error(ErrorLevel::M)
//!     .with_boost_error(false);
//! let qr = encode("https://example.com", &options).unwrap();
//! assert_eq!(qr.designator(), "5-M");
//! ```
//!
//! Generate an in-memory image buffer:
//!
//! ```rust
//! use isoqr::helper::to_image_buffer;
//!
//! let qr = isoqr::make_qr("Hello, World!").unwrap();
//! let img = to_image_buffer(&qr, 4, None).unwrap();
//! assert_eq!(img.dimensions(), (116, 116));
//! ```
//!
//! ## Modules
//!
//! - [`encoder`]: Encoding content into symbols and Structured Append sequences.
//! - [`qrcode`]: The encoded symbols.
//! - [`helper`]: Utilities for rendering symbols in various formats.

#![forbid(unsafe_code)]

mod bitbuffer;
mod codewords;
mod consts;
pub mod encoder;
pub mod encoding;
pub mod error;
pub mod helper;
pub mod matrix;
mod mask;
pub mod qrcode;
mod reed_solomon;
pub mod segment;
pub mod version;

pub use bitbuffer::BitBuffer;
pub use encoder::{encode, encode_sequence, EncodeOptions};
pub use encoding::TextEncoding;
pub use error::{DataOverflow, QrError, Result};
pub use matrix::{Matrix, Module, ModuleType};
pub use qrcode::{QrCode, QrCodeSequence};
pub use segment::{Content, Data, Mode, Part, Segment, Segments};
pub use version::{parse_mask, ErrorLevel, Mask, Version};

/// Creates a QR Code or Micro QR Code, whichever is smaller.
pub fn make(content: impl Into<Content>) -> Result<QrCode> {
    encode(content, &EncodeOptions::default())
}

/// Creates a QR Code, never a Micro QR Code.
pub fn make_qr(content: impl Into<Content>) -> Result<QrCode> {
    encode(content, &EncodeOptions::default().with_micro(false))
}

/// Creates a Micro QR Code.
pub fn make_micro(content: impl Into<Content>) -> Result<QrCode> {
    encode(content, &EncodeOptions::default().with_micro(true))
}

/// Creates a Structured Append sequence, see [`encode_sequence`].
pub fn make_sequence(
    content: impl Into<Content>,
    options: &EncodeOptions,
    symbol_count: Option<usize>,
) -> Result<QrCodeSequence> {
    encode_sequence(content, options, symbol_count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conveniences() {
        assert!(make("12345").unwrap().is_micro());
        assert!(!make_qr("12345").unwrap().is_micro());
        assert_eq!(make_micro("12345").unwrap().version(), Version::M1);
        assert!(make_micro("A".repeat(40)).unwrap_err().is_data_overflow());
        let seq = make_sequence("0123456789".repeat(5), &EncodeOptions::default(), Some(2)).unwrap();
        assert_eq!(seq.len(), 2);
    }
}
