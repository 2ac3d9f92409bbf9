use crate::error::{QrError, Result};
use crate::qrcode::QrCode;

use image::{ImageBuffer, Luma};

/*---- Utilities ----*/

// Returns a string of SVG code for an image depicting the given symbol,
// with `scale` units per module and the given number of border modules.
// The string always uses Unix newlines (\n), regardless of the platform.
pub fn to_svg_string(qr: &QrCode, scale: usize, border: Option<usize>) -> Result<String> {
	let (dimension, _) = qr.symbol_size(scale, border)?;
	let border = border.unwrap_or_else(|| qr.default_border_size());
	let mut result = String::new();
	result += "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";
	result += "<!DOCTYPE svg PUBLIC \"-//W3C//DTD SVG 1.1//EN\" \"http://www.w3.org/Graphics/SVG/1.1/DTD/svg11.dtd\">\n";
	result += &format!(
		"<svg xmlns=\"http://www.w3.org/2000/svg\" version=\"1.1\" width=\"{0}\" height=\"{0}\" viewBox=\"0 0 {1} {1}\" stroke=\"none\">\n",
		dimension, dimension / scale);
	result += "\t<rect width=\"100%\" height=\"100%\" fill=\"#FFFFFF\"/>\n";
	result += "\t<path d=\"";
	let mut first = true;
	for (y, row) in qr.matrix().rows().enumerate() {
		for (x, module) in row.iter().enumerate() {
			if module.is_dark() {
				if !first {
					result += " ";
				}
				first = false;
				result += &format!("M{},{}h1v1h-1z", x + border, y + border);
			}
		}
	}
	result += "\" fill=\"#000000\"/>\n";
	result += "</svg>\n";
	Ok(result)
}

/// Renders the symbol as text, two characters per module.
///
/// Dark modules are drawn as full blocks, the quiet zone and light modules
/// as spaces. Every row ends with a newline.
pub fn to_text(qr: &QrCode, border: Option<usize>) -> Result<String> {
    let mut text = String::new();
    for row in qr.matrix_iter(1, border)? {
        for dark in row {
            text.push_str(if dark { "\u{2588}\u{2588}" } else { "  " });
        }
        text.push('\n');
    }
    Ok(text)
}

/// Converts a symbol into a grayscale image buffer.
///
/// # Arguments
///
/// * `qr` - The symbol to convert.
/// * `scale` - Width and height of a module in pixels, must be greater than 0.
/// * `border` - Optional. The quiet zone in modules. If not provided, the
///   recommended size of the symbol is used.
///
/// # Errors
///
/// Returns an `InvalidArgument` error if `scale` is 0 or the image would be too large.
///
/// # Example
///
/// ```rust
/// use isoqr::helper::to_image_buffer;
///
/// let qr = isoqr::make_qr("Hello, World!").unwrap();
/// let img = to_image_buffer(&qr, 1, None).unwrap();
/// assert_eq!(img.dimensions(), (29, 29));
/// ```
pub fn to_image_buffer(qr: &QrCode, scale: usize, border: Option<usize>) -> Result<ImageBuffer<Luma<u8>, Vec<u8>>> {
    let (size, _) = qr.symbol_size(scale, border)?;
    let size = u32::try_from(size)
        .map_err(|_| QrError::InvalidArgument(format!("image size {} is too large", size)))?;
    let mut img = ImageBuffer::new(size, size);

    for (y, row) in qr.matrix_iter(scale, border)?.enumerate() {
        for (x, dark) in row.into_iter().enumerate() {
            let pixel = if dark {
                Luma([0u8]) // Black
            } else {
                Luma([255u8]) // White
            };
            img.put_pixel(x as u32, y as u32, pixel);
        }
    }

    Ok(img)
}

// Tests
#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::{encode, EncodeOptions};
    use crate::version::Version;

    #[test]
    fn test_to_svg_string() {
        let qr = crate::make_qr("HELLO WORLD").unwrap();
        let svg = to_svg_string(&qr, 1, None).unwrap();

        assert!(svg.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(svg.contains("viewBox=\"0 0 29 29\""));
        // Upper left module of the finder pattern, shifted by the quiet zone
        assert!(svg.contains("d=\"M4,4h1v1h-1z M5,4h1v1h-1z"));
        let svg = to_svg_string(&qr, 10, Some(0)).unwrap();
        assert!(svg.contains("width=\"210\" height=\"210\" viewBox=\"0 0 21 21\""));
        assert!(to_svg_string(&qr, 0, None).is_err());
    }

    #[test]
    fn test_to_image_buffer() {
        let qr = crate::make_qr("Hello, world!").unwrap();
        let img = to_image_buffer(&qr, 1, None).unwrap();

        // Version 1 with a border of 4 is 29x29 pixels.
        assert_eq!(img.dimensions(), (29, 29));
        assert_eq!(img.get_pixel(0, 0), &Luma([255u8]));
        assert_eq!(img.get_pixel(4, 4), &Luma([0u8]));

        let micro = encode("1", &EncodeOptions::default().with_version(Version::M2)).unwrap();
        let img = to_image_buffer(&micro, 3, None).unwrap();
        assert_eq!(img.dimensions(), (51, 51));
        assert_eq!(img.get_pixel(6, 6), &Luma([0u8]));
        assert_eq!(img.get_pixel(5, 6), &Luma([255u8]));
    }

    #[test]
    fn test_to_text() {
        let qr = crate::make("1").unwrap();
        assert_eq!(qr.version(), Version::M1);
        let text = to_text(&qr, Some(0)).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 11);
        assert!(lines.iter().all(|line| line.chars().count() == 22));
        assert_eq!(lines[0].chars().take(14).filter(|&c| c == '\u{2588}').count(), 14);
        let text = to_text(&qr, None).unwrap();
        assert_eq!(text.lines().count(), 15);
        assert!(text.lines().next().unwrap().trim().is_empty());
    }
}
