//! Decoding uploaded photos with EXIF orientation handling.
//!
//! Browsers draw `<img>` elements upright according to their EXIF
//! orientation, so crop geometry is always computed against the oriented
//! dimensions.

use std::io::Cursor;

use exif::{In, Reader, Tag};
use image::{DynamicImage, ImageError, ImageReader};
use tracing::debug;

use super::{DecodeError, Orientation, SourceImage};

/// Decode a photo from bytes, applying EXIF orientation correction.
///
/// The format is sniffed from the content, not from a file name.
///
/// # Errors
///
/// Returns `DecodeError::Empty` for an empty buffer,
/// `DecodeError::InvalidFormat` if no compiled-in decoder recognises the
/// bytes, and `DecodeError::CorruptedFile` if decoding fails midway.
pub fn decode_image(bytes: &[u8]) -> Result<SourceImage, DecodeError> {
    let img = decode_dynamic(bytes)?;
    let orientation = extract_orientation(bytes);
    let oriented = apply_orientation(img, orientation);

    let (width, height) = (oriented.width(), oriented.height());
    if width == 0 || height == 0 {
        return Err(DecodeError::ZeroSized { width, height });
    }

    debug!(width, height, ?orientation, "decoded source image");
    Ok(SourceImage::from_rgba_image(oriented.into_rgba8()))
}

/// Read the upright dimensions of a photo without decoding its pixels.
pub fn decode_dimensions(bytes: &[u8]) -> Result<(u32, u32), DecodeError> {
    let (width, height) = guessed_reader(bytes)?
        .into_dimensions()
        .map_err(map_image_error)?;

    if extract_orientation(bytes).swaps_dimensions() {
        Ok((height, width))
    } else {
        Ok((width, height))
    }
}

fn guessed_reader(bytes: &[u8]) -> Result<ImageReader<Cursor<&[u8]>>, DecodeError> {
    if bytes.is_empty() {
        return Err(DecodeError::Empty);
    }

    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    if reader.format().is_none() {
        return Err(DecodeError::InvalidFormat);
    }

    Ok(reader)
}

fn decode_dynamic(bytes: &[u8]) -> Result<DynamicImage, DecodeError> {
    guessed_reader(bytes)?.decode().map_err(map_image_error)
}

fn map_image_error(err: ImageError) -> DecodeError {
    match err {
        ImageError::Unsupported(_) => DecodeError::InvalidFormat,
        other => DecodeError::CorruptedFile(other.to_string()),
    }
}

/// Extract EXIF orientation from image bytes.
///
/// Returns `Orientation::Normal` if no EXIF data is found or orientation
/// cannot be determined.
fn extract_orientation(bytes: &[u8]) -> Orientation {
    let mut cursor = Cursor::new(bytes);

    match Reader::new().read_from_container(&mut cursor) {
        Ok(exif) => exif
            .get_field(Tag::Orientation, In::PRIMARY)
            .and_then(|field| field.value.get_uint(0))
            .map(Orientation::from)
            .unwrap_or_default(),
        Err(_) => Orientation::Normal,
    }
}

/// Apply EXIF orientation transformation to an image.
fn apply_orientation(img: DynamicImage, orientation: Orientation) -> DynamicImage {
    match orientation {
        Orientation::Normal => img,
        Orientation::FlipHorizontal => img.fliph(),
        Orientation::Rotate180 => img.rotate180(),
        Orientation::FlipVertical => img.flipv(),
        Orientation::Transpose => img.rotate90().fliph(),
        Orientation::Rotate90CW => img.rotate90(),
        Orientation::Transverse => img.rotate270().fliph(),
        Orientation::Rotate270CW => img.rotate270(),
    }
}
