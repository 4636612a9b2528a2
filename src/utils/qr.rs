use image::{codecs::png::PngEncoder, ExtendedColorType, ImageEncoder, Luma};
use qrcode::{types::QrError, EcLevel, QrCode};
use std::fmt;

const ERROR_CORRECTION: EcLevel = EcLevel::L;
const MODULE_SIZE: u32 = 10;

#[derive(Debug, PartialEq)]
pub enum Error {
    EmptyPayload,
    PayloadTooLong,
    ImageEncodingFailed,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyPayload => write!(f, "QR payload is empty"),
            Self::PayloadTooLong => write!(f, "QR payload exceeds the barcode capacity"),
            Self::ImageEncodingFailed => write!(f, "failed to encode QR image"),
        }
    }
}

/// Renders `payload` as a PNG-encoded QR code.
///
/// Error correction is level L; each module is drawn as a 10x10 pixel square
/// inside the standard 4-module quiet zone.
pub fn generate(payload: &str) -> Result<Vec<u8>, Error> {
    if payload.is_empty() {
        return Err(Error::EmptyPayload);
    }

    let code = QrCode::with_error_correction_level(payload.as_bytes(), ERROR_CORRECTION)
        .map_err(|err| {
            tracing::warn!("Failed to encode QR payload of {} bytes: {}", payload.len(), err);
            match err {
                QrError::DataTooLong => Error::PayloadTooLong,
                _ => Error::ImageEncodingFailed,
            }
        })?;

    let image = code
        .render::<Luma<u8>>()
        .module_dimensions(MODULE_SIZE, MODULE_SIZE)
        .quiet_zone(true)
        .build();

    let mut png_buf: Vec<u8> = Vec::new();
    PngEncoder::new(&mut png_buf)
        .write_image(
            image.as_raw(),
            image.width(),
            image.height(),
            ExtendedColorType::L8,
        )
        .map_err(|err| {
            tracing::error!("Failed to encode QR image: {}", err);
            Error::ImageEncodingFailed
        })?;

    Ok(png_buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(png: &[u8]) -> String {
        let image = image::load_from_memory_with_format(png, image::ImageFormat::Png)
            .unwrap()
            .to_luma8();
        let mut prepared = rqrr::PreparedImage::prepare_from_greyscale(
            image.width() as usize,
            image.height() as usize,
            |x, y| image.get_pixel(x as u32, y as u32).0[0],
        );
        let grids = prepared.detect_grids();
        assert_eq!(grids.len(), 1);
        let (_, content) = grids[0].decode().unwrap();
        content
    }

    #[test]
    fn round_trips_promo_code() {
        let png = generate("SAVE10").unwrap();
        assert_eq!(decode(&png), "SAVE10");
    }

    #[test]
    fn output_is_a_png_sized_by_module_and_quiet_zone() {
        let png = generate("SAVE10").unwrap();
        assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");

        let image = image::load_from_memory(&png).unwrap();
        // version 1 is 21 modules wide, plus 4 quiet modules per side
        assert_eq!(image.width(), (21 + 8) * MODULE_SIZE);
        assert_eq!(image.width(), image.height());
    }

    #[test]
    fn is_deterministic() {
        assert_eq!(generate("WELCOME").unwrap(), generate("WELCOME").unwrap());
    }

    #[test]
    fn rejects_empty_payload() {
        assert_eq!(generate(""), Err(Error::EmptyPayload));
    }

    #[test]
    fn rejects_payload_beyond_capacity() {
        // version 40-L holds at most 2953 bytes
        let payload = "X".repeat(8000);
        assert_eq!(generate(&payload), Err(Error::PayloadTooLong));
    }
}
