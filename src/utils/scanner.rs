use rxing::common::HybridBinarizer;
use rxing::{BinaryBitmap, Luma8LuminanceSource, MultiFormatReader, Reader};

#[derive(Debug)]
pub enum Error {
    UnreadableImage,
}

// When an image carries several symbols, the first one the scan pass locates
// is the one reported.
pub fn read_barcode(image_data: &[u8]) -> Result<Option<String>, Error> {
    let image = image::load_from_memory(image_data).map_err(|err| {
        tracing::warn!("Failed to decode image payload: {}", err);
        Error::UnreadableImage
    })?;

    let luma = image.to_luma8();
    let (width, height) = luma.dimensions();

    let source = Luma8LuminanceSource::new(luma.into_raw(), width, height);
    let mut bitmap = BinaryBitmap::new(HybridBinarizer::new(source));
    let mut reader = MultiFormatReader::default();

    match reader.decode(&mut bitmap) {
        Ok(symbol) => Ok(Some(symbol.getText().to_owned())),
        Err(err) => {
            tracing::debug!("No barcode symbol recognized: {}", err);
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, GrayImage, ImageFormat, Luma};
    use rxing::{BarcodeFormat, MultiFormatWriter, Writer};
    use std::io::Cursor;

    const SIZE: u32 = 256;

    fn draw_qr(img: &mut GrayImage, text: &str, x_offset: u32) {
        let matrix = MultiFormatWriter::default()
            .encode(text, &BarcodeFormat::QR_CODE, SIZE as i32, SIZE as i32)
            .expect("Failed to encode test barcode");

        for y in 0..SIZE {
            for x in 0..SIZE {
                if matrix.get(x, y) {
                    img.put_pixel(x + x_offset, y, Luma([0u8]));
                }
            }
        }
    }

    fn qr_png(text: &str) -> Vec<u8> {
        let mut img = GrayImage::from_pixel(SIZE, SIZE, Luma([255u8]));
        draw_qr(&mut img, text, 0);

        encode_png(img)
    }

    fn two_qr_png(left: &str, right: &str) -> Vec<u8> {
        let mut img = GrayImage::from_pixel(SIZE * 2 + 64, SIZE, Luma([255u8]));
        draw_qr(&mut img, left, 0);
        draw_qr(&mut img, right, SIZE + 64);

        encode_png(img)
    }

    fn blank_png() -> Vec<u8> {
        encode_png(GrayImage::from_pixel(SIZE, SIZE, Luma([255u8])))
    }

    fn encode_png(img: GrayImage) -> Vec<u8> {
        let mut buf = Vec::new();
        DynamicImage::ImageLuma8(img)
            .write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
            .expect("Failed to encode test image");
        buf
    }

    #[test]
    fn reads_symbol_from_png() {
        let png = qr_png("STUDENT-12345");

        let decoded = read_barcode(&png).expect("image should be readable");

        assert_eq!(decoded, Some(String::from("STUDENT-12345")));
    }

    #[test]
    fn two_symbol_image_scans_deterministically() {
        let png = two_qr_png("FIRST-11111", "SECOND-22222");

        let decoded = read_barcode(&png).expect("image should be readable");

        assert_eq!(decoded, Some(String::from("FIRST-11111")));
        for _ in 0..5 {
            let repeat = read_barcode(&png).expect("image should be readable");
            assert_eq!(repeat, decoded);
        }
    }

    #[test]
    fn blank_image_yields_no_symbol() {
        let png = blank_png();

        let decoded = read_barcode(&png).expect("image should be readable");

        assert_eq!(decoded, None);
    }

    #[test]
    fn garbage_bytes_are_rejected() {
        let result = read_barcode(b"definitely not an image");

        assert!(matches!(result, Err(Error::UnreadableImage)));
    }
}
