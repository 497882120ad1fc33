use super::*;

fn png_bytes(width: u32, height: u32, rgba: [u8; 4]) -> Vec<u8> {
    let mut img = image::RgbaImage::new(width, height);
    for px in img.pixels_mut() {
        *px = image::Rgba(rgba);
    }
    let mut cursor = std::io::Cursor::new(Vec::new());
    img.write_to(&mut cursor, image::ImageFormat::Png).unwrap();
    cursor.into_inner()
}

#[test]
fn decodes_png_to_straight_rgba8() {
    let bytes = png_bytes(3, 2, [10, 20, 30, 128]);
    let img = decode_image(&bytes).unwrap();
    assert_eq!((img.width, img.height), (3, 2));
    assert_eq!(img.rgba8.len(), 3 * 2 * 4);
    // straight alpha: color channels are not scaled by alpha on the way in
    assert_eq!(&img.rgba8[..4], &[10, 20, 30, 128]);
}

#[test]
fn garbage_bytes_are_a_decode_error() {
    assert!(matches!(
        decode_image(b"not an image"),
        Err(LenticularError::Decode(_))
    ));
}
