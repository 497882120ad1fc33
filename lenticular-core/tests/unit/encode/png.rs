use super::*;

#[test]
fn png_roundtrip_preserves_pixels() {
    let data: Vec<u8> = (0u8..16).map(|i| i * 3).collect();
    let raster = CompositeRaster {
        width: 2,
        height: 2,
        data: data.clone(),
    };

    let bytes = encode_png(&raster).unwrap();
    let decoded = image::load_from_memory(&bytes).unwrap().to_rgba8();
    assert_eq!(decoded.dimensions(), (2, 2));
    assert_eq!(decoded.into_raw(), data);
}

#[test]
fn suggested_filename_is_stable() {
    assert_eq!(SUGGESTED_FILENAME, "lenticular-image.png");
}
