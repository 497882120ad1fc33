use crate::foundation::{
    core::SourceImage,
    error::{LenticularError, LenticularResult},
};

/// Decode encoded image bytes into a straight-RGBA8 [`SourceImage`].
///
/// Any container format supported by the `image` crate is accepted. The
/// pixels stay straight (not premultiplied): the interlacer copies them
/// verbatim into the composite, which must carry the original colors.
pub fn decode_image(bytes: &[u8]) -> LenticularResult<SourceImage> {
    let dyn_img = image::load_from_memory(bytes)
        .map_err(|e| LenticularError::decode(format!("decode image from memory: {e}")))?;
    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();
    SourceImage::from_rgba8(width, height, rgba.into_raw())
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
