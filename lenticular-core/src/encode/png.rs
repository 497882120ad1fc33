use std::io::Cursor;

use anyhow::Context;

use crate::foundation::{core::CompositeRaster, error::LenticularResult};

/// Suggested filename for a saved composite, kept stable for hosts that
/// surface a download action.
pub const SUGGESTED_FILENAME: &str = "lenticular-image.png";

/// Encode a composite raster as lossless PNG bytes.
pub fn encode_png(raster: &CompositeRaster) -> LenticularResult<Vec<u8>> {
    let mut cursor = Cursor::new(Vec::new());
    image::write_buffer_with_format(
        &mut cursor,
        &raster.data,
        raster.width,
        raster.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .context("encode png")?;
    Ok(cursor.into_inner())
}

#[cfg(test)]
#[path = "../../tests/unit/encode/png.rs"]
mod tests;
