use crate::foundation::{
    core::{Canvas, SourceImage},
    error::{LenticularError, LenticularResult},
};

/// Compute the common output dimensions for a set of source images.
///
/// Policy: element-wise minimum of all widths and all heights. Clamping
/// to the smallest common footprint keeps every composite coordinate in
/// bounds for every source, so the strip loop never reads outside a
/// buffer.
pub fn compute_canvas_size(sources: &[SourceImage]) -> LenticularResult<Canvas> {
    if sources.len() < 2 {
        return Err(LenticularError::insufficient_sources(format!(
            "need at least 2 source images, got {}",
            sources.len()
        )));
    }

    let mut width = u32::MAX;
    let mut height = u32::MAX;
    for (idx, src) in sources.iter().enumerate() {
        if src.width == 0 || src.height == 0 {
            return Err(LenticularError::empty_geometry(format!(
                "source image {idx} is {}x{}",
                src.width, src.height
            )));
        }
        width = width.min(src.width);
        height = height.min(src.height);
    }

    Ok(Canvas { width, height })
}

#[cfg(test)]
#[path = "../../tests/unit/interlace/canvas.rs"]
mod tests;
