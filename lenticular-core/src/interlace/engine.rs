use rayon::prelude::*;

use crate::{
    foundation::core::{
        BYTES_PER_PIXEL, Canvas, CompositeRaster, Orientation, Settings, SourceImage,
    },
    foundation::error::{LenticularError, LenticularResult},
    interlace::canvas::compute_canvas_size,
};

/// Select which source supplies the strip containing `pos`.
///
/// `pos` is an x coordinate for vertical strips and a y coordinate for
/// horizontal ones. Integer floor-division then modulo yields contiguous
/// `strip_width_px`-wide spans cycling in source-list order. Both
/// `strip_width_px` and `source_count` must be non-zero.
pub fn strip_source_index(pos: u32, strip_width_px: u32, source_count: usize) -> usize {
    (pos / strip_width_px) as usize % source_count
}

#[derive(Clone, Debug)]
/// Threading controls for a single interlace invocation.
pub struct InterlaceThreading {
    /// Fill output rows in parallel when `true`.
    pub parallel: bool,
    /// Optional explicit worker thread count.
    pub threads: Option<usize>,
}

impl Default for InterlaceThreading {
    fn default() -> Self {
        Self {
            parallel: false,
            threads: None,
        }
    }
}

/// Interlace `sources` into a single composite raster.
///
/// This is the primary one-shot API. Pipeline:
///
/// 1. [`Settings::strip_width_px`] validates the pitch parameters
/// 2. [`compute_canvas_size`] clamps to the smallest common footprint
/// 3. every output strip is copied verbatim from exactly one source,
///    cycling in list order
///
/// The call is pure: identical inputs produce byte-identical output, and
/// the engine holds no state across calls.
pub fn interlace(
    sources: &[SourceImage],
    settings: &Settings,
) -> LenticularResult<CompositeRaster> {
    interlace_with_threading(sources, settings, &InterlaceThreading::default())
}

/// [`interlace`] with explicit threading controls.
///
/// Output rows touch disjoint memory, so the parallel fill is
/// byte-identical to the sequential one.
#[tracing::instrument(skip(sources))]
pub fn interlace_with_threading(
    sources: &[SourceImage],
    settings: &Settings,
    threading: &InterlaceThreading,
) -> LenticularResult<CompositeRaster> {
    let strip_width_px = settings.strip_width_px()?;
    let canvas = compute_canvas_size(sources)?;

    // SourceImage fields are public; reject forged buffer shapes here so
    // the fill loops can slice rows unchecked.
    for (idx, src) in sources.iter().enumerate() {
        let expected = src.width as usize * src.height as usize * BYTES_PER_PIXEL;
        if src.rgba8.len() != expected {
            return Err(LenticularError::invalid_parameter(format!(
                "source image {idx} has a {} byte buffer, expected {expected}",
                src.rgba8.len()
            )));
        }
    }

    let row_bytes = canvas.width as usize * BYTES_PER_PIXEL;
    let mut data = vec![0u8; row_bytes * canvas.height as usize];

    if threading.parallel {
        let pool = build_thread_pool(threading.threads)?;
        pool.install(|| {
            data.par_chunks_exact_mut(row_bytes)
                .enumerate()
                .for_each(|(y, row)| {
                    fill_row(
                        row,
                        y as u32,
                        sources,
                        strip_width_px,
                        settings.orientation,
                        canvas,
                    );
                });
        });
    } else {
        for (y, row) in data.chunks_exact_mut(row_bytes).enumerate() {
            fill_row(
                row,
                y as u32,
                sources,
                strip_width_px,
                settings.orientation,
                canvas,
            );
        }
    }

    Ok(CompositeRaster {
        width: canvas.width,
        height: canvas.height,
        data,
    })
}

fn fill_row(
    row: &mut [u8],
    y: u32,
    sources: &[SourceImage],
    strip_width_px: u32,
    orientation: Orientation,
    canvas: Canvas,
) {
    match orientation {
        Orientation::Vertical => {
            let mut x0 = 0u32;
            while x0 < canvas.width {
                let x1 = x0.saturating_add(strip_width_px).min(canvas.width);
                let src = &sources[strip_source_index(x0, strip_width_px, sources.len())];
                let span = x0 as usize * BYTES_PER_PIXEL..x1 as usize * BYTES_PER_PIXEL;
                row[span.clone()].copy_from_slice(&src.row(y)[span]);
                x0 = x1;
            }
        }
        Orientation::Horizontal => {
            let src = &sources[strip_source_index(y, strip_width_px, sources.len())];
            row.copy_from_slice(&src.row(y)[..row.len()]);
        }
    }
}

fn build_thread_pool(threads: Option<usize>) -> LenticularResult<rayon::ThreadPool> {
    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder.build().map_err(|e| {
        LenticularError::invalid_parameter(format!("failed to build rayon thread pool: {e}"))
    })
}

#[cfg(test)]
#[path = "../../tests/unit/interlace/engine.rs"]
mod tests;
