//! Lenticular is a strip-interlacing engine for printable lenticular
//! composites.
//!
//! Given an ordered list of decoded source images and a lens pitch, the
//! engine cuts each source into narrow strips and interleaves them in a
//! repeating cycle, producing one raster suitable for printing under a
//! lenticular lens sheet.
//!
//! # Pipeline overview
//!
//! 1. **Decode**: `bytes -> SourceImage` ([`decode_image`])
//! 2. **Size**: `&[SourceImage] -> Canvas` ([`compute_canvas_size`],
//!    smallest common footprint)
//! 3. **Interlace**: `&[SourceImage] + Settings -> CompositeRaster`
//!    ([`interlace`])
//! 4. **Encode**: `&CompositeRaster -> Vec<u8>` ([`encode_png`])
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: interlacing is pure and stable for a given input.
//! - **No IO in the engine**: decoding and encoding are explicit boundary
//!   functions; the interlacer itself only reads memory the caller owns.
//! - **Straight RGBA8 end-to-end**: strips are copied verbatim, never
//!   blended.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod encode;
mod foundation;
mod interlace;

pub use assets::decode::decode_image;
pub use encode::png::{SUGGESTED_FILENAME, encode_png};
pub use foundation::core::{
    BYTES_PER_PIXEL, Canvas, CompositeRaster, Orientation, Settings, SourceImage,
};
pub use foundation::error::{LenticularError, LenticularResult};
pub use interlace::canvas::compute_canvas_size;
pub use interlace::engine::{
    InterlaceThreading, interlace, interlace_with_threading, strip_source_index,
};
