use std::sync::Arc;

use crate::foundation::error::{LenticularError, LenticularResult};

/// Bytes per pixel in every raster this crate touches (straight RGBA8).
pub const BYTES_PER_PIXEL: usize = 4;

/// Output raster dimensions computed by the canvas sizer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

/// Axis along which strips are cut.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize,
)]
pub enum Orientation {
    /// Strips are pixel columns; the cycle runs along the x axis.
    #[default]
    Vertical,
    /// Strips are pixel rows; the cycle runs along the y axis.
    Horizontal,
}

/// User-facing interlacing parameters.
///
/// `lines_per_unit` is the lenticule density of the physical lens sheet
/// (LPI) and `base_resolution` the print resolution (DPI). Together they
/// fix the strip width: `ceil(base_resolution / lines_per_unit)` pixels.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Settings {
    /// Lenticule density of the target lens sheet.
    #[serde(default = "default_lines_per_unit")]
    pub lines_per_unit: f64,
    /// Print resolution used to convert pitch into pixels.
    #[serde(default = "default_base_resolution")]
    pub base_resolution: f64,
    /// Strip axis.
    #[serde(default)]
    pub orientation: Orientation,
}

fn default_lines_per_unit() -> f64 {
    75.0
}

fn default_base_resolution() -> f64 {
    300.0
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            lines_per_unit: default_lines_per_unit(),
            base_resolution: default_base_resolution(),
            orientation: Orientation::default(),
        }
    }
}

impl Settings {
    /// Strip width in pixels: `ceil(base_resolution / lines_per_unit)`, always >= 1.
    pub fn strip_width_px(&self) -> LenticularResult<u32> {
        if !self.lines_per_unit.is_finite() || self.lines_per_unit <= 0.0 {
            return Err(LenticularError::invalid_parameter(format!(
                "lines_per_unit must be a positive finite number, got {}",
                self.lines_per_unit
            )));
        }
        if !self.base_resolution.is_finite() || self.base_resolution <= 0.0 {
            return Err(LenticularError::invalid_parameter(format!(
                "base_resolution must be a positive finite number, got {}",
                self.base_resolution
            )));
        }

        let px = (self.base_resolution / self.lines_per_unit).ceil();
        if !(px >= 1.0) || px > f64::from(u32::MAX) {
            return Err(LenticularError::invalid_parameter(format!(
                "strip width of {px} px does not fit the raster"
            )));
        }
        Ok(px as u32)
    }

    /// Parse settings from a JSON document; omitted fields take their defaults.
    pub fn from_json_str(s: &str) -> LenticularResult<Self> {
        serde_json::from_str(s)
            .map_err(|e| LenticularError::invalid_parameter(format!("settings json: {e}")))
    }
}

/// An immutable decoded raster in straight (non-premultiplied) RGBA8.
///
/// Rows are stored top-down with no padding; the buffer length is always
/// `width * height * BYTES_PER_PIXEL`. The engine only reads it for the
/// duration of one interlace call.
#[derive(Clone, Debug)]
pub struct SourceImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel bytes in row-major straight RGBA8.
    pub rgba8: Arc<Vec<u8>>,
}

impl SourceImage {
    /// Wrap a raw straight-RGBA8 buffer.
    pub fn from_rgba8(width: u32, height: u32, rgba8: Vec<u8>) -> LenticularResult<Self> {
        if width == 0 || height == 0 {
            return Err(LenticularError::empty_geometry(format!(
                "source image is {width}x{height}"
            )));
        }
        let expected = width as usize * height as usize * BYTES_PER_PIXEL;
        if rgba8.len() != expected {
            return Err(LenticularError::invalid_parameter(format!(
                "pixel buffer is {} bytes, expected {expected} for {width}x{height} rgba8",
                rgba8.len()
            )));
        }
        Ok(Self {
            width,
            height,
            rgba8: Arc::new(rgba8),
        })
    }

    pub(crate) fn row_stride(&self) -> usize {
        self.width as usize * BYTES_PER_PIXEL
    }

    // `y` must be < `self.height`.
    pub(crate) fn row(&self, y: u32) -> &[u8] {
        let stride = self.row_stride();
        let start = y as usize * stride;
        &self.rgba8[start..start + stride]
    }
}

/// The composite output raster in straight RGBA8.
///
/// Allocated fresh per interlace call; ownership moves to the caller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompositeRaster {
    /// Width in pixels (equals the computed canvas width).
    pub width: u32,
    /// Height in pixels (equals the computed canvas height).
    pub height: u32,
    /// Pixel bytes in row-major straight RGBA8.
    pub data: Vec<u8>,
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
