/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Owned pixel buffers handed to the encoder and returned by the decoder
use alloc::vec::Vec;

use qpv_core::colorspace::ColorSpace;

use crate::errors::QoiEncodeErrors;
use crate::pixel::Pixel;

/// An owned, row-major image
///
/// Pixels are always stored as RGBA, four bytes per pixel regardless
/// of the layout. The layout only records whether the source tracked
/// alpha, for [`ColorSpace::RGB`] the encoder ignores stored alpha values.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Raster {
    width:      usize,
    height:     usize,
    layout:     ColorSpace,
    colorspace: u8,
    data:       Vec<u8>
}

fn expected_len(width: usize, height: usize) -> Result<usize, QoiEncodeErrors> {
    width
        .checked_mul(height)
        .and_then(|x| x.checked_mul(4))
        .ok_or(QoiEncodeErrors::TooLargeDimensions(width.max(height)))
}

impl Raster {
    /// Create a raster from RGBA bytes
    ///
    /// # Errors
    /// If `data` is not exactly `width * height * 4` bytes long
    pub fn new(
        width: usize, height: usize, layout: ColorSpace, data: Vec<u8>
    ) -> Result<Raster, QoiEncodeErrors> {
        let expected = expected_len(width, height)?;

        if data.len() != expected {
            return Err(QoiEncodeErrors::LengthMismatch(expected, data.len()));
        }
        Ok(Raster {
            width,
            height,
            layout,
            colorspace: 0,
            data
        })
    }

    /// Create an RGBA raster from interleaved RGBA bytes
    pub fn from_rgba(width: usize, height: usize, data: Vec<u8>) -> Result<Raster, QoiEncodeErrors> {
        Raster::new(width, height, ColorSpace::RGBA, data)
    }

    /// Create an RGB raster from interleaved RGB bytes,
    /// every pixel gets an alpha of 255
    ///
    /// # Example
    /// ```
    /// use qpv_qoi::Raster;
    /// let raster = Raster::from_rgb(1, 2, &[1, 2, 3, 4, 5, 6]).unwrap();
    /// assert_eq!(raster.as_rgba(), &[1, 2, 3, 255, 4, 5, 6, 255]);
    /// ```
    pub fn from_rgb(width: usize, height: usize, data: &[u8]) -> Result<Raster, QoiEncodeErrors> {
        let expected = expected_len(width, height)?;

        if data.len() / 3 * 4 != expected || data.len() % 3 != 0 {
            return Err(QoiEncodeErrors::LengthMismatch(expected / 4 * 3, data.len()));
        }
        let mut rgba = Vec::with_capacity(expected);

        for rgb in data.chunks_exact(3) {
            rgba.extend_from_slice(rgb);
            rgba.push(255);
        }
        Raster::new(width, height, ColorSpace::RGB, rgba)
    }

    /// Create an RGBA raster from pixels in row-major order
    pub fn from_pixels(
        width: usize, height: usize, pixels: &[Pixel]
    ) -> Result<Raster, QoiEncodeErrors> {
        let data = pixels.iter().flat_map(|px| px.to_bytes()).collect();

        Raster::new(width, height, ColorSpace::RGBA, data)
    }

    /// Set the opaque colorspace tag written to the header
    #[must_use]
    pub fn with_colorspace(mut self, colorspace: u8) -> Raster {
        self.colorspace = colorspace;
        self
    }

    pub(crate) fn from_parts(
        width: usize, height: usize, layout: ColorSpace, colorspace: u8, data: Vec<u8>
    ) -> Raster {
        Raster {
            width,
            height,
            layout,
            colorspace,
            data
        }
    }

    pub const fn width(&self) -> usize {
        self.width
    }
    pub const fn height(&self) -> usize {
        self.height
    }
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }
    /// Channel layout of the source image
    pub const fn layout(&self) -> ColorSpace {
        self.layout
    }
    /// Opaque colorspace tag
    pub const fn colorspace(&self) -> u8 {
        self.colorspace
    }
    pub fn set_colorspace(&mut self, colorspace: u8) {
        self.colorspace = colorspace;
    }
    pub const fn pixel_count(&self) -> usize {
        self.width * self.height
    }
    /// True if the raster has no pixels
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Pixel at column `x`, row `y`
    pub fn pixel(&self, x: usize, y: usize) -> Option<Pixel> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let start = (y * self.width + x) * 4;
        let bytes = self.data.get(start..start + 4)?;

        Some(Pixel::new(bytes[0], bytes[1], bytes[2], bytes[3]))
    }

    /// All pixels in row-major order
    pub fn pixels(&self) -> impl Iterator<Item = Pixel> + '_ {
        self.data
            .chunks_exact(4)
            .map(|px| Pixel::new(px[0], px[1], px[2], px[3]))
    }

    pub fn as_rgba(&self) -> &[u8] {
        &self.data
    }

    pub fn into_rgba(self) -> Vec<u8> {
        self.data
    }

    /// Interleaved RGB bytes, alpha dropped
    pub fn to_rgb(&self) -> Vec<u8> {
        let mut rgb = Vec::with_capacity(self.pixel_count() * 3);

        for px in self.data.chunks_exact(4) {
            rgb.extend_from_slice(&px[..3]);
        }
        rgb
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use qpv_core::colorspace::ColorSpace;

    use crate::{Pixel, QoiEncodeErrors, Raster};

    #[test]
    fn wrong_length_is_rejected() {
        let err = Raster::from_rgba(2, 2, vec![0; 15]).unwrap_err();
        assert!(matches!(err, QoiEncodeErrors::LengthMismatch(16, 15)));

        let err = Raster::from_rgb(2, 2, &[0; 13]).unwrap_err();
        assert!(matches!(err, QoiEncodeErrors::LengthMismatch(12, 13)));
    }

    #[test]
    fn pixel_lookup_is_row_major() {
        let pixels = [
            Pixel::new(1, 0, 0, 255),
            Pixel::new(2, 0, 0, 255),
            Pixel::new(3, 0, 0, 255),
            Pixel::new(4, 0, 0, 255),
            Pixel::new(5, 0, 0, 255),
            Pixel::new(6, 0, 0, 255)
        ];
        let raster = Raster::from_pixels(3, 2, &pixels).unwrap();

        assert_eq!(raster.pixel(0, 1), Some(pixels[3]));
        assert_eq!(raster.pixel(2, 0), Some(pixels[2]));
        assert_eq!(raster.pixel(3, 0), None);
        assert!(raster.pixels().eq(pixels.iter().copied()));
    }

    #[test]
    fn rgb_round_trip_through_bytes() {
        let rgb = [10, 20, 30, 40, 50, 60];
        let raster = Raster::from_rgb(2, 1, &rgb).unwrap();

        assert_eq!(raster.layout(), ColorSpace::RGB);
        assert_eq!(raster.to_rgb(), rgb);
    }
}
