/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use alloc::vec;
use alloc::vec::Vec;

use qpv_core::bytestream::ZByteWriter;
use qpv_core::log::trace;

use crate::constants::{
    QOI_END_MARKER, QOI_HEADER_SIZE, QOI_MAX_RUN, QOI_OP_DIFF, QOI_OP_INDEX, QOI_OP_LUMA,
    QOI_OP_RGB, QOI_OP_RGBA, QOI_OP_RUN, QOI_PADDING
};
use crate::errors::QoiEncodeErrors;
use crate::header::QoiHeader;
use crate::pixel::{ColorCache, Pixel};
use crate::raster::Raster;

/// Encode a raster into a complete QOI stream
///
/// This is a shorthand for [`QoiEncoder::new`] followed by [`QoiEncoder::encode`]
pub fn encode(raster: &Raster) -> Result<Vec<u8>, QoiEncodeErrors> {
    QoiEncoder::new(raster).encode()
}

/// Quite Ok Image Encoder
///
/// # Example
/// - Encode a 100 by 100 RGB image
///
/// ```
/// use qpv_qoi::{QoiEncodeErrors, QoiEncoder, Raster};
///
/// const W: usize = 100;
/// const H: usize = 100;
///
/// fn main() -> Result<(), QoiEncodeErrors> {
///     let pixels = std::array::from_fn::<u8, { W * H * 3 }, _>(|i| (i % 256) as u8);
///     let raster = Raster::from_rgb(W, H, &pixels)?;
///     let encoded = QoiEncoder::new(&raster).encode()?;
///     // write pixels, or do something
///     assert_eq!(&encoded[..4], b"qoif");
///     Ok(())
/// }
/// ```
pub struct QoiEncoder<'a> {
    raster: &'a Raster
}

impl<'a> QoiEncoder<'a> {
    /// Create a new encoder which will encode the raster
    pub const fn new(raster: &'a Raster) -> QoiEncoder<'a> {
        QoiEncoder { raster }
    }

    /// Return the maximum size for which the encoder can safely
    /// encode the image without fearing for an out of space error
    pub fn max_size(&self) -> usize {
        self.raster
            .pixel_count()
            .saturating_mul(self.raster.layout().num_components() + 1)
            .saturating_add(QOI_HEADER_SIZE + QOI_PADDING)
    }

    fn header(&self) -> Result<QoiHeader, QoiEncodeErrors> {
        let raster = self.raster;

        if raster.is_empty() {
            return Err(QoiEncodeErrors::EmptyRaster);
        }
        let width = u32::try_from(raster.width())
            .map_err(|_| QoiEncodeErrors::TooLargeDimensions(raster.width()))?;
        let height = u32::try_from(raster.height())
            .map_err(|_| QoiEncodeErrors::TooLargeDimensions(raster.height()))?;

        Ok(QoiHeader::new(
            width,
            height,
            raster.layout().channel_count(),
            raster.colorspace()
        ))
    }

    /// Encode the raster into a newly allocated buffer
    pub fn encode(&self) -> Result<Vec<u8>, QoiEncodeErrors> {
        // validate before allocating max_size bytes
        self.header()?;

        let mut output = vec![0; self.max_size()];
        let len = self.encode_into(&mut output)?;
        output.truncate(len);

        trace!(
            "Encoded {}x{} image into {} bytes",
            self.raster.width(),
            self.raster.height(),
            len
        );

        Ok(output)
    }

    /// Encode into a pre-allocated buffer and error out if
    /// the buffer provided is smaller than [`max_size`](Self::max_size)
    ///
    /// # Returns
    /// - Ok(size): Actual bytes used for encoding
    /// - Err: The error encountered during encoding
    pub fn encode_into(&self, buf: &mut [u8]) -> Result<usize, QoiEncodeErrors> {
        let header = self.header()?;

        if buf.len() < self.max_size() {
            return Err(QoiEncodeErrors::TooSmallOutput(self.max_size(), buf.len()));
        }
        let mut stream = ZByteWriter::new(buf);

        header.write_to(&mut stream)?;

        let mut cache = ColorCache::new();
        let mut px_prev = Pixel::START;
        let mut run: u8 = 0;

        let has_alpha = self.raster.layout().has_alpha();
        let last_pixel = self.raster.pixel_count() - 1;

        for (i, mut px) in self.raster.pixels().enumerate() {
            if !has_alpha {
                px.a = px_prev.a;
            }

            if px == px_prev {
                run += 1;

                if run == QOI_MAX_RUN || i == last_pixel {
                    stream.write_u8_err(QOI_OP_RUN | (run - 1))?;
                    run = 0;
                }
            } else {
                if run > 0 {
                    stream.write_u8_err(QOI_OP_RUN | (run - 1))?;
                    run = 0;
                }

                if let Some(index_pos) = cache.contains(&px) {
                    stream.write_u8_err(QOI_OP_INDEX | index_pos)?;
                } else {
                    cache.insert(px);

                    if px.a == px_prev.a {
                        let (vr, vg, vb) = px.wrapping_delta(&px_prev);

                        let vg_r = vr.wrapping_sub(vg);
                        let vg_b = vb.wrapping_sub(vg);

                        if (-2..=1).contains(&vr) && (-2..=1).contains(&vg) && (-2..=1).contains(&vb)
                        {
                            stream.write_u8_err(
                                QOI_OP_DIFF
                                    | ((vr + 2) as u8) << 4
                                    | ((vg + 2) as u8) << 2
                                    | (vb + 2) as u8
                            )?;
                        } else if (-8..=7).contains(&vg_r)
                            && (-32..=31).contains(&vg)
                            && (-8..=7).contains(&vg_b)
                        {
                            stream.write_u8_err(QOI_OP_LUMA | (vg + 32) as u8)?;
                            stream.write_u8_err(((vg_r + 8) as u8) << 4 | (vg_b + 8) as u8)?;
                        } else {
                            stream.write_u8_err(QOI_OP_RGB)?;
                            stream.write_all(&[px.r, px.g, px.b])?;
                        }
                    } else {
                        stream.write_u8_err(QOI_OP_RGBA)?;
                        stream.write_all(&px.to_bytes())?;
                    }
                }
            }

            px_prev = px;
        }
        // write trailing bytes
        stream.write_u64_be_err(u64::from_be_bytes(QOI_END_MARKER))?;

        Ok(stream.position())
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use crate::{decode, encode, Pixel, QoiEncodeErrors, QoiEncoder, Raster};

    #[test]
    fn test_qoi_encode_rgb() {
        const W: usize = 100;
        const H: usize = 100;

        let pixels = std::array::from_fn::<u8, { W * H * 3 }, _>(|i| (i % 256) as u8);
        let raster = Raster::from_rgb(W, H, &pixels).unwrap();
        let output = encode(&raster).unwrap();

        let decoded = decode(&output).unwrap();
        assert_eq!(decoded.to_rgb(), &pixels[..]);
    }

    #[test]
    fn test_qoi_encode_rgba() {
        const W: usize = 100;
        const H: usize = 100;

        let pixels = std::array::from_fn::<u8, { W * H * 4 }, _>(|i| (i % 256) as u8);
        let raster = Raster::from_rgba(W, H, pixels.to_vec()).unwrap();

        let output = encode(&raster).unwrap();
        let decoded = decode(&output).unwrap();
        assert_eq!(&pixels[..], decoded.as_rgba());
    }

    #[test]
    fn empty_raster_is_rejected() {
        let raster = Raster::from_rgba(0, 5, vec![]).unwrap();
        let err = encode(&raster).unwrap_err();

        assert!(matches!(err, QoiEncodeErrors::EmptyRaster));
    }

    #[test]
    fn rgb_layout_ignores_stored_alpha() {
        let pixels = [Pixel::new(200, 9, 100, 0), Pixel::new(200, 9, 100, 17)];
        let raster = Raster::new(
            2,
            1,
            qpv_core::colorspace::ColorSpace::RGB,
            Raster::from_pixels(2, 1, &pixels).unwrap().into_rgba()
        )
        .unwrap();

        let output = encode(&raster).unwrap();
        // header, RGB(200, 9, 100), RUN(1), end marker
        assert_eq!(output[12], 3);
        assert_eq!(&output[14..19], &[0xfe, 200, 9, 100, 0xc0]);
        assert_eq!(output.len(), 14 + 5 + 8);
    }

    #[test]
    fn too_small_output() {
        let raster = Raster::from_rgba(1, 1, vec![1, 2, 3, 4]).unwrap();
        let encoder = QoiEncoder::new(&raster);
        let mut buf = vec![0; encoder.max_size() - 1];

        let err = encoder.encode_into(&mut buf).unwrap_err();
        assert!(matches!(err, QoiEncodeErrors::TooSmallOutput(27, 26)));
    }
}
