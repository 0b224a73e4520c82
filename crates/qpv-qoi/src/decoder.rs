/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use alloc::{format, vec};

use qpv_core::bytestream::{ZByteIoError, ZByteReader};
use qpv_core::colorspace::ColorSpace;
use qpv_core::log::{trace, warn};
use qpv_core::options::DecoderOptions;

use crate::constants::{
    QOI_END_MARKER, QOI_HEADER_SIZE, QOI_MASK_2, QOI_MASK_6, QOI_MAX_RUN, QOI_OP_DIFF,
    QOI_OP_INDEX, QOI_OP_RGB, QOI_OP_RGBA, QOI_OP_RUN, QOI_PADDING
};
use crate::errors::QoiErrors;
use crate::header::QoiHeader;
use crate::pixel::{ColorCache, Pixel};
use crate::raster::Raster;

/// Decode a complete QOI stream into an RGBA raster
///
/// This is a shorthand for [`QoiDecoder::new`] followed by [`QoiDecoder::decode`]
///
/// # Example
/// ```
/// use qpv_qoi::{decode, encode, Raster};
/// let raster = Raster::from_rgba(1, 1, vec![10, 20, 30, 40]).unwrap();
/// let bytes = encode(&raster).unwrap();
/// assert_eq!(decode(&bytes).unwrap(), raster);
/// ```
pub fn decode(data: &[u8]) -> Result<Raster, QoiErrors> {
    QoiDecoder::new(data).decode()
}

/// A Quite OK Image decoder
///
/// The decoder is initialized by calling `new`
/// and either of [`decode_headers`] to decode headers
/// or [`decode`] to return uncompressed pixels
///
/// Additional methods are provided that give more
/// details of the compressed image like width and height
/// are accessible after decoding headers
///
/// [`decode_headers`]:QoiDecoder::decode_headers
/// [`decode`]:QoiDecoder::decode
pub struct QoiDecoder<'a> {
    header:  Option<QoiHeader>,
    stream:  ZByteReader<'a>,
    options: DecoderOptions
}

impl<'a> QoiDecoder<'a> {
    /// Create a new QOI format decoder with the default options
    pub fn new(data: &'a [u8]) -> QoiDecoder<'a> {
        QoiDecoder::new_with_options(data, DecoderOptions::default())
    }
    /// Create a new QOI format decoder that obeys specified restrictions
    ///
    /// E.g can be used to set width and height limits to prevent OOM attacks
    ///
    /// # Example
    /// ```
    /// use qpv_core::options::DecoderOptions;
    /// use qpv_qoi::QoiDecoder;
    /// // only decode images less than 10 in both width and height
    /// let options = DecoderOptions::default().set_max_width(10).set_max_height(10);
    ///
    /// let mut decoder = QoiDecoder::new_with_options(&[], options);
    /// ```
    pub fn new_with_options(data: &'a [u8], options: DecoderOptions) -> QoiDecoder<'a> {
        QoiDecoder {
            header: None,
            stream: ZByteReader::new(data),
            options
        }
    }
    /// Decode a QOI header storing needed information into
    /// the decoder instance
    ///
    /// Calling this more than once is a no-op
    pub fn decode_headers(&mut self) -> Result<(), QoiErrors> {
        if self.header.is_some() {
            return Ok(());
        }
        let header = QoiHeader::read_from(&mut self.stream)?;

        if ColorSpace::from_channel_count(header.channels).is_none() {
            if self.options.strict_mode() {
                return Err(QoiErrors::UnknownChannels(header.channels));
            }
            warn!(
                "Unknown channel number {}, expected 3 or 4, decoding as RGBA",
                header.channels
            );
        }
        let width = usize::try_from(header.width).unwrap_or(usize::MAX);
        let height = usize::try_from(header.height).unwrap_or(usize::MAX);

        if width > self.options.max_width() {
            let msg = format!(
                "Width {} greater than max configured width {}",
                width,
                self.options.max_width()
            );
            return Err(QoiErrors::Generic(msg));
        }

        if height > self.options.max_height() {
            let msg = format!(
                "Height {} greater than max configured height {}",
                height,
                self.options.max_height()
            );
            return Err(QoiErrors::Generic(msg));
        }
        if header.output_buffer_size().is_none() {
            return Err(QoiErrors::TooLargeDimensions(width, height));
        }

        trace!("Image width: {:?}", width);
        trace!("Image height: {:?}", height);
        trace!("Image channels: {:?}", header.channels);
        trace!("Image colorspace tag: {:?}", header.colorspace);

        self.header = Some(header);

        Ok(())
    }

    /// Return the number of bytes required to hold the decoded
    /// RGBA image, or `None` if headers haven't been decoded
    pub fn output_buffer_size(&self) -> Option<usize> {
        self.header.and_then(|header| header.output_buffer_size())
    }

    /// Decode the bytes of a QOI image, returning the
    /// pixels or the error encountered during decoding
    ///
    /// No partially decoded image is ever returned, a stream
    /// that runs out before all pixels are produced is an error.
    pub fn decode(&mut self) -> Result<Raster, QoiErrors> {
        let header = self.decoded_header()?;
        let size = self.output_buffer_size().ok_or(QoiErrors::GenericStatic(
            "Headers were not decoded"
        ))?;
        // don't allocate for pixels the stream cannot possibly hold
        self.check_stream_capacity(size / 4)?;

        let mut output = vec![0; size];

        self.decode_inner(&mut output)?;

        Ok(Raster::from_parts(
            header.width as usize,
            header.height as usize,
            header.colorspace_layout(),
            header.colorspace,
            output
        ))
    }

    /// Decode a compressed Qoi image and store the RGBA contents
    /// into the output buffer
    ///
    /// Returns an error if the buffer cannot hold the image
    pub fn decode_into(&mut self, pixels: &mut [u8]) -> Result<(), QoiErrors> {
        self.decoded_header()?;

        let size = self.output_buffer_size().ok_or(QoiErrors::GenericStatic(
            "Headers were not decoded"
        ))?;

        if pixels.len() < size {
            return Err(QoiErrors::TooSmallOutput(size, pixels.len()));
        }
        self.check_stream_capacity(size / 4)?;

        self.decode_inner(&mut pixels[..size])
    }

    /// Every opcode byte yields at most 62 pixels, error out early
    /// if the bytes before the end marker cannot cover `total` pixels
    fn check_stream_capacity(&self, total: usize) -> Result<(), QoiErrors> {
        let end = self.stream.len().saturating_sub(QOI_PADDING);
        let capacity = end
            .saturating_sub(self.stream.position())
            .saturating_mul(usize::from(QOI_MAX_RUN));

        if total > capacity {
            return Err(QoiErrors::TruncatedStream(total, 0));
        }
        Ok(())
    }

    fn decoded_header(&mut self) -> Result<QoiHeader, QoiErrors> {
        self.decode_headers()?;
        self.header
            .ok_or(QoiErrors::GenericStatic("Headers were not decoded"))
    }

    fn decode_inner(&mut self, pixels: &mut [u8]) -> Result<(), QoiErrors> {
        let total = pixels.len() / 4;
        // opcodes are read until the start of the end marker
        let end = self.stream.len().saturating_sub(QOI_PADDING);

        let mut cache = ColorCache::new();
        let mut px = Pixel::START;
        let mut written = 0;

        while written < total && self.stream.position() < end {
            let chunk = self.stream.get_u8_err()?;
            let truncated = move |_: ZByteIoError| QoiErrors::TruncatedStream(total, written);

            let mut run = 1;

            if chunk == QOI_OP_RGB {
                let [r, g, b] = self
                    .stream
                    .get_fixed_bytes_or_err::<3>()
                    .map_err(truncated)?;

                px = Pixel::new(r, g, b, px.a);
                cache.insert(px);
            } else if chunk == QOI_OP_RGBA {
                let rgba = self
                    .stream
                    .get_fixed_bytes_or_err::<4>()
                    .map_err(truncated)?;

                px = Pixel::from_bytes(rgba);
                cache.insert(px);
            } else {
                match chunk & QOI_MASK_2 {
                    QOI_OP_RUN => {
                        run = usize::from(chunk & QOI_MASK_6) + 1;
                    }
                    QOI_OP_INDEX => {
                        px = cache.get(chunk & QOI_MASK_6);
                    }
                    QOI_OP_DIFF => {
                        let dr = ((chunk >> 4) & 0x03) as i8 - 2;
                        let dg = ((chunk >> 2) & 0x03) as i8 - 2;
                        let db = (chunk & 0x03) as i8 - 2;

                        px = px.wrapping_add(dr, dg, db);
                        cache.insert(px);
                    }
                    // QOI_OP_LUMA, the only tag left under the 2 bit mask
                    _ => {
                        let b2 = self.stream.get_u8_err().map_err(truncated)?;
                        let dg = (chunk & QOI_MASK_6) as i8 - 32;
                        let dr = dg + ((b2 >> 4) as i8 - 8);
                        let db = dg + ((b2 & 0x0f) as i8 - 8);

                        px = px.wrapping_add(dr, dg, db);
                        cache.insert(px);
                    }
                }
            }
            // a run longer than what is left of the image is clipped
            let run = run.min(total - written);

            for out in pixels[written * 4..(written + run) * 4].chunks_exact_mut(4) {
                out.copy_from_slice(&px.to_bytes());
            }
            written += run;
        }

        if written < total {
            return Err(QoiErrors::TruncatedStream(total, written));
        }
        if self.stream.position() < end {
            warn!(
                "Image filled with {} bytes of opcodes left before the end marker",
                end - self.stream.position()
            );
        }
        self.check_end_marker()?;

        trace!("Finished decoding image");

        Ok(())
    }

    fn check_end_marker(&self) -> Result<(), QoiErrors> {
        let len = self.stream.len();

        let has_marker = len >= QOI_HEADER_SIZE + QOI_PADDING
            && self
                .stream
                .peek_at(len - QOI_PADDING, QOI_PADDING)
                .map(|bytes| bytes == &QOI_END_MARKER[..])
                .unwrap_or(false);

        if !has_marker {
            if self.options.strict_mode() {
                return Err(QoiErrors::GenericStatic(
                    "Last bytes do not match QOI end marker"
                ));
            }
            warn!("Last bytes do not match QOI end marker");
        }
        Ok(())
    }

    /// Returns the QOI header or `None` if it hasn't been decoded
    pub const fn header(&self) -> Option<QoiHeader> {
        self.header
    }

    /// Returns the channel layout recorded in the header
    /// or `None` if the headers haven't been decoded
    pub const fn colorspace(&self) -> Option<ColorSpace> {
        match self.header {
            Some(header) => Some(header.colorspace_layout()),
            None => None
        }
    }

    /// Return the width and height of the image
    ///
    /// Or none if the headers haven't been decoded
    ///
    /// # Example
    ///
    /// ```
    /// use qpv_qoi::{encode, QoiDecoder, Raster};
    /// let bytes = encode(&Raster::from_rgba(3, 1, vec![0; 12]).unwrap()).unwrap();
    /// let mut decoder = QoiDecoder::new(&bytes);
    ///
    /// decoder.decode_headers().unwrap();
    /// assert_eq!(decoder.dimensions(), Some((3, 1)));
    /// ```
    pub const fn dimensions(&self) -> Option<(usize, usize)> {
        match self.header {
            Some(header) => Some((header.width as usize, header.height as usize)),
            None => None
        }
    }
}
