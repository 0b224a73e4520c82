/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! The fixed 14 byte preamble of a QOI stream
//!
//! ```text
//! offset 0  : magic        4 bytes  "qoif"
//! offset 4  : width        4 bytes  big endian
//! offset 8  : height       4 bytes  big endian
//! offset 12 : channels     1 byte   (3 or 4)
//! offset 13 : colorspace   1 byte   (stored, never interpreted)
//! ```
use qpv_core::bytestream::{ZByteIoError, ZByteReader, ZByteWriter};
use qpv_core::colorspace::ColorSpace;

use crate::constants::{QOI_HEADER_SIZE, QOI_MAGIC};
use crate::errors::QoiErrors;

/// A decoded QOI header
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct QoiHeader {
    pub width:      u32,
    pub height:     u32,
    /// Raw channels byte, 3 for RGB and 4 for RGBA
    pub channels:   u8,
    /// Opaque colorspace tag, round tripped as is
    pub colorspace: u8
}

impl QoiHeader {
    pub const fn new(width: u32, height: u32, channels: u8, colorspace: u8) -> QoiHeader {
        QoiHeader {
            width,
            height,
            channels,
            colorspace
        }
    }

    /// Serialize the header
    ///
    /// # Example
    /// ```
    /// use qpv_qoi::QoiHeader;
    /// let bytes = QoiHeader::new(2, 2, 4, 0).write();
    /// assert_eq!(&bytes[..4], b"qoif");
    /// assert_eq!(&bytes[4..], &[0, 0, 0, 2, 0, 0, 0, 2, 4, 0]);
    /// ```
    pub fn write(&self) -> [u8; QOI_HEADER_SIZE] {
        let mut bytes = [0; QOI_HEADER_SIZE];
        bytes[0..4].copy_from_slice(&QOI_MAGIC.to_be_bytes());
        bytes[4..8].copy_from_slice(&self.width.to_be_bytes());
        bytes[8..12].copy_from_slice(&self.height.to_be_bytes());
        bytes[12] = self.channels;
        bytes[13] = self.colorspace;
        bytes
    }

    /// Write the header into `writer`
    pub fn write_to(&self, writer: &mut ZByteWriter) -> Result<(), ZByteIoError> {
        writer.write_all(&self.write())
    }

    /// Parse a header from the start of `data`
    ///
    /// Only the magic bytes are checked, field values are
    /// taken as is.
    pub fn read(data: &[u8]) -> Result<QoiHeader, QoiErrors> {
        QoiHeader::read_from(&mut ZByteReader::new(data))
    }

    /// Parse a header at the reader's position, advancing
    /// it past the header on success
    pub fn read_from(stream: &mut ZByteReader) -> Result<QoiHeader, QoiErrors> {
        if !stream.has(QOI_HEADER_SIZE) {
            return Err(QoiErrors::InsufficientHeader(stream.remaining()));
        }
        let magic = stream.get_u32_be_err()?;

        if magic != QOI_MAGIC {
            return Err(QoiErrors::WrongMagicBytes);
        }
        // these were confirmed to be in bounds by `has`
        let width = stream.get_u32_be_err()?;
        let height = stream.get_u32_be_err()?;
        let channels = stream.get_u8_err()?;
        let colorspace = stream.get_u8_err()?;

        Ok(QoiHeader::new(width, height, channels, colorspace))
    }

    /// Number of pixels in the image, `None` if it overflows a usize
    pub fn pixel_count(&self) -> Option<usize> {
        usize::try_from(self.width)
            .ok()?
            .checked_mul(usize::try_from(self.height).ok()?)
    }

    /// Size of the RGBA buffer needed to hold the decoded image
    pub fn output_buffer_size(&self) -> Option<usize> {
        self.pixel_count()?.checked_mul(4)
    }

    /// Channel layout described by the header
    ///
    /// Anything other than 3 is treated as RGBA, which is
    /// what the decoder outputs anyway
    pub const fn colorspace_layout(&self) -> ColorSpace {
        match self.channels {
            3 => ColorSpace::RGB,
            _ => ColorSpace::RGBA
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for QoiHeader {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer
    {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("QoiHeader", 4)?;
        state.serialize_field("width", &self.width)?;
        state.serialize_field("height", &self.height)?;
        state.serialize_field("channels", &self.channels)?;
        state.serialize_field("colorspace", &self.colorspace)?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use crate::header::QoiHeader;
    use crate::QoiErrors;

    #[test]
    fn header_round_trip_keeps_colorspace_tag() {
        let header = QoiHeader::new(640, 480, 3, 0xab);
        let bytes = header.write();

        assert_eq!(&bytes[4..8], &[0, 0, 2, 128]);
        assert_eq!(QoiHeader::read(&bytes).unwrap(), header);
    }

    #[test]
    fn thirteen_bytes_is_too_short() {
        let bytes = QoiHeader::new(1, 1, 4, 0).write();
        let err = QoiHeader::read(&bytes[..13]).unwrap_err();

        assert!(matches!(err, QoiErrors::InsufficientHeader(13)));
        assert!(err.is_format_error());
    }

    #[test]
    fn corrupted_magic() {
        let mut bytes = QoiHeader::new(1, 1, 4, 0).write();
        bytes[3] = b'g';

        let err = QoiHeader::read(&bytes).unwrap_err();
        assert!(matches!(err, QoiErrors::WrongMagicBytes));
    }

    #[test]
    fn buffer_size_overflow() {
        let header = QoiHeader::new(u32::MAX, u32::MAX, 4, 0);
        #[cfg(target_pointer_width = "64")]
        assert!(header.pixel_count().is_some());
        assert!(header.output_buffer_size().is_none());
    }
}
