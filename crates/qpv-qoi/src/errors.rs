/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Errors possible during decoding and encoding.
use alloc::string::String;
use core::fmt::{Debug, Display, Formatter};

use qpv_core::bytestream::ZByteIoError;

/// Possible Errors that may occur during decoding
pub enum QoiErrors {
    /// The input is shorter than the 14 byte header
    ///
    /// The argument is the number of bytes actually present
    InsufficientHeader(usize),
    /// The image does not start with QOI magic bytes `qoif`
    ///
    /// Indicates that image is not a qoi file
    WrongMagicBytes,
    /// The header contains an invalid channel number
    ///
    /// Only reported in strict mode, the supported values are `3` and `4`
    UnknownChannels(u8),
    /// The opcode stream ended before the image was filled
    ///
    /// # Arguments
    /// - 1st argument is the number of pixels the header promised
    /// - 2nd argument is the number of pixels actually decoded
    TruncatedStream(usize, usize),
    /// `width * height * 4` does not fit in memory
    TooLargeDimensions(usize, usize),
    /// To small output size
    TooSmallOutput(usize, usize),
    /// Generic message
    Generic(String),
    /// Generic message does not need heap allocation
    GenericStatic(&'static str),
    IoErrors(ZByteIoError),
    #[cfg(feature = "std")]
    Io(std::io::Error)
}

impl QoiErrors {
    /// True if the input is not a QOI stream at all
    /// (header too short or wrong magic)
    pub const fn is_format_error(&self) -> bool {
        matches!(self, Self::InsufficientHeader(_) | Self::WrongMagicBytes)
    }
    /// True if the input is a QOI stream that ends before
    /// all pixels were decoded
    pub const fn is_truncated(&self) -> bool {
        matches!(self, Self::TruncatedStream(..))
    }
}

impl Debug for QoiErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            QoiErrors::InsufficientHeader(found) => {
                writeln!(
                    f,
                    "Insufficient data for QOI header, expected 14 bytes but found {found}"
                )
            }
            QoiErrors::WrongMagicBytes => {
                writeln!(f, "Wrong magic bytes, expected `qoif` as image start")
            }
            QoiErrors::UnknownChannels(channel) => {
                writeln!(
                    f,
                    "Unknown channel number {channel}, expected either 3 or 4"
                )
            }
            QoiErrors::TruncatedStream(expected, found) => {
                writeln!(
                    f,
                    "Truncated stream, expected {expected} pixels but only {found} could be decoded"
                )
            }
            QoiErrors::TooLargeDimensions(width, height) => {
                writeln!(
                    f,
                    "Too large image dimensions {width}x{height}, pixel buffer size overflows"
                )
            }
            QoiErrors::TooSmallOutput(expected, found) => {
                writeln!(
                    f,
                    "Too small output size, expected {expected}, but found {found}"
                )
            }
            QoiErrors::Generic(val) => {
                writeln!(f, "{val}")
            }
            QoiErrors::GenericStatic(val) => {
                writeln!(f, "{val}")
            }
            QoiErrors::IoErrors(value) => {
                writeln!(f, "I/O error {:?}", value)
            }
            #[cfg(feature = "std")]
            QoiErrors::Io(value) => {
                writeln!(f, "I/O error {}", value)
            }
        }
    }
}

impl From<&'static str> for QoiErrors {
    fn from(r: &'static str) -> Self {
        Self::GenericStatic(r)
    }
}

impl From<ZByteIoError> for QoiErrors {
    fn from(value: ZByteIoError) -> Self {
        QoiErrors::IoErrors(value)
    }
}

#[cfg(feature = "std")]
impl From<std::io::Error> for QoiErrors {
    fn from(value: std::io::Error) -> Self {
        QoiErrors::Io(value)
    }
}

/// Errors encountered during encoding
pub enum QoiEncodeErrors {
    /// The raster has zero width or zero height
    EmptyRaster,
    /// Too large dimensions
    /// The dimensions cannot be correctly encoded to a width
    TooLargeDimensions(usize),
    /// The pixel buffer does not hold `width * height` RGBA pixels
    ///
    /// # Arguments
    /// - 1st argument is the expected length in bytes
    /// - 2nd argument is the length found
    LengthMismatch(usize, usize),
    /// To small output size
    TooSmallOutput(usize, usize),

    Generic(&'static str),

    IoError(ZByteIoError),
    #[cfg(feature = "std")]
    Io(std::io::Error)
}

impl Debug for QoiEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            QoiEncodeErrors::EmptyRaster => {
                writeln!(f, "Cannot encode an image with zero width or height")
            }
            QoiEncodeErrors::TooLargeDimensions(found) => {
                writeln!(
                    f,
                    "Too large image dimensions {found}, QOI can only encode images less than {}",
                    u32::MAX
                )
            }
            QoiEncodeErrors::LengthMismatch(expected, found) => {
                writeln!(
                    f,
                    "Expected {expected} bytes of RGBA pixels but found {found}"
                )
            }
            QoiEncodeErrors::TooSmallOutput(expected, found) => {
                writeln!(
                    f,
                    "Too small output size, expected {expected}, but found {found}"
                )
            }
            QoiEncodeErrors::Generic(val) => {
                writeln!(f, "{}", val)
            }
            QoiEncodeErrors::IoError(v) => {
                writeln!(f, "I/O error {:?}", v)
            }
            #[cfg(feature = "std")]
            QoiEncodeErrors::Io(v) => {
                writeln!(f, "I/O error {}", v)
            }
        }
    }
}

impl Display for QoiEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}
impl Display for QoiErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for QoiEncodeErrors {}

#[cfg(feature = "std")]
impl std::error::Error for QoiErrors {}

impl From<ZByteIoError> for QoiEncodeErrors {
    fn from(value: ZByteIoError) -> Self {
        Self::IoError(value)
    }
}

#[cfg(feature = "std")]
impl From<std::io::Error> for QoiEncodeErrors {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}
