/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Image channel layouts
//!
//! This describes how many color components the source of an image carried,
//! it is recorded in the `channels` byte of a QOI header.

/// All possible channel layouts of a QOI image
#[allow(clippy::upper_case_acronyms)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ColorSpace {
    /// Red, Green, Blue, alpha is not tracked
    RGB,
    /// Red, Green, Blue, Alpha
    RGBA
}

impl ColorSpace {
    /// Number of color channels present for a certain colorspace
    ///
    /// E.g. RGB returns 3 since it contains R,G and B colors to make up a pixel
    pub const fn num_components(&self) -> usize {
        match self {
            Self::RGB => 3,
            Self::RGBA => 4
        }
    }
    /// The value stored in the `channels` header byte
    pub const fn channel_count(&self) -> u8 {
        self.num_components() as u8
    }

    pub const fn has_alpha(&self) -> bool {
        matches!(self, Self::RGBA)
    }

    /// Map a header `channels` byte to a layout
    ///
    /// Returns `None` for anything other than 3 or 4
    ///
    /// # Example
    /// ```
    /// use qpv_core::colorspace::ColorSpace;
    /// assert_eq!(ColorSpace::from_channel_count(3), Some(ColorSpace::RGB));
    /// assert_eq!(ColorSpace::from_channel_count(2), None);
    /// ```
    pub const fn from_channel_count(channels: u8) -> Option<ColorSpace> {
        match channels {
            3 => Some(Self::RGB),
            4 => Some(Self::RGBA),
            _ => None
        }
    }
}
