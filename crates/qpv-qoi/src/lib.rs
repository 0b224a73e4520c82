/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Decoding and encoding Quite OK Images
//!
//! [Format Specification](https://qoiformat.org/qoi-specification.pdf)
//!
//! The codec turns a byte buffer into an RGBA [`Raster`] and back.
//! Everything else (reading files, showing the image, turning errors into
//! messages) is up to the caller, the [`file`] module has the small helpers
//! the viewer uses for that.
//!
//! # Example
//! ```
//! use qpv_qoi::{decode, encode, Pixel, Raster};
//!
//! let red = Pixel::new(255, 0, 0, 255);
//! let raster = Raster::from_pixels(2, 1, &[red, red]).unwrap();
//!
//! let bytes = encode(&raster).unwrap();
//! assert_eq!(decode(&bytes).unwrap(), raster);
//! ```
//!
//! # Features
//! - `std`: file helpers and `std::error::Error` impls, on by default
//! - `log`: log through the `log` crate, on by default
//! - `serde`: serialize [`QoiHeader`]
//!
//! ## `no_std`
//! You can use `no_std` with alloc feature to compile for `no_std` endpoints

#![cfg_attr(not(feature = "std"), no_std)]
#![macro_use]
extern crate alloc;
extern crate core;

pub use decoder::*;
pub use encoder::*;
pub use errors::*;
pub use header::QoiHeader;
pub use pixel::{ColorCache, Pixel};
pub use qpv_core;
pub use raster::Raster;

mod constants;
mod decoder;
mod encoder;
mod errors;
#[cfg(feature = "std")]
pub mod file;
mod header;
mod pixel;
mod raster;
