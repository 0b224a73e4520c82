/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Whole file helpers
//!
//! The file is read completely before decoding starts and the encoded
//! image is written in one go, the codec itself never touches I/O.
use std::fs;
use std::path::Path;

use qpv_core::log::trace;

use crate::{decode, encode, QoiEncodeErrors, QoiErrors, Raster};

/// Read and decode the QOI image at `path`
pub fn open<P: AsRef<Path>>(path: P) -> Result<Raster, QoiErrors> {
    let path = path.as_ref();
    let data = fs::read(path)?;

    trace!("Read {} bytes from {}", data.len(), path.display());

    decode(&data)
}

/// Encode `raster` and write it to `path`, replacing any existing file
pub fn save<P: AsRef<Path>>(raster: &Raster, path: P) -> Result<(), QoiEncodeErrors> {
    let path = path.as_ref();
    let data = encode(raster)?;

    fs::write(path, &data)?;

    trace!("Wrote {} bytes to {}", data.len(), path.display());

    Ok(())
}

/// Message shown when an image cannot be opened
///
/// Only the file name is included, not the full path
///
/// # Example
/// ```
/// use qpv_qoi::file::open_error_message;
/// assert_eq!(
///     open_error_message("/pictures/cat.qoi"),
///     "unable to open file: cat.qoi"
/// );
/// ```
pub fn open_error_message<P: AsRef<Path>>(path: P) -> String {
    let path = path.as_ref();
    let name = path.file_name().unwrap_or(path.as_os_str());

    format!("unable to open file: {}", name.to_string_lossy())
}
