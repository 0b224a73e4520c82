/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A simple implementation of a bytestream reader
//! and writer.
//!
//! Both operate on borrowed slices and keep their own position,
//! so callers never thread an index through helper functions.
//! Reads and writes are bounds checked and report
//! [`ZByteIoError`] instead of panicking.
use core::fmt::{Debug, Display, Formatter};

pub use reader::ZByteReader;
pub use writer::ZByteWriter;

mod reader;
mod writer;

/// Errors returned by the bytestream reader and writer
pub enum ZByteIoError {
    /// Not enough bytes left in the stream
    ///
    /// # Arguments
    /// - 1st argument is the number of bytes requested
    /// - 2nd argument is the number of bytes actually left
    NotEnoughBytes(usize, usize),
    /// Not enough space left in the output buffer
    ///
    /// # Arguments
    /// - 1st argument is the number of bytes we wanted to write
    /// - 2nd argument is the space left in the buffer
    NotEnoughBuffer(usize, usize),
    Generic(&'static str)
}

impl Debug for ZByteIoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            ZByteIoError::NotEnoughBytes(expected, found) => {
                writeln!(f, "Not enough bytes, expected {expected} but found {found}")
            }
            ZByteIoError::NotEnoughBuffer(expected, found) => {
                writeln!(
                    f,
                    "Not enough buffer to write {expected} bytes, buffer size is {found}"
                )
            }
            ZByteIoError::Generic(err) => {
                writeln!(f, "Generic I/O error: {err}")
            }
        }
    }
}

impl Display for ZByteIoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

impl From<&'static str> for ZByteIoError {
    fn from(value: &'static str) -> Self {
        ZByteIoError::Generic(value)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ZByteIoError {}
