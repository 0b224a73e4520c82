/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use crate::bytestream::ZByteIoError;

/// An encapsulation of a byte stream reader
///
/// The reader borrows the data and tracks its own position,
/// every read advances the position by the number of bytes consumed.
///
/// A failed read leaves the position untouched.
pub struct ZByteReader<'a> {
    /// Data stream
    stream:   &'a [u8],
    position: usize
}

#[allow(clippy::len_without_is_empty)]
impl<'a> ZByteReader<'a> {
    /// Create a new reader positioned at the start of `buf`
    pub const fn new(buf: &'a [u8]) -> ZByteReader<'a> {
        ZByteReader {
            stream:   buf,
            position: 0
        }
    }
    /// Return the number of bytes between the current position
    /// and the end of the stream
    ///
    /// # Example
    /// ```
    /// use qpv_core::bytestream::ZByteReader;
    /// let mut reader = ZByteReader::new(&[1, 2, 3]);
    /// reader.get_u8_err().unwrap();
    /// assert_eq!(reader.remaining(), 2);
    /// ```
    pub const fn remaining(&self) -> usize {
        // Must be saturating to prevent underflow
        self.stream.len().saturating_sub(self.position)
    }
    /// Return true if the stream has at least `num` bytes left
    pub const fn has(&self, num: usize) -> bool {
        self.remaining() >= num
    }
    /// Total length of the underlying stream
    pub const fn len(&self) -> usize {
        self.stream.len()
    }
    /// Current position in the stream
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Read a single byte or error out if the stream is exhausted
    ///
    /// # Example
    /// ```
    /// use qpv_core::bytestream::ZByteReader;
    /// let mut reader = ZByteReader::new(&[0xfe]);
    /// assert_eq!(reader.get_u8_err().unwrap(), 0xfe);
    /// assert!(reader.get_u8_err().is_err());
    /// ```
    #[inline(always)]
    pub fn get_u8_err(&mut self) -> Result<u8, ZByteIoError> {
        match self.stream.get(self.position) {
            Some(byte) => {
                self.position += 1;
                Ok(*byte)
            }
            None => Err(ZByteIoError::NotEnoughBytes(1, 0))
        }
    }

    /// Read `N` bytes into a fixed size array or error out
    /// if fewer than `N` bytes are left
    #[inline(always)]
    pub fn get_fixed_bytes_or_err<const N: usize>(&mut self) -> Result<[u8; N], ZByteIoError> {
        let mut space = [0; N];
        let (stream, start) = (self.stream, self.position);

        match start.checked_add(N).and_then(|end| stream.get(start..end)) {
            Some(bytes) => {
                space.copy_from_slice(bytes);
                self.position += N;
                Ok(space)
            }
            None => Err(ZByteIoError::NotEnoughBytes(N, self.remaining()))
        }
    }

    /// Read a big endian u32
    ///
    /// # Example
    /// ```
    /// use qpv_core::bytestream::ZByteReader;
    /// let mut reader = ZByteReader::new(&[0, 0, 1, 0]);
    /// assert_eq!(reader.get_u32_be_err().unwrap(), 256);
    /// ```
    #[inline(always)]
    pub fn get_u32_be_err(&mut self) -> Result<u32, ZByteIoError> {
        self.get_fixed_bytes_or_err::<4>().map(u32::from_be_bytes)
    }

    /// Look at `num` bytes starting at `position` without moving
    /// the reader
    pub fn peek_at(&self, position: usize, num: usize) -> Result<&'a [u8], ZByteIoError> {
        let stream = self.stream;

        position
            .checked_add(num)
            .and_then(|end| stream.get(position..end))
            .ok_or(ZByteIoError::NotEnoughBytes(
                num,
                stream.len().saturating_sub(position)
            ))
    }
}
