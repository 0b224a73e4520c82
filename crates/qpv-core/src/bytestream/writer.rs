/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use crate::bytestream::ZByteIoError;

/// Encapsulates a simple byte writer with
/// support for big endian writes
///
/// The writer never grows the buffer, callers size it
/// up front and the writer reports when it runs out of space.
pub struct ZByteWriter<'a> {
    buffer:   &'a mut [u8],
    position: usize
}

impl<'a> ZByteWriter<'a> {
    /// Create a new writer for the buffer
    pub fn new(data: &'a mut [u8]) -> ZByteWriter<'a> {
        ZByteWriter {
            buffer:   data,
            position: 0
        }
    }
    /// Return number of unwritten bytes in this stream
    ///
    /// # Example
    /// ```
    /// use qpv_core::bytestream::ZByteWriter;
    /// let mut storage = [0; 10];
    ///
    /// let writer = ZByteWriter::new(&mut storage);
    /// assert_eq!(writer.bytes_left(), 10); // no bytes were written
    /// ```
    pub const fn bytes_left(&self) -> usize {
        self.buffer.len().saturating_sub(self.position)
    }

    /// Return the number of bytes the writer has written
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Write a single byte into the bytestream or error out
    /// if there is not enough space
    ///
    /// # Example
    /// ```
    /// use qpv_core::bytestream::ZByteWriter;
    /// let mut buf = [0; 1];
    /// let mut stream = ZByteWriter::new(&mut buf);
    /// assert!(stream.write_u8_err(34).is_ok());
    /// assert!(stream.write_u8_err(35).is_err());
    /// ```
    #[inline(always)]
    pub fn write_u8_err(&mut self, byte: u8) -> Result<(), ZByteIoError> {
        match self.buffer.get_mut(self.position) {
            Some(m_byte) => {
                self.position += 1;
                *m_byte = byte;

                Ok(())
            }
            None => Err(ZByteIoError::NotEnoughBuffer(1, 0))
        }
    }

    /// Write all bytes of `buf` or nothing at all if they
    /// do not fit
    pub fn write_all(&mut self, buf: &[u8]) -> Result<(), ZByteIoError> {
        let left = self.bytes_left();

        if buf.len() > left {
            return Err(ZByteIoError::NotEnoughBuffer(buf.len(), left));
        }
        self.buffer[self.position..self.position + buf.len()].copy_from_slice(buf);
        self.position += buf.len();

        Ok(())
    }

    #[inline(always)]
    pub fn write_u32_be_err(&mut self, value: u32) -> Result<(), ZByteIoError> {
        self.write_all(&value.to_be_bytes())
    }

    #[inline(always)]
    pub fn write_u64_be_err(&mut self, value: u64) -> Result<(), ZByteIoError> {
        self.write_all(&value.to_be_bytes())
    }
}

#[cfg(test)]
mod tests {
    use crate::bytestream::{ZByteIoError, ZByteWriter};

    #[test]
    fn big_endian_writes() {
        let mut buf = [0; 12];
        let mut writer = ZByteWriter::new(&mut buf);

        writer.write_u32_be_err(0x716f_6966).unwrap();
        writer.write_u64_be_err(1).unwrap();
        assert_eq!(writer.position(), 12);
        assert_eq!(&buf, b"qoif\0\0\0\0\0\0\0\x01");
    }

    #[test]
    fn partial_write_writes_nothing() {
        let mut buf = [0; 3];
        let mut writer = ZByteWriter::new(&mut buf);
        writer.write_u8_err(7).unwrap();

        let err = writer.write_u32_be_err(u32::MAX).unwrap_err();
        assert!(matches!(err, ZByteIoError::NotEnoughBuffer(4, 2)));
        assert_eq!(writer.position(), 1);
        assert_eq!(buf, [7, 0, 0]);
    }
}
