/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Decoder options

/// Width and height limit used by [`DecoderOptions::new_safe`]
const SAFE_MAX_DIMENSION: usize = 1 << 14;

/// Decoder options
///
/// Options are set with builder style setters
///
/// # Example
/// ```
/// use qpv_core::options::DecoderOptions;
///
/// let options = DecoderOptions::default()
///     .set_max_width(1024)
///     .set_max_height(768)
///     .set_strict_mode(true);
///
/// assert_eq!(options.max_width(), 1024);
/// assert!(options.strict_mode());
/// ```
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct DecoderOptions {
    /// Maximum width for which decoders will
    /// not try to decode images larger than
    /// the specified width.
    ///
    /// - Default value: unlimited
    max_width:   usize,
    /// Maximum height for which decoders will not
    /// try to decode images larger than the
    /// specified height
    ///
    /// - Default value: unlimited
    max_height:  usize,
    /// Reject non-conforming input instead of
    /// logging a warning and carrying on
    ///
    /// - Default value: false
    strict_mode: bool
}

impl Default for DecoderOptions {
    fn default() -> Self {
        DecoderOptions {
            max_width:   usize::MAX,
            max_height:  usize::MAX,
            strict_mode: false
        }
    }
}

/// Initializers
impl DecoderOptions {
    /// Create options that limit width and height to 16384
    /// and reject non-conforming input
    pub fn new_safe() -> DecoderOptions {
        DecoderOptions::default()
            .set_max_width(SAFE_MAX_DIMENSION)
            .set_max_height(SAFE_MAX_DIMENSION)
            .set_strict_mode(true)
    }
}

impl DecoderOptions {
    /// Get maximum width configured for which the decoder
    /// should not try to decode images greater than this width
    pub const fn max_width(&self) -> usize {
        self.max_width
    }

    /// Get maximum height configured for which the decoder should
    /// not try to decode images greater than this height
    pub const fn max_height(&self) -> usize {
        self.max_height
    }

    /// Return true if the decoder should reject
    /// non-conforming input
    pub const fn strict_mode(&self) -> bool {
        self.strict_mode
    }

    /// Set maximum width for which the decoder should not try
    /// decoding images greater than that width
    pub const fn set_max_width(mut self, width: usize) -> Self {
        self.max_width = width;
        self
    }

    /// Set maximum height for which the decoder should not try
    /// decoding images greater than that height
    pub const fn set_max_height(mut self, height: usize) -> Self {
        self.max_height = height;
        self
    }

    pub const fn set_strict_mode(mut self, yes: bool) -> Self {
        self.strict_mode = yes;
        self
    }
}

#[cfg(test)]
mod tests {
    use crate::options::DecoderOptions;

    #[test]
    fn default_has_no_dimension_limit() {
        let options = DecoderOptions::default();
        assert_eq!(options.max_width(), usize::MAX);
        assert_eq!(options.max_height(), usize::MAX);
        assert!(!options.strict_mode());
    }

    #[test]
    fn safe_options_limit_dimensions() {
        let options = DecoderOptions::new_safe();
        assert_eq!(options.max_width(), 16384);
        assert_eq!(options.max_height(), 16384);
        assert!(options.strict_mode());
    }
}
