/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Pixels and the color cache shared by the encoder and decoder
use crate::constants::QOI_CACHE_SIZE;

/// A single RGBA pixel
///
/// Equality compares all four channels, alpha included.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8
}

impl Pixel {
    /// The pixel both the encoder and decoder start from
    pub const START: Pixel = Pixel::new(0, 0, 0, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Pixel {
        Pixel { r, g, b, a }
    }

    pub const fn from_bytes(bytes: [u8; 4]) -> Pixel {
        Pixel::new(bytes[0], bytes[1], bytes[2], bytes[3])
    }

    pub const fn to_bytes(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Slot of this pixel in the color cache
    ///
    /// `(r * 3 + g * 5 + b * 7 + a * 11) % 64`
    ///
    /// # Example
    /// ```
    /// use qpv_qoi::Pixel;
    /// assert_eq!(Pixel::new(0, 0, 0, 255).cache_slot(), 53);
    /// ```
    #[inline(always)]
    pub const fn cache_slot(&self) -> usize {
        (self.r as usize * 3 + self.g as usize * 5 + self.b as usize * 7 + self.a as usize * 11)
            % QOI_CACHE_SIZE
    }

    /// Per channel difference `self - prev` of the color channels,
    /// wrapped to a signed byte
    #[inline(always)]
    pub const fn wrapping_delta(&self, prev: &Pixel) -> (i8, i8, i8) {
        (
            self.r.wrapping_sub(prev.r) as i8,
            self.g.wrapping_sub(prev.g) as i8,
            self.b.wrapping_sub(prev.b) as i8
        )
    }

    /// Add signed deltas to the color channels modulo 256,
    /// alpha is untouched
    #[inline(always)]
    pub const fn wrapping_add(self, dr: i8, dg: i8, db: i8) -> Pixel {
        Pixel::new(
            self.r.wrapping_add_signed(dr),
            self.g.wrapping_add_signed(dg),
            self.b.wrapping_add_signed(db),
            self.a
        )
    }
}

/// The 64 entry table of previously seen pixels
///
/// A pixel always lives at [`Pixel::cache_slot`], inserting
/// overwrites whatever was there before.
/// All slots start out as the all zero pixel.
#[derive(Clone, Debug)]
pub struct ColorCache {
    slots: [Pixel; QOI_CACHE_SIZE]
}

impl Default for ColorCache {
    fn default() -> Self {
        ColorCache::new()
    }
}

impl ColorCache {
    pub const fn new() -> ColorCache {
        ColorCache {
            slots: [Pixel::new(0, 0, 0, 0); QOI_CACHE_SIZE]
        }
    }

    /// Return the pixel stored at `slot`
    ///
    /// Only the low six bits of `slot` are used
    #[inline(always)]
    pub const fn get(&self, slot: u8) -> Pixel {
        self.slots[(slot as usize) % QOI_CACHE_SIZE]
    }

    #[inline(always)]
    pub fn insert(&mut self, px: Pixel) {
        self.slots[px.cache_slot()] = px;
    }

    /// Return the slot holding `px` if the cache has it
    #[inline(always)]
    pub fn contains(&self, px: &Pixel) -> Option<u8> {
        let slot = px.cache_slot();

        if self.slots[slot] == *px {
            Some(slot as u8)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::pixel::{ColorCache, Pixel};

    #[test]
    fn cache_slot_does_not_overflow() {
        let white = Pixel::new(255, 255, 255, 255);
        // 255 * 26 = 6630, 6630 % 64 = 38
        assert_eq!(white.cache_slot(), 38);
    }

    #[test]
    fn delta_wraps() {
        let prev = Pixel::new(255, 0, 1, 255);
        let next = Pixel::new(0, 255, 3, 255);

        assert_eq!(next.wrapping_delta(&prev), (1, -1, 2));
        assert_eq!(prev.wrapping_add(1, -1, 2), next);
    }

    #[test]
    fn cache_overwrites_colliding_slot() {
        let mut cache = ColorCache::new();
        // both hash to slot 0
        let first = Pixel::new(0, 0, 0, 0);
        let second = Pixel::new(64, 0, 0, 0);
        assert_eq!(first.cache_slot(), second.cache_slot());

        cache.insert(second);
        assert_eq!(cache.contains(&second), Some(0));
        assert_eq!(cache.contains(&first), None);
        assert_eq!(cache.get(0), second);
    }

    #[test]
    fn empty_cache_is_all_zero() {
        let cache = ColorCache::new();
        for slot in 0..64 {
            assert_eq!(cache.get(slot), Pixel::default());
        }
    }
}
