/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Cross check encoder output against an independent QOI decoder

use nanorand::{Rng, WyRand};
use qpv_qoi::{encode, Pixel, Raster};

fn decode_ref(data: &[u8]) -> Vec<u8> {
    rapid_qoi::Qoi::decode_alloc(data).unwrap().1
}

fn test_against_reference(raster: &Raster) {
    let encoded = encode(raster).unwrap();
    let ref_results = decode_ref(&encoded);

    assert_eq!(&ref_results[..], raster.as_rgba());
}

#[test]
fn random_pixels() {
    let mut rand = WyRand::new_seed(2023);
    let mut pixels = vec![0_u8; 64 * 48 * 4];
    rand.fill(&mut pixels);

    test_against_reference(&Raster::from_rgba(64, 48, pixels).unwrap());
}

#[test]
fn gradients_and_runs() {
    let mut pixels = Vec::new();

    for y in 0..32_u8 {
        for x in 0..64_u8 {
            let px = if x % 16 < 8 {
                Pixel::new(x, y, x ^ y, 255)
            } else {
                Pixel::new(y * 7, 3, 200, 255 - y)
            };
            pixels.push(px);
        }
    }
    test_against_reference(&Raster::from_pixels(64, 32, &pixels).unwrap());
}
