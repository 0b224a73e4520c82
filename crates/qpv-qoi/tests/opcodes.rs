/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Exact byte checks of encoder output

use qpv_qoi::{decode, encode, Pixel, Raster};

const END_MARKER: [u8; 8] = [0, 0, 0, 0, 0, 0, 0, 1];

fn opcodes(encoded: &[u8]) -> &[u8] {
    assert_eq!(&encoded[encoded.len() - 8..], &END_MARKER);
    &encoded[14..encoded.len() - 8]
}

#[test]
fn hundred_pixel_run_is_split() {
    let raster = Raster::from_pixels(100, 1, &[Pixel::START; 100]).unwrap();
    let encoded = encode(&raster).unwrap();

    // 62 + 38
    assert_eq!(opcodes(&encoded), &[0xc0 | 61, 0xc0 | 37]);
}

#[test]
fn diff_wins_over_luma() {
    let raster = Raster::from_pixels(1, 1, &[Pixel::new(1, 1, 1, 255)]).unwrap();
    let encoded = encode(&raster).unwrap();

    // dr = dg = db = 1, biased by 2
    assert_eq!(opcodes(&encoded), &[0x40 | 3 << 4 | 3 << 2 | 3]);
}

#[test]
fn luma_before_rgb() {
    let raster = Raster::from_pixels(1, 1, &[Pixel::new(10, 12, 5, 255)]).unwrap();
    let encoded = encode(&raster).unwrap();

    // dg = 12, dr - dg = -2, db - dg = -7
    assert_eq!(opcodes(&encoded), &[0x80 | (12 + 32), (6 << 4) | 1]);
}

#[test]
fn rgb_and_rgba() {
    let pixels = [Pixel::new(100, 0, 200, 255), Pixel::new(100, 0, 200, 3)];
    let raster = Raster::from_pixels(2, 1, &pixels).unwrap();
    let encoded = encode(&raster).unwrap();

    assert_eq!(
        opcodes(&encoded),
        &[0xfe, 100, 0, 200, 0xff, 100, 0, 200, 3]
    );
}

#[test]
fn index_for_revisited_color() {
    let a = Pixel::new(100, 0, 200, 255);
    let b = Pixel::new(0, 100, 50, 255);
    let raster = Raster::from_pixels(3, 1, &[a, b, a]).unwrap();
    let encoded = encode(&raster).unwrap();

    let ops = opcodes(&encoded);
    assert_eq!(ops[ops.len() - 1], a.cache_slot() as u8);
}

#[test]
fn two_by_two_example() {
    let red = Pixel::new(255, 0, 0, 255);
    let green = Pixel::new(0, 255, 0, 255);
    let blue = Pixel::new(0, 0, 255, 255);
    let raster = Raster::from_pixels(2, 2, &[red, red, green, blue]).unwrap();

    let encoded = encode(&raster).unwrap();

    assert_eq!(
        &encoded[..14],
        &[b'q', b'o', b'i', b'f', 0, 0, 0, 2, 0, 0, 0, 2, 4, 0]
    );
    // every transition is a one step wrap-around, so DIFF is picked each time
    assert_eq!(opcodes(&encoded), &[0x5a, 0xc0, 0x76, 0x6d]);
    assert_eq!(decode(&encoded).unwrap(), raster);
}

#[test]
fn two_by_two_with_full_rgba_opcodes_decodes() {
    let mut bytes = vec![b'q', b'o', b'i', b'f', 0, 0, 0, 2, 0, 0, 0, 2, 4, 0];
    bytes.extend_from_slice(&[0xff, 255, 0, 0, 255]);
    bytes.push(0xc0);
    bytes.extend_from_slice(&[0xff, 0, 255, 0, 255]);
    bytes.extend_from_slice(&[0xff, 0, 0, 255, 255]);
    bytes.extend_from_slice(&END_MARKER);

    let raster = decode(&bytes).unwrap();
    let expected = [
        Pixel::new(255, 0, 0, 255),
        Pixel::new(255, 0, 0, 255),
        Pixel::new(0, 255, 0, 255),
        Pixel::new(0, 0, 255, 255)
    ];
    assert!(raster.pixels().eq(expected));
}

#[test]
fn run_flushed_on_last_pixel() {
    let red = Pixel::new(255, 0, 0, 255);
    let raster = Raster::from_pixels(5, 1, &[red; 5]).unwrap();
    let encoded = encode(&raster).unwrap();

    assert_eq!(opcodes(&encoded), &[0x5a, 0xc0 | 3]);
}
