#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() > 1 {
        // first byte picks the width, the rest are RGBA pixels
        let width = usize::from(data[0]).max(1);
        let pixels = &data[1..];
        let height = pixels.len() / 4 / width;

        if height == 0 {
            return;
        }
        let pixels = pixels[..width * height * 4].to_vec();
        let raster = qpv_qoi::Raster::from_rgba(width, height, pixels).unwrap();

        let encoded = qpv_qoi::encode(&raster).expect("Failed to encode a valid raster");
        let decoded = qpv_qoi::decode(&encoded).expect("Failed to decode encoded data");
        assert!(
            decoded == raster,
            "The decoded image doesn't match the original image!"
        );
    }
});
