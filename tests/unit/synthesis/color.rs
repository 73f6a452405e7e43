//! Tests for RGB decoding, encoding and colour distance

use texweave::synthesis::Rgb;

#[test]
fn test_byte_decoding_is_unit_range() {
    let pixel = Rgb::from_bytes(0, 128, 255);
    assert!((pixel.r - 0.0).abs() < f32::EPSILON);
    assert!((pixel.g - 128.0 / 255.0).abs() < f32::EPSILON);
    assert!((pixel.b - 1.0).abs() < f32::EPSILON);
}

#[test]
fn test_byte_round_trip_within_quantisation() {
    for channel in [0u8, 1, 17, 128, 200, 254, 255] {
        let pixel = Rgb::from_bytes(channel, channel, channel);
        let [r, g, b] = pixel.to_bytes();
        assert!(r.abs_diff(channel) <= 1);
        assert!(g.abs_diff(channel) <= 1);
        assert!(b.abs_diff(channel) <= 1);
    }
}

#[test]
fn test_distance_is_zero_for_identical_pixels() {
    let pixel = Rgb::new(0.3, 0.6, 0.9);
    assert!(pixel.distance_squared(pixel).abs() < f32::EPSILON);
}

#[test]
fn test_distance_sums_squared_channel_differences() {
    let a = Rgb::new(1.0, 0.0, 0.0);
    let b = Rgb::new(0.0, 1.0, 0.0);
    assert!((a.distance_squared(b) - 2.0).abs() < 1e-6);
    assert!((a.distance_squared(b) - b.distance_squared(a)).abs() < f32::EPSILON);
}
