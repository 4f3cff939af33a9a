//! Tests for color conversion functions

use super::*;

#[test]
fn test_rgb_lab_roundtrip() {
    let test_cases = [
        (1.0, 0.0, 0.0), // Red
        (0.0, 1.0, 0.0), // Green
        (0.0, 0.0, 1.0), // Blue
        (1.0, 1.0, 1.0), // White
        (0.0, 0.0, 0.0), // Black
        (0.5, 0.5, 0.5), // Gray
        (1.0, 0.5, 0.0), // Orange
        (0.5, 0.0, 0.5), // Purple
    ];

    for (r, g, b) in test_cases {
        let lab = rgb_to_lab(r, g, b);
        let (r2, g2, b2) = lab_to_rgb(lab);

        assert!(
            (r - r2).abs() < 1e-3,
            "R mismatch for ({}, {}, {}): {} vs {}",
            r,
            g,
            b,
            r,
            r2
        );
        assert!(
            (g - g2).abs() < 1e-3,
            "G mismatch for ({}, {}, {}): {} vs {}",
            r,
            g,
            b,
            g,
            g2
        );
        assert!(
            (b - b2).abs() < 1e-3,
            "B mismatch for ({}, {}, {}): {} vs {}",
            r,
            g,
            b,
            b,
            b2
        );
    }
}

#[test]
fn test_white_has_max_lightness() {
    let lab = rgb_to_lab(1.0, 1.0, 1.0);
    assert!(
        (lab.l - 100.0).abs() < 0.1,
        "White should have L ~= 100, got {}",
        lab.l
    );
    assert!(lab.a.abs() < 0.5, "White should be neutral, a = {}", lab.a);
    assert!(lab.b.abs() < 0.5, "White should be neutral, b = {}", lab.b);
}

#[test]
fn test_black_has_zero_lightness() {
    let lab = rgb_to_lab(0.0, 0.0, 0.0);
    assert!(
        lab.l.abs() < 0.1,
        "Black should have L ~= 0, got {}",
        lab.l
    );
}

#[test]
fn test_gray_is_neutral() {
    // Any gray should land on the neutral axis (a = b = 0)
    for &v in &[0.1, 0.25, 0.5, 0.75, 0.9] {
        let lab = rgb_to_lab(v, v, v);
        assert!(
            lab.a.abs() < 0.5 && lab.b.abs() < 0.5,
            "Gray {} should be neutral, got a={} b={}",
            v,
            lab.a,
            lab.b
        );
    }
}

#[test]
fn test_lightness_is_monotonic_in_gray() {
    let mut prev = -1.0;
    for i in 0..=20 {
        let v = i as f32 / 20.0;
        let lab = rgb_to_lab(v, v, v);
        assert!(
            lab.l > prev,
            "L should increase with gray level: L({}) = {} <= {}",
            v,
            lab.l,
            prev
        );
        prev = lab.l;
    }
}

#[test]
fn test_planes_roundtrip() {
    let data = vec![
        0.2, 0.4, 0.6, //
        0.9, 0.1, 0.3, //
        0.5, 0.5, 0.5, //
        0.0, 1.0, 0.0, //
    ];

    let planes = rgb_to_lab_planes(&data);
    assert_eq!(planes.l.len(), 4);
    assert_eq!(planes.a.len(), 4);
    assert_eq!(planes.b.len(), 4);

    let back = lab_planes_to_rgb(&planes);
    assert_eq!(back.len(), data.len());
    for (i, (&orig, &round)) in data.iter().zip(back.iter()).enumerate() {
        assert!(
            (orig - round).abs() < 1e-3,
            "Roundtrip mismatch at {}: {} vs {}",
            i,
            orig,
            round
        );
    }
}

#[test]
fn test_merge_clamps_out_of_gamut() {
    // A saturated LAB value far outside the sRGB gamut must still
    // produce in-range RGB output.
    let planes = LabPlanes {
        l: vec![50.0],
        a: vec![120.0],
        b: vec![-120.0],
    };
    let rgb = lab_planes_to_rgb(&planes);
    for &v in &rgb {
        assert!((0.0..=1.0).contains(&v), "Out of range value: {}", v);
    }
}
