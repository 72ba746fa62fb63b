use super::*;

#[test]
fn test_output_strictly_inside_unit_interval() {
    let curve = Enhancement::default();
    assert!(curve.enhance_sample(0.0) > 0.0);
    assert!(curve.enhance_sample(1.0) < 1.0);

    // Extreme strength saturates toward 1.0 but never reaches it.
    let hot = Enhancement::new(500.0);
    assert!(hot.enhance_sample(1.0) < 1.0);
    assert!(hot.enhance_sample(0.9) < 1.0);
}

#[test]
fn test_monotonic_in_input() {
    let curve = Enhancement::default();
    let mut prev = 0.0f32;
    for i in 0..=1000 {
        let s = i as f32 / 1000.0;
        let out = curve.enhance_sample(s);
        assert!(
            out >= prev - 1e-6,
            "curve not monotonic at {}: {} < {}",
            s,
            out,
            prev
        );
        prev = out;
    }
}

#[test]
fn test_monotonic_in_strength() {
    for i in 0..=100 {
        let s = i as f32 / 100.0;
        let mut prev = 0.0f32;
        for strength in [0.25, 0.5, 1.0, 2.0, 4.0] {
            let out = Enhancement::new(strength).enhance_sample(s);
            assert!(
                out >= prev - 1e-6,
                "sample {} decreased when strength rose to {}",
                s,
                strength
            );
            prev = out;
        }
    }
}

#[test]
fn test_shadow_gain_band() {
    let curve = Enhancement::default();

    // Every deep-shadow sample gets a 2.5x to 4x lift at nominal strength.
    for i in 1..100 {
        let s = i as f32 / 1000.0;
        let gain = curve.enhance_sample(s) / s;
        assert!(
            (2.5..4.0).contains(&gain),
            "shadow gain out of band at {}: {}",
            s,
            gain
        );
    }
}

#[test]
fn test_typical_night_shadows_average_near_3x() {
    let curve = Enhancement::default();
    let inputs: Vec<f32> = (0..64).map(|i| 0.08 + (i % 4) as f32 * 0.01).collect();

    let mut ratio_sum = 0.0;
    for &s in &inputs {
        ratio_sum += curve.enhance_sample(s) / s;
    }
    let avg = ratio_sum / inputs.len() as f32;
    assert!((2.8..3.2).contains(&avg), "average shadow lift {}", avg);
}

#[test]
fn test_highlights_compressed_not_clipped() {
    let curve = Enhancement::default();
    // Bright samples gain less, relatively, than shadows.
    let shadow_gain = curve.enhance_sample(0.1) / 0.1;
    let highlight_gain = curve.enhance_sample(0.9) / 0.9;
    assert!(highlight_gain < shadow_gain);
    assert!(highlight_gain > 1.0);
}

#[test]
fn test_apply_in_place_matches_scalar() {
    let curve = Enhancement::new(1.3);
    let data: Vec<f32> = (0..257).map(|i| i as f32 / 256.0).collect();
    let mut plane = Plane::from_data(257, 1, data.clone()).unwrap();
    curve.apply_in_place(&mut plane).unwrap();

    for (out, s) in plane.samples().iter().zip(data.iter()) {
        assert_eq!(*out, curve.enhance_sample(*s));
    }
}

#[test]
fn test_invalid_strength_rejected() {
    let mut plane = Plane::new(2, 2).unwrap();
    for strength in [0.0, -1.0, f32::NAN, f32::INFINITY] {
        let result = Enhancement::new(strength).apply_in_place(&mut plane);
        assert!(matches!(
            result,
            Err(Error::InvalidParameter {
                name: "strength",
                ..
            })
        ));
    }
}

#[test]
fn test_stage_seam_matches_in_place() {
    let curve = Enhancement::default();
    let input = Plane::from_data(2, 2, vec![0.1, 0.3, 0.6, 0.9]).unwrap();

    let mut in_place = Plane::new(2, 2).unwrap();
    in_place.copy_from(&input);
    curve.apply_in_place(&mut in_place).unwrap();

    let mut via_stage = Plane::new(2, 2).unwrap();
    let stage: &dyn Stage = &curve;
    stage.run(&input, &mut via_stage).unwrap();

    assert_eq!(in_place.samples(), via_stage.samples());
    assert_eq!(stage.name(), "enhance");
}
