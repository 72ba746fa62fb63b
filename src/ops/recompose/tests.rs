use super::*;
use crate::common::Error;

#[test]
fn test_neutral_chroma_yields_gray() {
    let luma = Plane::from_data(2, 2, vec![0.0, 0.25, 0.5, 1.0]).unwrap();
    let chroma = ChromaPlane::neutral(2, 2).unwrap();
    let mut output = RgbImage::new(2, 2).unwrap();
    Recompose.apply(&luma, &chroma, &mut output).unwrap();

    for y in 0..2 {
        for x in 0..2 {
            let [r, g, b] = output.rgb(x, y);
            let expected = luma.get(x, y);
            assert!((r - expected).abs() < 1e-6);
            assert!((g - expected).abs() < 1e-6);
            assert!((b - expected).abs() < 1e-6);
        }
    }
}

#[test]
fn test_known_conversion_vector() {
    // Y = 0.5, U = 0.75, V = 0.5 leaves R at the luma value, pushes blue
    // up by 1.772 * 0.25 and pulls green down by 0.344 * 0.25.
    let [r, g, b] = Recompose::recompose_pixel(0.5, 0.75, 0.5);
    assert!((r - 0.5).abs() < 1e-6);
    assert!((g - 0.414).abs() < 1e-3);
    assert!((b - 0.943).abs() < 1e-3);
}

#[test]
fn test_red_excursion_follows_v() {
    let [r, g, _] = Recompose::recompose_pixel(0.5, 0.5, 0.9);
    assert!((r - (0.5 + 1.402 * 0.4)).abs() < 1e-6);
    assert!(g < 0.5);
}

#[test]
fn test_out_of_range_components_not_clamped() {
    // Extreme chroma overshoots 1.0 in blue and undershoots 0.0 in red;
    // both excursions must survive to the output buffer.
    let luma = Plane::from_data(1, 1, vec![0.2]).unwrap();
    let chroma = ChromaPlane::from_data(1, 1, vec![1.0, 0.0]).unwrap();
    let mut output = RgbImage::new(1, 1).unwrap();
    Recompose.apply(&luma, &chroma, &mut output).unwrap();

    let [r, _, b] = output.rgb(0, 0);
    assert!(r < 0.0);
    assert!(b > 1.0);
}

#[test]
fn test_dimension_mismatch_rejected() {
    let luma = Plane::new(4, 4).unwrap();
    let chroma = ChromaPlane::neutral(4, 4).unwrap();
    let small_chroma = ChromaPlane::neutral(4, 2).unwrap();
    let mut output = RgbImage::new(4, 4).unwrap();
    let mut small_output = RgbImage::new(2, 4).unwrap();

    assert!(matches!(
        Recompose.apply(&luma, &chroma, &mut small_output),
        Err(Error::DimensionMismatch { .. })
    ));
    assert!(matches!(
        Recompose.apply(&luma, &small_chroma, &mut output),
        Err(Error::DimensionMismatch { .. })
    ));
}
