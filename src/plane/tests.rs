use super::*;

#[test]
fn test_plane_new_zero_filled() {
    let plane = Plane::new(4, 3).unwrap();
    assert_eq!(plane.dimensions(), (4, 3));
    assert_eq!(plane.len(), 12);
    assert!(plane.samples().iter().all(|&v| v == 0.0));
}

#[test]
fn test_plane_zero_dimensions_rejected() {
    assert!(matches!(
        Plane::new(0, 4),
        Err(Error::InvalidParameter { name: "width", .. })
    ));
    assert!(matches!(
        Plane::new(4, 0),
        Err(Error::InvalidParameter { name: "height", .. })
    ));
}

#[test]
fn test_plane_from_data_length_check() {
    assert!(Plane::from_data(2, 2, vec![0.0; 4]).is_ok());
    assert!(matches!(
        Plane::from_data(2, 2, vec![0.0; 5]),
        Err(Error::InvalidParameter {
            name: "data length",
            ..
        })
    ));
}

#[test]
fn test_plane_get_set_row_major() {
    let mut plane = Plane::new(3, 2).unwrap();
    plane.set(2, 1, 0.75);
    assert_eq!(plane.get(2, 1), 0.75);
    assert_eq!(plane.samples()[5], 0.75);
}

#[test]
fn test_plane_copy_from() {
    let src = Plane::from_data(2, 2, vec![0.1, 0.2, 0.3, 0.4]).unwrap();
    let mut dst = Plane::new(2, 2).unwrap();
    dst.copy_from(&src);
    assert_eq!(dst.samples(), src.samples());
}

#[test]
fn test_chroma_interleaved_access() {
    let chroma = ChromaPlane::from_data(2, 1, vec![0.1, 0.9, 0.3, 0.7]).unwrap();
    assert_eq!(chroma.uv(0, 0), (0.1, 0.9));
    assert_eq!(chroma.uv(1, 0), (0.3, 0.7));
}

#[test]
fn test_chroma_neutral_is_midpoint() {
    let chroma = ChromaPlane::neutral(3, 3).unwrap();
    assert!(chroma.samples().iter().all(|&v| v == 0.5));
    assert_eq!(chroma.samples().len(), 18);
}

#[test]
fn test_chroma_data_length_check() {
    assert!(matches!(
        ChromaPlane::from_data(2, 2, vec![0.5; 4]),
        Err(Error::InvalidParameter {
            name: "data length",
            ..
        })
    ));
}

#[test]
fn test_rgb_pixel_access() {
    let mut image = RgbImage::new(2, 2).unwrap();
    let i = 3 * 3; // pixel (1, 1)
    image.samples_mut()[i] = 1.5;
    image.samples_mut()[i + 1] = -0.25;
    image.samples_mut()[i + 2] = 0.5;
    // Out-of-range components survive untouched.
    assert_eq!(image.rgb(1, 1), [1.5, -0.25, 0.5]);
}
