use tonecurve_imgproc::curve::{apply_curve, apply_curve_rgba};
use tonecurve_imgproc::{Image, ImageSize};
use tonecurve_interp::Lagrange;

/// Build the curve the way an editor does: endpoints at construction, the
/// intermediate points as flagged triples where 0/1 mark the endpoints
/// already present.
fn editor_curve() -> Lagrange<f32> {
    let mut curve = Lagrange::new(0.0f32, 0.0, 255.0, 255.0).unwrap();
    curve
        .add_multi_points(&[
            [0.0, 0.0, 0.0],
            [2.0, 128.0, 160.0],
            [1.0, 255.0, 255.0],
        ])
        .unwrap();
    assert_eq!(curve.len(), 3);
    curve
}

#[test]
fn test_grayscale_pipeline() {
    let size = ImageSize {
        width: 4,
        height: 2,
    };
    let src = Image::<u8, 1>::new(size, vec![0, 32, 64, 96, 128, 160, 192, 255]).unwrap();
    let mut dst = Image::<u8, 1>::from_size_val(size, 0).unwrap();

    apply_curve(&src, &mut dst, &editor_curve()).unwrap();

    // endpoints and the control point map exactly, the rest monotonically up
    assert_eq!(dst.as_slice()[0], 0);
    assert_eq!(dst.as_slice()[4], 160);
    assert_eq!(dst.as_slice()[7], 255);
    for (s, d) in src.as_slice().iter().zip(dst.as_slice()) {
        assert!(d >= s, "brightening curve lowered {s} to {d}");
    }
}

#[test]
fn test_rgba_pipeline_touches_color_not_alpha() {
    let size = ImageSize {
        width: 2,
        height: 2,
    };
    #[rustfmt::skip]
    let src = Image::<u8, 4>::new(size, vec![
        0, 64, 128, 255,
        10, 20, 30, 128,
        128, 128, 128, 0,
        255, 255, 255, 7,
    ])
    .unwrap();
    let mut dst = Image::<u8, 4>::from_size_val(size, 0).unwrap();

    apply_curve_rgba(&src, &mut dst, &editor_curve()).unwrap();

    let alpha_src: Vec<u8> = src.as_slice().iter().skip(3).step_by(4).copied().collect();
    let alpha_dst: Vec<u8> = dst.as_slice().iter().skip(3).step_by(4).copied().collect();
    assert_eq!(alpha_src, alpha_dst);

    // color channels follow the curve: node values map exactly
    assert_eq!(dst.as_slice()[0], 0);
    assert_eq!(dst.as_slice()[2], 160);
    assert_eq!(dst.as_slice()[12], 255);
}

#[test]
fn test_amending_a_point_changes_the_render() {
    let size = ImageSize {
        width: 1,
        height: 1,
    };
    let src = Image::<u8, 1>::new(size, vec![64]).unwrap();
    let mut first = Image::<u8, 1>::from_size_val(size, 0).unwrap();
    let mut second = Image::<u8, 1>::from_size_val(size, 0).unwrap();

    let mut curve = editor_curve();
    apply_curve(&src, &mut first, &curve).unwrap();

    // drag the midpoint down and re-render
    curve.change_point(2, 128.0, 96.0).unwrap();
    apply_curve(&src, &mut second, &curve).unwrap();

    assert!(second.as_slice()[0] < first.as_slice()[0]);
}
