use tonecurve_interp::Lagrange;

use crate::error::ImageError;
use crate::image::Image;
use crate::lut::CurveLut;
use crate::parallel;

/// Apply a tone curve to every channel of an image.
///
/// The curve is sampled into a 256-entry lookup table once, then every
/// channel value is remapped in parallel:
///
/// dst(x,y,c) = curve(src(x,y,c))
///
/// # Arguments
///
/// * `src` - The input image with 8-bit channel data.
/// * `dst` - The output image to store the result.
/// * `curve` - The interpolated curve, defined over the `0.0..=255.0` domain.
///
/// # Errors
///
/// Returns an error if the sizes of `src` and `dst` do not match.
///
/// # Example
///
/// ```
/// use tonecurve_imgproc::{Image, ImageSize};
/// use tonecurve_imgproc::curve::apply_curve;
/// use tonecurve_interp::Lagrange;
///
/// let src = Image::<u8, 1>::new(
///   ImageSize {
///     width: 2,
///     height: 2,
///   },
///   vec![0, 64, 128, 255],
/// ).unwrap();
/// let mut dst = Image::<u8, 1>::from_size_val(src.size(), 0).unwrap();
///
/// let mut curve = Lagrange::new(0.0f32, 0.0, 255.0, 255.0).unwrap();
/// curve.add_point(128.0, 160.0).unwrap();
///
/// apply_curve(&src, &mut dst, &curve).unwrap();
/// assert_eq!(dst.as_slice(), &[0, 88, 160, 255]);
/// ```
pub fn apply_curve<const C: usize>(
    src: &Image<u8, C>,
    dst: &mut Image<u8, C>,
    curve: &Lagrange<f32>,
) -> Result<(), ImageError> {
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.width(),
            src.height(),
            dst.width(),
            dst.height(),
        ));
    }

    log::debug!(
        "applying a {}-point tone curve to a {} image",
        curve.len(),
        src.size()
    );

    let lut = CurveLut::from_curve(curve);
    parallel::par_iter_rows_val(src, dst, |&src_val, dst_val| {
        *dst_val = lut.map(src_val);
    });

    Ok(())
}

/// Apply a tone curve to the color channels of an RGBA image.
///
/// Same remapping as [`apply_curve`], except the alpha channel is copied
/// through untouched.
///
/// # Errors
///
/// Returns an error if the sizes of `src` and `dst` do not match.
pub fn apply_curve_rgba(
    src: &Image<u8, 4>,
    dst: &mut Image<u8, 4>,
    curve: &Lagrange<f32>,
) -> Result<(), ImageError> {
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.width(),
            src.height(),
            dst.width(),
            dst.height(),
        ));
    }

    let lut = CurveLut::from_curve(curve);
    parallel::par_iter_rows(src, dst, |src_pixel, dst_pixel| {
        for c in 0..3 {
            dst_pixel[c] = lut.map(src_pixel[c]);
        }
        dst_pixel[3] = src_pixel[3];
    });

    Ok(())
}
