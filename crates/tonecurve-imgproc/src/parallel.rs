use rayon::prelude::*;

use crate::image::Image;

/// Apply a function to each pixel in the image in parallel.
///
/// The closure receives the source pixel as a `CHANNELS`-sized slice and the
/// destination pixel as a mutable slice; rows are distributed over the rayon
/// thread pool.
pub fn par_iter_rows<T, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<T, C>,
    f: impl Fn(&[T], &mut [T]) + Send + Sync,
) where
    T: Clone + Send + Sync,
{
    // a zero-width image has no rows to chunk, and chunk size 0 panics
    let row_len = C * src.cols();
    if row_len == 0 {
        return;
    }
    src.as_slice()
        .par_chunks_exact(row_len)
        .zip(dst.as_slice_mut().par_chunks_exact_mut(row_len))
        .for_each(|(src_chunk, dst_chunk)| {
            src_chunk
                .chunks_exact(C)
                .zip(dst_chunk.chunks_exact_mut(C))
                .for_each(|(src_pixel, dst_pixel)| {
                    f(src_pixel, dst_pixel);
                });
        });
}

/// Apply a function to each pixel channel value in the image in parallel.
pub fn par_iter_rows_val<T, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<T, C>,
    f: impl Fn(&T, &mut T) + Send + Sync,
) where
    T: Clone + Send + Sync,
{
    let row_len = C * src.cols();
    if row_len == 0 {
        return;
    }
    src.as_slice()
        .par_chunks_exact(row_len)
        .zip(dst.as_slice_mut().par_chunks_exact_mut(row_len))
        .for_each(|(src_chunk, dst_chunk)| {
            src_chunk
                .iter()
                .zip(dst_chunk.iter_mut())
                .for_each(|(src_val, dst_val)| {
                    f(src_val, dst_val);
                });
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ImageError;
    use crate::image::ImageSize;

    #[test]
    fn test_par_iter_rows_val() -> Result<(), ImageError> {
        let src = Image::<u8, 1>::new(
            ImageSize {
                width: 2,
                height: 2,
            },
            vec![1, 2, 3, 4],
        )?;
        let mut dst = Image::<u8, 1>::from_size_val(src.size(), 0)?;

        par_iter_rows_val(&src, &mut dst, |&s, d| *d = s * 2);
        assert_eq!(dst.as_slice(), &[2, 4, 6, 8]);
        Ok(())
    }

    #[test]
    fn test_par_iter_rows_pixel_slices() -> Result<(), ImageError> {
        let src = Image::<u8, 2>::new(
            ImageSize {
                width: 2,
                height: 1,
            },
            vec![1, 10, 2, 20],
        )?;
        let mut dst = Image::<u8, 2>::from_size_val(src.size(), 0)?;

        // swap the two channels of every pixel
        par_iter_rows(&src, &mut dst, |s, d| {
            d[0] = s[1];
            d[1] = s[0];
        });
        assert_eq!(dst.as_slice(), &[10, 1, 20, 2]);
        Ok(())
    }
}
