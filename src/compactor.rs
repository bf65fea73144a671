// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Cut a seam out of an image.
//!
//! Removal never touches its input.  The seam is checked first, and
//! only then is a new buffer, one row or column smaller, allocated
//! and filled with every pixel that is not on the seam.

use crate::error::{CarveError, Dimension, Result};
use image::{GenericImageView, ImageBuffer, Pixel, Primitive};

// The checks run in a fixed order and the first failure wins.
// `reduced` is the dimension losing a pixel, `kept` the one the seam
// runs along.
fn validate_seam(seam: &[u32], dimension: Dimension, reduced: u32, kept: u32) -> Result<()> {
    if seam.is_empty() {
        return Err(CarveError::MissingSeam);
    }
    if reduced <= 1 {
        return Err(CarveError::DegenerateDimension { dimension });
    }
    if seam.len() != kept as usize {
        return Err(CarveError::SeamLength {
            expected: kept as usize,
            actual: seam.len(),
        });
    }
    if let Some(index) = seam
        .windows(2)
        .position(|pair| pair[0].max(pair[1]) - pair[0].min(pair[1]) > 1)
    {
        return Err(CarveError::DisjointSeam { index });
    }
    if let Some((index, &value)) = seam.iter().enumerate().find(|&(_, &v)| v >= reduced) {
        return Err(CarveError::SeamOutOfBounds {
            index,
            value,
            limit: reduced,
        });
    }
    Ok(())
}

/// Remove a vertical seam (one column index per row), returning an
/// image one pixel narrower.  Every row keeps its remaining pixels in
/// their original left-to-right order.
pub fn remove_vertical_seam<I, P, S>(image: &I, seam: &[u32]) -> Result<ImageBuffer<P, Vec<S>>>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let (width, height) = image.dimensions();
    validate_seam(seam, Dimension::Width, width, height)?;

    let mut imgbuf = ImageBuffer::new(width - 1, height);
    for y in 0..height {
        let cut = seam[y as usize];
        let mut to = 0;
        for x in (0..width).filter(|&x| x != cut) {
            imgbuf.put_pixel(to, y, image.get_pixel(x, y));
            to += 1;
        }
    }
    Ok(imgbuf)
}

/// Remove a horizontal seam (one row index per column), returning an
/// image one pixel shorter.  Every column keeps its remaining pixels
/// in their original top-to-bottom order.
pub fn remove_horizontal_seam<I, P, S>(image: &I, seam: &[u32]) -> Result<ImageBuffer<P, Vec<S>>>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let (width, height) = image.dimensions();
    validate_seam(seam, Dimension::Height, height, width)?;

    let mut imgbuf = ImageBuffer::new(width, height - 1);
    for x in 0..width {
        let cut = seam[x as usize];
        let mut to = 0;
        for y in (0..height).filter(|&y| y != cut) {
            imgbuf.put_pixel(x, to, image.get_pixel(x, y));
            to += 1;
        }
    }
    Ok(imgbuf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    // Every pixel records where it started: red is x, green is y.
    fn labelled(width: u32, height: u32) -> RgbImage {
        ImageBuffer::from_fn(width, height, |x, y| Rgb([x as u8, y as u8, 0]))
    }

    fn origins(image: &RgbImage) -> Vec<Vec<(u8, u8)>> {
        (0..image.height())
            .map(|y| {
                (0..image.width())
                    .map(|x| {
                        let p = image.get_pixel(x, y);
                        (p[0], p[1])
                    })
                    .collect()
            })
            .collect()
    }

    #[test]
    fn straight_vertical_seam() {
        let carved = remove_vertical_seam(&labelled(3, 3), &[1, 1, 1]).unwrap();
        assert_eq!(carved.dimensions(), (2, 3));
        assert_eq!(
            origins(&carved),
            vec![
                vec![(0, 0), (2, 0)],
                vec![(0, 1), (2, 1)],
                vec![(0, 2), (2, 2)],
            ]
        );
    }

    #[test]
    fn diagonal_vertical_seam() {
        let carved = remove_vertical_seam(&labelled(3, 3), &[0, 1, 2]).unwrap();
        assert_eq!(
            origins(&carved),
            vec![
                vec![(1, 0), (2, 0)],
                vec![(0, 1), (2, 1)],
                vec![(0, 2), (1, 2)],
            ]
        );
    }

    #[test]
    fn wandering_horizontal_seam() {
        let carved = remove_horizontal_seam(&labelled(4, 3), &[2, 1, 0, 0]).unwrap();
        assert_eq!(carved.dimensions(), (4, 2));
        assert_eq!(
            origins(&carved),
            vec![
                vec![(0, 0), (1, 0), (2, 1), (3, 1)],
                vec![(0, 1), (1, 2), (2, 2), (3, 2)],
            ]
        );
    }

    #[test]
    fn removal_is_deterministic() {
        let image = labelled(5, 4);
        let seam = [3, 2, 2, 1, 0];
        assert_eq!(
            remove_horizontal_seam(&image, &seam).unwrap(),
            remove_horizontal_seam(&image, &seam).unwrap()
        );
    }

    #[test]
    fn missing_seam_is_checked_first() {
        let narrow = labelled(1, 3);
        assert_eq!(
            remove_vertical_seam(&narrow, &[]),
            Err(CarveError::MissingSeam)
        );
    }

    #[test]
    fn degenerate_dimensions_are_rejected() {
        assert_eq!(
            remove_vertical_seam(&labelled(1, 3), &[0, 0, 0]),
            Err(CarveError::DegenerateDimension {
                dimension: Dimension::Width
            })
        );
        assert_eq!(
            remove_horizontal_seam(&labelled(3, 1), &[0, 0, 0]),
            Err(CarveError::DegenerateDimension {
                dimension: Dimension::Height
            })
        );
    }

    #[test]
    fn wrong_length_is_rejected() {
        assert_eq!(
            remove_vertical_seam(&labelled(3, 3), &[1, 1]),
            Err(CarveError::SeamLength {
                expected: 3,
                actual: 2
            })
        );
        assert_eq!(
            remove_horizontal_seam(&labelled(3, 3), &[1, 1, 1, 1]),
            Err(CarveError::SeamLength {
                expected: 3,
                actual: 4
            })
        );
    }

    #[test]
    fn disjoint_seams_are_rejected() {
        assert_eq!(
            remove_vertical_seam(&labelled(4, 4), &[0, 1, 3, 3]),
            Err(CarveError::DisjointSeam { index: 1 })
        );
        assert_eq!(
            remove_horizontal_seam(&labelled(4, 4), &[3, 1, 1, 1]),
            Err(CarveError::DisjointSeam { index: 0 })
        );
    }

    // Left unchecked, an entry past the edge would skip no pixel and
    // overrun the smaller buffer.  It is rejected instead.
    #[test]
    fn entries_past_the_edge_are_rejected() {
        assert_eq!(
            remove_vertical_seam(&labelled(3, 3), &[2, 3, 3]),
            Err(CarveError::SeamOutOfBounds {
                index: 1,
                value: 3,
                limit: 3
            })
        );
    }
}
