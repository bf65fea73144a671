// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Calculate the energy of an image
//!
//! The energy of a pixel is the dual-gradient of its four neighbours:
//! the squared RGB distance between the pixels above and below it,
//! plus the squared RGB distance between the pixels to its left and
//! right.  The pixel's own colour never enters into it.
//!
//! At the borders the neighbours wrap around to the opposite edge of
//! the image rather than being clamped.  The pixel to the left of
//! column 0 is the one in the last column, and so on.

use crate::cq;
use crate::error::{CarveError, Result};
use crate::twodmap::TwoDimensionalMap;
use image::{GenericImageView, Pixel};
use itertools::iproduct;

// Takes the channels (R,G,B) from two pixels and maps the difference
// between each channel, squares it, and then sums them all up.  This
// is the rusty expression of:
//
//        |Δx|² = (Δrx)²+(Δgx)²+(Δbx)²
//        |Δy|² = (Δry)²+(Δgy)²+(Δby)²
//       e(x,y) = |Δx|²+|Δy|²
//
// The largest possible result is 3 * 255², so u32 is plenty.
#[inline]
fn energy_of_pair<P>(p1: &P, p2: &P) -> u32
where
    P: Pixel<Subpixel = u8>,
{
    p1.to_rgb()
        .channels()
        .iter()
        .zip(p2.to_rgb().channels().iter())
        .map(|(c1, c2)| {
            let d = u32::from(cq!(c1 > c2, c1 - c2, c2 - c1));
            d * d
        })
        .sum()
}

// Callers guarantee (x, y) is inside the image.
fn energy_at<I, P>(image: &I, x: u32, y: u32) -> u32
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = u8>,
{
    let (width, height) = image.dimensions();
    let (mw, mh) = (width - 1, height - 1);

    let (top, bottom, right, left) = (
        image.get_pixel(x, cq!(y >= mh, 0, y + 1)),
        image.get_pixel(x, cq!(y == 0, mh, y - 1)),
        image.get_pixel(cq!(x >= mw, 0, x + 1), y),
        image.get_pixel(cq!(x == 0, mw, x - 1), y),
    );
    energy_of_pair(&right, &left) + energy_of_pair(&top, &bottom)
}

/// The dual-gradient energy of the pixel at `(x, y)`.
///
/// Fails with [`CarveError::OutOfRange`] if the address is not inside
/// the image.
pub fn pixel_energy<I, P>(image: &I, x: u32, y: u32) -> Result<u32>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = u8>,
{
    let (width, height) = image.dimensions();
    if x >= width || y >= height {
        return Err(CarveError::OutOfRange {
            x,
            y,
            width,
            height,
        });
    }
    Ok(energy_at(image, x, y))
}

/// Compute the energy of every pixel in an image.  The map is a pure
/// function of the image and has the image's dimensions.
pub fn calculate_energy<I, P>(image: &I) -> TwoDimensionalMap<u32>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = u8>,
{
    let (width, height) = image.dimensions();
    let mut emap = TwoDimensionalMap::new(width, height);
    for (y, x) in iproduct!(0..height, 0..width) {
        emap[(x, y)] = energy_at(image, x, y);
    }
    emap
}
