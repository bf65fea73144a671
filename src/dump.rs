// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Render an energy map as a greyscale image, brightest where the
//! energy is highest.  Useful for seeing what the carver will avoid.

use crate::twodmap::TwoDimensionalMap;
use image::{GrayImage, ImageBuffer, Luma};

/// Scale the energies linearly so the largest becomes 255.  A map
/// with no energy anywhere renders black.
pub fn energy_to_image(energy: &TwoDimensionalMap<u32>) -> GrayImage {
    let factor = u64::from(energy.values().max().cloned().unwrap_or(0).max(1));
    ImageBuffer::from_fn(energy.width(), energy.height(), |x, y| {
        let scaled = u64::from(energy[(x, y)]) * 255 / factor;
        Luma([scaled as u8])
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brightest_is_highest_energy() {
        let energy = TwoDimensionalMap::from_raw(3, 1, vec![0, 50, 100]).unwrap();
        let image = energy_to_image(&energy);
        assert_eq!(image.dimensions(), (3, 1));
        assert_eq!(image.into_raw(), vec![0, 127, 255]);
    }

    #[test]
    fn no_energy_is_black() {
        let energy: TwoDimensionalMap<u32> = TwoDimensionalMap::new(2, 2);
        assert!(energy_to_image(&energy).pixels().all(|p| p[0] == 0));
    }
}
