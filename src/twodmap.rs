// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::ops::{Index, IndexMut};

/// A dense, addressable two-dimensional field.  It holds whatever the
/// current stage of carving needs per pixel: a plain u32 for the
/// energy map, or a running total plus the step taken, for the seam
/// search table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TwoDimensionalMap<P: Default + Copy> {
    width: u32,
    height: u32,
    cells: Vec<P>,
}

impl<P: Default + Copy> TwoDimensionalMap<P> {
    /// A new map with every cell set to the content type's default.
    pub fn new(width: u32, height: u32) -> Self {
        TwoDimensionalMap {
            width,
            height,
            cells: vec![P::default(); width as usize * height as usize],
        }
    }

    /// Wrap an existing row-major buffer.  Returns `None` if the
    /// buffer is the wrong size for the dimensions.
    pub fn from_raw(width: u32, height: u32, cells: Vec<P>) -> Option<Self> {
        if cells.len() != width as usize * height as usize {
            return None;
        }
        Some(TwoDimensionalMap {
            width,
            height,
            cells,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    // Absolutely, the number one name of this game is keep the index
    // math in a singular location and never, ever mess with it.  Same
    // layout as image::ImageBuffer.
    fn get_index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    /// The value at a single address, if that address is on the map.
    pub fn get(&self, x: u32, y: u32) -> Option<P> {
        if x < self.width && y < self.height {
            Some(self.cells[self.get_index(x, y)])
        } else {
            None
        }
    }

    /// Every cell, row by row.
    pub fn values(&self) -> impl Iterator<Item = &P> {
        self.cells.iter()
    }
}

impl<P: Default + Copy> Index<(u32, u32)> for TwoDimensionalMap<P> {
    type Output = P;

    fn index(&self, (x, y): (u32, u32)) -> &P {
        let index = self.get_index(x, y);
        &self.cells[index]
    }
}

impl<P: Default + Copy> IndexMut<(u32, u32)> for TwoDimensionalMap<P> {
    fn index_mut(&mut self, (x, y): (u32, u32)) -> &mut P {
        let index = self.get_index(x, y);
        &mut self.cells[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn addressing_is_row_major() {
        let map = TwoDimensionalMap::from_raw(3, 2, vec![0u32, 1, 2, 3, 4, 5]).unwrap();
        assert_eq!(map[(0, 0)], 0);
        assert_eq!(map[(2, 0)], 2);
        assert_eq!(map[(0, 1)], 3);
        assert_eq!(map[(2, 1)], 5);
    }

    #[test]
    fn from_raw_rejects_wrong_size() {
        assert!(TwoDimensionalMap::from_raw(3, 2, vec![0u32; 5]).is_none());
    }

    #[test]
    fn get_is_bounds_checked() {
        let mut map: TwoDimensionalMap<u32> = TwoDimensionalMap::new(2, 2);
        map[(1, 1)] = 7;
        assert_eq!(map.get(1, 1), Some(7));
        assert_eq!(map.get(2, 1), None);
        assert_eq!(map.get(1, 2), None);
    }
}
