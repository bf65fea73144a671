// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Map dimensional flipper
//!
//! A read-only proxy over a two-dimensional map that swaps width for
//! height and every x for y.  A vertical seam through a map is a
//! horizontal seam through its flipped view, so the seam search only
//! has to be written once.

use crate::twodmap::TwoDimensionalMap;

/// Anything the seam search can read cells out of.
pub trait Lattice {
    type Cell: Copy;

    fn dimensions(&self) -> (u32, u32);

    /// The cell at `(x, y)`.  Callers stay inside `dimensions()`.
    fn cell(&self, x: u32, y: u32) -> Self::Cell;
}

impl<P: Default + Copy> Lattice for TwoDimensionalMap<P> {
    type Cell = P;

    fn dimensions(&self) -> (u32, u32) {
        TwoDimensionalMap::dimensions(self)
    }

    fn cell(&self, x: u32, y: u32) -> P {
        self[(x, y)]
    }
}

pub struct Flipper<'a, L: Lattice> {
    pub lattice: &'a L,
}

impl<'a, L: Lattice> Flipper<'a, L> {
    pub fn new(lattice: &'a L) -> Self {
        Flipper { lattice }
    }
}

impl<'a, L: Lattice> Lattice for Flipper<'a, L> {
    type Cell = L::Cell;

    fn dimensions(&self) -> (u32, u32) {
        let (x, y) = self.lattice.dimensions();
        (y, x)
    }

    fn cell(&self, x: u32, y: u32) -> L::Cell {
        self.lattice.cell(y, x)
    }
}
