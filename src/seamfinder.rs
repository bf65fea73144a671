// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Find the seam with the least energy.
//!
//! The search runs right to left over the energy map.  Every cell of
//! the last column costs just its own energy; every cell of an earlier
//! column costs its own energy plus the cheapest of the three cells
//! it can step to in the next column (up, ahead, or down).  Each cell
//! remembers which step it took, so once the first column is filled
//! in, the cheapest cell there is the start of the cheapest seam, and
//! following the steps from it traces the rest.
//!
//! Vertical seams are the same search run over a [`Flipper`] view of
//! the energy map.

use crate::cq;
use crate::flipper::{Flipper, Lattice};
use crate::twodmap::TwoDimensionalMap;

/// This trait defines how we will return seams from an image.  A
/// horizontal seam holds one row index per column; a vertical seam
/// one column index per row.
pub trait SeamFinder {
    /// Request a horizontal seam, one row index for every column.
    fn find_horizontal_seam(&self) -> Vec<u32>;

    /// Request a vertical seam, one column index for every row.
    fn find_vertical_seam(&self) -> Vec<u32>;
}

/// Which neighbour in the next column a seam continues through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Up,
    Ahead,
    Down,
}

impl Default for Step {
    fn default() -> Self {
        Step::Ahead
    }
}

impl Step {
    pub fn offset(self) -> i32 {
        match self {
            Step::Up => -1,
            Step::Ahead => 0,
            Step::Down => 1,
        }
    }

    // Only ever applied to steps the search chose, which never lead
    // off the map.
    fn apply(self, index: u32) -> u32 {
        match self {
            Step::Up => index - 1,
            Step::Ahead => index,
            Step::Down => index + 1,
        }
    }
}

/// One cell of the search table: the cheapest total energy of a seam
/// from here to the far edge, and the first step of that seam.
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq)]
pub struct EnergyAndStep {
    pub energy: u64,
    pub step: Step,
}

// Given the totals up, ahead and down (None when that neighbour is off
// the map), pick a step.  Ties go to Up, then Ahead, then Down.
fn choose_step(up: Option<u64>, ahead: u64, down: Option<u64>) -> Step {
    let (a, b, c) = (up.unwrap_or(u64::MAX), ahead, down.unwrap_or(u64::MAX));
    if a <= b {
        cq!(a <= c, Step::Up, Step::Down)
    } else {
        cq!(b <= c, Step::Ahead, Step::Down)
    }
}

/// The filled-in search table for one direction.  Addresses are in
/// scan order: for a vertical search over a W x H map, the table is
/// H x W and `(x, y)` in it is `(y, x)` in the image.
#[derive(Debug, Clone)]
pub struct SeamTable {
    cells: TwoDimensionalMap<EnergyAndStep>,
}

impl SeamTable {
    /// Search for a seam running left to right.
    pub fn horizontal<L: Lattice<Cell = u32>>(energy: &L) -> Self {
        let (width, height) = energy.dimensions();
        let mut cells: TwoDimensionalMap<EnergyAndStep> = TwoDimensionalMap::new(width, height);
        if width == 0 || height == 0 {
            return SeamTable { cells };
        }

        let (last, maxheight) = (width - 1, height - 1);
        for y in 0..height {
            cells[(last, y)].energy = u64::from(energy.cell(last, y));
        }

        for x in (0..last).rev() {
            for y in 0..height {
                let step = choose_step(
                    cq!(y == 0, None, Some(cells[(x + 1, y - 1)].energy)),
                    cells[(x + 1, y)].energy,
                    cq!(y == maxheight, None, Some(cells[(x + 1, y + 1)].energy)),
                );
                let onward = cells[(x + 1, step.apply(y))].energy;
                cells[(x, y)] = EnergyAndStep {
                    energy: u64::from(energy.cell(x, y)) + onward,
                    step,
                };
            }
        }
        SeamTable { cells }
    }

    /// Search for a seam running top to bottom.
    pub fn vertical<L: Lattice<Cell = u32>>(energy: &L) -> Self {
        SeamTable::horizontal(&Flipper::new(energy))
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.cells.dimensions()
    }

    /// The cheapest total from `(x, y)` to the far edge.
    pub fn cumulative(&self, x: u32, y: u32) -> Option<u64> {
        self.cells.get(x, y).map(|cell| cell.energy)
    }

    /// The index in the first column where the cheapest seam starts.
    /// The lowest index wins a tie.
    pub fn origin(&self) -> Option<u32> {
        (0..self.cells.height()).min_by_key(|&y| self.cells[(0, y)].energy)
    }

    /// The total energy of the cheapest seam.
    pub fn total(&self) -> Option<u64> {
        self.origin().map(|y| self.cells[(0, y)].energy)
    }

    /// Follow the recorded steps from the origin across the table.
    pub fn seam(&self) -> Vec<u32> {
        let mut index = match self.origin() {
            Some(index) => index,
            None => return Vec::new(),
        };
        (0..self.cells.width())
            .map(|x| {
                let here = index;
                index = self.cells[(x, here)].step.apply(here);
                here
            })
            .collect()
    }
}

/// Given an energy map, return the list of y-coordinates that, when
/// mapped with the range (0..width), give the XY coordinates for each
/// pixel in the seam to be removed.
pub fn energy_to_horizontal_seam(energy: &TwoDimensionalMap<u32>) -> Vec<u32> {
    SeamTable::horizontal(energy).seam()
}

/// Given an energy map, return the list of x-coordinates that, when
/// mapped with the range (0..height), give the XY coordinates for each
/// pixel in the seam to be removed.
pub fn energy_to_vertical_seam(energy: &TwoDimensionalMap<u32>) -> Vec<u32> {
    SeamTable::vertical(energy).seam()
}
