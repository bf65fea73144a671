// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Dual-gradient seam carving for RGB images.
//!
//! A seam carver shrinks an image one pixel at a time by finding the
//! connected row or column of pixels with the least total "energy"
//! and cutting it out.  The pieces, leaf first:
//!
//! * [`energy`]: the dual-gradient energy of a pixel and of an image
//! * [`seamfinder`]: the dynamic-programming search for a minimal seam
//! * [`compactor`]: validating a seam and copying out everything else
//! * [`seamcarver`]: a session that owns the image between removals

#[macro_use]
extern crate failure;
#[macro_use]
extern crate log;

// The border rules of both the energy function and the seam search
// are small tables of "if at the edge, this, otherwise that."  Rust's
// ifs are expressions already, but `cargo fmt` spreads each one over
// five lines, and the tables read better on one.
#[macro_export]
macro_rules! cq {
    ($condition: expr, $_true: expr, $_false: expr) => {
        if $condition {
            $_true
        } else {
            $_false
        }
    };
}

pub mod compactor;
pub mod dump;
pub mod energy;
pub mod error;
pub mod flipper;
pub mod seamcarver;
pub mod seamfinder;
pub mod twodmap;

pub use compactor::{remove_horizontal_seam, remove_vertical_seam};
pub use dump::energy_to_image;
pub use energy::{calculate_energy, pixel_energy};
pub use error::{CarveError, Dimension, Result};
pub use seamcarver::{Carve, SeamCarver};
pub use seamfinder::{energy_to_horizontal_seam, energy_to_vertical_seam, SeamFinder, SeamTable};
pub use twodmap::TwoDimensionalMap;
