// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seamcarver - the carving session
//!
//! A `SeamCarver` owns the image being carved.  Every removal builds
//! a brand-new, smaller image and replaces the old one with it; the
//! energy map and the seam search table are rebuilt from scratch for
//! every seam, since a removal changes the neighbours of every pixel
//! along the cut.

use crate::compactor;
use crate::energy::{calculate_energy, pixel_energy};
use crate::error::{CarveError, Result};
use crate::seamfinder::{SeamFinder, SeamTable};
use crate::twodmap::TwoDimensionalMap;
use image::RgbImage;

// This is silly and basically a reimplementation of `bool` and `not`,
// but it makes it much clearer in the code what I'm doing.  And I
// like that.

/// Which dimension to shrink.  Narrowing the image removes vertical
/// seams; shortening it removes horizontal ones.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Carve {
    Width,
    Height,
}

impl Carve {
    fn turn(self) -> Self {
        if self == Carve::Width {
            Carve::Height
        } else {
            Carve::Width
        }
    }
}

/// A struct for holding the image to be carved.
#[derive(Debug, Clone)]
pub struct SeamCarver {
    image: RgbImage,
}

impl SeamCarver {
    /// Creates a new SeamCarver with an image to be carved.  The image
    /// must have at least one pixel.
    pub fn new(image: RgbImage) -> Result<Self> {
        if image.width() == 0 || image.height() == 0 {
            return Err(CarveError::EmptyImage);
        }
        Ok(SeamCarver { image })
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// The image as it stands after every removal so far.
    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    pub fn into_image(self) -> RgbImage {
        self.image
    }

    /// The energy of a single pixel of the current image.
    pub fn energy(&self, x: u32, y: u32) -> Result<u32> {
        pixel_energy(&self.image, x, y)
    }

    /// The energy of every pixel of the current image.
    pub fn energy_matrix(&self) -> TwoDimensionalMap<u32> {
        calculate_energy(&self.image)
    }

    /// Remove a horizontal seam, one row index per column.  On error
    /// the current image is left as it was.
    pub fn remove_horizontal_seam(&mut self, seam: &[u32]) -> Result<()> {
        self.image = compactor::remove_horizontal_seam(&self.image, seam)?;
        debug!("removed horizontal seam, now {}x{}", self.width(), self.height());
        Ok(())
    }

    /// Remove a vertical seam, one column index per row.  On error the
    /// current image is left as it was.
    pub fn remove_vertical_seam(&mut self, seam: &[u32]) -> Result<()> {
        self.image = compactor::remove_vertical_seam(&self.image, seam)?;
        debug!("removed vertical seam, now {}x{}", self.width(), self.height());
        Ok(())
    }

    fn carve_once(&mut self, direction: Carve) -> Result<()> {
        let energy = self.energy_matrix();
        let table = match direction {
            Carve::Height => SeamTable::horizontal(&energy),
            Carve::Width => SeamTable::vertical(&energy),
        };
        trace!(
            "{:?} seam starts at {:?}, total energy {:?}",
            direction,
            table.origin(),
            table.total()
        );
        let seam = table.seam();
        match direction {
            Carve::Height => self.remove_horizontal_seam(&seam),
            Carve::Width => self.remove_vertical_seam(&seam),
        }
    }

    /// Find and remove `count` seams, one at a time, shrinking the
    /// given dimension by `count`.  If that dimension reaches 1 first
    /// the carve stops there with
    /// [`CarveError::DegenerateDimension`]; the seams already removed
    /// stay removed.
    pub fn carve(&mut self, direction: Carve, count: u32) -> Result<()> {
        let (width, height) = self.image.dimensions();
        for _ in 0..count {
            self.carve_once(direction)?;
        }
        info!(
            "carved {} {:?} seams: {}x{} -> {}x{}",
            count,
            direction,
            width,
            height,
            self.width(),
            self.height()
        );
        Ok(())
    }

    /// Carve down to a new width and height, alternating between
    /// narrowing and shortening while both still need to shrink.
    pub fn carve_to(&mut self, newwidth: u32, newheight: u32) -> Result<()> {
        let (width, height) = self.image.dimensions();
        if width < newwidth || height < newheight {
            return Err(CarveError::Upscale {
                width: newwidth,
                height: newheight,
            });
        }
        let mut direction = Carve::Width;
        while self.width() > newwidth && self.height() > newheight {
            self.carve_once(direction)?;
            direction = direction.turn();
        }
        while self.width() > newwidth {
            self.carve_once(Carve::Width)?;
        }
        while self.height() > newheight {
            self.carve_once(Carve::Height)?;
        }
        info!(
            "carved {}x{} -> {}x{}",
            width,
            height,
            self.width(),
            self.height()
        );
        Ok(())
    }
}

impl SeamFinder for SeamCarver {
    fn find_horizontal_seam(&self) -> Vec<u32> {
        SeamTable::horizontal(&self.energy_matrix()).seam()
    }

    fn find_vertical_seam(&self) -> Vec<u32> {
        SeamTable::vertical(&self.energy_matrix()).seam()
    }
}
