// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Everything that can go wrong while carving.
//!
//! None of these are runtime conditions to be recovered from; they
//! are precondition violations by the caller.  A seam produced by the
//! seam finder for the current image never triggers any of them.

/// The direction an image is being shrunk in, for error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    Width,
    Height,
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Dimension::Width => write!(f, "width"),
            Dimension::Height => write!(f, "height"),
        }
    }
}

#[derive(Debug, Fail, PartialEq, Eq)]
pub enum CarveError {
    /// A pixel address outside the image.
    #[fail(
        display = "pixel ({}, {}) is outside a {}x{} image",
        x, y, width, height
    )]
    OutOfRange {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// No seam was supplied.  Slices cannot be null, so an empty seam
    /// stands in for the absent one.
    #[fail(display = "no seam was supplied")]
    MissingSeam,

    #[fail(display = "cannot remove a seam: {} is already 1", dimension)]
    DegenerateDimension { dimension: Dimension },

    #[fail(
        display = "seam has {} entries, but the image needs {}",
        actual, expected
    )]
    SeamLength { expected: usize, actual: usize },

    /// Entries `index` and `index + 1` are more than one pixel apart.
    #[fail(display = "seam is broken after entry {}", index)]
    DisjointSeam { index: usize },

    #[fail(
        display = "seam entry {} is {}, past the image edge at {}",
        index, value, limit
    )]
    SeamOutOfBounds { index: usize, value: u32, limit: u32 },

    #[fail(display = "cannot carve an image with no pixels")]
    EmptyImage,

    /// Carving only ever shrinks.
    #[fail(display = "seam carving cannot grow an image to {}x{}", width, height)]
    Upscale { width: u32, height: u32 },
}

pub type Result<T> = std::result::Result<T, CarveError>;
