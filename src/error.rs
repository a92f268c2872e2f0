//! Errors raised while stitching a run.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, StitchError>;

#[derive(Error, Debug)]
pub enum StitchError{
    /// The input directory could not be listed.
    #[error("could not read input directory {}: {source}", path.display())]
    ReadDir{
        path: PathBuf,
        source: std::io::Error,
    },

    /// An input file could not be opened or decoded as an image.
    #[error("could not decode {}: {source}", path.display())]
    Decode{
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("could not save {}: {source}", path.display())]
    Save{
        path: PathBuf,
        source: image::ImageError,
    },

    /// A group canvas would have a zero-sized half-size copy.
    #[error("canvas {width}x{height} is too small for a half-size copy")]
    EmptyHalfSize{
        width: u32,
        height: u32,
    },

    /// Chop ratios leave nothing of the reference image.
    #[error("cell size {width}x{height} is empty, chop ratios are too large for the reference image")]
    EmptyCell{
        width: u32,
        height: u32,
    },
}
