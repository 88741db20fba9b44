use std::io;
use thiserror::Error;

/// Everything that can go wrong while turning a dump into a png. All of these are terminal - the
/// tool is a one-shot debugging aid, so a malformed dump aborts the whole run rather than
/// producing a half-painted (and misleading) image.
#[derive(Debug, Error)]
pub enum DumpError {
    #[error("An IO error occured while reading the dump: {0:?}")]
    IO(#[from] io::Error),

    #[error("###BEGIN line not found")]
    MissingBeginMarker,

    #[error("###END line not found")]
    MissingEndMarker,

    #[error("Data line {line} doesn't start with a #: {content:?}")]
    InvalidLinePrefix { line: usize, content: String },

    #[error("Data line {line} has an invalid coordinate {token:?}")]
    InvalidCoordinate { line: usize, token: String },

    #[error("Data line {line} has an invalid run descriptor {token:?}")]
    InvalidRunDescriptor { line: usize, token: String },

    #[error("Data line {line} paints pixel ({x}, {y}), which is outside the 480x320 canvas")]
    PixelOutOfBounds { line: usize, x: i32, y: i32 },

    #[error("Writing the png failed: {0}")]
    Image(#[from] image::ImageError),
}
