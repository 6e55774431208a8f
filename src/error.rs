//! This module defines general error types used throughout the crate.

use crate::cube333::Face;
use thiserror::Error;

/// Error type for a structurally invalid cube net.
///
/// Raised only while parsing net text; every variant is fatal to the parse.
/// Move application never errors, so this is the crate's only error kind.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NetParseError {
    /// The input did not contain exactly 9 lines.
    #[error("net must have exactly 9 lines, found {0}")]
    WrongLineCount(usize),
    /// A line was wider than the 12-column net grid.
    #[error("line {line} is {len} characters long, at most 12 are allowed")]
    LineTooLong {
        /// 1-based line number of the offending line.
        line: usize,
        /// Length of the offending line in characters.
        len: usize,
    },
    /// A character in the 9x12 region was neither a space nor a color symbol.
    #[error("invalid character {0:?} in net")]
    InvalidCharacter(char),
    /// A blank ended up inside one of the six face blocks. Blanks are only
    /// legal in the filler cells outside the cross shape.
    #[error("blank facelet at row {row}, column {col} of the {face:?} face")]
    BlankFacelet {
        /// Face whose block contains the blank.
        face: Face,
        /// Row of the blank within the face block.
        row: usize,
        /// Column of the blank within the face block.
        col: usize,
    },
}
