//! Move application for the facelet cube. Each of the six moves turns its
//! face clockwise and cycles one edge strip from each of the four adjacent
//! faces; sequences arrive either as [`Turn`] values or as bare symbol
//! strings.

use std::fmt;

use super::{Color, Face, FaceletCube};
use crate::moves::{Cancellation, Move, MoveSequence};

#[cfg(test)]
use proptest_derive::Arbitrary;

/// A clockwise quarter turn of one face, repeated `count` times. A count of
/// 3 is the anticlockwise turn; counts are kept in `1..=3`.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(test, derive(Arbitrary))]
pub struct Turn {
    /// The face to turn.
    pub face: Face,
    /// Number of quarter turns, 1 to 3.
    #[cfg_attr(test, proptest(strategy = "1..=3u8"))]
    pub count: u8,
}

impl Move for Turn {
    fn inverse(self) -> Self {
        Turn {
            face: self.face,
            count: 4 - self.count,
        }
    }

    fn commutes_with(&self, other: &Self) -> bool {
        self.face == other.face || self.face == other.face.opposite()
    }

    fn cancel(self, other: Self) -> Cancellation<Self> {
        if self.face != other.face {
            return Cancellation::Unchanged;
        }
        match (self.count + other.count) % 4 {
            0 => Cancellation::Cancelled,
            count => Cancellation::Merged(Turn {
                face: self.face,
                count,
            }),
        }
    }
}

// Standard notation reads better in test output than the derived struct
// formatting would.
impl fmt::Debug for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.count {
            1 => write!(f, "{}", self.face.symbol()),
            3 => write!(f, "{}'", self.face.symbol()),
            _ => write!(f, "{}{}", self.face.symbol(), self.count),
        }
    }
}

/// Parse a string of move symbols into a sequence of quarter turns. Each of
/// `F B L R U D` becomes one clockwise turn of that face; every other
/// character is skipped, so junk input parses to a shorter (possibly empty)
/// sequence rather than an error.
pub fn parse_sequence(symbols: &str) -> MoveSequence<Turn> {
    symbols
        .chars()
        .filter_map(Face::from_symbol)
        .map(|face| Turn { face, count: 1 })
        .collect()
}

/// One row or column of a face.
#[derive(Debug, Copy, Clone)]
enum Line {
    Row(usize),
    Col(usize),
}

/// A directed edge strip: three facelets of one face, read in a fixed
/// traversal order. Directions are picked so that every strip in a cycle
/// copies index-for-index onto the next; a reversed strip is how two strips
/// that run in opposite physical directions around the cube line up.
#[derive(Debug, Copy, Clone)]
struct StripRef {
    face: Face,
    line: Line,
    rev: bool,
}

const fn strip(face: Face, line: Line, rev: bool) -> StripRef {
    StripRef { face, line, rev }
}

impl StripRef {
    fn coords(self) -> [(usize, usize); 3] {
        let fwd = match self.line {
            Line::Row(row) => [(row, 0), (row, 1), (row, 2)],
            Line::Col(col) => [(0, col), (1, col), (2, col)],
        };
        if self.rev {
            [fwd[2], fwd[1], fwd[0]]
        } else {
            fwd
        }
    }
}

/// For each face, the four adjacent edge strips in cycle order: a clockwise
/// turn moves strip `i` of the pre-move snapshot onto strip `i + 1`,
/// wrapping. Each face has its own wiring; there is no generic rule.
const EDGE_CYCLES: [[StripRef; 4]; 6] = [
    // Up: the top rows of the four side faces, cycling front -> right.
    [
        strip(Face::Front, Line::Row(0), false),
        strip(Face::Right, Line::Row(0), false),
        strip(Face::Back, Line::Row(0), false),
        strip(Face::Left, Line::Row(0), false),
    ],
    // Left: the left columns of up, front and down, closing through the
    // back's right column, which runs the opposite way.
    [
        strip(Face::Up, Line::Col(0), false),
        strip(Face::Front, Line::Col(0), false),
        strip(Face::Down, Line::Col(0), false),
        strip(Face::Back, Line::Col(2), true),
    ],
    // Front: up's bottom row -> right's left column -> down's top row ->
    // left's right column; the down and left strips run reversed.
    [
        strip(Face::Up, Line::Row(2), false),
        strip(Face::Right, Line::Col(0), false),
        strip(Face::Down, Line::Row(0), true),
        strip(Face::Left, Line::Col(2), true),
    ],
    // Right: mirror of Left, closing through the back's left column.
    [
        strip(Face::Up, Line::Col(2), false),
        strip(Face::Front, Line::Col(2), false),
        strip(Face::Down, Line::Col(2), false),
        strip(Face::Back, Line::Col(0), true),
    ],
    // Back: up's top row -> left's left column -> down's bottom row ->
    // right's right column; the left and down strips run reversed.
    [
        strip(Face::Up, Line::Row(0), false),
        strip(Face::Left, Line::Col(0), true),
        strip(Face::Down, Line::Row(2), true),
        strip(Face::Right, Line::Col(2), false),
    ],
    // Down: the bottom rows of the four side faces, same direction as Up.
    [
        strip(Face::Front, Line::Row(2), false),
        strip(Face::Right, Line::Row(2), false),
        strip(Face::Back, Line::Row(2), false),
        strip(Face::Left, Line::Row(2), false),
    ],
];

impl FaceletCube {
    /// One full clockwise move of `face`: rotate the face's own sub-grid,
    /// then cycle the four adjacent edge strips.
    fn turn_face(&mut self, face: Face) {
        self.rotate_face_clockwise(face);

        let cycle = &EDGE_CYCLES[face as usize];
        // All four strips are read before any is written, so no destination
        // ever observes a partially migrated neighbor.
        let snapshot: [[Color; 3]; 4] = std::array::from_fn(|i| self.read_strip(cycle[i]));
        for i in 0..4 {
            self.write_strip(cycle[(i + 1) % 4], snapshot[i]);
        }
    }

    fn read_strip(&self, strip: StripRef) -> [Color; 3] {
        strip
            .coords()
            .map(|(row, col)| self.facelets[strip.face as usize][row][col])
    }

    fn write_strip(&mut self, strip: StripRef, colors: [Color; 3]) {
        for ((row, col), color) in strip.coords().into_iter().zip(colors) {
            self.facelets[strip.face as usize][row][col] = color;
        }
    }

    /// Apply a single turn.
    pub fn make_move(&mut self, mv: Turn) {
        for _ in 0..mv.count {
            self.turn_face(mv.face);
        }
    }

    /// Apply a whole sequence in order.
    pub fn make_moves(&mut self, mvs: &MoveSequence<Turn>) {
        for &mv in &mvs.0 {
            self.make_move(mv);
        }
    }

    /// Apply a sequence given as move symbols, left to right. Each of
    /// `F B L R U D` is one clockwise turn of that face; any other character
    /// is skipped. An empty string is a no-op.
    pub fn apply_moves(&mut self, moves: &str) {
        self.make_moves(&parse_sequence(moves));
    }
}

/// Repetition ceiling for [`order`].
const ORDER_CEILING: i32 = 1_000_000;

/// The order of a move sequence: the smallest number of times it must be
/// applied to a solved cube before the cube is solved again.
///
/// "Solved" here is by appearance. Each face of a solved cube is uniform in
/// one color, so the search stops as soon as every face shows its own color
/// again, which is not necessarily the point where the underlying facelet
/// permutation returns to the identity. An empty sequence (or one that is
/// all unrecognized symbols) has order 1. Returns `-1` if 1,000,000
/// repetitions pass without the cube coming back; real sequence orders sit
/// far below that bound, so the sentinel only guards the loop.
pub fn order(moves: &str) -> i32 {
    let seq = parse_sequence(moves);
    if seq.is_empty() {
        return 1;
    }

    let mut cube = FaceletCube::SOLVED;
    for count in 1..=ORDER_CEILING {
        cube.make_moves(&seq);
        if cube.is_solved() {
            return count;
        }
    }
    -1
}
