//! The 3x3x3 cube at the facelet level: named faces, sticker colors, and the
//! 6x3x3 state grid the moves permute.

pub mod moves;
pub mod net;

#[cfg(test)]
use proptest_derive::Arbitrary;

/// A face of the cube, in net-layout order. The discriminant doubles as the
/// index into the state grid and into the per-face move tables.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(test, derive(Arbitrary))]
pub enum Face {
    /// Up
    Up,
    /// Left
    Left,
    /// Front
    Front,
    /// Right
    Right,
    /// Back
    Back,
    /// Down
    Down,
}

impl Face {
    /// All six faces in discriminant order.
    pub const ARRAY: [Face; 6] = [
        Face::Up,
        Face::Left,
        Face::Front,
        Face::Right,
        Face::Back,
        Face::Down,
    ];

    /// The face opposite to this one.
    pub fn opposite(self) -> Face {
        match self {
            Face::Up => Face::Down,
            Face::Down => Face::Up,
            Face::Left => Face::Right,
            Face::Right => Face::Left,
            Face::Front => Face::Back,
            Face::Back => Face::Front,
        }
    }

    /// The color this face shows on a solved cube. The mapping is a
    /// bijection, so a face is solved exactly when it is uniform in its own
    /// color.
    pub fn solved_color(self) -> Color {
        match self {
            Face::Up => Color::Orange,
            Face::Left => Color::Green,
            Face::Front => Color::White,
            Face::Right => Color::Blue,
            Face::Back => Color::Yellow,
            Face::Down => Color::Red,
        }
    }

    /// The move symbol naming this face.
    pub fn symbol(self) -> char {
        match self {
            Face::Up => 'U',
            Face::Left => 'L',
            Face::Front => 'F',
            Face::Right => 'R',
            Face::Back => 'B',
            Face::Down => 'D',
        }
    }

    /// Look up a face by its move symbol. Any unrecognized character gives
    /// `None`.
    pub fn from_symbol(symbol: char) -> Option<Face> {
        match symbol {
            'U' => Some(Face::Up),
            'L' => Some(Face::Left),
            'F' => Some(Face::Front),
            'R' => Some(Face::Right),
            'B' => Some(Face::Back),
            'D' => Some(Face::Down),
            _ => None,
        }
    }
}

/// A sticker color, one of the six symbols of the net text format.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Color {
    /// `O`
    Orange,
    /// `G`
    Green,
    /// `W`
    White,
    /// `B`
    Blue,
    /// `Y`
    Yellow,
    /// `R`
    Red,
}

impl Color {
    /// The character for this color in the net text format.
    pub fn symbol(self) -> char {
        match self {
            Color::Orange => 'O',
            Color::Green => 'G',
            Color::White => 'W',
            Color::Blue => 'B',
            Color::Yellow => 'Y',
            Color::Red => 'R',
        }
    }

    /// Look up a color by its net symbol. Any unrecognized character
    /// (including a space) gives `None`.
    pub fn from_symbol(symbol: char) -> Option<Color> {
        match symbol {
            'O' => Some(Color::Orange),
            'G' => Some(Color::Green),
            'W' => Some(Color::White),
            'B' => Some(Color::Blue),
            'Y' => Some(Color::Yellow),
            'R' => Some(Color::Red),
            _ => None,
        }
    }
}

/// The full sticker state of a cube: `facelets[face][row][col]` is the color
/// at that position, 54 facelets in all, stored inline with no allocation.
///
/// A cube starts out either [`SOLVED`](Self::SOLVED) or parsed from net text
/// (see [`parse_net`](Self::parse_net)), and changes only through move
/// application. Every move is a permutation of the 54 facelets, so the
/// multiset of colors never changes; parsing performs no reachability check
/// beyond that, and an unreachable coloring is applied moves just the same.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FaceletCube {
    pub(crate) facelets: [[[Color; 3]; 3]; 6],
}

impl FaceletCube {
    /// The solved cube stored as a const: each face uniform in its own
    /// color.
    pub const SOLVED: Self = FaceletCube {
        facelets: [
            [[Color::Orange; 3]; 3],
            [[Color::Green; 3]; 3],
            [[Color::White; 3]; 3],
            [[Color::Blue; 3]; 3],
            [[Color::Yellow; 3]; 3],
            [[Color::Red; 3]; 3],
        ],
    };

    /// The color at `(face, row, col)`. Rows count downward and columns
    /// rightward in the net orientation of the face.
    pub fn facelet(&self, face: Face, row: usize, col: usize) -> Color {
        self.facelets[face as usize][row][col]
    }

    /// Whether every facelet shows the color of its own face.
    pub fn is_solved(&self) -> bool {
        Face::ARRAY.into_iter().all(|face| {
            let color = face.solved_color();
            self.facelets[face as usize]
                .iter()
                .flatten()
                .all(|&sticker| sticker == color)
        })
    }

    /// Rotate one face's own 3x3 sub-grid 90 degrees clockwise, leaving the
    /// rest of the cube alone. The copy reads from a pre-rotation snapshot:
    /// the corners cycle (0,0)->(0,2)->(2,2)->(2,0), the edges cycle
    /// (0,1)->(1,2)->(2,1)->(1,0), and the center stays put.
    ///
    /// This is only half of a move; the edge-strip migration on the four
    /// neighboring faces is keyed by the move itself (see
    /// [`moves`](self::moves)).
    pub(crate) fn rotate_face_clockwise(&mut self, face: Face) {
        let old = self.facelets[face as usize];
        for row in 0..3 {
            for col in 0..3 {
                self.facelets[face as usize][row][col] = old[2 - col][row];
            }
        }
    }
}

impl Default for FaceletCube {
    fn default() -> Self {
        Self::SOLVED
    }
}
