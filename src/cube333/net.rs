//! The unfolded-net text format: 9 rows by up to 12 columns, the Up face on
//! top, Left/Front/Right/Back across the middle band, Down at the bottom,
//! and blank filler everywhere else.

use std::fmt;
use std::str::FromStr;

use super::{Color, Face, FaceletCube};
use crate::error::NetParseError;

const NET_ROWS: usize = 9;
const NET_COLS: usize = 12;

/// Top-left (row, col) of each face block on the 9x12 grid, indexed by face
/// discriminant.
const NET_BLOCKS: [(usize, usize); 6] = [(0, 3), (3, 0), (3, 3), (3, 6), (3, 9), (6, 3)];

impl FaceletCube {
    /// Parse a cube from net text.
    ///
    /// The input must be exactly 9 lines of at most 12 characters each;
    /// shorter lines count as padded with spaces on the right. Every
    /// character must be a space or a color symbol, and the six face blocks
    /// must contain no spaces. Any violation aborts the parse with the
    /// matching [`NetParseError`]; nothing is constructed from bad input.
    pub fn parse_net(input: &str) -> Result<Self, NetParseError> {
        let lines: Vec<&str> = input.lines().collect();
        if lines.len() != NET_ROWS {
            return Err(NetParseError::WrongLineCount(lines.len()));
        }

        let mut grid = [[' '; NET_COLS]; NET_ROWS];
        for (row, line) in lines.iter().enumerate() {
            let len = line.chars().count();
            if len > NET_COLS {
                return Err(NetParseError::LineTooLong { line: row + 1, len });
            }
            for (col, ch) in line.chars().enumerate() {
                grid[row][col] = ch;
            }
        }

        for row in &grid {
            for &ch in row {
                if ch != ' ' && Color::from_symbol(ch).is_none() {
                    return Err(NetParseError::InvalidCharacter(ch));
                }
            }
        }

        let mut facelets = [[[Color::White; 3]; 3]; 6];
        for face in Face::ARRAY {
            let (top, left) = NET_BLOCKS[face as usize];
            for row in 0..3 {
                for col in 0..3 {
                    // Only blanks can still fail here; everything else was
                    // vetted above.
                    facelets[face as usize][row][col] =
                        Color::from_symbol(grid[top + row][left + col]).ok_or(
                            NetParseError::BlankFacelet { face, row, col },
                        )?;
                }
            }
        }

        Ok(FaceletCube { facelets })
    }
}

impl FromStr for FaceletCube {
    type Err = NetParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FaceletCube::parse_net(s)
    }
}

impl fmt::Display for FaceletCube {
    // The inverse of `parse_net`: the 9-row net with each row trimmed of
    // trailing blanks and newline-terminated, so an all-filler row prints
    // as an empty line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut grid = [[' '; NET_COLS]; NET_ROWS];
        for face in Face::ARRAY {
            let (top, left) = NET_BLOCKS[face as usize];
            for row in 0..3 {
                for col in 0..3 {
                    grid[top + row][left + col] = self.facelets[face as usize][row][col].symbol();
                }
            }
        }

        for row in grid {
            let width = row.iter().rposition(|&ch| ch != ' ').map_or(0, |last| last + 1);
            for &ch in &row[..width] {
                write!(f, "{}", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOLVED_NET: &str = "   OOO
   OOO
   OOO
GGGWWWBBBYYY
GGGWWWBBBYYY
GGGWWWBBBYYY
   RRR
   RRR
   RRR
";

    #[test]
    fn parse_solved_net() {
        assert_eq!(
            FaceletCube::parse_net(SOLVED_NET).unwrap(),
            FaceletCube::SOLVED
        );
    }

    #[test]
    fn display_solved_net() {
        assert_eq!(FaceletCube::SOLVED.to_string(), SOLVED_NET);
    }

    #[test]
    fn missing_trailing_newline_still_parses() {
        let cube: FaceletCube = SOLVED_NET.trim_end_matches('\n').parse().unwrap();
        assert_eq!(cube, FaceletCube::SOLVED);
    }

    #[test]
    fn wrong_line_count() {
        let eight_lines: String = SOLVED_NET.lines().take(8).map(|l| format!("{}\n", l)).collect();
        assert_eq!(
            FaceletCube::parse_net(&eight_lines),
            Err(NetParseError::WrongLineCount(8))
        );
        assert_eq!(
            eight_lines.parse::<FaceletCube>().unwrap_err().to_string(),
            "net must have exactly 9 lines, found 8"
        );

        // A stray extra line counts too, even an empty one.
        let ten_lines = format!("{}\n", SOLVED_NET);
        assert_eq!(
            FaceletCube::parse_net(&ten_lines),
            Err(NetParseError::WrongLineCount(10))
        );
    }

    #[test]
    fn line_too_long() {
        // Pad out line 5 (the second middle-band row) to 13 characters.
        let net: String = SOLVED_NET
            .lines()
            .enumerate()
            .map(|(i, line)| {
                if i == 4 {
                    format!("{}Y\n", line)
                } else {
                    format!("{}\n", line)
                }
            })
            .collect();
        assert_eq!(
            FaceletCube::parse_net(&net),
            Err(NetParseError::LineTooLong { line: 5, len: 13 })
        );
    }

    #[test]
    fn invalid_character() {
        let net = SOLVED_NET.replacen('W', "Z", 1);
        assert_eq!(
            FaceletCube::parse_net(&net),
            Err(NetParseError::InvalidCharacter('Z'))
        );
        // Lowercase symbols are not in the alphabet either.
        let net = SOLVED_NET.replacen('O', "o", 1);
        assert_eq!(
            FaceletCube::parse_net(&net),
            Err(NetParseError::InvalidCharacter('o'))
        );
    }

    #[test]
    fn blank_inside_face_block() {
        // Net row 1, column 4 sits inside the Up face at (1, 1). A space
        // there passes the alphabet scan but not the block extraction.
        let net = SOLVED_NET.replacen("   OOO\n   OOO", "   OOO\n   O O", 1);
        assert_eq!(
            FaceletCube::parse_net(&net),
            Err(NetParseError::BlankFacelet {
                face: Face::Up,
                row: 1,
                col: 1
            })
        );
    }

    #[test]
    fn scrambled_round_trip() {
        let mut cube = FaceletCube::SOLVED;
        cube.apply_moves("FRUBLDFF");
        let reparsed: FaceletCube = cube.to_string().parse().unwrap();
        assert_eq!(reparsed, cube);
    }

    use proptest::collection::vec;
    use proptest::prelude::*;

    use crate::cube333::moves::Turn;
    use crate::moves::MoveSequence;

    proptest! {
        #[test]
        fn round_trip_of_reachable_states(mvs in vec(any::<Turn>(), 0..30).prop_map(MoveSequence)) {
            let mut cube = FaceletCube::SOLVED;
            cube.make_moves(&mvs);
            assert_eq!(FaceletCube::parse_net(&cube.to_string()), Ok(cube));
        }
    }
}
