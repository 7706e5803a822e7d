//! Bitboard representation and board geometry.
//!
//! A bitboard is a 64-bit integer where each bit represents a square on the chess board.
//! Square indexing: a1 = 0, b1 = 1, ..., h1 = 7, a2 = 8, ..., h8 = 63
//! This corresponds to: square_index = rank * 8 + file where rank/file are 0-indexed.

pub const FILE_A: u64 = 0x0101_0101_0101_0101;
pub const FILE_H: u64 = FILE_A << 7;
pub const RANK_1: u64 = 0xFF;
pub const RANK_8: u64 = RANK_1 << 56;

/// The outermost ring of squares
pub const EDGES: u64 = FILE_A | FILE_H | RANK_1 | RANK_8;

/// Convert a 0-indexed rank and file to a square index (0-63)
#[inline(always)]
pub const fn pos_to_sq(rank: u8, file: u8) -> u8 {
    rank * 8 + file
}

/// Convert a square index to a bitboard with that single bit set
#[inline(always)]
pub const fn sq_to_bb(sq: u8) -> u64 {
    1u64 << sq
}

/// Get the rank (0-7) from a square index
#[inline(always)]
pub const fn sq_rank(sq: u8) -> u8 {
    sq >> 3
}

/// Get the file (0-7) from a square index
#[inline(always)]
pub const fn sq_file(sq: u8) -> u8 {
    sq & 7
}

/// All squares on the given rank (0-7)
#[inline(always)]
pub const fn rank_bb(rank: u8) -> u64 {
    RANK_1 << (rank * 8)
}

/// All squares on the given file (0-7)
#[inline(always)]
pub const fn file_bb(file: u8) -> u64 {
    FILE_A << file
}

#[inline(always)]
pub const fn popcount(bb: u64) -> u32 {
    bb.count_ones()
}

#[inline(always)]
pub const fn is_set(bb: u64, sq: u8) -> bool {
    bb & sq_to_bb(sq) != 0
}

/// Algebraic name of a square, e.g. `e4`
pub fn sq_to_algebraic(sq: u8) -> String {
    format!(
        "{}{}",
        (b'a' + sq_file(sq)) as char,
        (b'1' + sq_rank(sq)) as char
    )
}

/// Parse an algebraic square name. Returns `None` for anything but `[a-h][1-8]`.
pub fn sq_from_algebraic(s: &str) -> Option<u8> {
    match s.as_bytes() {
        &[file @ b'a'..=b'h', rank @ b'1'..=b'8'] => Some(pos_to_sq(rank - b'1', file - b'a')),
        _ => None,
    }
}

/// Render a bitboard as an 8x8 grid, rank 8 at the top
pub fn draw(bb: u64) -> String {
    let mut out = String::new();
    for rank in (0..8).rev() {
        out.push((b'1' + rank) as char);
        out.push(' ');
        for file in 0..8 {
            out.push(if is_set(bb, pos_to_sq(rank, file)) { 'x' } else { '.' });
            if file < 7 {
                out.push(' ');
            }
        }
        out.push('\n');
    }
    out.push_str("  a b c d e f g h\n");
    out
}

/// The eight compass directions a sliding piece can move in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl Direction {
    pub const ORTHOGONAL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    pub const DIAGONAL: [Direction; 4] = [
        Direction::NorthEast,
        Direction::NorthWest,
        Direction::SouthEast,
        Direction::SouthWest,
    ];

    /// Shift every square of `bb` one step in this direction.
    /// Squares that would leave the board are dropped, so stepping off an edge yields 0.
    #[inline(always)]
    pub const fn step(self, bb: u64) -> u64 {
        match self {
            Direction::North => bb << 8,
            Direction::South => bb >> 8,
            Direction::East => (bb & !FILE_H) << 1,
            Direction::West => (bb & !FILE_A) >> 1,
            Direction::NorthEast => (bb & !FILE_H) << 9,
            Direction::NorthWest => (bb & !FILE_A) << 7,
            Direction::SouthEast => (bb & !FILE_H) >> 7,
            Direction::SouthWest => (bb & !FILE_A) >> 9,
        }
    }
}

/// Iterate over set bits in a bitboard, returning square indices
pub struct BitboardIter(pub u64);

impl Iterator for BitboardIter {
    type Item = u8;

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        if self.0 == 0 {
            None
        } else {
            let sq = self.0.trailing_zeros() as u8;
            self.0 &= self.0 - 1; // Clear the lowest set bit
            Some(sq)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_addressing() {
        assert_eq!(pos_to_sq(0, 0), 0); // a1
        assert_eq!(pos_to_sq(0, 7), 7); // h1
        assert_eq!(pos_to_sq(7, 0), 56); // a8
        assert_eq!(pos_to_sq(3, 4), 28); // e4
        assert_eq!(sq_rank(28), 3);
        assert_eq!(sq_file(28), 4);
    }

    #[test]
    fn test_algebraic() {
        assert_eq!(sq_to_algebraic(0), "a1");
        assert_eq!(sq_to_algebraic(28), "e4");
        assert_eq!(sq_to_algebraic(63), "h8");
        assert_eq!(sq_from_algebraic("e4"), Some(28));
        assert_eq!(sq_from_algebraic("h8"), Some(63));
        assert_eq!(sq_from_algebraic("i1"), None);
        assert_eq!(sq_from_algebraic("a9"), None);
        assert_eq!(sq_from_algebraic("e"), None);
        assert_eq!(sq_from_algebraic("e44"), None);
    }

    #[test]
    fn test_rank_file_masks() {
        assert_eq!(rank_bb(0), RANK_1);
        assert_eq!(rank_bb(7), RANK_8);
        assert_eq!(file_bb(0), FILE_A);
        assert_eq!(file_bb(7), FILE_H);
        assert_eq!(popcount(EDGES), 28);
    }

    #[test]
    fn test_step_inside_board() {
        let e4 = sq_to_bb(pos_to_sq(3, 4));
        assert_eq!(Direction::North.step(e4), sq_to_bb(pos_to_sq(4, 4)));
        assert_eq!(Direction::South.step(e4), sq_to_bb(pos_to_sq(2, 4)));
        assert_eq!(Direction::East.step(e4), sq_to_bb(pos_to_sq(3, 5)));
        assert_eq!(Direction::West.step(e4), sq_to_bb(pos_to_sq(3, 3)));
        assert_eq!(Direction::NorthEast.step(e4), sq_to_bb(pos_to_sq(4, 5)));
        assert_eq!(Direction::NorthWest.step(e4), sq_to_bb(pos_to_sq(4, 3)));
        assert_eq!(Direction::SouthEast.step(e4), sq_to_bb(pos_to_sq(2, 5)));
        assert_eq!(Direction::SouthWest.step(e4), sq_to_bb(pos_to_sq(2, 3)));
    }

    #[test]
    fn test_step_off_edges() {
        let h4 = sq_to_bb(pos_to_sq(3, 7));
        let a4 = sq_to_bb(pos_to_sq(3, 0));
        assert_eq!(Direction::East.step(h4), 0);
        assert_eq!(Direction::NorthEast.step(h4), 0);
        assert_eq!(Direction::SouthEast.step(h4), 0);
        assert_eq!(Direction::West.step(a4), 0);
        assert_eq!(Direction::NorthWest.step(a4), 0);
        assert_eq!(Direction::SouthWest.step(a4), 0);
        assert_eq!(Direction::North.step(sq_to_bb(63)), 0);
        assert_eq!(Direction::South.step(sq_to_bb(0)), 0);
    }

    #[test]
    fn test_bitboard_iter() {
        let bb = sq_to_bb(0) | sq_to_bb(7) | sq_to_bb(63); // a1, h1, h8
        let squares: Vec<u8> = BitboardIter(bb).collect();
        assert_eq!(squares, vec![0, 7, 63]);
    }

    #[test]
    fn test_draw() {
        let drawn = draw(sq_to_bb(0) | sq_to_bb(63));
        let lines: Vec<&str> = drawn.lines().collect();
        assert_eq!(lines[0], "8 . . . . . . . x");
        assert_eq!(lines[7], "1 x . . . . . . .");
        assert_eq!(lines[8], "  a b c d e f g h");
    }
}
