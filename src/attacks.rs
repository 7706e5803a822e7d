//! Ground-truth sliding attacks and the occupancy sets magic tables are built from.
//!
//! Everything here is slow and exact: it walks rays square by square. The magic tables in
//! [`crate::magic`] are filled from, and verified against, these functions.

use std::fmt;
use std::iter::FusedIterator;

use crate::bitboard::{
    file_bb, rank_bb, sq_file, sq_rank, sq_to_bb, Direction, FILE_A, FILE_H, RANK_1, RANK_8,
};

/// A piece kind whose attacks depend on the occupancy of the board.
/// The queen is not listed: its attacks are the union of both kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slider {
    Rook,
    Bishop,
}

impl Slider {
    pub const ALL: [Slider; 2] = [Slider::Rook, Slider::Bishop];

    #[inline]
    pub const fn directions(self) -> &'static [Direction; 4] {
        match self {
            Slider::Rook => &Direction::ORTHOGONAL,
            Slider::Bishop => &Direction::DIAGONAL,
        }
    }

    /// Attacks from `sq` given `occupied`, computed by walking rays
    #[inline]
    pub fn attacks(self, sq: u8, occupied: u64) -> u64 {
        sliding_attacks(sq, occupied, self.directions())
    }

    #[inline]
    pub fn relevant_mask(self, sq: u8) -> u64 {
        relevant_mask(sq, self.directions())
    }

    pub fn to_human(&self) -> &str {
        match self {
            Self::Rook => "rook",
            Self::Bishop => "bishop",
        }
    }
}

impl fmt::Display for Slider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_human())
    }
}

/// Walk each direction from `sq` until the edge of the board or the first occupied square.
/// The blocker itself is attacked, nothing behind it is.
pub fn sliding_attacks(sq: u8, occupied: u64, directions: &[Direction]) -> u64 {
    let origin = sq_to_bb(sq);
    let mut attacks = 0u64;

    for &direction in directions {
        let mut current = origin;
        loop {
            current = direction.step(current);
            if current == 0 {
                break;
            }
            attacks |= current;
            if current & occupied != 0 {
                break;
            }
        }
    }
    attacks
}

/// Squares whose occupancy can change the attack set from `sq`.
///
/// This is the empty-board attack set minus the outermost ranks and files: a piece on the
/// last square of a ray has nothing behind it to hide, so whether it is there or not never
/// changes the result. The exception is the origin's own rank and file. A rook on a1 still
/// needs b1..g1 and a2..a7, so the edge it stands on stays in play along its own lines.
pub fn relevant_mask(sq: u8, directions: &[Direction]) -> u64 {
    let ranks = !(RANK_1 | RANK_8) | rank_bb(sq_rank(sq));
    let files = !(FILE_A | FILE_H) | file_bb(sq_file(sq));
    sliding_attacks(sq, 0, directions) & ranks & files
}

/// Every subset of `mask`, each exactly once, starting with the empty set
#[inline]
pub fn subsets(mask: u64) -> Subsets {
    Subsets {
        mask,
        next: 0,
        done: false,
    }
}

/// Carry-Rippler enumeration of the subsets of a mask.
///
/// `next = (current - mask) & mask` counts upward through the set bits of the mask only.
/// The sequence wraps back to empty after visiting the full mask, which ends the iteration.
/// Clone it to restart from where it was.
#[derive(Debug, Clone)]
pub struct Subsets {
    mask: u64,
    next: u64,
    done: bool,
}

impl Iterator for Subsets {
    type Item = u64;

    #[inline]
    fn next(&mut self) -> Option<u64> {
        if self.done {
            return None;
        }
        let current = self.next;
        self.next = current.wrapping_sub(self.mask) & self.mask;
        if self.next == 0 {
            self.done = true;
        }
        Some(current)
    }
}

impl FusedIterator for Subsets {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bitboard::{pos_to_sq, BitboardIter, EDGES};
    use pretty_assertions::assert_eq;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::collections::HashSet;

    /// Number of bits in the rook occupancy mask for each square
    const ROOK_BITS: [u32; 64] = [
        12, 11, 11, 11, 11, 11, 11, 12,
        11, 10, 10, 10, 10, 10, 10, 11,
        11, 10, 10, 10, 10, 10, 10, 11,
        11, 10, 10, 10, 10, 10, 10, 11,
        11, 10, 10, 10, 10, 10, 10, 11,
        11, 10, 10, 10, 10, 10, 10, 11,
        11, 10, 10, 10, 10, 10, 10, 11,
        12, 11, 11, 11, 11, 11, 11, 12,
    ];

    /// Number of bits in the bishop occupancy mask for each square
    const BISHOP_BITS: [u32; 64] = [
        6, 5, 5, 5, 5, 5, 5, 6,
        5, 5, 5, 5, 5, 5, 5, 5,
        5, 5, 7, 7, 7, 7, 5, 5,
        5, 5, 7, 9, 9, 7, 5, 5,
        5, 5, 7, 9, 9, 7, 5, 5,
        5, 5, 7, 7, 7, 7, 5, 5,
        5, 5, 5, 5, 5, 5, 5, 5,
        6, 5, 5, 5, 5, 5, 5, 6,
    ];

    fn squares(names: &[&str]) -> u64 {
        names
            .iter()
            .map(|n| sq_to_bb(crate::bitboard::sq_from_algebraic(n).unwrap()))
            .fold(0, |acc, bb| acc | bb)
    }

    #[test]
    fn test_rook_attacks_empty_board() {
        // Rook on e4 with no blockers
        let sq = pos_to_sq(3, 4); // e4
        let attacks = Slider::Rook.attacks(sq, 0);
        // Should attack 14 squares (7 on rank, 7 on file)
        assert_eq!(attacks.count_ones(), 14);
    }

    #[test]
    fn test_rook_attacks_with_blockers() {
        // Rook on e4, with pieces on e2 and g4
        let sq = pos_to_sq(3, 4);
        let occupied = squares(&["e2", "g4"]);
        let attacks = Slider::Rook.attacks(sq, occupied);

        // Should include e2 and g4 (can capture), but not squares beyond
        assert!(attacks & squares(&["e2"]) != 0);
        assert!(attacks & squares(&["g4"]) != 0);
        assert!(attacks & squares(&["e1"]) == 0);
        assert!(attacks & squares(&["h4"]) == 0);
        assert_eq!(attacks.count_ones(), 12);
    }

    #[test]
    fn test_bishop_attacks_with_blockers() {
        // Bishop on e4, with pieces on c2 and g6
        let sq = pos_to_sq(3, 4);
        let occupied = squares(&["c2", "g6"]);
        let attacks = Slider::Bishop.attacks(sq, occupied);

        assert!(attacks & squares(&["c2", "g6"]) == squares(&["c2", "g6"]));
        assert!(attacks & squares(&["b1", "h7"]) == 0);
    }

    #[test]
    fn test_rook_corner_with_far_blockers() {
        // Rook on a1, blockers on h1 and a8 and on the origin itself
        let sq = pos_to_sq(0, 0);
        let occupied = squares(&["a1", "h1", "a8"]);
        let expected = squares(&[
            "b1", "c1", "d1", "e1", "f1", "g1", "h1", "a2", "a3", "a4", "a5", "a6", "a7", "a8",
        ]);
        assert_eq!(Slider::Rook.attacks(sq, occupied), expected);
    }

    #[test]
    fn test_bishop_center_empty_board() {
        // Bishop on d4 sees both full diagonals through it
        let sq = pos_to_sq(3, 3);
        let expected = squares(&[
            "a1", "b2", "c3", "e5", "f6", "g7", "h8", "a7", "b6", "c5", "e3", "f2", "g1",
        ]);
        assert_eq!(Slider::Bishop.attacks(sq, 0), expected);
    }

    #[test]
    fn test_adjacent_blocker_stops_ray() {
        let sq = pos_to_sq(3, 4); // e4
        let occupied = squares(&["e5", "e3", "d4", "f4"]);
        assert_eq!(Slider::Rook.attacks(sq, occupied), occupied);
    }

    #[test]
    fn test_mask_sizes() {
        for sq in 0..64u8 {
            assert_eq!(
                Slider::Rook.relevant_mask(sq).count_ones(),
                ROOK_BITS[sq as usize],
                "rook mask at {sq}"
            );
            assert_eq!(
                Slider::Bishop.relevant_mask(sq).count_ones(),
                BISHOP_BITS[sq as usize],
                "bishop mask at {sq}"
            );
        }
    }

    #[test]
    fn test_rook_corner_mask() {
        let expected = squares(&[
            "b1", "c1", "d1", "e1", "f1", "g1", "a2", "a3", "a4", "a5", "a6", "a7",
        ]);
        assert_eq!(Slider::Rook.relevant_mask(0), expected);
    }

    #[test]
    fn test_mask_is_inside_empty_board_attacks() {
        for slider in Slider::ALL {
            for sq in 0..64u8 {
                let mask = slider.relevant_mask(sq);
                assert_eq!(mask & slider.attacks(sq, 0), mask);
                assert_eq!(mask & sq_to_bb(sq), 0);
            }
        }
    }

    #[test]
    fn test_bishop_mask_never_touches_edges() {
        for sq in 0..64u8 {
            assert_eq!(Slider::Bishop.relevant_mask(sq) & EDGES, 0);
        }
    }

    #[test]
    fn test_masked_occupancy_gives_same_attacks() {
        // Squares outside the relevant mask never decide where a ray stops
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for slider in Slider::ALL {
            for sq in 0..64u8 {
                let mask = slider.relevant_mask(sq);
                for _ in 0..200 {
                    let occupied = rng.gen::<u64>() & rng.gen::<u64>();
                    assert_eq!(
                        slider.attacks(sq, occupied & mask),
                        slider.attacks(sq, occupied),
                        "{slider} on {sq} with occupancy {occupied:#x}"
                    );
                }
                assert_eq!(slider.attacks(sq, !mask & !sq_to_bb(sq)) & mask, mask);
            }
        }
    }

    #[test]
    fn test_subsets_of_empty_mask() {
        assert_eq!(subsets(0).collect::<Vec<_>>(), vec![0]);
    }

    #[test]
    fn test_subsets_small_mask() {
        let mask = 0b1010_0100;
        let mut found: Vec<u64> = subsets(mask).collect();
        assert_eq!(found[0], 0);
        found.sort();
        assert_eq!(
            found,
            vec![0, 0b100, 0b10_0000, 0b10_0100, 0b1000_0000, 0b1000_0100, 0b1010_0000, 0b1010_0100]
        );
    }

    #[test]
    fn test_subsets_complete_and_unique() {
        for slider in Slider::ALL {
            for sq in [0u8, 7, 27, 36, 56, 63] {
                let mask = slider.relevant_mask(sq);
                let all: Vec<u64> = subsets(mask).collect();
                let unique: HashSet<u64> = all.iter().copied().collect();
                assert_eq!(all.len(), 1 << mask.count_ones());
                assert_eq!(unique.len(), all.len());
                assert!(unique.contains(&0));
                assert!(unique.contains(&mask));
                assert!(all.iter().all(|s| s & !mask == 0));
            }
        }
    }

    #[test]
    fn test_subsets_restart_from_clone() {
        let mask = squares(&["b2", "c3", "d4"]);
        let mut iter = subsets(mask);
        iter.next();
        let rest: Vec<u64> = iter.clone().collect();
        assert_eq!(iter.collect::<Vec<_>>(), rest);
        assert_eq!(rest.len(), 7);
    }

    #[test]
    fn test_subsets_fused() {
        let mut iter = subsets(squares(&["a1"]));
        assert_eq!(iter.next(), Some(0));
        assert_eq!(iter.next(), Some(1));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_attacks_stay_on_lines() {
        for sq in 0..64u8 {
            for target in BitboardIter(Slider::Rook.attacks(sq, 0)) {
                assert!(sq_rank(target) == sq_rank(sq) || sq_file(target) == sq_file(sq));
            }
        }
    }
}
