//! Forsyth-Edwards Notation for [`Board`].
//!
//! Parsing is strict about every field it reads and reports which one was wrong. The two
//! clock fields may be left off, in which case they default to `0` and `1`.

use std::fmt;
use std::str::FromStr;

use crate::bitboard::{pos_to_sq, sq_from_algebraic, sq_rank, sq_to_algebraic};
use crate::board::Board;
use crate::error::FenError;
use crate::types::{piece_char, Castling, Color, PieceType};

impl Board {
    pub fn from_fen(fen_string: &str) -> Result<Board, FenError> {
        let parts: Vec<&str> = fen_string.split_whitespace().collect();
        if !(4..=6).contains(&parts.len()) {
            return Err(FenError::WrongFieldCount(parts.len()));
        }

        let mut board = Board::empty();
        parse_placement(&mut board, parts[0])?;

        let mut side = parts[1].chars();
        board.side_to_move = match (side.next().and_then(Color::from_char), side.next()) {
            (Some(color), None) => color,
            _ => return Err(FenError::SideToMove(parts[1].to_string())),
        };

        board.castling =
            Castling::from_fen(parts[2]).ok_or_else(|| FenError::Castling(parts[2].to_string()))?;

        board.en_passant = match parts[3] {
            "-" => None,
            target => match sq_from_algebraic(target) {
                // The target is always behind a pawn that just moved two squares
                Some(sq) if sq_rank(sq) == 2 || sq_rank(sq) == 5 => Some(sq),
                _ => return Err(FenError::EnPassant(target.to_string())),
            },
        };

        if let Some(field) = parts.get(4) {
            board.halfmove_clock = field
                .parse::<u32>()
                .map_err(|_| FenError::HalfmoveClock(field.to_string()))?;
        }

        if let Some(field) = parts.get(5) {
            board.fullmove_number = match field.parse::<u32>() {
                Ok(n) if n >= 1 => n,
                _ => return Err(FenError::FullmoveNumber(field.to_string())),
            };
        }

        Ok(board)
    }

    pub fn to_fen(&self) -> String {
        let mut placement = String::new();
        for rank in (0..8).rev() {
            let mut empty = 0;
            for file in 0..8 {
                let sq = pos_to_sq(rank, file);
                match (self.piece_at(sq), self.color_at(sq)) {
                    (Some(piece_type), Some(color)) => {
                        if empty > 0 {
                            placement.push_str(&empty.to_string());
                            empty = 0;
                        }
                        placement.push(piece_char(piece_type, color));
                    }
                    _ => empty += 1,
                }
            }
            if empty > 0 {
                placement.push_str(&empty.to_string());
            }
            if rank > 0 {
                placement.push('/');
            }
        }

        format!(
            "{} {} {} {} {} {}",
            placement,
            self.side_to_move.to_char(),
            self.castling.to_fen(),
            self.en_passant.map_or_else(|| "-".to_string(), sq_to_algebraic),
            self.halfmove_clock,
            self.fullmove_number
        )
    }
}

fn parse_placement(board: &mut Board, placement: &str) -> Result<(), FenError> {
    let invalid = |reason| FenError::Placement {
        placement: placement.to_string(),
        reason,
    };

    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err(invalid("expected 8 ranks"));
    }

    // FEN lists rank 8 first
    for (row, rank_str) in ranks.iter().enumerate() {
        let rank = 7 - row as u8;
        let mut file = 0u8;
        for c in rank_str.chars() {
            if let Some(skip) = c.to_digit(10) {
                if !(1..=8).contains(&skip) {
                    return Err(invalid("empty square count must be 1 to 8"));
                }
                file += skip as u8;
            } else {
                let piece_type = PieceType::from_char(c).ok_or_else(|| invalid("unknown piece"))?;
                let color = Color::from_case(c).ok_or_else(|| invalid("unknown piece"))?;
                if file >= 8 {
                    return Err(invalid("too many squares in a rank"));
                }
                board.put(pos_to_sq(rank, file), color, piece_type);
                file += 1;
            }
            if file > 8 {
                return Err(invalid("too many squares in a rank"));
            }
        }
        if file != 8 {
            return Err(invalid("too few squares in a rank"));
        }
    }
    Ok(())
}

impl FromStr for Board {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::from_fen(s)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_fen())
    }
}
