//! Bitboard board state: which piece of which color sits where, plus the FEN bookkeeping.
//!
//! The board only holds state. Attack computation lives in [`crate::magic`] and reads the
//! board's occupancy through [`Board::occupied`].

use crate::bitboard::{is_set, pos_to_sq, sq_to_bb, BitboardIter};
use crate::magic::SliderTables;
use crate::types::{piece_char, Castling, Color, PieceType};

pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    /// Occupancy per piece type, both colors
    pieces: [u64; 6],
    /// Occupancy per color
    colors: [u64; 2],
    // who's move it is
    pub side_to_move: Color,
    pub castling: Castling,
    /// Square a pawn may capture onto en passant
    pub en_passant: Option<u8>,
    // number of half moves since last capture or pawn advance
    pub halfmove_clock: u32,
    // number of full moves. Starts at 1, and gets incremented after every black move
    pub fullmove_number: u32,
}

impl Default for Board {
    fn default() -> Self {
        Board::empty()
    }
}

impl Board {
    /// The standard starting position
    pub fn new() -> Self {
        Board::from_fen(STARTING_POSITION_FEN).expect("starting position FEN is valid")
    }

    /// No pieces, white to move, no rights
    pub fn empty() -> Self {
        Board {
            pieces: [0; 6],
            colors: [0; 2],
            side_to_move: Color::White,
            castling: Castling::default(),
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    /// Place a piece, replacing whatever was on the square
    pub fn put(&mut self, sq: u8, color: Color, piece_type: PieceType) {
        self.remove(sq);
        let bb = sq_to_bb(sq);
        self.pieces[piece_type.index()] |= bb;
        self.colors[color.index()] |= bb;
    }

    pub fn remove(&mut self, sq: u8) {
        let clear = !sq_to_bb(sq);
        for bb in self.pieces.iter_mut().chain(self.colors.iter_mut()) {
            *bb &= clear;
        }
    }

    #[inline(always)]
    pub fn occupied(&self) -> u64 {
        self.colors[0] | self.colors[1]
    }

    #[inline(always)]
    pub fn pieces(&self, piece_type: PieceType) -> u64 {
        self.pieces[piece_type.index()]
    }

    #[inline(always)]
    pub fn color(&self, color: Color) -> u64 {
        self.colors[color.index()]
    }

    #[inline(always)]
    pub fn pieces_of(&self, color: Color, piece_type: PieceType) -> u64 {
        self.pieces(piece_type) & self.color(color)
    }

    pub fn piece_at(&self, sq: u8) -> Option<PieceType> {
        PieceType::ALL
            .into_iter()
            .find(|&piece_type| is_set(self.pieces(piece_type), sq))
    }

    pub fn color_at(&self, sq: u8) -> Option<Color> {
        Color::ALL.into_iter().find(|&color| is_set(self.color(color), sq))
    }

    /// Squares attacked by the rook, bishop or queen on `sq` given this board's occupancy.
    /// `None` when the square is empty or holds a piece that does not slide.
    pub fn slider_attacks(&self, tables: &SliderTables, sq: u8) -> Option<u64> {
        let piece_type = self.piece_at(sq).filter(PieceType::is_sliding)?;
        let occupied = self.occupied();
        Some(
            piece_type
                .sliders()
                .iter()
                .fold(0, |acc, &slider| acc | tables.attacks(slider, sq, occupied)),
        )
    }

    /// Union of every sliding attack of one side
    pub fn slider_attacks_by(&self, tables: &SliderTables, color: Color) -> u64 {
        let sliders = self.color(color)
            & (self.pieces(PieceType::Rook) | self.pieces(PieceType::Bishop) | self.pieces(PieceType::Queen));
        BitboardIter(sliders)
            .filter_map(|sq| self.slider_attacks(tables, sq))
            .fold(0, |acc, attacks| acc | attacks)
    }

    pub fn draw_board(&self) -> String {
        let mut out = String::new();
        for rank in (0..8).rev() {
            out.push((b'1' + rank) as char);
            out.push(' ');
            for file in 0..8 {
                let sq = pos_to_sq(rank, file);
                let c = match (self.piece_at(sq), self.color_at(sq)) {
                    (Some(piece_type), Some(color)) => piece_char(piece_type, color),
                    _ => '.',
                };
                out.push(c);
                if file < 7 {
                    out.push(' ');
                }
            }
            out.push('\n');
        }
        out.push_str("  a b c d e f g h\n");
        out
    }
}
