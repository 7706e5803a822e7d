use crate::attacks::Slider;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    /// Side to move as written in FEN
    pub fn from_char(c: char) -> Option<Color> {
        match c {
            'w' => Some(Color::White),
            'b' => Some(Color::Black),
            _ => None,
        }
    }

    /// Upper case pieces are white, lower case black
    pub fn from_case(c: char) -> Option<Color> {
        if c.is_ascii_uppercase() {
            Some(Color::White)
        } else if c.is_ascii_lowercase() {
            Some(Color::Black)
        } else {
            None
        }
    }

    pub fn to_char(&self) -> char {
        match self {
            Self::White => 'w',
            Self::Black => 'b',
        }
    }

    pub fn other_color(&self) -> Color {
        match self {
            Self::White => Color::Black,
            Self::Black => Color::White,
        }
    }

    pub fn to_human(&self) -> &str {
        match self {
            Self::White => "white",
            Self::Black => "black",
        }
    }

    #[inline(always)]
    pub const fn index(self) -> usize {
        self as usize
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum PieceType {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceType {
    pub const ALL: [PieceType; 6] = [
        PieceType::Pawn,
        PieceType::Knight,
        PieceType::Bishop,
        PieceType::Rook,
        PieceType::Queen,
        PieceType::King,
    ];

    pub fn from_char(c: char) -> Option<PieceType> {
        match c.to_ascii_lowercase() {
            'p' => Some(PieceType::Pawn),
            'n' => Some(PieceType::Knight),
            'b' => Some(PieceType::Bishop),
            'r' => Some(PieceType::Rook),
            'q' => Some(PieceType::Queen),
            'k' => Some(PieceType::King),
            _ => None,
        }
    }

    /// Is the piece a sliding piece (one which can move multiple square in a given direction)
    pub fn is_sliding(&self) -> bool {
        matches!(self, PieceType::Rook | PieceType::Bishop | PieceType::Queen)
    }

    /// Slider kinds whose attacks this piece combines
    pub fn sliders(&self) -> &'static [Slider] {
        match self {
            PieceType::Rook => &[Slider::Rook],
            PieceType::Bishop => &[Slider::Bishop],
            PieceType::Queen => &Slider::ALL,
            _ => &[],
        }
    }

    pub fn to_human(&self) -> &str {
        match self {
            Self::Pawn => "pawn",
            Self::Knight => "knight",
            Self::Bishop => "bishop",
            Self::Rook => "rook",
            Self::Queen => "queen",
            Self::King => "king",
        }
    }

    /// Upper case FEN letter
    pub fn to_char(&self) -> char {
        match self {
            Self::Pawn => 'P',
            Self::Knight => 'N',
            Self::Bishop => 'B',
            Self::Rook => 'R',
            Self::Queen => 'Q',
            Self::King => 'K',
        }
    }

    #[inline(always)]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// FEN letter for a piece of the given color
pub fn piece_char(piece_type: PieceType, color: Color) -> char {
    match color {
        Color::White => piece_type.to_char(),
        Color::Black => piece_type.to_char().to_ascii_lowercase(),
    }
}

/// Remaining castling rights
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Hash)]
pub struct Castling {
    pub white_kingside: bool,
    pub white_queenside: bool,
    pub black_kingside: bool,
    pub black_queenside: bool,
}

impl Castling {
    pub const ALL: Castling = Castling {
        white_kingside: true,
        white_queenside: true,
        black_kingside: true,
        black_queenside: true,
    };

    /// Parse the FEN castling field: `-` or any of `KQkq`, each at most once
    pub fn from_fen(field: &str) -> Option<Castling> {
        let mut castling = Castling::default();
        if field == "-" {
            return Some(castling);
        }
        if field.is_empty() {
            return None;
        }
        for c in field.chars() {
            let right = match c {
                'K' => &mut castling.white_kingside,
                'Q' => &mut castling.white_queenside,
                'k' => &mut castling.black_kingside,
                'q' => &mut castling.black_queenside,
                _ => return None,
            };
            if *right {
                return None;
            }
            *right = true;
        }
        Some(castling)
    }

    pub fn to_fen(&self) -> String {
        let rights: String = [
            (self.white_kingside, 'K'),
            (self.white_queenside, 'Q'),
            (self.black_kingside, 'k'),
            (self.black_queenside, 'q'),
        ]
        .iter()
        .filter(|(allowed, _)| *allowed)
        .map(|(_, c)| *c)
        .collect();

        if rights.is_empty() {
            "-".to_string()
        } else {
            rights
        }
    }
}
