pub mod attacks;
pub mod bitboard;
pub mod board;
pub mod error;
pub mod fen;
pub mod magic;
pub mod magic_numbers;
pub mod types;

pub use attacks::Slider;
pub use board::Board;
pub use error::{FenError, MagicError};
pub use magic::{BuildConfig, MagicTable, Multipliers, SliderTables};
