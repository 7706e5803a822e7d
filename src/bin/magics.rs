//! Magic table builder - build the sliding attack tables and report on them
//!
//! Usage: cargo run --release --bin magics -- \
//!          --random --seed 42 --parallel --verify \
//!          --emit magic_numbers.rs

use std::path::{Path, PathBuf};
use std::time::Instant;

use chess_magics::bitboard::{draw, sq_to_algebraic, BitboardIter};
use chess_magics::magic::DEFAULT_MAX_ATTEMPTS;
use chess_magics::{Board, BuildConfig, MagicTable, Multipliers, Slider, SliderTables};
use clap::Parser;
use color_eyre::eyre::{eyre, WrapErr};
use itertools::Itertools;

#[derive(Parser, Debug)]
#[command(name = "magics")]
#[command(about = "Build and verify magic bitboard tables for sliding pieces")]
struct Args {
    /// Ignore the precomputed multipliers and search every square
    #[arg(long)]
    random: bool,

    /// Seed for the random search (entropy if not given)
    #[arg(long)]
    seed: Option<u64>,

    /// Candidates to try per square before giving up
    #[arg(long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    max_attempts: u32,

    /// Search squares in parallel
    #[arg(short, long)]
    parallel: bool,

    /// Check every occupancy of every square against ray walking
    #[arg(long)]
    verify: bool,

    /// Write the multipliers in use as Rust source to this file
    #[arg(long)]
    emit: Option<PathBuf>,

    /// Show the sliding attacks of every rook, bishop and queen in this position
    #[arg(long)]
    fen: Option<String>,
}

impl Args {
    fn build_config(&self) -> BuildConfig {
        let multipliers = if self.random {
            Multipliers::Random
        } else {
            Multipliers::Precomputed
        };
        BuildConfig {
            multipliers,
            max_attempts: self.max_attempts,
            seed: self.seed,
            parallel: self.parallel,
        }
    }
}

fn report(table: &MagicTable) {
    let stats = table.stats();
    println!(
        "  {:<7} {:>7} entries ({:>4} KiB) | {:>9} attempts | hardest {} ({} attempts)",
        table.slider().to_human(),
        stats.entries,
        stats.entries * std::mem::size_of::<u64>() / 1024,
        stats.attempts,
        sq_to_algebraic(stats.hardest_square),
        stats.hardest_attempts,
    );
}

fn format_multipliers(name: &str, multipliers: &[u64; 64]) -> String {
    let rows = multipliers
        .iter()
        .map(|m| format!("0x{m:016X},"))
        .chunks(4)
        .into_iter()
        .map(|mut row| format!("    {}", row.join(" ")))
        .join("\n");
    format!("pub const {name}: [u64; 64] = [\n{rows}\n];\n")
}

fn emit(tables: &SliderTables, path: &Path) -> color_eyre::Result<()> {
    let source = format!(
        "// Generated by `magics` at {}\n\n{}\n{}",
        chrono::Utc::now().to_rfc3339(),
        format_multipliers("ROOK_MULTIPLIERS", &tables.table(Slider::Rook).multipliers()),
        format_multipliers("BISHOP_MULTIPLIERS", &tables.table(Slider::Bishop).multipliers()),
    );
    std::fs::write(path, source)
        .wrap_err_with(|| format!("could not write multipliers to {}", path.display()))
}

fn show_position(tables: &SliderTables, fen: &str) -> color_eyre::Result<()> {
    let board = Board::from_fen(fen).wrap_err("could not parse --fen")?;
    println!("{}", board.draw_board());
    println!("{board}\n");

    for sq in BitboardIter(board.occupied()) {
        let (Some(attacks), Some(piece_type), Some(color)) = (
            board.slider_attacks(tables, sq),
            board.piece_at(sq),
            board.color_at(sq),
        ) else {
            continue;
        };
        println!(
            "{} {} on {} attacks {} squares",
            color.to_human(),
            piece_type.to_human(),
            sq_to_algebraic(sq),
            attacks.count_ones()
        );
        println!("{}", draw(attacks));
    }
    Ok(())
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    let config = args.build_config();

    println!("Magic Table Builder");
    println!("===================");
    println!("Time:        {}", chrono::Utc::now().to_rfc3339());
    println!(
        "Multipliers: {}",
        if args.random { "random search" } else { "precomputed" }
    );
    if let Some(seed) = args.seed {
        println!("Seed:        {seed}");
    }
    println!("Parallel:    {}\n", args.parallel);

    let start = Instant::now();
    let tables = SliderTables::build(&config).wrap_err("building magic tables failed")?;
    println!("Built in {:?}", start.elapsed());
    for slider in Slider::ALL {
        report(tables.table(slider));
    }

    if args.verify {
        let start = Instant::now();
        for slider in Slider::ALL {
            if let Some((sq, occupied)) = tables.table(slider).first_mismatch() {
                return Err(eyre!(
                    "{slider} lookup on {} is wrong for occupancy {occupied:#018x}",
                    sq_to_algebraic(sq)
                ));
            }
        }
        println!("\nVerified every occupancy in {:?}", start.elapsed());
    }

    if let Some(path) = &args.emit {
        emit(&tables, path)?;
        println!("\nWrote multipliers to {}", path.display());
    }

    if let Some(fen) = &args.fen {
        println!();
        show_position(&tables, fen)?;
    }

    Ok(())
}
