//! Magic bitboards for O(1) sliding piece attack lookups.
//!
//! Each square has a "magic number" that maps every relevant occupancy pattern to a slot of
//! that square's segment in a flat attack array: `((occupied & mask) * magic) >> shift`.
//! Several occupancies may share a slot as long as they share the attack set. Multipliers
//! come from [`crate::magic_numbers`] or from a random search, and every one is verified
//! against the ray-walking attacks in [`crate::attacks`] before a table is handed out.

use std::ops::Range;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use crate::attacks::{subsets, Slider};
use crate::error::MagicError;
use crate::magic_numbers::{BISHOP_MULTIPLIERS, ROOK_MULTIPLIERS};

/// Search budget per square. Running out is a bug in the masks, not bad luck.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 1_000_000;

/// Total entries in the rook attack array (sum of 2^bits over all squares)
pub const ROOK_TABLE_SIZE: usize = 102_400;

/// Total entries in the bishop attack array
pub const BISHOP_TABLE_SIZE: usize = 5_248;

/// Lookup metadata for one square
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MagicEntry {
    /// Squares that can block (relevant occupancy)
    pub mask: u64,
    pub multiplier: u64,
    /// Always `64 - mask.count_ones()`
    pub shift: u8,
    /// Start of this square's segment in the shared attack array
    pub offset: usize,
    /// Always `1 << mask.count_ones()`
    pub len: usize,
}

impl MagicEntry {
    /// Slot within this square's segment
    #[inline(always)]
    pub fn index(&self, occupied: u64) -> usize {
        ((occupied & self.mask).wrapping_mul(self.multiplier) >> self.shift) as usize
    }

    #[inline]
    pub fn segment(&self) -> Range<usize> {
        self.offset..self.offset + self.len
    }
}

/// Every occupancy of one square's mask, paired with its true attack set
#[derive(Debug, Clone)]
pub struct SquareSetup {
    pub square: u8,
    pub mask: u64,
    pub shift: u8,
    pub occupancies: Vec<u64>,
    pub attacks: Vec<u64>,
}

impl SquareSetup {
    pub fn new(slider: Slider, square: u8) -> Self {
        let mask = slider.relevant_mask(square);
        let occupancies: Vec<u64> = subsets(mask).collect();
        // A subset of the mask is a complete occupancy here: any square outside the mask
        // lies behind a masked one and can never be the first blocker.
        let attacks = occupancies
            .iter()
            .map(|&occupied| slider.attacks(square, occupied))
            .collect();

        SquareSetup {
            square,
            mask,
            shift: (64 - mask.count_ones()) as u8,
            occupancies,
            attacks,
        }
    }

    /// Size of the segment this square needs
    #[inline]
    pub fn table_len(&self) -> usize {
        self.occupancies.len()
    }

    #[inline(always)]
    fn index(&self, occupied: u64, multiplier: u64) -> usize {
        (occupied.wrapping_mul(multiplier) >> self.shift) as usize
    }
}

/// A verified multiplier and how many candidates it took to find
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MagicSearch {
    pub multiplier: u64,
    pub attempts: u32,
}

/// Random number with few bits set. Sparse multipliers make good magics far more often.
fn sparse_random<R: Rng + ?Sized>(rng: &mut R) -> u64 {
    loop {
        let candidate = rng.gen::<u64>() & rng.gen::<u64>() & rng.gen::<u64>();
        if candidate != 0 {
            return candidate;
        }
    }
}

/// Fill `segment` using `multiplier`, then read every occupancy back.
/// A later write clobbering a different attack set at a shared slot fails the read-back.
fn try_magic(setup: &SquareSetup, segment: &mut [u64], multiplier: u64) -> bool {
    segment.fill(0);
    for (&occupied, &attacks) in setup.occupancies.iter().zip(&setup.attacks) {
        segment[setup.index(occupied, multiplier)] = attacks;
    }
    setup
        .occupancies
        .iter()
        .zip(&setup.attacks)
        .all(|(&occupied, &attacks)| segment[setup.index(occupied, multiplier)] == attacks)
}

/// Find a multiplier for one square and leave the finished segment in `segment`.
///
/// `candidate` is tried first when given, and goes through the same verification as a
/// random one. If it fails the search carries on with random sparse candidates. At most
/// `max_attempts` candidates are tried in total.
pub fn find_magic<R: Rng + ?Sized>(
    slider: Slider,
    setup: &SquareSetup,
    segment: &mut [u64],
    candidate: Option<u64>,
    max_attempts: u32,
    rng: &mut R,
) -> Result<MagicSearch, MagicError> {
    debug_assert_eq!(segment.len(), setup.table_len());

    let candidates = candidate
        .into_iter()
        .chain(std::iter::repeat_with(|| sparse_random(&mut *rng)));

    for (attempts, multiplier) in (1..=max_attempts).zip(candidates) {
        if try_magic(setup, segment, multiplier) {
            return Ok(MagicSearch {
                multiplier,
                attempts,
            });
        }
    }

    Err(MagicError::SearchExhausted {
        slider,
        square: setup.square,
        attempts: max_attempts,
    })
}

/// Where the first candidate for each square comes from
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Multipliers {
    /// The lists in [`crate::magic_numbers`]
    #[default]
    Precomputed,
    /// No hint, search every square from scratch
    Random,
    /// Caller supplied lists, e.g. frozen from an earlier random build
    Custom {
        rook: [u64; 64],
        bishop: [u64; 64],
    },
}

impl Multipliers {
    pub fn for_slider(&self, slider: Slider) -> Option<&[u64; 64]> {
        match (self, slider) {
            (Multipliers::Precomputed, Slider::Rook) => Some(&ROOK_MULTIPLIERS),
            (Multipliers::Precomputed, Slider::Bishop) => Some(&BISHOP_MULTIPLIERS),
            (Multipliers::Random, _) => None,
            (Multipliers::Custom { rook, .. }, Slider::Rook) => Some(rook),
            (Multipliers::Custom { bishop, .. }, Slider::Bishop) => Some(bishop),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildConfig {
    pub multipliers: Multipliers,
    pub max_attempts: u32,
    /// Fixed seed for the random search. `None` seeds from entropy.
    pub seed: Option<u64>,
    /// Search squares on the rayon pool
    pub parallel: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        BuildConfig {
            multipliers: Multipliers::Precomputed,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            seed: None,
            parallel: false,
        }
    }
}

impl BuildConfig {
    pub fn random() -> Self {
        BuildConfig {
            multipliers: Multipliers::Random,
            ..Self::default()
        }
    }

    pub fn with_multipliers(mut self, multipliers: Multipliers) -> Self {
        self.multipliers = multipliers;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Each square gets its own stream, so search order can't change a seeded result
    fn rng_for(&self, slider: Slider, square: u8) -> StdRng {
        match self.seed {
            Some(seed) => {
                let stream = ((slider as u64) << 8) | square as u64;
                StdRng::seed_from_u64(seed ^ stream.wrapping_mul(0x9E37_79B9_7F4A_7C15))
            }
            None => StdRng::from_entropy(),
        }
    }
}

/// Search effort spent building one table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BuildStats {
    /// Candidates tried over all 64 squares
    pub attempts: u64,
    pub hardest_square: u8,
    pub hardest_attempts: u32,
    /// Length of the shared attack array
    pub entries: usize,
}

/// Magic lookup for one slider kind: 64 entries over one shared attack array
#[derive(Debug, Clone)]
pub struct MagicTable {
    slider: Slider,
    entries: [MagicEntry; 64],
    attacks: Box<[u64]>,
    stats: BuildStats,
}

/// Tables are equal when they answer identically from identical bytes; search effort is ignored
impl PartialEq for MagicTable {
    fn eq(&self, other: &Self) -> bool {
        self.slider == other.slider && self.entries == other.entries && self.attacks == other.attacks
    }
}

impl Eq for MagicTable {}

impl MagicTable {
    pub fn build(slider: Slider, config: &BuildConfig) -> Result<Self, MagicError> {
        let setups: Vec<SquareSetup> = (0..64).map(|sq| SquareSetup::new(slider, sq)).collect();

        // Segments are laid out in square order before any search runs
        let mut entries = [MagicEntry::default(); 64];
        let mut offset = 0;
        for (entry, setup) in entries.iter_mut().zip(&setups) {
            *entry = MagicEntry {
                mask: setup.mask,
                multiplier: 0,
                shift: setup.shift,
                offset,
                len: setup.table_len(),
            };
            offset += setup.table_len();
        }

        let mut attacks = vec![0u64; offset].into_boxed_slice();
        let mut segments: Vec<&mut [u64]> = Vec::with_capacity(64);
        let mut rest: &mut [u64] = &mut attacks;
        for setup in &setups {
            let (segment, tail) = std::mem::take(&mut rest).split_at_mut(setup.table_len());
            segments.push(segment);
            rest = tail;
        }

        let hints = config.multipliers.for_slider(slider);
        let search = |(setup, segment): (&SquareSetup, &mut [u64])| {
            let mut rng = config.rng_for(slider, setup.square);
            let candidate = hints.map(|list| list[setup.square as usize]);
            find_magic(slider, setup, segment, candidate, config.max_attempts, &mut rng)
        };

        let found: Vec<MagicSearch> = if config.parallel {
            setups
                .par_iter()
                .zip(segments)
                .map(search)
                .collect::<Result<_, _>>()?
        } else {
            setups
                .iter()
                .zip(segments)
                .map(search)
                .collect::<Result<_, _>>()?
        };

        let mut stats = BuildStats {
            entries: attacks.len(),
            ..BuildStats::default()
        };
        for ((entry, result), sq) in entries.iter_mut().zip(&found).zip(0u8..) {
            entry.multiplier = result.multiplier;
            stats.attempts += u64::from(result.attempts);
            if result.attempts > stats.hardest_attempts {
                stats.hardest_attempts = result.attempts;
                stats.hardest_square = sq;
            }

            debug_assert_eq!(u32::from(entry.shift) + entry.mask.count_ones(), 64);
            debug_assert_eq!(entry.len, 1usize << entry.mask.count_ones());
        }
        debug_assert_eq!(entries[63].segment().end, attacks.len());

        Ok(MagicTable {
            slider,
            entries,
            attacks,
            stats,
        })
    }

    /// Attacks from `sq` for any board occupancy
    #[inline(always)]
    pub fn lookup(&self, sq: u8, occupied: u64) -> u64 {
        let entry = &self.entries[sq as usize];
        self.attacks[entry.offset + entry.index(occupied)]
    }

    pub fn slider(&self) -> Slider {
        self.slider
    }

    pub fn entry(&self, sq: u8) -> &MagicEntry {
        &self.entries[sq as usize]
    }

    pub fn entries(&self) -> &[MagicEntry; 64] {
        &self.entries
    }

    /// The shared attack array all segments live in
    pub fn attack_table(&self) -> &[u64] {
        &self.attacks
    }

    pub fn segment(&self, sq: u8) -> &[u64] {
        &self.attacks[self.entries[sq as usize].segment()]
    }

    pub fn multipliers(&self) -> [u64; 64] {
        self.entries.map(|entry| entry.multiplier)
    }

    pub fn stats(&self) -> BuildStats {
        self.stats
    }

    /// First square and occupancy (subset of the mask) where the lookup disagrees with the
    /// ray-walking attacks, checking every occupancy of every square
    pub fn first_mismatch(&self) -> Option<(u8, u64)> {
        (0..64u8).find_map(|sq| {
            subsets(self.entries[sq as usize].mask)
                .find(|&occupied| self.lookup(sq, occupied) != self.slider.attacks(sq, occupied))
                .map(|occupied| (sq, occupied))
        })
    }
}

/// Rook and bishop tables. Build once, then share by reference: nothing here mutates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SliderTables {
    rook: MagicTable,
    bishop: MagicTable,
}

impl SliderTables {
    /// Tables from the precomputed multipliers
    pub fn new() -> Self {
        Self::build(&BuildConfig::default())
            .expect("precomputed multipliers are valid for every square")
    }

    pub fn build(config: &BuildConfig) -> Result<Self, MagicError> {
        Ok(SliderTables {
            rook: MagicTable::build(Slider::Rook, config)?,
            bishop: MagicTable::build(Slider::Bishop, config)?,
        })
    }

    pub fn table(&self, slider: Slider) -> &MagicTable {
        match slider {
            Slider::Rook => &self.rook,
            Slider::Bishop => &self.bishop,
        }
    }

    #[inline(always)]
    pub fn attacks(&self, slider: Slider, sq: u8, occupied: u64) -> u64 {
        self.table(slider).lookup(sq, occupied)
    }

    #[inline(always)]
    pub fn rook_attacks(&self, sq: u8, occupied: u64) -> u64 {
        self.rook.lookup(sq, occupied)
    }

    #[inline(always)]
    pub fn bishop_attacks(&self, sq: u8, occupied: u64) -> u64 {
        self.bishop.lookup(sq, occupied)
    }

    /// Get queen attacks (combines bishop and rook)
    #[inline(always)]
    pub fn queen_attacks(&self, sq: u8, occupied: u64) -> u64 {
        self.rook_attacks(sq, occupied) | self.bishop_attacks(sq, occupied)
    }

    /// The multipliers in use, as a list that rebuilds these exact tables without searching
    pub fn multipliers(&self) -> Multipliers {
        Multipliers::Custom {
            rook: self.rook.multipliers(),
            bishop: self.bishop.multipliers(),
        }
    }
}

impl Default for SliderTables {
    fn default() -> Self {
        Self::new()
    }
}
