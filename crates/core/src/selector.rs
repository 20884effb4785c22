//! Palette selector: turns a [`PaletteId`] into a fresh [`ColorSequence`].
//!
//! Each roll picks a concrete palette (uniformly for `Random`), nudges every
//! channel of every base color by a small uniform offset, clamps, and then
//! shuffles the order.

use crate::color::Rgb;
use crate::palette::{base_colors, ColorSequence, PaletteId};
use crate::prng::RandomSource;
use tracing::debug;

/// Default half-width of the per-channel jitter range.
pub const DEFAULT_JITTER: f64 = 0.12;

/// Resolves palette ids to jittered, shuffled color sequences.
#[derive(Debug, Clone)]
pub struct PaletteSelector<R> {
    rng: R,
    jitter: f64,
    shuffle: bool,
}

impl<R: RandomSource> PaletteSelector<R> {
    /// A selector with the default jitter (±0.12) and shuffling enabled.
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            jitter: DEFAULT_JITTER,
            shuffle: true,
        }
    }

    /// A selector that returns base colors untouched and in catalog order.
    ///
    /// `Random` still consumes one draw to pick the palette.
    pub fn exact(rng: R) -> Self {
        Self {
            rng,
            jitter: 0.0,
            shuffle: false,
        }
    }

    /// Sets the jitter half-width; negative values are treated as zero.
    pub fn with_jitter(mut self, jitter: f64) -> Self {
        self.jitter = jitter.max(0.0);
        self
    }

    pub fn with_shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle = shuffle;
        self
    }

    pub fn jitter(&self) -> f64 {
        self.jitter
    }

    /// Picks the concrete palette a roll of `id` will use.
    pub fn pick(&mut self, id: PaletteId) -> PaletteId {
        if id.is_random() {
            let concrete = PaletteId::concrete();
            concrete[self.rng.next_usize(concrete.len())]
        } else {
            id
        }
    }

    /// Rolls a new color sequence for `id`.
    pub fn resolve(&mut self, id: PaletteId) -> ColorSequence {
        let picked = self.pick(id);
        // `pick` never returns Random, so the lookup cannot fail.
        let base = base_colors(picked).unwrap_or([Rgb::BLACK; 4]);

        let mut colors: Vec<Rgb> = base.iter().map(|&c| self.jittered(c)).collect();
        if self.shuffle {
            shuffle(&mut colors, &mut self.rng);
        }
        debug!(requested = %id, palette = %picked, "rolled palette");
        ColorSequence::new(colors)
    }

    /// Offsets each channel by a draw from [-jitter, +jitter], then clamps.
    fn jittered(&mut self, c: Rgb) -> Rgb {
        if self.jitter == 0.0 {
            return c;
        }
        let j = self.jitter;
        Rgb::new(
            c.r + self.rng.next_range_inclusive(-j, j),
            c.g + self.rng.next_range_inclusive(-j, j),
            c.b + self.rng.next_range_inclusive(-j, j),
        )
        .clamped()
    }
}

/// Fisher-Yates shuffle driven by `rng`.
pub fn shuffle<T, R: RandomSource + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.next_usize(i + 1);
        items.swap(i, j);
    }
}
