//! Color transition engine: cross-fades between two resolved color sequences.
//!
//! Progress is driven from outside as a raw fraction of the transition
//! duration (usually `elapsed / duration`) and eased with an in-out
//! quadratic curve. The engine never schedules anything itself.

use crate::palette::ColorSequence;
use tracing::debug;

/// Default cross-fade duration in seconds.
pub const DEFAULT_TRANSITION_SECS: f64 = 8.0;

/// Ease-in-out quadratic on [0, 1]; input is clamped.
pub fn ease_in_out_quad(t: f64) -> f64 {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}

/// Phase of the transition state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionPhase {
    /// Only `current` is shown.
    Steady,
    /// Fading from `current` toward `next`.
    Transitioning,
}

/// Holds the current and next color sequences and the eased progress
/// between them.
#[derive(Debug, Clone)]
pub struct ColorTransition {
    current: ColorSequence,
    next: ColorSequence,
    progress: f64,
    phase: TransitionPhase,
    generation: u64,
}

impl ColorTransition {
    /// Starts steady on `initial`, with `next` equal to it.
    pub fn new(initial: ColorSequence) -> Self {
        Self {
            next: initial.clone(),
            current: initial,
            progress: 0.0,
            phase: TransitionPhase::Steady,
            generation: 0,
        }
    }

    /// Begins fading toward `next`.
    ///
    /// If a fade is already in flight, the colors on screen right now become
    /// the new baseline so the restart has no visible jump.
    pub fn begin_transition(&mut self, next: ColorSequence) {
        if self.phase == TransitionPhase::Transitioning {
            self.current = self.current_colors();
        }
        self.next = next;
        self.progress = 0.0;
        self.phase = TransitionPhase::Transitioning;
        self.generation += 1;
        debug!(generation = self.generation, "color transition started");
    }

    /// Sets progress from a raw (un-eased) fraction in [0, 1].
    ///
    /// At 1 the fade completes: `current` becomes `next` and the engine is
    /// steady again. Does nothing while steady.
    pub fn advance(&mut self, raw: f64) {
        if self.phase == TransitionPhase::Steady {
            return;
        }
        let raw = if raw.is_nan() { 0.0 } else { raw.clamp(0.0, 1.0) };
        let eased = ease_in_out_quad(raw);
        if raw >= 1.0 {
            self.current = self.next.clone();
            self.progress = 0.0;
            self.phase = TransitionPhase::Steady;
            debug!(generation = self.generation, "color transition finished");
        } else {
            // eased is monotone, so this only guards against callers
            // feeding a smaller raw value mid-cycle
            self.progress = eased.max(self.progress);
        }
    }

    /// The colors to render right now.
    pub fn current_colors(&self) -> ColorSequence {
        match self.phase {
            TransitionPhase::Steady => self.current.clone(),
            TransitionPhase::Transitioning => self.current.lerp(&self.next, self.progress),
        }
    }

    pub fn current(&self) -> &ColorSequence {
        &self.current
    }

    pub fn next(&self) -> &ColorSequence {
        &self.next
    }

    /// Eased progress in [0, 1).
    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn phase(&self) -> TransitionPhase {
        self.phase
    }

    pub fn is_steady(&self) -> bool {
        self.phase == TransitionPhase::Steady
    }

    /// Number of `begin_transition` calls so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}
