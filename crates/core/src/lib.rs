#![deny(unsafe_code)]
//! Core of the Gallery Glow fluid-gradient screensaver.
//!
//! Provides the palette catalog (`PaletteId`, `base_colors`), the
//! `PaletteSelector` with injectable randomness (`RandomSource`,
//! `Xorshift64`), the `ColorTransition` cross-fade engine, drifting `Blob`
//! sets, the `Compositor` that emits draw lists, the `Screensaver` session
//! loop, and the static app-icon variant.

pub mod blob;
pub mod canvas;
pub mod color;
pub mod compositor;
pub mod config;
pub mod error;
pub mod icon;
pub mod palette;
pub mod params;
pub mod prng;
pub mod screensaver;
pub mod selector;
pub mod transition;

pub use blob::{Blob, BlobSet, RadiusBasis};
pub use canvas::CanvasSize;
pub use color::{Rgb, Rgba};
pub use compositor::{Compositor, DrawCommand, DrawList, FrameStyle, GradientStop};
pub use config::ScreensaverConfig;
pub use error::GlowError;
pub use palette::{base_colors, ColorSequence, PaletteId};
pub use prng::{RandomSource, ScriptedSource, Xorshift64};
pub use screensaver::{Screensaver, ScreensaverState};
pub use selector::PaletteSelector;
pub use transition::{ease_in_out_quad, ColorTransition, TransitionPhase};
