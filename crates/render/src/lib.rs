#![deny(unsafe_code)]
//! CPU rendering for Gallery Glow draw lists.
//!
//! [`pixel`] turns a `DrawList` from `gallery-glow-core` into RGBA8 bytes;
//! [`snapshot`] (feature `png`) writes them to disk. Neither applies the
//! host-side blur.

pub mod pixel;

#[cfg(feature = "png")]
pub mod snapshot;

pub use pixel::{rasterize, sample_stops};
