#![deny(unsafe_code)]
//! Gallery Glow catalog data: the bundled paintings, painting of the day,
//! `galleryglow://` deep links and Top Shelf content.

pub mod catalog;
pub mod deep_link;
pub mod top_shelf;

pub use catalog::{Artist, Gallery, Painting};
pub use deep_link::deep_link_for;
pub use top_shelf::{shelf_paintings, ShelfPainting, TopShelfContent, CATALOG_SHELF};
