//! Home-screen "Top Shelf" content: a featured painting of the day plus
//! the rest of the shelf.
//!
//! Two shelves exist. [`TopShelfContent::from_catalog`] picks a dozen
//! paintings out of the [`Gallery`] and links to them by image name, so its
//! links resolve through [`Gallery::resolve_deep_link`].
//! [`TopShelfContent::build`] lays out a fixed sample shelf of famous works
//! that are not in the catalog.

use crate::catalog::{Gallery, Painting};
use crate::deep_link::deep_link_for;
use serde::Serialize;

pub const FEATURED_SECTION_TITLE: &str = "Painting of the Day";
pub const GALLERY_SECTION_TITLE: &str = "Gallery";

/// One painting on the shelf. Its `id` doubles as the deep-link identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShelfPainting {
    pub id: &'static str,
    pub title: &'static str,
    pub artist_name: &'static str,
    pub year: i32,
    pub image_name: &'static str,
}

impl ShelfPainting {
    const fn new(
        id: &'static str,
        title: &'static str,
        artist_name: &'static str,
        year: i32,
    ) -> Self {
        Self {
            id,
            title,
            artist_name,
            year,
            image_name: id,
        }
    }
}

const SHELF: [ShelfPainting; 8] = [
    ShelfPainting::new("starry_night", "Starry Night", "Vincent van Gogh", 1889),
    ShelfPainting::new("water_lilies", "Water Lilies", "Claude Monet", 1906),
    ShelfPainting::new("mona_lisa", "Mona Lisa", "Leonardo da Vinci", 1503),
    ShelfPainting::new("pearl_earring", "Girl with a Pearl Earring", "Johannes Vermeer", 1665),
    ShelfPainting::new("the_kiss", "The Kiss", "Gustav Klimt", 1908),
    ShelfPainting::new("the_scream", "The Scream", "Edvard Munch", 1893),
    ShelfPainting::new("persistence_memory", "The Persistence of Memory", "Salvador Dalí", 1931),
    ShelfPainting::new("night_watch", "The Night Watch", "Rembrandt van Rijn", 1642),
];

/// The sample shelf, in display order.
pub fn shelf_paintings() -> &'static [ShelfPainting] {
    &SHELF
}

/// Catalog image names shown on the catalog shelf, in display order.
pub const CATALOG_SHELF: [&str; 12] = [
    "Van Gogh/self-portrait_1998.74.5",
    "Van Gogh/farmhouse_in_provence_1970.17.34",
    "Van Gogh/roses_1991.67.1",
    "Monet/the_japanese_footbridge_1992.9.1",
    "Monet/the_bridge_at_argenteuil_1983.1.24",
    "Da Vinci/Mona_Lisa",
    "Da Vinci/Last-Supper-wall-painting-restoration-Leonardo-da-1999",
    "Vermeer/1665_Girl_with_a_Pearl_Earring",
    "Vermeer/View_of_Delft",
    "Michelangelo/Creación_de_Adán",
    "Van Rijn/the_mill_1942.9.62",
    "Klimt/curled_up_girl_on_bed_1974.83.1",
];

/// Prefix of the featured tile's identifier on the catalog shelf.
pub const FEATURED_ID_PREFIX: &str = "potd_";

/// Bundled thumbnail name for a catalog image: folders flattened with `_`.
pub fn thumbnail_name(image_name: &str) -> String {
    image_name.replace('/', "_")
}

/// A tile on the shelf.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShelfItem {
    pub identifier: String,
    pub title: String,
    /// Bundled image resource for the tile.
    pub image_name: String,
    /// Opened when the tile is selected.
    pub display_action: String,
    /// Opened on play/pause; same target as `display_action`.
    pub play_action: String,
}

impl ShelfItem {
    fn new(identifier: String, title: &str, image_name: String, link_id: &str) -> Self {
        let url = deep_link_for(link_id);
        Self {
            identifier,
            title: title.to_string(),
            image_name,
            display_action: url.clone(),
            play_action: url,
        }
    }

    fn from_painting(p: &ShelfPainting) -> Self {
        Self::new(p.id.to_string(), p.title, p.image_name.to_string(), p.id)
    }

    fn from_catalog(p: &Painting, featured: bool) -> Self {
        let identifier = if featured {
            format!("{FEATURED_ID_PREFIX}{}", p.image_name)
        } else {
            p.image_name.clone()
        };
        Self::new(identifier, &p.title, thumbnail_name(&p.image_name), &p.image_name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShelfSection {
    pub title: String,
    pub items: Vec<ShelfItem>,
}

/// Sectioned shelf content, ready to hand to the host or print as JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopShelfContent {
    pub sections: Vec<ShelfSection>,
}

impl TopShelfContent {
    /// Builds the two sections for a 1-based day of the year.
    ///
    /// The featured painting is `shelf[(day - 1) mod len]` (day 0 counts as
    /// day 1); the gallery section holds every other painting in order.
    /// An empty shelf produces no sections.
    pub fn build(shelf: &[ShelfPainting], day_of_year: u32) -> Self {
        if shelf.is_empty() {
            return Self {
                sections: Vec::new(),
            };
        }
        let featured = &shelf[day_index(day_of_year, shelf.len())];
        let gallery = shelf
            .iter()
            .filter(|p| p.id != featured.id)
            .map(ShelfItem::from_painting)
            .collect();
        Self::sectioned(ShelfItem::from_painting(featured), gallery)
    }

    /// Builds the catalog shelf for a 1-based day of the year.
    ///
    /// Entries of [`CATALOG_SHELF`] missing from `gallery` are skipped. The
    /// featured tile's identifier is `potd_<image name>`; every link carries
    /// the percent-encoded image name.
    pub fn from_catalog(gallery: &Gallery, day_of_year: u32) -> Self {
        let shelf: Vec<&Painting> = CATALOG_SHELF
            .iter()
            .filter_map(|name| gallery.find_by_image(name))
            .collect();
        if shelf.is_empty() {
            return Self {
                sections: Vec::new(),
            };
        }
        let featured = shelf[day_index(day_of_year, shelf.len())];
        let rest = shelf
            .iter()
            .filter(|p| p.image_name != featured.image_name)
            .map(|p| ShelfItem::from_catalog(p, false))
            .collect();
        Self::sectioned(ShelfItem::from_catalog(featured, true), rest)
    }

    fn sectioned(featured: ShelfItem, gallery: Vec<ShelfItem>) -> Self {
        Self {
            sections: vec![
                ShelfSection {
                    title: FEATURED_SECTION_TITLE.to_string(),
                    items: vec![featured],
                },
                ShelfSection {
                    title: GALLERY_SECTION_TITLE.to_string(),
                    items: gallery,
                },
            ],
        }
    }

    pub fn featured(&self) -> Option<&ShelfItem> {
        self.sections.first().and_then(|s| s.items.first())
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

// Day 0 counts as day 1.
fn day_index(day_of_year: u32, len: usize) -> usize {
    (day_of_year.max(1) as usize - 1) % len
}
