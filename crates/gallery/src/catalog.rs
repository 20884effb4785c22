//! The bundled painting catalog and painting-of-the-day selection.

use crate::deep_link;
use serde::Serialize;
use tracing::debug;

/// A single painting in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Painting {
    pub title: String,
    pub year: i32,
    pub artist_name: String,
    /// Asset identifier, `"<Artist folder>/<file stem>"`. Unique in the catalog.
    pub image_name: String,
    pub description: String,
}

/// An artist and their paintings, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Artist {
    pub name: String,
    pub birth_year: i32,
    pub death_year: Option<i32>,
    pub nationality: String,
    pub paintings: Vec<Painting>,
}

impl Artist {
    /// `"1853 - 1890"`, or `"1950 - Present"` for a living artist.
    pub fn lifespan(&self) -> String {
        match self.death_year {
            Some(death) => format!("{} - {}", self.birth_year, death),
            None => format!("{} - Present", self.birth_year),
        }
    }
}

// (title, year, image name, description)
type Entry = (&'static str, i32, &'static str, &'static str);

const VAN_GOGH: &[Entry] = &[
    ("Self-Portrait", 1889, "Van Gogh/self-portrait_1998.74.5",
        "One of van Gogh's many introspective self-portraits, revealing his intense gaze and bold brushwork."),
    ("Farmhouse in Provence", 1888, "Van Gogh/farmhouse_in_provence_1970.17.34",
        "A vibrant depiction of rural life in southern France during van Gogh's time in Arles."),
    ("Flower Beds in Holland", 1883, "Van Gogh/flower_beds_in_holland_1983.1.21",
        "An early work showing the colorful tulip fields of the Netherlands."),
    ("Roses", 1890, "Van Gogh/roses_1991.67.1",
        "A lush still life painted during van Gogh's final months at Saint-Rémy."),
    ("Seascape at Port-en-Bessin", 1888, "Van Gogh/seascape_at_port-en-bessin_normandy_1972.9.21",
        "A coastal scene capturing the movement of the sea and sky."),
    ("Still Life of Oranges and Lemons with Blue Gloves", 1889,
        "Van Gogh/still_life_of_oranges_and_lemons_with_blue_gloves_2014.18.13",
        "A colorful still life showcasing van Gogh's mastery of complementary colors."),
    ("The Zandmennik House", 1879, "Van Gogh/the_zandmennik_house_1991.217.66",
        "An early drawing from van Gogh's time in the Borinage mining region."),
];

const MONET: &[Entry] = &[
    ("The Japanese Footbridge", 1899, "Monet/the_japanese_footbridge_1992.9.1",
        "The iconic green footbridge over Monet's water lily pond at Giverny."),
    ("The Artist's Garden in Argenteuil", 1873,
        "Monet/the_artist_s_garden_in_argenteuil_a_corner_of_the_garden_with_dahlias_1991.27.1",
        "A corner of Monet's garden with dahlias in full bloom."),
    ("The Bridge at Argenteuil", 1874, "Monet/the_bridge_at_argenteuil_1983.1.24",
        "A sunlit view of the bridge at Argenteuil with sailboats on the Seine."),
    ("Waterloo Bridge, London at Sunset", 1904, "Monet/waterloo_bridge_london_at_sunset_1983.1.28",
        "Part of Monet's London series, capturing the atmospheric effects of fog and light."),
];

const DA_VINCI: &[Entry] = &[
    ("Mona Lisa", 1503, "Da Vinci/Mona_Lisa",
        "The world's most famous portrait, known for her enigmatic smile."),
    ("The Last Supper", 1498, "Da Vinci/Last-Supper-wall-painting-restoration-Leonardo-da-1999",
        "A mural depicting Jesus and his disciples at the moment Jesus announces betrayal."),
    ("The Virgin and Child with Saint Anne", 1510,
        "Da Vinci/After-restoration-The-Virgin-Child-Jesus-and-Saint-Anne-Leonardo-da-Vinci-Louvre-Paris",
        "A masterwork showing three generations: Saint Anne, the Virgin Mary, and the Christ Child."),
];

const VERMEER: &[Entry] = &[
    ("Girl with a Pearl Earring", 1665, "Vermeer/1665_Girl_with_a_Pearl_Earring",
        "Often called the 'Mona Lisa of the North', a captivating portrait of a girl."),
    ("View of Delft", 1661, "Vermeer/View_of_Delft",
        "A cityscape of Vermeer's hometown, celebrated for its luminous atmosphere."),
];

const REMBRANDT: &[Entry] = &[
    ("The Mill", 1645, "Van Rijn/the_mill_1942.9.62",
        "A dramatic landscape featuring a windmill silhouetted against a stormy sky."),
    ("Philemon and Baucis", 1658, "Van Rijn/philemon_and_baucis_1942.9.65",
        "A mythological scene depicting the hospitable elderly couple visited by the gods."),
    ("The Circumcision", 1661, "Van Rijn/the_circumcision_1942.9.60",
        "A religious scene rendered with Rembrandt's characteristic use of light and shadow."),
];

const KLIMT: &[Entry] = &[
    ("Curled Up Girl on Bed", 1917, "Klimt/curled_up_girl_on_bed_1974.83.1",
        "An intimate drawing showing Klimt's mastery of the human form."),
];

const MUNCH: &[Entry] = &[
    ("Telthusbakken with Gamle Aker Church", 1880,
        "Munch/Edvard_Munch_-_Telthusbakken_with_Gamle_Aker_Church_(1880)",
        "An early landscape showing the old Aker church in Oslo."),
    ("Horse and Wagon in front of Farm Buildings", 1882,
        "Munch/Horse_and_Wagon_in_front_of_Farm_Buildings_Munch",
        "A rural scene from Munch's early naturalist period."),
    ("Linde Frieze", 1904, "Munch/Linde_Frieze",
        "Part of a decorative frieze commissioned for Dr. Max Linde's home."),
];

const MICHELANGELO: &[Entry] = &[
    ("The Creation of Adam", 1512, "Michelangelo/Creación_de_Adán",
        "The iconic Sistine Chapel fresco depicting God giving life to the first man."),
];

// (name, birth, death, nationality, paintings)
const ARTISTS: &[(&str, i32, Option<i32>, &str, &[Entry])] = &[
    ("Vincent van Gogh", 1853, Some(1890), "Dutch", VAN_GOGH),
    ("Claude Monet", 1840, Some(1926), "French", MONET),
    ("Leonardo da Vinci", 1452, Some(1519), "Italian", DA_VINCI),
    ("Johannes Vermeer", 1632, Some(1675), "Dutch", VERMEER),
    ("Rembrandt van Rijn", 1606, Some(1669), "Dutch", REMBRANDT),
    ("Gustav Klimt", 1862, Some(1918), "Austrian", KLIMT),
    ("Edvard Munch", 1863, Some(1944), "Norwegian", MUNCH),
    ("Michelangelo", 1475, Some(1564), "Italian", MICHELANGELO),
];

/// The full catalog. Built once by the caller and passed around; there is
/// no global instance.
#[derive(Debug, Clone)]
pub struct Gallery {
    artists: Vec<Artist>,
    paintings: Vec<Painting>,
}

impl Default for Gallery {
    fn default() -> Self {
        Self::new()
    }
}

impl Gallery {
    /// Builds the bundled catalog: eight artists, 24 paintings.
    pub fn new() -> Self {
        let artists = ARTISTS
            .iter()
            .map(|&(name, birth_year, death_year, nationality, entries)| Artist {
                name: name.to_string(),
                birth_year,
                death_year,
                nationality: nationality.to_string(),
                paintings: entries
                    .iter()
                    .map(|&(title, year, image_name, description)| Painting {
                        title: title.to_string(),
                        year,
                        artist_name: name.to_string(),
                        image_name: image_name.to_string(),
                        description: description.to_string(),
                    })
                    .collect(),
            })
            .collect();
        Self::from_artists(artists)
    }

    /// Builds a catalog from arbitrary artists; paintings are flattened in
    /// artist order.
    pub fn from_artists(artists: Vec<Artist>) -> Self {
        let paintings = artists
            .iter()
            .flat_map(|a| a.paintings.iter().cloned())
            .collect();
        Self { artists, paintings }
    }

    pub fn artists(&self) -> &[Artist] {
        &self.artists
    }

    /// Every painting, in artist order.
    pub fn all_paintings(&self) -> &[Painting] {
        &self.paintings
    }

    pub fn find_artist(&self, name: &str) -> Option<&Artist> {
        self.artists.iter().find(|a| a.name == name)
    }

    pub fn find_by_image(&self, image_name: &str) -> Option<&Painting> {
        self.paintings.iter().find(|p| p.image_name == image_name)
    }

    /// Deterministic pick for a 1-based day of the year:
    /// `all[(day - 1) mod len]`. Days below 1 count as day 1.
    pub fn painting_of_the_day(&self, day_of_year: u32) -> Option<&Painting> {
        if self.paintings.is_empty() {
            return None;
        }
        let day = day_of_year.max(1) as usize;
        self.paintings.get((day - 1) % self.paintings.len())
    }

    /// Resolves a `galleryglow://painting/<id>` URL against the catalog.
    /// Malformed or unknown links yield `None`.
    pub fn resolve_deep_link(&self, url: &str) -> Option<&Painting> {
        let Some(id) = deep_link::parse(url) else {
            debug!(url, "ignoring malformed deep link");
            return None;
        };
        let painting = self.find_by_image(&id);
        if painting.is_none() {
            debug!(%id, "deep link names no painting");
        }
        painting
    }
}
