//! Resources, items, kingdoms, and the corners that carry them.
//!
//! This module contains:
//! - `Resource`: the four natural resources shown on card corners
//! - `Item`: the three items (feather, ink, vellum)
//! - `Kingdom`: the four card factions, each tied to one resource
//! - `CardCorner`: what a present corner shows

use serde::{Deserialize, Serialize};
use std::fmt;

/// Natural resources
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Resource {
    /// Mushrooms - red cards
    Fungi,
    /// Leaves - green cards
    Plant,
    /// Wolves - blue cards
    Animal,
    /// Butterflies - purple cards
    Insect,
}

impl Resource {
    /// All resources, in counter order
    pub const ALL: [Resource; 4] = [
        Resource::Fungi,
        Resource::Plant,
        Resource::Animal,
        Resource::Insect,
    ];

    /// Position of this resource inside a `ResourcesCounter`
    pub const fn index(self) -> usize {
        match self {
            Resource::Fungi => 0,
            Resource::Plant => 1,
            Resource::Animal => 2,
            Resource::Insect => 3,
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Resource::Fungi => "fungi",
            Resource::Plant => "plant",
            Resource::Animal => "animal",
            Resource::Insect => "insect",
        };
        f.write_str(name)
    }
}

/// Items
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Item {
    Feather,
    Ink,
    Vellum,
}

impl Item {
    /// All items, in counter order
    pub const ALL: [Item; 3] = [Item::Feather, Item::Ink, Item::Vellum];

    /// Position of this item inside an `ItemsCounter`
    pub const fn index(self) -> usize {
        match self {
            Item::Feather => 0,
            Item::Ink => 1,
            Item::Vellum => 2,
        }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Item::Feather => "feather",
            Item::Ink => "ink",
            Item::Vellum => "vellum",
        };
        f.write_str(name)
    }
}

/// Card faction. Every resource and gold card belongs to exactly one kingdom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Kingdom {
    Fungi,
    Plant,
    Animal,
    Insect,
}

impl Kingdom {
    /// All kingdoms, in catalog order
    pub const ALL: [Kingdom; 4] = [
        Kingdom::Fungi,
        Kingdom::Plant,
        Kingdom::Animal,
        Kingdom::Insect,
    ];

    /// The resource printed on the back of this kingdom's cards
    pub const fn resource(self) -> Resource {
        match self {
            Kingdom::Fungi => Resource::Fungi,
            Kingdom::Plant => Resource::Plant,
            Kingdom::Animal => Resource::Animal,
            Kingdom::Insect => Resource::Insect,
        }
    }

    /// Card border color, as an RGB code
    pub fn color_code(self) -> u32 {
        match self {
            Kingdom::Fungi => 0xC0392B,
            Kingdom::Plant => 0x27AE60,
            Kingdom::Animal => 0x2E86C1,
            Kingdom::Insect => 0x8E44AD,
        }
    }
}

impl fmt::Display for Kingdom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.resource(), f)
    }
}

/// What a present corner shows.
///
/// An absent corner is modelled as `None` on the face, never as a variant here:
/// it cannot be covered, linked to, or counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardCorner {
    /// Visible but empty
    Blank,
    /// Shows a resource symbol
    Resource(Resource),
    /// Shows an item symbol
    Item(Item),
}

impl CardCorner {
    /// The resource on this corner, if any
    pub const fn resource(self) -> Option<Resource> {
        match self {
            CardCorner::Resource(r) => Some(r),
            _ => None,
        }
    }

    /// The item on this corner, if any
    pub const fn item(self) -> Option<Item> {
        match self {
            CardCorner::Item(i) => Some(i),
            _ => None,
        }
    }
}
