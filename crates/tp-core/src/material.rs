//! What a die is made of.
//!
//! A die's material is a pure function of its [`DieId`]: the id seeds a
//! throwaway generator that picks a category, a substance, and sometimes an
//! adjective. Nothing is stored, so the same die always reads the same.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::die::DieId;

const COMMON: &[&str] = &["plastic", "acrylic"];
const METALS: &[&str] = &[
    "iron", "steel", "bronze", "gold", "silver", "platinum", "mithril",
];
const STONES: &[&str] = &[
    "granite",
    "marble",
    "limestone",
    "obsidian",
    "basalt",
    "jade",
    "serpentine",
];
const WOODS: &[&str] = &["oak", "birch", "mahogany", "teak", "ebony", "pine"];
const GEMS: &[&str] = &["ruby", "sapphire", "emerald", "amethyst", "diamond", "opal"];
const BONES: &[&str] = &[
    "cow bone",
    "pig bone",
    "horse bone",
    "human bone",
    "dragon bone",
];
const OTHER: &[&str] = &["ivory", "glass", "ceramic", "clay", "chitin"];

/// Category draw table. Common plastics sit between every exotic category,
/// so half of all dice are ordinary.
const CATEGORIES: &[&[&str]] = &[
    COMMON, METALS, COMMON, STONES, COMMON, WOODS, COMMON, GEMS, COMMON, BONES, COMMON, OTHER,
];

const ADJECTIVES: &[&str] = &[
    "polished",
    "rough-hewn",
    "engraved",
    "ancient",
    "shimmering",
    "ornate",
    "pristine",
    "primitive",
    "masterwork",
];

/// Chance, out of ten, that a material carries an adjective.
const ADJECTIVE_ODDS: u32 = 2;

/// A die's material, optionally qualified by an adjective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Material {
    /// Descriptive qualifier such as "ancient".
    pub adjective: Option<&'static str>,
    /// The substance itself, such as "obsidian".
    pub substance: &'static str,
}

impl Material {
    /// Whether the rendered phrase starts with a vowel, for choosing "a" or "an".
    pub fn starts_with_vowel(&self) -> bool {
        self.adjective
            .unwrap_or(self.substance)
            .chars()
            .next()
            .is_some_and(|c| matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u'))
    }
}

impl std::fmt::Display for Material {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.adjective {
            Some(adjective) => write!(f, "{adjective} {}", self.substance),
            None => write!(f, "{}", self.substance),
        }
    }
}

/// Derive the material for a die identity.
pub fn material_for(id: DieId) -> Material {
    let mut rng = StdRng::seed_from_u64(id.seed_bits());
    let category = CATEGORIES[rng.random_range(0..CATEGORIES.len())];
    let substance = category[rng.random_range(0..category.len())];
    let adjective = if rng.random_range(0..10) < ADJECTIVE_ODDS {
        Some(ADJECTIVES[rng.random_range(0..ADJECTIVES.len())])
    } else {
        None
    };
    Material {
        adjective,
        substance,
    }
}
