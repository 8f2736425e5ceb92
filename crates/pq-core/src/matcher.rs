//! Species matching for classified quests
//!
//! Candidates are taken tier-major: every species in the rarest spawn tier is
//! considered (in table load order) before any species of the next tier.
//! Species outside [`SPAWN_PRIORITIES`] are never suggested, and regional
//! variants are always skipped.

use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::parser::{QuestCategory, QuestDescriptor};
use crate::species::{Pokedex, Species};
use crate::taxonomy::{Gender, PokemonType, Region, is_regional_variant};

/// Spawn tiers eligible for suggestion, rarest first
pub const SPAWN_PRIORITIES: [&str; 3] = ["1/225", "1/337", "1/674"];

/// Default number of suggestions per quest
pub const DEFAULT_LIMIT: usize = 2;

/// A matched species annotated with its spawn tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Suggestion<'a> {
    pub species: &'a Species,
    pub spawn_tier: &'a str,
}

impl Suggestion<'_> {
    pub fn name(&self) -> &str {
        &self.species.name
    }

    pub fn dex(&self) -> u16 {
        self.species.dex
    }
}

impl fmt::Display for Suggestion<'_> {
    /// `Bulbasaur (#001, Grass/Poison, Kanto, 1/225)`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (#{:03}, {}, {}, {})",
            self.species.name,
            self.species.dex,
            self.species.type_label(),
            self.species.region(),
            self.spawn_tier
        )
    }
}

/// Acceptance test derived from a quest descriptor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Criterion {
    Gender(Gender),
    TypeAndRegion(PokemonType, Region),
    Type(PokemonType),
    Region(Region),
    Any,
}

impl Criterion {
    fn for_quest(quest: &QuestDescriptor) -> Option<Self> {
        match quest.category {
            QuestCategory::Gender => quest.gender.map(Criterion::Gender),
            QuestCategory::TypeRegion => Some(match (quest.pokemon_type, quest.region) {
                (Some(ty), Some(region)) => Criterion::TypeAndRegion(ty, region),
                (Some(ty), None) => Criterion::Type(ty),
                (None, Some(region)) => Criterion::Region(region),
                (None, None) => Criterion::Any,
            }),
            QuestCategory::Breed
            | QuestCategory::Release
            | QuestCategory::GenericCatch
            | QuestCategory::Unknown => None,
        }
    }

    fn accepts(&self, species: &Species, dex: &Pokedex) -> bool {
        match *self {
            Criterion::Gender(gender) => dex.genders().contains(gender, &species.name),
            Criterion::TypeAndRegion(ty, region) => {
                species.has_type(ty) && species.region() == region
            }
            Criterion::Type(ty) => species.has_type(ty),
            Criterion::Region(region) => species.region() == region,
            Criterion::Any => true,
        }
    }
}

/// Read-only matcher over a loaded [`Pokedex`]
#[derive(Debug, Clone, Copy)]
pub struct MatchEngine<'a> {
    dex: &'a Pokedex,
}

impl<'a> MatchEngine<'a> {
    pub fn new(dex: &'a Pokedex) -> Self {
        Self { dex }
    }

    pub fn pokedex(&self) -> &'a Pokedex {
        self.dex
    }

    /// Up to `limit` species satisfying the quest, rarest tier first.
    ///
    /// Breed, release, generic catch and unknown quests always yield nothing.
    pub fn find_matches(&self, quest: &QuestDescriptor, limit: usize) -> Vec<Suggestion<'a>> {
        let Some(criterion) = Criterion::for_quest(quest) else {
            return Vec::new();
        };

        let mut matches = Vec::new();

        'tiers: for tier in SPAWN_PRIORITIES {
            for species in self.dex.species() {
                if matches.len() >= limit {
                    break 'tiers;
                }
                if is_regional_variant(&species.name) {
                    continue;
                }
                let Some(spawn_tier) = self.dex.spawn_tier(species.dex) else {
                    continue;
                };
                if spawn_tier != tier || !criterion.accepts(species, self.dex) {
                    continue;
                }
                matches.push(Suggestion {
                    species,
                    spawn_tier,
                });
            }
        }

        debug!(
            category = %quest.category,
            found = matches.len(),
            limit,
            "Matched quest"
        );

        matches
    }
}
