//! Species records and the static lookup tables built once at startup

use std::collections::{HashMap, HashSet};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use crate::taxonomy::{Gender, PokemonType, Region};

/// Table construction errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableError {
    #[error("{table} table is missing or empty")]
    MissingTable { table: &'static str },
}

/// A single species row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Species {
    /// National dex number
    pub dex: u16,
    /// Display name, possibly carrying a regional form prefix
    pub name: String,
    pub type1: PokemonType,
    pub type2: Option<PokemonType>,
}

impl Species {
    pub fn new(
        dex: u16,
        name: impl Into<String>,
        type1: PokemonType,
        type2: Option<PokemonType>,
    ) -> Self {
        Self {
            dex,
            name: name.into(),
            type1,
            type2,
        }
    }

    /// Home region, a pure function of the dex number
    pub const fn region(&self) -> Region {
        Region::from_dex(self.dex)
    }

    /// Check whether either type slot is `ty`
    pub fn has_type(&self, ty: PokemonType) -> bool {
        self.type1 == ty || self.type2 == Some(ty)
    }

    /// "Grass/Poison" or "Fire"
    pub fn type_label(&self) -> String {
        match self.type2 {
            Some(t2) => format!("{}/{}", self.type1, t2),
            None => self.type1.to_string(),
        }
    }
}

/// Display names grouped by gender class
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenderSets {
    male: HashSet<String>,
    female: HashSet<String>,
    genderless: HashSet<String>,
}

impl GenderSets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, gender: Gender, name: impl Into<String>) {
        self.set_mut(gender).insert(name.into());
    }

    /// Replace a whole set at once
    pub fn with_set<I, S>(mut self, gender: Gender, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        *self.set_mut(gender) = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn get(&self, gender: Gender) -> &HashSet<String> {
        match gender {
            Gender::Male => &self.male,
            Gender::Female => &self.female,
            Gender::Genderless => &self.genderless,
        }
    }

    pub fn contains(&self, gender: Gender, name: &str) -> bool {
        self.get(gender).contains(name)
    }

    pub fn len(&self, gender: Gender) -> usize {
        self.get(gender).len()
    }

    fn set_mut(&mut self, gender: Gender) -> &mut HashSet<String> {
        match gender {
            Gender::Male => &mut self.male,
            Gender::Female => &mut self.female,
            Gender::Genderless => &mut self.genderless,
        }
    }
}

/// Immutable species, spawn-rate and gender tables.
///
/// Species keep their load order: a later row with an already-seen dex
/// replaces the earlier record in place.
#[derive(Debug, Clone)]
pub struct Pokedex {
    species: IndexMap<u16, Species>,
    spawn_rates: HashMap<u16, String>,
    genders: GenderSets,
}

impl Pokedex {
    /// Build the tables. Fails when the species or spawn table is empty.
    pub fn new<I>(
        species: I,
        spawn_rates: HashMap<u16, String>,
        genders: GenderSets,
    ) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = Species>,
    {
        let mut table: IndexMap<u16, Species> = IndexMap::new();
        for s in species {
            if let Some(prev) = table.insert(s.dex, s) {
                warn!("Duplicate dex #{} ({}), keeping later row", prev.dex, prev.name);
            }
        }

        if table.is_empty() {
            return Err(TableError::MissingTable { table: "species" });
        }
        if spawn_rates.is_empty() {
            return Err(TableError::MissingTable { table: "spawn rate" });
        }

        let orphaned = spawn_rates.keys().filter(|dex| !table.contains_key(*dex)).count();
        if orphaned > 0 {
            warn!("{} spawn rate entries reference unknown dex numbers", orphaned);
        }

        info!(
            "Loaded {} species and {} spawn rates ({} male, {} female, {} genderless)",
            table.len(),
            spawn_rates.len(),
            genders.len(Gender::Male),
            genders.len(Gender::Female),
            genders.len(Gender::Genderless),
        );

        Ok(Self {
            species: table,
            spawn_rates,
            genders,
        })
    }

    /// Species in load order
    pub fn species(&self) -> impl Iterator<Item = &Species> {
        self.species.values()
    }

    pub fn get(&self, dex: u16) -> Option<&Species> {
        self.species.get(&dex)
    }

    /// Spawn tier label for a dex number, if any
    pub fn spawn_tier(&self, dex: u16) -> Option<&str> {
        self.spawn_rates.get(&dex).map(String::as_str)
    }

    pub fn genders(&self) -> &GenderSets {
        &self.genders
    }

    pub fn len(&self) -> usize {
        self.species.len()
    }

    pub fn is_empty(&self) -> bool {
        self.species.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rates(entries: &[(u16, &str)]) -> HashMap<u16, String> {
        entries.iter().map(|(d, r)| (*d, r.to_string())).collect()
    }

    #[test]
    fn test_species_region_and_types() {
        let bulba = Species::new(1, "Bulbasaur", PokemonType::Grass, Some(PokemonType::Poison));
        assert_eq!(bulba.region(), Region::Kanto);
        assert!(bulba.has_type(PokemonType::Poison));
        assert!(!bulba.has_type(PokemonType::Fire));
        assert_eq!(bulba.type_label(), "Grass/Poison");

        let chikorita = Species::new(152, "Chikorita", PokemonType::Grass, None);
        assert_eq!(chikorita.region(), Region::Johto);
        assert_eq!(chikorita.type_label(), "Grass");
    }

    #[test]
    fn test_empty_tables_are_rejected() {
        let err = Pokedex::new(Vec::new(), rates(&[(1, "1/225")]), GenderSets::new()).unwrap_err();
        assert_eq!(err, TableError::MissingTable { table: "species" });

        let species = vec![Species::new(1, "Bulbasaur", PokemonType::Grass, None)];
        let err = Pokedex::new(species, HashMap::new(), GenderSets::new()).unwrap_err();
        assert_eq!(err, TableError::MissingTable { table: "spawn rate" });
    }

    #[test]
    fn test_duplicate_dex_keeps_first_position() {
        let species = vec![
            Species::new(52, "Meowth", PokemonType::Normal, None),
            Species::new(1, "Bulbasaur", PokemonType::Grass, None),
            Species::new(52, "Galarian Meowth", PokemonType::Steel, None),
        ];
        let dex = Pokedex::new(species, rates(&[(1, "1/225")]), GenderSets::new()).unwrap();

        let names: Vec<_> = dex.species().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Galarian Meowth", "Bulbasaur"]);
        assert_eq!(dex.len(), 2);
    }

    #[test]
    fn test_lookups() {
        let species = vec![Species::new(4, "Charmander", PokemonType::Fire, None)];
        let genders = GenderSets::new().with_set(Gender::Male, ["Charmander"]);
        let dex = Pokedex::new(species, rates(&[(4, "1/337"), (9999, "1/225")]), genders).unwrap();

        assert_eq!(dex.spawn_tier(4), Some("1/337"));
        assert_eq!(dex.spawn_tier(5), None);
        assert_eq!(dex.get(4).map(|s| s.name.as_str()), Some("Charmander"));
        assert!(dex.genders().contains(Gender::Male, "Charmander"));
        assert!(!dex.genders().contains(Gender::Female, "Charmander"));
    }
}
