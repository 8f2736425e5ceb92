//! Species, spawn-rate and gender table loading

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use pq_core::{Gender, GenderSets, Pokedex, PokemonType, Species};
use strum::IntoEnumIterator;
use tracing::warn;

use crate::delimited::DelimitedTable;
use crate::error::LoadError;

/// Locations of the table files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPaths {
    /// Tab-separated: Dex, Name, Type 1, Type 2
    pub species: PathBuf,
    /// Comma-separated: Dex, Chance
    pub spawn_rates: PathBuf,
    /// Directory holding `male.csv`, `female.csv` and `genderless.csv`
    pub gender_dir: PathBuf,
}

impl DataPaths {
    pub const SPECIES_FILE: &'static str = "pokemondata.csv";
    pub const SPAWN_FILE: &'static str = "spawnrates.csv";

    /// Default file names inside one data directory
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            species: dir.join(Self::SPECIES_FILE),
            spawn_rates: dir.join(Self::SPAWN_FILE),
            gender_dir: dir.to_path_buf(),
        }
    }

    /// Gender list for one gender class
    pub fn gender_file(&self, gender: Gender) -> PathBuf {
        self.gender_dir.join(format!("{gender}.csv"))
    }
}

/// Load every table and build the [`Pokedex`].
///
/// Missing species or spawn files are fatal; a missing gender file leaves
/// that set empty.
pub fn load_pokedex(paths: &DataPaths) -> Result<Pokedex, LoadError> {
    let species = load_species(&paths.species)?;
    let spawn_rates = load_spawn_rates(&paths.spawn_rates)?;
    let genders = load_gender_sets(paths)?;

    Ok(Pokedex::new(species, spawn_rates, genders)?)
}

/// Species rows in file order. Malformed rows are skipped.
pub fn load_species(path: &Path) -> Result<Vec<Species>, LoadError> {
    let table = DelimitedTable::parse(&read(path)?, '\t');
    parse_species(&table, path)
}

/// Parse species rows from an already-read table
pub fn parse_species(table: &DelimitedTable, path: &Path) -> Result<Vec<Species>, LoadError> {
    let dex_col = table.column(path, "Dex")?;
    let name_col = table.column(path, "Name")?;
    let type1_col = table.column(path, "Type 1")?;
    let type2_col = table.column(path, "Type 2")?;

    let mut species = Vec::with_capacity(table.len());
    for row in table.rows() {
        let Ok(dex) = row.get(dex_col).parse::<u16>() else {
            warn!("{:?} line {}: bad dex '{}', skipping", path, row.line, row.get(dex_col));
            continue;
        };
        let Ok(type1) = row.get(type1_col).parse::<PokemonType>() else {
            let raw = row.get(type1_col);
            warn!("{:?} line {}: unknown type '{}', skipping", path, row.line, raw);
            continue;
        };
        let type2 = match row.get(type2_col) {
            "" => None,
            raw => match raw.parse::<PokemonType>() {
                Ok(t) => Some(t),
                Err(_) => {
                    warn!("{:?} line {}: unknown type '{}', skipping", path, row.line, raw);
                    continue;
                }
            },
        };

        species.push(Species::new(dex, row.get(name_col), type1, type2));
    }

    Ok(species)
}

/// Spawn tier label per dex. Malformed rows are skipped.
pub fn load_spawn_rates(path: &Path) -> Result<HashMap<u16, String>, LoadError> {
    let table = DelimitedTable::parse(&read(path)?, ',');
    let dex_col = table.column(path, "Dex")?;
    let chance_col = table.column(path, "Chance")?;

    let mut rates = HashMap::with_capacity(table.len());
    for row in table.rows() {
        let Ok(dex) = row.get(dex_col).parse::<u16>() else {
            warn!("{:?} line {}: bad dex '{}', skipping", path, row.line, row.get(dex_col));
            continue;
        };
        let chance = row.get(chance_col);
        if chance.is_empty() {
            continue;
        }
        rates.insert(dex, chance.to_string());
    }

    Ok(rates)
}

/// Load the three gender lists. A missing file loads as an empty set.
pub fn load_gender_sets(paths: &DataPaths) -> Result<GenderSets, LoadError> {
    let mut genders = GenderSets::new();

    for gender in Gender::iter() {
        let path = paths.gender_file(gender);
        let contents = match std::fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!("{:?} not found, no {} species loaded", path, gender);
                continue;
            }
            Err(source) => return Err(LoadError::Io { path, source }),
        };

        let table = DelimitedTable::parse(&contents, ',');
        let name_col = table.column(&path, "name")?;
        for row in table.rows() {
            let name = row.get(name_col);
            if !name.is_empty() {
                genders.insert(gender, name);
            }
        }
    }

    Ok(genders)
}

fn read(path: &Path) -> Result<String, LoadError> {
    std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}
