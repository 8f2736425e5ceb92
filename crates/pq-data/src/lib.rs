//! pq-data: Table loading for pq-core
//!
//! Reads the species table (tab separated), the spawn-rate table and the
//! per-gender name lists (comma separated) and builds a [`pq_core::Pokedex`].

pub mod delimited;
pub mod error;
pub mod loader;

pub use error::LoadError;
pub use loader::{
    DataPaths, load_gender_sets, load_pokedex, load_spawn_rates, load_species, parse_species,
};
