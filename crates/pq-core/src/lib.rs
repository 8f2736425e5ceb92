//! pq-core: Quest classification and species matching
//!
//! Turns free-form event quest lines ("3. Catch 10 Water-type Pokémon in
//! Kanto") into structured descriptors and recommends species from static
//! tables, rarest spawn tier first.
//!
//! The crate does no I/O. Tables are built once (see `pq-data`) and shared
//! read-only; every operation here is synchronous and side-effect free.

pub mod board;
pub mod matcher;
pub mod parser;
pub mod species;
pub mod taxonomy;

pub use board::{
    GenderSuggestion, OptionsError, QuestDetail, QuestReport, SuggestOptions, is_quest_block,
    suggest,
};
pub use matcher::{DEFAULT_LIMIT, MatchEngine, SPAWN_PRIORITIES, Suggestion};
pub use parser::{QuestCategory, QuestDescriptor, parse};
pub use species::{GenderSets, Pokedex, Species, TableError};
pub use taxonomy::{Gender, PokemonType, Region, RegionalForm, is_regional_variant};
