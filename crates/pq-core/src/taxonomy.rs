//! Region, elemental type and gender taxonomy

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// Home region of a species, derived from its national dex number
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
pub enum Region {
    Kanto,
    Johto,
    Hoenn,
    Sinnoh,
    Unova,
    Kalos,
    Alola,
    Galar,
    Paldea,
    #[default]
    Unknown,
}

impl Region {
    /// The nine named regions, in the order quest text is scanned.
    pub const NAMED: [Region; 9] = [
        Region::Kanto,
        Region::Johto,
        Region::Hoenn,
        Region::Sinnoh,
        Region::Unova,
        Region::Kalos,
        Region::Alola,
        Region::Galar,
        Region::Paldea,
    ];

    /// Region for a national dex number (`Unknown` outside 1..=1025)
    pub const fn from_dex(dex: u16) -> Self {
        match dex {
            1..=151 => Region::Kanto,
            152..=251 => Region::Johto,
            252..=386 => Region::Hoenn,
            387..=493 => Region::Sinnoh,
            494..=649 => Region::Unova,
            650..=721 => Region::Kalos,
            722..=809 => Region::Alola,
            810..=905 => Region::Galar,
            906..=1025 => Region::Paldea,
            _ => Region::Unknown,
        }
    }

    /// Display name as it appears in quest text
    pub fn name(&self) -> &'static str {
        self.into()
    }
}

/// Elemental type
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
pub enum PokemonType {
    Normal,
    Fire,
    Water,
    Grass,
    Electric,
    Ice,
    Fighting,
    Poison,
    Ground,
    Flying,
    Psychic,
    Bug,
    Rock,
    Ghost,
    Dragon,
    Dark,
    Steel,
    Fairy,
}

impl PokemonType {
    pub fn name(&self) -> &'static str {
        self.into()
    }
}

/// Gender class used by gender quests
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Gender {
    Male,
    Female,
    Genderless,
}

impl Gender {
    /// Heading used when presenting a gender suggestion track
    pub const fn label(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Genderless => "Genderless",
        }
    }
}

/// Regional form marker carried in a display name ("Alolan Vulpix")
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum RegionalForm {
    Alolan,
    Galarian,
    Hisuian,
    Paldean,
}

impl RegionalForm {
    /// Lowercase token searched for in display names
    pub const fn token(&self) -> &'static str {
        match self {
            RegionalForm::Alolan => "alolan",
            RegionalForm::Galarian => "galarian",
            RegionalForm::Hisuian => "hisuian",
            RegionalForm::Paldean => "paldean",
        }
    }

    /// Find the regional form marker in a display name, if any
    pub fn detect(name: &str) -> Option<Self> {
        use strum::IntoEnumIterator;

        let lower = name.to_lowercase();
        RegionalForm::iter().find(|form| lower.contains(form.token()))
    }
}

/// Check whether a display name denotes a regional variant
pub fn is_regional_variant(name: &str) -> bool {
    RegionalForm::detect(name).is_some()
}
