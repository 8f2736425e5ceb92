//! Quest line classification
//!
//! Each numbered quest line is reduced to a [`QuestDescriptor`] by an ordered
//! keyword rule list, then (if no keyword rule fired) by region and type
//! constraint detection. The first matching rule wins.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use strum::{Display, IntoEnumIterator};
use tracing::debug;

use crate::taxonomy::{Gender, PokemonType, Region};

/// Quest category, mutually exclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum QuestCategory {
    Breed,
    Release,
    Gender,
    TypeRegion,
    GenericCatch,
    Unknown,
}

/// Structured result of classifying one quest line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestDescriptor {
    /// Original line, kept for display
    pub raw_text: String,
    pub category: QuestCategory,
    /// Target count, 0 when the line has none
    pub count: u32,
    pub region: Option<Region>,
    pub pokemon_type: Option<PokemonType>,
    /// Only set for `QuestCategory::Gender`
    pub gender: Option<Gender>,
}

impl QuestDescriptor {
    /// Whether the matcher can act on this quest at all
    pub fn is_actionable(&self) -> bool {
        matches!(
            self.category,
            QuestCategory::Gender | QuestCategory::TypeRegion
        )
    }
}

/// Outcome of a keyword rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Classification {
    Category(QuestCategory),
    Gender(Gender),
}

/// Keyword rules, checked in order against the lowercased line.
/// "female" must precede "male" since one contains the other.
const KEYWORD_RULES: &[(&[&str], Classification)] = &[
    (&["breed"], Classification::Category(QuestCategory::Breed)),
    (&["release"], Classification::Category(QuestCategory::Release)),
    (&["female"], Classification::Gender(Gender::Female)),
    (&["male"], Classification::Gender(Gender::Male)),
    (
        &["unknown gender", "genderless"],
        Classification::Gender(Gender::Genderless),
    ),
];

/// Fallback keyword when no constraint is found
const GENERIC_CATCH_KEYWORD: &str = "catch";

/// ASCII digits only, so every match parses as `u32` unless it overflows
static COUNT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:catch|release|breed)\s+([0-9]+)").expect("count pattern is valid")
});

/// Classify one line of quest text. Never fails; unrecognised lines come
/// back as `QuestCategory::Unknown`.
pub fn parse(line: &str) -> QuestDescriptor {
    let lower = line.to_lowercase();
    let count = extract_count(line);

    let mut quest = QuestDescriptor {
        raw_text: line.to_string(),
        category: QuestCategory::Unknown,
        count,
        region: None,
        pokemon_type: None,
        gender: None,
    };

    let keyword_hit = KEYWORD_RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| lower.contains(k)))
        .map(|(_, class)| *class);

    match keyword_hit {
        Some(Classification::Category(category)) => quest.category = category,
        Some(Classification::Gender(gender)) => {
            quest.category = QuestCategory::Gender;
            quest.gender = Some(gender);
        }
        None => {
            quest.region = detect_region(line);
            quest.pokemon_type = detect_type(line, &lower);
            quest.category = if quest.region.is_some() || quest.pokemon_type.is_some() {
                QuestCategory::TypeRegion
            } else if lower.contains(GENERIC_CATCH_KEYWORD) {
                QuestCategory::GenericCatch
            } else {
                QuestCategory::Unknown
            };
        }
    }

    debug!(
        category = %quest.category,
        count = quest.count,
        region = ?quest.region,
        pokemon_type = ?quest.pokemon_type,
        gender = ?quest.gender,
        "Classified quest line"
    );

    quest
}

/// First `(Catch|Release|Breed) <n>` count in the line, or 0
pub fn extract_count(line: &str) -> u32 {
    COUNT_RE
        .captures(line)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0)
}

/// First region (in fixed region order) whose exact name appears in the line
fn detect_region(line: &str) -> Option<Region> {
    Region::NAMED
        .iter()
        .copied()
        .find(|region| line.contains(region.name()))
}

/// First type (in enumeration order) named anywhere in the line
fn detect_type(line: &str, lower: &str) -> Option<PokemonType> {
    PokemonType::iter().find(|ty| {
        let name = ty.name();
        lower.contains(&name.to_lowercase()) || line.contains(&format!("{name}-type"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breed_line() {
        let q = parse("Breed 5 Pokémon");
        assert_eq!(q.category, QuestCategory::Breed);
        assert_eq!(q.count, 5);
        assert_eq!(q.region, None);
        assert_eq!(q.pokemon_type, None);
    }

    #[test]
    fn test_release_line() {
        let q = parse("2. Release 20 Pokémon");
        assert_eq!(q.category, QuestCategory::Release);
        assert_eq!(q.count, 20);
    }

    #[test]
    fn test_breed_precedes_release() {
        let q = parse("Breed 3 and release them");
        assert_eq!(q.category, QuestCategory::Breed);
    }

    #[test]
    fn test_female_quest() {
        let q = parse("Catch 3 Female Pokémon");
        assert_eq!(q.category, QuestCategory::Gender);
        assert_eq!(q.gender, Some(Gender::Female));
        assert_eq!(q.count, 3);
    }

    #[test]
    fn test_gender_ignores_region_and_type() {
        let q = parse("Catch 3 Female Water-type Pokémon in Kanto");
        assert_eq!(q.category, QuestCategory::Gender);
        assert_eq!(q.gender, Some(Gender::Female));
        assert_eq!(q.region, None);
        assert_eq!(q.pokemon_type, None);
    }

    #[test]
    fn test_male_quest() {
        let q = parse("4. Catch 7 Male Pokémon");
        assert_eq!(q.category, QuestCategory::Gender);
        assert_eq!(q.gender, Some(Gender::Male));
        assert_eq!(q.count, 7);
    }

    #[test]
    fn test_genderless_quest() {
        for line in ["Catch 2 Pokémon of Unknown Gender", "Catch 2 Genderless Pokémon"] {
            let q = parse(line);
            assert_eq!(q.category, QuestCategory::Gender, "{line}");
            assert_eq!(q.gender, Some(Gender::Genderless), "{line}");
        }
    }

    #[test]
    fn test_type_and_region() {
        let q = parse("Catch 10 Water-type Pokémon in Kanto");
        assert_eq!(q.category, QuestCategory::TypeRegion);
        assert_eq!(q.pokemon_type, Some(PokemonType::Water));
        assert_eq!(q.region, Some(Region::Kanto));
        assert_eq!(q.count, 10);
        assert_eq!(q.gender, None);
    }

    #[test]
    fn test_region_only() {
        let q = parse("Catch 5 Pokémon from Johto");
        assert_eq!(q.category, QuestCategory::TypeRegion);
        assert_eq!(q.region, Some(Region::Johto));
        assert_eq!(q.pokemon_type, None);
    }

    #[test]
    fn test_region_is_case_sensitive() {
        let q = parse("Catch 5 Pokémon from johto");
        assert_eq!(q.region, None);
        assert_eq!(q.category, QuestCategory::GenericCatch);
    }

    #[test]
    fn test_two_regions_keep_enumeration_order() {
        let q = parse("Catch 4 Pokémon from Galar or Hoenn");
        assert_eq!(q.region, Some(Region::Hoenn));
    }

    #[test]
    fn test_type_is_case_insensitive() {
        let q = parse("Catch 6 dragon Pokémon");
        assert_eq!(q.category, QuestCategory::TypeRegion);
        assert_eq!(q.pokemon_type, Some(PokemonType::Dragon));
    }

    #[test]
    fn test_type_substring_heuristic_is_kept() {
        // "price" contains "ice"
        let q = parse("Catch 1 Pokémon at full price");
        assert_eq!(q.pokemon_type, Some(PokemonType::Ice));
    }

    #[test]
    fn test_generic_catch_and_unknown() {
        let q = parse("1. Catch 30 Pokémon");
        assert_eq!(q.category, QuestCategory::GenericCatch);
        assert_eq!(q.count, 30);

        let q = parse("3. Hatch 2 Eggs");
        assert_eq!(q.category, QuestCategory::Unknown);
        assert_eq!(q.count, 0);
        assert!(!q.is_actionable());
    }

    #[test]
    fn test_count_absent_or_oversized() {
        assert_eq!(extract_count("Catch some Pokémon"), 0);
        assert_eq!(extract_count("catch   12 things"), 12);
        assert_eq!(extract_count("Catch 99999999999999999999 Pokémon"), 0);
        assert_eq!(extract_count("Use 3 items then Catch 4"), 4);
    }

    #[test]
    fn test_count_takes_ascii_digits_only() {
        assert_eq!(extract_count("Catch \u{ff13} Pokémon"), 0);
        assert_eq!(extract_count("Catch \u{0663} Pokémon"), 0);
        assert_eq!(extract_count("Catch \u{ff13} Pokémon, then Breed 2"), 2);

        let q = parse("Catch \u{ff13} Water-type Pokémon");
        assert_eq!(q.count, 0);
        assert_eq!(q.category, QuestCategory::TypeRegion);
    }

    #[test]
    fn test_raw_text_is_preserved() {
        let line = "5. Catch 3 Fire-type Pokémon `0/3`";
        assert_eq!(parse(line).raw_text, line);
    }

    #[test]
    fn test_descriptor_serializes_snake_case() {
        let q = parse("Catch 10 Water-type Pokémon in Kanto");
        let json = serde_json::to_string(&q).unwrap();
        assert!(json.contains(r#""category":"type_region""#));
        assert!(json.contains(r#""pokemon_type":"Water""#));
        assert!(json.contains(r#""region":"Kanto""#));
    }
}
