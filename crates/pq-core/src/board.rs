//! Quest block processing: line filtering, per-line matching and aggregation
//! into a summary list, per-quest details and a separate gender track.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::matcher::{DEFAULT_LIMIT, MatchEngine};
use crate::parser::{self, QuestCategory};
use crate::taxonomy::Gender;

/// Allowed per-quest suggestion counts
pub const MIN_COUNT: usize = 1;
pub const MAX_COUNT: usize = 5;

/// Most quest details a presentation page shows
pub const MAX_DETAILS: usize = 25;

/// Section headings that mark a quest list
const QUEST_HEADINGS: [&str; 4] = ["quest", "task", "security", "challenge"];

static NUMBERED_LINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.").expect("numbered line pattern is valid"));
static QUEST_BODY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+\..*[Cc]atch").expect("quest body pattern is valid"));
static EMOJI_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<:[^>]+>").expect("emoji pattern is valid"));
static PROGRESS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`\d+/\d+`").expect("progress pattern is valid"));

#[derive(Debug, Error, PartialEq, Eq)]
pub enum OptionsError {
    #[error("count must be between {min} and {max}, got {count}")]
    CountOutOfRange { count: usize, min: usize, max: usize },
}

/// Per-block suggestion settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuggestOptions {
    /// Suggestions per quest line
    pub count: usize,
    /// Whether gender quests are processed at all
    pub include_gender: bool,
}

impl Default for SuggestOptions {
    fn default() -> Self {
        Self {
            count: DEFAULT_LIMIT,
            include_gender: true,
        }
    }
}

impl SuggestOptions {
    pub fn new(count: usize, include_gender: bool) -> Result<Self, OptionsError> {
        if !(MIN_COUNT..=MAX_COUNT).contains(&count) {
            return Err(OptionsError::CountOutOfRange {
                count,
                min: MIN_COUNT,
                max: MAX_COUNT,
            });
        }
        Ok(Self {
            count,
            include_gender,
        })
    }
}

/// Suggestions for one quest line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestDetail {
    /// Quest text with markup stripped
    pub quest_text: String,
    pub category: QuestCategory,
    /// Formatted suggestions, best first
    pub suggestions: Vec<String>,
}

/// Suggestions for a gender quest, kept apart from the summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenderSuggestion {
    pub quest_text: String,
    pub gender: Gender,
    /// Comma-separated species names
    pub pokemon: String,
}

/// Aggregated suggestions for a whole quest block
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct QuestReport {
    /// Distinct non-gender species names, sorted
    pub summary: Vec<String>,
    pub details: Vec<QuestDetail>,
    pub gender: Vec<GenderSuggestion>,
    /// Numbered lines that went through the parser
    pub quests_parsed: usize,
}

impl QuestReport {
    pub fn is_empty(&self) -> bool {
        self.details.is_empty()
    }

    /// Details trimmed to one presentation page
    pub fn visible_details(&self) -> &[QuestDetail] {
        &self.details[..self.details.len().min(MAX_DETAILS)]
    }

    /// Footer for a truncated detail page
    pub fn truncation_note(&self) -> Option<String> {
        (self.details.len() > MAX_DETAILS)
            .then(|| format!("Showing {} of {} quests", MAX_DETAILS, self.details.len()))
    }
}

/// Check whether a line is a numbered quest line ("3. Catch ...")
pub fn is_quest_line(line: &str) -> bool {
    let line = line.trim();
    !line.is_empty() && NUMBERED_LINE_RE.is_match(line)
}

/// Numbered quest lines of a block, in order
pub fn quest_lines(block: &str) -> impl Iterator<Item = &str> {
    block.lines().filter(|line| is_quest_line(line))
}

/// Check whether a titled section holds a catch quest list
pub fn is_quest_section(heading: &str, body: &str) -> bool {
    let heading = heading.to_lowercase();
    QUEST_HEADINGS.iter().any(|k| heading.contains(k)) && QUEST_BODY_RE.is_match(body)
}

/// Check whether a pasted block looks like a quest list: its first
/// non-empty line is a quest heading and the block has a numbered catch line
pub fn is_quest_block(block: &str) -> bool {
    block
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .is_some_and(|heading| is_quest_section(heading, block))
}

/// Strip custom emoji markup and progress counters from quest text
pub fn clean_quest_text(text: &str) -> String {
    let text = EMOJI_RE.replace_all(text, "");
    PROGRESS_RE.replace_all(&text, "").trim().to_string()
}

/// Classify and match every numbered line of a quest block
pub fn suggest(engine: &MatchEngine<'_>, block: &str, options: &SuggestOptions) -> QuestReport {
    let mut report = QuestReport::default();
    let mut summary = BTreeSet::new();

    for line in quest_lines(block) {
        report.quests_parsed += 1;
        let quest = parser::parse(line);

        if quest.category == QuestCategory::Gender && !options.include_gender {
            continue;
        }

        let matches = engine.find_matches(&quest, options.count);
        if matches.is_empty() {
            continue;
        }

        let quest_text = clean_quest_text(&quest.raw_text);

        match quest.gender {
            Some(gender) if quest.category == QuestCategory::Gender => {
                let pokemon = matches
                    .iter()
                    .map(|m| m.name())
                    .collect::<Vec<_>>()
                    .join(", ");
                report.gender.push(GenderSuggestion {
                    quest_text: quest_text.clone(),
                    gender,
                    pokemon,
                });
            }
            _ => summary.extend(matches.iter().map(|m| m.name().to_string())),
        }

        report.details.push(QuestDetail {
            quest_text,
            category: quest.category,
            suggestions: matches.iter().map(ToString::to_string).collect(),
        });
    }

    report.summary = summary.into_iter().collect();

    debug!(
        parsed = report.quests_parsed,
        with_suggestions = report.details.len(),
        "Processed quest block"
    );

    report
}
