use super::file_index::FileIndex;
use super::indicators::IndicatorTables;
use log::debug;
use serde::Serialize;

pub const UNKNOWN_LANGUAGE: &str = "unknown";
pub const VANILLA_FRAMEWORK: &str = "vanilla";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabelScore {
    pub label: String,
    pub score: usize,
}

/// Highest score wins; on a tie the label declared first in the table is kept.
/// Returns `None` when nothing scored.
pub fn best_label(scores: &[LabelScore]) -> Option<&str> {
    let mut best: Option<&LabelScore> = None;
    for entry in scores {
        if entry.score == 0 {
            continue;
        }
        match best {
            Some(current) if current.score >= entry.score => {}
            _ => best = Some(entry),
        }
    }
    best.map(|entry| entry.label.as_str())
}

/// One point per (file, indicator) pair where the indicator occurs anywhere in
/// the relative path.
pub fn score_languages(index: &FileIndex, tables: &IndicatorTables) -> Vec<LabelScore> {
    tables
        .languages
        .iter()
        .map(|lang| {
            let score = index
                .paths()
                .map(|path| {
                    lang.indicators
                        .iter()
                        .filter(|indicator| path.contains(indicator.as_str()))
                        .count()
                })
                .sum();
            LabelScore {
                label: lang.label.clone(),
                score,
            }
        })
        .collect()
}

/// One point per marker that exists directly under the root.
pub fn score_frameworks(index: &FileIndex, tables: &IndicatorTables) -> Vec<LabelScore> {
    tables
        .frameworks
        .iter()
        .map(|framework| LabelScore {
            label: framework.label.clone(),
            score: framework
                .indicators
                .iter()
                .filter(|marker| index.root_has(marker))
                .count(),
        })
        .collect()
}

pub fn detect_language(index: &FileIndex, tables: &IndicatorTables) -> String {
    let scores = score_languages(index, tables);
    debug!("Language scores: {:?}", scores);
    best_label(&scores).unwrap_or(UNKNOWN_LANGUAGE).to_string()
}

pub fn detect_framework(index: &FileIndex, tables: &IndicatorTables) -> String {
    let scores = score_frameworks(index, tables);
    debug!("Framework scores: {:?}", scores);
    best_label(&scores).unwrap_or(VANILLA_FRAMEWORK).to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tooling {
    pub install: String,
    pub run: String,
}

/// First tooling rule for `language` whose marker exists under the root.
pub fn detect_tooling(index: &FileIndex, language: &str, tables: &IndicatorTables) -> Option<Tooling> {
    let rule = tables
        .tooling
        .iter()
        .filter(|rule| rule.language == language)
        .find(|rule| index.root_has(&rule.marker))?;

    debug!("Tooling selected by {}: {} / {}", rule.marker, rule.install, rule.run);
    Some(Tooling {
        install: rule.install.clone(),
        run: rule.run.clone(),
    })
}
