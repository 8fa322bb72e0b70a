use super::file_index::FileIndex;
use super::indicators::IndicatorTables;
use super::key_files::KeyFiles;
use log::{debug, warn};
use std::path::PathBuf;

/// Outcome of looking for a README-like file under the template root.
#[derive(Debug)]
pub enum ReadmeHint {
    /// Lowercased README text.
    Found { path: PathBuf, text: String },
    Missing,
    Unreadable { path: PathBuf, error: std::io::Error },
}

impl ReadmeHint {
    pub fn text(&self) -> Option<&str> {
        match self {
            ReadmeHint::Found { text, .. } => Some(text.as_str()),
            _ => None,
        }
    }
}

/// The first candidate that exists is the only one read.
pub fn read_readme(index: &FileIndex, tables: &IndicatorTables) -> ReadmeHint {
    let Some(path) = tables
        .readme_files
        .iter()
        .map(|name| index.root().join(name))
        .find(|path| path.exists())
    else {
        return ReadmeHint::Missing;
    };

    match std::fs::read_to_string(&path) {
        Ok(text) => ReadmeHint::Found {
            path,
            text: text.to_lowercase(),
        },
        Err(error) => ReadmeHint::Unreadable { path, error },
    }
}

pub fn purpose_from_readme(text: &str, tables: &IndicatorTables) -> Option<String> {
    tables
        .purpose_keywords
        .iter()
        .find(|rule| rule.matches(text))
        .map(|rule| rule.label.clone())
}

pub fn purpose_from_framework(framework: &str, key_files: &KeyFiles, tables: &IndicatorTables) -> String {
    tables
        .framework_purposes
        .iter()
        .filter(|rule| rule.framework == framework)
        .find(|rule| rule.requires.map_or(true, |category| key_files.has(category)))
        .map(|rule| rule.label.clone())
        .unwrap_or_else(|| format!("{} application", framework))
}

pub fn detect_purpose(
    readme: &ReadmeHint,
    framework: &str,
    key_files: &KeyFiles,
    tables: &IndicatorTables,
) -> String {
    if let ReadmeHint::Unreadable { path, error } = readme {
        warn!("Ignoring unreadable {}: {}", path.display(), error);
    }

    if let Some(label) = readme.text().and_then(|text| purpose_from_readme(text, tables)) {
        debug!("Purpose from README: {}", label);
        return label;
    }

    let label = purpose_from_framework(framework, key_files, tables);
    debug!("Purpose from framework {}: {}", framework, label);
    label
}
