pub mod file_index;
pub mod indicators;
pub mod key_files;
pub mod purpose;
pub mod stack_detector;

pub use file_index::{FileIndex, IndexedFile};
pub use indicators::{Category, IndicatorTables};
pub use key_files::KeyFiles;
pub use purpose::ReadmeHint;
pub use stack_detector::{LabelScore, Tooling};

use crate::error::{Result, ScanError};
use crate::generator::render_summary;
use log::info;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Everything derived from one scan of a template directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateProfile {
    pub root: PathBuf,
    pub file_count: usize,
    pub language: String,
    pub framework: String,
    pub tooling: Option<Tooling>,
    pub key_files: KeyFiles,
    pub patterns: Vec<String>,
    pub purpose: String,
}

/// The template root must exist and be a directory.
pub fn validate_root(root: &Path) -> Result<()> {
    if !root.exists() {
        return Err(ScanError::missing(root));
    }
    if !root.is_dir() {
        return Err(ScanError::not_a_directory(root));
    }
    Ok(())
}

pub struct TemplateScanner {
    root: PathBuf,
    tables: IndicatorTables,
}

impl TemplateScanner {
    /// Fails unless `root` is an existing directory.
    pub fn new(root: impl AsRef<Path>) -> Result<Self> {
        Self::with_tables(root, IndicatorTables::default())
    }

    pub fn with_tables(root: impl AsRef<Path>, tables: IndicatorTables) -> Result<Self> {
        let root = root.as_ref();
        validate_root(root)?;
        Ok(Self {
            root: root.to_path_buf(),
            tables,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn tables(&self) -> &IndicatorTables {
        &self.tables
    }

    pub fn scan(&self) -> Result<TemplateProfile> {
        let tables = &self.tables;
        let index = FileIndex::build(&self.root, tables)?;

        let language = stack_detector::detect_language(&index, tables);
        let framework = stack_detector::detect_framework(&index, tables);
        let key_files = key_files::find_key_files(&index, tables);
        let tooling = stack_detector::detect_tooling(&index, &language, tables);
        let patterns = key_files::detect_patterns(&key_files);
        let readme = purpose::read_readme(&index, tables);
        let purpose = purpose::detect_purpose(&readme, &framework, &key_files, tables);

        let root = std::path::absolute(&self.root).map_err(|source| ScanError::Io {
            path: self.root.clone(),
            source,
        })?;

        info!(
            "Scanned {}: {} files, {} / {}",
            root.display(),
            index.len(),
            language,
            framework
        );

        Ok(TemplateProfile {
            root,
            file_count: index.len(),
            language,
            framework,
            tooling,
            key_files,
            patterns,
            purpose,
        })
    }

    /// Scan the template and render the context file text.
    pub fn generate(&self, project_name: &str, use_case: Option<&str>) -> Result<String> {
        let profile = self.scan()?;
        Ok(render_summary(&profile, project_name, use_case))
    }
}

/// Classify `root` with the built-in tables and render the summary.
pub fn classify(root: impl AsRef<Path>, project_name: &str, use_case: Option<&str>) -> Result<String> {
    TemplateScanner::new(root)?.generate(project_name, use_case)
}
