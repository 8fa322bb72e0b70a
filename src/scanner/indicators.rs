//! Lookup tables that drive every heuristic in the scanner.
//!
//! Nothing in the pipeline hard-codes a language, framework or file pattern;
//! everything comes from an [`IndicatorTables`] value, which can be swapped
//! out wholesale or loaded from TOML.

use crate::error::{Result, ScanError};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Key-file category, declared in enumeration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Config,
    Api,
    Services,
    Models,
    Database,
    Async,
    Dependencies,
    Deployment,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Config,
        Category::Api,
        Category::Services,
        Category::Models,
        Category::Database,
        Category::Async,
        Category::Dependencies,
        Category::Deployment,
    ];

    /// Categories shown on the "Key Files" line, in display priority.
    pub const HIGHLIGHTED: [Category; 5] = [
        Category::Config,
        Category::Api,
        Category::Services,
        Category::Database,
        Category::Async,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Config => "config",
            Category::Api => "api",
            Category::Services => "services",
            Category::Models => "models",
            Category::Database => "database",
            Category::Async => "async",
            Category::Dependencies => "dependencies",
            Category::Deployment => "deployment",
        }
    }

    /// Architectural pattern implied by a nonempty category.
    pub fn pattern_label(&self) -> Option<&'static str> {
        match self {
            Category::Config => Some("configuration management"),
            Category::Api => Some("API patterns"),
            Category::Services => Some("service patterns"),
            Category::Models => None,
            Category::Database => Some("repository patterns"),
            Category::Async => Some("async/await patterns"),
            Category::Dependencies => Some("dependency injection"),
            Category::Deployment => Some("deployment patterns"),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A label and the strings that count as evidence for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledIndicators {
    pub label: String,
    pub indicators: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryPatterns {
    pub category: Category,
    pub patterns: Vec<String>,
}

/// Marker file under the root that selects an install/run command pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolingRule {
    pub language: String,
    pub marker: String,
    pub install: String,
    pub run: String,
}

/// README keyword rule. Every group must match; a group matches when any of
/// its words occurs in the lowercased README text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordRule {
    pub label: String,
    pub require: Vec<Vec<String>>,
}

impl KeywordRule {
    pub fn matches(&self, text: &str) -> bool {
        self.require
            .iter()
            .all(|group| group.iter().any(|word| text.contains(word.as_str())))
    }
}

/// Purpose label used when the README gives no hint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameworkPurpose {
    pub framework: String,
    pub label: String,
    /// Category that must be nonempty for the rule to apply.
    #[serde(default)]
    pub requires: Option<Category>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndicatorTables {
    pub ignored_dirs: Vec<String>,
    pub languages: Vec<LabeledIndicators>,
    pub frameworks: Vec<LabeledIndicators>,
    pub categories: Vec<CategoryPatterns>,
    pub tooling: Vec<ToolingRule>,
    pub readme_files: Vec<String>,
    pub purpose_keywords: Vec<KeywordRule>,
    pub framework_purposes: Vec<FrameworkPurpose>,
}

static BUILTIN_TABLES: Lazy<IndicatorTables> = Lazy::new(IndicatorTables::builtin);

impl Default for IndicatorTables {
    fn default() -> Self {
        BUILTIN_TABLES.clone()
    }
}

fn labeled(label: &str, indicators: &[&str]) -> LabeledIndicators {
    LabeledIndicators {
        label: label.to_string(),
        indicators: strings(indicators),
    }
}

fn patterns(category: Category, patterns: &[&str]) -> CategoryPatterns {
    CategoryPatterns {
        category,
        patterns: strings(patterns),
    }
}

fn tool(language: &str, marker: &str, install: &str, run: &str) -> ToolingRule {
    ToolingRule {
        language: language.to_string(),
        marker: marker.to_string(),
        install: install.to_string(),
        run: run.to_string(),
    }
}

fn keywords(label: &str, require: &[&[&str]]) -> KeywordRule {
    KeywordRule {
        label: label.to_string(),
        require: require.iter().map(|group| strings(group)).collect(),
    }
}

fn purpose(framework: &str, label: &str, requires: Option<Category>) -> FrameworkPurpose {
    FrameworkPurpose {
        framework: framework.to_string(),
        label: label.to_string(),
        requires,
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl IndicatorTables {
    fn builtin() -> Self {
        Self {
            ignored_dirs: strings(&["node_modules", "__pycache__", ".git"]),
            languages: vec![
                labeled("python", &[".py", "requirements.txt", "pyproject.toml", "__pycache__/"]),
                labeled(
                    "javascript",
                    &[".js", ".jsx", ".ts", ".tsx", "package.json", "node_modules/"],
                ),
                labeled("java", &[".java", "pom.xml", "build.gradle"]),
                labeled("go", &[".go", "go.mod"]),
                labeled("rust", &[".rs", "Cargo.toml"]),
            ],
            frameworks: vec![
                labeled("fastapi", &["main.py", "app/", "requirements.txt", "pyproject.toml"]),
                labeled("django", &["manage.py", "settings.py", "apps/"]),
                labeled("flask", &["app.py", "app/", "requirements.txt"]),
                labeled("react", &["package.json", "src/", "public/", "node_modules/"]),
                labeled("nextjs", &["next.config.js", "pages/", "components/"]),
                labeled("express", &["package.json", "server.js", "routes/"]),
            ],
            categories: vec![
                patterns(
                    Category::Config,
                    &["config.py", "settings.py", ".env.example", "config.js", "config.ts"],
                ),
                patterns(
                    Category::Api,
                    &["endpoint.py", "routes.py", "api.py", "router.py", "routes/", "api/", "endpoints/"],
                ),
                patterns(Category::Services, &["service.py", "services/", "worker/", "tasks.py"]),
                patterns(
                    Category::Models,
                    &["models.py", "model.py", "schemas.py", "models/", "schema/"],
                ),
                patterns(
                    Category::Database,
                    &["database.py", "db.py", "session.py", "repository.py", "database/", "db/"],
                ),
                patterns(Category::Async, &["async", "await", "concurrent", "workflow"]),
                patterns(
                    Category::Dependencies,
                    &["dependencies.py", "deps.py", "providers.py"],
                ),
                patterns(
                    Category::Deployment,
                    &["dockerfile", "docker-compose", "deploy", ".yml", ".yaml"],
                ),
            ],
            tooling: vec![
                tool("python", "uv.lock", "uv sync", "uv run"),
                tool("python", "poetry.lock", "poetry install", "poetry run"),
                tool("python", "pyproject.toml", "pip install -e .", "python"),
                tool("python", "requirements.txt", "pip install -r requirements.txt", "python"),
                tool("javascript", "pnpm-lock.yaml", "pnpm install", "pnpm run"),
                tool("javascript", "yarn.lock", "yarn install", "yarn"),
                tool("javascript", "package.json", "npm install", "npm run"),
            ],
            readme_files: strings(&["README.md", "readme.md", "README.txt", "README.rst"]),
            purpose_keywords: vec![
                keywords("API application", &[&["api"], &["rest", "fastapi"]]),
                keywords("web application", &[&["web"], &["app"]]),
                keywords("microservice", &[&["microservice"]]),
                keywords("dashboard application", &[&["dashboard"]]),
                keywords("bot application", &[&["bot"]]),
            ],
            framework_purposes: vec![
                purpose("fastapi", "API application", Some(Category::Api)),
                purpose("fastapi", "data application", Some(Category::Database)),
                purpose("react", "frontend application", None),
                purpose("django", "web application", None),
                purpose("flask", "web service", None),
            ],
        }
    }

    /// Parse tables from TOML text. Sections left out keep the built-in values.
    pub fn from_toml_str(text: &str, origin: &Path) -> Result<Self> {
        let tables: IndicatorTables = toml::from_str(text).map_err(|source| ScanError::Config {
            path: origin.to_path_buf(),
            source,
        })?;
        Ok(tables.normalized())
    }

    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| ScanError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text, path)
    }

    /// Key-file patterns and README keywords are compared against lowercased
    /// text, so they are stored lowercase.
    pub fn normalized(mut self) -> Self {
        for entry in &mut self.categories {
            for pattern in &mut entry.patterns {
                *pattern = pattern.to_lowercase();
            }
        }
        for rule in &mut self.purpose_keywords {
            for group in &mut rule.require {
                for word in group.iter_mut() {
                    *word = word.to_lowercase();
                }
            }
        }
        self
    }

    pub fn patterns_for(&self, category: Category) -> impl Iterator<Item = &str> {
        self.categories
            .iter()
            .filter(move |entry| entry.category == category)
            .flat_map(|entry| entry.patterns.iter().map(String::as_str))
    }

    pub fn is_ignored_dir(&self, name: &str) -> bool {
        name.starts_with('.') || self.ignored_dirs.iter().any(|d| d == name)
    }
}
