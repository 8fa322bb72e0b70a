use super::file_index::FileIndex;
use super::indicators::{Category, IndicatorTables};
use log::debug;
use serde::Serialize;
use std::collections::BTreeMap;

pub const MAX_FILES_PER_CATEGORY: usize = 5;

/// Up to five template files per category, in walk order. Categories with no
/// match are absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct KeyFiles(BTreeMap<Category, Vec<String>>);

impl KeyFiles {
    pub fn get(&self, category: Category) -> Option<&[String]> {
        self.0.get(&category).map(Vec::as_slice)
    }

    pub fn has(&self, category: Category) -> bool {
        self.get(category).is_some_and(|files| !files.is_empty())
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, &[String])> {
        self.0.iter().map(|(category, files)| (*category, files.as_slice()))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl FromIterator<(Category, Vec<String>)> for KeyFiles {
    fn from_iter<I: IntoIterator<Item = (Category, Vec<String>)>>(iter: I) -> Self {
        let mut map: BTreeMap<Category, Vec<String>> = BTreeMap::new();
        for (category, files) in iter {
            let entry = map.entry(category).or_default();
            for file in files {
                if !entry.contains(&file) {
                    entry.push(file);
                }
            }
        }
        map.retain(|_, files| !files.is_empty());
        for files in map.values_mut() {
            files.truncate(MAX_FILES_PER_CATEGORY);
        }
        KeyFiles(map)
    }
}

pub fn find_key_files(index: &FileIndex, tables: &IndicatorTables) -> KeyFiles {
    let mut found: BTreeMap<Category, Vec<String>> = BTreeMap::new();

    for file in index.files().iter().filter(|f| !f.is_hidden()) {
        let lower_path = file.rel_path.to_lowercase();
        let lower_name = file.file_name.to_lowercase();

        for category in Category::ALL {
            let hit = tables
                .patterns_for(category)
                .any(|p| lower_path.contains(p) || lower_name.contains(p));
            if !hit {
                continue;
            }
            let files = found.entry(category).or_default();
            if !files.contains(&file.rel_path) {
                files.push(file.rel_path.clone());
            }
        }
    }

    for files in found.values_mut() {
        files.truncate(MAX_FILES_PER_CATEGORY);
    }
    debug!(
        "Key file categories: {:?}",
        found.keys().map(Category::as_str).collect::<Vec<_>>()
    );
    KeyFiles(found)
}

/// Pattern labels for each nonempty category, in category order.
pub fn detect_patterns(key_files: &KeyFiles) -> Vec<String> {
    Category::ALL
        .iter()
        .filter(|category| key_files.has(**category))
        .filter_map(|category| category.pattern_label())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn scan(files: &[&str]) -> KeyFiles {
        let dir = TempDir::new().unwrap();
        for rel in files {
            let path = dir.path().join(rel);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, "").unwrap();
        }
        let tables = IndicatorTables::default();
        let index = FileIndex::build(dir.path(), &tables).unwrap();
        find_key_files(&index, &tables)
    }

    #[test]
    fn test_categorizes_fastapi_layout() {
        let key_files = scan(&[
            "app/api/router.py",
            "app/api/endpoint.py",
            "app/services/weather_service.py",
            "app/core/config.py",
            "app/database/session.py",
            "Dockerfile",
        ]);

        assert_eq!(key_files.get(Category::Config).unwrap(), ["app/core/config.py"]);
        assert_eq!(
            key_files.get(Category::Api).unwrap(),
            ["app/api/endpoint.py", "app/api/router.py"]
        );
        assert_eq!(
            key_files.get(Category::Services).unwrap(),
            ["app/services/weather_service.py"]
        );
        assert_eq!(key_files.get(Category::Deployment).unwrap(), ["Dockerfile"]);
        assert!(key_files.get(Category::Models).is_none());
    }

    #[test]
    fn test_category_capped_at_five() {
        let key_files = scan(&[
            "routes/a.js",
            "routes/b.js",
            "routes/c.js",
            "routes/d.js",
            "routes/e.js",
            "routes/f.js",
            "routes/g.js",
        ]);
        let api = key_files.get(Category::Api).unwrap();
        assert_eq!(api.len(), MAX_FILES_PER_CATEGORY);
        assert_eq!(api[0], "routes/a.js");
    }

    #[test]
    fn test_hidden_files_skipped() {
        let key_files = scan(&[".env.example", ".deploy.yml"]);
        assert!(key_files.is_empty());
    }

    #[test]
    fn test_file_can_land_in_several_categories() {
        let key_files = scan(&["workers/async_db.py"]);
        assert!(key_files.has(Category::Async));
        assert!(key_files.has(Category::Database));
    }

    #[test]
    fn test_patterns_follow_category_order() {
        let key_files = scan(&[
            "docker-compose.yml",
            "app/deps.py",
            "app/workflow.py",
            "app/models.py",
            "settings.py",
        ]);
        assert_eq!(
            detect_patterns(&key_files),
            vec![
                "configuration management",
                "async/await patterns",
                "dependency injection",
                "deployment patterns",
            ]
        );
    }

    #[test]
    fn test_no_patterns_for_models_only() {
        let key_files = scan(&["schema/user.json"]);
        assert!(key_files.has(Category::Models));
        assert!(detect_patterns(&key_files).is_empty());
    }
}
