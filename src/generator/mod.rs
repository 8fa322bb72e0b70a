//! Renders a [`TemplateProfile`] as the on-demand context file.

use crate::scanner::{Category, TemplateProfile};

/// Default artifact name, written relative to the working directory.
pub const DEFAULT_OUTPUT: &str = "CLAUDE.md";

/// Soft limit; going over only earns a warning.
pub const TARGET_LINES: usize = 20;

const MAX_KEY_FILE_REFS: usize = 4;
const MAX_APPROACH_PATTERNS: usize = 2;

pub fn render_summary(profile: &TemplateProfile, project_name: &str, use_case: Option<&str>) -> String {
    let mut out = String::new();

    out.push_str(project_name);
    out.push('\n');
    out.push_str(&metadata_line(profile));
    out.push('\n');
    out.push_str(&format!("Template: {}\n\n", profile.root.display()));

    let refs = key_file_refs(profile);
    if !refs.is_empty() {
        out.push_str(&format!("Key Files: {}\n\n", refs.join(" | ")));
    }

    out.push_str(&task_line(use_case, &profile.purpose));
    out.push('\n');
    out.push_str(&approach_line(&profile.patterns));
    out.push('\n');
    out
}

fn metadata_line(profile: &TemplateProfile) -> String {
    let mut line = format!("Lang: {} | Framework: {}", profile.language, profile.framework);
    if let Some(tooling) = &profile.tooling {
        if !tooling.install.is_empty() && !tooling.run.is_empty() {
            line.push_str(&format!(" | Install: {} | Run: {}", tooling.install, tooling.run));
        }
    }
    line
}

/// `category:file_name` for the first file of each highlighted category.
pub fn key_file_refs(profile: &TemplateProfile) -> Vec<String> {
    Category::HIGHLIGHTED
        .iter()
        .filter_map(|category| {
            let first = profile.key_files.get(*category)?.first()?;
            let name = first.rsplit('/').next().unwrap_or(first);
            Some(format!("{}:{}", category, name))
        })
        .take(MAX_KEY_FILE_REFS)
        .collect()
}

pub fn task_line(use_case: Option<&str>, purpose: &str) -> String {
    let subject = use_case.filter(|u| !u.trim().is_empty()).unwrap_or(purpose);
    format!("Task: Create {} using template patterns", subject)
}

pub fn approach_line(patterns: &[String]) -> String {
    if patterns.is_empty() {
        return "Analyze template files on-demand → Copy patterns → Maintain consistency".to_string();
    }
    let applied: Vec<&str> = patterns
        .iter()
        .take(MAX_APPROACH_PATTERNS)
        .map(String::as_str)
        .collect();
    format!(
        "Analyze template on-demand → Apply {} → Maintain consistency",
        applied.join(", ")
    )
}

pub fn line_count(content: &str) -> usize {
    content.lines().count()
}

pub fn within_target(content: &str) -> bool {
    line_count(content) <= TARGET_LINES
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::{KeyFiles, Tooling};
    use std::path::PathBuf;

    fn profile() -> TemplateProfile {
        TemplateProfile {
            root: PathBuf::from("/templates/genai"),
            file_count: 0,
            language: "python".to_string(),
            framework: "fastapi".to_string(),
            tooling: Some(Tooling {
                install: "uv sync".to_string(),
                run: "uv run".to_string(),
            }),
            key_files: KeyFiles::default(),
            patterns: vec![],
            purpose: "API application".to_string(),
        }
    }

    #[test]
    fn test_render_without_key_files() {
        let text = render_summary(&profile(), "weather-ai-app", None);
        assert_eq!(
            text,
            "weather-ai-app\n\
             Lang: python | Framework: fastapi | Install: uv sync | Run: uv run\n\
             Template: /templates/genai\n\
             \n\
             Task: Create API application using template patterns\n\
             Analyze template files on-demand → Copy patterns → Maintain consistency\n"
        );
        assert!(within_target(&text));
    }

    #[test]
    fn test_key_files_line_capped_and_trimmed() {
        let mut p = profile();
        p.key_files = [
            (Category::Async, vec!["app/workflows/async_flow.py".to_string()]),
            (Category::Models, vec!["app/models.py".to_string()]),
            (Category::Database, vec!["app/db/session.py".to_string()]),
            (Category::Services, vec!["app/services/llm_service.py".to_string()]),
            (Category::Api, vec!["app/api/router.py".to_string(), "app/api/endpoint.py".to_string()]),
            (Category::Config, vec!["app/config.py".to_string()]),
        ]
        .into_iter()
        .collect();

        let text = render_summary(&p, "demo", None);
        let line = text.lines().find(|l| l.starts_with("Key Files: ")).unwrap();
        assert_eq!(
            line,
            "Key Files: config:config.py | api:router.py | services:llm_service.py | database:session.py"
        );
    }

    #[test]
    fn test_tooling_segment_omitted() {
        let mut p = profile();
        p.tooling = None;
        let text = render_summary(&p, "demo", None);
        assert_eq!(text.lines().nth(1), Some("Lang: python | Framework: fastapi"));
    }

    #[test]
    fn test_use_case_wins_over_purpose() {
        assert_eq!(
            task_line(Some("weather app with Open-Meteo"), "API application"),
            "Task: Create weather app with Open-Meteo using template patterns"
        );
        assert_eq!(
            task_line(Some("  "), "API application"),
            "Task: Create API application using template patterns"
        );
    }

    #[test]
    fn test_approach_uses_first_two_patterns() {
        let patterns = vec![
            "configuration management".to_string(),
            "API patterns".to_string(),
            "service patterns".to_string(),
        ];
        assert_eq!(
            approach_line(&patterns),
            "Analyze template on-demand → Apply configuration management, API patterns → Maintain consistency"
        );
    }
}
