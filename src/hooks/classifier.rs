//! Content classifier
//!
//! An ordered table of rules; the first rule whose pattern matches the
//! combined title and message decides the category. Some rules resolve
//! further by checking for failure markers.

use super::types::Category;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::warn;

/// How a matching rule turns into a category
enum Resolution {
    Fixed(Category),
    /// `Error` when the failure pattern also matches, otherwise `Success`
    FailureCheck(Regex),
}

struct Rule {
    name: &'static str,
    pattern: Regex,
    resolution: Resolution,
}

/// Rule definitions in precedence order: (name, terms, failure markers)
///
/// Rules without failure markers resolve to the category named after them.
const RULES: &[(&str, &[&str], Option<&[&str]>)] = &[
    (
        "error",
        &[
            "error", "failed", "failure", "crash", "exception", "❌", "🚨", "💥", "⚠️",
        ],
        None,
    ),
    (
        "warning",
        &["warning", "caution", "attention", "notice", "⚠️", "🔔", "📢"],
        None,
    ),
    (
        "success",
        &[
            "complete", "success", "passed", "done", "finished", "✅", "🎉", "✨", "🏗️", "📦",
            "🚀",
        ],
        None,
    ),
    (
        "progress",
        &[
            "progress", "running", "processing", "installing", "building", "📊", "⏳", "🔄",
        ],
        None,
    ),
    (
        "test",
        &["test", "spec", "jest", "vitest", "cypress", "🧪", "✅", "❌"],
        Some(&["❌", "fail"]),
    ),
    (
        "build",
        &["build", "compile", "deploy", "publish", "🏗️", "📦", "🚀"],
        Some(&["fail", "error"]),
    ),
    (
        "git",
        &["git", "commit", "push", "pull", "merge", "📝", "🔀", "📋"],
        Some(&["fail", "error"]),
    ),
];

fn alternation(terms: &[&str]) -> Result<Regex, regex::Error> {
    let body = terms
        .iter()
        .map(|term| regex::escape(term))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!("(?i){body}"))
}

fn fixed_category(name: &str) -> Option<Category> {
    match name {
        "error" => Some(Category::Error),
        "warning" => Some(Category::Warning),
        "success" => Some(Category::Success),
        "progress" => Some(Category::Progress),
        _ => None,
    }
}

fn build_rule(
    name: &'static str,
    terms: &[&str],
    failure: Option<&[&str]>,
) -> Result<Rule, regex::Error> {
    let pattern = alternation(terms)?;
    let resolution = match failure {
        Some(markers) => Resolution::FailureCheck(alternation(markers)?),
        None => Resolution::Fixed(fixed_category(name).unwrap_or(Category::Info)),
    };
    Ok(Rule {
        name,
        pattern,
        resolution,
    })
}

static TABLE: Lazy<Vec<Rule>> = Lazy::new(|| {
    RULES
        .iter()
        .filter_map(|(name, terms, failure)| match build_rule(*name, terms, *failure) {
            Ok(rule) => Some(rule),
            Err(e) => {
                warn!("Skipping classifier rule '{}': {}", name, e);
                None
            }
        })
        .collect()
});

/// Classification result with the name of the rule that decided it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub category: Category,
    /// `None` when no rule matched and the default applied
    pub rule: Option<&'static str>,
}

/// Classify a title and message
pub fn classify(title: &str, message: &str) -> Classification {
    let content = format!("{title} {message}").to_lowercase();

    for rule in TABLE.iter() {
        if !rule.pattern.is_match(&content) {
            continue;
        }
        let category = match &rule.resolution {
            Resolution::Fixed(category) => *category,
            Resolution::FailureCheck(failure) if failure.is_match(&content) => Category::Error,
            Resolution::FailureCheck(_) => Category::Success,
        };
        return Classification {
            category,
            rule: Some(rule.name),
        };
    }

    Classification {
        category: Category::Info,
        rule: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(title: &str, message: &str) -> Category {
        classify(title, message).category
    }

    #[test]
    fn test_every_rule_compiles() {
        assert_eq!(TABLE.len(), RULES.len());
    }

    #[test]
    fn test_primary_categories() {
        assert_eq!(category("Task", "Build failed"), Category::Error);
        assert_eq!(category("Heads up", "Attention required"), Category::Warning);
        assert_eq!(category("Task", "All done"), Category::Success);
        assert_eq!(category("Task", "Installing packages"), Category::Progress);
        assert_eq!(category("Hello", "Waiting for input"), Category::Info);
    }

    #[test]
    fn test_error_wins_over_success() {
        assert_eq!(category("✅ Finished", "but one step crashed"), Category::Error);
        assert_eq!(category("Complete", "with error"), Category::Error);
    }

    #[test]
    fn test_warning_emoji_is_an_error_marker() {
        // ⚠️ sits in both groups; error is checked first
        assert_eq!(category("⚠️ Careful", "look here"), Category::Error);
    }

    #[test]
    fn test_secondary_rules_resolve_on_failure_markers() {
        let result = classify("Jest", "specs ran");
        assert_eq!(result.category, Category::Success);
        assert_eq!(result.rule, Some("test"));

        assert_eq!(category("Deploy", "to production"), Category::Success);
        assert_eq!(category("Git", "merge to main"), Category::Success);
        assert_eq!(classify("Git", "merge to main").rule, Some("git"));

        assert_eq!(category("Vitest", "2 specs fail"), Category::Error);
        assert_eq!(category("Compile", "fail on step 3"), Category::Error);
        assert_eq!(category("Pull", "could not fail over"), Category::Error);
    }

    #[test]
    fn test_success_shadows_test_rule() {
        let result = classify("Build Success", "✅ All tests passed");
        assert_eq!(result.category, Category::Success);
        assert_eq!(result.rule, Some("success"));
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(category("ERROR", "X"), Category::Error);
        assert_eq!(category("Commit", "PUSHED"), Category::Success);
    }

    #[test]
    fn test_default_is_info() {
        let result = classify("Claude Code", "Waiting for your input");
        assert_eq!(result.category, Category::Info);
        assert_eq!(result.rule, None);
    }
}
