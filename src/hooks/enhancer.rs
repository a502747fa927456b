//! Notification styling
//!
//! Enhancers decorate the title and message of a hook notification before
//! it is dispatched.

use super::types::Category;

/// Pictographic block checked when deciding whether a title already
/// carries an emoji
const EMOJI_RANGE: std::ops::RangeInclusive<char> = '\u{1F300}'..='\u{1F9FF}';

const STOP_TITLE_PREFIX: &str = "🐱";
const STOP_MESSAGE_PREFIX: &str = "Session ended: ";

/// Styled title and message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Styled {
    pub title: String,
    pub message: String,
}

/// Trait for notification style enhancers
pub trait StyleEnhancer: Send + Sync {
    /// Style a classified notification
    fn enhance(&self, title: &str, message: &str, category: Category) -> Styled;

    /// Style a session stop notification
    fn enhance_stop(&self, title: &str, message: &str) -> Styled;
}

/// Default emoji and prefix styling
#[derive(Debug, Default, Clone)]
pub struct DefaultStyleEnhancer;

impl DefaultStyleEnhancer {
    pub fn new() -> Self {
        Self
    }
}

/// Whether the text contains a code point from the pictographic block
pub fn has_emoji(text: &str) -> bool {
    text.chars().any(|c| EMOJI_RANGE.contains(&c))
}

impl StyleEnhancer for DefaultStyleEnhancer {
    fn enhance(&self, title: &str, message: &str, category: Category) -> Styled {
        let title = if has_emoji(title) {
            title.to_string()
        } else {
            format!("{} {}", category.emoji(), title)
        };

        Styled {
            title,
            message: message.to_string(),
        }
    }

    fn enhance_stop(&self, title: &str, message: &str) -> Styled {
        Styled {
            title: format!("{STOP_TITLE_PREFIX} {title}"),
            message: format!("{STOP_MESSAGE_PREFIX}{message}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefixes_category_emoji() {
        let styled =
            DefaultStyleEnhancer::new().enhance("Build Success", "done", Category::Success);
        assert_eq!(styled.title, "✅ Build Success");
        assert_eq!(styled.message, "done");
    }

    #[test]
    fn test_keeps_title_with_emoji() {
        let enhancer = DefaultStyleEnhancer::new();
        let styled = enhancer.enhance("🚀 Deployed", "ok", Category::Success);
        assert_eq!(styled.title, "🚀 Deployed");

        let styled = enhancer.enhance("Tests 🧪", "ok", Category::Error);
        assert_eq!(styled.title, "Tests 🧪");
    }

    #[test]
    fn test_symbols_outside_range_still_get_prefix() {
        // ✅ and ⚠️ live outside U+1F300..U+1F9FF
        let styled = DefaultStyleEnhancer::new().enhance("✅ Done", "ok", Category::Success);
        assert_eq!(styled.title, "✅ ✅ Done");
        assert!(!has_emoji("⚠️ Warning"));
        assert!(has_emoji("💡"));
    }

    #[test]
    fn test_every_category_emoji() {
        let enhancer = DefaultStyleEnhancer::new();
        let cases = [
            (Category::Success, "✅"),
            (Category::Error, "🚨"),
            (Category::Warning, "⚠️"),
            (Category::Info, "💡"),
            (Category::Progress, "⏳"),
        ];
        for (category, emoji) in cases {
            let styled = enhancer.enhance("Title", "Body", category);
            assert_eq!(styled.title, format!("{emoji} Title"));
        }
    }

    #[test]
    fn test_stop_styling() {
        let styled = DefaultStyleEnhancer::new().enhance_stop("Claude Code", "Stop Event");
        assert_eq!(styled.title, "🐱 Claude Code");
        assert_eq!(styled.message, "Session ended: Stop Event");
    }
}
