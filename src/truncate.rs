//! Synopsis Truncation
//!
//! Splits long text into a short head and the remaining tail, and tracks
//! which of the two renderings is on screen.

/// Text that exceeded the limit, split at the character boundary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Truncated {
    head: String,
    tail: String,
}

impl Truncated {
    /// `None` when `text` has at most `limit` characters
    pub fn split(text: &str, limit: usize) -> Option<Self> {
        let (cut, _) = text.char_indices().nth(limit)?;
        Some(Self {
            head: text[..cut].trim().to_string(),
            tail: text[cut..].trim().to_string(),
        })
    }

    /// Head followed by an ellipsis
    pub fn short(&self) -> String {
        format!("{}...", self.head)
    }

    pub fn full(&self) -> String {
        if self.tail.is_empty() {
            self.head.clone()
        } else {
            format!("{} {}", self.head, self.tail)
        }
    }
}

/// Collapsed/expanded state of one synopsis block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynopsisToggle {
    text: Truncated,
    expanded: bool,
}

impl SynopsisToggle {
    pub fn new(text: Truncated) -> Self {
        Self { text, expanded: false }
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Text for the current state
    pub fn text(&self) -> String {
        if self.expanded {
            self.text.full()
        } else {
            self.text.short()
        }
    }

    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_of(len: usize) -> String {
        "abcdefghij".chars().cycle().take(len).collect()
    }

    #[test]
    fn exactly_at_limit_is_untouched() {
        assert_eq!(Truncated::split(&text_of(100), 100), None);
        assert_eq!(Truncated::split("short", 100), None);
        assert_eq!(Truncated::split("", 100), None);
    }

    #[test]
    fn one_over_limit_is_truncated() {
        let text = text_of(101);
        let truncated = Truncated::split(&text, 100).unwrap();
        let short = truncated.short();
        assert_eq!(short.chars().count(), 103);
        assert!(short.ends_with("..."));
        assert_eq!(&short[..100], &text[..100]);
        assert_eq!(truncated.full(), format!("{} {}", &text[..100], &text[100..]));
    }

    #[test]
    fn counts_characters_not_bytes() {
        let text: String = "é".repeat(100);
        assert_eq!(Truncated::split(&text, 100), None);

        let longer = format!("{}x", text);
        let truncated = Truncated::split(&longer, 100).unwrap();
        assert_eq!(truncated.short(), format!("{}...", text));
    }

    #[test]
    fn parts_are_trimmed() {
        let text = format!("{} {}", text_of(99), "tail end");
        let truncated = Truncated::split(&text, 100).unwrap();
        assert_eq!(truncated.short(), format!("{}...", text_of(99)));
        assert_eq!(truncated.full(), format!("{} tail end", text_of(99)));
    }

    #[test]
    fn toggle_flips_back_and_forth() {
        let text = text_of(150);
        let mut toggle = SynopsisToggle::new(Truncated::split(&text, 100).unwrap());
        let short = toggle.text();
        assert!(!toggle.is_expanded());

        toggle.toggle();
        assert!(toggle.is_expanded());
        let full = toggle.text();
        assert_ne!(short, full);

        for _ in 0..3 {
            toggle.toggle();
            assert_eq!(toggle.text(), short);
            toggle.toggle();
            assert_eq!(toggle.text(), full);
        }
    }
}
