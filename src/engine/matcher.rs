use serde::Deserialize;

/// How a trigger phrase is located inside the normalized proposal text.
///
/// `Substring` is the historical behaviour and stays the default: a phrase
/// hits wherever it occurs, so "ml" also hits inside "html". `WordBoundary`
/// additionally requires that the hit is not flanked by alphanumerics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    #[default]
    Substring,
    WordBoundary,
}

impl MatchMode {
    pub fn found(self, text: &str, phrases: &[&str]) -> bool {
        phrases.iter().any(|phrase| self.contains(text, phrase))
    }

    /// Number of groups with at least one hit. Groups are independent.
    pub fn count_group_matches(self, text: &str, groups: &[&[&str]]) -> usize {
        groups
            .iter()
            .filter(|phrases| self.found(text, phrases))
            .count()
    }

    fn contains(self, text: &str, phrase: &str) -> bool {
        match self {
            Self::Substring => text.contains(phrase),
            Self::WordBoundary => has_bounded_hit(text, phrase),
        }
    }
}

/// Checks every occurrence, overlapping ones included, since an unbounded
/// hit can start inside the same span as a bounded one.
fn has_bounded_hit(text: &str, phrase: &str) -> bool {
    let mut from = 0;
    while let Some(offset) = text[from..].find(phrase) {
        let start = from + offset;
        if is_bounded(text, start, start + phrase.len()) {
            return true;
        }
        match text[start..].chars().next() {
            Some(first) => from = start + first.len_utf8(),
            None => return false,
        }
    }
    false
}

fn is_bounded(text: &str, start: usize, end: usize) -> bool {
    let before = text[..start].chars().next_back();
    let after = text[end..].chars().next();
    !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
}
