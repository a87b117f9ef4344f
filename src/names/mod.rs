pub mod load;
pub mod matcher;

pub use load::{load_names, parse_names};
pub use matcher::{first_match, name_matches};

/// One entry of the reference name list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceName {
    /// The whole normalized line, e.g. "maria garcia".
    pub full: String,
    /// First whitespace-delimited token.
    pub first: String,
    /// Last token when the name has more than one, otherwise empty.
    pub last: String,
}

impl ReferenceName {
    /// Split a normalized name into first/last tokens. Returns `None` for blank input.
    pub fn parse(normalized: &str) -> Option<Self> {
        let mut tokens = normalized.split_whitespace();
        let first = tokens.next()?.to_string();
        let last = tokens.last().unwrap_or_default().to_string();
        Some(Self {
            full: normalized.to_string(),
            first,
            last,
        })
    }

    /// Does this name's first or last token appear in the OWNER NAME field?
    pub fn matches(&self, owner_name_field: &str) -> bool {
        name_matches(&self.first, &self.last, owner_name_field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_token_name_has_empty_last() {
        let n = ReferenceName::parse("priya").unwrap();
        assert_eq!(n.first, "priya");
        assert_eq!(n.last, "");
    }

    #[test]
    fn middle_tokens_are_ignored() {
        let n = ReferenceName::parse("anil kumar sharma").unwrap();
        assert_eq!(n.first, "anil");
        assert_eq!(n.last, "sharma");
        assert_eq!(n.full, "anil kumar sharma");
    }

    #[test]
    fn blank_is_not_a_name() {
        assert_eq!(ReferenceName::parse(""), None);
        assert_eq!(ReferenceName::parse("   "), None);
    }
}
