//! # Filter Matcher
//!
//! Case-insensitive string matching shared by every collection. Both operands are
//! uppercased before comparing, so `"jaya"`, `"JAYA"` and `"Jaya"` select the same records.

/// How a query string is compared against a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPolicy {
    /// The field contains the query anywhere.
    Substring,
    /// The field starts with the query.
    Prefix,
    /// The field equals the query.
    Exact,
}

impl MatchPolicy {
    pub fn matches(self, field: &str, query: &str) -> bool {
        let field = field.to_uppercase();
        let query = query.to_uppercase();
        match self {
            MatchPolicy::Substring => field.contains(&query),
            MatchPolicy::Prefix => field.starts_with(&query),
            MatchPolicy::Exact => field == query,
        }
    }

    /// True when at least one of `fields` matches.
    pub fn matches_any<'a, I>(self, fields: I, query: &str) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        fields.into_iter().any(|field| self.matches(field, query))
    }
}

/// Case-insensitive id comparison used by every lookup.
pub fn same_id(a: &str, b: &str) -> bool {
    MatchPolicy::Exact.matches(a, b)
}
