//! Path pattern matching
//!
//! Compiles declared route paths into matchers once at startup. Three
//! pattern kinds exist: the global catch-all (`*`), patterns with an
//! embedded wildcard (`/users/*`), and exact paths. An embedded wildcard
//! expands at its first occurrence into "any sequence of characters here",
//! anchored over the full request path; any later `*` is taken literally.

/// Compiled matcher for one declared route path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathMatcher {
    /// Bare `*`: matches every path unconditionally.
    CatchAll,
    /// Pattern with an embedded wildcard, split at the first `*`.
    Wildcard { prefix: String, suffix: String },
    /// Exact string equality against the normalized path.
    Exact(String),
}

impl PathMatcher {
    /// Compile a declared path into a matcher.
    ///
    /// Expects the path to already be normalized (leading `/`, except for
    /// the bare `*` token).
    #[must_use]
    pub fn compile(path: &str) -> Self {
        if path == "*" {
            return Self::CatchAll;
        }
        match path.find('*') {
            Some(index) => Self::Wildcard {
                prefix: path[..index].to_string(),
                suffix: path[index + 1..].to_string(),
            },
            None => Self::Exact(path.to_string()),
        }
    }

    /// Test a request path against this matcher.
    #[must_use]
    pub fn matches(&self, path: &str) -> bool {
        match self {
            Self::CatchAll => true,
            Self::Wildcard { prefix, suffix } => match path.strip_prefix(prefix.as_str()) {
                Some(rest) => rest.ends_with(suffix.as_str()),
                None => false,
            },
            Self::Exact(exact) => path == exact,
        }
    }
}

/// Normalize a declared route path to begin with `/`.
///
/// The bare `*` token is left untouched: it is the catch-all marker, not a
/// path.
#[must_use]
pub fn normalize_path(path: &str) -> String {
    if path == "*" || path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match() {
        let matcher = PathMatcher::compile("/users");
        assert!(matcher.matches("/users"));
        assert!(!matcher.matches("/users/"));
        assert!(!matcher.matches("/users/42"));
        assert!(!matcher.matches("/accounts"));
    }

    #[test]
    fn test_catch_all_matches_everything() {
        let matcher = PathMatcher::compile("*");
        assert_eq!(matcher, PathMatcher::CatchAll);
        assert!(matcher.matches("/"));
        assert!(matcher.matches("/users"));
        assert!(matcher.matches("/deeply/nested/path"));
    }

    #[test]
    fn test_embedded_wildcard_prefix() {
        let matcher = PathMatcher::compile("/users/*");
        assert!(matcher.matches("/users/42"));
        assert!(matcher.matches("/users/42/orders"));
        // The wildcard may match the empty sequence
        assert!(matcher.matches("/users/"));
        assert!(!matcher.matches("/users"));
        assert!(!matcher.matches("/accounts/42"));
    }

    #[test]
    fn test_embedded_wildcard_with_suffix() {
        let matcher = PathMatcher::compile("/files/*/meta");
        assert!(matcher.matches("/files/a/meta"));
        assert!(matcher.matches("/files/a/b/meta"));
        assert!(!matcher.matches("/files/a/data"));
        assert!(!matcher.matches("/files/meta"));
    }

    #[test]
    fn test_only_first_wildcard_expands() {
        let matcher = PathMatcher::compile("/a/*/b*c");
        // Remainder after the first `*` is literal, including the second `*`
        assert!(matcher.matches("/a/x/b*c"));
        assert!(!matcher.matches("/a/x/bXc"));
    }

    #[test]
    fn test_normalize_adds_leading_slash() {
        assert_eq!(normalize_path("users"), "/users");
        assert_eq!(normalize_path("/users"), "/users");
        assert_eq!(normalize_path("users/*"), "/users/*");
        assert_eq!(normalize_path("*"), "*");
    }
}
