use std::fmt;

/// Maximum length of a registrable handle.
pub const MAX_HANDLE_LEN: usize = 30;

/// Suffix appended to every registered handle.
pub const HANDLE_SUFFIX: &str = "aliveonbase";

/// Example shown when no valid handle has been entered yet.
pub const PLACEHOLDER: &str = "yourname.aliveonbase";

/// A sanitized registrable name: 0 to 30 characters drawn from `[a-z0-9-]`.
///
/// Obtained exclusively through [`Handle::sanitize`], which is pure, total
/// and idempotent. An empty handle is a valid value but is not registrable.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Handle(String);

impl Handle {
    /// Derives a handle from arbitrary input: lower-case, drop every
    /// character outside `a-z`, `0-9` and `-`, truncate to
    /// [`MAX_HANDLE_LEN`].
    pub fn sanitize(raw: &str) -> Self {
        let clean = raw
            .to_lowercase()
            .chars()
            .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-')
            .take(MAX_HANDLE_LEN)
            .collect();
        Self(clean)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The fully qualified name, `<handle>.aliveonbase`.
    ///
    /// `None` for an empty handle, which renders the [`PLACEHOLDER`]
    /// instead.
    pub fn qualified(&self) -> Option<String> {
        (!self.is_empty()).then(|| format!("{}.{HANDLE_SUFFIX}", self.0))
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn strips_and_lowercases() {
        assert_eq!(Handle::sanitize("ABC_123!!").as_str(), "abc123");
        assert_eq!(Handle::sanitize("Alice In Chains!").as_str(), "aliceinchains");
        assert_eq!(Handle::sanitize("al-ice.eth").as_str(), "al-iceeth");
    }

    #[test]
    fn empty_input_yields_empty_handle() {
        let handle = Handle::sanitize("");
        assert!(handle.is_empty());
        assert_eq!(handle.qualified(), None);

        // All-invalid input collapses to empty as well.
        assert!(Handle::sanitize("!!! ***").is_empty());
    }

    #[test]
    fn truncates_to_thirty_characters() {
        let handle = Handle::sanitize(&"a".repeat(64));
        assert_eq!(handle.as_str().len(), MAX_HANDLE_LEN);
    }

    #[test]
    fn qualified_appends_suffix() {
        assert_eq!(Handle::sanitize("alice").qualified().as_deref(), Some("alice.aliveonbase"));
    }

    proptest! {
        #[test]
        fn sanitize_is_idempotent(s in ".*") {
            let once = Handle::sanitize(&s);
            let twice = Handle::sanitize(once.as_str());
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn output_is_bounded_and_clean(s in ".*") {
            let handle = Handle::sanitize(&s);
            prop_assert!(handle.as_str().len() <= MAX_HANDLE_LEN);
            prop_assert!(
                handle
                    .as_str()
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
            );
        }
    }
}
