//! Scope sets resolved by the authorization layer.

use std::collections::HashSet;

/// Scope granting access to the coffee machine, as declared by the exposed
/// Thing's `oauth2` security definition.
pub const COFFEE_SCOPE: &str = "coffee_user";

/// The set of scopes granted to a validated credential.
///
/// Built from a token's space-separated scope string by whatever validated
/// the credential; the core never sees the credential itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScopeSet {
    scopes: HashSet<String>,
}

impl ScopeSet {
    /// Parses an OAuth2 space-separated scope string, e.g. `"user coffee_user"`.
    pub fn parse(raw: &str) -> Self {
        Self {
            scopes: raw.split_whitespace().map(str::to_string).collect(),
        }
    }

    pub fn contains(&self, scope: &str) -> bool {
        self.scopes.contains(scope)
    }

    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for ScopeSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            scopes: iter.into_iter().map(Into::into).collect(),
        }
    }
}
