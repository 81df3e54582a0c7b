//! Role policy for routes guarded by a permitted-role set.

use std::collections::BTreeSet;

use crate::config::{defaults, parse_role_list};

/// Set of roles permitted to use a route.
///
/// Role names are compared case-insensitively after trimming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessPolicy {
    permitted: BTreeSet<String>,
}

impl AccessPolicy {
    /// Create a policy from the given permitted role names.
    pub fn new<I, S>(roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            permitted: roles
                .into_iter()
                .filter_map(|role| normalize(role.as_ref()))
                .collect(),
        }
    }

    /// True when any of the caller's roles is in the permitted set.
    pub fn is_permitted(&self, roles: &[String]) -> bool {
        roles
            .iter()
            .filter_map(|role| normalize(role))
            .any(|role| self.permitted.contains(&role))
    }

    pub fn permitted_roles(&self) -> impl Iterator<Item = &str> {
        self.permitted.iter().map(String::as_str)
    }
}

impl Default for AccessPolicy {
    fn default() -> Self {
        Self::new(parse_role_list(defaults::DEV_PERMITTED_ROLES))
    }
}

fn normalize(role: &str) -> Option<String> {
    let role = role.trim();
    if role.is_empty() {
        None
    } else {
        Some(role.to_lowercase())
    }
}
