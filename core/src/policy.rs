// core/src/policy.rs

//! Configuration-time rules for the free-form cart status field.

use std::collections::BTreeSet;

use crate::error::{CartError, CartResult};

/// Which cart statuses a deployment accepts.
///
/// The default is permissive: any string is stored as given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum StatusPolicy {
  #[default]
  Permissive,
  Restricted(BTreeSet<String>),
}

impl StatusPolicy {
  /// Builds a policy from a list of statuses. Blank entries are ignored and an
  /// empty list yields `Permissive`.
  pub fn from_list<I, S>(statuses: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
  {
    let allowed: BTreeSet<String> = statuses
      .into_iter()
      .map(|s| s.as_ref().trim().to_string())
      .filter(|s| !s.is_empty())
      .collect();

    if allowed.is_empty() {
      StatusPolicy::Permissive
    } else {
      StatusPolicy::Restricted(allowed)
    }
  }

  pub fn check(&self, status: &str) -> CartResult<()> {
    match self {
      StatusPolicy::Permissive => Ok(()),
      StatusPolicy::Restricted(allowed) if allowed.contains(status) => Ok(()),
      StatusPolicy::Restricted(allowed) => Err(CartError::Validation(format!(
        "Unsupported cart status '{}'. Allowed: {}",
        status,
        allowed.iter().cloned().collect::<Vec<_>>().join(", ")
      ))),
    }
  }
}
