//! Placeholder vocabulary shared by every template in the pack.

use std::collections::BTreeSet;
use std::fmt;

use serde_json::{Map, Value};

use crate::identity::ProjectIdentity;

/// A token that a generator must replace consistently across all template files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Placeholder {
    ProjectName,
    Namespace,
    CrateName,
    Author,
    Description,
}

impl Placeholder {
    pub const ALL: [Placeholder; 5] = [
        Placeholder::ProjectName,
        Placeholder::Namespace,
        Placeholder::CrateName,
        Placeholder::Author,
        Placeholder::Description,
    ];

    /// The bare key, as used in the render context.
    pub fn key(self) -> &'static str {
        match self {
            Placeholder::ProjectName => "PROJECT_NAME",
            Placeholder::Namespace => "NAMESPACE",
            Placeholder::CrateName => "CRATE_NAME",
            Placeholder::Author => "AUTHOR",
            Placeholder::Description => "DESCRIPTION",
        }
    }

    /// The token as it appears in template text, e.g. `{{PROJECT_NAME}}`.
    pub fn token(self) -> String {
        format!("{{{{{}}}}}", self.key())
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.key() == key)
    }

    pub fn value_for(self, identity: &ProjectIdentity) -> &str {
        match self {
            Placeholder::ProjectName => identity.project_name(),
            Placeholder::Namespace => identity.namespace(),
            Placeholder::CrateName => identity.crate_name(),
            Placeholder::Author => identity.author(),
            Placeholder::Description => identity.description(),
        }
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Build the render context: one string entry per [`Placeholder`].
pub fn replacements(identity: &ProjectIdentity) -> Value {
    let map: Map<String, Value> = Placeholder::ALL
        .into_iter()
        .map(|p| (p.key().to_string(), Value::String(p.value_for(identity).to_string())))
        .collect();
    Value::Object(map)
}

/// Collect the keys of every `{{KEY}}` token referenced in `template`.
///
/// An unterminated `{{` ends the scan.
pub fn scan(template: &str) -> BTreeSet<String> {
    let mut keys = BTreeSet::new();
    let mut rest = template;

    while let Some(open) = rest.find("{{") {
        let after = &rest[open + 2..];
        let Some(close) = after.find("}}") else {
            break;
        };
        let key = after[..close].trim();
        if !key.is_empty() {
            keys.insert(key.to_string());
        }
        rest = &after[close + 2..];
    }

    keys
}
