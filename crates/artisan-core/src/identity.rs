//! Project identity: the values substituted into the template pack.
//!
//! An [`IdentityConfig`] is what a user writes (JSON file or built in code).
//! [`ProjectIdentity::resolve`] applies defaults and validates it so that every
//! accepted identity yields compilable Rust in each token position.
//!
//! ## Config file
//!
//! ```json
//! {
//!   "module_name": "Calculator",
//!   "prefix": "My",
//!   "suffix": "",
//!   "namespace": "my_calc",
//!   "author": "Ada",
//!   "description": "Arithmetic for the masses"
//! }
//! ```
//!
//! Only `module_name` is required (`project_name` is accepted as an alias).

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ArtisanError, Result};
use crate::naming;

fn default_author() -> String {
    "Artisan".into()
}

fn default_description() -> String {
    "A module of great potential".into()
}

/// Raw identity settings as found in a configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityConfig {
    #[serde(alias = "project_name")]
    pub module_name: String,
    #[serde(default)]
    pub prefix: String,
    #[serde(default)]
    pub suffix: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(default = "default_author")]
    pub author: String,
    #[serde(default = "default_description")]
    pub description: String,
}

impl IdentityConfig {
    /// A config with only the module name set; everything else takes its default.
    pub fn new(module_name: impl Into<String>) -> Self {
        Self {
            module_name: module_name.into(),
            prefix: String::new(),
            suffix: String::new(),
            namespace: None,
            author: default_author(),
            description: default_description(),
        }
    }

    /// The decorated name: `prefix + module_name + suffix`.
    pub fn decorated_name(&self) -> String {
        format!("{}{}{}", self.prefix, self.module_name, self.suffix)
    }

    /// Load a config from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ArtisanError::ConfigNotFound {
            path: path.to_path_buf(),
            source: e,
        })?;
        serde_json::from_str(&content).map_err(|e| ArtisanError::ConfigParse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Parse a config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Write the config as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

/// A validated identity, ready to feed the template renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectIdentity {
    project_name: String,
    crate_name: String,
    namespace: String,
    author: String,
    description: String,
}

impl ProjectIdentity {
    /// Shorthand for resolving an [`IdentityConfig::new`] with all defaults.
    pub fn new(module_name: &str) -> Result<Self> {
        Self::resolve(&IdentityConfig::new(module_name))
    }

    /// Apply defaults and validate.
    ///
    /// The namespace defaults to `<crate_name>_space`.
    pub fn resolve(config: &IdentityConfig) -> Result<Self> {
        let project_name = config.decorated_name();
        validate_project_name(&project_name)?;

        let crate_name = naming::to_snake_case(&project_name);
        if naming::is_rust_keyword(&crate_name) || naming::is_reserved_crate_name(&crate_name) {
            return Err(ArtisanError::InvalidName {
                reason: format!("derived crate name '{crate_name}' is reserved"),
                name: project_name,
            });
        }

        let namespace = match &config.namespace {
            Some(ns) => ns.clone(),
            None => format!("{crate_name}_space"),
        };
        validate_namespace(&namespace)?;

        validate_free_text("author", &config.author)?;
        validate_free_text("description", &config.description)?;

        tracing::debug!(
            project_name = %project_name,
            crate_name = %crate_name,
            namespace = %namespace,
            "resolved project identity"
        );

        Ok(Self {
            project_name,
            crate_name,
            namespace,
            author: config.author.clone(),
            description: config.description.clone(),
        })
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    pub fn crate_name(&self) -> &str {
        &self.crate_name
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

fn validate_project_name(name: &str) -> Result<()> {
    let invalid = |reason: &str| ArtisanError::InvalidName {
        name: name.to_string(),
        reason: reason.to_string(),
    };

    let first = name.chars().next().ok_or_else(|| invalid("must not be empty"))?;
    // A lowercase unit struct would also clash with locals and fns in the value namespace.
    if !first.is_ascii_uppercase() {
        return Err(invalid("must start with an ASCII uppercase letter"));
    }
    if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(invalid("may only contain ASCII letters, digits and '_'"));
    }
    if naming::is_rust_keyword(name) {
        return Err(invalid("is a Rust keyword"));
    }
    if naming::is_reserved_type_name(name) {
        return Err(invalid("would shadow a type used by the module template"));
    }
    Ok(())
}

fn validate_namespace(namespace: &str) -> Result<()> {
    let invalid = |reason: &str| ArtisanError::InvalidNamespace {
        namespace: namespace.to_string(),
        reason: reason.to_string(),
    };

    let first = namespace.chars().next().ok_or_else(|| invalid("must not be empty"))?;
    if !(first.is_ascii_lowercase() || first == '_') {
        return Err(invalid("must start with a lowercase letter or '_'"));
    }
    if !namespace
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
    {
        return Err(invalid("may only contain lowercase ASCII letters, digits and '_'"));
    }
    if namespace == "_" {
        return Err(invalid("'_' is not a module name"));
    }
    if naming::is_rust_keyword(namespace) {
        return Err(invalid("is a Rust keyword"));
    }
    Ok(())
}

/// Author and description land inside `//!` comments.
fn validate_free_text(field: &'static str, value: &str) -> Result<()> {
    if value.contains(['\n', '\r']) {
        return Err(ArtisanError::InvalidField {
            field,
            reason: "must be a single line".into(),
        });
    }
    if value.contains("{{") || value.contains("}}") {
        return Err(ArtisanError::InvalidField {
            field,
            reason: "must not contain '{{' or '}}'".into(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let id = ProjectIdentity::new("Calculator").unwrap();
        assert_eq!(id.project_name(), "Calculator");
        assert_eq!(id.crate_name(), "calculator");
        assert_eq!(id.namespace(), "calculator_space");
        assert_eq!(id.author(), "Artisan");
        assert_eq!(id.description(), "A module of great potential");
    }

    #[test]
    fn test_prefix_and_suffix_decorate_name() {
        let mut config = IdentityConfig::new("Calc");
        config.prefix = "My".into();
        config.suffix = "Lib".into();
        let id = ProjectIdentity::resolve(&config).unwrap();
        assert_eq!(id.project_name(), "MyCalcLib");
        assert_eq!(id.crate_name(), "my_calc_lib");
        assert_eq!(id.namespace(), "my_calc_lib_space");
    }

    #[test]
    fn test_explicit_namespace_kept() {
        let mut config = IdentityConfig::new("Calculator");
        config.namespace = Some("arith".into());
        let id = ProjectIdentity::resolve(&config).unwrap();
        assert_eq!(id.namespace(), "arith");
    }

    #[test]
    fn test_rejects_bad_project_names() {
        for name in [
            "",
            "1Calc",
            "_Calc",
            "Calc-Lib",
            "Calc Lib",
            "Self",
            "i32",
            "String",
            "Crate",
            "Std",
            "calculator",
            "input",
            "imp",
            "basic_operation",
            "welcome_message",
        ] {
            let err = ProjectIdentity::new(name).unwrap_err();
            assert!(
                matches!(err, ArtisanError::InvalidName { .. }),
                "expected InvalidName for {name:?}, got {err:?}"
            );
        }
    }

    #[test]
    fn test_bad_prefix_rejected() {
        let mut config = IdentityConfig::new("Calc");
        config.prefix = "9".into();
        assert!(matches!(
            ProjectIdentity::resolve(&config),
            Err(ArtisanError::InvalidName { .. })
        ));
    }

    #[test]
    fn test_rejects_bad_namespaces() {
        for ns in ["", "_", "Arith", "my-ns", "mod", "9ns"] {
            let mut config = IdentityConfig::new("Calculator");
            config.namespace = Some(ns.into());
            let err = ProjectIdentity::resolve(&config).unwrap_err();
            assert!(
                matches!(err, ArtisanError::InvalidNamespace { .. }),
                "expected InvalidNamespace for {ns:?}, got {err:?}"
            );
        }
    }

    #[test]
    fn test_rejects_multiline_description() {
        let mut config = IdentityConfig::new("Calculator");
        config.description = "line one\nline two".into();
        let err = ProjectIdentity::resolve(&config).unwrap_err();
        assert!(matches!(err, ArtisanError::InvalidField { field: "description", .. }));
    }

    #[test]
    fn test_rejects_braces_in_author() {
        let mut config = IdentityConfig::new("Calculator");
        config.author = "{{AUTHOR}}".into();
        let err = ProjectIdentity::resolve(&config).unwrap_err();
        assert!(matches!(err, ArtisanError::InvalidField { field: "author", .. }));
    }

    #[test]
    fn test_from_json_minimal() {
        let config = IdentityConfig::from_json(r#"{ "module_name": "Calculator" }"#).unwrap();
        assert_eq!(config, IdentityConfig::new("Calculator"));
    }

    #[test]
    fn test_from_json_project_name_alias() {
        let config = IdentityConfig::from_json(r#"{ "project_name": "Calculator", "prefix": "My" }"#)
            .unwrap();
        assert_eq!(config.module_name, "Calculator");
        assert_eq!(config.decorated_name(), "MyCalculator");
    }

    #[test]
    fn test_from_json_missing_name() {
        assert!(matches!(
            IdentityConfig::from_json(r#"{ "prefix": "My" }"#),
            Err(ArtisanError::Json(_))
        ));
    }
}
