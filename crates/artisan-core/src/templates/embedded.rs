//! Compile-time embedded templates for module scaffolding.
//!
//! Each constant loads a template file from `templates/` via [`include_str!`]. The paths
//! are relative to this source file (`crates/artisan-core/src/templates/embedded.rs`).
//!
//! ## Warning
//!
//! Do NOT rename or move template files without updating the `include_str!` path here.
//! Do NOT add a placeholder to a template without adding it to
//! [`Placeholder`](super::tokens::Placeholder); strict rendering rejects unknown keys.

/// A template body together with its path relative to the generated module root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateFile {
    pub path: &'static str,
    pub body: &'static str,
}

pub const MODULE_SOURCE: &str = include_str!("../../../../templates/module/src/lib.rs.tmpl");
pub const MODULE_TEST: &str =
    include_str!("../../../../templates/module/tests/PROJECT_NAME_test.rs.tmpl");

/// The placeholder source file and its unit test, in generation order.
pub const MODULE_TEMPLATES: &[TemplateFile] = &[
    TemplateFile {
        path: "src/lib.rs.tmpl",
        body: MODULE_SOURCE,
    },
    TemplateFile {
        path: "tests/PROJECT_NAME_test.rs.tmpl",
        body: MODULE_TEST,
    },
];
