//! Template pack for module scaffolding.
//!
//! Templates are embedded into the binary at compile-time via [`include_str!`] in the
//! [`embedded`] module, then rendered at runtime with [Handlebars](https://handlebarsjs.com/)
//! via the [`renderer::TemplateRenderer`].
//!
//! ## Template variables
//!
//! Placeholders are written as `{{KEY}}` (see [`tokens::Placeholder`]):
//! - `{{PROJECT_NAME}}`: decorated module name (e.g., `MyCalculator`)
//! - `{{NAMESPACE}}`: Rust module wrapping the generated items (e.g., `my_calculator_space`)
//! - `{{CRATE_NAME}}`: snake_case crate name used by the test file's `use` path
//! - `{{AUTHOR}}`, `{{DESCRIPTION}}`: free text for the header doc comment
//!
//! A literal `PROJECT_NAME` in a template's file name is replaced by the crate name.
//!
//! ## Adding a new template
//!
//! 1. Create the `.tmpl` file under `templates/module/`
//! 2. Add a `pub const` with `include_str!` in [`embedded`] and list it in
//!    [`embedded::MODULE_TEMPLATES`]

pub mod embedded;
pub mod renderer;
pub mod tokens;
