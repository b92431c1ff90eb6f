//! Handlebars-based template renderer for module scaffolding.
//!
//! Wraps the [`handlebars::Handlebars`] engine with **strict mode** enabled and HTML
//! escaping disabled. Strict mode ensures that any `{{KEY}}` referenced in a template
//! must be present in the data context; otherwise rendering returns an error.
//! Templates produce Rust source, so values are inserted verbatim.
//!
//! ## Usage
//!
//! ```ignore
//! use artisan_core::identity::ProjectIdentity;
//! use artisan_core::templates::{embedded, renderer::TemplateRenderer};
//!
//! let identity = ProjectIdentity::new("Calculator")?;
//! let files = TemplateRenderer::new().render_all(embedded::MODULE_TEMPLATES, &identity)?;
//! ```

use std::path::{Path, PathBuf};

use handlebars::Handlebars;
use serde_json::Value;

use crate::error::{ArtisanError, Result};
use crate::identity::ProjectIdentity;
use crate::templates::embedded::TemplateFile;
use crate::templates::tokens;

/// Literal marker in template file names, replaced by the crate name.
const FILE_NAME_MARKER: &str = "PROJECT_NAME";
const TEMPLATE_EXTENSION: &str = ".tmpl";

/// A rendered template: where it belongs and what it contains.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    /// Path relative to the generated module root.
    pub path: PathBuf,
    pub contents: String,
}

/// Template renderer using Handlebars for generating module files.
pub struct TemplateRenderer {
    hbs: Handlebars<'static>,
}

impl TemplateRenderer {
    /// Create a new renderer with strict mode enabled and escaping disabled.
    pub fn new() -> Self {
        let mut hbs = Handlebars::new();
        hbs.set_strict_mode(true);
        hbs.register_escape_fn(handlebars::no_escape);
        Self { hbs }
    }

    /// Render a template string with the given data context.
    pub fn render(&self, template: &str, data: &Value) -> Result<String> {
        self.hbs
            .render_template(template, data)
            .map_err(|e| ArtisanError::TemplateRender(e.to_string()))
    }

    /// Render one template file for `identity`.
    pub fn render_file(&self, file: &TemplateFile, identity: &ProjectIdentity) -> Result<RenderedFile> {
        let data = tokens::replacements(identity);
        let contents = self.render(file.body, &data)?;
        let path = target_path(file.path, identity.crate_name());
        tracing::debug!("rendered {} -> {}", file.path, path.display());
        Ok(RenderedFile { path, contents })
    }

    /// Render every template in `files`, stopping at the first failure.
    pub fn render_all(
        &self,
        files: &[TemplateFile],
        identity: &ProjectIdentity,
    ) -> Result<Vec<RenderedFile>> {
        tracing::info!(
            "rendering {} template(s) for {}",
            files.len(),
            identity.project_name()
        );
        files
            .iter()
            .map(|file| self.render_file(file, identity))
            .collect()
    }
}

impl Default for TemplateRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Map a template path to its generated path.
///
/// Only the file name is rewritten: `PROJECT_NAME` becomes `crate_name` and a
/// trailing `.tmpl` is dropped. Directory components are kept as-is.
pub fn target_path(template_path: &str, crate_name: &str) -> PathBuf {
    let path = Path::new(template_path);
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let file_name = file_name.replace(FILE_NAME_MARKER, crate_name);
    let file_name = file_name
        .strip_suffix(TEMPLATE_EXTENSION)
        .unwrap_or(&file_name)
        .to_string();

    match path.parent() {
        Some(parent) => parent.join(file_name),
        None => PathBuf::from(file_name),
    }
}
