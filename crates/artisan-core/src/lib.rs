//! Core library for the module-artisan toolkit.
//!
//! Provides the pieces a generator needs to stamp out a new module from the
//! embedded template pack: the validated [`identity::ProjectIdentity`] that
//! supplies token values, the [`templates::tokens::Placeholder`] vocabulary,
//! and a strict [`templates::renderer::TemplateRenderer`].
//!
//! Writing the rendered files to disk is left to the caller.

pub mod error;
pub mod identity;
pub mod naming;
pub mod templates;
