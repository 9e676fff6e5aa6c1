//! Declarative forms.
//!
//! Forms are plain data: a [`Form`] holds typed [`FormElement`]s and named
//! [`FieldGroup`]s and is serialized for the renderer. Deposition forms (what
//! a depositor fills in to submit a document) are built here too.

mod article;
mod types;

pub use article::{ARTICLE_FORM_ID, LANGUAGES, article_form, deposition_form};
pub use types::{ElementType, FieldGroup, Form, FormElement};
