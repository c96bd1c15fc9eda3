// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod amount_words;
pub mod document;
pub mod pdf;
pub mod pricing;
pub mod templates;

pub use document::{DocumentError, DocumentService, GeneratedDocument};
pub use pdf::{ChromeOptions, ChromeRenderer, PageLayout, PdfRenderer, RenderError};
pub use templates::{TemplateError, TemplateService};
