// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Document templates loaded from the templates directory.

use crate::models::DocumentType;
use crate::services::pricing::format_amount;
use crate::time_utils::format_document_date;
use minijinja::{Environment, ErrorKind, Template, Value};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Template used when the directory has no template for a document type.
pub const FALLBACK_TEMPLATE: &str = "bon-livraison.html";

/// Name of the template compiled into the binary, used as a last resort.
pub const BUILTIN_TEMPLATE: &str = "builtin/document.html";

const BUILTIN_TEMPLATE_SOURCE: &str = include_str!("../../assets/document.html");

/// Renders documents from `<templates_dir>/<type>.html`.
pub struct TemplateService {
    templates_dir: PathBuf,
}

impl TemplateService {
    /// Create the service, creating the templates directory if needed.
    pub fn new<P: Into<PathBuf>>(templates_dir: P) -> Result<Self, TemplateError> {
        let templates_dir = templates_dir.into();
        fs::create_dir_all(&templates_dir).map_err(|source| TemplateError::Directory {
            path: templates_dir.clone(),
            source,
        })?;

        let service = Self { templates_dir };
        // Compiles the built-in template once up front.
        service.environment()?;

        tracing::info!(dir = %service.templates_dir.display(), "Template directory ready");
        Ok(service)
    }

    pub fn templates_dir(&self) -> &Path {
        &self.templates_dir
    }

    /// A fresh environment over the templates directory.
    ///
    /// Nothing loaded from disk outlives a render, so an edited template
    /// applies to the next document.
    fn environment(&self) -> Result<Environment<'static>, TemplateError> {
        let mut env = Environment::new();
        env.set_loader(minijinja::path_loader(&self.templates_dir));
        env.add_filter("currency", currency_filter);
        env.add_filter("amount", amount_filter);
        env.add_filter("date", date_filter);
        env.add_template(BUILTIN_TEMPLATE, BUILTIN_TEMPLATE_SOURCE)?;
        Ok(env)
    }

    /// Name of the template `doc_type` renders with.
    pub fn resolve(&self, doc_type: DocumentType) -> Result<String, TemplateError> {
        let env = self.environment()?;
        Ok(select(&env, doc_type)?.name().to_string())
    }

    /// Render the document HTML for `doc_type` with `context`.
    pub fn render<S: Serialize>(
        &self,
        doc_type: DocumentType,
        context: &S,
    ) -> Result<String, TemplateError> {
        let env = self.environment()?;
        let template = select(&env, doc_type)?;
        tracing::debug!(template = template.name(), "Rendering template");
        Ok(template.render(context)?)
    }
}

/// Pick the template for `doc_type`: its own file, then the delivery note
/// template, then the built-in one.
fn select<'env>(
    env: &'env Environment<'static>,
    doc_type: DocumentType,
) -> Result<Template<'env, 'env>, TemplateError> {
    let own = doc_type.template_name();
    for name in [own.as_str(), FALLBACK_TEMPLATE] {
        match env.get_template(name) {
            Ok(template) => return Ok(template),
            Err(err) if err.kind() == ErrorKind::TemplateNotFound => {
                tracing::debug!(template = name, "Template not found");
            }
            Err(err) => return Err(err.into()),
        }
    }

    tracing::debug!(doc_type = %doc_type, "Using built-in template");
    Ok(env.get_template(BUILTIN_TEMPLATE)?)
}

/// `{{ value | currency }}`: two decimals with thousands separators.
fn currency_filter(value: Value) -> Result<String, minijinja::Error> {
    if value.is_none() || value.is_undefined() {
        return Ok("0.00".to_string());
    }

    let amount = match value.as_str() {
        Some(s) => s.trim().parse::<f64>().map_err(|_| {
            minijinja::Error::new(
                ErrorKind::InvalidOperation,
                format!("cannot format {s:?} as currency"),
            )
        })?,
        None => f64::try_from(value.clone()).map_err(|_| {
            minijinja::Error::new(
                ErrorKind::InvalidOperation,
                format!("cannot format {value} as currency"),
            )
        })?,
    };

    Ok(format_amount(amount))
}

/// `{{ value | amount }}`: `currency` for numbers and numeric strings, any
/// other text (`"1 190,00 DA"`) as given.
fn amount_filter(value: Value) -> Result<Value, minijinja::Error> {
    match value.as_str() {
        Some(s) if s.trim().parse::<f64>().is_err() => Ok(value),
        _ => currency_filter(value).map(Value::from),
    }
}

/// `{{ value | date }}`: `YYYY-MM-DD` becomes `DD/MM/YYYY`; anything else
/// passes through untouched.
fn date_filter(value: Value) -> Value {
    value
        .as_str()
        .and_then(format_document_date)
        .map(Value::from)
        .unwrap_or(value)
}

/// Errors from template operations.
#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    #[error("Failed to create template directory {path}: {source}")]
    Directory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Template error: {0}")]
    Render(#[from] minijinja::Error),
}
