// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Document generation: request → template context → HTML → PDF.

use crate::models::{
    ClientInfo, CompanyInfo, DocumentInfo, DocumentType, GeneratePdfRequest, Product, Totals,
};
use crate::services::amount_words::amount_in_words;
use crate::services::pdf::{PageLayout, PdfRenderer, RenderError};
use crate::services::pricing::{effective_totals, line_total};
use crate::services::templates::{TemplateError, TemplateService};
use crate::time_utils::format_generated_at;
use chrono::{DateTime, Local};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Semaphore;

/// Words printed when a document carries no totals.
const NO_TOTAL_WORDS: &str = "zéro";

/// A product line as seen by templates.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductLine<'a> {
    #[serde(flatten)]
    pub product: &'a Product,
    /// Line total, tax included
    pub line_total: f64,
}

/// Variables available to document templates.
#[derive(Debug, Serialize)]
pub struct DocumentContext<'a> {
    pub document_title: &'static str,
    pub company: &'a CompanyInfo,
    pub client: &'a ClientInfo,
    pub document: &'a DocumentInfo,
    pub products: Vec<ProductLine<'a>>,
    pub totals: Option<Totals>,
    #[serde(rename = "type")]
    pub doc_type: DocumentType,
    pub generated_date: String,
    pub total_ttc_words: String,
    pub logo_url: Option<&'a str>,
}

impl<'a> DocumentContext<'a> {
    /// Build the template context for `request`, generated at `now`.
    pub fn new(request: &'a GeneratePdfRequest, now: DateTime<Local>) -> Self {
        let totals = effective_totals(request.totals.as_ref(), &request.products);

        // Unparsable caller totals read as zero.
        let total_ttc_words = match &totals {
            Some(t) => amount_in_words(t.total_ttc.trim().parse().unwrap_or(0.0)),
            None => NO_TOTAL_WORDS.to_string(),
        };

        Self {
            document_title: request.doc_type.title(),
            company: &request.company_info,
            client: &request.client_info,
            document: &request.document_info,
            products: request
                .products
                .iter()
                .map(|product| ProductLine {
                    product,
                    line_total: line_total(product),
                })
                .collect(),
            totals,
            doc_type: request.doc_type,
            generated_date: format_generated_at(&now),
            total_ttc_words,
            logo_url: request.logo_url.as_deref(),
        }
    }
}

/// A rendered PDF ready to be sent.
#[derive(Debug)]
pub struct GeneratedDocument {
    /// Suggested file name, `<numero>.pdf`
    pub filename: String,
    pub pdf: Vec<u8>,
}

/// Turns generation requests into PDF files.
pub struct DocumentService {
    templates: TemplateService,
    renderer: Arc<dyn PdfRenderer>,
    layout: PageLayout,
    render_permits: Arc<Semaphore>,
    render_timeout: Duration,
}

impl DocumentService {
    pub fn new(
        templates: TemplateService,
        renderer: Arc<dyn PdfRenderer>,
        max_concurrent_renders: usize,
        render_timeout: Duration,
    ) -> Self {
        Self {
            templates,
            renderer,
            layout: PageLayout::a4(),
            render_permits: Arc::new(Semaphore::new(max_concurrent_renders.max(1))),
            render_timeout,
        }
    }

    /// Render the HTML for `request` without converting it to PDF.
    pub fn render_html(&self, request: &GeneratePdfRequest) -> Result<String, DocumentError> {
        let context = DocumentContext::new(request, Local::now());
        Ok(self.templates.render(request.doc_type, &context)?)
    }

    /// Produce the PDF for `request`.
    pub async fn generate(
        &self,
        request: &GeneratePdfRequest,
    ) -> Result<GeneratedDocument, DocumentError> {
        let html = self.render_html(request)?;

        // The permit moves into the blocking job: a render that outlives its
        // request (timeout, dropped connection) still counts against the limit.
        let permit = Arc::clone(&self.render_permits)
            .acquire_owned()
            .await
            .map_err(|_| DocumentError::Unavailable)?;

        let renderer = Arc::clone(&self.renderer);
        let layout = self.layout;
        let job = tokio::task::spawn_blocking(move || {
            let _permit = permit;
            renderer.render(&html, &layout)
        });

        let pdf = tokio::time::timeout(self.render_timeout, job)
            .await
            .map_err(|_| DocumentError::Timeout(self.render_timeout))?
            .map_err(|e| DocumentError::Task(e.to_string()))??;

        tracing::info!(
            doc_type = %request.doc_type,
            numero = %request.document_info.numero,
            products = request.products.len(),
            bytes = pdf.len(),
            "Document generated"
        );

        Ok(GeneratedDocument {
            filename: format!("{}.pdf", request.document_info.numero),
            pdf,
        })
    }
}

/// Errors from document generation.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error(transparent)]
    Template(#[from] TemplateError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("Rendering timed out after {0:?}")]
    Timeout(Duration),

    #[error("Rendering task failed: {0}")]
    Task(String),

    #[error("Renderer is shutting down")]
    Unavailable,
}
