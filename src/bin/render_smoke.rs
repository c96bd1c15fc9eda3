// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Rendering smoke test.
//!
//! Converts a one-line document with the configured browser and checks that a
//! PDF comes back. Run at image build time so missing system libraries or
//! fonts fail the build instead of the first request.

use anyhow::{bail, Context};
use pdf_generation_service::config::Config;
use pdf_generation_service::services::{ChromeOptions, ChromeRenderer, PageLayout, PdfRenderer};
use std::time::Duration;

const SMOKE_HTML: &str = "<!DOCTYPE html><html><head><meta charset=\"utf-8\"></head>\
    <body><h1>BON DE RÉCEPTION</h1><p>Montant : mille dinars</p></body></html>";

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_target(false).init();

    let config = Config::from_env().context("Failed to load configuration")?;
    let renderer = ChromeRenderer::new(ChromeOptions {
        path: config.chrome_path.clone(),
        sandbox: config.chrome_sandbox,
        idle_timeout: Duration::from_secs(30),
    });

    let pdf = renderer
        .render(SMOKE_HTML, &PageLayout::a4())
        .context("Smoke render failed")?;

    if !pdf.starts_with(b"%PDF-") {
        bail!("renderer returned {} bytes without a PDF header", pdf.len());
    }

    tracing::info!(bytes = pdf.len(), "Smoke render succeeded");
    Ok(())
}
