// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! HTML-to-PDF conversion.
//!
//! Production rendering drives a headless Chromium over the DevTools
//! protocol. The conversion sits behind [`PdfRenderer`] so the HTTP layer can
//! be exercised without a browser.

use headless_chrome::types::PrintToPdfOptions;
use headless_chrome::{Browser, LaunchOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;

const MM_PER_INCH: f64 = 25.4;

/// Page size and margins, in millimetres.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageLayout {
    pub width_mm: f64,
    pub height_mm: f64,
    pub margin_top_mm: f64,
    pub margin_right_mm: f64,
    pub margin_bottom_mm: f64,
    pub margin_left_mm: f64,
}

impl PageLayout {
    /// A4 portrait with 20mm vertical and 15mm horizontal margins.
    pub fn a4() -> Self {
        Self {
            width_mm: 210.0,
            height_mm: 297.0,
            margin_top_mm: 20.0,
            margin_right_mm: 15.0,
            margin_bottom_mm: 20.0,
            margin_left_mm: 15.0,
        }
    }

    /// `@page` rule matching this layout.
    pub fn page_css(&self) -> String {
        let size = if *self == Self::a4() {
            "A4".to_string()
        } else {
            format!("{}mm {}mm", self.width_mm, self.height_mm)
        };
        format!(
            "@page {{ size: {}; margin: {}mm {}mm {}mm {}mm; }}",
            size, self.margin_top_mm, self.margin_right_mm, self.margin_bottom_mm, self.margin_left_mm
        )
    }

    /// Chromium print settings (inches).
    fn print_options(&self) -> PrintToPdfOptions {
        PrintToPdfOptions {
            print_background: Some(true),
            prefer_css_page_size: Some(true),
            paper_width: Some(self.width_mm / MM_PER_INCH),
            paper_height: Some(self.height_mm / MM_PER_INCH),
            margin_top: Some(self.margin_top_mm / MM_PER_INCH),
            margin_right: Some(self.margin_right_mm / MM_PER_INCH),
            margin_bottom: Some(self.margin_bottom_mm / MM_PER_INCH),
            margin_left: Some(self.margin_left_mm / MM_PER_INCH),
            ..Default::default()
        }
    }
}

/// Add the layout's `@page` stylesheet to a document.
///
/// The rule goes at the end of `<head>` when there is one so it wins over
/// the template's own page rules, otherwise in front of the markup.
pub fn inject_page_css(html: &str, layout: &PageLayout) -> String {
    let style = format!("<style>{}</style>", layout.page_css());
    match html.to_ascii_lowercase().find("</head>") {
        Some(pos) => {
            let mut out = String::with_capacity(html.len() + style.len());
            out.push_str(&html[..pos]);
            out.push_str(&style);
            out.push_str(&html[pos..]);
            out
        }
        None => format!("{style}{html}"),
    }
}

/// Converts a complete HTML document into PDF bytes.
///
/// Implementations are blocking; callers run them on the blocking pool.
pub trait PdfRenderer: Send + Sync {
    fn render(&self, html: &str, layout: &PageLayout) -> Result<Vec<u8>, RenderError>;
}

/// Chromium launch settings.
#[derive(Debug, Clone, Default)]
pub struct ChromeOptions {
    /// Browser binary; autodetected when `None`
    pub path: Option<PathBuf>,
    pub sandbox: bool,
    /// How long the browser may sit without DevTools traffic before it is
    /// shut down. It is relaunched on the next document.
    pub idle_timeout: Duration,
}

/// Renders with a shared headless Chromium, one tab per document.
pub struct ChromeRenderer {
    options: ChromeOptions,
    browser: Mutex<Option<Arc<Browser>>>,
}

impl ChromeRenderer {
    pub fn new(options: ChromeOptions) -> Self {
        Self {
            options,
            browser: Mutex::new(None),
        }
    }

    fn launch(&self) -> Result<Browser, RenderError> {
        let launch_options = LaunchOptions::default_builder()
            .headless(true)
            .sandbox(self.options.sandbox)
            .path(self.options.path.clone())
            .idle_browser_timeout(self.options.idle_timeout)
            .build()
            .map_err(|e| RenderError::Launch(format!("Failed to build launch options: {e}")))?;

        let browser = Browser::new(launch_options)
            .map_err(|e| RenderError::Launch(format!("Failed to launch browser: {e}")))?;
        tracing::info!(path = ?self.options.path, "Headless browser launched");
        Ok(browser)
    }

    /// The running browser, launching one if needed.
    fn browser(&self, relaunch: bool) -> Result<Arc<Browser>, RenderError> {
        let mut guard = self
            .browser
            .lock()
            .map_err(|_| RenderError::Browser("browser lock poisoned".to_string()))?;

        if relaunch {
            *guard = None;
        }
        if let Some(browser) = guard.as_ref() {
            return Ok(Arc::clone(browser));
        }

        let browser = Arc::new(self.launch()?);
        *guard = Some(Arc::clone(&browser));
        Ok(browser)
    }

    fn print(browser: &Browser, html: &str, layout: &PageLayout) -> Result<Vec<u8>, RenderError> {
        // Loaded from a file rather than a data: URL, which Chromium caps at 2MB.
        let page = write_page(html)?;
        let url = format!("file://{}", page.path().display());

        let tab = browser
            .new_tab()
            .map_err(|e| RenderError::Browser(format!("Failed to open tab: {e}")))?;
        let result = tab
            .navigate_to(&url)
            .and_then(|tab| tab.wait_until_navigated())
            .map_err(|e| RenderError::Load(e.to_string()))
            .and_then(|tab| {
                tab.print_to_pdf(Some(layout.print_options()))
                    .map_err(|e| RenderError::Print(e.to_string()))
            });

        if let Err(e) = tab.close(true) {
            tracing::warn!(error = %e, "Failed to close tab");
        }
        result
    }
}

/// Write `html` to a temporary `.html` file, removed when dropped.
fn write_page(html: &str) -> Result<tempfile::NamedTempFile, RenderError> {
    let mut page = tempfile::Builder::new()
        .prefix("document-")
        .suffix(".html")
        .tempfile()
        .map_err(|e| RenderError::Load(format!("Failed to create page file: {e}")))?;
    page.write_all(html.as_bytes())
        .and_then(|_| page.flush())
        .map_err(|e| RenderError::Load(format!("Failed to write page file: {e}")))?;
    Ok(page)
}

impl PdfRenderer for ChromeRenderer {
    fn render(&self, html: &str, layout: &PageLayout) -> Result<Vec<u8>, RenderError> {
        let html = inject_page_css(html, layout);
        let browser = self.browser(false)?;

        match Self::print(&browser, &html, layout) {
            // The browser may have exited (idle timeout, crash); retry once
            // with a fresh process.
            Err(RenderError::Browser(reason)) => {
                tracing::warn!(error = %reason, "Browser unavailable, relaunching");
                let browser = self.browser(true)?;
                Self::print(&browser, &html, layout)
            }
            result => result,
        }
    }
}

/// Errors from PDF rendering.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Failed to start renderer: {0}")]
    Launch(String),

    #[error("Renderer unavailable: {0}")]
    Browser(String),

    #[error("Failed to load document: {0}")]
    Load(String),

    #[error("Failed to print PDF: {0}")]
    Print(String),
}
