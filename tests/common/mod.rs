// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::body::Body;
use axum::http::{header, Request};
use pdf_generation_service::config::Config;
use pdf_generation_service::routes::create_router;
use pdf_generation_service::services::{
    DocumentService, PageLayout, PdfRenderer, RenderError, TemplateService,
};
use pdf_generation_service::AppState;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Bytes returned by [`RecordingRenderer`].
#[allow(dead_code)]
pub const FAKE_PDF: &[u8] = b"%PDF-1.7\n%fake\n";

/// Renderer that records the HTML it receives instead of starting a browser.
#[derive(Default)]
pub struct RecordingRenderer {
    pages: Mutex<Vec<String>>,
    failure: Option<String>,
    delay: Option<Duration>,
    active: AtomicUsize,
    peak: AtomicUsize,
}

#[allow(dead_code)]
impl RecordingRenderer {
    pub fn failing(reason: &str) -> Self {
        Self {
            failure: Some(reason.to_string()),
            ..Self::default()
        }
    }

    /// A renderer that blocks for `delay` on every document.
    pub fn slow(delay: Duration) -> Self {
        Self {
            delay: Some(delay),
            ..Self::default()
        }
    }

    /// Highest number of documents rendered at the same time.
    pub fn peak_concurrency(&self) -> usize {
        self.peak.load(Ordering::SeqCst)
    }

    /// HTML of every document rendered so far.
    pub fn pages(&self) -> Vec<String> {
        self.pages.lock().unwrap().clone()
    }

    /// HTML of the last document rendered.
    pub fn last_page(&self) -> String {
        self.pages().pop().expect("nothing was rendered")
    }
}

impl PdfRenderer for RecordingRenderer {
    fn render(&self, html: &str, _layout: &PageLayout) -> Result<Vec<u8>, RenderError> {
        if let Some(reason) = &self.failure {
            return Err(RenderError::Print(reason.clone()));
        }

        let active = self.active.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak.fetch_max(active, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            std::thread::sleep(delay);
        }
        self.active.fetch_sub(1, Ordering::SeqCst);

        self.pages.lock().unwrap().push(html.to_string());
        Ok(FAKE_PDF.to_vec())
    }
}

/// A router wired to a recording renderer and a private templates directory.
#[allow(dead_code)]
pub struct TestApp {
    pub router: axum::Router,
    pub state: Arc<AppState>,
    pub renderer: Arc<RecordingRenderer>,
    pub templates_dir: tempfile::TempDir,
}

#[allow(dead_code)]
impl TestApp {
    /// Write a template into the app's templates directory.
    pub fn write_template(&self, name: &str, source: &str) {
        std::fs::write(self.templates_dir.path().join(name), source).unwrap();
    }
}

/// Create a test app with offline dependencies.
#[allow(dead_code)]
pub fn create_test_app() -> TestApp {
    create_test_app_with(RecordingRenderer::default(), &[])
}

/// Create a test app with `renderer` and `templates` written up front.
#[allow(dead_code)]
pub fn create_test_app_with(renderer: RecordingRenderer, templates: &[(&str, &str)]) -> TestApp {
    build_test_app(renderer, templates, Config::test_default())
}

/// Create a test app whose renders are limited to `max_concurrent_renders`
/// at a time and time out after `render_timeout`.
#[allow(dead_code)]
pub fn create_test_app_with_limits(
    renderer: RecordingRenderer,
    max_concurrent_renders: usize,
    render_timeout: Duration,
) -> TestApp {
    let mut config = Config::test_default();
    config.max_concurrent_renders = max_concurrent_renders;
    config.render_timeout = render_timeout;
    build_test_app(renderer, &[], config)
}

fn build_test_app(
    renderer: RecordingRenderer,
    templates: &[(&str, &str)],
    mut config: Config,
) -> TestApp {
    let templates_dir = tempfile::tempdir().unwrap();
    for (name, source) in templates {
        std::fs::write(templates_dir.path().join(name), source).unwrap();
    }

    config.templates_dir = templates_dir.path().to_path_buf();

    let renderer = Arc::new(renderer);
    let documents = DocumentService::new(
        TemplateService::new(&config.templates_dir).unwrap(),
        renderer.clone(),
        config.max_concurrent_renders,
        config.render_timeout,
    );

    let state = Arc::new(AppState { config, documents });

    TestApp {
        router: create_router(state.clone()),
        state,
        renderer,
        templates_dir,
    }
}

/// A valid invoice request.
#[allow(dead_code)]
pub fn sample_request() -> serde_json::Value {
    serde_json::json!({
        "type": "facture",
        "companyInfo": {
            "raisonSociale": "ABC Company SARL",
            "adresse": "123 Rue Example, Alger",
            "telephone": "+213 555 123 456",
            "email": "contact@abc.com",
            "nif": "123456789012345",
            "nis": "123456789012345",
            "rc": "12345678"
        },
        "clientInfo": {
            "nom": "Client XYZ",
            "adresse": "456 Rue Client, Oran"
        },
        "documentInfo": {
            "numero": "FAC-2024-001",
            "date": "2024-01-15",
            "dateEcheance": "2024-02-15",
            "modePaiement": "Virement bancaire"
        },
        "products": [
            {
                "designation": "Produit A",
                "quantite": 10,
                "unite": "pièce",
                "prixUnitaire": 100.5,
                "tauxTVA": 19
            },
            {
                "designation": "Produit B",
                "quantite": 2,
                "unite": "kg",
                "prixUnitaire": 250
            }
        ]
    })
}

/// `POST uri` with a JSON body.
#[allow(dead_code)]
pub fn post_json(uri: &str, body: &serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Read a response body as JSON.
#[allow(dead_code)]
pub async fn json_body(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
