use criterion::{criterion_group, criterion_main, Criterion};
use pdf_generation_service::models::GeneratePdfRequest;
use pdf_generation_service::services::amount_words::amount_in_words;
use pdf_generation_service::services::DocumentService;
use pdf_generation_service::services::{PageLayout, PdfRenderer, RenderError, TemplateService};
use std::hint::black_box;
use std::sync::Arc;
use std::time::Duration;

struct NullRenderer;

impl PdfRenderer for NullRenderer {
    fn render(&self, _html: &str, _layout: &PageLayout) -> Result<Vec<u8>, RenderError> {
        Ok(Vec::new())
    }
}

/// An invoice with `lines` product lines.
fn invoice(lines: usize) -> GeneratePdfRequest {
    let products: Vec<_> = (0..lines)
        .map(|i| {
            serde_json::json!({
                "designation": format!("Article {i}"),
                "quantite": (i % 7 + 1) as f64,
                "unite": "pièce",
                "prixUnitaire": 1250.75 + i as f64,
                "tauxTVA": if i % 2 == 0 { 19 } else { 9 }
            })
        })
        .collect();

    serde_json::from_value(serde_json::json!({
        "type": "facture",
        "companyInfo": {
            "raisonSociale": "ABC Company SARL",
            "adresse": "123 Rue Example, Alger",
            "telephone": "+213 555 123 456",
            "nif": "123456789012345", "nis": "123456789012345", "rc": "12345678"
        },
        "clientInfo": { "nom": "Client XYZ", "adresse": "456 Rue Client, Oran" },
        "documentInfo": { "numero": "FAC-2024-001", "date": "2024-01-15" },
        "products": products
    }))
    .expect("valid invoice")
}

fn benchmark_rendering(c: &mut Criterion) {
    let dir = tempfile::tempdir().expect("temp dir");
    let service = DocumentService::new(
        TemplateService::new(dir.path()).expect("templates"),
        Arc::new(NullRenderer),
        1,
        Duration::from_secs(5),
    );

    let small = invoice(5);
    let large = invoice(200);

    let mut group = c.benchmark_group("document_html");
    group.bench_function("invoice_5_lines", |b| {
        b.iter(|| service.render_html(black_box(&small)).unwrap())
    });
    group.bench_function("invoice_200_lines", |b| {
        b.iter(|| service.render_html(black_box(&large)).unwrap())
    });
    group.finish();

    c.bench_function("amount_in_words", |b| {
        b.iter(|| amount_in_words(black_box(987_654_321.99)))
    });
}

criterion_group!(benches, benchmark_rendering);
criterion_main!(benches);
