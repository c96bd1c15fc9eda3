// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Document kinds and the PDF generation request.

use super::{ClientInfo, CompanyInfo, Product, Totals};
use serde::{Deserialize, Serialize};
use std::fmt;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;
use validator::Validate;

/// Kind of commercial document to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(feature = "binding-generation", ts(export, export_to = "bindings/"))]
pub enum DocumentType {
    BonLivraison,
    BonCommande,
    Facture,
    FactureProforma,
    Proforma,
    BonRetour,
    FactureAvoir,
    BonVersement,
    BonReception,
}

impl DocumentType {
    pub const ALL: [DocumentType; 9] = [
        DocumentType::BonLivraison,
        DocumentType::BonCommande,
        DocumentType::Facture,
        DocumentType::FactureProforma,
        DocumentType::Proforma,
        DocumentType::BonRetour,
        DocumentType::FactureAvoir,
        DocumentType::BonVersement,
        DocumentType::BonReception,
    ];

    /// Wire name, also the template file stem.
    pub fn as_str(self) -> &'static str {
        match self {
            DocumentType::BonLivraison => "bon-livraison",
            DocumentType::BonCommande => "bon-commande",
            DocumentType::Facture => "facture",
            DocumentType::FactureProforma => "facture-proforma",
            DocumentType::Proforma => "proforma",
            DocumentType::BonRetour => "bon-retour",
            DocumentType::FactureAvoir => "facture-avoir",
            DocumentType::BonVersement => "bon-versement",
            DocumentType::BonReception => "bon-reception",
        }
    }

    /// Heading printed on the document.
    pub fn title(self) -> &'static str {
        match self {
            DocumentType::BonLivraison => "BON DE LIVRAISON",
            DocumentType::BonCommande => "BON DE COMMANDE",
            DocumentType::Facture => "FACTURE",
            DocumentType::FactureProforma | DocumentType::Proforma => "FACTURE PROFORMA",
            DocumentType::BonRetour => "BON DE RETOUR",
            DocumentType::FactureAvoir => "FACTURE AVOIR",
            DocumentType::BonVersement => "BON DE VERSEMENT",
            DocumentType::BonReception => "BON DE RÉCEPTION",
        }
    }

    /// Template file used for this document kind.
    pub fn template_name(self) -> String {
        format!("{}.html", self.as_str())
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reference data of the document itself.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(feature = "binding-generation", ts(export, export_to = "bindings/"))]
pub struct DocumentInfo {
    /// Document number (e.g., "BL-2024-001"), also names the PDF file
    #[validate(length(min = 1, max = 100))]
    pub numero: String,
    /// Issue date, `YYYY-MM-DD`
    pub date: String,
    pub bon_commande: Option<String>,
    pub date_livraison: Option<String>,
    pub date_echeance: Option<String>,
    /// Payment terms (e.g., "Paiement à 30 jours")
    pub conditions: Option<String>,
    pub mode_paiement: Option<String>,
    /// Related invoice number (returns, credit notes)
    pub facture: Option<String>,
    pub motif_general: Option<String>,
}

/// Body of `POST /generate-pdf`.
///
/// `logoUrl` must be an absolute URL (`https://…`, `data:…`). The page is
/// loaded from a temporary file, so relative paths such as
/// `/static/logo.png` would not resolve and are rejected.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(feature = "binding-generation", ts(export, export_to = "bindings/"))]
pub struct GeneratePdfRequest {
    #[serde(rename = "type")]
    pub doc_type: DocumentType,
    pub company_info: CompanyInfo,
    pub client_info: ClientInfo,
    #[validate(nested)]
    pub document_info: DocumentInfo,
    pub products: Vec<Product>,
    pub totals: Option<Totals>,
    #[validate(url)]
    pub logo_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_type_wire_names() {
        for doc_type in DocumentType::ALL {
            let json = serde_json::to_string(&doc_type).unwrap();
            assert_eq!(json, format!("\"{}\"", doc_type.as_str()));
            let parsed: DocumentType = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, doc_type);
        }
        assert!(serde_json::from_str::<DocumentType>("\"devis\"").is_err());
    }

    #[test]
    fn test_titles() {
        assert_eq!(DocumentType::BonLivraison.title(), "BON DE LIVRAISON");
        assert_eq!(DocumentType::Proforma.title(), "FACTURE PROFORMA");
        assert_eq!(DocumentType::FactureProforma.title(), "FACTURE PROFORMA");
        assert_eq!(DocumentType::BonReception.title(), "BON DE RÉCEPTION");
        assert_eq!(DocumentType::FactureAvoir.template_name(), "facture-avoir.html");
    }

    #[test]
    fn test_logo_url_must_be_absolute() {
        let request = |logo: &str| -> GeneratePdfRequest {
            serde_json::from_value(serde_json::json!({
                "type": "facture",
                "companyInfo": {
                    "raisonSociale": "ABC", "adresse": "Alger", "telephone": "1",
                    "nif": "1", "nis": "2", "rc": "3"
                },
                "clientInfo": { "nom": "XYZ", "adresse": "Oran" },
                "documentInfo": { "numero": "F-1", "date": "2024-01-15" },
                "products": [],
                "logoUrl": logo
            }))
            .unwrap()
        };

        assert!(request("https://example.com/logo.png").validate().is_ok());
        assert!(request("data:image/png;base64,iVBORw0KGgo=").validate().is_ok());
        assert!(request("/static/logo.png").validate().is_err());
    }
}
