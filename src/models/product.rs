// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Product lines and document totals.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// One line of a document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(feature = "binding-generation", ts(export, export_to = "bindings/"))]
pub struct Product {
    pub designation: String,
    pub quantite: f64,
    /// Unit of measure (e.g., "pièce")
    pub unite: String,
    /// Unit price before tax; absent on documents without prices
    pub prix_unitaire: Option<f64>,
    /// VAT rate in percent (e.g., 19)
    #[serde(rename = "tauxTVA")]
    pub taux_tva: Option<f64>,
    pub observation: Option<String>,
    pub motif_retour: Option<String>,
}

/// Pre-formatted document totals.
///
/// Amounts are strings so callers control their formatting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(feature = "binding-generation", ts(export, export_to = "bindings/"))]
pub struct Totals {
    #[serde(rename = "totalHT")]
    pub total_ht: String,
    #[serde(rename = "totalTVA")]
    pub total_tva: String,
    #[serde(rename = "totalTTC")]
    pub total_ttc: String,
}
