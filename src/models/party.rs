// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Issuer and recipient of a document.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// The company issuing the document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(feature = "binding-generation", ts(export, export_to = "bindings/"))]
pub struct CompanyInfo {
    /// Legal name (e.g., "ABC Company SARL")
    pub raison_sociale: String,
    pub adresse: String,
    pub telephone: String,
    pub email: Option<String>,
    /// Tax identification number
    pub nif: String,
    /// Statistical identification number
    pub nis: String,
    /// Trade register number
    pub rc: String,
    /// Tax article number
    pub art: Option<String>,
}

/// The customer the document is addressed to.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(feature = "binding-generation", ts(export, export_to = "bindings/"))]
pub struct ClientInfo {
    pub nom: String,
    pub adresse: String,
    pub telephone: Option<String>,
    pub nif: Option<String>,
    pub nis: Option<String>,
    pub art: Option<String>,
}
