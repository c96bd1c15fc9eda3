// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod document;
pub mod party;
pub mod product;

pub use document::{DocumentInfo, DocumentType, GeneratePdfRequest};
pub use party::{ClientInfo, CompanyInfo};
pub use product::{Product, Totals};
