// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! PDF generation service
//!
//! Renders commercial documents (invoices, delivery notes, purchase orders,
//! ...) from HTML templates into A4 PDF files over HTTP.

pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;

use config::Config;
use services::DocumentService;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub documents: DocumentService,
}
