// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for date/time formatting.

use chrono::{DateTime, NaiveDate, TimeZone};

/// Reformat an ISO `YYYY-MM-DD` date as `DD/MM/YYYY`.
///
/// Returns `None` when the input is not an ISO calendar date.
pub fn format_document_date(date: &str) -> Option<String> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .ok()
        .map(|d| d.format("%d/%m/%Y").to_string())
}

/// Format a generation timestamp as `DD/MM/YYYY HH:MM`.
pub fn format_generated_at<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.format("%d/%m/%Y %H:%M").to_string()
}
