// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Line and document totals.

use crate::models::{Product, Totals};

/// Total of one line, tax included.
///
/// Lines without a unit price are worth nothing.
pub fn line_total(product: &Product) -> f64 {
    let Some(unit_price) = product.prix_unitaire else {
        return 0.0;
    };
    let subtotal = product.quantite * unit_price;
    match product.taux_tva {
        Some(rate) if rate != 0.0 => subtotal * (1.0 + rate / 100.0),
        _ => subtotal,
    }
}

/// Sum the lines into HT / TVA / TTC amounts formatted with two decimals.
pub fn compute_totals(products: &[Product]) -> Totals {
    let (total_ht, total_tva) = products.iter().fold((0.0, 0.0), |(ht, tva), p| {
        let base = p.quantite * p.prix_unitaire.unwrap_or(0.0);
        (ht + base, tva + base * p.taux_tva.unwrap_or(0.0) / 100.0)
    });
    let total_ttc = total_ht + total_tva;

    Totals {
        total_ht: format!("{total_ht:.2}"),
        total_tva: format!("{total_tva:.2}"),
        total_ttc: format!("{total_ttc:.2}"),
    }
}

/// Totals printed on the document: the caller's when given, otherwise
/// computed from the lines. Documents without lines have none.
pub fn effective_totals(provided: Option<&Totals>, products: &[Product]) -> Option<Totals> {
    match provided {
        Some(totals) => Some(totals.clone()),
        None if !products.is_empty() => Some(compute_totals(products)),
        None => None,
    }
}

/// Format an amount with two decimals and `,` thousands separators
/// (`1234567.891` → `1,234,567.89`).
///
/// Amounts that round to zero print as `0.00`, never `-0.00`.
pub fn format_amount(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let negative = value.is_sign_negative() && fixed.bytes().any(|b| b.is_ascii_digit() && b != b'0');
    format!("{}{}.{}", if negative { "-" } else { "" }, grouped, frac_part)
}
