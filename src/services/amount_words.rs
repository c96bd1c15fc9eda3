// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! French spelling of amounts ("mille deux cent trente-quatre dinars et
//! cinquante-six centimes").
//!
//! Uses the traditional spelling: hyphens only inside the tens, "et" before
//! "un"/"onze", "vingt" and "cent" take an `s` when they end the number.

const UNITS: [&str; 17] = [
    "zéro", "un", "deux", "trois", "quatre", "cinq", "six", "sept", "huit", "neuf", "dix", "onze",
    "douze", "treize", "quatorze", "quinze", "seize",
];

const TENS: [&str; 7] = [
    "", "", "vingt", "trente", "quarante", "cinquante", "soixante",
];

const MILLION: u64 = 1_000_000;
const MILLIARD: u64 = 1_000_000_000;

/// Words for 0..100.
fn below_hundred(n: u64, terminal: bool) -> String {
    debug_assert!(n < 100);
    if n < 17 {
        return UNITS[n as usize].to_string();
    }
    if n < 20 {
        return format!("dix-{}", UNITS[(n - 10) as usize]);
    }

    // 70-79 and 90-99 count on from 60 and 80.
    let (base, rest) = match n / 10 {
        7 => ("soixante", n - 60),
        8 | 9 => ("quatre-vingt", n - 80),
        t => (TENS[t as usize], n % 10),
    };

    match rest {
        0 if base == "quatre-vingt" && terminal => "quatre-vingts".to_string(),
        0 => base.to_string(),
        1 | 11 if base != "quatre-vingt" => format!("{base} et {}", below_hundred(rest, true)),
        _ => format!("{base}-{}", below_hundred(rest, true)),
    }
}

/// Words for 0..1000. `terminal` is false when "mille" follows, which
/// keeps "cent" and "quatre-vingt" invariable.
fn below_thousand(n: u64, terminal: bool) -> String {
    debug_assert!(n < 1000);
    let hundreds = n / 100;
    let rest = n % 100;

    let head = match hundreds {
        0 => return below_hundred(rest, terminal),
        1 => "cent".to_string(),
        h => format!("{} cent", UNITS[h as usize]),
    };

    if rest == 0 {
        if hundreds > 1 && terminal {
            format!("{head}s")
        } else {
            head
        }
    } else {
        format!("{head} {}", below_hundred(rest, terminal))
    }
}

/// French cardinal words for an integer.
pub fn french_cardinal(n: i64) -> String {
    if n < 0 {
        return format!("moins {}", cardinal_unsigned(n.unsigned_abs()));
    }
    cardinal_unsigned(n as u64)
}

fn cardinal_unsigned(n: u64) -> String {
    if n == 0 {
        return UNITS[0].to_string();
    }

    let mut parts = Vec::new();

    let milliards = n / MILLIARD;
    if milliards > 0 {
        let count = if milliards < 1000 {
            below_thousand(milliards, true)
        } else {
            cardinal_unsigned(milliards)
        };
        let plural = if milliards > 1 { "s" } else { "" };
        parts.push(format!("{count} milliard{plural}"));
    }

    let millions = (n % MILLIARD) / MILLION;
    if millions > 0 {
        let plural = if millions > 1 { "s" } else { "" };
        parts.push(format!("{} million{plural}", below_thousand(millions, true)));
    }

    let thousands = (n % MILLION) / 1000;
    match thousands {
        0 => {}
        1 => parts.push("mille".to_string()),
        t => parts.push(format!("{} mille", below_thousand(t, false))),
    }

    let rest = n % 1000;
    if rest > 0 {
        parts.push(below_thousand(rest, true));
    }

    parts.join(" ")
}

/// Spell an amount in dinars and centimes.
///
/// The amount is rounded to the nearest centime first. Plurals follow the
/// magnitude, so `-12` is "moins douze dinars". A negative amount under one
/// dinar is spelled in centimes only ("moins cinquante centimes").
pub fn amount_in_words(amount: f64) -> String {
    if !amount.is_finite() {
        return amount.to_string();
    }

    let cents = (amount * 100.0).round() as i64;
    let negative = cents < 0;
    let cents = cents.unsigned_abs();
    let dinars = cents / 100;
    let centimes = cents % 100;

    let mut words = String::new();
    if negative {
        words.push_str("moins ");
    }

    if dinars > 0 || !negative {
        words.push_str(&cardinal_unsigned(dinars));
        words.push_str(" dinar");
        if dinars != 1 {
            words.push('s');
        }
        if centimes > 0 {
            words.push_str(" et ");
        }
    }

    if centimes > 0 {
        words.push_str(&cardinal_unsigned(centimes));
        words.push_str(" centime");
        if centimes > 1 {
            words.push('s');
        }
    }

    words
}
