//! Display currency handling
//!
//! Currency is purely a display-label substitution: a symbol plus grouped
//! 2-decimal number formatting. No conversion is performed and nothing here
//! enters the projection engine.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Supported display currencies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Currency {
    Usd,
    Eur,
    Gbp,
    Jpy,
    Cad,
    Aud,
}

impl Currency {
    /// ISO-style code used in CLI arguments and scenario files
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
            Currency::Jpy => "JPY",
            Currency::Cad => "CAD",
            Currency::Aud => "AUD",
        }
    }

    /// Display symbol prefixed to formatted amounts
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Usd => "$",
            Currency::Eur => "\u{20ac}",
            Currency::Gbp => "\u{a3}",
            Currency::Jpy => "\u{a5}",
            Currency::Cad => "C$",
            Currency::Aud => "A$",
        }
    }

    /// Parse a currency code (case-insensitive)
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_uppercase().as_str() {
            "USD" => Some(Currency::Usd),
            "EUR" => Some(Currency::Eur),
            "GBP" => Some(Currency::Gbp),
            "JPY" => Some(Currency::Jpy),
            "CAD" => Some(Currency::Cad),
            "AUD" => Some(Currency::Aud),
            _ => None,
        }
    }

    /// Format an amount as symbol + thousands-grouped value with 2 decimals,
    /// e.g. `$1,234,567.89`
    pub fn format(&self, amount: Decimal) -> String {
        format!("{}{}", self.symbol(), group_thousands(amount))
    }
}

impl Default for Currency {
    fn default() -> Self {
        Currency::Usd
    }
}

/// Render a decimal with 2 fixed decimals and `,` thousands separators.
/// The decimal separator is always `.` regardless of display currency.
fn group_thousands(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let plain = format!("{:.2}", rounded);

    let (sign, digits) = match plain.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", plain.as_str()),
    };
    let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits, "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{}{}.{}", sign, grouped, frac_part)
}
