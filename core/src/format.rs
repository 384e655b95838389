// storefront/src/format.rs

//! ru-RU price formatting: digits grouped by three with a no-break space,
//! followed by the rouble sign.

use num_format::{Locale, ToFormattedString};

pub const CURRENCY_SYMBOL: &str = "₽";

/// `12990` → `"12 990"` (the gap is U+00A0).
pub fn group_digits(amount: u64) -> String {
  amount.to_formatted_string(&Locale::ru)
}

/// `12990` → `"12 990 ₽"`.
pub fn format_price(amount: u64) -> String {
  format!("{} {}", group_digits(amount), CURRENCY_SYMBOL)
}
