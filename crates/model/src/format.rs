use num_format::{Locale, ToFormattedString};
use rust_decimal::{prelude::ToPrimitive, Decimal, RoundingStrategy};

/// Round half away from zero to `dp` places and always print `dp` places.
pub fn fixed(value: &Decimal, dp: u32) -> String {
    let mut rounded = value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(dp);
    rounded.to_string()
}

/// Format a dollar amount with thousands separators, e.g. `$12,500` or
/// `$1,250.50`.
pub fn usd(value: &Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let abs = rounded.abs();
    let whole = abs.trunc();
    let cents = abs - whole;
    let whole = match whole.to_u64() {
        Some(whole) => whole.to_formatted_string(&Locale::en),
        None => whole.to_string(),
    };
    if cents.is_zero() {
        format!("{sign}${whole}")
    } else {
        let cents = fixed(&cents, 2);
        format!("{sign}${whole}{}", cents.trim_start_matches('0'))
    }
}

/// Print a decimal without trailing zeros.
pub fn plain(value: &Decimal) -> String {
    value.normalize().to_string()
}
