use shared::utils::{digits_only, group_thousands};

/// Display text for an empty money buffer.
pub const EMPTY_MONEY: &str = "0,00";

/// Point-of-sale style money mask: the last two digits are always centavos
/// and every new digit shifts the others one place up.
///
/// `"5"` -> `"0,05"`, `"100"` -> `"1,00"`, `"123456"` -> `"1.234,56"`.
/// Non-digits are dropped, so the field's current text can be fed back in.
pub fn mask_money(raw: &str) -> String {
    let digits = digits_only(raw);
    if digits.is_empty() {
        return EMPTY_MONEY.to_string();
    }

    let padded = format!("{:0>3}", digits);
    let (integer, cents) = padded.split_at(padded.len() - 2);
    // Re-fed display text carries the old leading zero ("0,05" -> "005").
    let integer = match integer.trim_start_matches('0') {
        "" => "0",
        trimmed => trimmed,
    };
    format!("{},{}", group_thousands(integer), cents)
}
