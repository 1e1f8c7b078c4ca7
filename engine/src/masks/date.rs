use shared::utils::digits_only;

/// DDMMYYYY
pub const MAX_DATE_DIGITS: usize = 8;

/// Grows `DD/MM/YYYY` left to right as digits arrive:
/// `"0"` -> `"0"`, `"0112"` -> `"01/12"`, `"01122024"` -> `"01/12/2024"`.
/// Digits past the eighth are dropped.
pub fn mask_date(raw: &str) -> String {
    let digits: String = digits_only(raw).chars().take(MAX_DATE_DIGITS).collect();
    match digits.len() {
        0..=2 => digits,
        3..=4 => format!("{}/{}", &digits[..2], &digits[2..]),
        _ => format!("{}/{}/{}", &digits[..2], &digits[2..4], &digits[4..]),
    }
}
