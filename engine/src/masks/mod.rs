// Keystroke-driven input masks.
// The digit buffer belongs to the caller; every function here is a pure map from buffer to text.
pub mod date;
pub mod money;

pub use date::{mask_date, MAX_DATE_DIGITS};
pub use money::{mask_money, EMPTY_MONEY};

use shared::utils::digits_only;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaskKind {
    Money,
    Date,
}

impl MaskKind {
    pub fn render(self, digits: &str) -> String {
        match self {
            MaskKind::Money => mask_money(digits),
            MaskKind::Date => mask_date(digits),
        }
    }

    // Brings an arbitrary buffer into the form `reduce` keeps it in.
    fn canonical_digits(self, raw: &str) -> String {
        let digits = digits_only(raw);
        match self {
            MaskKind::Money => digits.trim_start_matches('0').to_string(),
            MaskKind::Date => digits.chars().take(MAX_DATE_DIGITS).collect(),
        }
    }

    fn accepts_digit(self, digits: &str) -> bool {
        match self {
            MaskKind::Money => true,
            MaskKind::Date => digits.len() < MAX_DATE_DIGITS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keystroke {
    Char(char),
    Backspace,
    Clear,
}

/// Result of feeding one keystroke: the buffer to keep and the text to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaskStep {
    pub digits: String,
    pub display: String,
}

/// `(prior digits, keystroke) -> (next digits, display text)`.
///
/// Non-digit characters are ignored. Date buffers stop growing at eight
/// digits; money buffers drop leading zeros so a typed `0` on an empty field
/// keeps showing `0,00`.
pub fn reduce(kind: MaskKind, prior_digits: &str, key: Keystroke) -> MaskStep {
    let mut digits = kind.canonical_digits(prior_digits);
    match key {
        Keystroke::Char(c) if c.is_ascii_digit() => {
            if kind.accepts_digit(&digits) {
                digits.push(c);
            }
        }
        Keystroke::Char(_) => {}
        Keystroke::Backspace => {
            digits.pop();
        }
        Keystroke::Clear => digits.clear(),
    }
    let digits = kind.canonical_digits(&digits);
    let display = kind.render(&digits);
    MaskStep { digits, display }
}

/// Convenience holder for a caller that wants to keep buffer and kind together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaskedField {
    kind: MaskKind,
    digits: String,
}

impl MaskedField {
    pub fn new(kind: MaskKind) -> Self {
        MaskedField {
            kind,
            digits: String::new(),
        }
    }

    pub fn press(&mut self, key: Keystroke) -> String {
        let step = reduce(self.kind, &self.digits, key);
        self.digits = step.digits;
        step.display
    }

    pub fn type_str(&mut self, text: &str) -> String {
        for c in text.chars() {
            self.press(Keystroke::Char(c));
        }
        self.display()
    }

    pub fn display(&self) -> String {
        self.kind.render(&self.digits)
    }

    pub fn digits(&self) -> &str {
        &self.digits
    }

    pub fn kind(&self) -> MaskKind {
        self.kind
    }
}
