use finance_engine::format::{money_text, parse_amount, to_canonical, to_display};
use finance_engine::masks::{mask_date, mask_money, reduce, Keystroke, MaskKind};
use finance_engine::reconciliation::aggregate_as_of;
use proptest::prelude::*;
use shared::models::{Cents, Direction, LineItem};

const TODAY: &str = "2024-06-30";

fn display_date_strategy() -> impl Strategy<Value = String> {
    "[0-9]{2}/[0-9]{2}/[0-9]{4}"
}

fn line_item_strategy() -> impl Strategy<Value = LineItem> {
    (
        0u64..100_000_000,
        proptest::option::of(0u64..200_000_000),
        "20[0-9]{2}-[01][0-9]-[0-3][0-9]",
    )
        .prop_map(|(amount, paid, date)| {
            let mut item = LineItem::new(money_text(amount as f64 / 100.0)).with_date(date);
            if let Some(paid) = paid {
                item = item.with_paid(paid as f64 / 100.0);
            }
            item
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_money_text_round_trips(centavos in 0u64..1_000_000_000) {
        let value = centavos as f64 / 100.0;
        prop_assert_eq!(parse_amount(money_text(value).as_str()), value);
    }

    #[test]
    fn prop_mask_money_matches_grammar(digits in "[0-9]{0,20}") {
        let masked = mask_money(&digits);
        let (integer, cents) = masked.split_once(',').expect("comma");
        prop_assert_eq!(cents.len(), 2);
        let groups: Vec<&str> = integer.split('.').collect();
        prop_assert!(!groups[0].is_empty() && groups[0].len() <= 3);
        for group in &groups[1..] {
            prop_assert_eq!(group.len(), 3);
        }
        prop_assert!(masked.chars().all(|c| c.is_ascii_digit() || c == '.' || c == ','));
    }

    #[test]
    fn prop_mask_money_preserves_value(digits in "[1-9][0-9]{0,12}") {
        let expected = digits.parse::<i64>().unwrap();
        prop_assert_eq!(Cents::from_reais(parse_amount(mask_money(&digits).as_str())), Cents::new(expected));
    }

    #[test]
    fn prop_date_conversion_is_idempotent(display in display_date_strategy()) {
        let canonical = to_canonical(&display);
        prop_assert_eq!(canonical.len(), 10);
        prop_assert_eq!(to_canonical(&to_display(&canonical)), canonical);
    }

    #[test]
    fn prop_mask_date_grows_monotonically(digits in "[0-9]{1,10}") {
        let mut previous = String::new();
        for end in 1..=digits.len() {
            let current = mask_date(&digits[..end]);
            prop_assert!(current.len() >= previous.len());
            for (idx, c) in previous.char_indices() {
                if c == '/' {
                    prop_assert_eq!(current.as_bytes()[idx], b'/');
                }
            }
            prop_assert!(current.matches('/').count() <= 2);
            previous = current;
        }
    }

    #[test]
    fn prop_reduce_matches_direct_mask(digits in "[0-9]{0,12}") {
        let mut buffer = String::new();
        let mut display = mask_date("");
        for c in digits.chars() {
            let step = reduce(MaskKind::Date, &buffer, Keystroke::Char(c));
            buffer = step.digits;
            display = step.display;
        }
        prop_assert_eq!(display, mask_date(&digits));
    }

    #[test]
    fn prop_aggregate_is_non_negative(items in proptest::collection::vec(line_item_strategy(), 0..40)) {
        let summary = aggregate_as_of(&items, Direction::Payable, TODAY);
        prop_assert!(!summary.outstanding.is_negative());
        prop_assert!(!summary.settled.is_negative());
        prop_assert!(summary.settled <= summary.total);
        prop_assert_eq!(summary.settled + summary.outstanding, summary.total);
        prop_assert!(summary.overdue_count <= items.len());
    }
}
