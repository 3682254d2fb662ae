use proptest::prelude::*;

use contnum::core::permute::permute;
use contnum::core::{calc_check_digit, check_transposition, ContainerNumber, EquipCategory, OwnerCode};

fn owner_code() -> impl Strategy<Value = OwnerCode> {
    "[A-Z]{3}".prop_map(|s| OwnerCode::new(&s).unwrap())
}

fn category() -> impl Strategy<Value = EquipCategory> {
    prop_oneof![
        Just(EquipCategory::U),
        Just(EquipCategory::J),
        Just(EquipCategory::Z)
    ]
}

proptest! {
    #[test]
    fn checksum_stays_in_range(owner in owner_code(), cat in category(), serial in 0u32..1_000_000) {
        prop_assert!(calc_check_digit(owner, cat, serial) <= 10);
    }

    #[test]
    fn rendered_numbers_parse_back(owner in owner_code(), cat in category(), serial in 0u32..1_000_000) {
        let number = ContainerNumber::with_check_digit(owner, cat, serial);
        let text = number.to_string();
        prop_assert_eq!(text.len(), 11);
        let parsed: ContainerNumber = text.parse().unwrap();
        prop_assert_eq!(parsed, number);
        prop_assert!(parsed.is_valid());
    }

    #[test]
    fn single_digit_change_is_caught(owner in owner_code(), serial in 0u32..1_000_000, pos in 0u32..6, bump in 1u32..10) {
        let place = 10u32.pow(pos);
        let digit = serial / place % 10;
        let changed = serial - digit * place + (digit + bump) % 10 * place;
        let raw = calc_check_digit(owner, EquipCategory::U, serial);
        let changed_raw = calc_check_digit(owner, EquipCategory::U, changed);
        prop_assert_ne!(raw, changed_raw);
    }

    #[test]
    fn lookalikes_all_pass_the_checksum(owner in owner_code(), serial in 0u32..1_000_000) {
        let digit = calc_check_digit(owner, EquipCategory::U, serial) % 10;
        for other in check_transposition(owner, EquipCategory::U, serial, digit) {
            prop_assert!(other.is_valid());
            prop_assert_ne!(other.serial(), serial);
        }
    }

    #[test]
    fn permute_stays_in_domain(x in 0u32..1_000_000) {
        prop_assert!(permute(x) < 1_000_000);
    }
}
