use super::model::{EquipCategory, OwnerCode};

/// Character values from ISO 6346 Annex A. Position is value; `?` marks the
/// multiples of 11 that no letter takes.
const ALPHABET: &[u8; 39] = b"0123456789A?BCDEFGHIJK?LMNOPQRSTU?VWXYZ";

/// `c` must be an ASCII digit or uppercase letter; `OwnerCode` and
/// `EquipCategory` guarantee that for every caller in this crate.
fn char_value(c: u8) -> u32 {
    if c.is_ascii_digit() {
        return u32::from(c - b'0');
    }
    let position = ALPHABET.iter().position(|&a| a == c && a != b'?');
    debug_assert!(
        position.is_some(),
        "{:?} is outside the ISO 6346 alphabet",
        c as char
    );
    position.map_or(0, |p| p as u32)
}

/// Compute the raw ISO 6346 checksum, in `0..=10`, of owner code, category
/// and serial number.
///
/// Each of the ten characters is weighted by `2^position`; the sum is taken
/// modulo 11. A result of 10 is printed as the digit 0, so callers wanting the
/// check digit itself take the result modulo 10.
pub fn calc_check_digit(owner: OwnerCode, category: EquipCategory, serial: u32) -> u8 {
    let mut chars = [0u8; 10];
    chars[..3].copy_from_slice(owner.as_bytes());
    chars[3] = category.as_char() as u8;
    let mut rest = serial;
    for slot in chars[4..].iter_mut().rev() {
        *slot = b'0' + (rest % 10) as u8;
        rest /= 10;
    }

    let sum: u32 = chars
        .iter()
        .enumerate()
        .map(|(i, &c)| char_value(c) << i)
        .sum();
    (sum % 11) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owner(code: &str) -> OwnerCode {
        OwnerCode::new(code).unwrap()
    }

    #[test]
    fn letter_values_skip_multiples_of_eleven() {
        assert_eq!(char_value(b'A'), 10);
        assert_eq!(char_value(b'B'), 12);
        assert_eq!(char_value(b'K'), 21);
        assert_eq!(char_value(b'L'), 23);
        assert_eq!(char_value(b'U'), 32);
        assert_eq!(char_value(b'V'), 34);
        assert_eq!(char_value(b'Z'), 38);
        assert_eq!(char_value(b'7'), 7);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "outside the ISO 6346 alphabet")]
    fn unknown_character_fails_loudly() {
        char_value(b'a');
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "outside the ISO 6346 alphabet")]
    fn vacant_slot_is_not_a_character() {
        char_value(b'?');
    }

    #[test]
    fn known_vectors() {
        assert_eq!(calc_check_digit(owner("NYK"), EquipCategory::U, 8685), 2);
        assert_eq!(calc_check_digit(owner("CSQ"), EquipCategory::U, 305438), 3);
    }

    #[test]
    fn overflow_checksum_is_ten() {
        let raw = calc_check_digit(owner("NYK"), EquipCategory::U, 0);
        assert_eq!(raw, 10);
        assert_eq!(raw % 10, 0);
    }

    #[test]
    fn result_is_always_in_range() {
        for serial in (0..1_000_000).step_by(7919) {
            assert!(calc_check_digit(owner("ZZZ"), EquipCategory::Z, serial) <= 10);
        }
    }
}
