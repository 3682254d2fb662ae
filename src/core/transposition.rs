use super::checksum::calc_check_digit;
use super::model::{ContainerNumber, EquipCategory, OwnerCode};

/// List the numbers a single adjacent swap could turn this one into while
/// still passing the check digit test.
///
/// Swaps inside the serial always change the checksum modulo 11, so they only
/// go unnoticed when 0 and 10 collapse onto the printed digit 0. Swapping the
/// last serial digit with the check digit can also survive when the check
/// digit is 3. For any other check digit the result is empty.
///
/// Results come in position order, with the check digit swap last.
pub fn check_transposition(
    owner: OwnerCode,
    category: EquipCategory,
    serial: u32,
    check_digit: u8,
) -> Vec<ContainerNumber> {
    let check_digit = check_digit % 10;
    let mut found = Vec::new();
    if check_digit != 0 && check_digit != 3 {
        return found;
    }

    let digits = serial_digits(serial);
    for i in 0..digits.len() - 1 {
        if digits[i] == digits[i + 1] {
            continue;
        }
        let mut swapped = digits;
        swapped.swap(i, i + 1);
        let candidate = digits_value(&swapped);
        if calc_check_digit(owner, category, candidate) % 10 == check_digit {
            found.push(ContainerNumber::new(owner, category, candidate, check_digit));
        }
    }

    let last = digits[5];
    if last != check_digit {
        let mut swapped = digits;
        swapped[5] = check_digit;
        let candidate = digits_value(&swapped);
        if calc_check_digit(owner, category, candidate) % 10 == last {
            found.push(ContainerNumber::new(owner, category, candidate, last));
        }
    }

    found
}

fn serial_digits(serial: u32) -> [u8; 6] {
    let mut digits = [0u8; 6];
    let mut rest = serial;
    for d in digits.iter_mut().rev() {
        *d = (rest % 10) as u8;
        rest /= 10;
    }
    digits
}

fn digits_value(digits: &[u8; 6]) -> u32 {
    digits.iter().fold(0, |acc, &d| acc * 10 + u32::from(d))
}
