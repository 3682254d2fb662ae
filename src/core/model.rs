use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use super::checksum::calc_check_digit;
use super::error::ParseError;

/// Exclusive upper bound of the serial number space.
pub const SERIAL_SPACE: u32 = 1_000_000;
/// Largest valid serial number.
pub const MAX_SERIAL: u32 = SERIAL_SPACE - 1;

/// Three-letter owner code (the BIC registry prefix), e.g. `MSC`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OwnerCode([u8; 3]);

impl OwnerCode {
    pub fn new(code: &str) -> Result<Self, ParseError> {
        match code.as_bytes() {
            &[a, b, c] if [a, b, c].iter().all(u8::is_ascii_uppercase) => Ok(Self([a, b, c])),
            _ => Err(ParseError::OwnerCode(code.to_string())),
        }
    }

    /// The raw ASCII letters.
    pub fn as_bytes(&self) -> &[u8; 3] {
        &self.0
    }
}

impl FromStr for OwnerCode {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for OwnerCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in &self.0 {
            write!(f, "{}", b as char)?;
        }
        Ok(())
    }
}

impl Serialize for OwnerCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Equipment category identifier, the fourth character of a container number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub enum EquipCategory {
    /// Freight container.
    #[default]
    U,
    /// Detachable freight container-related equipment.
    J,
    /// Trailer or chassis.
    Z,
}

impl EquipCategory {
    pub fn as_char(self) -> char {
        match self {
            Self::U => 'U',
            Self::J => 'J',
            Self::Z => 'Z',
        }
    }

    pub fn from_char(c: char) -> Result<Self, ParseError> {
        match c {
            'U' => Ok(Self::U),
            'J' => Ok(Self::J),
            'Z' => Ok(Self::Z),
            other => Err(ParseError::Category(other)),
        }
    }
}

impl FromStr for EquipCategory {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_char(c.to_ascii_uppercase()),
            (Some(c), Some(_)) => Err(ParseError::Category(c)),
            (None, _) => Err(ParseError::Category(' ')),
        }
    }
}

impl fmt::Display for EquipCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A complete ISO 6346 container number such as `CSQU3054383`.
///
/// The check digit is stored as given; use [`ContainerNumber::is_valid`] to
/// compare it against the computed one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContainerNumber {
    owner: OwnerCode,
    category: EquipCategory,
    serial: u32,
    check_digit: u8,
}

impl ContainerNumber {
    /// Assemble a number from its fields. `serial` must be at most
    /// [`MAX_SERIAL`] and `check_digit` at most 9.
    pub fn new(owner: OwnerCode, category: EquipCategory, serial: u32, check_digit: u8) -> Self {
        debug_assert!(serial <= MAX_SERIAL);
        debug_assert!(check_digit <= 9);
        Self {
            owner,
            category,
            serial,
            check_digit,
        }
    }

    /// Assemble a number whose check digit is computed from the other fields.
    pub fn with_check_digit(owner: OwnerCode, category: EquipCategory, serial: u32) -> Self {
        let digit = calc_check_digit(owner, category, serial) % 10;
        Self::new(owner, category, serial, digit)
    }

    pub fn owner(&self) -> OwnerCode {
        self.owner
    }

    pub fn category(&self) -> EquipCategory {
        self.category
    }

    pub fn serial(&self) -> u32 {
        self.serial
    }

    pub fn check_digit(&self) -> u8 {
        self.check_digit
    }

    /// The check digit the other fields call for.
    pub fn expected_check_digit(&self) -> u8 {
        calc_check_digit(self.owner, self.category, self.serial) % 10
    }

    pub fn is_valid(&self) -> bool {
        self.check_digit == self.expected_check_digit()
    }
}

impl fmt::Display for ContainerNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{:06}{}",
            self.owner, self.category, self.serial, self.check_digit
        )
    }
}

impl FromStr for ContainerNumber {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts = parse_parts(s)?;
        let digit = parts.check_digit.ok_or(ParseError::MissingCheckDigit)?;
        Ok(Self::new(parts.owner, parts.category, parts.serial, digit))
    }
}

impl Serialize for ContainerNumber {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("ContainerNumber", 5)?;
        s.serialize_field("number", &self.to_string())?;
        s.serialize_field("owner", &self.owner)?;
        s.serialize_field("category", &self.category)?;
        s.serialize_field("serial", &format!("{:06}", self.serial))?;
        s.serialize_field("check_digit", &self.check_digit)?;
        s.end()
    }
}

/// Fields of a container number whose check digit may be absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parts {
    pub owner: OwnerCode,
    pub category: EquipCategory,
    pub serial: u32,
    pub check_digit: Option<u8>,
}

/// Split a 10-character (`ABCU123456`) or 11-character (`ABCU1234565`)
/// container number into its fields.
///
/// Surrounding whitespace is ignored and letters are uppercased; nothing else
/// is forgiven.
pub fn parse_parts(input: &str) -> Result<Parts, ParseError> {
    let upper = input.trim().to_ascii_uppercase();
    let chars: Vec<char> = upper.chars().collect();
    if chars.len() != 10 && chars.len() != 11 {
        return Err(ParseError::Length { len: chars.len() });
    }

    let owner: String = chars[..3].iter().collect();
    let owner = OwnerCode::new(&owner)?;
    let category = EquipCategory::from_char(chars[3])?;

    let serial_str: String = chars[4..10].iter().collect();
    if !serial_str.chars().all(|c| c.is_ascii_digit()) {
        return Err(ParseError::Serial(serial_str));
    }
    let serial = serial_str
        .parse::<u32>()
        .map_err(|_| ParseError::Serial(serial_str.clone()))?;

    let check_digit = match chars.get(10) {
        Some(&c) => Some(c.to_digit(10).ok_or(ParseError::CheckDigit(c))? as u8),
        None => None,
    };

    Ok(Parts {
        owner,
        category,
        serial,
        check_digit,
    })
}

/// Configuration for one generation run. Constructed from CLI arguments.
#[derive(Debug, Clone)]
pub struct GenerateConfig {
    pub owners: Vec<OwnerCode>,
    pub count: u64,
    pub start: Option<u32>,
    pub end: Option<u32>,
    pub category: EquipCategory,
    pub exclude_check_digit_10: bool,
    pub exclude_transposition: bool,
    pub seed: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owner(code: &str) -> OwnerCode {
        OwnerCode::new(code).unwrap()
    }

    #[test]
    fn owner_code_validation() {
        assert!(OwnerCode::new("MSC").is_ok());
        assert!(OwnerCode::new("msc").is_err());
        assert!(OwnerCode::new("MS").is_err());
        assert!(OwnerCode::new("MSCU").is_err());
        assert!(OwnerCode::new("M5C").is_err());
        assert_eq!(owner("HLX").to_string(), "HLX");
    }

    #[test]
    fn display_zero_pads_serial() {
        let num = ContainerNumber::new(owner("ABC"), EquipCategory::U, 42, 7);
        assert_eq!(num.to_string(), "ABCU0000427");
    }

    #[test]
    fn parse_eleven_chars() {
        let num: ContainerNumber = " csqu3054383 ".parse().unwrap();
        assert_eq!(num.owner(), owner("CSQ"));
        assert_eq!(num.category(), EquipCategory::U);
        assert_eq!(num.serial(), 305438);
        assert_eq!(num.check_digit(), 3);
        assert!(num.is_valid());
    }

    #[test]
    fn parse_ten_chars_has_no_check_digit() {
        let parts = parse_parts("NYKU008685").unwrap();
        assert_eq!(parts.serial, 8685);
        assert_eq!(parts.check_digit, None);
        assert_eq!(
            "NYKU008685".parse::<ContainerNumber>(),
            Err(ParseError::MissingCheckDigit)
        );
    }

    #[test]
    fn parse_rejects_malformed_fields() {
        assert_eq!(parse_parts("ABC"), Err(ParseError::Length { len: 3 }));
        assert_eq!(
            parse_parts("A1CU1234565"),
            Err(ParseError::OwnerCode("A1C".into()))
        );
        assert_eq!(parse_parts("ABCX1234565"), Err(ParseError::Category('X')));
        assert_eq!(
            parse_parts("ABCU12A4565"),
            Err(ParseError::Serial("12A456".into()))
        );
        assert_eq!(parse_parts("ABCU123456X"), Err(ParseError::CheckDigit('X')));
    }

    #[test]
    fn invalid_check_digit_is_detected() {
        let num: ContainerNumber = "CSQU3054384".parse().unwrap();
        assert!(!num.is_valid());
        assert_eq!(num.expected_check_digit(), 3);
    }

    #[test]
    fn serializes_all_fields() {
        let num = ContainerNumber::with_check_digit(owner("NYK"), EquipCategory::U, 8685);
        let json = serde_json::to_value(num).expect("serialize");
        assert_eq!(json["number"], "NYKU0086852");
        assert_eq!(json["owner"], "NYK");
        assert_eq!(json["category"], "U");
        assert_eq!(json["serial"], "008685");
        assert_eq!(json["check_digit"], 2);
    }
}
