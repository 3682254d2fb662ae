pub mod checksum;
pub mod error;
pub mod generator;
pub mod model;
pub mod permute;
pub mod serial;
pub mod transposition;

pub use checksum::calc_check_digit;
pub use error::{BuildError, ParseError};
pub use generator::{GeneratorBuilder, UniqueGenerator};
pub use model::{ContainerNumber, EquipCategory, OwnerCode};
pub use transposition::check_transposition;
