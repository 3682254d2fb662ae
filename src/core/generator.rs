use rand::seq::SliceRandom;
use rand::Rng;

use super::checksum::calc_check_digit;
use super::error::BuildError;
use super::model::{ContainerNumber, EquipCategory, OwnerCode, MAX_SERIAL, SERIAL_SPACE};
use super::serial::SerialIter;
use super::transposition::check_transposition;

/// Serial numbers per owner whose checksum does not land on 10.
pub const CAPACITY_WITHOUT_TEN: u64 = 909_091;

/// Collects the settings for a [`UniqueGenerator`] and validates them.
#[derive(Debug, Clone)]
pub struct GeneratorBuilder {
    owners: Vec<OwnerCode>,
    count: u64,
    start: Option<u32>,
    end: Option<u32>,
    category: EquipCategory,
    exclude_check_digit_10: bool,
    exclude_transposition: bool,
}

impl GeneratorBuilder {
    pub fn new(owners: impl IntoIterator<Item = OwnerCode>) -> Self {
        Self {
            owners: owners.into_iter().collect(),
            count: 1,
            start: None,
            end: None,
            category: EquipCategory::U,
            exclude_check_digit_10: false,
            exclude_transposition: false,
        }
    }

    /// Number of container numbers to produce. Ignored when both
    /// [`start`](Self::start) and [`end`](Self::end) are set.
    pub fn count(mut self, count: u64) -> Self {
        self.count = count;
        self
    }

    pub fn start(mut self, start: u32) -> Self {
        self.start = Some(start);
        self
    }

    /// Last serial number to produce (inclusive).
    pub fn end(mut self, end: u32) -> Self {
        self.end = Some(end);
        self
    }

    pub fn category(mut self, category: EquipCategory) -> Self {
        self.category = category;
        self
    }

    /// Skip numbers whose raw checksum is 10 (printed as check digit 0).
    pub fn exclude_check_digit_10(mut self, exclude: bool) -> Self {
        self.exclude_check_digit_10 = exclude;
        self
    }

    /// Skip numbers that an adjacent swap could turn into another valid one.
    pub fn exclude_transposition(mut self, exclude: bool) -> Self {
        self.exclude_transposition = exclude;
        self
    }

    /// Unique numbers available per owner code under the current settings.
    pub fn capacity_per_owner(&self) -> u64 {
        if self.exclude_check_digit_10 {
            CAPACITY_WITHOUT_TEN
        } else {
            u64::from(SERIAL_SPACE)
        }
    }

    /// Validate the settings and set up a generator.
    ///
    /// Repeated owner codes count once. `rng` seeds the permuted serial order (when no range bound is set) and
    /// shuffles the owner codes.
    pub fn build<R: Rng + ?Sized>(self, rng: &mut R) -> Result<UniqueGenerator, BuildError> {
        for (field, bound) in [("start", self.start), ("end", self.end)] {
            if let Some(value) = bound.filter(|&v| v > MAX_SERIAL) {
                return Err(BuildError::SerialOutOfRange { field, value });
            }
        }

        let count = match (self.start, self.end) {
            (Some(start), Some(end)) => {
                let span = u64::from(end) + 1;
                if start > end {
                    span + u64::from(SERIAL_SPACE) - u64::from(start)
                } else {
                    span - u64::from(start)
                }
            }
            _ => self.count,
        };

        if count < 1 {
            return Err(BuildError::CountBelowMinimum { count });
        }

        // A repeated code would pair the same owner with a serial twice.
        let per_owner = self.capacity_per_owner();
        let mut codes = self.owners;
        codes.sort_unstable();
        codes.dedup();

        if codes.is_empty() {
            return Err(BuildError::NoOwnerCodes);
        }
        let capacity = codes.len() as u64 * per_owner;
        if count > capacity {
            return Err(BuildError::CapacityExceeded {
                count,
                owners: codes.len(),
                per_owner,
                capacity,
            });
        }

        let serials = match (self.start, self.end) {
            (Some(start), _) => SerialIter::sequential(i64::from(start)),
            // count <= capacity, which fits comfortably in i64
            (None, Some(end)) => SerialIter::sequential(i64::from(end) + 1 - count as i64),
            (None, None) => SerialIter::random(rng),
        };

        codes.shuffle(rng);

        tracing::debug!(
            count,
            owners = codes.len(),
            start_serial = serials.current(),
            exclude_check_digit_10 = self.exclude_check_digit_10,
            exclude_transposition = self.exclude_transposition,
            "generator built"
        );

        Ok(UniqueGenerator {
            max_visits: codes.len() as u64 * u64::from(SERIAL_SPACE),
            codes,
            category: self.category,
            owner_offset: 0,
            serials,
            count,
            generated: 0,
            visited: 0,
            exclude_check_digit_10: self.exclude_check_digit_10,
            exclude_transposition: self.exclude_transposition,
            current: None,
        })
    }
}

/// Produces distinct container numbers, never repeating an
/// (owner code, serial number) pair within one run.
///
/// Each serial number is paired with the owner at
/// `(serial + owner_offset) % owners`. The offset moves on by one at the end
/// of every pass over the serial space, so over `owners` passes every pair
/// comes up exactly once.
#[derive(Debug, Clone)]
pub struct UniqueGenerator {
    codes: Vec<OwnerCode>,
    category: EquipCategory,
    owner_offset: usize,
    serials: SerialIter,
    count: u64,
    generated: u64,
    visited: u64,
    max_visits: u64,
    exclude_check_digit_10: bool,
    exclude_transposition: bool,
    current: Option<ContainerNumber>,
}

impl UniqueGenerator {
    /// Produce the next number. Returns `false` once `count` numbers have
    /// been produced, or once every (owner, serial) pair has been tried.
    pub fn generate(&mut self) -> bool {
        while self.generated < self.count {
            if self.visited == self.max_visits {
                tracing::warn!(
                    generated = self.generated,
                    requested = self.count,
                    "every owner/serial pair used; stopping short"
                );
                self.count = self.generated;
                return false;
            }
            self.visited += 1;

            let serial = self.serials.current();
            let owner = self.codes[(serial as usize + self.owner_offset) % self.codes.len()];
            let raw = calc_check_digit(owner, self.category, serial);

            if self.serials.is_at_period_end() {
                self.owner_offset = (self.owner_offset + 1) % self.codes.len();
            }
            self.serials.advance();

            if self.exclude_check_digit_10 && raw == 10 {
                continue;
            }
            let check_digit = raw % 10;
            if self.exclude_transposition
                && !check_transposition(owner, self.category, serial, check_digit).is_empty()
            {
                continue;
            }

            self.current = Some(ContainerNumber::new(owner, self.category, serial, check_digit));
            self.generated += 1;
            return true;
        }
        false
    }

    /// The number produced by the last successful [`generate`](Self::generate).
    pub fn cont_num(&self) -> Option<&ContainerNumber> {
        self.current.as_ref()
    }

    /// Numbers produced so far.
    pub fn generated(&self) -> u64 {
        self.generated
    }

    /// Numbers this run will produce in total.
    pub fn target_count(&self) -> u64 {
        self.count
    }
}

impl Iterator for UniqueGenerator {
    type Item = ContainerNumber;

    fn next(&mut self) -> Option<ContainerNumber> {
        if self.generate() {
            self.current
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.count - self.generated) as usize;
        (0, Some(remaining))
    }
}
