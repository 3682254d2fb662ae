use rand::Rng;

use super::model::SERIAL_SPACE;
use super::permute::permute;

/// Cursor over the serial number space.
///
/// Either variant produces every value in `0..1_000_000` exactly once over
/// any 1,000,000 consecutive calls to [`advance`](Self::advance).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SerialIter {
    /// Counts up from `start`, wrapping at 1,000,000.
    Sequential { start: u32, cursor: u32 },
    /// Runs a lap counter through two rounds of [`permute`] with an offset
    /// in between.
    Random { offset: u32, lap: u32 },
}

impl SerialIter {
    /// Sequential cursor; `start` is reduced modulo 1,000,000 so negative or
    /// oversized starts wrap.
    pub fn sequential(start: i64) -> Self {
        let start = start.rem_euclid(i64::from(SERIAL_SPACE)) as u32;
        Self::Sequential {
            start,
            cursor: start,
        }
    }

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::with_offset(rng.gen_range(0..SERIAL_SPACE))
    }

    /// Permuted cursor with a fixed offset.
    pub fn with_offset(offset: u32) -> Self {
        Self::Random {
            offset: offset % SERIAL_SPACE,
            lap: 0,
        }
    }

    pub fn current(&self) -> u32 {
        match *self {
            Self::Sequential { cursor, .. } => cursor,
            Self::Random { offset, lap } => permute((permute(lap) + offset) % SERIAL_SPACE),
        }
    }

    pub fn advance(&mut self) {
        match self {
            Self::Sequential { cursor, .. } => *cursor = (*cursor + 1) % SERIAL_SPACE,
            Self::Random { lap, .. } => *lap = (*lap + 1) % SERIAL_SPACE,
        }
    }

    /// Whether the next [`advance`](Self::advance) completes a full pass.
    pub fn is_at_period_end(&self) -> bool {
        match *self {
            Self::Sequential { start, cursor } => (cursor + 1) % SERIAL_SPACE == start,
            Self::Random { lap, .. } => (lap + 1) % SERIAL_SPACE == 0,
        }
    }
}
