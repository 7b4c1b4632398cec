use rand::Rng;
use std::ops::RangeInclusive;
use uuid::Uuid;

/// Flight numbers run from AZ100 to AZ999
pub const FLIGHT_SUFFIX_RANGE: RangeInclusive<u16> = 100..=999;

/// Cabin rows available for seat assignment
pub const SEAT_ROW_RANGE: RangeInclusive<u8> = 1..=30;

/// Seat letters across a single-aisle cabin
pub const SEAT_LETTERS: [char; 6] = ['A', 'B', 'C', 'D', 'E', 'F'];

/// Source of the randomized fields of a booking confirmation.
///
/// Implementations must stay within the documented ranges; the booking
/// service formats what it is given without re-checking.
pub trait RandomSource: Send + Sync {
    /// Random identifier used to derive the booking reference
    fn reference_id(&self) -> Uuid;

    /// Flight number suffix within [`FLIGHT_SUFFIX_RANGE`]
    fn flight_suffix(&self) -> u16;

    /// Seat row within [`SEAT_ROW_RANGE`]
    fn seat_row(&self) -> u8;

    /// Seat letter from [`SEAT_LETTERS`]
    fn seat_letter(&self) -> char;
}

/// Production source backed by the thread-local RNG and UUID v4
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngSource;

impl ThreadRngSource {
    pub fn new() -> Self {
        Self
    }
}

impl RandomSource for ThreadRngSource {
    fn reference_id(&self) -> Uuid {
        Uuid::new_v4()
    }

    fn flight_suffix(&self) -> u16 {
        rand::thread_rng().gen_range(FLIGHT_SUFFIX_RANGE)
    }

    fn seat_row(&self) -> u8 {
        rand::thread_rng().gen_range(SEAT_ROW_RANGE)
    }

    fn seat_letter(&self) -> char {
        let index = rand::thread_rng().gen_range(0..SEAT_LETTERS.len());
        SEAT_LETTERS[index]
    }
}

/// Deterministic source returning preset values, for testing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedRandomSource {
    pub reference_id: Uuid,
    pub flight_suffix: u16,
    pub seat_row: u8,
    pub seat_letter: char,
}

impl Default for FixedRandomSource {
    fn default() -> Self {
        Self {
            reference_id: Uuid::from_u128(0x0123_4567_89ab_4cde_8f01_2345_6789_abcd),
            flight_suffix: 100,
            seat_row: 1,
            seat_letter: 'A',
        }
    }
}

impl RandomSource for FixedRandomSource {
    fn reference_id(&self) -> Uuid {
        self.reference_id
    }

    fn flight_suffix(&self) -> u16 {
        self.flight_suffix
    }

    fn seat_row(&self) -> u8 {
        self.seat_row
    }

    fn seat_letter(&self) -> char {
        self.seat_letter
    }
}
