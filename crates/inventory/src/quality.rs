use serde::{Deserialize, Serialize};

use gildedrose_core::ValueObject;

/// Quality of a stock item, always within `[Quality::MIN, Quality::MAX]`.
///
/// The bound lives in the value itself: every constructor and every
/// arithmetic helper clamps, so no update rule can produce an out-of-range
/// quality by forgetting to check.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub struct Quality(i64);

impl Quality {
    pub const MIN: i64 = 0;
    pub const MAX: i64 = 50;

    /// Fixed quality reported by legendary items. Deliberately outside `MIN..=MAX`
    /// and never stored in a `Quality`.
    pub const LEGENDARY: i64 = 80;

    /// Build a quality, clamping `value` into `[MIN, MAX]`.
    pub fn new(value: i64) -> Self {
        Self(value.clamp(Self::MIN, Self::MAX))
    }

    pub fn value(self) -> i64 {
        self.0
    }

    pub fn raised_by(self, amount: i64) -> Self {
        Self::new(self.0.saturating_add(amount))
    }

    pub fn lowered_by(self, amount: i64) -> Self {
        Self::new(self.0.saturating_sub(amount))
    }
}

impl ValueObject for Quality {}

impl Default for Quality {
    fn default() -> Self {
        Self(Self::MIN)
    }
}

impl From<i64> for Quality {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl From<Quality> for i64 {
    fn from(value: Quality) -> Self {
        value.0
    }
}

impl core::fmt::Display for Quality {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}
