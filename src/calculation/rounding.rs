//! Shared rounding rule for derived hour values.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds to 2 decimal places, midpoints away from zero.
///
/// Matches the arithmetic rounding the presentation layer applies to
/// displayed hours.
pub(crate) fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
