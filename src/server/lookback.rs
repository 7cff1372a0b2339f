//! "N hours ago" arithmetic for the `/past` route.

use chrono::TimeDelta;

/// Converts an hour count into a backwards offset.
///
/// The sign is discarded: `-5.5` and `5.5` both mean five and a half hours
/// ago. The fractional part is truncated to whole minutes
/// (`floor(60 * fraction)`), so `2.25` is 2h15m.
///
/// Returns `None` for NaN, infinities and values too large for a [`TimeDelta`].
pub fn lookback(hours: f64) -> Option<TimeDelta> {
    if !hours.is_finite() {
        return None;
    }

    let hours = hours.abs();
    let whole = hours.trunc();
    let minutes = (60.0 * (hours - whole)).floor();

    // `as` saturates; anything that large is rejected by the checked constructors.
    TimeDelta::try_hours(whole as i64)?.checked_add(&TimeDelta::try_minutes(minutes as i64)?)
}
