//! Line synthesizer: turn a projected per-map value into a prop-style
//! half-step line.

use crate::engine::types::Line;
use crate::error::PickError;
use crate::Result;

/// Synthesize a reference line for a projected value.
///
/// Rounds to the nearest 0.5; when that lands on a whole number the line
/// shifts down 0.5 so it can never push. Values near zero floor at 0.5.
/// The mapping is monotonically non-decreasing in its input.
///
/// A negative input means a projection invariant was violated upstream
/// and fails with [`PickError::InvalidLine`].
pub fn synthesize_line(value: f64) -> Result<Line> {
    if value < 0.0 || !value.is_finite() {
        return Err(PickError::InvalidLine { value });
    }

    let mut half = (value * 2.0).round() / 2.0;
    if half.fract() == 0.0 {
        half -= 0.5;
    }
    if half < 0.5 {
        half = 0.5;
    }

    Ok(Line { value: half })
}
