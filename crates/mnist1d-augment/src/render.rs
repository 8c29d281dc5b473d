//! Debug ASCII rendering of a single signal.
//!
//! Each sample becomes one text row of `width` cells. Values in `[-1, 1)`
//! map across the row; the time axis runs top to bottom.

/// Renders `signal` as rows of `.` with a single `X` per row.
///
/// The `X` for value `v` sits at column `((v + 1) / 2 * width)` truncated
/// toward zero. Rows whose column falls outside `[0, width)` are all dots.
///
/// # Example
///
/// ```
/// use mnist1d_augment::render_ascii;
///
/// assert_eq!(render_ascii(&[-1.0, 0.0], 4), "X...\n..X.");
/// ```
pub fn render_ascii(signal: &[f64], width: usize) -> String {
    signal
        .iter()
        .map(|&v| render_row(v, width))
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_row(value: f64, width: usize) -> String {
    // `as` saturates NaN to 0; treat it as off-scale instead.
    let column = if value.is_finite() {
        Some(((value + 1.0) / 2.0 * width as f64) as i64)
    } else {
        None
    };

    (0..width)
        .map(|j| match column {
            Some(c) if c == j as i64 => 'X',
            _ => '.',
        })
        .collect()
}
