//! Input normalization shared by every request setter.
//!
//! Setters never fail: values outside the accepted range are dropped,
//! oversized inputs are truncated and list growth stops at a cap. All of
//! those rules live here so the individual setters cannot drift apart.

/// Lowest accepted feedback score (`FeedbackScoreMin`/`FeedbackScoreMax`).
pub const MIN_FEEDBACK_SCORE: i64 = 0;
/// Lowest accepted bid count (`MinBids`/`MaxBids`).
pub const MIN_BID_COUNT: i64 = 0;
/// Lowest accepted `MaxDistance`.
pub const MIN_DISTANCE: i64 = 5;
/// Lowest accepted `MaxHandlingTime`.
pub const MIN_HANDLING_TIME: i64 = 1;
/// Lowest accepted `MinQuantity`/`MaxQuantity`.
pub const MIN_QUANTITY: i64 = 1;

pub const MAX_KEYWORDS_LEN: usize = 350;
pub const MIN_PAGE: i64 = 1;
pub const MAX_PAGE: i64 = 100;

/// Returns the decimal encoding of `value` when it is at least `min`.
pub fn integer_at_least(value: i64, min: i64) -> Option<String> {
    (value >= min).then(|| value.to_string())
}

/// Encodes a non-negative price with exactly two decimals.
///
/// Negative and non-finite prices yield `None`.
pub fn price(value: f64) -> Option<String> {
    (value.is_finite() && value >= 0.0).then(|| format!("{value:.2}"))
}

/// Resolves the keyword field after a `with_keywords(input)` call.
///
/// Inputs longer than [`MAX_KEYWORDS_LEN`] characters are truncated, an empty
/// input clears the field, and a single-character input leaves `current`
/// untouched.
pub fn keywords(current: &str, input: &str) -> String {
    match input.chars().count() {
        1 => current.to_owned(),
        len if len > MAX_KEYWORDS_LEN => input.chars().take(MAX_KEYWORDS_LEN).collect(),
        _ => input.to_owned(),
    }
}

/// Clamps a page number or page size into `[1, 100]`.
pub fn page(value: i64) -> u32 {
    // The clamp bounds fit in u32.
    value.clamp(MIN_PAGE, MAX_PAGE) as u32
}

/// Appends `value` unless `list` already holds `cap` entries.
pub fn push_capped(list: &mut Vec<String>, value: String, cap: usize) {
    if list.len() < cap {
        list.push(value);
    }
}

/// Set-union of `values` into `list`, stopping once `list` holds `cap`
/// distinct entries. Existing order is kept; new values are appended in
/// input order.
pub fn union_capped<I>(list: &mut Vec<String>, values: I, cap: usize)
where
    I: IntoIterator<Item = String>,
{
    for value in values {
        if list.len() >= cap {
            break;
        }
        if !list.contains(&value) {
            list.push(value);
        }
    }
}
