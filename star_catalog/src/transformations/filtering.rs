use crate::core::domain::StarEntry;

/// Whether a star of magnitude `mag` is bright enough for the star map
pub fn is_naked_eye_visible(mag: f64, limit: f64) -> bool {
    mag <= limit
}

/// Sort stars brightest first (ascending magnitude).
///
/// The sort is stable, so stars of equal magnitude keep their catalog order.
pub fn sort_by_magnitude(stars: &mut [StarEntry]) {
    stars.sort_by(|a, b| a.mag.total_cmp(&b.mag));
}

/// Check that every adjacent pair is in ascending magnitude order
pub fn is_sorted_by_magnitude(stars: &[StarEntry]) -> bool {
    stars.windows(2).all(|pair| pair[0].mag <= pair[1].mag)
}
