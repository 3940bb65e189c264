//! Bounded edit-distance computation
//!
//! Optimal string alignment distance: character insertions, deletions,
//! substitutions, and transpositions of adjacent characters each cost 1.
//! Transpositions are included because swapped adjacent letters are the
//! dominant real-world typo pattern for place names.

use smallvec::SmallVec;

/// Inline capacity for the character buffers; street names rarely exceed
/// this, so the common case stays off the heap.
const INLINE_CHARS: usize = 32;

type CharBuf = SmallVec<[char; INLINE_CHARS]>;

/// Compute the edit distance between two strings.
///
/// # Example
///
/// ```rust
/// use streetcheck_core::distance::edit_distance;
///
/// assert_eq!(edit_distance("kitten", "sitting"), 3);
/// assert_eq!(edit_distance("main", "mian"), 1); // one transposition
/// ```
pub fn edit_distance(a: &str, b: &str) -> usize {
    let cap = a.chars().count() + b.chars().count();
    bounded_edit_distance(a, b, cap).unwrap_or(cap)
}

/// Compute the edit distance between two strings, giving up once it is
/// known to exceed `max`.
///
/// Returns `None` when the true distance is greater than `max`; otherwise
/// the returned value equals the unbounded distance. The bound is purely a
/// performance cutoff and never changes the result.
///
/// # Example
///
/// ```rust
/// use streetcheck_core::distance::bounded_edit_distance;
///
/// assert_eq!(bounded_edit_distance("main", "man", 1), Some(1));
/// assert_eq!(bounded_edit_distance("main", "pine", 1), None);
/// ```
pub fn bounded_edit_distance(a: &str, b: &str, max: usize) -> Option<usize> {
    let source: CharBuf = a.chars().collect();
    let target: CharBuf = b.chars().collect();

    let m = source.len();
    let n = target.len();

    // The length difference is a lower bound on the distance.
    if m.abs_diff(n) > max {
        return None;
    }
    if m == 0 {
        return Some(n);
    }
    if n == 0 {
        return Some(m);
    }

    // Three rows are needed so the transposition case can reach back two
    // positions.
    let mut two_ago: Vec<usize> = vec![0; n + 1];
    let mut prev_row: Vec<usize> = (0..=n).collect();
    let mut curr_row: Vec<usize> = vec![0; n + 1];

    let mut prev_min = 0;

    for i in 1..=m {
        curr_row[0] = i;
        let mut row_min = i;

        for j in 1..=n {
            let cost = usize::from(source[i - 1] != target[j - 1]);

            let mut value = (prev_row[j] + 1) // deletion
                .min(curr_row[j - 1] + 1) // insertion
                .min(prev_row[j - 1] + cost); // substitution

            if i > 1
                && j > 1
                && source[i - 1] == target[j - 2]
                && source[i - 2] == target[j - 1]
            {
                value = value.min(two_ago[j - 2] + 1); // transposition
            }

            curr_row[j] = value;
            row_min = row_min.min(value);
        }

        // Every later cell derives from this row or the previous one, so
        // once both row minima exceed the bound no path can come back
        // under it.
        if row_min > max && prev_min > max {
            return None;
        }
        prev_min = row_min;

        std::mem::swap(&mut two_ago, &mut prev_row);
        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    let distance = prev_row[n];
    (distance <= max).then_some(distance)
}
