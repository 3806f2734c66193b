//! Subsequence relevance scoring for project completion. Self-contained on
//! purpose: the matching is small and fully specified, so it does not earn
//! an external dependency.

const MATCH_SCORE: i32 = 1;
const ADJACENCY_BONUS: i32 = 2;
const BOUNDARY_BONUS: i32 = 2;
const GAP_PENALTY: i32 = 1;

/// Score `search` against `target`, case-insensitively. `None` when the
/// search is not a subsequence of the target. Matching is greedy left to
/// right: each search character binds to its first remaining occurrence,
/// earning a bonus when adjacent to the previous match or sitting on a word
/// boundary, and paying for skipped characters in between.
pub fn score(search: &str, target: &str) -> Option<i32> {
    let search: Vec<char> = search.to_lowercase().chars().collect();
    let target: Vec<char> = target.to_lowercase().chars().collect();

    if search.is_empty() {
        return Some(0);
    }

    let mut total = 0;
    let mut cursor = 0;
    let mut previous: Option<usize> = None;

    for &wanted in &search {
        let position = (cursor..target.len()).find(|&index| target[index] == wanted)?;

        total += MATCH_SCORE;
        if let Some(previous) = previous {
            if position == previous + 1 {
                total += ADJACENCY_BONUS;
            } else {
                total -= GAP_PENALTY * (position - previous - 1) as i32;
            }
        }
        if position == 0 || is_boundary(target[position - 1]) {
            total += BOUNDARY_BONUS;
        }

        previous = Some(position);
        cursor = position + 1;
    }

    Some(total)
}

fn is_boundary(ch: char) -> bool {
    matches!(ch, '/' | '-' | '_' | '.' | ' ')
}
