//! Name similarity check
//!
//! Decides whether a reference name returned by the lookup is close enough to the
//! user's query to be reported as a match. Tolerates at most one typo: a single
//! insertion, deletion or substitution.
//!
//! The check is a greedy single pass and stops at the second mismatch. It does not
//! backtrack, so a transposition ("tomaot" for "tomato") counts as two typos and is
//! rejected.

/// Maximum number of typos tolerated between candidate and query
pub const MAX_TYPOS: usize = 1;

/// Whether `candidate` is an acceptable match for `query`
pub fn is_acceptable_match(candidate: &str, query: &str) -> bool {
    if candidate.contains(query) || candidate == query {
        return true;
    }

    let candidate: Vec<char> = candidate.chars().collect();
    let query: Vec<char> = query.chars().collect();

    if candidate.len().abs_diff(query.len()) > MAX_TYPOS {
        return false;
    }

    let (mut i, mut j) = (0, 0);
    let mut typos = 0;

    while i < candidate.len() && j < query.len() {
        if candidate[i] == query[j] {
            i += 1;
            j += 1;
            continue;
        }

        typos += 1;
        if typos > MAX_TYPOS {
            return false;
        }

        if candidate.len() == query.len() {
            // substitution
            i += 1;
            j += 1;
        } else if candidate.len() > query.len() {
            // deletion
            i += 1;
        } else {
            // insertion
            j += 1;
        }
    }

    if i < candidate.len() || j < query.len() {
        typos += 1;
    }

    typos <= MAX_TYPOS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical() {
        assert!(is_acceptable_match("tomato", "tomato"));
    }

    #[test]
    fn test_substring_rule() {
        assert!(is_acceptable_match("tomato", "tomat"));
        assert!(is_acceptable_match("tomatoes", "tomato"));
        assert!(is_acceptable_match("rice, raw, milled", "rice"));
    }

    #[test]
    fn test_single_substitution() {
        assert!(is_acceptable_match("tomato", "tomado"));
        assert!(is_acceptable_match("tomato", "xomato"));
    }

    #[test]
    fn test_single_deletion_from_query() {
        // query is missing a character in the middle
        assert!(is_acceptable_match("banana", "banna"));
        assert!(is_acceptable_match("tomato", "tmato"));
    }

    #[test]
    fn test_single_insertion_in_query() {
        assert!(is_acceptable_match("banana", "bannana"));
        assert!(is_acceptable_match("tomato", "tomatoo"));
        assert!(is_acceptable_match("tomato", "xtomato"));
    }

    #[test]
    fn test_transposition_is_rejected() {
        assert!(!is_acceptable_match("tomato", "tomaot"));
    }

    #[test]
    fn test_multiple_substitutions_rejected() {
        assert!(!is_acceptable_match("tomato", "potato"));
    }

    #[test]
    fn test_length_difference_over_one_rejected() {
        assert!(!is_acceptable_match("tomato", "tomatoxx"));
        assert!(!is_acceptable_match("banana", "ban ana s"));
    }

    #[test]
    fn test_empty_query_is_substring() {
        assert!(is_acceptable_match("tomato", ""));
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        assert!(is_acceptable_match("crème", "creme"));
        assert!(!is_acceptable_match("crème brûlée", "creme brulee"));
    }

    #[test]
    fn test_greedy_walk_can_reject_true_single_edit() {
        // "ab" -> "ba" differs by a single transposition but two greedy mismatches
        assert!(!is_acceptable_match("ab", "ba"));
        // deletion detected late still passes when the tail realigns
        assert!(is_acceptable_match("abcd", "abd"));
    }
}
