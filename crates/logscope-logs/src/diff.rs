//! Positional line diff
//!
//! Lines are compared index by index up to the length of the shorter input.
//! Lines past that point are never reported, and an inserted or deleted line
//! shows up as a run of mismatches on every following index rather than as a
//! single insertion. Only trailing `\r`/`\n` are ignored in the comparison.

use logscope_core::DiffEntry;

/// Compare two line sequences position by position
pub fn diff_lines<A, B>(first: &[A], second: &[B]) -> Vec<DiffEntry>
where
    A: AsRef<str>,
    B: AsRef<str>,
{
    first
        .iter()
        .zip(second.iter())
        .enumerate()
        .filter_map(|(position, (a, b))| {
            let a = trim_terminator(a.as_ref());
            let b = trim_terminator(b.as_ref());
            (a != b).then(|| DiffEntry::new(position, a, b))
        })
        .collect()
}

fn trim_terminator(line: &str) -> &str {
    line.trim_end_matches(['\r', '\n'])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_is_empty() {
        let lines = vec!["boot", "ready", "shutdown"];
        assert!(diff_lines(&lines, &lines).is_empty());
        assert!(diff_lines::<&str, &str>(&[], &[]).is_empty());
    }

    #[test]
    fn test_single_mismatch() {
        let diff = diff_lines(&["x", "y", "z"], &["x", "Y", "z"]);
        assert_eq!(diff, vec![DiffEntry::new(1, "y", "Y")]);
    }

    #[test]
    fn test_stops_at_shorter_sequence() {
        let first = ["a", "b", "c", "d", "e"];
        let second = ["A", "B", "C"];
        let diff = diff_lines(&first, &second);
        assert_eq!(diff.len(), 3);
        assert!(diff.iter().all(|d| d.position < 3));

        // Extra trailing lines alone are not differences
        assert!(diff_lines(&["a", "b", "c", "d"], &["a", "b"]).is_empty());
        assert!(diff_lines(&["a"], &["a", "extra"]).is_empty());
    }

    #[test]
    fn test_insertion_cascades() {
        let diff = diff_lines(&["a", "b", "c"], &["new", "a", "b"]);
        let positions: Vec<usize> = diff.iter().map(|d| d.position).collect();
        assert_eq!(positions, vec![0, 1, 2]);
    }

    #[test]
    fn test_only_trailing_terminators_ignored() {
        assert!(diff_lines(&["a\n", "b\r\n"], &["a", "b"]).is_empty());

        let diff = diff_lines(&["a ", " b"], &["a", "b"]);
        assert_eq!(diff.len(), 2);
        assert_eq!(diff[0], DiffEntry::new(0, "a ", "a"));
    }

    #[test]
    fn test_mixed_owned_and_borrowed() {
        let first: Vec<String> = vec!["one".into(), "two".into()];
        let diff = diff_lines(&first, &["one", "2"]);
        assert_eq!(diff, vec![DiffEntry::new(1, "two", "2")]);
    }
}
