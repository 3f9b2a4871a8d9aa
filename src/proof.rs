//! Proof techniques applied to small algorithms.
//!
//! Every demonstration returns a [`Proof`]: the computed value together with a
//! human-readable account of how it was established.
//!
//! - **Direct proof**: exhibit the witness. [`contains_duplicate_direct`] scans
//!   for a repeated element.
//! - **Proof by contradiction**: assume there are no duplicates and derive a
//!   contradiction from the pigeonhole principle
//!   ([`contains_duplicate_contradiction`]).
//! - **Loop invariant**: state a property, show it holds initially, is kept by
//!   every iteration, and implies the goal on termination
//!   ([`insertion_sort_invariant`]).

use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;

use log::{debug, trace};

/// A computed value and the narrative that justifies it.
///
/// The narrative is built append-only: optional premises, one line per step,
/// and an optional conclusion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Proof<T> {
    pub value: T,
    pub premises: Vec<String>,
    pub steps: Vec<String>,
    pub conclusion: Option<String>,
}

impl<T> Proof<T> {
    fn new(value: T) -> Self {
        Self {
            value,
            premises: Vec::new(),
            steps: Vec::new(),
            conclusion: None,
        }
    }

    fn with_step(mut self, step: String) -> Self {
        self.steps.push(step);
        self
    }

    /// All narrative lines in order.
    pub fn lines(&self) -> impl Iterator<Item = &str> + '_ {
        self.premises
            .iter()
            .chain(self.steps.iter())
            .chain(self.conclusion.iter())
            .map(String::as_str)
    }

    /// The narrative, one line per entry.
    pub fn text(&self) -> String {
        self.lines().collect::<Vec<_>>().join("\n")
    }

    pub fn into_parts(self) -> (T, String) {
        let text = self.text();
        (self.value, text)
    }
}

impl<T> fmt::Display for Proof<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text())
    }
}

/// Direct proof: a duplicate exists iff some element has been seen before.
///
/// Stops at the first repeated value.
pub fn contains_duplicate_direct<T>(items: &[T]) -> Proof<bool>
where
    T: Eq + Hash + fmt::Display,
{
    let mut seen = HashSet::with_capacity(items.len());
    for item in items {
        if !seen.insert(item) {
            debug!("direct: duplicate {}", item);
            return Proof::new(true).with_step(format!("Direct proof: Found duplicate {}", item));
        }
    }
    Proof::new(false).with_step("Direct proof: No duplicates found after checking all elements".to_string())
}

/// Proof by contradiction via the pigeonhole principle.
///
/// If there are more items than `max_value` possible distinct values, duplicates
/// must exist and the items are not inspected at all. The bound is taken on
/// trust: nothing checks that the items really lie in a domain of that size.
/// Otherwise this falls back to [`contains_duplicate_direct`].
pub fn contains_duplicate_contradiction<T>(items: &[T], max_value: usize) -> Proof<bool>
where
    T: Eq + Hash + fmt::Display,
{
    if items.len() > max_value {
        debug!("contradiction: {} items > {} values", items.len(), max_value);
        return Proof::new(true).with_step(format!(
            "Proof by contradiction: Array has {} elements but only {} possible unique values. \
             By pigeonhole principle, duplicates must exist.",
            items.len(),
            max_value
        ));
    }
    contains_duplicate_direct(items)
}

/// Insertion sort, narrated as a loop-invariant proof.
///
/// Sorts a copy of `items` in ascending order; the input is left untouched. An
/// element moves left only past strictly greater elements, so equal elements
/// keep their relative order. There is one step per inserted element, i.e.
/// `items.len() - 1` steps for non-empty input.
pub fn insertion_sort_invariant<T>(items: &[T]) -> Proof<Vec<T>>
where
    T: PartialOrd + Clone + fmt::Display + fmt::Debug,
{
    let mut result = items.to_vec();
    let mut steps = Vec::with_capacity(result.len().saturating_sub(1));

    for i in 1..result.len() {
        let mut j = i;
        while j > 0 && result[j - 1] > result[j] {
            result.swap(j - 1, j);
            j -= 1;
        }
        trace!("inserted {:?} at {}", result[j], j);
        steps.push(format!(
            "Step {}: Inserted {}, elements 0 to {} now sorted: {:?}",
            i,
            result[j],
            i,
            &result[..=i]
        ));
    }

    Proof {
        value: result,
        premises: vec![
            "Loop Invariant: Elements 0 to i-1 are sorted".to_string(),
            "Base case: i=1, subarray [0] is trivially sorted".to_string(),
        ],
        steps,
        conclusion: Some("Termination: When i = n, entire array is sorted".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    #[test]
    fn test_direct_finds_first_repeat() {
        let proof = contains_duplicate_direct(&[1, 2, 3, 4, 2, 5]);
        assert!(proof.value);
        assert_eq!(proof.text(), "Direct proof: Found duplicate 2");

        let proof = contains_duplicate_direct(&[3, 1, 1, 3]);
        assert_eq!(proof.text(), "Direct proof: Found duplicate 1");
    }

    #[test]
    fn test_direct_no_duplicate() {
        let proof = contains_duplicate_direct(&[1, 2, 3]);
        assert!(!proof.value);
        assert_eq!(
            proof.text(),
            "Direct proof: No duplicates found after checking all elements"
        );
        assert!(!contains_duplicate_direct::<i32>(&[]).value);
    }

    #[test]
    fn test_pigeonhole_without_literal_duplicate() {
        let (value, text) = contains_duplicate_contradiction(&[1, 2, 3, 4, 5], 3).into_parts();
        assert!(value);
        assert!(text.starts_with("Proof by contradiction: Array has 5 elements but only 3 possible unique values."));
        assert!(text.ends_with("By pigeonhole principle, duplicates must exist."));
    }

    #[test]
    fn test_contradiction_delegates_to_direct() {
        let inputs: [&[i32]; 5] = [&[], &[7], &[1, 2, 3], &[1, 2, 1], &[5, 5, 5, 5]];
        for items in inputs {
            for max_value in items.len()..items.len() + 3 {
                assert_eq!(
                    contains_duplicate_contradiction(items, max_value),
                    contains_duplicate_direct(items),
                    "items={:?}, max_value={}",
                    items,
                    max_value
                );
            }
        }
    }

    #[test]
    fn test_insertion_sort() {
        let input = vec![64, 34, 25, 12, 22, 11, 90];
        let proof = insertion_sort_invariant(&input);
        assert_eq!(proof.value, vec![11, 12, 22, 25, 34, 64, 90]);
        assert_eq!(proof.steps.len(), input.len() - 1);
        assert_eq!(input, vec![64, 34, 25, 12, 22, 11, 90]);
        assert_eq!(proof.steps[0], "Step 1: Inserted 34, elements 0 to 1 now sorted: [34, 64]");
        assert_eq!(
            proof.steps[4],
            "Step 5: Inserted 11, elements 0 to 5 now sorted: [11, 12, 22, 25, 34, 64]"
        );
    }

    #[test]
    fn test_insertion_sort_text() {
        let proof = insertion_sort_invariant(&[2, 1]);
        assert_eq!(
            proof.text(),
            "Loop Invariant: Elements 0 to i-1 are sorted\n\
             Base case: i=1, subarray [0] is trivially sorted\n\
             Step 1: Inserted 1, elements 0 to 1 now sorted: [1, 2]\n\
             Termination: When i = n, entire array is sorted"
        );
    }

    #[test]
    fn test_insertion_sort_empty_and_single() {
        assert!(insertion_sort_invariant::<i32>(&[]).steps.is_empty());
        let proof = insertion_sort_invariant(&[42]);
        assert_eq!(proof.value, vec![42]);
        assert!(proof.steps.is_empty());
    }

    #[test]
    fn test_insertion_sort_is_stable() {
        #[derive(Debug, Clone)]
        struct Keyed(i32, char);

        impl PartialEq for Keyed {
            fn eq(&self, other: &Self) -> bool {
                self.0 == other.0
            }
        }

        impl PartialOrd for Keyed {
            fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
                self.0.partial_cmp(&other.0)
            }
        }

        impl fmt::Display for Keyed {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}{}", self.0, self.1)
            }
        }

        let input = [Keyed(2, 'a'), Keyed(1, 'b'), Keyed(2, 'c'), Keyed(1, 'd')];
        let tags: Vec<char> = insertion_sort_invariant(&input).value.iter().map(|k| k.1).collect();
        assert_eq!(tags, vec!['b', 'd', 'a', 'c']);
    }

    #[test]
    fn test_insertion_sort_step_shows_key_unquoted() {
        let proof = insertion_sort_invariant(&["b".to_string(), "a".to_string()]);
        assert_eq!(proof.steps, vec![r#"Step 1: Inserted a, elements 0 to 1 now sorted: ["a", "b"]"#]);
    }
}
