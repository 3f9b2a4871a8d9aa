//! Exhaustive property checks over the public API.

use std::collections::HashSet;

use logic_proofs::formula::{Formula, UnboundVariable};
use logic_proofs::ops::{biconditional, implies, not, xor, Connective};
use logic_proofs::proof::{contains_duplicate_contradiction, contains_duplicate_direct, insertion_sort_invariant};
use logic_proofs::table::TruthTable;
use logic_proofs::validate::validate_user_input;

// ─── Truth tables ──────────────────────────────────────────────────────────────

#[test]
fn table_covers_full_cartesian_product() {
    for n in 0..=4usize {
        let names: Vec<String> = (1..=n).map(|i| format!("x{}", i)).collect();
        let table = TruthTable::new(&names, |a| a.values().filter(|&v| v).count() % 2 == 1);
        assert_eq!(table.len(), 1 << n);

        let assignments: HashSet<Vec<bool>> = table.rows().iter().map(|r| r.assignment.values().collect()).collect();
        let expected: HashSet<Vec<bool>> = (0..1usize << n)
            .map(|i| (0..n).map(|k| (i >> (n - 1 - k)) & 1 == 1).collect())
            .collect();
        assert_eq!(assignments, expected);
    }
}

#[test]
fn table_rows_in_counting_order() {
    let table = TruthTable::new(&["a", "b", "c"], |_| true);
    for (i, row) in table.rows().iter().enumerate() {
        let index = row.assignment.values().fold(0, |acc, v| (acc << 1) | v as usize);
        assert_eq!(index, i);
    }
}

#[test]
fn table_propagates_formula_error() {
    let f = Formula::or(Formula::var("p"), Formula::var("missing"));
    let res = TruthTable::try_new(&["p"], |a| f.eval(a));
    assert_eq!(res.unwrap_err(), UnboundVariable("missing".to_string()));
}

#[test]
fn table_from_connectives() {
    for op in Connective::ALL {
        let names: Vec<String> = (0..op.arity()).map(|i| format!("x{}", i)).collect();
        let table = TruthTable::new(&names, |a| op.apply(&a.values().collect::<Vec<_>>()));
        assert_eq!(table.len(), 1 << op.arity(), "{}", op.name());
    }
}

// ─── Operators ─────────────────────────────────────────────────────────────────

#[test]
fn implies_false_iff_true_then_false() {
    for p in [false, true] {
        for q in [false, true] {
            assert_eq!(!implies(p, q), p && !q);
        }
    }
}

#[test]
fn biconditional_equals_not_xor() {
    for p in [false, true] {
        for q in [false, true] {
            assert_eq!(biconditional(p, q), not(xor(p, q)));
        }
    }
}

// ─── Validation ────────────────────────────────────────────────────────────────

#[test]
fn validation_fixed_examples() {
    let (ok, errors) = validate_user_input("john", "Password123", "john@email.com");
    assert!(ok);
    assert!(errors.is_empty());

    let (ok, errors) = validate_user_input("ab", "weak", "invalid-email");
    assert!(!ok);
    assert_eq!(errors.len(), 3);

    let (ok, errors) = validate_user_input("admin", "StrongPass1", "admin@company.com");
    assert!(ok);
    assert!(errors.is_empty());
}

// ─── Proofs ────────────────────────────────────────────────────────────────────

#[test]
fn duplicate_methods_agree_below_bound() {
    // every sequence of length <= 4 over {0, 1, 2, 3}
    let mut sequences: Vec<Vec<u8>> = Vec::new();
    for len in 0..=4u32 {
        for code in 0..4usize.pow(len) {
            sequences.push((0..len).map(|k| (code / 4usize.pow(k) % 4) as u8).collect());
        }
    }

    for items in sequences.iter() {
        let direct = contains_duplicate_direct(items).value;
        for max_value in items.len()..=items.len() + 2 {
            assert_eq!(contains_duplicate_contradiction(items, max_value).value, direct, "{:?}", items);
        }
    }
}

#[test]
fn pigeonhole_shortcut_ignores_content() {
    assert!(contains_duplicate_contradiction(&[1, 2, 3, 4, 5], 3).value);
    assert!(!contains_duplicate_direct(&[1, 2, 3, 4, 5]).value);
}

#[test]
fn insertion_sort_example() {
    let input = [64, 34, 25, 12, 22, 11, 90];
    let proof = insertion_sort_invariant(&input);
    assert_eq!(proof.value, vec![11, 12, 22, 25, 34, 64, 90]);
    assert_eq!(proof.steps.len(), input.len() - 1);
    assert_eq!(input, [64, 34, 25, 12, 22, 11, 90]);

    let mut expected = input.to_vec();
    expected.sort();
    assert_eq!(proof.value, expected);
}
