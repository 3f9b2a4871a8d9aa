//! # logic-proofs: propositional logic and proof techniques in Rust
//!
//! **`logic-proofs`** is a small teaching library showing how propositional logic
//! and textbook proof techniques show up in everyday programming.
//!
//! ## Key Features
//!
//! - **Boolean operators**: AND, OR, NOT, IMPLIES, BICONDITIONAL and XOR as plain
//!   functions, plus the [`Connective`][crate::ops::Connective] enum for dispatching on them.
//! - **Truth tables**: exhaustive enumeration of all `2^n` assignments of named variables,
//!   with a separate text renderer and the table's *function number* for equivalence checks.
//! - **Formulas**: a small expression tree that evaluates against an assignment and prints
//!   itself with the usual symbols (`∧ ∨ ¬ → ↔ ⊕`).
//! - **Validation**: form validation built from conjunctions of simple predicates,
//!   reporting every failed condition at once.
//! - **Proofs**: direct proof, proof by contradiction (pigeonhole principle), and a
//!   loop-invariant proof of insertion sort, each returning its result with a narrative.
//!
//! ## Basic Usage
//!
//! ```rust
//! use logic_proofs::formula::Formula;
//! use logic_proofs::proof::insertion_sort_invariant;
//!
//! // (p ∧ q) → r
//! let f = Formula::implies(
//!     Formula::and(Formula::var("p"), Formula::var("q")),
//!     Formula::var("r"),
//! );
//! let table = f.truth_table();
//! assert_eq!(table.len(), 8);
//! assert_eq!(table.count_true(), 7);
//! println!("{}", table);
//!
//! let proof = insertion_sort_invariant(&[3, 1, 2]);
//! assert_eq!(proof.value, vec![1, 2, 3]);
//! println!("{}", proof);
//! ```
//!
//! All functions are pure: nothing here keeps state between calls, and nothing
//! writes to the console except the `logic-proofs` binary.

pub mod formula;
pub mod laws;
pub mod ops;
pub mod proof;
pub mod table;
pub mod validate;
