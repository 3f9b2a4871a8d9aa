//! Boolean-algebra laws and a small logic circuit.

use log::debug;

use crate::formula::Formula;
use crate::ops::{and, not, or};
use crate::table::TruthTable;

/// Both sides of a law evaluated at one point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LawCheck {
    pub inputs: Vec<bool>,
    pub left: bool,
    pub right: bool,
}

impl LawCheck {
    pub fn holds(&self) -> bool {
        self.left == self.right
    }
}

/// `¬(p ∧ q) ≡ ¬p ∨ ¬q` at (T,T), (T,F), (F,T), (F,F).
pub fn de_morgan() -> Vec<LawCheck> {
    [(true, true), (true, false), (false, true), (false, false)]
        .into_iter()
        .map(|(p, q)| LawCheck {
            inputs: vec![p, q],
            left: not(and(p, q)),
            right: or(not(p), not(q)),
        })
        .collect()
}

/// `p ∧ (q ∨ r) ≡ (p ∧ q) ∨ (p ∧ r)` at (T,T,F) and (F,T,T).
pub fn distributive() -> Vec<LawCheck> {
    [(true, true, false), (false, true, true)]
        .into_iter()
        .map(|(p, q, r)| LawCheck {
            inputs: vec![p, q, r],
            left: and(p, or(q, r)),
            right: or(and(p, q), and(p, r)),
        })
        .collect()
}

/// Whether two formulas agree on every assignment of their combined variables.
pub fn equivalent(lhs: &Formula, rhs: &Formula) -> bool {
    let mut variables = lhs.variables();
    for name in rhs.variables() {
        if !variables.contains(&name) {
            variables.push(name);
        }
    }
    let (Ok(left), Ok(right)) = (lhs.truth_table_over(&variables), rhs.truth_table_over(&variables)) else {
        unreachable!("all variables of both formulas are listed");
    };
    let res = left.function_number() == right.function_number();
    debug!("equivalent({}, {}) = {}", lhs, rhs, res);
    res
}

/// The circuit `(p ∧ ¬q) ∨ ¬r`.
pub fn circuit(p: bool, q: bool, r: bool) -> bool {
    or(and(p, not(q)), not(r))
}

pub fn circuit_table() -> TruthTable {
    TruthTable::new(&["p", "q", "r"], |a| circuit(a["p"], a["q"], a["r"])).with_label("Output")
}
