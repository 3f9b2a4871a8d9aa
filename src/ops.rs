//! Boolean operators with standard two-valued semantics.
//!
//! The free functions are the textbook definitions. [`Connective`] names the same
//! operators so that they can be dispatched, printed, and enumerated.

use std::fmt;

/// Conjunction: `p ∧ q`.
pub fn and(p: bool, q: bool) -> bool {
    p && q
}

/// Disjunction: `p ∨ q`.
pub fn or(p: bool, q: bool) -> bool {
    p || q
}

/// Negation: `¬p`.
pub fn not(p: bool) -> bool {
    !p
}

/// Material implication: `p → q`.
///
/// False only when `p` is true and `q` is false.
pub fn implies(p: bool, q: bool) -> bool {
    !p || q
}

/// Biconditional: `p ↔ q`.
///
/// True when `p` and `q` have the same truth value.
pub fn biconditional(p: bool, q: bool) -> bool {
    p == q
}

/// Exclusive or: `p ⊕ q`.
///
/// True when exactly one of `p`, `q` is true.
pub fn xor(p: bool, q: bool) -> bool {
    p != q
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Connective {
    And,
    Or,
    Not,
    Implies,
    Biconditional,
    Xor,
}

impl Connective {
    pub const ALL: [Connective; 6] = [
        Connective::And,
        Connective::Or,
        Connective::Not,
        Connective::Implies,
        Connective::Biconditional,
        Connective::Xor,
    ];

    /// Number of operands the connective takes.
    pub fn arity(self) -> usize {
        match self {
            Connective::Not => 1,
            _ => 2,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Connective::And => "∧",
            Connective::Or => "∨",
            Connective::Not => "¬",
            Connective::Implies => "→",
            Connective::Biconditional => "↔",
            Connective::Xor => "⊕",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Connective::And => "AND",
            Connective::Or => "OR",
            Connective::Not => "NOT",
            Connective::Implies => "IMPLIES",
            Connective::Biconditional => "BICONDITIONAL",
            Connective::Xor => "XOR",
        }
    }

    /// Applies the connective to its operands.
    ///
    /// # Panics
    ///
    /// Panics if `args.len()` differs from [`arity`][Connective::arity].
    pub fn apply(self, args: &[bool]) -> bool {
        assert_eq!(
            args.len(),
            self.arity(),
            "{} expects {} operand(s), got {}",
            self.name(),
            self.arity(),
            args.len()
        );
        match self {
            Connective::Not => not(args[0]),
            Connective::And => and(args[0], args[1]),
            Connective::Or => or(args[0], args[1]),
            Connective::Implies => implies(args[0], args[1]),
            Connective::Biconditional => biconditional(args[0], args[1]),
            Connective::Xor => xor(args[0], args[1]),
        }
    }
}

impl fmt::Display for Connective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
