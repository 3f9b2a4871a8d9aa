//! Propositional formulas over named variables.

use std::fmt;

use crate::ops::Connective;
use crate::table::{Assignment, TruthTable};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Formula {
    Const(bool),
    Var(String),
    Not(Box<Formula>),
    /// Any two-operand [`Connective`].
    Binary(Connective, Box<Formula>, Box<Formula>),
}

// Constructors
impl Formula {
    pub fn var(name: impl Into<String>) -> Self {
        Formula::Var(name.into())
    }

    pub fn constant(value: bool) -> Self {
        Formula::Const(value)
    }

    #[allow(clippy::should_implement_trait)]
    pub fn not(value: Self) -> Self {
        Formula::Not(Box::new(value))
    }

    /// # Panics
    ///
    /// Panics if `op` is not a binary connective.
    pub fn binary(op: Connective, lhs: Self, rhs: Self) -> Self {
        assert_eq!(op.arity(), 2, "{} is not a binary connective", op.name());
        Formula::Binary(op, Box::new(lhs), Box::new(rhs))
    }

    pub fn and(lhs: Self, rhs: Self) -> Self {
        Self::binary(Connective::And, lhs, rhs)
    }

    pub fn or(lhs: Self, rhs: Self) -> Self {
        Self::binary(Connective::Or, lhs, rhs)
    }

    pub fn implies(lhs: Self, rhs: Self) -> Self {
        Self::binary(Connective::Implies, lhs, rhs)
    }

    pub fn iff(lhs: Self, rhs: Self) -> Self {
        Self::binary(Connective::Biconditional, lhs, rhs)
    }

    pub fn xor(lhs: Self, rhs: Self) -> Self {
        Self::binary(Connective::Xor, lhs, rhs)
    }
}

/// A formula mentions a variable the assignment does not bind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnboundVariable(pub String);

impl fmt::Display for UnboundVariable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "variable `{}` is not bound", self.0)
    }
}

impl std::error::Error for UnboundVariable {}

impl Formula {
    pub fn eval(&self, assignment: &Assignment) -> Result<bool, UnboundVariable> {
        match self {
            Formula::Const(value) => Ok(*value),
            Formula::Var(name) => assignment.get(name).ok_or_else(|| UnboundVariable(name.clone())),
            Formula::Not(inner) => Ok(Connective::Not.apply(&[inner.eval(assignment)?])),
            Formula::Binary(op, lhs, rhs) => {
                let lhs = lhs.eval(assignment)?;
                let rhs = rhs.eval(assignment)?;
                Ok(op.apply(&[lhs, rhs]))
            }
        }
    }

    /// Distinct variable names, in order of first occurrence (left to right).
    pub fn variables(&self) -> Vec<String> {
        let mut names = Vec::new();
        self.collect_variables(&mut names);
        names
    }

    fn collect_variables(&self, names: &mut Vec<String>) {
        match self {
            Formula::Const(_) => {}
            Formula::Var(name) => {
                if !names.contains(name) {
                    names.push(name.clone());
                }
            }
            Formula::Not(inner) => inner.collect_variables(names),
            Formula::Binary(_, lhs, rhs) => {
                lhs.collect_variables(names);
                rhs.collect_variables(names);
            }
        }
    }

    /// Truth table over this formula's own variables, labelled with the formula.
    pub fn truth_table(&self) -> TruthTable {
        self.truth_table_over(&self.variables())
            .expect("every variable of the formula is bound")
    }

    /// Truth table over the given variables.
    ///
    /// Fails if the formula mentions a variable that is not listed.
    pub fn truth_table_over<S: AsRef<str>>(&self, variables: &[S]) -> Result<TruthTable, UnboundVariable> {
        Ok(TruthTable::try_new(variables, |a| self.eval(a))?.with_label(self.to_string()))
    }

    fn is_atomic(&self) -> bool {
        matches!(self, Formula::Const(_) | Formula::Var(_) | Formula::Not(_))
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Formula::Const(true) => write!(f, "⊤"),
            Formula::Const(false) => write!(f, "⊥"),
            Formula::Var(name) => write!(f, "{}", name),
            Formula::Not(inner) if inner.is_atomic() => write!(f, "¬{}", inner),
            Formula::Not(inner) => write!(f, "¬({})", inner),
            Formula::Binary(op, lhs, rhs) => {
                if lhs.is_atomic() {
                    write!(f, "{}", lhs)?;
                } else {
                    write!(f, "({})", lhs)?;
                }
                write!(f, " {} ", op)?;
                if rhs.is_atomic() {
                    write!(f, "{}", rhs)
                } else {
                    write!(f, "({})", rhs)
                }
            }
        }
    }
}
