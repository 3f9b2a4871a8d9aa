//! Truth-table generation.
//!
//! A [`TruthTable`] enumerates all `2^n` assignments of `n` named variables and
//! records the result of a predicate for each of them.
//!
//! # Row order
//!
//! Each variable is treated as a bit, with the **first declared variable as the
//! most significant bit**, and `false` comes before `true`. Row `i` therefore
//! assigns variable `k` the value of bit `n - 1 - k` of `i`:
//!
//! ```text
//! row | p q
//! ----+----
//!  0  | F F
//!  1  | F T
//!  2  | T F
//!  3  | T T
//! ```
//!
//! # Examples
//!
//! ```
//! use logic_proofs::ops::implies;
//! use logic_proofs::table::TruthTable;
//!
//! let table = TruthTable::new(&["p", "q"], |a| implies(a["p"], a["q"]));
//! assert_eq!(table.len(), 4);
//! assert_eq!(table.count_true(), 3);
//! ```
//!
//! Generation never writes anything; rendering is done separately by
//! [`TruthTable::to_text`] (or the [`Display`][fmt::Display] impl).

use std::collections::HashSet;
use std::convert::Infallible;
use std::fmt;
use std::ops::Index;

use log::{debug, trace};
use num_bigint::BigUint;
use num_traits::{One, Zero};

/// An ordered mapping from variable names to truth values.
///
/// Names are unique and kept in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Assignment {
    bindings: Vec<(String, bool)>,
}

impl Assignment {
    pub fn new() -> Self {
        Self::default()
    }

    /// The `index`-th assignment of `names` in table order.
    fn nth(names: &[String], index: usize) -> Self {
        let n = names.len();
        let bindings = names
            .iter()
            .enumerate()
            .map(|(k, name)| (name.clone(), (index >> (n - 1 - k)) & 1 == 1))
            .collect();
        Self { bindings }
    }

    /// Binds `name` to `value`.
    ///
    /// # Panics
    ///
    /// Panics if `name` is already bound.
    pub fn push(&mut self, name: impl Into<String>, value: bool) {
        let name = name.into();
        assert!(self.get(&name).is_none(), "variable `{}` is already bound", name);
        self.bindings.push((name, value));
    }

    pub fn get(&self, name: &str) -> Option<bool> {
        self.bindings.iter().find(|(n, _)| n == name).map(|&(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> + '_ {
        self.bindings.iter().map(|(n, v)| (n.as_str(), *v))
    }

    /// Values in declaration order.
    pub fn values(&self) -> impl Iterator<Item = bool> + '_ {
        self.bindings.iter().map(|&(_, v)| v)
    }
}

impl Index<&str> for Assignment {
    type Output = bool;

    /// # Panics
    ///
    /// Panics if `name` is not bound.
    fn index(&self, name: &str) -> &bool {
        match self.bindings.iter().find(|(n, _)| n == name) {
            Some((_, value)) => value,
            None => panic!("variable `{}` is not bound", name),
        }
    }
}

impl<S: Into<String>> FromIterator<(S, bool)> for Assignment {
    fn from_iter<I: IntoIterator<Item = (S, bool)>>(iter: I) -> Self {
        let mut assignment = Assignment::new();
        for (name, value) in iter {
            assignment.push(name, value);
        }
        assignment
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (name, value)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}={}", name, value)?;
        }
        write!(f, "}}")
    }
}

/// One assignment together with the predicate's result for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub assignment: Assignment,
    pub result: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruthTable {
    variables: Vec<String>,
    label: String,
    rows: Vec<Row>,
}

impl TruthTable {
    /// Builds the truth table of an infallible predicate.
    ///
    /// # Panics
    ///
    /// Panics if `variables` contains duplicates, or if there are too many
    /// variables to enumerate.
    pub fn new<S, F>(variables: &[S], mut predicate: F) -> Self
    where
        S: AsRef<str>,
        F: FnMut(&Assignment) -> bool,
    {
        match Self::try_new(variables, |a| Ok::<_, Infallible>(predicate(a))) {
            Ok(table) => table,
            Err(never) => match never {},
        }
    }

    /// Builds the truth table of a fallible predicate.
    ///
    /// The first error returned by `predicate` is passed through unchanged and
    /// generation stops there.
    ///
    /// # Panics
    ///
    /// Same as [`TruthTable::new`].
    pub fn try_new<S, F, E>(variables: &[S], mut predicate: F) -> Result<Self, E>
    where
        S: AsRef<str>,
        F: FnMut(&Assignment) -> Result<bool, E>,
    {
        let variables: Vec<String> = variables.iter().map(|s| s.as_ref().to_string()).collect();

        let mut seen = HashSet::new();
        for name in variables.iter() {
            assert!(seen.insert(name.as_str()), "duplicate variable `{}`", name);
        }

        let n = variables.len();
        assert!(
            n < usize::BITS as usize,
            "cannot enumerate 2^{} assignments",
            n
        );
        let total = 1usize << n;
        debug!("truth table over {:?}: {} rows", variables, total);

        let mut rows = Vec::new();
        for index in 0..total {
            let assignment = Assignment::nth(&variables, index);
            let result = predicate(&assignment)?;
            trace!("row {}: {} -> {}", index, assignment, result);
            rows.push(Row { assignment, result });
        }

        Ok(Self {
            variables,
            label: "Expression".to_string(),
            rows,
        })
    }

    /// Sets the name of the result column.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn variables(&self) -> &[String] {
        &self.variables
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Always `false`: even zero variables give one row.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn results(&self) -> impl Iterator<Item = bool> + '_ {
        self.rows.iter().map(|row| row.result)
    }

    /// Number of rows evaluating to `true`.
    pub fn count_true(&self) -> usize {
        self.results().filter(|&r| r).count()
    }

    pub fn is_tautology(&self) -> bool {
        self.results().all(|r| r)
    }

    pub fn is_contradiction(&self) -> bool {
        !self.results().any(|r| r)
    }

    /// The function number of the table: bit `i` is the result of row `i`.
    ///
    /// Over the same variables, two tables describe the same boolean function
    /// iff their function numbers are equal.
    pub fn function_number(&self) -> BigUint {
        let mut bits = BigUint::zero();
        for (i, row) in self.rows.iter().enumerate() {
            if row.result {
                bits |= BigUint::one() << i;
            }
        }
        bits
    }

    /// Same variables (in the same order) and the same result column.
    pub fn is_equivalent(&self, other: &TruthTable) -> bool {
        self.variables == other.variables && self.function_number() == other.function_number()
    }
}

/// How truth values are printed in a rendered table.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum CellStyle {
    /// `T` / `F`
    Letter,
    /// `1` / `0`
    Digit,
}

impl CellStyle {
    pub fn render(self, value: bool) -> &'static str {
        match (self, value) {
            (CellStyle::Letter, true) => "T",
            (CellStyle::Letter, false) => "F",
            (CellStyle::Digit, true) => "1",
            (CellStyle::Digit, false) => "0",
        }
    }
}

/// Layout options for [`TruthTable::to_text_with_style`].
#[derive(Debug, Clone)]
pub struct TableStyle {
    /// Rendering of truth values (default: `T`/`F`)
    pub cells: CellStyle,
    /// Right-alignment width of variable cells (default: 5)
    pub variable_width: usize,
    /// Right-alignment width of the result cell (default: 10)
    pub result_width: usize,
    /// Column separator (default: `" | "`)
    pub separator: &'static str,
}

impl Default for TableStyle {
    fn default() -> Self {
        Self {
            cells: CellStyle::Letter,
            variable_width: 5,
            result_width: 10,
            separator: " | ",
        }
    }
}

impl TableStyle {
    /// Compact `0`/`1` layout, as used for circuit listings.
    pub fn digits() -> Self {
        Self {
            cells: CellStyle::Digit,
            variable_width: 1,
            result_width: 1,
            separator: " | ",
        }
    }
}

impl TruthTable {
    pub fn to_text(&self) -> Result<String, fmt::Error> {
        self.to_text_with_style(&TableStyle::default())
    }

    pub fn to_text_with_style(&self, style: &TableStyle) -> Result<String, fmt::Error> {
        let mut text = String::new();
        self.write_with_style(&mut text, style)?;
        Ok(text)
    }

    /// Writes the header, a dash rule as wide as the header, and one line per row.
    pub fn write_with_style<W: fmt::Write>(&self, out: &mut W, style: &TableStyle) -> fmt::Result {
        let sep = style.separator;

        let header = format!("{}{}{}", self.variables.join(sep), sep, self.label);
        writeln!(out, "{}", header)?;
        writeln!(out, "{}", "-".repeat(header.chars().count()))?;

        for row in self.rows.iter() {
            let cells: Vec<String> = row
                .assignment
                .values()
                .map(|v| format!("{:>width$}", style.cells.render(v), width = style.variable_width))
                .collect();
            writeln!(
                out,
                "{}{}{:>width$}",
                cells.join(sep),
                sep,
                style.cells.render(row.result),
                width = style.result_width
            )?;
        }

        Ok(())
    }
}

impl fmt::Display for TruthTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_with_style(f, &TableStyle::default())
    }
}
