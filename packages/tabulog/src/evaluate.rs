use std::fmt::Display;
use std::ops::Not;

use indexmap::IndexMap;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::{
    ast::{Atom, Expr, Variable},
    parser::parse,
};

#[derive(Debug, Clone, Copy, Default, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub struct TruthValue(pub bool);

impl Not for TruthValue {
    type Output = TruthValue;

    fn not(self) -> TruthValue {
        TruthValue(!self.0)
    }
}

impl From<bool> for TruthValue {
    fn from(value: bool) -> Self {
        TruthValue(value)
    }
}

impl Display for TruthValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", if self.0 { "1" } else { "0" })
    }
}

#[derive(Debug, Clone, Default)]
pub struct Assignment(pub IndexMap<Variable, TruthValue>);

impl Assignment {
    pub fn new() -> Self {
        Assignment(IndexMap::new())
    }

    pub fn assign(&mut self, name: impl AsRef<str>, value: bool) {
        self.0.insert(Variable::new(name), TruthValue(value));
    }

    // Unassigned variables read as false.
    pub fn value_of(&self, variable: &Variable) -> TruthValue {
        self.0.get(variable).copied().unwrap_or(TruthValue(false))
    }

    // Assignment integers run from 2^n - 1 down to 0, and the variable at
    // position idx reads bit n - 1 - idx. The all-true row therefore comes
    // first and the all-false row last.
    pub fn enumerate(variables: &[Variable]) -> impl Iterator<Item = Assignment> + '_ {
        let n = variables.len();
        let count = 1u64.checked_shl(n as u32).unwrap_or(0);

        (0..count).rev().map(move |i| {
            let mut assignment = Assignment::new();

            for (idx, variable) in variables.iter().enumerate() {
                let bit = (i >> (n - 1 - idx)) & 1;
                assignment.0.insert(variable.clone(), TruthValue(bit == 1));
            }

            assignment
        })
    }
}

impl Display for Assignment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let entries = self
            .0
            .iter()
            .sorted_by(|a, b| a.0.name().cmp(b.0.name()))
            .map(|(variable, value)| {
                if value.0 {
                    variable.to_string()
                } else {
                    format!("¬{variable}")
                }
            })
            .join(", ");

        write!(f, "{{{entries}}}")
    }
}

pub trait Evaluate {
    fn evaluate(&self, assignment: &Assignment) -> TruthValue;
}

impl Evaluate for Expr {
    fn evaluate(&self, assignment: &Assignment) -> TruthValue {
        match self {
            Expr::Atom(Atom::Literal(value)) => TruthValue(*value),
            Expr::Atom(Atom::Variable(variable)) => assignment.value_of(variable),
            // The error atom reads as false; evaluation stays total.
            Expr::Atom(Atom::Error) => TruthValue(false),
            Expr::Negation(operand) => !operand.evaluate(assignment),
            Expr::Binary {
                connective,
                left,
                right,
            } => TruthValue(connective.apply(
                left.evaluate(assignment).0,
                right.evaluate(assignment).0,
            )),
        }
    }
}

pub fn evaluate_formula(input: &str, assignment: &Assignment) -> TruthValue {
    parse(input).evaluate(assignment)
}
