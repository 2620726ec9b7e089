use std::fmt::Display;

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use strum::EnumIter;
use termtree::Tree;

pub const VARIABLE_NAMES: [char; 6] = ['P', 'Q', 'R', 'S', 'U', 'W'];

pub const PARSE_ERROR_MARKER: &str = "<parse error>";

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, EnumIter, Serialize, Deserialize)]
pub enum Connective {
    Negation,
    Conjunction,
    Disjunction,
    Implication,
    Equivalence,
}

impl Connective {
    pub fn symbol(self) -> char {
        match self {
            Connective::Negation => '¬',
            Connective::Conjunction => '∧',
            Connective::Disjunction => '∨',
            Connective::Implication => '⇒',
            Connective::Equivalence => '⇔',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '¬' => Some(Connective::Negation),
            '∧' => Some(Connective::Conjunction),
            '∨' => Some(Connective::Disjunction),
            '⇒' => Some(Connective::Implication),
            '⇔' => Some(Connective::Equivalence),
            _ => None,
        }
    }

    // Ranks are unique: the parser splits at the minimum, the reduction
    // engine fires the maximum, and neither ever has to break a rank tie
    // between two different connectives.
    pub fn rank(self) -> u8 {
        match self {
            Connective::Negation => 5,
            Connective::Conjunction => 4,
            Connective::Disjunction => 3,
            Connective::Implication => 2,
            Connective::Equivalence => 1,
        }
    }

    pub fn binary(self) -> Option<BinaryConnective> {
        match self {
            Connective::Negation => None,
            Connective::Conjunction => Some(BinaryConnective::Conjunction),
            Connective::Disjunction => Some(BinaryConnective::Disjunction),
            Connective::Implication => Some(BinaryConnective::Implication),
            Connective::Equivalence => Some(BinaryConnective::Equivalence),
        }
    }
}

impl Display for Connective {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinaryConnective {
    Conjunction,
    Disjunction,
    Implication,
    Equivalence,
}

impl BinaryConnective {
    pub fn connective(self) -> Connective {
        match self {
            BinaryConnective::Conjunction => Connective::Conjunction,
            BinaryConnective::Disjunction => Connective::Disjunction,
            BinaryConnective::Implication => Connective::Implication,
            BinaryConnective::Equivalence => Connective::Equivalence,
        }
    }

    pub fn symbol(self) -> char {
        self.connective().symbol()
    }

    pub fn rank(self) -> u8 {
        self.connective().rank()
    }

    pub fn apply(self, left: bool, right: bool) -> bool {
        match self {
            BinaryConnective::Conjunction => left && right,
            BinaryConnective::Disjunction => left || right,
            BinaryConnective::Implication => !left || right,
            BinaryConnective::Equivalence => left == right,
        }
    }
}

impl From<BinaryConnective> for Connective {
    fn from(connective: BinaryConnective) -> Self {
        connective.connective()
    }
}

impl Display for BinaryConnective {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Variable(String);

impl Variable {
    pub fn new(name: impl AsRef<str>) -> Self {
        Variable(name.as_ref().to_uppercase())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl Display for Variable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub enum Atom {
    Variable(Variable),
    Literal(bool),
    Error,
}

impl Display for Atom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Atom::Variable(variable) => variable.to_string(),
                Atom::Literal(true) => "1".to_string(),
                Atom::Literal(false) => "0".to_string(),
                Atom::Error => PARSE_ERROR_MARKER.to_string(),
            }
        )
    }
}

#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub enum Expr {
    Atom(Atom),
    Negation(Box<Expr>),
    Binary {
        connective: BinaryConnective,
        left: Box<Expr>,
        right: Box<Expr>,
    },
}

impl Expr {
    pub fn variable(name: impl AsRef<str>) -> Self {
        Expr::Atom(Atom::Variable(Variable::new(name)))
    }

    pub fn literal(value: bool) -> Self {
        Expr::Atom(Atom::Literal(value))
    }

    pub fn parse_error() -> Self {
        Expr::Atom(Atom::Error)
    }

    pub fn negation(operand: Expr) -> Self {
        Expr::Negation(Box::new(operand))
    }

    pub fn binary(connective: BinaryConnective, left: Expr, right: Expr) -> Self {
        Expr::Binary {
            connective,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn is_well_formed(&self) -> bool {
        match self {
            Expr::Atom(Atom::Error) => false,
            Expr::Atom(_) => true,
            Expr::Negation(operand) => operand.is_well_formed(),
            Expr::Binary { left, right, .. } => left.is_well_formed() && right.is_well_formed(),
        }
    }

    pub fn get_variables(&self) -> IndexSet<Variable> {
        let mut variables = IndexSet::new();
        self.collect_variables(&mut variables);
        variables
    }

    fn collect_variables(&self, variables: &mut IndexSet<Variable>) {
        match self {
            Expr::Atom(Atom::Variable(variable)) => {
                variables.insert(variable.clone());
            }
            Expr::Atom(_) => {}
            Expr::Negation(operand) => operand.collect_variables(variables),
            Expr::Binary { left, right, .. } => {
                left.collect_variables(variables);
                right.collect_variables(variables);
            }
        }
    }

    // Compound sub-expressions in canonical form, children before the
    // expressions that contain them. Atoms are excluded.
    pub fn get_subexpressions(&self) -> IndexSet<String> {
        let mut subexpressions = IndexSet::new();
        self.collect_subexpressions(&mut subexpressions);
        subexpressions
    }

    fn collect_subexpressions(&self, subexpressions: &mut IndexSet<String>) {
        match self {
            Expr::Atom(_) => {}
            Expr::Negation(operand) => {
                operand.collect_subexpressions(subexpressions);
                subexpressions.insert(self.to_string());
            }
            Expr::Binary { left, right, .. } => {
                left.collect_subexpressions(subexpressions);
                right.collect_subexpressions(subexpressions);
                subexpressions.insert(self.to_string());
            }
        }
    }

    pub fn get_tree(&self) -> Tree<String> {
        match self {
            Expr::Atom(atom) => Tree::new(atom.to_string()),
            Expr::Negation(operand) => {
                Tree::new(Connective::Negation.to_string()).with_leaves(vec![operand.get_tree()])
            }
            Expr::Binary {
                connective,
                left,
                right,
            } => Tree::new(connective.to_string())
                .with_leaves(vec![left.get_tree(), right.get_tree()]),
        }
    }

    // Minimally parenthesized rendering. Parentheses are kept exactly where
    // the split scan would otherwise regroup the chain: a left child needs
    // them below the parent's rank, a right child at or below it, and a
    // negated compound always keeps its pair.
    pub fn loose(&self) -> String {
        match self {
            Expr::Atom(atom) => atom.to_string(),
            Expr::Negation(operand) => match operand.as_ref() {
                Expr::Binary { .. } => format!("¬({})", operand.loose()),
                _ => format!("¬{}", operand.loose()),
            },
            Expr::Binary {
                connective,
                left,
                right,
            } => format!(
                "{} {} {}",
                loose_child(left, connective.rank(), false),
                connective,
                loose_child(right, connective.rank(), true)
            ),
        }
    }
}

fn loose_child(child: &Expr, parent_rank: u8, is_right: bool) -> String {
    match child {
        Expr::Binary { connective, .. } => {
            let grouped = if is_right {
                connective.rank() <= parent_rank
            } else {
                connective.rank() < parent_rank
            };

            if grouped {
                format!("({})", child.loose())
            } else {
                child.loose()
            }
        }
        _ => child.loose(),
    }
}

impl From<Variable> for Expr {
    fn from(variable: Variable) -> Self {
        Expr::Atom(Atom::Variable(variable))
    }
}

impl From<Atom> for Expr {
    fn from(atom: Atom) -> Self {
        Expr::Atom(atom)
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Expr::Atom(atom) => atom.to_string(),
                Expr::Negation(operand) => format!("(¬ {})", operand),
                Expr::Binary {
                    connective,
                    left,
                    right,
                } => format!("({} {} {})", left, connective, right),
            }
        )
    }
}
