use rand::Rng;

use crate::{
    ast::{BinaryConnective, Expr, Variable, VARIABLE_NAMES},
    evaluate::{Assignment, TruthValue},
};

#[derive(Debug, Clone, Copy)]
pub struct FormulaOptions {
    pub variables: usize,
    pub max_depth: usize,
    pub min_length: usize,
}

impl Default for FormulaOptions {
    fn default() -> Self {
        FormulaOptions {
            variables: 3,
            max_depth: 4,
            min_length: 9,
        }
    }
}

pub fn random_formula(rng: &mut impl Rng, options: &FormulaOptions) -> Expr {
    let variables = options.variables.clamp(1, VARIABLE_NAMES.len());

    let mut formula = random_subformula(rng, variables, options.max_depth);

    // Joining on a fresh sub-formula strictly grows the rendering, so the
    // minimum-length loop terminates.
    while formula.to_string().chars().count() < options.min_length {
        let extension = random_subformula(rng, variables, 1);
        formula = Expr::binary(random_binary(rng), formula, extension);
    }

    formula
}

fn random_subformula(rng: &mut impl Rng, variables: usize, depth: usize) -> Expr {
    if depth == 0 {
        return random_variable(rng, variables);
    }

    match rng.random_range(0..10) {
        0 | 1 => random_variable(rng, variables),
        2 | 3 => Expr::negation(random_subformula(rng, variables, depth - 1)),
        _ => Expr::binary(
            random_binary(rng),
            random_subformula(rng, variables, depth - 1),
            random_subformula(rng, variables, depth - 1),
        ),
    }
}

fn random_variable(rng: &mut impl Rng, variables: usize) -> Expr {
    let name = VARIABLE_NAMES[rng.random_range(0..variables)];
    Expr::variable(name.to_string())
}

fn random_binary(rng: &mut impl Rng) -> BinaryConnective {
    match rng.random_range(0..4) {
        0 => BinaryConnective::Conjunction,
        1 => BinaryConnective::Disjunction,
        2 => BinaryConnective::Implication,
        _ => BinaryConnective::Equivalence,
    }
}

pub fn random_assignment(rng: &mut impl Rng, variables: &[Variable]) -> Assignment {
    let mut assignment = Assignment::new();

    for variable in variables {
        assignment
            .0
            .insert(variable.clone(), TruthValue(rng.random_bool(0.5)));
    }

    assignment
}
