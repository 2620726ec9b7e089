use rand::{rngs::StdRng, SeedableRng};
use tabulog::{
    ast::{Variable, VARIABLE_NAMES},
    evaluate::Evaluate,
    generate::{random_assignment, random_formula, FormulaOptions},
    parser::parse,
};

#[test]
fn generated_formulas_are_well_formed_and_long_enough() {
    let mut rng = StdRng::seed_from_u64(7);
    let options = FormulaOptions::default();

    for _ in 0..100 {
        let formula = random_formula(&mut rng, &options);
        let rendered = formula.to_string();

        assert!(formula.is_well_formed(), "Generated: {rendered}");
        assert!(
            rendered.chars().count() >= options.min_length,
            "Generated: {rendered}"
        );
    }
}

#[test]
fn generated_formulas_reparse_to_themselves() {
    let mut rng = StdRng::seed_from_u64(11);
    let options = FormulaOptions::default();

    for _ in 0..100 {
        let formula = random_formula(&mut rng, &options);

        assert_eq!(
            parse(&formula.to_string()),
            formula,
            "Generated: {}",
            formula
        );
    }
}

#[test]
fn loose_renderings_reparse_to_the_same_tree() {
    let mut rng = StdRng::seed_from_u64(23);
    let options = FormulaOptions {
        variables: 4,
        max_depth: 5,
        min_length: 13,
    };

    for _ in 0..200 {
        let formula = random_formula(&mut rng, &options);
        let loose = formula.loose();

        assert_eq!(parse(&loose), formula, "Loose: {loose}");
    }
}

#[test]
fn generated_variables_stay_in_the_requested_alphabet() {
    let mut rng = StdRng::seed_from_u64(42);
    let options = FormulaOptions {
        variables: 2,
        ..FormulaOptions::default()
    };

    for _ in 0..50 {
        let formula = random_formula(&mut rng, &options);

        for variable in formula.get_variables() {
            assert!(
                VARIABLE_NAMES[..2]
                    .iter()
                    .any(|name| variable.name() == name.to_string()),
                "Variable: {variable}"
            );
        }
    }
}

#[test]
fn random_assignments_cover_every_requested_variable() {
    let mut rng = StdRng::seed_from_u64(5);
    let variables = vec![Variable::new("P"), Variable::new("Q"), Variable::new("R")];

    let assignment = random_assignment(&mut rng, &variables);

    assert_eq!(assignment.0.len(), 3);
    for variable in &variables {
        assert!(assignment.0.contains_key(variable));
    }
}

#[test]
fn generated_drills_evaluate_without_surprises() {
    let mut rng = StdRng::seed_from_u64(99);
    let options = FormulaOptions::default();

    for _ in 0..50 {
        let formula = random_formula(&mut rng, &options);
        let variables: Vec<Variable> = formula.get_variables().into_iter().collect();
        let assignment = random_assignment(&mut rng, &variables);

        // Totality: evaluation must succeed on anything the generator emits.
        let _ = formula.evaluate(&assignment);
    }
}
