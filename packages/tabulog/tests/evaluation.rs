use tabulog::{
    ast::Variable,
    evaluate::{evaluate_formula, Assignment, Evaluate, TruthValue},
    parser::parse,
};

#[test]
fn connectives_follow_their_truth_tables() {
    let empty = Assignment::new();

    let test_cases: [(&str, bool); 18] = [
        ("¬0", true),
        ("¬1", false),
        ("0 ∧ 0", false),
        ("0 ∧ 1", false),
        ("1 ∧ 0", false),
        ("1 ∧ 1", true),
        ("0 ∨ 0", false),
        ("0 ∨ 1", true),
        ("1 ∨ 0", true),
        ("1 ∨ 1", true),
        ("0 ⇒ 0", true),
        ("0 ⇒ 1", true),
        ("1 ⇒ 0", false),
        ("1 ⇒ 1", true),
        ("0 ⇔ 0", true),
        ("0 ⇔ 1", false),
        ("1 ⇔ 0", false),
        ("1 ⇔ 1", true),
    ];

    for (i, (input, expected_result)) in test_cases.into_iter().enumerate() {
        assert_eq!(
            evaluate_formula(input, &empty),
            TruthValue(expected_result),
            "Test case {}; Input: {}",
            i + 1,
            input
        );
    }
}

#[test]
fn formulas_evaluate_under_an_assignment() {
    let mut assignment = Assignment::new();
    assignment.assign("P", true);
    assignment.assign("Q", false);

    let test_cases: [(&str, bool); 6] = [
        ("(P ∨ Q) ∧ ¬Q", true),
        ("P ⇒ Q", false),
        ("Q ⇒ P", true),
        ("P ⇔ Q", false),
        ("¬(P ∧ Q)", true),
        ("P ∧ Q ∨ P", true),
    ];

    for (i, (input, expected_result)) in test_cases.into_iter().enumerate() {
        assert_eq!(
            evaluate_formula(input, &assignment),
            TruthValue(expected_result),
            "Test case {}; Input: {}",
            i + 1,
            input
        );
    }
}

#[test]
fn unassigned_variables_default_to_false() {
    let mut assignment = Assignment::new();
    assignment.assign("P", true);

    assert_eq!(evaluate_formula("P ∧ Q", &assignment), TruthValue(false));
    assert_eq!(evaluate_formula("P ∨ Q", &assignment), TruthValue(true));
}

#[test]
fn variable_lookup_is_case_insensitive() {
    let mut assignment = Assignment::new();
    assignment.assign("p", true);

    assert_eq!(evaluate_formula("P", &assignment), TruthValue(true));
    assert_eq!(evaluate_formula("p", &assignment), TruthValue(true));
}

#[test]
fn the_error_atom_evaluates_to_false() {
    let empty = Assignment::new();

    assert_eq!(evaluate_formula("", &empty), TruthValue(false));
    assert_eq!(evaluate_formula("∧", &empty), TruthValue(false));
}

#[test]
fn variables_are_collected_in_order_of_appearance() {
    let variables: Vec<Variable> = parse("(Q ∨ P) ∧ Q").get_variables().into_iter().collect();

    assert_eq!(variables, vec![Variable::new("Q"), Variable::new("P")]);
}

#[test]
fn literals_are_not_variables() {
    let variables: Vec<Variable> = parse("P ∧ 1").get_variables().into_iter().collect();

    assert_eq!(variables, vec![Variable::new("P")]);
}

#[test]
fn subexpressions_come_out_innermost_first() {
    let subexpressions: Vec<String> = parse("P ∧ Q").get_subexpressions().into_iter().collect();
    assert_eq!(subexpressions, vec!["(P ∧ Q)".to_string()]);

    let subexpressions: Vec<String> = parse("¬(P ∨ Q) ∧ R")
        .get_subexpressions()
        .into_iter()
        .collect();
    assert_eq!(
        subexpressions,
        vec![
            "(P ∨ Q)".to_string(),
            "(¬ (P ∨ Q))".to_string(),
            "((¬ (P ∨ Q)) ∧ R)".to_string(),
        ]
    );
}

#[test]
fn duplicate_subexpressions_collapse() {
    let subexpressions: Vec<String> = parse("(P ∧ Q) ∨ (P ∧ Q)")
        .get_subexpressions()
        .into_iter()
        .collect();

    assert_eq!(
        subexpressions,
        vec![
            "(P ∧ Q)".to_string(),
            "((P ∧ Q) ∨ (P ∧ Q))".to_string(),
        ]
    );
}

#[test]
fn assignments_display_with_negated_names_for_false() {
    let mut assignment = Assignment::new();
    assignment.assign("Q", false);
    assignment.assign("P", true);

    assert_eq!(assignment.to_string(), "{P, ¬Q}");
}

#[test]
fn evaluate_agrees_with_the_parsed_tree() {
    let mut assignment = Assignment::new();
    assignment.assign("P", false);
    assignment.assign("Q", true);

    let expr = parse("¬P ⇒ (Q ∧ P)");

    assert_eq!(expr.evaluate(&assignment), TruthValue(false));
    assert_eq!(
        evaluate_formula("¬P ⇒ (Q ∧ P)", &assignment),
        TruthValue(false)
    );
}
