use clap::{Parser, Subcommand};
use colored::Colorize;
use rand::{rngs::StdRng, SeedableRng};
use strum::IntoEnumIterator;
use tabulog::{
    ast::Connective,
    evaluate::Assignment,
    generate::{random_assignment, random_formula, FormulaOptions},
    grouping::{classify_grouping, GroupingStatus},
    parser::parse,
    reduce::{render_tokens, Reduction},
    table::TruthTable,
};

#[derive(Parser)]
#[command(version, about = "propositional logic practice drills")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parse a formula and show its canonical form and tree
    Parse { formula: String },
    /// Classify a formula as strictly grouped, loosely grouped or invalid
    Check { formula: String },
    /// Print the full truth table of a formula
    Table { formula: String },
    /// Reduce a formula step by step under an assignment like P=1,Q=0
    Reduce {
        formula: String,
        #[arg(long, value_delimiter = ',')]
        assign: Vec<String>,
    },
    /// Generate random practice formulas
    Generate {
        #[arg(long, default_value_t = 5)]
        count: usize,
        #[arg(long, default_value_t = 3)]
        variables: usize,
        #[arg(long, default_value_t = 4)]
        max_depth: usize,
        #[arg(long, default_value_t = 9)]
        min_length: usize,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// List the connective symbols, their ASCII spellings and ranks
    Symbols,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Parse { formula } => run_parse(&remap_symbols(&formula)),
        Command::Check { formula } => run_check(&remap_symbols(&formula)),
        Command::Table { formula } => run_table(&remap_symbols(&formula)),
        Command::Reduce { formula, assign } => run_reduce(&remap_symbols(&formula), &assign),
        Command::Generate {
            count,
            variables,
            max_depth,
            min_length,
            seed,
        } => run_generate(
            count,
            FormulaOptions {
                variables,
                max_depth,
                min_length,
            },
            seed,
        ),
        Command::Symbols => run_symbols(),
    }
}

// ASCII spellings for keyboards without the logic glyphs.
fn remap_symbols(input: &str) -> String {
    input
        .chars()
        .map(|c| match c {
            '!' | '~' => '¬',
            '&' => '∧',
            '|' => '∨',
            '>' => '⇒',
            '=' => '⇔',
            c => c,
        })
        .collect()
}

fn run_parse(formula: &str) {
    let expr = parse(formula);

    println!("Input:     {}", formula.blue());
    println!("Canonical: {}", expr.to_string().green());
    println!("Loose:     {}", expr.loose());
    println!("{}", expr.get_tree());

    if !expr.is_well_formed() {
        println!("{}", "the formula is structurally invalid".red());
        return;
    }

    let subexpressions = expr.get_subexpressions();
    if !subexpressions.is_empty() {
        println!("Sub-expressions, innermost first:");
        for subexpression in subexpressions {
            println!("  {subexpression}");
        }
    }
}

fn run_check(formula: &str) {
    let status = classify_grouping(formula);
    let line = status.to_string();

    match status {
        GroupingStatus::Strict => println!("{}", line.green()),
        GroupingStatus::Loose { .. } => println!("{}", line.yellow()),
        GroupingStatus::Malformed => println!("{}", line.red()),
    }
}

fn run_table(formula: &str) {
    let table = TruthTable::build(formula);

    println!("{table}");
}

fn run_reduce(formula: &str, assign: &[String]) {
    let assignment = parse_assignment(assign);
    let mut session = Reduction::begin(formula, &assignment);

    println!("Assignment: {}", assignment.to_string().blue());
    println!("{}", render_tokens(session.current()));

    while !session.is_done() {
        let ops = session.reducible();

        // Leftmost operator of the highest reducible rank.
        let Some(highest) = ops.iter().map(|op| op.rank()).max() else {
            println!("{}", "stuck: no reducible operator remains".red());
            return;
        };
        let Some(op) = ops.iter().find(|op| op.rank() == highest).copied() else {
            return;
        };

        if let Err(error) = session.reduce_at(op.index) {
            println!("{}", error.to_string().red());
            return;
        }

        println!(
            "{} {}",
            format!("fire {} at token {}:", op.connective, op.index).dimmed(),
            render_tokens(session.current())
        );
    }

    match session.result() {
        Some(value) => println!("Result: {}", value.to_string().green()),
        None => println!("{}", "no result".red()),
    }
}

fn run_generate(count: usize, options: FormulaOptions, seed: Option<u64>) {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };

    for i in 0..count {
        let formula = random_formula(&mut rng, &options);
        let variables: Vec<_> = formula.get_variables().into_iter().collect();
        let assignment = random_assignment(&mut rng, &variables);

        println!("{}) {}", i + 1, formula.loose().blue());
        println!("   canonical:  {}", formula.to_string().green());
        println!("   assignment: {assignment}");
    }
}

fn run_symbols() {
    println!("symbol  ascii  rank  name");

    for connective in Connective::iter() {
        let ascii = match connective {
            Connective::Negation => "! ~",
            Connective::Conjunction => "&",
            Connective::Disjunction => "|",
            Connective::Implication => ">",
            Connective::Equivalence => "=",
        };

        println!(
            "{:<7} {:<6} {:<5} {:?}",
            connective.symbol(),
            ascii,
            connective.rank(),
            connective
        );
    }
}

fn parse_assignment(entries: &[String]) -> Assignment {
    let mut assignment = Assignment::new();

    for entry in entries {
        match entry.split_once('=') {
            Some((name, value)) => {
                let value = matches!(value.trim().to_uppercase().as_str(), "1" | "T" | "TRUE");
                assignment.assign(name.trim(), value);
            }
            None => eprintln!("ignoring malformed assignment entry: {entry}"),
        }
    }

    assignment
}
