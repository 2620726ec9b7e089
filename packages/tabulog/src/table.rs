use std::fmt::Display;

use colored::Colorize;
use indexmap::IndexMap;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::{
    ast::Variable,
    evaluate::{Assignment, Evaluate, TruthValue},
    parser::parse,
};

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellStatus {
    Blank,
    Correct,
    Incorrect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub expected: TruthValue,
    pub entered: Option<TruthValue>,
}

impl Cell {
    pub fn status(&self) -> CellStatus {
        match self.entered {
            None => CellStatus::Blank,
            Some(value) if value == self.expected => CellStatus::Correct,
            Some(_) => CellStatus::Incorrect,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Row {
    pub assignment: Assignment,
    pub cells: IndexMap<String, Cell>,
}

#[derive(Debug, Clone)]
pub struct TruthTable {
    formula: String,
    variables: Vec<Variable>,
    columns: Vec<String>,
    rows: Vec<Row>,
}

impl TruthTable {
    pub fn build(input: &str) -> Self {
        let root = parse(input);
        let formula = root.to_string();

        let variables = root
            .get_variables()
            .into_iter()
            .sorted_by(|a, b| a.name().cmp(b.name()))
            .collect::<Vec<_>>();

        // Shortest sub-expressions first, the whole formula always last.
        let mut columns = root
            .get_subexpressions()
            .into_iter()
            .filter(|subexpression| *subexpression != formula)
            .collect::<Vec<_>>();
        columns.sort_by_key(|subexpression| subexpression.chars().count());
        columns.push(formula.clone());

        // Canonical strings re-parse to the trees they were rendered from,
        // so each column carries its own oracle expression.
        let column_exprs = columns
            .iter()
            .map(|column| parse(column))
            .collect::<Vec<_>>();

        let rows = if variables.is_empty() {
            Vec::new()
        } else {
            Assignment::enumerate(&variables)
                .map(|assignment| {
                    let cells = columns
                        .iter()
                        .zip(&column_exprs)
                        .map(|(column, expr)| {
                            (
                                column.clone(),
                                Cell {
                                    expected: expr.evaluate(&assignment),
                                    entered: None,
                                },
                            )
                        })
                        .collect();

                    Row { assignment, cells }
                })
                .collect()
        };

        TruthTable {
            formula,
            variables,
            columns,
            rows,
        }
    }

    pub fn formula(&self) -> &str {
        &self.formula
    }

    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    // A formula without variables has nothing to tabulate.
    pub fn is_applicable(&self) -> bool {
        !self.rows.is_empty()
    }

    pub fn fill(&mut self, row: usize, column: &str, value: bool) -> Option<CellStatus> {
        let cell = self
            .rows
            .get_mut(row)
            .and_then(|row| row.cells.get_mut(column))?;

        cell.entered = Some(TruthValue(value));

        Some(cell.status())
    }

    pub fn solved(&self) -> bool {
        self.is_applicable()
            && self.rows.iter().all(|row| {
                row.cells
                    .values()
                    .all(|cell| cell.status() == CellStatus::Correct)
            })
    }
}

impl Display for TruthTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if !self.is_applicable() {
            return writeln!(f, "{} has no variables to tabulate", self.formula);
        }

        for variable in &self.variables {
            write!(f, "|{}", variable.to_string().blue())?;
        }
        for column in &self.columns {
            write!(f, "|{}", column.blue())?;
        }
        writeln!(f, "|")?;

        for _ in 0..self.variables.len() + self.columns.len() {
            write!(f, "|:-:")?;
        }
        writeln!(f, "|")?;

        for row in &self.rows {
            for variable in &self.variables {
                write!(f, "|{}", row.assignment.value_of(variable))?;
            }

            for column in &self.columns {
                match row.cells.get(column) {
                    Some(cell) => write!(f, "|{}", cell.expected)?,
                    None => write!(f, "|")?,
                }
            }

            writeln!(f, "|")?;
        }

        Ok(())
    }
}
