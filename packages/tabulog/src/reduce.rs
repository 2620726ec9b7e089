use derive_more::derive::{Display, Error};
use serde::{Deserialize, Serialize};

use crate::{
    ast::Connective,
    evaluate::{Assignment, TruthValue},
    token::{tokenize, Token},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReducibleOp {
    pub index: usize,
    pub connective: Connective,
}

impl ReducibleOp {
    pub fn rank(&self) -> u8 {
        self.connective.rank()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, Serialize, Deserialize)]
pub enum MoveError {
    #[display("token {index} is not a reducible operator")]
    NotReducible { index: usize },
    #[display("{chosen} may not fire while a higher-precedence {pending} is still reducible")]
    OutOfOrder {
        chosen: Connective,
        pending: Connective,
    },
}

// Token-level evaluation practice: every state in the history is a token
// list, and a move must always pick an operator of the highest rank that
// is currently reducible.
#[derive(Debug, Clone)]
pub struct Reduction {
    history: Vec<Vec<Token>>,
}

impl Reduction {
    pub fn begin(formula: &str, assignment: &Assignment) -> Self {
        Self::from_tokens(substitute(&tokenize(formula), assignment))
    }

    pub fn from_tokens(tokens: Vec<Token>) -> Self {
        let mut state = tokens;
        normalize(&mut state);

        Reduction {
            history: vec![state],
        }
    }

    pub fn current(&self) -> &[Token] {
        // The history starts non-empty and only ever grows.
        self.history.last().map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn history(&self) -> &[Vec<Token>] {
        &self.history
    }

    pub fn reducible(&self) -> Vec<ReducibleOp> {
        reducible_ops(self.current())
    }

    pub fn reduce_at(&mut self, index: usize) -> Result<(), MoveError> {
        let ops = self.reducible();

        let Some(op) = ops.iter().find(|op| op.index == index).copied() else {
            return Err(MoveError::NotReducible { index });
        };

        if let Some(pending) = ops
            .iter()
            .copied()
            .max_by_key(|op| op.rank())
            .filter(|best| best.rank() > op.rank())
        {
            return Err(MoveError::OutOfOrder {
                chosen: op.connective,
                pending: pending.connective,
            });
        }

        let mut state = self.current().to_vec();
        apply(&mut state, op);
        normalize(&mut state);
        self.history.push(state);

        Ok(())
    }

    pub fn is_done(&self) -> bool {
        matches!(self.current(), [Token::Literal(_)])
    }

    pub fn result(&self) -> Option<TruthValue> {
        match self.current() {
            [Token::Literal(value)] => Some(TruthValue(*value)),
            _ => None,
        }
    }
}

pub fn substitute(tokens: &[Token], assignment: &Assignment) -> Vec<Token> {
    tokens
        .iter()
        .map(|token| match token {
            Token::Variable(variable) => Token::Literal(assignment.value_of(variable).0),
            _ => token.clone(),
        })
        .collect()
}

pub fn render_tokens(tokens: &[Token]) -> String {
    let mut rendered = String::new();

    for (index, token) in tokens.iter().enumerate() {
        let after_open = index > 0 && matches!(tokens[index - 1], Token::Open);

        if index > 0 && !after_open && !matches!(token, Token::Close) {
            rendered.push(' ');
        }

        rendered.push_str(&token.to_string());
    }

    rendered
}

fn literal_at(tokens: &[Token], index: usize) -> Option<bool> {
    tokens.get(index).and_then(|token| token.as_literal().copied())
}

// Negation is reducible over a literal right neighbor, a binary connective
// over literal neighbors on both sides.
fn reducible_ops(tokens: &[Token]) -> Vec<ReducibleOp> {
    tokens
        .iter()
        .enumerate()
        .filter_map(|(index, token)| {
            let connective = token.as_connective().copied()?;

            let right = literal_at(tokens, index + 1).is_some();
            let reducible = match connective {
                Connective::Negation => right,
                _ => {
                    right
                        && index
                            .checked_sub(1)
                            .and_then(|left| literal_at(tokens, left))
                            .is_some()
                }
            };

            reducible.then_some(ReducibleOp { index, connective })
        })
        .collect()
}

fn apply(state: &mut Vec<Token>, op: ReducibleOp) {
    match op.connective.binary() {
        None => {
            if let Some(value) = literal_at(state, op.index + 1) {
                state.splice(op.index..=op.index + 1, [Token::Literal(!value)]);
            }
        }
        Some(connective) => {
            let left = op.index.checked_sub(1).and_then(|i| literal_at(state, i));
            let right = literal_at(state, op.index + 1);

            if let (Some(left), Some(right)) = (left, right) {
                state.splice(
                    op.index - 1..=op.index + 1,
                    [Token::Literal(connective.apply(left, right))],
                );
            }
        }
    }
}

// A parenthesized lone literal collapses to the literal, repeatedly:
// stripping one pair can expose the next.
fn normalize(state: &mut Vec<Token>) {
    loop {
        let found = (0..state.len().saturating_sub(2)).find(|&index| {
            matches!(state[index], Token::Open)
                && state[index + 1].as_literal().is_some()
                && matches!(state[index + 2], Token::Close)
        });

        match found {
            Some(index) => {
                let literal = state[index + 1].clone();
                state.splice(index..index + 3, [literal]);
            }
            None => break,
        }
    }
}
