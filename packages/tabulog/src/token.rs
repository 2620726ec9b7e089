use std::fmt::Display;

use enum_as_inner::EnumAsInner;
use winnow::{
    combinator::{alt, repeat},
    token::{one_of, take_till},
    PResult, Parser,
};

use crate::ast::{Connective, Variable};

pub const CONNECTIVE_SYMBOLS: [char; 5] = ['¬', '∧', '∨', '⇒', '⇔'];

const STRUCTURAL_SYMBOLS: [char; 7] = ['¬', '∧', '∨', '⇒', '⇔', '(', ')'];

type Input<'a> = &'a str;

#[derive(Debug, Clone, Hash, PartialEq, Eq, EnumAsInner)]
pub enum Token {
    Open,
    Close,
    Connective(Connective),
    Literal(bool),
    Variable(Variable),
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Token::Open => "(".to_string(),
                Token::Close => ")".to_string(),
                Token::Connective(connective) => connective.to_string(),
                Token::Literal(true) => "1".to_string(),
                Token::Literal(false) => "0".to_string(),
                Token::Variable(variable) => variable.to_string(),
            }
        )
    }
}

// Whitespace is stripped before lexing, so "P Q" fuses into the single
// variable PQ rather than two adjacent atoms.
pub fn tokenize(input: &str) -> Vec<Token> {
    let stripped = remove_whitespace(input);

    // Every remaining character lands in one of the alternatives, so the
    // lexer is total over its input.
    repeat(0.., token)
        .parse(stripped.as_str())
        .unwrap_or_default()
}

pub fn remove_whitespace(input: &str) -> String {
    input.chars().filter(|c| !c.is_whitespace()).collect()
}

fn token(input: &mut Input) -> PResult<Token> {
    alt((parenthesis, connective, fragment)).parse_next(input)
}

fn parenthesis(input: &mut Input) -> PResult<Token> {
    one_of(['(', ')'])
        .map(|c| match c {
            '(' => Token::Open,
            ')' => Token::Close,
            _ => unreachable!("Invalid parenthesis"),
        })
        .parse_next(input)
}

fn connective(input: &mut Input) -> PResult<Token> {
    one_of(CONNECTIVE_SYMBOLS)
        .map(|c| match Connective::from_symbol(c) {
            Some(connective) => Token::Connective(connective),
            None => unreachable!("Invalid connective"),
        })
        .parse_next(input)
}

fn fragment(input: &mut Input) -> PResult<Token> {
    take_till(1.., STRUCTURAL_SYMBOLS)
        .map(classify_fragment)
        .parse_next(input)
}

fn classify_fragment(fragment: &str) -> Token {
    let fragment = fragment.to_uppercase();

    match fragment.as_str() {
        "1" | "T" => Token::Literal(true),
        "0" | "F" => Token::Literal(false),
        _ => Token::Variable(Variable::new(fragment)),
    }
}
