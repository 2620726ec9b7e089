use crate::{
    ast::{Atom, BinaryConnective, Connective, Expr},
    token::{tokenize, Token},
};

// Nesting past this depth degrades to the error atom instead of running
// the recursion off the stack.
const MAX_DEPTH: usize = 256;

pub fn parse(input: &str) -> Expr {
    parse_tokens(&tokenize(input))
}

pub fn parse_tokens(tokens: &[Token]) -> Expr {
    parse_slice(tokens, 0)
}

fn parse_slice(tokens: &[Token], depth: usize) -> Expr {
    if depth > MAX_DEPTH {
        return Expr::parse_error();
    }

    let tokens = strip_outer_parentheses(tokens);

    match tokens {
        [] => Expr::parse_error(),
        [token] => atom(token),
        _ => match find_split(tokens) {
            Some((index, connective)) => Expr::binary(
                connective,
                parse_slice(&tokens[..index], depth + 1),
                parse_slice(&tokens[index + 1..], depth + 1),
            ),
            None => match tokens.first() {
                Some(Token::Connective(Connective::Negation)) => {
                    Expr::negation(parse_slice(&tokens[1..], depth + 1))
                }
                _ => Expr::parse_error(),
            },
        },
    }
}

fn atom(token: &Token) -> Expr {
    match token {
        Token::Variable(variable) => Expr::Atom(Atom::Variable(variable.clone())),
        Token::Literal(value) => Expr::Atom(Atom::Literal(*value)),
        _ => Expr::parse_error(),
    }
}

// Outer pairs are only removable while the interior stays balanced on its
// own: "(P) ∧ (Q)" keeps its parentheses because stripping them would pair
// the first "(" with the ")" after P.
fn strip_outer_parentheses(mut tokens: &[Token]) -> &[Token] {
    while let [Token::Open, inner @ .., Token::Close] = tokens {
        if !is_balanced(inner) {
            break;
        }

        tokens = inner;
    }

    tokens
}

fn is_balanced(tokens: &[Token]) -> bool {
    let mut depth = 0i32;

    for token in tokens {
        match token {
            Token::Open => depth += 1,
            Token::Close => depth -= 1,
            _ => {}
        }

        if depth < 0 {
            return false;
        }
    }

    depth == 0
}

// Right-to-left scan for the split point. Parenthesis balance gates the
// candidates, negation never splits, the lowest rank wins, and a rank tie
// stays with the rightmost occurrence so connective chains nest to the left.
fn find_split(tokens: &[Token]) -> Option<(usize, BinaryConnective)> {
    let mut balance = 0i32;
    let mut split: Option<(usize, BinaryConnective)> = None;

    for (index, token) in tokens.iter().enumerate().rev() {
        match token {
            Token::Close => balance += 1,
            Token::Open => balance -= 1,
            Token::Connective(connective) if balance == 0 => {
                if let Some(candidate) = connective.binary() {
                    match split {
                        Some((_, best)) if best.rank() <= candidate.rank() => {}
                        _ => split = Some((index, candidate)),
                    }
                }
            }
            _ => {}
        }
    }

    split
}
