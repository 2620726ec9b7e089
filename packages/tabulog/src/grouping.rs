use derive_more::derive::Display;
use serde::{Deserialize, Serialize};

use crate::{parser::parse, token::remove_whitespace};

#[derive(Debug, Clone, PartialEq, Eq, Display, Serialize, Deserialize)]
pub enum GroupingStatus {
    #[display("strictly grouped")]
    Strict,
    #[display("valid but loosely grouped; strictly: {canonical}")]
    Loose { canonical: String },
    #[display("structurally invalid")]
    Malformed,
}

// Strictness is string equality with the canonical rendering, modulo
// whitespace. Anything that parses with an error atom somewhere in the
// tree is malformed outright.
pub fn classify_grouping(input: &str) -> GroupingStatus {
    let expr = parse(input);

    if !expr.is_well_formed() {
        return GroupingStatus::Malformed;
    }

    let canonical = expr.to_string();

    if remove_whitespace(input) == remove_whitespace(&canonical) {
        GroupingStatus::Strict
    } else {
        GroupingStatus::Loose { canonical }
    }
}
