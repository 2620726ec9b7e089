pub mod ast;
pub mod evaluate;
pub mod generate;
pub mod grouping;
pub mod parser;
pub mod reduce;
pub mod table;
pub mod token;
