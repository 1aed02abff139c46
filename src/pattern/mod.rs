//! Parsing and compiling `s/<search>/<replacement>/` substitutions.

pub mod errors;
pub mod matcher;
pub mod parser;

pub use errors::PatternError;
pub use matcher::Matcher;
pub use parser::Substitution;
