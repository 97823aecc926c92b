use std::fmt;

pub mod masteries;
pub mod mastery_tree;
pub mod runes;
pub mod static_data;
pub mod summoner;

#[derive(Debug)]
pub enum ParsingError {
    InvalidType(String),
}

impl fmt::Display for ParsingError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ParsingError::InvalidType(field) => write!(f, "Unexpected type for field: {}", field),
        }
    }
}
