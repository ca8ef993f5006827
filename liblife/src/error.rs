use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("invalid grid dimension {rows}x{columns}, both must be greater than zero")]
    InvalidDimension { rows: u32, columns: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RuleParseError {
    #[error("empty rule part")]
    EmptyPart,

    #[error("unknown rule part prefix '{0}', expected 'B' or 'S'")]
    UnknownPrefix(char),

    #[error("rule part '{0}' given more than once")]
    DuplicatePart(char),

    #[error("rule is missing its '{0}' part")]
    MissingPart(char),

    #[error("invalid neighbor count '{0}', expected a digit from 0 to 8")]
    InvalidCount(char),
}
