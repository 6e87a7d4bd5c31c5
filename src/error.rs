use thiserror::Error;

/// A type string did not match the Solidity type grammar.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypeParseError {
    #[error("unknown Solidity type `{0}`")]
    UnknownType(String),

    #[error("invalid array length in `{0}`")]
    InvalidLength(String),

    #[error("numeric suffix in `{0}` is too large")]
    OversizedWidth(String),
}

/// An ABI document did not have the expected structure.
#[derive(Debug, PartialEq, Error)]
pub enum AbiError {
    #[error("expected {expected}, found {found}")]
    UnexpectedShape {
        expected: &'static str,
        found: &'static str,
    },

    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    #[error("field `{field}` should be {expected}, found {found}")]
    FieldShape {
        field: &'static str,
        expected: &'static str,
        found: &'static str,
    },

    #[error("unrecognized entry type `{0}`")]
    UnknownEntryType(String),

    #[error("invalid type string `{text}`: {source}")]
    InvalidType {
        text: String,
        #[source]
        source: TypeParseError,
    },
}
