use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("required column `{column}` is missing from the header")]
    MissingColumn { column: &'static str },
    #[error("category `{category}` is present in only one of the sum and count tables")]
    UnmatchedCategory { category: String },
    #[error("amount `{value}` is numeric but outside the representable range")]
    AmountOutOfRange { value: String },
    #[error("total amount of category `{category}` overflows")]
    AmountOverflow { category: String },
}

pub type Result<T> = std::result::Result<T, Error>;
