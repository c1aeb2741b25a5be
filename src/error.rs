#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BigIntError {
    /// The text is not `'-'? digit+`
    #[error("invalid decimal literal {0:?}")]
    InvalidLiteral(String),
    #[error("division by zero")]
    DivisionByZero,
}

pub type BigIntResult<T> = Result<T, BigIntError>;

#[test]
fn test_messages() {
    assert_eq!(BigIntError::InvalidLiteral("1x".to_string()).to_string(), "invalid decimal literal \"1x\"");
    assert_eq!(BigIntError::DivisionByZero.to_string(), "division by zero");
}
