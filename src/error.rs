use thiserror::Error;

/// Broad classification of an [`OptionError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A payload was requested from `None`.
    AbsentValue,
    /// The caller broke a contract, either by handing an absent payload to a
    /// `Some` constructor or by returning the wrong shape from a closure.
    ContractViolation,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptionError {
    #[error("called `unwrap` on a `None` value")]
    AbsentValue,
    #[error("cannot construct `Some` from an absent value (found {found})")]
    AbsentPayload { found: &'static str },
    #[error("closure passed to `{operation}` must return {expected}, found {found}")]
    InvalidReturnType {
        operation: &'static str,
        expected: &'static str,
        found: &'static str,
    },
}

impl OptionError {
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::AbsentValue => ErrorKind::AbsentValue,
            Self::AbsentPayload { .. } | Self::InvalidReturnType { .. } => ErrorKind::ContractViolation,
        }
    }

    pub const fn is_contract_violation(&self) -> bool {
        matches!(self.kind(), ErrorKind::ContractViolation)
    }

    pub(crate) fn invalid_return_type(operation: &'static str, expected: &'static str, found: &'static str) -> Self {
        tracing::debug!(operation, expected, found, "closure broke its return contract");
        Self::InvalidReturnType { operation, expected, found }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds() {
        assert_eq!(OptionError::AbsentValue.kind(), ErrorKind::AbsentValue);
        assert!(OptionError::AbsentPayload { found: "null" }.is_contract_violation());
        assert!(!OptionError::AbsentValue.is_contract_violation());
    }

    #[test]
    fn messages() {
        let err = OptionError::InvalidReturnType {
            operation: "and_then",
            expected: "an option",
            found: "int",
        };
        assert_eq!(err.to_string(), "closure passed to `and_then` must return an option, found int");
        assert_eq!(OptionError::AbsentValue.to_string(), "called `unwrap` on a `None` value");
    }
}
