//! The common face of pure and fold functions.

use crate::compare::Comparison;
use crate::error::ValidationError;
use crate::fold::FoldFunction;
use crate::pure::PureFunction;

/// A named function as stored in the registry.
#[derive(Debug, Clone)]
pub enum FunctionDefinition {
    Pure(PureFunction),
    Fold(FoldFunction),
}

impl FunctionDefinition {
    pub fn name(&self) -> &str {
        match self {
            FunctionDefinition::Pure(f) => f.name(),
            FunctionDefinition::Fold(f) => f.name(),
        }
    }

    pub fn parameter_count(&self) -> usize {
        match self {
            FunctionDefinition::Pure(f) => f.parameter_count(),
            FunctionDefinition::Fold(f) => f.parameter_count(),
        }
    }

    pub fn render(&self) -> String {
        match self {
            FunctionDefinition::Pure(f) => f.render(),
            FunctionDefinition::Fold(f) => f.render(),
        }
    }

    /// Compare two definitions. Definitions of different kinds have no
    /// defined order and compare as `Failed`.
    pub fn compare(&self, other: &FunctionDefinition) -> Comparison {
        match (self, other) {
            (FunctionDefinition::Pure(a), FunctionDefinition::Pure(b)) => a.compare(b),
            (FunctionDefinition::Fold(a), FunctionDefinition::Fold(b)) => a.compare(b),
            _ => Comparison::Failed,
        }
    }

    pub fn less_than(&self, other: &FunctionDefinition) -> bool {
        self.compare(other).less_than()
    }

    pub fn greater_than(&self, other: &FunctionDefinition) -> bool {
        self.compare(other).greater_than()
    }

    pub fn less_or_equal(&self, other: &FunctionDefinition) -> bool {
        self.compare(other).less_or_equal()
    }

    pub fn greater_or_equal(&self, other: &FunctionDefinition) -> bool {
        self.compare(other).greater_or_equal()
    }
}

impl From<PureFunction> for FunctionDefinition {
    fn from(f: PureFunction) -> Self {
        FunctionDefinition::Pure(f)
    }
}

impl From<FoldFunction> for FunctionDefinition {
    fn from(f: FoldFunction) -> Self {
        FunctionDefinition::Fold(f)
    }
}

/// Identifier rule of the expression grammar: letters, digits and
/// underscore, not starting with a digit.
pub(crate) fn validate_identifier(name: &str) -> Result<(), ValidationError> {
    let mut chars = name.chars();
    let valid = match chars.next() {
        Some(first) => {
            (first.is_ascii_alphabetic() || first == '_')
                && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        None => false,
    };

    if valid {
        Ok(())
    } else {
        Err(ValidationError::InvalidIdentifier(name.to_string()))
    }
}

/// Validate a function name and its (non-empty) parameter list, and
/// return the parameters as owned strings.
pub(crate) fn validate_signature(
    name: &str,
    parameters: &[&str],
) -> Result<Vec<String>, ValidationError> {
    validate_identifier(name)?;
    if parameters.is_empty() {
        return Err(ValidationError::EmptyParameters);
    }

    let mut out: Vec<String> = Vec::with_capacity(parameters.len());
    for parameter in parameters {
        validate_identifier(parameter)?;
        if out.iter().any(|p| p == parameter) {
            return Err(ValidationError::DuplicateName(parameter.to_string()));
        }
        out.push(parameter.to_string());
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifier_rule() {
        assert!(validate_identifier("x").is_ok());
        assert!(validate_identifier("_tmp2").is_ok());
        assert!(validate_identifier("dist2line").is_ok());

        assert!(validate_identifier("").is_err());
        assert!(validate_identifier("2x").is_err());
        assert!(validate_identifier("a-b").is_err());
        assert!(validate_identifier("a b").is_err());
    }

    #[test]
    fn signature_rejects_duplicates_and_empty_lists() {
        assert!(validate_signature("f", &["x", "y"]).is_ok());
        assert_eq!(
            validate_signature("f", &[]).unwrap_err(),
            ValidationError::EmptyParameters
        );
        assert_eq!(
            validate_signature("f", &["x", "x"]).unwrap_err(),
            ValidationError::DuplicateName("x".to_string())
        );
    }
}
