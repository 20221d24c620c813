use serde::{Deserialize, Serialize};

use artifacts_core::{DomainError, DomainResult};

/// Fields of the create-artifact form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactForm {
    pub name: String,
}

impl ArtifactForm {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// `name` is required: only an empty value is rejected.
    pub fn validate(&self) -> DomainResult<()> {
        if self.name.is_empty() {
            return Err(DomainError::validation("name is required"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_name_fails_validation() {
        let err = ArtifactForm::default().validate().unwrap_err();
        assert_eq!(err, DomainError::validation("name is required"));
    }

    #[test]
    fn whitespace_name_counts_as_present() {
        assert!(ArtifactForm::new("   ").validate().is_ok());
        assert!(ArtifactForm::new("\t").validate().is_ok());
    }

    #[test]
    fn named_form_is_valid() {
        assert!(ArtifactForm::new("order1").validate().is_ok());
    }
}
