use crate::domain::{error::DomainError, value_objects::Feature};

/// Centralized domain validation.
pub struct DomainValidator;

impl DomainValidator {
    /// Parse raw feature identifiers, failing on the first one outside the
    /// catalog.
    pub fn parse_features<I, S>(identifiers: I) -> Result<Vec<Feature>, DomainError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        identifiers
            .into_iter()
            .map(|id| id.as_ref().parse::<Feature>())
            .collect()
    }
}
