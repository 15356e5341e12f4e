use thiserror::Error;

use crate::model::SchoolId;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SchoolError {
    #[error("school name is empty")]
    EmptyName,
}

/// A school as the dashboard knows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct School {
    id: SchoolId,
    name: String,
}

impl School {
    /// # Errors
    ///
    /// Returns `SchoolError::EmptyName` if the name is blank.
    pub fn new(id: SchoolId, name: impl Into<String>) -> Result<Self, SchoolError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(SchoolError::EmptyName);
        }
        Ok(Self { id, name })
    }

    #[must_use]
    pub fn id(&self) -> SchoolId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}
