use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{SchoolId, UserId};

/// Role of a school member.
///
/// Ordered the way the roster lists them: directors first, students last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Director,
    Teacher,
    Student,
}

impl Role {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Director => "Director",
            Self::Teacher => "Teacher",
            Self::Student => "Student",
        }
    }
}

/// Membership status of a school member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberStatus {
    Active,
    /// Invited but has not signed in yet.
    Invited,
    Suspended,
}

impl MemberStatus {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Invited => "Invited",
            Self::Suspended => "Suspended",
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum MemberError {
    #[error("member name is empty")]
    EmptyName,
}

/// One person on a school's roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    id: UserId,
    school_id: SchoolId,
    name: String,
    role: Role,
    status: MemberStatus,
}

impl Member {
    /// # Errors
    ///
    /// Returns `MemberError::EmptyName` if the name is blank.
    pub fn new(
        id: UserId,
        school_id: SchoolId,
        name: impl Into<String>,
        role: Role,
        status: MemberStatus,
    ) -> Result<Self, MemberError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(MemberError::EmptyName);
        }
        Ok(Self {
            id,
            school_id,
            name,
            role,
            status,
        })
    }

    #[must_use]
    pub fn id(&self) -> UserId {
        self.id
    }

    #[must_use]
    pub fn school_id(&self) -> SchoolId {
        self.school_id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn role(&self) -> Role {
        self.role
    }

    #[must_use]
    pub fn status(&self) -> MemberStatus {
        self.status
    }
}
