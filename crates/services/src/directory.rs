use async_trait::async_trait;

use bloom_core::model::{Member, MemberStatus, Metric, Role, School, SchoolId};

use crate::error::DirectoryError;

/// Filter for roster lookups. A `None` field matches every member.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RosterQuery {
    pub role: Option<Role>,
    pub status: Option<MemberStatus>,
}

impl RosterQuery {
    /// Query matching the whole roster.
    #[must_use]
    pub fn any() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_role(mut self, role: Role) -> Self {
        self.role = Some(role);
        self
    }

    #[must_use]
    pub fn with_status(mut self, status: MemberStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub(crate) fn matches(&self, member: &Member) -> bool {
        self.role.is_none_or(|role| member.role() == role)
            && self.status.is_none_or(|status| member.status() == status)
    }
}

/// Read-only contract for the data source behind the dashboard.
///
/// The UI never talks to a backend directly; everything it shows comes
/// through this trait. The desktop build wires in the seeded
/// [`MockDirectory`](crate::mock::MockDirectory).
#[async_trait]
pub trait SchoolDirectory: Send + Sync {
    /// All schools this backend knows about, in its own order.
    ///
    /// # Errors
    ///
    /// Returns `DirectoryError` when the backend cannot be read.
    async fn schools(&self) -> Result<Vec<School>, DirectoryError>;

    /// Fetch a school by ID.
    ///
    /// # Errors
    ///
    /// Returns `DirectoryError::UnknownSchool` if no such school exists.
    async fn school(&self, id: SchoolId) -> Result<School, DirectoryError>;

    /// Dashboard metrics for a school, in presentation order.
    ///
    /// # Errors
    ///
    /// Returns `DirectoryError::UnknownSchool` if no such school exists.
    async fn metrics(&self, id: SchoolId) -> Result<Vec<Metric>, DirectoryError>;

    /// Roster members matching `query`, in the backend's own order.
    ///
    /// # Errors
    ///
    /// Returns `DirectoryError::UnknownSchool` if no such school exists.
    async fn members(
        &self,
        id: SchoolId,
        query: RosterQuery,
    ) -> Result<Vec<Member>, DirectoryError>;
}
