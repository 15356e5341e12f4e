use std::sync::Arc;

use bloom_core::model::{Member, SchoolId};

use crate::directory::{RosterQuery, SchoolDirectory};
use crate::error::RosterError;

/// Roster lookups for the overview screen.
///
/// Ordering is decided here rather than in the directory, so every backend
/// lists people the same way: directors first, then teachers, then
/// students, each group alphabetically.
#[derive(Clone)]
pub struct RosterService {
    directory: Arc<dyn SchoolDirectory>,
}

impl RosterService {
    #[must_use]
    pub fn new(directory: Arc<dyn SchoolDirectory>) -> Self {
        Self { directory }
    }

    /// Members of a school matching `query`, in display order.
    ///
    /// # Errors
    ///
    /// Returns `RosterError::Directory` when the school is unknown or the
    /// backend fails.
    pub async fn members(
        &self,
        school_id: SchoolId,
        query: RosterQuery,
    ) -> Result<Vec<Member>, RosterError> {
        let mut members = self.directory.members(school_id, query).await?;
        members.sort_by(|a, b| {
            a.role()
                .cmp(&b.role())
                .then_with(|| a.name().cmp(b.name()))
        });
        Ok(members)
    }
}
