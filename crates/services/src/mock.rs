//! In-memory school directory seeded from an embedded JSON fixture.

use std::collections::HashMap;

use async_trait::async_trait;
use serde::Deserialize;

use bloom_core::model::{Member, MemberStatus, Metric, MetricUnit, Role, School, SchoolId, UserId};

use crate::directory::{RosterQuery, SchoolDirectory};
use crate::error::DirectoryError;

/// Fixture the desktop build ships with.
const SEED_JSON: &str = include_str!("seed.json");

#[derive(Debug, Deserialize)]
struct SeedFile {
    schools: Vec<SeedSchool>,
}

#[derive(Debug, Deserialize)]
struct SeedSchool {
    id: u64,
    name: String,
    metrics: Vec<SeedMetric>,
    members: Vec<SeedMember>,
}

#[derive(Debug, Deserialize)]
struct SeedMetric {
    name: String,
    value: f64,
    unit: MetricUnit,
}

#[derive(Debug, Deserialize)]
struct SeedMember {
    id: u64,
    name: String,
    role: Role,
    status: MemberStatus,
}

#[derive(Debug)]
struct SchoolRecord {
    school: School,
    metrics: Vec<Metric>,
    members: Vec<Member>,
}

/// Deterministic, read-only stand-in for the real aggregation backend.
///
/// The whole fixture is validated once at construction; lookups afterwards
/// can only fail with an unknown school id. Metric order is the seed order:
/// the aggregation is computed upstream and returned verbatim.
#[derive(Debug)]
pub struct MockDirectory {
    order: Vec<SchoolId>,
    schools: HashMap<SchoolId, SchoolRecord>,
}

impl MockDirectory {
    /// Directory seeded with the embedded fixture.
    ///
    /// # Errors
    ///
    /// Returns `DirectoryError::Seed` if the fixture fails to parse, or a
    /// validation error if a record in it is malformed.
    pub fn seeded() -> Result<Self, DirectoryError> {
        Self::from_seed_json(SEED_JSON)
    }

    /// Directory seeded from caller-provided fixture JSON.
    ///
    /// # Errors
    ///
    /// Returns `DirectoryError::Seed` on parse failures,
    /// `DirectoryError::EmptySeed` when the fixture lists no schools, and
    /// the respective validation error for malformed records.
    pub fn from_seed_json(json: &str) -> Result<Self, DirectoryError> {
        let seed: SeedFile = serde_json::from_str(json)?;
        if seed.schools.is_empty() {
            return Err(DirectoryError::EmptySeed);
        }

        let mut order = Vec::with_capacity(seed.schools.len());
        let mut schools = HashMap::with_capacity(seed.schools.len());
        for record in seed.schools {
            let school_id = SchoolId::new(record.id);
            let school = School::new(school_id, record.name)?;

            let mut metrics = Vec::with_capacity(record.metrics.len());
            for metric in record.metrics {
                metrics.push(Metric::new(metric.name, metric.value, metric.unit)?);
            }

            let mut members = Vec::with_capacity(record.members.len());
            for member in record.members {
                members.push(Member::new(
                    UserId::new(member.id),
                    school_id,
                    member.name,
                    member.role,
                    member.status,
                )?);
            }

            order.push(school_id);
            schools.insert(
                school_id,
                SchoolRecord {
                    school,
                    metrics,
                    members,
                },
            );
        }

        Ok(Self { order, schools })
    }

    fn record(&self, id: SchoolId) -> Result<&SchoolRecord, DirectoryError> {
        self.schools
            .get(&id)
            .ok_or(DirectoryError::UnknownSchool(id))
    }
}

#[async_trait]
impl SchoolDirectory for MockDirectory {
    async fn schools(&self) -> Result<Vec<School>, DirectoryError> {
        Ok(self
            .order
            .iter()
            .filter_map(|id| self.schools.get(id))
            .map(|record| record.school.clone())
            .collect())
    }

    async fn school(&self, id: SchoolId) -> Result<School, DirectoryError> {
        self.record(id).map(|record| record.school.clone())
    }

    async fn metrics(&self, id: SchoolId) -> Result<Vec<Metric>, DirectoryError> {
        self.record(id).map(|record| record.metrics.clone())
    }

    async fn members(
        &self,
        id: SchoolId,
        query: RosterQuery,
    ) -> Result<Vec<Member>, DirectoryError> {
        let record = self.record(id)?;
        Ok(record
            .members
            .iter()
            .filter(|member| query.matches(member))
            .cloned()
            .collect())
    }
}
