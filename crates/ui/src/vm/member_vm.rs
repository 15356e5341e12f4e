use bloom_core::model::{Member, MemberStatus, UserId};

/// Display-ready roster row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemberRowVm {
    pub id: UserId,
    pub name: String,
    pub role_label: &'static str,
    pub status_label: &'static str,
    pub status_class: &'static str,
}

impl From<&Member> for MemberRowVm {
    fn from(member: &Member) -> Self {
        Self {
            id: member.id(),
            name: member.name().to_string(),
            role_label: member.role().label(),
            status_label: member.status().label(),
            status_class: status_class(member.status()),
        }
    }
}

#[must_use]
pub fn map_member_rows(members: &[Member]) -> Vec<MemberRowVm> {
    members.iter().map(MemberRowVm::from).collect()
}

fn status_class(status: MemberStatus) -> &'static str {
    match status {
        MemberStatus::Active => "roster-status roster-status--active",
        MemberStatus::Invited => "roster-status roster-status--invited",
        MemberStatus::Suspended => "roster-status roster-status--suspended",
    }
}
