//! Reference data a profile points at

use crate::value_objects::{AvailabilityId, SkillId};

/// A skill a user can list on their profile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skill {
    pub id: SkillId,
    pub name: String,
}

/// How much time a user can contribute (e.g. "1-2 hours per week")
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Availability {
    pub id: AvailabilityId,
    pub name: String,
}
