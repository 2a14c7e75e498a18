//! Skill and availability mappers

use cc_core::entities::{Availability, Skill};
use cc_core::value_objects::{AvailabilityId, SkillId};

use crate::models::{AvailabilityModel, ProfileSkillModel, SkillModel};

impl From<SkillModel> for Skill {
    fn from(model: SkillModel) -> Self {
        Skill {
            id: SkillId::new(model.id),
            name: model.name,
        }
    }
}

impl From<ProfileSkillModel> for Skill {
    fn from(model: ProfileSkillModel) -> Self {
        Skill {
            id: SkillId::new(model.skill_id),
            name: model.skill_name,
        }
    }
}

impl From<AvailabilityModel> for Availability {
    fn from(model: AvailabilityModel) -> Self {
        Availability {
            id: AvailabilityId::new(model.id),
            name: model.name,
        }
    }
}
