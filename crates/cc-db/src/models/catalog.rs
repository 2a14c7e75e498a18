//! Skill and availability database models

use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct SkillModel {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, FromRow)]
pub struct AvailabilityModel {
    pub id: i64,
    pub name: String,
}
