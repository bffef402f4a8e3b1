//! Database models
//!
//! Entity structs that map to PostgreSQL tables.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::core::application::NewApplication;

/// A stored row of the `applications` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct ApplicationRecord {
    pub id: Uuid,
    pub name: String,
    pub year_of_study: String,
    pub course: String,
    pub register_number: String,
    pub department: String,
    pub first_preference: String,
    pub second_preference: String,
    pub created_at: DateTime<Utc>,
}

impl ApplicationRecord {
    /// Row for `application` as it will be inserted
    pub fn new(application: &NewApplication) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: application.name.clone(),
            year_of_study: application.year_of_study.to_string(),
            course: application.course.clone(),
            register_number: application.register_number.clone(),
            department: application.department.clone(),
            first_preference: application.first_preference.to_string(),
            second_preference: application.second_preference.to_string(),
            created_at: Utc::now(),
        }
    }
}
