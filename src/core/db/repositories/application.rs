//! Application repository
//!
//! Inserts into the `applications` table. `register_number` is unique; a
//! second insert with the same number is reported as
//! [`ApplicationRepositoryError::AlreadyApplied`] rather than a database
//! failure.

use std::future::Future;
use std::sync::Arc;

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use sqlx::PgPool;

use crate::core::application::NewApplication;
use crate::core::db::models::ApplicationRecord;

/// PostgreSQL SQLSTATE for `unique_violation`
pub const UNIQUE_VIOLATION: &str = "23505";

/// Application repository error types
#[derive(Debug, thiserror::Error)]
pub enum ApplicationRepositoryError {
    #[error("An application with register number {0} already exists")]
    AlreadyApplied(String),

    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),
}

impl ApplicationRepositoryError {
    fn from_insert(err: sqlx::Error, register_number: &str) -> Self {
        match &err {
            sqlx::Error::Database(db) if db.code().as_deref() == Some(UNIQUE_VIOLATION) => {
                ApplicationRepositoryError::AlreadyApplied(register_number.to_string())
            }
            _ => ApplicationRepositoryError::DatabaseError(err),
        }
    }
}

/// Storage for submitted applications
pub trait ApplicationStore: Clone + Send + Sync + 'static {
    /// Insert one application. Never updates an existing row.
    fn insert(
        &self,
        application: &NewApplication,
    ) -> impl Future<Output = Result<ApplicationRecord, ApplicationRepositoryError>> + Send;
}

/// PostgreSQL-backed application repository
#[derive(Clone)]
pub struct ApplicationRepository {
    pool: PgPool,
}

impl ApplicationRepository {
    /// Create a new application repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl ApplicationStore for ApplicationRepository {
    async fn insert(
        &self,
        application: &NewApplication,
    ) -> Result<ApplicationRecord, ApplicationRepositoryError> {
        let row = ApplicationRecord::new(application);

        sqlx::query_as::<_, ApplicationRecord>(
            r#"
            INSERT INTO applications
                (id, name, year_of_study, course, register_number, department,
                 first_preference, second_preference)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, name, year_of_study, course, register_number, department,
                      first_preference, second_preference, created_at
            "#,
        )
        .bind(row.id)
        .bind(&row.name)
        .bind(&row.year_of_study)
        .bind(&row.course)
        .bind(&row.register_number)
        .bind(&row.department)
        .bind(&row.first_preference)
        .bind(&row.second_preference)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| ApplicationRepositoryError::from_insert(e, &row.register_number))
    }
}

/// In-process store keyed by register number, for development without a
/// database and for tests
#[derive(Clone, Default)]
pub struct MemoryApplicationStore {
    rows: Arc<DashMap<String, ApplicationRecord>>,
}

impl MemoryApplicationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, register_number: &str) -> Option<ApplicationRecord> {
        self.rows.get(register_number).map(|row| row.clone())
    }
}

impl ApplicationStore for MemoryApplicationStore {
    async fn insert(
        &self,
        application: &NewApplication,
    ) -> Result<ApplicationRecord, ApplicationRepositoryError> {
        match self.rows.entry(application.register_number.clone()) {
            Entry::Occupied(entry) => Err(ApplicationRepositoryError::AlreadyApplied(
                entry.key().clone(),
            )),
            Entry::Vacant(entry) => {
                let row = ApplicationRecord::new(application);
                entry.insert(row.clone());
                Ok(row)
            }
        }
    }
}
