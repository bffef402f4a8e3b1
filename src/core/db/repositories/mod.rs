//! Database repositories
//!
//! Repositories encapsulate data access logic and provide a clean API for
//! the HTTP layer to interact with storage.

pub mod application;

pub use application::{
    ApplicationRepository, ApplicationRepositoryError, ApplicationStore, MemoryApplicationStore,
    UNIQUE_VIOLATION,
};
