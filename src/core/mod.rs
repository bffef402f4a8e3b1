//! Core domain models and business logic for the site

pub mod application;
pub mod carousel;
pub mod content;
pub mod magnetic;
pub mod notice;
pub mod protocol;
pub mod reveal;
pub mod workflow;

#[cfg(feature = "ssr")]
pub mod applications;
#[cfg(feature = "ssr")]
pub mod config;
#[cfg(feature = "ssr")]
pub mod db;

pub use application::{ApplicationDraft, DraftField, NewApplication, Track, YearOfStudy};
pub use carousel::Carousel;
pub use magnetic::{MagneticField, MagneticState, Offset, Point, Rect};
pub use notice::{Notice, NoticeKind};
pub use reveal::RevealLatch;
pub use workflow::{ApiError, ApplicationForm, ApplicationsApi, FormState};
