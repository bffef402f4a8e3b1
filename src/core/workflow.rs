//! Join-us application workflow
//!
//! [`ApplicationForm`] is the state machine behind the application page:
//!
//! ```text
//! Loading ──gate open / gate error──▶ Form ──submit──▶ Submitting ──ok──▶ Submitted
//!    │                                 ▲                  │
//!    └──gate closed──▶ Closed          └──invalid / error─┘
//! ```
//!
//! The transport is reached through [`ApplicationsApi`], and the async
//! drivers [`check_gate`] and [`submit`] work over any [`FormCell`], so the
//! same code runs against a Leptos signal in the browser and a `RefCell` in
//! tests.

use std::cell::RefCell;

use leptos::prelude::{RwSignal, Update};

use crate::core::application::{ApplicationDraft, DraftField, NewApplication, ValidationError};
use crate::core::notice::Notice;

/// Errors reported by the persistence boundary
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("An application with this register number already exists")]
    Duplicate,

    #[error("Applications are currently closed")]
    Closed,

    #[error("Application rejected: {0}")]
    Rejected(String),

    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    #[error("Network error: {0}")]
    Transport(String),
}

/// Persistence and acceptance-gate boundary used by the workflow
#[allow(async_fn_in_trait)]
pub trait ApplicationsApi {
    /// Whether new applications are currently accepted
    async fn is_accepting(&self) -> Result<bool, ApiError>;

    /// Insert one application row
    async fn insert(&self, application: &NewApplication) -> Result<(), ApiError>;
}

/// Visible state of the application page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormState {
    /// Waiting for the acceptance gate
    #[default]
    Loading,
    Closed,
    Form,
    Submitting,
    Submitted,
}

/// Why a submit action did not produce an insert
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitBlocked {
    /// A submission is already outstanding
    InFlight,
    /// The form is not shown (loading, closed or already submitted)
    NotEditable(FormState),
    Invalid(ValidationError),
}

impl SubmitBlocked {
    /// Notice to show for a blocked submit; silent no-ops return `None`
    pub fn notice(&self) -> Option<Notice> {
        match self {
            SubmitBlocked::InFlight | SubmitBlocked::NotEditable(_) => None,
            SubmitBlocked::Invalid(ValidationError::SamePreference) => Some(Notice::error(
                "Invalid Selection",
                ValidationError::SamePreference.to_string(),
            )),
            SubmitBlocked::Invalid(err) => {
                Some(Notice::error("Missing Information", err.to_string()))
            }
        }
    }
}

/// Application form state machine
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApplicationForm {
    state: FormState,
    draft: ApplicationDraft,
}

impl ApplicationForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn draft(&self) -> &ApplicationDraft {
        &self.draft
    }

    pub fn is_submitting(&self) -> bool {
        self.state == FormState::Submitting
    }

    /// Edit one field. Ignored unless the form is editable.
    ///
    /// Picking the current second preference as first preference clears the
    /// second one, since it is no longer offered.
    pub fn set_field(&mut self, field: DraftField, value: impl Into<String>) {
        if self.state != FormState::Form {
            return;
        }
        let value = value.into();
        if field == DraftField::FirstPreference && value == self.draft.second_preference {
            self.draft.set(DraftField::SecondPreference, String::new());
        }
        self.draft.set(field, value);
    }

    /// Apply the acceptance-gate answer. A failed check opens the form.
    pub fn resolve_gate(&mut self, gate: Result<bool, ApiError>) {
        if self.state != FormState::Loading {
            return;
        }
        self.state = match gate {
            Ok(true) => FormState::Form,
            Ok(false) => FormState::Closed,
            Err(err) => {
                leptos::logging::warn!("application status check failed, opening form: {err}");
                FormState::Form
            }
        };
    }

    /// Start a submission and hand back the payload to insert.
    ///
    /// On success the form is `Submitting` until [`Self::complete_submit`].
    pub fn begin_submit(&mut self) -> Result<NewApplication, SubmitBlocked> {
        match self.state {
            FormState::Form => {}
            FormState::Submitting => return Err(SubmitBlocked::InFlight),
            other => return Err(SubmitBlocked::NotEditable(other)),
        }

        let application = self.draft.validate().map_err(SubmitBlocked::Invalid)?;
        self.state = FormState::Submitting;
        Ok(application)
    }

    /// Finish the outstanding submission and return the notice to show
    pub fn complete_submit(&mut self, result: Result<(), ApiError>) -> Notice {
        match result {
            Ok(()) => {
                self.state = FormState::Submitted;
                Notice::success(
                    "Application Submitted!",
                    "We'll review your application and get back to you soon.",
                )
            }
            Err(ApiError::Duplicate) => {
                self.state = FormState::Form;
                Notice::error(
                    "Already Applied",
                    "An application with this register number already exists.",
                )
            }
            Err(ApiError::Closed) => {
                self.state = FormState::Closed;
                Notice::error(
                    "Applications Closed",
                    "Applications are currently not being accepted. Check back later!",
                )
            }
            Err(err) => {
                leptos::logging::warn!("application submission failed: {err}");
                self.state = FormState::Form;
                Notice::error("Error", "Failed to submit application. Please try again.")
            }
        }
    }
}

/// Mutable cell holding an [`ApplicationForm`].
///
/// Returns `None` when the cell is gone (a disposed signal).
pub trait FormCell {
    fn update_form<R>(&self, f: impl FnOnce(&mut ApplicationForm) -> R) -> Option<R>;
}

impl FormCell for RefCell<ApplicationForm> {
    fn update_form<R>(&self, f: impl FnOnce(&mut ApplicationForm) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

impl FormCell for RwSignal<ApplicationForm> {
    fn update_form<R>(&self, f: impl FnOnce(&mut ApplicationForm) -> R) -> Option<R> {
        self.try_update(f)
    }
}

/// Resolve the acceptance gate for a freshly loaded form
pub async fn check_gate<C, A>(cell: &C, api: &A)
where
    C: FormCell + ?Sized,
    A: ApplicationsApi + ?Sized,
{
    let gate = api.is_accepting().await;
    cell.update_form(|form| form.resolve_gate(gate));
}

/// Run one user-initiated submit.
///
/// Issues at most one insert and never retries. Returns the notice to show,
/// or `None` when the action was a silent no-op.
pub async fn submit<C, A>(cell: &C, api: &A) -> Option<Notice>
where
    C: FormCell + ?Sized,
    A: ApplicationsApi + ?Sized,
{
    let application = match cell.update_form(|form| form.begin_submit())? {
        Ok(application) => application,
        Err(blocked) => return blocked.notice(),
    };

    let result = api.insert(&application).await;
    cell.update_form(|form| form.complete_submit(result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::application::{Track, YearOfStudy};

    fn open_form() -> ApplicationForm {
        let mut form = ApplicationForm::new();
        form.resolve_gate(Ok(true));
        form.set_field(DraftField::Name, "Ravi Kumar");
        form.set_field(DraftField::YearOfStudy, "1st Year");
        form.set_field(DraftField::Course, "B.Tech ECE");
        form.set_field(DraftField::RegisterNumber, "RA2311004010017");
        form.set_field(DraftField::Department, "Electronics");
        form.set_field(DraftField::FirstPreference, "Electrical");
        form.set_field(DraftField::SecondPreference, "Mechanical");
        form
    }

    #[test]
    fn test_starts_loading() {
        let form = ApplicationForm::new();
        assert_eq!(form.state(), FormState::Loading);
    }

    #[test]
    fn test_gate_transitions() {
        let mut open = ApplicationForm::new();
        open.resolve_gate(Ok(true));
        assert_eq!(open.state(), FormState::Form);

        let mut closed = ApplicationForm::new();
        closed.resolve_gate(Ok(false));
        assert_eq!(closed.state(), FormState::Closed);
    }

    #[test]
    fn test_gate_failure_falls_back_to_form() {
        let mut form = ApplicationForm::new();
        form.resolve_gate(Err(ApiError::Transport("offline".to_string())));
        assert_eq!(form.state(), FormState::Form);
    }

    #[test]
    fn test_gate_resolves_only_once() {
        let mut form = ApplicationForm::new();
        form.resolve_gate(Ok(true));
        form.resolve_gate(Ok(false));
        assert_eq!(form.state(), FormState::Form);
    }

    #[test]
    fn test_fields_ignored_while_loading() {
        let mut form = ApplicationForm::new();
        form.set_field(DraftField::Name, "Early");
        assert_eq!(form.draft().name, "");
    }

    #[test]
    fn test_begin_submit_enters_submitting() {
        let mut form = open_form();
        let application = form.begin_submit().unwrap();

        assert_eq!(form.state(), FormState::Submitting);
        assert_eq!(application.year_of_study, YearOfStudy::First);
        assert_eq!(application.first_preference, Track::Electrical);
    }

    #[test]
    fn test_second_begin_submit_is_in_flight() {
        let mut form = open_form();
        form.begin_submit().unwrap();

        assert_eq!(form.begin_submit(), Err(SubmitBlocked::InFlight));
        assert_eq!(form.state(), FormState::Submitting);
    }

    #[test]
    fn test_same_preference_keeps_form() {
        let mut form = open_form();
        form.set_field(DraftField::SecondPreference, "Electrical");

        let blocked = form.begin_submit().unwrap_err();
        assert_eq!(blocked, SubmitBlocked::Invalid(ValidationError::SamePreference));
        assert_eq!(form.state(), FormState::Form);

        let notice = blocked.notice().unwrap();
        assert_eq!(notice.title, "Invalid Selection");
        assert!(notice.is_error());
    }

    #[test]
    fn test_first_preference_clears_matching_second() {
        let mut form = open_form();
        form.set_field(DraftField::FirstPreference, "Mechanical");

        assert_eq!(form.draft().first_preference, "Mechanical");
        assert_eq!(form.draft().second_preference, "");

        let blocked = form.begin_submit().unwrap_err();
        assert_eq!(
            blocked,
            SubmitBlocked::Invalid(ValidationError::MissingField(DraftField::SecondPreference))
        );
    }

    #[test]
    fn test_first_preference_keeps_other_second() {
        let mut form = open_form();
        form.set_field(DraftField::FirstPreference, "Programming");

        assert_eq!(form.draft().second_preference, "Mechanical");
        assert!(form.begin_submit().is_ok());
    }

    #[test]
    fn test_duplicate_returns_to_form_with_data() {
        let mut form = open_form();
        let before = form.draft().clone();
        form.begin_submit().unwrap();

        let notice = form.complete_submit(Err(ApiError::Duplicate));

        assert_eq!(notice.title, "Already Applied");
        assert_eq!(form.state(), FormState::Form);
        assert_eq!(form.draft(), &before);
    }

    #[test]
    fn test_generic_failure_returns_to_form_with_data() {
        let mut form = open_form();
        let before = form.draft().clone();
        form.begin_submit().unwrap();

        let notice = form.complete_submit(Err(ApiError::Server {
            status: 500,
            message: "boom".to_string(),
        }));

        assert_eq!(notice.title, "Error");
        assert_eq!(form.state(), FormState::Form);
        assert_eq!(form.draft(), &before);
    }

    #[test]
    fn test_success_is_terminal() {
        let mut form = open_form();
        form.begin_submit().unwrap();

        let notice = form.complete_submit(Ok(()));
        assert!(!notice.is_error());
        assert_eq!(form.state(), FormState::Submitted);

        assert_eq!(
            form.begin_submit(),
            Err(SubmitBlocked::NotEditable(FormState::Submitted))
        );
        form.set_field(DraftField::Name, "Changed");
        assert_eq!(form.draft().name, "Ravi Kumar");
    }

    #[test]
    fn test_closed_response_closes_form() {
        let mut form = open_form();
        form.begin_submit().unwrap();

        form.complete_submit(Err(ApiError::Closed));
        assert_eq!(form.state(), FormState::Closed);
    }

    #[test]
    fn test_silent_blocks_have_no_notice() {
        assert!(SubmitBlocked::InFlight.notice().is_none());
        assert!(
            SubmitBlocked::NotEditable(FormState::Loading)
                .notice()
                .is_none()
        );
    }

    #[cfg(feature = "ssr")]
    mod driver {
        use super::*;
        use futures::channel::oneshot;
        use futures::executor::block_on;
        use std::cell::Cell;

        /// Records every insert and answers with a fixed result
        struct RecordingApi {
            gate: Result<bool, ApiError>,
            result: Result<(), ApiError>,
            inserts: RefCell<Vec<NewApplication>>,
        }

        impl RecordingApi {
            fn answering(result: Result<(), ApiError>) -> Self {
                Self {
                    gate: Ok(true),
                    result,
                    inserts: RefCell::new(Vec::new()),
                }
            }
        }

        impl ApplicationsApi for RecordingApi {
            async fn is_accepting(&self) -> Result<bool, ApiError> {
                self.gate.clone()
            }

            async fn insert(&self, application: &NewApplication) -> Result<(), ApiError> {
                self.inserts.borrow_mut().push(application.clone());
                self.result.clone()
            }
        }

        /// Holds every insert open until the test releases it
        struct PendingApi {
            release: RefCell<Option<oneshot::Receiver<()>>>,
            inserts: Cell<usize>,
        }

        impl ApplicationsApi for PendingApi {
            async fn is_accepting(&self) -> Result<bool, ApiError> {
                Ok(true)
            }

            async fn insert(&self, _application: &NewApplication) -> Result<(), ApiError> {
                self.inserts.set(self.inserts.get() + 1);
                let release = self.release.borrow_mut().take();
                if let Some(release) = release {
                    let _ = release.await;
                }
                Ok(())
            }
        }

        #[test]
        fn test_check_gate_opens_form() {
            let cell = RefCell::new(ApplicationForm::new());
            let api = RecordingApi::answering(Ok(()));

            block_on(check_gate(&cell, &api));
            assert_eq!(cell.borrow().state(), FormState::Form);
        }

        #[test]
        fn test_check_gate_closed() {
            let cell = RefCell::new(ApplicationForm::new());
            let api = RecordingApi {
                gate: Ok(false),
                ..RecordingApi::answering(Ok(()))
            };

            block_on(check_gate(&cell, &api));
            assert_eq!(cell.borrow().state(), FormState::Closed);
        }

        #[test]
        fn test_valid_submit_inserts_exactly_once() {
            let cell = RefCell::new(open_form());
            let api = RecordingApi::answering(Ok(()));

            let notice = block_on(submit(&cell, &api)).unwrap();

            assert_eq!(notice.title, "Application Submitted!");
            assert_eq!(api.inserts.borrow().len(), 1);
            assert_eq!(api.inserts.borrow()[0].register_number, "RA2311004010017");
            assert_eq!(cell.borrow().state(), FormState::Submitted);
        }

        #[test]
        fn test_invalid_submit_makes_no_insert() {
            let cell = RefCell::new(open_form());
            cell.borrow_mut()
                .set_field(DraftField::SecondPreference, "Electrical");
            let api = RecordingApi::answering(Ok(()));

            let notice = block_on(submit(&cell, &api)).unwrap();

            assert_eq!(notice.title, "Invalid Selection");
            assert!(api.inserts.borrow().is_empty());
            assert_eq!(cell.borrow().state(), FormState::Form);
        }

        #[test]
        fn test_duplicate_submit_keeps_input() {
            let cell = RefCell::new(open_form());
            let before = cell.borrow().draft().clone();
            let api = RecordingApi::answering(Err(ApiError::Duplicate));

            let notice = block_on(submit(&cell, &api)).unwrap();

            assert_eq!(notice.title, "Already Applied");
            assert_eq!(cell.borrow().state(), FormState::Form);
            assert_eq!(cell.borrow().draft(), &before);
        }

        #[test]
        fn test_no_submit_after_success() {
            let cell = RefCell::new(open_form());
            let api = RecordingApi::answering(Ok(()));

            block_on(submit(&cell, &api));
            let second = block_on(submit(&cell, &api));

            assert!(second.is_none());
            assert_eq!(api.inserts.borrow().len(), 1);
        }

        #[test]
        fn test_concurrent_submits_insert_once() {
            let cell = RefCell::new(open_form());
            let (release, receiver) = oneshot::channel();
            let api = PendingApi {
                release: RefCell::new(Some(receiver)),
                inserts: Cell::new(0),
            };

            let (first, second) = block_on(async {
                futures::join!(submit(&cell, &api), async {
                    let notice = submit(&cell, &api).await;
                    let _ = release.send(());
                    notice
                })
            });

            assert_eq!(api.inserts.get(), 1);
            assert!(second.is_none());
            assert_eq!(first.unwrap().title, "Application Submitted!");
            assert_eq!(cell.borrow().state(), FormState::Submitted);
        }
    }
}
