//! The view-level state machine around one assessment session.
//!
//! The Loading state is the single-request gate: while a submission is in
//! flight no form mutation or second submission is accepted, and a failed
//! submission returns to the form with the answers intact.

use super::navigator::StepNavigator;
use super::store::IntakeStore;
use crate::models::{AnalysisReport, HealthIntake};
use uuid::Uuid;

/// Which screen the session is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    Home,
    Assessment,
    Loading,
    Results,
}

/// One assessment session from landing page to report.
#[derive(Debug)]
pub struct AssessmentFlow {
    session_id: Uuid,
    view: ViewState,
    store: IntakeStore,
    navigator: StepNavigator,
    report: Option<AnalysisReport>,
    alert: Option<String>,
}

impl AssessmentFlow {
    pub fn new() -> Self {
        Self {
            session_id: Uuid::new_v4(),
            view: ViewState::Home,
            store: IntakeStore::new(),
            navigator: StepNavigator::new(),
            report: None,
            alert: None,
        }
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn view(&self) -> ViewState {
        self.view
    }

    /// Alert shown after a failed submission, cleared on the next attempt.
    pub fn alert(&self) -> Option<&str> {
        self.alert.as_deref()
    }

    pub fn report(&self) -> Option<&AnalysisReport> {
        self.report.as_ref()
    }

    /// Form state is only mutable while the form is on screen.
    pub fn store_mut(&mut self) -> Option<&mut IntakeStore> {
        (self.view == ViewState::Assessment).then_some(&mut self.store)
    }

    pub fn navigator_mut(&mut self) -> Option<&mut StepNavigator> {
        (self.view == ViewState::Assessment).then_some(&mut self.navigator)
    }

    pub fn navigator(&self) -> &StepNavigator {
        &self.navigator
    }

    /// Home → Assessment with a fresh intake.
    pub fn start(&mut self) {
        if self.view == ViewState::Home {
            self.store = IntakeStore::new();
            self.navigator = StepNavigator::new();
            self.alert = None;
            self.view = ViewState::Assessment;
        }
    }

    /// Assessment → Loading. Returns the intake to send, or `None` when no
    /// submission is accepted from the current state.
    pub fn submit(&mut self) -> Option<HealthIntake> {
        if self.view == ViewState::Assessment {
            self.alert = None;
            self.view = ViewState::Loading;
            Some(self.store.intake().clone())
        } else {
            None
        }
    }

    /// Loading → Results.
    pub fn resolve_success(&mut self, report: AnalysisReport) {
        if self.view == ViewState::Loading {
            self.report = Some(report);
            self.view = ViewState::Results;
        }
    }

    /// Loading → Assessment with a visible alert; answers are preserved.
    pub fn resolve_failure(&mut self, message: impl Into<String>) {
        if self.view == ViewState::Loading {
            self.alert = Some(message.into());
            self.view = ViewState::Assessment;
        }
    }

    /// Back to the landing page; intake and results are discarded.
    pub fn back_home(&mut self) {
        self.view = ViewState::Home;
        self.store = IntakeStore::new();
        self.navigator = StepNavigator::new();
        self.report = None;
        self.alert = None;
    }
}

impl Default for AssessmentFlow {
    fn default() -> Self {
        Self::new()
    }
}
