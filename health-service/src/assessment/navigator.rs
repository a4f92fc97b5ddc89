//! Step navigation for the four-step questionnaire.

/// The questionnaire has a fixed number of steps: personal info, lifestyle,
/// symptoms, medical history.
pub const TOTAL_STEPS: u8 = 4;

/// Linear state machine over steps 1..=TOTAL_STEPS. Navigation saturates at
/// both bounds; there is no terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepNavigator {
    step: u8,
}

impl StepNavigator {
    pub fn new() -> Self {
        Self { step: 1 }
    }

    /// Current step, always in 1..=TOTAL_STEPS.
    pub fn step(&self) -> u8 {
        self.step
    }

    /// Advance one step; no-op on the last step.
    pub fn next(&mut self) {
        if self.step < TOTAL_STEPS {
            self.step += 1;
        }
    }

    /// Go back one step; no-op on the first step.
    pub fn previous(&mut self) {
        if self.step > 1 {
            self.step -= 1;
        }
    }

    pub fn is_first(&self) -> bool {
        self.step == 1
    }

    pub fn is_last(&self) -> bool {
        self.step == TOTAL_STEPS
    }

    /// Progress shown above the form: 25, 50, 75, 100.
    pub fn percent_complete(&self) -> u8 {
        (u32::from(self.step) * 100 / u32::from(TOTAL_STEPS)) as u8
    }
}

impl Default for StepNavigator {
    fn default() -> Self {
        Self::new()
    }
}
