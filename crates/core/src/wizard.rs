//! Three-step navigation for interactive front ends.

use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WizardStep {
    #[default]
    Upload,
    Configure,
    Preview,
}

impl WizardStep {
    pub const ALL: [WizardStep; 3] = [WizardStep::Upload, WizardStep::Configure, WizardStep::Preview];

    /// Following step; the last step stays put.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            WizardStep::Upload => WizardStep::Configure,
            WizardStep::Configure | WizardStep::Preview => WizardStep::Preview,
        }
    }

    /// Preceding step; the first step stays put.
    #[must_use]
    pub fn previous(self) -> Self {
        match self {
            WizardStep::Upload | WizardStep::Configure => WizardStep::Upload,
            WizardStep::Preview => WizardStep::Configure,
        }
    }

    /// Zero-based position.
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            WizardStep::Upload => "Upload File",
            WizardStep::Configure => "Configure",
            WizardStep::Preview => "Preview & Download",
        }
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            WizardStep::Upload => "Select a spreadsheet containing staff names",
            WizardStep::Configure => "Choose worksheet and column settings",
            WizardStep::Preview => "Review results and save the processed file",
        }
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Step {}/{}: {}", self.index() + 1, Self::ALL.len(), self.title())
    }
}
