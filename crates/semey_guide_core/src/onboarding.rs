//! crates/semey_guide_core/src/onboarding.rs
//!
//! The multi-step onboarding checklist: a fixed ordered list of
//! time-windowed periods, each with advice and checklist items per
//! language.
//!
//! Completion state lives in memory only and resets when the process
//! restarts. That is a current limitation of the design, not a feature.

use serde::{Deserialize, Serialize};

use crate::i18n::Language;
use crate::ports::{PortError, PortResult};

/// The time window a period covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Period {
    #[serde(rename = "Day 1-3")]
    Days1To3,
    #[serde(rename = "Week 1")]
    Week1,
    #[serde(rename = "Weeks 2-4")]
    Weeks2To4,
}

impl Period {
    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Days1To3 => "Day 1-3",
            Period::Week1 => "Week 1",
            Period::Weeks2To4 => "Weeks 2-4",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub text: String,
    pub completed: bool,
}

impl ChecklistItem {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            completed: false,
        }
    }
}

/// One onboarding period with its advice and checklist, in both languages.
///
/// The two task lists carry independent completion flags; toggling an item
/// in one language does not touch its counterpart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OnboardingPeriod {
    pub id: String,
    pub period: Period,
    pub title: String,
    pub title_ru: String,
    pub advice: Vec<String>,
    pub advice_ru: Vec<String>,
    pub tasks: Vec<ChecklistItem>,
    pub tasks_ru: Vec<ChecklistItem>,
}

/// The in-memory checklist state for one running instance.
pub struct OnboardingChecklist {
    periods: Vec<OnboardingPeriod>,
}

impl OnboardingChecklist {
    pub fn new(periods: Vec<OnboardingPeriod>) -> Self {
        Self { periods }
    }

    pub fn periods(&self) -> &[OnboardingPeriod] {
        &self.periods
    }

    /// Flips the completion flag of one checklist item and returns its new
    /// state. Out-of-range indices are reported as `NotFound`.
    pub fn toggle(
        &mut self,
        period_idx: usize,
        task_idx: usize,
        lang: Language,
    ) -> PortResult<bool> {
        let period = self.periods.get_mut(period_idx).ok_or_else(|| {
            PortError::NotFound(format!("Onboarding period {}", period_idx))
        })?;
        let tasks = match lang {
            Language::En => &mut period.tasks,
            Language::Ru => &mut period.tasks_ru,
        };
        let task = tasks.get_mut(task_idx).ok_or_else(|| {
            PortError::NotFound(format!(
                "Task {} in onboarding period {}",
                task_idx, period_idx
            ))
        })?;
        task.completed = !task.completed;
        Ok(task.completed)
    }
}
