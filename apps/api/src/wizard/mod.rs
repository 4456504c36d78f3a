//! Three-step client wizard: welcome → form → results.
//!
//! The wizard owns the current profile and result. A failed submission keeps
//! it on the form step with an error message; retry re-submits the stored
//! profile without re-asking.

pub mod client;
pub mod form;
pub mod terminal;

use std::collections::BTreeSet;

use thiserror::Error;
use tracing::{info, warn};

use crate::i18n::{t_with, Language};
use crate::models::profile::Profile;
use crate::models::roadmap::RoadmapResult;

pub use client::{ClientError, HttpRoadmapSource, RoadmapSource};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Step {
    #[default]
    Welcome,
    Form,
    Results,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransitionError {
    #[error("cannot {action} from the {from:?} step")]
    InvalidTransition { action: &'static str, from: Step },

    #[error("no previous submission to retry")]
    NothingToRetry,
}

#[derive(Debug, Default)]
pub struct Wizard {
    language: Language,
    step: Step,
    profile: Option<Profile>,
    result: Option<RoadmapResult>,
    error: Option<String>,
    checked: BTreeSet<usize>,
}

impl Wizard {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            ..Self::default()
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn profile(&self) -> Option<&Profile> {
        self.profile.as_ref()
    }

    pub fn result(&self) -> Option<&RoadmapResult> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn checked(&self) -> &BTreeSet<usize> {
        &self.checked
    }

    /// Changes the display language. Allowed on every step; stored data is untouched.
    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    pub fn start(&mut self) -> Result<(), TransitionError> {
        self.expect_step(Step::Welcome, "start")?;
        self.step = Step::Form;
        Ok(())
    }

    /// Submits `profile`. On failure the wizard stays on the form step with
    /// a localized error; on success it moves to results.
    ///
    /// Taking `&mut self` makes a second concurrent submission impossible.
    pub async fn submit(
        &mut self,
        profile: Profile,
        source: &dyn RoadmapSource,
    ) -> Result<(), TransitionError> {
        self.expect_step(Step::Form, "submit")?;
        self.error = None;

        info!(
            "Requesting roadmap for {} ({})",
            profile.profession, profile.display_language
        );
        let outcome = source.fetch(&profile).await;
        self.profile = Some(profile);

        match outcome {
            Ok(result) => {
                self.result = Some(result);
                self.checked.clear();
                self.step = Step::Results;
            }
            Err(err) => {
                warn!("Roadmap request failed: {err}");
                let message = err.to_string();
                self.error = Some(
                    t_with(self.language, "error.failed", &[("message", message.as_str())])
                        .into_owned(),
                );
            }
        }
        Ok(())
    }

    /// Re-submits the last profile.
    pub async fn retry(&mut self, source: &dyn RoadmapSource) -> Result<(), TransitionError> {
        self.expect_step(Step::Form, "retry")?;
        let profile = self.profile.clone().ok_or(TransitionError::NothingToRetry)?;
        self.submit(profile, source).await
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    /// Flips the checked state of checklist item `index`. Out-of-range
    /// indices are ignored.
    pub fn toggle_checklist(&mut self, index: usize) {
        let len = self.result.as_ref().map_or(0, |r| r.checklist.len());
        if index >= len {
            return;
        }
        if !self.checked.remove(&index) {
            self.checked.insert(index);
        }
    }

    /// Clears profile, result, error and checks, and returns to welcome.
    pub fn generate_another(&mut self) -> Result<(), TransitionError> {
        self.expect_step(Step::Results, "generate another")?;
        *self = Self::new(self.language);
        Ok(())
    }

    fn expect_step(&self, expected: Step, action: &'static str) -> Result<(), TransitionError> {
        if self.step == expected {
            Ok(())
        } else {
            Err(TransitionError::InvalidTransition {
                action,
                from: self.step,
            })
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::roadmap::pipeline::tests::ana;

    /// Replays queued outcomes in order; the last one repeats.
    pub(crate) struct MockSource {
        outcomes: Mutex<Vec<Result<RoadmapResult, (u16, String)>>>,
        pub calls: AtomicUsize,
        pub last_language: Mutex<Option<Language>>,
    }

    impl MockSource {
        pub(crate) fn new(outcomes: Vec<Result<RoadmapResult, (u16, String)>>) -> Self {
            Self {
                outcomes: Mutex::new(outcomes),
                calls: AtomicUsize::new(0),
                last_language: Mutex::new(None),
            }
        }
    }

    #[async_trait]
    impl RoadmapSource for MockSource {
        async fn fetch(&self, profile: &Profile) -> Result<RoadmapResult, ClientError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_language.lock().unwrap() = Some(profile.display_language);
            let mut outcomes = self.outcomes.lock().unwrap();
            let next = if outcomes.len() > 1 {
                outcomes.remove(0)
            } else {
                outcomes[0].clone()
            };
            next.map_err(|(status, message)| ClientError::Api { status, message })
        }
    }

    pub(crate) fn roadmap() -> RoadmapResult {
        RoadmapResult {
            summary: "Welcome".into(),
            professional_differences: "Different codes".into(),
            credential_validation: "- Apply to PEO: $300 CAD, 3 months".into(),
            recommended_training: "- Course".into(),
            alternative_jobs: "- Technologist".into(),
            checklist: vec!["One".into(), "Two".into(), "Three".into()],
        }
    }

    fn unavailable() -> Result<RoadmapResult, (u16, String)> {
        Err((503, "Failed to generate roadmap content. Please try again.".into()))
    }

    #[tokio::test]
    async fn test_happy_path_reaches_results() {
        let source = MockSource::new(vec![Ok(roadmap())]);
        let mut wizard = Wizard::new(Language::En);
        assert_eq!(wizard.step(), Step::Welcome);

        wizard.start().unwrap();
        wizard.submit(ana(), &source).await.unwrap();

        assert_eq!(wizard.step(), Step::Results);
        assert_eq!(wizard.result(), Some(&roadmap()));
        assert_eq!(wizard.error(), None);
    }

    #[tokio::test]
    async fn test_failure_stays_on_form_with_message() {
        let source = MockSource::new(vec![unavailable()]);
        let mut wizard = Wizard::new(Language::En);
        wizard.start().unwrap();
        wizard.submit(ana(), &source).await.unwrap();

        assert_eq!(wizard.step(), Step::Form);
        assert_eq!(
            wizard.error(),
            Some("Failed to generate roadmap: Failed to generate roadmap content. Please try again.")
        );
        assert!(wizard.result().is_none());
    }

    #[tokio::test]
    async fn test_retry_resubmits_profile_in_its_language() {
        let source = MockSource::new(vec![unavailable(), Ok(roadmap())]);
        let mut wizard = Wizard::new(Language::Es);
        wizard.start().unwrap();
        wizard.submit(ana(), &source).await.unwrap();
        assert!(wizard.error().is_some());

        wizard.retry(&source).await.unwrap();
        assert_eq!(wizard.step(), Step::Results);
        assert_eq!(wizard.error(), None);
        assert_eq!(source.calls.load(Ordering::SeqCst), 2);
        assert_eq!(
            *source.last_language.lock().unwrap(),
            Some(ana().display_language)
        );
    }

    #[tokio::test]
    async fn test_retry_without_submission_is_rejected() {
        let source = MockSource::new(vec![Ok(roadmap())]);
        let mut wizard = Wizard::new(Language::En);
        wizard.start().unwrap();
        assert_eq!(
            wizard.retry(&source).await,
            Err(TransitionError::NothingToRetry)
        );
        assert_eq!(source.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_toggle_and_generate_another() {
        let source = MockSource::new(vec![Ok(roadmap())]);
        let mut wizard = Wizard::new(Language::Fr);
        wizard.start().unwrap();
        wizard.submit(ana(), &source).await.unwrap();

        wizard.toggle_checklist(1);
        wizard.toggle_checklist(2);
        wizard.toggle_checklist(2);
        wizard.toggle_checklist(99);
        assert_eq!(wizard.checked(), &BTreeSet::from([1]));

        wizard.generate_another().unwrap();
        assert_eq!(wizard.step(), Step::Welcome);
        assert!(wizard.profile().is_none());
        assert!(wizard.result().is_none());
        assert!(wizard.checked().is_empty());
        assert_eq!(wizard.language(), Language::Fr);
    }

    #[tokio::test]
    async fn test_invalid_transitions() {
        let source = MockSource::new(vec![Ok(roadmap())]);
        let mut wizard = Wizard::new(Language::En);
        assert!(matches!(
            wizard.submit(ana(), &source).await,
            Err(TransitionError::InvalidTransition { from: Step::Welcome, .. })
        ));
        assert!(wizard.generate_another().is_err());
        wizard.start().unwrap();
        assert!(wizard.start().is_err());
    }

    #[tokio::test]
    async fn test_language_switch_keeps_state() {
        let source = MockSource::new(vec![Ok(roadmap())]);
        let mut wizard = Wizard::new(Language::En);
        wizard.start().unwrap();
        wizard.submit(ana(), &source).await.unwrap();

        wizard.toggle_checklist(0);
        wizard.set_language(Language::Pt);
        assert_eq!(wizard.step(), Step::Results);
        assert_eq!(wizard.result(), Some(&roadmap()));
        assert!(wizard.checked().contains(&0));
    }

    #[test]
    fn test_dismiss_clears_error() {
        let mut wizard = Wizard::new(Language::En);
        wizard.error = Some("boom".into());
        wizard.dismiss_error();
        assert_eq!(wizard.error(), None);
    }
}
