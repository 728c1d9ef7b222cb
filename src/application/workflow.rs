//! Photo-to-poem workflow use case

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use thiserror::Error;

use crate::domain::photo::PhotoData;
use crate::domain::poem::{PoemPrompt, PoemStyle};
use crate::domain::session::PoemSession;

use super::ports::{
    Clipboard, ClipboardError, ExportError, GenerationError, Notifier, PoemExporter,
    PoemGenerator, Severity,
};

/// Errors from the poem workflow
#[derive(Debug, Error)]
pub enum WorkflowError {
    #[error("No photo selected")]
    MissingInput,

    #[error("A poem is already being generated")]
    GenerationPending,

    #[error("Poem generation failed: {0}")]
    Generation(#[from] GenerationError),

    #[error("No poem has been generated yet")]
    NoPoem,

    #[error("Clipboard copy failed: {0}")]
    Clipboard(#[from] ClipboardError),

    #[error("Failed to save poem: {0}")]
    Export(#[from] ExportError),
}

/// RAII guard for the in-flight flag.
///
/// `acquire` flips the flag with a single atomic swap; a second caller sees
/// the swap fail and gets nothing. Dropping the guard restores the flag, so
/// it is cleared on every settlement path, including cancellation of the
/// owning future mid-await.
struct InFlightGuard {
    flag: Arc<AtomicBool>,
}

impl InFlightGuard {
    fn acquire(flag: &Arc<AtomicBool>) -> Option<Self> {
        if flag.swap(true, Ordering::SeqCst) {
            None
        } else {
            Some(Self {
                flag: Arc::clone(flag),
            })
        }
    }
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::SeqCst);
    }
}

/// Workflow controller for the select → generate → export sequence.
///
/// Owns the session state (selected photo, generated poem, in-flight flag)
/// and orchestrates the external collaborators behind the port traits.
/// Methods take `&self` so one controller can be shared across tasks; the
/// session lock is never held across an await.
pub struct PoemWorkflow<G, C, E, N>
where
    G: PoemGenerator,
    C: Clipboard,
    E: PoemExporter,
    N: Notifier,
{
    generator: G,
    clipboard: C,
    exporter: E,
    notifier: N,
    prompt: PoemPrompt,
    session: Mutex<PoemSession>,
    in_flight: Arc<AtomicBool>,
}

impl<G, C, E, N> PoemWorkflow<G, C, E, N>
where
    G: PoemGenerator,
    C: Clipboard,
    E: PoemExporter,
    N: Notifier,
{
    /// Create a new workflow with the default (free verse) style
    pub fn new(generator: G, clipboard: C, exporter: E, notifier: N) -> Self {
        Self {
            generator,
            clipboard,
            exporter,
            notifier,
            prompt: PoemPrompt::default(),
            session: Mutex::new(PoemSession::new()),
            in_flight: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Set the poem style for subsequent generations
    pub fn with_style(mut self, style: PoemStyle) -> Self {
        self.prompt = PoemPrompt::build(style);
        self
    }

    /// Get a handle to the in-flight flag.
    ///
    /// Observers (a UI disabling its trigger control, a progress spinner)
    /// read this flag; the workflow is the only writer.
    pub fn in_flight_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.in_flight)
    }

    /// Check whether a generation request is currently in flight
    pub fn is_generating(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst)
    }

    /// Get a copy of the selected photo, if any
    pub fn photo(&self) -> Option<PhotoData> {
        self.lock_session().photo().cloned()
    }

    /// Get a copy of the generated poem, if any
    pub fn poem(&self) -> Option<String> {
        self.lock_session().poem().map(str::to_owned)
    }

    /// Store a selected photo, replacing any prior one.
    /// No validation is performed; malformed or empty data passes through.
    pub fn select_photo(&self, photo: PhotoData) {
        self.lock_session().select_photo(photo);
    }

    /// Generate a poem from the selected photo.
    ///
    /// Fails with [`WorkflowError::MissingInput`] before any generator call
    /// when no photo is selected, and with
    /// [`WorkflowError::GenerationPending`] when another generation is
    /// still in flight. On success the poem replaces any prior one; on
    /// failure the prior poem is left untouched. The in-flight flag is
    /// restored on every settlement path.
    pub async fn generate(&self) -> Result<String, WorkflowError> {
        let photo = {
            let session = self.lock_session();
            session.photo().cloned()
        };

        let photo = match photo {
            Some(photo) => photo,
            None => {
                let _ = self
                    .notifier
                    .notify(
                        "No photo selected",
                        Some("Choose a photo before generating a poem."),
                        Severity::Destructive,
                    )
                    .await;
                return Err(WorkflowError::MissingInput);
            }
        };

        let _guard = match InFlightGuard::acquire(&self.in_flight) {
            Some(guard) => guard,
            None => {
                let _ = self
                    .notifier
                    .notify(
                        "Generation already in progress",
                        None,
                        Severity::Destructive,
                    )
                    .await;
                return Err(WorkflowError::GenerationPending);
            }
        };

        let _ = self
            .notifier
            .notify("Generating poem...", None, Severity::Normal)
            .await;

        match self.generator.generate(&photo, &self.prompt).await {
            Ok(text) => {
                self.lock_session().store_poem(text.clone());
                let _ = self
                    .notifier
                    .notify("Poem ready", None, Severity::Normal)
                    .await;
                Ok(text)
            }
            Err(e) => {
                let _ = self
                    .notifier
                    .notify(
                        "Poem generation failed",
                        Some(&e.to_string()),
                        Severity::Destructive,
                    )
                    .await;
                Err(WorkflowError::Generation(e))
            }
        }
    }

    /// Copy the generated poem to the clipboard.
    ///
    /// Fails with [`WorkflowError::NoPoem`] and performs no clipboard call
    /// when nothing has been generated. Does not mutate session state.
    pub async fn copy_poem(&self) -> Result<(), WorkflowError> {
        let poem = {
            let session = self.lock_session();
            session.poem().map(str::to_owned)
        };

        let poem = match poem {
            Some(poem) => poem,
            None => {
                let _ = self
                    .notifier
                    .notify("No poem to copy", None, Severity::Destructive)
                    .await;
                return Err(WorkflowError::NoPoem);
            }
        };

        match self.clipboard.copy(&poem).await {
            Ok(()) => {
                let _ = self
                    .notifier
                    .notify("Poem copied to clipboard", None, Severity::Normal)
                    .await;
                Ok(())
            }
            Err(e) => {
                let _ = self
                    .notifier
                    .notify("Copy failed", Some(&e.to_string()), Severity::Destructive)
                    .await;
                Err(WorkflowError::Clipboard(e))
            }
        }
    }

    /// Save the generated poem as a plain-text file.
    ///
    /// Fails with [`WorkflowError::NoPoem`] and performs no file side
    /// effect when nothing has been generated. Returns the written path.
    /// Does not mutate session state.
    pub async fn save_poem(&self) -> Result<PathBuf, WorkflowError> {
        let poem = {
            let session = self.lock_session();
            session.poem().map(str::to_owned)
        };

        let poem = match poem {
            Some(poem) => poem,
            None => {
                let _ = self
                    .notifier
                    .notify("No poem to download", None, Severity::Destructive)
                    .await;
                return Err(WorkflowError::NoPoem);
            }
        };

        match self.exporter.export(&poem).await {
            Ok(path) => {
                let _ = self
                    .notifier
                    .notify(
                        "Poem saved",
                        Some(&path.display().to_string()),
                        Severity::Normal,
                    )
                    .await;
                Ok(path)
            }
            Err(e) => {
                let _ = self
                    .notifier
                    .notify("Save failed", Some(&e.to_string()), Severity::Destructive)
                    .await;
                Err(WorkflowError::Export(e))
            }
        }
    }

    fn lock_session(&self) -> MutexGuard<'_, PoemSession> {
        // Session data stays consistent even if a holder panicked
        self.session.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::photo::ImageMimeType;
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::atomic::AtomicUsize;
    use std::time::Duration;

    // Mock implementations for testing

    struct MockGenerator {
        script: Mutex<VecDeque<Result<String, GenerationError>>>,
        calls: Arc<AtomicUsize>,
        seen_data_uri: Arc<Mutex<Option<String>>>,
        delay: Option<Duration>,
    }

    impl MockGenerator {
        fn with_script(script: Vec<Result<String, GenerationError>>) -> Self {
            Self {
                script: Mutex::new(script.into()),
                calls: Arc::new(AtomicUsize::new(0)),
                seen_data_uri: Arc::new(Mutex::new(None)),
                delay: None,
            }
        }

        fn ok(text: &str) -> Self {
            Self::with_script(vec![Ok(text.to_string())])
        }

        fn slow(text: &str, delay: Duration) -> Self {
            let mut generator = Self::with_script(vec![Ok(text.to_string()), Ok(text.to_string())]);
            generator.delay = Some(delay);
            generator
        }

        fn calls(&self) -> Arc<AtomicUsize> {
            Arc::clone(&self.calls)
        }

        fn seen_data_uri(&self) -> Arc<Mutex<Option<String>>> {
            Arc::clone(&self.seen_data_uri)
        }
    }

    #[async_trait]
    impl PoemGenerator for MockGenerator {
        async fn generate(
            &self,
            photo: &PhotoData,
            _prompt: &PoemPrompt,
        ) -> Result<String, GenerationError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.seen_data_uri.lock().unwrap() = Some(photo.to_data_uri());
            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }
            self.script
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or(Err(GenerationError::EmptyResponse))
        }
    }

    struct FlagProbeGenerator {
        flag: Arc<Mutex<Option<Arc<AtomicBool>>>>,
        seen_in_flight: Arc<AtomicBool>,
        fail: bool,
    }

    impl FlagProbeGenerator {
        fn new(fail: bool) -> Self {
            Self {
                flag: Arc::new(Mutex::new(None)),
                seen_in_flight: Arc::new(AtomicBool::new(false)),
                fail,
            }
        }
    }

    #[async_trait]
    impl PoemGenerator for FlagProbeGenerator {
        async fn generate(
            &self,
            _photo: &PhotoData,
            _prompt: &PoemPrompt,
        ) -> Result<String, GenerationError> {
            if let Some(flag) = self.flag.lock().unwrap().as_ref() {
                self.seen_in_flight.store(flag.load(Ordering::SeqCst), Ordering::SeqCst);
            }
            if self.fail {
                Err(GenerationError::ApiError("boom".to_string()))
            } else {
                Ok("probe poem".to_string())
            }
        }
    }

    #[derive(Default)]
    struct MockClipboard {
        copied: Arc<Mutex<Vec<String>>>,
    }

    #[async_trait]
    impl Clipboard for MockClipboard {
        async fn copy(&self, text: &str) -> Result<(), ClipboardError> {
            self.copied.lock().unwrap().push(text.to_string());
            Ok(())
        }
    }

    #[derive(Default)]
    struct MockExporter {
        exported: Arc<Mutex<Vec<String>>>,
    }

    #[async_trait]
    impl PoemExporter for MockExporter {
        async fn export(&self, text: &str) -> Result<PathBuf, ExportError> {
            self.exported.lock().unwrap().push(text.to_string());
            Ok(PathBuf::from("/downloads/poem.txt"))
        }
    }

    #[derive(Default)]
    struct MockNotifier {
        notices: Arc<Mutex<Vec<(String, Option<String>, Severity)>>>,
    }

    #[async_trait]
    impl Notifier for MockNotifier {
        async fn notify(
            &self,
            title: &str,
            body: Option<&str>,
            severity: Severity,
        ) -> Result<(), crate::application::ports::NotificationError> {
            self.notices.lock().unwrap().push((
                title.to_string(),
                body.map(str::to_owned),
                severity,
            ));
            Ok(())
        }
    }

    fn photo(bytes: &[u8]) -> PhotoData {
        PhotoData::from_bytes(bytes, ImageMimeType::Png)
    }

    fn workflow_with(
        generator: MockGenerator,
    ) -> (
        PoemWorkflow<MockGenerator, MockClipboard, MockExporter, MockNotifier>,
        Arc<Mutex<Vec<String>>>,
        Arc<Mutex<Vec<String>>>,
        Arc<Mutex<Vec<(String, Option<String>, Severity)>>>,
    ) {
        let clipboard = MockClipboard::default();
        let exporter = MockExporter::default();
        let notifier = MockNotifier::default();
        let copied = Arc::clone(&clipboard.copied);
        let exported = Arc::clone(&exporter.exported);
        let notices = Arc::clone(&notifier.notices);
        (
            PoemWorkflow::new(generator, clipboard, exporter, notifier),
            copied,
            exported,
            notices,
        )
    }

    #[tokio::test]
    async fn generate_without_photo_raises_missing_input() {
        let generator = MockGenerator::ok("unused");
        let calls = generator.calls();
        let (workflow, _, _, notices) = workflow_with(generator);

        let err = workflow.generate().await.unwrap_err();

        assert!(matches!(err, WorkflowError::MissingInput));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert!(!workflow.is_generating());
        assert!(workflow.poem().is_none());

        let notices = notices.lock().unwrap();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].0, "No photo selected");
        assert_eq!(notices[0].2, Severity::Destructive);
    }

    #[tokio::test]
    async fn generate_stores_poem_on_success() {
        let (workflow, _, _, notices) = workflow_with(MockGenerator::ok("Roses in silicon"));

        workflow.select_photo(photo(&[1, 2, 3]));
        let text = workflow.generate().await.unwrap();

        assert_eq!(text, "Roses in silicon");
        assert_eq!(workflow.poem(), Some("Roses in silicon".to_string()));

        let notices = notices.lock().unwrap();
        assert!(notices
            .iter()
            .any(|(title, _, severity)| title == "Poem ready" && *severity == Severity::Normal));
    }

    #[tokio::test]
    async fn generate_success_overwrites_prior_poem() {
        let generator = MockGenerator::with_script(vec![
            Ok("first poem".to_string()),
            Ok("second poem".to_string()),
        ]);
        let (workflow, _, _, _) = workflow_with(generator);

        workflow.select_photo(photo(&[1]));
        workflow.generate().await.unwrap();
        workflow.generate().await.unwrap();

        assert_eq!(workflow.poem(), Some("second poem".to_string()));
    }

    #[tokio::test]
    async fn generate_failure_keeps_prior_poem() {
        let generator = MockGenerator::with_script(vec![
            Ok("first poem".to_string()),
            Err(GenerationError::ApiError("server exploded".to_string())),
        ]);
        let (workflow, _, _, notices) = workflow_with(generator);

        workflow.select_photo(photo(&[1]));
        workflow.generate().await.unwrap();

        let err = workflow.generate().await.unwrap_err();
        assert!(matches!(err, WorkflowError::Generation(_)));
        assert_eq!(workflow.poem(), Some("first poem".to_string()));

        let notices = notices.lock().unwrap();
        let failure = notices
            .iter()
            .find(|(title, _, _)| title == "Poem generation failed")
            .expect("failure notice emitted");
        assert_eq!(failure.2, Severity::Destructive);
        assert!(failure.1.as_deref().unwrap().contains("server exploded"));
    }

    #[tokio::test]
    async fn flag_is_set_during_generation_and_cleared_after() {
        let generator = FlagProbeGenerator::new(false);
        let flag_slot = Arc::clone(&generator.flag);
        let seen = Arc::clone(&generator.seen_in_flight);
        let workflow = PoemWorkflow::new(
            generator,
            MockClipboard::default(),
            MockExporter::default(),
            MockNotifier::default(),
        );
        *flag_slot.lock().unwrap() = Some(workflow.in_flight_flag());

        workflow.select_photo(photo(&[1]));
        workflow.generate().await.unwrap();

        assert!(seen.load(Ordering::SeqCst), "flag was true during the call");
        assert!(!workflow.is_generating(), "flag restored after success");
    }

    #[tokio::test]
    async fn flag_is_cleared_after_failure() {
        let generator = FlagProbeGenerator::new(true);
        let flag_slot = Arc::clone(&generator.flag);
        let seen = Arc::clone(&generator.seen_in_flight);
        let workflow = PoemWorkflow::new(
            generator,
            MockClipboard::default(),
            MockExporter::default(),
            MockNotifier::default(),
        );
        *flag_slot.lock().unwrap() = Some(workflow.in_flight_flag());

        workflow.select_photo(photo(&[1]));
        assert!(workflow.generate().await.is_err());

        assert!(seen.load(Ordering::SeqCst), "flag was true during the call");
        assert!(!workflow.is_generating(), "flag restored after failure");
    }

    #[tokio::test]
    async fn generation_uses_last_selected_photo() {
        let generator = MockGenerator::ok("poem");
        let seen = generator.seen_data_uri();
        let (workflow, _, _, _) = workflow_with(generator);

        let first = photo(&[0xAA]);
        let last = photo(&[0xBB, 0xCC]);
        workflow.select_photo(first);
        workflow.select_photo(last.clone());
        workflow.generate().await.unwrap();

        assert_eq!(seen.lock().unwrap().as_deref(), Some(last.to_data_uri().as_str()));
    }

    #[tokio::test]
    async fn overlapping_generate_is_rejected() {
        let generator = MockGenerator::slow("poem", Duration::from_millis(50));
        let (workflow, _, _, _) = workflow_with(generator);
        let workflow = Arc::new(workflow);

        workflow.select_photo(photo(&[1]));

        let (first, second) = tokio::join!(workflow.generate(), workflow.generate());

        let outcomes = [first, second];
        assert_eq!(outcomes.iter().filter(|r| r.is_ok()).count(), 1);
        assert!(outcomes
            .iter()
            .any(|r| matches!(r, Err(WorkflowError::GenerationPending))));
        assert!(!workflow.is_generating());
    }

    #[tokio::test]
    async fn copy_without_poem_raises_no_poem() {
        let (workflow, copied, _, notices) = workflow_with(MockGenerator::ok("unused"));

        let err = workflow.copy_poem().await.unwrap_err();

        assert!(matches!(err, WorkflowError::NoPoem));
        assert!(copied.lock().unwrap().is_empty());

        let notices = notices.lock().unwrap();
        assert_eq!(notices[0].0, "No poem to copy");
        assert_eq!(notices[0].2, Severity::Destructive);
    }

    #[tokio::test]
    async fn copy_sends_poem_to_clipboard() {
        let (workflow, copied, _, notices) = workflow_with(MockGenerator::ok("a poem"));

        workflow.select_photo(photo(&[1]));
        workflow.generate().await.unwrap();
        workflow.copy_poem().await.unwrap();

        assert_eq!(copied.lock().unwrap().as_slice(), ["a poem"]);
        assert!(notices
            .lock()
            .unwrap()
            .iter()
            .any(|(title, _, _)| title == "Poem copied to clipboard"));
    }

    #[tokio::test]
    async fn save_without_poem_raises_no_poem() {
        let (workflow, _, exported, notices) = workflow_with(MockGenerator::ok("unused"));

        let err = workflow.save_poem().await.unwrap_err();

        assert!(matches!(err, WorkflowError::NoPoem));
        assert!(exported.lock().unwrap().is_empty());
        assert_eq!(notices.lock().unwrap()[0].0, "No poem to download");
    }

    #[tokio::test]
    async fn save_exports_poem_text() {
        let (workflow, _, exported, _) = workflow_with(MockGenerator::ok("a poem"));

        workflow.select_photo(photo(&[1]));
        workflow.generate().await.unwrap();
        let path = workflow.save_poem().await.unwrap();

        assert_eq!(exported.lock().unwrap().as_slice(), ["a poem"]);
        assert_eq!(path, PathBuf::from("/downloads/poem.txt"));
    }

    #[tokio::test]
    async fn copy_and_save_do_not_mutate_session() {
        let (workflow, _, _, _) = workflow_with(MockGenerator::ok("a poem"));

        workflow.select_photo(photo(&[1, 2]));
        workflow.generate().await.unwrap();
        let photo_before = workflow.photo();
        workflow.copy_poem().await.unwrap();
        workflow.save_poem().await.unwrap();

        assert_eq!(workflow.photo(), photo_before);
        assert_eq!(workflow.poem(), Some("a poem".to_string()));
    }
}
