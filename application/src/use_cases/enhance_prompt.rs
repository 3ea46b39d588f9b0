//! Enhance Prompt use case.
//!
//! Runs one enhancement pass over a user prompt:
//!
//! ```text
//! Idle ──load──▶ Loaded ──analyze──▶ Analyzed ──ask──▶ Answered ──refine──▶ Refined ──▶ Done
//! ```
//!
//! Every failure is fatal except a failed read for a single clarifying
//! question, which is logged and skipped.

use crate::ports::answer_source::AnswerSource;
use crate::ports::guideline_repository::{GuidelineError, GuidelineRepository};
use crate::ports::llm_gateway::{AnalyzeRequest, GatewayError, LlmGateway, RefineRequest};
use crate::ports::progress::{NoProgress, ProgressNotifier};
use std::sync::Arc;
use thiserror::Error;
use tokinfo_domain::{
    AnalysisOutcome, AnswerSet, EnhancedPrompt, GuidelineSet, RunPhase, Stage, Technique,
    preview,
};
use tracing::{debug, info, warn};

/// Error classes a run can end with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Guideline file missing, unreadable, malformed or incomplete
    Config,
    /// Credential missing or rejected
    Auth,
    /// Transport failure or unusable model response
    Inference,
    /// Chosen technique not in the catalog
    Resolution,
    /// Prompt input or output failure
    Io,
}

/// Errors that can occur during an enhancement run.
#[derive(Error, Debug)]
pub enum EnhancePromptError {
    #[error("Failed to load guidelines")]
    Guidelines(#[from] GuidelineError),

    #[error("Stage 1 (analysis) failed")]
    Analysis(#[source] GatewayError),

    #[error("Chosen technique '{name}' not found in guidelines (available: {})", available.join(", "))]
    UnknownTechnique { name: String, available: Vec<String> },

    #[error("Stage 2 (refinement) failed")]
    Refinement(#[source] GatewayError),
}

impl EnhancePromptError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            EnhancePromptError::Guidelines(_) => ErrorKind::Config,
            EnhancePromptError::Analysis(e) | EnhancePromptError::Refinement(e) => {
                if e.is_auth() {
                    ErrorKind::Auth
                } else {
                    ErrorKind::Inference
                }
            }
            EnhancePromptError::UnknownTechnique { .. } => ErrorKind::Resolution,
        }
    }
}

/// Input for the [`EnhancePromptUseCase`].
#[derive(Debug, Clone)]
pub struct EnhancePromptInput {
    /// The resolved user prompt text.
    pub prompt: String,
}

impl EnhancePromptInput {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
        }
    }
}

/// Everything a finished run produced.
#[derive(Debug, Clone)]
pub struct EnhancePromptOutput {
    /// Technique resolved from the analysis outcome
    pub technique: Technique,
    pub outcome: AnalysisOutcome,
    /// Answers passed into the refine stage
    pub answers: AnswerSet,
    pub enhanced: EnhancedPrompt,
}

/// Use case for running a two-stage prompt enhancement.
pub struct EnhancePromptUseCase {
    gateway: Arc<dyn LlmGateway>,
    guidelines: Arc<dyn GuidelineRepository>,
    answers: Arc<dyn AnswerSource>,
    progress: Arc<dyn ProgressNotifier>,
}

impl EnhancePromptUseCase {
    pub fn new(
        gateway: Arc<dyn LlmGateway>,
        guidelines: Arc<dyn GuidelineRepository>,
        answers: Arc<dyn AnswerSource>,
    ) -> Self {
        Self {
            gateway,
            guidelines,
            answers,
            progress: Arc::new(NoProgress),
        }
    }

    /// Create with a progress notifier.
    pub fn with_progress(mut self, progress: Arc<dyn ProgressNotifier>) -> Self {
        self.progress = progress;
        self
    }

    /// Execute the full run.
    pub async fn execute(
        &self,
        input: EnhancePromptInput,
    ) -> Result<EnhancePromptOutput, EnhancePromptError> {
        info!("Starting enhancement: {}", preview(&input.prompt, 100));
        self.progress.on_phase(RunPhase::Idle);

        let guidelines = self.guidelines.load()?;
        debug!("Loaded {} techniques", guidelines.len());
        self.progress.on_phase(RunPhase::Loaded);

        let outcome = self.analyze(&guidelines, &input.prompt).await?;
        info!(
            technique = %outcome.chosen_technique,
            questions = outcome.clarifying_questions.len(),
            "Analysis complete"
        );
        self.progress.on_phase(RunPhase::Analyzed);

        let answers = self.collect_answers(&outcome).await;
        self.progress.on_phase(RunPhase::Answered);

        let technique = guidelines
            .lookup(&outcome.chosen_technique)
            .cloned()
            .ok_or_else(|| EnhancePromptError::UnknownTechnique {
                name: outcome.chosen_technique.clone(),
                available: guidelines
                    .technique_names()
                    .into_iter()
                    .map(String::from)
                    .collect(),
            })?;

        let enhanced = self
            .refine(&guidelines, &technique, &input.prompt, &answers)
            .await?;
        info!("Refinement complete ({} bytes)", enhanced.as_str().len());
        self.progress.on_phase(RunPhase::Refined);

        self.progress.on_phase(RunPhase::Done);

        Ok(EnhancePromptOutput {
            technique,
            outcome,
            answers,
            enhanced,
        })
    }

    async fn analyze(
        &self,
        guidelines: &GuidelineSet,
        prompt: &str,
    ) -> Result<AnalysisOutcome, EnhancePromptError> {
        let request = AnalyzeRequest {
            introduction: guidelines.introduction().to_string(),
            technique_catalog: guidelines.summarized_catalog(),
            user_prompt: prompt.to_string(),
        };

        self.progress.on_stage_start(Stage::Analyze);
        let result = self.gateway.analyze(&request).await;
        self.progress.on_stage_complete(Stage::Analyze, result.is_ok());

        result.map_err(EnhancePromptError::Analysis)
    }

    /// Ask every question in order. Never fails: unreadable answers are skipped.
    async fn collect_answers(&self, outcome: &AnalysisOutcome) -> AnswerSet {
        let mut answers = AnswerSet::new();
        if !outcome.has_questions() {
            debug!("No clarifying questions needed");
            return answers;
        }

        let total = outcome.clarifying_questions.len();
        self.progress.on_questions(total);

        for (index, question) in outcome.clarifying_questions.iter().enumerate() {
            match self.answers.answer(index, total, question).await {
                Ok(reply) => {
                    answers.insert(index, question.question.clone(), reply.trim());
                }
                Err(e) => {
                    warn!(
                        "Could not read answer for question {} ('{}'): {}. Skipping.",
                        index + 1,
                        question.question,
                        e
                    );
                }
            }
        }

        debug!("Collected {}/{} answers", answers.len(), total);
        answers
    }

    async fn refine(
        &self,
        guidelines: &GuidelineSet,
        technique: &Technique,
        prompt: &str,
        answers: &AnswerSet,
    ) -> Result<EnhancedPrompt, EnhancePromptError> {
        let request = RefineRequest {
            introduction: guidelines.introduction().to_string(),
            technique_description: technique.long_description().to_string(),
            user_prompt: prompt.to_string(),
            answers: answers.clone(),
        };

        self.progress.on_stage_start(Stage::Refine);
        let result = self.gateway.refine(&request).await;
        self.progress.on_stage_complete(Stage::Refine, result.is_ok());

        result
            .map(EnhancedPrompt::new)
            .map_err(EnhancePromptError::Refinement)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::answer_source::{AnswerError, NoAnswers, ScriptedAnswers};
    use crate::ports::guideline_repository::InMemoryGuidelines;
    use async_trait::async_trait;
    use std::path::PathBuf;
    use std::sync::Mutex;
    use tokinfo_domain::{ClarifyingQuestion, DomainError};

    // ==================== Test Mocks ====================

    struct MockGateway {
        analysis: Mutex<Option<Result<AnalysisOutcome, GatewayError>>>,
        refined: String,
        analyze_calls: Mutex<Vec<AnalyzeRequest>>,
        refine_calls: Mutex<Vec<RefineRequest>>,
    }

    impl MockGateway {
        fn new(outcome: AnalysisOutcome, refined: &str) -> Self {
            Self::with_analysis(Ok(outcome), refined)
        }

        fn with_analysis(analysis: Result<AnalysisOutcome, GatewayError>, refined: &str) -> Self {
            Self {
                analysis: Mutex::new(Some(analysis)),
                refined: refined.to_string(),
                analyze_calls: Mutex::new(Vec::new()),
                refine_calls: Mutex::new(Vec::new()),
            }
        }

        fn refine_requests(&self) -> Vec<RefineRequest> {
            self.refine_calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl LlmGateway for MockGateway {
        async fn analyze(
            &self,
            request: &AnalyzeRequest,
        ) -> Result<AnalysisOutcome, GatewayError> {
            self.analyze_calls.lock().unwrap().push(request.clone());
            self.analysis
                .lock()
                .unwrap()
                .take()
                .unwrap_or(Err(GatewayError::EmptyResponse))
        }

        async fn refine(&self, request: &RefineRequest) -> Result<String, GatewayError> {
            self.refine_calls.lock().unwrap().push(request.clone());
            Ok(self.refined.clone())
        }
    }

    struct FailingGuidelines;

    impl GuidelineRepository for FailingGuidelines {
        fn load(&self) -> Result<GuidelineSet, GuidelineError> {
            Err(GuidelineError::Invalid {
                path: PathBuf::from("guidelines.json"),
                source: DomainError::NoTechniques,
            })
        }
    }

    #[derive(Default)]
    struct RecordingProgress {
        phases: Mutex<Vec<RunPhase>>,
    }

    impl ProgressNotifier for RecordingProgress {
        fn on_phase(&self, phase: RunPhase) {
            self.phases.lock().unwrap().push(phase);
        }
        fn on_stage_start(&self, _stage: Stage) {}
        fn on_stage_complete(&self, _stage: Stage, _success: bool) {}
    }

    fn guidelines() -> Arc<InMemoryGuidelines> {
        let set = GuidelineSet::new(
            "Write prompts that are specific and structured.",
            vec![Technique::new(
                "clear_instructions",
                "State the task explicitly",
                "Spell out the task, the expected format and every constraint.",
            )],
        )
        .unwrap();
        Arc::new(InMemoryGuidelines::new(set))
    }

    fn use_case(gateway: Arc<MockGateway>, answers: Arc<dyn AnswerSource>) -> EnhancePromptUseCase {
        EnhancePromptUseCase::new(gateway, guidelines(), answers)
    }

    // ==================== Tests ====================

    #[tokio::test]
    async fn test_no_questions_passes_empty_answers() {
        let gateway = Arc::new(MockGateway::new(
            AnalysisOutcome::new("clear_instructions", vec![]),
            "Final text",
        ));
        let output = use_case(gateway.clone(), Arc::new(NoAnswers))
            .execute(EnhancePromptInput::new("Explain gravity"))
            .await
            .unwrap();

        assert_eq!(output.enhanced.as_str(), "Final text");
        let refines = gateway.refine_requests();
        assert_eq!(refines.len(), 1);
        assert!(refines[0].answers.is_empty());
        assert_eq!(refines[0].user_prompt, "Explain gravity");
        assert_eq!(
            refines[0].technique_description,
            "Spell out the task, the expected format and every constraint."
        );
    }

    #[tokio::test]
    async fn test_analyze_request_carries_catalog() {
        let gateway = Arc::new(MockGateway::new(
            AnalysisOutcome::new("clear_instructions", vec![]),
            "Final text",
        ));
        use_case(gateway.clone(), Arc::new(NoAnswers))
            .execute(EnhancePromptInput::new("Explain gravity"))
            .await
            .unwrap();

        let calls = gateway.analyze_calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(
            calls[0].technique_catalog,
            "- clear_instructions: State the task explicitly\n"
        );
        assert_eq!(
            calls[0].introduction,
            "Write prompts that are specific and structured."
        );
    }

    #[tokio::test]
    async fn test_single_question_answer_is_trimmed() {
        let gateway = Arc::new(MockGateway::new(
            AnalysisOutcome::new(
                "clear_instructions",
                vec![ClarifyingQuestion::new("Who is the audience?", "Students")],
            ),
            "Final text",
        ));
        let answers = Arc::new(ScriptedAnswers::new(["  Ten-year-olds \n"]));
        let output = use_case(gateway.clone(), answers)
            .execute(EnhancePromptInput::new("Explain gravity"))
            .await
            .unwrap();

        let refines = gateway.refine_requests();
        let passed = &refines[0].answers;
        assert_eq!(passed.len(), 1);
        let answer = passed.get(0).unwrap();
        assert_eq!(answer.question, "Who is the audience?");
        assert_eq!(answer.answer, "Ten-year-olds");
        assert_eq!(output.answers, *passed);
    }

    #[tokio::test]
    async fn test_unknown_technique_skips_refine() {
        let gateway = Arc::new(MockGateway::new(
            AnalysisOutcome::new("made_up_technique", vec![]),
            "never used",
        ));
        let result = use_case(gateway.clone(), Arc::new(NoAnswers))
            .execute(EnhancePromptInput::new("Explain gravity"))
            .await;

        match result {
            Err(err @ EnhancePromptError::UnknownTechnique { .. }) => {
                assert_eq!(err.kind(), ErrorKind::Resolution);
                assert!(err.to_string().contains("made_up_technique"));
                assert!(err.to_string().contains("clear_instructions"));
            }
            other => panic!("Expected UnknownTechnique, got {:?}", other),
        }
        assert!(gateway.refine_requests().is_empty());
    }

    #[tokio::test]
    async fn test_failed_read_skips_question() {
        let gateway = Arc::new(MockGateway::new(
            AnalysisOutcome::new(
                "clear_instructions",
                vec![
                    ClarifyingQuestion::new("Audience?", "Students"),
                    ClarifyingQuestion::new("Length?", "Short"),
                ],
            ),
            "Final text",
        ));
        let answers = Arc::new(ScriptedAnswers::from_results([
            Err(AnswerError::IoError("read failed".to_string())),
            Ok("One paragraph".to_string()),
        ]));
        let output = use_case(gateway.clone(), answers)
            .execute(EnhancePromptInput::new("Explain gravity"))
            .await
            .unwrap();

        assert_eq!(output.answers.len(), 1);
        assert!(output.answers.get(0).is_none());
        assert_eq!(output.answers.get(1).unwrap().answer, "One paragraph");
        assert_eq!(output.enhanced.as_str(), "Final text");
    }

    #[tokio::test]
    async fn test_duplicate_question_text_keeps_both_answers() {
        let gateway = Arc::new(MockGateway::new(
            AnalysisOutcome::new(
                "clear_instructions",
                vec![
                    ClarifyingQuestion::new("Any constraints?", "None"),
                    ClarifyingQuestion::new("Any constraints?", "None"),
                ],
            ),
            "Final text",
        ));
        let answers = Arc::new(ScriptedAnswers::new(["No jargon", "Under 200 words"]));
        let output = use_case(gateway, answers)
            .execute(EnhancePromptInput::new("Explain gravity"))
            .await
            .unwrap();

        assert_eq!(output.answers.len(), 2);
        assert_eq!(output.answers.get(1).unwrap().answer, "Under 200 words");
    }

    #[tokio::test]
    async fn test_analysis_error_is_fatal() {
        let gateway = Arc::new(MockGateway::with_analysis(
            Err(GatewayError::MalformedResponse {
                error: "expected value".to_string(),
                raw: "not json".to_string(),
            }),
            "never used",
        ));
        let err = use_case(gateway.clone(), Arc::new(NoAnswers))
            .execute(EnhancePromptInput::new("Explain gravity"))
            .await
            .unwrap_err();

        assert!(matches!(err, EnhancePromptError::Analysis(_)));
        assert_eq!(err.kind(), ErrorKind::Inference);
        assert!(gateway.refine_requests().is_empty());
    }

    #[tokio::test]
    async fn test_stage_error_names_cause_only_in_source_chain() {
        let gateway = Arc::new(MockGateway::with_analysis(
            Err(GatewayError::Connection("connection reset".to_string())),
            "never used",
        ));
        let err = use_case(gateway, Arc::new(NoAnswers))
            .execute(EnhancePromptInput::new("Explain gravity"))
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Stage 1 (analysis) failed");
        let cause = std::error::Error::source(&err).unwrap();
        assert!(cause.to_string().contains("connection reset"));
    }

    #[tokio::test]
    async fn test_auth_error_kind() {
        let gateway = Arc::new(MockGateway::with_analysis(
            Err(GatewayError::Authentication("API key rejected".to_string())),
            "never used",
        ));
        let err = use_case(gateway, Arc::new(NoAnswers))
            .execute(EnhancePromptInput::new("Explain gravity"))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Auth);
    }

    #[tokio::test]
    async fn test_guideline_error_stops_before_analysis() {
        let gateway = Arc::new(MockGateway::new(
            AnalysisOutcome::new("clear_instructions", vec![]),
            "Final text",
        ));
        let err = EnhancePromptUseCase::new(
            gateway.clone(),
            Arc::new(FailingGuidelines),
            Arc::new(NoAnswers),
        )
        .execute(EnhancePromptInput::new("Explain gravity"))
        .await
        .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Config);
        assert!(gateway.analyze_calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_phases_reported_in_order() {
        let gateway = Arc::new(MockGateway::new(
            AnalysisOutcome::new("clear_instructions", vec![]),
            "Final text",
        ));
        let progress = Arc::new(RecordingProgress::default());
        use_case(gateway, Arc::new(NoAnswers))
            .with_progress(progress.clone())
            .execute(EnhancePromptInput::new("Explain gravity"))
            .await
            .unwrap();

        assert_eq!(
            *progress.phases.lock().unwrap(),
            vec![
                RunPhase::Idle,
                RunPhase::Loaded,
                RunPhase::Analyzed,
                RunPhase::Answered,
                RunPhase::Refined,
                RunPhase::Done,
            ]
        );
    }

    #[tokio::test]
    async fn test_identical_runs_produce_identical_output() {
        let outcome = AnalysisOutcome::new(
            "clear_instructions",
            vec![ClarifyingQuestion::new("Audience?", "Students")],
        );

        let mut results = Vec::new();
        for _ in 0..2 {
            let gateway = Arc::new(MockGateway::new(outcome.clone(), "Final text"));
            let answers = Arc::new(ScriptedAnswers::new(["Children"]));
            let output = use_case(gateway.clone(), answers)
                .execute(EnhancePromptInput::new("Explain gravity"))
                .await
                .unwrap();
            results.push((output.enhanced, gateway.refine_requests()[0].answers.clone()));
        }

        assert_eq!(results[0], results[1]);
    }
}
