//! Run Debate use case
//!
//! Orchestrates the full debate flow: validate the request, run rounds with
//! parallel fan-out, check for consensus, synthesize a final answer.

use crate::config::debate_params::{
    DebateParams, MAX_CONSENSUS_ROUNDS, MAX_FIXED_ROUNDS, MIN_ROUNDS,
};
use crate::ports::model_gateway::{GatewayError, ModelGateway};
use crate::ports::progress::{NoProgress, ProgressNotifier};
use council_domain::{
    ConsensusDetector, ConsensusVerdict, DebateMode, DebateResult, DomainError, ModelDescriptor,
    ModelRegistry, ModelResponse, PromptTemplate, Question, Recommendation, Round,
    RoundPromptBuilder, RoundKind, TextualConsensus, Transcript, fallback_synthesis,
};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

/// Request validation errors.
///
/// All of these are raised before the first backend call; once rounds begin,
/// failures degrade into errored responses instead of surfacing here.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RunDebateError {
    #[error("Question cannot be empty")]
    EmptyQuestion,

    #[error("Unknown model: {0}")]
    UnknownModel(String),

    #[error("No models available for the debate")]
    NoModelsAvailable,

    #[error("Round count {got} out of range ({min}-{max})")]
    RoundsOutOfRange { got: usize, min: usize, max: usize },

    #[error("{name} must be in (0, 1], got {got}")]
    ThresholdOutOfRange { name: &'static str, got: f64 },

    #[error("Per-call timeout must be positive")]
    ZeroTimeout,
}

impl From<DomainError> for RunDebateError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::UnknownModel(id) => RunDebateError::UnknownModel(id),
            DomainError::NoModelsAvailable => RunDebateError::NoModelsAvailable,
            DomainError::InvalidQuestion(_) => RunDebateError::EmptyQuestion,
        }
    }
}

/// Input for the RunDebate use case
#[derive(Debug, Clone)]
pub struct RunDebateInput {
    /// The question to debate (validated non-empty at execution)
    pub question: String,
    /// Participating model ids; empty means every registered model
    pub models: Vec<String>,
    /// Fixed-round or consensus-seeking
    pub mode: DebateMode,
    /// Thresholds and timeout
    pub params: DebateParams,
    /// Model that writes the final synthesis; defaults to the first participant
    pub synthesizer: Option<String>,
}

impl RunDebateInput {
    pub fn new(question: impl Into<String>, mode: DebateMode) -> Self {
        Self {
            question: question.into(),
            models: Vec::new(),
            mode,
            params: DebateParams::default(),
            synthesizer: None,
        }
    }

    pub fn with_models(mut self, models: Vec<String>) -> Self {
        self.models = models;
        self
    }

    pub fn with_params(mut self, params: DebateParams) -> Self {
        self.params = params;
        self
    }

    pub fn with_synthesizer(mut self, model: impl Into<String>) -> Self {
        self.synthesizer = Some(model.into());
        self
    }
}

/// Use case for running a debate
///
/// Owns the read-only registry and the gateway; each `execute` call is an
/// independent single-tenant invocation with its own transcript.
pub struct RunDebateUseCase<G: ModelGateway + 'static> {
    registry: ModelRegistry,
    gateway: Arc<G>,
    detector: Arc<dyn ConsensusDetector>,
}

impl<G: ModelGateway + 'static> RunDebateUseCase<G> {
    pub fn new(registry: ModelRegistry, gateway: Arc<G>) -> Self {
        Self {
            registry,
            gateway,
            detector: Arc::new(TextualConsensus::new()),
        }
    }

    /// Swap the consensus strategy
    pub fn with_detector(mut self, detector: Arc<dyn ConsensusDetector>) -> Self {
        self.detector = detector;
        self
    }

    /// Side channel: classify a question and suggest models without debating
    pub fn recommend_models(&self, question: &str) -> Recommendation {
        self.registry.recommend(question)
    }

    /// The registry this use case resolves participants from
    pub fn registry(&self) -> &ModelRegistry {
        &self.registry
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&self, input: RunDebateInput) -> Result<DebateResult, RunDebateError> {
        self.execute_with_progress(input, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        input: RunDebateInput,
        progress: &dyn ProgressNotifier,
    ) -> Result<DebateResult, RunDebateError> {
        let question =
            Question::try_new(input.question.clone()).ok_or(RunDebateError::EmptyQuestion)?;
        Self::validate_mode(&input.mode)?;
        Self::validate_params(&input.params)?;
        let participants = self.registry.resolve(&input.models)?;
        let synthesizer = self.pick_synthesizer(&input, &participants)?;

        info!(
            "Starting debate: mode={}, {} participants, synthesizer={}",
            input.mode,
            participants.len(),
            synthesizer
        );

        let mut transcript = Transcript::new();
        let mut verdict: Option<ConsensusVerdict> = None;

        for number in 1..=input.mode.round_cap() {
            let kind = input.mode.round_kind(number);
            let round = self
                .run_round(
                    &question,
                    &participants,
                    transcript.last_round(),
                    number,
                    kind,
                    &input.params,
                    progress,
                )
                .await;

            let round_verdict = if input.mode.checks_consensus_after(number) {
                Some(self.detector.evaluate(
                    &round,
                    input.params.similarity_threshold,
                    input.params.min_agreement_ratio,
                ))
            } else {
                None
            };

            progress.on_round_complete(number, round_verdict.as_ref());
            transcript.push(round);

            if let Some(v) = round_verdict {
                verdict = Some(v);
                if v.reached {
                    info!(
                        "Consensus reached in round {} (agreement ratio {:.2})",
                        number, v.agreement_ratio
                    );
                    break;
                }
                debug!(
                    "No consensus after round {} (agreement ratio {:.2})",
                    number, v.agreement_ratio
                );
            }
        }

        // Round cap is validated >= 1, so the loop always produced a round
        let final_round = transcript
            .last_round()
            .expect("debate executed at least one round");
        let final_answer = self
            .synthesize(&question, final_round, &synthesizer, &input.params, progress)
            .await;

        Ok(DebateResult::new(
            question.content(),
            transcript.clone(),
            final_answer,
            verdict,
        ))
    }

    fn validate_mode(mode: &DebateMode) -> Result<(), RunDebateError> {
        let (got, max) = match mode {
            DebateMode::FixedRounds(rounds) => (*rounds, MAX_FIXED_ROUNDS),
            DebateMode::ConsensusSeeking { max_rounds } => (*max_rounds, MAX_CONSENSUS_ROUNDS),
        };
        if got < MIN_ROUNDS || got > max {
            return Err(RunDebateError::RoundsOutOfRange {
                got,
                min: MIN_ROUNDS,
                max,
            });
        }
        Ok(())
    }

    fn validate_params(params: &DebateParams) -> Result<(), RunDebateError> {
        for (name, value) in [
            ("similarity_threshold", params.similarity_threshold),
            ("min_agreement_ratio", params.min_agreement_ratio),
        ] {
            if !(value > 0.0 && value <= 1.0) {
                return Err(RunDebateError::ThresholdOutOfRange { name, got: value });
            }
        }
        if params.per_call_timeout.is_zero() {
            return Err(RunDebateError::ZeroTimeout);
        }
        Ok(())
    }

    /// Synthesizer priority: explicit override, else the first participant
    fn pick_synthesizer(
        &self,
        input: &RunDebateInput,
        participants: &[ModelDescriptor],
    ) -> Result<String, RunDebateError> {
        if let Some(id) = &input.synthesizer {
            if self.registry.get(id).is_none() {
                return Err(RunDebateError::UnknownModel(id.clone()));
            }
            return Ok(id.clone());
        }
        Ok(participants[0].id().to_string())
    }

    /// Run one round: fan all model calls out in parallel and collect every
    /// response (success or error) into participant order.
    #[allow(clippy::too_many_arguments)]
    async fn run_round(
        &self,
        question: &Question,
        participants: &[ModelDescriptor],
        prior: Option<&Round>,
        number: usize,
        kind: RoundKind,
        params: &DebateParams,
        progress: &dyn ProgressNotifier,
    ) -> Round {
        info!("Round {} ({})", number, kind);
        progress.on_round_start(number, kind, participants.len());

        let prompts = RoundPromptBuilder::build(question, participants, prior, kind);

        let mut join_set = JoinSet::new();
        for (index, (model, prompt)) in prompts.into_iter().enumerate() {
            let gateway = Arc::clone(&self.gateway);
            let timeout = params.per_call_timeout;

            join_set.spawn(async move {
                let response = match Self::call_model(&gateway, &model, &prompt, timeout).await {
                    Ok(text) => {
                        debug!("{} responded in round {} ({} chars)", model, number, text.len());
                        ModelResponse::success(model, text)
                    }
                    Err(e) => {
                        warn!("{} failed in round {}: {}", model, number, e);
                        ModelResponse::failure(model, e.to_string())
                    }
                };
                (index, response)
            });
        }

        // Each task writes into its own slot so response order follows the
        // participant order, not completion order.
        let mut slots: Vec<Option<ModelResponse>> = vec![None; participants.len()];
        while let Some(joined) = join_set.join_next().await {
            match joined {
                Ok((index, response)) => {
                    progress.on_model_complete(number, &response.model, response.is_success());
                    slots[index] = Some(response);
                }
                Err(e) => {
                    warn!("Task join error: {}", e);
                }
            }
        }

        let responses = slots
            .into_iter()
            .enumerate()
            .map(|(index, slot)| {
                slot.unwrap_or_else(|| {
                    ModelResponse::failure(participants[index].id(), "task aborted")
                })
            })
            .collect();

        Round::new(number, kind, responses)
    }

    /// Produce the final answer, never failing: a synthesizer error or an
    /// all-failed final round falls back to deterministic concatenation.
    async fn synthesize(
        &self,
        question: &Question,
        final_round: &Round,
        synthesizer: &str,
        params: &DebateParams,
        progress: &dyn ProgressNotifier,
    ) -> String {
        progress.on_synthesis_start(synthesizer);

        if final_round.all_failed() {
            warn!("Every model failed in the final round; using fallback synthesis");
            progress.on_synthesis_complete(true);
            return fallback_synthesis(final_round);
        }

        info!("Synthesizing final answer via {}", synthesizer);
        let prompt = PromptTemplate::synthesis_prompt(question, final_round);
        match Self::call_model(&self.gateway, synthesizer, &prompt, params.per_call_timeout).await {
            Ok(text) if !text.trim().is_empty() => {
                progress.on_synthesis_complete(false);
                text
            }
            Ok(_) => {
                warn!("Synthesizer {} returned empty text; using fallback", synthesizer);
                progress.on_synthesis_complete(true);
                fallback_synthesis(final_round)
            }
            Err(e) => {
                warn!("Synthesizer {} failed ({}); using fallback", synthesizer, e);
                progress.on_synthesis_complete(true);
                fallback_synthesis(final_round)
            }
        }
    }

    /// Call one model, bounding the wait even if the adapter ignores the
    /// timeout it was handed.
    async fn call_model(
        gateway: &G,
        model: &str,
        prompt: &str,
        timeout: Duration,
    ) -> Result<String, GatewayError> {
        match tokio::time::timeout(timeout, gateway.generate(model, prompt, timeout)).await {
            Ok(result) => result,
            Err(_) => Err(GatewayError::Timeout),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use council_domain::{BackendKind, QuestionDomain};
    use std::collections::{HashMap, VecDeque};
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    // ==================== Test Mocks ====================

    /// Gateway that replays scripted responses per model, in call order.
    struct ScriptedGateway {
        scripts: Mutex<HashMap<String, VecDeque<Result<String, GatewayError>>>>,
        delays: HashMap<String, Duration>,
        calls: AtomicUsize,
    }

    impl ScriptedGateway {
        fn new() -> Self {
            Self {
                scripts: Mutex::new(HashMap::new()),
                delays: HashMap::new(),
                calls: AtomicUsize::new(0),
            }
        }

        fn script(
            self,
            model: &str,
            responses: Vec<Result<String, GatewayError>>,
        ) -> Self {
            self.scripts
                .lock()
                .unwrap()
                .insert(model.to_string(), VecDeque::from(responses));
            self
        }

        fn with_delay(mut self, model: &str, delay: Duration) -> Self {
            self.delays.insert(model.to_string(), delay);
            self
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ModelGateway for ScriptedGateway {
        async fn generate(
            &self,
            model: &str,
            _prompt: &str,
            _timeout: Duration,
        ) -> Result<String, GatewayError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if let Some(delay) = self.delays.get(model) {
                tokio::time::sleep(*delay).await;
            }
            self.scripts
                .lock()
                .unwrap()
                .get_mut(model)
                .and_then(|queue| queue.pop_front())
                .unwrap_or_else(|| Err(GatewayError::ModelNotAvailable(model.to_string())))
        }
    }

    fn registry() -> ModelRegistry {
        ModelRegistry::new(vec![
            ModelDescriptor::new("m1", "Model One", BackendKind::Remote)
                .with_domains(vec![QuestionDomain::Code, QuestionDomain::General]),
            ModelDescriptor::new("m2", "Model Two", BackendKind::Local)
                .with_domains(vec![QuestionDomain::General]),
        ])
    }

    fn use_case(gateway: ScriptedGateway) -> RunDebateUseCase<ScriptedGateway> {
        RunDebateUseCase::new(registry(), Arc::new(gateway))
    }

    fn ok(text: &str) -> Result<String, GatewayError> {
        Ok(text.to_string())
    }

    // ==================== Validation ====================

    #[tokio::test]
    async fn test_empty_question_is_rejected_before_any_call() {
        let uc = use_case(ScriptedGateway::new());
        let err = uc
            .execute(RunDebateInput::new("   ", DebateMode::FixedRounds(1)))
            .await
            .unwrap_err();
        assert_eq!(err, RunDebateError::EmptyQuestion);
        assert_eq!(uc.gateway.call_count(), 0);
    }

    #[tokio::test]
    async fn test_unknown_model_is_rejected_before_any_call() {
        let uc = use_case(ScriptedGateway::new());
        let err = uc
            .execute(
                RunDebateInput::new("What is 2+2?", DebateMode::FixedRounds(1))
                    .with_models(vec!["bad-id".to_string()]),
            )
            .await
            .unwrap_err();
        assert_eq!(err, RunDebateError::UnknownModel("bad-id".to_string()));
        assert_eq!(uc.gateway.call_count(), 0);
    }

    #[tokio::test]
    async fn test_unknown_synthesizer_is_rejected() {
        let uc = use_case(ScriptedGateway::new());
        let err = uc
            .execute(
                RunDebateInput::new("What is 2+2?", DebateMode::FixedRounds(1))
                    .with_synthesizer("bad-id"),
            )
            .await
            .unwrap_err();
        assert_eq!(err, RunDebateError::UnknownModel("bad-id".to_string()));
        assert_eq!(uc.gateway.call_count(), 0);
    }

    #[tokio::test]
    async fn test_out_of_range_rounds_are_rejected() {
        let uc = use_case(ScriptedGateway::new());

        let err = uc
            .execute(RunDebateInput::new("q", DebateMode::FixedRounds(0)))
            .await
            .unwrap_err();
        assert!(matches!(err, RunDebateError::RoundsOutOfRange { got: 0, .. }));

        let err = uc
            .execute(RunDebateInput::new(
                "q",
                DebateMode::ConsensusSeeking { max_rounds: 21 },
            ))
            .await
            .unwrap_err();
        assert!(matches!(err, RunDebateError::RoundsOutOfRange { got: 21, .. }));
    }

    #[tokio::test]
    async fn test_out_of_range_threshold_is_rejected() {
        let uc = use_case(ScriptedGateway::new());
        let input = RunDebateInput::new("q", DebateMode::FixedRounds(1))
            .with_params(DebateParams::default().with_similarity_threshold(1.5));
        let err = uc.execute(input).await.unwrap_err();
        assert!(matches!(
            err,
            RunDebateError::ThresholdOutOfRange {
                name: "similarity_threshold",
                ..
            }
        ));
    }

    // ==================== Fixed-round mode ====================

    #[tokio::test]
    async fn test_single_round_debate() {
        // Scenario: two models, one fixed round
        let gateway = ScriptedGateway::new()
            .script("m1", vec![ok("The answer is 4."), ok("Synthesis: it is 4.")])
            .script("m2", vec![ok("Four.")]);
        let uc = use_case(gateway);

        let result = uc
            .execute(RunDebateInput::new(
                "What is 2+2?",
                DebateMode::FixedRounds(1),
            ))
            .await
            .unwrap();

        assert_eq!(result.rounds_executed(), 1);
        let round = &result.debate_history.rounds()[0];
        assert_eq!(round.kind, RoundKind::Initial);
        assert_eq!(round.responses.len(), 2);
        assert_eq!(round.responses[0].model, "m1");
        assert_eq!(round.responses[1].model, "m2");
        assert_eq!(result.final_answer, "Synthesis: it is 4.");
        assert!(result.consensus.is_none());
    }

    #[tokio::test]
    async fn test_fixed_mode_runs_exactly_the_requested_rounds() {
        let gateway = ScriptedGateway::new()
            .script(
                "m1",
                vec![ok("initial"), ok("refined"), ok("refined again"), ok("final")],
            )
            .script("m2", vec![ok("initial"), ok("refined"), ok("refined again")]);
        let uc = use_case(gateway);

        let result = uc
            .execute(RunDebateInput::new("q", DebateMode::FixedRounds(3)))
            .await
            .unwrap();

        assert_eq!(result.rounds_executed(), 3);
        let kinds: Vec<_> = result
            .debate_history
            .rounds()
            .iter()
            .map(|r| r.kind)
            .collect();
        assert_eq!(
            kinds,
            vec![RoundKind::Initial, RoundKind::Refine, RoundKind::Refine]
        );
        assert!(result.consensus.is_none());
    }

    #[tokio::test]
    async fn test_per_model_errors_do_not_shorten_the_debate() {
        // m2 fails every round; history still holds its errored responses
        let gateway = ScriptedGateway::new()
            .script("m1", vec![ok("a"), ok("b"), ok("final answer")])
            .script(
                "m2",
                vec![
                    Err(GatewayError::NotConfigured("openai".to_string())),
                    Err(GatewayError::Transport("connection refused".to_string())),
                ],
            );
        let uc = use_case(gateway);

        let result = uc
            .execute(RunDebateInput::new("q", DebateMode::FixedRounds(2)))
            .await
            .unwrap();

        assert_eq!(result.rounds_executed(), 2);
        for round in result.debate_history.rounds() {
            assert_eq!(round.responses.len(), 2);
            assert!(round.responses[0].is_success());
            assert!(!round.responses[1].is_success());
        }
        assert_eq!(result.final_answer, "final answer");
    }

    #[tokio::test]
    async fn test_slow_model_times_out_into_error_response() {
        let gateway = ScriptedGateway::new()
            .script("m1", vec![ok("fast"), ok("final")])
            .script("m2", vec![ok("never seen")])
            .with_delay("m2", Duration::from_secs(5));
        let uc = use_case(gateway);

        let input = RunDebateInput::new("q", DebateMode::FixedRounds(1))
            .with_params(DebateParams::default().with_per_call_timeout(Duration::from_millis(50)));
        let result = uc.execute(input).await.unwrap();

        let round = &result.debate_history.rounds()[0];
        assert!(round.responses[0].is_success());
        let slow = &round.responses[1];
        assert!(!slow.is_success());
        assert_eq!(slow.error.as_deref(), Some("Request timed out"));
    }

    // ==================== Consensus-seeking mode ====================

    #[tokio::test]
    async fn test_consensus_stops_early_on_agreement() {
        // Scenario: identical responses from round 2 onward
        let gateway = ScriptedGateway::new()
            .script(
                "m1",
                vec![ok("It is four."), ok("The answer is 4."), ok("final")],
            )
            .script("m2", vec![ok("Probably 4?"), ok("The answer is 4.")]);
        let uc = use_case(gateway);

        let result = uc
            .execute(RunDebateInput::new(
                "What is 2+2?",
                DebateMode::ConsensusSeeking { max_rounds: 3 },
            ))
            .await
            .unwrap();

        assert_eq!(result.rounds_executed(), 2);
        let verdict = result.consensus.unwrap();
        assert!(verdict.reached);
        assert_eq!(verdict.agreement_ratio, 1.0);
        assert_eq!(verdict.round, 2);
        assert_eq!(
            result.debate_history.rounds()[1].kind,
            RoundKind::ConsensusCheck
        );
    }

    #[tokio::test]
    async fn test_consensus_runs_to_cap_without_agreement() {
        let gateway = ScriptedGateway::new()
            .script(
                "m1",
                vec![
                    ok("Completely blue."),
                    ok("Still completely blue."),
                    ok("Remains blue forever."),
                    ok("final"),
                ],
            )
            .script(
                "m2",
                vec![
                    ok("Obviously red."),
                    ok("Very much red."),
                    ok("Red, always red."),
                ],
            );
        let uc = use_case(gateway);

        let result = uc
            .execute(RunDebateInput::new(
                "Best color?",
                DebateMode::ConsensusSeeking { max_rounds: 3 },
            ))
            .await
            .unwrap();

        assert_eq!(result.rounds_executed(), 3);
        let verdict = result.consensus.unwrap();
        assert!(!verdict.reached);
        assert_eq!(verdict.round, 3);
    }

    /// Detector that declares agreement regardless of the texts.
    struct AlwaysAgree;

    impl ConsensusDetector for AlwaysAgree {
        fn evaluate(
            &self,
            round: &Round,
            _threshold: f64,
            _min_agreement_ratio: f64,
        ) -> ConsensusVerdict {
            ConsensusVerdict {
                reached: true,
                agreement_ratio: 1.0,
                round: round.number,
            }
        }
    }

    #[tokio::test]
    async fn test_injected_detector_replaces_the_lexical_one() {
        // The texts never converge lexically; the injected detector stops the
        // debate at the first checked round anyway
        let gateway = ScriptedGateway::new()
            .script("m1", vec![ok("Entirely blue."), ok("Deep navy."), ok("final")])
            .script("m2", vec![ok("Obviously red."), ok("Crimson.")]);
        let uc = use_case(gateway).with_detector(Arc::new(AlwaysAgree));

        let result = uc
            .execute(RunDebateInput::new(
                "Best color?",
                DebateMode::ConsensusSeeking { max_rounds: 5 },
            ))
            .await
            .unwrap();

        assert_eq!(result.rounds_executed(), 2);
        assert!(result.consensus.unwrap().reached);
    }

    #[tokio::test]
    async fn test_single_valid_response_cannot_reach_consensus() {
        // m2 errors from round 1; only one valid response per round
        let gateway = ScriptedGateway::new()
            .script(
                "m1",
                vec![ok("answer"), ok("answer"), ok("answer"), ok("final")],
            )
            .script("m2", vec![]);
        let uc = use_case(gateway);

        let result = uc
            .execute(RunDebateInput::new(
                "q",
                DebateMode::ConsensusSeeking { max_rounds: 3 },
            ))
            .await
            .unwrap();

        assert_eq!(result.rounds_executed(), 3);
        let verdict = result.consensus.unwrap();
        assert!(!verdict.reached);
        assert_eq!(verdict.agreement_ratio, 0.0);
    }

    // ==================== Synthesis ====================

    #[tokio::test]
    async fn test_synthesizer_override_is_used() {
        let gateway = ScriptedGateway::new()
            .script("m1", vec![ok("answer one")])
            .script("m2", vec![ok("answer two"), ok("synthesis by m2")]);
        let uc = use_case(gateway);

        let result = uc
            .execute(
                RunDebateInput::new("q", DebateMode::FixedRounds(1)).with_synthesizer("m2"),
            )
            .await
            .unwrap();

        assert_eq!(result.final_answer, "synthesis by m2");
    }

    #[tokio::test]
    async fn test_failed_synthesis_falls_back_to_concatenation() {
        // m1's second scripted call (the synthesis) errors
        let gateway = ScriptedGateway::new()
            .script(
                "m1",
                vec![ok("The answer is 4."), Err(GatewayError::Timeout)],
            )
            .script("m2", vec![ok("Four, clearly.")]);
        let uc = use_case(gateway);

        let result = uc
            .execute(RunDebateInput::new("q", DebateMode::FixedRounds(1)))
            .await
            .unwrap();

        assert!(!result.final_answer.is_empty());
        assert!(result.final_answer.contains("M1:\nThe answer is 4."));
        assert!(result.final_answer.contains("M2:\nFour, clearly."));
    }

    #[tokio::test]
    async fn test_all_models_failing_still_returns_a_result() {
        let gateway = ScriptedGateway::new().script("m1", vec![]).script("m2", vec![]);
        let uc = use_case(gateway);

        let result = uc
            .execute(RunDebateInput::new("q", DebateMode::FixedRounds(1)))
            .await
            .unwrap();

        assert_eq!(result.rounds_executed(), 1);
        assert!(result.debate_history.rounds()[0].all_failed());
        assert!(result.final_answer.starts_with("All models failed to respond"));
        // Two round calls, no synthesis call: the fallback is direct
        assert_eq!(uc.gateway.call_count(), 2);
    }

    // ==================== Side channel ====================

    #[tokio::test]
    async fn test_recommend_models_delegates_to_registry() {
        let uc = use_case(ScriptedGateway::new());
        let recommendation = uc.recommend_models("How do I debug this function?");
        assert_eq!(recommendation.domain, QuestionDomain::Code);
        assert_eq!(recommendation.models.len(), 1);
        assert_eq!(recommendation.models[0].id(), "m1");
    }
}
