//! Generation orchestration: the sequential phase state machine.
//!
//! Phases run strictly one after another, each consuming the prior phase's
//! output. Every phase is individually wrapped: a failure records the phase
//! name and elapsed time, moves the run to `Failed`, and yields a well-typed
//! fallback result instead of propagating the error to the caller. An
//! orchestrator instance is constructed fresh per run and owns no state
//! shared with other runs; cancellation, if a caller wants it, belongs
//! between phases, never inside one.

use std::fmt;
use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::analyzer;
use crate::config::EnterpriseGenerationConfig;
use crate::docs;
use crate::error::{FigforgeError, Result};
use crate::figma::FigmaApiResponse;
use crate::generators::create_generator;
use crate::library::LibraryManager;
use crate::optimizer::{calculate_bundle_size, Optimizer};
use crate::quality;
use crate::storybook;
use crate::testgen;
use crate::types::{
    DocumentationOutput, GenerationResult, PerformanceReport, PhaseTiming, QualityReport,
};

/// Load-time estimate: five milliseconds per eager kilobyte. Advisory only.
const LOAD_TIME_MS_PER_KB: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationPhase {
    Idle,
    Analyzing,
    Generating,
    Optimizing,
    Validating,
    Documenting,
    Testing,
    Packaging,
    Complete,
    Failed,
}

impl fmt::Display for GenerationPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GenerationPhase::Idle => "idle",
            GenerationPhase::Analyzing => "analyzing",
            GenerationPhase::Generating => "generating",
            GenerationPhase::Optimizing => "optimizing",
            GenerationPhase::Validating => "validating",
            GenerationPhase::Documenting => "documenting",
            GenerationPhase::Testing => "testing",
            GenerationPhase::Packaging => "packaging",
            GenerationPhase::Complete => "complete",
            GenerationPhase::Failed => "failed",
        };
        f.write_str(name)
    }
}

#[derive(Debug)]
pub struct GenerationOrchestrator {
    config: EnterpriseGenerationConfig,
    phase: GenerationPhase,
}

impl GenerationOrchestrator {
    /// Validate the configuration and construct a fresh orchestrator.
    /// Configuration violations surface here, before any phase runs.
    pub fn new(config: EnterpriseGenerationConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            phase: GenerationPhase::Idle,
        })
    }

    pub fn phase(&self) -> GenerationPhase {
        self.phase
    }

    pub fn config(&self) -> &EnterpriseGenerationConfig {
        &self.config
    }

    /// Run the whole pipeline over one Figma file.
    ///
    /// Always returns a well-formed result: on failure the fallback carries
    /// the error text in the README field and the suggested fix in the
    /// quality recommendations, with all scores zeroed.
    pub async fn generate(&mut self, file: &FigmaApiResponse) -> GenerationResult {
        let run_started = Instant::now();
        let mut timings = Vec::new();
        match self.run(file, &mut timings).await {
            Ok(result) => {
                self.phase = GenerationPhase::Complete;
                info!(
                    components = result.components.len(),
                    elapsed_ms = run_started.elapsed().as_millis() as u64,
                    "generation complete"
                );
                result
            }
            Err(err) => {
                self.phase = GenerationPhase::Failed;
                error!(error = %err, category = %err.category(), "generation failed");
                self.fallback_result(&err, timings)
            }
        }
    }

    async fn run(
        &mut self,
        file: &FigmaApiResponse,
        timings: &mut Vec<PhaseTiming>,
    ) -> Result<GenerationResult> {
        // Analyzing
        let started = self.enter(GenerationPhase::Analyzing);
        let analysis = analyzer::analyze(file).map_err(|e| self.wrap(started, e))?;
        info!(
            components = analysis.component_count,
            complexity = ?analysis.complexity,
            estimated_time_ms = analysis.estimated_time_ms,
            "analysis finished"
        );
        self.leave(started, timings).await;

        // Generating
        let started = self.enter(GenerationPhase::Generating);
        let document = file
            .document
            .as_ref()
            .ok_or_else(|| {
                self.wrap(
                    started,
                    FigforgeError::input("Figma response is missing the document tree"),
                )
            })?;
        let candidates = analyzer::collect_candidates(document);
        let generator = create_generator(&self.config);
        let components = generator
            .generate_components(&candidates)
            .map_err(|e| self.wrap(started, e))?;
        self.leave(started, timings).await;

        // Optimizing
        let started = self.enter(GenerationPhase::Optimizing);
        let optimizer = Optimizer::new(self.config.optimization);
        let outcome = optimizer.optimize_components(components);
        let (components, budget_metrics) = optimizer.optimize_bundle_size(outcome.components);
        info!(
            duplicates = outcome.metrics.duplicate_components,
            css_rules_removed = outcome.metrics.css_rules_removed,
            "optimization finished"
        );
        let mut optimizations_applied = outcome.metrics.passes_applied;
        optimizations_applied.extend(budget_metrics.passes_applied);
        let mut recommendations = outcome.metrics.recommendations;
        recommendations.extend(budget_metrics.recommendations);
        self.leave(started, timings).await;

        // Validating: base extraction first so quality reads final text.
        let started = self.enter(GenerationPhase::Validating);
        let library = LibraryManager::new(self.config.framework);
        let components = library.optimize_for_reusability(components);
        let quality = quality::analyze_quality(&components, &self.config);
        self.leave(started, timings).await;

        // Documenting
        let started = self.enter(GenerationPhase::Documenting);
        let documentation = if self.config.features.documentation {
            docs::generate_documentation(&components, &analysis.design_tokens, &self.config)
        } else {
            DocumentationOutput::default()
        };
        let design_system = if self.config.features.design_system {
            docs::generate_design_system(&analysis.design_tokens, &self.config)
        } else {
            Default::default()
        };
        self.leave(started, timings).await;

        // Testing
        let started = self.enter(GenerationPhase::Testing);
        let tests = testgen::generate_tests(&components, &self.config);
        self.leave(started, timings).await;

        // Packaging
        let started = self.enter(GenerationPhase::Packaging);
        let storybook = storybook::generate_stories(&components, &self.config);
        let bundle_size_kb = calculate_bundle_size(&components);
        self.leave(started, timings).await;

        Ok(GenerationResult {
            components,
            design_tokens: analysis.design_tokens,
            design_system,
            documentation,
            tests,
            storybook,
            performance: PerformanceReport {
                bundle_size_kb,
                estimated_load_time_ms: (bundle_size_kb * LOAD_TIME_MS_PER_KB) as u64,
                phase_timings: timings.clone(),
                optimizations_applied,
                recommendations,
            },
            quality,
        })
    }

    fn enter(&mut self, phase: GenerationPhase) -> Instant {
        self.phase = phase;
        info!(phase = %phase, "phase started");
        Instant::now()
    }

    /// Record the finished phase's timing and yield so embedding runtimes can
    /// interleave other work between phases.
    async fn leave(&self, started: Instant, timings: &mut Vec<PhaseTiming>) {
        timings.push(PhaseTiming {
            phase: self.phase.to_string(),
            elapsed_ms: started.elapsed().as_millis() as u64,
        });
        tokio::task::yield_now().await;
    }

    fn wrap(&self, started: Instant, err: FigforgeError) -> FigforgeError {
        match err {
            already @ FigforgeError::Phase { .. } => already,
            other => FigforgeError::phase(
                self.phase.to_string(),
                started.elapsed().as_millis() as u64,
                other.to_string(),
            ),
        }
    }

    fn fallback_result(&self, err: &FigforgeError, timings: Vec<PhaseTiming>) -> GenerationResult {
        let mut quality = QualityReport::zeroed();
        quality.recommendations.push(err.suggested_fix());
        GenerationResult {
            components: Vec::new(),
            design_tokens: Default::default(),
            design_system: Default::default(),
            documentation: DocumentationOutput {
                readme: format!(
                    "# Generation failed\n\nError category: {}\n\n{}\n",
                    err.category(),
                    err
                ),
                component_docs: Default::default(),
            },
            tests: Default::default(),
            storybook: Default::default(),
            performance: PerformanceReport {
                bundle_size_kb: 0.0,
                estimated_load_time_ms: 0,
                phase_timings: timings,
                optimizations_applied: Vec::new(),
                recommendations: Vec::new(),
            },
            quality,
        }
    }
}
