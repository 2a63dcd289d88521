//! figforge: a Figma-to-code generation pipeline.
//!
//! The crate ingests one Figma API response (document tree, component and
//! style maps) and produces a bundle of generated source artifacts:
//! framework components, design tokens, documentation, tests and Storybook
//! stories, plus heuristic performance and quality reports. It is an
//! in-process library: no network access, no filesystem writes, no CLI. The
//! embedding layer fetches the Figma file and decides what to do with the
//! returned text.
//!
//! Typical use:
//!
//! ```no_run
//! use figforge::{EnterpriseGenerationConfig, GenerationOrchestrator};
//! # async fn run(file: figforge::FigmaApiResponse) -> figforge::Result<()> {
//! let config = EnterpriseGenerationConfig::default();
//! let mut orchestrator = GenerationOrchestrator::new(config)?;
//! let result = orchestrator.generate(&file).await;
//! println!("{} components", result.components.len());
//! # Ok(())
//! # }
//! ```
//!
//! Module map, leaves first:
//!
//! - [`figma`] - the typed Figma document model
//! - [`tokens`] - design token extraction
//! - [`analyzer`] - candidate counting and cost estimation
//! - [`css`] - CSS architecture rendering (BEM, SMACSS, ITCSS, CUBE)
//! - [`generators`] - per-framework emission strategies
//! - [`optimizer`] - dedup, tree-shaking, minification, bundle budgeting
//! - [`library`] - taxonomy, base-component extraction, variants
//! - [`quality`] - heuristic quality scoring
//! - [`docs`], [`testgen`], [`storybook`] - derivative text artifacts
//! - [`orchestrator`] - the sequential phase state machine

pub mod analyzer;
pub mod config;
pub mod css;
pub mod docs;
pub mod error;
pub mod figma;
pub mod generators;
pub mod library;
pub mod optimizer;
pub mod orchestrator;
pub mod quality;
pub mod storybook;
pub mod testgen;
pub mod tokens;
pub mod types;

pub use config::{
    ComponentArchitecture, CssMethodology, EnterpriseGenerationConfig, FeatureToggles, Framework,
    OptimizationConfig, ResponsiveStrategy, StylingSystem,
};
pub use error::{ErrorCategory, FigforgeError, Result};
pub use figma::{FigmaApiResponse, FigmaNode, NodeType};
pub use orchestrator::{GenerationOrchestrator, GenerationPhase};
pub use tokens::{DesignToken, DesignTokens};
pub use types::{GeneratedComponent, GenerationResult, QualityReport};
