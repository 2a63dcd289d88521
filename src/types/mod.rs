//! Core output types of the generation pipeline.
//!
//! - [`component`] - generated component unit and its metadata
//! - [`result`] - terminal result bundle and the embedded reports

pub mod component;
pub mod result;

pub use component::{
    AccessibilityReport, Complexity, ComponentMetadata, ComponentType, GeneratedComponent,
    ResponsiveReport, WcagLevel,
};
pub use result::{
    DesignSystemOutput, DocumentationOutput, GenerationResult, IssueCategory, IssueSeverity,
    PerformanceReport, PhaseTiming, QualityIssue, QualityReport, StorybookOutput, TestOutput,
};
