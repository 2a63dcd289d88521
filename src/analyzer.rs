//! Component analysis: counts generation candidates and estimates cost.

use serde::{Deserialize, Serialize};

use crate::error::{FigforgeError, Result};
use crate::figma::{FigmaApiResponse, FigmaNode};
use crate::tokens::{self, DesignTokens};
use crate::types::Complexity;

/// Outcome of the analysis phase.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub component_count: usize,
    pub complexity: Complexity,
    pub design_tokens: DesignTokens,
    /// Scheduling estimate only, never a deadline:
    /// `componentCount x 100ms x complexity multiplier`.
    pub estimated_time_ms: u64,
}

/// Analyze a Figma file: count component candidates, classify overall
/// complexity and extract the design token set.
///
/// A missing document tree is an input error; the pipeline never traverses
/// an absent document.
pub fn analyze(file: &FigmaApiResponse) -> Result<AnalysisResult> {
    let document = file.document.as_ref().ok_or_else(|| {
        FigforgeError::input("Figma response is missing the document tree")
    })?;

    let candidates = collect_candidates(document);
    let component_count = candidates.len();
    let complexity = classify_complexity(component_count);
    let estimated_time_ms = component_count as u64 * 100 * complexity.time_multiplier();

    Ok(AnalysisResult {
        component_count,
        complexity,
        design_tokens: tokens::extract(file),
        estimated_time_ms,
    })
}

/// Depth-first collection of component candidates (COMPONENT and FRAME
/// nodes) in document order.
pub fn collect_candidates(document: &FigmaNode) -> Vec<&FigmaNode> {
    let mut candidates = Vec::new();
    document.walk(&mut |node| {
        if node.is_component_candidate() {
            candidates.push(node);
        }
    });
    candidates
}

/// Complexity is a pure function of candidate count. A size heuristic, not a
/// visual metric: fewer than 50 candidates is simple, fewer than 200 medium,
/// anything larger complex.
fn classify_complexity(candidate_count: usize) -> Complexity {
    if candidate_count < 50 {
        Complexity::Simple
    } else if candidate_count < 200 {
        Complexity::Medium
    } else {
        Complexity::Complex
    }
}
