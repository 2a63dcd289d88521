//! Generation configuration.
//!
//! A single [`EnterpriseGenerationConfig`] value is handed to the orchestrator
//! at construction and is immutable for the whole run. "Updating" a config
//! means constructing a new value; nothing in the pipeline reads shared
//! mutable state. Enum-valued options are closed enums parsed with `FromStr`,
//! so an unsupported value fails with a configuration error naming it instead
//! of silently falling back.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{FigforgeError, Result};

/// Target framework for code emission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Framework {
    React,
    Vue,
    Angular,
    Svelte,
}

impl Framework {
    pub const fn all() -> [Framework; 4] {
        [
            Framework::React,
            Framework::Vue,
            Framework::Angular,
            Framework::Svelte,
        ]
    }

    /// File extension of an emitted component, TypeScript flag aside.
    pub fn component_extension(&self, typescript: bool) -> &'static str {
        match self {
            Framework::React => {
                if typescript {
                    "tsx"
                } else {
                    "jsx"
                }
            }
            Framework::Vue => "vue",
            Framework::Angular => "ts",
            Framework::Svelte => "svelte",
        }
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Framework::React => "react",
                Framework::Vue => "vue",
                Framework::Angular => "angular",
                Framework::Svelte => "svelte",
            }
        )
    }
}

impl FromStr for Framework {
    type Err = FigforgeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "react" => Ok(Framework::React),
            "vue" => Ok(Framework::Vue),
            "angular" => Ok(Framework::Angular),
            "svelte" => Ok(Framework::Svelte),
            other => Err(FigforgeError::config(format!(
                "Unknown framework: {}",
                other
            ))),
        }
    }
}

/// Styling system for emitted stylesheets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StylingSystem {
    Css,
    Scss,
    StyledComponents,
    Tailwind,
}

impl StylingSystem {
    pub fn stylesheet_extension(&self) -> &'static str {
        match self {
            StylingSystem::Scss => "scss",
            _ => "css",
        }
    }
}

impl fmt::Display for StylingSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                StylingSystem::Css => "css",
                StylingSystem::Scss => "scss",
                StylingSystem::StyledComponents => "styled-components",
                StylingSystem::Tailwind => "tailwind",
            }
        )
    }
}

impl FromStr for StylingSystem {
    type Err = FigforgeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "css" => Ok(StylingSystem::Css),
            "scss" => Ok(StylingSystem::Scss),
            "styled-components" => Ok(StylingSystem::StyledComponents),
            "tailwind" => Ok(StylingSystem::Tailwind),
            other => Err(FigforgeError::config(format!(
                "Unknown styling system: {}",
                other
            ))),
        }
    }
}

/// CSS architecture methodology used when rendering stylesheets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CssMethodology {
    Bem,
    Smacss,
    Itcss,
    Cube,
}

impl fmt::Display for CssMethodology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                CssMethodology::Bem => "bem",
                CssMethodology::Smacss => "smacss",
                CssMethodology::Itcss => "itcss",
                CssMethodology::Cube => "cube",
            }
        )
    }
}

impl FromStr for CssMethodology {
    type Err = FigforgeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "bem" => Ok(CssMethodology::Bem),
            "smacss" => Ok(CssMethodology::Smacss),
            "itcss" => Ok(CssMethodology::Itcss),
            "cube" | "cube-css" => Ok(CssMethodology::Cube),
            other => Err(FigforgeError::config(format!(
                "Unknown CSS methodology: {}",
                other
            ))),
        }
    }
}

/// Responsive output strategy. One or the other, never both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResponsiveStrategy {
    /// Two fixed breakpoints: 768px and 1024px.
    MediaQueries,
    /// Three fixed container breakpoints: 300px, 500px and 700px.
    ContainerQueries,
}

impl ResponsiveStrategy {
    pub fn breakpoints(&self) -> &'static [u32] {
        match self {
            ResponsiveStrategy::MediaQueries => &[768, 1024],
            ResponsiveStrategy::ContainerQueries => &[300, 500, 700],
        }
    }
}

impl fmt::Display for ResponsiveStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                ResponsiveStrategy::MediaQueries => "media-queries",
                ResponsiveStrategy::ContainerQueries => "container-queries",
            }
        )
    }
}

impl FromStr for ResponsiveStrategy {
    type Err = FigforgeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "media-queries" | "media" => Ok(ResponsiveStrategy::MediaQueries),
            "container-queries" | "container" => Ok(ResponsiveStrategy::ContainerQueries),
            other => Err(FigforgeError::config(format!(
                "Unknown responsive strategy: {}",
                other
            ))),
        }
    }
}

/// Component organization scheme, surfaced in the generated documentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComponentArchitecture {
    Atomic,
    FeatureSliced,
}

impl fmt::Display for ComponentArchitecture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                ComponentArchitecture::Atomic => "atomic",
                ComponentArchitecture::FeatureSliced => "feature-sliced",
            }
        )
    }
}

impl FromStr for ComponentArchitecture {
    type Err = FigforgeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "atomic" => Ok(ComponentArchitecture::Atomic),
            "feature-sliced" => Ok(ComponentArchitecture::FeatureSliced),
            other => Err(FigforgeError::config(format!(
                "Unknown component architecture: {}",
                other
            ))),
        }
    }
}

/// Feature toggles for derivative artifact generation and quality enforcement.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FeatureToggles {
    pub design_system: bool,
    pub i18n: bool,
    pub testing: bool,
    pub storybook: bool,
    pub documentation: bool,
    /// Enforcement flags: when set, the quality pass reports issues in the
    /// corresponding category.
    pub accessibility_enforcement: bool,
    pub performance_enforcement: bool,
    pub code_standards_enforcement: bool,
}

impl Default for FeatureToggles {
    fn default() -> Self {
        Self {
            design_system: true,
            i18n: false,
            testing: true,
            storybook: true,
            documentation: true,
            accessibility_enforcement: true,
            performance_enforcement: true,
            code_standards_enforcement: true,
        }
    }
}

/// Optimization pass toggles and budgets.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OptimizationConfig {
    /// Bundle budget in kilobytes. Must be greater than zero.
    pub max_bundle_size_kb: f64,
    /// Target performance score, 0-100.
    pub target_performance_score: u8,
    pub deduplicate: bool,
    pub tree_shake: bool,
    pub minify: bool,
    pub lazy_load_assets: bool,
}

impl Default for OptimizationConfig {
    fn default() -> Self {
        Self {
            max_bundle_size_kb: 500.0,
            target_performance_score: 90,
            deduplicate: true,
            tree_shake: true,
            minify: true,
            lazy_load_assets: true,
        }
    }
}

/// Immutable per-run configuration for the whole pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EnterpriseGenerationConfig {
    pub framework: Framework,
    pub styling: StylingSystem,
    pub typescript: bool,
    pub component_architecture: ComponentArchitecture,
    pub css_methodology: CssMethodology,
    pub responsive_strategy: ResponsiveStrategy,
    pub features: FeatureToggles,
    pub optimization: OptimizationConfig,
}

impl Default for EnterpriseGenerationConfig {
    fn default() -> Self {
        Self {
            framework: Framework::React,
            styling: StylingSystem::Css,
            typescript: true,
            component_architecture: ComponentArchitecture::Atomic,
            css_methodology: CssMethodology::Bem,
            responsive_strategy: ResponsiveStrategy::MediaQueries,
            features: FeatureToggles::default(),
            optimization: OptimizationConfig::default(),
        }
    }
}

impl EnterpriseGenerationConfig {
    /// Validate numeric invariants. Enum fields are already closed types, so
    /// only range checks remain; violations are reported, never coerced.
    pub fn validate(&self) -> Result<()> {
        let mut violations = Vec::new();

        if self.optimization.max_bundle_size_kb <= 0.0 {
            violations.push(format!(
                "optimization.maxBundleSizeKb must be > 0 (got {})",
                self.optimization.max_bundle_size_kb
            ));
        }
        if self.optimization.target_performance_score > 100 {
            violations.push(format!(
                "optimization.targetPerformanceScore must be within 0-100 (got {})",
                self.optimization.target_performance_score
            ));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(FigforgeError::config(violations.join("; ")))
        }
    }

    /// Load a config from TOML text, overlaying onto the defaults.
    ///
    /// The UI layer that embeds this library feeds user-edited TOML through
    /// here; unknown enum values surface as configuration errors naming the
    /// value, before any phase runs.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let overlay: ConfigOverlay = toml::from_str(text)
            .map_err(|e| FigforgeError::config(format!("Invalid config TOML: {}", e)))?;
        let config = overlay.apply(Self::default())?;
        config.validate()?;
        Ok(config)
    }
}

/// Partial configuration parsed from TOML. String-typed enum fields let the
/// parse report the exact invalid value.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct ConfigOverlay {
    framework: Option<String>,
    styling: Option<String>,
    typescript: Option<bool>,
    component_architecture: Option<String>,
    css_methodology: Option<String>,
    responsive_strategy: Option<String>,
    features: Option<FeatureToggles>,
    optimization: Option<OptimizationConfig>,
}

impl ConfigOverlay {
    fn apply(self, mut base: EnterpriseGenerationConfig) -> Result<EnterpriseGenerationConfig> {
        if let Some(framework) = self.framework {
            base.framework = framework.parse()?;
        }
        if let Some(styling) = self.styling {
            base.styling = styling.parse()?;
        }
        if let Some(typescript) = self.typescript {
            base.typescript = typescript;
        }
        if let Some(architecture) = self.component_architecture {
            base.component_architecture = architecture.parse()?;
        }
        if let Some(methodology) = self.css_methodology {
            base.css_methodology = methodology.parse()?;
        }
        if let Some(strategy) = self.responsive_strategy {
            base.responsive_strategy = strategy.parse()?;
        }
        if let Some(features) = self.features {
            base.features = features;
        }
        if let Some(optimization) = self.optimization {
            base.optimization = optimization;
        }
        Ok(base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_validates() {
        let cfg = EnterpriseGenerationConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.framework, Framework::React);
        assert_eq!(cfg.css_methodology, CssMethodology::Bem);
        assert_eq!(cfg.responsive_strategy.breakpoints(), &[768, 1024]);
    }

    #[test]
    fn unknown_framework_is_a_config_error_naming_the_value() {
        let err = Framework::from_str("sveltekit").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("sveltekit"), "got: {msg}");
        assert!(msg.contains("Configuration error"));
    }

    #[test]
    fn zero_bundle_budget_is_rejected() {
        let cfg = EnterpriseGenerationConfig {
            optimization: OptimizationConfig {
                max_bundle_size_kb: 0.0,
                ..OptimizationConfig::default()
            },
            ..EnterpriseGenerationConfig::default()
        };
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("maxBundleSizeKb"));
    }

    #[test]
    fn toml_overlay_applies_onto_defaults() {
        let cfg = EnterpriseGenerationConfig::from_toml_str(
            r#"
            framework = "vue"
            cssMethodology = "itcss"

            [optimization]
            maxBundleSizeKb = 120.0
            "#,
        )
        .expect("valid overlay");
        assert_eq!(cfg.framework, Framework::Vue);
        assert_eq!(cfg.css_methodology, CssMethodology::Itcss);
        assert!((cfg.optimization.max_bundle_size_kb - 120.0).abs() < f64::EPSILON);
        // Untouched fields keep their defaults.
        assert_eq!(cfg.styling, StylingSystem::Css);
        assert!(cfg.typescript);
    }

    #[test]
    fn toml_overlay_sets_component_architecture() {
        let cfg = EnterpriseGenerationConfig::from_toml_str(
            r#"componentArchitecture = "feature-sliced""#,
        )
        .expect("valid overlay");
        assert_eq!(
            cfg.component_architecture,
            ComponentArchitecture::FeatureSliced
        );

        let err = EnterpriseGenerationConfig::from_toml_str(
            r#"componentArchitecture = "vertical-sliced""#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("vertical-sliced"));
    }

    #[test]
    fn toml_overlay_rejects_unknown_framework() {
        let err = EnterpriseGenerationConfig::from_toml_str(r#"framework = "sveltekit""#)
            .unwrap_err();
        assert!(err.to_string().contains("sveltekit"));
    }

    #[test]
    fn container_strategy_has_three_breakpoints() {
        assert_eq!(
            ResponsiveStrategy::ContainerQueries.breakpoints(),
            &[300, 500, 700]
        );
    }

    #[test]
    fn framework_extensions_respect_typescript_flag() {
        assert_eq!(Framework::React.component_extension(true), "tsx");
        assert_eq!(Framework::React.component_extension(false), "jsx");
        assert_eq!(Framework::Vue.component_extension(true), "vue");
        assert_eq!(Framework::Svelte.component_extension(false), "svelte");
    }
}
