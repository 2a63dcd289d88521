//! CSS architecture rendering.
//!
//! One stylesheet per component, rendered in the structural conventions of a
//! chosen methodology:
//!
//! - [`bem`] - block/element/modifier naming
//! - [`smacss`] - base/layout/module/state/theme rule groups
//! - [`itcss`] - seven-layer inverted-triangle cascade
//! - [`cube`] - composition/utilities/block/exception layers
//!
//! The methodology changes naming and layering, never the extracted values:
//! style facts are pulled from the node once (see [`facts`]) and every
//! methodology renders the same facts.

mod bem;
mod cube;
pub mod facts;
mod itcss;
mod smacss;

#[cfg(test)]
mod tests;

use crate::config::{CssMethodology, ResponsiveStrategy};
use crate::figma::FigmaNode;

pub use facts::StyleFacts;

/// Deterministic CSS class for a component name: lowercased, whitespace
/// replaced with hyphens.
pub fn class_slug(name: &str) -> String {
    name.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

/// Renders architectural stylesheets for generated components.
#[derive(Debug, Clone, Copy)]
pub struct CssArchitect {
    methodology: CssMethodology,
    responsive: ResponsiveStrategy,
}

impl CssArchitect {
    pub fn new(methodology: CssMethodology, responsive: ResponsiveStrategy) -> Self {
        Self {
            methodology,
            responsive,
        }
    }

    pub fn methodology(&self) -> CssMethodology {
        self.methodology
    }

    pub fn responsive_strategy(&self) -> ResponsiveStrategy {
        self.responsive
    }

    /// Render the full stylesheet for a node in the configured methodology,
    /// followed by the responsive section.
    pub fn generate_architectural_css(&self, node: &FigmaNode, component_name: &str) -> String {
        let block = class_slug(component_name);
        let mut css = match self.methodology {
            CssMethodology::Bem => bem::render(node, &block),
            CssMethodology::Smacss => smacss::render(node, &block),
            CssMethodology::Itcss => itcss::render(node, &block),
            CssMethodology::Cube => cube::render(node, &block),
        };
        css.push('\n');
        css.push_str(&self.responsive_section(&block));
        css
    }

    /// Responsive rules for the block selector. Media queries or container
    /// queries, selected by configuration; never both.
    fn responsive_section(&self, block: &str) -> String {
        let selector = base_selector(self.methodology, block);
        let mut out = String::new();
        match self.responsive {
            ResponsiveStrategy::MediaQueries => {
                out.push_str("/* Responsive */\n");
                out.push_str(&format!("{} {{\n  width: 100%;\n}}\n", selector));
                for bp in ResponsiveStrategy::MediaQueries.breakpoints() {
                    out.push_str(&format!(
                        "@media (min-width: {bp}px) {{\n  {selector} {{\n    max-width: {bp}px;\n    margin-left: auto;\n    margin-right: auto;\n  }}\n}}\n"
                    ));
                }
            }
            ResponsiveStrategy::ContainerQueries => {
                out.push_str("/* Responsive */\n");
                out.push_str(&format!(
                    "{} {{\n  container-type: inline-size;\n  width: 100%;\n}}\n",
                    selector
                ));
                for bp in ResponsiveStrategy::ContainerQueries.breakpoints() {
                    out.push_str(&format!(
                        "@container (min-width: {bp}px) {{\n  {selector} {{\n    max-width: {bp}px;\n  }}\n}}\n"
                    ));
                }
            }
        }
        out
    }
}

/// The selector each methodology uses for the component's root element.
pub fn base_selector(methodology: CssMethodology, block: &str) -> String {
    match methodology {
        CssMethodology::Itcss => format!(".c-{}", block),
        _ => format!(".{}", block),
    }
}

/// The class attribute value the markup generators put on the root element.
/// ITCSS namespaces component classes with `c-`; the others use the bare
/// block name.
pub fn root_class(methodology: CssMethodology, name: &str) -> String {
    let block = class_slug(name);
    match methodology {
        CssMethodology::Itcss => format!("c-{}", block),
        _ => block,
    }
}
