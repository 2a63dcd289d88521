//! React emission strategy: JSX function components.

use std::time::Instant;

use super::{
    child_class, finish_component, has_image_fill, FrameworkGenerator, GeneratorOptions,
};
use crate::config::{Framework, StylingSystem};
use crate::css::{class_slug, root_class, CssArchitect};
use crate::error::Result;
use crate::figma::{FigmaNode, NodeType};
use crate::generators::classify_component_type;
use crate::types::{ComponentType, GeneratedComponent};

pub struct ReactGenerator {
    options: GeneratorOptions,
    architect: CssArchitect,
}

impl ReactGenerator {
    pub fn new(options: GeneratorOptions, architect: CssArchitect) -> Self {
        Self { options, architect }
    }

    fn stylesheet_import(&self, name: &str) -> String {
        match self.options.styling {
            StylingSystem::StyledComponents => format!("import './{}.styles';\n", name),
            StylingSystem::Scss => format!("import './{}.scss';\n", name),
            _ => format!("import './{}.css';\n", name),
        }
    }

    /// Root class attribute; Tailwind gets a few utility classes appended.
    fn root_class_attr(&self, node: &FigmaNode, name: &str) -> String {
        let mut classes = root_class(self.options.methodology, name);
        if self.options.styling == StylingSystem::Tailwind {
            if node.layout_mode.is_some() {
                classes.push_str(" flex");
                if node.layout_mode == Some(crate::figma::LayoutMode::Vertical) {
                    classes.push_str(" flex-col");
                }
            }
            if node.corner_radius.unwrap_or(0.0) > 0.0 {
                classes.push_str(" rounded");
            }
        }
        classes
    }

    fn text_content(&self, block: &str, child: &FigmaNode) -> String {
        match &child.characters {
            Some(_) if self.options.i18n => {
                format!("{{t('{}.{}')}}", block, class_slug(&child.name))
            }
            Some(text_literal) => text_literal.clone(),
            None => "{children}".to_string(),
        }
    }

    fn render_child(&self, child: &FigmaNode, block: &str, indent: usize, out: &mut String) {
        let pad = " ".repeat(indent);
        let class = child_class(self.options.methodology, block, &child.name);
        if child.node_type == NodeType::Text {
            out.push_str(&format!(
                "{pad}<span className=\"{class}\">{}</span>\n",
                self.text_content(block, child)
            ));
        } else if has_image_fill(child) {
            out.push_str(&format!(
                "{pad}<img className=\"{class}\" src=\"/assets/{}.png\" alt=\"{}\" />\n",
                class_slug(&child.name),
                child.name
            ));
        } else if child.node_type.is_vector_like() {
            out.push_str(&format!(
                "{pad}<svg className=\"{class}\" role=\"img\" aria-label=\"{}\"></svg>\n",
                child.name
            ));
        } else if child.children.is_empty() {
            out.push_str(&format!("{pad}<div className=\"{class}\" />\n"));
        } else {
            out.push_str(&format!("{pad}<div className=\"{class}\">\n"));
            for grandchild in &child.children {
                self.render_child(grandchild, block, indent + 2, out);
            }
            out.push_str(&format!("{pad}</div>\n"));
        }
    }

    fn render_root(&self, node: &FigmaNode, name: &str) -> String {
        let block = class_slug(name);
        let class_attr = self.root_class_attr(node, name);
        let component_type = classify_component_type(node);
        let mut out = String::new();

        let (open, close) = match component_type {
            ComponentType::Button => (
                format!(
                    "<button type=\"button\" className={{`{} ${{className ?? ''}}`}} aria-label=\"{}\">",
                    class_attr, node.name
                ),
                "</button>".to_string(),
            ),
            ComponentType::Input => (
                format!(
                    "<input className={{`{} ${{className ?? ''}}`}} aria-label=\"{}\" />",
                    class_attr, node.name
                ),
                String::new(),
            ),
            _ => (
                format!("<div className={{`{} ${{className ?? ''}}`}}>", class_attr),
                "</div>".to_string(),
            ),
        };

        out.push_str("    ");
        out.push_str(&open);
        out.push('\n');
        if !close.is_empty() {
            if node.node_type == NodeType::Text {
                out.push_str("      ");
                out.push_str(&self.text_content(&block, node));
                out.push('\n');
            } else {
                for child in &node.children {
                    self.render_child(child, &block, 6, &mut out);
                }
            }
            out.push_str("    ");
            out.push_str(&close);
            out.push('\n');
        }
        out
    }
}

impl FrameworkGenerator for ReactGenerator {
    fn framework(&self) -> Framework {
        Framework::React
    }

    fn generate_component(&self, node: &FigmaNode, name: &str) -> Result<GeneratedComponent> {
        let started = Instant::now();
        let mut jsx = String::new();

        jsx.push_str("import React from 'react';\n");
        jsx.push_str(&self.stylesheet_import(name));
        if self.options.i18n {
            jsx.push_str("import { useTranslation } from 'react-i18next';\n");
        }
        jsx.push('\n');

        if self.options.typescript {
            jsx.push_str(&format!(
                "export interface {name}Props {{\n  className?: string;\n  children?: React.ReactNode;\n}}\n\n"
            ));
            jsx.push_str(&format!(
                "export function {name}({{ className, children }}: {name}Props) {{\n"
            ));
        } else {
            jsx.push_str(&format!(
                "export function {name}({{ className, children }}) {{\n"
            ));
        }
        if self.options.i18n {
            jsx.push_str("  const { t } = useTranslation();\n");
        }
        jsx.push_str("  return (\n");
        jsx.push_str(&self.render_root(node, name));
        jsx.push_str("  );\n}\n\n");
        jsx.push_str(&format!("export default {name};\n"));

        let css = self.architect.generate_architectural_css(node, name);
        let typescript = self.options.typescript.then(|| {
            format!(
                "export interface {name}Props {{\n  className?: string;\n  children?: React.ReactNode;\n}}\nexport declare function {name}(props: {name}Props): JSX.Element;\n"
            )
        });

        Ok(finish_component(
            node,
            name,
            jsx,
            css,
            typescript,
            &self.architect,
            Framework::React,
            self.options.i18n,
            started,
        ))
    }

    fn framework_specific_code(&self, component: &GeneratedComponent) -> String {
        format!(
            "import {name} from './{name}';\n\n<{name} />\n",
            name = component.name
        )
    }
}
