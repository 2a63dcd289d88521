//! Angular emission strategy: decorator-based component classes with inline
//! templates.

use std::time::Instant;

use super::{
    child_class, finish_component, has_image_fill, FrameworkGenerator, GeneratorOptions,
};
use crate::config::Framework;
use crate::css::{class_slug, root_class, CssArchitect};
use crate::error::Result;
use crate::figma::{FigmaNode, NodeType};
use crate::generators::classify_component_type;
use crate::types::{ComponentType, GeneratedComponent};

pub struct AngularGenerator {
    options: GeneratorOptions,
    architect: CssArchitect,
}

impl AngularGenerator {
    pub fn new(options: GeneratorOptions, architect: CssArchitect) -> Self {
        Self { options, architect }
    }

    fn text_content(&self, block: &str, child: &FigmaNode) -> String {
        match &child.characters {
            Some(_) if self.options.i18n => {
                format!("{{{{ '{}.{}' | translate }}}}", block, class_slug(&child.name))
            }
            Some(text) => text.clone(),
            None => "<ng-content></ng-content>".to_string(),
        }
    }

    fn render_child(&self, child: &FigmaNode, block: &str, indent: usize, out: &mut String) {
        let pad = " ".repeat(indent);
        let class = child_class(self.options.methodology, block, &child.name);
        if child.node_type == NodeType::Text {
            out.push_str(&format!(
                "{pad}<span class=\"{class}\">{}</span>\n",
                self.text_content(block, child)
            ));
        } else if has_image_fill(child) {
            out.push_str(&format!(
                "{pad}<img class=\"{class}\" src=\"/assets/{}.png\" alt=\"{}\" />\n",
                class_slug(&child.name),
                child.name
            ));
        } else if child.node_type.is_vector_like() {
            out.push_str(&format!(
                "{pad}<svg class=\"{class}\" role=\"img\" attr.aria-label=\"{}\"></svg>\n",
                child.name
            ));
        } else if child.children.is_empty() {
            out.push_str(&format!("{pad}<div class=\"{class}\"></div>\n"));
        } else {
            out.push_str(&format!("{pad}<div class=\"{class}\">\n"));
            for grandchild in &child.children {
                self.render_child(grandchild, block, indent + 2, out);
            }
            out.push_str(&format!("{pad}</div>\n"));
        }
    }

    fn render_template(&self, node: &FigmaNode, name: &str) -> String {
        let block = class_slug(name);
        let class = root_class(self.options.methodology, name);
        let component_type = classify_component_type(node);
        let mut out = String::new();
        match component_type {
            ComponentType::Button => {
                out.push_str(&format!(
                    "    <button type=\"button\" class=\"{class}\" aria-label=\"{}\">\n",
                    node.name
                ));
                for child in &node.children {
                    self.render_child(child, &block, 6, &mut out);
                }
                out.push_str("    </button>\n");
            }
            ComponentType::Input => {
                out.push_str(&format!(
                    "    <input class=\"{class}\" aria-label=\"{}\" />\n",
                    node.name
                ));
            }
            _ => {
                out.push_str(&format!("    <div class=\"{class}\">\n"));
                if node.node_type == NodeType::Text {
                    out.push_str("      ");
                    out.push_str(&self.text_content(&block, node));
                    out.push('\n');
                } else {
                    for child in &node.children {
                        self.render_child(child, &block, 6, &mut out);
                    }
                }
                out.push_str("    </div>\n");
            }
        }
        out
    }
}

impl FrameworkGenerator for AngularGenerator {
    fn framework(&self) -> Framework {
        Framework::Angular
    }

    fn generate_component(&self, node: &FigmaNode, name: &str) -> Result<GeneratedComponent> {
        let started = Instant::now();
        let slug = class_slug(name);
        let mut ts = String::new();

        ts.push_str("import { Component } from '@angular/core';\n\n");
        ts.push_str("@Component({\n");
        ts.push_str(&format!("  selector: 'app-{}',\n", slug));
        ts.push_str("  template: `\n");
        ts.push_str(&self.render_template(node, name));
        ts.push_str("  `,\n");
        ts.push_str(&format!("  styleUrls: ['./{}.component.{}'],\n", slug, self.options.styling.stylesheet_extension()));
        ts.push_str("})\n");
        ts.push_str(&format!("export class {name}Component {{}}\n"));

        let css = self.architect.generate_architectural_css(node, name);
        // Angular emits TypeScript already; the declaration field mirrors the
        // class surface for consumers that only read declarations.
        let typescript = self.options.typescript.then(|| {
            format!("export declare class {name}Component {{}}\n")
        });

        Ok(finish_component(
            node,
            name,
            ts,
            css,
            typescript,
            &self.architect,
            Framework::Angular,
            self.options.i18n,
            started,
        ))
    }

    fn framework_specific_code(&self, component: &GeneratedComponent) -> String {
        let slug = class_slug(&component.name);
        format!("<app-{slug}></app-{slug}>\n")
    }
}
