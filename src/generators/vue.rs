//! Vue emission strategy: single-file components with `<script setup>`.

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

pub struct VueGenerator {
    options: GeneratorOptions,
    architect: CssArchitect,
}

impl VueGenerator {
    pub fn new(options: GeneratorOptions, architect: CssArchitect) -> Self {
        Self { options, architect }
    }

    fn text_content(&self, block: &str, child: &FigmaNode) -> String {
        match &child.characters {
            Some(_) if self.options.i18n => {
                format!("{{{{ t('{}.{}') }}}}", block, class_slug(&child.name))
            }
            Some(text) => text.clone(),
            None => "<slot />".to_string(),
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
                "{pad}<svg class=\"{class}\" role=\"img\" aria-label=\"{}\"></svg>\n",
                child.name
            ));
        } else if child.children.is_empty() {
            out.push_str(&format!("{pad}<div class=\"{class}\" />\n"));
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
        out.push_str("<template>\n");
        match component_type {
            ComponentType::Button => {
                out.push_str(&format!(
                    "  <button type=\"button\" class=\"{class}\" aria-label=\"{}\">\n",
                    node.name
                ));
                for child in &node.children {
                    self.render_child(child, &block, 4, &mut out);
                }
                out.push_str("  </button>\n");
            }
            ComponentType::Input => {
                out.push_str(&format!(
                    "  <input class=\"{class}\" :aria-label=\"'{}'\" />\n",
                    node.name
                ));
            }
            _ => {
                out.push_str(&format!("  <div class=\"{class}\">\n"));
                if node.node_type == NodeType::Text {
                    out.push_str("    ");
                    out.push_str(&self.text_content(&block, node));
                    out.push('\n');
                } else {
                    for child in &node.children {
                        self.render_child(child, &block, 4, &mut out);
                    }
                }
                out.push_str("  </div>\n");
            }
        }
        out.push_str("</template>\n");
        out
    }
}

impl FrameworkGenerator for VueGenerator {
    fn framework(&self) -> Framework {
        Framework::Vue
    }

    fn generate_component(&self, node: &FigmaNode, name: &str) -> Result<GeneratedComponent> {
        let started = Instant::now();
        let mut sfc = self.render_template(node, name);

        sfc.push('\n');
        if self.options.typescript {
            sfc.push_str("<script setup lang=\"ts\">\n");
        } else {
            sfc.push_str("<script setup>\n");
        }
        if self.options.i18n {
            sfc.push_str("import { useI18n } from 'vue-i18n';\n\nconst { t } = useI18n();\n");
        } else {
            sfc.push_str(&format!("// {name} is a presentational component.\n"));
        }
        sfc.push_str("</script>\n\n");

        let stylesheet = match self.options.styling {
            StylingSystem::Scss => format!("{}.scss", class_slug(name)),
            _ => format!("{}.css", class_slug(name)),
        };
        sfc.push_str(&format!(
            "<style scoped>\n@import './{}';\n</style>\n",
            stylesheet
        ));

        let css = self.architect.generate_architectural_css(node, name);
        let typescript = self.options.typescript.then(|| {
            format!(
                "import type {{ DefineComponent }} from 'vue';\ndeclare const {name}: DefineComponent<{{ class?: string }}>;\nexport default {name};\n"
            )
        });

        Ok(finish_component(
            node,
            name,
            sfc,
            css,
            typescript,
            &self.architect,
            Framework::Vue,
            self.options.i18n,
            started,
        ))
    }

    fn framework_specific_code(&self, component: &GeneratedComponent) -> String {
        format!(
            "import {name} from './{name}.vue';\n\n<{name} />\n",
            name = component.name
        )
    }
}
