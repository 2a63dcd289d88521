//! Component library management: category taxonomy, base-component
//! extraction for reuse, and textual variant synthesis.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config::Framework;
use crate::css::class_slug;
use crate::optimizer::reuse_fingerprint;
use crate::types::GeneratedComponent;

/// Atomic-design taxonomy bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Atoms,
    Molecules,
    Organisms,
    Templates,
}

/// Keyword table matched case-insensitively against component names; the
/// first hit wins. Names with no keyword fall back to a complexity-based
/// mapping.
const CATEGORY_KEYWORDS: &[(&str, Category)] = &[
    ("button", Category::Atoms),
    ("input", Category::Atoms),
    ("label", Category::Atoms),
    ("icon", Category::Atoms),
    ("text", Category::Atoms),
    ("card", Category::Molecules),
    ("form", Category::Molecules),
    ("navigation", Category::Molecules),
    ("search", Category::Molecules),
    ("header", Category::Organisms),
    ("footer", Category::Organisms),
    ("sidebar", Category::Organisms),
    ("layout", Category::Organisms),
    ("page", Category::Templates),
    ("dashboard", Category::Templates),
    ("profile", Category::Templates),
];

pub fn categorize(component: &GeneratedComponent) -> Category {
    let lowered = component.name.to_lowercase();
    for (keyword, category) in CATEGORY_KEYWORDS {
        if lowered.contains(keyword) {
            return *category;
        }
    }
    match component.metadata.complexity {
        crate::types::Complexity::Simple => Category::Atoms,
        crate::types::Complexity::Medium => Category::Molecules,
        crate::types::Complexity::Complex => Category::Organisms,
    }
}

/// Group component names by taxonomy bucket, preserving input order within
/// each bucket.
pub fn organize_components(components: &[GeneratedComponent]) -> BTreeMap<Category, Vec<String>> {
    let mut buckets: BTreeMap<Category, Vec<String>> = BTreeMap::new();
    for component in components {
        buckets
            .entry(categorize(component))
            .or_default()
            .push(component.name.clone());
    }
    buckets
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VariantKind {
    Size,
    Color,
    State,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentVariant {
    pub name: String,
    pub kind: VariantKind,
}

/// Textual variant heuristics over the emitted output. False positives and
/// negatives are expected; this is not semantic analysis.
pub fn generate_component_variants(component: &GeneratedComponent) -> Vec<ComponentVariant> {
    let mut variants = Vec::new();
    let markup = component.jsx.to_lowercase();
    let css = component.css.to_lowercase();

    let sized = ["size", "width", "height"]
        .iter()
        .any(|k| markup.contains(k) || css.contains(k));
    if sized {
        for size in ["sm", "md", "lg"] {
            variants.push(ComponentVariant {
                name: format!("{}-{}", class_slug(&component.name), size),
                kind: VariantKind::Size,
            });
        }
    }

    if css.contains("color") || css.contains("background") {
        for tone in ["primary", "secondary"] {
            variants.push(ComponentVariant {
                name: format!("{}-{}", class_slug(&component.name), tone),
                kind: VariantKind::Color,
            });
        }
    }

    let stateful =
        markup.contains("disabled") || markup.contains("active") || css.contains(":hover");
    if stateful {
        for state in ["default", "disabled"] {
            variants.push(ComponentVariant {
                name: format!("{}-{}", class_slug(&component.name), state),
                kind: VariantKind::State,
            });
        }
    }

    variants
}

pub struct LibraryManager {
    framework: Framework,
}

impl LibraryManager {
    pub fn new(framework: Framework) -> Self {
        Self { framework }
    }

    fn base_import_line(&self, base_name: &str) -> String {
        match self.framework {
            Framework::React => format!("import {base_name} from './{base_name}';\n"),
            Framework::Vue => format!("import {base_name} from './{base_name}.vue';\n"),
            Framework::Angular => {
                let slug = class_slug(base_name);
                format!("import {{ {base_name}Component }} from './{slug}/{slug}.component';\n")
            }
            Framework::Svelte => format!("import {base_name} from './{base_name}.svelte';\n"),
        }
    }

    /// Promote any structural-fingerprint group with three or more members
    /// to a synthesized base component. Members are rewritten to import the
    /// base; the base itself carries the shared emitted text under a
    /// `Base`-prefixed name. Runs after optimization and before the
    /// documentation and test phases, which read final component text.
    pub fn optimize_for_reusability(
        &self,
        components: Vec<GeneratedComponent>,
    ) -> Vec<GeneratedComponent> {
        let mut groups: BTreeMap<u64, Vec<usize>> = BTreeMap::new();
        for (index, component) in components.iter().enumerate() {
            groups
                .entry(reuse_fingerprint(component))
                .or_default()
                .push(index);
        }

        let mut components = components;
        let mut bases = Vec::new();
        for members in groups.values() {
            if members.len() < 3 {
                continue;
            }
            let first = &components[members[0]];
            let base_name = format!("Base{}", first.name);
            let base_slug = class_slug(&base_name);
            let member_slug = class_slug(&first.name);

            // The base carries the shared emitted text under its own
            // identity: the donor member's name and class slug are rewritten
            // so the exported identifier and selectors match the filename the
            // members import.
            let rename = |text: &str| {
                text.replace(&first.name, &base_name)
                    .replace(&member_slug, &base_slug)
            };
            let mut base = first.clone();
            base.id = format!("base-{}", first.id);
            base.jsx = rename(&first.jsx);
            base.css = rename(&first.css);
            base.typescript = first.typescript.as_deref().map(rename);
            base.name = base_name.clone();
            bases.push(base);

            let import_line = self.base_import_line(&base_name);
            let css_import = format!("@import './{}.css';\n", base_slug);
            for &index in members {
                let member = &mut components[index];
                member.jsx = format!("{import_line}{}", member.jsx);
                member.css = format!("{css_import}{}", member.css);
                member.metadata.dependencies.push(base_name.clone());
            }
        }

        // Bases lead the list so members' imports resolve in reading order.
        let mut out = bases;
        out.append(&mut components);
        out
    }
}
