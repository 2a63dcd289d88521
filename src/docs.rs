//! Documentation and design-system artifact rendering.

use std::fmt::Write as _;

use crate::config::EnterpriseGenerationConfig;
use crate::css::class_slug;
use crate::library::{self, Category};
use crate::tokens::DesignTokens;
use crate::types::{DesignSystemOutput, DocumentationOutput, GeneratedComponent};

/// Render the README plus one markdown page per component. Reads final
/// component text, so this runs after optimization and base extraction.
pub fn generate_documentation(
    components: &[GeneratedComponent],
    tokens: &DesignTokens,
    config: &EnterpriseGenerationConfig,
) -> DocumentationOutput {
    let mut readme = String::new();
    let _ = writeln!(readme, "# Generated Component Library\n");
    let _ = writeln!(
        readme,
        "Generated from a Figma document for **{}** with {} styling, {} CSS methodology and the {} component architecture.\n",
        config.framework, config.styling, config.css_methodology, config.component_architecture
    );
    let _ = writeln!(readme, "- Components: {}", components.len());
    let _ = writeln!(readme, "- Design tokens: {}", tokens.total());
    let _ = writeln!(
        readme,
        "- TypeScript: {}\n",
        if config.typescript { "yes" } else { "no" }
    );

    let buckets = library::organize_components(components);
    if !buckets.is_empty() {
        let _ = writeln!(readme, "## Components\n");
        for (category, names) in &buckets {
            let label = match category {
                Category::Atoms => "Atoms",
                Category::Molecules => "Molecules",
                Category::Organisms => "Organisms",
                Category::Templates => "Templates",
            };
            let _ = writeln!(readme, "### {label}\n");
            for name in names {
                let _ = writeln!(readme, "- [{name}](./docs/{name}.md)");
            }
            readme.push('\n');
        }
    }

    let _ = writeln!(readme, "## Getting started\n");
    let _ = writeln!(
        readme,
        "Import a component and its stylesheet; see the per-component pages under `docs/` for props and variants.\n"
    );

    let mut component_docs = std::collections::BTreeMap::new();
    for component in components {
        component_docs.insert(
            format!("{}.md", component.name),
            render_component_page(component),
        );
    }

    DocumentationOutput {
        readme,
        component_docs,
    }
}

fn render_component_page(component: &GeneratedComponent) -> String {
    let mut page = String::new();
    let _ = writeln!(page, "# {}\n", component.name);
    let _ = writeln!(
        page,
        "| Property | Value |\n| --- | --- |\n| Type | {:?} |\n| Complexity | {:?} |\n| Estimated accuracy | {}% |\n| Accessibility score | {} ({:?}) |\n",
        component.metadata.component_type,
        component.metadata.complexity,
        component.metadata.estimated_accuracy,
        component.accessibility.score,
        component.accessibility.wcag_level,
    );

    if !component.metadata.dependencies.is_empty() {
        let _ = writeln!(page, "## Dependencies\n");
        for dep in &component.metadata.dependencies {
            let _ = writeln!(page, "- `{dep}`");
        }
        page.push('\n');
    }

    let variants = library::generate_component_variants(component);
    if !variants.is_empty() {
        let _ = writeln!(page, "## Variants\n");
        for variant in &variants {
            let _ = writeln!(page, "- `{}`", variant.name);
        }
        page.push('\n');
    }

    if !component.accessibility.suggestions.is_empty() {
        let _ = writeln!(page, "## Accessibility notes\n");
        for suggestion in &component.accessibility.suggestions {
            let _ = writeln!(page, "- {suggestion}");
        }
        page.push('\n');
    }

    let _ = writeln!(
        page,
        "## Responsive\n\nStrategy: {} at {:?}px.\n",
        component.responsive.strategy, component.responsive.breakpoints
    );
    page
}

/// Render the design-system artifacts from the extracted token set:
/// `design-tokens.css`, a flat theme map, spacing utilities and a base reset.
pub fn generate_design_system(
    tokens: &DesignTokens,
    config: &EnterpriseGenerationConfig,
) -> DesignSystemOutput {
    let mut stylesheet = String::from(":root {\n");
    let mut theme = std::collections::BTreeMap::new();
    for token in tokens
        .colors
        .iter()
        .chain(&tokens.typography)
        .chain(&tokens.spacing)
        .chain(&tokens.shadows)
        .chain(&tokens.border_radius)
    {
        let _ = writeln!(stylesheet, "  --{}: {};", token.name, token.value);
        theme.insert(token.name.clone(), token.value.clone());
    }
    stylesheet.push_str("}\n");

    let mut utilities = String::new();
    for token in &tokens.spacing {
        let _ = writeln!(
            utilities,
            ".u-{name} {{\n  gap: var(--{name});\n}}\n.u-p-{name} {{\n  padding: var(--{name});\n}}",
            name = token.name
        );
    }

    let base_styles = format!(
        "*,\n*::before,\n*::after {{\n  box-sizing: border-box;\n}}\n\nbody {{\n  margin: 0;\n  -webkit-font-smoothing: antialiased;\n}}\n\n/* {} component layer mounts below this reset. */\n",
        config.css_methodology
    );

    DesignSystemOutput {
        token_stylesheet: stylesheet,
        theme,
        utility_classes: utilities,
        base_styles,
    }
}

/// Stable output filename for a component in the configured framework.
pub fn component_filename(component: &GeneratedComponent, config: &EnterpriseGenerationConfig) -> String {
    match config.framework {
        crate::config::Framework::Angular => {
            format!("{}.component.ts", class_slug(&component.name))
        }
        other => format!(
            "{}.{}",
            component.name,
            other.component_extension(config.typescript)
        ),
    }
}
