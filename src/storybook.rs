//! Storybook story generation in CSF 3 form.

use crate::config::{EnterpriseGenerationConfig, Framework};
use crate::library;
use crate::types::{GeneratedComponent, StorybookOutput};

pub fn generate_stories(
    components: &[GeneratedComponent],
    config: &EnterpriseGenerationConfig,
) -> StorybookOutput {
    let mut output = StorybookOutput::default();
    if !config.features.storybook {
        return output;
    }
    for component in components {
        let ext = match config.framework {
            Framework::React if config.typescript => "tsx",
            Framework::React => "jsx",
            _ => "ts",
        };
        output.stories.insert(
            format!("{}.stories.{ext}", component.name),
            render_story(component, config),
        );
    }
    output
}

fn import_path(component: &GeneratedComponent, config: &EnterpriseGenerationConfig) -> String {
    let name = &component.name;
    match config.framework {
        Framework::React => format!("./{name}"),
        Framework::Vue => format!("./{name}.vue"),
        Framework::Angular => format!(
            "./{slug}.component",
            slug = crate::css::class_slug(name)
        ),
        Framework::Svelte => format!("./{name}.svelte"),
    }
}

fn render_story(component: &GeneratedComponent, config: &EnterpriseGenerationConfig) -> String {
    let name = &component.name;
    let imported = match config.framework {
        Framework::Angular => format!("{name}Component"),
        _ => name.clone(),
    };
    let import = match config.framework {
        Framework::Angular => format!(
            "import {{ {imported} }} from '{}';",
            import_path(component, config)
        ),
        _ => format!("import {imported} from '{}';", import_path(component, config)),
    };

    let category = match library::categorize(component) {
        library::Category::Atoms => "Atoms",
        library::Category::Molecules => "Molecules",
        library::Category::Organisms => "Organisms",
        library::Category::Templates => "Templates",
    };

    let mut story = format!(
        "{import}\n\nexport default {{\n  title: '{category}/{name}',\n  component: {imported},\n  tags: ['autodocs'],\n}};\n\nexport const Default = {{}};\n"
    );

    for variant in library::generate_component_variants(component) {
        let export = export_name(&variant.name, name);
        story.push_str(&format!(
            "\nexport const {export} = {{\n  args: {{ className: '{class}' }},\n}};\n",
            class = variant.name,
        ));
    }
    story
}

/// `primarybutton-sm` becomes `Sm` relative to its component name.
fn export_name(variant: &str, component_name: &str) -> String {
    let suffix = variant
        .rsplit('-')
        .next()
        .unwrap_or(variant)
        .to_string();
    let mut chars = suffix.chars();
    match chars.next() {
        Some(first) => {
            let mut out: String = first.to_ascii_uppercase().to_string();
            out.push_str(chars.as_str());
            // Guard against colliding with the component's own export.
            if out == component_name {
                out.push_str("Variant");
            }
            out
        }
        None => "Variant".to_string(),
    }
}
