//! Generated test file text for the emitted components.
//!
//! Four categories keyed by filename: unit, integration, end-to-end and
//! accessibility. The text targets each framework's conventional tooling
//! (Testing Library, Playwright, jest-axe); nothing here executes it.

use crate::config::{EnterpriseGenerationConfig, Framework};
use crate::css::class_slug;
use crate::types::{GeneratedComponent, TestOutput};

pub fn generate_tests(
    components: &[GeneratedComponent],
    config: &EnterpriseGenerationConfig,
) -> TestOutput {
    let mut output = TestOutput::default();
    if !config.features.testing {
        return output;
    }
    for component in components {
        let name = &component.name;
        let ext = test_extension(config);
        output
            .unit
            .insert(format!("{name}.test.{ext}"), unit_test(component, config));
        output.integration.insert(
            format!("{name}.integration.test.{ext}"),
            integration_test(component, config),
        );
        output.e2e.insert(
            format!("{}.spec.ts", class_slug(name)),
            e2e_test(component),
        );
        output.accessibility.insert(
            format!("{name}.a11y.test.{ext}"),
            accessibility_test(component, config),
        );
    }
    output
}

fn test_extension(config: &EnterpriseGenerationConfig) -> &'static str {
    match config.framework {
        Framework::React => {
            if config.typescript {
                "tsx"
            } else {
                "jsx"
            }
        }
        _ => "ts",
    }
}

fn import_line(component: &GeneratedComponent, config: &EnterpriseGenerationConfig) -> String {
    let name = &component.name;
    match config.framework {
        Framework::React => format!("import {name} from './{name}';"),
        Framework::Vue => format!("import {name} from './{name}.vue';"),
        Framework::Angular => {
            let slug = class_slug(name);
            format!("import {{ {name}Component }} from './{slug}.component';")
        }
        Framework::Svelte => format!("import {name} from './{name}.svelte';"),
    }
}

fn render_call(component: &GeneratedComponent, config: &EnterpriseGenerationConfig) -> String {
    let name = &component.name;
    match config.framework {
        Framework::React => format!("render(<{name} />);"),
        Framework::Vue | Framework::Svelte => format!("render({name});"),
        Framework::Angular => format!("await render({name}Component);"),
    }
}

fn testing_library(config: &EnterpriseGenerationConfig) -> &'static str {
    match config.framework {
        Framework::React => "@testing-library/react",
        Framework::Vue => "@testing-library/vue",
        Framework::Angular => "@testing-library/angular",
        Framework::Svelte => "@testing-library/svelte",
    }
}

fn unit_test(component: &GeneratedComponent, config: &EnterpriseGenerationConfig) -> String {
    let name = &component.name;
    format!(
        "import {{ render }} from '{lib}';\n{import}\n\ndescribe('{name}', () => {{\n  it('renders without crashing', {async_kw}() => {{\n    {render}\n    expect(document.querySelector('.{slug}')).toBeTruthy();\n  }});\n}});\n",
        lib = testing_library(config),
        import = import_line(component, config),
        async_kw = if config.framework == Framework::Angular { "async " } else { "" },
        render = render_call(component, config),
        slug = class_slug(name),
    )
}

fn integration_test(component: &GeneratedComponent, config: &EnterpriseGenerationConfig) -> String {
    let name = &component.name;
    format!(
        "import {{ render, screen }} from '{lib}';\n{import}\n\ndescribe('{name} integration', () => {{\n  it('mounts inside a host layout', {async_kw}() => {{\n    {render}\n    expect(screen.queryByText(/error/i)).toBeNull();\n  }});\n}});\n",
        lib = testing_library(config),
        import = import_line(component, config),
        async_kw = if config.framework == Framework::Angular { "async " } else { "" },
        render = render_call(component, config),
    )
}

fn e2e_test(component: &GeneratedComponent) -> String {
    let slug = class_slug(&component.name);
    format!(
        "import {{ test, expect }} from '@playwright/test';\n\ntest('{name} is visible', async ({{ page }}) => {{\n  await page.goto('/components/{slug}');\n  await expect(page.locator('.{slug}')).toBeVisible();\n}});\n",
        name = component.name,
    )
}

fn accessibility_test(
    component: &GeneratedComponent,
    config: &EnterpriseGenerationConfig,
) -> String {
    let name = &component.name;
    format!(
        "import {{ render }} from '{lib}';\nimport {{ axe, toHaveNoViolations }} from 'jest-axe';\n{import}\n\nexpect.extend(toHaveNoViolations);\n\ndescribe('{name} accessibility', () => {{\n  it('has no detectable violations', async () => {{\n    {render}\n    const results = await axe(document.body);\n    expect(results).toHaveNoViolations();\n  }});\n}});\n",
        lib = testing_library(config),
        import = import_line(component, config),
        render = render_call(component, config),
    )
}
