//! The fixed registry of files a scaffold run produces.
//!
//! Each [`Template`] pairs a destination with a [`Render`] strategy. Most
//! templates are plain functions of zero, one (the test directory name) or
//! two (name plus configuration) arguments. Serialized data files may fail to
//! render, and that failure aborts the run. The summary document is the odd
//! one out: it is a static text with `{{MARKER}}` tokens that are substituted
//! from the configuration, and it is kept on its own code path.

pub mod data;
pub mod framework;
pub mod project;
pub mod specs;

use anyhow::Context;

use crate::core::Configuration;
use crate::error::{Result, ScaffoldError};

/// Destination segment replaced with the configured test directory name
pub const TEST_DIR_PLACEHOLDER: &str = "__TEST_DIR__";

/// How a template produces its content
#[derive(Clone, Copy)]
pub enum Render {
    Static(fn() -> String),
    Named(fn(&str) -> String),
    Configured(fn(&str, &Configuration) -> String),
    /// Structured data that goes through `serde_json`
    Serialized(fn(&Configuration) -> serde_json::Result<String>),
    /// Static text with `{{MARKER}}` tokens, see [`substitute_placeholders`]
    Placeholder(&'static str),
}

#[derive(Clone, Copy)]
pub struct Template {
    pub name: &'static str,
    pub destination: &'static str,
    pub render: Render,
}

impl Template {
    /// Destination relative to the framework root
    pub fn destination(&self, config: &Configuration) -> String {
        self.destination
            .replace(TEST_DIR_PLACEHOLDER, &config.test_dir_name)
    }

    /// Rendered content, normalized to end with a single newline
    pub fn render(&self, config: &Configuration) -> Result<String> {
        let raw = match self.render {
            Render::Static(render) => render(),
            Render::Named(render) => render(&config.test_dir_name),
            Render::Configured(render) => render(&config.test_dir_name, config),
            Render::Serialized(render) => render(config)
                .with_context(|| format!("Failed to render template '{}'", self.name))
                .map_err(|e| ScaffoldError::write_failed(self.destination(config), e))?,
            Render::Placeholder(text) => substitute_placeholders(text, config),
        };
        Ok(finalize_content(&raw))
    }
}

/// Strip trailing whitespace and terminate with exactly one newline
pub fn finalize_content(raw: &str) -> String {
    let mut content = raw.trim_end().to_string();
    content.push('\n');
    content
}

/// Replace the summary-document markers with stringified configuration fields
pub fn substitute_placeholders(text: &str, config: &Configuration) -> String {
    let replacements = [
        ("{{TEST_DIR}}", config.test_dir_name.clone()),
        ("{{BASE_URL}}", config.base_url.clone()),
        ("{{WORKERS}}", config.max_workers.to_string()),
        ("{{RETRIES}}", config.retries.to_string()),
        ("{{BROWSERS}}", config.browser_list()),
    ];

    replacements
        .iter()
        .fold(text.to_string(), |acc, (marker, value)| {
            acc.replace(marker, value)
        })
}

/// Every file a scaffold run writes, in emission order
pub fn registry() -> Vec<Template> {
    vec![
        Template {
            name: "package",
            destination: "package.json",
            render: Render::Named(project::package_json),
        },
        Template {
            name: "gitignore",
            destination: ".gitignore",
            render: Render::Static(project::gitignore),
        },
        Template {
            name: "tsconfig",
            destination: "tsconfig.json",
            render: Render::Named(project::tsconfig),
        },
        Template {
            name: "readme",
            destination: "README.md",
            render: Render::Placeholder(project::README),
        },
        Template {
            name: "playwright-config",
            destination: "__TEST_DIR__/playwright.config.ts",
            render: Render::Configured(framework::playwright_config),
        },
        Template {
            name: "fixtures",
            destination: "__TEST_DIR__/fixtures/test-fixtures.ts",
            render: Render::Static(framework::test_fixtures),
        },
        Template {
            name: "base-page",
            destination: "__TEST_DIR__/pages/base-page.ts",
            render: Render::Static(framework::base_page),
        },
        Template {
            name: "home-page",
            destination: "__TEST_DIR__/pages/home-page.ts",
            render: Render::Static(framework::home_page),
        },
        Template {
            name: "helpers",
            destination: "__TEST_DIR__/utils/helpers.ts",
            render: Render::Static(framework::helpers),
        },
        Template {
            name: "test-data",
            destination: "__TEST_DIR__/data/test-data.json",
            render: Render::Serialized(data::test_data_json),
        },
        Template {
            name: "home-spec",
            destination: "__TEST_DIR__/specs/home.spec.ts",
            render: Render::Static(specs::home_spec),
        },
        Template {
            name: "navigation-spec",
            destination: "__TEST_DIR__/specs/navigation.spec.ts",
            render: Render::Static(specs::navigation_spec),
        },
        Template {
            name: "api-spec",
            destination: "__TEST_DIR__/specs/api.spec.ts",
            render: Render::Configured(specs::api_spec),
        },
    ]
}
