//! Writes the template registry to disk.
//!
//! Emission is sequential and stops at the first failed write. Files written
//! before the failure stay on disk.

use colored::Colorize;
use std::path::{Path, PathBuf};

use crate::core::Configuration;
use crate::error::{Result, ScaffoldError};
use crate::logging;
use crate::templates::{registry, Template};
use crate::utils::scoped_file::write_scoped;

/// A rendered template, ready to write
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    pub name: &'static str,
    pub relative_path: String,
    pub content: String,
}

pub struct TemplateEmitter {
    base: PathBuf,
    templates: Vec<Template>,
    verbose: bool,
}

impl TemplateEmitter {
    /// Emit the standard registry relative to `base`
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self {
            base: base.into(),
            templates: registry(),
            verbose: false,
        }
    }

    pub fn with_templates(mut self, templates: Vec<Template>) -> Self {
        self.templates = templates;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Render every template without touching the filesystem
    pub fn render_all(&self, config: &Configuration) -> Result<Vec<RenderedFile>> {
        self.templates
            .iter()
            .map(|template| {
                Ok(RenderedFile {
                    name: template.name,
                    relative_path: template.destination(config),
                    content: template.render(config)?,
                })
            })
            .collect()
    }

    /// Render and write every template, returning the written paths in order
    pub fn emit(&self, config: &Configuration) -> Result<Vec<PathBuf>> {
        let mut written = Vec::with_capacity(self.templates.len());

        for file in self.render_all(config)? {
            let path = self.base.join(&file.relative_path);

            write_scoped(&path, file.content.as_bytes())
                .map_err(|e| ScaffoldError::write_failed(path.display().to_string(), e))?;

            logging::log_template_written(file.name, &path, file.content.len());
            if self.verbose {
                println!("  {} {}", "✓".green(), file.relative_path.dimmed());
            }
            written.push(path);
        }

        Ok(written)
    }
}
