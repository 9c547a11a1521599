//! Resource Compile Use Case
//!
//! Recompiles Sass and JS sources, then rewrites every template that
//! embeds an integrity digest of an asset that changed.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::ResourcesConfig;
use crate::domain::entities::IntegritySnapshot;
use crate::domain::ports::{AssetClass, AssetEvent, CommandRunner, EventSink, ToolInvocation};
use crate::domain::services::{diff_snapshots, rewrite_digests, DigestChange, TreeMapping};
use crate::domain::value_objects::ContentHash;
use crate::error::AssetsResult;
use crate::infrastructure::fs::write_atomic;
use crate::infrastructure::{scan_files, Toolchain};

use super::result::{CompiledSource, ResourcesReport, TemplateUpdate};

/// Resource compile use case
pub struct ResourceCompiler<R, E>
where
    R: CommandRunner,
    E: EventSink,
{
    config: ResourcesConfig,
    root: PathBuf,
    toolchain: Toolchain,
    runner: R,
    events: E,
}

impl<R, E> ResourceCompiler<R, E>
where
    R: CommandRunner,
    E: EventSink,
{
    /// `root` is the project root the configured web paths are relative to.
    pub fn new(
        config: ResourcesConfig,
        root: impl Into<PathBuf>,
        toolchain: Toolchain,
        runner: R,
        events: E,
    ) -> Self {
        Self {
            config,
            root: root.into(),
            toolchain,
            runner,
            events,
        }
    }

    /// Compile, diff digests and patch templates.
    ///
    /// Stops at the first failure. Templates already rewritten by then
    /// stay rewritten.
    pub fn run(&self) -> AssetsResult<ResourcesReport> {
        let mut report = ResourcesReport::new();
        self.report_missing_tools(&mut report);

        let before = self.snapshot()?;

        if let Some(sass) = &self.toolchain.css_tool {
            self.compile_css(sass, &mut report)?;
        }
        if let Some(babel) = &self.toolchain.js_tool {
            self.compile_js(babel, &mut report)?;
        }

        let after = self.snapshot()?;
        let diff = diff_snapshots(&before, &after);

        for change in &diff.changed {
            self.events.on_event(AssetEvent::DigestChanged {
                path: change.path.clone(),
            });
        }
        for path in &diff.added {
            self.events.on_event(AssetEvent::AssetAdded { path: path.clone() });
        }

        self.update_templates(&diff.changed, &mut report)?;

        report.changed = diff.changed;
        report.added = diff.added;
        report.removed = diff.removed;
        Ok(report)
    }

    fn report_missing_tools(&self, report: &mut ResourcesReport) {
        let tools = [
            (&self.toolchain.css_tool, &self.config.sass, AssetClass::Css),
            (&self.toolchain.js_tool, &self.config.babel, AssetClass::Js),
        ];
        for (found, name, class) in tools {
            if found.is_none() {
                self.events.on_event(AssetEvent::ToolMissing {
                    tool: name.clone(),
                    class,
                });
                report.skipped.push(class);
            }
        }
    }

    fn snapshot(&self) -> AssetsResult<IntegritySnapshot> {
        let static_root = self.config.static_root(&self.root);
        let files = scan_files(&static_root, &self.config.asset_globs)?;
        IntegritySnapshot::capture(&files)
    }

    fn mapping(&self) -> TreeMapping {
        TreeMapping::new(
            self.config.source_root(&self.root),
            self.config.static_root(&self.root),
        )
    }

    fn compile_css(&self, sass: &Path, report: &mut ResourcesReport) -> AssetsResult<()> {
        let mapping = self.mapping();

        for source in self.config.css_source_paths(&self.root) {
            let output = mapping.map_with_extension(&source, "css")?;
            self.events.on_event(AssetEvent::Compiling {
                class: AssetClass::Css,
                source: source.clone(),
                output: output.clone(),
            });

            // sass takes `input:output` pairs
            let mut pair = OsString::from(source.as_os_str());
            pair.push(":");
            pair.push(output.as_os_str());

            self.runner.run(
                &ToolInvocation::new(sass)
                    .arg("-s")
                    .arg(&self.config.sass_style)
                    .arg(pair),
            )?;

            report.compiled.push(CompiledSource {
                class: AssetClass::Css,
                source,
                output,
            });
        }
        Ok(())
    }

    fn compile_js(&self, babel: &Path, report: &mut ResourcesReport) -> AssetsResult<()> {
        let mapping = self.mapping();

        for source in self.config.js_source_paths(&self.root) {
            let output = mapping.map(&source)?;
            self.events.on_event(AssetEvent::Compiling {
                class: AssetClass::Js,
                source: source.clone(),
                output: output.clone(),
            });

            let mut invocation = ToolInvocation::new(babel);
            if self.config.source_maps {
                invocation = invocation.arg("-s").arg("true");
            }
            self.runner
                .run(&invocation.arg("-d").arg(&output).arg(&source))?;

            report.compiled.push(CompiledSource {
                class: AssetClass::Js,
                source,
                output,
            });
        }
        Ok(())
    }

    fn update_templates(
        &self,
        changes: &[DigestChange],
        report: &mut ResourcesReport,
    ) -> AssetsResult<()> {
        let templates_root = self.config.templates_root(&self.root);
        let templates = scan_files(&templates_root, &self.config.template_globs)?;
        report.templates_scanned = templates.len();

        if changes.is_empty() {
            return Ok(());
        }

        for template in templates {
            let content = fs::read_to_string(&template)?;
            let before = ContentHash::from_content(&content);

            let rewrite = rewrite_digests(&content, changes);
            if ContentHash::from_content(&rewrite.content) == before {
                continue;
            }

            write_atomic(&template, rewrite.content.as_bytes())?;

            report.templates_updated.push(TemplateUpdate {
                path: template.clone(),
                replacements: rewrite.replacements,
            });
            self.events.on_event(AssetEvent::TemplateUpdated {
                path: template,
                replacements: rewrite.replacements,
                before: content,
                after: rewrite.content,
            });
        }
        Ok(())
    }
}
