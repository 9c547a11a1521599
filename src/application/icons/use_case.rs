//! Sprite Build Use Case
//!
//! Clones the icon repository into a scratch directory, stages the
//! manifest's icons under their symbol names and runs the sprite tool.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::config::IconsConfig;
use crate::domain::entities::IconManifest;
use crate::domain::ports::{AssetEvent, CommandRunner, EventSink, ToolInvocation};
use crate::error::{AssetsError, AssetsResult};
use crate::infrastructure::fs::copy_file;
use crate::infrastructure::ScratchTracker;

use super::result::SpriteReport;

/// Location of the generated sprite inside the sprite tool's output
const SPRITE_FILE: &str = "svg/sprite.symbol.svg";

/// Sprite build use case
pub struct SpriteBuilder<R, E>
where
    R: CommandRunner,
    E: EventSink,
{
    config: IconsConfig,
    runner: R,
    events: E,
    scratch_parent: Option<PathBuf>,
    tracker: Option<ScratchTracker>,
}

impl<R, E> SpriteBuilder<R, E>
where
    R: CommandRunner,
    E: EventSink,
{
    pub fn new(config: IconsConfig, runner: R, events: E) -> Self {
        Self {
            config,
            runner,
            events,
            scratch_parent: None,
            tracker: None,
        }
    }

    /// Create scratch directories inside `parent` instead of the system
    /// temp directory.
    pub fn with_scratch_parent(mut self, parent: impl Into<PathBuf>) -> Self {
        self.scratch_parent = Some(parent.into());
        self
    }

    /// Publish the scratch directory to `tracker` while a build runs, so
    /// an interrupt handler can remove it.
    pub fn with_scratch_tracker(mut self, tracker: ScratchTracker) -> Self {
        self.tracker = Some(tracker);
        self
    }

    /// Build a sprite from `manifest_path` and copy it to `output`.
    ///
    /// The scratch directory is removed whether or not the build succeeds.
    pub fn build(&self, manifest_path: &Path, output: &Path) -> AssetsResult<SpriteReport> {
        let manifest = IconManifest::load(manifest_path)?;

        let scratch = self.scratch_dir()?;
        if let Some(tracker) = &self.tracker {
            tracker.track(scratch.path());
        }

        let result = self.build_in(scratch.path(), &manifest, output);
        let closed = scratch.close();
        if let Some(tracker) = &self.tracker {
            tracker.clear();
        }

        let report = result?;
        closed?;
        Ok(report)
    }

    fn scratch_dir(&self) -> AssetsResult<TempDir> {
        let mut builder = tempfile::Builder::new();
        builder.prefix("webassets-icons-");
        let dir = match &self.scratch_parent {
            Some(parent) => builder.tempdir_in(parent)?,
            None => builder.tempdir()?,
        };
        Ok(dir)
    }

    fn build_in(
        &self,
        scratch: &Path,
        manifest: &IconManifest,
        output: &Path,
    ) -> AssetsResult<SpriteReport> {
        let repo = self.clone_repository(scratch)?;
        let staged = self.stage_icons(scratch, &repo, manifest)?;
        let sprite = self.generate_sprite(scratch, &staged)?;

        copy_file(&sprite, output)?;
        self.events.on_event(AssetEvent::SpriteWritten {
            path: output.to_path_buf(),
        });

        Ok(SpriteReport {
            icons: manifest.names().map(str::to_string).collect(),
            output: output.to_path_buf(),
        })
    }

    fn clone_repository(&self, scratch: &Path) -> AssetsResult<PathBuf> {
        let repo = scratch.join("repo");

        self.events.on_event(AssetEvent::RepositoryCloning {
            url: self.config.repository.clone(),
        });
        self.runner.run(
            &ToolInvocation::new(&self.config.git)
                .arg("clone")
                .arg("--depth=1")
                .arg(&self.config.repository)
                .arg(&repo),
        )?;

        Ok(repo)
    }

    /// Copy each icon to `svgs/{name}.svg`; the clone is left untouched.
    fn stage_icons(
        &self,
        scratch: &Path,
        repo: &Path,
        manifest: &IconManifest,
    ) -> AssetsResult<Vec<PathBuf>> {
        let svgs = scratch.join("svgs");
        fs::create_dir(&svgs)?;

        let svg_root = repo.join(&self.config.svg_dir);
        let mut staged = Vec::with_capacity(manifest.len());

        for entry in manifest.entries() {
            let source = svg_root.join(format!("{}.svg", entry.path));
            if !source.is_file() {
                return Err(AssetsError::IconSourceNotFound {
                    icon: entry.name.clone(),
                    path: source,
                });
            }

            let target = svgs.join(format!("{}.svg", entry.name));
            copy_file(&source, &target)?;

            self.events.on_event(AssetEvent::IconStaged {
                name: entry.name.clone(),
                source,
            });
            staged.push(target);
        }

        Ok(staged)
    }

    fn generate_sprite(&self, scratch: &Path, staged: &[PathBuf]) -> AssetsResult<PathBuf> {
        let symbol_dir = scratch.join("symbol");

        self.events.on_event(AssetEvent::SpriteGenerating {
            icon_count: staged.len(),
        });
        let invocation = ToolInvocation::new(&self.config.sprite_tool)
            .arg("-s")
            .arg("--symbol-dest")
            .arg(&symbol_dir)
            .args(staged);
        self.runner.run(&invocation)?;

        let sprite = symbol_dir.join(SPRITE_FILE);
        if !sprite.is_file() {
            return Err(AssetsError::MissingOutput {
                tool: invocation.tool_name(),
                path: sprite,
            });
        }
        Ok(sprite)
    }
}
