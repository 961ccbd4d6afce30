// File: crates/sanitation/src/config.rs
// Summary: Run options: pipeline mode, query, artifact paths, codec and display.

use std::path::{Path, PathBuf};

use chart_core::Theme;
use wb_indicator::fetch::{DEFAULT_BASE_URL, DEFAULT_USER_AGENT};
use wb_indicator::{IndicatorQuery, TextCodec};

/// Whether a run rebuilds the on-disk artifacts or reuses them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PipelineMode {
    /// Fetch the indicator, write the JSON document, rebuild the tabular file.
    Refresh,
    /// Plot from the tabular file already on disk.
    #[default]
    Cached,
}

impl PipelineMode {
    pub fn refreshes(self) -> bool {
        self == PipelineMode::Refresh
    }
}

/// Where the three artifacts live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    pub json: PathBuf,
    pub csv: PathBuf,
    pub image: PathBuf,
}

impl ArtifactPaths {
    pub const STEM: &'static str = "sanitation_facilities";

    /// `sanitation_facilities.{json,csv,png}` under `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            json: dir.join(format!("{}.json", Self::STEM)),
            csv: dir.join(format!("{}.csv", Self::STEM)),
            image: dir.join(format!("{}.png", Self::STEM)),
        }
    }
}

impl Default for ArtifactPaths {
    fn default() -> Self {
        Self::in_dir("")
    }
}

#[derive(Debug, Clone)]
pub struct RunOptions {
    pub mode: PipelineMode,
    pub query: IndicatorQuery,
    pub base_url: String,
    pub user_agent: String,
    pub paths: ArtifactPaths,
    /// Encoding of the tabular file, both written and read.
    pub codec: TextCodec,
    /// Open a window after the PNG is saved.
    pub display: bool,
    pub theme: Theme,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            mode: PipelineMode::default(),
            query: IndicatorQuery::default(),
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            paths: ArtifactPaths::default(),
            codec: TextCodec::default(),
            display: true,
            theme: Theme::default(),
        }
    }
}

impl RunOptions {
    /// Cached-mode defaults with every artifact under `dir` and no window.
    pub fn headless_in(dir: impl AsRef<Path>) -> Self {
        Self { paths: ArtifactPaths::in_dir(dir), display: false, ..Self::default() }
    }

    pub fn with_mode(mut self, mode: PipelineMode) -> Self {
        self.mode = mode;
        self
    }
}
