// Mon Oct 19 2026 - Alex

use crate::error::{TraceError, TraceResult};
use crate::ui::errors::trace::DEFAULT_MAX_DEPTH;
use crate::ui::io::Verbosity;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub width: Option<usize>,
    pub verbosity: Verbosity,
    pub decorated: Option<bool>,
    pub working_dir: Option<PathBuf>,
    pub max_chain_depth: usize,
    pub log_level: Option<String>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: None,
            verbosity: Verbosity::Quiet,
            decorated: None,
            working_dir: None,
            max_chain_depth: DEFAULT_MAX_DEPTH,
            log_level: None,
        }
    }
}

impl RenderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load(path: &Path) -> TraceResult<Self> {
        let text = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }

    pub fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    pub fn with_decorated(mut self, decorated: bool) -> Self {
        self.decorated = Some(decorated);
        self
    }

    pub fn with_working_dir(mut self, dir: PathBuf) -> Self {
        self.working_dir = Some(dir);
        self
    }

    pub fn with_max_chain_depth(mut self, depth: usize) -> Self {
        self.max_chain_depth = depth;
        self
    }

    pub fn with_log_level(mut self, level: String) -> Self {
        self.log_level = Some(level);
        self
    }

    pub fn validate(&self) -> TraceResult<()> {
        if let Some(width) = self.width {
            if width < 10 {
                return Err(TraceError::InvalidConfig(format!(
                    "width must be at least 10 columns, got {}",
                    width
                )));
            }
        }
        if self.max_chain_depth == 0 {
            return Err(TraceError::InvalidConfig(
                "max_chain_depth must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}
