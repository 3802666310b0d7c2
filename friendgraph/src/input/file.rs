use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::input::Input;

/// Reads a script file on first use.
#[derive(Debug)]
pub struct File {
    path: PathBuf,
    data: Option<String>,
}

impl File {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            data: None,
        }
    }
}

impl Input for File {
    fn read(&mut self) -> Result<&str> {
        if self.data.is_none() {
            let data = fs::read_to_string(&self.path)
                .with_context(|| format!("read script '{}'", self.path.display()))?;
            self.data = Some(data);
        }
        Ok(self.data.as_deref().unwrap_or_default())
    }
}
