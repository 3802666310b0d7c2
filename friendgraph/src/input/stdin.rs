use std::io::{stdin, Read};

use anyhow::{Context, Result};

use crate::input::Input;

/// Reads stdin to the end on first use.
#[derive(Debug, Default)]
pub struct StdIn {
    data: Option<String>,
}

impl StdIn {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Input for StdIn {
    fn read(&mut self) -> Result<&str> {
        if self.data.is_none() {
            let mut data = String::new();
            stdin().read_to_string(&mut data).context("read stdin")?;
            self.data = Some(data);
        }
        Ok(self.data.as_deref().unwrap_or_default())
    }
}
