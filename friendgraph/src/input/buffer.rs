use anyhow::Result;

use crate::input::Input;

/// Holds the script in memory.
#[derive(Debug, Default)]
pub struct Buffer {
    data: String,
}

impl Buffer {
    pub fn new(data: impl ToString) -> Self {
        Self {
            data: data.to_string(),
        }
    }
}

impl Input for Buffer {
    fn read(&mut self) -> Result<&str> {
        Ok(&self.data)
    }
}
