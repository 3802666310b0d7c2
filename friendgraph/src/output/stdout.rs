use std::io::{stdout, Write};

use anyhow::Result;

use crate::output::Output;

#[derive(Debug, Default)]
pub struct StdOut {}

impl Output for StdOut {
    fn write_str(&mut self, data: &str) -> Result<()> {
        stdout().write_all(data.as_bytes())?;
        Ok(())
    }

    fn write(&mut self, data: char) -> Result<()> {
        let mut buf = [0; 4];
        stdout().write_all(data.encode_utf8(&mut buf).as_bytes())?;
        Ok(())
    }

    fn newline(&mut self) -> Result<()> {
        stdout().write_all(b"\n")?;
        Ok(())
    }
}
