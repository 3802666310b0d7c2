use anyhow::Result;

mod buffer;
mod stdout;

pub use buffer::Buffer;
pub use stdout::StdOut;

/// Destination for everything a [crate::Session] reports.
pub trait Output {
    fn write_str(&mut self, data: &str) -> Result<()>;

    fn write(&mut self, data: char) -> Result<()>;

    fn newline(&mut self) -> Result<()>;

    fn write_line(&mut self, data: &str) -> Result<()> {
        self.write_str(data)?;
        self.newline()
    }
}
