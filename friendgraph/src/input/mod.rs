use anyhow::Result;

mod buffer;
mod file;
mod stdin;

pub use buffer::Buffer;
pub use file::File;
pub use stdin::StdIn;

/// An [Input] supplies the text of a command script to a [crate::Session].
///
/// The whole script is read up front and held in memory. Commands borrow their arguments from
/// it, so the text must outlive the parsed [crate::command::Command]s.
pub trait Input {
    /// Returns the complete script. Implementations may read lazily on first call.
    fn read(&mut self) -> Result<&str>;
}
