use crate::utils::error::Result;

/// Line-oriented terminal port. The session loop, collector and presenters
/// talk to this instead of stdin/stdout directly, so a whole session can be
/// driven from a scripted console in tests.
pub trait Console {
    /// Blocks until a full line is available. The trailing newline is
    /// stripped; end-of-input is an error, not an empty line.
    fn read_line(&mut self) -> Result<String>;
    fn write_line(&mut self, line: &str) -> Result<()>;
}

pub trait ConfigProvider {
    fn rates_file(&self) -> Option<&str>;
    fn verbose(&self) -> bool;
}
