use crate::domain::ports::ConfigProvider;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "fx-converter")]
#[command(about = "Interactive currency converter over a fixed exchange-rate table")]
pub struct CliConfig {
    /// TOML file with a base code and a [rates] table; builtin rates when omitted
    #[arg(long)]
    pub rates_file: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn rates_file(&self) -> Option<&str> {
        self.rates_file.as_deref()
    }

    fn verbose(&self) -> bool {
        self.verbose
    }
}
