use crate::core::{collector, display, engine};
use crate::domain::model::RateTable;
use crate::domain::ports::Console;
use crate::utils::error::Result;

/// Drives the interactive loop: list currencies, collect a request, convert,
/// present, then ask whether to go again. The rate table lives for the whole
/// session; every recoverable validation failure is absorbed inside the
/// collector loops, so the only exits are the user's "no" and console I/O
/// failure.
pub struct Session<C: Console> {
    table: RateTable,
    console: C,
}

impl<C: Console> Session<C> {
    pub fn new(table: RateTable, console: C) -> Self {
        Self { table, console }
    }

    pub fn run(&mut self) -> Result<()> {
        self.console
            .write_line("Welcome to the Simple Currency Converter!")?;

        loop {
            display::list_currencies(&mut self.console, &self.table)?;
            let request = collector::collect_request(&mut self.console, &self.table)?;
            tracing::debug!(
                amount = request.amount,
                from = %request.from,
                to = %request.to,
                "collected conversion request"
            );

            match engine::convert(&request, &self.table) {
                Ok(converted) => {
                    display::present_result(&mut self.console, &request, converted)?;
                }
                Err(e) => {
                    // No result line; fall through to the repeat prompt.
                    tracing::warn!("conversion failed: {}", e);
                    self.console.write_line(&collector::diagnostic(&e))?;
                }
            }

            if !collector::ask_repeat(&mut self.console)? {
                self.console
                    .write_line("Thank you for using the Currency Converter. Goodbye!")?;
                return Ok(());
            }
        }
    }

    /// Hands the console back so callers can inspect what was written.
    pub fn into_console(self) -> C {
        self.console
    }
}
