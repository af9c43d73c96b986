use anyhow::Context;
use std::future::Future;
use std::io::Write;
use std::ops::ControlFlow;
use std::pin::Pin;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, Lines};

use super::command::ConsoleCommand;
use crate::adapters::outbound::formatters::{TableFormatter, TABLE_HEADER_LINES};
use crate::application::dto::{AddItemRequest, ConsumeRequest, ListItemsRequest};
use crate::application::use_cases::{AddItemUseCase, ConsumeItemUseCase, ListItemsUseCase};
use crate::inventory::domain::format_date;
use crate::ports::outbound::{Clock, InventoryRepository, ListingFormatter, TerminalInfo};
use crate::shared::error::InventoryError;
use crate::shared::Result;

const PROMPT: &str = "> ";
const DATE_PROMPT: &str = "Best before (YYYY-MM-DD)? > ";

const HELP: &str = "\
Commands:
  fill      scan codes to add items
  consume   scan codes to take from items
  list      show the items in stock
  help      show this help
  <code>    a product code (8 to 15 digits)";

/// What a scanned code does
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConsoleMode {
    #[default]
    Consume,
    Fill,
}

/// ConsoleSession - the interactive loop behind `freezer console`
///
/// Reads one command per line, runs it against the inventory and redraws
/// the stock table after every change. Inventory errors are printed and
/// the loop keeps going; only end of input, an interrupt or a broken
/// output stream end the session.
///
/// # Type Parameters
/// * `R` - InventoryRepository implementation
/// * `C` - Clock implementation
/// * `T` - TerminalInfo implementation
/// * `W` - where prompts and tables are written
pub struct ConsoleSession<'a, R, C, T, W> {
    repository: &'a R,
    clock: &'a C,
    terminal: &'a T,
    out: W,
    mode: ConsoleMode,
    consume_amount: i64,
    formatter: TableFormatter,
}

impl<'a, R, C, T, W> ConsoleSession<'a, R, C, T, W>
where
    R: InventoryRepository,
    C: Clock,
    T: TerminalInfo,
    W: Write,
{
    pub fn new(repository: &'a R, clock: &'a C, terminal: &'a T, out: W) -> Self {
        Self {
            repository,
            clock,
            terminal,
            out,
            mode: ConsoleMode::default(),
            consume_amount: crate::config::DEFAULT_CONSUME_PERCENT,
            formatter: TableFormatter::new(),
        }
    }

    /// Percent taken per scanned code in consume mode.
    pub fn with_consume_amount(mut self, amount: i64) -> Self {
        self.consume_amount = amount;
        self
    }

    pub fn mode(&self) -> ConsoleMode {
        self.mode
    }

    /// Runs until `input` is exhausted or `shutdown` completes.
    ///
    /// # Errors
    /// Only I/O failures on `input` or the output stream end the session
    /// with an error.
    pub async fn run<I, S>(&mut self, input: I, shutdown: S) -> Result<()>
    where
        I: AsyncBufRead + Unpin,
        S: Future,
    {
        let mut lines = input.lines();
        tokio::pin!(shutdown);

        writeln!(self.out, "{}", HELP)?;
        self.show_list().await?;

        loop {
            self.prompt(PROMPT)?;
            let Some(line) = next_line(&mut lines, shutdown.as_mut()).await? else {
                break;
            };

            if self
                .handle_line(&line, &mut lines, shutdown.as_mut())
                .await?
                .is_break()
            {
                break;
            }
        }

        writeln!(self.out)?;
        self.out.flush()?;
        tracing::debug!("console session ended");
        Ok(())
    }

    async fn handle_line<I, S>(
        &mut self,
        line: &str,
        lines: &mut Lines<I>,
        shutdown: Pin<&mut S>,
    ) -> Result<ControlFlow<()>>
    where
        I: AsyncBufRead + Unpin,
        S: Future,
    {
        match ConsoleCommand::parse(line) {
            ConsoleCommand::Empty => {}
            ConsoleCommand::Help => writeln!(self.out, "{}", HELP)?,
            ConsoleCommand::List => self.show_list().await?,
            ConsoleCommand::Fill => {
                self.mode = ConsoleMode::Fill;
                writeln!(self.out, "Fill mode.")?;
            }
            ConsoleCommand::Consume => {
                self.mode = ConsoleMode::Consume;
                writeln!(self.out, "Consume mode.")?;
            }
            ConsoleCommand::Code(code) => match self.mode {
                ConsoleMode::Fill => {
                    self.prompt(DATE_PROMPT)?;
                    let Some(answer) = next_line(lines, shutdown).await? else {
                        return Ok(ControlFlow::Break(()));
                    };
                    self.fill(&code, &answer).await?;
                }
                ConsoleMode::Consume => self.consume(&code).await?,
            },
            ConsoleCommand::Unknown(token) => {
                tracing::debug!(%token, "unknown console command");
                writeln!(self.out, "Unknown command.")?;
            }
        }

        Ok(ControlFlow::Continue(()))
    }

    async fn fill(&mut self, code: &str, best_before: &str) -> Result<()> {
        let request = AddItemRequest::new(code, best_before);
        match AddItemUseCase::new(self.repository).execute(request).await {
            Ok(stocked) => {
                writeln!(
                    self.out,
                    "Added {} (best before {}).",
                    stocked.product_name,
                    format_date(stocked.item.best_before())
                )?;
                self.show_list().await
            }
            Err(e) => self.report(e),
        }
    }

    async fn consume(&mut self, code: &str) -> Result<()> {
        let request = ConsumeRequest::new(code, self.consume_amount);
        match ConsumeItemUseCase::new(self.repository, self.clock)
            .execute(request)
            .await
        {
            Ok(item) => {
                writeln!(
                    self.out,
                    "Took {}% of {}, {} left.",
                    self.consume_amount,
                    item.gtin(),
                    item.fill_status()
                )?;
                self.show_list().await
            }
            Err(e) => self.report(e),
        }
    }

    async fn show_list(&mut self) -> Result<()> {
        let rows = self
            .terminal
            .rows()
            .saturating_sub(TABLE_HEADER_LINES + 1)
            .max(1);

        match ListItemsUseCase::new(self.repository)
            .execute(ListItemsRequest::limited(rows))
            .await
            .and_then(|items| self.formatter.format(&items))
        {
            Ok(table) => {
                write!(self.out, "{}", table)?;
                Ok(())
            }
            Err(e) => self.report(e),
        }
    }

    /// Prints a failed operation. Only output errors propagate.
    fn report(&mut self, error: anyhow::Error) -> Result<()> {
        match error.downcast_ref::<InventoryError>() {
            Some(rejection) => {
                tracing::debug!(%rejection, "operation rejected");
                writeln!(self.out, "{}", rejection)?;
            }
            None => {
                tracing::error!(error = %format!("{:#}", error), "storage operation failed");
                writeln!(self.out, "Error: {:#}", error)?;
            }
        }
        Ok(())
    }

    fn prompt(&mut self, text: &str) -> Result<()> {
        write!(self.out, "{}", text)?;
        self.out.flush()?;
        Ok(())
    }
}

/// Next input line, or `None` on end of input or interrupt.
async fn next_line<I, S>(lines: &mut Lines<I>, shutdown: Pin<&mut S>) -> Result<Option<String>>
where
    I: AsyncBufRead + Unpin,
    S: Future,
{
    tokio::select! {
        line = lines.next_line() => line.context("Failed to read console input"),
        _ = shutdown => {
            tracing::info!("interrupted, leaving console");
            Ok(None)
        }
    }
}
