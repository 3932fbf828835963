//! Interactive table loop.

use artic_lib::api::PageSource;
use artic_lib::error::ValidationError;
use artic_lib::model::Artwork;
use artic_lib::session::LoadOutcome;
use artic_lib::session::TableSession;
use log::info;
use tokio::io::AsyncBufReadExt;
use tokio::io::BufReader;

use crate::commands::Command;
use crate::commands::HELP;
use crate::render;

/// Reads commands from stdin and drives one table session.
pub struct App<S: PageSource<Record = Artwork>> {
    session: TableSession<S>,
}

impl<S: PageSource<Record = Artwork>> App<S> {
    pub fn new(session: TableSession<S>) -> Self {
        Self { session }
    }

    /// Loads `start_page` and processes commands until `quit` or end of input.
    pub async fn run(mut self, start_page: u32) -> std::io::Result<()> {
        let rows = self.session.rows_per_page();
        let outcome = self.session.load(start_page, rows).await;
        self.report(outcome);

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Some(line) = lines.next_line().await? {
            let command = match Command::parse(&line) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(e) => {
                    println!("{e}");
                    continue;
                }
            };

            if command == Command::Quit {
                break;
            }
            self.execute(command).await;
        }

        info!(
            "Exiting with {} artworks selected",
            self.session.selection().len()
        );
        Ok(())
    }

    async fn execute(&mut self, command: Command) {
        match command {
            Command::Next => {
                let outcome = self.session.next_page().await;
                self.report(outcome);
            }
            Command::Prev => {
                if !self.session.has_prev() {
                    println!("already on the first page");
                    return;
                }
                let outcome = self.session.prev_page().await;
                self.report(outcome);
            }
            Command::Goto(page) => {
                let rows = self.session.rows_per_page();
                let outcome = self.session.load(page, rows).await;
                self.report(outcome);
            }
            Command::Rows(rows) => {
                let outcome = self.session.set_rows_per_page(rows).await;
                self.report(outcome);
            }
            Command::Refresh => {
                let outcome = self.session.refetch().await;
                self.report(outcome);
            }
            Command::Toggle(rows) => {
                for row in rows {
                    if self.session.toggle_row(row).is_none() {
                        println!("no row {} on this page", row + 1);
                    }
                }
                println!("{}", render::page(&self.session));
            }
            Command::Set(rows) => {
                self.session.set_page_selection(&rows);
                println!("{}", render::page(&self.session));
            }
            Command::AutoSelect(count) => {
                let now = self.session.request_auto_select(count);
                info!("Auto-select {}: {} selected on page {}", count, now, self.session.page());
                println!("{}", render::page(&self.session));
            }
            Command::Clear => {
                self.session.clear_selection();
                println!("{}", render::status(&self.session));
            }
            Command::Selected => println!("{}", render::selection(self.session.selection())),
            Command::Help => println!("{HELP}"),
            Command::Quit => {}
        }
    }

    fn report(&self, outcome: Result<LoadOutcome, ValidationError>) {
        match outcome {
            Ok(LoadOutcome::Loaded(_)) => println!("{}", render::page(&self.session)),
            Ok(LoadOutcome::Stale) => {}
            Ok(LoadOutcome::Failed(e)) => {
                println!("page failed to load: {e}");
                if e.is_retryable() {
                    println!("type `refresh` to try again");
                }
            }
            Err(e) => println!("{e}"),
        }
    }
}
