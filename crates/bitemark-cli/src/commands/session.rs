//! Interactive bookmarking session
//!
//! Reads one command per line and applies it to a single in-memory
//! `BookmarkStore`, so bookmarks live for the whole session:
//!
//! ```text
//! list              show all cards
//! show <id>         show one card
//! toggle <id>       bookmark or un-bookmark a restaurant
//! open <id>         activate a card
//! bookmarks         list bookmarked restaurants
//! help              show this help
//! quit              leave the session
//! ```

use std::cell::RefCell;
use std::io::{self, BufRead, Write};
use std::rc::Rc;

use anyhow::{bail, Result};
use tracing::{debug, info};

use bitemark_core::{BookmarkChange, BookmarkStore, Catalog, PosterResolver};

use super::cards::render;
use super::find_card;
use crate::output::Output;

const HELP: &str = "\
Commands:
  list          show all cards
  show <id>     show one card
  toggle <id>   bookmark or un-bookmark a restaurant
  open <id>     activate a card
  bookmarks     list bookmarked restaurants
  help          show this help
  quit          leave the session";

/// A parsed session command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    List,
    Show(String),
    Toggle(String),
    Open(String),
    Bookmarks,
    Help,
    Quit,
}

impl SessionCommand {
    /// Parse a single input line
    ///
    /// Returns `Ok(None)` for blank lines.
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let mut parts = line.split_whitespace();
        let Some(verb) = parts.next() else {
            return Ok(None);
        };
        let arg = parts.next();

        if parts.next().is_some() {
            bail!("Too many arguments: '{}'", line.trim());
        }

        let command = match (verb.to_lowercase().as_str(), arg) {
            ("list" | "ls", None) => SessionCommand::List,
            ("bookmarks" | "bm", None) => SessionCommand::Bookmarks,
            ("help" | "?", None) => SessionCommand::Help,
            ("quit" | "exit" | "q", None) => SessionCommand::Quit,
            ("show", Some(id)) => SessionCommand::Show(id.to_string()),
            ("toggle" | "t", Some(id)) => SessionCommand::Toggle(id.to_string()),
            ("open" | "o", Some(id)) => SessionCommand::Open(id.to_string()),
            ("show" | "toggle" | "t" | "open" | "o", None) => {
                bail!("'{}' needs a restaurant id", verb)
            }
            (_, _) => bail!("Unknown command: '{}'. Type 'help' for commands.", line.trim()),
        };
        Ok(Some(command))
    }
}

/// One session over a catalog and a shared bookmark store
pub struct Session<'a> {
    catalog: &'a Catalog,
    resolver: &'a dyn PosterResolver,
    output: &'a Output,
    store: BookmarkStore,
    /// Changes published by the store since the last command
    pending: Rc<RefCell<Vec<BookmarkChange>>>,
}

impl<'a> Session<'a> {
    pub fn new(catalog: &'a Catalog, resolver: &'a dyn PosterResolver, output: &'a Output) -> Self {
        let mut store = BookmarkStore::new();
        let pending = Rc::new(RefCell::new(Vec::new()));

        let sink = Rc::clone(&pending);
        store.subscribe(move |change: &BookmarkChange| {
            info!(?change, "bookmarks changed");
            sink.borrow_mut().push(change.clone());
        });

        Self {
            catalog,
            resolver,
            output,
            store,
            pending,
        }
    }

    pub fn store(&self) -> &BookmarkStore {
        &self.store
    }

    /// Run a command; returns `false` when the session should end
    pub fn execute(&mut self, command: SessionCommand) -> Result<bool> {
        debug!(?command, "session command");
        match command {
            SessionCommand::List => {
                let cards = render(self.catalog, &self.store, self.resolver, false);
                self.output.print_cards(&cards);
            }
            SessionCommand::Show(id) => {
                let card = find_card(self.catalog, &id)?;
                self.output
                    .print_card(&card.display_model(&self.store, self.resolver));
            }
            SessionCommand::Toggle(id) => {
                let card = find_card(self.catalog, &id)?;
                card.toggle_bookmark(&mut self.store);
            }
            SessionCommand::Open(id) => {
                let card = find_card(self.catalog, &id)?;
                card.on_activate(self.output);
            }
            SessionCommand::Bookmarks => {
                let cards = render(self.catalog, &self.store, self.resolver, true);
                self.output.print_bookmarks(&cards);
            }
            SessionCommand::Help => self.output.message(HELP),
            SessionCommand::Quit => return Ok(false),
        }

        self.report_changes();
        Ok(true)
    }

    /// Drain and print the changes the store published
    fn report_changes(&self) {
        let changes: Vec<_> = self.pending.borrow_mut().drain(..).collect();
        for change in changes {
            match change {
                BookmarkChange::Added(id) => self.output.bookmark_changed(&id, true),
                BookmarkChange::Removed(id) => self.output.bookmark_changed(&id, false),
            }
        }
    }

    /// Process input until `quit` or end of input
    ///
    /// Bad commands are reported and the session continues.
    pub fn run_with<R: BufRead>(&mut self, input: R, prompt: bool) -> Result<()> {
        self.output.message(&format!(
            "{} restaurant(s) loaded. Type 'help' for commands.",
            self.catalog.len()
        ));

        let mut lines = input.lines();
        loop {
            if prompt {
                print!("bitemark> ");
                io::stdout().flush()?;
            }

            let Some(line) = lines.next() else {
                break;
            };
            let line = line?;

            let keep_going = match SessionCommand::parse(&line) {
                Ok(None) => true,
                Ok(Some(command)) => self.execute(command).unwrap_or_else(|e| {
                    self.output.error(&e.to_string());
                    true
                }),
                Err(e) => {
                    self.output.error(&e.to_string());
                    true
                }
            };

            if !keep_going {
                break;
            }
        }

        info!(bookmarks = self.store().len(), "session ended");
        Ok(())
    }
}

/// Run an interactive session on stdin
pub fn run(catalog: &Catalog, resolver: &dyn PosterResolver, output: &Output) -> Result<()> {
    let prompt = output.is_human() && atty::is(atty::Stream::Stdin);
    let stdin = io::stdin();
    Session::new(catalog, resolver, output).run_with(stdin.lock(), prompt)
}
