// UI layer: prints the numbered menu, reads the selection and hands the
// request to the catalog service. One operation per run.
//
// On a terminal the prompts go through `dialoguer`; when stdin is piped
// the answers are read line by line instead, since the terminal prompt
// cannot read from a pipe.

use crate::config::{Config, OutputMode};
use crate::error::{CatalogError, MenuError};
use crate::model::Book;
use crate::service::{BookService, BookSource};
use crate::table::render_books;
use anyhow::Result;
use dialoguer::Input;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, BufRead, IsTerminal, Write};
use std::str::FromStr;
use std::time::Duration;
use tracing::warn;

pub const MENU: &str = "Select from the below given options:
1. List of Books
2. Sort by Author
3. Search by Title";

/// The three operations offered by the menu, numbered as shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    ListBooks = 1,
    SortByAuthor = 2,
    SearchByTitle = 3,
}

impl MenuOption {
    const ALL: [MenuOption; 3] = [
        MenuOption::ListBooks,
        MenuOption::SortByAuthor,
        MenuOption::SearchByTitle,
    ];
}

impl TryFrom<i64> for MenuOption {
    type Error = i64;

    fn try_from(number: i64) -> Result<Self, Self::Error> {
        MenuOption::ALL
            .into_iter()
            .find(|option| *option as i64 == number)
            .ok_or(number)
    }
}

impl FromStr for MenuOption {
    type Err = MenuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .ok()
            .and_then(|number| MenuOption::try_from(number).ok())
            .ok_or_else(|| MenuError::InvalidSelection(s.trim().to_string()))
    }
}

/// What the user asked for, with the search term when there is one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    List,
    SortByAuthor,
    SearchByTitle(String),
}

/// Source of answers to the menu prompts.
pub trait Prompter {
    /// Show `prompt` and return the line typed in reply, without the
    /// line ending. Empty answers are allowed.
    fn ask(&mut self, prompt: &str) -> io::Result<String>;
}

/// Terminal prompts through `dialoguer`.
pub struct TermPrompter;

impl Prompter for TermPrompter {
    fn ask(&mut self, prompt: &str) -> io::Result<String> {
        Input::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
    }
}

/// Plain line reads, used when stdin is not a terminal.
pub struct LinePrompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    /// Read answers from `input`, writing prompts to `output`.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn ask(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.output, "{prompt}: ")?;
        self.output.flush()?;

        // End of input reads as an empty answer.
        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(line.trim_end_matches(&['\r', '\n'][..]).to_string())
    }
}

/// True when dialoguer can drive the prompts: both stdin and stdout are
/// attached to a terminal.
pub fn is_interactive() -> bool {
    console::user_attended() && io::stdin().is_terminal()
}

/// Ask for the menu selection and, for a search, the title query.
pub fn read_request<P: Prompter>(prompter: &mut P) -> Result<Request, MenuError> {
    let option: MenuOption = prompter.ask("Input")?.parse()?;
    let request = match option {
        MenuOption::ListBooks => Request::List,
        MenuOption::SortByAuthor => Request::SortByAuthor,
        // An empty title matches every book.
        MenuOption::SearchByTitle => Request::SearchByTitle(prompter.ask("Title")?),
    };
    Ok(request)
}

/// Run the selected request against the service.
pub fn dispatch<S: BookSource>(
    service: &BookService<S>,
    request: &Request,
) -> Result<Vec<Book>, CatalogError> {
    match request {
        Request::List => service.fetch_catalog(),
        Request::SortByAuthor => service.sort_by_author(),
        Request::SearchByTitle(query) => service.search_by_title(query),
    }
}

/// Main interactive flow: menu, optional search prompt, fetch, table.
///
/// Invalid selections and retrieval failures are printed and the
/// function still returns `Ok`; only input I/O errors escape.
pub fn main_menu<S: BookSource, P: Prompter>(
    service: &BookService<S>,
    config: &Config,
    prompter: &mut P,
) -> Result<()> {
    println!("{}", MENU);
    let request = match read_request(prompter) {
        Ok(request) => request,
        Err(MenuError::Input(e)) => return Err(e.into()),
        Err(e) => {
            warn!("error while parsing user input: {e}");
            println!("Enter a valid choice ({e})");
            return Ok(());
        }
    };

    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message("Fetching books...");
    spinner.enable_steady_tick(Duration::from_millis(100));
    let result = dispatch(service, &request);
    spinner.finish_and_clear();

    match result {
        Ok(books) => print_books(&books, config.output, config.description_width),
        Err(e) => println!("Could not load books: {}", e),
    }
    Ok(())
}

fn print_books(books: &[Book], mode: OutputMode, description_width: usize) {
    println!("{}", render_books(books, mode, description_width));
}
