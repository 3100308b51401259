use crate::common::config::{DEFAULT_CATALOG_FILE, DEFAULT_TABLE_SIZE};
use crate::common::exception::CatalogError;
use crate::common::logger::initialize_logger;
use crate::common::result_writer::{CliResultWriter, ResultWriter};
use crate::container::course_table::{CourseTable, DuplicatePolicy};
use crate::loader::load_catalog;
use clap::Parser;
use colored::*;
use parking_lot::Mutex;
use rustyline::DefaultEditor;
use std::error::Error;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Catalog file read by the `load` command
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// Number of bucket slots in the course table
    #[arg(short, long)]
    table_size: Option<usize>,
}

/// A menu selection that has already been validated against the known
/// commands. Parsing user input and acting on it are kept separate so the
/// dispatcher only ever sees well-formed commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Load,
    List,
    Find(String),
    Status,
    Help,
    Exit,
}

impl Command {
    /// Parses a REPL line. Returns `None` for input that is not a command.
    pub fn parse(line: &str) -> Option<Command> {
        let mut parts = line.split_whitespace();
        let word = parts.next()?;

        match word.to_lowercase().as_str() {
            "load" => Some(Command::Load),
            "list" => Some(Command::List),
            "find" => parts
                .next()
                .map(|num| Command::Find(normalize_course_num(num))),
            "status" => Some(Command::Status),
            "help" => Some(Command::Help),
            "exit" | "quit" => Some(Command::Exit),
            _ => None,
        }
    }
}

/// Uppercases the letter prefix of a user-entered course number, leaving the
/// trailing digits untouched. Input too short to carry a key passes through
/// unchanged and surfaces as a not-found lookup.
fn normalize_course_num(input: &str) -> String {
    if input.len() > 3 && input.is_char_boundary(input.len() - 3) {
        let (prefix, digits) = input.split_at(input.len() - 3);
        format!("{}{}", prefix.to_uppercase(), digits)
    } else {
        input.to_string()
    }
}

pub struct CommandExecutor {
    table: Arc<Mutex<CourseTable>>,
    catalog_path: PathBuf,
}

impl CommandExecutor {
    pub fn new(table: Arc<Mutex<CourseTable>>, catalog_path: PathBuf) -> Self {
        Self {
            table,
            catalog_path,
        }
    }

    pub fn execute(
        &mut self,
        command: Command,
        writer: &mut impl ResultWriter,
    ) -> Result<(), Box<dyn Error>> {
        match command {
            Command::Load => self.handle_load(writer),
            Command::List => self.handle_list(writer),
            Command::Find(course_num) => self.handle_find(&course_num, writer),
            Command::Status => self.handle_status(writer),
            Command::Help => {
                display_help();
                Ok(())
            }
            Command::Exit => Ok(()),
        }
    }

    fn handle_load(&self, writer: &mut impl ResultWriter) -> Result<(), Box<dyn Error>> {
        let mut table = self.table.lock();
        let summary = load_catalog(&self.catalog_path, &mut table)?;

        writer.write_message(&format!(
            "Loaded {} courses from {} ({} rows skipped)",
            summary.loaded,
            self.catalog_path.display(),
            summary.skipped
        ));
        Ok(())
    }

    fn handle_list(&self, writer: &mut impl ResultWriter) -> Result<(), Box<dyn Error>> {
        let table = self.table.lock();
        let listing = table.list_alphanumeric();

        if listing.is_empty() {
            writer.write_message("The course catalog is empty. Run `load` first.");
            return Ok(());
        }

        writer.write_message("Here is a sample schedule:");
        writer.write_header(vec!["Course".to_string(), "Title".to_string()]);
        for (number, title) in listing {
            writer.write_row(vec![number, title]);
        }
        Ok(())
    }

    fn handle_find(
        &self,
        course_num: &str,
        writer: &mut impl ResultWriter,
    ) -> Result<(), Box<dyn Error>> {
        let table = self.table.lock();

        match table.get(course_num) {
            Ok(Some(course)) => writer.write_message(&format!("{course:#}")),
            // A number the key derivation rejects cannot be in the table, so
            // the session reports it the same way as a miss.
            Ok(None) | Err(CatalogError::InvalidCourseNumber(_)) => {
                writer.write_message(&format!("Course number {course_num} not found."));
            }
            Err(err) => return Err(Box::new(err)),
        }
        Ok(())
    }

    fn handle_status(&self, writer: &mut impl ResultWriter) -> Result<(), Box<dyn Error>> {
        let table = self.table.lock();

        writer.write_header(vec!["Setting".to_string(), "Value".to_string()]);
        writer.write_row(vec![
            "Catalog File".to_string(),
            self.catalog_path.display().to_string(),
        ]);
        writer.write_row(vec![
            "Table Size".to_string(),
            table.table_size().to_string(),
        ]);
        writer.write_row(vec!["Courses Stored".to_string(), table.len().to_string()]);
        writer.write_row(vec![
            "Duplicate Policy".to_string(),
            format!("{:?}", table.duplicate_policy()),
        ]);
        Ok(())
    }
}

fn display_help() {
    println!("\n{}", "Available Commands:".bold());
    println!("  load           - Load the course catalog file into the table");
    println!("  list           - Print every course in alphanumeric order");
    println!("  find <course>  - Print one course with its prerequisites");
    println!("  status         - Show catalog configuration and counts");
    println!("  help           - Show this help message");
    println!("  exit           - Leave the course planner");
}

pub fn run_cli() -> Result<(), Box<dyn Error>> {
    initialize_logger();
    let args = Args::parse();

    let catalog_path = args
        .catalog
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CATALOG_FILE));
    let table_size = args.table_size.unwrap_or(DEFAULT_TABLE_SIZE);

    println!("{}", "\nWelcome to the course planner".blue().bold());
    println!("Type 'help' for commands\n");

    let table = CourseTable::with_table_size(table_size, DuplicatePolicy::default())?;
    let table = Arc::new(Mutex::new(table));
    let mut executor = CommandExecutor::new(Arc::clone(&table), catalog_path);

    let mut rl = DefaultEditor::new()?;
    if rl.load_history("history.txt").is_err() {
        println!("{}", "No previous history.".yellow());
    }

    loop {
        match rl.readline("planner> ") {
            Ok(line) => {
                let input = line.trim();
                if input.is_empty() {
                    continue;
                }

                rl.add_history_entry(input)?;

                match Command::parse(input) {
                    Some(Command::Exit) => break,
                    Some(command) => {
                        let mut writer = CliResultWriter::new();
                        if let Err(e) = executor.execute(command, &mut writer) {
                            println!("{}", format!("Error: {}", e).red());
                        }
                    }
                    None => println!("{} is not a valid option.", input),
                }
            }
            Err(err) => {
                println!("Error: {}", err);
                break;
            }
        }
    }

    rl.save_history("history.txt")?;
    println!("Thank you for using the course planner!");
    Ok(())
}
