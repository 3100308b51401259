use colored::Colorize;
use prettytable::{format, Cell, Row, Table};

/// Trait for writing command results in a tabular format
pub trait ResultWriter {
    fn write_header(&mut self, headers: Vec<String>);
    fn write_row(&mut self, cells: Vec<String>);
    fn write_message(&mut self, message: &str);
}

#[derive(Default)]
pub struct CliResultWriter {
    table: Option<Table>,
    headers: Vec<String>,
}

impl CliResultWriter {
    pub fn new() -> Self {
        Self::default()
    }

    fn ensure_table(&mut self) {
        if self.table.is_none() {
            let mut table = Table::new();
            table.set_format(*format::consts::FORMAT_BOX_CHARS);

            // Add headers if they exist
            if !self.headers.is_empty() {
                table.set_titles(Row::new(
                    self.headers
                        .iter()
                        .map(|h| Cell::new(&h.bold().to_string()))
                        .collect(),
                ));
            }

            self.table = Some(table);
        }
    }

    fn flush_table(&mut self) {
        if let Some(table) = self.table.take() {
            table.printstd();
            println!(); // Add spacing
        }
    }
}

impl ResultWriter for CliResultWriter {
    fn write_header(&mut self, headers: Vec<String>) {
        self.headers = headers;
        self.table = None; // Reset table to create new one with headers
        self.ensure_table();
    }

    fn write_row(&mut self, cells: Vec<String>) {
        self.ensure_table();

        if let Some(table) = self.table.as_mut() {
            table.add_row(Row::new(cells.iter().map(|c| Cell::new(c)).collect()));
        }
    }

    fn write_message(&mut self, message: &str) {
        // Flush any existing table before plain text
        self.flush_table();
        println!("{}", message);
    }
}

impl Drop for CliResultWriter {
    fn drop(&mut self) {
        // Print any remaining table
        self.flush_table();
    }
}

/// Result writer that buffers everything it is handed, for non-interactive
/// callers and test assertions.
#[derive(Default)]
pub struct BufferedResultWriter {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    messages: Vec<String>,
}

impl BufferedResultWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }
}

impl ResultWriter for BufferedResultWriter {
    fn write_header(&mut self, headers: Vec<String>) {
        self.headers = headers;
    }

    fn write_row(&mut self, cells: Vec<String>) {
        self.rows.push(cells);
    }

    fn write_message(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}
