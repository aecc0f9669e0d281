//! Terminal implementation of the view port.

use std::io::{self, BufRead, StdinLock, Stdout, Write};

use tracing::warn;

use crate::{
    board::BOARD_SIZE,
    ports::{BoardView, CellView},
};

/// Draws the grid as text and reads acknowledgements from a line reader.
///
/// Empty cells show their index so the user knows what to type.
///
/// ```text
///  A │ 1 │ 2
/// ───┼───┼───
///  3 │ B │ 5
/// ───┼───┼───
///  6 │ 7 │ 8
///
/// Current Player: A
/// ```
pub struct TerminalView<R, W> {
    input: R,
    output: W,
    cells: [CellView; BOARD_SIZE],
    status: String,
}

impl TerminalView<StdinLock<'static>, Stdout> {
    /// View bound to the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalView<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            cells: Default::default(),
            status: String::new(),
        }
    }

    /// Print `prompt` and read one trimmed line. `None` at end of input.
    pub fn prompt(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        self.read_line()
    }

    /// Print a plain line below the board.
    pub fn say(&mut self, line: &str) {
        if let Err(err) = writeln!(self.output, "{line}") {
            warn!(error = %err, "failed to write to terminal");
        }
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn cell_text(index: usize, cell: &CellView) -> String {
        if cell.taken {
            cell.label.clone()
        } else {
            index.to_string()
        }
    }

    fn draw(&mut self) -> io::Result<()> {
        writeln!(self.output)?;
        for row in 0..3 {
            let texts: Vec<String> = (0..3)
                .map(|col| {
                    let index = row * 3 + col;
                    Self::cell_text(index, &self.cells[index])
                })
                .collect();
            writeln!(self.output, " {} │ {} │ {}", texts[0], texts[1], texts[2])?;
            if row < 2 {
                writeln!(self.output, "───┼───┼───")?;
            }
        }
        writeln!(self.output)?;
        writeln!(self.output, "{}", self.status)?;
        self.output.flush()
    }
}

impl<R: BufRead, W: Write> BoardView for TerminalView<R, W> {
    fn paint_cell(&mut self, index: usize, cell: &CellView) {
        if let Some(slot) = self.cells.get_mut(index) {
            *slot = cell.clone();
        }
    }

    fn set_status(&mut self, status: &str) {
        self.status = status.to_string();
    }

    fn notify(&mut self, message: &str) {
        let shown = writeln!(self.output, "! {message}")
            .and_then(|_| write!(self.output, "(press Enter to continue)"))
            .and_then(|_| self.output.flush());
        if let Err(err) = shown.and_then(|_| self.read_line().map(|_| ())) {
            warn!(error = %err, "failed to show notification");
        }
    }

    fn present(&mut self) {
        if let Err(err) = self.draw() {
            warn!(error = %err, "failed to draw board");
        }
    }
}
