//! In-memory view for testing.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::{
    board::BOARD_SIZE,
    ports::{BoardView, CellView},
};

#[derive(Debug, Default)]
struct Record {
    cells: [CellView; BOARD_SIZE],
    status: String,
    notifications: Vec<String>,
    paints: usize,
    presents: usize,
}

/// View that remembers what was drawn instead of drawing it.
///
/// Clones share the same record, like [`super::ScriptedGameService`].
#[derive(Debug, Clone, Default)]
pub struct RecordingView {
    record: Arc<Mutex<Record>>,
}

impl RecordingView {
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&self) -> MutexGuard<'_, Record> {
        self.record.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn cell(&self, index: usize) -> CellView {
        self.record().cells.get(index).cloned().unwrap_or_default()
    }

    pub fn cells(&self) -> Vec<CellView> {
        self.record().cells.to_vec()
    }

    /// Taken flags of all nine cells, in grid order.
    pub fn occupancy(&self) -> [bool; BOARD_SIZE] {
        let record = self.record();
        std::array::from_fn(|i| record.cells[i].taken)
    }

    pub fn status(&self) -> String {
        self.record().status.clone()
    }

    pub fn notifications(&self) -> Vec<String> {
        self.record().notifications.clone()
    }

    /// Number of individual cell paints.
    pub fn paint_count(&self) -> usize {
        self.record().paints
    }

    /// Number of completed repaints.
    pub fn present_count(&self) -> usize {
        self.record().presents
    }
}

impl BoardView for RecordingView {
    fn paint_cell(&mut self, index: usize, cell: &CellView) {
        let mut record = self.record();
        if let Some(slot) = record.cells.get_mut(index) {
            *slot = cell.clone();
        }
        record.paints += 1;
    }

    fn set_status(&mut self, status: &str) {
        self.record().status = status.to_string();
    }

    fn notify(&mut self, message: &str) {
        self.record().notifications.push(message.to_string());
    }

    fn present(&mut self) {
        self.record().presents += 1;
    }
}
