//! View port - the visual surface the controller paints onto

use crate::board::Cell;

/// Everything needed to paint one cell.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CellView {
    /// Visible text: the mark's symbol, or empty
    pub label: String,
    /// Set for cells holding a mark
    pub taken: bool,
    /// Per-mark style class (lowercase mark), absent for empty cells
    pub class: Option<String>,
}

impl From<Cell> for CellView {
    fn from(cell: Cell) -> Self {
        match cell {
            Cell::Empty => CellView::default(),
            Cell::Marked(mark) => CellView {
                label: mark.to_string(),
                taken: true,
                class: Some(mark.style_class()),
            },
        }
    }
}

/// A 9-cell grid with a status line and a way to alert the user.
///
/// Implementations only draw; they never decide what to draw.
pub trait BoardView {
    /// Repaint the cell at `index` (0-8).
    fn paint_cell(&mut self, index: usize, cell: &CellView);

    /// Replace the status line.
    fn set_status(&mut self, status: &str);

    /// Show `message` and block until the user acknowledges it.
    fn notify(&mut self, message: &str);

    /// Called once after a full repaint. Surfaces that buffer output can
    /// flush here.
    fn present(&mut self) {}
}

impl<T: BoardView + ?Sized> BoardView for Box<T> {
    fn paint_cell(&mut self, index: usize, cell: &CellView) {
        (**self).paint_cell(index, cell)
    }

    fn set_status(&mut self, status: &str) {
        (**self).set_status(status)
    }

    fn notify(&mut self, message: &str) {
        (**self).notify(message)
    }

    fn present(&mut self) {
        (**self).present()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Mark;

    #[test]
    fn test_empty_cell_view() {
        let view = CellView::from(Cell::Empty);
        assert_eq!(view.label, "");
        assert!(!view.taken);
        assert_eq!(view.class, None);
    }

    #[test]
    fn test_marked_cell_view() {
        let view = CellView::from(Cell::Marked(Mark::A));
        assert_eq!(view.label, "A");
        assert!(view.taken);
        assert_eq!(view.class.as_deref(), Some("a"));
    }
}
