//! Cell classification for drawing the board

use super::config::GameConfig;
use super::state::{GameState, Position};

/// What occupies a single board cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellType {
    #[default]
    Empty,
    Snake,
    Food,
}

/// Snapshot of every cell on the board, stored row by row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<CellType>,
}

impl Grid {
    /// Classify every cell of the configured board for `state`.
    ///
    /// Food is drawn over snake when both share a cell.
    pub fn classify(state: &GameState, config: &GameConfig) -> Self {
        let (width, height) = (config.grid_width, config.grid_height);
        let mut cells = vec![CellType::Empty; width * height];

        for &pos in &state.snake.body {
            if let Some(idx) = index(width, height, pos) {
                cells[idx] = CellType::Snake;
            }
        }
        for &pos in &state.food {
            if let Some(idx) = index(width, height, pos) {
                cells[idx] = CellType::Food;
            }
        }

        Self {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Cell at `pos`, or `None` off the board
    pub fn cell(&self, pos: Position) -> Option<CellType> {
        index(self.width, self.height, pos).map(|idx| self.cells[idx])
    }

    /// Rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[CellType]> {
        self.cells.chunks(self.width.max(1))
    }

    pub fn count(&self, kind: CellType) -> usize {
        self.cells.iter().filter(|&&cell| cell == kind).count()
    }
}

fn index(width: usize, height: usize, pos: Position) -> Option<usize> {
    if pos.x < 0 || pos.y < 0 {
        return None;
    }
    let (x, y) = (pos.x as usize, pos.y as usize);
    (x < width && y < height).then_some(y * width + x)
}
