//! Grid adapter
//!
//! Builds a graph from a rectangular grid of cells. Each cell becomes a
//! vertex; every pair of adjacent cells not separated by a wall gets one
//! directed edge each way, weighted by the grid.

pub mod grid;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{GraphError, Result};
use crate::graph::{GraphBuilder, WeightedGraph};

pub use grid::{MazeGrid, MazeSpec, WallSpec, WeightSpec};

/// Grid position; `(0, 0)` is the upper left corner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    pub x: usize,
    pub y: usize,
}

impl Cell {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Adjacent cell on `side`, if it lies inside a `width` x `height` grid
    pub fn step(self, side: Side, width: usize, height: usize) -> Option<Cell> {
        let (x, y) = match side {
            Side::Right => (self.x.checked_add(1)?, self.y),
            Side::Above => (self.x, self.y.checked_sub(1)?),
            Side::Left => (self.x.checked_sub(1)?, self.y),
            Side::Below => (self.x, self.y.checked_add(1)?),
        };
        (x < width && y < height).then_some(Cell { x, y })
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

impl FromStr for Cell {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || GraphError::invalid_value("cell (expected x,y)", s);
        let (x, y) = s.split_once(',').ok_or_else(invalid)?;
        Ok(Cell {
            x: x.trim().parse().map_err(|_| invalid())?,
            y: y.trim().parse().map_err(|_| invalid())?,
        })
    }
}

/// Side of a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Right,
    Above,
    Left,
    Below,
}

impl Side {
    /// Order in which edges leaving a cell are added
    pub const ALL: [Side; 4] = [Side::Right, Side::Above, Side::Left, Side::Below];

    pub fn opposite(self) -> Side {
        match self {
            Side::Right => Side::Left,
            Side::Above => Side::Below,
            Side::Left => Side::Right,
            Side::Below => Side::Above,
        }
    }
}

/// Read-only view of a grid's dimensions, walls and passage weights
pub trait GridSource {
    fn width(&self) -> usize;
    fn height(&self) -> usize;
    /// Whether a wall blocks passage from `cell` through `side`
    fn is_wall(&self, cell: Cell, side: Side) -> bool;
    /// Weight of the passage from `cell` through `side`
    fn weight(&self, cell: Cell, side: Side) -> i64;
}

/// Add every cell of `grid` to `builder`, then an edge for every open side
///
/// Cells are added column by column (x outer, y inner). Edges leaving a
/// cell are added in `Side::ALL` order. Openings that lead off the grid
/// are skipped.
pub fn populate_from_grid<B, G>(builder: &mut B, grid: &G) -> Result<()>
where
    B: GraphBuilder<Cell>,
    G: GridSource + ?Sized,
{
    let (width, height) = (grid.width(), grid.height());

    for x in 0..width {
        for y in 0..height {
            builder.add_vertex(Cell::new(x, y))?;
        }
    }

    for x in 0..width {
        for y in 0..height {
            let cell = Cell::new(x, y);
            for side in Side::ALL {
                if grid.is_wall(cell, side) {
                    continue;
                }
                match cell.step(side, width, height) {
                    Some(next) => builder.add_edge(&cell, &next, grid.weight(cell, side))?,
                    None => tracing::warn!(%cell, ?side, "opening leads off the grid, skipped"),
                }
            }
        }
    }

    tracing::debug!(width, height, "grid graph populated");
    Ok(())
}

/// Fresh graph holding every cell and passage of `grid`
pub fn maze_graph<G: GridSource + ?Sized>(grid: &G) -> Result<WeightedGraph<Cell>> {
    let mut graph = WeightedGraph::new();
    populate_from_grid(&mut graph, grid)?;
    Ok(graph)
}
