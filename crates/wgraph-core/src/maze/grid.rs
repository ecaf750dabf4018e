//! Concrete grid described by a maze document

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use super::{Cell, GridSource, Side};
use crate::error::{GraphError, Result};

fn default_weight() -> i64 {
    1
}

/// Declarative maze layout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MazeSpec {
    pub width: usize,
    pub height: usize,

    /// Weight of every passage without an explicit entry
    #[serde(default = "default_weight")]
    pub default_weight: i64,

    #[serde(default)]
    pub walls: Vec<WallSpec>,

    #[serde(default)]
    pub weights: Vec<WeightSpec>,
}

/// A wall on one side of a cell
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WallSpec {
    pub x: usize,
    pub y: usize,
    pub side: Side,
}

/// A passage weight on one side of a cell
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightSpec {
    pub x: usize,
    pub y: usize,
    pub side: Side,
    pub weight: i64,
}

/// Grid with walls around its border
///
/// Walls and weights are shared by both cells they separate: a wall on the
/// right of `(0, 0)` is also on the left of `(1, 0)`.
#[derive(Debug, Clone)]
pub struct MazeGrid {
    width: usize,
    height: usize,
    default_weight: i64,
    walls: HashSet<(Cell, Side)>,
    weights: HashMap<(Cell, Side), i64>,
}

impl MazeGrid {
    /// Grid of the given size with no interior walls
    pub fn open(width: usize, height: usize, default_weight: i64) -> Self {
        Self {
            width,
            height,
            default_weight,
            walls: HashSet::new(),
            weights: HashMap::new(),
        }
    }

    pub fn from_spec(spec: &MazeSpec) -> Result<Self> {
        let mut grid = Self::open(spec.width, spec.height, spec.default_weight);
        for wall in &spec.walls {
            grid.add_wall(Cell::new(wall.x, wall.y), wall.side)?;
        }
        for entry in &spec.weights {
            grid.set_weight(Cell::new(entry.x, entry.y), entry.side, entry.weight)?;
        }
        Ok(grid)
    }

    pub fn add_wall(&mut self, cell: Cell, side: Side) -> Result<()> {
        self.check(cell)?;
        self.walls.insert((cell, side));
        if let Some(next) = cell.step(side, self.width, self.height) {
            self.walls.insert((next, side.opposite()));
        }
        Ok(())
    }

    pub fn set_weight(&mut self, cell: Cell, side: Side, weight: i64) -> Result<()> {
        self.check(cell)?;
        self.weights.insert((cell, side), weight);
        if let Some(next) = cell.step(side, self.width, self.height) {
            self.weights.insert((next, side.opposite()), weight);
        }
        Ok(())
    }

    fn check(&self, cell: Cell) -> Result<()> {
        if cell.x < self.width && cell.y < self.height {
            Ok(())
        } else {
            Err(GraphError::invalid_value(
                &format!("cell for {}x{} maze", self.width, self.height),
                cell,
            ))
        }
    }
}

impl GridSource for MazeGrid {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn is_wall(&self, cell: Cell, side: Side) -> bool {
        cell.step(side, self.width, self.height).is_none() || self.walls.contains(&(cell, side))
    }

    fn weight(&self, cell: Cell, side: Side) -> i64 {
        self.weights
            .get(&(cell, side))
            .copied()
            .unwrap_or(self.default_weight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{Cost, EventLog};
    use crate::maze::maze_graph;
    use std::sync::Arc;

    #[test]
    fn test_border_is_walled() {
        let grid = MazeGrid::open(2, 1, 1);
        assert!(grid.is_wall(Cell::new(0, 0), Side::Left));
        assert!(grid.is_wall(Cell::new(0, 0), Side::Above));
        assert!(!grid.is_wall(Cell::new(0, 0), Side::Right));
        assert!(grid.is_wall(Cell::new(1, 0), Side::Right));
    }

    #[test]
    fn test_walls_and_weights_are_symmetric() {
        let mut grid = MazeGrid::open(2, 2, 1);
        grid.add_wall(Cell::new(0, 0), Side::Right).unwrap();
        grid.set_weight(Cell::new(0, 0), Side::Below, 9).unwrap();

        assert!(grid.is_wall(Cell::new(1, 0), Side::Left));
        assert_eq!(grid.weight(Cell::new(0, 1), Side::Above), 9);
        assert_eq!(grid.weight(Cell::new(1, 1), Side::Above), 1);
    }

    #[test]
    fn test_out_of_range_cell_rejected() {
        let spec = MazeSpec {
            width: 2,
            height: 2,
            default_weight: 1,
            walls: vec![WallSpec {
                x: 5,
                y: 0,
                side: Side::Left,
            }],
            weights: vec![],
        };
        assert!(matches!(
            MazeGrid::from_spec(&spec),
            Err(GraphError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_negative_weight_surfaces_when_building() {
        let mut grid = MazeGrid::open(2, 1, 1);
        grid.set_weight(Cell::new(0, 0), Side::Right, -3).unwrap();
        assert!(matches!(
            maze_graph(&grid),
            Err(GraphError::InvalidWeight { weight: -3, .. })
        ));
    }

    /// 3x2 maze where the cheap route detours around a heavy passage
    ///
    /// ```text
    /// (0,0) -9- (1,0) --- (2,0)
    ///   |         |
    /// (0,1) --- (1,1) |W| (2,1)
    /// ```
    #[test]
    fn test_dijkstra_through_maze() {
        let spec = MazeSpec {
            width: 3,
            height: 2,
            default_weight: 1,
            walls: vec![
                WallSpec {
                    x: 1,
                    y: 1,
                    side: Side::Right,
                },
                WallSpec {
                    x: 2,
                    y: 0,
                    side: Side::Below,
                },
            ],
            weights: vec![WeightSpec {
                x: 0,
                y: 0,
                side: Side::Right,
                weight: 9,
            }],
        };
        let grid = MazeGrid::from_spec(&spec).unwrap();
        let mut graph = maze_graph(&grid).unwrap();
        assert_eq!(graph.vertex_count(), 6);
        assert_eq!(graph.get_weight(&Cell::new(1, 0), &Cell::new(0, 0)).unwrap(), Some(9));
        assert_eq!(graph.get_weight(&Cell::new(1, 1), &Cell::new(2, 1)).unwrap(), None);

        let log = Arc::new(EventLog::new());
        graph.add_observer(log.clone());
        graph.run_dijkstra(&Cell::new(0, 0), &Cell::new(2, 0)).unwrap();

        assert_eq!(
            log.path(),
            Some(vec![
                Cell::new(0, 0),
                Cell::new(0, 1),
                Cell::new(1, 1),
                Cell::new(1, 0),
                Cell::new(2, 0),
            ])
        );
        assert!(log.finished().contains(&(Cell::new(2, 1), Cost::Infinite)));
    }
}
