//! Rectangular character grids and 2D points

use aoc_solver::ParseError;
use std::ops::{Add, Index, IndexMut, Mul, Sub};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    pub fn step(self, dir: Direction) -> Self {
        self + dir.offset()
    }

    pub fn manhattan(self, other: Point) -> i64 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    /// The four orthogonal neighbours, in `Direction::ALL` order.
    pub fn neighbors(self) -> [Point; 4] {
        Direction::ALL.map(|d| self.step(d))
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<i64> for Point {
    type Output = Point;

    fn mul(self, rhs: i64) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

/// Compass direction with `y` growing downwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    pub fn offset(self) -> Point {
        match self {
            Direction::North => Point::new(0, -1),
            Direction::East => Point::new(1, 0),
            Direction::South => Point::new(0, 1),
            Direction::West => Point::new(-1, 0),
        }
    }

    pub fn turn_right(self) -> Self {
        Direction::ALL[(self.index() + 1) % 4]
    }

    pub fn turn_left(self) -> Self {
        Direction::ALL[(self.index() + 3) % 4]
    }

    pub fn reverse(self) -> Self {
        Direction::ALL[(self.index() + 2) % 4]
    }

    pub fn index(self) -> usize {
        self as usize
    }

    /// `^`, `>`, `v` and `<`.
    pub fn from_arrow(c: char) -> Option<Self> {
        match c {
            '^' => Some(Direction::North),
            '>' => Some(Direction::East),
            'v' => Some(Direction::South),
            '<' => Some(Direction::West),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    cells: Vec<T>,
}

impl<T> Grid<T> {
    /// Parse a rectangular block of text, converting every character with `cell`.
    pub fn parse_with<F>(input: &str, mut cell: F) -> Result<Self, ParseError>
    where
        F: FnMut(char) -> Option<T>,
    {
        let mut width = None;
        let mut height = 0;
        let mut cells = Vec::with_capacity(input.len());
        for (row, line) in input.lines().enumerate() {
            let before = cells.len();
            for c in line.chars() {
                let value = cell(c).ok_or_else(|| {
                    ParseError::InvalidFormat(format!("unexpected '{}' on row {}", c, row + 1))
                })?;
                cells.push(value);
            }
            let len = cells.len() - before;
            match width {
                None => width = Some(len),
                Some(w) if w != len => {
                    return Err(ParseError::InvalidFormat(format!(
                        "row {} has {} cells, expected {}",
                        row + 1,
                        len,
                        w
                    )));
                }
                Some(_) => {}
            }
            height += 1;
        }
        let width = width.filter(|&w| w > 0).ok_or_else(|| ParseError::MissingData("empty grid".into()))?;
        Ok(Self { width, height, cells })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && (p.x as usize) < self.width && (p.y as usize) < self.height
    }

    fn offset_of(&self, p: Point) -> Option<usize> {
        self.contains(p)
            .then(|| p.y as usize * self.width + p.x as usize)
    }

    pub fn get(&self, p: Point) -> Option<&T> {
        self.offset_of(p).map(|i| &self.cells[i])
    }

    pub fn get_mut(&mut self, p: Point) -> Option<&mut T> {
        self.offset_of(p).map(move |i| &mut self.cells[i])
    }

    /// Every point in row-major order.
    pub fn points(&self) -> impl Iterator<Item = Point> + use<T> {
        let (w, h) = (self.width as i64, self.height as i64);
        (0..h).flat_map(move |y| (0..w).map(move |x| Point::new(x, y)))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Point, &T)> {
        self.points().zip(self.cells.iter())
    }

    pub fn position<F>(&self, mut pred: F) -> Option<Point>
    where
        F: FnMut(&T) -> bool,
    {
        self.iter().find(|(_, v)| pred(v)).map(|(p, _)| p)
    }

    /// Same-shaped grid with every cell set to `value`.
    pub fn map_fill<U: Clone>(&self, value: U) -> Grid<U> {
        Grid::new(self.width, self.height, value)
    }
}

impl<T: Clone> Grid<T> {
    pub fn new(width: usize, height: usize, fill: T) -> Self {
        Self {
            width,
            height,
            cells: vec![fill; width * height],
        }
    }
}

impl Grid<char> {
    pub fn parse_chars(input: &str) -> Result<Self, ParseError> {
        Self::parse_with(input, Some)
    }
}

impl<T> Index<Point> for Grid<T> {
    type Output = T;

    fn index(&self, p: Point) -> &T {
        self.get(p).unwrap_or_else(|| panic!("{:?} is outside the grid", p))
    }
}

impl<T> IndexMut<Point> for Grid<T> {
    fn index_mut(&mut self, p: Point) -> &mut T {
        let (w, h) = (self.width, self.height);
        self.get_mut(p)
            .unwrap_or_else(|| panic!("{:?} is outside the {}x{} grid", p, w, h))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_index() {
        let grid = Grid::parse_chars("ab\ncd\nef").unwrap();
        assert_eq!(grid.width(), 2);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid[Point::new(1, 2)], 'f');
        assert_eq!(grid.get(Point::new(2, 0)), None);
        assert_eq!(grid.get(Point::new(0, -1)), None);
        assert_eq!(grid.position(|&c| c == 'd'), Some(Point::new(1, 1)));
    }

    #[test]
    fn test_ragged_grid_rejected() {
        assert!(matches!(Grid::parse_chars("abc\nde"), Err(ParseError::InvalidFormat(_))));
        assert!(matches!(Grid::parse_chars(""), Err(ParseError::MissingData(_))));
    }

    #[test]
    fn test_parse_with_rejects_unknown_cells() {
        let result = Grid::parse_with("12\n3x", |c| c.to_digit(10));
        assert!(matches!(result, Err(ParseError::InvalidFormat(msg)) if msg.contains('x')));
    }

    #[test]
    fn test_direction_turns() {
        for dir in Direction::ALL {
            assert_eq!(dir.turn_right().turn_left(), dir);
            assert_eq!(dir.reverse().reverse(), dir);
            assert_eq!(dir.offset() + dir.reverse().offset(), Point::default());
        }
        assert_eq!(Direction::North.turn_right(), Direction::East);
        assert_eq!(Direction::from_arrow('v'), Some(Direction::South));
    }

    #[test]
    fn test_points_row_major() {
        let grid = Grid::new(2, 2, 0u8);
        let points: Vec<_> = grid.points().collect();
        assert_eq!(
            points,
            vec![Point::new(0, 0), Point::new(1, 0), Point::new(0, 1), Point::new(1, 1)]
        );
    }
}
