use std::{
  fmt::Display,
  ops::{Add, Mul},
};

/// A cell coordinate. `x` is the column and `y` is the row, with (0, 0) in the
/// top-left corner.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Pos {
  pub x: i32,
  pub y: i32,
}

impl Pos {
  pub const fn from_row_col(row: i32, col: i32) -> Self {
    Self { x: col, y: row }
  }

  pub const fn row(&self) -> i32 {
    self.y
  }

  pub const fn col(&self) -> i32 {
    self.x
  }

  pub fn manhattan_distance(&self, other: Pos) -> u32 {
    self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
  }
}

impl Add<Diff> for Pos {
  type Output = Self;

  fn add(self, rhs: Diff) -> Self {
    Self { x: self.x + rhs.x, y: self.y + rhs.y }
  }
}

impl Display for Pos {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "(row {}, col {})", self.y, self.x)
  }
}

/// A step between two cells, in the same axes as `Pos`.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct Diff {
  pub x: i32,
  pub y: i32,
}

impl Diff {
  pub const fn from_row_col(d_row: i32, d_col: i32) -> Self {
    Self { x: d_col, y: d_row }
  }
}

impl Mul<Diff> for i32 {
  type Output = Diff;

  fn mul(self, rhs: Diff) -> Diff {
    Diff { x: self * rhs.x, y: self * rhs.y }
  }
}
