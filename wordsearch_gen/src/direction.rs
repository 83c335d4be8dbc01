use std::fmt::Display;

use util::pos::Diff;

/// One of the eight unit steps a word can be written along.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct Direction(Diff);

impl Direction {
  pub const EAST: Self = Self(Diff::from_row_col(0, 1));
  pub const WEST: Self = Self(Diff::from_row_col(0, -1));
  pub const SOUTH: Self = Self(Diff::from_row_col(1, 0));
  pub const NORTH: Self = Self(Diff::from_row_col(-1, 0));
  pub const SOUTH_EAST: Self = Self(Diff::from_row_col(1, 1));
  pub const SOUTH_WEST: Self = Self(Diff::from_row_col(1, -1));
  pub const NORTH_EAST: Self = Self(Diff::from_row_col(-1, 1));
  pub const NORTH_WEST: Self = Self(Diff::from_row_col(-1, -1));

  /// All directions, in the order candidates are enumerated.
  pub const ALL: [Self; 8] = [
    Self::EAST,
    Self::WEST,
    Self::SOUTH,
    Self::NORTH,
    Self::SOUTH_EAST,
    Self::SOUTH_WEST,
    Self::NORTH_EAST,
    Self::NORTH_WEST,
  ];

  pub fn delta(&self) -> Diff {
    self.0
  }

  pub fn d_row(&self) -> i32 {
    self.0.y
  }

  pub fn d_col(&self) -> i32 {
    self.0.x
  }

  pub fn name(&self) -> &'static str {
    match (self.d_row(), self.d_col()) {
      (0, 1) => "east",
      (0, -1) => "west",
      (1, 0) => "south",
      (-1, 0) => "north",
      (1, 1) => "south-east",
      (1, -1) => "south-west",
      (-1, 1) => "north-east",
      _ => "north-west",
    }
  }
}

impl Display for Direction {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.name())
  }
}
