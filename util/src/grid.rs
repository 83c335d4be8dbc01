use std::fmt::{Debug, Display};

use bitcode::{Decode, Encode};

use crate::{
  error::{WordSearchError, WordSearchResult},
  pos::Pos,
};

pub trait Gridlike<T> {
  fn width(&self) -> u32;
  fn height(&self) -> u32;
  fn in_bounds(&self, pos: Pos) -> bool;

  fn get(&self, pos: Pos) -> Option<&T>;

  fn iter_row<'a, 'b>(&'a self, y: u32) -> impl Iterator<Item = &'b T>
  where
    'a: 'b,
    T: 'a;
}

pub trait MutGridlike<T>: Gridlike<T> {
  fn get_mut(&mut self, pos: Pos) -> Option<&mut T>;
}

#[derive(Clone, PartialEq, Eq, Encode, Decode)]
pub struct Grid<T> {
  grid: Vec<T>,
  width: u32,
  height: u32,
}

impl<T> Grid<T> {
  pub fn from_vec(grid: Vec<T>, width: u32, height: u32) -> WordSearchResult<Self> {
    let expected_size = width as usize * height as usize;
    if grid.len() != expected_size {
      return Err(
        WordSearchError::Internal(format!(
          "Expected grid.len() == expected_size, {} != {expected_size}",
          grid.len()
        ))
        .into(),
      );
    }

    Ok(Self { grid, width, height })
  }

  /// Builds a grid from rows of cells, which must all have the same length.
  pub fn from_rows<R>(rows: impl IntoIterator<Item = R>) -> WordSearchResult<Self>
  where
    R: IntoIterator<Item = T>,
  {
    let (width, height, grid) = rows.into_iter().try_fold(
      (None, 0u32, vec![]),
      |(width, height, mut grid), row| -> WordSearchResult<_> {
        let before = grid.len();
        grid.extend(row);
        let row_width = grid.len() - before;
        if let Some(width) = width {
          if row_width != width {
            return Err(
              WordSearchError::Parse(format!("Grid row lengths differ: {row_width} vs {width}"))
                .into(),
            );
          }
        }
        Ok((Some(row_width), height + 1, grid))
      },
    )?;

    let width = width.ok_or_else(|| WordSearchError::Parse("Grid has no rows".to_owned()))?;
    Self::from_vec(grid, width as u32, height)
  }

  fn idx(&self, pos: Pos) -> usize {
    debug_assert!(self.in_bounds(pos));
    let x = pos.x as usize;
    let y = pos.y as usize;
    x + y * self.width as usize
  }

  /// All positions in row-major order.
  pub fn positions(&self) -> impl Iterator<Item = Pos> {
    let width = self.width;
    (0..self.height as i32).flat_map(move |y| (0..width as i32).map(move |x| Pos { x, y }))
  }

  /// The middle cell, rounding down in both axes.
  pub fn center(&self) -> Pos {
    Pos { x: (self.width / 2) as i32, y: (self.height / 2) as i32 }
  }

  pub fn cells(&self) -> impl Iterator<Item = &T> {
    self.grid.iter()
  }

  pub fn map<F, U>(&self, f: F) -> Grid<U>
  where
    F: FnMut(&T) -> U,
  {
    Grid {
      grid: self.grid.iter().map(f).collect(),
      width: self.width,
      height: self.height,
    }
  }
}

impl<T> Grid<T>
where
  T: Default,
{
  pub fn new(width: u32, height: u32) -> Self {
    Self {
      grid: (0..width as usize * height as usize).map(|_| T::default()).collect(),
      width,
      height,
    }
  }
}

impl<T> Gridlike<T> for Grid<T> {
  fn width(&self) -> u32 {
    self.width
  }

  fn height(&self) -> u32 {
    self.height
  }

  fn in_bounds(&self, pos: Pos) -> bool {
    pos.x >= 0 && pos.x < self.width() as i32 && pos.y >= 0 && pos.y < self.height() as i32
  }

  fn get(&self, pos: Pos) -> Option<&T> {
    self
      .in_bounds(pos)
      .then(|| self.grid.get(self.idx(pos)))
      .flatten()
  }

  fn iter_row<'a, 'b>(&'a self, y: u32) -> impl Iterator<Item = &'b T>
  where
    'a: 'b,
    T: 'a,
  {
    let y = y as i32;
    (0..self.width()).flat_map(move |x| self.get(Pos { x: x as i32, y }))
  }
}

impl<T> MutGridlike<T> for Grid<T> {
  fn get_mut(&mut self, pos: Pos) -> Option<&mut T> {
    self
      .in_bounds(pos)
      .then(|| {
        let index = self.idx(pos);
        self.grid.get_mut(index)
      })
      .flatten()
  }
}

impl<T: Debug> Debug for Grid<T> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    (0..self.height).try_fold((), |_, y| {
      self.iter_row(y).try_fold((), |_, t| write!(f, "{t:?} "))?;
      writeln!(f)
    })
  }
}

impl<T: Display> Display for Grid<T> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    (0..self.height).try_fold((), |_, y| {
      self.iter_row(y).try_fold((), |_, t| write!(f, "{t} "))?;
      writeln!(f)
    })
  }
}
