//! Fixed-shape integer matrices.
//!
//! A [`Matrix2D`] owns a single row-major buffer whose shape is chosen at
//! construction and never changes afterwards, except when a whole matrix of a
//! different shape is assigned into it.

use std::fmt;
use std::io::{self, BufRead, Write};
use std::ops::{Index, IndexMut};

use log::{debug, trace};

use crate::error::{Axis, MatrixError};
use crate::format::MatrixFormat;

/// Row count of [`Matrix2D::default`].
pub const DEFAULT_ROWS: usize = 3;
/// Column count of [`Matrix2D::default`].
pub const DEFAULT_COLUMNS: usize = 5;

/// A two-dimensional array of `i32` stored in row-major order.
///
/// Both extents are always strictly positive and the buffer always holds
/// exactly `num_rows * num_cols` elements.
#[derive(Debug)]
pub struct Matrix2D {
    /// Entries in row-major order.
    data: Vec<i32>,
    /// Number of rows.
    num_rows: usize,
    /// Number of columns.
    num_cols: usize,
}

fn checked_extent(axis: Axis, value: isize) -> Result<usize, MatrixError> {
    usize::try_from(value)
        .ok()
        .filter(|&n| n > 0)
        .ok_or(MatrixError::InvalidDimension { axis, value })
}

// Coordinates past `isize::MAX` can never be in range; saturate so `at` rejects them.
fn to_signed(n: usize) -> isize {
    isize::try_from(n).unwrap_or(isize::MAX)
}

fn peek_byte<R: BufRead>(input: &mut R) -> io::Result<Option<u8>> {
    Ok(input.fill_buf()?.first().copied())
}

/// Returns the non-whitespace run at the front of the buffer without consuming it.
fn peek_token<R: BufRead>(input: &mut R) -> io::Result<String> {
    let buf = input.fill_buf()?;
    let n = buf.iter().take_while(|b| !b.is_ascii_whitespace()).count();
    Ok(String::from_utf8_lossy(&buf[..n]).into_owned())
}

/// Extracts one integer, consuming leading whitespace and the integer's own
/// bytes only. `Ok(None)` means the input ended before any token.
fn read_int<R: BufRead>(input: &mut R, index: usize) -> Result<Option<i32>, MatrixError> {
    loop {
        let buf = input.fill_buf()?;
        if buf.is_empty() {
            return Ok(None);
        }
        let skip = buf.iter().take_while(|b| b.is_ascii_whitespace()).count();
        let exhausted = skip == buf.len();
        input.consume(skip);
        if !exhausted {
            break;
        }
    }

    let mut digits = String::new();
    if let Some(sign @ (b'+' | b'-')) = peek_byte(input)? {
        digits.push(char::from(sign));
        input.consume(1);
    }
    let sign_len = digits.len();
    while let Some(b) = peek_byte(input)? {
        if !b.is_ascii_digit() {
            break;
        }
        digits.push(char::from(b));
        input.consume(1);
    }

    if digits.len() == sign_len {
        digits.push_str(&peek_token(input)?);
        return Err(MatrixError::MalformedToken {
            token: digits,
            index,
        });
    }

    match digits.parse::<i32>() {
        Ok(value) => Ok(Some(value)),
        Err(_) => Err(MatrixError::MalformedToken {
            token: digits,
            index,
        }),
    }
}

impl Matrix2D {
    /// Creates a zero-filled matrix.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::InvalidDimension`] if `rows` or `columns` is not
    /// strictly positive. Rows are checked first.
    pub fn new(rows: isize, columns: isize) -> Result<Self, MatrixError> {
        let num_rows = checked_extent(Axis::Rows, rows)?;
        let num_cols = checked_extent(Axis::Columns, columns)?;
        Ok(Self::zeros(num_rows, num_cols))
    }

    /// Creates a matrix from nested rows.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::InvalidDimension`] when there are no rows or the
    /// first row is empty, and [`MatrixError::RaggedRows`] when a later row
    /// differs in length from the first.
    pub fn from_rows(rows: Vec<Vec<i32>>) -> Result<Self, MatrixError> {
        let num_rows = rows.len();
        if num_rows == 0 {
            return Err(MatrixError::InvalidDimension {
                axis: Axis::Rows,
                value: 0,
            });
        }
        let num_cols = rows[0].len();
        if num_cols == 0 {
            return Err(MatrixError::InvalidDimension {
                axis: Axis::Columns,
                value: 0,
            });
        }
        if let Some((row, found)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != num_cols)
        {
            return Err(MatrixError::RaggedRows {
                row,
                expected: num_cols,
                found,
            });
        }

        Ok(Self {
            data: rows.into_iter().flatten().collect(),
            num_rows,
            num_cols,
        })
    }

    fn zeros(num_rows: usize, num_cols: usize) -> Self {
        Self {
            data: vec![0; num_rows * num_cols],
            num_rows,
            num_cols,
        }
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    /// Returns the total number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always false: a matrix has at least one element.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the entries in row-major order.
    #[must_use]
    pub fn as_slice(&self) -> &[i32] {
        &self.data
    }

    /// Returns a slice of the specified row.
    ///
    /// # Panics
    ///
    /// Panics if `row >= num_rows`.
    #[must_use]
    pub fn row(&self, row: usize) -> &[i32] {
        assert!(row < self.num_rows, "row {row} out of range");
        let start = row * self.num_cols;
        &self.data[start..start + self.num_cols]
    }

    /// Iterates over the rows as slices.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[i32]> + '_ {
        self.data.chunks_exact(self.num_cols)
    }

    fn offset(&self, row: isize, column: isize) -> Result<usize, MatrixError> {
        match (usize::try_from(row), usize::try_from(column)) {
            (Ok(r), Ok(c)) if r < self.num_rows && c < self.num_cols => Ok(r * self.num_cols + c),
            _ => Err(MatrixError::IndexOutOfRange {
                row,
                column,
                num_rows: self.num_rows,
                num_cols: self.num_cols,
            }),
        }
    }

    /// Returns the element at (row, column).
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::IndexOutOfRange`] unless
    /// `0 <= row < num_rows` and `0 <= column < num_cols`.
    pub fn at(&self, row: isize, column: isize) -> Result<i32, MatrixError> {
        self.offset(row, column).map(|i| self.data[i])
    }

    /// Returns a mutable reference to the element at (row, column).
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::IndexOutOfRange`] under the same conditions as
    /// [`Matrix2D::at`]. The matrix is left untouched.
    pub fn at_mut(&mut self, row: isize, column: isize) -> Result<&mut i32, MatrixError> {
        let i = self.offset(row, column)?;
        Ok(&mut self.data[i])
    }

    /// Overwrites this matrix with the shape and contents of `source`.
    ///
    /// The buffer is replaced only when the shapes differ; otherwise the
    /// existing allocation is reused.
    pub fn assign_from(&mut self, source: &Self) -> &mut Self {
        if self.num_rows == source.num_rows && self.num_cols == source.num_cols {
            self.data.copy_from_slice(&source.data);
        } else {
            debug!(
                "reallocating {}x{} matrix as {}x{}",
                self.num_rows, self.num_cols, source.num_rows, source.num_cols
            );
            self.data = source.data.clone();
            self.num_rows = source.num_rows;
            self.num_cols = source.num_cols;
        }
        self
    }

    /// Returns a [`fmt::Display`] adapter using the given layout.
    #[must_use]
    pub fn display_with(&self, format: MatrixFormat) -> impl fmt::Display + '_ {
        Layout {
            matrix: self,
            format,
        }
    }

    /// Writes the matrix with the default layout: each element right-aligned
    /// in a field of width 5, one line per row.
    ///
    /// # Errors
    ///
    /// Propagates any error from `out`.
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        self.write_with(out, &MatrixFormat::default())
    }

    /// Writes the matrix with a custom layout.
    ///
    /// # Errors
    ///
    /// Propagates any error from `out`.
    pub fn write_with<W: Write>(&self, out: &mut W, format: &MatrixFormat) -> io::Result<()> {
        write!(out, "{}", self.display_with(*format))
    }

    /// Reads `num_rows * num_cols` whitespace-separated integers in row-major
    /// order.
    ///
    /// Only the bytes of the elements actually read are consumed, so anything
    /// after the last element stays in `input` for the next reader. Each
    /// element is an optional sign followed by decimal digits; extraction
    /// stops at the first byte that cannot continue the number, as formatted
    /// stream input does. If reading fails midway, the elements already read
    /// keep their new values and the rest keep their old ones.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::Io`] if the reader fails,
    /// [`MatrixError::MalformedToken`] when no integer starts at the next
    /// token (the token is left unconsumed) or it overflows `i32`, and
    /// [`MatrixError::UnexpectedEof`] if the input runs out.
    pub fn read_from<R: BufRead>(&mut self, input: &mut R) -> Result<(), MatrixError> {
        let expected = self.len();

        for read in 0..expected {
            let Some(value) = read_int(input, read)? else {
                return Err(MatrixError::UnexpectedEof { expected, read });
            };
            let (row, column) = (read / self.num_cols, read % self.num_cols);
            *self.at_mut(to_signed(row), to_signed(column))? = value;
        }

        trace!("read {expected} elements into {}x{} matrix", self.num_rows, self.num_cols);
        Ok(())
    }

    /// Reads the elements from a string. See [`Matrix2D::read_from`].
    ///
    /// # Errors
    ///
    /// Same as [`Matrix2D::read_from`].
    pub fn read_from_str(&mut self, s: &str) -> Result<(), MatrixError> {
        self.read_from(&mut s.as_bytes())
    }
}

impl Default for Matrix2D {
    fn default() -> Self {
        Self::zeros(DEFAULT_ROWS, DEFAULT_COLUMNS)
    }
}

impl Clone for Matrix2D {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
            num_rows: self.num_rows,
            num_cols: self.num_cols,
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.assign_from(source);
    }
}

impl PartialEq for Matrix2D {
    fn eq(&self, other: &Self) -> bool {
        self.num_rows == other.num_rows
            && self.num_cols == other.num_cols
            && self.data == other.data
    }
}

impl Eq for Matrix2D {}

impl Index<(usize, usize)> for Matrix2D {
    type Output = i32;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        assert!(
            row < self.num_rows && col < self.num_cols,
            "subscript ({row}, {col}) out of range"
        );
        &self.data[row * self.num_cols + col]
    }
}

impl IndexMut<(usize, usize)> for Matrix2D {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        assert!(
            row < self.num_rows && col < self.num_cols,
            "subscript ({row}, {col}) out of range"
        );
        &mut self.data[row * self.num_cols + col]
    }
}

struct Layout<'a> {
    matrix: &'a Matrix2D,
    format: MatrixFormat,
}

impl fmt::Display for Layout<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.format.field_width;
        for row in self.matrix.iter_rows() {
            for value in row {
                write!(f, "{value:>width$}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Display for Matrix2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.display_with(MatrixFormat::default()), f)
    }
}
