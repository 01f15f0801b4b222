//! Text layout options for writing matrices.

/// Field width used when none is configured.
pub const DEFAULT_FIELD_WIDTH: usize = 5;

/// Formatting configuration for [`Matrix2D::write_with`](crate::Matrix2D::write_with).
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct MatrixFormat {
    /// Minimum width of each element; values are right-aligned within it.
    pub field_width: usize,
}

impl Default for MatrixFormat {
    fn default() -> Self {
        Self {
            field_width: DEFAULT_FIELD_WIDTH,
        }
    }
}

impl MatrixFormat {
    /// Sets the field width.
    #[must_use]
    pub fn with_field_width(mut self, field_width: usize) -> Self {
        self.field_width = field_width;
        self
    }
}
