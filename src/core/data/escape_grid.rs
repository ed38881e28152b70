use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EscapeGridError {
    #[error("grid of {width}x{height} cells does not match {cells} values")]
    SizeMismatch {
        width: usize,
        height: usize,
        cells: usize,
    },
}

/// Escape iteration counts for a `width × height` sampling of a viewport.
///
/// Cells are stored column-major: column `i` holds every imaginary-axis sample
/// for real-axis sample `i`, so a column can be filled without touching any
/// other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EscapeGrid {
    width: usize,
    height: usize,
    cells: Vec<u32>,
}

impl EscapeGrid {
    pub fn from_columns(
        width: usize,
        height: usize,
        cells: Vec<u32>,
    ) -> Result<Self, EscapeGridError> {
        if width.checked_mul(height) != Some(cells.len()) {
            return Err(EscapeGridError::SizeMismatch {
                width,
                height,
                cells: cells.len(),
            });
        }

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Count at real-axis index `i` and imaginary-axis index `j`.
    #[must_use]
    pub fn get(&self, i: usize, j: usize) -> Option<u32> {
        if i >= self.width || j >= self.height {
            return None;
        }

        self.cells.get(i * self.height + j).copied()
    }

    #[must_use]
    pub fn column(&self, i: usize) -> Option<&[u32]> {
        if i >= self.width {
            return None;
        }

        let start = i * self.height;
        self.cells.get(start..start + self.height)
    }

    #[must_use]
    pub fn cells(&self) -> &[u32] {
        &self.cells
    }

    /// Smallest and largest counts, `None` for an empty grid.
    #[must_use]
    pub fn value_range(&self) -> Option<(u32, u32)> {
        let min = self.cells.iter().copied().min()?;
        let max = self.cells.iter().copied().max()?;

        Some((min, max))
    }
}
