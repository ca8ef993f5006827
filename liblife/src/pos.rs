/// A `(row, column)` pair. Either coordinate may lie outside the grid or be negative,
/// the grid wraps it onto the torus when resolving a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: i64,
    pub column: i64,
}

impl Position {
    pub fn new(row: i64, column: i64) -> Self {
        Self { row, column }
    }

    pub fn offset(self, row_offset: i64, column_offset: i64) -> Self {
        Self {
            row: self.row + row_offset,
            column: self.column + column_offset,
        }
    }
}

impl From<(i64, i64)> for Position {
    fn from((row, column): (i64, i64)) -> Self {
        Self { row, column }
    }
}

impl From<[i64; 2]> for Position {
    fn from(value: [i64; 2]) -> Self {
        Self {
            row: value[0],
            column: value[1],
        }
    }
}

impl From<Position> for [i64; 2] {
    fn from(value: Position) -> Self {
        [value.row, value.column]
    }
}
