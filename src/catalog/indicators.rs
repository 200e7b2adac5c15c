//! Reading 0/1 indicator cells out of arrow columns
//!
//! A cell is either present (1), absent (0 or null), or malformed. Malformed
//! cells count as absent; callers decide how to report them.

use arrow::array::{Array, ArrayRef, AsArray};
use arrow::compute::cast;
use arrow::datatypes::{DataType, Float64Type};
use arrow::error::ArrowError;

use crate::catalog::schema::IndicatorKind;

/// Interpreted values of one symptom column within a record batch
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndicatorColumn {
    /// One flag per row, true when the symptom is present
    pub present: Vec<bool>,
    /// Number of non-null cells that were neither 0 nor 1
    pub malformed: usize,
}

/// Outcome of interpreting a single cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cell {
    Present,
    Absent,
    Malformed,
}

/// Interpret every cell of `array` as a symptom indicator
///
/// # Errors
/// Returns an error if the column cannot be cast to the representation
/// required by `kind`.
pub fn extract_indicators(
    array: &ArrayRef,
    kind: IndicatorKind,
) -> Result<IndicatorColumn, ArrowError> {
    let cells: Vec<Option<Cell>> = match kind {
        IndicatorKind::Empty => vec![None; array.len()],
        IndicatorKind::Boolean => {
            let values = array.as_boolean();
            values
                .iter()
                .map(|v| v.map(|b| if b { Cell::Present } else { Cell::Absent }))
                .collect()
        }
        IndicatorKind::Numeric => {
            let floats = cast(array, &DataType::Float64)?;
            floats
                .as_primitive::<Float64Type>()
                .iter()
                .map(|v| v.map(numeric_cell))
                .collect()
        }
        IndicatorKind::Text => {
            let strings = cast(array, &DataType::Utf8)?;
            strings
                .as_string::<i32>()
                .iter()
                .map(|v| v.map(text_cell))
                .collect()
        }
    };

    let mut column = IndicatorColumn {
        present: Vec::with_capacity(cells.len()),
        malformed: 0,
    };
    for cell in cells {
        column.present.push(cell == Some(Cell::Present));
        if cell == Some(Cell::Malformed) {
            column.malformed += 1;
        }
    }
    Ok(column)
}

#[allow(clippy::float_cmp)]
fn numeric_cell(value: f64) -> Cell {
    if value == 1.0 {
        Cell::Present
    } else if value == 0.0 {
        Cell::Absent
    } else {
        Cell::Malformed
    }
}

fn text_cell(value: &str) -> Cell {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "1.0" | "true" | "yes" | "y" => Cell::Present,
        "0" | "0.0" | "false" | "no" | "n" | "" => Cell::Absent,
        _ => Cell::Malformed,
    }
}
