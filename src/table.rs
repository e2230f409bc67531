use std::fmt;

use crate::report::ReportRow;

const HEADERS: [&str; 3] = ["", "brand", "rating"];

// Rank and rating are numeric and sit on the right, like the header above them.
const RIGHT: [bool; 3] = [true, false, true];

// Every column is at least this much wider than its header.
const MIN_PADDING: usize = 2;

/// Grid rendering of report rows:
///
/// ```text
/// +----+---------+----------+
/// |    | brand   |   rating |
/// +====+=========+==========+
/// |  1 | apple   |     4.55 |
/// +----+---------+----------+
/// ```
pub(crate) struct Table {
    cells: Vec<[String; 3]>,
}

impl Table {
    pub(crate) fn new(rows: &[ReportRow]) -> Self {
        let cells = rows
            .iter()
            .map(|row| {
                [
                    row.rank.to_string(),
                    row.brand.clone(),
                    format!("{:.2}", row.rating),
                ]
            })
            .collect();
        Self { cells }
    }

    fn widths(&self) -> [usize; 3] {
        let mut widths = HEADERS.map(|h| h.chars().count() + MIN_PADDING);
        for row in &self.cells {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }
        widths
    }
}

fn rule(f: &mut fmt::Formatter<'_>, widths: &[usize; 3], fill: &str) -> fmt::Result {
    write!(f, "+")?;
    for width in widths {
        write!(f, "{}+", fill.repeat(width + 2))?;
    }
    Ok(())
}

fn line<S: AsRef<str>>(
    f: &mut fmt::Formatter<'_>,
    widths: &[usize; 3],
    cells: &[S; 3],
) -> fmt::Result {
    write!(f, "|")?;
    for ((cell, width), right) in cells.iter().zip(widths).zip(RIGHT) {
        let cell = cell.as_ref();
        if right {
            write!(f, " {:>width$} |", cell, width = *width)?;
        } else {
            write!(f, " {:<width$} |", cell, width = *width)?;
        }
    }
    Ok(())
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widths = self.widths();
        rule(f, &widths, "-")?;
        writeln!(f)?;
        line(f, &widths, &HEADERS)?;
        writeln!(f)?;
        rule(f, &widths, "=")?;
        for row in &self.cells {
            writeln!(f)?;
            line(f, &widths, row)?;
            writeln!(f)?;
            rule(f, &widths, "-")?;
        }
        Ok(())
    }
}
