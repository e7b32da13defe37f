use motordesk_catalog::Motor;
use motordesk_core::MotorCode;

use crate::error::ImportError;
use crate::normalize::{parse_price, parse_stock};
use crate::separator::detect_separator;

/// Columns every data row must carry: code, model, description, stock, price.
pub const MIN_COLUMNS: usize = 5;

/// Outcome of a successful parse.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedCatalog {
    /// Accepted rows, in file order.
    pub motors: Vec<Motor>,
    /// Rows with fewer than [`MIN_COLUMNS`] fields.
    pub skipped_rows: usize,
}

impl ParsedCatalog {
    pub fn count(&self) -> usize {
        self.motors.len()
    }
}

/// Parse a CSV blob (header + data rows) into motors.
///
/// The separator is chosen once from the header. Short rows are counted and
/// skipped; rows with a blank code or model are dropped without being counted.
/// Fields are split verbatim, so quoted separators are not supported.
pub fn parse_csv(text: &str) -> Result<ParsedCatalog, ImportError> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let lines: Vec<&str> = text
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| !line.trim().is_empty())
        .collect();

    let Some((header, rows)) = lines.split_first() else {
        return Err(ImportError::EmptyOrHeaderOnly);
    };
    if rows.is_empty() {
        return Err(ImportError::EmptyOrHeaderOnly);
    }

    let separator = detect_separator(header);
    let mut motors = Vec::with_capacity(rows.len());
    let mut skipped_rows = 0;

    for row in rows {
        match parse_row(row, separator) {
            Row::Accepted(motor) => motors.push(motor),
            Row::Short => skipped_rows += 1,
            Row::Incomplete => {}
        }
    }

    if motors.is_empty() {
        return Err(ImportError::NoValidRows {
            skipped: skipped_rows,
        });
    }

    Ok(ParsedCatalog {
        motors,
        skipped_rows,
    })
}

enum Row {
    Accepted(Motor),
    Short,
    Incomplete,
}

fn parse_row(row: &str, separator: char) -> Row {
    let columns: Vec<&str> = row.split(separator).collect();
    let [code, model, description, stock, price, ..] = columns.as_slice() else {
        return Row::Short;
    };

    let model = model.trim();
    let code = match MotorCode::new(code) {
        Ok(code) if !model.is_empty() => code,
        _ => return Row::Incomplete,
    };

    Row::Accepted(Motor::new(
        code,
        model,
        description.trim(),
        parse_stock(stock),
        parse_price(price),
    ))
}
