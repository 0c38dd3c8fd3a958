//! Station coordinate list format
//!
//! Pure formatting and parsing, no file access. The text format is:
//!
//! ```text
//! # x (m), y(m)
//! 0.000 357.143
//! 309.295 178.571
//! ```
//!
//! One header line, then one station per line with x and y in meters,
//! three decimals, separated by a single space. Files produced by
//! [`format_layout`] are read back by [`parse_layout`] in the same order.

use std::fmt::Write;

use crate::error::{InputDataError, Result};
use crate::geometry::Station;
use crate::layout::Layout;

/// First line of every layout file
pub const HEADER: &str = "# x (m), y(m)";

/// Default file name used by the command line tool
pub const DEFAULT_FILE_NAME: &str = "sensor_locations.csv";

/// Render a layout, header included, with a trailing newline
pub fn format_layout(layout: &Layout) -> String {
    let mut out = String::with_capacity(HEADER.len() + 1 + layout.len() * 24);
    out.push_str(HEADER);
    out.push('\n');
    for station in layout {
        let _ = writeln!(&mut out, "{:.3} {:.3}", station.x, station.y);
    }
    out
}

/// Parse a layout file.
///
/// Lines starting with `#` and blank lines are skipped. Every other line must
/// hold exactly two numbers separated by whitespace and/or a comma.
///
/// # Errors
///
/// [`InputDataError::MalformedRow`] with the 1-based line number of the first
/// bad row. The number of stations is not checked here.
pub fn parse_layout(text: &str) -> Result<Layout> {
    let mut stations = Vec::new();
    for (index, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        stations.push(parse_row(line).ok_or_else(|| InputDataError::MalformedRow {
            line: index + 1,
            content: line.to_string(),
        })?);
    }
    Ok(Layout::from_stations(stations))
}

fn parse_row(line: &str) -> Option<Station> {
    let mut fields = line
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|f| !f.is_empty());
    let x = fields.next()?.parse::<f64>().ok()?;
    let y = fields.next()?.parse::<f64>().ok()?;
    if fields.next().is_some() {
        return None;
    }
    Some(Station::new(x, y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::allocator::allocate;
    use crate::error::ArrayError;
    use crate::layout::generate;

    #[test]
    fn test_format_reference_layout() {
        let (inner, outer) = allocate(1000.0, 5000.0, 1.4, 60.0, 12).unwrap();
        let text = format_layout(&generate(&inner, &outer));
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 13);
        assert_eq!(lines[0], "# x (m), y(m)");
        assert_eq!(lines[1], "0.000 357.143");
        assert_eq!(lines[2], "309.295 178.571");
        // First outer station at 30°
        assert_eq!(lines[7], "1402.497 2429.196");
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn test_parse_formatted_layout() {
        let (inner, outer) = allocate(50.0, 300.0, 0.25, 60.0, 12).unwrap();
        let layout = generate(&inner, &outer);
        let parsed = parse_layout(&format_layout(&layout)).unwrap();

        assert_eq!(parsed.len(), layout.len());
        for (a, b) in parsed.iter().zip(layout.iter()) {
            assert!((a.x - b.x).abs() <= 5e-4);
            assert!((a.y - b.y).abs() <= 5e-4);
        }
    }

    #[test]
    fn test_parse_accepts_comments_and_commas() {
        let text = "# x (m), y(m)\n\n1.5, -2.0\n  3 4  \n# trailing comment\n-1e2\t7\n";
        let layout = parse_layout(text).unwrap();
        assert_eq!(
            layout.stations(),
            &[
                Station::new(1.5, -2.0),
                Station::new(3.0, 4.0),
                Station::new(-100.0, 7.0)
            ]
        );
    }

    #[test]
    fn test_parse_rejects_bad_rows() {
        let cases = [
            ("# x (m), y(m)\n1.0 2.0\n3.0\n", 3),
            ("1.0 2.0 3.0\n", 1),
            ("1.0 abc\n", 1),
        ];
        for (text, expected_line) in cases {
            match parse_layout(text) {
                Err(ArrayError::InputData(InputDataError::MalformedRow { line, .. })) => {
                    assert_eq!(line, expected_line)
                }
                other => panic!("unexpected result {:?}", other),
            }
        }
    }

    #[test]
    fn test_parse_empty_file() {
        let layout = parse_layout(HEADER).unwrap();
        assert!(layout.is_empty());
    }
}
