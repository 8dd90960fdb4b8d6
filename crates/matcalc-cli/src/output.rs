//! CLI output formatting.

use std::fmt::Write as _;
use std::io::{self, Write};
use std::time::Duration;

use matcalc_core::Matrix;
use matcalc_orchestration::interfaces::SweepRow;

/// Render a matrix one row per line as `| a  b  c |`.
///
/// Every cell is left-aligned to the width of the widest element plus one.
#[must_use]
pub fn format_matrix(matrix: &Matrix) -> String {
    let width = matrix
        .iter()
        .map(|v| v.to_string().len())
        .max()
        .unwrap_or(0)
        + 1;

    let mut out = String::new();
    for row in matrix.rows() {
        out.push('|');
        for v in row {
            let _ = write!(out, " {v:<width$}");
        }
        out.push_str("|\n");
    }
    out
}

/// Format a duration for display.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 0.001 {
        format!("{:.2}µs", secs * 1_000_000.0)
    } else if secs < 1.0 {
        format!("{:.2}ms", secs * 1000.0)
    } else if secs < 60.0 {
        format!("{secs:.3}s")
    } else {
        let mins = (secs / 60.0).floor() as u64;
        let remaining = secs - (mins as f64 * 60.0);
        format!("{mins}m{remaining:.1}s")
    }
}

/// Format a mean time in microseconds, as shown in sweep tables.
#[must_use]
pub fn format_micros(us: f64) -> String {
    format!("{us:.2} microseconds")
}

/// Render one sweep row as a block of `Algorithm: time` lines.
#[must_use]
pub fn format_sweep_row(row: &SweepRow) -> String {
    let name_width = row
        .timings
        .iter()
        .map(|t| t.algorithm.len())
        .max()
        .unwrap_or(0)
        + 1;

    let mut out = format!("n = {}\n", row.n);
    for t in &row.timings {
        let label = format!("{}:", t.algorithm);
        let _ = writeln!(
            out,
            "  {label:<width$} {}",
            format_micros(t.mean_us),
            width = name_width
        );
    }
    out
}

/// Serialize sweep rows as pretty-printed JSON.
///
/// # Errors
///
/// Returns an I/O error if the writer fails.
pub fn write_sweep_json(rows: &[SweepRow], out: &mut dyn Write) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, rows)?;
    writeln!(out)
}

/// Write sweep rows as JSON to a file.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn write_to_file(path: &str, rows: &[SweepRow]) -> io::Result<()> {
    tracing::debug!(path, rows = rows.len(), "writing sweep JSON");
    let mut file = std::fs::File::create(path)?;
    write_sweep_json(rows, &mut file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use matcalc_orchestration::interfaces::AlgorithmTiming;

    fn row() -> SweepRow {
        SweepRow {
            n: 4,
            timings: vec![
                AlgorithmTiming::new("Classical", Duration::from_micros(12)),
                AlgorithmTiming::new("Strassen", Duration::from_micros(340)),
            ],
        }
    }

    #[test]
    fn format_matrix_layout() {
        let m = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
        assert_eq!(format_matrix(&m), "| 1  2 |\n| 3  4 |\n");
    }

    #[test]
    fn format_matrix_widest_element() {
        let m = Matrix::from_rows(vec![vec![-12, 5], vec![7, 100]]).unwrap();
        let s = format_matrix(&m);
        let lines: Vec<&str> = s.lines().collect();
        assert_eq!(lines[0], "| -12  5   |");
        assert_eq!(lines[1], "| 7    100 |");
        assert_eq!(lines[0].len(), lines[1].len());
    }

    #[test]
    fn format_matrix_scalar() {
        assert_eq!(format_matrix(&Matrix::scalar(-3)), "| -3 |\n");
    }

    #[test]
    fn format_matrix_empty() {
        assert_eq!(format_matrix(&Matrix::zero(0)), "");
    }

    #[test]
    fn format_duration_micro() {
        let s = format_duration(Duration::from_nanos(500));
        assert!(s.contains("µs"));
    }

    #[test]
    fn format_duration_milli() {
        let s = format_duration(Duration::from_millis(42));
        assert!(s.contains("ms"));
    }

    #[test]
    fn format_duration_seconds() {
        let s = format_duration(Duration::from_secs_f64(3.5));
        assert_eq!(s, "3.500s");
    }

    #[test]
    fn format_duration_minutes() {
        let s = format_duration(Duration::from_secs(90));
        assert_eq!(s, "1m30.0s");
    }

    #[test]
    fn format_micros_two_decimals() {
        assert_eq!(format_micros(12.3456), "12.35 microseconds");
    }

    #[test]
    fn format_sweep_row_lines() {
        let s = format_sweep_row(&row());
        let lines: Vec<&str> = s.lines().collect();
        assert_eq!(lines[0], "n = 4");
        assert_eq!(lines[1], "  Classical: 12.00 microseconds");
        assert_eq!(lines[2], "  Strassen:  340.00 microseconds");
    }

    #[test]
    fn sweep_json_is_parseable() {
        let mut buf = Vec::new();
        write_sweep_json(&[row()], &mut buf).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value[0]["n"], 4);
        assert_eq!(value[0]["timings"][1]["algorithm"], "Strassen");
    }
}
