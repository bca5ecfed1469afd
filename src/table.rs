use crate::bands::Band;

const HEADERS: [&str; 4] = ["#", "low (Hz)", "center (Hz)", "high (Hz)"];

/// Render bands as a plain-text table, one row per band, frequencies
/// rounded to `precision` decimal places.
pub fn format_table(bands: &[Band], precision: usize) -> String {
    let rows: Vec<[String; 4]> = bands
        .iter()
        .enumerate()
        .map(|(i, b)| {
            [
                i.to_string(),
                format!("{:.*}", precision, b.low),
                format!("{:.*}", precision, b.center),
                format!("{:.*}", precision, b.high),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(str::len);
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.len());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &HEADERS.map(String::from), &widths);
    let rule: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();
    out.push_str(&rule.join("-+-"));
    out.push('\n');
    for row in &rows {
        push_row(&mut out, row, &widths);
    }
    out
}

fn push_row(out: &mut String, cells: &[String; 4], widths: &[usize; 4]) {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, &w)| format!("{:>w$}", cell, w = w))
        .collect();
    out.push_str(&padded.join(" | "));
    out.push('\n');
}
