//! Report Module
//! Plain-text tables for the statistics printed to stdout.

use crate::stats::{ColumnSummary, GroupMeans, QuartileBins, TargetCorrelation, TargetStats};

const PRECISION: usize = 6;

/// Right-aligned text table: a header row, then one labelled row per entry.
fn render_table(corner: &str, header: &[String], rows: &[(String, Vec<String>)]) -> String {
    let label_width = rows
        .iter()
        .map(|(label, _)| label.len())
        .chain(std::iter::once(corner.len()))
        .max()
        .unwrap_or(0);
    let widths: Vec<usize> = header
        .iter()
        .enumerate()
        .map(|(i, h)| {
            rows.iter()
                .filter_map(|(_, cells)| cells.get(i).map(String::len))
                .chain(std::iter::once(h.len()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let line = |label: &str, cells: &[String]| -> String {
        let mut line = format!("{label:<label_width$}");
        for (cell, w) in cells.iter().zip(widths.iter().copied()) {
            line.push_str(&format!("  {cell:>w$}"));
        }
        line.push('\n');
        line
    };

    let mut out = line(corner, header);
    for (label, cells) in rows {
        out.push_str(&line(label, cells));
    }
    out
}

fn num(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else {
        format!("{:.*}", PRECISION, value)
    }
}

/// Column-wise describe table: statistics as rows, columns as columns.
pub fn describe_table(summaries: &[ColumnSummary]) -> String {
    let header: Vec<String> = summaries.iter().map(|s| s.name.clone()).collect();
    let row = |label: &str, f: &dyn Fn(&ColumnSummary) -> String| -> (String, Vec<String>) {
        (label.to_string(), summaries.iter().map(f).collect())
    };
    let rows: Vec<(String, Vec<String>)> = vec![
        row("count", &|s| format!("{:.1}", s.count as f64)),
        row("mean", &|s| num(s.mean)),
        row("std", &|s| num(s.std)),
        row("min", &|s| num(s.min)),
        row("25%", &|s| num(s.p25)),
        row("50%", &|s| num(s.median)),
        row("75%", &|s| num(s.p75)),
        row("max", &|s| num(s.max)),
    ];
    render_table("", &header, &rows)
}

/// Mean, median and std per target.
pub fn target_table(stats: &[TargetStats]) -> String {
    let header: Vec<String> = stats.iter().map(|s| s.name.clone()).collect();
    let rows: Vec<(String, Vec<String>)> = vec![
        ("mean".to_string(), stats.iter().map(|s| num(s.mean)).collect()),
        ("median".to_string(), stats.iter().map(|s| num(s.median)).collect()),
        ("std".to_string(), stats.iter().map(|s| num(s.std)).collect()),
    ];
    render_table("", &header, &rows)
}

/// Grouped target means indexed by bucket label, with each bucket's
/// `enrichment_1` interval alongside the rank label.
pub fn grouped_table(groups: &[GroupMeans], bins: &QuartileBins) -> String {
    let header = vec![
        "k-inf".to_string(),
        "PPPF".to_string(),
        "rows".to_string(),
        "enrichment_1 interval".to_string(),
    ];
    let rows: Vec<(String, Vec<String>)> = groups
        .iter()
        .map(|g| {
            let interval = bins
                .interval(g.label)
                .map(|(lo, hi)| {
                    let open = if g.label == 0 { '[' } else { '(' };
                    format!("{open}{lo:.3}, {hi:.3}]")
                })
                .unwrap_or_default();
            (
                g.label.to_string(),
                vec![num(g.k_inf), num(g.pppf), g.count.to_string(), interval],
            )
        })
        .collect();
    render_table("enrichment_range", &header, &rows)
}

/// Target correlation columns, already sorted by `k-inf`.
pub fn correlation_table(view: &[TargetCorrelation]) -> String {
    let header = vec!["k-inf".to_string(), "PPPF".to_string()];
    let rows: Vec<(String, Vec<String>)> = view
        .iter()
        .map(|r| (r.column.clone(), vec![num(r.k_inf), num(r.pppf)]))
        .collect();
    render_table("", &header, &rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grouped_table_lists_buckets_in_order() {
        let bins = QuartileBins::from_values(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        let groups = vec![
            GroupMeans {
                label: 0,
                count: 2,
                k_inf: 1.1,
                pppf: 1.3,
            },
            GroupMeans {
                label: 1,
                count: 1,
                k_inf: 1.2,
                pppf: 1.4,
            },
        ];

        let table = grouped_table(&groups, &bins);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("enrichment_range"));
        assert!(lines[1].starts_with('0'));
        assert!(lines[1].contains("[1.000, 2.000]"));
        assert!(lines[2].starts_with('1'));
        assert!(lines[2].contains("(2.000, 3.000]"));
    }

    #[test]
    fn describe_table_has_eight_statistic_rows() {
        let summaries = vec![
            ColumnSummary::compute("k-inf", &[1.0, 1.2, 1.4]),
            ColumnSummary::compute("PPPF", &[1.5]),
        ];

        let table = describe_table(&summaries);
        let labels: Vec<&str> = table
            .lines()
            .skip(1)
            .filter_map(|l| l.split_whitespace().next())
            .collect();

        assert_eq!(labels, vec!["count", "mean", "std", "min", "25%", "50%", "75%", "max"]);
        assert!(table.contains("NaN"));
        assert!(table.contains("1.200000"));
    }

    #[test]
    fn correlation_table_keeps_row_order() {
        let view = vec![
            TargetCorrelation {
                column: "k-inf".into(),
                k_inf: 1.0,
                pppf: -0.5,
            },
            TargetCorrelation {
                column: "enrichment_1".into(),
                k_inf: 0.9,
                pppf: f64::NAN,
            },
        ];

        let table = correlation_table(&view);
        let lines: Vec<&str> = table.lines().collect();

        assert!(lines[1].starts_with("k-inf"));
        assert!(lines[2].starts_with("enrichment_1"));
        assert!(lines[2].ends_with("NaN"));
    }
}
