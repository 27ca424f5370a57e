use crate::analysis::{BatchSummary, FileReport};
use crate::classifier::{ClassificationReport, ShapeLabel};
use crate::histogram::EdgeHistogram;
use std::path::Path;

pub fn print_report(path: &Path, report: &ClassificationReport, histogram_width: Option<usize>) {
    println!("=== Classification Report ===");
    println!("Image: {}", path.display());
    println!("  Label: {}", report.label);
    println!("  Spread (std dev of bin counts): {:.3}", report.spread);
    println!("  Strong edges: {}", report.strong_edges);
    println!("  Processing Time: {:.2}ms", report.processing_time_ms);

    if let Some(width) = histogram_width {
        println!();
        for line in render_histogram(&report.histogram, width) {
            println!("{}", line);
        }
    }
}

/// One line per bin: lower edge, count and a bar scaled to `width`.
pub fn render_histogram(histogram: &EdgeHistogram, width: usize) -> Vec<String> {
    let max_count = histogram.counts.iter().copied().max().unwrap_or(0).max(1);

    histogram
        .counts
        .iter()
        .zip(&histogram.edges)
        .map(|(&count, &edge)| {
            let bar = (count as usize * width) / max_count as usize;
            format!("{:>7.3} | {:>6} | {}", edge, count, "#".repeat(bar))
        })
        .collect()
}

pub fn print_labels(reports: &[FileReport]) {
    for file in reports {
        match (&file.report, &file.error) {
            (Some(report), _) => println!("{}: {}", file.path.display(), report.label),
            (None, Some(error)) => println!("{}: error: {}", file.path.display(), error),
            (None, None) => println!("{}: error: unknown", file.path.display()),
        }
    }
}

pub fn print_summary_table(summary: &BatchSummary) {
    println!("| Label | Count |");
    println!("|-------|-------|");
    for label in ShapeLabel::ALL {
        println!("| {} | {} |", label, summary.count(label));
    }
    println!("| failed | {} |", summary.failures);
    println!();
    println!("Total images: {}", summary.total);
    if let (Some(mean), Some(min), Some(max)) =
        (summary.mean_spread, summary.min_spread, summary.max_spread)
    {
        println!("Spread: mean {:.3}, min {:.3}, max {:.3}", mean, min, max);
    }
    if let Some(time) = summary.mean_processing_time_ms {
        println!("Mean processing time: {:.2}ms", time);
    }
}
