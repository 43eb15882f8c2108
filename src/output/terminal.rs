// Colored terminal output for classifications and accuracy sweeps.
//
// This module handles all terminal-specific formatting. The text bar chart
// at the end of an accuracy report stands in for a plot of accuracy vs
// threshold; it only ever sees the finished report.

use colored::Colorize;

use crate::corpus::Document;
use crate::evaluation::accuracy::{predict, AccuracyReport, DegeneratePolicy};
use crate::scoring::overlap::ScoreBreakdown;

const PREVIEW_CHARS: usize = 120;
const CHART_WIDTH: usize = 30;

/// Display the score breakdown of one document.
pub fn display_score(document: &Document, breakdown: &ScoreBreakdown) {
    println!("\n{}", format!("=== Score for {} ===", document.id()).bold());

    let preview = super::truncate_chars(&super::single_line(&document.text), PREVIEW_CHARS);
    println!("  {}", preview.dimmed());
    println!(
        "  Unique words: {}  |  In vocabulary: {}",
        breakdown.unique_words, breakdown.matched_words
    );

    match breakdown.score() {
        Some(score) => println!("  Score: {:.4}", score),
        None => println!("  Score: {}", "undefined (no qualifying words)".yellow()),
    }
}

/// Display ground truth and the prediction at each threshold.
pub fn display_classification(
    document: &Document,
    breakdown: &ScoreBreakdown,
    thresholds: &[f64],
) {
    display_score(document, breakdown);

    let truth = if document.is_shakespeare {
        "written by Shakespeare".green()
    } else {
        "not written by Shakespeare".red()
    };
    println!("  Ground truth (from file name): {truth}");

    let Some(score) = breakdown.score() else {
        return;
    };

    if thresholds.is_empty() {
        println!("  {}", "No thresholds given.".dimmed());
        return;
    }

    println!();
    for &threshold in thresholds {
        let predicted = predict(score, threshold);
        let verdict = if predicted {
            "Shakespeare is the author".bold()
        } else {
            "Shakespeare is not the author".normal()
        };
        let mark = if predicted == document.is_shakespeare {
            "ok".green()
        } else {
            "wrong".red()
        };
        println!(
            "  With a threshold of {:.2} we predict that {} [{}]",
            threshold, verdict, mark
        );
    }
}

/// Display an accuracy sweep as a table followed by a bar chart.
pub fn display_accuracy_report(report: &AccuracyReport, policy: DegeneratePolicy) {
    println!(
        "\n{}",
        format!(
            "=== Accuracy vs Threshold ({} documents) ===",
            report.documents
        )
        .bold()
    );
    if report.excluded > 0 {
        println!(
            "  {} {} documents excluded (no qualifying words, policy: {})",
            "~".yellow(),
            report.excluded,
            policy
        );
    }

    if report.is_empty() {
        println!("  {}", "No thresholds given.".dimmed());
        return;
    }

    println!();
    println!(
        "  {:>9}  {:>8}  {:>5}  {:>5}  {:>5}  {:>5}",
        "Threshold".dimmed(),
        "Accuracy".dimmed(),
        "TP".dimmed(),
        "FP".dimmed(),
        "TN".dimmed(),
        "FN".dimmed(),
    );
    println!("  {}", "-".repeat(48).dimmed());

    for entry in &report.entries {
        let c = entry.counts;
        println!(
            "  {:>9.2}  {:>8.4}  {:>5}  {:>5}  {:>5}  {:>5}",
            entry.threshold,
            entry.accuracy,
            c.true_positives,
            c.false_positives,
            c.true_negatives,
            c.false_negatives,
        );
    }

    println!();
    let best = report.best();
    for entry in &report.entries {
        let bar = super::bar(entry.accuracy, CHART_WIDTH);
        let is_best = best.is_some_and(|b| std::ptr::eq(b, entry));
        let colored_bar = if is_best {
            bar.green().bold()
        } else {
            bar.normal()
        };
        println!(
            "  {:>5.2} {} {:.1}%",
            entry.threshold,
            colored_bar,
            entry.accuracy * 100.0
        );
    }

    if let Some(best) = best {
        println!(
            "\n  Best threshold: {} ({:.1}% accuracy)",
            format!("{:.2}", best.threshold).bold(),
            best.accuracy * 100.0
        );
    }
}
