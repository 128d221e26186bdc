//! Display functions for command results

use super::formatters::{answer_ratio_bar, percentage};
use crate::commands::{GenerateReport, ListStatistics, VerifyReport};
use colored::Colorize;

/// Print per-length counts and totals
pub fn print_statistics(stats: &ListStatistics) {
    println!("\n📊 {}", "By length:".bright_cyan().bold());
    for bucket in &stats.buckets {
        println!(
            "   {:>2} letters: {:5} words, {:5} answers  [{}] {:5.1}%",
            bucket.length,
            bucket.words,
            bucket.answers,
            answer_ratio_bar(bucket.answers, bucket.words, 20).green(),
            percentage(bucket.answers, bucket.words)
        );
    }

    println!("\n📈 {}", "Summary:".bright_cyan().bold());
    println!(
        "   Total words:   {}",
        format!("{}", stats.total_words()).bright_yellow().bold()
    );
    println!(
        "   Total answers: {}",
        format!("{}", stats.total_answers()).bright_yellow().bold()
    );
}

/// Print the result of a generate run
pub fn print_generate_report(report: &GenerateReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "WORD LISTS GENERATED".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    for bucket in &report.stats.buckets {
        println!(
            "Created {}-letter: {} words, {} answers",
            bucket.length, bucket.words, bucket.answers
        );
    }

    print_statistics(&report.stats);

    println!(
        "\n   Output:        {}",
        report.output_dir.display().to_string().bright_white()
    );
    println!("   Time taken:    {:.2}s", report.duration.as_secs_f64());
}

/// Print the result of verifying an output tree
pub fn print_verify_report(report: &VerifyReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "VERIFY:".bright_cyan().bold(),
        report.output_dir.display().to_string().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());
    println!();

    for bucket in &report.buckets {
        let counts = format!("{} words, {} answers", bucket.words, bucket.answers);
        if bucket.violations.is_empty() {
            println!("   {} {:>2} letters: {counts}", "✅".green(), bucket.length);
        } else {
            println!(
                "   {} {:>2} letters: {counts} ({} problems)",
                "❌".red(),
                bucket.length,
                bucket.violations.len()
            );
            for violation in &bucket.violations {
                println!("        {}", violation.to_string().yellow());
            }
        }
    }

    println!();
    if report.is_clean() {
        println!("{}", "✅ All word lists satisfy the contract".green().bold());
    } else {
        println!(
            "{}",
            format!("❌ Found {} problems", report.violation_count())
                .red()
                .bold()
        );
    }
}
