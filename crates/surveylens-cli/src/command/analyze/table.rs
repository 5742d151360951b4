//! Console summary tables
//!
//! Fixed-width tables printed to stdout. Long tables show only their top rows;
//! the exported report keeps everything.

use surveylens_analysis::{
    aggregate::{CookingMethodSummary, CountEntry, MetricComparison, TagRating},
    report::{KeyFindings, SurveyReport, VariantReport},
};

const TOP_ADJECTIVES: usize = 15;
const TOP_TAGS: usize = 10;

pub(super) fn print_report(report: &SurveyReport) {
    println!("Survey Analysis Report ({} responses)", report.total_responses);
    println!("==========================================\n");

    for variant in &report.variants {
        print_variant(variant);
    }

    if !report.comparison.is_empty() {
        println!("Rating Comparison");
        println!("-----------------");
        print_comparison(&report.comparison);
        println!();
    }

    if let Some(methods) = &report.cooking_methods {
        println!("Cooking Methods");
        println!("---------------");
        print_cooking_methods(methods);
        println!();
    }

    print_key_findings(&report.key_findings);
}

fn print_variant(variant: &VariantReport) {
    let title = format!("Product {}", variant.variant);
    println!("{title}");
    println!("{}", "-".repeat(title.len()));
    println!(
        "  Adjectives: {} from likes, {} from dislikes",
        variant.likes_adjective_total, variant.dislikes_adjective_total
    );
    if let Some(taste) = &variant.taste {
        println!(
            "  Taste: mean {:.2}, median {:.1}, std dev {:.2} (n={}, range {:.0}-{:.0})",
            taste.mean, taste.median, taste.std_dev, taste.count, taste.min, taste.max
        );
    } else {
        println!("  Taste: no ratings");
    }
    let sentiment = &variant.sentiment;
    println!(
        "  Sentiment: {} positive, {} negative, {} neutral",
        sentiment.positive, sentiment.negative, sentiment.neutral
    );
    println!();

    println!("  Positive adjectives (top {TOP_ADJECTIVES})");
    print_counts("Adjective", &variant.positive_adjectives.grouped, TOP_ADJECTIVES);
    println!();

    println!("  Negative adjectives (top {TOP_ADJECTIVES})");
    print_counts("Adjective", &variant.negative_adjectives.grouped, TOP_ADJECTIVES);
    println!();

    println!("  Tags (top {TOP_TAGS})");
    print_counts("Tag", &variant.tag_frequency, TOP_TAGS);
    println!();

    println!("  Taste by tag (top {TOP_TAGS})");
    print_tag_ratings(&variant.tag_ratings, TOP_TAGS);
    println!();
}

fn print_counts(label_col: &str, entries: &[CountEntry], limit: usize) {
    if entries.is_empty() {
        println!("    (none)");
        return;
    }
    println!("    {label_col:<24} {:>8}", "Count");
    // label(24) + count(8) + spaces(1)
    println!("    {}", "-".repeat(33));
    for entry in entries.iter().take(limit) {
        println!("    {:<24} {:>8}", entry.key, entry.count);
    }
}

fn print_tag_ratings(ratings: &[TagRating], limit: usize) {
    if ratings.is_empty() {
        println!("    (none)");
        return;
    }
    println!("    {:<24} {:>10} {:>10}", "Tag", "Mean", "Responses");
    // tag(24) + mean(10) + responses(10) + spaces(2)
    println!("    {}", "-".repeat(46));
    for rating in ratings.iter().take(limit) {
        println!(
            "    {:<24} {:>10.2} {:>10}",
            rating.tag, rating.mean, rating.responses
        );
    }
}

fn print_comparison(metrics: &[MetricComparison]) {
    println!(
        "  {:<20} {:>10} {:>10} {:>12}",
        "Metric", "Product A", "Product B", "Diff (B-A)"
    );
    // metric(20) + a(10) + b(10) + diff(12) + spaces(3)
    println!("  {}", "-".repeat(55));
    for metric in metrics {
        println!(
            "  {:<20} {:>10.2} {:>10.2} {:>+12.2}",
            metric.metric.to_string(),
            metric.mean_a,
            metric.mean_b,
            metric.difference
        );
    }
}

fn print_cooking_methods(methods: &[CookingMethodSummary]) {
    let mean_str = |mean: Option<f64>| mean.map_or("N/A".to_string(), |m| format!("{m:.2}"));
    println!(
        "  {:<20} {:>10} {:>10} {:>10}",
        "Method", "Responses", "Taste A", "Taste B"
    );
    // method(20) + responses(10) + a(10) + b(10) + spaces(3)
    println!("  {}", "-".repeat(53));
    for method in methods {
        println!(
            "  {:<20} {:>10} {:>10} {:>10}",
            method.method,
            method.responses,
            mean_str(method.mean_taste_a),
            mean_str(method.mean_taste_b),
        );
    }
}

fn print_key_findings(findings: &KeyFindings) {
    let mean_str = |mean: Option<f64>| mean.map_or("N/A".to_string(), |m| format!("{m:.2}"));
    let tag_str = |tag: Option<&CountEntry>| {
        tag.map_or("N/A".to_string(), |t| format!("{} ({})", t.key, t.count))
    };

    println!("Key Findings");
    println!("------------");
    println!("  Mean taste A : {}", mean_str(findings.mean_taste_a));
    println!("  Mean taste B : {}", mean_str(findings.mean_taste_b));
    match findings.winner {
        Some(winner) => println!("  Preferred    : Product {winner}"),
        None => println!("  Preferred    : N/A"),
    }
    println!("  Top tag A    : {}", tag_str(findings.top_tag_a.as_ref()));
    println!("  Top tag B    : {}", tag_str(findings.top_tag_b.as_ref()));
}
