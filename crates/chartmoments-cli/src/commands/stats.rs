use anyhow::Result;
use chartmoments_search::ChartEngine;

use super::print_json;

/// Show corpus statistics and the ingestion report.
pub fn show_stats(engine: &ChartEngine, json: bool) -> Result<()> {
    let stats = engine.stats();
    let report = engine.report();

    if json {
        return print_json(&serde_json::json!({
            "stats": stats,
            "report": report,
        }));
    }

    println!("\n📊 Chartmoments Stats\n");
    println!("  Records: {}", stats.total_records);
    match (stats.min_year, stats.max_year) {
        (Some(min), Some(max)) => println!("  Years: {min}-{max}"),
        _ => println!("  Years: <none>"),
    }
    println!("  Charts:");
    for chart in &stats.chart_names {
        println!("    {chart}");
    }

    let primary = report
        .primary_path
        .as_ref()
        .map_or_else(|| "<none found>".to_string(), |p| p.display().to_string());
    println!("\n  Primary source: {primary}");
    println!("    records: {}", report.primary_records);
    println!("    rejected: {}", report.primary_rejected);

    println!("  Supplemental files: {}", report.supplemental_files);
    println!("    skipped: {}", report.supplemental_files_skipped);
    println!("    records: {}", report.supplemental_records);
    println!("    repaired: {}", report.rows_repaired);
    println!(
        "    dropped: {} missing artist/title, {} missing rank, {} empty after repair",
        report.rows_missing_fields, report.rows_missing_rank, report.rows_dropped_after_repair
    );

    if stats.total_records == 0 {
        println!("\n  No chart data found. Run `chartmoments config` to check the source paths.");
    }

    Ok(())
}
