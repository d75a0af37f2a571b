use anyhow::Result;
use chartmoments_search::{ChartEngine, Strategy};

use super::{format_record, print_json};

/// Show the top entries for a year.
pub fn show_top(
    engine: &ChartEngine,
    year: i32,
    chart: Option<&str>,
    limit: usize,
    json: bool,
) -> Result<()> {
    let top = engine.top_by_year(year, chart, limit);

    if json {
        return print_json(&top);
    }

    let heading = chart.unwrap_or("all charts");
    if top.is_empty() {
        println!("No entries for {year} ({heading})");
        return Ok(());
    }

    println!("Top {} for {year} ({heading}):", top.len());
    for record in top {
        println!("  {}", format_record(record));
    }

    Ok(())
}

/// Show the number-one entry for a year.
pub fn show_number_one(engine: &ChartEngine, year: i32, chart: &str, json: bool) -> Result<()> {
    let record = engine.number_one_by_year(year, Some(chart));

    if json {
        return print_json(&record);
    }

    match record {
        Some(record) => println!("{year}: {}", format_record(record)),
        None => println!("No number one for {year} ({chart})"),
    }

    Ok(())
}

/// Pick a random entry for a year and show where it came from.
pub fn show_random(engine: &ChartEngine, year: i32, chart: &str, json: bool) -> Result<()> {
    let pick = engine.pick_random_by_year_with_meta(year, chart);

    if json {
        return print_json(&pick);
    }

    let Some(record) = pick.record else {
        println!("Nothing on any chart for {year}");
        return Ok(());
    };

    println!("{year}: {}", format_record(record));
    let source = pick.meta.chart.as_deref().unwrap_or_default();
    match pick.meta.strategy {
        Strategy::Requested => {
            println!("  from {source}, 1 of {}", pick.meta.pool_size);
        }
        strategy => {
            println!(
                "  no {} data for {year}; used {source} ({strategy}), 1 of {}",
                pick.meta.requested_chart, pick.meta.pool_size
            );
        }
    }

    Ok(())
}
