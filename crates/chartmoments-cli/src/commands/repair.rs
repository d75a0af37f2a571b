use anyhow::Result;
use chartmoments_core::repair::overrides::OVERRIDES_VERSION;
use chartmoments_core::RepairPipeline;

use super::print_json;

/// Run the repair pipeline on one row and show the pass trace.
pub fn run_repair(
    artist: &str,
    title: &str,
    year: i32,
    rank: Option<u32>,
    json: bool,
) -> Result<()> {
    let pipeline = RepairPipeline::standard();
    let outcome = pipeline.run(artist, title, year, rank);

    if json {
        return print_json(&outcome);
    }

    println!("Input:  {artist:?} / {title:?}");
    println!("Output: {:?} / {:?}", outcome.fields.artist, outcome.fields.title);

    if outcome.changed() {
        println!("\nPasses applied:");
        for name in &outcome.applied {
            println!("  ✓ {name}");
        }
    } else {
        println!("\nNo pass changed this row.");
    }

    println!("\n{} passes, overrides table v{}", pipeline.passes().len(), OVERRIDES_VERSION);

    Ok(())
}
