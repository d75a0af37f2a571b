use anyhow::Result;
use chartmoments_etl::{config, Config};

use super::print_json;

/// Show the effective configuration, CLI overrides included.
pub fn show_config(config: &Config, json: bool) -> Result<()> {
    if json {
        return print_json(config);
    }

    println!("Current Configuration");
    println!("=====================\n");

    println!("Config file: {}", config::config_file_path().display());

    let exists = config::config_file_path().exists();
    println!("File exists: {}\n", if exists { "yes" } else { "no (using defaults)" });

    println!("Settings:");
    println!(
        "  primary_path: {}",
        config
            .primary_path
            .as_ref()
            .map_or_else(|| String::from("<not set>"), |p| p.display().to_string())
    );
    println!(
        "  primary_candidates: {}",
        config.primary_candidates.as_deref().unwrap_or("<not set>")
    );
    println!("  supplemental_dir: {}", config.supplemental_dir.display());
    println!("  supplemental_chart: {}", config.supplemental_chart);
    println!(
        "  backup_chart: {}",
        config.backup_chart.as_deref().unwrap_or("<none>")
    );

    let mut fallbacks: Vec<_> = config.fallback_charts.iter().collect();
    fallbacks.sort();
    for (from, to) in fallbacks {
        println!("  fallback_charts: {from} -> {to}");
    }

    println!("\nPrimary candidates, in order:");
    for path in config.primary_candidate_paths() {
        let marker = if path.exists() { "✓" } else { " " };
        println!("  {marker} {}", path.display());
    }

    println!("\nPriority: CLI args > ENV vars (CHARTS_*) > Config file > Defaults");

    Ok(())
}

/// Show the config file path.
pub fn show_path() {
    println!("{}", config::config_file_path().display());
}

/// Show example configuration.
pub fn show_example() {
    print!("{}", config::example_config());
}

/// Initialize config file with defaults.
pub fn init_config() -> Result<()> {
    let created = config::ensure_config_file()?;
    let config_path = config::config_file_path();

    if created {
        println!("✓ Created config file: {}", config_path.display());
        println!("\nEdit this file to configure chartmoments.");
    } else {
        println!("Config file already exists: {}", config_path.display());
    }

    Ok(())
}
