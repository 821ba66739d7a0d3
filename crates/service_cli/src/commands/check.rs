//! Check command implementation
//!
//! Prints the resolved configuration after loading and validation.

use pitstop_core::types::Compound;
use tracing::info;

use crate::config::AppConfig;
use crate::report::OutputFormat;
use crate::Result;

/// Run the check command
pub fn run(config: &AppConfig, format: OutputFormat) -> Result<()> {
    info!("Checking configuration...");

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(config)?);
        return Ok(());
    }

    let race = &config.race;
    println!("Race");
    println!("  Track:          {}", race.track);
    println!("  Laps:           {}", race.laps);
    println!("  Base lap time:  {:.3}s", race.base_lap_time);
    println!("  Pit loss:       {:.3}s (sd {:.3}s)", race.pit_loss, race.pit_sigma);
    println!("  Fuel effect:    {:.4}s/lap", race.fuel_effect);
    println!("  Lap noise sd:   {:.3}s", race.noise_sigma);

    println!("Tires");
    for compound in Compound::ALL {
        let model = config.tires.model(compound);
        println!(
            "  {:<8} base={:.3} linear={:.4} quadratic={:.5}",
            compound.name(),
            model.base,
            model.linear,
            model.quadratic
        );
    }

    let search = &config.search;
    println!("Search");
    println!("  Pairs:          {}", search.pairs.join(", "));
    println!("  Pit laps:       {}..={}", search.lap_min, search.lap_max);
    println!("  Lambdas:        {:?}", search.lambdas);
    println!("  Trials:         {} (seed {})", search.n_trials, search.seed);
    println!("  Top K:          {}", search.top_k);

    println!("Compare");
    println!("  Strategies:     {}", config.compare.strategies.join(", "));
    println!("  Trials:         {} (seed {})", config.compare.n_trials, config.compare.seed);

    println!("\nConfiguration OK");
    Ok(())
}
