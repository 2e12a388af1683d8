use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use dr_core::{FACES, Outcome, RollStats};

pub fn run(config: Option<&Path>, rolls: u64, seed: Option<u64>, json: bool) -> Result<(), String> {
    if rolls == 0 {
        return Err("--rolls must be at least 1".into());
    }
    let config = super::load_config(config, seed)?;
    let mut rng = config.rng();
    let stats = RollStats::simulate(rolls, &mut rng);

    if json {
        let out = serde_json::to_string_pretty(&stats).map_err(|e| e.to_string())?;
        println!("{out}");
        return Ok(());
    }

    let exact = RollStats::exhaustive();

    let seed_label = match config.seed {
        Some(seed) => format!("seed={seed}"),
        None => "unseeded".to_string(),
    };
    println!(
        "  {} {}",
        "Roll Statistics".bold(),
        format!("({rolls} rolls, {seed_label})").dimmed()
    );
    println!();

    let mut outcomes = Table::new();
    outcomes.set_content_arrangement(ContentArrangement::Dynamic);
    outcomes.set_header(vec!["Outcome", "Count", "Observed", "Exact"]);
    for outcome in Outcome::ALL {
        outcomes.add_row(vec![
            outcome.label().to_string(),
            stats.outcome_count(outcome).to_string(),
            percent(stats.outcome_frequency(outcome)),
            percent(exact.outcome_frequency(outcome)),
        ]);
    }
    println!("{outcomes}");
    println!();

    let mut faces = Table::new();
    faces.set_content_arrangement(ContentArrangement::Dynamic);
    faces.set_header(vec!["Face", "Count", "Observed"]);
    for face in 1..=FACES {
        faces.add_row(vec![
            face.to_string(),
            stats.face_count(face).to_string(),
            percent(stats.face_frequency(face)),
        ]);
    }
    println!("{faces}");

    Ok(())
}

fn percent(freq: f64) -> String {
    format!("{:.2}%", freq * 100.0)
}
