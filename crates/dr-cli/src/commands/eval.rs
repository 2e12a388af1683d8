use serde_json::json;

use dr_core::{DiceSet, FrequencyCount, evaluate};

pub fn run(values: &[String], json: bool) -> Result<(), String> {
    let dice = values.join(" ").parse::<DiceSet>().map_err(|e| e.to_string())?;
    let outcome = evaluate(&dice);

    if json {
        let line = json!({
            "dice": dice,
            "outcome": outcome,
            "label": outcome.label(),
        });
        println!("{line}");
        return Ok(());
    }

    let counts: Vec<String> = FrequencyCount::of(&dice)
        .iter()
        .map(|(face, count)| format!("{face}\u{00d7}{count}"))
        .collect();
    println!(
        "  {}  {}  ({})",
        dice,
        super::roll::colorize(outcome),
        counts.join(" ")
    );
    Ok(())
}
