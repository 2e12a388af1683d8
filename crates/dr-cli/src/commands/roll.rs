use std::path::Path;

use colored::Colorize;
use serde_json::json;

use dr_core::{Outcome, evaluate, generate_dice_set_with};

pub fn run(config: Option<&Path>, seed: Option<u64>, times: u32, json: bool) -> Result<(), String> {
    let config = super::load_config(config, seed)?;
    let mut rng = config.rng();

    for n in 1..=times {
        let dice = generate_dice_set_with(&mut rng);
        let outcome = evaluate(&dice);
        if json {
            let line = json!({
                "roll": n,
                "dice": dice,
                "outcome": outcome,
                "label": outcome.label(),
            });
            println!("{line}");
        } else {
            println!("  {}  {}", dice.to_string().bold(), colorize(outcome));
        }
    }
    Ok(())
}

/// Rarer outcomes get louder colors.
pub fn colorize(outcome: Outcome) -> colored::ColoredString {
    let label = outcome.label();
    match outcome {
        Outcome::SixOfAKind | Outcome::FiveOfAKind => label.magenta().bold(),
        Outcome::Straight | Outcome::FourOfAKind => label.red().bold(),
        Outcome::FullHouse | Outcome::ThreePairs => label.yellow().bold(),
        Outcome::ThreeOfAKind | Outcome::TwoPairs => label.green(),
        Outcome::OnePair | Outcome::NoMatches => label.normal(),
    }
}
