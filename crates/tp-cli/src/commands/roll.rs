use colored::Colorize;

use tp_pocket::PocketConfig;

pub fn run(config: PocketConfig, notation: &str) -> Result<(), String> {
    let mut pocket = super::open(config)?;
    let result = pocket.roll(notation).map_err(|e| e.to_string())?;

    println!("  {notation}: {result}");
    for (id, face) in &result.rolls {
        if let Some(die) = pocket.bag().die(*id) {
            println!(
                "    {} d{:<3} {} ({})",
                id.to_string().dimmed(),
                die.sides(),
                face.to_string().bold(),
                super::tier_label(die.luck_tier())
            );
        }
    }

    super::save(&pocket)
}
