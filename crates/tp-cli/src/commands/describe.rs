use colored::Colorize;

use tp_pocket::PocketConfig;

pub fn run(config: PocketConfig, die: Option<&str>) -> Result<(), String> {
    let pocket = super::open(config)?;
    let bag = pocket.bag();

    if let Some(query) = die {
        println!("{}", super::find(&pocket, query)?);
        return Ok(());
    }

    if bag.is_empty() {
        println!("  The bag is empty.");
        return Ok(());
    }
    for die in bag.dice() {
        println!("  {} {die}", die.id().to_string().dimmed());
    }
    Ok(())
}
