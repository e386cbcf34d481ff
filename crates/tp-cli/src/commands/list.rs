use comfy_table::{ContentArrangement, Table};

use tp_pocket::PocketConfig;

pub fn run(config: PocketConfig) -> Result<(), String> {
    let pocket = super::open(config)?;
    let bag = pocket.bag();

    if bag.is_empty() {
        println!("  The bag is empty.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        "Id", "Name", "Sides", "Face", "Material", "Rolls", "Luck", "Tier",
    ]);

    for die in bag.dice() {
        table.add_row(vec![
            die.id().to_string(),
            die.nickname().unwrap_or("-").to_string(),
            die.sides().to_string(),
            die.face().to_string(),
            die.material().to_string(),
            die.history().len().to_string(),
            format!("{:+.2}", die.luck()),
            die.luck_tier().to_string(),
        ]);
    }

    println!("  {}", bag.nickname());
    println!("{table}");
    println!();
    println!(
        "  {} {}",
        bag.len(),
        if bag.len() == 1 { "die" } else { "dice" }
    );

    Ok(())
}
