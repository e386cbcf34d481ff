use comfy_table::{ContentArrangement, Table};

use tp_pocket::PocketConfig;

pub fn run(config: PocketConfig, die: &str) -> Result<(), String> {
    let pocket = super::open(config)?;
    let die = super::find(&pocket, die)?;

    println!("  {die}");
    if die.history().is_empty() {
        println!("  Never rolled.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["#", "Rolled by", "Face"]);
    for (i, (user, face)) in die.rolls().enumerate() {
        table.add_row(vec![(i + 1).to_string(), user.to_string(), face.to_string()]);
    }
    println!("{table}");
    println!();
    println!(
        "  Luck: {:+.2} ({})",
        die.luck(),
        super::tier_label(die.luck_tier())
    );

    Ok(())
}
