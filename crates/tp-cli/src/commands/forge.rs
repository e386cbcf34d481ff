use tp_pocket::PocketConfig;

pub fn run(config: PocketConfig, sides: u32, count: u32) -> Result<(), String> {
    let mut pocket = super::open(config)?;
    for _ in 0..count {
        let id = pocket.bag_mut().forge(sides).map_err(|e| e.to_string())?;
        if let Some(die) = pocket.bag().die(id) {
            println!("  {id} {die}");
        }
    }

    super::save(&pocket)
}
