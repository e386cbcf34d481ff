use tp_pocket::PocketConfig;

pub fn run(config: PocketConfig, die: &str, nickname: &str) -> Result<(), String> {
    let nickname = nickname.trim();
    if nickname.is_empty() {
        return Err("a nickname cannot be blank".into());
    }

    let mut pocket = super::open(config)?;
    let target = pocket
        .bag_mut()
        .find_die_mut(die)
        .map_err(|e| e.to_string())?;
    target.set_nickname(nickname);
    let id = target.id();
    println!("  Die {id} is now called {nickname}.");

    super::save(&pocket)
}
