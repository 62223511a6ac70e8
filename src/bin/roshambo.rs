//! Roshambo Binary
//!
//! Interactive Rock-Paper-Scissors against a uniformly random computer.
//!
//! Options: --name, --seed, --json, --plain, --verbose, --log-dir

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use roshambo::*;
use std::io::IsTerminal;

fn main() {
    let args = Args::parse();
    if let Err(e) = log(args.verbose, args.log_dir.as_deref()) {
        eprintln!("logging disabled: {:#}", e);
    }
    std::panic::set_hook(Box::new(|info| fail(&info.to_string())));
    if let Err(e) = play(&args) {
        fail(&format!("{:#}", e));
    }
}

fn play(args: &Args) -> anyhow::Result<()> {
    let rng = match args.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    };
    match args.plain || !std::io::stdin().is_terminal() {
        true => run(
            &mut Lines::new(std::io::stdin().lock(), std::io::stdout().lock()),
            rng,
            args.settings(),
        ),
        false => run(&mut Terminal, rng, args.settings()),
    }
}

fn fail(detail: &str) {
    log::error!("{}", detail);
    println!("{}", FAILURE);
    println!("Error details: {}", detail);
}
