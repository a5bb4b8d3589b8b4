//! Roshambo Binary
//!
//! Plays a human at the terminal against a randomly chosen robot strategy.
//!
//! Options: --rounds, --opponent, --seed, --plain, -v

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use roshambo::Arbitrary;
use roshambo::gameroom::*;
use roshambo::players::*;
use std::io::IsTerminal;

#[derive(Parser)]
#[command(name = "roshambo", about = "Rock, Paper, Scissors against the machine")]
struct Args {
    /// Rounds in the match.
    #[arg(long, default_value_t = roshambo::ROUNDS)]
    rounds: usize,
    /// Robot strategy. Chosen at random when omitted.
    #[arg(long, value_enum)]
    opponent: Option<Opponent>,
    /// Seed for the robot and the palette, for reproducible matches.
    #[arg(long)]
    seed: Option<u64>,
    /// Disable colored round output.
    #[arg(long)]
    plain: bool,
    /// Log verbosity on stderr (-v info, -vv debug).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            _ => log::LevelFilter::Debug,
        }
    }
    fn rng(&self) -> SmallRng {
        match self.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        }
    }
}

fn human() -> Seat {
    match std::io::stdin().is_terminal() {
        true => Seat::from(Human::from(Terminal)),
        false => Seat::from(Human::from(Script::from((
            std::io::stdin().lock(),
            std::io::stdout(),
        )))),
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    roshambo::log(args.level());
    let _signals = roshambo::kys()?;
    let ref mut rng = args.rng();
    let opponent = match args.opponent {
        Some(opponent) => opponent,
        None if args.seed.is_some() => Opponent::sample(rng),
        None => Opponent::random(),
    };
    log::info!("opponent strategy: {}", opponent);
    let robot = Seat::new(opponent.spawn(SmallRng::from_rng(rng)));
    let mut console = Console::new(SmallRng::from_rng(rng), args.plain);
    let mut room = Room::new(human(), robot, args.rounds)?;
    match room.play(&mut console) {
        Ok(verdict) => {
            log::info!("match over: {}", verdict);
            Ok(())
        }
        Err(e) if e.is::<Abort>() => {
            log::debug!("user left: {}", e);
            println!("\n{}", roshambo::FAREWELL);
            Ok(())
        }
        Err(e) => Err(e),
    }
}
