use clap::Parser;
use std::io::{self, BufRead, Write};
use twentyone::{CardView, GameError, GameRules, RoundController, TableSnapshot};

type BoxErr = Box<dyn std::error::Error + Send + Sync>;

#[derive(Parser)]
#[command(
    name = "table",
    about = "Play rounds against the house from the terminal"
)]
struct Args {
    /// Seed for the shoe shuffle (random when omitted)
    #[arg(long, env = "TWENTYONE_SEED")]
    seed: Option<u64>,

    /// Show every dealer card while the round is in progress
    #[arg(long, default_value_t = false)]
    reveal_dealer: bool,

    /// Print snapshots as JSON instead of text
    #[arg(long, default_value_t = false)]
    json: bool,
}

enum Command {
    Deal,
    Hit,
    Stand,
    NewRound,
    NewGame,
    Quit,
}

fn parse_command(line: &str) -> Option<Command> {
    match line.trim().to_lowercase().as_str() {
        "deal" | "d" => Some(Command::Deal),
        "hit" | "h" => Some(Command::Hit),
        "stand" | "s" => Some(Command::Stand),
        "round" | "r" => Some(Command::NewRound),
        "game" | "g" => Some(Command::NewGame),
        "quit" | "q" | "exit" => Some(Command::Quit),
        _ => None,
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    dotenvy::dotenv().ok();

    let args = Args::parse();
    let rules = GameRules {
        shuffle_seed: args.seed,
        mask_dealer_hole_cards: !args.reveal_dealer,
    };

    if let Err(e) = run(rules, args.json) {
        log::error!("{e}");
        std::process::exit(1);
    }
}

fn run(rules: GameRules, json: bool) -> Result<(), BoxErr> {
    let mut game = RoundController::new(rules);
    let stdin = io::stdin();
    let mut out = io::stdout().lock();

    print_snapshot(&mut out, &game.snapshot(), json)?;
    writeln!(out, "Commands: deal, hit, stand, round, game, quit")?;

    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let result: Result<TableSnapshot, GameError> = match parse_command(&line) {
            Some(Command::Deal) => game.deal(),
            Some(Command::Hit) => game.hit(),
            Some(Command::Stand) => game.stand(),
            Some(Command::NewRound) => game.new_round(),
            Some(Command::NewGame) => Ok(game.new_game()),
            Some(Command::Quit) => break,
            None => {
                writeln!(out, "Unknown command '{}'", line.trim())?;
                continue;
            }
        };

        match result {
            Ok(snapshot) => print_snapshot(&mut out, &snapshot, json)?,
            Err(e) => {
                log::warn!("Rejected '{}': {e}", line.trim());
                writeln!(out, "{e}")?;
            }
        }
    }

    Ok(())
}

fn print_snapshot(out: &mut impl Write, snapshot: &TableSnapshot, json: bool) -> Result<(), BoxErr> {
    if json {
        writeln!(out, "{}", serde_json::to_string(snapshot)?)?;
        return Ok(());
    }

    let dealer = snapshot
        .dealer_cards
        .iter()
        .map(|view| match view {
            CardView::FaceUp(card) => card.to_string(),
            CardView::Hidden => "[?]".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" • ");
    let player = snapshot
        .player_cards
        .iter()
        .map(|card| card.to_string())
        .collect::<Vec<_>>()
        .join(" • ");

    writeln!(out, "Dealer: {dealer}")?;
    writeln!(out, "Player: {player}")?;
    let announcement = snapshot.announcement();
    if !announcement.is_empty() {
        writeln!(out, "{announcement}")?;
    }
    writeln!(out, "Cards in deck: {}", snapshot.remaining)?;

    let mut controls = Vec::new();
    if snapshot.can_deal {
        controls.push("deal");
    }
    if snapshot.can_hit {
        controls.push("hit");
    }
    if snapshot.can_stand {
        controls.push("stand");
    }
    if snapshot.can_new_round {
        controls.push("round");
    }
    controls.push("game");
    writeln!(out, "Available: {}", controls.join(", "))?;
    Ok(())
}
