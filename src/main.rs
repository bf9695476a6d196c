use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use quoridor::ai::{agent_from_config, Agent};
use quoridor::config::{AppConfig, AutomatonConfig};
use quoridor::game::{Action, Cell, GameState, Orientation, Player, Wall};
use quoridor::session::play_match;

/// Play Quoridor against an automated player.
#[derive(Parser)]
#[command(name = "quoridor", about = "Play Quoridor against an automated player")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "quoridor.toml")]
    config: PathBuf,

    /// Override the human player's name
    #[arg(long)]
    name: Option<String>,

    /// Play as player 1 or 2
    #[arg(long)]
    player: Option<u8>,

    /// Watch two automated players instead of playing
    #[arg(long)]
    auto: bool,

    /// Override the automaton's random seed
    #[arg(long)]
    seed: Option<u64>,

    /// Print the final game state as JSON
    #[arg(long)]
    json: bool,
}

/// A line typed by the human player.
#[derive(Debug, PartialEq)]
enum Command {
    Play(Action),
    Quit,
}

const HELP: &str = "commands: D x y (move), MH x y (horizontal wall), MV x y (vertical wall), q (quit)";

fn parse_command(line: &str) -> Result<Option<Command>, String> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some((&head, rest)) = tokens.split_first() else {
        return Ok(None);
    };

    let coords = || -> Result<Cell, String> {
        match rest {
            [x, y] => {
                let x = x.parse::<i32>().map_err(|_| format!("invalid x coordinate '{x}'"))?;
                let y = y.parse::<i32>().map_err(|_| format!("invalid y coordinate '{y}'"))?;
                Ok(Cell::new(x, y))
            }
            _ => Err(format!("expected two coordinates; {HELP}")),
        }
    };

    match head.to_ascii_uppercase().as_str() {
        "Q" | "QUIT" => Ok(Some(Command::Quit)),
        "D" => Ok(Some(Command::Play(Action::Move(coords()?)))),
        "MH" => Ok(Some(Command::Play(Action::PlaceWall(Wall::new(
            Orientation::Horizontal,
            coords()?,
        ))))),
        "MV" => Ok(Some(Command::Play(Action::PlaceWall(Wall::new(
            Orientation::Vertical,
            coords()?,
        ))))),
        other => Err(format!("unknown command '{other}'; {HELP}")),
    }
}

fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(name) = cli.name {
        config.game.player_name = name;
    }
    if let Some(player) = cli.player {
        config.game.human_player = player;
    }
    if let Some(seed) = cli.seed {
        config.automaton.seed = Some(seed);
    }
    config.validate().context("validating configuration")?;

    init_tracing(&config.logging.filter);

    let state = if cli.auto {
        run_automated(&config)?
    } else {
        run_interactive(&config)?
    };

    if cli.json {
        println!("{}", state.to_json().context("serializing game state")?);
    }
    Ok(())
}

/// Two automated players against each other.
fn run_automated(config: &AppConfig) -> Result<GameState> {
    let second_config = AutomatonConfig {
        seed: config.automaton.seed.map(|s| s.wrapping_add(1)),
        ..config.automaton.clone()
    };
    let mut first = agent_from_config(&config.automaton);
    let mut second = agent_from_config(&second_config);

    let state = GameState::new(&config.game.player_name, &config.game.automaton_name);
    let opener = if config.game.automaton_first {
        Player::Two
    } else {
        Player::One
    };
    let result = play_match(
        state,
        [first.as_mut(), second.as_mut()],
        opener,
        config.session.max_turns,
    )?;

    println!("{}", result.final_state);
    match result.winner {
        Some(p) => println!("{} wins after {} turns", result.final_state.name(p), result.turns()),
        None => println!("No winner after {} turns", result.turns()),
    }
    Ok(result.final_state)
}

/// Human against the configured automaton, seated as `game.human_player`.
fn run_interactive(config: &AppConfig) -> Result<GameState> {
    let human = Player::from_number(config.game.human_player)?;
    let bot = human.other();
    let (name1, name2) = match human {
        Player::One => (&config.game.player_name, &config.game.automaton_name),
        Player::Two => (&config.game.automaton_name, &config.game.player_name),
    };
    let mut state = GameState::new(name1, name2);
    let mut automaton = agent_from_config(&config.automaton);

    println!("You are {human}, heading for row {}", human.goal_row());
    if config.game.automaton_first {
        automaton_turn(&mut state, automaton.as_mut(), bot)?;
    }

    println!("{HELP}");
    let stdin = io::stdin();
    loop {
        println!("{state}");
        if let Some(winner) = state.winner() {
            println!("{} wins!", state.name(winner));
            break;
        }

        print!("> ");
        io::stdout().flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let action = match parse_command(&line) {
            Ok(Some(Command::Play(action))) => action,
            Ok(Some(Command::Quit)) => break,
            Ok(None) => continue,
            Err(msg) => {
                println!("{msg}");
                continue;
            }
        };

        if let Err(err) = state.apply(human, action) {
            println!("Rejected: {err}");
            continue;
        }
        if !state.is_over() {
            automaton_turn(&mut state, automaton.as_mut(), bot)?;
        }
    }

    Ok(state)
}

fn automaton_turn(state: &mut GameState, agent: &mut dyn Agent, player: Player) -> Result<()> {
    let action = state
        .play_automated(player, agent)
        .with_context(|| format!("{} failed to play", agent.name()))?;
    println!("{} ({}): {action}", state.name(player), agent.name());
    Ok(())
}
