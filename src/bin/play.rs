use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use env_logger::Env;
use log::info;

use duel_chess::config::{PlayConfig, CONFIG_ENV};
use duel_chess::perft::perft_parallel;
use duel_chess::snapshot::BoardSnapshot;
use duel_chess::{Board, Color, Game, GameStatus, Move, Square};

#[derive(Parser)]
#[command(name = "play", version, about = "Hot-seat chess in the terminal")]
struct Cli {
    /// YAML config file (falls back to $DUEL_CHESS_CONFIG).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Space-separated coordinate moves to play, then print the result and exit.
    #[arg(long)]
    moves: Option<String>,

    /// Print the perft count of the starting position at this depth and exit.
    #[arg(long)]
    perft: Option<u32>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let cfg_path = cli
        .config
        .clone()
        .or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from));
    let cfg = match PlayConfig::load(cfg_path.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::from(2);
        }
    };

    let level = cfg.log_level.as_deref().unwrap_or("warn");
    env_logger::Builder::from_env(Env::default().filter_or("DUEL_CHESS_LOG", level)).init();

    if let Some(depth) = cli.perft {
        let nodes = perft_parallel(&Board::starting(), Color::Light, depth);
        println!("perft({depth}) = {nodes}");
        return ExitCode::SUCCESS;
    }

    let mut game = Game::new();

    if let Some(list) = cli.moves {
        for token in list.split_whitespace() {
            if let Err(e) = play_token(&mut game, token) {
                eprintln!("{e}");
                return ExitCode::from(1);
            }
        }
        render(&game.snapshot(), &cfg);
        println!("{}", describe(&game));
        return ExitCode::SUCCESS;
    }

    interactive(&mut game, &cfg);
    ExitCode::SUCCESS
}

fn play_token(game: &mut Game, token: &str) -> Result<(), String> {
    let mv: Move = token.parse().map_err(|e| format!("{e}"))?;
    game.apply_move(mv).map_err(|e| format!("{e}"))
}

fn interactive(game: &mut Game, cfg: &PlayConfig) {
    print_help();
    render(&game.snapshot(), cfg);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("{} to move > ", game.turn());
        io::stdout().flush().ok();

        let Some(Ok(line)) = lines.next() else {
            break;
        };
        let cmd = line.trim();
        if cmd.is_empty() {
            continue;
        }

        match cmd {
            "help" => {
                print_help();
                continue;
            }
            "board" => {
                render(&game.snapshot(), cfg);
                continue;
            }
            "exit" | "quit" => break,
            _ => {}
        }

        if let Some(arg) = cmd.strip_prefix("moves ") {
            if !cfg.show_legal_moves {
                println!("Move hints are disabled by config.");
                continue;
            }
            list_moves(game, arg.trim());
            continue;
        }

        match play_token(game, cmd) {
            Ok(()) => {
                info!("played {cmd}");
                render(&game.snapshot(), cfg);
                println!("{}", describe(game));
                if game.status().is_over() {
                    break;
                }
            }
            Err(e) => println!("{e}"),
        }
    }
}

fn list_moves(game: &Game, arg: &str) {
    let sq: Square = match arg.parse() {
        Ok(sq) => sq,
        Err(e) => {
            println!("{e}");
            return;
        }
    };
    match game.legal_moves(sq) {
        Ok(set) => {
            let mut moves: Vec<Move> = set.into_iter().collect();
            moves.sort();
            let text: Vec<String> = moves.iter().map(Move::to_string).collect();
            if text.is_empty() {
                println!("{sq}: no legal moves");
            } else {
                println!("{sq}: {}", text.join(" "));
            }
        }
        Err(e) => println!("{e}"),
    }
}

fn describe(game: &Game) -> String {
    match game.status() {
        GameStatus::InProgress if game.is_in_check(game.turn()) => {
            format!("Check. {} to move.", game.turn())
        }
        GameStatus::InProgress => format!("{} to move.", game.turn()),
        status => {
            info!("game finished: {status}");
            format!("Game over: {status}.")
        }
    }
}

fn render(snapshot: &BoardSnapshot, cfg: &PlayConfig) {
    let ranks: Vec<i8> = if cfg.light_at_bottom {
        (1..=8).rev().collect()
    } else {
        (1..=8).collect()
    };
    let files: Vec<i8> = if cfg.light_at_bottom {
        (1..=8).collect()
    } else {
        (1..=8).rev().collect()
    };

    for &rank in &ranks {
        let mut line = format!("{rank} ");
        for &file in &files {
            let ch = match snapshot.at(Square::new(rank, file)) {
                Some(p) if cfg.unicode => p.glyph(),
                Some(p) => p.letter(),
                None => '.',
            };
            line.push(' ');
            line.push(ch);
        }
        println!("{line}");
    }
    let footer: String = files
        .iter()
        .map(|&f| format!(" {}", (b'a' + (f - 1) as u8) as char))
        .collect();
    println!("  {footer}");
}

fn print_help() {
    println!("Commands:");
    println!("  e2e4 / e7e8q   play a move (promotion letter q, r, b or n)");
    println!("  moves <sq>     list legal moves of the piece on <sq>");
    println!("  board          redraw the board");
    println!("  help           show this help");
    println!("  quit           leave");
}
