use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};

use std::io::{stdin, stdout, Write};
use std::path::PathBuf;

use connect4_minimax::{
    board::{Board, Piece},
    config::{AppConfig, MAX_DEPTH},
    error::{BoardError, SessionError},
    search::{alpha_beta, minimax, Algorithm, SearchResult, INFINITY, NEG_INFINITY},
    session::GameSession,
    WIDTH,
};

mod display;
use display::*;

/// Play Connect 4 against a minimax agent.
#[derive(Parser)]
#[command(name = "connect4", about = "Play Connect 4 against a minimax agent")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect4.toml")]
    config: PathBuf,

    /// Override the search depth
    #[arg(long)]
    depth: Option<usize>,

    /// Override the algorithm: minimax, alphabeta or greedy
    #[arg(long)]
    algorithm: Option<Algorithm>,

    /// Print search values and progress
    #[arg(short, long)]
    verbose: bool,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    print_config: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Play an interactive game (default)
    Play,
    /// Compare minimax and alpha-beta on a position
    Compare {
        /// Moves leading to the position, as 1-indexed columns starting with player 1
        #[arg(long, default_value = "")]
        moves: String,

        /// Search every depth from 1 up to this one
        #[arg(long, default_value_t = 5)]
        max_depth: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    if let Some(depth) = cli.depth {
        config.engine.depth = depth;
    }
    if let Some(algorithm) = cli.algorithm {
        config.engine.algorithm = algorithm;
    }
    config.validate().context("invalid command line override")?;

    if cli.print_config {
        print!("{}", config.to_toml()?);
        return Ok(());
    }

    match cli.command {
        Some(Command::Compare { moves, max_depth }) => compare(&moves, max_depth, cli.verbose),
        Some(Command::Play) | None => play(&config, cli.verbose),
    }
}

fn prompt(text: &str) -> Result<Option<String>> {
    print!("{}", text);
    stdout().flush()?;
    let mut buffer = String::new();
    if stdin().read_line(&mut buffer)? == 0 {
        return Ok(None);
    }
    Ok(Some(buffer.trim().to_lowercase()))
}

fn play(config: &AppConfig, verbose: bool) -> Result<()> {
    let mut session = GameSession::new(config);

    println!("Welcome to Connect 4\n");
    println!("Commands: 1-{} drop a piece, n new game, r restart, q exit", WIDTH);
    println!("          m minimax, a alpha-beta, g greedy (applied on the next new game)\n");

    // game loop
    loop {
        draw_board(session.board())?;
        if let Some(result) = session.last_search() {
            draw_info(result);
        }

        if session.state().is_over() {
            draw_banner(session.state())?;
        } else if session.is_ai_turn() {
            println!("AI is thinking...");
            stdout().flush()?;

            let result = session.play_ai()?;
            if let Some(column) = result.column {
                println!("Best move: {}", column + 1);
            }
            if verbose {
                println!("Value: {}, nodes below root: {}", result.value, result.total_nodes);
            }
            continue;
        }

        draw_status(&session);
        let input = match prompt("Move input > ")? {
            Some(input) => input,
            None => break,
        };

        match input.as_str() {
            "q" | "exit" => break,
            "n" => session.new_game(),
            "r" => session.restart(),
            "m" => session.select_algorithm(Algorithm::Minimax),
            "a" => session.select_algorithm(Algorithm::AlphaBeta),
            "g" => session.select_algorithm(Algorithm::Greedy),
            _ => match input.parse::<usize>() {
                Err(_) => println!("Invalid number: {}", input),
                Ok(column) => match session.play_human(column.wrapping_sub(1)) {
                    Ok(_) => {}
                    Err(SessionError::Board(BoardError::ColumnOutOfRange(_))) => {
                        println!("Play on to proceed")
                    }
                    Err(err) => println!("{}", err),
                },
            },
        }
    }
    Ok(())
}

fn compare(moves: &str, max_depth: usize, verbose: bool) -> Result<()> {
    if max_depth == 0 || max_depth > MAX_DEPTH {
        bail!("--max-depth must be between 1 and {}", MAX_DEPTH);
    }
    let board = Board::from_moves(moves, Piece::Player)?;
    // player 1 opens, so the side to move follows from the number of pieces
    let maximizing = board.to_move(Piece::Player) == Piece::Ai;
    println!("{}\n", board);
    println!("{} to move\n", board.to_move(Piece::Player).name());

    let progress = ProgressBar::new(2 * max_depth as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("Searching: {bar:40.cyan/blue} {msg}")
            .progress_chars("█▓▒░  "),
    );

    let mut rows: Vec<(usize, SearchResult, SearchResult)> = Vec::with_capacity(max_depth);
    for depth in 1..=max_depth {
        progress.set_message(&format!("minimax depth {}", depth));
        let plain = minimax(&board, depth, maximizing);
        progress.inc(1);

        progress.set_message(&format!("alpha-beta depth {}", depth));
        let pruned = alpha_beta(&board, depth, NEG_INFINITY, INFINITY, maximizing);
        progress.inc(1);

        if verbose {
            progress.println(format!(
                "depth {}: minimax {:.3} ms, alpha-beta {:.3} ms",
                depth,
                plain.elapsed_ms(),
                pruned.elapsed_ms()
            ));
        }
        rows.push((depth, plain, pruned));
    }
    progress.finish_and_clear();

    println!("{:>5} | {:^45} | {:^45}", "", "minimax", "alpha-beta");
    let show = |column: Option<usize>| column.map_or("-".to_string(), |c| (c + 1).to_string());
    println!(
        "{:>5} | {:>6} {:>16} {:>10} {:>10} | {:>6} {:>16} {:>10} {:>10}",
        "depth", "move", "value", "nodes", "ms", "move", "value", "nodes", "ms"
    );
    for (depth, plain, pruned) in rows {
        println!(
            "{:>5} | {:>6} {:>16} {:>10} {:>10.3} | {:>6} {:>16} {:>10} {:>10.3}",
            depth,
            show(plain.column),
            plain.value,
            plain.total_nodes,
            plain.elapsed_ms(),
            show(pruned.column),
            pruned.value,
            pruned.total_nodes,
            pruned.elapsed_ms()
        );
    }
    Ok(())
}
