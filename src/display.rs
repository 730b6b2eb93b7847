use anyhow::Result;
use crossterm::{
    cursor::MoveTo,
    style::{style, Attribute, Color, PrintStyledContent},
    QueueableCommand,
};

use std::io::{stdout, Write};

use connect4_minimax::{
    board::{Board, Piece},
    rules::GameState,
    search::SearchResult,
    session::GameSession,
    HEIGHT, WIDTH,
};

/// Draws the board below the cursor, top row first
pub fn draw_board(board: &Board) -> Result<()> {
    let mut stdout = stdout();

    let cols: String = (1..=WIDTH).map(|x| x.to_string()).collect();
    stdout.queue(PrintStyledContent(style(cols + "\n")))?;
    for _ in 0..HEIGHT {
        stdout.queue(PrintStyledContent(style("\n")))?;
    }
    stdout.flush()?;

    // the cursor now sits on the line of the bottom row
    let (origin_x, origin_y) = crossterm::cursor::position()?;

    for row in 0..HEIGHT {
        for col in 0..WIDTH {
            let (pos_x, pos_y) = (origin_x + col as u16, origin_y - row as u16);

            stdout
                .queue(MoveTo(pos_x, pos_y))?
                .queue(PrintStyledContent(
                    style("O")
                        .attribute(Attribute::Bold)
                        .on(Color::DarkBlue)
                        .with(match board.get(row, col) {
                            Piece::Player => Color::Red,
                            Piece::Ai => Color::Yellow,
                            Piece::Empty => Color::DarkBlue,
                        }),
                ))?;
        }
    }
    stdout
        .queue(MoveTo(origin_x + WIDTH as u16, origin_y))?
        .queue(PrintStyledContent(style("\n")))?;
    stdout.flush()?;
    Ok(())
}

/// Prints the statistics of an automated move
pub fn draw_info(result: &SearchResult) {
    println!("Time: {:.3} ms", result.elapsed_ms());
    println!("Nodes Explored: {}", result.nodes_explored);
}

/// Prints the end of game banner, if the game is over
pub fn draw_banner(state: GameState) -> Result<()> {
    let (text, color) = match state {
        GameState::Playing => return Ok(()),
        GameState::PlayerWin => (format!("{} wins!!", Piece::Player.name()), Color::Red),
        GameState::AiWin => (format!("{} wins!!", Piece::Ai.name()), Color::Yellow),
        GameState::Draw => ("It's a draw!!".to_string(), Color::Red),
    };
    let mut stdout = stdout();
    stdout.queue(PrintStyledContent(
        style(text + "\n").attribute(Attribute::Bold).with(color),
    ))?;
    stdout.flush()?;
    Ok(())
}

/// Prints which algorithm is playing and which is selected for the next game
pub fn draw_status(session: &GameSession) {
    if session.selected_algorithm() == session.algorithm() {
        println!("Algorithm: {} (depth {})", session.algorithm(), session.depth());
    } else {
        println!(
            "Algorithm: {} (depth {}), {} selected for the next game",
            session.algorithm(),
            session.depth(),
            session.selected_algorithm()
        );
    }
}
