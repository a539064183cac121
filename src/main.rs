use anyhow::Result;
use crossterm::{
    cursor::MoveTo,
    style::{style, Attribute, Color, PrintStyledContent},
    QueueableCommand,
};

use std::io::{stdin, stdout, Write};

use connect4_engine::{rules::GameStatus, session::GameSession, HEIGHT, WIDTH};

/// Plies searched per computer move unless overridden on the command line
const DEFAULT_DEPTH: u32 = 5;

fn draw_board(game: &GameSession) -> Result<()> {
    let mut stdout = stdout();

    let cols: String = (1..=WIDTH).map(|x| x.to_string()).collect();
    stdout.queue(PrintStyledContent(style(cols + "\n")))?;
    for _ in 0..HEIGHT {
        stdout.queue(PrintStyledContent(style("\n")))?;
    }
    stdout.flush()?;

    let (origin_x, origin_y) = crossterm::cursor::position()?;

    // row 0 is the bottom of the grid, so rows climb up the screen
    let grid = game.board_snapshot();
    for (row, cells) in grid.iter().enumerate() {
        for (column, &cell) in cells.iter().enumerate() {
            let (pos_x, pos_y) = (origin_x + column as u16, origin_y - row as u16);

            stdout
                .queue(MoveTo(pos_x, pos_y))?
                .queue(PrintStyledContent(
                    style("O")
                        .attribute(Attribute::Bold)
                        .on(Color::DarkBlue)
                        .with(match cell {
                            1 => Color::Red,
                            2 => Color::Yellow,
                            _ => Color::DarkBlue,
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

fn main() -> Result<()> {
    let depth = match std::env::args().nth(1) {
        Some(arg) => arg.parse()?,
        None => DEFAULT_DEPTH,
    };

    let stdin = stdin();
    let mut game = GameSession::new();

    println!("Welcome to Connect 4\n");

    // game loop
    loop {
        draw_board(&game)?;

        match game.status() {
            GameStatus::InProgress => {
                print!("Move input > ");
                stdout().flush().expect("failed to flush to stdout!");
                let mut input_str = String::new();
                stdin.read_line(&mut input_str)?;

                let column = match input_str.trim().parse::<i32>() {
                    Err(_) => {
                        println!("Invalid number: {}", input_str);
                        continue;
                    }
                    // columns are shown 1-indexed
                    Ok(column_one_indexed) => column_one_indexed - 1,
                };

                let status = match game.apply_human_move(column) {
                    Ok(status) => status,
                    Err(err) => {
                        println!("{}", err);
                        // try the move again
                        continue;
                    }
                };

                if status == GameStatus::InProgress {
                    println!("AI is thinking...");
                    stdout().flush().expect("failed to flush to stdout!");
                    game.request_automated_move(depth)?;
                }
            }

            // end states
            GameStatus::PlayerWon => {
                println!("You win!");
                break;
            }
            GameStatus::AiWon => {
                println!("The AI wins!");
                break;
            }
            GameStatus::Draw => {
                println!("Draw!");
                break;
            }
        }
    }
    Ok(())
}
