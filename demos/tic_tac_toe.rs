//! Tic-Tac-Toe against the minimax agent
//!
//! The agent plays X and moves first. You play O.

use std::io::{self, Write};
use std::time::Instant;

use classical_search::{
    games::TicTacToe, Agent, GameState, MinimaxAgent, MinimaxConfig, SearchError, Side,
};

fn main() -> Result<(), SearchError> {
    // Initialize logging
    env_logger::init();

    println!("Minimax Tic-Tac-Toe Example");
    println!("===========================");
    println!("You are O. The AI is X and moves first.");
    println!();

    let mut game = TicTacToe::new();
    let mut ai: MinimaxAgent<TicTacToe> = MinimaxAgent::new("MasterBot", MinimaxConfig::default());

    while !game.is_terminal() {
        println!("{}", game);

        if game.turn() == Side::Plus {
            println!("{} is thinking...", ai.name());
            let start = Instant::now();

            let Some(mv) = ai.select_move(&game)? else {
                break;
            };

            println!("AI chooses position {}", mv);
            println!("Nodes evaluated: {}", ai.statistics().nodes_evaluated);
            println!("Time taken: {:.4}s", start.elapsed().as_secs_f64());
            game = game.apply_move(&mv)?;
        } else {
            println!("Your move, legal cells: {:?}", game.legal_moves());
            print!("Enter move index (0-8): ");
            io::stdout().flush().ok();

            let mut input = String::new();
            if io::stdin().read_line(&mut input).unwrap_or(0) == 0 {
                println!("No input, quitting.");
                return Ok(());
            }

            match input.trim().parse::<usize>() {
                Ok(index) if game.is_legal_move(index) => {
                    game = game.apply_move(&index)?;
                }
                Ok(_) => println!("Illegal move! Try again."),
                Err(_) => println!("Please enter a number."),
            }
        }
    }

    println!("{}", game);
    match game.winner() {
        Some(Side::Plus) => println!("AI wins!"),
        Some(Side::Minus) => println!("You win!"),
        None => println!("Draw! Perfect game."),
    }

    Ok(())
}
