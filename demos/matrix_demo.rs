//! Chessboard Demo
//!
//! Reads fifteen integers from standard input into a 3x5 board, prints the
//! board and one of its squares.
//!
//! Run with: cargo run --example matrix_demo

use std::io::{self, Write};

use tabula::Matrix2D;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut chess_board = Matrix2D::new(3, 5)?;

    println!("Enter values for the chessBoard (3x5):");
    chess_board.read_from(&mut io::stdin().lock())?;

    println!("\nOutput chessBoard (3x5):");
    let mut out = io::stdout().lock();
    chess_board.write_to(&mut out)?;
    out.flush()?;

    println!(
        "\nAccessing element at row 1 and column 3: {}",
        chess_board.at(1, 3)?
    );

    log::debug!("board holds {} elements", chess_board.len());
    Ok(())
}
