// Simple command-line application to play chess between two humans

use chessrules::{
    board::PrettyStyle,
    game::{GameError, MoveResult},
    Color, Coord, Game, PromoteKind,
};
use std::io::{self, BufRead, Write};
use std::str::FromStr;

fn read_line(stdin: &mut impl BufRead) -> Option<String> {
    let mut s = String::new();
    match stdin.read_line(&mut s) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(s.trim().to_string()),
    }
}

fn parse_move(s: &str) -> Option<(Coord, Coord)> {
    let mut parts = s.split_whitespace();
    let src = Coord::from_str(parts.next()?).ok()?;
    let dst = Coord::from_str(parts.next()?).ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((src, dst))
}

fn main() {
    let mut stdin = io::stdin().lock();

    let mut game = Game::new();

    loop {
        if game.status().is_finished() {
            println!("{}", game.board().pretty(PrettyStyle::Utf8));
            println!("Game finished: {}", game.status());
            break;
        }

        println!("{}", game.board().pretty(PrettyStyle::Utf8));
        let side = match game.side() {
            Color::White => "White",
            Color::Black => "Black",
        };
        if game.board().is_check(game.side()) {
            println!("{} is in check!", side);
        }
        print!("{} move (e.g. \"e2 e4\", or a square to list its moves): ", side);
        io::stdout().flush().unwrap();
        let s = match read_line(&mut stdin) {
            Some(s) => s,
            None => break,
        };

        if let Ok(c) = Coord::from_str(&s) {
            match game.legal_moves(c) {
                Ok(list) => {
                    let moves: Vec<_> = list.iter().map(|d| d.to_string()).collect();
                    println!("Moves from {}: {}", c, moves.join(" "));
                }
                Err(e) => println!("Error: {}", e),
            }
            println!();
            continue;
        }

        let (src, dst) = match parse_move(&s) {
            Some(mv) => mv,
            None => {
                println!("Cannot parse move {:?}", s);
                println!();
                continue;
            }
        };

        match game.play(src, dst) {
            Ok(MoveResult::Done(_)) => {}
            Ok(MoveResult::PromotionRequired(c)) => loop {
                print!("Promote pawn on {} to (q, r, b, n): ", c);
                io::stdout().flush().unwrap();
                let kind = match read_line(&mut stdin) {
                    Some(s) => s.chars().next().and_then(PromoteKind::from_char),
                    None => return,
                };
                match kind {
                    Some(kind) => {
                        game.promote(kind).unwrap();
                        break;
                    }
                    None => println!("Bad piece"),
                }
            },
            Err(e @ GameError::NotYourPiece { .. }) | Err(e @ GameError::Move(_)) => {
                println!("Bad move: {}", e);
            }
            Err(e) => {
                println!("Error: {}", e);
            }
        }

        println!();
    }
}
