//! Lane Crosser entry point
//!
//! Headless runner: reads one command per line from stdin (`up`, `down`,
//! `left`, `right`), simulates a few frames after each, and prints the board.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::io::{self, BufRead};

    use lane_crosser::render::TextGrid;
    use lane_crosser::{EventHint, Game, Settings};

    env_logger::init();

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load_from(path),
        None => Settings::default(),
    };
    let frames_per_step = settings.frames_per_step;
    let frame_dt = settings.frame_dt;

    let mut game = Game::from_settings(settings);
    log::info!("Lane Crosser starting with seed: {}", game.seed());

    let mut board = TextGrid::new();
    show(&game, &mut board);

    for line in io::stdin().lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                log::error!("Failed to read input: {}", e);
                break;
            }
        };
        game.handle_command(&line);

        for _ in 0..frames_per_step {
            let event = game.tick(frame_dt);
            if let Some(hint) = EventHint::for_event(event) {
                println!("{} ({})", hint.message, hint.value);
            }
        }
        show(&game, &mut board);
    }

    match serde_json::to_string_pretty(game.tally()) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Failed to serialize tally: {}", e),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn show(game: &lane_crosser::Game, board: &mut lane_crosser::render::TextGrid) {
    board.clear();
    game.render(board);
    println!("{}", board);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The browser shell drives `Game` directly; there is no native loop here
}
