//! # Play Command
//!
//! Interactive five-card draw against computer opponents.
//!
//! One human seat plus computer players, each computer assigned a random
//! discard strategy at the start. Every game runs the fill/discard/draw
//! cycle for the configured number of rounds, then shows every hand, its
//! rank, and the winners. The user can quit at any prompt with 'q'.

use crate::config;
use crate::error::CliError;
use crate::io_utils::read_stdin_line;
use crate::ui;
use crate::validation::{parse_discard_selection, ParseResult};
use fivedraw_ai::{random_strategy, Discarder};
use fivedraw_engine::cards::Card;
use fivedraw_engine::engine::Engine;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use std::io::{BufRead, Write};

/// Handle the play command: interactive five-card draw.
///
/// # Arguments
///
/// * `players` - Seats at the table including the human (default from config)
/// * `rounds` - Draw rounds per game (default from config)
/// * `seed` - RNG seed for reproducibility (default: random)
/// * `name` - Human player's name (prompted for when omitted)
/// * `out` - Output stream for game display
/// * `err` - Error stream for warnings and errors
/// * `stdin` - Input stream for player decisions
pub fn handle_play_command(
    players: Option<usize>,
    rounds: Option<u32>,
    seed: Option<u64>,
    name: Option<String>,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let resolved = config::load_with_sources().map_err(|e| CliError::Config(e.to_string()))?;
    let mut cfg = resolved.config;
    if let Some(p) = players {
        cfg.players = p;
    }
    if let Some(r) = rounds {
        cfg.rounds = r;
    }
    if let Err(e) = config::validate(&cfg) {
        ui::write_error(err, &e.to_string())?;
        return Err(CliError::InvalidInput(e.to_string()));
    }

    let seed = seed.or(cfg.seed).unwrap_or_else(rand::random);

    let name = match name {
        Some(n) => n,
        None => prompt_name(out, stdin)?,
    };

    writeln!(
        out,
        "play: players={} rounds={} seed={}",
        cfg.players, cfg.rounds, seed
    )?;

    let mut engine = Engine::new(Some(seed));
    let mut strategy_rng = ChaCha20Rng::seed_from_u64(seed);

    // computer players first, the human takes the last seat
    let mut discarders: Vec<Option<Discarder>> = Vec::with_capacity(cfg.players);
    for i in 0..cfg.players - 1 {
        engine.add_player(format!("Player {}", i + 1));
        discarders.push(Some(Discarder::new(
            cfg.max_discards,
            random_strategy(&mut strategy_rng),
        )));
    }
    let human = engine.add_player(name);
    discarders.push(None);

    engine.shuffle();

    loop {
        engine.fill_hands()?;

        let mut quit_requested = false;
        'rounds: for _ in 0..cfg.rounds {
            for idx in 0..engine.players().len() {
                let discards = match &discarders[idx] {
                    Some(discarder) => discarder.discards(engine.players()[idx].hand().cards()),
                    None => {
                        match prompt_discards(out, err, stdin, &engine, human, cfg.max_discards)? {
                            Some(cards) => cards,
                            None => {
                                quit_requested = true;
                                break 'rounds;
                            }
                        }
                    }
                };
                engine.apply_discards(idx, &discards)?;
                engine.fill_hand(idx)?;
            }
        }
        if quit_requested {
            break;
        }

        show_showdown(out, &engine)?;

        write!(out, "Play again? (y/N): ")?;
        out.flush()?;
        match read_stdin_line(stdin) {
            Some(line) if line.eq_ignore_ascii_case("y") => {
                engine.reset();
            }
            _ => break,
        }
    }

    writeln!(out, "Thanks for playing!")?;
    Ok(())
}

fn prompt_name(out: &mut dyn Write, stdin: &mut dyn BufRead) -> Result<String, CliError> {
    write!(out, "Enter your name: ")?;
    out.flush()?;
    match read_stdin_line(stdin) {
        Some(name) if !name.is_empty() => Ok(name),
        _ => Ok("Player".to_string()),
    }
}

/// Shows the human their cards and reads a discard selection. Returns
/// `None` when the user quits (explicitly or via EOF).
fn prompt_discards(
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
    engine: &Engine,
    human: usize,
    max_discards: usize,
) -> Result<Option<Vec<Card>>, CliError> {
    let cards: Vec<Card> = engine.players()[human].hand().cards().to_vec();

    writeln!(out, "{}", engine.players()[human].name())?;
    ui::display_cards(out, &cards)?;

    loop {
        write!(
            out,
            "Cards to discard (e.g. '1 3 5', ENTER to keep all, q to quit): "
        )?;
        out.flush()?;

        let Some(line) = read_stdin_line(stdin) else {
            return Ok(None);
        };

        match parse_discard_selection(&line, cards.len(), max_discards) {
            ParseResult::Discards(indices) => {
                return Ok(Some(indices.into_iter().map(|i| cards[i]).collect()));
            }
            ParseResult::Quit => return Ok(None),
            ParseResult::Invalid(msg) => {
                ui::write_error(err, &msg)?;
            }
        }
    }
}

fn show_showdown(out: &mut dyn Write, engine: &Engine) -> Result<(), CliError> {
    for idx in 0..engine.players().len() {
        let player = &engine.players()[idx];
        let rank = engine.classify(idx)?;
        ui::display_player(out, player.name(), player.hand().cards(), rank.name())?;
    }

    let winners = engine.find_winners();
    if let Some(&first) = winners.first() {
        let winning_rank = engine.classify(first)?;
        writeln!(out, "Here are the winner(s) with a {}:", winning_rank.name())?;
        writeln!(out)?;
        for idx in winners {
            let player = &engine.players()[idx];
            let rank = engine.classify(idx)?;
            ui::display_player(out, player.name(), player.hand().cards(), rank.name())?;
        }
    }
    Ok(())
}
