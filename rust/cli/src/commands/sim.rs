//! Simulation command handler: automated games among computer players.
//!
//! Runs N games of five-card draw with every seat played by a random
//! strategy, optionally recording each round to a JSONL file via the
//! engine's [`RoundLogger`]. Each game derives its own seed from the base
//! seed, so a run is fully reproducible.

use crate::error::CliError;
use crate::io_utils::ensure_parent_dir;
use crate::ui;
use fivedraw_ai::{random_strategy, Discarder};
use fivedraw_engine::engine::Engine;
use fivedraw_engine::logger::{PlayerSummary, RoundLogger, RoundRecord};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use std::io::Write;
use std::path::PathBuf;

const SIM_PLAYERS: usize = 4;
const SIM_ROUNDS: u32 = fivedraw_engine::engine::DRAW_ROUNDS;
const SIM_MAX_DISCARDS: usize = fivedraw_engine::engine::MAX_DISCARDS;

/// Handle the sim command: run automated games.
///
/// # Arguments
///
/// * `games` - Number of games to simulate (must be >= 1)
/// * `output` - Optional path for JSONL round records
/// * `seed` - Base RNG seed (each game uses seed + game index)
/// * `out` - Output stream for the summary line
/// * `err` - Output stream for error messages
pub fn handle_sim_command(
    games: u64,
    output: Option<String>,
    seed: Option<u64>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    if games == 0 {
        ui::write_error(err, "games must be >= 1")?;
        return Err(CliError::InvalidInput("games must be >= 1".to_string()));
    }

    let base_seed = seed.unwrap_or_else(rand::random);

    let mut logger = match output {
        Some(path) => {
            let path = PathBuf::from(path);
            ensure_parent_dir(&path).map_err(CliError::Config)?;
            Some(RoundLogger::create(&path)?)
        }
        None => None,
    };

    for game in 0..games {
        let game_seed = base_seed.wrapping_add(game);
        let record = run_game(game_seed, logger.as_mut())?;
        if let (Some(log), Some(rec)) = (logger.as_mut(), record) {
            log.write(&rec)?;
        }
    }

    writeln!(out, "sim: games={} seed={}", games, base_seed)?;
    Ok(())
}

/// Plays one full game and builds its round record when a logger is
/// attached.
fn run_game(
    game_seed: u64,
    logger: Option<&mut RoundLogger>,
) -> Result<Option<RoundRecord>, CliError> {
    let mut engine = Engine::new(Some(game_seed));
    let mut strategy_rng = ChaCha20Rng::seed_from_u64(game_seed);

    let mut discarders = Vec::with_capacity(SIM_PLAYERS);
    for i in 0..SIM_PLAYERS {
        engine.add_player(format!("Player {}", i + 1));
        discarders.push(Discarder::new(
            SIM_MAX_DISCARDS,
            random_strategy(&mut strategy_rng),
        ));
    }

    engine.shuffle();
    engine.fill_hands()?;

    for _ in 0..SIM_ROUNDS {
        for idx in 0..engine.players().len() {
            let discards = discarders[idx].discards(engine.players()[idx].hand().cards());
            engine.apply_discards(idx, &discards)?;
            engine.fill_hand(idx)?;
        }
    }

    let winners = engine.find_winners();

    let Some(logger) = logger else {
        return Ok(None);
    };

    let mut players = Vec::with_capacity(engine.players().len());
    for idx in 0..engine.players().len() {
        let player = &engine.players()[idx];
        players.push(PlayerSummary {
            name: player.name().to_string(),
            cards: player.hand().cards().to_vec(),
            rank: engine.classify(idx)?.name().to_string(),
        });
    }
    let winning_rank = match winners.first() {
        Some(&idx) => Some(engine.classify(idx)?.name().to_string()),
        None => None,
    };

    Ok(Some(RoundRecord {
        round_id: logger.next_id(),
        seed: Some(game_seed),
        players,
        winners,
        winning_rank,
        ts: None,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_games_is_rejected() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let result = handle_sim_command(0, None, Some(42), &mut out, &mut err);
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
    }

    #[test]
    fn sim_without_output_reports_a_summary() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let result = handle_sim_command(3, None, Some(42), &mut out, &mut err);
        assert!(result.is_ok());

        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("sim: games=3 seed=42"));
    }

    #[test]
    fn sim_writes_one_record_per_game() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rounds.jsonl");

        let mut out = Vec::new();
        let mut err = Vec::new();
        let result = handle_sim_command(
            5,
            Some(path.to_string_lossy().into_owned()),
            Some(7),
            &mut out,
            &mut err,
        );
        assert!(result.is_ok());

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 5);

        for line in lines {
            let record: RoundRecord = serde_json::from_str(line).unwrap();
            assert_eq!(record.players.len(), SIM_PLAYERS);
            assert!(!record.winners.is_empty());
            assert!(record.ts.is_some());
        }
    }

    #[test]
    fn sim_is_deterministic_for_a_fixed_seed() {
        let dir = tempfile::tempdir().unwrap();
        let path_a = dir.path().join("a.jsonl");
        let path_b = dir.path().join("b.jsonl");

        for path in [&path_a, &path_b] {
            let mut out = Vec::new();
            let mut err = Vec::new();
            handle_sim_command(
                2,
                Some(path.to_string_lossy().into_owned()),
                Some(99),
                &mut out,
                &mut err,
            )
            .unwrap();
        }

        let strip_ts = |contents: String| -> Vec<RoundRecord> {
            contents
                .lines()
                .map(|line| {
                    let mut rec: RoundRecord = serde_json::from_str(line).unwrap();
                    rec.ts = None;
                    rec
                })
                .collect()
        };
        let a = strip_ts(std::fs::read_to_string(&path_a).unwrap());
        let b = strip_ts(std::fs::read_to_string(&path_b).unwrap());
        assert_eq!(a, b);
    }
}
