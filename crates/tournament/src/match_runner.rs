//! Match runner for playing games between engines

use chess_core::{Board, Color, Engine, GameStatus};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::TournamentConfig;
use crate::error::TournamentError;
use crate::players::{AiKind, EngineOptions};
use crate::results::{GameResult, MatchResult, TournamentResults};

/// Configuration for a match
#[derive(Debug, Clone, PartialEq)]
pub struct MatchConfig {
    /// Number of games to play
    pub games: u32,
    /// Plies before declaring a draw
    pub max_moves: u32,
    /// Whether to alternate colors each game
    pub alternate_colors: bool,
    pub engine: EngineOptions,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            games: 10,
            max_moves: 200,
            alternate_colors: true,
            engine: EngineOptions::default(),
        }
    }
}

/// How a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Termination {
    Checkmate,
    Stalemate,
    MoveLimit,
}

/// One finished game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    pub white: String,
    pub black: String,
    /// Moves in coordinate form, e.g. `e2e4` or `e7e8=queen`
    pub moves: Vec<String>,
    /// From White's side
    pub result: GameResult,
    pub termination: Termination,
}

/// Runs matches between two engines
pub struct MatchRunner {
    config: MatchConfig,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Play a single game from the starting position.
    ///
    /// The side to move is checked for mate or stalemate before every
    /// search; after `max_moves` plies without either the game is drawn.
    pub fn play_game(
        &self,
        white: &mut dyn Engine,
        black: &mut dyn Engine,
    ) -> Result<GameRecord, TournamentError> {
        for (engine, expected) in [(&*white, Color::White), (&*black, Color::Black)] {
            if engine.color() != expected {
                return Err(TournamentError::WrongColor {
                    engine: engine.name().to_string(),
                    expected,
                    actual: engine.color(),
                });
            }
        }

        white.new_game();
        black.new_game();
        let mut board = Board::new();
        let mut moves = Vec::new();
        let mut side = Color::White;

        let (result, termination) = loop {
            match board.game_status(side) {
                GameStatus::Checkmate => {
                    let result = match side {
                        Color::White => GameResult::Loss,
                        Color::Black => GameResult::Win,
                    };
                    break (result, Termination::Checkmate);
                }
                GameStatus::Stalemate => break (GameResult::Draw, Termination::Stalemate),
                GameStatus::InProgress => {}
            }
            if moves.len() >= self.config.max_moves as usize {
                break (GameResult::Draw, Termination::MoveLimit);
            }

            let engine: &mut dyn Engine = match side {
                Color::White => &mut *white,
                Color::Black => &mut *black,
            };
            let Some(mv) = engine.get_move(&mut board) else {
                return Err(TournamentError::NoMove {
                    engine: engine.name().to_string(),
                });
            };
            let applied = board
                .try_apply_move(mv.piece, mv.from, mv.to)
                .map_err(|source| TournamentError::IllegalMove {
                    engine: engine.name().to_string(),
                    source,
                })?;

            let mut notation = mv.to_string();
            if applied.promotion_pending {
                let kind = engine.choose_promotion();
                board
                    .try_promote(mv.piece, kind)
                    .map_err(|source| TournamentError::IllegalMove {
                        engine: engine.name().to_string(),
                        source,
                    })?;
                notation.push_str(&format!("={kind}"));
            }

            debug!(ply = moves.len() + 1, %side, mv = %notation, "move played");
            moves.push(notation);
            side = side.other();
        };

        info!(
            white = white.name(),
            black = black.name(),
            result = result.as_score(),
            ?termination,
            plies = moves.len(),
            "game finished"
        );

        Ok(GameRecord {
            white: white.name().to_string(),
            black: black.name().to_string(),
            moves,
            result,
            termination,
        })
    }

    /// Run a match between two kinds of opponent, building fresh engines
    /// for every game.
    ///
    /// Returns the result from `first`'s perspective
    pub fn run_match(&self, first: AiKind, second: AiKind) -> Result<MatchResult, TournamentError> {
        let mut result = MatchResult::new();

        for game in 0..self.config.games {
            let first_white = !self.config.alternate_colors || game % 2 == 0;
            let (white_kind, black_kind) = if first_white {
                (first, second)
            } else {
                (second, first)
            };

            let mut white = white_kind.build(Color::White, &self.options_for(game, 0));
            let mut black = black_kind.build(Color::Black, &self.options_for(game, 1));
            let record = self.play_game(white.as_mut(), black.as_mut())?;

            let game_result = if first_white {
                record.result
            } else {
                record.result.flipped()
            };
            result.record(game_result);

            info!(
                game = game + 1,
                of = self.config.games,
                %first,
                %second,
                first_color = if first_white { "white" } else { "black" },
                wins = result.wins,
                losses = result.losses,
                draws = result.draws,
                "match progress"
            );
        }

        Ok(result)
    }

    /// Distinct seeds per game and seat so seeded random players differ.
    fn options_for(&self, game: u32, seat: u64) -> EngineOptions {
        let base = self.config.engine;
        EngineOptions {
            seed: base
                .seed
                .map(|s| s.wrapping_add(u64::from(game) * 2 + seat)),
            ..base
        }
    }
}

/// Plays every pairing of the configured players once.
pub fn run_round_robin(config: &TournamentConfig) -> Result<TournamentResults, TournamentError> {
    let players = &config.players;
    if players.len() < 2 {
        return Err(TournamentError::NotEnoughPlayers(players.len()));
    }

    let runner = MatchRunner::new(config.match_config());
    let names = players.iter().map(|p| p.to_string()).collect();
    let mut results = TournamentResults::new(&config.name, names, config.clone());

    for (i, &first) in players.iter().enumerate() {
        for &second in &players[i + 1..] {
            let result = runner.run_match(first, second)?;
            info!(
                %first,
                %second,
                wins = result.wins,
                losses = result.losses,
                draws = result.draws,
                "match finished"
            );
            results.add_match(first.as_str(), second.as_str(), result);
        }
    }

    Ok(results)
}

#[cfg(test)]
#[path = "match_runner_tests.rs"]
mod match_runner_tests;
