//! Match and tournament results, storage and reporting

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::config::TournamentConfig;
use crate::error::TournamentError;

/// Result of a single game, from White's side.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameResult {
    Win,
    Loss,
    Draw,
}

impl GameResult {
    pub fn flipped(self) -> GameResult {
        match self {
            GameResult::Win => GameResult::Loss,
            GameResult::Loss => GameResult::Win,
            GameResult::Draw => GameResult::Draw,
        }
    }

    pub fn as_score(self) -> &'static str {
        match self {
            GameResult::Win => "1-0",
            GameResult::Loss => "0-1",
            GameResult::Draw => "1/2-1/2",
        }
    }
}

/// Result of a match (multiple games), from the first player's side.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchResult {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

impl MatchResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, result: GameResult) {
        match result {
            GameResult::Win => self.wins += 1,
            GameResult::Loss => self.losses += 1,
            GameResult::Draw => self.draws += 1,
        }
    }

    pub fn total_games(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    /// Points for the first player: 1 per win, half per draw.
    pub fn points(&self) -> f64 {
        self.wins as f64 + 0.5 * self.draws as f64
    }

    /// Score from the first player's side (1 for win, 0.5 for draw, 0 for loss)
    pub fn score(&self) -> f64 {
        let total = self.total_games() as f64;
        if total == 0.0 {
            return 0.5;
        }
        self.points() / total
    }
}

/// A single match entry in the tournament
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchEntry {
    pub player1: String,
    pub player2: String,
    pub result: MatchResult,
}

/// Complete tournament results
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TournamentResults {
    /// Name/description of the tournament
    pub name: String,
    pub participants: Vec<String>,
    pub matches: Vec<MatchEntry>,
    /// Configuration used
    pub config: TournamentConfig,
}

impl TournamentResults {
    pub fn new(name: &str, participants: Vec<String>, config: TournamentConfig) -> Self {
        Self {
            name: name.to_string(),
            participants,
            matches: Vec::new(),
            config,
        }
    }

    pub fn add_match(&mut self, player1: &str, player2: &str, result: MatchResult) {
        self.matches.push(MatchEntry {
            player1: player1.to_string(),
            player2: player2.to_string(),
            result,
        });
    }

    /// Total points per participant, highest first. Ties keep entry order.
    pub fn standings(&self) -> Vec<(String, f64)> {
        let mut points: BTreeMap<&str, f64> =
            self.participants.iter().map(|p| (p.as_str(), 0.0)).collect();
        for entry in &self.matches {
            let games = entry.result.total_games() as f64;
            *points.entry(entry.player1.as_str()).or_default() += entry.result.points();
            *points.entry(entry.player2.as_str()).or_default() += games - entry.result.points();
        }

        let mut table: Vec<(String, f64)> = self
            .participants
            .iter()
            .map(|p| (p.clone(), points[p.as_str()]))
            .collect();
        table.sort_by(|a, b| b.1.total_cmp(&a.1));
        table
    }

    /// Save results to JSON file
    pub fn save(&self, path: &Path) -> Result<(), TournamentError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).map_err(|e| TournamentError::io(path, e))
    }

    /// Load results from JSON file
    pub fn load(path: &Path) -> Result<Self, TournamentError> {
        let contents = std::fs::read_to_string(path).map_err(|e| TournamentError::io(path, e))?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Generate a text report
    pub fn generate_report(&self) -> String {
        let mut report = String::new();
        report.push_str(&format!("=== Tournament: {} ===\n\n", self.name));
        report.push_str(&format!("Participants: {}\n", self.participants.join(", ")));
        report.push_str(&format!(
            "Config: {} games/match, max {} plies/game\n\n",
            self.config.games_per_match, self.config.max_moves_per_game
        ));

        report.push_str("Results:\n");
        report.push_str(&format!(
            "{:<12} vs {:<12} {:>5}-{:<5}-{:<5}\n",
            "Player 1", "Player 2", "W", "L", "D"
        ));
        report.push_str(&"-".repeat(48));
        report.push('\n');

        for entry in &self.matches {
            report.push_str(&format!(
                "{:<12} vs {:<12} {:>5}-{:<5}-{:<5}\n",
                entry.player1,
                entry.player2,
                entry.result.wins,
                entry.result.losses,
                entry.result.draws
            ));
        }

        report.push_str("\nStandings:\n");
        for (rank, (player, points)) in self.standings().iter().enumerate() {
            report.push_str(&format!("{:>2}. {:<12} {:>5.1}\n", rank + 1, player, points));
        }

        report
    }
}

#[cfg(test)]
#[path = "results_tests.rs"]
mod results_tests;
