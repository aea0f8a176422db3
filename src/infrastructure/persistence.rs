use crate::domain::models::{GameResult, Player};
use log::warn;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub games: u64,
    pub x_wins: u64,
    pub o_wins: u64,
    pub draws: u64,
}

/// Win/loss/draw counters persisted as pretty JSON next to the binary.
/// A missing or unreadable file just means a fresh record.
pub struct StatsStore {
    path: PathBuf,
    stats: Stats,
}

impl StatsStore {
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let stats = match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(stats) => stats,
                Err(e) => {
                    warn!("stats file {} is corrupt ({}), starting fresh", path.display(), e);
                    Stats::default()
                }
            },
            Err(_) => Stats::default(),
        };
        Self { path, stats }
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    /// Bumps the counters for a terminal result and saves. `InProgress` is
    /// ignored; only finished games count.
    pub fn record(&mut self, result: GameResult) -> io::Result<()> {
        match result {
            GameResult::Win(Player::X) => self.stats.x_wins += 1,
            GameResult::Win(Player::O) => self.stats.o_wins += 1,
            GameResult::Draw => self.stats.draws += 1,
            GameResult::InProgress => return Ok(()),
        }
        self.stats.games += 1;
        self.save()
    }

    fn save(&self) -> io::Result<()> {
        let contents = serde_json::to_string_pretty(&self.stats)?;
        fs::write(&self.path, contents)
    }
}
