//! Level timing and game phase state machine
//!
//! ```text
//! Status(1) --countdown--> Playing(1) --playtime--> Status(2) --> ... --> Playing(N) --> GameOver
//!     ^                                                                                     |
//!     +------------------------------------- restart --------------------------------------+
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::TICKS_PER_SECOND;

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Countdown before the next level; nothing moves
    Status,
    /// Active gameplay
    Playing,
    /// Run ended; waits for a restart
    GameOver,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameClock {
    level: u32,
    phase: GamePhase,
    /// Ticks remaining in the current phase
    ticks_left: u32,
    status_ticks: u32,
    /// Play length of each level, in ticks
    level_ticks: Vec<u32>,
}

impl GameClock {
    pub fn new(status_ticks: u32, level_ticks: Vec<u32>) -> Self {
        assert!(status_ticks > 0, "status countdown must be at least one tick");
        assert!(!level_ticks.is_empty(), "at least one level is required");
        assert!(
            level_ticks.iter().all(|&t| t > 0),
            "every level must last at least one tick"
        );
        Self {
            level: 1,
            phase: GamePhase::Status,
            ticks_left: status_ticks,
            status_ticks,
            level_ticks,
        }
    }

    /// Back to the countdown before level 1
    pub fn reset(&mut self) {
        self.level = 1;
        self.phase = GamePhase::Status;
        self.ticks_left = self.status_ticks;
    }

    /// Advance one tick, switching phase when the countdown runs out
    pub fn advance(&mut self) {
        if self.phase == GamePhase::GameOver {
            return;
        }

        self.ticks_left = self.ticks_left.saturating_sub(1);
        if self.ticks_left > 0 {
            return;
        }

        match self.phase {
            GamePhase::Status => {
                self.phase = GamePhase::Playing;
                self.ticks_left = self.level_ticks[self.level as usize - 1];
                log::info!("Level {} started", self.level);
            }
            GamePhase::Playing if self.is_final_level() => {
                self.phase = GamePhase::GameOver;
                log::info!("Game over after level {}", self.level);
            }
            GamePhase::Playing => {
                self.level += 1;
                self.phase = GamePhase::Status;
                self.ticks_left = self.status_ticks;
                log::info!("Level {} begins in {} seconds", self.level, self.seconds_left());
            }
            GamePhase::GameOver => {}
        }
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn level_count(&self) -> u32 {
        self.level_ticks.len() as u32
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_status(&self) -> bool {
        self.phase == GamePhase::Status
    }

    pub fn is_playing(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub fn is_final_level(&self) -> bool {
        self.level >= self.level_count()
    }

    pub fn ticks_left(&self) -> u32 {
        self.ticks_left
    }

    /// Whole seconds left in the current phase, rounded up
    pub fn seconds_left(&self) -> u32 {
        self.ticks_left.div_ceil(TICKS_PER_SECOND)
    }

    /// Fraction of the current phase still to run, in [0, 1]
    pub fn percent_left(&self) -> f32 {
        let total = match self.phase {
            GamePhase::Status => self.status_ticks,
            GamePhase::Playing => self.level_ticks[self.level as usize - 1],
            GamePhase::GameOver => return 0.0,
        };
        self.ticks_left as f32 / total as f32
    }
}

impl fmt::Display for GameClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.phase {
            GamePhase::Status => write!(
                f,
                "Level {} begins in {} seconds",
                self.level,
                self.seconds_left()
            ),
            GamePhase::Playing => write!(f, "Time: {}", self.seconds_left()),
            GamePhase::GameOver => write!(f, "Game Over"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn short_clock() -> GameClock {
        GameClock::new(3, vec![5, 4])
    }

    #[test]
    fn test_starts_in_status_level_one() {
        let clock = short_clock();
        assert_eq!(clock.phase(), GamePhase::Status);
        assert_eq!(clock.level(), 1);
        assert_eq!(clock.percent_left(), 1.0);
    }

    #[test]
    fn test_full_run() {
        let mut clock = short_clock();
        let mut phases = Vec::new();
        for _ in 0..20 {
            clock.advance();
            phases.push((clock.phase(), clock.level()));
        }
        use GamePhase::*;
        assert_eq!(&phases[..2], &[(Status, 1), (Status, 1)]);
        assert_eq!(phases[2], (Playing, 1));
        assert_eq!(phases[6], (Playing, 1));
        assert_eq!(phases[7], (Status, 2));
        assert_eq!(phases[10], (Playing, 2));
        assert_eq!(phases[13], (Playing, 2));
        assert_eq!(phases[14], (GameOver, 2));
        assert!(phases[14..].iter().all(|&p| p == (GameOver, 2)));
    }

    #[test]
    fn test_game_over_is_frozen_until_reset() {
        let mut clock = GameClock::new(1, vec![1]);
        clock.advance();
        clock.advance();
        assert!(clock.is_game_over());
        let frozen = clock.clone();
        clock.advance();
        assert_eq!(clock, frozen);

        clock.reset();
        assert!(clock.is_status());
        assert_eq!(clock.level(), 1);
    }

    #[test]
    fn test_text() {
        let mut clock = GameClock::new(150, vec![900]);
        assert_eq!(clock.to_string(), "Level 1 begins in 5 seconds");
        for _ in 0..150 {
            clock.advance();
        }
        assert_eq!(clock.to_string(), "Time: 30");
        clock.advance();
        assert_eq!(clock.to_string(), "Time: 30");
        assert!(clock.percent_left() < 1.0);
    }

    #[test]
    #[should_panic]
    fn test_no_levels_panics() {
        GameClock::new(10, Vec::new());
    }
}
