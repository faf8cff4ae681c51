use std::time::{Duration, Instant};

use crate::game::StepOutcome;

/// Session statistics kept in memory for as long as the program runs
pub struct GameMetrics {
    pub start_time: Instant,
    pub elapsed_time: Duration,
    pub high_score: u32,
    pub games_played: u32,
    /// The clock stops while a finished game is on screen
    running: bool,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            elapsed_time: Duration::ZERO,
            high_score: 0,
            games_played: 0,
            running: true,
        }
    }

    pub fn update(&mut self) {
        if self.running {
            self.elapsed_time = self.start_time.elapsed();
        }
    }

    /// Feed the result of a frame step; `score` is the score after the step
    pub fn observe(&mut self, outcome: StepOutcome, score: u32) {
        match outcome {
            StepOutcome::Collision(_) | StepOutcome::BoardFull => self.on_game_over(score),
            StepOutcome::Restarted => self.on_game_start(),
            StepOutcome::Waiting | StepOutcome::Moved | StepOutcome::AteFood => {}
        }
    }

    pub fn on_game_start(&mut self) {
        self.start_time = Instant::now();
        self.elapsed_time = Duration::ZERO;
        self.running = true;
    }

    pub fn on_game_over(&mut self, final_score: u32) {
        self.update();
        self.running = false;
        self.games_played += 1;
        if final_score > self.high_score {
            self.high_score = final_score;
        }
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;
        format!("{:02}:{:02}", minutes, seconds)
    }
}

impl Default for GameMetrics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::CollisionType;

    #[test]
    fn test_time_formatting() {
        let mut metrics = GameMetrics::new();
        metrics.elapsed_time = Duration::from_secs(125);
        assert_eq!(metrics.format_time(), "02:05");

        metrics.elapsed_time = Duration::from_secs(0);
        assert_eq!(metrics.format_time(), "00:00");

        metrics.elapsed_time = Duration::from_secs(3661);
        assert_eq!(metrics.format_time(), "61:01");
    }

    #[test]
    fn test_high_score_tracking() {
        let mut metrics = GameMetrics::new();

        metrics.observe(StepOutcome::Collision(CollisionType::Wall), 100);
        assert_eq!(metrics.high_score, 100);
        assert_eq!(metrics.games_played, 1);

        metrics.observe(StepOutcome::Restarted, 0);
        metrics.observe(StepOutcome::Collision(CollisionType::SelfCollision), 50);
        assert_eq!(metrics.high_score, 100);
        assert_eq!(metrics.games_played, 2);

        metrics.observe(StepOutcome::Restarted, 0);
        metrics.observe(StepOutcome::BoardFull, 150);
        assert_eq!(metrics.high_score, 150);
        assert_eq!(metrics.games_played, 3);
    }

    #[test]
    fn test_ordinary_steps_are_ignored() {
        let mut metrics = GameMetrics::new();
        metrics.observe(StepOutcome::Moved, 0);
        metrics.observe(StepOutcome::AteFood, 10);
        metrics.observe(StepOutcome::Waiting, 10);
        assert_eq!(metrics.games_played, 0);
        assert_eq!(metrics.high_score, 0);
    }

    #[test]
    fn test_clock_stops_on_game_over() {
        let mut metrics = GameMetrics::new();
        metrics.on_game_over(0);
        let frozen = metrics.elapsed_time;

        std::thread::sleep(Duration::from_millis(20));
        metrics.update();
        assert_eq!(metrics.elapsed_time, frozen);
    }

    #[test]
    fn test_game_start_resets_time() {
        let mut metrics = GameMetrics::new();
        std::thread::sleep(Duration::from_millis(50));
        metrics.update();

        assert!(metrics.elapsed_time.as_millis() >= 50);

        metrics.on_game_start();
        metrics.update();
        assert!(metrics.elapsed_time.as_millis() < 50);
    }
}
