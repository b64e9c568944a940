//! Level sequencing across a campaign
//!
//! Owns one [`LevelSession`] per level definition and decides what happens
//! when a session reaches a terminal status: a win moves on (or finishes the
//! campaign), running out of health waits for a retry.

use crate::error::ConfigError;
use crate::sim::{LevelDef, LevelSession, SessionEvent, SessionStatus, TickInput, tick};
use crate::tuning::Tuning;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CampaignPhase {
    /// The current level is being played
    Playing,
    /// The current level ran out of health; waiting for `retry`
    LevelFailed,
    /// The last level was won
    Complete,
}

pub struct Campaign {
    sessions: Vec<LevelSession>,
    current: usize,
    phase: CampaignPhase,
    /// Levels selectable from level select, counted from the first
    unlocked: usize,
}

impl Campaign {
    /// Build and validate every level up front, then enter the first.
    pub fn new(defs: Vec<LevelDef>, tuning: Tuning) -> Result<Self, ConfigError> {
        if defs.is_empty() {
            return Err(ConfigError::NoLevels);
        }
        tuning.validate()?;
        let sessions = defs
            .into_iter()
            .map(|def| LevelSession::new(def, tuning.clone()))
            .collect::<Result<Vec<_>, _>>()?;

        log::info!("campaign loaded with {} levels", sessions.len());

        let mut campaign = Self {
            sessions,
            current: 0,
            phase: CampaignPhase::Playing,
            unlocked: 1,
        };
        campaign.enter(0);
        Ok(campaign)
    }

    /// Advance the current level by one tick and react to its outcome.
    pub fn tick(&mut self, input: &TickInput) -> Vec<SessionEvent> {
        if self.phase != CampaignPhase::Playing {
            return Vec::new();
        }

        let session = &mut self.sessions[self.current];
        let events = tick(session, input);

        match session.status() {
            SessionStatus::Active => {}
            SessionStatus::Won => self.advance(),
            SessionStatus::LivesExhausted => {
                log::info!("level {} failed", self.current + 1);
                self.phase = CampaignPhase::LevelFailed;
            }
        }

        events
    }

    fn advance(&mut self) {
        let next = self.current + 1;
        if next >= self.sessions.len() {
            log::info!("campaign complete");
            self.phase = CampaignPhase::Complete;
            return;
        }
        self.unlocked = self.unlocked.max(next + 1);
        self.enter(next);
    }

    fn enter(&mut self, index: usize) {
        self.current = index;
        self.phase = CampaignPhase::Playing;
        self.sessions[index].enter();
    }

    /// Fresh attempt at the current level
    pub fn retry(&mut self) {
        self.enter(self.current);
    }

    /// Jump to an unlocked level. Returns false if `index` is still locked.
    pub fn select_level(&mut self, index: usize) -> bool {
        if index >= self.unlocked {
            log::debug!("level {} is locked", index + 1);
            return false;
        }
        self.enter(index);
        true
    }

    /// Back to the first level
    pub fn restart(&mut self) {
        self.enter(0);
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn phase(&self) -> CampaignPhase {
        self.phase
    }

    pub fn session(&self) -> &LevelSession {
        &self.sessions[self.current]
    }

    pub fn unlocked(&self) -> usize {
        self.unlocked
    }

    pub fn level_count(&self) -> usize {
        self.sessions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{ObstacleDef, ObstacleKind, Rect};
    use glam::Vec2;

    fn flat(name: &str, health: u32) -> LevelDef {
        LevelDef {
            name: name.to_string(),
            width: 1000.0,
            floor_y: 500.0,
            spawn: Vec2::new(40.0, 400.0),
            goal: Rect::new(900.0, 360.0, 30.0, 40.0),
            obstacles: vec![ObstacleDef::new(ObstacleKind::Normal, 0.0, 400.0, 1000.0, 20.0)],
            keys: Vec::new(),
            pursuit_lag: 60,
            health,
        }
    }

    fn campaign(levels: usize) -> Campaign {
        let defs = (0..levels).map(|i| flat(&format!("level {i}"), 3)).collect();
        Campaign::new(defs, Tuning::default()).expect("valid campaign")
    }

    /// Drop the player onto the goal so the next tick wins
    fn stand_on_goal(campaign: &mut Campaign) {
        let current = campaign.current;
        campaign.sessions[current].player.pose.pos = Vec2::new(915.0, 400.0);
    }

    /// Push the player below the floor so the next tick costs a life
    fn fall_out(campaign: &mut Campaign) {
        let current = campaign.current;
        campaign.sessions[current].player.pose.pos = Vec2::new(40.0, 600.0);
    }

    #[test]
    fn test_empty_campaign_is_rejected() {
        assert!(matches!(
            Campaign::new(Vec::new(), Tuning::default()),
            Err(ConfigError::NoLevels)
        ));
    }

    #[test]
    fn test_invalid_level_is_rejected_up_front() {
        let mut bad = flat("bad", 3);
        bad.pursuit_lag = 0;
        let result = Campaign::new(vec![flat("ok", 3), bad], Tuning::default());
        assert!(matches!(result, Err(ConfigError::ZeroPursuitLag { .. })));
    }

    #[test]
    fn test_win_advances_and_unlocks() {
        let mut campaign = campaign(2);
        assert_eq!(campaign.unlocked(), 1);
        assert!(campaign.session().is_dirty());

        stand_on_goal(&mut campaign);
        let events = campaign.tick(&TickInput::default());
        assert!(events.contains(&SessionEvent::Won));
        assert_eq!(campaign.current_index(), 1);
        assert_eq!(campaign.unlocked(), 2);
        assert_eq!(campaign.phase(), CampaignPhase::Playing);
        assert_eq!(campaign.session().status(), SessionStatus::Active);
    }

    #[test]
    fn test_winning_last_level_completes() {
        let mut campaign = campaign(1);
        stand_on_goal(&mut campaign);
        campaign.tick(&TickInput::default());
        assert_eq!(campaign.phase(), CampaignPhase::Complete);

        // Ticks are ignored once complete
        let before = campaign.session().time_ticks();
        assert!(campaign.tick(&TickInput::default()).is_empty());
        assert_eq!(campaign.session().time_ticks(), before);

        campaign.restart();
        assert_eq!(campaign.phase(), CampaignPhase::Playing);
        assert!(!campaign.session().is_won());
    }

    #[test]
    fn test_losing_all_health_waits_for_retry() {
        let defs = vec![flat("fragile", 1)];
        let mut campaign = Campaign::new(defs, Tuning::default()).expect("valid");

        fall_out(&mut campaign);
        let events = campaign.tick(&TickInput::default());
        assert!(events.contains(&SessionEvent::Lost));
        assert_eq!(campaign.phase(), CampaignPhase::LevelFailed);
        assert!(campaign.tick(&TickInput::default()).is_empty());

        campaign.retry();
        assert_eq!(campaign.phase(), CampaignPhase::Playing);
        assert_eq!(campaign.session().health(), 1);
        assert_eq!(campaign.session().status(), SessionStatus::Active);
    }

    #[test]
    fn test_select_level_respects_unlocks() {
        let mut campaign = campaign(3);
        assert!(!campaign.select_level(1));
        assert!(!campaign.select_level(7));
        assert_eq!(campaign.current_index(), 0);

        stand_on_goal(&mut campaign);
        campaign.tick(&TickInput::default());
        assert_eq!(campaign.current_index(), 1);

        // Going back to a won level starts it over
        assert!(campaign.select_level(0));
        assert_eq!(campaign.current_index(), 0);
        assert!(!campaign.session().is_won());
        assert_eq!(campaign.session().time_ticks(), 0);
    }

    #[test]
    fn test_leaving_mid_level_resets_on_return() {
        let mut campaign = campaign(2);
        stand_on_goal(&mut campaign);
        campaign.tick(&TickInput::default());

        // Lose a life on level 2, then walk away from it
        fall_out(&mut campaign);
        campaign.tick(&TickInput::default());
        assert_eq!(campaign.session().health(), 2);
        assert!(campaign.select_level(0));

        assert!(campaign.select_level(1));
        assert_eq!(campaign.session().health(), 3);
    }
}
