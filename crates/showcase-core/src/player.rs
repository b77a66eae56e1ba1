//! Video player state for the how-to-install tutorials
//!
//! ```text
//!  Idle ──overlay click──▶ (play requested) ──play event──▶ Playing
//!                                                            │   ▲
//!                                              pause/ended   ▼   │ play
//!                                                           Paused
//! ```
//!
//! The overlay only *requests* playback; the state moves when the media
//! element reports it. A rejected request leaves the state untouched.

/// Observable state of one player instance
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PlayerState {
    /// Poster shown, no native controls
    #[default]
    Idle,
    /// Native controls visible, overlay hidden
    Playing,
    /// Native controls visible, overlay shown, poster not re-shown
    Paused,
}

/// Inputs to the player state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerEvent {
    /// The custom play overlay was clicked
    OverlayClicked,
    /// The media element fired `play`
    MediaPlay,
    /// The media element fired `pause`
    MediaPause,
    /// The media element fired `ended`
    MediaEnded,
    /// A requested `play()` was rejected (e.g. autoplay policy)
    PlayRejected,
}

/// Side effect the view should perform after an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerCommand {
    Play,
    None,
}

impl PlayerState {
    /// Apply an event, returning the next state and the command to run.
    pub fn on_event(self, event: PlayerEvent) -> (PlayerState, PlayerCommand) {
        use PlayerEvent::*;
        use PlayerState::*;

        match (self, event) {
            (Idle | Paused, OverlayClicked) => (self, PlayerCommand::Play),
            (Playing, OverlayClicked) => (Playing, PlayerCommand::None),
            (_, MediaPlay) => (Playing, PlayerCommand::None),
            (Playing, MediaPause | MediaEnded) => (Paused, PlayerCommand::None),
            // A pause before anything played (e.g. preload abort) keeps the poster
            (Idle, MediaPause | MediaEnded) => (Idle, PlayerCommand::None),
            (Paused, MediaPause | MediaEnded) => (Paused, PlayerCommand::None),
            (_, PlayRejected) => (self, PlayerCommand::None),
        }
    }

    /// Native controls are shown once playback has started.
    pub fn controls_visible(self) -> bool {
        self != PlayerState::Idle
    }

    pub fn overlay_visible(self) -> bool {
        self != PlayerState::Playing
    }

    pub fn has_started(self) -> bool {
        self != PlayerState::Idle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(events: &[PlayerEvent]) -> PlayerState {
        events
            .iter()
            .fold(PlayerState::default(), |s, e| s.on_event(*e).0)
    }

    #[test]
    fn test_starts_idle_with_poster() {
        let state = PlayerState::default();
        assert_eq!(state, PlayerState::Idle);
        assert!(!state.controls_visible());
        assert!(state.overlay_visible());
    }

    #[test]
    fn test_overlay_requests_play_without_transition() {
        let (state, cmd) = PlayerState::Idle.on_event(PlayerEvent::OverlayClicked);
        assert_eq!(state, PlayerState::Idle);
        assert_eq!(cmd, PlayerCommand::Play);
    }

    #[test]
    fn test_play_event_moves_to_playing() {
        let state = run(&[PlayerEvent::OverlayClicked, PlayerEvent::MediaPlay]);
        assert_eq!(state, PlayerState::Playing);
        assert!(state.controls_visible());
        assert!(!state.overlay_visible());
    }

    #[test]
    fn test_pause_and_resume() {
        use PlayerEvent::*;
        let paused = run(&[OverlayClicked, MediaPlay, MediaPause]);
        assert_eq!(paused, PlayerState::Paused);
        assert!(paused.controls_visible());
        assert!(paused.overlay_visible());

        let (_, cmd) = paused.on_event(OverlayClicked);
        assert_eq!(cmd, PlayerCommand::Play);
        assert_eq!(paused.on_event(MediaPlay).0, PlayerState::Playing);
    }

    #[test]
    fn test_ended_counts_as_paused() {
        use PlayerEvent::*;
        assert_eq!(
            run(&[OverlayClicked, MediaPlay, MediaEnded]),
            PlayerState::Paused
        );
    }

    #[test]
    fn test_rejected_play_stays_idle() {
        use PlayerEvent::*;
        let state = run(&[OverlayClicked, PlayRejected]);
        assert_eq!(state, PlayerState::Idle);
        assert!(!state.has_started());
    }

    #[test]
    fn test_rejected_resume_stays_paused() {
        use PlayerEvent::*;
        assert_eq!(
            run(&[MediaPlay, MediaPause, OverlayClicked, PlayRejected]),
            PlayerState::Paused
        );
    }

    #[test]
    fn test_native_controls_can_start_playback() {
        assert_eq!(run(&[PlayerEvent::MediaPlay]), PlayerState::Playing);
    }

    #[test]
    fn test_stray_pause_while_idle_keeps_poster() {
        assert_eq!(run(&[PlayerEvent::MediaPause]), PlayerState::Idle);
    }
}
