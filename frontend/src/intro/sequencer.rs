//! First-visit gating for the home route: intro video, then the animated
//! splash, then the landing content.
//!
//! The sequencer is plain state; the overlay components feed it inputs and
//! arm a timer for whatever [`Transition::Begin`] asks for.

use std::time::Duration;

use crate::utils::session_flags::{SessionFlag, SessionFlags};
use crate::Route;

/// Matches the CSS opacity transition on the video overlay.
pub const VIDEO_FADE: Duration = Duration::from_millis(800);
/// Matches the splash exit animation.
pub const SPLASH_EXIT: Duration = Duration::from_millis(500);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IntroStage {
    VideoPlaying,
    SplashPlaying,
    Content,
}

impl IntroStage {
    /// Keys that skip or dismiss the overlay shown in this stage.
    pub fn accepts_key(self, key: &str) -> bool {
        match self {
            IntroStage::VideoPlaying => matches!(key, " " | "Enter" | "Escape"),
            IntroStage::SplashPlaying => matches!(key, " " | "Enter"),
            IntroStage::Content => false,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IntroInput {
    /// The video reached its natural end.
    VideoEnded,
    /// Click, tap or accepted key on the current overlay.
    Skip,
    /// The fade/exit delay armed by the last transition has run out.
    TransitionElapsed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    Ignored,
    Begin { delay: Duration },
    Completed(IntroStage),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IntroSequencer {
    stage: IntroStage,
    leaving: bool,
}

/// Identity for the gate around a page. Moving between gated and ungated
/// routes changes the key, so the gate remounts and re-reads the flags.
pub fn gate_key(route: &Route) -> &'static str {
    match route {
        Route::Home => "intro-gated",
        _ => "intro-bypassed",
    }
}

impl IntroSequencer {
    /// Picks the starting stage from the session flags. Only the home route
    /// is gated.
    pub fn start(route: &Route, flags: &dyn SessionFlags) -> Self {
        let stage = if !matches!(route, Route::Home) {
            IntroStage::Content
        } else if !flags.get(SessionFlag::VideoShown) {
            IntroStage::VideoPlaying
        } else if !flags.get(SessionFlag::SplashShown) {
            IntroStage::SplashPlaying
        } else {
            IntroStage::Content
        };
        log::debug!("Intro starts at {:?} for {:?}", stage, route);
        Self {
            stage,
            leaving: false,
        }
    }

    pub fn stage(&self) -> IntroStage {
        self.stage
    }

    /// True while a fade or exit delay is running.
    pub fn is_leaving(&self) -> bool {
        self.leaving
    }

    pub fn overlay_visible(&self) -> bool {
        self.stage != IntroStage::Content
    }

    /// The delay the UI should currently have armed, if any.
    pub fn pending_delay(&self) -> Option<Duration> {
        if !self.leaving {
            return None;
        }
        match self.stage {
            IntroStage::VideoPlaying => Some(VIDEO_FADE),
            IntroStage::SplashPlaying => Some(SPLASH_EXIT),
            IntroStage::Content => None,
        }
    }

    pub fn handle(&mut self, input: IntroInput, flags: &dyn SessionFlags) -> Transition {
        match (self.stage, input) {
            (IntroStage::Content, _) => Transition::Ignored,
            (_, IntroInput::TransitionElapsed) if self.leaving => {
                self.leaving = false;
                self.stage = match self.stage {
                    IntroStage::VideoPlaying => IntroStage::SplashPlaying,
                    _ => IntroStage::Content,
                };
                log::info!("Intro moved to {:?}", self.stage);
                Transition::Completed(self.stage)
            }
            (_, IntroInput::TransitionElapsed) => Transition::Ignored,
            _ if self.leaving => Transition::Ignored,
            (IntroStage::VideoPlaying, IntroInput::VideoEnded | IntroInput::Skip) => {
                flags.set(SessionFlag::VideoShown);
                self.leaving = true;
                Transition::Begin { delay: VIDEO_FADE }
            }
            (IntroStage::SplashPlaying, IntroInput::Skip) => {
                flags.set(SessionFlag::SplashShown);
                self.leaving = true;
                Transition::Begin { delay: SPLASH_EXIT }
            }
            (IntroStage::SplashPlaying, IntroInput::VideoEnded) => Transition::Ignored,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::session_flags::MemorySession;

    fn home() -> Route {
        Route::Home
    }

    fn finish_stage(seq: &mut IntroSequencer, input: IntroInput, flags: &MemorySession) -> IntroStage {
        assert!(matches!(seq.handle(input, flags), Transition::Begin { .. }));
        match seq.handle(IntroInput::TransitionElapsed, flags) {
            Transition::Completed(stage) => stage,
            other => panic!("expected completion, got {:?}", other),
        }
    }

    #[test]
    fn fresh_session_runs_video_then_splash_then_content() {
        let flags = MemorySession::default();
        let mut seq = IntroSequencer::start(&home(), &flags);
        assert_eq!(seq.stage(), IntroStage::VideoPlaying);

        assert_eq!(finish_stage(&mut seq, IntroInput::VideoEnded, &flags), IntroStage::SplashPlaying);
        assert_eq!(finish_stage(&mut seq, IntroInput::Skip, &flags), IntroStage::Content);

        assert!(flags.get(SessionFlag::VideoShown));
        assert!(flags.get(SessionFlag::SplashShown));
        assert!(!seq.overlay_visible());
    }

    #[test]
    fn both_flags_set_starts_in_content() {
        let flags = MemorySession::with(&[SessionFlag::VideoShown, SessionFlag::SplashShown]);
        let seq = IntroSequencer::start(&home(), &flags);
        assert_eq!(seq.stage(), IntroStage::Content);
        assert!(!seq.overlay_visible());
    }

    #[test]
    fn video_shown_only_starts_at_splash() {
        let flags = MemorySession::with(&[SessionFlag::VideoShown]);
        let seq = IntroSequencer::start(&home(), &flags);
        assert_eq!(seq.stage(), IntroStage::SplashPlaying);
    }

    #[test]
    fn splash_flag_alone_still_plays_video_first() {
        let flags = MemorySession::with(&[SessionFlag::SplashShown]);
        let seq = IntroSequencer::start(&home(), &flags);
        assert_eq!(seq.stage(), IntroStage::VideoPlaying);
    }

    #[test]
    fn skipping_video_records_flag_before_the_fade_finishes() {
        let flags = MemorySession::default();
        let mut seq = IntroSequencer::start(&home(), &flags);
        assert_eq!(
            seq.handle(IntroInput::Skip, &flags),
            Transition::Begin { delay: VIDEO_FADE }
        );
        assert!(flags.get(SessionFlag::VideoShown));
        assert!(!flags.get(SessionFlag::SplashShown));
        assert_eq!(seq.stage(), IntroStage::VideoPlaying);
        assert_eq!(seq.pending_delay(), Some(VIDEO_FADE));
    }

    #[test]
    fn input_during_fade_is_ignored() {
        let flags = MemorySession::default();
        let mut seq = IntroSequencer::start(&home(), &flags);
        seq.handle(IntroInput::Skip, &flags);
        assert_eq!(seq.handle(IntroInput::Skip, &flags), Transition::Ignored);
        assert_eq!(seq.handle(IntroInput::VideoEnded, &flags), Transition::Ignored);
        assert_eq!(
            seq.handle(IntroInput::TransitionElapsed, &flags),
            Transition::Completed(IntroStage::SplashPlaying)
        );
        // A second elapsed signal must not skip the splash.
        assert_eq!(seq.handle(IntroInput::TransitionElapsed, &flags), Transition::Ignored);
        assert_eq!(seq.stage(), IntroStage::SplashPlaying);
    }

    #[test]
    fn splash_dismiss_is_idempotent_during_exit() {
        let flags = MemorySession::with(&[SessionFlag::VideoShown]);
        let mut seq = IntroSequencer::start(&home(), &flags);
        assert_eq!(
            seq.handle(IntroInput::Skip, &flags),
            Transition::Begin { delay: SPLASH_EXIT }
        );
        assert_eq!(seq.handle(IntroInput::Skip, &flags), Transition::Ignored);
        assert!(flags.get(SessionFlag::SplashShown));
        assert_eq!(
            seq.handle(IntroInput::TransitionElapsed, &flags),
            Transition::Completed(IntroStage::Content)
        );
    }

    #[test]
    fn elapsed_without_pending_transition_is_ignored() {
        let flags = MemorySession::default();
        let mut seq = IntroSequencer::start(&home(), &flags);
        assert_eq!(seq.handle(IntroInput::TransitionElapsed, &flags), Transition::Ignored);
        assert_eq!(seq.stage(), IntroStage::VideoPlaying);
        assert_eq!(seq.pending_delay(), None);
    }

    #[test]
    fn content_is_terminal() {
        let flags = MemorySession::with(&[SessionFlag::VideoShown, SessionFlag::SplashShown]);
        let mut seq = IntroSequencer::start(&home(), &flags);
        for input in [IntroInput::Skip, IntroInput::VideoEnded, IntroInput::TransitionElapsed] {
            assert_eq!(seq.handle(input, &flags), Transition::Ignored);
        }
        assert_eq!(seq.stage(), IntroStage::Content);
    }

    #[test]
    fn remount_after_completion_does_not_replay() {
        let flags = MemorySession::default();
        let mut seq = IntroSequencer::start(&home(), &flags);
        finish_stage(&mut seq, IntroInput::Skip, &flags);
        finish_stage(&mut seq, IntroInput::Skip, &flags);
        let again = IntroSequencer::start(&home(), &flags);
        assert_eq!(again.stage(), IntroStage::Content);
    }

    #[test]
    fn other_routes_bypass_the_intro() {
        let flags = MemorySession::default();
        let routes = [
            Route::Privacy,
            Route::FeatureDetail {
                slug: "skillmatch".to_string(),
            },
        ];
        for route in routes {
            let seq = IntroSequencer::start(&route, &flags);
            assert_eq!(seq.stage(), IntroStage::Content);
        }
        assert!(!flags.get(SessionFlag::VideoShown));
    }

    #[test]
    fn home_after_another_page_still_plays_the_intro() {
        let flags = MemorySession::default();
        let privacy = Route::Privacy;
        let first = IntroSequencer::start(&privacy, &flags);
        assert_eq!(first.stage(), IntroStage::Content);

        // A different key remounts the gate, which starts over from the flags.
        assert_ne!(gate_key(&privacy), gate_key(&home()));
        let landing = IntroSequencer::start(&home(), &flags);
        assert_eq!(landing.stage(), IntroStage::VideoPlaying);
        assert_eq!(flags.writes(), 0);
    }

    #[test]
    fn ungated_routes_share_a_gate_key() {
        let detail = Route::FeatureDetail {
            slug: "karma-points".to_string(),
        };
        assert_eq!(gate_key(&detail), gate_key(&Route::Privacy));
    }

    #[test]
    fn key_bindings_per_stage() {
        assert!(IntroStage::VideoPlaying.accepts_key("Escape"));
        assert!(IntroStage::VideoPlaying.accepts_key(" "));
        assert!(IntroStage::SplashPlaying.accepts_key("Enter"));
        assert!(!IntroStage::SplashPlaying.accepts_key("Escape"));
        assert!(!IntroStage::Content.accepts_key("Enter"));
        assert!(!IntroStage::VideoPlaying.accepts_key("a"));
    }
}
