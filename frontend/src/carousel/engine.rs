use std::rc::Rc;
use std::time::Duration;

use yew::Reducible;

pub const AUTOPLAY_INTERVAL: Duration = Duration::from_millis(4000);
pub const MANUAL_COOLDOWN: Duration = Duration::from_millis(5000);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CarouselAction {
    /// Autoplay interval fired.
    Tick,
    Next,
    Previous,
    Select(usize),
    /// ArrowLeft / ArrowRight on the window.
    Key(ArrowKey),
    PointerEnter,
    PointerLeave,
    /// The cooldown armed by manual navigation number `epoch` ran out.
    CooldownElapsed(u32),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArrowKey {
    Left,
    Right,
}

impl ArrowKey {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(ArrowKey::Left),
            "ArrowRight" => Some(ArrowKey::Right),
            _ => None,
        }
    }
}

/// Slide rotation state. Index arithmetic wraps in both directions; any
/// manual move suspends autoplay until the matching cooldown elapses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CarouselEngine {
    len: usize,
    index: usize,
    autoplay: bool,
    hovered: bool,
    // Bumped on every manual move so stale cooldowns are recognisable.
    manual_epoch: u32,
}

impl CarouselEngine {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            index: 0,
            autoplay: true,
            hovered: false,
            manual_epoch: 0,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn autoplay_enabled(&self) -> bool {
        self.autoplay
    }

    pub fn is_paused(&self) -> bool {
        self.hovered
    }

    /// Whether interval ticks currently move the carousel.
    pub fn is_advancing(&self) -> bool {
        self.autoplay && !self.hovered
    }

    /// Epoch of the cooldown that should be armed, or `None` while autoplay
    /// is on.
    pub fn cooldown(&self) -> Option<u32> {
        (!self.autoplay).then_some(self.manual_epoch)
    }

    pub fn apply(&mut self, action: CarouselAction) -> bool {
        if self.is_empty() {
            return false;
        }
        let before = *self;
        match action {
            CarouselAction::Tick => {
                if self.is_advancing() {
                    self.index = (self.index + 1) % self.len;
                }
            }
            CarouselAction::Next | CarouselAction::Key(ArrowKey::Right) => {
                self.index = (self.index + 1) % self.len;
                self.suspend();
            }
            CarouselAction::Previous | CarouselAction::Key(ArrowKey::Left) => {
                self.index = (self.index + self.len - 1) % self.len;
                self.suspend();
            }
            CarouselAction::Select(target) => {
                if target < self.len {
                    self.index = target;
                    self.suspend();
                }
            }
            CarouselAction::PointerEnter => self.hovered = true,
            CarouselAction::PointerLeave => self.hovered = false,
            CarouselAction::CooldownElapsed(epoch) => {
                if epoch == self.manual_epoch {
                    self.autoplay = true;
                }
            }
        }
        *self != before
    }

    fn suspend(&mut self) {
        self.autoplay = false;
        self.manual_epoch = self.manual_epoch.wrapping_add(1);
    }
}

impl Reducible for CarouselEngine {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = *self;
        if next.apply(action) {
            Rc::new(next)
        } else {
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_wraps_back_to_start() {
        let mut engine = CarouselEngine::new(5);
        for _ in 0..5 {
            engine.apply(CarouselAction::Next);
        }
        assert_eq!(engine.index(), 0);
    }

    #[test]
    fn previous_from_start_goes_to_last() {
        let mut engine = CarouselEngine::new(5);
        engine.apply(CarouselAction::Previous);
        assert_eq!(engine.index(), 4);
    }

    #[test]
    fn tick_advances_only_when_autoplaying() {
        let mut engine = CarouselEngine::new(3);
        engine.apply(CarouselAction::Tick);
        assert_eq!(engine.index(), 1);

        engine.apply(CarouselAction::PointerEnter);
        assert!(!engine.apply(CarouselAction::Tick));
        assert_eq!(engine.index(), 1);

        engine.apply(CarouselAction::PointerLeave);
        engine.apply(CarouselAction::Tick);
        assert_eq!(engine.index(), 2);
        engine.apply(CarouselAction::Tick);
        assert_eq!(engine.index(), 0);
    }

    #[test]
    fn hover_does_not_disable_autoplay() {
        let mut engine = CarouselEngine::new(3);
        engine.apply(CarouselAction::PointerEnter);
        assert!(engine.autoplay_enabled());
        assert!(engine.is_paused());
        assert_eq!(engine.cooldown(), None);
    }

    #[test]
    fn manual_navigation_suspends_until_its_cooldown() {
        let mut engine = CarouselEngine::new(4);
        engine.apply(CarouselAction::Select(2));
        assert_eq!(engine.index(), 2);
        let epoch = engine.cooldown().expect("cooldown armed");

        engine.apply(CarouselAction::Tick);
        assert_eq!(engine.index(), 2);

        engine.apply(CarouselAction::CooldownElapsed(epoch));
        assert!(engine.autoplay_enabled());
        engine.apply(CarouselAction::Tick);
        assert_eq!(engine.index(), 3);
    }

    #[test]
    fn stale_cooldown_is_ignored() {
        let mut engine = CarouselEngine::new(4);
        engine.apply(CarouselAction::Next);
        let first = engine.cooldown().unwrap();
        engine.apply(CarouselAction::Next);
        let second = engine.cooldown().unwrap();
        assert_ne!(first, second);

        engine.apply(CarouselAction::CooldownElapsed(first));
        assert!(!engine.autoplay_enabled());
        engine.apply(CarouselAction::CooldownElapsed(second));
        assert!(engine.autoplay_enabled());
    }

    #[test]
    fn arrow_keys_navigate_and_share_the_cooldown() {
        let mut engine = CarouselEngine::new(3);
        engine.apply(CarouselAction::Key(ArrowKey::Left));
        assert_eq!(engine.index(), 2);
        let epoch = engine.cooldown().expect("keyboard arms cooldown");
        engine.apply(CarouselAction::Key(ArrowKey::Right));
        assert_eq!(engine.index(), 0);
        assert_ne!(engine.cooldown(), Some(epoch));
        engine.apply(CarouselAction::CooldownElapsed(epoch + 1));
        assert!(engine.autoplay_enabled());
    }

    #[test]
    fn out_of_range_selection_is_ignored() {
        let mut engine = CarouselEngine::new(3);
        assert!(!engine.apply(CarouselAction::Select(3)));
        assert_eq!(engine.index(), 0);
        assert!(engine.autoplay_enabled());
    }

    #[test]
    fn empty_carousel_is_inert() {
        let mut engine = CarouselEngine::new(0);
        for action in [
            CarouselAction::Tick,
            CarouselAction::Next,
            CarouselAction::Previous,
            CarouselAction::Select(0),
        ] {
            assert!(!engine.apply(action));
        }
        assert_eq!(engine.index(), 0);
    }

    #[test]
    fn arrow_key_parsing() {
        assert_eq!(ArrowKey::from_key("ArrowLeft"), Some(ArrowKey::Left));
        assert_eq!(ArrowKey::from_key("ArrowRight"), Some(ArrowKey::Right));
        assert_eq!(ArrowKey::from_key("ArrowUp"), None);
    }

    /// Replays the timers the carousel view arms: an interval that runs
    /// while autoplay is enabled (phase restarts whenever it is re-armed)
    /// and a cooldown timeout per manual epoch.
    struct Timeline {
        engine: CarouselEngine,
        now: u64,
        interval_started: Option<u64>,
        cooldown_due: Option<(u32, u64)>,
        changes: Vec<(u64, usize)>,
    }

    impl Timeline {
        fn new(len: usize) -> Self {
            Self {
                engine: CarouselEngine::new(len),
                now: 0,
                interval_started: Some(0),
                cooldown_due: None,
                changes: Vec::new(),
            }
        }

        fn sync_timers(&mut self) {
            if self.engine.autoplay_enabled() {
                self.interval_started.get_or_insert(self.now);
            } else {
                self.interval_started = None;
            }
            match (self.engine.cooldown(), self.cooldown_due) {
                (Some(epoch), Some((armed, _))) if armed == epoch => {}
                (Some(epoch), _) => {
                    self.cooldown_due = Some((epoch, self.now + MANUAL_COOLDOWN.as_millis() as u64))
                }
                (None, _) => self.cooldown_due = None,
            }
        }

        fn next_tick(&self) -> Option<u64> {
            let period = AUTOPLAY_INTERVAL.as_millis() as u64;
            self.interval_started.map(|start| {
                let elapsed = self.now - start;
                start + (elapsed / period + 1) * period
            })
        }

        fn advance_to(&mut self, until: u64) {
            loop {
                let tick = self.next_tick();
                let cooldown = self.cooldown_due.map(|(_, at)| at);
                let next = match (tick, cooldown) {
                    (Some(t), Some(c)) => t.min(c),
                    (Some(t), None) => t,
                    (None, Some(c)) => c,
                    (None, None) => break,
                };
                if next > until {
                    break;
                }
                self.now = next;
                if cooldown == Some(next) {
                    let (epoch, _) = self.cooldown_due.take().unwrap();
                    self.engine.apply(CarouselAction::CooldownElapsed(epoch));
                } else {
                    let before = self.engine.index();
                    self.engine.apply(CarouselAction::Tick);
                    if self.engine.index() != before {
                        self.changes.push((self.now, self.engine.index()));
                    }
                }
                self.sync_timers();
            }
            self.now = until;
        }

        fn manual(&mut self, at: u64, action: CarouselAction) {
            self.advance_to(at);
            self.engine.apply(action);
            self.sync_timers();
        }
    }

    #[test]
    fn no_autoplay_change_within_cooldown_window() {
        let mut timeline = Timeline::new(5);
        timeline.advance_to(9_000);
        assert_eq!(timeline.changes, vec![(4_000, 1), (8_000, 2)]);

        timeline.changes.clear();
        timeline.manual(9_500, CarouselAction::Next);
        timeline.advance_to(14_500);
        assert!(timeline.changes.is_empty(), "autoplay moved during cooldown");

        timeline.advance_to(18_500);
        assert_eq!(timeline.changes, vec![(18_500, 4)]);
    }

    #[test]
    fn repeated_manual_moves_extend_the_cooldown() {
        let mut timeline = Timeline::new(5);
        timeline.manual(1_000, CarouselAction::Next);
        timeline.manual(4_000, CarouselAction::Previous);
        timeline.advance_to(9_000);
        assert!(timeline.changes.is_empty());
        assert!(timeline.engine.autoplay_enabled());
        timeline.advance_to(13_000);
        assert_eq!(timeline.changes, vec![(13_000, 1)]);
    }
}
