//! Mode switching and per-frame rendering.

use std::time::Duration;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use super::{Mode, ModeKind};
use crate::diagram::Frame;
use crate::planner::PathFinder;

/// Something the operator asked the panel to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    TogglePower,
    NextMode,
    PreviousMode,
    Submode(u8),
    /// Do the last action again (a held remote key).
    Repeat,
    /// Recognised input with nothing bound to it.
    Ignore,
}

/// Owns the active mode, its state, and the randomness it draws on.
#[derive(Debug, Clone)]
pub struct ModeController {
    powered: bool,
    mode: Mode,
    finder: PathFinder<'static>,
    rng: ChaCha8Rng,
    last_action: Option<Action>,
}

impl ModeController {
    /// Create a powered-on controller in `initial` mode with a seeded RNG.
    pub fn new(initial: ModeKind, seed: u64) -> Self {
        Self {
            powered: true,
            mode: Mode::new(initial),
            finder: PathFinder::default(),
            rng: ChaCha8Rng::seed_from_u64(seed),
            last_action: None,
        }
    }

    pub fn is_powered(&self) -> bool {
        self.powered
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    pub fn kind(&self) -> ModeKind {
        self.mode.kind()
    }

    /// Switch to `kind`, starting it from its initial state.
    pub fn switch_to(&mut self, kind: ModeKind) {
        info!(from = %self.mode.kind(), to = %kind, "switching mode");
        self.mode = Mode::new(kind);
    }

    /// Apply an operator action. Returns false if it had no effect.
    pub fn apply(&mut self, action: Action) -> bool {
        let action = match action {
            Action::Repeat => match self.last_action {
                Some(last) => last,
                None => return false,
            },
            other => other,
        };

        let changed = match action {
            Action::TogglePower => {
                self.powered = !self.powered;
                info!(powered = self.powered, "power toggled");
                true
            }
            Action::NextMode if self.powered => {
                self.switch_to(self.mode.kind().next());
                true
            }
            Action::PreviousMode if self.powered => {
                self.switch_to(self.mode.kind().previous());
                true
            }
            Action::Submode(n) if self.powered => {
                let ok = self.mode.set_submode(n);
                debug!(mode = %self.mode.kind(), submode = n, ok, "submode requested");
                ok
            }
            _ => false,
        };

        // Power toggling is never repeated by a held key.
        if action != Action::TogglePower && action != Action::Ignore {
            self.last_action = Some(action);
        }
        changed
    }

    /// Draw the current mode into `frame`; a powered-off panel is dark.
    pub fn render(&mut self, frame: &mut Frame, now: Duration) {
        if !self.powered {
            frame.clear();
            return;
        }
        self.mode.render(frame, now, &self.finder, &mut self.rng);
    }
}

impl Default for ModeController {
    fn default() -> Self {
        Self::new(ModeKind::Routes, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Rgb;

    #[test]
    fn cycles_modes() {
        let mut c = ModeController::new(ModeKind::Twinkle, 1);
        assert!(c.apply(Action::NextMode));
        assert_eq!(c.kind(), ModeKind::Lines);
        assert!(c.apply(Action::PreviousMode));
        assert!(c.apply(Action::PreviousMode));
        assert_eq!(c.kind(), ModeKind::Routes);
    }

    #[test]
    fn repeat_replays_last_action() {
        let mut c = ModeController::new(ModeKind::Twinkle, 1);
        assert!(!c.apply(Action::Repeat));
        c.apply(Action::NextMode);
        assert!(c.apply(Action::Repeat));
        assert_eq!(c.kind(), ModeKind::ColourTest);
    }

    #[test]
    fn repeat_does_not_toggle_power() {
        let mut c = ModeController::new(ModeKind::Lines, 1);
        c.apply(Action::Submode(1));
        c.apply(Action::TogglePower);
        assert!(!c.is_powered());
        c.apply(Action::Repeat);
        assert!(!c.is_powered());
    }

    #[test]
    fn powered_off_renders_dark_and_ignores_modes() {
        let mut c = ModeController::new(ModeKind::Lines, 1);
        let mut frame = Frame::default();
        c.render(&mut frame, Duration::ZERO);
        assert_ne!(frame, Frame::default());

        c.apply(Action::TogglePower);
        assert!(!c.apply(Action::NextMode));
        assert_eq!(c.kind(), ModeKind::Lines);

        c.render(&mut frame, Duration::from_millis(20));
        assert_eq!(frame, Frame::default());
    }

    #[test]
    fn submode_selection() {
        let mut c = ModeController::new(ModeKind::Lines, 1);
        assert!(c.apply(Action::Submode(1)));
        assert!(!c.apply(Action::Submode(9)));
        assert_eq!(c.mode().submode(), 1);

        let mut frame = Frame::default();
        c.render(&mut frame, Duration::ZERO);
        assert_eq!(frame.get(0), Some(Rgb::EXPO.gamma()));
    }

    #[test]
    fn ignore_has_no_effect() {
        let mut c = ModeController::new(ModeKind::Twinkle, 1);
        c.apply(Action::NextMode);
        assert!(!c.apply(Action::Ignore));
        assert!(c.apply(Action::Repeat));
        assert_eq!(c.kind(), ModeKind::ColourTest);
    }

    #[test]
    fn same_seed_same_frames() {
        let mut a = ModeController::new(ModeKind::Routes, 42);
        let mut b = ModeController::new(ModeKind::Routes, 42);
        let mut fa = Frame::default();
        let mut fb = Frame::default();
        for ms in (0..3000).step_by(50) {
            a.render(&mut fa, Duration::from_millis(ms));
            b.render(&mut fb, Duration::from_millis(ms));
            assert_eq!(fa, fb);
        }
    }
}
