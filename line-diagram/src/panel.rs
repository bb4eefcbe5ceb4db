//! The panel: mode controller plus the frame it renders into.

use std::time::Duration;

use tracing::{info, trace};

use crate::config::PanelConfig;
use crate::diagram::Frame;
use crate::modes::ModeController;
use crate::remote::{RemoteKey, UnknownKeyCode};

/// Everything needed to produce frames for the strip.
#[derive(Debug, Clone)]
pub struct Panel {
    controller: ModeController,
    frame: Frame,
}

impl Panel {
    pub fn new(config: &PanelConfig) -> Self {
        Self {
            controller: ModeController::new(config.initial_mode, config.seed),
            frame: Frame::new(config.pixel_count),
        }
    }

    /// Render the frame for time `now` since startup.
    pub fn tick(&mut self, now: Duration) {
        trace!(now_ms = now.as_millis() as u64, "tick");
        self.controller.render(&mut self.frame, now);
    }

    /// Handle a code received from the remote.
    ///
    /// Returns the decoded key and whether it changed anything.
    pub fn press(&mut self, code: u32) -> Result<(RemoteKey, bool), UnknownKeyCode> {
        let key = RemoteKey::decode(code)?;
        let applied = self.controller.apply(key.action());
        info!(
            %key,
            applied,
            mode = %self.controller.kind(),
            submode = self.controller.mode().submode(),
            "remote key"
        );
        Ok((key, applied))
    }

    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    pub fn controller(&self) -> &ModeController {
        &self.controller
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modes::ModeKind;

    fn config(mode: ModeKind) -> PanelConfig {
        PanelConfig {
            initial_mode: mode,
            pixel_count: 42,
            ..PanelConfig::default()
        }
    }

    #[test]
    fn frame_sized_from_config() {
        let panel = Panel::new(&config(ModeKind::Lines));
        assert_eq!(panel.frame().len(), 42);
        assert_eq!(panel.controller().kind(), ModeKind::Lines);
    }

    #[test]
    fn tick_renders_current_mode() {
        let mut panel = Panel::new(&config(ModeKind::Lines));
        panel.tick(Duration::ZERO);
        assert_ne!(panel.frame(), &Frame::new(42));
    }

    #[test]
    fn press_power_then_tick_goes_dark() {
        let mut panel = Panel::new(&config(ModeKind::Lines));
        panel.tick(Duration::ZERO);

        let (key, applied) = panel.press(RemoteKey::Power.code()).unwrap();
        assert_eq!(key, RemoteKey::Power);
        assert!(applied);

        panel.tick(Duration::from_millis(20));
        assert_eq!(panel.frame(), &Frame::new(42));
    }

    #[test]
    fn press_unknown_code() {
        let mut panel = Panel::new(&config(ModeKind::Lines));
        assert_eq!(panel.press(42), Err(UnknownKeyCode(42)));
    }
}
