//! The one-shot "click the images" prompt.

/// Lifecycle of the onboarding prompt. `Dismissed` is terminal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OverlayState {
    #[default]
    Pending,
    Shown,
    Dismissed,
}

impl OverlayState {
    pub const MESSAGE: &'static str = "Click on the images to listen to music!";

    pub fn is_visible(&self) -> bool {
        *self == Self::Shown
    }

    /// Shows the prompt if it has not appeared yet. Returns whether it changed.
    pub fn reveal(&mut self) -> bool {
        if *self == Self::Pending {
            *self = Self::Shown;
            true
        } else {
            false
        }
    }

    /// Hides the prompt for the rest of the session.
    pub fn dismiss(&mut self) -> bool {
        if *self == Self::Shown {
            *self = Self::Dismissed;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveal_then_dismiss() {
        let mut overlay = OverlayState::default();
        assert!(!overlay.is_visible());

        assert!(overlay.reveal());
        assert!(overlay.is_visible());

        assert!(overlay.dismiss());
        assert!(!overlay.is_visible());
    }

    #[test]
    fn test_dismissal_is_permanent() {
        let mut overlay = OverlayState::default();
        overlay.reveal();
        overlay.dismiss();

        assert!(!overlay.reveal());
        assert_eq!(overlay, OverlayState::Dismissed);
    }

    #[test]
    fn test_dismiss_before_reveal_is_ignored() {
        let mut overlay = OverlayState::default();
        assert!(!overlay.dismiss());
        assert_eq!(overlay, OverlayState::Pending);
    }
}
