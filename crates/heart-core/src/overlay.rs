use crate::constants::{MESSAGE_BASE_URL, MESSAGE_PHONE_NUMBER, MESSAGE_TEXT};

/// Visibility of the apology overlay shown when the heart is clicked.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OverlayState {
    visible: bool,
}

impl OverlayState {
    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn show(&mut self) {
        self.visible = true;
    }

    /// Hide and hand back the messaging link the host should open.
    /// `None` if the overlay was not showing.
    pub fn acknowledge(&mut self) -> Option<String> {
        if !self.visible {
            return None;
        }
        self.visible = false;
        Some(messaging_url())
    }

    pub fn close(&mut self) {
        self.visible = false;
    }
}

/// Chat link with the preset number and message.
pub fn messaging_url() -> String {
    format!(
        "{MESSAGE_BASE_URL}{MESSAGE_PHONE_NUMBER}?text={}",
        urlencoding::encode(MESSAGE_TEXT)
    )
}
