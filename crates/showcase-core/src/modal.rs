//! Accessible modal state: open/close bookkeeping and focus trapping
//!
//! The caller owns whether the modal is shown. [`ModalState`] remembers
//! what had focus when it opened so focus can be handed back on close, and
//! [`FocusTrap`] decides what a key press inside the dialog should do.

/// Open/closed state plus the element to refocus on close
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalState<T> {
    open: bool,
    trigger: Option<T>,
}

impl<T> Default for ModalState<T> {
    fn default() -> Self {
        Self {
            open: false,
            trigger: None,
        }
    }
}

impl<T> ModalState<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the modal, remembering `trigger` for later refocus.
    ///
    /// Re-opening an open modal keeps the original trigger.
    pub fn open(&mut self, trigger: Option<T>) {
        if !self.open {
            self.trigger = trigger;
            self.open = true;
        }
    }

    /// Open with the element the caller knows opened the modal, asking
    /// `focused` for the currently focused element only when there is none.
    ///
    /// Some browsers do not focus a clicked button, so the focused element
    /// alone is not a reliable trigger.
    pub fn open_from(&mut self, trigger: Option<T>, focused: impl FnOnce() -> Option<T>) {
        if self.open {
            return;
        }
        let trigger = trigger.or_else(focused);
        self.open(trigger);
    }

    /// Close the modal and hand back the element that should get focus.
    pub fn close(&mut self) -> Option<T> {
        if !self.open {
            return None;
        }
        self.open = false;
        self.trigger.take()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }
}

/// Keys the dialog reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalKey {
    Escape,
    Tab,
    ShiftTab,
    Other,
}

impl ModalKey {
    /// Map a DOM `KeyboardEvent.key` value plus shift state.
    pub fn from_dom(key: &str, shift: bool) -> Self {
        match (key, shift) {
            ("Escape" | "Esc", _) => ModalKey::Escape,
            ("Tab", false) => ModalKey::Tab,
            ("Tab", true) => ModalKey::ShiftTab,
            _ => ModalKey::Other,
        }
    }
}

/// What the dialog should do with a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalAction {
    /// Dismiss the modal
    Close,
    /// Move focus to the focusable element at this index (and swallow the key)
    Focus(usize),
    /// Swallow the key without moving focus
    Block,
    /// Let the browser handle the key
    Ignore,
}

/// Focus cycling over the dialog's focusable elements
pub struct FocusTrap;

impl FocusTrap {
    /// Decide what a key press does.
    ///
    /// `focused` is the index of the focused element among the dialog's
    /// `count` focusable elements, or `None` when focus is outside it.
    pub fn handle_key(key: ModalKey, focused: Option<usize>, count: usize) -> ModalAction {
        match key {
            ModalKey::Escape => ModalAction::Close,
            ModalKey::Other => ModalAction::Ignore,
            ModalKey::Tab | ModalKey::ShiftTab if count == 0 => ModalAction::Block,
            ModalKey::Tab => match focused {
                Some(i) if i + 1 < count => ModalAction::Ignore,
                _ => ModalAction::Focus(0),
            },
            ModalKey::ShiftTab => match focused {
                Some(i) if i > 0 && i < count => ModalAction::Ignore,
                _ => ModalAction::Focus(count - 1),
            },
        }
    }
}
