//! Dialog Disclosure
//!
//! Open/closed state for a single dialog instance. The state is owned by
//! the component that calls [`use_disclosure`] and only changes through
//! [`Disclosure::on_open`] and [`Disclosure::on_close`].

use dioxus::prelude::*;

/// Visibility of a dialog
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum DialogState {
    /// Dialog is hidden (initial state)
    #[default]
    Closed,
    /// Dialog is shown
    Open,
}

impl DialogState {
    /// State after an open request
    pub fn open(self) -> Self {
        DialogState::Open
    }

    /// State after a close request (close button, overlay, escape)
    pub fn close(self) -> Self {
        DialogState::Closed
    }

    pub fn is_open(&self) -> bool {
        matches!(self, DialogState::Open)
    }
}

/// Handle to a dialog's state, shared between the trigger and the dialog.
///
/// Mirrors the usual `{ is_open, on_open, on_close }` triple. The handle is
/// `Copy`, so it can be moved into event closures and passed as a prop.
#[derive(Clone, Copy, PartialEq)]
pub struct Disclosure {
    state: Signal<DialogState>,
}

impl Disclosure {
    pub fn is_open(&self) -> bool {
        (self.state)().is_open()
    }

    pub fn state(&self) -> DialogState {
        (self.state)()
    }

    /// Request the dialog to open
    pub fn on_open(&mut self) {
        let next = self.state().open();
        if next != self.state() {
            tracing::debug!("dialog opened");
            self.state.set(next);
        }
    }

    /// Request the dialog to close
    pub fn on_close(&mut self) {
        let next = self.state().close();
        if next != self.state() {
            tracing::debug!("dialog closed");
            self.state.set(next);
        }
    }
}

/// Create a disclosure for the calling component, starting closed.
///
/// # Example
///
/// ```rust,ignore
/// let mut disclosure = use_disclosure();
///
/// rsx! {
///     button { onclick: move |_| disclosure.on_open(), "Open" }
///     Modal { disclosure, "Hello" }
/// }
/// ```
pub fn use_disclosure() -> Disclosure {
    use_disclosure_with(DialogState::Closed)
}

/// Create a disclosure with an explicit initial state
pub fn use_disclosure_with(initial: DialogState) -> Disclosure {
    let state = use_signal(move || initial);
    Disclosure { state }
}
