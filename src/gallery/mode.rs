// SPDX-License-Identifier: MPL-2.0
//! UI mode state machine for the gallery.
//!
//! The transition function is pure: rendering reads the mode, it never
//! changes it.

/// What the gallery is currently showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    /// Chrome visible, paging and dismissal enabled.
    #[default]
    Normal,
    /// Chrome hidden, everything else as in `Normal`.
    Hidden,
    /// Edit toolbar shown, page shrunk, paging and pan-dismiss disabled.
    Editing,
    /// Export in flight. Nothing can dismiss the gallery.
    Saving,
}

/// Inputs to [`UiMode::transition`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeEvent {
    /// A click on the page or backdrop, not on a control.
    BackgroundTap,
    Edit,
    Cancel,
    Save,
    /// The export completed, successfully or not.
    SaveFinished,
}

impl UiMode {
    /// Returns the next mode, or `None` if `event` means nothing in this mode.
    #[must_use]
    pub fn transition(self, event: ModeEvent) -> Option<UiMode> {
        match (self, event) {
            (UiMode::Normal, ModeEvent::BackgroundTap) => Some(UiMode::Hidden),
            (UiMode::Hidden, ModeEvent::BackgroundTap) => Some(UiMode::Normal),
            (UiMode::Normal, ModeEvent::Edit) => Some(UiMode::Editing),
            (UiMode::Editing, ModeEvent::Cancel) => Some(UiMode::Normal),
            (UiMode::Editing, ModeEvent::Save) => Some(UiMode::Saving),
            (UiMode::Saving, ModeEvent::SaveFinished) => Some(UiMode::Normal),
            _ => None,
        }
    }

    #[must_use]
    pub fn shows_chrome(self) -> bool {
        !matches!(self, UiMode::Hidden)
    }

    #[must_use]
    pub fn allows_paging(self) -> bool {
        matches!(self, UiMode::Normal | UiMode::Hidden)
    }

    /// Pan-down dismissal follows paging; the close control and Escape
    /// only stop working while saving.
    #[must_use]
    pub fn allows_pan_dismiss(self) -> bool {
        self.allows_paging()
    }

    #[must_use]
    pub fn allows_dismiss(self) -> bool {
        !matches!(self, UiMode::Saving)
    }

    #[must_use]
    pub fn is_editing_shrunk(self) -> bool {
        matches!(self, UiMode::Editing | UiMode::Saving)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_MODES: [UiMode; 4] = [
        UiMode::Normal,
        UiMode::Hidden,
        UiMode::Editing,
        UiMode::Saving,
    ];

    #[test]
    fn background_tap_toggles_chrome() {
        assert_eq!(
            UiMode::Normal.transition(ModeEvent::BackgroundTap),
            Some(UiMode::Hidden)
        );
        assert_eq!(
            UiMode::Hidden.transition(ModeEvent::BackgroundTap),
            Some(UiMode::Normal)
        );
        assert_eq!(UiMode::Editing.transition(ModeEvent::BackgroundTap), None);
        assert_eq!(UiMode::Saving.transition(ModeEvent::BackgroundTap), None);
    }

    #[test]
    fn edit_cycle_returns_to_normal() {
        let editing = UiMode::Normal.transition(ModeEvent::Edit).expect("edit");
        assert_eq!(editing, UiMode::Editing);
        let saving = editing.transition(ModeEvent::Save).expect("save");
        assert_eq!(saving, UiMode::Saving);
        assert_eq!(saving.transition(ModeEvent::SaveFinished), Some(UiMode::Normal));
        assert_eq!(editing.transition(ModeEvent::Cancel), Some(UiMode::Normal));
    }

    #[test]
    fn edit_is_only_reachable_from_normal() {
        assert_eq!(UiMode::Hidden.transition(ModeEvent::Edit), None);
        assert_eq!(UiMode::Saving.transition(ModeEvent::Edit), None);
        assert_eq!(UiMode::Normal.transition(ModeEvent::Save), None);
        assert_eq!(UiMode::Saving.transition(ModeEvent::Cancel), None);
    }

    #[test]
    fn only_saving_blocks_dismissal() {
        for mode in ALL_MODES {
            assert_eq!(mode.allows_dismiss(), mode != UiMode::Saving, "{mode:?}");
        }
    }

    #[test]
    fn paging_is_disabled_while_editing() {
        assert!(UiMode::Normal.allows_paging());
        assert!(UiMode::Hidden.allows_paging());
        assert!(!UiMode::Editing.allows_paging());
        assert!(!UiMode::Saving.allows_pan_dismiss());
    }

    #[test]
    fn only_hidden_hides_chrome() {
        for mode in ALL_MODES {
            assert_eq!(mode.shows_chrome(), mode != UiMode::Hidden);
        }
    }
}
