use log::debug;

pub const TAB_KEY: &str = "Tab";

pub trait PanelView {
    type Element: PartialEq;

    /// Focusable elements inside the panel, in tab order.
    fn focusable_elements(&self) -> Vec<Self::Element>;

    /// Applies or removes the open look of the panel and its toggle, and
    /// locks or unlocks background scrolling.
    fn set_panel_open_visual(&mut self, open: bool);

    fn focus(&mut self, element: &Self::Element);
}

/// Whether the platform's own handling of a key press should go ahead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyDisposition {
    PassThrough,
    Suppress,
}

pub struct FocusTrap<P: PanelView> {
    panel: P,
    is_open: bool,
    focusable: Vec<P::Element>,
}

impl<P: PanelView> FocusTrap<P> {
    pub fn new(panel: P) -> Self {
        Self {
            panel,
            is_open: false,
            focusable: Vec::new(),
        }
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn open(&mut self) {
        self.is_open = true;
        // snapshot for this open session only
        self.focusable = self.panel.focusable_elements();
        self.panel.set_panel_open_visual(true);
        debug!("Navigation opened with {} focusable elements", self.focusable.len());
    }

    pub fn close(&mut self) {
        self.is_open = false;
        self.focusable.clear();
        self.panel.set_panel_open_visual(false);
        debug!("Navigation closed");
    }

    pub fn toggle(&mut self) {
        if self.is_open {
            self.close();
        } else {
            self.open();
        }
    }

    /// Wraps Tab from the last element to the first, and Shift+Tab from the
    /// first element to the last. Everything else passes through.
    pub fn handle_key_navigation(
        &mut self,
        key: &str,
        shift_held: bool,
        current: Option<&P::Element>,
    ) -> KeyDisposition {
        if !self.is_open || key != TAB_KEY {
            return KeyDisposition::PassThrough;
        }
        let (Some(first), Some(last)) = (self.focusable.first(), self.focusable.last()) else {
            return KeyDisposition::PassThrough;
        };

        let wrap_to = if shift_held {
            (current == Some(first)).then_some(last)
        } else {
            (current == Some(last)).then_some(first)
        };

        match wrap_to {
            Some(target) => {
                self.panel.focus(target);
                KeyDisposition::Suppress
            }
            None => KeyDisposition::PassThrough,
        }
    }

    /// A navigation link inside the panel was chosen.
    pub fn on_link_selected(&mut self) {
        if self.is_open {
            self.close();
        }
    }

    /// A pointer interaction happened somewhere on the page.
    pub fn on_pointer_interaction(&mut self, inside_panel: bool, inside_toggle: bool) {
        if self.is_open && !inside_panel && !inside_toggle {
            self.close();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct FakePanel {
        elements: Vec<&'static str>,
        open_visual: Option<bool>,
        focused: Vec<&'static str>,
    }

    impl PanelView for FakePanel {
        type Element = &'static str;

        fn focusable_elements(&self) -> Vec<&'static str> {
            self.elements.clone()
        }

        fn set_panel_open_visual(&mut self, open: bool) {
            self.open_visual = Some(open);
        }

        fn focus(&mut self, element: &&'static str) {
            self.focused.push(*element);
        }
    }

    fn trap_with(elements: &[&'static str]) -> FocusTrap<FakePanel> {
        FocusTrap::new(FakePanel {
            elements: elements.to_vec(),
            ..FakePanel::default()
        })
    }

    #[test]
    fn closed_trap_never_suppresses() {
        let mut trap = trap_with(&["A", "B", "C"]);
        for key in [TAB_KEY, "Enter", "Escape"] {
            for shift in [false, true] {
                for current in [None, Some(&"A"), Some(&"C")] {
                    assert_eq!(
                        trap.handle_key_navigation(key, shift, current),
                        KeyDisposition::PassThrough
                    );
                }
            }
        }
        assert!(trap.panel.focused.is_empty());
    }

    #[test]
    fn tab_from_last_wraps_to_first() {
        let mut trap = trap_with(&["A", "B", "C"]);
        trap.open();
        assert_eq!(
            trap.handle_key_navigation(TAB_KEY, false, Some(&"C")),
            KeyDisposition::Suppress
        );
        assert_eq!(trap.panel.focused, vec!["A"]);
    }

    #[test]
    fn shift_tab_from_first_wraps_to_last() {
        let mut trap = trap_with(&["A", "B", "C"]);
        trap.open();
        assert_eq!(
            trap.handle_key_navigation(TAB_KEY, true, Some(&"A")),
            KeyDisposition::Suppress
        );
        assert_eq!(trap.panel.focused, vec!["C"]);
    }

    #[test]
    fn tab_from_middle_passes_through() {
        let mut trap = trap_with(&["A", "B", "C"]);
        trap.open();
        assert_eq!(
            trap.handle_key_navigation(TAB_KEY, false, Some(&"B")),
            KeyDisposition::PassThrough
        );
        assert_eq!(
            trap.handle_key_navigation(TAB_KEY, true, Some(&"B")),
            KeyDisposition::PassThrough
        );
        assert_eq!(
            trap.handle_key_navigation(TAB_KEY, true, Some(&"C")),
            KeyDisposition::PassThrough
        );
        assert_eq!(
            trap.handle_key_navigation("Enter", false, Some(&"C")),
            KeyDisposition::PassThrough
        );
        assert!(trap.panel.focused.is_empty());
    }

    #[test]
    fn empty_panel_never_wraps() {
        let mut trap = trap_with(&[]);
        trap.open();
        assert_eq!(trap.handle_key_navigation(TAB_KEY, false, None), KeyDisposition::PassThrough);
        assert_eq!(trap.handle_key_navigation(TAB_KEY, true, None), KeyDisposition::PassThrough);
    }

    #[test]
    fn order_is_a_snapshot_taken_on_open() {
        let mut trap = trap_with(&["A", "B"]);
        trap.open();
        trap.panel.elements.push("C");
        assert_eq!(
            trap.handle_key_navigation(TAB_KEY, false, Some(&"B")),
            KeyDisposition::Suppress
        );

        trap.close();
        trap.open();
        assert_eq!(
            trap.handle_key_navigation(TAB_KEY, false, Some(&"B")),
            KeyDisposition::PassThrough
        );
        assert_eq!(
            trap.handle_key_navigation(TAB_KEY, false, Some(&"C")),
            KeyDisposition::Suppress
        );
    }

    #[test]
    fn toggle_flips_state_and_visual() {
        let mut trap = trap_with(&["A"]);
        trap.toggle();
        assert!(trap.is_open());
        assert_eq!(trap.panel.open_visual, Some(true));
        trap.toggle();
        assert!(!trap.is_open());
        assert_eq!(trap.panel.open_visual, Some(false));
        assert!(trap.focusable.is_empty());
    }

    #[test]
    fn link_selection_closes_only_when_open() {
        let mut trap = trap_with(&["A"]);
        trap.on_link_selected();
        assert_eq!(trap.panel.open_visual, None);

        trap.open();
        trap.on_link_selected();
        assert!(!trap.is_open());
    }

    #[test]
    fn pointer_outside_closes() {
        let mut trap = trap_with(&["A"]);
        trap.open();
        trap.on_pointer_interaction(true, false);
        assert!(trap.is_open());
        trap.on_pointer_interaction(false, true);
        assert!(trap.is_open());
        trap.on_pointer_interaction(false, false);
        assert!(!trap.is_open());
    }
}
