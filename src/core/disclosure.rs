//! Single-open accordion state, decoupled from rendering.
//!
//! A [`DisclosureGroup`] owns the expand/collapse state for a fixed set of
//! panels and guarantees that at most one panel is expanded at any time.
//! It knows nothing about the DOM: every state change is reported as a
//! [`Transition`] that a presentation layer (CSS classes, `aria-expanded`,
//! height animation) consumes however it likes.

use derive_more::Display;

/// Expansion state of a single panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Display)]
pub enum PanelState {
    #[default]
    #[display("collapsed")]
    Collapsed,
    #[display("expanded")]
    Expanded,
}

/// Notification that a panel changed state during a [`DisclosureGroup::toggle`] call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    pub panel_id: String,
    pub state: PanelState,
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct Panel {
    id: String,
    state: PanelState,
}

/// An ordered set of mutually-exclusive expandable panels.
///
/// Panels are registered once at construction and start collapsed. State is
/// mutated only through [`toggle`](Self::toggle); toggling an open panel
/// closes it, toggling a closed panel opens it and closes whichever sibling
/// was open. Unknown ids are tolerated as no-ops since triggers arrive from
/// UI events with no validated identity channel.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DisclosureGroup {
    panels: Vec<Panel>,
}

impl DisclosureGroup {
    /// Create a group from an ordered list of panel ids, all collapsed.
    ///
    /// Duplicate ids keep their first occurrence.
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut panels: Vec<Panel> = Vec::new();
        for id in ids {
            let id = id.into();
            if panels.iter().any(|p| p.id == id) {
                continue;
            }
            panels.push(Panel {
                id,
                state: PanelState::Collapsed,
            });
        }
        Self { panels }
    }

    /// Toggle the panel with the given id.
    ///
    /// Returns one [`Transition`] per panel whose state actually changed:
    /// zero for an unknown id, one when the target merely opens or closes,
    /// two when opening the target also closes a sibling. Collapse
    /// transitions are ordered before the expand.
    pub fn toggle(&mut self, panel_id: &str) -> Vec<Transition> {
        if !self.contains(panel_id) {
            return Vec::new();
        }

        let mut transitions = Vec::new();
        let mut was_expanded = false;

        for panel in &mut self.panels {
            if panel.state != PanelState::Expanded {
                continue;
            }
            if panel.id == panel_id {
                was_expanded = true;
            }
            panel.state = PanelState::Collapsed;
            transitions.push(Transition {
                panel_id: panel.id.clone(),
                state: PanelState::Collapsed,
            });
        }

        if !was_expanded {
            if let Some(panel) = self.panels.iter_mut().find(|p| p.id == panel_id) {
                panel.state = PanelState::Expanded;
                transitions.push(Transition {
                    panel_id: panel.id.clone(),
                    state: PanelState::Expanded,
                });
            }
        }

        transitions
    }

    /// Whether the panel with the given id is expanded. False for unknown ids.
    pub fn is_expanded(&self, panel_id: &str) -> bool {
        self.panels
            .iter()
            .any(|p| p.id == panel_id && p.state == PanelState::Expanded)
    }

    /// Id of the currently expanded panel, if any.
    pub fn expanded_id(&self) -> Option<&str> {
        self.panels
            .iter()
            .find(|p| p.state == PanelState::Expanded)
            .map(|p| p.id.as_str())
    }

    /// Whether a panel with the given id is registered.
    pub fn contains(&self, panel_id: &str) -> bool {
        self.panels.iter().any(|p| p.id == panel_id)
    }

    /// Registered panel ids, in registration order.
    pub fn panel_ids(&self) -> impl Iterator<Item = &str> {
        self.panels.iter().map(|p| p.id.as_str())
    }

    /// Number of registered panels.
    pub fn len(&self) -> usize {
        self.panels.len()
    }

    /// Whether the group has no panels.
    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    fn expanded_count(&self) -> usize {
        self.panels
            .iter()
            .filter(|p| p.state == PanelState::Expanded)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group() -> DisclosureGroup {
        DisclosureGroup::new(["a", "b", "c"])
    }

    #[test]
    fn test_new_group_all_collapsed() {
        let group = group();

        assert_eq!(group.len(), 3);
        assert!(!group.is_empty());
        assert_eq!(group.expanded_id(), None);
        assert!(!group.is_expanded("a"));
        assert!(!group.is_expanded("b"));
        assert!(!group.is_expanded("c"));
    }

    #[test]
    fn test_duplicate_ids_keep_first() {
        let group = DisclosureGroup::new(["a", "b", "a", "c", "b"]);

        assert_eq!(group.len(), 3);
        assert_eq!(group.panel_ids().collect::<Vec<_>>(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_toggle_opens_collapsed_panel() {
        let mut group = group();

        let transitions = group.toggle("b");

        assert!(group.is_expanded("b"));
        assert_eq!(group.expanded_id(), Some("b"));
        assert_eq!(
            transitions,
            vec![Transition {
                panel_id: "b".to_string(),
                state: PanelState::Expanded,
            }]
        );
    }

    #[test]
    fn test_toggle_self_closes() {
        let mut group = group();
        group.toggle("b");

        let transitions = group.toggle("b");

        // Toggling the open panel closes it and nothing else opens.
        assert_eq!(group.expanded_id(), None);
        assert_eq!(
            transitions,
            vec![Transition {
                panel_id: "b".to_string(),
                state: PanelState::Collapsed,
            }]
        );
    }

    #[test]
    fn test_toggle_other_switches() {
        let mut group = group();
        group.toggle("a");

        let transitions = group.toggle("b");

        assert!(!group.is_expanded("a"));
        assert!(group.is_expanded("b"));
        // Exactly one transition per changed panel, collapse before expand.
        assert_eq!(
            transitions,
            vec![
                Transition {
                    panel_id: "a".to_string(),
                    state: PanelState::Collapsed,
                },
                Transition {
                    panel_id: "b".to_string(),
                    state: PanelState::Expanded,
                },
            ]
        );
    }

    #[test]
    fn test_unknown_id_is_noop() {
        let mut group = group();
        group.toggle("b");
        let before = group.clone();

        let transitions = group.toggle("does-not-exist");

        assert!(transitions.is_empty());
        assert_eq!(group, before);
        assert!(group.is_expanded("b"));
    }

    #[test]
    fn test_unknown_id_read_is_false() {
        let group = group();

        assert!(!group.is_expanded("does-not-exist"));
        assert!(!group.contains("does-not-exist"));
    }

    #[test]
    fn test_read_is_idempotent() {
        let mut group = group();
        group.toggle("c");

        assert_eq!(group.is_expanded("c"), group.is_expanded("c"));
        assert_eq!(group.is_expanded("a"), group.is_expanded("a"));
    }

    #[test]
    fn test_at_most_one_expanded_for_any_sequence() {
        let mut group = group();
        let calls = [
            "a", "b", "b", "c", "a", "zzz", "a", "a", "c", "b", "", "b", "c", "c",
        ];

        for id in calls {
            group.toggle(id);
            assert!(group.expanded_count() <= 1, "invariant broken after {id:?}");
        }
    }

    #[test]
    fn test_spec_scenario() {
        let mut group = group();

        group.toggle("b");
        assert_eq!(group.expanded_id(), Some("b"));

        group.toggle("c");
        assert_eq!(group.expanded_id(), Some("c"));
        assert!(!group.is_expanded("b"));

        group.toggle("c");
        assert_eq!(group.expanded_id(), None);

        group.toggle("z");
        assert_eq!(group.expanded_id(), None);
        assert_eq!(group.len(), 3);
    }

    #[test]
    fn test_transition_counts_per_call() {
        let mut group = group();

        // Collapsed target, nothing open: one expand.
        assert_eq!(group.toggle("a").len(), 1);
        // Collapsed target, sibling open: one collapse + one expand.
        assert_eq!(group.toggle("b").len(), 2);
        // Open target: one collapse.
        assert_eq!(group.toggle("b").len(), 1);
        // Unknown target: nothing.
        assert_eq!(group.toggle("nope").len(), 0);
    }

    #[test]
    fn test_empty_group_tolerates_toggle() {
        let mut group = DisclosureGroup::new(Vec::<String>::new());

        assert!(group.is_empty());
        assert!(group.toggle("a").is_empty());
        assert_eq!(group.expanded_id(), None);
    }

    #[test]
    fn test_panel_state_display() {
        assert_eq!(PanelState::Collapsed.to_string(), "collapsed");
        assert_eq!(PanelState::Expanded.to_string(), "expanded");
    }
}
