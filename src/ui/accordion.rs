//! Accordion components on top of [`DisclosureGroup`].
//!
//! The group decides which panel is open; these components only reflect that
//! decision into classes, `aria-expanded`, and CSS height transitions. Any
//! additional collaborator (analytics, custom effects) can observe state
//! changes through the `on_transition` callback, which fires exactly once
//! per panel that changed in a toggle.

use leptos::prelude::*;

use crate::core::{DisclosureGroup, Transition};
use crate::ui::icon::{Icon, icons};

/// Shared reactive handle to one disclosure group.
///
/// Cheap to copy; hand it to the [`Accordion`] container and every
/// [`AccordionPanel`] inside it.
#[derive(Clone, Copy)]
pub struct AccordionState {
    group: RwSignal<DisclosureGroup>,
    on_transition: Option<Callback<Transition>>,
}

impl AccordionState {
    /// Create a group over a fixed, ordered set of panel ids.
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            group: RwSignal::new(DisclosureGroup::new(ids)),
            on_transition: None,
        }
    }

    /// Attach a collaborator that receives every state change.
    pub fn with_on_transition(mut self, callback: Callback<Transition>) -> Self {
        self.on_transition = Some(callback);
        self
    }

    /// Toggle a panel and notify the collaborator about each changed panel.
    pub fn toggle(&self, panel_id: &str) {
        let transitions = self
            .group
            .try_update(|group| group.toggle(panel_id))
            .unwrap_or_default();

        if let Some(callback) = self.on_transition {
            for transition in transitions {
                callback.run(transition);
            }
        }
    }

    /// Whether a panel is expanded. Reactive when called inside a tracking
    /// context; false for unknown ids.
    pub fn is_expanded(&self, panel_id: &str) -> bool {
        self.group.with(|group| group.is_expanded(panel_id))
    }

    /// Id of the open panel, if any. Reactive like [`is_expanded`](Self::is_expanded).
    pub fn expanded_id(&self) -> Option<String> {
        self.group
            .with(|group| group.expanded_id().map(str::to_string))
    }
}

/// Container for a set of mutually-exclusive panels
#[component]
pub fn Accordion(
    /// The panels
    children: Children,
    /// Additional CSS classes for the container
    #[prop(default = String::new())]
    class: String,
) -> impl IntoView {
    let container_class = if class.is_empty() {
        "space-y-4".to_string()
    } else {
        format!("space-y-4 {}", class)
    };

    view! {
        <div class=container_class>
            {children()}
        </div>
    }
}

/// One expandable panel: a trigger button plus a collapsible region.
///
/// The id must be one registered in the [`AccordionState`]; triggers with a
/// stale id simply do nothing.
#[component]
pub fn AccordionPanel(
    /// Shared group state
    state: AccordionState,
    /// Panel id within the group
    #[prop(into)]
    id: String,
    /// Trigger label
    #[prop(into)]
    title: String,
    /// Collapsible content
    children: Children,
) -> impl IntoView {
    let region_id = format!("panel-{}", id);
    let id_for_toggle = id.clone();
    let is_open = Signal::derive(move || state.is_expanded(&id));

    view! {
        <div class="border border-theme rounded-xl overflow-hidden bg-theme-primary">
            <button
                class="w-full px-6 py-4 flex items-center justify-between gap-4 text-left hover:bg-theme-secondary/30 transition-colors"
                on:click=move |_| state.toggle(&id_for_toggle)
                aria-expanded=move || is_open.get()
                aria-controls=region_id.clone()
            >
                <span class="font-semibold text-theme-primary">{title}</span>
                <div
                    class="flex items-center justify-center w-5 h-5 text-theme-tertiary flex-shrink-0 transition-transform duration-300"
                    class=("rotate-180", move || is_open.get())
                >
                    <Icon name=icons::CHEVRON_DOWN class="w-5 h-5" />
                </div>
            </button>
            <div
                id=region_id
                class="overflow-hidden transition-all duration-300"
                class:max-h-0=move || !is_open.get()
                class:max-h-96=move || is_open.get()
            >
                <div class="px-6 pb-4 text-theme-secondary leading-relaxed">
                    {children()}
                </div>
            </div>
        </div>
    }
}
