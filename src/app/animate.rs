use leptos::{html, prelude::*};
use leptos_use::use_intersection_observer;

/// Reveal content once it scrolls into view: starts translated down and
/// transparent, ends at opacity 1. Observation is one-way, the element never
/// hides again.
#[component]
pub fn FadeIn(children: Children, #[prop(optional, into)] class: String) -> impl IntoView {
    let target = NodeRef::<html::Div>::new();
    let (visible, set_visible) = signal(false);

    use_intersection_observer(target, move |entries, _| {
        if entries.iter().any(|entry| entry.is_intersecting()) {
            set_visible.set(true);
        }
    });

    view! {
        <div
            node_ref=target
            class=move || {
                let state = if visible.get() { "fade-in-section visible" } else { "fade-in-section" };
                if class.is_empty() { state.to_string() } else { format!("{state} {class}") }
            }
        >
            {children()}
        </div>
    }
}
