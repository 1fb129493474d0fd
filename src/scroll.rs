// src/scroll.rs
use gloo::console::warn;
use gloo::events::EventListener;
use web_sys::{window, Element, ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;

pub fn scroll_to_section(id: &str) {
    let Some(doc) = window().and_then(|w| w.document()) else { return; };
    let Some(el) = doc.get_element_by_id(id) else {
        warn!(format!("No section #{id} to scroll to"));
        return;
    };
    let opts = ScrollIntoViewOptions::new();
    opts.set_behavior(ScrollBehavior::Smooth);
    el.scroll_into_view_with_scroll_into_view_options(&opts);
}

/// Tracks `window.scrollY`.
#[hook]
pub fn use_scroll_y() -> f64 {
    let scroll_y = use_state(|| 0.0_f64);

    {
        let scroll_y = scroll_y.clone();
        use_effect_with((), move |_| {
            let listener = window().map(|w| {
                let target = w.clone();
                EventListener::new(&w, "scroll", move |_| {
                    scroll_y.set(target.scroll_y().unwrap_or(0.0));
                })
            });
            move || drop(listener)
        });
    }

    *scroll_y
}

pub fn overlaps_viewport(top: f64, bottom: f64, viewport_height: f64) -> bool {
    top < viewport_height && bottom > 0.0
}

/// Turns true the first time the node is on screen and stays true.
#[hook]
pub fn use_revealed_once(node: NodeRef, scroll_y: f64) -> bool {
    let revealed = use_state(|| false);

    {
        let revealed = revealed.clone();
        use_effect_with(scroll_y, move |_| {
            if !*revealed {
                let height = window()
                    .and_then(|w| w.inner_height().ok())
                    .and_then(|h| h.as_f64());
                if let (Some(el), Some(height)) = (node.cast::<Element>(), height) {
                    let rect = el.get_bounding_client_rect();
                    if overlaps_viewport(rect.top(), rect.bottom(), height) {
                        revealed.set(true);
                    }
                }
            }
            || ()
        });
    }

    *revealed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn below_the_fold_is_not_visible() {
        assert!(!overlaps_viewport(900.0, 1400.0, 800.0));
    }

    #[test]
    fn partially_visible_counts() {
        assert!(overlaps_viewport(700.0, 1200.0, 800.0));
        assert!(overlaps_viewport(-300.0, 20.0, 800.0));
    }

    #[test]
    fn scrolled_past_is_not_visible() {
        assert!(!overlaps_viewport(-600.0, 0.0, 800.0));
    }
}
