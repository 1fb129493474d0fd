// src/motion/mod.rs
pub mod presets;

use gloo::timers::callback::Timeout;
use yew::prelude::*;

pub use presets::{parallax_offset, Entrance, Gestures, Loop, Pose, PRESETS};

// One frame at 60 Hz; long enough for the hidden pose to be painted first.
const FRAME_MS: u32 = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    Rest,
    Hover,
    Tap,
    Focus,
}

/// Inline style for an element given its presets and current state.
pub fn resolve_style(
    entrance: Option<&Entrance>,
    gestures: Option<&Gestures>,
    shown: bool,
    gesture: Gesture,
    touched: bool,
    extra_delay: f32,
) -> String {
    if let (Some(e), false) = (entrance, shown) {
        return e.hidden.to_css();
    }

    let rest = gestures
        .map(|g| g.rest)
        .or(entrance.map(|e| e.visible))
        .unwrap_or(Pose::REST);

    let pose = match (gestures, gesture) {
        (Some(g), Gesture::Hover) => g.hover.unwrap_or(rest),
        (Some(g), Gesture::Tap) => g.tap.or(g.hover).unwrap_or(rest),
        (Some(g), Gesture::Focus) => g.focus.unwrap_or(rest),
        _ => rest,
    };

    let transition = match (entrance, gestures) {
        (Some(e), Some(_)) if !touched => e.transition.to_css(extra_delay),
        (_, Some(g)) => g.transition.to_css(0.0),
        (Some(e), None) => e.transition.to_css(extra_delay),
        (None, None) => String::new(),
    };

    format!("{}{}", pose.to_css(), transition)
}

#[derive(Properties, PartialEq)]
pub struct MotionProps {
    #[prop_or("div")]
    pub tag: &'static str,
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub kind: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub style: AttrValue,
    #[prop_or_default]
    pub node_ref: NodeRef,
    #[prop_or_default]
    pub entrance: Option<&'static Entrance>,
    #[prop_or_default]
    pub gestures: Option<&'static Gestures>,
    #[prop_or_default]
    pub looping: Option<Loop>,
    /// Added to the entrance delay, used for staggered children.
    #[prop_or(0.0)]
    pub delay: f32,
    /// Entrance waits until this turns true.
    #[prop_or(true)]
    pub active: bool,
    #[prop_or_default]
    pub children: Children,
}

/// Wraps its children in an element animated by the given presets.
#[function_component(Motion)]
pub fn motion(props: &MotionProps) -> Html {
    let shown = use_state(|| props.entrance.is_none());
    let gesture = use_state(|| Gesture::Rest);
    let touched = use_state(|| false);

    {
        let shown = shown.clone();
        use_effect_with(props.active, move |active| {
            let timeout = if *active && !*shown {
                Some(Timeout::new(FRAME_MS, move || shown.set(true)))
            } else {
                None
            };
            move || drop(timeout)
        });
    }

    let set_gesture = {
        let gesture = gesture.clone();
        let touched = touched.clone();
        move |next: Gesture| {
            let gesture = gesture.clone();
            let touched = touched.clone();
            Callback::from(move |_: ()| {
                touched.set(true);
                gesture.set(next);
            })
        }
    };
    let on_enter = set_gesture(Gesture::Hover);
    let on_leave = set_gesture(Gesture::Rest);
    let on_down = set_gesture(Gesture::Tap);
    let on_up = set_gesture(Gesture::Hover);
    let on_focus = set_gesture(Gesture::Focus);
    let on_blur = set_gesture(Gesture::Rest);

    let mut style = resolve_style(
        props.entrance,
        props.gestures,
        *shown,
        *gesture,
        *touched,
        props.delay,
    );
    if let Some(looping) = props.looping {
        style.push_str(&looping.to_css());
    }
    style.push_str(&props.style);

    let has_gestures = props.gestures.is_some();

    html! {
        <@{props.tag}
            id={props.id.clone()}
            type={props.kind.clone()}
            ref={props.node_ref.clone()}
            class={props.class.clone()}
            style={style}
            onmouseenter={has_gestures.then(|| on_enter.reform(|_: MouseEvent| ()))}
            onmouseleave={has_gestures.then(|| on_leave.reform(|_: MouseEvent| ()))}
            onmousedown={has_gestures.then(|| on_down.reform(|_: MouseEvent| ()))}
            onmouseup={has_gestures.then(|| on_up.reform(|_: MouseEvent| ()))}
            onfocusin={has_gestures.then(|| on_focus.reform(|_: FocusEvent| ()))}
            onfocusout={has_gestures.then(|| on_blur.reform(|_: FocusEvent| ()))}
        >
            { for props.children.iter() }
        </@>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn hidden_until_shown() {
        let style = resolve_style(
            Some(&PRESETS.fade_in),
            None,
            false,
            Gesture::Hover,
            true,
            0.4,
        );
        assert_eq!(style, PRESETS.fade_in.hidden.to_css());
    }

    #[test]
    fn shown_entrance_uses_its_own_delay() {
        let style = resolve_style(Some(&PRESETS.fade_in), None, true, Gesture::Rest, false, 0.4);
        assert_eq!(
            style,
            format!(
                "{}{}",
                PRESETS.fade_in.visible.to_css(),
                PRESETS.fade_in.transition.to_css(0.4)
            )
        );
    }

    #[test]
    fn hover_switches_to_gesture_timing() {
        let style = resolve_style(
            Some(&PRESETS.fade_in),
            Some(&PRESETS.social_card_3d),
            true,
            Gesture::Hover,
            true,
            0.4,
        );
        let hover = PRESETS.social_card_3d.hover.unwrap();
        assert_eq!(
            style,
            format!("{}{}", hover.to_css(), PRESETS.social_card_3d.transition.to_css(0.0))
        );
    }

    #[test]
    fn tap_falls_back_to_hover_pose() {
        let style = resolve_style(
            None,
            Some(&PRESETS.footer_logo_gestures),
            true,
            Gesture::Tap,
            true,
            0.0,
        );
        assert!(style.starts_with(&PRESETS.footer_logo_gestures.hover.unwrap().to_css()));
    }

    #[test]
    fn rest_pose_prefers_gestures_over_entrance() {
        let style = resolve_style(
            Some(&PRESETS.fade_in),
            Some(&PRESETS.social_card_3d),
            true,
            Gesture::Rest,
            false,
            0.0,
        );
        assert!(style.contains("box-shadow: 0px 10px 20px rgba(0,0,0,0.1);"));
    }

    #[test]
    fn plain_element_has_no_transition() {
        assert_eq!(
            resolve_style(None, None, true, Gesture::Rest, false, 0.0),
            "transform: none;"
        );
    }
}
