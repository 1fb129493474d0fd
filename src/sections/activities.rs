// src/sections/activities.rs
use yew::prelude::*;

use crate::content::{Activity, ACTIVITIES, ACTIVITIES_TITLE};
use crate::motion::{Motion, PRESETS};

// Icons start their sway half a second apart.
const SWAY_STEP: f32 = 0.5;

fn activity_card(index: usize, activity: &Activity) -> Html {
    let sway = if activity.reverse {
        PRESETS.float.keyframes("motion-float-reverse")
    } else {
        PRESETS.float
    }
    .delayed(index as f32 * SWAY_STEP);

    html! {
        <Motion
            class={classes!(
                "bg-white", "p-6", "rounded-lg", "shadow-lg", "border-t-4", "perspective-1000",
                activity.border_class
            )}
            style="transform-style: preserve-3d;"
            entrance={&PRESETS.fade_in}
            gestures={&PRESETS.social_card_3d}
            delay={PRESETS.stagger.delay(index)}
        >
            <div style="transform: translateZ(20px);">
                <Motion
                    class={classes!("text-4xl", "mb-4", "text-center", activity.text_class)}
                    looping={sway}
                >
                    { activity.icon }
                </Motion>
                <h3 class={classes!("text-2xl", "font-bold", "mb-4", "text-center", activity.text_class)}>
                    { activity.title }
                </h3>
                <ul class="space-y-2 text-gray-700">
                    { for activity.items.iter().map(|item| html! {
                        <li class="flex items-center">
                            <span class="mr-2">{ "✅" }</span>
                            <span>{ *item }</span>
                        </li>
                    }) }
                </ul>
            </div>
        </Motion>
    }
}

#[function_component(Activities)]
pub fn activities() -> Html {
    html! {
        <Motion
            tag="section"
            id="activities"
            class="py-16 px-4 bg-white"
            entrance={&PRESETS.fade_in_up}
        >
            <div class="container mx-auto max-w-6xl">
                <h2 class="text-3xl md:text-4xl font-bold text-center mb-12 text-green-700">
                    { ACTIVITIES_TITLE }
                </h2>
                <div class="grid grid-cols-1 md:grid-cols-3 gap-8">
                    { for ACTIVITIES.iter().enumerate().map(|(i, a)| activity_card(i, a)) }
                </div>
            </div>
        </Motion>
    }
}
