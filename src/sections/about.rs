// src/sections/about.rs
use yew::prelude::*;

use super::ScrollProps;
use crate::content::{ABOUT_PARAGRAPHS, ABOUT_TITLE};
use crate::motion::{parallax_offset, Motion, PRESETS};

#[function_component(About)]
pub fn about(props: &ScrollProps) -> Html {
    let decor = format!(
        "transform: translateY({}px);",
        parallax_offset(props.scroll_y, PRESETS.parallax.about_decor)
    );
    let last = ABOUT_PARAGRAPHS.len() - 1;

    html! {
        <Motion
            tag="section"
            id="about"
            class="py-16 px-4 bg-green-50 relative overflow-hidden"
            entrance={&PRESETS.fade_in_up}
        >
            <div class="absolute inset-0 w-full h-full opacity-10 pointer-events-none" style={decor}>
                <div class="absolute top-20 right-10 w-60 h-60 rounded-full bg-green-500"></div>
                <div class="absolute bottom-10 left-20 w-40 h-40 rounded-full bg-yellow-500"></div>
            </div>

            <div class="container mx-auto max-w-4xl relative z-10">
                <Motion
                    tag="h2"
                    class="text-3xl md:text-4xl font-bold text-center mb-8 text-green-700"
                    entrance={&PRESETS.heading}
                >
                    { ABOUT_TITLE }
                </Motion>
                <Motion
                    class="bg-white p-8 rounded-lg shadow-lg border border-green-200"
                    entrance={&PRESETS.card_rise}
                    gestures={&PRESETS.card_lift}
                >
                    { for ABOUT_PARAGRAPHS.iter().enumerate().map(|(i, (lead, text))| html! {
                        <p class={classes!("text-gray-700", (i != last).then_some("mb-4"))}>
                            if let Some(lead) = lead {
                                <span class="font-bold">{ *lead }</span>
                            }
                            { *text }
                        </p>
                    }) }
                </Motion>
            </div>
        </Motion>
    }
}
