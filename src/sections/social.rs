// src/sections/social.rs
use yew::prelude::*;

use super::ScrollProps;
use crate::content::{SocialChannel, SOCIAL_CHANNELS, SOCIAL_INTRO, SOCIAL_OUTRO, SOCIAL_TITLE};
use crate::motion::{Motion, PRESETS};
use crate::scroll::use_revealed_once;

const SWAY_STEP: f32 = 0.5;

fn arrow_icon() -> Html {
    html! {
        <svg xmlns="http://www.w3.org/2000/svg" class="h-5 w-5" viewBox="0 0 20 20" fill="currentColor">
            <path
                fill-rule="evenodd"
                clip-rule="evenodd"
                d="M10.293 5.293a1 1 0 011.414 0l4 4a1 1 0 010 1.414l-4 4a1 1 0 01-1.414-1.414L12.586 11H5a1 1 0 110-2h7.586l-2.293-2.293a1 1 0 010-1.414z"
            />
        </svg>
    }
}

fn channel_card(index: usize, channel: &SocialChannel, active: bool) -> Html {
    let sway = if channel.reverse {
        PRESETS.float_social.keyframes("motion-float-social-reverse")
    } else {
        PRESETS.float_social
    }
    .delayed(index as f32 * SWAY_STEP);

    html! {
        <Motion
            class="bg-white rounded-lg shadow-lg overflow-hidden perspective-1000"
            style="transform-style: preserve-3d;"
            entrance={&PRESETS.fade_in}
            gestures={&PRESETS.social_card_3d}
            delay={PRESETS.stagger.delay(index)}
            {active}
        >
            <div class="p-8 text-center" style="transform: translateZ(20px);">
                <Motion class="text-4xl mb-4 flex justify-center" looping={sway}>
                    <span class={classes!(
                        "text-white", "rounded-full", "w-16", "h-16", "flex", "items-center", "justify-center",
                        channel.badge_class
                    )}>
                        <span class="text-2xl">{ channel.icon }</span>
                    </span>
                </Motion>
                <h3 class="text-xl font-bold mb-2">{ channel.name }</h3>
                <p class="text-gray-600 mb-6">{ channel.blurb }</p>
                <a
                    href={channel.href}
                    target="_blank"
                    rel="noopener noreferrer"
                    class={classes!(
                        "text-white", "font-bold", "py-2", "px-6", "rounded-full", "inline-flex",
                        "items-center", "transition", "duration-300", channel.button_class
                    )}
                >
                    <span class="mr-2">{ channel.cta }</span>
                    { arrow_icon() }
                </a>
            </div>
        </Motion>
    }
}

#[function_component(Social)]
pub fn social(props: &ScrollProps) -> Html {
    let node = use_node_ref();
    let active = use_revealed_once(node.clone(), props.scroll_y);

    html! {
        <Motion
            tag="section"
            id="social"
            node_ref={node}
            class="py-16 px-4 bg-gradient-to-r from-yellow-50 to-green-50"
            entrance={&PRESETS.fade_in_up}
            {active}
        >
            <div class="container mx-auto max-w-6xl">
                <Motion
                    tag="h2"
                    class="text-3xl md:text-4xl font-bold text-center mb-4 text-green-700"
                    entrance={&PRESETS.heading}
                    {active}
                >
                    { SOCIAL_TITLE }
                </Motion>
                <Motion
                    tag="p"
                    class="text-center text-gray-600 mb-12 max-w-2xl mx-auto"
                    entrance={&PRESETS.intro}
                    {active}
                >
                    { SOCIAL_INTRO }
                </Motion>

                <div class="grid md:grid-cols-2 gap-8">
                    { for SOCIAL_CHANNELS.iter().enumerate().map(|(i, c)| channel_card(i, c, active)) }
                </div>

                <Motion
                    tag="p"
                    class="text-center text-gray-600 mt-12 max-w-2xl mx-auto"
                    entrance={&PRESETS.outro}
                    {active}
                >
                    { SOCIAL_OUTRO }
                </Motion>
            </div>
        </Motion>
    }
}
