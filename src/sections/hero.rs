// src/sections/hero.rs
use yew::prelude::*;

use super::ScrollProps;
use crate::content::{CLUB_NAME, LOGO_SRC, TAGLINE};
use crate::motion::{parallax_offset, Motion, PRESETS};

/// Scattered dots tiled behind the hero, as an SVG path.
const PATTERN_PATH: &str = "M11 18c3.866 0 7-3.134 7-7s-3.134-7-7-7-7 3.134-7 7 3.134 7 7 7zm48 25c3.866 0 7-3.134 7-7s-3.134-7-7-7-7 3.134-7 7 3.134 7 7 7zm-43-7c1.657 0 3-1.343 3-3s-.895-3-2-3-3 1.343-3 3 1.343 3 3 3zm63 31c1.657 0 3-1.343 3-3s-.895-3-2-3-3 1.343-3 3 1.343 3 3 3zM34 90c1.657 0 3-1.343 3-3s-.895-3-2-3-3 1.343-3 3 1.343 3 3 3zm56-76c1.657 0 3-1.343 3-3s-.895-3-2-3-3 1.343-3 3 1.343 3 3 3zM12 86c2.21 0 4-1.79 4-4s-1.79-4-4-4-4 1.79-4 4 1.79 4 4 4zm28-65c2.21 0 4-1.79 4-4s-1.79-4-4-4-4 1.79-4 4 1.79 4 4 4zm23-11c2.76 0 5-2.24 5-5s-2.24-5-5-5-5 2.24-5 5 2.24 5 5 5zm-6 60c2.21 0 4-1.79 4-4s-1.79-4-4-4-4 1.79-4 4 1.79 4 4 4zm29 22c2.76 0 5-2.24 5-5s-2.24-5-5-5-5 2.24-5 5 2.24 5 5 5zM32 63c2.76 0 5-2.24 5-5s-2.24-5-5-5-5 2.24-5 5 2.24 5 5 5zm57-13c2.76 0 5-2.24 5-5s-2.24-5-5-5-5 2.24-5 5 2.24 5 5 5zm-9-21c1.105 0 2-.895 2-2s-.895-2-2-2-2 .895-2 2 .895 2 2 2zM60 91c1.105 0 2-.895 2-2s-.895-2-2-2-2 .895-2 2 .895 2 2 2zM35 41c1.105 0 2-.895 2-2s-.895-2-2-2-2 .895-2 2 .895 2 2 2zM12 60c1.105 0 2-.895 2-2s-.895-2-2-2-2 .895-2 2 .895 2 2 2z";

fn pattern_background() -> String {
    format!(
        "background-image: url(\"data:image/svg+xml,%3Csvg width='100' height='100' viewBox='0 0 100 100' xmlns='http://www.w3.org/2000/svg'%3E%3Cpath d='{PATTERN_PATH}' fill='%23ffffff' fill-opacity='0.1' fill-rule='evenodd'/%3E%3C/svg%3E\");"
    )
}

#[function_component(Hero)]
pub fn hero(props: &ScrollProps) -> Html {
    let parallax = PRESETS.parallax;
    let background = format!(
        "background-position: {}px 0px;",
        parallax_offset(props.scroll_y, parallax.hero_background)
    );
    let layer = format!(
        "{}transform: translateY({}px);",
        pattern_background(),
        parallax_offset(props.scroll_y, parallax.hero_layer)
    );

    html! {
        <section
            id="hero"
            class="bg-gradient-to-r from-green-600 to-yellow-400 text-white py-20 px-4 mt-16 relative overflow-hidden"
            style={background}
        >
            <div class="absolute inset-0 opacity-20" style={layer} />
            <div class="container mx-auto flex flex-col md:flex-row items-center justify-between">
                <div class="md:w-1/2 text-center md:text-left mb-8 md:mb-0">
                    <Motion tag="h1" class="text-5xl md:text-6xl font-bold mb-4" entrance={&PRESETS.fade_in}>
                        { CLUB_NAME }
                    </Motion>
                    <Motion tag="p" class="text-xl mb-8" entrance={&PRESETS.lead}>
                        { TAGLINE }
                    </Motion>
                </div>
                <div class="md:w-1/2 flex justify-center">
                    <Motion
                        class="relative"
                        entrance={&PRESETS.logo}
                        gestures={&PRESETS.logo_gestures}
                    >
                        <img src={LOGO_SRC} alt="JLM Mundiapolis Logo" class="w-64 h-64 object-contain" />
                        <Motion class="absolute inset-0" looping={PRESETS.spin}>
                            <div class="w-full h-full opacity-0">{ "Animation overlay" }</div>
                        </Motion>
                    </Motion>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pattern_draws_seventeen_closed_dots() {
        assert_eq!(PATTERN_PATH.matches('z').count(), 17);
        assert_eq!(PATTERN_PATH.matches(['m', 'M']).count(), 17);
        assert!(PATTERN_PATH.ends_with("M12 60c1.105 0 2-.895 2-2s-.895-2-2-2-2 .895-2 2 .895 2 2 2z"));
    }

    #[test]
    fn dot_radii_use_two_decimal_coordinates() {
        assert!(!PATTERN_PATH.contains("1.790"));
        assert_eq!(PATTERN_PATH.matches("4-1.79").count(), 3);
    }

    #[test]
    fn background_embeds_the_path_once() {
        let css = pattern_background();
        assert!(css.starts_with("background-image: url(\"data:image/svg+xml,"));
        assert!(css.ends_with("%3C/svg%3E\");"));
        assert_eq!(css.matches(PATTERN_PATH).count(), 1);
    }
}
