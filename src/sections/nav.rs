// src/sections/nav.rs
use yew::prelude::*;

use crate::content::{CLUB_NAME, LOGO_SRC, NAV_LINKS};
use crate::motion::{Motion, PRESETS};
use crate::scroll::scroll_to_section;

#[function_component(NavBar)]
pub fn nav_bar() -> Html {
    let menu_open = use_state(|| false);

    let go_to = {
        let menu_open = menu_open.clone();
        move |anchor: &'static str| {
            let menu_open = menu_open.clone();
            Callback::from(move |_: MouseEvent| {
                menu_open.set(false);
                scroll_to_section(anchor);
            })
        }
    };

    let on_toggle = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    html! {
        <nav class="bg-gradient-to-r from-green-600 to-yellow-400 shadow-md fixed top-0 left-0 right-0 z-50">
            <div class="container mx-auto px-4 py-3">
                <div class="flex justify-between items-center">
                    <div class="flex items-center">
                        <Motion
                            class="mr-3"
                            entrance={&PRESETS.nav_logo}
                            gestures={&PRESETS.nav_logo_gestures}
                        >
                            <img src={LOGO_SRC} alt="JLM Logo" class="h-10 w-10" />
                        </Motion>
                        <div class="text-xl font-bold text-white">{ CLUB_NAME }</div>
                    </div>
                    <div class="hidden md:flex space-x-8">
                        { for NAV_LINKS.iter().map(|link| html! {
                            <button
                                onclick={go_to(link.anchor)}
                                class="text-white hover:text-white hover:opacity-80 transition duration-300"
                            >
                                { link.label }
                            </button>
                        }) }
                    </div>
                    <div class="md:hidden">
                        <button
                            class="text-white"
                            aria-label="Menu"
                            aria-expanded={(*menu_open).to_string()}
                            onclick={on_toggle}
                        >
                            <svg class="w-6 h-6" fill="none" stroke="currentColor" viewBox="0 0 24 24" xmlns="http://www.w3.org/2000/svg">
                                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M4 6h16M4 12h16M4 18h16" />
                            </svg>
                        </button>
                    </div>
                </div>
                if *menu_open {
                    <div class="md:hidden flex flex-col space-y-2 pt-3 pb-1">
                        { for NAV_LINKS.iter().map(|link| html! {
                            <button
                                onclick={go_to(link.anchor)}
                                class="text-left text-white hover:opacity-80 transition duration-300"
                            >
                                { link.label }
                            </button>
                        }) }
                    </div>
                }
            </div>
        </nav>
    }
}
