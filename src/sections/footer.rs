// src/sections/footer.rs
use yew::prelude::*;

use crate::content::{copyright, CLUB_NAME, LOGO_SRC, SOCIAL_CHANNELS, TAGLINE};
use crate::motion::{Motion, PRESETS};

fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="bg-gradient-to-r from-green-600 to-yellow-400 text-white py-8">
            <div class="container mx-auto px-4">
                <div class="flex flex-col md:flex-row justify-between items-center">
                    <div class="mb-6 md:mb-0 flex items-center">
                        <Motion
                            class="mr-4"
                            entrance={&PRESETS.nav_logo}
                            gestures={&PRESETS.footer_logo_gestures}
                        >
                            <img src={LOGO_SRC} alt="JLM Logo" class="h-16 w-16" />
                        </Motion>
                        <div>
                            <h3 class="text-xl font-bold mb-2">{ CLUB_NAME }</h3>
                            <p class="text-white opacity-80">{ TAGLINE }</p>
                        </div>
                    </div>
                    <div class="flex flex-col items-center md:items-end">
                        <div class="flex space-x-4 mb-4">
                            { for SOCIAL_CHANNELS.iter().map(|c| html! {
                                <a
                                    href={c.href}
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    aria-label={c.name}
                                    class="text-white hover:text-white hover:opacity-80 transition duration-300"
                                >
                                    <span class="text-2xl">{ c.footer_icon }</span>
                                </a>
                            }) }
                        </div>
                        <p class="text-sm text-white opacity-80">{ copyright(current_year()) }</p>
                    </div>
                </div>
            </div>
        </footer>
    }
}
