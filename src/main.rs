// src/main.rs: JLM Mundiapolis club site (Rust + Yew + WASM)
mod config;
mod content;
mod form;
mod motion;
mod scroll;
mod sections;

use gloo::console::{log, warn};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use config::{fetch_site_config, SiteConfig, CONFIG_URL};
use motion::{Motion, PRESETS};
use scroll::use_scroll_y;
use sections::{About, Activities, Contact, Footer, Hero, NavBar, Social};

#[function_component(App)]
fn app() -> Html {
    let config = use_state(SiteConfig::default);
    let scroll_y = use_scroll_y();

    // Defaults are usable right away; the deployed file only overrides them.
    {
        let config = config.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match fetch_site_config(CONFIG_URL).await {
                    Ok(c) => {
                        log!(format!("Loaded {CONFIG_URL}"));
                        config.set(c);
                    }
                    Err(e) => {
                        warn!(format!("{e}; using built-in settings"));
                    }
                }
            });
            || ()
        });
    }

    html! {
        <ContextProvider<SiteConfig> context={(*config).clone()}>
            <Motion class="font-sans" entrance={&PRESETS.fade_in_up}>
                <NavBar />
                <Hero {scroll_y} />
                <About {scroll_y} />
                <Activities />
                <Social {scroll_y} />
                <Contact {scroll_y} />
                <Footer />
            </Motion>
        </ContextProvider<SiteConfig>>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
