// src/sections/mod.rs
mod about;
mod activities;
mod contact;
mod footer;
mod hero;
mod nav;
mod social;

pub use about::About;
pub use activities::Activities;
pub use contact::Contact;
pub use footer::Footer;
pub use hero::Hero;
pub use nav::NavBar;
pub use social::Social;

use yew::prelude::*;

/// Props for sections that move with the page scroll.
#[derive(Properties, PartialEq)]
pub struct ScrollProps {
    pub scroll_y: f64,
}
