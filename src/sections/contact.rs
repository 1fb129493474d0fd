// src/sections/contact.rs
use gloo::console::{log, warn};
use web_sys::{window, HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use super::ScrollProps;
use crate::config::SiteConfig;
use crate::content::{CONFIRMATION, CONTACT_LABELS, CONTACT_TITLE, SUBMIT_LABEL};
use crate::form::{redirect_target, ContactForm, Field, Submission};
use crate::motion::{parallax_offset, resolve_style, Gesture, Motion, PRESETS};

const INPUT_CLASS: &str =
    "w-full px-4 py-3 rounded-lg border border-gray-300 focus:outline-none focus:border-green-500";

fn current_redirect_target(anchor: &str) -> String {
    let Some(loc) = window().map(|w| w.location()) else {
        return format!("#{anchor}");
    };
    redirect_target(
        &loc.protocol().unwrap_or_default(),
        &loc.host().unwrap_or_default(),
        &loc.pathname().unwrap_or_default(),
        anchor,
    )
}

/// (name attribute, value) of whichever control fired.
fn read_control(e: &InputEvent) -> (String, String) {
    if let Some(area) = e.target_dyn_into::<HtmlTextAreaElement>() {
        return (area.name(), area.value());
    }
    let input: HtmlInputElement = e.target_unchecked_into();
    (input.name(), input.value())
}

#[derive(Properties, PartialEq)]
pub struct ContactCardProps {
    pub form: ContactForm,
    pub submission: Submission,
    #[prop_or_default]
    pub on_input: Callback<InputEvent>,
    #[prop_or_default]
    pub on_submit: Callback<SubmitEvent>,
}

/// The form card. Renders from props only, so it needs no browser.
#[function_component(ContactCard)]
pub fn contact_card(props: &ContactCardProps) -> Html {
    let ContactCardProps {
        form,
        submission,
        on_input,
        on_submit,
    } = props;
    let focused = use_state(|| None::<Field>);

    let focus_style = |field: Field| {
        let gesture = if *focused == Some(field) {
            Gesture::Focus
        } else {
            Gesture::Rest
        };
        resolve_style(None, Some(&PRESETS.field_focus), true, gesture, true, 0.0)
    };
    let on_focus = |field: Field| {
        let focused = focused.clone();
        Callback::from(move |_: FocusEvent| focused.set(Some(field)))
    };
    let on_blur = {
        let focused = focused.clone();
        Callback::from(move |_: FocusEvent| focused.set(None))
    };

    let control = |field: Field| -> Html {
        let value = form.get(field).to_string();
        match field {
            Field::Message => html! {
                <textarea
                    id={field.attr()}
                    name={field.attr()}
                    rows="5"
                    class={INPUT_CLASS}
                    style={focus_style(field)}
                    value={value}
                    oninput={on_input.clone()}
                    onfocus={on_focus(field)}
                    onblur={on_blur.clone()}
                    required=true
                />
            },
            Field::Name | Field::Email => html! {
                <input
                    type={if field == Field::Email { "email" } else { "text" }}
                    id={field.attr()}
                    name={field.attr()}
                    class={INPUT_CLASS}
                    style={focus_style(field)}
                    value={value}
                    oninput={on_input.clone()}
                    onfocus={on_focus(field)}
                    onblur={on_blur.clone()}
                    required=true
                />
            },
        }
    };

    html! {
        <Motion
            class="bg-white p-8 rounded-lg shadow-lg border border-green-200"
            entrance={&PRESETS.card_rise}
            gestures={&PRESETS.card_lift}
        >
            <form
                action={submission.action.clone()}
                method="POST"
                class="space-y-6"
                onsubmit={on_submit.clone()}
            >
                { for submission.hidden_fields().map(|(key, value)| html! {
                    <input type="hidden" name={*key} value={value.clone()} />
                }) }

                { for CONTACT_LABELS.iter().map(|(field, label)| html! {
                    <div class="mb-6">
                        <label for={field.attr()} class="block text-gray-700 font-bold mb-2">
                            { *label }
                        </label>
                        { control(*field) }
                    </div>
                }) }

                <div class="text-center">
                    <Motion
                        tag="button"
                        kind="submit"
                        class="bg-gradient-to-r from-green-600 to-green-500 text-white font-bold py-3 px-8 rounded-full hover:from-green-700 hover:to-green-600 transition duration-300 transform"
                        gestures={&PRESETS.submit_button}
                    >
                        { SUBMIT_LABEL }
                    </Motion>
                </div>

                if form.is_submitted() {
                    <Motion
                        tag="p"
                        class="text-lg text-green-600 font-bold mt-6 text-center"
                        entrance={&PRESETS.confirmation}
                    >
                        { CONFIRMATION }
                    </Motion>
                }
            </form>
        </Motion>
    }
}

#[function_component(Contact)]
pub fn contact(props: &ScrollProps) -> Html {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let form = use_state(ContactForm::new);

    let next_url = use_memo(config.return_anchor.clone(), |anchor| {
        current_redirect_target(anchor)
    });
    let submission = form.submission(&config, &next_url);

    let on_input = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let (name, value) = read_control(&e);
            match name.parse::<Field>() {
                Ok(field) => {
                    let mut next = (*form).clone();
                    next.update_field(field, value);
                    form.set(next);
                }
                Err(err) => {
                    warn!(err.to_string());
                }
            }
        })
    };

    // The browser still posts the form to the relay; only an invalid form
    // is held back here.
    let on_submit = {
        let form = form.clone();
        let relay = submission.action.clone();
        let back_to = submission.field("_next").unwrap_or_default().to_string();
        Callback::from(move |e: SubmitEvent| {
            let mut next = (*form).clone();
            match next.submit() {
                Ok(()) => {
                    log!(format!("Contact form handed to {relay}, returning to {back_to}"));
                    form.set(next);
                }
                Err(err) => {
                    e.prevent_default();
                    warn!(format!("Contact form not sent: {err}"));
                }
            }
        })
    };

    let decor = format!(
        "transform: translateY({}px);",
        parallax_offset(props.scroll_y, PRESETS.parallax.contact_decor)
    );

    html! {
        <Motion
            tag="section"
            id="contact"
            class="py-16 px-4 bg-green-50 relative overflow-hidden"
            entrance={&PRESETS.fade_in_up}
        >
            <div class="absolute inset-0 w-full h-full opacity-10 pointer-events-none" style={decor}>
                <div class="absolute top-20 left-10 w-40 h-40 rounded-full bg-green-500"></div>
                <div class="absolute bottom-40 right-20 w-60 h-60 rounded-full bg-yellow-500"></div>
            </div>

            <div class="container mx-auto max-w-4xl relative z-10">
                <Motion
                    tag="h2"
                    class="text-3xl md:text-4xl font-bold text-center mb-8 text-green-700"
                    entrance={&PRESETS.heading}
                >
                    { CONTACT_TITLE }
                </Motion>
                <ContactCard
                    form={(*form).clone()}
                    {submission}
                    {on_input}
                    {on_submit}
                />
            </div>
        </Motion>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use yew::LocalServerRenderer;

    async fn render(form: ContactForm) -> String {
        let next = redirect_target("https:", "club.example", "/", "contact");
        let submission = form.submission(&SiteConfig::default(), &next);
        LocalServerRenderer::<ContactCard>::with_props(ContactCardProps {
            form,
            submission,
            on_input: Callback::noop(),
            on_submit: Callback::noop(),
        })
        .hydratable(false)
        .render()
        .await
    }

    fn filled() -> ContactForm {
        let mut form = ContactForm::new();
        form.update_field(Field::Name, "Alice");
        form.update_field(Field::Email, "a@b.com");
        form.update_field(Field::Message, "Hi");
        form
    }

    #[tokio::test]
    async fn every_control_is_required() {
        let html = render(ContactForm::new()).await;
        assert_eq!(html.matches(" required").count(), 3);
        for field in Field::ALL {
            assert!(html.contains(&format!(r#"name="{}""#, field.attr())));
        }
        assert!(html.contains("<textarea"));
    }

    #[tokio::test]
    async fn form_posts_to_the_relay() {
        let html = render(ContactForm::new()).await;
        assert!(html.contains(r#"action="https://formsubmit.co/yassine99zbir@gmail.com""#));
        assert!(html.contains(r#"method="POST""#));
        assert!(html.contains(r#"type="submit""#));
    }

    #[tokio::test]
    async fn hidden_fields_are_rendered() {
        let html = render(ContactForm::new()).await;
        assert_eq!(html.matches(r#"type="hidden""#).count(), 3);
        for name in ["_captcha", "_next", "_subject"] {
            assert!(html.contains(&format!(r#"name="{name}""#)), "missing {name}");
        }
        assert!(html.contains(r#"value="false""#));
        assert!(html.contains(r#"value="https://club.example/#contact""#));
        assert!(html.contains(r#"value="Nouveau message du site JLM Mundiapolis""#));
    }

    #[tokio::test]
    async fn typed_values_fill_the_inputs() {
        let html = render(filled()).await;
        assert!(html.contains(r#"value="Alice""#));
        assert!(html.contains(r#"value="a@b.com""#));
    }

    #[tokio::test]
    async fn confirmation_appears_only_after_submit() {
        let form = filled();
        assert!(!render(form.clone()).await.contains(CONFIRMATION));

        let mut sent = form;
        sent.submit().unwrap();
        assert!(render(sent).await.contains(CONFIRMATION));
    }
}
