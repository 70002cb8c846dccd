use yew::prelude::*;
use gloo_timers::callback::Timeout;
use web_sys::{window, ScrollBehavior, ScrollIntoViewOptions};
use crate::components::messenger::{tel_href, MessengerButtons};
use crate::config::PHONE_NUMBER;
use crate::i18n::Locale;

const BADGE_ICONS: [&str; 6] = ["📅", "🛡️", "🏆", "✅", "🛡️", "📄"];
const BADGE_COLORS: [&str; 6] = ["#2563eb", "#7c3aed", "#d97706", "#059669", "#16a34a", "#4f46e5"];

pub fn scroll_to_section(id: &str) {
    let Some(element) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    else {
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

fn call_now() {
    if let Some(window) = window() {
        let _ = window.location().set_href(&tel_href(PHONE_NUMBER));
    }
}

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub locale: Locale,
}

#[function_component(EmergencyContactBar)]
pub fn emergency_contact_bar(props: &HeroProps) -> Html {
    let dict = props.locale.dictionary();
    let is_pulsing = use_state(|| true);

    // Three pulse cycles, then stay still
    {
        let is_pulsing = is_pulsing.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(6_000, move || is_pulsing.set(false));
                move || drop(timeout)
            },
            (),
        );
    }

    html! {
        <div class="emergency-bar">
            <button
                class={classes!("emergency-call", (*is_pulsing).then(|| "pulsing"))}
                onclick={Callback::from(|_: MouseEvent| call_now())}
            >
                <span class="emergency-icon">{"📞"}</span>
                <span class="emergency-label">{ dict.hero.emergency }</span>
                <span class="emergency-number">{ PHONE_NUMBER }</span>
            </button>
            <div class="emergency-messengers">
                <MessengerButtons
                    phone_number={PHONE_NUMBER}
                    greeting={dict.hero.messenger_greeting}
                    label={Some(AttrValue::from(dict.hero.contact_via))}
                />
            </div>
        </div>
    }
}

#[function_component(TrustBadges)]
pub fn trust_badges(props: &HeroProps) -> Html {
    let dict = props.locale.dictionary();
    html! {
        <div class="trust-badges">
            { for dict.badges.iter().enumerate().map(|(index, text)| html! {
                <div
                    class="trust-badge"
                    role="status"
                    aria-label={*text}
                    style={format!("color: {}; animation-delay: {}ms;", BADGE_COLORS[index], index * 100)}
                >
                    <span class="trust-badge-icon" aria-hidden="true">{ BADGE_ICONS[index] }</span>
                    <p>{ *text }</p>
                </div>
            }) }
        </div>
    }
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let dict = props.locale.dictionary();

    html! {
        <>
            <EmergencyContactBar locale={props.locale} />
            <section id="hero" class="hero">
                <div class="hero-content">
                    <div class="hero-text">
                        <div class="hero-signature">
                            <span>{"✔"}</span>
                            <span>{ format!("{} - 49+", dict.hero.trust_signature) }</span>
                        </div>
                        <h1>{ dict.hero.title }</h1>
                        <p class="hero-subtitle">{ dict.hero.subtitle }</p>
                        <div class="hero-cta-group">
                            <button
                                class="hero-cta"
                                aria-label={format!("{} {}", dict.hero.cta_primary, PHONE_NUMBER)}
                                onclick={Callback::from(|_: MouseEvent| call_now())}
                            >
                                <span class="hero-phone-icon">{"📞"}</span>
                                { dict.hero.cta_primary }
                            </button>
                            <button
                                class="hero-secondary"
                                onclick={Callback::from(|_: MouseEvent| scroll_to_section("products"))}
                            >
                                { dict.hero.cta_secondary }{" →"}
                            </button>
                        </div>
                        <div class="hero-messengers-mobile">
                            <MessengerButtons
                                phone_number={PHONE_NUMBER}
                                greeting={dict.hero.messenger_greeting}
                                label={Some(AttrValue::from(dict.hero.contact_via))}
                            />
                        </div>
                        <TrustBadges locale={props.locale} />
                    </div>
                    <div class="hero-visual">
                        <img src="/assets/truck-service.webp" alt={dict.hero.title} loading="eager" />
                    </div>
                </div>
            </section>
        </>
    }
}
