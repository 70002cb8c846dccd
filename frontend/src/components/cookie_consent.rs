use yew::prelude::*;
use yew_router::prelude::*;
use gloo_timers::callback::Timeout;
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Array, Reflect};
use crate::Route;
use crate::config::CONSENT_BANNER_DELAY_MS;
use crate::consent::{apply_integrations, ConsentDraft, ConsentStore, Integrations, PreferenceKey};
use crate::i18n::Locale;
use crate::storage::AppStorage;

#[derive(Serialize)]
struct ConsentUpdate {
    event: &'static str,
    category: &'static str,
    state: &'static str,
}

/// Signals granted categories to a tag manager through `window.dataLayer`.
pub struct DataLayerIntegrations;

impl DataLayerIntegrations {
    fn push(category: &'static str) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let Ok(layer) = Reflect::get(&window, &JsValue::from_str("dataLayer")) else {
            return;
        };
        if !Array::is_array(&layer) {
            log::info!("{} consent granted, no dataLayer present", category);
            return;
        }
        let layer: Array = layer.unchecked_into();
        let update = ConsentUpdate {
            event: "consent_update",
            category,
            state: "granted",
        };
        match serde_wasm_bindgen::to_value(&update) {
            Ok(value) => {
                layer.push(&value);
                log::info!("{} enabled", category);
            }
            Err(e) => log::warn!("Failed to encode consent update: {}", e),
        }
    }
}

impl Integrations for DataLayerIntegrations {
    fn enable_analytics(&self) {
        Self::push("analytics");
    }

    fn enable_marketing(&self) {
        Self::push("marketing");
    }
}

#[derive(Clone, Copy, PartialEq)]
enum Choice {
    All,
    NecessaryOnly,
    Custom,
}

#[derive(Properties, PartialEq)]
pub struct CookieConsentProps {
    pub locale: Locale,
    pub storage: AppStorage,
    /// Bumped by the footer "cookie settings" link to reopen the banner.
    #[prop_or_default]
    pub reopen: u32,
}

#[function_component(CookieConsent)]
pub fn cookie_consent(props: &CookieConsentProps) -> Html {
    let dict = props.locale.dictionary();
    let is_visible = use_state(|| false);
    let show_details = use_state(|| false);
    let draft = use_state(|| ConsentDraft::new(ConsentStore::new(props.storage.clone()).load_preferences()));

    // On mount: start integrations for a stored choice, or show the banner.
    {
        let is_visible = is_visible.clone();
        let storage = props.storage.clone();
        use_effect_with_deps(
            move |_| {
                let store = ConsentStore::new(storage);
                let mut timeout = None;
                if store.has_consent() {
                    apply_integrations(&store.load_preferences(), &DataLayerIntegrations);
                } else {
                    timeout = Some(Timeout::new(CONSENT_BANNER_DELAY_MS, move || is_visible.set(true)));
                }
                move || drop(timeout)
            },
            (),
        );
    }

    {
        let is_visible = is_visible.clone();
        use_effect_with_deps(
            move |reopen| {
                if *reopen > 0 {
                    is_visible.set(true);
                }
                || ()
            },
            props.reopen,
        );
    }

    let commit = |choice: Choice| {
        let storage = props.storage.clone();
        let is_visible = is_visible.clone();
        let draft = draft.clone();
        Callback::from(move |_: MouseEvent| {
            let store = ConsentStore::new(storage.clone());
            let saved = match choice {
                Choice::All => store.accept_all(&DataLayerIntegrations),
                Choice::NecessaryOnly => store.accept_necessary_only(&DataLayerIntegrations),
                Choice::Custom => store.save_preferences(draft.preferences(), &DataLayerIntegrations),
            };
            draft.set(ConsentDraft::new(saved));
            is_visible.set(false);
        })
    };

    let accept_all = commit(Choice::All);
    let accept_necessary = commit(Choice::NecessaryOnly);
    let save_preferences = commit(Choice::Custom);

    let toggle = |key: PreferenceKey| {
        let draft = draft.clone();
        Callback::from(move |_: Event| {
            let mut next = *draft;
            next.toggle(key);
            draft.set(next);
        })
    };

    let close = {
        let is_visible = is_visible.clone();
        Callback::from(move |_: MouseEvent| is_visible.set(false))
    };

    let toggle_details = {
        let show_details = show_details.clone();
        Callback::from(move |_: MouseEvent| show_details.set(!*show_details))
    };

    if !*is_visible {
        return html! {};
    }

    let prefs = draft.preferences();

    html! {
        <>
            <style>
                {r#"
                .cookie-backdrop {
                    position: fixed;
                    inset: 0;
                    background: rgba(0, 0, 0, 0.2);
                    backdrop-filter: blur(4px);
                    z-index: 9998;
                }
                .cookie-banner {
                    position: fixed;
                    left: 0;
                    right: 0;
                    bottom: 0;
                    z-index: 9999;
                    padding: 1.5rem;
                    animation: cookieIn 0.4s ease-out;
                }
                @keyframes cookieIn {
                    from { transform: translateY(100px); opacity: 0; }
                    to { transform: translateY(0); opacity: 1; }
                }
                .cookie-card {
                    max-width: 72rem;
                    margin: 0 auto;
                    background: #fff;
                    border: 1px solid #e5e7eb;
                    border-radius: 16px;
                    box-shadow: 0 24px 48px rgba(0, 0, 0, 0.2);
                    padding: 2rem;
                    color: #111827;
                }
                .cookie-header {
                    display: flex;
                    justify-content: space-between;
                    align-items: flex-start;
                    margin-bottom: 1rem;
                }
                .cookie-header h3 { font-size: 1.25rem; font-weight: 700; margin: 0; }
                .cookie-header p { color: #4b5563; font-size: 0.9rem; margin: 0.25rem 0 0 0; }
                .cookie-description { color: #374151; line-height: 1.6; margin-bottom: 1.5rem; }
                .cookie-customize {
                    width: 100%;
                    display: flex;
                    justify-content: space-between;
                    padding: 1rem;
                    background: #f9fafb;
                    border: none;
                    border-radius: 8px;
                    font-weight: 600;
                    cursor: pointer;
                }
                .cookie-category {
                    display: flex;
                    justify-content: space-between;
                    align-items: flex-start;
                    gap: 1rem;
                    padding: 1rem;
                    margin-top: 1rem;
                    background: #f9fafb;
                    border-radius: 8px;
                }
                .cookie-category h4 { margin: 0; font-weight: 600; }
                .cookie-category p { margin: 0.25rem 0 0 0; font-size: 0.875rem; color: #4b5563; }
                .cookie-actions {
                    display: flex;
                    gap: 0.75rem;
                    margin-top: 1.5rem;
                }
                .cookie-actions button {
                    flex: 1;
                    padding: 0.75rem 1.5rem;
                    border: none;
                    border-radius: 8px;
                    font-weight: 600;
                    cursor: pointer;
                }
                .cookie-primary { background: #dc2626; color: #fff; }
                .cookie-primary:hover { background: #b91c1c; }
                .cookie-secondary { background: #e5e7eb; color: #111827; }
                .cookie-close { background: none; border: none; cursor: pointer; font-size: 1.1rem; color: #6b7280; }
                .cookie-policy { display: block; margin-top: 1rem; text-align: center; font-size: 0.875rem; color: #4b5563; }
                @media (max-width: 640px) {
                    .cookie-actions { flex-direction: column; }
                    .cookie-card { padding: 1.5rem; }
                }
                "#}
            </style>
            <div class="cookie-backdrop" onclick={close.clone()}></div>
            <div class="cookie-banner" role="dialog" aria-modal="true">
                <div class="cookie-card">
                    <div class="cookie-header">
                        <div>
                            <h3>{ dict.cookies.title }</h3>
                            <p>{ dict.cookies.subtitle }</p>
                        </div>
                        <button class="cookie-close" aria-label={dict.cookies.close} onclick={close}>{"✕"}</button>
                    </div>
                    <p class="cookie-description">{ dict.cookies.description }</p>

                    <button class="cookie-customize" onclick={toggle_details}>
                        <span>{ dict.cookies.customize }</span>
                        <span>{ if *show_details { "▲" } else { "▼" } }</span>
                    </button>

                    if *show_details {
                        <div class="cookie-categories">
                            <div class="cookie-category">
                                <div>
                                    <h4>{ dict.cookies.necessary }</h4>
                                    <p>{ dict.cookies.necessary_desc }</p>
                                </div>
                                <input type="checkbox" checked={true} disabled={true} />
                            </div>
                            <div class="cookie-category">
                                <div>
                                    <h4>{ dict.cookies.analytics }</h4>
                                    <p>{ dict.cookies.analytics_desc }</p>
                                </div>
                                <input type="checkbox" checked={prefs.analytics} onchange={toggle(PreferenceKey::Analytics)} />
                            </div>
                            <div class="cookie-category">
                                <div>
                                    <h4>{ dict.cookies.marketing }</h4>
                                    <p>{ dict.cookies.marketing_desc }</p>
                                </div>
                                <input type="checkbox" checked={prefs.marketing} onchange={toggle(PreferenceKey::Marketing)} />
                            </div>
                        </div>
                    }

                    <div class="cookie-actions">
                        if *show_details {
                            <button class="cookie-primary" onclick={save_preferences}>{ dict.cookies.save_preferences }</button>
                        } else {
                            <button class="cookie-primary" onclick={accept_all}>{ dict.cookies.accept_all }</button>
                        }
                        <button class="cookie-secondary" onclick={accept_necessary}>{ dict.cookies.necessary_only }</button>
                    </div>

                    <Link<Route> to={Route::Privacy} classes="cookie-policy">
                        { dict.cookies.privacy_policy }
                    </Link<Route>>
                </div>
            </div>
        </>
    }
}
