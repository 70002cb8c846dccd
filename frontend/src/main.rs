use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, warn, Level};
use web_sys::{window, MouseEvent, StorageEvent};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew_hooks::use_event_with_window;

mod config;
mod storage;
mod i18n;
mod consent;
mod contact {
    pub mod validation;
    pub mod form;
    pub mod submit;
}
mod components {
    pub mod contact_form;
    pub mod cookie_consent;
    pub mod footer;
    pub mod hero;
    pub mod messenger;
    pub mod product_gallery;
    pub mod toast;
}
mod pages {
    pub mod home;
    pub mod privacy;
}

use components::{
    cookie_consent::CookieConsent,
    footer::Footer,
    hero::scroll_to_section,
    toast::ToastProvider,
};
use config::LOCALE_KEY;
use i18n::{load_locale, save_locale, Locale};
use pages::{
    home::Home,
    privacy::PrivacyPolicy,
};
use storage::AppStorage;


#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/privacy")]
    Privacy,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route, locale: Locale) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home locale={locale} /> }
        },
        Route::Privacy => {
            info!("Rendering Privacy page");
            html! { <PrivacyPolicy locale={locale} /> }
        },
        Route::NotFound => {
            info!("Unknown route, rendering Home page");
            html! { <Home locale={locale} /> }
        },
    }
}


#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub locale: Locale,
    pub on_locale_change: Callback<Locale>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps { locale, on_locale_change } = props;
    let dict = locale.dictionary();
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);
    let route = use_route::<Route>();
    let navigator = use_navigator();

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window();
            let scroll_callback = Closure::wrap(Box::new(move || {
                let scroll_top = web_sys::window()
                    .and_then(|w| w.document())
                    .and_then(|d| d.document_element())
                    .map(|el| el.scroll_top())
                    .unwrap_or(0);
                is_scrolled.set(scroll_top > 80);
            }) as Box<dyn FnMut()>);

            if let Some(window) = &window {
                if window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref()).is_err() {
                    warn!("Failed to attach scroll listener");
                }
            }

            move || {
                if let Some(window) = window {
                    let _ = window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                }
            }
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    // Off the landing page a section link just goes home.
    let go_to_section = |section: &'static str| {
        let menu_open = menu_open.clone();
        let on_home = route == Some(Route::Home);
        let navigator = navigator.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(false);
            if on_home {
                scroll_to_section(section);
            } else if let Some(navigator) = &navigator {
                navigator.push(&Route::Home);
            }
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 56px;
                    left: 0;
                    right: 0;
                    z-index: 40;
                    background: rgba(255, 255, 255, 0.85);
                    backdrop-filter: blur(8px);
                    transition: box-shadow 0.3s ease;
                }
                .top-nav.scrolled { box-shadow: 0 2px 12px rgba(0, 0, 0, 0.08); }
                .nav-content {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 0.75rem 1rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .nav-logo { font-size: 1.5rem; font-weight: 800; color: #dc2626; text-decoration: none; }
                .nav-right { display: flex; align-items: center; gap: 1.5rem; }
                .nav-link { color: #374151; text-decoration: none; font-weight: 500; }
                .nav-link:hover { color: #dc2626; }
                .locale-switcher { display: flex; gap: 0.25rem; }
                .locale-button {
                    padding: 0.25rem 0.5rem;
                    border: 1px solid #d1d5db;
                    border-radius: 6px;
                    background: #fff;
                    font-size: 0.8rem;
                    font-weight: 600;
                    cursor: pointer;
                }
                .locale-button.active { background: #dc2626; border-color: #dc2626; color: #fff; }
                .burger-menu { display: none; flex-direction: column; gap: 4px; background: none; border: none; cursor: pointer; }
                .burger-menu span { width: 24px; height: 2px; background: #111827; }
                @media (max-width: 768px) {
                    .burger-menu { display: flex; }
                    .nav-right { display: none; }
                    .nav-right.mobile-menu-open {
                        display: flex;
                        flex-direction: column;
                        position: absolute;
                        top: 100%;
                        left: 0;
                        right: 0;
                        padding: 1rem;
                        background: #fff;
                        box-shadow: 0 8px 16px rgba(0, 0, 0, 0.1);
                    }
                }
                "#}
            </style>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"HubTrac"}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    <a href="#hero" class="nav-link" onclick={go_to_section("hero")}>{ dict.nav.home }</a>
                    <a href="#products" class="nav-link" onclick={go_to_section("products")}>{ dict.nav.products }</a>
                    <a href="#contact" class="nav-link" onclick={go_to_section("contact")}>{ dict.nav.contact }</a>
                    <div class="locale-switcher">
                        {
                            Locale::ALL.iter().map(|option| {
                                let option = *option;
                                let on_locale_change = on_locale_change.clone();
                                let menu_open = menu_open.clone();
                                html! {
                                    <button
                                        class={classes!("locale-button", (option == *locale).then(|| "active"))}
                                        onclick={Callback::from(move |_: MouseEvent| {
                                            menu_open.set(false);
                                            on_locale_change.emit(option);
                                        })}
                                    >
                                        { option.label() }
                                    </button>
                                }
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </div>
        </nav>
    }
}


#[function_component]
fn App() -> Html {
    let storage = use_state(AppStorage::open);
    let locale = {
        let storage = storage.clone();
        use_state(move || load_locale(&*storage))
    };
    let cookie_reopen = use_state(|| 0u32);

    // Persist the selection and keep <html lang> in sync.
    {
        let storage = storage.clone();
        use_effect_with_deps(move |locale: &Locale| {
            if let Err(e) = save_locale(&*storage, *locale) {
                warn!("Could not persist locale: {}", e);
            }
            if let Some(root) = window().and_then(|w| w.document()).and_then(|d| d.document_element()) {
                let _ = root.set_attribute("lang", locale.code());
            }
            || ()
        }, *locale);
    }

    // Another tab changed the language.
    {
        let locale = locale.clone();
        let persistent = storage.is_persistent();
        use_event_with_window("storage", move |e: StorageEvent| {
            if !persistent || e.key().as_deref() != Some(LOCALE_KEY) {
                return;
            }
            let next = e.new_value()
                .as_deref()
                .and_then(Locale::from_code)
                .unwrap_or_default();
            if next != *locale {
                info!("Locale changed in another tab: {}", next.code());
                locale.set(next);
            }
        });
    }

    let on_locale_change = {
        let locale = locale.clone();
        Callback::from(move |next: Locale| {
            info!("Switching locale to {}", next.code());
            locale.set(next);
        })
    };

    let on_cookie_settings = {
        let cookie_reopen = cookie_reopen.clone();
        Callback::from(move |_: ()| cookie_reopen.set(*cookie_reopen + 1))
    };

    let render = {
        let locale = *locale;
        Callback::from(move |route: Route| switch(route, locale))
    };

    html! {
        <ToastProvider>
            <BrowserRouter>
                <Nav locale={*locale} on_locale_change={on_locale_change} />
                <Switch<Route> render={render} />
                <Footer locale={*locale} on_cookie_settings={on_cookie_settings} />
                <CookieConsent
                    locale={*locale}
                    storage={(*storage).clone()}
                    reopen={*cookie_reopen}
                />
            </BrowserRouter>
        </ToastProvider>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
