use chrono::Datelike;
use yew::prelude::*;
use yew_router::prelude::*;
use crate::Route;
use crate::components::messenger::tel_href;
use crate::config::{CONTACT_EMAIL, PHONE_NUMBER};
use crate::i18n::Locale;

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub locale: Locale,
    pub on_cookie_settings: Callback<()>,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let dict = props.locale.dictionary();
    let year = chrono::Local::now().year();
    let open_settings = {
        let on_cookie_settings = props.on_cookie_settings.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_cookie_settings.emit(());
        })
    };

    html! {
        <footer class="site-footer">
            <div class="footer-content">
                <div class="footer-brand">
                    <span class="footer-logo">{"HubTrac"}</span>
                    <p>{ dict.footer.tagline }</p>
                </div>
                <div class="footer-contact">
                    <h4>{ dict.footer.contact_title }</h4>
                    <a href={tel_href(PHONE_NUMBER)}>{ PHONE_NUMBER }</a>
                    <a href={format!("mailto:{}", CONTACT_EMAIL)}>{ CONTACT_EMAIL }</a>
                    <p>{ dict.contact.address }</p>
                </div>
            </div>
            <div class="footer-bottom">
                <span>{ format!("© {} HubTrac. {}", year, dict.footer.rights) }</span>
                <div class="legal-links">
                    <Link<Route> to={Route::Privacy}>{ dict.nav.privacy }</Link<Route>>
                    {" | "}
                    <a href="#" onclick={open_settings}>{ dict.footer.cookie_settings }</a>
                </div>
            </div>
        </footer>
    }
}
