use yew::prelude::*;
use yew_router::prelude::*;
use crate::Route;
use crate::config::{COOKIE_CONSENT_KEY, COOKIE_PREFERENCES_KEY, LOCALE_KEY};
use crate::i18n::Locale;

#[derive(Properties, PartialEq)]
pub struct PrivacyProps {
    pub locale: Locale,
}

#[function_component(PrivacyPolicy)]
pub fn privacy_policy(props: &PrivacyProps) -> Html {
    let text = &props.locale.dictionary().privacy;

    html! {
        <div class="legal-content">
            <style>
                {r#"
                .legal-content {
                    min-height: 100vh;
                    background: #f9fafb;
                    padding: 6rem 2rem 4rem 2rem;
                    color: #111827;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                }
                .legal-content > div {
                    background: #fff;
                    border: 1px solid #e5e7eb;
                    border-radius: 16px;
                    padding: 3rem;
                    max-width: 800px;
                    box-shadow: 0 8px 32px rgba(0, 0, 0, 0.06);
                }
                .legal-content h1 { font-size: 2rem; color: #dc2626; margin-bottom: 2rem; }
                .legal-content section { margin: 1.5rem 0; }
                .legal-content h2 { font-size: 1.25rem; margin-bottom: 0.75rem; }
                .legal-content p, .legal-content li { color: #4b5563; line-height: 1.6; }
                .legal-content code { background: #f3f4f6; padding: 0.1rem 0.35rem; border-radius: 4px; }
                .legal-links { margin-top: 2rem; text-align: center; }
                .legal-links a { color: #dc2626; text-decoration: none; }
                "#}
            </style>
            <div>
                <h1>{ text.title }</h1>
                <p>{ text.intro }</p>
                <section>
                    <h2>{ text.data_title }</h2>
                    <p>{ text.data_body }</p>
                </section>
                <section>
                    <h2>{ text.cookies_title }</h2>
                    <p>{ text.cookies_body }</p>
                </section>
                <section>
                    <h2>{ text.storage_title }</h2>
                    <p>{ text.storage_body }</p>
                    <ul>
                        <li><code>{ LOCALE_KEY }</code></li>
                        <li><code>{ COOKIE_CONSENT_KEY }</code></li>
                        <li><code>{ COOKIE_PREFERENCES_KEY }</code></li>
                    </ul>
                </section>
                <div class="legal-links">
                    <Link<Route> to={Route::Home}>{ text.back }</Link<Route>>
                </div>
            </div>
        </div>
    }
}
