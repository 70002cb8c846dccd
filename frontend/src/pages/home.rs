use yew::prelude::*;
use crate::components::contact_form::ContactForm;
use crate::components::hero::Hero;
use crate::components::product_gallery::ProductGallery;
use crate::i18n::Locale;

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub locale: Locale,
}

#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    html! {
        <main class="landing-page">
            <style>
                {r#"
                .emergency-bar {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    height: 56px;
                    background: #dc2626;
                    color: #fff;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    padding: 0 1rem;
                    box-shadow: 0 4px 12px rgba(0, 0, 0, 0.15);
                }
                .emergency-call {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    background: none;
                    border: none;
                    color: inherit;
                    font-weight: 700;
                    font-size: 1rem;
                    cursor: pointer;
                }
                .emergency-call.pulsing .emergency-icon { animation: pulse 2s ease-in-out 3; }
                @keyframes pulse {
                    0%, 100% { transform: scale(1); }
                    50% { transform: scale(1.25); }
                }
                .messenger-buttons { display: flex; align-items: center; gap: 0.5rem; }
                .messenger-label { font-size: 0.875rem; opacity: 0.9; }
                .messenger-button {
                    width: 40px;
                    height: 40px;
                    border-radius: 50%;
                    border: none;
                    color: #fff;
                    cursor: pointer;
                    transition: transform 0.2s ease;
                }
                .messenger-button:hover { transform: scale(1.1); }
                .hero {
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    padding: 6rem 1rem 3rem 1rem;
                    background: linear-gradient(135deg, #fff, #f9fafb, #f3f4f6);
                }
                .hero-content {
                    max-width: 80rem;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: 55fr 45fr;
                    gap: 3rem;
                    align-items: center;
                }
                .hero-signature {
                    display: inline-flex;
                    gap: 0.5rem;
                    padding: 0.5rem 1rem;
                    margin-bottom: 1.5rem;
                    background: #f0fdf4;
                    border: 1px solid #bbf7d0;
                    border-radius: 999px;
                    color: #15803d;
                    font-weight: 600;
                }
                .hero h1 { font-size: 3.5rem; line-height: 1.1; color: #111827; margin-bottom: 1.5rem; }
                .hero-subtitle { font-size: 1.35rem; color: #4b5563; line-height: 1.6; margin-bottom: 2.5rem; }
                .hero-cta-group { display: flex; gap: 1rem; margin-bottom: 2rem; flex-wrap: wrap; }
                .hero-cta {
                    min-height: 60px;
                    padding: 1rem 2rem;
                    background: #dc2626;
                    color: #fff;
                    font-size: 1.2rem;
                    font-weight: 700;
                    text-transform: uppercase;
                    border: none;
                    border-radius: 999px;
                    cursor: pointer;
                    box-shadow: 0 8px 24px rgba(220, 38, 38, 0.3);
                    transition: transform 0.2s ease;
                }
                .hero-cta:hover { transform: scale(1.05); }
                .hero-phone-icon { display: inline-block; margin-right: 0.75rem; animation: shake 0.5s ease-in-out 5s infinite; }
                @keyframes shake {
                    0%, 100% { transform: rotate(0); }
                    25% { transform: rotate(-15deg); }
                    75% { transform: rotate(15deg); }
                }
                .hero-secondary {
                    min-height: 60px;
                    padding: 1rem 2rem;
                    background: #fff;
                    border: 2px solid #d1d5db;
                    border-radius: 999px;
                    font-weight: 600;
                    cursor: pointer;
                }
                .hero-secondary:hover { border-color: #111827; }
                .hero-messengers-mobile { display: none; margin-bottom: 2rem; }
                .hero-visual img { width: 100%; border-radius: 16px; box-shadow: 0 24px 48px rgba(0, 0, 0, 0.2); }
                .trust-badges { display: flex; gap: 1rem; flex-wrap: wrap; }
                .trust-badge {
                    width: 120px;
                    height: 100px;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    text-align: center;
                    background: #fff;
                    border-radius: 12px;
                    box-shadow: 0 2px 6px rgba(0, 0, 0, 0.06);
                    animation: fadeUp 0.4s ease-out both;
                }
                .trust-badge p { font-size: 0.8rem; font-weight: 600; margin: 0.25rem 0 0 0; }
                @keyframes fadeUp {
                    from { transform: translateY(20px); opacity: 0; }
                    to { transform: translateY(0); opacity: 1; }
                }
                .section-header { text-align: center; margin-bottom: 4rem; }
                .section-header h2 { font-size: 2.75rem; color: #111827; margin-bottom: 1rem; }
                .section-header p { font-size: 1.2rem; color: #4b5563; max-width: 48rem; margin: 0 auto; }
                .products-section { padding: 5rem 1rem; background: #f9fafb; }
                .products-grid {
                    max-width: 80rem;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1.5rem;
                }
                .product-card {
                    min-height: 380px;
                    padding: 2rem;
                    border-radius: 16px;
                    color: #fff;
                    display: flex;
                    flex-direction: column;
                    box-shadow: 0 8px 24px rgba(0, 0, 0, 0.12);
                    transition: transform 0.3s ease;
                }
                .product-card:hover { transform: translateY(-8px); }
                .product-image { flex: 1; display: flex; align-items: center; justify-content: center; margin-bottom: 1.5rem; }
                .product-image img { max-height: 160px; }
                .product-usage { font-size: 0.75rem; text-transform: uppercase; letter-spacing: 0.05em; opacity: 0.8; }
                .product-cta {
                    margin-top: auto;
                    padding: 0.75rem 1.5rem;
                    background: rgba(255, 255, 255, 0.15);
                    border: 1px solid rgba(255, 255, 255, 0.4);
                    border-radius: 8px;
                    color: #fff;
                    font-weight: 600;
                    cursor: pointer;
                }
                .site-footer { background: #111827; color: #d1d5db; padding: 3rem 1rem 1.5rem 1rem; }
                .footer-content { max-width: 80rem; margin: 0 auto; display: flex; justify-content: space-between; gap: 2rem; flex-wrap: wrap; }
                .footer-logo { font-size: 1.5rem; font-weight: 700; color: #fff; }
                .footer-contact { display: flex; flex-direction: column; gap: 0.5rem; }
                .footer-contact a, .legal-links a { color: #fca5a5; text-decoration: none; }
                .footer-bottom {
                    max-width: 80rem;
                    margin: 2rem auto 0 auto;
                    padding-top: 1.5rem;
                    border-top: 1px solid #374151;
                    display: flex;
                    justify-content: space-between;
                    font-size: 0.875rem;
                    flex-wrap: wrap;
                    gap: 1rem;
                }
                @media (max-width: 1024px) {
                    .hero-content { grid-template-columns: 1fr; text-align: center; }
                    .hero-visual { display: none; }
                    .hero-cta-group, .trust-badges { justify-content: center; }
                    .products-grid { grid-template-columns: repeat(2, 1fr); }
                }
                @media (max-width: 768px) {
                    .hero h1 { font-size: 2.25rem; }
                    .emergency-messengers { display: none; }
                    .hero-messengers-mobile { display: flex; justify-content: center; }
                    .products-grid { grid-template-columns: 1fr; }
                    .trust-badge { width: calc(50% - 0.5rem); height: 80px; }
                }
                "#}
            </style>
            <div id="home">
                <Hero locale={props.locale} />
            </div>
            <ProductGallery locale={props.locale} />
            <ContactForm locale={props.locale} />
        </main>
    }
}
