use yew::prelude::*;
use crate::components::hero::scroll_to_section;
use crate::i18n::Locale;

struct ProductStyle {
    key: &'static str,
    image: &'static str,
    gradient: &'static str,
}

const PRODUCTS: [ProductStyle; 5] = [
    ProductStyle {
        key: "highway_s23",
        image: "/images/products/highway-s23.webp",
        gradient: "linear-gradient(135deg, #dc2626, #b91c1c)",
    },
    ProductStyle {
        key: "highway_t22",
        image: "/images/products/highway-t22.webp",
        gradient: "linear-gradient(135deg, #b91c1c, #991b1b)",
    },
    ProductStyle {
        key: "mixed_s21",
        image: "/images/products/mixed-s21.webp",
        gradient: "linear-gradient(135deg, #dc2626, #ea580c)",
    },
    ProductStyle {
        key: "urban_g21",
        image: "/images/products/urban-g21.webp",
        gradient: "linear-gradient(135deg, #ea580c, #dc2626)",
    },
    ProductStyle {
        key: "coach_g21",
        image: "/images/products/coach-g21.webp",
        gradient: "linear-gradient(135deg, #991b1b, #7f1d1d)",
    },
];

#[derive(Properties, PartialEq)]
pub struct ProductGalleryProps {
    pub locale: Locale,
}

#[function_component(ProductGallery)]
pub fn product_gallery(props: &ProductGalleryProps) -> Html {
    let dict = props.locale.dictionary();
    let to_contact = Callback::from(|_: MouseEvent| scroll_to_section("contact"));

    html! {
        <section id="products" class="products-section">
            <div class="section-header">
                <h2>{ dict.products.title }</h2>
                <p>{ dict.products.subtitle }</p>
            </div>
            <div class="products-grid">
                { for PRODUCTS.iter().zip(dict.products.categories.iter()).map(|(style, text)| html! {
                    <div
                        key={style.key}
                        class="product-card"
                        data-product={style.key}
                        style={format!("background: {};", style.gradient)}
                    >
                        <div class="product-image">
                            <img src={style.image} alt={text.name} loading="lazy" />
                        </div>
                        <span class="product-usage">{ text.usage }</span>
                        <h3>{ text.name }</h3>
                        <p>{ text.description }</p>
                        <button class="product-cta" onclick={to_contact.clone()}>{ dict.products.cta }</button>
                    </div>
                }) }
            </div>
        </section>
    }
}
