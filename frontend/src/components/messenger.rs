use yew::prelude::*;
use web_sys::window;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Messenger {
    WhatsApp,
    Viber,
    Telegram,
}

impl Messenger {
    pub const ALL: [Messenger; 3] = [Messenger::WhatsApp, Messenger::Viber, Messenger::Telegram];

    pub fn name(self) -> &'static str {
        match self {
            Messenger::WhatsApp => "WhatsApp",
            Messenger::Viber => "Viber",
            Messenger::Telegram => "Telegram",
        }
    }

    fn color(self) -> &'static str {
        match self {
            Messenger::WhatsApp => "#25D366",
            Messenger::Viber => "#7360F2",
            Messenger::Telegram => "#0088CC",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            Messenger::WhatsApp => "💬",
            Messenger::Viber => "📱",
            Messenger::Telegram => "✈️",
        }
    }

    pub fn link(self, phone: &str, greeting: &str) -> String {
        let number = dial_digits(phone);
        match self {
            Messenger::WhatsApp => format!(
                "https://wa.me/{}?text={}",
                number.trim_start_matches('+'),
                urlencoding::encode(greeting)
            ),
            Messenger::Viber => format!("viber://chat?number={}", urlencoding::encode(&number)),
            Messenger::Telegram => format!("https://t.me/{}", number),
        }
    }
}

/// Keeps digits and `+`, drops spacing and punctuation.
pub fn dial_digits(phone: &str) -> String {
    phone.chars().filter(|c| c.is_ascii_digit() || *c == '+').collect()
}

pub fn tel_href(phone: &str) -> String {
    format!("tel:{}", phone.split_whitespace().collect::<String>())
}

#[derive(Properties, PartialEq)]
pub struct MessengerButtonsProps {
    pub phone_number: AttrValue,
    pub greeting: AttrValue,
    #[prop_or_default]
    pub label: Option<AttrValue>,
}

#[function_component(MessengerButtons)]
pub fn messenger_buttons(props: &MessengerButtonsProps) -> Html {
    html! {
        <div class="messenger-buttons">
            if let Some(label) = &props.label {
                <span class="messenger-label">{ label.clone() }</span>
            }
            { for Messenger::ALL.into_iter().map(|messenger| {
                let link = messenger.link(&props.phone_number, &props.greeting);
                let onclick = Callback::from(move |_: MouseEvent| {
                    if let Some(window) = window() {
                        let _ = window.open_with_url_and_target_and_features(&link, "_blank", "noopener,noreferrer");
                    }
                });
                html! {
                    <button
                        class="messenger-button"
                        style={format!("background: {};", messenger.color())}
                        aria-label={messenger.name()}
                        title={messenger.name()}
                        {onclick}
                    >
                        { messenger.icon() }
                    </button>
                }
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn dial_digits_strips_formatting() {
        assert_eq!(dial_digits("+421 (900) 123-456"), "+421900123456");
    }

    #[test]
    fn links_use_clean_numbers() {
        let phone = "+421 900 123 456";
        assert_eq!(
            Messenger::WhatsApp.link(phone, "Hello there"),
            "https://wa.me/421900123456?text=Hello%20there"
        );
        assert_eq!(Messenger::Viber.link(phone, ""), "viber://chat?number=%2B421900123456");
        assert_eq!(Messenger::Telegram.link(phone, ""), "https://t.me/+421900123456");
    }

    #[test]
    fn tel_href_removes_whitespace() {
        assert_eq!(tel_href("+421 900 123 456"), "tel:+421900123456");
    }
}
