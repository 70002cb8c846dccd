use serde::{Deserialize, Serialize};
use crate::config::LOCALE_KEY;
use crate::storage::{KeyValueStore, StorageError};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Sk,
    En,
    De,
}

impl Locale {
    pub const ALL: [Locale; 3] = [Locale::Sk, Locale::En, Locale::De];

    pub fn code(self) -> &'static str {
        match self {
            Locale::Sk => "sk",
            Locale::En => "en",
            Locale::De => "de",
        }
    }

    /// Upper-case code shown on the switcher buttons.
    pub fn label(self) -> &'static str {
        match self {
            Locale::Sk => "SK",
            Locale::En => "EN",
            Locale::De => "DE",
        }
    }

    pub fn from_code(code: &str) -> Option<Locale> {
        match code.trim().to_ascii_lowercase().as_str() {
            "sk" => Some(Locale::Sk),
            "en" => Some(Locale::En),
            "de" => Some(Locale::De),
            _ => None,
        }
    }

    pub fn dictionary(self) -> &'static Dictionary {
        match self {
            Locale::Sk => &SK,
            Locale::En => &EN,
            Locale::De => &DE,
        }
    }
}

pub fn load_locale(storage: &impl KeyValueStore) -> Locale {
    storage
        .get(LOCALE_KEY)
        .and_then(|code| Locale::from_code(&code))
        .unwrap_or_default()
}

pub fn save_locale(storage: &impl KeyValueStore, locale: Locale) -> Result<(), StorageError> {
    storage.set(LOCALE_KEY, locale.code())
}

/// Replaces `{min}` / `{max}` placeholders in dictionary templates.
pub fn fill(template: &str, key: &str, value: usize) -> String {
    template.replace(&format!("{{{}}}", key), &value.to_string())
}

#[derive(Debug, PartialEq)]
pub struct Dictionary {
    pub nav: NavText,
    pub hero: HeroText,
    pub badges: [&'static str; 6],
    pub products: ProductsText,
    pub contact: ContactText,
    pub validation: ValidationText,
    pub cookies: CookieText,
    pub footer: FooterText,
    pub privacy: PrivacyText,
}

#[derive(Debug, PartialEq)]
pub struct NavText {
    pub home: &'static str,
    pub products: &'static str,
    pub contact: &'static str,
    pub privacy: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct HeroText {
    pub trust_signature: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub cta_primary: &'static str,
    pub cta_secondary: &'static str,
    pub contact_via: &'static str,
    pub emergency: &'static str,
    pub messenger_greeting: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct ProductsText {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub cta: &'static str,
    pub categories: [ProductText; 5],
}

#[derive(Debug, PartialEq)]
pub struct ProductText {
    pub name: &'static str,
    pub description: &'static str,
    pub usage: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct ContactText {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub info_title: &'static str,
    pub address: &'static str,
    pub response_title: &'static str,
    pub response_description: &'static str,
    pub form: FormText,
    pub service_types: ServiceTypeText,
}

#[derive(Debug, PartialEq)]
pub struct FormText {
    pub name: &'static str,
    pub name_placeholder: &'static str,
    pub phone: &'static str,
    pub phone_placeholder: &'static str,
    pub email: &'static str,
    pub email_placeholder: &'static str,
    pub service_type: &'static str,
    pub service_type_placeholder: &'static str,
    pub message: &'static str,
    pub message_placeholder: &'static str,
    pub submit: &'static str,
    pub submitting: &'static str,
    pub success: &'static str,
    pub error: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct ServiceTypeText {
    pub mobile: &'static str,
    pub emergency: &'static str,
    pub consultation: &'static str,
    pub purchase: &'static str,
    pub other: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct ValidationText {
    pub name_required: &'static str,
    pub name_too_short: &'static str,
    pub name_too_long: &'static str,
    pub name_invalid: &'static str,
    pub phone_required: &'static str,
    pub phone_invalid: &'static str,
    pub email_required: &'static str,
    pub email_invalid: &'static str,
    pub service_type_required: &'static str,
    pub service_type_invalid: &'static str,
    pub message_required: &'static str,
    pub message_too_short: &'static str,
    pub message_too_long: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct CookieText {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub customize: &'static str,
    pub necessary: &'static str,
    pub necessary_desc: &'static str,
    pub analytics: &'static str,
    pub analytics_desc: &'static str,
    pub marketing: &'static str,
    pub marketing_desc: &'static str,
    pub accept_all: &'static str,
    pub necessary_only: &'static str,
    pub save_preferences: &'static str,
    pub privacy_policy: &'static str,
    pub close: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct FooterText {
    pub tagline: &'static str,
    pub contact_title: &'static str,
    pub rights: &'static str,
    pub cookie_settings: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct PrivacyText {
    pub title: &'static str,
    pub intro: &'static str,
    pub data_title: &'static str,
    pub data_body: &'static str,
    pub cookies_title: &'static str,
    pub cookies_body: &'static str,
    pub storage_title: &'static str,
    pub storage_body: &'static str,
    pub back: &'static str,
}

pub static SK: Dictionary = Dictionary {
    nav: NavText {
        home: "Domov",
        products: "Pneumatiky",
        contact: "Kontakt",
        privacy: "Ochrana súkromia",
    },
    hero: HeroText {
        trust_signature: "Overený partner",
        title: "Mobilný pneuservis pre nákladné vozidlá 24/7",
        subtitle: "Prídeme za vami na diaľnicu, do depa aj na parkovisko. Výmena a oprava pneumatík bez odťahu.",
        cta_primary: "Zavolajte teraz",
        cta_secondary: "Katalóg pneumatík",
        contact_via: "Napíšte nám cez",
        emergency: "Núdzová linka 24/7",
        messenger_greeting: "Dobrý deň, potrebujem pomoc s pneumatikou.",
    },
    badges: [
        "49+ rokov skúseností",
        "ECE certifikácia",
        "LINGLONG partner",
        "ISO 9001",
        "6 rokov záruka",
        "DOT certifikácia",
    ],
    products: ProductsText {
        title: "Pneumatiky pre každú trasu",
        subtitle: "Certifikované pneumatiky pre diaľkovú, zmiešanú aj mestskú prevádzku.",
        cta: "Mám záujem",
        categories: [
            ProductText {
                name: "Highway S23",
                description: "Riadená náprava pre diaľkovú dopravu s nízkym valivým odporom.",
                usage: "Diaľnica",
            },
            ProductText {
                name: "Highway T22",
                description: "Návesová pneumatika s vysokou nosnosťou a rovnomerným opotrebením.",
                usage: "Diaľnica",
            },
            ProductText {
                name: "Mixed S21",
                description: "Odolný dezén pre kombináciu asfaltu a nespevnených ciest.",
                usage: "Zmiešaná prevádzka",
            },
            ProductText {
                name: "Urban G21",
                description: "Pre mestskú distribúciu s častým brzdením a odbočovaním.",
                usage: "Mesto",
            },
            ProductText {
                name: "Coach G21",
                description: "Tichý a komfortný chod pre autobusy a diaľkové linky.",
                usage: "Autobusy",
            },
        ],
    },
    contact: ContactText {
        title: "Kontaktujte nás",
        subtitle: "Vyplňte formulár a ozveme sa vám do 30 minút.",
        info_title: "Kontaktné údaje",
        address: "Priemyselná 12, 917 01 Trnava",
        response_title: "Podpora 24/7",
        response_description: "Pri poruche na ceste sme na mieste zvyčajne do 90 minút.",
        form: FormText {
            name: "Meno",
            name_placeholder: "Ján Novák",
            phone: "Telefón",
            phone_placeholder: "+421 900 000 000",
            email: "E-mail",
            email_placeholder: "jan.novak@firma.sk",
            service_type: "Typ služby",
            service_type_placeholder: "Vyberte službu",
            message: "Správa",
            message_placeholder: "Popíšte, s čím potrebujete pomôcť",
            submit: "Odoslať",
            submitting: "Odosielam...",
            success: "Ďakujeme! Čoskoro sa vám ozveme.",
            error: "Správu sa nepodarilo odoslať. Skúste to znova.",
        },
        service_types: ServiceTypeText {
            mobile: "Mobilný servis",
            emergency: "Núdzová výmena",
            consultation: "Konzultácia",
            purchase: "Kúpa pneumatík",
            other: "Iné",
        },
    },
    validation: ValidationText {
        name_required: "Meno je povinné",
        name_too_short: "Meno musí mať aspoň {min} znaky",
        name_too_long: "Meno môže mať najviac {max} znakov",
        name_invalid: "Meno môže obsahovať iba písmená",
        phone_required: "Telefónne číslo je povinné",
        phone_invalid: "Zadajte platné telefónne číslo",
        email_required: "E-mail je povinný",
        email_invalid: "Zadajte platnú e-mailovú adresu",
        service_type_required: "Vyberte typ služby",
        service_type_invalid: "Neplatný typ služby",
        message_required: "Správa je povinná",
        message_too_short: "Správa musí mať aspoň {min} znakov",
        message_too_long: "Správa môže mať najviac {max} znakov",
    },
    cookies: CookieText {
        title: "Nastavenia cookies",
        subtitle: "Rešpektujeme vaše súkromie",
        description: "Cookies používame na zlepšenie stránky a analýzu návštevnosti. Kliknutím na „Prijať všetko“ súhlasíte s ich použitím.",
        customize: "Prispôsobiť nastavenia",
        necessary: "Nevyhnutné cookies",
        necessary_desc: "Potrebné na fungovanie stránky. Nedajú sa vypnúť.",
        analytics: "Analytické cookies",
        analytics_desc: "Pomáhajú nám pochopiť, ako návštevníci stránku používajú.",
        marketing: "Marketingové cookies",
        marketing_desc: "Slúžia na zobrazovanie relevantnej reklamy.",
        accept_all: "Prijať všetko",
        necessary_only: "Iba nevyhnutné",
        save_preferences: "Uložiť nastavenia",
        privacy_policy: "Zásady ochrany súkromia",
        close: "Zavrieť",
    },
    footer: FooterText {
        tagline: "Mobilný pneuservis pre nákladné vozidlá na Slovensku, v Nemecku a Rakúsku.",
        contact_title: "Kontakt",
        rights: "Všetky práva vyhradené.",
        cookie_settings: "Nastavenia cookies",
    },
    privacy: PrivacyText {
        title: "Ochrana súkromia",
        intro: "Údaje z kontaktného formulára používame iba na vybavenie vašej požiadavky.",
        data_title: "Aké údaje spracúvame",
        data_body: "Meno, telefón, e-mail, typ služby a text správy, ktoré nám sami pošlete.",
        cookies_title: "Cookies",
        cookies_body: "Nevyhnutné cookies sú vždy zapnuté. Analytické a marketingové cookies zapíname iba s vaším súhlasom.",
        storage_title: "Lokálne úložisko",
        storage_body: "Vo vašom prehliadači ukladáme zvolený jazyk a vaše nastavenia cookies.",
        back: "Späť na úvod",
    },
};

pub static EN: Dictionary = Dictionary {
    nav: NavText {
        home: "Home",
        products: "Tires",
        contact: "Contact",
        privacy: "Privacy",
    },
    hero: HeroText {
        trust_signature: "Trusted partner",
        title: "24/7 mobile tire service for commercial trucks",
        subtitle: "We come to you on the highway, at the depot or in the parking lot. Tire replacement and repair without towing.",
        cta_primary: "Call now",
        cta_secondary: "Browse tire catalog",
        contact_via: "Message us via",
        emergency: "Emergency line 24/7",
        messenger_greeting: "Hello, I need help with a tire.",
    },
    badges: [
        "49+ years of experience",
        "ECE certified",
        "LINGLONG partner",
        "ISO 9001",
        "6 year warranty",
        "DOT certified",
    ],
    products: ProductsText {
        title: "Tires for every route",
        subtitle: "Certified tires for long-haul, mixed and urban operation.",
        cta: "I'm interested",
        categories: [
            ProductText {
                name: "Highway S23",
                description: "Steer axle tire for long-haul transport with low rolling resistance.",
                usage: "Highway",
            },
            ProductText {
                name: "Highway T22",
                description: "Trailer tire with high load capacity and even wear.",
                usage: "Highway",
            },
            ProductText {
                name: "Mixed S21",
                description: "Tough tread for a mix of asphalt and unpaved roads.",
                usage: "Mixed service",
            },
            ProductText {
                name: "Urban G21",
                description: "Built for city distribution with frequent braking and turning.",
                usage: "Urban",
            },
            ProductText {
                name: "Coach G21",
                description: "Quiet, comfortable ride for coaches and intercity lines.",
                usage: "Coaches",
            },
        ],
    },
    contact: ContactText {
        title: "Contact us",
        subtitle: "Fill in the form and we will get back to you within 30 minutes.",
        info_title: "Contact details",
        address: "Priemyselná 12, 917 01 Trnava, Slovakia",
        response_title: "24/7 support",
        response_description: "When you break down on the road we are usually on site within 90 minutes.",
        form: FormText {
            name: "Name",
            name_placeholder: "John Doe",
            phone: "Phone",
            phone_placeholder: "+421 900 000 000",
            email: "Email",
            email_placeholder: "john.doe@company.com",
            service_type: "Service type",
            service_type_placeholder: "Select a service",
            message: "Message",
            message_placeholder: "Tell us what you need help with",
            submit: "Send",
            submitting: "Sending...",
            success: "Thank you! We will contact you shortly.",
            error: "Your message could not be sent. Please try again.",
        },
        service_types: ServiceTypeText {
            mobile: "Mobile service",
            emergency: "Emergency replacement",
            consultation: "Consultation",
            purchase: "Tire purchase",
            other: "Other",
        },
    },
    validation: ValidationText {
        name_required: "Name is required",
        name_too_short: "Name must be at least {min} characters",
        name_too_long: "Name must be at most {max} characters",
        name_invalid: "Name can only contain letters",
        phone_required: "Phone number is required",
        phone_invalid: "Please enter a valid phone number",
        email_required: "Email is required",
        email_invalid: "Please enter a valid email address",
        service_type_required: "Please select a service type",
        service_type_invalid: "Unknown service type",
        message_required: "Message is required",
        message_too_short: "Message must be at least {min} characters",
        message_too_long: "Message must be at most {max} characters",
    },
    cookies: CookieText {
        title: "Cookie settings",
        subtitle: "We respect your privacy",
        description: "We use cookies to improve the site and analyze our traffic. By clicking \"Accept all\" you consent to our use of cookies.",
        customize: "Customize settings",
        necessary: "Necessary cookies",
        necessary_desc: "Essential for the website to work. Cannot be disabled.",
        analytics: "Analytics cookies",
        analytics_desc: "Help us understand how visitors use the website.",
        marketing: "Marketing cookies",
        marketing_desc: "Used to show relevant advertising.",
        accept_all: "Accept all",
        necessary_only: "Necessary only",
        save_preferences: "Save preferences",
        privacy_policy: "Read our privacy policy",
        close: "Close",
    },
    footer: FooterText {
        tagline: "Mobile tire service for commercial trucks in Slovakia, Germany and Austria.",
        contact_title: "Contact",
        rights: "All rights reserved.",
        cookie_settings: "Cookie settings",
    },
    privacy: PrivacyText {
        title: "Privacy",
        intro: "We only use the data from the contact form to handle your request.",
        data_title: "What we process",
        data_body: "The name, phone, email, service type and message you send us.",
        cookies_title: "Cookies",
        cookies_body: "Necessary cookies are always on. Analytics and marketing cookies are only enabled with your consent.",
        storage_title: "Local storage",
        storage_body: "Your browser keeps the selected language and your cookie settings.",
        back: "Back to home",
    },
};

pub static DE: Dictionary = Dictionary {
    nav: NavText {
        home: "Start",
        products: "Reifen",
        contact: "Kontakt",
        privacy: "Datenschutz",
    },
    hero: HeroText {
        trust_signature: "Geprüfter Partner",
        title: "Mobiler LKW-Reifenservice rund um die Uhr",
        subtitle: "Wir kommen zu Ihnen auf die Autobahn, ins Depot oder auf den Parkplatz. Reifenwechsel und Reparatur ohne Abschleppen.",
        cta_primary: "Jetzt anrufen",
        cta_secondary: "Reifenkatalog ansehen",
        contact_via: "Schreiben Sie uns über",
        emergency: "Notfall-Hotline 24/7",
        messenger_greeting: "Guten Tag, ich brauche Hilfe mit einem Reifen.",
    },
    badges: [
        "49+ Jahre Erfahrung",
        "ECE-zertifiziert",
        "LINGLONG Partner",
        "ISO 9001",
        "6 Jahre Garantie",
        "DOT-zertifiziert",
    ],
    products: ProductsText {
        title: "Reifen für jede Strecke",
        subtitle: "Zertifizierte Reifen für Fernverkehr, Mischbetrieb und Stadtverkehr.",
        cta: "Anfrage senden",
        categories: [
            ProductText {
                name: "Highway S23",
                description: "Lenkachsreifen für den Fernverkehr mit geringem Rollwiderstand.",
                usage: "Autobahn",
            },
            ProductText {
                name: "Highway T22",
                description: "Aufliegerreifen mit hoher Tragfähigkeit und gleichmäßigem Verschleiß.",
                usage: "Autobahn",
            },
            ProductText {
                name: "Mixed S21",
                description: "Robustes Profil für Asphalt und unbefestigte Wege.",
                usage: "Mischbetrieb",
            },
            ProductText {
                name: "Urban G21",
                description: "Für den Verteilerverkehr in der Stadt mit häufigem Bremsen und Abbiegen.",
                usage: "Stadt",
            },
            ProductText {
                name: "Coach G21",
                description: "Leiser, komfortabler Lauf für Reisebusse und Fernlinien.",
                usage: "Busse",
            },
        ],
    },
    contact: ContactText {
        title: "Kontakt aufnehmen",
        subtitle: "Füllen Sie das Formular aus, wir melden uns innerhalb von 30 Minuten.",
        info_title: "Kontaktdaten",
        address: "Priemyselná 12, 917 01 Trnava, Slowakei",
        response_title: "Support rund um die Uhr",
        response_description: "Bei einer Panne sind wir meist innerhalb von 90 Minuten vor Ort.",
        form: FormText {
            name: "Name",
            name_placeholder: "Max Mustermann",
            phone: "Telefon",
            phone_placeholder: "+49 170 0000000",
            email: "E-Mail",
            email_placeholder: "max@firma.de",
            service_type: "Leistung",
            service_type_placeholder: "Leistung auswählen",
            message: "Nachricht",
            message_placeholder: "Beschreiben Sie, wobei wir helfen können",
            submit: "Senden",
            submitting: "Wird gesendet...",
            success: "Vielen Dank! Wir melden uns in Kürze.",
            error: "Die Nachricht konnte nicht gesendet werden. Bitte versuchen Sie es erneut.",
        },
        service_types: ServiceTypeText {
            mobile: "Mobiler Service",
            emergency: "Notfallwechsel",
            consultation: "Beratung",
            purchase: "Reifenkauf",
            other: "Sonstiges",
        },
    },
    validation: ValidationText {
        name_required: "Name ist erforderlich",
        name_too_short: "Der Name muss mindestens {min} Zeichen lang sein",
        name_too_long: "Der Name darf höchstens {max} Zeichen lang sein",
        name_invalid: "Der Name darf nur Buchstaben enthalten",
        phone_required: "Telefonnummer ist erforderlich",
        phone_invalid: "Bitte geben Sie eine gültige Telefonnummer ein",
        email_required: "E-Mail ist erforderlich",
        email_invalid: "Bitte geben Sie eine gültige E-Mail-Adresse ein",
        service_type_required: "Bitte wählen Sie eine Leistung",
        service_type_invalid: "Unbekannte Leistung",
        message_required: "Nachricht ist erforderlich",
        message_too_short: "Die Nachricht muss mindestens {min} Zeichen lang sein",
        message_too_long: "Die Nachricht darf höchstens {max} Zeichen lang sein",
    },
    cookies: CookieText {
        title: "Cookie-Einstellungen",
        subtitle: "Wir respektieren Ihre Privatsphäre",
        description: "Wir verwenden Cookies, um die Website zu verbessern und den Verkehr zu analysieren. Mit „Alle akzeptieren“ stimmen Sie der Verwendung zu.",
        customize: "Einstellungen anpassen",
        necessary: "Notwendige Cookies",
        necessary_desc: "Für den Betrieb der Website erforderlich. Nicht deaktivierbar.",
        analytics: "Analyse-Cookies",
        analytics_desc: "Helfen uns zu verstehen, wie Besucher die Website nutzen.",
        marketing: "Marketing-Cookies",
        marketing_desc: "Werden für relevante Werbung verwendet.",
        accept_all: "Alle akzeptieren",
        necessary_only: "Nur notwendige",
        save_preferences: "Einstellungen speichern",
        privacy_policy: "Datenschutzerklärung lesen",
        close: "Schließen",
    },
    footer: FooterText {
        tagline: "Mobiler Reifenservice für Nutzfahrzeuge in der Slowakei, Deutschland und Österreich.",
        contact_title: "Kontakt",
        rights: "Alle Rechte vorbehalten.",
        cookie_settings: "Cookie-Einstellungen",
    },
    privacy: PrivacyText {
        title: "Datenschutz",
        intro: "Daten aus dem Kontaktformular verwenden wir nur zur Bearbeitung Ihrer Anfrage.",
        data_title: "Welche Daten wir verarbeiten",
        data_body: "Name, Telefon, E-Mail, Leistung und Nachricht, die Sie uns senden.",
        cookies_title: "Cookies",
        cookies_body: "Notwendige Cookies sind immer aktiv. Analyse- und Marketing-Cookies nur mit Ihrer Zustimmung.",
        storage_title: "Lokaler Speicher",
        storage_body: "Ihr Browser speichert die gewählte Sprache und Ihre Cookie-Einstellungen.",
        back: "Zurück zur Startseite",
    },
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    #[test]
    fn locale_codes_round_trip() {
        for locale in Locale::ALL {
            assert_eq!(Locale::from_code(locale.code()), Some(locale));
        }
        assert_eq!(Locale::from_code("EN"), Some(Locale::En));
        assert_eq!(Locale::from_code("fr"), None);
    }

    #[test]
    fn unknown_or_missing_locale_falls_back_to_slovak() {
        let storage = MemoryStorage::new();
        assert_eq!(load_locale(&storage), Locale::Sk);

        storage.set(LOCALE_KEY, "xx").unwrap();
        assert_eq!(load_locale(&storage), Locale::Sk);
    }

    #[test]
    fn saved_locale_is_loaded() {
        let storage = MemoryStorage::new();
        save_locale(&storage, Locale::De).unwrap();
        assert_eq!(storage.get(LOCALE_KEY).as_deref(), Some("de"));
        assert_eq!(load_locale(&storage), Locale::De);
    }

    #[test]
    fn fill_replaces_placeholder() {
        assert_eq!(
            fill(EN.validation.name_too_short, "min", 2),
            "Name must be at least 2 characters"
        );
        assert_eq!(fill("no placeholder", "max", 3), "no placeholder");
    }

    #[test]
    fn every_locale_has_its_own_dictionary() {
        assert_ne!(Locale::Sk.dictionary(), Locale::En.dictionary());
        assert_ne!(Locale::En.dictionary(), Locale::De.dictionary());
        assert_eq!(Locale::De.dictionary().contact.form.submit, "Senden");
    }
}
