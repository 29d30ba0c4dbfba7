use chrono::{Datelike, Utc};
use yew::prelude::*;

use super::reveal::RevealOnView;

#[function_component(Trust)]
pub fn trust() -> Html {
    html! {
        <section class="section trust">
            <div class="container trust-strip">
                { for (1..=5).map(|n| html! {
                    <span class="trust-logo">{format!("Partner {n}")}</span>
                }) }
            </div>
        </section>
    }
}

struct Service {
    title: &'static str,
    body: &'static str,
    points: [&'static str; 3],
}

const SERVICES: [Service; 4] = [
    Service {
        title: "24/7 Digitale Receptionist",
        body: "Neem elke oproep professioneel aan, dag en nacht. Basisvragen worden \
               direct beantwoord en belangrijke oproepen worden doorgezet.",
        points: [
            "Openingstijden & prijzen",
            "Route & locatie",
            "Doorverbinden naar de juiste persoon",
        ],
    },
    Service {
        title: "Afspraken Plannen",
        body: "Realtime beschikbaarheid, directe bevestigingen en automatische \
               reminders. Minder no-shows, meer structuur in de dag.",
        points: [
            "Integratie met jouw agenda",
            "SMS/e-mail bevestiging",
            "Herinneringen",
        ],
    },
    Service {
        title: "Klantvragen Afhandelen",
        body: "Korte, duidelijke antwoorden op veelgestelde vragen zodat klanten \
               niet hoeven te wachten en jij kunt doorwerken.",
        points: ["Tarieven & menu's", "Beleid & voorwaarden", "Basisadvies"],
    },
    Service {
        title: "Slim Doorverbinden",
        body: "Wanneer het echt moet, schakelt de AI door naar jou of je team. Met \
               context, zodat je meteen weet waar het over gaat.",
        points: [
            "Escalaties met notities",
            "Tijdvensters instellen",
            "Voorkeursnummers",
        ],
    },
];

#[function_component(Services)]
pub fn services() -> Html {
    html! {
        <section id="services" class="section">
            <div class="container narrow">
                <h2>{"Wat we voor je doen"}</h2>
                <p class="section-sub">
                    {"Eén aanspreekpunt voor je telefonie. Professioneel, rustig en altijd beschikbaar."}
                </p>
            </div>
            <div class="container services-grid">
                { for SERVICES.iter().map(|service| html! {
                    <RevealOnView class={classes!("card")}>
                        <div class="service-icon"></div>
                        <h3>{service.title}</h3>
                        <p>{service.body}</p>
                        <ul>
                            { for service.points.iter().map(|point| html! { <li>{*point}</li> }) }
                        </ul>
                    </RevealOnView>
                }) }
            </div>
        </section>
    }
}

const STEPS: [(&str, &str, &str); 4] = [
    (
        "01",
        "Inventarisatie",
        "We zetten samen een script en kennisbank op: tone-of-voice, prijzen, \
         openingstijden en veelgestelde vragen.",
    ),
    (
        "02",
        "Integratie",
        "We koppelen je agenda en telefonie. In 7 dagen staat alles live en getest.",
    ),
    (
        "03",
        "Livegang",
        "Vanaf nu worden oproepen direct opgepakt. Belangrijke gesprekken worden doorgezet.",
    ),
    (
        "04",
        "Optimalisatie",
        "Maandelijkse check-in met verbeteringen op basis van echte gesprekken en \
         conversiedata.",
    ),
];

#[function_component(HowItWorks)]
pub fn how_it_works() -> Html {
    html! {
        <section id="how-it-works" class="section">
            <div class="container narrow">
                <h2>{"Zo werkt het"}</h2>
                <p class="section-sub">{"Snel, helder en zonder gedoe. Binnen 7 dagen live."}</p>
            </div>
            <div class="container steps">
                { for STEPS.iter().map(|(number, title, body)| html! {
                    <RevealOnView class={classes!("step")}>
                        <div class="step-number">{*number}</div>
                        <div class="card">
                            <h3>{*title}</h3>
                            <p>{*body}</p>
                        </div>
                    </RevealOnView>
                }) }
            </div>
        </section>
    }
}

#[function_component(Benefits)]
pub fn benefits() -> Html {
    let stats = [
        ("-38%", "minder gemiste oproepen"),
        ("+22%", "meer boekingen in maand 1"),
        ("<60s", "gem. wachttijd naar 0"),
        ("24/7", "altijd bereikbaar"),
    ];
    html! {
        <section class="section">
            <div class="container stats-grid">
                { for stats.iter().map(|(figure, caption)| html! {
                    <div class="stat card">
                        <div class="stat-figure">{*figure}</div>
                        <div class="stat-caption">{*caption}</div>
                    </div>
                }) }
            </div>
        </section>
    }
}

#[function_component(Pricing)]
pub fn pricing() -> Html {
    html! {
        <section id="pricing" class="section">
            <div class="container narrow">
                <h2>{"Transparante prijs"}</h2>
                <p class="section-sub">{"30 dagen geld terug • Binnen 7 dagen live"}</p>
            </div>
            <div class="container pricing-grid">
                <div class="card">
                    <h3>{"Northline Essentials"}</h3>
                    <p>
                        {"Alles wat je nodig hebt om nooit meer een oproep te missen. \
                          Ideaal voor salons, praktijken en lokale services."}
                    </p>
                    <div class="price-line">
                        <span class="price">{"€299"}</span>
                        <span class="price-period">{"/ maand"}</span>
                    </div>
                    <div class="price-setup">{"+ eenmalig €599 setup"}</div>
                    <ul>
                        <li>{"24/7 beantwoording"}</li>
                        <li>{"Afspraken plannen"}</li>
                        <li>{"Doorverbinden / escaleren"}</li>
                        <li>{"Basiskennisbank en scripts"}</li>
                        <li>{"Rapportage & verbeteringen"}</li>
                    </ul>
                    <a href="#contact" class="button-primary">{"Start met een demo"}</a>
                </div>
                <div class="card">
                    <h3>{"Veelgestelde vragen"}</h3>
                    <dl class="mini-faq">
                        <dt>{"Kan ik maandelijks opzeggen?"}</dt>
                        <dd>{"Ja, je zit nergens aan vast."}</dd>
                        <dt>{"Hoe snel zijn we live?"}</dt>
                        <dd>{"Binnen 7 dagen na intake en integratie."}</dd>
                        <dt>{"Werkt dit met mijn agenda?"}</dt>
                        <dd>{"Ja, we koppelen o.a. Google/Outlook en populaire salonsoftware."}</dd>
                        <dt>{"Wat als het niet bevalt?"}</dt>
                        <dd>{"30 dagen geld terug garantie."}</dd>
                    </dl>
                </div>
            </div>
        </section>
    }
}

#[function_component(About)]
pub fn about() -> Html {
    let figures = [
        ("92%", "tevredenheid"),
        ("7 dagen", "naar live"),
        ("3 min", "setup intake"),
        ("100%", "professioneel"),
    ];
    html! {
        <section id="about" class="section">
            <div class="container about-grid">
                <div>
                    <h2>{"Onze missie"}</h2>
                    <p>
                        {"Wij helpen lokale ondernemers die veel telefoontjes krijgen maar \
                          niet altijd kunnen opnemen (zoals kappers, salons, praktijken, \
                          etc.). Onze missie: meer rust in de zaak, minder gemiste leads, en \
                          een strakke klantbeleving zonder extra personeel."}
                    </p>
                    <ul>
                        <li>{"Rust in de zaak, zelfs op piekmomenten"}</li>
                        <li>{"Geen gemiste afspraken of inkomende leads"}</li>
                        <li>{"Consistente, professionele klantbeleving"}</li>
                    </ul>
                </div>
                <div class="card stats-grid">
                    { for figures.iter().map(|(figure, caption)| html! {
                        <div class="stat">
                            <div class="stat-figure">{*figure}</div>
                            <div class="stat-caption">{*caption}</div>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(Integrations)]
pub fn integrations() -> Html {
    let items = [
        "Google Agenda",
        "Outlook",
        "Salonized",
        "Calendly",
        "Stripe",
        "Twilio",
    ];
    html! {
        <section id="integrations" class="section">
            <div class="container narrow">
                <h2>{"Koppelingen"}</h2>
                <p class="section-sub">{"Werkt samen met je favoriete tools. Meer op aanvraag."}</p>
            </div>
            <div class="container integrations-grid">
                { for items.iter().map(|item| html! {
                    <div class="card integration">{*item}</div>
                }) }
            </div>
        </section>
    }
}

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    let items = [
        (
            "Marieke, salon eigenaar",
            "Sinds Northline mis ik geen afspraken meer. Klanten zijn direct geholpen \
             en ik heb mijn handen vrij.",
        ),
        (
            "Jasper, tandartspraktijk",
            "Super strak. Patiënten krijgen snel antwoord, en belangrijke gesprekken \
             worden meteen doorgeschakeld.",
        ),
        (
            "Lotte, praktijkmanager",
            "Binnen een week live en sindsdien rust aan de telefoon. Duidelijke \
             rapportages ook.",
        ),
    ];
    html! {
        <section class="section">
            <div class="container narrow">
                <h2>{"Wat klanten zeggen"}</h2>
                <p class="section-sub">{"Echte resultaten, elke dag."}</p>
            </div>
            <div class="container testimonials-grid">
                { for items.iter().map(|(name, quote)| html! {
                    <div class="card">
                        <p>{format!("\u{201c}{quote}\u{201d}")}</p>
                        <div class="testimonial-name">{*name}</div>
                    </div>
                }) }
            </div>
        </section>
    }
}

#[function_component(CtaBand)]
pub fn cta_band() -> Html {
    html! {
        <section class="section">
            <div class="container">
                <div class="card cta-band">
                    <div>
                        <h3>{"Klaar om geen leads meer te missen?"}</h3>
                        <p>{"Plan een korte demo — we laten zien hoe jouw bedrijf binnen 7 dagen live kan."}</p>
                    </div>
                    <a href="#contact" class="button-primary">{"Plan een demo"}</a>
                </div>
            </div>
        </section>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Utc::now().year();
    html! {
        <footer class="footer">
            <div class="container footer-grid">
                <div>
                    <div class="brand">
                        <span class="brand-mark"></span>
                        <span class="brand-name">{"Northline Solutions"}</span>
                    </div>
                    <p>{"Altijd bereikbaar. Altijd professioneel."}</p>
                </div>
                <div>
                    <div class="footer-heading">{"Navigatie"}</div>
                    <ul>
                        <li><a href="#services">{"Diensten"}</a></li>
                        <li><a href="#how-it-works">{"Zo werkt het"}</a></li>
                        <li><a href="#pricing">{"Prijs"}</a></li>
                        <li><a href="#faq">{"FAQ"}</a></li>
                        <li><a href="#contact">{"Contact"}</a></li>
                    </ul>
                </div>
                <div>
                    <div class="footer-heading">{"Contact"}</div>
                    <ul>
                        <li>{"info@northlinesolutions.nl"}</li>
                        <li>{"KVK — n.t.b."}</li>
                        <li>{format!("© {year} Northline Solutions")}</li>
                    </ul>
                </div>
            </div>
        </footer>
    }
}
