use northline_core::{ElementRect, Tilt};
use web_sys::{HtmlElement, MouseEvent};
use yew::prelude::*;

/// Hero section with the tilting product card: the card leans toward
/// the cursor while the pointer moves over it and snaps flat on leave.
#[function_component(Hero)]
pub fn hero() -> Html {
    let tilt = use_state(Tilt::default);
    let card_ref = use_node_ref();

    let onmousemove = {
        let tilt = tilt.clone();
        let card_ref = card_ref.clone();
        Callback::from(move |event: MouseEvent| {
            if let Some(card) = card_ref.cast::<HtmlElement>() {
                let rect = card.get_bounding_client_rect();
                tilt.set(Tilt::from_pointer(
                    event.client_x() as f64,
                    event.client_y() as f64,
                    ElementRect {
                        left: rect.left(),
                        top: rect.top(),
                        width: rect.width(),
                        height: rect.height(),
                    },
                ));
            }
        })
    };
    let onmouseleave = {
        let tilt = tilt.clone();
        Callback::from(move |_: MouseEvent| tilt.set(Tilt::reset()))
    };

    let card_style = format!(
        "transform: perspective(900px) rotateX({:.3}deg) rotateY({:.3}deg);",
        tilt.rotate_x, tilt.rotate_y
    );

    html! {
        <section id="home" class="hero">
            <div class="container">
                <div class="hero-copy">
                    <h1>{"Altijd bereikbaar. Altijd professioneel."}</h1>
                    <p class="hero-intro">
                        {"Laat je telefoon voor je werken. Wij zorgen dat klanten direct \
                          geholpen worden — ook als jij druk bent."}
                    </p>
                    <p class="hero-sub">
                        {"Geen wachtrijen, geen gemiste afspraken. Klanten krijgen meteen \
                          een duidelijk antwoord en kunnen direct inplannen."}
                    </p>
                    <div class="hero-cta-group">
                        <a href="#contact" class="button-primary">{"Plan een demo"}</a>
                        <a href="#services" class="button-secondary">{"Ontdek de diensten"}</a>
                    </div>
                </div>

                <div
                    ref={card_ref}
                    class="product-card"
                    style={card_style}
                    {onmousemove}
                    {onmouseleave}
                >
                    <div class="product-card-text">
                        <span class="pill">{"24/7 digitale receptionist"}</span>
                        <h3>{"Nooit meer een gemiste lead"}</h3>
                        <ul>
                            <li>{"Afspraken plannen in jouw agenda"}</li>
                            <li>{"Klantvragen direct beantwoord"}</li>
                            <li>{"Slim doorverbinden of escaleren naar het team"}</li>
                        </ul>
                        <div class="product-card-links">
                            <a href="#pricing">{"Bekijk prijs →"}</a>
                            <a href="#how-it-works">{"Hoe het werkt"}</a>
                        </div>
                    </div>
                    <div class="mock-panel">
                        <div class="mock-panel-header">
                            <span class="status-dot"></span>
                            <span>{"AI Reception"}</span>
                            <span class="mock-live">{"Live"}</span>
                        </div>
                        <div class="mock-chat">
                            <div class="mock-msg customer">{"Klant: \"Kan ik morgen om 10:00 langskomen?\""}</div>
                            <div class="mock-msg agent">{"Northline AI: \"Ik zie beschikbaarheid om 10:00. Zal ik die voor u vastleggen?\""}</div>
                            <div class="mock-msg customer">{"Klant: \"Top! En wat kost een standaardbehandeling?\""}</div>
                            <div class="mock-msg agent">{"Northline AI: \"De standaardbehandeling kost €49. Ik heb u ingepland. U ontvangt zo een bevestiging.\""}</div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
