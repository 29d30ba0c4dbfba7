use northline_core::ScrollState;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

/// Fixed navbar that swaps to a solid backdrop once the page has been
/// scrolled past the threshold.
#[function_component(Navbar)]
pub fn navbar() -> Html {
    let scroll = use_state(ScrollState::default);
    {
        let scroll = scroll.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let callback = Closure::<dyn Fn()>::new({
                        let scroll = scroll.clone();
                        move || {
                            if let Some(win) = web_sys::window() {
                                if let Ok(offset) = win.scroll_y() {
                                    scroll.set(ScrollState::from_offset(offset));
                                }
                            }
                        }
                    });
                    window
                        .add_event_listener_with_callback(
                            "scroll",
                            callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                    // Evaluate once at mount so a page loaded mid-scroll
                    // renders the solid state immediately.
                    if let Ok(offset) = window.scroll_y() {
                        scroll.set(ScrollState::from_offset(offset));
                    }
                    Box::new(move || {
                        if let Some(win) = web_sys::window() {
                            win.remove_event_listener_with_callback(
                                "scroll",
                                callback.as_ref().unchecked_ref(),
                            )
                            .unwrap();
                        }
                    })
                } else {
                    Box::new(|| ())
                };
                move || {
                    destructor();
                }
            },
            (),
        );
    }

    let links = [
        ("#services", "Diensten"),
        ("#how-it-works", "Zo werkt het"),
        ("#pricing", "Prijs"),
        ("#faq", "FAQ"),
        ("#contact", "Contact"),
    ];

    html! {
        <div class={classes!("navbar", scroll.crossed.then_some("scrolled"))}>
            <div class="container navbar-inner">
                <a href="#" class="brand">
                    <span class="brand-mark"></span>
                    <span class="brand-name">{"Northline Solutions"}</span>
                </a>
                <nav class="nav-links">
                    { for links.iter().map(|(href, label)| html! {
                        <a href={*href}>{*label}</a>
                    }) }
                </nav>
                <a href="#contact" class="button-primary nav-cta">{"Plan een demo"}</a>
            </div>
        </div>
    }
}
