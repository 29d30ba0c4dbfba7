use northline_core::reveal::REVEAL_THRESHOLD;
use northline_core::Reveal;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub class: Classes,
    pub children: Children,
}

/// Wrapper that slides its content up and fades it in the first time
/// at least 20% of it scrolls into the viewport. The flag is
/// monotonic: leaving the viewport later neither hides the content nor
/// replays the transition.
#[function_component(RevealOnView)]
pub fn reveal_on_view(props: &RevealProps) -> Html {
    let reveal = use_state(Reveal::default);
    let node_ref = use_node_ref();

    {
        let reveal = reveal.clone();
        let node_ref = node_ref.clone();
        use_effect_with_deps(
            move |_| {
                let mut observer_slot = None;
                if let Some(element) = node_ref.cast::<Element>() {
                    let callback = Closure::<dyn Fn(js_sys::Array, IntersectionObserver)>::new({
                        let reveal = reveal.clone();
                        move |entries: js_sys::Array, observer: IntersectionObserver| {
                            for entry in entries.iter() {
                                let entry: IntersectionObserverEntry = entry.unchecked_into();
                                // The observer fires on crossing its 20%
                                // threshold, so intersecting here means the
                                // visible fraction reached it.
                                if entry.is_intersecting() {
                                    let mut next = *reveal;
                                    next.observe(REVEAL_THRESHOLD);
                                    reveal.set(next);
                                    observer.unobserve(&entry.target());
                                }
                            }
                        }
                    });
                    let options = IntersectionObserverInit::new();
                    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
                    if let Ok(observer) = IntersectionObserver::new_with_options(
                        callback.as_ref().unchecked_ref(),
                        &options,
                    ) {
                        observer.observe(&element);
                        observer_slot = Some(observer);
                    }
                    callback.forget();
                }
                move || {
                    if let Some(observer) = observer_slot {
                        observer.disconnect();
                    }
                }
            },
            (),
        );
    }

    html! {
        <div
            ref={node_ref}
            class={classes!(
                "reveal",
                reveal.has_revealed().then_some("revealed"),
                props.class.clone()
            )}
        >
            { for props.children.iter() }
        </div>
    }
}
