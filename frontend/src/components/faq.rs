use std::rc::Rc;

use gloo_timers::callback::Timeout;
use northline_core::transition::TRANSITION_DURATION_MS;
use northline_core::{Disclosure, Phase, Transition};
use web_sys::MouseEvent;
use yew::prelude::*;

/// Delay before the settle step, long enough for the collapsed enter
/// frame to paint so the CSS transition has something to animate from.
const ENTER_FRAME_MS: u32 = 20;

/// The answer body's mount/unmount transition. Timer steps go through
/// the reducer so they always apply to the current phase; a stale
/// timeout after a quick re-toggle becomes a no-op.
#[derive(Clone, Copy, PartialEq, Eq)]
struct AnswerTransition(Transition);

enum AnswerAction {
    Open,
    Opened,
    Close,
    Closed,
}

impl Reducible for AnswerTransition {
    type Action = AnswerAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = self.0;
        match action {
            AnswerAction::Open => next.enter(),
            AnswerAction::Opened => next.settle(),
            AnswerAction::Close => next.exit(),
            AnswerAction::Closed => next.finish(),
        }
        Rc::new(Self(next))
    }
}

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    index: usize,
    question: &'static str,
    answer: &'static str,
    open: bool,
    on_toggle: Callback<usize>,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let transition = use_reducer(|| AnswerTransition(Transition::hidden()));

    {
        let transition = transition.clone();
        use_effect_with_deps(
            move |open: &bool| {
                if *open {
                    transition.dispatch(AnswerAction::Open);
                    let transition = transition.clone();
                    let timeout = Timeout::new(ENTER_FRAME_MS, move || {
                        transition.dispatch(AnswerAction::Opened);
                    });
                    timeout.forget();
                } else {
                    transition.dispatch(AnswerAction::Close);
                    let transition = transition.clone();
                    let timeout = Timeout::new(TRANSITION_DURATION_MS, move || {
                        transition.dispatch(AnswerAction::Closed);
                    });
                    timeout.forget();
                }
                || ()
            },
            props.open,
        );
    }

    let toggle = {
        let on_toggle = props.on_toggle.clone();
        let index = props.index;
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(index);
        })
    };

    let answer = match transition.0.phase() {
        Some(Phase::Settled) => html! {
            <div class="faq-answer open"><p>{props.answer}</p></div>
        },
        Some(Phase::Entering) | Some(Phase::Exiting) => html! {
            <div class="faq-answer"><p>{props.answer}</p></div>
        },
        None => html! {},
    };

    html! {
        <div class={classes!("faq-item", props.open.then_some("expanded"))}>
            <button class="faq-question" onclick={toggle}>
                <span>{props.question}</span>
                <span class="toggle-icon">{if props.open { "−" } else { "+" }}</span>
            </button>
            { answer }
        </div>
    }
}

const ITEMS: [(&str, &str); 4] = [
    (
        "Begrijpt de AI mijn bedrijfsregels?",
        "Jazeker. Tijdens de intake zetten we alles strak in de kennisbank: \
         prijzen, uitzonderingen, beleid en tone-of-voice.",
    ),
    (
        "Hoe gaan jullie om met privacy?",
        "We verwerken alleen noodzakelijke gegevens, slaan zo min mogelijk op \
         en richten dataverwerking in conform AVG.",
    ),
    (
        "Kunnen jullie speciale flows bouwen?",
        "Ja. Denk aan intakevragen, wachtlijsten, vooraf betalingen, of \
         specifieke doorverbindregels per tijdstip.",
    ),
    (
        "Welke talen?",
        "Standaard Nederlands en Engels. Andere talen op aanvraag mogelijk.",
    ),
];

/// FAQ accordion: one open answer at most, first item open on load.
#[function_component(Faq)]
pub fn faq() -> Html {
    let disclosure = use_state(Disclosure::new);

    let on_toggle = {
        let disclosure = disclosure.clone();
        Callback::from(move |index: usize| {
            let mut next = *disclosure;
            next.toggle(index);
            disclosure.set(next);
        })
    };

    html! {
        <section id="faq" class="section">
            <div class="container narrow">
                <h2>{"Veelgestelde vragen"}</h2>
                <p class="section-sub">{"Transparant en helder — zo werken we."}</p>
                <div class="faq-list">
                    { for ITEMS.iter().enumerate().map(|(index, (question, answer))| html! {
                        <FaqItem
                            key={index}
                            {index}
                            question={*question}
                            answer={*answer}
                            open={disclosure.is_open(index)}
                            on_toggle={on_toggle.clone()}
                        />
                    }) }
                </div>
            </div>
        </section>
    }
}
