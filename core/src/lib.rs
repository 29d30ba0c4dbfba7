//! Interaction state layer for the Northline Solutions site.
//!
//! Five independent controllers, each owning one narrow slice of UI
//! state: the lead-capture form, the FAQ accordion, the navbar scroll
//! flag, the hero card tilt and the viewport-reveal animation. They
//! never call each other; the frontend mounts them side by side and
//! re-renders from their current values.

pub mod disclosure;
pub mod form;
pub mod reveal;
pub mod scroll;
pub mod store;
pub mod tilt;
pub mod transition;

pub use disclosure::Disclosure;
pub use form::{
    FormController, FormFields, LeadPayload, SubmissionError, SubmissionStatus, TextField,
    ValidationError,
};
pub use reveal::Reveal;
pub use scroll::ScrollState;
pub use store::{Store, Subscription};
pub use tilt::{ElementRect, Tilt};
pub use transition::{Phase, Transition};
