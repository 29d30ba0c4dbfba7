use northline_core::reveal::{REVEAL_DURATION_MS, REVEAL_HIDDEN_OFFSET_PX};
use northline_core::transition::TRANSITION_DURATION_MS;
use yew::prelude::*;

use crate::components::contact::Contact;
use crate::components::faq::Faq;
use crate::components::hero::Hero;
use crate::components::navbar::Navbar;
use crate::components::sections::{
    About, Benefits, CtaBand, Footer, HowItWorks, Integrations, Pricing, Services, Testimonials,
    Trust,
};

const BASE_CSS: &str = r#"
    * { box-sizing: border-box; }
    body {
        margin: 0;
        font-family: -apple-system, "Segoe UI", Helvetica, Arial, sans-serif;
        color: #0b0f19;
        background: #fff;
        -webkit-font-smoothing: antialiased;
    }
    a { color: inherit; text-decoration: none; }
    h1 { font-size: 3rem; letter-spacing: -0.02em; margin: 0 0 1rem; }
    h2 { font-size: 2rem; letter-spacing: -0.01em; margin: 0 0 0.5rem; }
    .container { max-width: 1100px; margin: 0 auto; padding: 0 1.5rem; }
    .container.narrow { max-width: 720px; text-align: center; }
    .section { padding: 4rem 0; }
    .section-sub { color: #4b5563; margin-top: 0; }
    .card {
        border: 1px solid #e5e7eb;
        border-radius: 16px;
        background: #fff;
        padding: 1.5rem;
        box-shadow: 0 1px 2px rgba(0, 0, 0, 0.04);
    }
    .button-primary {
        display: inline-block;
        border-radius: 999px;
        background: #111827;
        color: #fff;
        padding: 0.75rem 1.5rem;
        font-weight: 600;
        font-size: 0.9rem;
        border: none;
        cursor: pointer;
    }
    .button-primary:hover { background: #000; }
    .button-primary:disabled { background: #9ca3af; cursor: default; }
    .button-secondary {
        display: inline-block;
        border-radius: 999px;
        border: 1px solid #d1d5db;
        padding: 0.75rem 1.5rem;
        font-weight: 600;
        font-size: 0.9rem;
    }

    .navbar {
        position: fixed;
        inset: 0 0 auto 0;
        z-index: 50;
        background: transparent;
        transition: background 0.2s ease, border-color 0.2s ease;
        border-bottom: 1px solid transparent;
    }
    .navbar.scrolled {
        background: rgba(255, 255, 255, 0.75);
        backdrop-filter: blur(8px);
        border-bottom-color: #e5e7eb;
    }
    .navbar-inner { display: flex; align-items: center; justify-content: space-between; padding: 1rem 1.5rem; }
    .brand { display: flex; align-items: center; gap: 0.75rem; font-weight: 600; }
    .brand-mark { width: 2rem; height: 2rem; border-radius: 8px; background: #000; display: inline-block; }
    .nav-links { display: flex; gap: 1.75rem; font-size: 0.9rem; color: #4b5563; }
    .nav-links a:hover { color: #111827; }

    .hero { padding: 9rem 0 3rem; }
    .hero-copy { max-width: 760px; margin: 0 auto; text-align: center; }
    .hero-intro { font-size: 1.2rem; color: #4b5563; }
    .hero-sub { color: #6b7280; }
    .hero-cta-group { display: flex; gap: 0.75rem; justify-content: center; margin-top: 2rem; }
    .product-card {
        margin: 3rem auto 0;
        max-width: 960px;
        display: grid;
        grid-template-columns: 1fr 1fr;
        gap: 2rem;
        border: 1px solid #e5e7eb;
        border-radius: 16px;
        background: #fff;
        padding: 2rem;
        box-shadow: 0 1px 3px rgba(0, 0, 0, 0.06);
        will-change: transform;
    }
    .pill {
        display: inline-block;
        background: #f3f4f6;
        color: #4b5563;
        border-radius: 999px;
        padding: 0.25rem 0.75rem;
        font-size: 0.75rem;
        font-weight: 500;
    }
    .product-card-links { display: flex; gap: 1rem; font-size: 0.9rem; margin-top: 1rem; }
    .mock-panel { border: 1px solid #e5e7eb; border-radius: 16px; padding: 1rem; }
    .mock-panel-header {
        display: flex;
        align-items: center;
        gap: 0.5rem;
        border-bottom: 1px solid #f3f4f6;
        padding-bottom: 0.75rem;
        font-size: 0.8rem;
    }
    .status-dot { width: 10px; height: 10px; border-radius: 50%; background: #22c55e; }
    .mock-live { margin-left: auto; color: #9ca3af; font-size: 0.7rem; }
    .mock-chat { display: flex; flex-direction: column; gap: 0.75rem; margin-top: 1rem; font-size: 0.85rem; color: #4b5563; }
    .mock-msg { border: 1px solid #f3f4f6; border-radius: 12px; padding: 0.75rem; }
    .mock-msg.customer { background: #f9fafb; }

    .trust-strip { display: flex; flex-wrap: wrap; justify-content: center; gap: 2rem; opacity: 0.6; }
    .trust-logo { color: #9ca3af; font-weight: 600; }
    .services-grid { display: grid; grid-template-columns: repeat(4, 1fr); gap: 1.5rem; margin-top: 3rem; }
    .service-icon { width: 2.5rem; height: 2.5rem; border-radius: 12px; background: #111827; }
    .steps { display: flex; flex-direction: column; gap: 2rem; max-width: 760px; margin: 3rem auto 0; }
    .step { display: grid; grid-template-columns: 56px 1fr; gap: 1rem; }
    .step-number {
        display: flex;
        align-items: center;
        justify-content: center;
        width: 3.5rem;
        height: 3.5rem;
        border: 1px solid #e5e7eb;
        border-radius: 16px;
        font-weight: 600;
    }
    .stats-grid { display: grid; grid-template-columns: repeat(4, 1fr); gap: 1rem; }
    .stat { text-align: center; padding: 1rem; }
    .stat-figure { font-size: 1.75rem; font-weight: 600; }
    .stat-caption { color: #4b5563; font-size: 0.9rem; }
    .pricing-grid, .contact-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 1.5rem; margin-top: 2.5rem; }
    .price-line { display: flex; align-items: baseline; gap: 0.5rem; margin-top: 1.5rem; }
    .price { font-size: 2.5rem; font-weight: 600; }
    .price-period, .price-setup { color: #6b7280; font-size: 0.9rem; }
    .mini-faq dt { font-weight: 600; font-size: 0.9rem; margin-top: 1rem; }
    .mini-faq dd { margin: 0.25rem 0 0; color: #4b5563; font-size: 0.9rem; }
    .about-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 2.5rem; align-items: center; }
    .integrations-grid { display: grid; grid-template-columns: repeat(6, 1fr); gap: 1rem; margin-top: 2.5rem; }
    .integration { display: flex; align-items: center; justify-content: center; height: 6rem; font-size: 0.85rem; font-weight: 500; }
    .testimonials-grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 1.5rem; margin-top: 2.5rem; }
    .testimonial-name { margin-top: 1rem; font-weight: 600; font-size: 0.9rem; }
    .cta-band { display: flex; align-items: center; justify-content: space-between; gap: 2rem; }

    .faq-list { margin-top: 2.5rem; border: 1px solid #e5e7eb; border-radius: 16px; text-align: left; }
    .faq-item { padding: 1.5rem; border-bottom: 1px solid #e5e7eb; }
    .faq-item:last-child { border-bottom: none; }
    .faq-question {
        display: flex;
        width: 100%;
        align-items: center;
        justify-content: space-between;
        background: none;
        border: none;
        padding: 0;
        font: inherit;
        font-weight: 600;
        cursor: pointer;
        text-align: left;
    }
    .toggle-icon { color: #9ca3af; }

    .contact-grid form { display: flex; flex-direction: column; gap: 1rem; }
    .field-row { display: grid; grid-template-columns: 1fr 1fr; gap: 1rem; }
    form label { display: flex; flex-direction: column; gap: 0.25rem; font-size: 0.9rem; font-weight: 500; }
    form input, form textarea {
        border: 1px solid #d1d5db;
        border-radius: 12px;
        padding: 0.5rem 0.75rem;
        font: inherit;
        font-weight: 400;
    }
    label.consent { flex-direction: row; align-items: center; gap: 0.75rem; font-weight: 400; color: #374151; }
    label.consent input { width: 1rem; height: 1rem; }
    .form-error { background: #fef2f2; color: #b91c1c; border-radius: 8px; padding: 0.5rem 0.75rem; font-size: 0.9rem; }
    .form-actions { display: flex; align-items: center; gap: 1rem; }
    .form-success { color: #15803d; font-size: 0.9rem; }
    .privacy-note { margin-top: 1.5rem; background: #f9fafb; border: 1px solid #e5e7eb; border-radius: 12px; padding: 1rem; font-size: 0.9rem; color: #4b5563; }

    .footer { border-top: 1px solid #e5e7eb; padding: 3rem 0; }
    .footer-grid { display: grid; grid-template-columns: 2fr 1fr 1fr; gap: 2rem; font-size: 0.9rem; color: #4b5563; }
    .footer-heading { font-weight: 600; color: #111827; margin-bottom: 0.75rem; }
    .footer ul { list-style: none; margin: 0; padding: 0; display: flex; flex-direction: column; gap: 0.5rem; }

    @media (max-width: 860px) {
        h1 { font-size: 2.25rem; }
        .nav-links, .nav-cta { display: none; }
        .product-card, .pricing-grid, .contact-grid, .about-grid, .field-row { grid-template-columns: 1fr; }
        .services-grid, .stats-grid { grid-template-columns: repeat(2, 1fr); }
        .integrations-grid, .testimonials-grid { grid-template-columns: repeat(2, 1fr); }
        .cta-band { flex-direction: column; align-items: flex-start; }
    }
"#;

/// Motion rules are generated so the durations and offsets stay the
/// controllers' constants.
fn motion_css() -> String {
    format!(
        r#"
    .reveal {{
        opacity: 0;
        transform: translateY({offset}px);
    }}
    .reveal.revealed {{
        opacity: 1;
        transform: translateY(0);
        transition: opacity {reveal}ms ease-out, transform {reveal}ms ease-out;
    }}
    .faq-answer {{
        overflow: hidden;
        max-height: 0;
        opacity: 0;
        transition: max-height {answer}ms ease, opacity {answer}ms ease;
    }}
    .faq-answer.open {{
        max-height: 16rem;
        opacity: 1;
    }}
    .faq-answer p {{ margin: 0.75rem 0 0; color: #4b5563; font-size: 0.9rem; }}
"#,
        offset = REVEAL_HIDDEN_OFFSET_PX,
        reveal = REVEAL_DURATION_MS,
        answer = TRANSITION_DURATION_MS,
    )
}

#[function_component(Landing)]
pub fn landing() -> Html {
    html! {
        <div class="landing-page">
            <style>{BASE_CSS}</style>
            <style>{motion_css()}</style>
            <Navbar />
            <main>
                <Hero />
                <Trust />
                <Services />
                <HowItWorks />
                <Benefits />
                <Pricing />
                <Faq />
                <About />
                <Integrations />
                <Testimonials />
                <CtaBand />
                <Contact />
            </main>
            <Footer />
        </div>
    }
}
