//! Single-page marketing site.
//!
//! ARCHITECTURE
//! ============
//! Content is rendered by Leptos (SSR + hydrate). Interaction that depends
//! on the browser (observers, timers, scroll position) is wired once on the
//! client after mount and feeds `RwSignal<PageState>`; the views only read
//! that state. The hero input talks to the assistant through the
//! `SignalBus`, never directly.

use leptos::prelude::*;

use crate::components::particle_canvas::ParticleCanvas;
use crate::state::bus::{Signal, SignalBus};
use crate::state::page::PageState;
use crate::util::page::{ContactPhase, WORD_REVEAL_AFTER_MS, hero_query, nav_link_active, plan_word_reveal};

#[cfg(feature = "hydrate")]
use crate::util::page::{anchor_scroll_top, counter_frame, parse_leading_int, reveal_delay_ms};
#[cfg(feature = "hydrate")]
use gloo_timers::callback::Timeout;
#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast, JsValue, closure::Closure};

pub const HEADLINE: &str = "We Build the AI Others Only Talk About";
const CONTACT_IDLE_LABEL: &str = "Send Message";

const NAV_LINKS: [(&str, &str); 5] = [
    ("#what-we-do", "What We Do"),
    ("#services", "Services"),
    ("#case-studies", "Case Studies"),
    ("#industries", "Industries"),
    ("#contact", "Contact"),
];

const CLIENTS: [&str; 6] =
    ["Anthropic", "Chevron", "DataRobot", "Nestle Mexico", "Toyota Financial Services", "U.S. Department of Defense"];

/// (target, suffix, label) for the animated counters.
const COUNTERS: [(i64, &str, &str); 4] = [
    (150, "+", "Models in production"),
    (40, "+", "Enterprise clients"),
    (12, "", "Industries served"),
    (98, "%", "Client retention"),
];

const SERVICES: [(&str, &str); 6] = [
    (
        "Custom AI & ML Models",
        "Models designed, trained and deployed against your data, with evaluation you can audit.",
    ),
    ("LLM Applications & RAG", "Fine-tuned models and retrieval systems wired into the tools your teams already use."),
    ("Predictive Analytics", "Forecasting and risk models that move from notebook to production dashboards."),
    ("AI Strategy", "Roadmaps grounded in what can ship this quarter, not in slide decks."),
    ("MLOps & Infrastructure", "Pipelines, monitoring and serving that keep models healthy after launch."),
    (
        "Expert Data & AI Training",
        "RLHF annotations, red-team evaluations and domain datasets for frontier labs and enterprises.",
    ),
];

const WHY_US: [(&str, &str); 4] = [
    ("Senior engineers only", "Every engagement is staffed by people who have shipped production AI."),
    ("Direct access", "You talk to the engineers building your system. No middlemen."),
    ("Built to run", "We hand over systems with monitoring, docs and owners, not prototypes."),
    ("Proven at scale", "Trusted by AI labs, Fortune 500 teams and the public sector."),
];

const CASE_STUDIES: [(&str, &str, &str); 3] = [
    ("Energy", "Predictive maintenance for field assets", "Cut unplanned downtime by forecasting equipment failures weeks ahead."),
    ("Financial Services", "Document intelligence for lending", "Automated extraction and review across millions of loan documents."),
    ("Frontier AI", "Evaluation data for model training", "Expert-written datasets and red-team suites for large language models."),
];

const INDUSTRIES: [&str; 8] = [
    "Energy",
    "Financial Services",
    "Consumer Goods",
    "Defense & Public Sector",
    "Healthcare",
    "Automotive",
    "Technology",
    "Retail",
];

// =============================================================================
// BROWSER GLUE
// =============================================================================

/// Smooth-scroll to an in-page anchor, leaving room for the fixed nav.
fn scroll_to_anchor(ev: &leptos::ev::MouseEvent, href: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let Some(target) = window.document().and_then(|d| d.query_selector(href).ok().flatten()) else {
            return;
        };
        ev.prevent_default();
        let top = anchor_scroll_top(target.get_bounding_client_rect().top(), window.scroll_y().unwrap_or(0.0));
        let options = web_sys::ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (ev, href);
    }
}

#[cfg(feature = "hydrate")]
fn observe_all(
    selector: &str,
    threshold: f64,
    root_margin: &str,
    mut on_enter: impl FnMut(web_sys::Element, &web_sys::IntersectionObserver) + 'static,
) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let cb = Closure::wrap(Box::new(move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<web_sys::IntersectionObserverEntry>() else {
                continue;
            };
            if entry.is_intersecting() {
                on_enter(entry.target(), &observer);
            }
        }
    }) as Box<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>);

    let options = web_sys::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    options.set_root_margin(root_margin);
    let Ok(observer) = web_sys::IntersectionObserver::new_with_options(cb.as_ref().unchecked_ref(), &options) else {
        log::warn!("IntersectionObserver unavailable for {selector}");
        return;
    };
    cb.forget();

    let Ok(nodes) = document.query_selector_all(selector) else {
        return;
    };
    for i in 0..nodes.length() {
        if let Some(el) = nodes.item(i).and_then(|n| n.dyn_into::<web_sys::Element>().ok()) {
            observer.observe(&el);
        }
    }
}

#[cfg(feature = "hydrate")]
fn animate_counter(el: web_sys::Element) {
    let target = parse_leading_int(el.get_attribute("data-target").as_deref());
    leptos::task::spawn_local(async move {
        let start = js_sys::Date::now();
        loop {
            let (value, done) = counter_frame(target, js_sys::Date::now() - start);
            el.set_text_content(Some(&value.to_string()));
            if done {
                break;
            }
            gloo_timers::future::TimeoutFuture::new(16).await;
        }
    });
}

/// Scroll reveal, counters and scroll spy.
#[cfg(feature = "hydrate")]
fn wire_observers(page: RwSignal<PageState>) {
    observe_all("[data-animate]", 0.12, "0px 0px -40px 0px", |el, observer| {
        observer.unobserve(&el);
        let delay = reveal_delay_ms(el.get_attribute("data-delay").as_deref());
        Timeout::new(delay, move || {
            let _ = el.class_list().add_1("is-visible");
        })
        .forget();
    });

    observe_all(".counter", 0.5, "0px", |el, observer| {
        observer.unobserve(&el);
        animate_counter(el);
    });

    observe_all("section[id]", 0.3, "-80px 0px -50% 0px", move |el, _| {
        page.update(|p| p.set_active_section(&el.id()));
    });
}

/// Walk the contact stub through its timed phases.
#[cfg(feature = "hydrate")]
fn schedule_contact_step(page: RwSignal<PageState>, form: NodeRef<leptos::html::Form>) {
    let Some((next, after_ms)) = page.with_untracked(|p| p.contact.advance()) else {
        return;
    };
    Timeout::new(after_ms, move || {
        page.update(|p| p.contact = next);
        if next == ContactPhase::Sent {
            if let Some(form) = form.get_untracked() {
                form.reset();
            }
        }
        schedule_contact_step(page, form);
    })
    .forget();
}

/// Mid-range jitter for the server render; the browser re-rolls it.
fn steady_jitter() -> f64 {
    0.5
}

// =============================================================================
// VIEWS
// =============================================================================

/// In-page link with smooth scrolling; also closes the mobile menu.
#[component]
fn AnchorLink(href: &'static str, #[prop(optional)] class: &'static str, children: Children) -> impl IntoView {
    let page = expect_context::<RwSignal<PageState>>();
    view! {
        <a
            href=href
            class=class
            on:click=move |ev| {
                page.update(PageState::close_menu);
                scroll_to_anchor(&ev, href);
            }
        >
            {children()}
        </a>
    }
}

#[component]
fn Nav() -> impl IntoView {
    let page = expect_context::<RwSignal<PageState>>();

    #[cfg(feature = "hydrate")]
    {
        let _ = window_event_listener(leptos::ev::scroll, move |_| {
            let scroll_y = web_sys::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0);
            page.update(|p| p.on_scroll(scroll_y));
        });

        Effect::new(move || {
            let open = page.with(|p| p.menu_open);
            if let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) {
                let _ = body.style().set_property("overflow", if open { "hidden" } else { "" });
            }
        });
    }

    let menu_open = move || page.with(|p| p.menu_open);
    let links = move || {
        NAV_LINKS
            .iter()
            .map(|&(href, label)| {
                let active =
                    move || page.with(|p| p.active_section.as_deref().is_some_and(|id| nav_link_active(href, id)));
                view! {
                    <li class="nav__item" class:active=active>
                        <AnchorLink href=href class="nav__link">
                            {label}
                        </AnchorLink>
                    </li>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <nav id="nav" class="nav" class:nav--scrolled=move || page.with(|p| p.nav_scrolled)>
            <div class="nav__inner container">
                <AnchorLink href="#hero" class="nav__logo">
                    "ES"
                    <span class="nav__logo-accent">"Consulting"</span>
                </AnchorLink>
                <ul class="nav__links">{links}</ul>
                <button
                    id="nav-hamburger"
                    class="nav__hamburger"
                    class:is-active=menu_open
                    aria-label="Toggle menu"
                    on:click=move |_| page.update(PageState::toggle_menu)
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>
            <div id="mobile-menu" class="mobile-menu" class:is-open=menu_open>
                <ul>{links}</ul>
            </div>
        </nav>
    }
}

#[component]
fn Hero() -> impl IntoView {
    let bus = expect_context::<SignalBus>();
    let revealed = RwSignal::new(false);
    let query = RwSignal::new(String::new());

    #[cfg(feature = "hydrate")]
    Timeout::new(WORD_REVEAL_AFTER_MS, move || revealed.set(true)).forget();
    #[cfg(not(feature = "hydrate"))]
    let _ = WORD_REVEAL_AFTER_MS;

    let mut jitter = steady_jitter;
    let plan = plan_word_reveal(HEADLINE, &mut jitter);
    let delays = RwSignal::new(plan.iter().map(|w| w.delay_ms).collect::<Vec<_>>());

    // Effects run after hydration, so the randomized delays never cause a
    // markup mismatch.
    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        let mut rng = js_sys::Math::random;
        delays.set(plan_word_reveal(HEADLINE, &mut rng).iter().map(|w| w.delay_ms).collect());
    });

    let words = plan
        .into_iter()
        .enumerate()
        .map(|(i, word)| {
            let spacer = (i > 0 && !word.break_before).then_some(" ");
            let style = move || {
                let delay = delays.with(|d| d.get(i).copied().unwrap_or(word.delay_ms));
                format!("transition-delay: {delay:.0}ms")
            };
            view! {
                {word.break_before.then(|| view! { <br/> })}
                {spacer}
                <span class="word" class:word--accent=word.accent style=style>
                    {word.text}
                </span>
            }
        })
        .collect::<Vec<_>>();

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() != "Enter" {
            return;
        }
        if let Some(text) = hero_query(&query.get_untracked()) {
            query.set(String::new());
            bus.publish(&Signal::Open { query: Some(text) });
        }
    };

    view! {
        <section id="hero" class="hero">
            <ParticleCanvas pointer_area="hero"/>
            <div class="hero__content container">
                <p class="hero__eyebrow" data-animate="">
                    "Boutique AI Consulting · Boston"
                </p>
                <h1 class="hero__title word-reveal" class:is-revealed=move || revealed.get()>
                    {words}
                </h1>
                <p class="hero__subtitle" data-animate="" data-delay="200">
                    "Custom, end-to-end AI systems for the biggest names in AI and the Fortune 500. Senior engineers only."
                </p>
                <div class="hero__ai" data-animate="" data-delay="400">
                    <input
                        id="hero-ai-input"
                        class="hero__ai-input"
                        type="text"
                        placeholder="Ask our AI anything about your project..."
                        prop:value=move || query.get()
                        on:input=move |ev| query.set(event_target_value(&ev))
                        on:keydown=on_keydown
                    />
                    <span class="hero__ai-hint">
                        <kbd>"Enter"</kbd>
                        " to ask"
                    </span>
                </div>
                <div class="hero__actions" data-animate="" data-delay="600">
                    <AnchorLink href="#contact" class="btn btn--primary">
                        "Start a Project"
                    </AnchorLink>
                    <AnchorLink href="#services" class="btn btn--ghost">
                        "Explore Services"
                    </AnchorLink>
                </div>
            </div>
        </section>
    }
}

#[component]
fn Clients() -> impl IntoView {
    view! {
        <section id="clients" class="clients">
            <div class="container">
                <p class="clients__label" data-animate="">
                    "Trusted by"
                </p>
                <ul class="clients__list">
                    {CLIENTS
                        .iter()
                        .enumerate()
                        .map(|(i, name)| {
                            view! {
                                <li class="clients__item" data-animate="" data-delay={(i * 80).to_string()}>
                                    {*name}
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()}
                </ul>
            </div>
        </section>
    }
}

#[component]
fn WhatWeDo() -> impl IntoView {
    view! {
        <section id="what-we-do" class="section what-we-do">
            <div class="container">
                <h2 class="section__title" data-animate="">
                    "Production AI, end to end"
                </h2>
                <p class="section__lead" data-animate="" data-delay="100">
                    "From data to deployed model to the system it plugs into, one senior team owns the whole path."
                </p>
                <div class="stats">
                    {COUNTERS
                        .iter()
                        .map(|&(target, suffix, label)| {
                            view! {
                                <div class="stats__item" data-animate="">
                                    <span class="stats__value">
                                        <span class="counter" data-target={target.to_string()}>
                                            "0"
                                        </span>
                                        {suffix}
                                    </span>
                                    <span class="stats__label">{label}</span>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn Services() -> impl IntoView {
    view! {
        <section id="services" class="section services">
            <div class="container">
                <h2 class="section__title" data-animate="">
                    "Services"
                </h2>
                <div class="services__grid">
                    {SERVICES
                        .iter()
                        .enumerate()
                        .map(|(i, &(title, body))| {
                            view! {
                                <article class="service-card" data-animate="" data-delay={(i * 100).to_string()}>
                                    <h3 class="service-card__title">{title}</h3>
                                    <p class="service-card__body">{body}</p>
                                </article>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn WhyUs() -> impl IntoView {
    view! {
        <section id="why-us" class="section why-us">
            <div class="container">
                <h2 class="section__title" data-animate="">
                    "Why ES Consulting"
                </h2>
                <div class="why-us__grid">
                    {WHY_US
                        .iter()
                        .map(|&(title, body)| {
                            view! {
                                <div class="why-us__item" data-animate="">
                                    <h3>{title}</h3>
                                    <p>{body}</p>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn CaseStudies() -> impl IntoView {
    view! {
        <section id="case-studies" class="section case-studies">
            <div class="container">
                <h2 class="section__title" data-animate="">
                    "Case Studies"
                </h2>
                <div class="case-studies__grid">
                    {CASE_STUDIES
                        .iter()
                        .map(|&(category, title, body)| {
                            view! {
                                <article class="case-card" data-animate="">
                                    <span class="case-card__category">{category}</span>
                                    <h3 class="case-card__title">{title}</h3>
                                    <p class="case-card__body">{body}</p>
                                </article>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn Industries() -> impl IntoView {
    view! {
        <section id="industries" class="section industries">
            <div class="container">
                <h2 class="section__title" data-animate="">
                    "Industries"
                </h2>
                <ul class="industries__list">
                    {INDUSTRIES
                        .iter()
                        .map(|name| view! { <li class="industries__item" data-animate="">{*name}</li> })
                        .collect::<Vec<_>>()}
                </ul>
            </div>
        </section>
    }
}

#[component]
fn Contact() -> impl IntoView {
    let page = expect_context::<RwSignal<PageState>>();
    let form_ref = NodeRef::<leptos::html::Form>::new();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut started = false;
        page.update(|p| started = p.start_contact());
        if !started {
            return;
        }
        #[cfg(feature = "hydrate")]
        schedule_contact_step(page, form_ref);
    };

    let phase = move || page.with(|p| p.contact);

    view! {
        <section id="contact" class="section contact">
            <div class="container">
                <h2 class="section__title" data-animate="">
                    "Let's build something real"
                </h2>
                <form id="contact-form" class="contact__form" node_ref=form_ref on:submit=on_submit data-animate="">
                    <input class="form-input" type="text" name="name" placeholder="Your Name" required=true/>
                    <input class="form-input" type="email" name="email" placeholder="Work Email" required=true/>
                    <input class="form-input" type="text" name="company" placeholder="Company"/>
                    <textarea
                        class="form-input form-textarea"
                        name="message"
                        rows="4"
                        placeholder="Tell us about your project"
                        required=true
                    ></textarea>
                    <button
                        class="btn btn--primary"
                        class:btn--success={move || phase() == ContactPhase::Sent}
                        type="submit"
                        disabled=move || phase().disabled()
                    >
                        {move || phase().label(CONTACT_IDLE_LABEL).to_owned()}
                    </button>
                </form>
            </div>
        </section>
    }
}

#[component]
fn Footer() -> impl IntoView {
    let year = RwSignal::new(String::new());

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        year.set(js_sys::Date::new_0().get_full_year().to_string());
    });

    view! {
        <footer class="footer">
            <div class="container footer__inner">
                <span>"© " <span id="year">{move || year.get()}</span> " ES Consulting. All rights reserved."</span>
                <AnchorLink href="#hero" class="footer__top">
                    "Back to top"
                </AnchorLink>
            </div>
        </footer>
    }
}

/// The whole site on one route.
#[component]
pub fn HomePage() -> impl IntoView {
    #[cfg(feature = "hydrate")]
    {
        let page = expect_context::<RwSignal<PageState>>();
        Effect::new(move || wire_observers(page));
    }

    view! {
        <Nav/>
        <main>
            <Hero/>
            <Clients/>
            <WhatWeDo/>
            <Services/>
            <WhyUs/>
            <CaseStudies/>
            <Industries/>
            <Contact/>
        </main>
        <Footer/>
    }
}
