//! Bridge between the hero section and the imperative `canvas::Engine`.
//!
//! ARCHITECTURE
//! ============
//! The canvas crate owns the simulation and drawing. This host mounts the
//! engine once the `<canvas>` exists, drives it from `requestAnimationFrame`,
//! and forwards resize, pointer and page-visibility events. A hidden page
//! cancels the pending frame; becoming visible schedules a fresh one, so no
//! backlog of frames is replayed.

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use std::cell::{Cell, RefCell};
#[cfg(feature = "hydrate")]
use std::rc::{Rc, Weak};

#[cfg(feature = "hydrate")]
use canvas::engine::{Engine, LoopCommand};
#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast, closure::Closure};

/// Engine plus its animation-frame bookkeeping.
#[cfg(feature = "hydrate")]
#[derive(Default)]
struct Animation {
    engine: RefCell<Option<Engine>>,
    frame_id: Cell<Option<i32>>,
    tick: RefCell<Option<Closure<dyn FnMut(f64)>>>,
}

#[cfg(feature = "hydrate")]
impl Animation {
    fn mount(engine: Engine) -> Rc<Self> {
        let anim = Rc::new(Self { engine: RefCell::new(Some(engine)), ..Self::default() });
        let weak: Weak<Self> = Rc::downgrade(&anim);
        let tick = Closure::wrap(Box::new(move |_ts: f64| {
            let Some(anim) = weak.upgrade() else {
                return;
            };
            anim.frame_id.set(None);
            let keep_going = anim.engine.borrow_mut().as_mut().is_some_and(|engine| {
                engine.frame().unwrap_or_else(|err| {
                    log::warn!("particle frame failed: {err:?}");
                    false
                })
            });
            if keep_going {
                anim.schedule();
            }
        }) as Box<dyn FnMut(f64)>);
        *anim.tick.borrow_mut() = Some(tick);
        anim
    }

    fn schedule(&self) {
        if self.frame_id.get().is_some() {
            return;
        }
        let Some(window) = web_sys::window() else {
            return;
        };
        let tick = self.tick.borrow();
        let Some(cb) = tick.as_ref() else {
            return;
        };
        if let Ok(id) = window.request_animation_frame(cb.as_ref().unchecked_ref()) {
            self.frame_id.set(Some(id));
        }
    }

    fn cancel(&self) {
        let Some(id) = self.frame_id.take() else {
            return;
        };
        if let Some(window) = web_sys::window() {
            let _ = window.cancel_animation_frame(id);
        }
    }

    fn with_engine(&self, f: impl FnOnce(&mut Engine)) {
        if let Some(engine) = self.engine.borrow_mut().as_mut() {
            f(engine);
        }
    }

    fn on_visibility(&self, visible: bool) {
        let mut command = LoopCommand::Keep;
        self.with_engine(|engine| command = engine.set_visible(visible));
        match command {
            LoopCommand::Start => self.schedule(),
            LoopCommand::Stop => self.cancel(),
            LoopCommand::Keep => {}
        }
    }
}

/// Attach `handler` to `target` for the page lifetime.
#[cfg(feature = "hydrate")]
fn listen<E: JsCast + 'static>(target: &web_sys::EventTarget, event: &str, handler: impl FnMut(E) + 'static) {
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    if target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref()).is_ok() {
        cb.forget();
    }
}

#[cfg(feature = "hydrate")]
fn wire_events(anim: &Rc<Animation>, pointer_area_id: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };

    let on_resize = Rc::clone(anim);
    listen(&window, "resize", move |_: web_sys::Event| {
        on_resize.with_engine(Engine::resize);
    });

    let on_visibility = Rc::clone(anim);
    let doc_for_cb = document.clone();
    listen(&document, "visibilitychange", move |_: web_sys::Event| {
        on_visibility.on_visibility(!doc_for_cb.hidden());
    });

    let Some(area) = document.get_element_by_id(pointer_area_id) else {
        return;
    };
    let on_move = Rc::clone(anim);
    listen(&area, "mousemove", move |ev: web_sys::MouseEvent| {
        on_move.with_engine(|engine| {
            let pt = engine.local_point(f64::from(ev.client_x()), f64::from(ev.client_y()));
            engine.set_pointer(pt);
        });
    });
    let on_leave = Rc::clone(anim);
    listen(&area, "mouseleave", move |_: web_sys::MouseEvent| {
        on_leave.with_engine(Engine::clear_pointer);
    });
}

/// Full-bleed particle background. Pointer tracking is bound to the element
/// with id `pointer_area`.
#[component]
pub fn ParticleCanvas(#[prop(into)] pointer_area: String) -> impl IntoView {
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

    #[cfg(feature = "hydrate")]
    {
        let mounted = Rc::new(Cell::new(false));
        Effect::new(move || {
            let Some(canvas) = canvas_ref.get() else {
                return;
            };
            if mounted.replace(true) {
                return;
            }
            let mut engine = match Engine::new(canvas) {
                Ok(engine) => engine,
                Err(err) => {
                    log::warn!("particle canvas unavailable: {err:?}");
                    return;
                }
            };
            engine.resize();
            let anim = Animation::mount(engine);
            wire_events(&anim, &pointer_area);
            anim.schedule();
        });
    }

    #[cfg(not(feature = "hydrate"))]
    {
        let _ = pointer_area;
    }

    view! { <canvas class="hero__canvas" node_ref=canvas_ref aria-hidden="true"></canvas> }
}
