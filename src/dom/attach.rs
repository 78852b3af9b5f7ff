//! Listener, observer and animation-frame wiring for the four effects.
//!
//! Everything here is page-lifetime: closures are `forget`-ed and the
//! simulation loop reschedules itself until the page unloads. All state
//! mutation stays in the effect cores; this module only moves coordinates in
//! and styles out.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use web_sys::HtmlElement;

use crate::dom;
use crate::effects::cursor::CursorTrail;
use crate::effects::reveal::{RevealPlan, RevealSet};
use crate::effects::spotlight;
use crate::simulation::{PlayfieldCore, RenderSink};

// === SCROLL REVEAL ===

/// Staggered fade-up of all elements matching `selector`, revealed once on
/// first intersection with the viewport.
#[wasm_bindgen(js_name = attachReveal)]
pub fn attach_reveal(selector: &str) {
    reveal_inner(selector, RevealPlan::default());
}

/// Same, with timing overridden from a JSON object.
#[wasm_bindgen(js_name = attachRevealWithPlan)]
pub fn attach_reveal_with_plan(selector: &str, json: String) -> Result<(), JsValue> {
    let plan = RevealPlan::from_json(&json).map_err(|e| JsValue::from_str(&e))?;
    reveal_inner(selector, plan);
    Ok(())
}

fn reveal_inner(selector: &str, plan: RevealPlan) {
    let elements = dom::select_all(selector);
    if elements.is_empty() {
        return;
    }
    let set = Rc::new(RefCell::new(RevealSet::new(plan, elements.len())));

    for (index, el) in elements.iter().enumerate() {
        let (opacity, transform, transition) = plan.hidden_style(index);
        let style = el.style();
        style.set_property("opacity", &opacity).ok();
        style.set_property("transform", &transform).ok();
        style.set_property("transition", &transition).ok();
        el.set_attribute("data-reveal-index", &index.to_string()).ok();

        // Once the reveal transition has run, drop the inline styles so
        // stylesheet hover rules apply cleanly again.
        let cleanup_el = el.clone();
        let cleanup = Closure::wrap(Box::new(move |e: web_sys::TransitionEvent| {
            if e.property_name() != "transform" {
                return;
            }
            let style = cleanup_el.style();
            if style.get_property_value("opacity").unwrap_or_default() == "1" {
                style.remove_property("transition").ok();
                style.remove_property("transform").ok();
                style.remove_property("opacity").ok();
            }
        }) as Box<dyn FnMut(web_sys::TransitionEvent)>);
        el.add_event_listener_with_callback("transitionend", cleanup.as_ref().unchecked_ref())
            .ok();
        cleanup.forget();
    }

    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web_sys::IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                let Some(index) = target
                    .get_attribute("data-reveal-index")
                    .and_then(|v| v.parse::<usize>().ok())
                else {
                    continue;
                };
                if set.borrow_mut().mark_visible(index) {
                    if let Some(el) = target.dyn_ref::<HtmlElement>() {
                        let style = el.style();
                        style.set_property("opacity", "1").ok();
                        style.set_property("transform", "translateY(0)").ok();
                    }
                    target.class_list().add_1("visible").ok();
                    // One-shot: never re-hide on scroll-out
                    observer.unobserve(&target);
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>);

    let options = web_sys::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(plan.threshold));
    let Ok(observer) = web_sys::IntersectionObserver::new_with_options(
        callback.as_ref().unchecked_ref(),
        &options,
    ) else {
        return;
    };
    for el in &elements {
        observer.observe(el);
    }
    callback.forget();
    // Keep the observer referenced for the page lifetime
    std::mem::forget(observer);
}

// === CURSOR FOLLOWER ===

/// Dot snaps to the pointer, outline trails it over a fixed duration. Inert
/// on coarse pointers, narrow viewports or missing elements.
#[wasm_bindgen(js_name = attachCursor)]
pub fn attach_cursor(dot_id: &str, outline_id: &str) {
    let trail = CursorTrail::default();
    let (viewport_w, _) = dom::viewport_size();
    if !trail.should_enable(viewport_w, dom::pointer_is_fine()) {
        return;
    }
    let (Some(dot), Some(outline)) = (dom::get_el(dot_id), dom::get_el(outline_id)) else {
        return;
    };

    // The outline transitions toward every new left/top; a fresh move
    // retargets the in-flight transition, so there is no queuing.
    outline
        .style()
        .set_property("transition", &trail.trail_transition())
        .ok();

    let trail = Rc::new(RefCell::new(trail));
    let on_move = Closure::wrap(Box::new(move |e: web_sys::MouseEvent| {
        let (x, y) = trail
            .borrow_mut()
            .track(e.client_x() as f32, e.client_y() as f32);
        let px = format!("{x}px");
        let py = format!("{y}px");

        let style = dot.style();
        style.set_property("left", &px).ok();
        style.set_property("top", &py).ok();

        let style = outline.style();
        style.set_property("left", &px).ok();
        style.set_property("top", &py).ok();
    }) as Box<dyn FnMut(web_sys::MouseEvent)>);
    dom::document()
        .add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref())
        .ok();
    on_move.forget();
}

// === SPOTLIGHT ===

/// Expose the pointer position over each matched card as CSS custom
/// properties; the gradient/tilt visuals live entirely in the stylesheet.
#[wasm_bindgen(js_name = attachSpotlight)]
pub fn attach_spotlight(selector: &str) {
    for card in dom::select_all(selector) {
        let target = card.clone();
        let on_move = Closure::wrap(Box::new(move |e: web_sys::MouseEvent| {
            let rect = target.get_bounding_client_rect();
            let pos = spotlight::relative_position(
                rect.left(),
                rect.top(),
                e.client_x() as f64,
                e.client_y() as f64,
            );
            let (x, y) = spotlight::as_px(pos);
            let style = target.style();
            let (mx, my) = spotlight::MOUSE_PROPS;
            style.set_property(mx, &x).ok();
            style.set_property(my, &y).ok();
            let (sx, sy) = spotlight::SHORT_PROPS;
            style.set_property(sx, &x).ok();
            style.set_property(sy, &y).ok();
        }) as Box<dyn FnMut(web_sys::MouseEvent)>);
        card.add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref())
            .ok();
        on_move.forget();
    }
}

// === PHYSICS TOY ===

/// Writes simulation transforms back onto the tracked elements.
struct DomSink {
    targets: Vec<(u32, HtmlElement)>,
}

impl RenderSink for DomSink {
    fn apply(&mut self, id: u32, x: f32, y: f32, rot_x: f32, rot_y: f32, dragging: bool) {
        let Some((_, el)) = self.targets.iter().find(|(tid, _)| *tid == id) else {
            return;
        };
        let style = el.style();
        style.set_property("left", &format!("{x}px")).ok();
        style.set_property("top", &format!("{y}px")).ok();
        style
            .set_property(
                "transform",
                &format!("translate(-50%, -50%) rotateX({rot_x}deg) rotateY({rot_y}deg)"),
            )
            .ok();
        if dragging {
            el.class_list().add_1("dragging").ok();
        } else {
            el.class_list().remove_1("dragging").ok();
        }
    }
}

/// Turn every element matching `selector` into a floating body: mouse
/// repulsion, soft collision, drag-and-throw, boundary bounce.
#[wasm_bindgen(js_name = attachPlayfield)]
pub fn attach_playfield(selector: &str) {
    playfield_inner(selector, None);
}

/// Same, with tuning overridden from a JSON object.
#[wasm_bindgen(js_name = attachPlayfieldWithParams)]
pub fn attach_playfield_with_params(selector: &str, json: String) -> Result<(), JsValue> {
    playfield_inner(selector, Some(json)).transpose()?;
    Ok(())
}

fn playfield_inner(selector: &str, params_json: Option<String>) -> Option<Result<(), JsValue>> {
    let elements = dom::select_all(selector);
    if elements.is_empty() {
        return None;
    }

    let (width, height) = dom::viewport_size();
    let mut core = PlayfieldCore::new(width, height);
    if let Some(json) = params_json {
        if let Err(e) = core.load_params_json(&json) {
            return Some(Err(JsValue::from_str(&e)));
        }
    }

    let mut targets = Vec::with_capacity(elements.len());
    for el in elements {
        let rect = el.get_bounding_client_rect();
        let cx = (rect.left() + rect.width() * 0.5) as f32;
        let cy = (rect.top() + rect.height() * 0.5) as f32;
        let id = core.spawn_body(cx, cy, rect.width() as f32, rect.height() as f32);

        // Take over positioning; the sink drives left/top from the center.
        let style = el.style();
        style.set_property("position", "fixed").ok();
        style.set_property("margin", "0").ok();
        targets.push((id, el));
    }
    let core = Rc::new(RefCell::new(core));

    wire_playfield_pointer(&core);
    wire_playfield_touch(&core);
    wire_playfield_resize(&core);

    // Self-rescheduling frame loop, running for the page lifetime.
    let mut sink = DomSink { targets };
    let frame: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let first = frame.clone();
    let core_loop = core.clone();
    *frame.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        {
            let mut core = core_loop.borrow_mut();
            core.step();
            core.render_into(&mut sink);
        }
        dom::request_animation_frame(first.borrow().as_ref().unwrap());
    }) as Box<dyn FnMut()>));
    dom::request_animation_frame(frame.borrow().as_ref().unwrap());
    // The loop closure owns itself through `first`; keep the outer handle.
    std::mem::forget(frame);

    Some(Ok(()))
}

fn wire_playfield_pointer(core: &Rc<RefCell<PlayfieldCore>>) {
    let doc = dom::document();

    let core_move = core.clone();
    let on_move = Closure::wrap(Box::new(move |e: web_sys::MouseEvent| {
        core_move
            .borrow_mut()
            .pointer_move(e.client_x() as f32, e.client_y() as f32);
    }) as Box<dyn FnMut(web_sys::MouseEvent)>);
    doc.add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref())
        .ok();
    on_move.forget();

    let core_down = core.clone();
    let on_down = Closure::wrap(Box::new(move |e: web_sys::MouseEvent| {
        let grabbed = core_down
            .borrow_mut()
            .pointer_down(e.client_x() as f32, e.client_y() as f32);
        if grabbed.is_some() {
            // Suppress text selection while dragging
            e.prevent_default();
        }
    }) as Box<dyn FnMut(web_sys::MouseEvent)>);
    doc.add_event_listener_with_callback("mousedown", on_down.as_ref().unchecked_ref())
        .ok();
    on_down.forget();

    let core_up = core.clone();
    let on_up = Closure::wrap(Box::new(move |_e: web_sys::MouseEvent| {
        core_up.borrow_mut().pointer_up();
    }) as Box<dyn FnMut(web_sys::MouseEvent)>);
    doc.add_event_listener_with_callback("mouseup", on_up.as_ref().unchecked_ref())
        .ok();
    on_up.forget();

    let core_leave = core.clone();
    let on_leave = Closure::wrap(Box::new(move |_e: web_sys::MouseEvent| {
        core_leave.borrow_mut().pointer_leave();
    }) as Box<dyn FnMut(web_sys::MouseEvent)>);
    doc.add_event_listener_with_callback("mouseleave", on_leave.as_ref().unchecked_ref())
        .ok();
    on_leave.forget();
}

fn wire_playfield_touch(core: &Rc<RefCell<PlayfieldCore>>) {
    let doc = dom::document();

    // Explicitly non-passive: preventDefault must be able to stop scrolling.
    let opts = web_sys::AddEventListenerOptions::new();
    opts.set_passive(false);

    let core_start = core.clone();
    let on_start = Closure::wrap(Box::new(move |e: web_sys::TouchEvent| {
        let Some(touch) = e.touches().item(0) else {
            return;
        };
        let grabbed = core_start
            .borrow_mut()
            .pointer_down(touch.client_x() as f32, touch.client_y() as f32);
        if grabbed.is_some() {
            e.prevent_default();
        }
    }) as Box<dyn FnMut(web_sys::TouchEvent)>);
    doc.add_event_listener_with_callback_and_add_event_listener_options(
        "touchstart",
        on_start.as_ref().unchecked_ref(),
        &opts,
    )
    .ok();
    on_start.forget();

    let core_move = core.clone();
    let on_move = Closure::wrap(Box::new(move |e: web_sys::TouchEvent| {
        let Some(touch) = e.touches().item(0) else {
            return;
        };
        let mut core = core_move.borrow_mut();
        core.pointer_move(touch.client_x() as f32, touch.client_y() as f32);
        if core.dragged_body().is_some() {
            // Keep the page from scrolling under an active drag
            e.prevent_default();
        }
    }) as Box<dyn FnMut(web_sys::TouchEvent)>);
    doc.add_event_listener_with_callback_and_add_event_listener_options(
        "touchmove",
        on_move.as_ref().unchecked_ref(),
        &opts,
    )
    .ok();
    on_move.forget();

    let core_end = core.clone();
    let on_end = Closure::wrap(Box::new(move |_e: web_sys::TouchEvent| {
        core_end.borrow_mut().pointer_up();
    }) as Box<dyn FnMut(web_sys::TouchEvent)>);
    doc.add_event_listener_with_callback("touchend", on_end.as_ref().unchecked_ref())
        .ok();
    on_end.forget();
}

fn wire_playfield_resize(core: &Rc<RefCell<PlayfieldCore>>) {
    let core_resize = core.clone();
    let on_resize = Closure::wrap(Box::new(move || {
        let (width, height) = dom::viewport_size();
        core_resize.borrow_mut().set_bounds(width, height);
    }) as Box<dyn FnMut()>);
    dom::window()
        .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())
        .ok();
    on_resize.forget();
}
