use crate::core::transition::Transition;
use crate::core::{ArcGenerator, ClipState};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct TransitionContext {
    pub clip_path: web::Element,
    pub arc: ArcGenerator,
    pub clip: Rc<RefCell<ClipState>>,
    pub generation: u64,
    pub transition: Transition,
    pub started: Instant,
}

impl TransitionContext {
    /// Apply the sample for the current time. Returns `false` once the loop
    /// should stop, either because the transition finished or because a newer
    /// one took over the clip.
    pub fn frame(&mut self) -> bool {
        let sample = self.transition.sample(self.started.elapsed());
        let datum = self
            .clip
            .borrow_mut()
            .set_end_angle(self.generation, sample.value);
        let Some(datum) = datum else {
            log::debug!("[frame] transition {} superseded", self.generation);
            return false;
        };
        _ = self.clip_path.set_attribute("d", &self.arc.path(&datum));
        !sample.finished
    }
}

/// Drive `ctx` to completion. Zero-length transitions are applied right away
/// without waiting for a frame.
pub fn run_transition(mut ctx: TransitionContext) {
    if ctx.transition.is_immediate() {
        ctx.frame();
        return;
    }

    let ctx = Rc::new(RefCell::new(ctx));
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !ctx.borrow_mut().frame() {
            // Release the closure; it is freed once this call returns.
            _ = tick_clone.borrow_mut().take();
            return;
        }
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(closure) = tick.borrow().as_ref() {
        if let Err(e) = w.request_animation_frame(closure.as_ref().unchecked_ref()) {
            log::error!("requestAnimationFrame error: {:?}", e);
        }
    }
}
