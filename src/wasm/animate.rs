//! Frame-driven tween runner.
//!
//! One `requestAnimationFrame` loop serves every running tween and idles when
//! nothing is animating. Starting a tween on an element cancels any in-flight
//! tween on that element that drives the same property; `to` tracks pick up from
//! the value the element had reached.
//!
//! Elements are tagged with a `data-tween-key` of the form `<animator>:<key>`,
//! so a later animator never mistakes another one's tags for its own.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::HtmlElement;

use super::dom;
use crate::error::UiError;
use crate::tween::{Motion, Pose, Property, Tween};

const KEY_ATTR: &str = "data-tween-key";

type Frame = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

pub type OnComplete = Box<dyn FnOnce()>;

thread_local! {
    static NEXT_ANIMATOR: Cell<u32> = const { Cell::new(0) };
}

struct Running {
    key: u32,
    target: HtmlElement,
    motion: Motion,
    started: f64,
    on_complete: Option<OnComplete>,
}

struct State {
    id: u32,
    running: Vec<Running>,
    poses: HashMap<u32, Pose>,
    tagged: HashMap<u32, HtmlElement>,
    next_key: u32,
    raf: Option<i32>,
}

impl State {
    fn new() -> Self {
        let id = NEXT_ANIMATOR.with(|n| {
            let id = n.get();
            n.set(id.wrapping_add(1));
            id
        });
        Self {
            id,
            running: Vec::new(),
            poses: HashMap::new(),
            tagged: HashMap::new(),
            next_key: 0,
            raf: None,
        }
    }

    /// The key `el` carries for this animator, if any.
    fn existing_key(&self, el: &HtmlElement) -> Option<u32> {
        let tag = el.get_attribute(KEY_ATTR)?;
        let (owner, key) = tag.split_once(':')?;
        if owner.parse::<u32>().ok()? != self.id {
            return None;
        }
        key.parse().ok()
    }

    fn key_of(&mut self, el: &HtmlElement) -> u32 {
        if let Some(key) = self.existing_key(el) {
            return key;
        }
        let key = self.next_key;
        self.next_key += 1;
        let _ = el.set_attribute(KEY_ATTR, &format!("{}:{key}", self.id));
        self.tagged.insert(key, el.clone());
        key
    }
}

#[derive(Clone)]
pub struct Animator {
    state: Rc<RefCell<State>>,
    frame: Frame,
}

impl Animator {
    pub fn new() -> Self {
        let this = Self {
            state: Rc::new(RefCell::new(State::new())),
            frame: Rc::new(RefCell::new(None)),
        };
        // The frame closure holds a handle back to the animator; `shutdown`
        // takes it out again to break the cycle.
        let runner = this.clone();
        *this.frame.borrow_mut() =
            Some(Closure::wrap(Box::new(move || runner.on_frame()) as Box<dyn FnMut()>));
        this
    }

    pub fn animate(
        &self,
        target: &HtmlElement,
        tween: &Tween,
        on_complete: Option<OnComplete>,
    ) -> Result<(), UiError> {
        let started = dom::now()?;
        let idle = {
            let mut state = self.state.borrow_mut();
            let key = state.key_of(target);
            let mut pose = state.poses.get(&key).copied().unwrap_or_default();
            let motion = tween.resolve(&pose);
            state
                .running
                .retain(|r| r.key != key || !motion.properties().any(|p| r.motion.touches(p)));

            // Hold the first keyframe while any delay runs down.
            motion.sample_into(0.0, &mut pose);
            apply(target, &pose, &motion);
            state.poses.insert(key, pose);

            state.running.push(Running {
                key,
                target: target.clone(),
                motion,
                started,
                on_complete,
            });
            state.raf.is_none()
        };
        if idle {
            self.request()?;
        }
        Ok(())
    }

    /// Forget everything known about `target`, e.g. before it leaves the document.
    pub fn release(&self, target: &HtmlElement) {
        let mut state = self.state.borrow_mut();
        if let Some(key) = state.existing_key(target) {
            state.poses.remove(&key);
            state.tagged.remove(&key);
            state.running.retain(|r| r.key != key);
            let _ = target.remove_attribute(KEY_ATTR);
        }
    }

    pub fn is_idle(&self) -> bool {
        self.state.borrow().running.is_empty()
    }

    /// Stop the frame loop. Running tweens jump to their end state and their
    /// completions run; every element this animator tagged is untagged.
    pub fn shutdown(&self) {
        let (raf, finished) = {
            let mut state = self.state.borrow_mut();
            let State { running, poses, .. } = &mut *state;
            let mut finished = Vec::new();
            for r in running.drain(..) {
                let pose = poses.entry(r.key).or_default();
                r.motion.sample_into(f64::INFINITY, pose);
                apply(&r.target, pose, &r.motion);
                if let Some(cb) = r.on_complete {
                    finished.push(cb);
                }
            }
            (state.raf.take(), finished)
        };
        if let (Some(id), Ok(w)) = (raf, dom::window()) {
            let _ = w.cancel_animation_frame(id);
        }
        self.frame.borrow_mut().take();

        for cb in finished {
            cb();
        }

        let mut state = self.state.borrow_mut();
        for (_, el) in state.tagged.drain() {
            let _ = el.remove_attribute(KEY_ATTR);
        }
        state.poses.clear();
    }

    fn request(&self) -> Result<(), UiError> {
        let frame = self.frame.borrow();
        let Some(cb) = frame.as_ref() else {
            return Ok(());
        };
        let id = dom::window()?.request_animation_frame(cb.as_ref().unchecked_ref())?;
        self.state.borrow_mut().raf = Some(id);
        Ok(())
    }

    fn on_frame(&self) {
        let now = match dom::now() {
            Ok(t) => t,
            Err(e) => {
                log::error!("animation frame: {e}");
                return;
            }
        };

        let mut finished = Vec::new();
        {
            let mut state = self.state.borrow_mut();
            state.raf = None;
            let State { running, poses, .. } = &mut *state;
            let mut i = 0;
            while i < running.len() {
                let r = &running[i];
                let pose = poses.entry(r.key).or_default();
                let done = r.motion.sample_into(now - r.started, pose);
                apply(&r.target, pose, &r.motion);
                if done {
                    let r = running.remove(i);
                    if let Some(cb) = r.on_complete {
                        finished.push(cb);
                    }
                } else {
                    i += 1;
                }
            }
        }

        // Completions may start or release tweens, so run them unborrowed.
        for cb in finished {
            cb();
        }

        let pending = {
            let state = self.state.borrow();
            !state.running.is_empty() && state.raf.is_none()
        };
        if pending {
            if let Err(e) = self.request() {
                log::error!("animation frame: {e}");
            }
        }
    }
}

impl Default for Animator {
    fn default() -> Self {
        Self::new()
    }
}

fn apply(target: &HtmlElement, pose: &Pose, motion: &Motion) {
    let style = target.style();
    if motion.touches(Property::Opacity) {
        let _ = style.set_property("opacity", &pose.opacity.to_string());
    }
    if motion.touches(Property::TranslateY) || motion.touches(Property::Scale) {
        let _ = style.set_property("transform", &pose.transform());
    }
}
