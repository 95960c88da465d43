use std::cell::{Cell, RefCell};
use std::f64::consts::TAU;
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::dom;
use super::listener::EventListener;
use crate::config::{ids, ParticleConfig};
use crate::error::UiError;
use crate::particles::ParticleField;

struct Scene {
    field: ParticleField,
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl Scene {
    /// clear -> update -> draw -> link, in that order.
    fn frame(&mut self) {
        let (w, h) = self.field.size();
        self.ctx.clear_rect(0.0, 0.0, w, h);
        self.field.step();

        for p in self.field.particles() {
            self.ctx
                .set_fill_style_str(&format!("rgba(255, 255, 255, {})", p.fill_alpha() / 255.0));
            self.ctx.begin_path();
            let _ = self.ctx.arc(p.x, p.y, p.size / 2.0, 0.0, TAU);
            self.ctx.fill();
        }

        self.ctx.set_line_width(self.field.config().link_width);
        for link in self.field.links() {
            self.ctx
                .set_stroke_style_str(&format!("rgba(255, 255, 255, {})", link.alpha / 255.0));
            self.ctx.begin_path();
            self.ctx.move_to(link.from.0, link.from.1);
            self.ctx.line_to(link.to.0, link.to.1);
            self.ctx.stroke();
        }
    }

    fn resize(&mut self, width: f64, height: f64) {
        self.canvas.set_width(width as u32);
        self.canvas.set_height(height as u32);
        self.field.resize(width, height);
    }
}

/// Full-viewport particle canvas inside `#particle-container`.
pub struct ParticleBackground {
    canvas: HtmlCanvasElement,
    frame: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
    raf: Rc<Cell<Option<i32>>>,
    _resize: EventListener,
}

pub fn init(config: &ParticleConfig) -> Result<Option<ParticleBackground>, UiError> {
    let Some(container) = dom::optional_by_id(ids::PARTICLE_CONTAINER)? else {
        log::debug!("no #{}; particles skipped", ids::PARTICLE_CONTAINER);
        return Ok(None);
    };

    let canvas: HtmlCanvasElement = dom::document()?
        .create_element("canvas")?
        .dyn_into()
        .map_err(|_| UiError::WrongElement {
            id: ids::PARTICLE_CONTAINER,
            expected: "canvas host",
        })?;
    container.append_child(&canvas)?;
    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or(UiError::NoHost("2d canvas context"))?
        .dyn_into()
        .map_err(|_| UiError::NoHost("2d canvas context"))?;

    let (width, height) = dom::viewport()?;
    let field = ParticleField::new(config.clone(), width, height, &mut fastrand::Rng::new());
    let scene = Rc::new(RefCell::new(Scene {
        field,
        canvas: canvas.clone(),
        ctx,
    }));
    scene.borrow_mut().resize(width, height);

    // Resize canvas to fit window
    let window = dom::window()?;
    let resize = {
        let scene = scene.clone();
        EventListener::new(&window, "resize", move |_| match dom::viewport() {
            Ok((w, h)) => scene.borrow_mut().resize(w, h),
            Err(e) => log::warn!("particle resize: {e}"),
        })?
    };

    // The frame closure reschedules itself through `frame`; `raf` tracks the
    // pending request so drop can cancel it.
    let frame: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let raf = Rc::new(Cell::new(None));
    {
        let next = frame.clone();
        let raf = raf.clone();
        *frame.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            scene.borrow_mut().frame();

            // schedule next
            let id = next.borrow().as_ref().and_then(|cb| {
                dom::window()
                    .ok()?
                    .request_animation_frame(cb.as_ref().unchecked_ref())
                    .ok()
            });
            raf.set(id);
        }) as Box<dyn FnMut()>));
    }

    if let Some(cb) = frame.borrow().as_ref() {
        raf.set(Some(window.request_animation_frame(cb.as_ref().unchecked_ref())?));
    }

    log::info!("particle field: {} particles, {width}x{height}", config.count);
    Ok(Some(ParticleBackground {
        canvas,
        frame,
        raf,
        _resize: resize,
    }))
}

impl Drop for ParticleBackground {
    fn drop(&mut self) {
        if let (Some(id), Ok(w)) = (self.raf.take(), dom::window()) {
            let _ = w.cancel_animation_frame(id);
        }
        self.frame.borrow_mut().take();
        self.canvas.remove();
    }
}
