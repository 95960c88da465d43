use std::cell::RefCell;
use std::rc::Rc;

use web_sys::HtmlElement;

use super::dom;
use super::timer::Timeout;
use crate::config::{classes, ids, TypingConfig};
use crate::error::UiError;
use crate::typewriter::{Tick, Typewriter};

type Slot = Rc<RefCell<Option<Timeout>>>;

/// Hero title typewriter. Dropping it cancels whatever step is pending and
/// puts the full title text back.
pub struct Typing {
    title: HtmlElement,
    text: String,
    pending: Slot,
}

pub fn init(config: &TypingConfig) -> Result<Option<Typing>, UiError> {
    let Some(title) = dom::optional_by_id(ids::HERO_TITLE)? else {
        log::debug!("no #{}; typewriter skipped", ids::HERO_TITLE);
        return Ok(None);
    };

    let text = title.text_content().unwrap_or_default();
    title.set_text_content(Some(""));
    let writer = Typewriter::new(&text, config.clone());
    let start = writer.start_delay();

    let pending: Slot = Rc::new(RefCell::new(None));
    arm(&pending, start, title.clone(), Rc::new(RefCell::new(writer)))?;

    log::info!("typewriter armed ({} chars)", text.chars().count());
    Ok(Some(Typing {
        title,
        text,
        pending,
    }))
}

fn arm(
    slot: &Slot,
    delay_ms: u32,
    title: HtmlElement,
    writer: Rc<RefCell<Typewriter>>,
) -> Result<(), UiError> {
    let next = slot.clone();
    let timeout = Timeout::new(delay_ms, move || {
        if let Err(e) = step(&next, title, writer) {
            log::warn!("typewriter: {e}");
        }
    })?;
    *slot.borrow_mut() = Some(timeout);
    Ok(())
}

fn step(slot: &Slot, title: HtmlElement, writer: Rc<RefCell<Typewriter>>) -> Result<(), UiError> {
    let tick = writer.borrow_mut().tick();
    match tick {
        Tick::Typed { visible, next_in } => {
            title.set_text_content(Some(&visible));
            arm(slot, next_in, title, writer)
        }
        Tick::Finished { cursor_off_in } => {
            let timeout = Timeout::new(cursor_off_in, move || {
                let _ = title.class_list().remove_1(classes::TYPING_CURSOR);
            })?;
            *slot.borrow_mut() = Some(timeout);
            Ok(())
        }
    }
}

impl Drop for Typing {
    fn drop(&mut self) {
        self.pending.borrow_mut().take();
        self.title.set_text_content(Some(&self.text));
    }
}
