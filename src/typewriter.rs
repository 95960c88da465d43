use crate::config::TypingConfig;

/// What the caller should do after a tick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Tick {
    /// Show `visible` and tick again after `next_in` ms.
    Typed { visible: String, next_in: u32 },
    /// All text is shown; drop the cursor after `cursor_off_in` ms.
    Finished { cursor_off_in: u32 },
}

/// Reveals a captured string one character per tick.
#[derive(Clone, Debug)]
pub struct Typewriter {
    text: Vec<char>,
    shown: usize,
    timing: TypingConfig,
}

impl Typewriter {
    pub fn new(text: &str, timing: TypingConfig) -> Self {
        Self {
            text: text.chars().collect(),
            shown: 0,
            timing,
        }
    }

    /// Delay before the first tick.
    pub fn start_delay(&self) -> u32 {
        self.timing.start_delay_ms
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn tick(&mut self) -> Tick {
        if self.shown < self.text.len() {
            self.shown += 1;
            Tick::Typed {
                visible: self.text[..self.shown].iter().collect(),
                next_in: self.timing.char_interval_ms,
            }
        } else {
            Tick::Finished {
                cursor_off_in: self.timing.cursor_linger_ms,
            }
        }
    }
}
