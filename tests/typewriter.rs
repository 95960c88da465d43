#![cfg(not(target_arch = "wasm32"))]

use folio_wasm::config::TypingConfig;
use folio_wasm::typewriter::{Tick, Typewriter};

/// Drive the typewriter on a virtual clock; returns (text, time) for every reveal
/// and the time the cursor comes off.
fn run(text: &str) -> (Vec<(String, u32)>, u32) {
    let mut writer = Typewriter::new(text, TypingConfig::default());
    let mut now = writer.start_delay();
    let mut shown = Vec::new();
    loop {
        match writer.tick() {
            Tick::Typed { visible, next_in } => {
                shown.push((visible, now));
                now += next_in;
            }
            Tick::Finished { cursor_off_in } => return (shown, now + cursor_off_in),
        }
    }
}

#[test]
fn reveals_one_character_per_interval() {
    let (shown, cursor_off) = run("Hello");
    let texts: Vec<&str> = shown.iter().map(|(t, _)| t.as_str()).collect();
    assert_eq!(texts, ["H", "He", "Hel", "Hell", "Hello"]);
    let times: Vec<u32> = shown.iter().map(|&(_, t)| t).collect();
    assert_eq!(times, [1000, 1150, 1300, 1450, 1600]);

    let len = 5;
    assert!(times[len - 1] <= 1000 + 150 * len as u32);
    assert_eq!(cursor_off, 1000 + 150 * len as u32 + 2000);
}

#[test]
fn counts_characters_not_bytes() {
    let (shown, _) = run("你好");
    assert_eq!(shown[0].0, "你");
    assert_eq!(shown[1].0, "你好");
    assert_eq!(shown.len(), 2);
}

#[test]
fn empty_title_goes_straight_to_cursor_removal() {
    let (shown, cursor_off) = run("");
    assert!(shown.is_empty());
    assert_eq!(cursor_off, 3000);
}

#[test]
fn finished_is_sticky() {
    let mut writer = Typewriter::new("a", TypingConfig::default());
    assert!(matches!(writer.tick(), Tick::Typed { .. }));
    for _ in 0..3 {
        assert_eq!(writer.tick(), Tick::Finished { cursor_off_in: 2000 });
    }
}
