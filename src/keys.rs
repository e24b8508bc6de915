use std::{collections::VecDeque, io};
use crossterm::{
    terminal,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
};

pub const CTRL_C: char = '\x03';
pub const CTRL_D: char = '\x04';

/// source of single keystrokes, `Ok(None)` means input is exhausted
pub trait KeyReader {
    fn read_key(&mut self) -> io::Result<Option<char>>;
}

/// reads keys from the controlling terminal, raw mode only while waiting for a key
#[derive(Debug, Default)]
pub struct TerminalKeys;

impl KeyReader for TerminalKeys {
    fn read_key(&mut self) -> io::Result<Option<char>> {
        let _raw = RawModeGuard::enable()?;

        loop {
            if let Event::Key(key_event) = event::read()? {
                if key_event.kind != KeyEventKind::Press {
                    continue;
                }
                if let Some(ch) = key_to_char(key_event) {
                    return Ok(Some(ch));
                }
            }
        }
    }
}

struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

/// map a key event to the character a raw tty would deliver
fn key_to_char(key_event: KeyEvent) -> Option<char> {
    match key_event.code {
        KeyCode::Char(c) if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
            let c = c.to_ascii_lowercase();
            c.is_ascii_lowercase()
                .then(|| char::from(c as u8 - b'a' + 1))
        }
        KeyCode::Char(c) => Some(c),
        _ => None,
    }
}

/// replays a fixed sequence of keys, then reports end of input
#[derive(Debug, Default)]
pub struct ScriptedKeys {
    keys: VecDeque<char>,
}

impl ScriptedKeys {
    pub fn new(keys: &str) -> Self {
        Self {
            keys: keys.chars().collect(),
        }
    }
}

impl KeyReader for ScriptedKeys {
    fn read_key(&mut self) -> io::Result<Option<char>> {
        Ok(self.keys.pop_front())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_control_keys_map_to_ascii() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        let ctrl_d = KeyEvent::new(KeyCode::Char('D'), KeyModifiers::CONTROL);
        assert_eq!(key_to_char(ctrl_c), Some(CTRL_C));
        assert_eq!(key_to_char(ctrl_d), Some(CTRL_D));
    }

    #[test]
    fn test_plain_and_special_keys() {
        assert_eq!(key_to_char(KeyEvent::new(KeyCode::Char('Q'), KeyModifiers::SHIFT)), Some('Q'));
        assert_eq!(key_to_char(KeyEvent::new(KeyCode::Char('3'), KeyModifiers::NONE)), Some('3'));
        assert_eq!(key_to_char(KeyEvent::new(KeyCode::Up, KeyModifiers::NONE)), None);
        assert_eq!(key_to_char(KeyEvent::new(KeyCode::Char('1'), KeyModifiers::CONTROL)), None);
    }

    #[test]
    fn test_scripted_keys_drain() {
        let mut keys = ScriptedKeys::new("a1");
        assert_eq!(keys.read_key().unwrap(), Some('a'));
        assert_eq!(keys.read_key().unwrap(), Some('1'));
        assert_eq!(keys.read_key().unwrap(), None);
    }
}
