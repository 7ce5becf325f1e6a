#[cfg(test)]
#[path = "keys_test.rs"]
mod tests;

#[cfg(test)]
use std::collections::VecDeque;
use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use crossterm::event;
use crossterm::event::Event as CrosstermEvent;
use crossterm::event::KeyCode;
use crossterm::event::KeyEventKind;
use crossterm::event::KeyModifiers;
use tokio::task;

use crate::domain::models::InputMode;
use crate::domain::models::Key;

#[async_trait]
pub trait KeySource: Send {
    async fn next_key(&mut self, mode: InputMode) -> Result<Option<Key>>;
}

pub fn translate(event: CrosstermEvent) -> Option<Key> {
    match event {
        CrosstermEvent::Resize(..) => return Some(Key::Resize),
        CrosstermEvent::Key(keyevent) => {
            if keyevent.kind == KeyEventKind::Release {
                return None;
            }

            if keyevent.modifiers.contains(KeyModifiers::CONTROL) {
                if keyevent.code == KeyCode::Char('c') {
                    return Some(Key::Interrupt);
                }
                return None;
            }
            if keyevent.modifiers.contains(KeyModifiers::ALT) {
                return None;
            }

            let key = match keyevent.code {
                KeyCode::Char(c) => Key::Char(c),
                KeyCode::Up => Key::Up,
                KeyCode::Down => Key::Down,
                KeyCode::Left => Key::Left,
                KeyCode::Right => Key::Right,
                KeyCode::Enter => Key::Enter,
                KeyCode::Esc => Key::Esc,
                _ => return None,
            };
            return Some(key);
        }
        _ => return None,
    }
}

/// Reads keys from the controlling terminal.
#[derive(Debug, Default)]
pub struct CrosstermKeys {}

#[async_trait]
impl KeySource for CrosstermKeys {
    async fn next_key(&mut self, mode: InputMode) -> Result<Option<Key>> {
        match mode {
            InputMode::Polling => {
                // Drains events that are not keys, returns at most one key.
                while event::poll(Duration::ZERO)? {
                    if let Some(key) = translate(event::read()?) {
                        return Ok(Some(key));
                    }
                }
                return Ok(None);
            }
            InputMode::Blocking => loop {
                let event = task::spawn_blocking(event::read).await??;
                if let Some(key) = translate(event) {
                    return Ok(Some(key));
                }
            },
        }
    }
}

/// Replays a fixed key script. `None` entries are ticks without input.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct ScriptedKeys {
    script: VecDeque<Option<Key>>,
}

#[cfg(test)]
impl ScriptedKeys {
    pub fn new(script: Vec<Option<Key>>) -> ScriptedKeys {
        return ScriptedKeys {
            script: script.into(),
        };
    }

    pub fn keys(keys: &[Key]) -> ScriptedKeys {
        return ScriptedKeys::new(keys.iter().copied().map(Some).collect());
    }

    pub fn remaining(&self) -> usize {
        return self.script.len();
    }
}

#[cfg(test)]
#[async_trait]
impl KeySource for ScriptedKeys {
    async fn next_key(&mut self, mode: InputMode) -> Result<Option<Key>> {
        loop {
            let Some(step) = self.script.pop_front() else {
                anyhow::bail!("key script exhausted");
            };
            if step.is_some() || mode == InputMode::Polling {
                return Ok(step);
            }
        }
    }
}
