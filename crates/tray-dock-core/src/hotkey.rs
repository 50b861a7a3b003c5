//! Grammar for user-configured global hotkeys.
//!
//! A hotkey spec has the form `[modifier+]*key`, e.g. `Alt+N` or
//! `Ctrl+Shift+F1`. Token names are case-insensitive and surrounding
//! whitespace is ignored. Modifiers are `alt`/`option`, `ctrl`/`control`,
//! `shift` and `super`/`win`/`meta`/`cmd`/`command`; keys are single
//! letters, digits, `F1`-`F12` and a fixed set of named keys.

use std::panic::Location;

use error_location::ErrorLocation;
use global_hotkey::hotkey::{Code, HotKey, Modifiers};

use crate::{HotkeyError, error::Result};

/// Parse a hotkey spec into its modifier mask and key code.
#[track_caller]
pub fn parse_hotkey(spec: &str) -> Result<(Modifiers, Code)> {
    if spec.trim().is_empty() {
        return Err(HotkeyError::EmptySpec {
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let tokens: Vec<&str> = spec.split('+').map(str::trim).collect();

    // split() always yields at least one token for a non-empty input.
    let (key_token, modifier_tokens) = match tokens.split_last() {
        Some(split) => split,
        None => {
            return Err(HotkeyError::EmptySpec {
                location: ErrorLocation::from(Location::caller()),
            });
        }
    };

    let mut modifiers = Modifiers::empty();
    for token in modifier_tokens {
        modifiers |= parse_modifier(token).ok_or_else(|| HotkeyError::UnknownModifier {
            token: (*token).to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;
    }

    let code = parse_key(key_token).ok_or_else(|| HotkeyError::UnknownKey {
        token: (*key_token).to_string(),
        location: ErrorLocation::from(Location::caller()),
    })?;

    Ok((modifiers, code))
}

/// Build a registrable [`HotKey`] from a spec string.
#[track_caller]
pub fn hotkey_from_spec(spec: &str) -> Result<HotKey> {
    let (modifiers, code) = parse_hotkey(spec)?;
    let modifiers = if modifiers.is_empty() {
        None
    } else {
        Some(modifiers)
    };
    Ok(HotKey::new(modifiers, code))
}

fn parse_modifier(token: &str) -> Option<Modifiers> {
    match token.to_ascii_lowercase().as_str() {
        "alt" | "option" => Some(Modifiers::ALT),
        "ctrl" | "control" => Some(Modifiers::CONTROL),
        "shift" => Some(Modifiers::SHIFT),
        "super" | "win" | "meta" | "cmd" | "command" => Some(Modifiers::SUPER),
        _ => None,
    }
}

fn parse_key(token: &str) -> Option<Code> {
    let lower = token.to_ascii_lowercase();

    if lower.len() == 1 {
        if let Some(c) = lower.chars().next() {
            if c.is_ascii_lowercase() {
                return letter_code(c);
            }
            if c.is_ascii_digit() {
                return digit_code(c);
            }
        }
        return None;
    }

    if let Some(number) = lower.strip_prefix('f') {
        if let Ok(n) = number.parse::<u8>() {
            return function_code(n);
        }
    }

    named_code(&lower)
}

fn letter_code(c: char) -> Option<Code> {
    let code = match c {
        'a' => Code::KeyA,
        'b' => Code::KeyB,
        'c' => Code::KeyC,
        'd' => Code::KeyD,
        'e' => Code::KeyE,
        'f' => Code::KeyF,
        'g' => Code::KeyG,
        'h' => Code::KeyH,
        'i' => Code::KeyI,
        'j' => Code::KeyJ,
        'k' => Code::KeyK,
        'l' => Code::KeyL,
        'm' => Code::KeyM,
        'n' => Code::KeyN,
        'o' => Code::KeyO,
        'p' => Code::KeyP,
        'q' => Code::KeyQ,
        'r' => Code::KeyR,
        's' => Code::KeyS,
        't' => Code::KeyT,
        'u' => Code::KeyU,
        'v' => Code::KeyV,
        'w' => Code::KeyW,
        'x' => Code::KeyX,
        'y' => Code::KeyY,
        'z' => Code::KeyZ,
        _ => return None,
    };
    Some(code)
}

fn digit_code(c: char) -> Option<Code> {
    let code = match c {
        '0' => Code::Digit0,
        '1' => Code::Digit1,
        '2' => Code::Digit2,
        '3' => Code::Digit3,
        '4' => Code::Digit4,
        '5' => Code::Digit5,
        '6' => Code::Digit6,
        '7' => Code::Digit7,
        '8' => Code::Digit8,
        '9' => Code::Digit9,
        _ => return None,
    };
    Some(code)
}

fn function_code(n: u8) -> Option<Code> {
    let code = match n {
        1 => Code::F1,
        2 => Code::F2,
        3 => Code::F3,
        4 => Code::F4,
        5 => Code::F5,
        6 => Code::F6,
        7 => Code::F7,
        8 => Code::F8,
        9 => Code::F9,
        10 => Code::F10,
        11 => Code::F11,
        12 => Code::F12,
        _ => return None,
    };
    Some(code)
}

fn named_code(lower: &str) -> Option<Code> {
    let code = match lower {
        "space" => Code::Space,
        "tab" => Code::Tab,
        "enter" | "return" => Code::Enter,
        "escape" | "esc" => Code::Escape,
        "backspace" => Code::Backspace,
        "delete" | "del" => Code::Delete,
        "insert" => Code::Insert,
        "home" => Code::Home,
        "end" => Code::End,
        "pageup" => Code::PageUp,
        "pagedown" => Code::PageDown,
        "up" => Code::ArrowUp,
        "down" => Code::ArrowDown,
        "left" => Code::ArrowLeft,
        "right" => Code::ArrowRight,
        "minus" => Code::Minus,
        "equal" | "equals" => Code::Equal,
        "comma" => Code::Comma,
        "period" => Code::Period,
        "slash" => Code::Slash,
        "backslash" => Code::Backslash,
        "semicolon" => Code::Semicolon,
        "quote" => Code::Quote,
        "backquote" | "grave" => Code::Backquote,
        "bracketleft" => Code::BracketLeft,
        "bracketright" => Code::BracketRight,
        "capslock" => Code::CapsLock,
        "numlock" => Code::NumLock,
        "scrolllock" => Code::ScrollLock,
        "printscreen" => Code::PrintScreen,
        "pause" => Code::Pause,
        _ => return None,
    };
    Some(code)
}
