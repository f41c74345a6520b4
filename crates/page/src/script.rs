//! Line-oriented scenario scripts for driving a [`Page`].
//!
//! One command per line; blank lines and `//` comments are skipped.
//!
//! ```text
//! ghost  <selector> <operation> [json-options]
//! focus  <selector>
//! blur
//! type   <text>
//! backspace [count]
//! submit <selector>
//! remove <selector>
//! show   <selector>
//! ```

use crate::error::PageError;
use crate::page::Page;
use ghost_text::GhostPhase;

/// Run every line of `src` against `page`. Returns the lines produced by
/// `show` and `submit`.
pub fn run(page: &mut Page, src: &str) -> Result<Vec<String>, PageError> {
    let mut out = Vec::new();
    for (idx, raw) in src.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with("//") {
            continue;
        }
        run_line(page, line, &mut out).map_err(|err| match err {
            PageError::Script { message, .. } => PageError::Script {
                line: idx + 1,
                message,
            },
            other => PageError::Script {
                line: idx + 1,
                message: other.to_string(),
            },
        })?;
    }
    Ok(out)
}

fn run_line(page: &mut Page, line: &str, out: &mut Vec<String>) -> Result<(), PageError> {
    let (cmd, rest) = split_word(line);
    match cmd {
        "ghost" => {
            let (selector, rest) = split_word(rest);
            let (op, options) = split_word(rest);
            let options = (!options.is_empty()).then_some(options);
            page.invoke(selector, op, options)?;
        }
        "focus" => {
            let id = page.element(rest)?;
            page.focus(id)?;
        }
        "blur" => page.blur(),
        // Only the separating whitespace is dropped so leading blanks can be typed.
        "type" => {
            let text = line[cmd.len()..]
                .strip_prefix(char::is_whitespace)
                .unwrap_or_default();
            page.type_text(text)?;
        }
        "backspace" => {
            let count = if rest.is_empty() {
                1
            } else {
                rest.parse::<usize>().map_err(|_| PageError::Script {
                    line: 0,
                    message: format!("bad backspace count {rest:?}"),
                })?
            };
            for _ in 0..count {
                page.backspace()?;
            }
        }
        "submit" => {
            let form = page.element(rest)?;
            let data = page.submit(form)?;
            let pairs = data
                .iter()
                .map(|(k, v)| format!("{k}={v:?}"))
                .collect::<Vec<_>>()
                .join(" ");
            out.push(format!("submit {rest}: {pairs}"));
        }
        "remove" => {
            for id in page.query(rest)? {
                page.remove_element(id);
            }
        }
        "show" => {
            for id in page.query(rest)? {
                out.push(describe(page, rest, id));
            }
        }
        other => {
            return Err(PageError::Script {
                line: 0,
                message: format!("unknown command {other:?}"),
            });
        }
    }
    Ok(())
}

fn describe(page: &Page, selector: &str, id: dom::Id) -> String {
    let value = page.value(id).unwrap_or_default();
    let Some(state) = page.ghosts().state(id) else {
        return format!("{selector}: value={value:?} (no ghost text)");
    };
    let marker = page.document().has_class(id, &state.config.ghost_class);
    let phase = match state.phase {
        GhostPhase::ShowingGhost => "ghost",
        GhostPhase::ShowingUser => "user",
    };
    format!("{selector}: value={value:?} phase={phase} marker={marker}")
}

fn split_word(s: &str) -> (&str, &str) {
    let s = s.trim_start();
    match s.find(char::is_whitespace) {
        Some(i) => (&s[..i], s[i..].trim_start()),
        None => (s, ""),
    }
}
