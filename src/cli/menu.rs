// src/cli/menu.rs
use std::thread;

use anyhow::Result;
use console::{Key, Term};
use inquire::Confirm;

use crate::cli::render;
use crate::field::PasswordField;
use crate::models::{Category, CommittedValue, FieldEvent};
use crate::style::StyleConfig;

/// Interactive demo loop: run the field until commit, report the value,
/// offer another round.
pub fn run_demo(config: &StyleConfig, start_visible: bool) -> Result<()> {
    let term = Term::stdout();
    println!("🔐 passfield — type to rate, Tab shows/hides, Enter commits, Esc quits");

    loop {
        let Some(value) = run_field(&term, config, start_visible)? else {
            break;
        };
        report_committed(&value);

        let again = Confirm::new("Try another password?")
            .with_default(false)
            .prompt()?;
        if !again {
            break;
        }
    }

    println!("👋 Done.");
    Ok(())
}

/// Drive a single field from empty to commit, one keystroke at a time.
/// Returns None if the user bails out with Esc.
fn run_field(term: &Term, config: &StyleConfig, start_visible: bool) -> Result<Option<CommittedValue>> {
    let mut field = PasswordField::new();
    if start_visible {
        field.toggle_visibility();
    }
    field.on_event(|event| {
        let FieldEvent::ValueCommitted(value) = event;
        log::info!("observer notified of committed {} password", value.strength);
    });

    term.write_line(&config.title)?;
    draw(term, &field, config, None)?;

    loop {
        let outcome = match term.read_key()? {
            Key::Char(c) => {
                let end = field.text().chars().count();
                Some(field.apply_edit(end..end, &c.to_string()))
            }
            Key::Backspace => {
                let end = field.text().chars().count();
                if end == 0 {
                    None
                } else {
                    Some(field.apply_edit(end - 1..end, ""))
                }
            }
            Key::Tab => {
                field.toggle_visibility();
                None
            }
            Key::Enter => {
                let value = field.commit();
                redraw(term, &field, config, None)?;
                return Ok(Some(value));
            }
            Key::Escape => return Ok(None),
            _ => None,
        };

        // A malformed edit skips classification for that event; the field
        // is left as it was.
        let entered = match outcome {
            Some(Ok(result)) if result.changed => Some(result.category),
            Some(Err(e)) => {
                log::warn!("skipping edit event: {e}");
                None
            }
            _ => None,
        };

        if let Some(category) = entered {
            // Entry flare for the category just entered, then settle.
            redraw(term, &field, config, Some(category))?;
            thread::sleep(config.animation.flare_duration);
        }
        redraw(term, &field, config, None)?;
    }
}

fn draw(term: &Term, field: &PasswordField, config: &StyleConfig, flare: Option<Category>) -> Result<()> {
    term.write_line(&render::render_input_line(field, config))?;
    term.write_line(&render::render_meter(field.category(), config, flare))?;
    Ok(())
}

fn redraw(term: &Term, field: &PasswordField, config: &StyleConfig, flare: Option<Category>) -> Result<()> {
    term.clear_last_lines(2)?;
    draw(term, field, config, flare)
}

fn report_committed(value: &CommittedValue) {
    println!(
        "✅ Committed a {}-character password rated {} ({})",
        value.password.chars().count(),
        value.strength,
        value.strength.description()
    );
}
