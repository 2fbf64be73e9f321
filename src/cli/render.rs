// src/cli/render.rs
use console::style;

use crate::field::PasswordField;
use crate::models::{Category, VisibilityIcon};
use crate::style::{Rgb, StyleConfig};

const SEGMENT: &str = "▆▆▆▆▆▆";
const MASK: char = '•';

// Map truecolor palette entries onto the xterm 6x6x6 cube; console styles
// 256 colors at most.
fn color_index(color: Rgb) -> u8 {
    let scale = |c: u8| ((c as u16 * 5 + 127) / 255) as u8;
    16 + 36 * scale(color.r) + 6 * scale(color.g) + scale(color.b)
}

/// Current text the way the view shows it: mask dots while hidden, the raw
/// text otherwise.
pub fn display_text(field: &PasswordField) -> String {
    if field.is_text_hidden() {
        MASK.to_string().repeat(field.text().chars().count())
    } else {
        field.text().to_string()
    }
}

/// Input row: border accent, text (or dim placeholder), show/hide icon.
pub fn render_input_line(field: &PasswordField, config: &StyleConfig) -> String {
    let border = style("▌").color256(color_index(config.palette.border));
    let icon = match field.icon() {
        VisibilityIcon::EyesClosed => "🙈",
        VisibilityIcon::EyesOpen => "👁",
    };
    let text = if field.text().is_empty() {
        style(config.placeholder.clone()).dim().to_string()
    } else {
        display_text(field)
    };
    format!("{} {} {}", border, text, icon)
}

/// Strength meter row: three segments plus the category label. `flare`
/// highlights the segment whose category was just entered.
pub fn render_meter(current: Category, config: &StyleConfig, flare: Option<Category>) -> String {
    let mut line = String::new();
    for segment in Category::all() {
        let color = config.palette.segment_color(segment, current);
        let mut styled = style(SEGMENT).color256(color_index(color));
        if flare == Some(segment) {
            styled = styled.bold().reverse();
        }
        line.push_str(&styled.to_string());
        line.push(' ');
    }
    let label = style(current.description()).color256(color_index(config.palette.label));
    line.push_str(&label.to_string());
    line
}
