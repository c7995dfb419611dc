//! Clock widget: time/date formatting and window content
//!
//! Takes milliseconds since local midnight so the formatting stays pure;
//! the host computes that from its own clock once a second.

use lumen_desktop::{ShellEngine, WindowKey};
use crate::launcher::open_app;
use crate::menu::MenuAction;

const MS_PER_MINUTE: f64 = 60_000.0;
const MS_PER_HOUR: f64 = 3_600_000.0;
const MS_PER_DAY: f64 = 86_400_000.0;

/// Format milliseconds since local midnight as `HH:MM`
pub fn format_clock(ms_since_midnight: f64) -> String {
    let ms = ms_since_midnight.rem_euclid(MS_PER_DAY);
    let hours = (ms / MS_PER_HOUR) as u32;
    let minutes = ((ms % MS_PER_HOUR) / MS_PER_MINUTE) as u32;
    format!("{:02}:{:02}", hours, minutes)
}

/// Build the clock window content
pub fn markup(ms_since_midnight: f64) -> String {
    format!(
        "<div class=\"clock\"><span id=\"timeIndicator\">{}</span></div>",
        format_clock(ms_since_midnight)
    )
}

/// Open (or focus) the clock window
pub fn open(shell: &mut ShellEngine, ms_since_midnight: f64, now_ms: f64) -> WindowKey {
    open_app(shell, MenuAction::Clock, markup(ms_since_midnight), now_ms)
}
