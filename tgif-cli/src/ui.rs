//! Retro countdown card rendering and terminal handling.
//!
//! Rendering is split from drawing: `render_card` builds the card as
//! plain lines so tests can look at the output, and the draw helpers push
//! those lines at the terminal with crossterm.

use std::io::{self, Write};

use crossterm::cursor::{Hide, MoveTo, MoveToNextLine, Show};
use crossterm::style::Print;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::{execute, queue};
use tgif_core::format::deadline_label;
use tgif_core::{Remaining, TimeFormat};

/// Width of the card interior, in characters.
const INNER_WIDTH: usize = 34;

/// Width of the progress bar, in cells.
const BAR_WIDTH: usize = 24;

fn center(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }
    let left = (width - len) / 2;
    let right = width - len - left;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
}

fn boxed(text: &str) -> String {
    format!("\u{2551}{}\u{2551}", center(text, INNER_WIDTH))
}

/// Progress bar plus percentage, e.g. `████████░░░░░░░░  34%`.
fn progress_bar(fraction: f64) -> String {
    let fraction = fraction.clamp(0.0, 1.0);
    let filled = (fraction * BAR_WIDTH as f64).round() as usize;
    let bar: String = "\u{2588}".repeat(filled) + &"\u{2591}".repeat(BAR_WIDTH - filled);
    format!("{bar} {:3}%", (fraction * 100.0).round() as u32)
}

/// Build the countdown card.
///
/// `eased_fraction` is the displayed week progress, already run through
/// the easing stepper by the caller.
pub fn render_card(remaining: &Remaining, eased_fraction: f64, format: TimeFormat) -> Vec<String> {
    let horizontal = "\u{2550}".repeat(INNER_WIDTH);
    let countdown = if remaining.is_zero() {
        "IT'S FRIDAY 17:00".to_string()
    } else {
        remaining.to_string()
    };

    vec![
        format!("\u{2554}{horizontal}\u{2557}"),
        boxed("T G I F"),
        format!("\u{2560}{horizontal}\u{2563}"),
        boxed(""),
        boxed(&countdown),
        boxed(&progress_bar(eased_fraction)),
        boxed(&format!("NEXT: {}", deadline_label(format))),
        boxed(""),
        format!("\u{255a}{horizontal}\u{255d}"),
        center("f toggle 12h/24h \u{b7} q quit", INNER_WIDTH + 2),
    ]
}

/// Take over the terminal: raw mode, alternate screen, hidden cursor.
pub fn setup(stdout: &mut io::Stdout) -> io::Result<()> {
    enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen, Hide)
}

/// Give the terminal back. Safe to call even if setup half-failed.
pub fn restore(stdout: &mut io::Stdout) -> io::Result<()> {
    execute!(stdout, Show, LeaveAlternateScreen)?;
    disable_raw_mode()
}

/// Redraw the whole card at the top-left corner.
pub fn draw(stdout: &mut io::Stdout, lines: &[String]) -> io::Result<()> {
    queue!(stdout, MoveTo(0, 0), Clear(ClearType::All))?;
    for line in lines {
        queue!(stdout, Print(line), MoveToNextLine(1))?;
    }
    stdout.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn remaining() -> Remaining {
        Remaining { days: 4, hours: 17, minutes: 0, seconds: 9 }
    }

    #[test]
    fn test_card_lines_share_a_width() {
        let lines = render_card(&remaining(), 0.5, TimeFormat::TwentyFourHour);
        let width = lines[0].chars().count();
        assert_eq!(width, INNER_WIDTH + 2);
        for line in &lines {
            assert_eq!(line.chars().count(), width, "misaligned line: {line:?}");
        }
    }

    #[test]
    fn test_card_shows_countdown_and_label() {
        let lines = render_card(&remaining(), 0.5, TimeFormat::TwentyFourHour);
        let card = lines.join("\n");
        assert!(card.contains("4d 17h 00m 09s"));
        assert!(card.contains("NEXT: FRIDAY 17:00 UTC"));
    }

    #[test]
    fn test_card_label_follows_format() {
        let lines = render_card(&remaining(), 0.5, TimeFormat::TwelveHour);
        assert!(lines.join("\n").contains("NEXT: FRIDAY 5:00 PM UTC"));
    }

    #[test]
    fn test_card_at_deadline() {
        let zero = Remaining { days: 0, hours: 0, minutes: 0, seconds: 0 };
        let lines = render_card(&zero, 1.0, TimeFormat::TwentyFourHour);
        assert!(lines.join("\n").contains("IT'S FRIDAY 17:00"));
    }

    #[test]
    fn test_progress_bar_fill() {
        let empty = progress_bar(0.0);
        assert_eq!(empty.matches('\u{2588}').count(), 0);
        assert!(empty.ends_with("  0%"));

        let half = progress_bar(0.5);
        assert_eq!(half.matches('\u{2588}').count(), BAR_WIDTH / 2);
        assert!(half.ends_with(" 50%"));

        let full = progress_bar(1.0);
        assert_eq!(full.matches('\u{2588}').count(), BAR_WIDTH);
        assert!(full.ends_with("100%"));

        // Out-of-range values clamp instead of panicking.
        assert_eq!(progress_bar(1.5), progress_bar(1.0));
        assert_eq!(progress_bar(-0.5), progress_bar(0.0));
    }

    #[test]
    fn test_center_pads_evenly() {
        assert_eq!(center("ab", 6), "  ab  ");
        assert_eq!(center("abc", 6), " abc  ");
        assert_eq!(center("toolong", 3), "toolong");
    }
}
