//! tgif - retro terminal countdown to the next Friday 17:00 UTC.
//!
//! Thin presentation shell around tgif-core: a once-a-second loop that
//! recomputes the countdown from an injected clock and redraws the card.
//! Every frame is an independent pure computation; nothing about the
//! countdown is accumulated between ticks.

mod config;
mod event;
mod ui;

use std::io;
use std::time::Duration;

use chrono::{DateTime, Utc};
use clap::Parser;
use crossterm::event::{KeyCode, KeyModifiers};
use tgif_core::{
    remaining_until_deadline, week_fraction, EaseOut, FixedTimeSource, SystemTimeSource,
    TimeFormat, TimeSource,
};

use event::{Event, EventHandler};

const TICK_RATE: Duration = Duration::from_secs(1);

#[derive(Parser, Debug)]
#[command(name = "tgif")]
#[command(about = "Retro countdown to the next Friday 17:00 UTC", version)]
struct Args {
    /// Clock format for the deadline label (12h or 24h).
    /// Overrides the saved preference for this run.
    #[arg(short, long)]
    format: Option<TimeFormat>,

    /// Print a single countdown card and exit.
    #[arg(long)]
    once: bool,

    /// Evaluate the countdown at a fixed RFC 3339 instant (UTC) instead
    /// of the system clock. Implies --once.
    #[arg(long, value_name = "INSTANT")]
    at: Option<DateTime<Utc>>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let mut cfg = config::load();
    let format = args.format.unwrap_or_else(|| cfg.time_format());

    if let Some(instant) = args.at {
        print_once(&FixedTimeSource::new(instant), format);
        return Ok(());
    }
    if args.once {
        print_once(&SystemTimeSource, format);
        return Ok(());
    }

    run(&mut cfg, format).await
}

/// One card straight to stdout, no terminal takeover, no easing.
fn print_once(clock: &dyn TimeSource, format: TimeFormat) {
    let remaining = remaining_until_deadline(clock.now());
    for line in ui::render_card(&remaining, week_fraction(&remaining), format) {
        println!("{line}");
    }
}

/// The live countdown loop.
async fn run(cfg: &mut config::Config, format: TimeFormat) -> Result<(), Box<dyn std::error::Error>> {
    let mut stdout = io::stdout();
    ui::setup(&mut stdout)?;

    let result = countdown_loop(&mut stdout, cfg, format).await;

    // Always hand the terminal back, even if the loop failed.
    let restored = ui::restore(&mut stdout);
    result?;
    restored?;
    Ok(())
}

async fn countdown_loop(
    stdout: &mut io::Stdout,
    cfg: &mut config::Config,
    mut format: TimeFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let clock = SystemTimeSource;
    let mut events = EventHandler::new(TICK_RATE);

    // Start the bar at the true fraction so the first frames do not glide
    // in from zero, then ease on every subsequent tick.
    let mut ease = EaseOut::new();
    let remaining = remaining_until_deadline(clock.now());
    ease.snap(week_fraction(&remaining));
    ui::draw(stdout, &ui::render_card(&remaining, ease.current(), format))?;

    while let Some(event) = events.next().await {
        match event {
            Event::Tick => {
                let remaining = remaining_until_deadline(clock.now());
                let eased = ease.step(week_fraction(&remaining));
                ui::draw(stdout, &ui::render_card(&remaining, eased, format))?;
            }
            Event::Key(key) => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => break,
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => break,
                KeyCode::Char('f') => {
                    format = format.toggle();
                    cfg.set_time_format(format);
                    config::save(cfg);
                    log::debug!("time format toggled to {format}");

                    let remaining = remaining_until_deadline(clock.now());
                    ui::draw(stdout, &ui::render_card(&remaining, ease.current(), format))?;
                }
                _ => {}
            },
        }
    }

    Ok(())
}
