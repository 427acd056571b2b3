//! Live dashboard.
//!
//! Redraws the header (title, date/time, theme), the progress bar and the
//! task list on every clock tick. Two producer threads feed one event
//! channel: the ticker from [`taskmasterapp::clock`] and a key reader.
//! Quitting drops the [`Clock`] handle first, which stops and joins the
//! ticker thread before the terminal is restored.

use super::print::{format_progress_line, format_task_line};
use super::styles::{CLOCK_STYLE, DIM_STYLE, TITLE_STYLE};
use chrono::Local;
use console::{Key, Term};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;
use taskmasterapp::api::ThemeAction;
use taskmasterapp::clock::{self, Clock};
use taskmasterapp::commands::theme::theme_name;
use taskmasterapp::error::Result;
use taskmasterapp::init::AppContext;
use taskmasterapp::model::Filter;

enum WatchEvent {
    Tick,
    Key(Key),
}

pub(super) fn run(ctx: &AppContext) -> Result<()> {
    let term = Term::stdout();
    let (events_tx, events) = mpsc::channel();

    let (ticker, ticks) = Clock::start(Duration::from_secs(1));
    {
        let events_tx = events_tx.clone();
        thread::spawn(move || {
            while ticks.recv().is_ok() {
                if events_tx.send(WatchEvent::Tick).is_err() {
                    break;
                }
            }
        });
    }

    let key_term = term.clone();
    thread::spawn(move || loop {
        match key_term.read_key() {
            Ok(key) => {
                if events_tx.send(WatchEvent::Key(key)).is_err() {
                    break;
                }
            }
            Err(_) => break,
        }
    });

    term.hide_cursor()?;
    draw(&term, ctx)?;

    loop {
        match events.recv() {
            Ok(WatchEvent::Tick) => draw(&term, ctx)?,
            Ok(WatchEvent::Key(Key::Char('q'))) | Ok(WatchEvent::Key(Key::Escape)) => break,
            Ok(WatchEvent::Key(_)) => {}
            Err(_) => break,
        }
    }

    // Stop the ticker before touching the terminal again
    drop(ticker);
    term.show_cursor()?;
    Ok(())
}

fn draw(term: &Term, ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_tasks(Filter::All)?;
    let dark = ctx.api.theme(ThemeAction::Show)?.theme;
    let now = Local::now();

    let mut lines = Vec::new();
    lines.push(format!(
        "{}  {}",
        TITLE_STYLE.apply_to("Task Master"),
        DIM_STYLE.apply_to(format!("({})", theme_name(dark.unwrap_or(true))))
    ));
    lines.push(format!(
        "{}  {}",
        clock::format_date(now),
        CLOCK_STYLE.apply_to(clock::format_time(now))
    ));
    lines.push(String::new());

    if let Some(progress) = result.progress {
        lines.push(format_progress_line(&progress));
        lines.push(String::new());
    }

    if result.listed_tasks.is_empty() {
        lines.push("No tasks found.".to_string());
    } else {
        for dt in &result.listed_tasks {
            lines.push(format_task_line(dt));
        }
    }

    lines.push(String::new());
    lines.push(format!("{}", DIM_STYLE.apply_to("press q to quit")));

    term.clear_screen()?;
    term.write_line(&lines.join("\n"))?;
    Ok(())
}
