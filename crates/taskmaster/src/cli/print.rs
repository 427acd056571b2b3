use colored::{ColoredString, Colorize};
use taskmasterapp::commands::{CmdMessage, MessageLevel};
use taskmasterapp::index::DisplayTask;
use taskmasterapp::list::Progress;
use taskmasterapp::model::Priority;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 72;
const BAR_WIDTH: usize = 24;
// Widest badge text is "Medium"
const BADGE_WIDTH: usize = 6;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_tasks(tasks: &[DisplayTask]) {
    if tasks.is_empty() {
        println!("No tasks found.");
        return;
    }

    for dt in tasks {
        println!("{}", format_task_line(dt));
    }
}

/// One task per line: index, checkbox, text (padded to a fixed column),
/// then the priority badge.
pub(super) fn format_task_line(dt: &DisplayTask) -> String {
    let idx_str = format!("{:>3}. ", dt.index);
    let checkbox = if dt.task.completed { "[x]" } else { "[ ]" };

    let fixed_width = idx_str.width() + checkbox.width() + 1 + BADGE_WIDTH + 2;
    let available = LINE_WIDTH.saturating_sub(fixed_width);

    let text_display = truncate_to_width(&dt.task.text, available);
    let padding = " ".repeat(available.saturating_sub(text_display.width()));

    let checkbox_colored = if dt.task.completed {
        checkbox.green()
    } else {
        checkbox.normal()
    };
    let text_colored = if dt.task.completed {
        text_display.strikethrough().dimmed()
    } else {
        text_display.normal()
    };

    format!(
        "{}{} {}{}  {}",
        idx_str,
        checkbox_colored,
        text_colored,
        padding,
        priority_badge(dt.task.priority)
    )
}

/// Progress line with the green completion bar, e.g.
/// `Daily Progress  [████████░░░░]  2 / 3 Done`
pub(super) fn print_progress(progress: &Progress) {
    println!("{}", format_progress_line(progress));
}

pub(super) fn format_progress_line(progress: &Progress) -> String {
    let filled = (progress.percentage / 100.0 * BAR_WIDTH as f64).round() as usize;
    let filled = filled.min(BAR_WIDTH);

    let bar = format!(
        "{}{}",
        "█".repeat(filled).green(),
        "░".repeat(BAR_WIDTH - filled).dimmed()
    );

    format!(
        "{}  [{}]  {} / {} Done",
        "Daily Progress".bold(),
        bar,
        progress.completed,
        progress.total
    )
}

fn priority_badge(priority: Priority) -> ColoredString {
    match priority {
        Priority::High => format!("{:<width$}", "High", width = BADGE_WIDTH).red(),
        Priority::Medium => format!("{:<width$}", "Medium", width = BADGE_WIDTH).yellow(),
        Priority::Low => format!("{:<width$}", "Low", width = BADGE_WIDTH).green(),
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use taskmasterapp::model::{Task, TaskId};

    fn display_task(text: &str, completed: bool, priority: Priority) -> DisplayTask {
        let mut task = Task::new(TaskId(1), text, priority);
        task.completed = completed;
        DisplayTask { task, index: 1 }
    }

    #[test]
    fn task_line_contains_index_checkbox_and_badge() {
        colored::control::set_override(false);
        let line = format_task_line(&display_task("Buy milk", false, Priority::High));
        colored::control::unset_override();

        assert!(line.contains("1. "));
        assert!(line.contains("[ ]"));
        assert!(line.contains("Buy milk"));
        assert!(line.contains("High"));
    }

    #[test]
    fn completed_task_shows_checked_box() {
        colored::control::set_override(false);
        let line = format_task_line(&display_task("Done", true, Priority::Low));
        colored::control::unset_override();

        assert!(line.contains("[x]"));
    }

    #[test]
    fn long_text_is_truncated_with_ellipsis() {
        colored::control::set_override(false);
        let long = "x".repeat(200);
        let line = format_task_line(&display_task(&long, false, Priority::Medium));
        colored::control::unset_override();

        assert!(line.contains('…'));
        assert!(line.width() <= LINE_WIDTH);
    }

    #[test]
    fn progress_line_shows_counts() {
        colored::control::set_override(false);
        let line = format_progress_line(&Progress {
            completed: 2,
            total: 3,
            percentage: 200.0 / 3.0,
        });
        colored::control::unset_override();

        assert!(line.contains("2 / 3 Done"));
        assert!(line.contains('█'));
        assert!(line.contains('░'));
    }

    #[test]
    fn empty_progress_bar_has_no_filled_cells() {
        colored::control::set_override(false);
        let line = format_progress_line(&Progress {
            completed: 0,
            total: 0,
            percentage: 0.0,
        });
        colored::control::unset_override();

        assert!(!line.contains('█'));
        assert!(line.contains("0 / 0 Done"));
    }

    #[test]
    fn truncate_keeps_short_strings_intact() {
        assert_eq!(truncate_to_width("short", 20), "short");
    }
}
