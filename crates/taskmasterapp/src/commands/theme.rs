use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{StorageBackend, TaskStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeAction {
    Show,
    Set(bool),
    Toggle,
}

pub fn theme_name(dark: bool) -> &'static str {
    if dark {
        "dark"
    } else {
        "light"
    }
}

pub fn run<B: StorageBackend>(store: &TaskStore<B>, action: ThemeAction) -> Result<CmdResult> {
    let current = store.load_theme();
    let mut result = CmdResult::default();

    match action {
        ThemeAction::Show => {
            result.theme = Some(current);
            result.add_message(CmdMessage::info(format!("Theme: {}", theme_name(current))));
        }
        ThemeAction::Set(dark) => {
            store.save_theme(dark)?;
            result.theme = Some(dark);
            result.add_message(CmdMessage::success(format!(
                "Theme set to {}",
                theme_name(dark)
            )));
        }
        ThemeAction::Toggle => {
            let next = !current;
            store.save_theme(next)?;
            result.theme = Some(next);
            result.add_message(CmdMessage::success(format!(
                "Theme set to {}",
                theme_name(next)
            )));
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryStore;

    #[test]
    fn show_reports_dark_by_default() {
        let store = InMemoryStore::new();
        let result = run(&store, ThemeAction::Show).unwrap();

        assert_eq!(result.theme, Some(true));
        assert_eq!(result.messages[0].content, "Theme: dark");
    }

    #[test]
    fn set_persists_the_preference() {
        let store = InMemoryStore::new();
        let result = run(&store, ThemeAction::Set(false)).unwrap();

        assert_eq!(result.theme, Some(false));
        assert!(!store.load_theme());
    }

    #[test]
    fn toggle_flips_and_persists() {
        let store = InMemoryStore::new();

        let result = run(&store, ThemeAction::Toggle).unwrap();
        assert_eq!(result.theme, Some(false));
        assert!(!store.load_theme());

        let result = run(&store, ThemeAction::Toggle).unwrap();
        assert_eq!(result.theme, Some(true));
        assert!(store.load_theme());
    }

    #[test]
    fn theme_is_independent_of_the_task_list() {
        let store = InMemoryStore::new();
        crate::commands::add::run(&store, "Task", crate::model::Priority::Medium).unwrap();

        run(&store, ThemeAction::Set(false)).unwrap();

        assert_eq!(store.load_tasks().len(), 1);
        assert!(!store.load_theme());
    }
}
