use super::print::{print_messages, print_progress, print_tasks};
use super::setup::{Cli, Commands, PriorityArg, ThemeArg};
use super::watch;
use clap::Parser;
use std::path::PathBuf;
use taskmasterapp::api::{ConfigAction, ThemeAction};
use taskmasterapp::error::Result;
use taskmasterapp::init::{initialize, AppContext};
use taskmasterapp::model::{Filter, Priority};

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let ctx = init_context(&cli);

    match cli.command {
        Some(Commands::Add { priority, text }) => handle_add(&ctx, &text.join(" "), priority),
        Some(Commands::List { filter }) => handle_list(&ctx, filter.into()),
        Some(Commands::Edit { index, text }) => handle_edit(&ctx, &index, &text.join(" ")),
        Some(Commands::Toggle { indexes }) => handle_toggle(&ctx, &indexes),
        Some(Commands::Delete { indexes }) => handle_delete(&ctx, &indexes),
        Some(Commands::Status) => handle_status(&ctx),
        Some(Commands::Theme { action }) => handle_theme(&ctx, action),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        Some(Commands::Watch) => watch::run(&ctx),
        None => handle_list(&ctx, Filter::All),
    }
}

fn init_context(cli: &Cli) -> AppContext {
    let data_override = cli.data_dir.as_ref().map(PathBuf::from);
    initialize(data_override)
}

fn handle_add(ctx: &AppContext, text: &str, priority: Option<PriorityArg>) -> Result<()> {
    let priority = priority
        .map(Priority::from)
        .unwrap_or(ctx.config.default_priority);

    let result = ctx.api.add_task(text, priority)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext, filter: Filter) -> Result<()> {
    let result = ctx.api.list_tasks(filter)?;

    if let Some(progress) = result.progress {
        print_progress(&progress);
        println!();
    }
    print_tasks(&result.listed_tasks);
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit(ctx: &AppContext, index: &str, text: &str) -> Result<()> {
    let result = ctx.api.edit_task(index, text)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_toggle(ctx: &AppContext, indexes: &[String]) -> Result<()> {
    let result = ctx.api.toggle_tasks(indexes)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &AppContext, indexes: &[String]) -> Result<()> {
    let result = ctx.api.delete_tasks(indexes)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_status(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.status()?;
    if let Some(progress) = result.progress {
        print_progress(&progress);
    }
    Ok(())
}

fn handle_theme(ctx: &AppContext, action: Option<ThemeArg>) -> Result<()> {
    let action = match action {
        None => ThemeAction::Show,
        Some(ThemeArg::Dark) => ThemeAction::Set(true),
        Some(ThemeArg::Light) => ThemeAction::Set(false),
        Some(ThemeArg::Toggle) => ThemeAction::Toggle,
    };

    let result = ctx.api.theme(action)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.config(action)?;
    if let Some(config) = &result.config {
        for (k, v) in config.list_all() {
            println!("{} = {}", k, v);
        }
    }
    print_messages(&result.messages);
    Ok(())
}
