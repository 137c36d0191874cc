use clap::Parser;
use env_logger::{Builder, Env};
use snipz::api::DirAction;
use snipz::editor::edit_content;
use snipz::error::{Result, SnipzError};
use snipz::init::{initialize, SnipzContext};
use std::path::PathBuf;

mod args;
mod print;
use args::{Cli, Commands};
use print::{print_archives, print_content, print_messages, print_names, print_paths};

fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logger(verbose: bool) {
    // RUST_LOG still wins over the flag.
    let default = if verbose { "debug" } else { "warn" };
    Builder::from_env(Env::default().default_filter_or(default))
        .format_timestamp_millis()
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let mut ctx = initialize(None)?;

    match cli.command {
        Some(Commands::List { search }) => handle_list(&ctx, search),
        Some(Commands::New { name }) => handle_new(&mut ctx, name),
        Some(Commands::Show { name }) => handle_show(&ctx, name),
        Some(Commands::Save { name, content }) => handle_save(&mut ctx, name, content),
        Some(Commands::Edit { name }) => handle_edit(&mut ctx, name),
        Some(Commands::Delete { name }) => handle_delete(&mut ctx, name),
        Some(Commands::Search { query }) => handle_search(&ctx, query),
        Some(Commands::Path { names }) => handle_paths(&ctx, names),
        Some(Commands::Dir { path }) => handle_dir(&mut ctx, path),
        Some(Commands::Backup) => handle_backup(&ctx),
        Some(Commands::Backups) => handle_backups(&ctx),
        Some(Commands::Init) => handle_init(&ctx),
        None => handle_list(&ctx, None),
    }
}

fn handle_list(ctx: &SnipzContext, search: Option<String>) -> Result<()> {
    let result = ctx.api.list_snippets(search.as_deref())?;
    print_names(&result.listed);
    print_messages(&result.messages);
    Ok(())
}

fn handle_new(ctx: &mut SnipzContext, name: String) -> Result<()> {
    let result = ctx.api.create_snippet(&name)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_show(ctx: &SnipzContext, name: String) -> Result<()> {
    let result = ctx.api.view_snippet(&name)?;
    print_content(&result);
    Ok(())
}

fn handle_save(ctx: &mut SnipzContext, name: String, content: Option<String>) -> Result<()> {
    let content = match content {
        Some(c) => c,
        None => std::io::read_to_string(std::io::stdin()).map_err(SnipzError::Io)?,
    };
    let result = ctx.api.save_snippet(&name, &content)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit(ctx: &mut SnipzContext, name: String) -> Result<()> {
    let current = ctx.api.view_snippet(&name)?.content.unwrap_or_default();
    let edited = edit_content(&current)?;

    if edited == current {
        println!("No changes to {}.", name);
        return Ok(());
    }

    let result = ctx.api.save_snippet(&name, &edited)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut SnipzContext, name: String) -> Result<()> {
    let result = ctx.api.delete_snippet(&name)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_search(ctx: &SnipzContext, query: String) -> Result<()> {
    let result = ctx.api.search_snippets(&query)?;
    print_names(&result.listed);
    print_messages(&result.messages);
    Ok(())
}

fn handle_paths(ctx: &SnipzContext, names: Vec<String>) -> Result<()> {
    let result = ctx.api.snippet_paths(&names)?;
    print_paths(&result.paths);
    print_messages(&result.messages);
    Ok(())
}

fn handle_dir(ctx: &mut SnipzContext, path: Option<PathBuf>) -> Result<()> {
    let result = match path {
        Some(p) => ctx.api.dir(DirAction::Set(p))?,
        None => {
            let result = ctx.api.dir(DirAction::Show)?;
            print_paths(&result.paths);
            result
        }
    };
    print_messages(&result.messages);
    Ok(())
}

fn handle_backup(ctx: &SnipzContext) -> Result<()> {
    let result = ctx.api.backup_now()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_backups(ctx: &SnipzContext) -> Result<()> {
    let result = ctx.api.list_backups()?;
    print_archives(&result.archives);
    print_messages(&result.messages);
    Ok(())
}

fn handle_init(ctx: &SnipzContext) -> Result<()> {
    let result = ctx.api.init()?;
    print_messages(&result.messages);
    Ok(())
}
