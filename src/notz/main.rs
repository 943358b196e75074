use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use notz::config::NotzConfig;
use notz::error::{NotzError, Result};
use notz::manager::NoteManager;
use notz::model::{Note, NoteUpdate};
use notz::store::json::JsonSerializer;
use std::path::PathBuf;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {}", "Error:".red(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut manager = init_manager(&cli)?;

    match cli.command {
        Commands::Add {
            title,
            priority,
            category,
        } => handle_add(&mut manager, title, priority, category),
        Commands::List {
            archived,
            active,
            priority,
        } => handle_list(&manager, archived, active, priority),
        Commands::Delete { index } => handle_delete(&mut manager, index),
        Commands::Update {
            index,
            title,
            priority,
            category,
        } => handle_update(&mut manager, index, title, priority, category),
        Commands::Archive { index } => handle_archive(&mut manager, index),
        Commands::Search { term } => handle_search(&manager, term),
        Commands::Count { priority } => handle_count(&manager, priority),
    }
}

fn data_file_path(cli: &Cli) -> Result<PathBuf> {
    if let Some(path) = &cli.file {
        return Ok(path.clone());
    }

    let proj_dirs = ProjectDirs::from("com", "notz", "notz")
        .ok_or_else(|| NotzError::Store("Could not determine data directory".to_string()))?;
    let data_dir = proj_dirs.data_dir();
    let config = NotzConfig::load(data_dir).unwrap_or_default();
    Ok(data_dir.join(config.data_file))
}

fn init_manager(cli: &Cli) -> Result<NoteManager<JsonSerializer>> {
    let data_file = data_file_path(cli)?;
    let exists = data_file.exists();

    let mut manager = NoteManager::new(JsonSerializer::new(data_file));
    if exists {
        manager.load()?;
    }
    Ok(manager)
}

fn handle_add(
    manager: &mut NoteManager<JsonSerializer>,
    title: String,
    priority: i32,
    category: String,
) -> Result<()> {
    manager.add(Note::new(title, priority, category));
    manager.store()?;
    println!(
        "{}",
        format!("Added note {}", manager.count() - 1).green()
    );
    Ok(())
}

fn handle_list(
    manager: &NoteManager<JsonSerializer>,
    archived: bool,
    active: bool,
    priority: Option<i32>,
) -> Result<()> {
    let listing = if let Some(p) = priority {
        manager.list_by_priority(p)
    } else if archived {
        manager.list_archived()
    } else if active {
        manager.list_active()
    } else {
        manager.list_all()
    };
    println!("{}", listing);
    Ok(())
}

fn handle_delete(manager: &mut NoteManager<JsonSerializer>, index: usize) -> Result<()> {
    match manager.delete(index) {
        Some(removed) => {
            manager.store()?;
            println!("{}", format!("Deleted: {}", removed).green());
        }
        None => println!("{}", format!("No note at index {}", index).yellow()),
    }
    Ok(())
}

fn handle_update(
    manager: &mut NoteManager<JsonSerializer>,
    index: usize,
    title: String,
    priority: i32,
    category: String,
) -> Result<()> {
    if manager.update(index, Some(NoteUpdate::new(title, priority, category))) {
        manager.store()?;
        println!("{}", format!("Updated note {}", index).green());
    } else {
        println!("{}", format!("No note at index {}", index).yellow());
    }
    Ok(())
}

fn handle_archive(manager: &mut NoteManager<JsonSerializer>, index: usize) -> Result<()> {
    if manager.archive(index) {
        manager.store()?;
        println!("{}", format!("Archived note {}", index).green());
    } else {
        println!(
            "{}",
            format!("Note {} is missing or already archived", index).yellow()
        );
    }
    Ok(())
}

fn handle_search(manager: &NoteManager<JsonSerializer>, term: String) -> Result<()> {
    let matches = manager.search_by_title(&term);
    if matches.is_empty() {
        println!("{}", "No matches".dimmed());
    } else {
        println!("{}", matches);
    }
    Ok(())
}

fn handle_count(manager: &NoteManager<JsonSerializer>, priority: Option<i32>) -> Result<()> {
    match priority {
        Some(p) => println!("{} notes with priority {}", manager.count_by_priority(p), p),
        None => println!(
            "{} notes ({} active, {} archived)",
            manager.count(),
            manager.count_active(),
            manager.count_archived()
        ),
    }
    Ok(())
}
