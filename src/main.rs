use chrono::Local;
use clap::Parser;
use daybook::application::edit_entry::edit_entry;
use daybook::application::init::init;
use daybook::application::overview::overview;
use daybook::application::{
    AppContext, ConfigService, EntryService, EntrySession, JournalService, WriteMode,
};
use daybook::cli::{
    format_dates, format_entry, format_journal_list, format_overview, Cli, Commands,
    JournalAction,
};
use daybook::domain::time_ref::resolve_date;
use daybook::error::DaybookError;
use daybook::infrastructure::{logging, DaybookHome};
use std::io;

fn main() {
    logging::init();
    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), DaybookError> {
    let Some(command) = cli.command else {
        println!("daybook - color-tagged journals, one entry per day");
        println!("Use --help for usage information");
        return Ok(());
    };

    match command {
        Commands::Init { path } => {
            let home = init(&path)?;
            println!("Initialized daybook at {}", home.root().display());
            Ok(())
        }
        Commands::Config { key, value, list } => {
            let service = ConfigService::new(DaybookHome::discover()?);

            if list {
                let config = service.list()?;
                println!("editor = {}", config.editor);
                println!("default_color = {}", config.default_color()?);
                println!("database = {}", config.database);
                println!("created = {}", config.created.to_rfc3339());
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
            } else {
                println!("Usage: daybook config [--list | <key> [<value>]]");
                println!("Valid keys: editor, default_color, database, created");
            }
            Ok(())
        }
        command => with_context(|ctx| run_with_store(ctx, command)),
    }
}

/// Open the discovered daybook, run `f`, and close the store even if `f` failed
fn with_context<F>(f: F) -> Result<(), DaybookError>
where
    F: FnOnce(&AppContext) -> Result<(), DaybookError>,
{
    let ctx = AppContext::open(DaybookHome::discover()?)?;
    let result = f(&ctx);
    let closed = ctx.close();
    result.and(closed)
}

fn run_with_store(ctx: &AppContext, command: Commands) -> Result<(), DaybookError> {
    let today = Local::now().date_naive();
    let journals = JournalService::new(&ctx.view_model, &ctx.config);
    let entries = EntryService::new(&ctx.view_model, &ctx.config);

    match command {
        Commands::Journal { action } => match action {
            JournalAction::Add { title, color } => {
                let journal = journals.add(&title, color.as_deref())?;
                println!("Created journal '{}' [{}]", journal.title, journal.id);
            }
            JournalAction::List => print!("{}", format_journal_list(&journals.list()?)),
            JournalAction::Edit {
                journal,
                title,
                color,
            } => {
                let journal = journals.edit(&journal, title.as_deref(), color.as_deref())?;
                println!("Updated journal '{}' ({})", journal.title, journal.color);
            }
            JournalAction::Delete { journal } => {
                let (journal, removed) = journals.delete(&journal)?;
                println!(
                    "Deleted journal '{}' and {} entries",
                    journal.title, removed
                );
            }
        },
        Commands::Write {
            journal,
            content,
            date,
            images,
            append,
        } => {
            let date = resolve_date(&date, today)?;
            let mode = if append {
                WriteMode::Append
            } else {
                WriteMode::Replace
            };
            match entries.write(&journal, date, &content.join(" "), &images, mode)? {
                Some(entry) => println!("Saved entry for {}", entry.date_key()),
                None => println!("Nothing to save"),
            }
        }
        Commands::Show { journal, date } => {
            let date = resolve_date(&date, today)?;
            let (journal, entry) = entries.show(&journal, date)?;
            print!("{}", format_entry(&journal, &entry));
        }
        Commands::Edit { journal, date } => {
            let date = resolve_date(&date, today)?;
            match edit_entry(ctx, &journal, date)? {
                Some(entry) => println!("Saved entry for {}", entry.date_key()),
                None => println!("Nothing to save"),
            }
        }
        Commands::Browse { journal, date } => {
            let date = resolve_date(&date, today)?;
            let journal = journals.resolve(&journal)?;
            let mut session = EntrySession::open(&ctx.view_model, journal, date)?;
            session.run(io::stdin().lock(), &mut io::stdout())?;
        }
        Commands::Remove { journal, date } => {
            let date = resolve_date(&date, today)?;
            let entry = entries.remove(&journal, date)?;
            println!("Deleted entry for {}", entry.date_key());
        }
        Commands::Overview { journal } => {
            let (_, cards) = overview(&ctx.view_model, &ctx.config, &journal)?;
            print!("{}", format_overview(&cards));
        }
        Commands::Dates { journal } => {
            let (_, dates) = entries.dates(&journal)?;
            print!("{}", format_dates(&dates));
        }
        Commands::Init { .. } | Commands::Config { .. } => {}
    }
    Ok(())
}
