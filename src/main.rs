//! `verselight` - look up scripture references from the command line.
//!
//! Usage:
//!   verselight lookup <lang> <reference>
//!   verselight today <lang> [YYYY-MM-DD]
//!   verselight month <lang> <YYYY-MM>
//!   verselight year <lang> <YYYY>
//!   verselight random <lang>
//!   verselight search <lang> <query>
//!   verselight books <lang>
//!   verselight sessions
//!   verselight logout <area>

use chrono::NaiveDate;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use verselight::bible::catalog::book_index;
use verselight::bible::{LanguageService, VerseEngine};
use verselight::config::Config;
use verselight::constants::search::MAX_SEARCH_RESULTS;
use verselight::error::{Error, Result};
use verselight::services::display::{random_verse, DisplayedVerse, VerseDisplay};
use verselight::services::entries::EntryTable;
use verselight::services::search::{search, suggest_books};
use verselight::session::{AdminArea, FileSessionStorage, SessionGate};

const USAGE: &str = "usage: verselight <lookup|today|month|year|random|search|books> <lang> [args]\n       \
                     verselight sessions\n       \
                     verselight logout <area>";

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::load()?;
    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(command) = args.first().map(String::as_str) else {
        return Err(Error::Msg(USAGE.to_string()));
    };

    match command {
        "sessions" => return list_sessions(&config),
        "logout" => return logout(&config, args.get(1).map(String::as_str)),
        _ => {}
    }

    let language = args.get(1).map_or(config.default_language.as_str(), String::as_str);
    let rest = args.get(2..).map(|a| a.join(" ")).unwrap_or_default();

    let engine = VerseEngine::from_config(&config);
    let service = engine.for_language(language)?;
    tracing::debug!("{} v{}: {command} in {}", config.app_name(), config.app_version(), service.language().name());

    match command {
        "lookup" => lookup(&service, &rest).await,
        "today" => {
            let date = if rest.is_empty() {
                chrono::Local::now().date_naive()
            } else {
                parse_date(&rest, "%Y-%m-%d")?
            };
            let table = entry_table(&config)?;
            let verse = VerseDisplay::new(&engine, &table).for_date(language, date).await?;
            print_displayed(verse, &format!("No verse assigned to {date}"))
        }
        "month" => {
            let date = parse_date(&format!("{rest}-01"), "%Y-%m-%d")?;
            let table = entry_table(&config)?;
            let verse = VerseDisplay::new(&engine, &table).for_month(language, date).await?;
            print_displayed(verse, &format!("No verse of the month for {rest}"))
        }
        "year" => {
            let date = parse_date(&format!("{rest}-01-01"), "%Y-%m-%d")?;
            let table = entry_table(&config)?;
            let verse = VerseDisplay::new(&engine, &table).for_year(language, date).await?;
            print_displayed(verse, &format!("No verse of the year for {rest}"))
        }
        "random" => {
            let verse = random_verse(&service, &mut rand::thread_rng()).await;
            print_displayed(verse, "Verse document unavailable")
        }
        "search" => {
            let hits = search(&service, &rest, MAX_SEARCH_RESULTS).await;
            if hits.is_empty() {
                return Err(Error::Lookup(format!("No verses contain {rest:?}")));
            }
            for hit in &hits {
                println!("{}: {}", hit.reference, hit.text);
            }
            Ok(())
        }
        "books" => {
            for (position, name) in service.catalog().iter().enumerate() {
                println!("{:>2}. {name}", position + 1);
            }
            Ok(())
        }
        _ => Err(Error::Msg(USAGE.to_string())),
    }
}

async fn lookup(service: &LanguageService<'_>, reference: &str) -> Result<()> {
    if let Some(text) = service.lookup(reference).await {
        println!("{text}");
        return Ok(());
    }

    if let Some(parsed) = service.parse(reference) {
        if book_index(service.catalog(), &parsed.book).is_none() {
            let suggestions = suggest_books(service.catalog(), &parsed.book);
            if !suggestions.is_empty() {
                eprintln!("Unknown book {:?}; did you mean: {}?", parsed.book, suggestions.join(", "));
            }
        }
    }
    Err(Error::Lookup(format!("{reference:?} not found in {}", service.language().name())))
}

fn print_displayed(verse: Option<DisplayedVerse>, missing: &str) -> Result<()> {
    let verse = verse.ok_or_else(|| Error::Lookup(missing.to_string()))?;
    println!("{}", verse.reference);
    println!("{}", verse.text);
    if let Some(note) = verse.annotation {
        println!("\n{note}");
    }
    Ok(())
}

fn parse_date(value: &str, format: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), format).map_err(|e| Error::Msg(format!("Invalid date {value:?}: {e}")))
}

fn entry_table(config: &Config) -> Result<EntryTable> {
    let path = config.entries_path.as_deref().ok_or_else(|| {
        Error::config(
            "ENTRIES_PATH is not set",
            "Point ENTRIES_PATH at a JSON export of the verse entries table",
        )
    })?;
    EntryTable::load(path)
}

fn session_storage(config: &Config) -> Result<FileSessionStorage> {
    let dir = config.session_dir.clone().ok_or_else(|| {
        Error::config("No session directory available", "Set SESSION_DIR to a writable directory")
    })?;
    Ok(FileSessionStorage::new(dir))
}

fn list_sessions(config: &Config) -> Result<()> {
    let storage = session_storage(config)?;
    println!("Sessions in {}", storage.dir().display());
    for area in AdminArea::all() {
        let gate = SessionGate::restore(*area, storage.clone());
        let status = if gate.is_logged_in() { "signed in" } else { "signed out" };
        println!("{:<9} {status}", area.name());
    }
    Ok(())
}

fn logout(config: &Config, area: Option<&str>) -> Result<()> {
    let area = area
        .and_then(AdminArea::from_name)
        .ok_or_else(|| Error::Msg("usage: verselight logout <events|magazine|branches|members>".to_string()))?;
    let gate = SessionGate::restore(area, session_storage(config)?);
    gate.logout()?;
    println!("{} signed out; log in again at {}", area.name(), area.login_route());
    Ok(())
}
