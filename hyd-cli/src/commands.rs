use crate::cli::{ListCommands, NewArgs, OutputFormat, SettingsCommands};
use anyhow::{bail, Context, Result};
use chrono::Utc;
use hyd_core::{
    ActionOutcome, Document, Draft, Entry, Journal, ListKind, Preview, Settings, ShareFile,
    SETTING_KEYS,
};
use log::debug;
use serde_json::json;
use std::io::{IsTerminal, Read};
use std::path::{Path, PathBuf};

pub fn run_new(journal: &mut Journal, args: NewArgs, format: OutputFormat) -> Result<()> {
    let mut entry = match (args.from_draft, args.from_archive) {
        (Some(i), _) => journal.restore_draft(i)?,
        (None, Some(i)) => journal.restore_document(i)?,
        (None, None) => Entry::default(),
    };

    if let Some(title) = args.title {
        entry.title = title;
    }
    if let Some(body) = read_body(args.body, args.body_file.as_deref())? {
        entry.body = body;
    }
    if let Some(link) = args.link {
        entry.link = link;
    }
    if let Some(cite) = args.cite {
        entry.citation = cite;
    }
    if let Some(author) = args.author {
        entry.author = author;
    }
    if let Some(tags) = args.tags {
        entry.tags = tags;
    }

    let now = Utc::now();
    if args.draft {
        let draft = journal.save_draft(&entry, now)?;
        match format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(draft)?),
            OutputFormat::Text => println!("Saved draft {}", draft.display_title()),
        }
    } else if args.export {
        let share = journal.export_entry(&entry, now)?;
        deliver(share, args.out, format)?;
    } else {
        let doc = journal.save_entry(&entry, now)?;
        match format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(doc)?),
            OutputFormat::Text => println!("Saved {}", doc.filename),
        }
    }
    Ok(())
}

pub fn run_list(journal: &mut Journal, list: ListKind, cmd: ListCommands, format: OutputFormat) -> Result<()> {
    match cmd {
        ListCommands::List => print_list(journal, list, format)?,
        ListCommands::Show { index } => {
            let preview = match list {
                ListKind::Archive => journal.preview_document(index)?,
                ListKind::Drafts => journal.preview_draft(index)?,
            };
            print!("{}", preview.markdown);
        }
        ListCommands::Preview { index } => {
            let preview = match list {
                ListKind::Archive => journal.preview_document(index)?,
                ListKind::Drafts => journal.preview_draft(index)?,
            };
            print_preview(&preview, format)?;
        }
        ListCommands::Restore { index } => {
            let entry = match list {
                ListKind::Archive => journal.restore_document(index)?,
                ListKind::Drafts => journal.restore_draft(index)?,
            };
            print_entry(&entry, format)?;
        }
        ListCommands::Export { index, out } => {
            let share = match list {
                ListKind::Archive => journal.export_document(index)?,
                ListKind::Drafts => journal.export_draft(index)?,
            };
            deliver(share, out, format)?;
        }
        ListCommands::Delete { index } => {
            let name = match list {
                ListKind::Archive => journal.delete_document(index)?.filename,
                ListKind::Drafts => journal.delete_draft(index)?.display_title().to_string(),
            };
            println!("{}", deleted_message(&name, format));
        }
        ListCommands::Swipe { gesture, index, out } => {
            match journal.perform(list, gesture, index)? {
                ActionOutcome::Deleted(name) => println!("{}", deleted_message(&name, format)),
                ActionOutcome::Restored(entry) => print_entry(&entry, format)?,
                ActionOutcome::Exported(share) => deliver(share, out, format)?,
                ActionOutcome::Previewed(preview) => print_preview(&preview, format)?,
            }
        }
    }
    Ok(())
}

pub fn run_settings(settings_path: &Path, cmd: SettingsCommands, format: OutputFormat) -> Result<()> {
    match cmd {
        SettingsCommands::Show => {
            let settings = Settings::load(settings_path);
            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&settings)?),
                OutputFormat::Text => {
                    for key in SETTING_KEYS {
                        println!("{key} = {}", settings.get(key)?);
                    }
                }
            }
        }
        SettingsCommands::Get { key } => {
            println!("{}", Settings::load(settings_path).get(&key)?);
        }
        SettingsCommands::Set { key, value } => {
            let mut settings = Settings::load(settings_path);
            settings.set(&key, &value)?;
            settings
                .save(settings_path)
                .with_context(|| format!("Failed to write {}", settings_path.display()))?;
            println!("{key} = {}", settings.get(&key)?);
        }
        SettingsCommands::Reset => {
            Settings::default()
                .save(settings_path)
                .with_context(|| format!("Failed to write {}", settings_path.display()))?;
            println!("Settings reset");
        }
        SettingsCommands::Path => println!("{}", settings_path.display()),
    }
    Ok(())
}

fn read_body(body: Option<String>, body_file: Option<&Path>) -> Result<Option<String>> {
    if let Some(body) = body {
        return Ok(Some(body));
    }
    if let Some(path) = body_file {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read body from {}", path.display()))?;
        return Ok(Some(text));
    }
    let stdin = std::io::stdin();
    if stdin.is_terminal() {
        return Ok(None);
    }
    let mut text = String::new();
    stdin.lock().read_to_string(&mut text).context("Failed to read body from stdin")?;
    debug!("read {} bytes of body from stdin", text.len());
    Ok(if text.trim().is_empty() { None } else { Some(text) })
}

/// Copies a transient export into `out` (or the current directory) and
/// removes the transient copy.
fn deliver(share: ShareFile, out: Option<PathBuf>, format: OutputFormat) -> Result<()> {
    let dest_dir = match out {
        Some(dir) => dir,
        None => std::env::current_dir().context("Failed to resolve current directory")?,
    };
    let dest = share.persist_to(&dest_dir)?;
    share.cleanup()?;
    match format {
        OutputFormat::Json => println!("{}", json!({ "exported": dest })),
        OutputFormat::Text => println!("Exported {}", dest.display()),
    }
    Ok(())
}

fn deleted_message(name: &str, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => json!({ "deleted": name }).to_string(),
        OutputFormat::Text => format!("Deleted {name}"),
    }
}

fn print_list(journal: &Journal, list: ListKind, format: OutputFormat) -> Result<()> {
    match (list, format) {
        (ListKind::Archive, OutputFormat::Json) => {
            println!("{}", serde_json::to_string_pretty(journal.exports().items())?)
        }
        (ListKind::Drafts, OutputFormat::Json) => {
            println!("{}", serde_json::to_string_pretty(journal.drafts().items())?)
        }
        (ListKind::Archive, OutputFormat::Text) => {
            if journal.exports().is_empty() {
                println!("No archived items.");
            }
            for (i, doc) in journal.exports().iter().enumerate() {
                println!("{}", document_row(i, doc));
            }
        }
        (ListKind::Drafts, OutputFormat::Text) => {
            if journal.drafts().is_empty() {
                println!("No drafts.");
            }
            for (i, draft) in journal.drafts().iter().enumerate() {
                println!("{}", draft_row(i, draft));
            }
        }
    }
    Ok(())
}

fn document_row(index: usize, doc: &Document) -> String {
    format!("{index:>3}  {}  {}", doc.date.format("%Y-%m-%d %H:%M"), doc.filename)
}

fn draft_row(index: usize, draft: &Draft) -> String {
    format!("{index:>3}  {}  {}", draft.date.format("%Y-%m-%d %H:%M"), draft.display_title())
}

fn print_preview(preview: &Preview, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&json!({ "markdown": preview.markdown, "html": preview.html }))?
        ),
        OutputFormat::Text => print!("{}", preview.html),
    }
    Ok(())
}

fn print_entry(entry: &Entry, format: OutputFormat) -> Result<()> {
    if entry.title.is_empty() && entry.body.is_empty() {
        bail!("Nothing to restore");
    }
    match format {
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&json!({
                "title": entry.title,
                "body": entry.body,
                "link": entry.link,
                "citation": entry.citation,
                "author": entry.author,
                "tags": entry.tags,
                "draftId": entry.draft_id,
            }))?
        ),
        OutputFormat::Text => {
            println!("title: {}", entry.title);
            if !entry.link.is_empty() {
                println!("link: {}", entry.link);
            }
            if !entry.citation.is_empty() {
                println!("cited: {}", entry.citation);
            }
            println!();
            println!("{}", entry.body);
        }
    }
    Ok(())
}
