use super::prompt::StdinConfirm;
use super::{Cli, Command};
use anyhow::{Context, Result, anyhow, bail};
use chrono::Utc;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use intimation_desk::collection::{GroupCount, export_to_dir};
use intimation_desk::lifecycle::AutoConfirm;
use intimation_desk::sheet::{SheetState, sheet_router};
use intimation_desk::view::{ListRow, render_detail};
use intimation_desk::{
    DeskConfig, FileManager, FileRecord, ListQuery, Outcome, Schema, SortDirection, SortKey,
    StatusFilter, open_manager,
};
use std::path::PathBuf;

pub async fn run(cli: Cli) -> Result<()> {
    let mut config = DeskConfig::from_env();
    if let Some(endpoint) = &cli.endpoint {
        config = config.endpoint(endpoint);
    }
    if let Some(dir) = &cli.data_dir {
        config = config.data_dir(dir);
    }

    match cli.command {
        Command::Schema => {
            intimation_desk::verify_registry().context("field catalog is inconsistent")?;
            print_schema();
            Ok(())
        }
        Command::Serve { addr, sheet } => serve(&addr, sheet).await,
        command => {
            let mut manager =
                open_manager(&config).context("failed to open the case file store")?;
            if let Outcome::Failed(notice) = manager.load().await {
                bail!("{}", notice);
            }
            run_with_manager(command, &mut manager, &config).await
        }
    }
}

async fn run_with_manager(command: Command, manager: &mut FileManager, config: &DeskConfig) -> Result<()> {
    match command {
        Command::List {
            search,
            status,
            sort,
            desc,
        } => {
            let mut query = ListQuery::new()
                .with_search(search.unwrap_or_default())
                .with_status(StatusFilter::parse(&status));
            if let Some(field) = sort {
                let direction = if desc {
                    SortDirection::Descending
                } else {
                    SortDirection::Ascending
                };
                query = query.with_sort(SortKey::parse(&field, direction)?);
            }
            print_list(manager, &query);
            Ok(())
        }
        Command::Show { id } => {
            let record = manager
                .get(&id)
                .ok_or_else(|| anyhow!("file not found or has been removed: {}", id))?;
            print!("{}", render_detail(record)?);
            Ok(())
        }
        Command::Create { set } => {
            let mut draft = manager.new_draft();
            apply_assignments(&mut draft, &set)?;
            let id = draft.id().to_string();
            report(manager.create(draft).await, &id, "created")
        }
        Command::Update { id, set } => {
            let mut record = manager
                .get(&id)
                .cloned()
                .ok_or_else(|| anyhow!("file not found or has been removed: {}", id))?;
            apply_assignments(&mut record, &set)?;
            report(manager.update(record).await, &id, "updated")
        }
        Command::Delete { id, yes } => {
            let outcome = if yes {
                manager.delete(&id, &AutoConfirm(true)).await
            } else {
                manager.delete(&id, &StdinConfirm).await
            };
            report(outcome, &id, "deleted")
        }
        Command::Export { out } => {
            let dir = out.unwrap_or_else(|| config.export_dir.clone());
            match export_to_dir(manager.records(), &dir, Utc::now().date_naive())? {
                Some(path) => println!(
                    "Exported {} files to {}",
                    manager.records().len(),
                    path.display()
                ),
                None => println!("Nothing to export"),
            }
            Ok(())
        }
        Command::Stats => {
            print_stats(manager)?;
            Ok(())
        }
        Command::Schema | Command::Serve { .. } => {
            bail!("this command does not use the case file store")
        }
    }
}

fn apply_assignments(record: &mut FileRecord, assignments: &[String]) -> Result<()> {
    for assignment in assignments {
        let (field, value) = assignment
            .split_once('=')
            .ok_or_else(|| anyhow!("invalid assignment '{}'. Expected FIELD=VALUE", assignment))?;
        record
            .assign(field.trim(), value)
            .with_context(|| format!("cannot set {}", field.trim()))?;
    }
    Ok(())
}

fn report(outcome: Outcome, id: &str, done: &str) -> Result<()> {
    match outcome {
        Outcome::Applied => {
            println!("File {} {}", id, done);
            Ok(())
        }
        Outcome::Cancelled => {
            println!("Nothing deleted");
            Ok(())
        }
        Outcome::NotFound => bail!("file not found or has been removed: {}", id),
        Outcome::Failed(notice) => bail!("{}", notice),
    }
}

async fn serve(addr: &str, sheet: Option<PathBuf>) -> Result<()> {
    let state = match sheet {
        Some(path) => SheetState::open(path)
            .await
            .context("failed to open sheet file")?,
        None => SheetState::in_memory(),
    };

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind to {addr}"))?;
    tracing::info!(address = %addr, "sheet service started");

    axum::serve(listener, sheet_router(state))
        .with_graceful_shutdown(async {
            if let Err(err) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %err, "unable to install Ctrl+C signal handler");
            }
        })
        .await
        .context("server error")?;
    Ok(())
}

// ============================================================================
// Tables
// ============================================================================

fn header_cell(label: &str) -> Cell {
    Cell::new(label).fg(Color::Cyan).add_attribute(Attribute::Bold)
}

fn new_table<'a>(headers: impl IntoIterator<Item = &'a str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(headers.into_iter().map(header_cell).collect::<Vec<_>>());
    table
}

fn print_list(manager: &FileManager, query: &ListQuery) {
    let rows = manager.query(query);
    let mut table = new_table(ListRow::HEADERS);
    for record in &rows {
        table.add_row(ListRow::from_record(record).cells());
    }
    println!("{table}");

    println!("{} of {} files", rows.len(), manager.records().len());
    if !query.is_default() {
        println!("(filtered or sorted; run without options for the default view)");
    }
    println!("Statuses: {}", manager.status_choices().join(" | "));
}

fn print_groups(title: &str, groups: &[GroupCount]) {
    let mut table = new_table([title, "Files"]);
    for group in groups {
        let label = if group.value.is_empty() { "-" } else { group.value.as_str() };
        table.add_row(vec![
            Cell::new(label),
            Cell::new(group.count).set_alignment(CellAlignment::Right),
        ]);
    }
    println!("{table}");
}

fn print_stats(manager: &FileManager) -> Result<()> {
    let summary = manager.summary()?;

    let mut tiles = new_table(["Total Files", "In Party", "Insurance Fwd", "Compensated"]);
    tiles.add_row(vec![
        summary.total,
        summary.in_party,
        summary.forwarded_to_insurance,
        summary.compensated,
    ]);
    println!("{tiles}");

    if summary.total == 0 {
        println!("No data available");
        return Ok(());
    }
    print_groups("File Status", &summary.by_status);
    print_groups("Accident Type", &summary.by_accident_type);
    Ok(())
}

fn print_schema() {
    let schema = Schema::global();
    let mut table = new_table(["Section", "Field", "Header", "Kind", "Options"]);
    for field in schema.fields() {
        let options = if field.options.is_empty() {
            String::new()
        } else {
            field.options.len().to_string()
        };
        let mut id = field.id.to_string();
        if field.hidden {
            id.push_str(" (hidden)");
        }
        table.add_row(vec![
            field.section.title().to_string(),
            id,
            field.header.to_string(),
            field.kind.name().to_string(),
            options,
        ]);
    }
    println!("{table}");
    println!("{} fields in {} sections", schema.len(), schema.sections().len());
}
