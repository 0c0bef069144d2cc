use colored::Colorize;
use depot_store::ItemStore;
use depot_types::{ElectronicItem, InventoryItem, ItemId, ItemKind};
use depot_warehouse::{render_error, Presenter, Render, WarehouseManager};

use crate::cli::*;
use crate::config::DepotConfig;

/// Prints lines to stdout, error reports in red.
struct ConsolePresenter;

impl Presenter for ConsolePresenter {
    fn line(&self, line: &str) {
        if line.starts_with("[Error]") {
            println!("{}", line.red());
        } else {
            println!("{line}");
        }
    }
}

pub fn run_command(cli: Cli, config: DepotConfig) -> anyhow::Result<()> {
    match cli.command {
        Command::Demo(_) => cmd_demo(&config),
        Command::List(args) => cmd_list(args, &config),
        Command::Export(args) => cmd_export(args, &config),
        Command::Import(args) => cmd_import(args, &config),
    }
}

fn manager(config: &DepotConfig) -> WarehouseManager {
    WarehouseManager::with_config(config.warehouse.clone()).with_presenter(ConsolePresenter)
}

fn header(title: &str) {
    println!("\n{}", format!("=== {title} ===").bold());
}

fn cmd_demo(config: &DepotConfig) -> anyhow::Result<()> {
    let manager = manager(config);
    manager.seed_sample_data()?;

    header("Grocery Items");
    manager.print_all(manager.groceries());

    header("Electronic Items");
    manager.print_all(manager.electronics());

    header("Testing Errors");
    if let Err(e) = manager
        .electronics()
        .add(ElectronicItem::new(1, "Tablet", 5, "Apple", 12))
    {
        println!("{}", render_error(&e).red());
    }

    manager.remove_by_id(manager.groceries(), ItemId::new(99));

    if let Err(e) = manager.electronics().update_quantity(ItemId::new(2), -5) {
        println!("{}", render_error(&e).red());
    }

    manager.increase_stock(manager.electronics(), ItemId::new(1), 5);

    header("End of Program");
    Ok(())
}

fn cmd_list(args: ListArgs, config: &DepotConfig) -> anyhow::Result<()> {
    let manager = manager(config);
    match &args.from {
        Some(path) => {
            let format = args.format.unwrap_or(config.format);
            if manager.load(path, format)?.is_none() {
                println!("No existing data file found.");
                return Ok(());
            }
        }
        None => manager.seed_sample_data()?,
    }

    for kind in ItemKind::ALL {
        if args.kind.is_some_and(|k| k != kind) {
            continue;
        }
        match kind {
            ItemKind::Electronic => {
                header("Electronic Items");
                list_repo(&manager, manager.electronics(), args.low_stock);
            }
            ItemKind::Grocery => {
                header("Grocery Items");
                list_repo(&manager, manager.groceries(), args.low_stock);
            }
        }
    }
    Ok(())
}

fn list_repo<T, S>(manager: &WarehouseManager, repo: &S, low_stock: bool)
where
    T: InventoryItem + Render,
    S: ItemStore<T>,
{
    if !low_stock {
        manager.print_all(repo);
        return;
    }
    let low = manager.low_stock(repo);
    if low.is_empty() {
        println!("{}", "No low-stock items.".green());
    }
    for item in low {
        println!("{}", item.render().yellow());
    }
}

fn cmd_export(args: ExportArgs, config: &DepotConfig) -> anyhow::Result<()> {
    let path = args.path.unwrap_or_else(|| config.data_file.clone());
    let format = args.format.unwrap_or(config.format);

    let manager = manager(config);
    manager.seed_sample_data()?;
    let count = manager.save(&path, format)?;
    println!(
        "{} Saved {} items to {} ({})",
        "✓".green().bold(),
        count.to_string().bold(),
        path.display(),
        format
    );
    Ok(())
}

fn cmd_import(args: ImportArgs, config: &DepotConfig) -> anyhow::Result<()> {
    let path = args.path.unwrap_or_else(|| config.data_file.clone());
    let format = args.format.unwrap_or(config.format);

    let manager = manager(config);
    match manager.load(&path, format)? {
        None => println!("No existing data file found."),
        Some(count) => {
            println!(
                "{} Loaded {} items from {}",
                "✓".green().bold(),
                count.to_string().bold(),
                path.display()
            );
            for record in manager.snapshot() {
                println!("{}", record.render());
            }
        }
    }
    Ok(())
}
