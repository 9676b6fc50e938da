use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use rust_decimal::Decimal;

use storefront_client::domain::cache::ItemCache;
use storefront_client::domain::draft::OrderDraft;
use storefront_client::domain::errors::ValidationError;
use storefront_client::models::item::{Item, NewItem};
use storefront_client::models::order::Order;
use storefront_client::{ClientConfig, Storefront};

#[derive(Parser)]
#[command(
    name = "storefront",
    about = "Client for the inventory and orders services",
    version
)]
struct Cli {
    /// Print raw response JSON instead of tables
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Inspect and manage inventory items
    #[command(subcommand)]
    Items(ItemsCommand),
    /// Inspect and create orders
    #[command(subcommand)]
    Orders(OrdersCommand),
}

#[derive(Subcommand)]
enum ItemsCommand {
    /// List every item, including out-of-stock ones
    List,
    /// Show a single item
    Show { id: i64 },
    /// Create a new item
    Create {
        name: String,
        quantity: i32,
        price: Decimal,
    },
    /// Apply a signed quantity change, then show the reloaded list
    Adjust {
        id: i64,
        #[arg(allow_negative_numbers = true)]
        delta: i32,
    },
}

#[derive(Subcommand)]
enum OrdersCommand {
    /// List all orders, newest first
    List,
    /// Show a single order
    Show { id: i64 },
    /// Create an order from ITEM_ID:QTY[,ITEM_ID:QTY...] line specs
    Create { spec: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let cli = Cli::parse();
    let config = ClientConfig::from_env();
    log::debug!(
        "inventory at {}, orders at {}",
        config.inventory_url,
        config.orders_url
    );
    let store = Storefront::new(&config);

    match cli.command {
        Commands::Items(command) => handle_items(&store, command, cli.json).await,
        Commands::Orders(command) => handle_orders(&store, command, cli.json).await,
    }
}

async fn handle_items(store: &Storefront, command: ItemsCommand, json: bool) -> Result<()> {
    match command {
        ItemsCommand::List => {
            let items = store.inventory.list().await?;
            print_items(&items, json)
        }
        ItemsCommand::Show { id } => {
            let item = store.inventory.get(id).await?;
            if json {
                print_json(&item)
            } else {
                print_item(&item);
                Ok(())
            }
        }
        ItemsCommand::Create {
            name,
            quantity,
            price,
        } => {
            let created = store
                .inventory
                .create(NewItem {
                    name,
                    quantity,
                    price,
                })
                .await?;
            if json {
                print_json(&created)
            } else {
                println!("created item {}", created.id);
                print_item(&created);
                Ok(())
            }
        }
        ItemsCommand::Adjust { id, delta } => {
            let current = store.inventory.list().await?;
            let fresh = store.inventory.adjust(&current, id, delta).await?;
            print_items(&fresh, json)
        }
    }
}

async fn handle_orders(store: &Storefront, command: OrdersCommand, json: bool) -> Result<()> {
    match command {
        OrdersCommand::List => {
            let orders = store.orders.list().await?;
            if json {
                return print_json(&orders);
            }
            if orders.is_empty() {
                println!("no orders yet");
            }
            for order in &orders {
                print_order(order);
            }
            Ok(())
        }
        OrdersCommand::Show { id } => {
            let order = store.orders.get(id).await?;
            if json {
                print_json(&order)
            } else {
                print_order(&order);
                Ok(())
            }
        }
        OrdersCommand::Create { spec } => create_order(store, &spec, json).await,
    }
}

/// Build a draft from the line specs, show the client-side estimate, then
/// submit. The estimate uses cached prices and is display-only; the total
/// printed afterwards is the orders service's.
async fn create_order(store: &Storefront, spec: &str, json: bool) -> Result<()> {
    let mut cache = ItemCache::new();
    store.inventory.load_available(&mut cache).await?;
    if cache.is_empty() {
        bail!("no items available to order; stock the inventory first");
    }

    let mut draft = OrderDraft::new();
    for (index, part) in spec.split(',').enumerate() {
        let (id, quantity) = parse_line_spec(part)?;
        if index > 0 {
            draft.add_line();
        }
        draft.set_item(index, id);
        draft.set_quantity(index, quantity);
    }

    println!(
        "estimated total: ${} (the orders service computes the final amount)",
        draft.provisional_total(&cache)
    );
    let order = store.orders.submit(&mut draft).await?;
    if json {
        print_json(&order)
    } else {
        print_order(&order);
        Ok(())
    }
}

fn parse_line_spec(part: &str) -> Result<(i64, i32), ValidationError> {
    let bad = || ValidationError::BadLineSpec(part.trim().to_string());
    let (id, quantity) = part.trim().split_once(':').ok_or_else(bad)?;
    let id = id.trim().parse().map_err(|_| bad())?;
    let quantity = quantity.trim().parse().map_err(|_| bad())?;
    Ok((id, quantity))
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_items(items: &[Item], json: bool) -> Result<()> {
    if json {
        return print_json(&items);
    }
    if items.is_empty() {
        println!("no items in inventory");
        return Ok(());
    }
    println!(
        "{:<6} {:<24} {:>5} {:>10}  {}",
        "ID", "NAME", "QTY", "PRICE", "STOCK"
    );
    for item in items {
        println!(
            "{:<6} {:<24} {:>5} {:>10}  {}",
            item.id,
            item.name,
            item.quantity,
            format!("${}", item.price),
            item.stock_level()
        );
    }
    Ok(())
}

fn print_item(item: &Item) {
    println!(
        "{} (id {}): {} on hand at ${} each, {}",
        item.name,
        item.id,
        item.quantity,
        item.price,
        item.stock_level()
    );
}

fn print_order(order: &Order) {
    let placed = order
        .created_at()
        .map(|t| t.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|| format!("unix {}", order.created_unix));
    println!("order #{}  total ${}  placed {}", order.id, order.total, placed);
    for line in &order.items {
        println!(
            "  {} x{} @ ${} (item {})",
            line.name, line.quantity, line.price, line.item_id
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_specs_parse() {
        assert_eq!(parse_line_spec("3:2"), Ok((3, 2)));
        assert_eq!(parse_line_spec(" 7 : 1 "), Ok((7, 1)));
    }

    #[test]
    fn malformed_line_specs_are_validation_errors() {
        for spec in ["", "3", "3:", ":2", "a:b", "3:2:1"] {
            assert!(
                matches!(parse_line_spec(spec), Err(ValidationError::BadLineSpec(_))),
                "spec {spec:?} should be rejected"
            );
        }
    }
}
