use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{anyhow, bail, Context};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use order_desk::catalog::{
    Catalog, CatalogManager, CompanyId, CompanyInput, ProductId, ProductInput,
};
use order_desk::client::ApiClient;
use order_desk::config::Config;
use order_desk::core::format_try;
use order_desk::invoices::{InvoiceDocument, InvoiceRenderer, TextInvoiceRenderer};
use order_desk::notifications::TracingNotifier;
use order_desk::orders::services::history::{find_order, load_history};
use order_desk::orders::{
    compute_totals, OrderDraft, OrderEntry, OrderHistoryFilter, OrderId, SubmitOutcome,
};

/// Order entry against the ERP backend
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the totals preview of a draft file; needs no backend
    Preview { draft: PathBuf },
    /// Run the submission checks on a draft file and create the order
    Submit { draft: PathBuf },
    /// List submitted orders, newest first
    History {
        #[arg(long)]
        company: Option<CompanyId>,
        /// First day of the range, inclusive (YYYY-MM-DD)
        #[arg(long, value_parser = parse_date, requires = "end")]
        start: Option<NaiveDate>,
        /// Last day of the range, inclusive (YYYY-MM-DD)
        #[arg(long, value_parser = parse_date, requires = "start")]
        end: Option<NaiveDate>,
    },
    /// Print an order's invoice, or write it into a directory
    Invoice {
        order_id: OrderId,
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Maintain companies
    #[command(subcommand)]
    Company(CompanyCommand),
    /// Maintain products
    #[command(subcommand)]
    Product(ProductCommand),
}

#[derive(Subcommand, Debug)]
enum CompanyCommand {
    List {
        #[arg(long, default_value = "")]
        search: String,
    },
    Add {
        name: String,
    },
    Update {
        id: CompanyId,
        name: String,
    },
    Delete {
        id: CompanyId,
    },
}

#[derive(Subcommand, Debug)]
enum ProductCommand {
    List {
        /// Matches name or code
        #[arg(long, default_value = "")]
        search: String,
    },
    Add {
        name: String,
        code: String,
        price: Decimal,
    },
    Update {
        id: ProductId,
        name: String,
        code: String,
        price: Decimal,
    },
    Delete {
        id: ProductId,
    },
}

fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|e| format!("expected YYYY-MM-DD: {}", e))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Previews are offline and need no backend configuration
    if let Command::Preview { draft } = &cli.command {
        init_tracing("info", "text");
        let draft = read_draft(draft)?;
        println!("{}", compute_totals(&draft));
        return Ok(());
    }

    let config = Config::from_env().context("Failed to load configuration")?;
    config.validate().context("Configuration validation failed")?;
    init_tracing(&config.app.log_level, &config.app.log_format);

    tracing::info!(env = %config.app.env, api = %config.api.api_root(), "Starting order desk");

    let client = Arc::new(ApiClient::from_config(&config.api)?);
    let notifier = Arc::new(TracingNotifier);

    match cli.command {
        Command::Preview { .. } => {}
        Command::Submit { draft } => {
            let draft = read_draft(&draft)?;
            let mut entry =
                OrderEntry::load(client.as_ref(), client.clone(), client.clone(), notifier).await?;
            entry.replace_draft(draft);
            println!("{}", entry.totals());

            match entry.submit().await {
                SubmitOutcome::Created(record) => {
                    let company = entry
                        .catalog()
                        .company(record.company)
                        .map(|c| c.name.clone())
                        .unwrap_or_else(|| record.company.to_string());
                    println!(
                        "Created order {} for {} (server total {})",
                        record.id,
                        company,
                        format_try(record.total)
                    );
                }
                SubmitOutcome::Rejected => bail!("Order draft was rejected"),
                SubmitOutcome::Failed { timed_out: true } => bail!("Order submission timed out"),
                SubmitOutcome::Failed { timed_out: false } => bail!("Order submission failed"),
            }
        }
        Command::History {
            company,
            start,
            end,
        } => {
            let mut filter = OrderHistoryFilter::new();
            if let Some(company) = company {
                filter = filter.for_company(company);
            }
            if let (Some(start), Some(end)) = (start, end) {
                filter = filter.between(start, end);
            }

            for order in load_history(client.as_ref(), &filter).await? {
                println!(
                    "#{:<6} {}  {:<30} {}",
                    order.id,
                    order.order_date(),
                    order.company_name,
                    format_try(order.total)
                );
            }
        }
        Command::Invoice { order_id, output } => {
            let record = find_order(client.as_ref(), order_id)
                .await?
                .ok_or_else(|| anyhow!("Order {} not found", order_id))?;

            let renderer = TextInvoiceRenderer;
            let document = InvoiceDocument::from_record(&record);
            let rendered = renderer.render(&document)?;

            match output {
                Some(dir) => {
                    let path = dir.join(renderer.file_name(&document));
                    std::fs::write(&path, rendered)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    println!("Wrote {}", path.display());
                }
                None => print!("{}", String::from_utf8(rendered)?),
            }
        }
        Command::Company(command) => {
            let manager = CatalogManager::new(client.clone(), notifier);
            match command {
                CompanyCommand::List { search } => {
                    let catalog = Catalog::load(client.as_ref()).await?;
                    for company in catalog.search_companies(&search) {
                        println!("{:>6}  {}", company.id, company.name);
                    }
                }
                CompanyCommand::Add { name } => {
                    let company = manager.save_company(None, CompanyInput::new(name)).await?;
                    println!("Added company {}", company.id);
                }
                CompanyCommand::Update { id, name } => {
                    manager.save_company(Some(id), CompanyInput::new(name)).await?;
                }
                CompanyCommand::Delete { id } => manager.delete_company(id).await?,
            }
        }
        Command::Product(command) => {
            let manager = CatalogManager::new(client.clone(), notifier);
            match command {
                ProductCommand::List { search } => {
                    let catalog = Catalog::load(client.as_ref()).await?;
                    for product in catalog.search_products(&search) {
                        println!("{:>6}  {:<40} {}", product.id, product.label(), format_try(product.price));
                    }
                }
                ProductCommand::Add { name, code, price } => {
                    let product = manager
                        .save_product(None, ProductInput::new(name, code, price))
                        .await?;
                    println!("Added product {}", product.id);
                }
                ProductCommand::Update {
                    id,
                    name,
                    code,
                    price,
                } => {
                    manager
                        .save_product(Some(id), ProductInput::new(name, code, price))
                        .await?;
                }
                ProductCommand::Delete { id } => manager.delete_product(id).await?,
            }
        }
    }

    Ok(())
}

fn init_tracing(level: &str, format: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("order_desk={}", level).into());

    let registry = tracing_subscriber::registry().with(filter);
    if format == "json" {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

fn read_draft(path: &Path) -> anyhow::Result<OrderDraft> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read draft {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("Invalid draft {}", path.display()))
}
