use freezer::adapters::inbound::console::ConsoleSession;
use freezer::adapters::outbound::sqlite::SqliteInventoryRepository;
use freezer::adapters::outbound::system::{ConsoleTerminal, SystemClock};
use freezer::application::dto::{
    AddItemRequest, ConsumeRequest, ListItemsRequest, OutputFormat, RegisterProductRequest,
};
use freezer::application::factories::FormatterFactory;
use freezer::application::use_cases::{
    AddItemUseCase, ConsumeItemUseCase, ListItemsUseCase, RegisterProductUseCase,
    SeedDemoUseCase,
};
use freezer::cli::{Args, Command, ProductCommand};
use freezer::config::{self, Settings};
use freezer::inventory::domain::format_date;
use freezer::shared::error::{ExitCode, InventoryError};
use freezer::shared::{logging, Result};
use owo_colors::OwoColorize;
use std::io::Write;
use std::process;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Clap exits with code 2 on invalid arguments.
    let args = Args::parse_args();
    logging::init();

    let code = run(args).await;

    // Exit here: the runtime would otherwise wait for a pending stdin read.
    let _ = std::io::stdout().flush();
    process::exit(code.as_i32());
}

async fn run(args: Args) -> ExitCode {
    let settings = match load_settings(&args) {
        Ok(settings) => settings,
        Err(e) => {
            report_error(&e);
            return ExitCode::ApplicationError;
        }
    };
    tracing::debug!(database = %settings.database.display(), "using database");

    let repository = match SqliteInventoryRepository::open(&settings.database).await {
        Ok(repository) => repository,
        Err(e) => {
            report_error(&e);
            return ExitCode::ApplicationError;
        }
    };

    let command = args.command.unwrap_or(Command::Console);
    let result = dispatch(&repository, &settings, command).await;
    repository.close().await;

    match result {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            report_error(&e);
            ExitCode::for_error(&e)
        }
    }
}

fn load_settings(args: &Args) -> Result<Settings> {
    let config_file = match args.config.as_deref() {
        Some(path) => Some(config::load_config_from_path(path)?),
        None => config::discover_config(&std::env::current_dir()?)?,
    };
    Ok(Settings::resolve(args.database.clone(), config_file))
}

async fn dispatch(
    repository: &SqliteInventoryRepository,
    settings: &Settings,
    command: Command,
) -> Result<()> {
    match command {
        Command::Console => {
            let clock = SystemClock::new();
            let terminal = ConsoleTerminal::new();
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());

            ConsoleSession::new(repository, &clock, &terminal, std::io::stdout())
                .with_consume_amount(settings.consume_percent)
                .run(stdin, interrupted())
                .await
        }
        Command::Init { demo } => {
            println!("Database ready: {}", settings.database.display());
            if demo {
                let stocked = SeedDemoUseCase::new(repository).execute().await?;
                println!("Stocked {} demo items.", stocked);
            }
            Ok(())
        }
        Command::Product(ProductCommand::Add {
            gtin,
            name,
            valid_days,
            size,
        }) => {
            let product = RegisterProductUseCase::new(repository)
                .execute(RegisterProductRequest::new(gtin, name, size, valid_days))
                .await?;
            println!("Registered {} ({}).", product.name(), product.gtin());
            Ok(())
        }
        Command::Add { gtin, best_before } => {
            let stocked = AddItemUseCase::new(repository)
                .execute(AddItemRequest::new(gtin, best_before))
                .await?;
            println!(
                "Added {} (best before {}).",
                stocked.product_name,
                format_date(stocked.item.best_before())
            );
            Ok(())
        }
        Command::Consume { gtin, amount } => {
            let amount = amount.unwrap_or(settings.consume_percent);
            let clock = SystemClock::new();
            let item = ConsumeItemUseCase::new(repository, &clock)
                .execute(ConsumeRequest::new(gtin, amount))
                .await?;
            println!(
                "Took {}% of {}, {} left.",
                amount,
                item.gtin(),
                item.fill_status()
            );
            Ok(())
        }
        Command::List {
            sort,
            descending,
            limit,
            format,
        } => {
            let items = ListItemsUseCase::new(repository)
                .execute(ListItemsRequest::new(sort, descending, limit))
                .await?;
            let output = FormatterFactory::create(format).format(&items)?;
            match format {
                OutputFormat::Table => print!("{}", output),
                OutputFormat::Json => println!("{}", output),
            }
            Ok(())
        }
    }
}

/// Completes on Ctrl-C. Never completes if the handler cannot be installed.
async fn interrupted() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "cannot listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
}

fn report_error(error: &anyhow::Error) {
    if let Some(rejection) = error.downcast_ref::<InventoryError>() {
        eprintln!("{} {}", "Error:".red().bold(), rejection);
        return;
    }

    eprintln!("\n{}\n", "❌ An error occurred:".red().bold());
    eprintln!("{}", error);

    // Display error chain
    for cause in error.chain().skip(1) {
        eprintln!("\nCaused by: {}", cause);
    }
    eprintln!();
}
