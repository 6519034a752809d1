mod cli;

use cli::{Args, BrowseInput, Command, FilterArgs};
use std::process;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use user_directory::config::{self, Settings};
use user_directory::prelude::*;
use user_directory::shared::logging::init_logging;
use user_directory::shared::ExitCode;

/// The process-wide cache service, shared by every view
type SharedRepository = Arc<CachingUserRepository<PlaceholderUserRepository>>;

const BROWSE_HELP: &str = "Type to search. Commands: :sort, :city <name|all>, :company <name|all>, :retry, :quit";

#[tokio::main]
async fn main() {
    let args = Args::parse_args();

    if let Err(e) = run(args).await {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        for cause in e.chain().skip(1) {
            eprintln!("\nCaused by: {}", cause);
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

async fn run(args: Args) -> Result<()> {
    let config_file = match &args.config {
        Some(path) => Some(config::load_config_from_path(path)?),
        None => config::discover_config(&std::env::current_dir()?)?,
    };
    let settings = Settings::resolve(config_file, args.base_url.clone());
    init_logging(settings.log_level.as_deref());
    tracing::debug!(base_url = %settings.base_url, "settings resolved");

    // Create the cache service once and inject it into every use case
    let repository: SharedRepository = Arc::new(CachingUserRepository::with_directory_freshness(
        PlaceholderUserRepository::with_base_url(&settings.base_url, settings.request_timeout)?,
        settings.directory_ttl,
    ));
    let presenter = StdoutPresenter::new();

    match args.command {
        Command::List(list) => {
            let use_case = BrowseDirectoryUseCase::new(repository, StderrProgressReporter::new());
            let response = use_case.execute(&list.query()).await?;

            let formatter = FormatterFactory::create(list.format);
            let model = DirectoryReadModel::from_response(&response);
            presenter.present(&formatter.format_directory(&model)?)?;
        }
        Command::Show { id, format } => {
            let use_case = ViewUserProfileUseCase::new(repository, StderrProgressReporter::new());
            let response = use_case.execute(id).await?;

            let formatter = FormatterFactory::create(format);
            let model = ProfileReadModel::from_response(&response);
            presenter.present(&formatter.format_profile(&model)?)?;
        }
        Command::Browse(filters) => {
            browse(repository, &filters, settings.search_debounce, &presenter).await?;
        }
    }

    Ok(())
}

/// Interactive list view over stdin.
///
/// Search text goes through a [`Debouncer`]; filters, sort and retry
/// re-render immediately. A failed load keeps the loop alive so the
/// operator can `:retry`.
async fn browse(
    repository: SharedRepository,
    filters: &FilterArgs,
    debounce: Duration,
    presenter: &impl OutputPresenter,
) -> Result<()> {
    let use_case = BrowseDirectoryUseCase::new(repository, StderrProgressReporter::new());
    let formatter = TextFormatter::new();
    let mut query = filters.query("");

    let mut snapshot = use_case.load().await.map_err(log_load_failure).ok();
    render(snapshot.as_ref(), &query, &formatter, presenter)?;
    eprintln!("{}", BROWSE_HELP);

    let mut search = Debouncer::new(String::new(), debounce);
    let mut settled = search.subscribe();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                match BrowseInput::parse(&line) {
                    BrowseInput::Quit => break,
                    BrowseInput::Search(text) => {
                        search.set(text);
                        continue;
                    }
                    BrowseInput::Retry => {
                        snapshot = use_case.retry().await.map_err(log_load_failure).ok();
                    }
                    BrowseInput::ToggleSort => query.sort = query.sort.toggled(),
                    BrowseInput::City(city) => query.city = city,
                    BrowseInput::Company(company) => query.company = company,
                }
                render(snapshot.as_ref(), &query, &formatter, presenter)?;
            }
            changed = settled.changed() => {
                if changed.is_err() {
                    break;
                }
                query.search_text = settled.borrow_and_update().clone();
                render(snapshot.as_ref(), &query, &formatter, presenter)?;
            }
        }
    }

    Ok(())
}

fn render(
    snapshot: Option<&DirectorySnapshot>,
    query: &DirectoryQuery,
    formatter: &impl ViewFormatter,
    presenter: &impl OutputPresenter,
) -> Result<()> {
    match snapshot {
        Some(snapshot) => {
            let model = DirectoryReadModel::from_response(&snapshot.view(query));
            presenter.present(&formatter.format_directory(&model)?)
        }
        None => presenter.present("Users could not be loaded. Type :retry to try again."),
    }
}

fn log_load_failure(e: anyhow::Error) {
    tracing::warn!(error = %format!("{:#}", e), "directory load failed");
}
