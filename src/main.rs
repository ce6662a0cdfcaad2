use std::process::ExitCode;

use catalog::cli::Cli;
use catalog::repository::{CategoryReader, InMemoryRepository};
use catalog::services::import::import_categories;
use catalog::settings::{SeedFile, Settings};
use clap::Parser;

fn main() -> ExitCode {
    let cli = Cli::parse();
    dotenvy::dotenv().ok();

    let mut settings = match Settings::load(cli.config.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(settings.log_level.as_str()),
    )
    .init();

    if let Some(seed) = cli.seed {
        settings.seed_path = Some(seed);
    }

    let seed = match settings.seed_path().and_then(SeedFile::load) {
        Ok(seed) => seed,
        Err(e) => {
            log::error!("Cannot read seed file: {e}");
            return ExitCode::FAILURE;
        }
    };

    let repo = InMemoryRepository::new();
    let report = import_categories(seed.categories, &repo, &repo);

    for (index, error) in &report.rejected {
        log::warn!("Entry #{index} rejected: {error}");
    }
    log::info!(
        "Imported {} categories, rejected {}",
        report.created.len(),
        report.rejected.len()
    );

    match repo.list_categories() {
        Ok(categories) => {
            for category in categories {
                let state = if category.is_active() { "active" } else { "inactive" };
                println!("{}\t{}\t{}", category.id(), state, category.name());
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("Failed to list imported categories: {e}");
            ExitCode::FAILURE
        }
    }
}
