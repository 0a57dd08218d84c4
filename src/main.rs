use std::{process, sync::Arc};

use confluence_fixture::{
    application::{catalog::ContentCatalog, error::AppError},
    config,
    infra::{
        error::InfraError,
        http::{self, FixtureState},
        telemetry,
    },
};
use tracing::{Dispatch, Level, dispatcher, error, info};
use tracing_subscriber::fmt as tracing_fmt;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        report_application_error(&error);
        process::exit(1);
    }
}

fn report_application_error(error: &AppError) {
    if dispatcher::has_been_set() {
        error!(error = %error, "application error");
        return;
    }

    let subscriber = tracing_fmt().with_max_level(Level::ERROR).finish();
    let dispatch = Dispatch::new(subscriber);
    dispatcher::with_default(&dispatch, || {
        error!(error = %error, "application error");
    });
}

async fn run() -> Result<(), AppError> {
    let (cli_args, settings) = config::load_with_cli()?;

    let command = cli_args
        .command
        .unwrap_or(config::Command::Serve(Box::<config::ServeArgs>::default()));

    match command {
        config::Command::Serve(_) => {
            telemetry::init(&settings.logging)?;
            run_serve(settings).await
        }
        config::Command::NumDocs(_) => {
            run_num_docs(&settings);
            Ok(())
        }
    }
}

async fn run_serve(settings: config::Settings) -> Result<(), AppError> {
    let catalog = Arc::new(ContentCatalog::new(settings.fixture.profile));
    let router = http::build_router(FixtureState { catalog });

    let listener = tokio::net::TcpListener::bind(settings.server.addr)
        .await
        .map_err(InfraError::from)?;

    info!(
        target = "confluence_fixture::serve",
        addr = %settings.server.addr,
        profile = settings.fixture.profile.as_str(),
        "fixture server listening"
    );

    axum::serve(listener, router.into_make_service())
        .await
        .map_err(|err| AppError::unexpected(format!("server error: {err}")))?;

    Ok(())
}

/// Companion tooling for test harnesses: the total document count a full sync
/// of the selected profile is expected to produce, printed to stdout.
fn run_num_docs(settings: &config::Settings) {
    println!(
        "{}",
        settings.fixture.profile.counts().expected_document_count()
    );
}
