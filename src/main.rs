use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use resume_text::application::services::BatchService;
use resume_text::infrastructure::observability::{
    ProgressBarReporter, TracingConfig, init_tracing,
};
use resume_text::infrastructure::text_processing::ExtractorFactory;
use resume_text::presentation::{AppState, RunMode, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::load().context("Failed to load settings")?;

    init_tracing(&TracingConfig::new(
        settings.run_mode.as_str(),
        settings.logging.json_format,
    ));

    let file_loader = Arc::new(ExtractorFactory::create(&settings.extraction));

    match settings.run_mode {
        RunMode::Cli => {
            let directories = &settings.directories;
            tracing::info!(
                input = %directories.input_dir.display(),
                output = %directories.output_dir.display(),
                "Running batch extraction"
            );
            let summary = BatchService::new(file_loader)
                .with_progress(Arc::new(ProgressBarReporter::new()))
                .process_directory(&directories.input_dir, &directories.output_dir)
                .await?;
            println!("{summary}");
        }
        RunMode::Api => {
            let addr = format!("{}:{}", settings.server.host, settings.server.port);
            let router = create_router(AppState::new(file_loader, settings));

            let listener = TcpListener::bind(&addr)
                .await
                .with_context(|| format!("Failed to bind {addr}"))?;
            tracing::info!("Listening on {}", addr);

            axum::serve(listener, router).await?;
        }
    }

    Ok(())
}
