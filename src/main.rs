use nfl_points_rs::config_handler;
use nfl_points_rs::report_service::ReportService;
use nfl_points_rs::season_service::SeasonService;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Configure a custom event formatter
    let format = tracing_subscriber::fmt::format()
        .with_level(true)
        .with_target(false)
        .with_ansi(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(false)
        .compact();
    tracing_subscriber::fmt()
        .event_format(format)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let config = config_handler::get_config()?;

    println!("Welcome to the {} Football Season Hub!", config.season);

    let run = SeasonService::new(&config)?.run().await;
    print!("{}", ReportService::render(&run.report));

    Ok(())
}
