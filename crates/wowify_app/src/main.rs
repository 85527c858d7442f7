mod app;
mod effects;
mod logging;
mod timers;

fn main() -> anyhow::Result<()> {
    logging::initialize(logging::LogDestination::Terminal);
    let options = app::AppOptions::from_args(std::env::args().skip(1))?;
    app::run(options)
}
