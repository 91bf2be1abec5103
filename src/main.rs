use anyhow::Context;
use clap::Parser;

use lariat::args::Cli;
use lariat::config::DemoConfig;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    lariat::logging::init(cli.log_file.as_deref());

    let path = cli.config.clone().unwrap_or_else(DemoConfig::default_path);
    let mut config = DemoConfig::load(&path).context("loading configuration")?;
    cli.apply(&mut config);
    config.validate()?;

    lariat::ui::run(&config).context("running UI")?;
    Ok(())
}
