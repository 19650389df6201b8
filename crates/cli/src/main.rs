use gildedrose_cli::{Config, run};

fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    gildedrose_observability::init(config.log_format);

    tracing::info!("Welcome");

    let path = run(&config)?;

    tracing::info!(path = %path.display(), "inventory written");
    println!("{}", path.display());
    Ok(())
}
