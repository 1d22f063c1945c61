use anyhow::Context;

use fitness_tracker_core::{default_packages, load_packages, print_training_report, Config};

fn main() -> anyhow::Result<()> {
    // Logg til stderr, rapporten alene på stdout
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = Config::from_env().context("ugyldig konfigurasjon")?;

    let packages = match &config.packages_path {
        Some(path) => load_packages(path)
            .with_context(|| format!("kunne ikke laste pakker fra {}", path.display()))?,
        None => default_packages(),
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let n = print_training_report(&packages, config.output, &mut out)
        .context("feil under behandling av pakker")?;

    log::debug!("ferdig: {n} økter skrevet");
    Ok(())
}
