use clap::Parser;
mod commands;
use commands::cli;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = cli::Args::parse();
    let settings = commands::resolve_settings(&args)?;

    match &args.command {
        cli::Commands::Render(render_args) => {
            let text = commands::render::render(&settings, render_args)?;
            println!("{text}");
        }
        cli::Commands::Check(check_args) => {
            let report = commands::check::check(&settings, check_args)?;
            for (key, err) in &report.invalid {
                println!("{key}: {err}");
            }
            println!(
                "{} keys, {} invalid",
                report.keys,
                report.invalid.len()
            );
            if !report.is_ok() {
                std::process::exit(1);
            }
        }
    }
    Ok(())
}
