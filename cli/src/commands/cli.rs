use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(version, about = "Render and check confkit message catalogs")]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    /// Settings file. Without it `confkit.toml` and `CONFKIT_*` variables
    /// are used.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding the catalog bundles (overrides settings).
    #[arg(long, global = true)]
    pub catalog_dir: Option<PathBuf>,

    /// Locale such as `fr_CA` (overrides settings and the environment).
    #[arg(long, global = true)]
    pub locale: Option<String>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Resolve one message the way a localized ConfigError would.
    Render(RenderArgs),
    /// List a catalog's templates for the locale and flag broken ones.
    Check(CheckArgs),
}

#[derive(ClapArgs, Debug, Clone)]
pub struct RenderArgs {
    /// Catalog name, e.g. `org.app.Errors`.
    pub catalog: String,

    pub key: String,

    /// Positional parameters for `{0}`, `{1}`, ...
    pub params: Vec<String>,

    /// Message used when the key cannot be resolved.
    #[arg(long, default_value = "")]
    pub default: String,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct CheckArgs {
    pub catalog: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_render() {
        let args = Args::try_parse_from([
            "confkit",
            "--locale",
            "fr",
            "render",
            "org.app.Errors",
            "missing",
            "host",
            "db",
            "--default",
            "missing {0}",
        ])
        .unwrap();

        assert_eq!(args.locale.as_deref(), Some("fr"));
        match args.command {
            Commands::Render(r) => {
                assert_eq!(r.catalog, "org.app.Errors");
                assert_eq!(r.key, "missing");
                assert_eq!(r.params, vec!["host", "db"]);
                assert_eq!(r.default, "missing {0}");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let args =
            Args::try_parse_from(["confkit", "check", "app", "--catalog-dir", "/srv/msgs"]).unwrap();
        assert_eq!(args.catalog_dir, Some(PathBuf::from("/srv/msgs")));
        assert!(matches!(args.command, Commands::Check(CheckArgs { ref catalog }) if catalog == "app"));
    }
}
