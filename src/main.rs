use alg_cards::utils::logging;
use alg_cards::{AlgorithmSet, App, Config, GenerationJob};
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "alg-cards",
    about = "Generate Anki decks and printable flashcards for cube algorithms",
    version
)]
struct Cli {
    /// Output directory (created if missing)
    target_dir: PathBuf,

    /// Built-in algorithm set
    #[arg(long, value_enum, default_value = "all")]
    algorithm_set: SetArg,

    /// Custom catalog file (TOML) used instead of a built-in set
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Maximum parallel downloads (default: min(32, cpus + 4))
    #[arg(long)]
    max_workers: Option<usize>,

    /// Reuse existing icons instead of downloading them
    #[arg(long)]
    skip_image_generation: bool,

    /// Only fetch icons for algorithms whose name matches this glob
    #[arg(long, default_value = "*")]
    algorithm: String,

    /// Also write the printable LaTeX flashcards
    #[arg(long)]
    generate_learning_cards: bool,

    /// Cards per row on the printable sheet
    #[arg(long)]
    columns: Option<usize>,

    /// Card rows per printable sheet
    #[arg(long)]
    rows: Option<usize>,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
enum SetArg {
    All,
    Pll,
    Oll,
    #[value(name = "2-look-oll")]
    TwoLookOll,
    BigCube,
}

impl From<SetArg> for AlgorithmSet {
    fn from(arg: SetArg) -> Self {
        match arg {
            SetArg::All => AlgorithmSet::All,
            SetArg::Pll => AlgorithmSet::Pll,
            SetArg::Oll => AlgorithmSet::Oll,
            SetArg::TwoLookOll => AlgorithmSet::TwoLookOll,
            SetArg::BigCube => AlgorithmSet::BigCube,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // 加载配置，命令行参数优先于环境变量
    let mut config = Config::from_env();
    config.max_workers = cli.max_workers.or(config.max_workers);
    config.cards_per_row = cli.columns.unwrap_or(config.cards_per_row);
    config.cards_per_col = cli.rows.unwrap_or(config.cards_per_col);
    config.verbose_logging |= cli.verbose;

    // 初始化日志
    logging::init(config.verbose_logging);

    config.validate()?;

    let job = GenerationJob {
        target_dir: cli.target_dir,
        set: cli.algorithm_set.into(),
        catalog_file: cli.catalog,
        pattern: cli.algorithm,
        skip_images: cli.skip_image_generation,
        learning_cards: cli.generate_learning_cards,
    };

    // 初始化并运行应用
    App::new(config)?.run(&job).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["alg-cards", "out"]).unwrap();
        assert_eq!(cli.target_dir, PathBuf::from("out"));
        assert!(matches!(cli.algorithm_set, SetArg::All));
        assert_eq!(cli.algorithm, "*");
        assert!(!cli.skip_image_generation);
        assert!(!cli.generate_learning_cards);
    }

    #[test]
    fn test_cli_set_names() {
        let cli = Cli::try_parse_from(["alg-cards", "out", "--algorithm-set", "2-look-oll"]).unwrap();
        assert_eq!(AlgorithmSet::from(cli.algorithm_set), AlgorithmSet::TwoLookOll);

        let cli = Cli::try_parse_from(["alg-cards", "out", "--algorithm-set", "big-cube"]).unwrap();
        assert_eq!(AlgorithmSet::from(cli.algorithm_set), AlgorithmSet::BigCube);

        assert!(Cli::try_parse_from(["alg-cards", "out", "--algorithm-set", "f2l"]).is_err());
    }

    #[test]
    fn test_cli_overrides() {
        let cli = Cli::try_parse_from([
            "alg-cards",
            "out",
            "--max-workers",
            "4",
            "--algorithm",
            "A?",
            "--columns",
            "4",
            "--rows",
            "2",
            "--generate-learning-cards",
            "-v",
        ])
        .unwrap();
        assert_eq!(cli.max_workers, Some(4));
        assert_eq!(cli.algorithm, "A?");
        assert_eq!((cli.columns, cli.rows), (Some(4), Some(2)));
        assert!(cli.generate_learning_cards && cli.verbose);
    }
}
