use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing::warn;
use tracing_subscriber::EnvFilter;

use truthguard::cli::analyze::{self, AnalyzeOptions};
use truthguard::cli::session::{self, Session};
use truthguard::config::{Config, OutputFormat};
use truthguard::content::ContentKind;
use truthguard::history::HistoryBuffer;
use truthguard::synth::{ContentSynthesizer, Latency, RngSource};

#[derive(Parser)]
#[command(name = "truthguard")]
#[command(about = "Simulated truthfulness analysis for article text and URLs")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, default_value = "truthguard.yaml")]
    config: String,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a single piece of content
    Analyze {
        /// Article text, or the article URL with --type url
        #[arg(required = true)]
        content: Vec<String>,

        /// Content type: text or url (defaults to analysis.default_type)
        #[arg(short = 't', long = "type", value_name = "TYPE")]
        kind: Option<ContentKind>,

        /// Shorthand for --type url
        #[arg(long, conflicts_with = "kind")]
        url: bool,

        /// Print the record as JSON
        #[arg(long)]
        json: bool,

        /// Show which lexicon phrases moved the score
        #[arg(long)]
        explain: bool,

        #[command(flatten)]
        run: RunArgs,
    },

    /// Interactive session with in-memory history
    Session {
        #[command(flatten)]
        run: RunArgs,
    },
}

#[derive(Args)]
struct RunArgs {
    /// Seed the random source for reproducible results
    #[arg(long)]
    seed: Option<u64>,

    /// Skip the simulated analysis delay
    #[arg(long)]
    no_delay: bool,
}

fn init_logging(verbose: bool) {
    let default = if verbose {
        "truthguard=debug"
    } else {
        "truthguard=warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn build(config: &Config, run: &RunArgs) -> Result<(ContentSynthesizer, RngSource<rand::rngs::StdRng>)> {
    let latency = if run.no_delay {
        Latency::none()
    } else {
        config.latency()?
    };
    let rng = match run.seed.or(config.analysis.seed) {
        Some(seed) => RngSource::seeded(seed),
        None => RngSource::from_entropy(),
    };
    Ok((ContentSynthesizer::new(latency), rng))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Load config
    let config = Config::load(&cli.config).unwrap_or_else(|e| {
        warn!(error = %e, "failed to load config, using defaults");
        Config::default()
    });

    match cli.command {
        Commands::Analyze {
            content,
            kind,
            url,
            json,
            explain,
            run,
        } => {
            let (synthesizer, mut rng) = build(&config, &run)?;
            let options = AnalyzeOptions {
                kind: if url {
                    ContentKind::Url
                } else {
                    kind.unwrap_or(config.analysis.default_type)
                },
                format: if json { OutputFormat::Json } else { config.output.format },
                explain,
            };
            analyze::run(&synthesizer, &mut rng, &content.join(" "), &options).await?;
        }
        Commands::Session { run } => {
            let (synthesizer, mut rng) = build(&config, &run)?;
            let history = HistoryBuffer::with_capacity(config.history_capacity());
            let mut state = Session::new(&synthesizer, &mut rng, history);
            session::run_stdin(&mut state).await?;
        }
    }

    Ok(())
}
