use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{Clock, OpenAiQuizModel, QuizGenConfig, QuizGenerationService, QuizGenerator};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

#[derive(Debug, PartialEq, Eq)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidTimeout { raw: String },
    InvalidBaseUrl { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidTimeout { raw } => write!(f, "invalid --timeout-secs value: {raw}"),
            ArgsError::InvalidBaseUrl { raw } => write!(f, "invalid --base-url value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--model <name>] [--base-url <url>] [--timeout-secs <n>]");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  QUIZIFY_AI_API_KEY      API key for the chat-completions endpoint (required)");
    eprintln!("  QUIZIFY_AI_BASE_URL     default https://api.openai.com/v1");
    eprintln!("  QUIZIFY_AI_MODEL        default gpt-4o-mini");
    eprintln!("  QUIZIFY_AI_TIMEOUT_SECS default 60");
    eprintln!("  QUIZIFY_AI_TEMPERATURE  default 0.7");
    eprintln!("  RUST_LOG                log filter, default info");
}

/// Command-line overrides layered on top of `QUIZIFY_AI_*`.
#[derive(Debug, Default, PartialEq, Eq)]
struct Args {
    model: Option<String>,
    base_url: Option<String>,
    timeout: Option<Duration>,
    help: bool,
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut parsed = Self::default();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--model" => parsed.model = Some(require_value(args, "--model")?),
                "--base-url" => {
                    let value = require_value(args, "--base-url")?;
                    if !value.starts_with("http://") && !value.starts_with("https://") {
                        return Err(ArgsError::InvalidBaseUrl { raw: value });
                    }
                    parsed.base_url = Some(value);
                }
                "--timeout-secs" => {
                    let value = require_value(args, "--timeout-secs")?;
                    let secs = value
                        .parse::<u64>()
                        .ok()
                        .filter(|secs| *secs > 0)
                        .ok_or_else(|| ArgsError::InvalidTimeout { raw: value.clone() })?;
                    parsed.timeout = Some(Duration::from_secs(secs));
                }
                "--help" | "-h" => parsed.help = true,
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(parsed)
    }

    fn apply(self, config: QuizGenConfig) -> QuizGenConfig {
        let mut config = config;
        if let Some(model) = self.model {
            config = config.with_model(model);
        }
        if let Some(base_url) = self.base_url {
            config = config.with_base_url(base_url);
        }
        if let Some(timeout) = self.timeout {
            config = config.with_timeout(timeout);
        }
        config
    }
}

struct DesktopApp {
    quiz_generator: Arc<QuizGenerationService>,
    clock: Clock,
}

impl UiApp for DesktopApp {
    fn quiz_generator(&self) -> Arc<dyn QuizGenerator> {
        self.quiz_generator.clone()
    }

    fn clock(&self) -> Clock {
        self.clock
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let args = Args::parse(&mut argv).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;
    if args.help {
        print_usage();
        return Ok(());
    }

    init_tracing();

    let config = QuizGenConfig::from_env().map(|config| args.apply(config));
    match config.as_ref() {
        Some(config) => info!(model = %config.model, base_url = %config.base_url, "quiz generation enabled"),
        None => warn!("QUIZIFY_AI_API_KEY is not set; quiz generation is disabled"),
    }
    let model = Arc::new(OpenAiQuizModel::new(config)?);
    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        quiz_generator: Arc::new(QuizGenerationService::new(model)),
        clock: Clock::system(),
    });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Quizify")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
