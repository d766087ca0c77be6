use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// How log lines are rendered on stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

fn build_filter(verbose: bool, directive: Option<&str>) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    match directive {
        Some(directive) => EnvFilter::new(directive),
        None if verbose => EnvFilter::new("caesar_shell=debug,info"),
        None => EnvFilter::new("caesar_shell=warn"),
    }
}

/// Install the global subscriber. Logs go to stderr; stdout belongs to the prompts.
pub fn init_cli_logger(verbose: bool, directive: Option<&str>, format: LogFormat) {
    let filter = build_filter(verbose, directive);
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Compact => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false)
                    .compact(),
            )
            .init(),
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false)
                    .json(),
            )
            .init(),
    }
}
