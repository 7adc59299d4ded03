use clap::Parser;
use std::io;

use translate_cli::cli::commands::{languages, translate, usage};
use translate_cli::cli::{Args, Invocation, exit};
use translate_cli::config::{ConfigManager, ResolveOptions, ResolvedConfig, resolve_config};
use translate_cli::output::{self, OutputConfig};
use translate_cli::translation::{DEFAULT_ENDPOINT, GoogleTranslateClient};
use translate_cli::ui::Style;
use translate_cli::{logging, status};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = Args::parse();

    output::init(OutputConfig::from_flags(args.quiet, args.no_color));
    logging::init(args.verbose, !output::is_no_color());

    std::process::exit(run(args).await);
}

async fn run(args: Args) -> exitcode::ExitCode {
    match Invocation::from_operands(&args.operands) {
        Invocation::ListLanguages => {
            let client = GoogleTranslateClient::new(DEFAULT_ENDPOINT.to_string(), None);
            finish(languages::print_languages(&client, &mut io::stdout()))
        }
        Invocation::Usage => {
            if let Err(e) = usage::print_usage_error(&mut io::stderr(), &mut io::stdout()) {
                exit::report(&e);
            }
            usage::USAGE_EXIT_CODE
        }
        Invocation::Translate(request) => {
            let config = match load_config(&args) {
                Ok(config) => config,
                Err(e) => {
                    exit::report(&e);
                    return exitcode::CONFIG;
                }
            };
            let client = GoogleTranslateClient::new(config.endpoint, config.api_key);
            finish(translate::run_translate(&client, &request, &mut io::stdout()).await)
        }
    }
}

fn load_config(args: &Args) -> anyhow::Result<ResolvedConfig> {
    let manager = ConfigManager::new()?;
    let options = ResolveOptions {
        endpoint: args.endpoint.clone(),
        api_key: args.api_key.clone(),
    };
    let config = resolve_config(&options, &manager.load()?);

    if config.api_key.is_none() && config.endpoint == DEFAULT_ENDPOINT {
        status!(
            "{} no API key configured; set TRANSLATE_API_KEY or api_key in {}",
            Style::warning("warning:"),
            manager.config_path().display()
        );
    }

    Ok(config)
}

fn finish(result: anyhow::Result<()>) -> exitcode::ExitCode {
    match result {
        Ok(()) => exitcode::OK,
        Err(e) => {
            exit::report(&e);
            exit::exit_code_for(&e)
        }
    }
}
