use clap::{ArgAction, Parser};

#[derive(Parser, Debug)]
#[command(name = "translate")]
#[command(about = "Translate text through the Google translation API")]
#[command(version, disable_help_flag = true, disable_version_flag = true)]
#[command(override_usage = "translate [OPTIONS] \"<TEXT>\" <SOURCE> <TARGET>\n       \
                            translate [OPTIONS] -- \"<--TEXT>\" <SOURCE> <TARGET>\n       \
                            translate [OPTIONS] -c")]
#[command(after_help = "Options must come before the text. \
                        Text that starts with -- must follow a lone --. \
                        Pass -c on its own to print the supported language codes.")]
pub struct Args {
    /// Text, source language code and target language code; or -c
    #[arg(value_name = "ARGS", trailing_var_arg = true, allow_hyphen_values = true)]
    pub operands: Vec<String>,

    /// Translation API base URL
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Translation API key
    #[arg(long, env = "TRANSLATE_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Suppress the progress spinner and warnings
    #[arg(long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Increase diagnostic logging (repeatable)
    #[arg(long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Print help
    #[arg(long, action = ArgAction::Help)]
    pub help: Option<bool>,

    /// Print version
    #[arg(long, action = ArgAction::Version)]
    pub version: Option<bool>,
}
