use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Chat backend endpoint messages are posted to.
    #[arg(long, env = "CHAT_URL", default_value = "http://127.0.0.1:5000/chat")]
    pub chat_url: String,

    /// Timeout in seconds for one backend request.
    #[arg(long, env = "CHAT_TIMEOUT_SECS", default_value = "30")]
    pub chat_timeout_secs: u64,

    /// Disable the simulated typing delay before replies are shown.
    #[arg(long, env = "NO_TYPING_DELAY", default_value = "false")]
    pub no_typing_delay: bool,

    /// Enable debug logging/output
    #[arg(long, env = "DEBUG", default_value = "false")]
    pub debug: bool,
}
