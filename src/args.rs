use clap::Parser;

/// GitHub user lookup CLI: type a username, get the profile and the
/// repository list, most recently updated first.
#[derive(Parser)]
#[clap(
    author,
    version,
    about,
    long_about = "An interactive terminal client for looking up GitHub users. Each entered line becomes the current search text; a query fires once input has been quiet for the debounce window, and results render after the loading indicator settles."
)]
pub struct Args {
    /// GitHub API token for authentication. Falls back to the GITHUB_TOKEN
    /// environment variable; absent or empty means unauthenticated requests
    /// under GitHub's lower anonymous rate limit.
    #[clap(short, long)]
    pub token: Option<String>,

    /// Quiescence window in milliseconds before a typed query fires.
    #[clap(long, default_value = "500", value_name = "MS")]
    pub debounce_ms: u64,

    /// Minimum time in milliseconds the loading indicator stays visible
    /// after results arrive.
    #[clap(long, default_value = "1500", value_name = "MS")]
    pub settle_ms: u64,
}
