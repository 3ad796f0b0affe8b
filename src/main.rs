use clap::Parser;
use dotenv::dotenv;
use indicatif::{ProgressBar, ProgressStyle};
use std::env;
use std::error::Error;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time::{interval, Duration};
use tracing::{info, warn};

use github_user_lookup_lib::{
    format_updated_date, repo_entries, sorted_by_updated, Args, GitHubClient, Profile,
    SearchOptions, SearchState, UserSearcher,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    // Initialize the tracing logger
    tracing_subscriber::fmt::init();

    dotenv().ok();

    let args = Args::parse();

    // Token from arguments or environment. An absent or empty token is not
    // an error: requests go out unauthenticated under the lower anonymous
    // rate limit.
    let token = match &args.token {
        Some(t) if !t.trim().is_empty() => t.clone(),
        _ => match env::var("GITHUB_TOKEN") {
            Ok(token) if !token.trim().is_empty() => token,
            _ => {
                warn!("No GitHub token provided; requests will be unauthenticated");
                String::new()
            }
        },
    };

    let client = GitHubClient::new(token)?;
    let searcher = UserSearcher::new(
        Arc::new(client),
        SearchOptions {
            debounce: Duration::from_millis(args.debounce_ms),
            settle_delay: Duration::from_millis(args.settle_ms),
        },
    );

    println!("GitHub User Lookup!");
    println!("Type a username and press Enter (:clear resets results, :quit exits).");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut ticker = interval(Duration::from_millis(100));
    let mut spinner: Option<ProgressBar> = None;
    let mut was_loading = false;

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                let input = line.trim();
                match input {
                    ":quit" | ":q" => break,
                    ":clear" => {
                        searcher.clear_results();
                        info!("Results cleared");
                    }
                    _ => {
                        searcher.update_text(input);
                        searcher.debounced_search(input);
                    }
                }
            }
            _ = ticker.tick() => {
                let snapshot = searcher.snapshot();
                if snapshot.loading && !was_loading {
                    spinner = Some(new_spinner());
                } else if !snapshot.loading && was_loading {
                    if let Some(pb) = spinner.take() {
                        pb.finish_and_clear();
                    }
                    render(&snapshot);
                }
                was_loading = snapshot.loading;
            }
        }
    }

    if let Some(pb) = spinner.take() {
        pb.finish_and_clear();
    }
    Ok(())
}

/// Spinner shown while a lookup is in flight.
fn new_spinner() -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    pb.set_message("Looking up user...");
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

/// Print the profile card and the repository list for a settled search.
fn render(state: &SearchState) {
    if let Some(error) = &state.error {
        println!("Lookup failed: {error}");
        return;
    }

    match Profile::from_results(&state.results) {
        Some(profile) => {
            println!();
            println!("{} ({})", profile.login, profile.html_url);
            println!("Public Repos {}", profile.public_repos);
            println!("Avatar: {}", profile.avatar_url);
        }
        None => println!("No Results"),
    }

    let repos = sorted_by_updated(repo_entries(&state.repos));
    if !repos.is_empty() {
        println!();
        for repo in repos {
            println!(
                "  {:<32} {:<12} {}  {}",
                repo.name,
                repo.language.unwrap_or_default(),
                format_updated_date(&repo.updated_at),
                repo.html_url
            );
        }
    }
    println!();
}
