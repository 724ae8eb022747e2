//! A producer/consumer walkthrough: a request layer publishes `Outcome`
//! snapshots and a consumer reacts with the tap combinators, logging through
//! `tracing` the way an application would.
//!
//! Run with `cargo run --example request_status`.

use outcome::{Outcome, Settled};

#[derive(Debug, Clone)]
struct Profile {
    name: String,
}

#[derive(Debug, Clone)]
enum FetchError {
    Timeout,
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Timeout => write!(f, "the request timed out"),
        }
    }
}

/// Stand-in for a request layer: emits the states a real fetch would move
/// through. A real producer would publish these through a channel or an
/// observable value; the library does not care which.
fn fetch_states() -> Vec<Outcome<Profile, FetchError>> {
    vec![
        Outcome::Pending,
        Outcome::Succeeded(Profile {
            name: "Ada".to_owned(),
        }),
        Outcome::Failed(FetchError::Timeout),
    ]
}

fn render(status: Outcome<Profile, FetchError>) -> String {
    status
        .on_pending(|| tracing::debug!("profile fetch still in flight"))
        .on_succeeded(|profile| tracing::info!(name = %profile.name, "profile fetched"))
        .on_failed(|error| tracing::warn!(%error, "profile fetch failed"))
        .map_succeeded(|profile| format!("Hello, {}!", profile.name))
        .get_or_else(|| "Hello, stranger!".to_owned())
}

/// A completion handler only ever sees resolved states, so it takes
/// `Settled` and the pending case cannot reach it.
fn completion(settled: Settled<Profile, FetchError>) {
    match settled.map_failed(|error| error.to_string()).into_result() {
        Ok(profile) => tracing::info!(name = %profile.name, "completion ran"),
        Err(reason) => tracing::warn!(%reason, "completion saw a failure"),
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    for status in fetch_states() {
        let greeting = render(status.clone());
        tracing::info!(%greeting, "rendered");

        if let Ok(settled) = Settled::try_from(status) {
            completion(settled);
        }
    }
}
