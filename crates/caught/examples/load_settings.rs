//! Loading settings from several sources without letting one bad source
//! take the program down.
//!
//! Run with `cargo run -p caught --example load_settings`.

use caught::prelude::*;
use std::collections::HashMap;
use std::io;

fn parse_line(line: &str) -> Result<(String, u32), Thrown> {
    let (key, raw) = line
        .split_once('=')
        .ok_or_else(|| Thrown::value(format!("no '=' in {line:?}")))?;
    Ok((key.trim().to_owned(), raw.trim().parse()?))
}

fn strict_timeout(settings: &HashMap<String, u32>) -> u32 {
    // Panics on a missing key; the adapter turns that into a failure.
    settings["timeout"] * 1000
}

async fn fetch_remote(host: &'static str) -> Result<String, io::Error> {
    tokio::task::yield_now().await;
    if host.ends_with(".invalid") {
        return Err(io::Error::other(format!("{host} did not answer")));
    }
    Ok(String::from("retries = 3"))
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let mut settings = HashMap::new();

    for line in ["timeout = 30", "verbose", "workers = many"] {
        let parsed = try_wrap_sync(parse_line, (line,));
        match parsed.into_result() {
            Ok((key, value)) => {
                settings.insert(key, value);
            }
            Err(message) => println!("skipping {line:?}: {message}"),
        }
    }

    for host in ["config.example", "config.invalid"] {
        let remote = wrap_async(fetch_remote(host)).await;
        if is_success(&remote) {
            if let Some(line) = remote.value() {
                let parsed = try_wrap_sync(parse_line, (line.as_str(),));
                if let Some((key, value)) = parsed.into_value() {
                    settings.insert(key, value);
                }
            }
        } else {
            println!("remote {host} failed: {:?}", remote.error());
        }
    }

    let worker = tokio::spawn(async { num_workers() });
    let workers = wrap_task(worker).await;
    println!("workers: {workers:?}");

    let timeout_ms = wrap_sync(strict_timeout, (&settings,));
    println!("timeout: {timeout_ms:?}");

    settings.remove("timeout");
    let timeout_ms = wrap_sync(strict_timeout, (&settings,));
    println!("timeout after removal: {timeout_ms:?}");

    println!("{}", serde_json::to_string(&timeout_ms).unwrap_or_default());
}

fn num_workers() -> usize {
    std::thread::available_parallelism().map_or(1, usize::from)
}
