#![doc = include_str!("../README.md")]

use apicall::{ClientConfig, RenderFormat, RenderOptions, ReqwestHttpClient};
use clap::Parser;
use core::{error::Error, time::Duration};
use duration_string::DurationString;
use env_logger::Env;
use std::process::exit;
use tokio::{
    io::{AsyncWriteExt, stdout},
    signal::ctrl_c,
};
use tokio_util::sync::CancellationToken;

const DEFAULT_ENDPOINT: &str = "https://dog.ceo/api/breeds/image/random";
const VERBOSE_LOG_FILTER: &str = "warn,apicall=trace";

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Arguments {
    /// An API endpoint.
    #[arg(default_value = DEFAULT_ENDPOINT)]
    endpoint: String,
    /// Sends `Accept: application/json`.
    #[arg(long)]
    accept_json: bool,
    /// Sends a bearer token.
    #[arg(long)]
    bearer_token: Option<String>,
    /// Adds a request header in a `name:value` form.
    #[arg(long = "header", value_parser = parse_header)]
    headers: Vec<(String, String)>,
    /// Sets a request timeout (e.g. `500ms` or `10s`).
    #[arg(long, value_parser = parse_duration)]
    timeout: Option<Duration>,
    /// Sets a user agent.
    #[arg(long)]
    user_agent: Option<String>,
    /// Sets an output format.
    #[arg(long, default_value = "text")]
    format: RenderFormat,
    /// Becomes verbose.
    #[arg(long)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("{error}");
        exit(1)
    }
}

async fn run() -> Result<(), Box<dyn Error>> {
    let Arguments {
        endpoint,
        accept_json,
        bearer_token,
        headers,
        timeout,
        user_agent,
        format,
        verbose,
    } = Arguments::parse();

    env_logger::Builder::from_env(Env::default().default_filter_or(if verbose {
        VERBOSE_LOG_FILTER
    } else {
        "warn"
    }))
    .init();

    let client = ReqwestHttpClient::with_config(
        &headers.into_iter().fold(
            ClientConfig::new()
                .set_accept_json(accept_json)
                .set_bearer_token(bearer_token)
                .set_timeout(timeout)
                .set_user_agent(user_agent),
            |config, (name, value)| config.set_header(name, value),
        ),
    )?;
    let token = CancellationToken::new();

    tokio::spawn({
        let token = token.clone();

        async move {
            if ctrl_c().await.is_ok() {
                token.cancel();
            }
        }
    });

    let result = apicall::call_with_cancellation(&endpoint, Some(&client), &token).await;
    let mut output = stdout();

    apicall::render_result(
        &result,
        &RenderOptions::new()
            .set_format(format)
            .set_count(verbose),
        &mut output,
    )
    .await?;
    output.flush().await?;

    if result.is_err() {
        exit(1)
    }

    Ok(())
}

fn parse_header(string: &str) -> Result<(String, String), String> {
    let (name, value) = string
        .split_once(':')
        .ok_or_else(|| format!("header must be in a `name:value` form: {string}"))?;

    Ok((name.trim().into(), value.trim().into()))
}

fn parse_duration(string: &str) -> Result<Duration, String> {
    Ok(string
        .parse::<DurationString>()
        .map_err(|error| error.to_string())?
        .into())
}
