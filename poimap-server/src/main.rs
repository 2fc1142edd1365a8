//! Entry point for the `poimap` binary.
#![forbid(unsafe_code)]

use eyre::WrapErr;
use poimap_server::{ServerError, parse_cli, run, telemetry};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let cli = match parse_cli(std::env::args_os()) {
        Ok(cli) => cli,
        // Help and version output go to stdout with a zero exit code.
        Err(ServerError::ArgumentParsing(err)) if !err.use_stderr() => err.exit(),
        Err(err) => return Err(err.into()),
    };
    telemetry::init()?;
    run(cli).await.wrap_err("poimap exited with an error")
}
