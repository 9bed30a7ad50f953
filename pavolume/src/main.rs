//! pavolume - Main entry point
//!
//! Query and set volume/mute of the default PulseAudio sink, with an
//! optional monitor mode that reprints the volume on every change.

use std::io;

use anyhow::Result;
use clap::error::ErrorKind;
use clap::Parser;
use tracing::debug;

use pavolume::cli::Args;
use pavolume::command::Command;
use pavolume::pulse::{monitor, PulseSession};
use pavolume::{config, output};

fn main() -> Result<()> {
    // Logs go to stderr; stdout carries only volume reports.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(io::stderr)
        .init();

    debug!(
        "pavolume v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let _ = err.print();
            match err.kind() {
                // Help and version are normal output, not usage errors.
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => return Ok(()),
                _ => std::process::exit(1),
            }
        }
    };

    run(&args)?;
    Ok(())
}

fn run(args: &Args) -> pavolume::Result<()> {
    let file_config = config::load()?;
    let command = Command::from_args(args, &file_config);

    let mut session = PulseSession::connect(file_config.server.as_deref())?;

    let default_name = session.default_sink_name()?;

    if command.list {
        let sinks = session.list_sinks(&default_name)?;
        return output::print_sink_list(&mut io::stdout(), &sinks);
    }

    let sink = session.sink_by_name(&default_name)?;
    let plan = command.plan(&sink);
    if let Some(mute) = plan.mute {
        session.set_sink_mute(sink.index, mute)?;
    }
    if let Some(percent) = plan.volume {
        session.set_sink_volume(sink.index, sink.channels, percent)?;
    }

    // Re-query so the report reflects what the server actually applied.
    let sink = session.sink_by_name(&default_name)?;
    output::print_report(&mut io::stdout(), &command.format, &sink)?;

    if command.monitor {
        monitor::run(&mut session, &command)?;
    }

    Ok(())
}
