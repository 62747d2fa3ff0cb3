//! Read colon separated HTTP headers from stdin, for example
//!
//! ```text
//! :path: /foo/bar
//! content-type: application/grpc
//! ```
//!
//! and write the HPACK encoded HTTP/2 frame that carries them.

use std::io::Write;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use h2_header_frame_gen::{
    parse_headers, render, verify, Compression, FrameOptions, HeaderFrame, OutputMode,
};

/// Generate header frames
#[derive(Parser, Debug, Clone)]
#[command(name = "gen_header_frame", version, about, long_about = None)]
struct CliArgs {
    /// Set END_STREAM on the frame header
    #[arg(long = "set_end_stream")]
    set_end_stream: bool,

    /// Emit the header block without the 9-byte frame header
    #[arg(long = "no_framing")]
    no_framing: bool,

    /// Representation used for every header
    #[arg(long, value_enum, default_value_t = CompressionArg::Never)]
    compression: CompressionArg,

    /// Print a single hex array instead of C string literals
    #[arg(long)]
    hex: bool,

    /// Decode the generated block and compare it with the input
    #[arg(long)]
    verify: bool,

    /// Log level or filter directive (overrides RUST_LOG)
    #[arg(long)]
    log_level: Option<String>,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum CompressionArg {
    Inc,
    Never,
    Pre,
}

impl From<CompressionArg> for Compression {
    fn from(arg: CompressionArg) -> Self {
        match arg {
            CompressionArg::Inc => Compression::Inc,
            CompressionArg::Never => Compression::Never,
            CompressionArg::Pre => Compression::Pre,
        }
    }
}

impl CliArgs {
    fn frame_options(&self) -> FrameOptions {
        FrameOptions {
            compression: self.compression.into(),
            framing: !self.no_framing,
            end_stream: self.set_end_stream,
        }
    }

    fn output_mode(&self) -> OutputMode {
        if self.hex {
            OutputMode::Hex
        } else {
            OutputMode::CString
        }
    }
}

/// Logs go to stderr; stdout carries only the fixture.
fn init_logging(level: Option<&str>) -> Result<()> {
    let filter = match level {
        Some(directive) => EnvFilter::try_new(directive)
            .with_context(|| format!("invalid log level: {}", directive))?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let cli = CliArgs::parse();
    init_logging(cli.log_level.as_deref())?;

    let input = std::io::read_to_string(std::io::stdin()).context("failed to read stdin")?;
    let headers = parse_headers(&input).context("failed to parse header list")?;

    let options = cli.frame_options();
    if options.end_stream && !options.framing {
        tracing::warn!("--set_end_stream has no effect with --no_framing");
    }

    let frame = HeaderFrame::build(&headers, &options).context("failed to build header frame")?;
    if cli.verify {
        verify(&frame, &headers, options.compression).context("generated frame did not verify")?;
    }

    let lines = render(&frame, cli.output_mode());
    let mut out = std::io::stdout().lock();
    for line in &lines {
        writeln!(out, "{}", line).context("failed to write output")?;
    }
    out.flush().context("failed to flush output")?;
    Ok(())
}
