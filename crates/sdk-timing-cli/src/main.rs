//! sdk-timing CLI — `utctime` command.
//!
//! Provides a command-line interface for decoding fixed-format timestamps,
//! encoding epoch milliseconds, and inspecting UTC calendar fields.

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;

use sdk_timing::{
    to_epoch_seconds, BrokenDownTime, ChronoCalendar, MillisecondTimestamp, TimeUtils,
    UtcCalendar,
};

// ── CLI structure ─────────────────────────────────────────────────────────────

/// utctime — convert between UTC calendar fields, fixed-format timestamps
/// and Unix epoch seconds.
#[derive(Parser, Debug)]
#[command(
    name = "utctime",
    about = "sdk-timing CLI",
    version,
    long_about = "utctime — sdk-timing CLI\n\nDecode YYYY-MM-DDTHH:MM:SS+XXXX timestamps, encode epoch milliseconds\nas YYYY-MM-DDTHH:MM:SS.mmmZ, and inspect UTC calendar fields."
)]
struct Cli {
    /// Enable verbose output (debug logging unless RUST_LOG is set)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Decode a YYYY-MM-DDTHH:MM:SS+XXXX timestamp to epoch seconds
    Decode {
        /// The 24-character timestamp
        text: String,
    },

    /// Encode epoch milliseconds as YYYY-MM-DDTHH:MM:SS.mmmZ
    Encode {
        /// Milliseconds since 1970-01-01T00:00:00Z (may be negative)
        #[arg(allow_hyphen_values = true)]
        millis: i64,
    },

    /// Print the current time as epoch seconds
    Now {
        /// Also print the current time in encoded form
        #[arg(long)]
        encoded: bool,
    },

    /// Convert UTC calendar fields to epoch seconds
    Epoch {
        /// Full year, e.g. 2018
        #[arg(long, allow_hyphen_values = true)]
        year: i32,

        /// Month, 1-12; others carry into the year
        #[arg(long, allow_hyphen_values = true)]
        month: i32,

        /// Day of month, 1-31
        #[arg(long, allow_hyphen_values = true)]
        day: i32,

        #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
        hour: i32,

        #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
        minute: i32,

        /// Second, 0-60
        #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
        second: i32,
    },

    /// Break epoch seconds down into UTC calendar fields
    Breakdown {
        /// Seconds since 1970-01-01T00:00:00Z (may be negative)
        #[arg(allow_hyphen_values = true)]
        seconds: i64,
    },
}

// ── JSON output shapes ────────────────────────────────────────────────────────

#[derive(Serialize)]
struct EpochOutput<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    input: Option<&'a str>,
    epoch_seconds: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    encoded: Option<String>,
}

#[derive(Serialize)]
struct EncodeOutput {
    millis: i64,
    encoded: String,
}

#[derive(Serialize)]
struct BreakdownOutput {
    epoch_seconds: i64,
    utc: BrokenDownTime,
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("failed to serialize output")?;
    println!("{json}");
    Ok(())
}

// ── Main entry point ──────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let utils = TimeUtils::new();
    let json = cli.json;

    let result = match cli.command {
        Commands::Decode { text } => cmd_decode(&utils, &text, json),
        Commands::Encode { millis } => cmd_encode(&utils, millis, json),
        Commands::Now { encoded } => cmd_now(&utils, encoded, json),
        Commands::Epoch {
            year,
            month,
            day,
            hour,
            minute,
            second,
        } => cmd_epoch(
            BrokenDownTime::new(year, month, day, hour, minute, second),
            json,
        ),
        Commands::Breakdown { seconds } => cmd_breakdown(seconds, json),
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

// ── Command implementations ───────────────────────────────────────────────────

/// `utctime decode TEXT`
fn cmd_decode(utils: &TimeUtils, text: &str, json: bool) -> Result<()> {
    let seconds = utils
        .convert_iso8601_to_unix(text)
        .with_context(|| format!("cannot decode {text:?}"))?;

    if json {
        print_json(&EpochOutput {
            input: Some(text),
            epoch_seconds: seconds,
            encoded: None,
        })
    } else {
        println!("{seconds}");
        Ok(())
    }
}

/// `utctime encode MILLIS`
fn cmd_encode(utils: &TimeUtils, millis: i64, json: bool) -> Result<()> {
    let encoded = utils
        .convert_time_to_utc_iso8601(MillisecondTimestamp::from_millis(millis))
        .with_context(|| format!("cannot encode {millis} ms"))?;

    if json {
        print_json(&EncodeOutput { millis, encoded })
    } else {
        println!("{encoded}");
        Ok(())
    }
}

/// `utctime now [--encoded]`
fn cmd_now(utils: &TimeUtils, with_encoded: bool, json: bool) -> Result<()> {
    let seconds = utils
        .current_unix_time()
        .context("cannot read the system clock")?;
    let encoded = if with_encoded {
        Some(
            utils
                .convert_time_to_utc_iso8601(MillisecondTimestamp::now())
                .context("cannot encode the current time")?,
        )
    } else {
        None
    };

    if json {
        return print_json(&EpochOutput {
            input: None,
            epoch_seconds: seconds,
            encoded,
        });
    }
    println!("{seconds}");
    if let Some(encoded) = encoded {
        println!("{encoded}");
    }
    Ok(())
}

/// `utctime epoch --year Y --month M --day D [--hour H --minute M --second S]`
fn cmd_epoch(utc: BrokenDownTime, json: bool) -> Result<()> {
    let seconds = to_epoch_seconds(&utc);
    log::debug!("{utc} is epoch second {seconds}");

    if json {
        print_json(&BreakdownOutput {
            epoch_seconds: seconds,
            utc,
        })
    } else {
        println!("{seconds}");
        Ok(())
    }
}

/// `utctime breakdown SECONDS`
fn cmd_breakdown(seconds: i64, json: bool) -> Result<()> {
    let utc = ChronoCalendar
        .utc_broken_down(seconds)
        .ok_or_else(|| anyhow!("epoch second {seconds} is outside the supported calendar range"))?;

    if json {
        print_json(&BreakdownOutput {
            epoch_seconds: seconds,
            utc,
        })
    } else {
        println!("{utc}");
        Ok(())
    }
}
