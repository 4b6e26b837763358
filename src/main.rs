use std::io::{self, BufRead, BufWriter, IsTerminal};
use std::process::ExitCode;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use clap::{CommandFactory, Parser};

use glug::cli::{Cli, ColorMode};
use glug::config::Config;
use glug::error::GlugError;
use glug::formatter::format_line;
use glug::output::Output;

fn main() -> ExitCode {
    // Reset SIGPIPE to default behavior so upstream writers get a clean
    // SIGPIPE signal instead of a BrokenPipeError when glug exits early.
    reset_sigpipe();

    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        clap_complete::generate(shell, &mut Cli::command(), "glug", &mut io::stdout());
        return ExitCode::SUCCESS;
    }

    glug::logging::init(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(GlugError::Io(e)) if e.kind() == io::ErrorKind::BrokenPipe => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("glug: {e}");
            ExitCode::from(e.exit_code())
        }
    }
}

fn run(cli: &Cli) -> Result<(), GlugError> {
    let config = Config::from_cli(cli)?;
    let use_color = resolve_color_mode(config.color_mode);
    let shutdown = install_shutdown_handler();

    let stdout = io::stdout();
    let use_pager = config.pager.unwrap_or_else(|| stdout.is_terminal());
    tracing::debug!(use_color, use_pager, "starting");

    let writer = BufWriter::new(stdout.lock());
    let mut output = if use_pager {
        Output::paged(writer)
    } else {
        Output::direct(writer)
    };
    let mut line_buf = String::new();
    let mut raw = Vec::new();
    let mut stdin = io::stdin().lock();

    loop {
        if shutdown.load(Ordering::SeqCst) {
            tracing::debug!("interrupted, stopping");
            return Ok(());
        }

        raw.clear();
        match stdin.read_until(b'\n', &mut raw) {
            Ok(0) => break,
            Ok(_) => {}
            Err(_) if shutdown.load(Ordering::SeqCst) => return Ok(()),
            Err(e) => return Err(GlugError::Io(e)),
        }
        let bytes = trim_line_ending(&raw);

        let Ok(line) = std::str::from_utf8(bytes) else {
            tracing::debug!("passing through line that is not valid UTF-8");
            output.write_raw_line(bytes)?;
            continue;
        };

        if line.trim().is_empty() {
            continue;
        }

        line_buf.clear();
        if format_line(line, &config, use_color, &mut line_buf) {
            output.write_line(&line_buf)?;
        }
    }

    output.finish()
}

/// Strip a trailing `\n` or `\r\n`.
fn trim_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

/// Route SIGINT/SIGTERM to a flag checked between input lines.
fn install_shutdown_handler() -> Arc<AtomicBool> {
    let flag = Arc::new(AtomicBool::new(false));
    let handler_flag = Arc::clone(&flag);
    if let Err(e) = ctrlc::set_handler(move || handler_flag.store(true, Ordering::SeqCst)) {
        tracing::warn!(error = %e, "could not install signal handler");
    }
    flag
}

fn resolve_color_mode(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            if std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty()) {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some_and(|v| !v.is_empty()) {
                return true;
            }
            if !io::stdout().is_terminal() {
                return false;
            }
            !std::env::var("TERM").is_ok_and(|v| v == "dumb")
        }
    }
}

/// Reset SIGPIPE to the default (terminate) behavior.
///
/// Rust ignores SIGPIPE by default to surface `BrokenPipe` I/O errors.
/// For a filter at the end of a pipeline that means the upstream writer sees
/// a write error when `glug` exits; with `SIG_DFL` the OS handles it.
#[cfg(unix)]
fn reset_sigpipe() {
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }
}

#[cfg(not(unix))]
fn reset_sigpipe() {}
