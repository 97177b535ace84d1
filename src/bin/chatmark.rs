use std::io::{Read, Write};
use std::path::PathBuf;

use chatmark::admin::AdminRenderer;
use chatmark::api::{ChatLogEntry, Student};
use chatmark::config::RenderOptions;
use chatmark::logging::PlainLogger;
use chatmark::message::{MessageRenderer, Sender};
use chatmark::table::TableConverter;

/// Render chat text or admin payloads to HTML on stdout.
///
/// Argument parsing is hand-rolled; the surface is a handful of flags.
fn main() {
    let cfg = match parse_args(std::env::args()) {
        Ok(cfg) => cfg,
        Err(message) => {
            eprintln!("{message}");
            std::process::exit(2);
        }
    };

    if cfg.help {
        print!("{HELP_TEXT}");
        return;
    }

    if cfg.log_level != log::LevelFilter::Off {
        install_logger(PlainLogger::default().level(cfg.log_level).show_path(false));
    }

    let input = match read_input(cfg.input.as_ref()) {
        Ok(input) => input,
        Err(err) => {
            eprintln!("Failed to read input: {err}");
            std::process::exit(1);
        }
    };

    let html = match render(&cfg, &input) {
        Ok(html) => html,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    let mut stdout = std::io::stdout().lock();
    if let Err(err) = writeln!(stdout, "{html}") {
        eprintln!("Failed to write output: {err}");
        std::process::exit(1);
    }
}

#[cfg(feature = "tracing")]
fn install_logger(logger: PlainLogger) {
    use chatmark::logging::PlainTracingLayer;

    if let Err(err) = PlainTracingLayer::new(logger).init() {
        eprintln!("Warning: Failed to install tracing layer: {err}");
    }
}

#[cfg(not(feature = "tracing"))]
fn install_logger(logger: PlainLogger) {
    if let Err(err) = logger.init() {
        eprintln!("Warning: Failed to initialize logger: {err}");
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum Mode {
    /// Full bot-message rendering.
    #[default]
    Bot,
    /// User bubble, text verbatim.
    User,
    /// Table conversion only, no bubble.
    TablesOnly,
    /// Input is a `/admin/students` JSON payload.
    Students,
    /// Input is a `/admin/chatlogs` JSON payload.
    ChatLogs,
}

#[derive(Debug, Clone)]
struct Config {
    help: bool,
    mode: Mode,
    options: RenderOptions,
    log_level: log::LevelFilter,
    input: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            help: false,
            mode: Mode::default(),
            options: RenderOptions::default(),
            log_level: log::LevelFilter::Off,
            input: None,
        }
    }
}

fn render(cfg: &Config, input: &str) -> Result<String, String> {
    Ok(match cfg.mode {
        Mode::Bot => MessageRenderer::new(&cfg.options).render(Sender::Bot, input),
        Mode::User => MessageRenderer::new(&cfg.options).render(Sender::User, input),
        Mode::TablesOnly => TableConverter::new(&cfg.options).convert(input).into_owned(),
        Mode::Students => {
            let students: Vec<Student> = serde_json::from_str(input)
                .map_err(|err| format!("Invalid students payload: {err}"))?;
            AdminRenderer::new(cfg.options.clone()).student_list(&students)
        }
        Mode::ChatLogs => {
            let logs: Vec<ChatLogEntry> = serde_json::from_str(input)
                .map_err(|err| format!("Invalid chat-log payload: {err}"))?;
            AdminRenderer::new(cfg.options.clone()).chat_logs(&logs)
        }
    })
}

fn read_input(path: Option<&PathBuf>) -> std::io::Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Config, String> {
    let mut iter = args.into_iter();
    // Drop binary name if present.
    let _ = iter.next();

    let mut cfg = Config::default();
    let mut mode_set = false;
    let mut set_mode = |cfg: &mut Config, mode: Mode| {
        if mode_set {
            return Err("Only one of --user, --tables-only, --students, --chat-logs may be given."
                .to_string());
        }
        mode_set = true;
        cfg.mode = mode;
        Ok(())
    };

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-h" | "--help" => cfg.help = true,
            "--user" => set_mode(&mut cfg, Mode::User)?,
            "--tables-only" => set_mode(&mut cfg, Mode::TablesOnly)?,
            "--students" => set_mode(&mut cfg, Mode::Students)?,
            "--chat-logs" => set_mode(&mut cfg, Mode::ChatLogs)?,
            "--plain" => cfg.options = cfg.options.clone().inline_markup(false),
            "--table-class" => {
                let class = next_value(&mut iter, "--table-class")?;
                cfg.options = cfg.options.clone().table_class(class);
            }
            "--preview-len" => {
                let raw = next_value(&mut iter, "--preview-len")?;
                let len = raw.parse::<usize>().map_err(|_| {
                    format!("Invalid --preview-len value `{raw}` (expected an integer).")
                })?;
                cfg.options = cfg.options.clone().response_preview_len(len);
            }
            "--log-level" => {
                let raw = next_value(&mut iter, "--log-level")?;
                cfg.log_level = parse_log_level(&raw)?;
            }
            other if other.starts_with('-') && other != "-" => {
                return Err(format!("Unknown option `{other}`. Try --help."));
            }
            path => {
                if cfg.input.is_some() {
                    return Err("Only one input file may be given.".to_string());
                }
                if path != "-" {
                    cfg.input = Some(PathBuf::from(path));
                }
            }
        }
    }

    Ok(cfg)
}

fn next_value(iter: &mut impl Iterator<Item = String>, flag: &str) -> Result<String, String> {
    iter.next()
        .ok_or_else(|| format!("Missing value for `{flag}`."))
}

fn parse_log_level(value: &str) -> Result<log::LevelFilter, String> {
    match value.trim().to_ascii_lowercase().as_str() {
        "off" | "none" => Ok(log::LevelFilter::Off),
        "error" => Ok(log::LevelFilter::Error),
        "warn" | "warning" => Ok(log::LevelFilter::Warn),
        "info" => Ok(log::LevelFilter::Info),
        "debug" => Ok(log::LevelFilter::Debug),
        "trace" => Ok(log::LevelFilter::Trace),
        _ => Err(format!(
            "Invalid --log-level value `{value}` (expected: off|error|warn|info|debug|trace)."
        )),
    }
}

const HELP_TEXT: &str = r"chatmark - render chatbot text and admin payloads as HTML

USAGE:
    chatmark [OPTIONS] [FILE]

Reads FILE (or stdin when absent or `-`) and writes HTML to stdout.

MODES (default: bot message):
    --user                      Render a user message (text kept verbatim)
    --tables-only               Convert pipe tables only, no message bubble
    --students                  Input is a /admin/students JSON array
    --chat-logs                 Input is a /admin/chatlogs JSON array

OPTIONS:
    --table-class <class>       Class attribute for generated tables
    --plain                     Skip bold/italic/line-break conversion
    --preview-len <n>           Chat-log response preview length (default: 100)
    --log-level <level>         off|error|warn|info|debug|trace (default: off)
    -h, --help                  Show this help
";
