use std::fmt;
use std::sync::Arc;

use bloom_core::model::{FocusConfig, School, SchoolId};
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{
    Clock, DashboardService, DirectoryError, MockDirectory, RosterQuery, RosterService,
    SchoolDirectory,
};
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidSchoolId { raw: String },
    InvalidDuration { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidSchoolId { raw } => write!(f, "invalid --school-id value: {raw}"),
            ArgsError::InvalidDuration { raw } => write!(f, "invalid --duration value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    school_id: SchoolId,
    focus_config: FocusConfig,
    dashboard: Arc<DashboardService>,
    roster: Arc<RosterService>,
}

impl UiApp for DesktopApp {
    fn school_id(&self) -> SchoolId {
        self.school_id
    }

    fn focus_config(&self) -> FocusConfig {
        self.focus_config
    }

    fn dashboard(&self) -> Arc<DashboardService> {
        Arc::clone(&self.dashboard)
    }

    fn roster(&self) -> Arc<RosterService> {
        Arc::clone(&self.roster)
    }
}

struct Args {
    school_id: SchoolId,
    focus: FocusConfig,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- ui     [--school-id <id>] [--duration <secs>]");
    eprintln!("  cargo run -p app -- roster [--school-id <id>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --school-id 1");
    eprintln!("  --duration 1500");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  BLOOM_SCHOOL_ID, BLOOM_FOCUS_SECS");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Ui,
    Roster,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "ui" => Some(Self::Ui),
            "roster" => Some(Self::Roster),
            _ => None,
        }
    }
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut school_id = std::env::var("BLOOM_SCHOOL_ID")
            .ok()
            .and_then(|value| value.parse::<u64>().ok())
            .map_or_else(|| SchoolId::new(1), SchoolId::new);
        let mut focus = std::env::var("BLOOM_FOCUS_SECS")
            .ok()
            .and_then(|value| value.parse::<u32>().ok())
            .and_then(|secs| FocusConfig::new(secs).ok())
            .unwrap_or_default();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--school-id" => {
                    let value = require_value(args, "--school-id")?;
                    let parsed: u64 = value
                        .parse()
                        .map_err(|_| ArgsError::InvalidSchoolId { raw: value.clone() })?;
                    school_id = SchoolId::new(parsed);
                }
                "--duration" => {
                    let value = require_value(args, "--duration")?;
                    let secs: u32 = value
                        .parse()
                        .map_err(|_| ArgsError::InvalidDuration { raw: value.clone() })?;
                    focus = FocusConfig::new(secs)
                        .map_err(|_| ArgsError::InvalidDuration { raw: value })?;
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self { school_id, focus })
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    // Default behavior: launching UI when no subcommand is provided.
    let cmd = match argv.first().map(String::as_str) {
        None => Command::Ui,
        Some("--help" | "-h") => {
            print_usage();
            return Ok(());
        }
        Some(first) if first.starts_with("--") => Command::Ui,
        Some(first) => Command::from_arg(first).ok_or_else(|| {
            eprintln!("unknown subcommand: {first}");
            print_usage();
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "unknown subcommand")
        })?,
    };

    if matches!(cmd, Command::Ui | Command::Roster)
        && !argv.is_empty()
        && !argv[0].starts_with("--")
    {
        argv.remove(0);
    }

    let mut iter = argv.into_iter();
    let parsed = Args::parse(&mut iter).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    // The seeded in-process directory stands in for a real backend.
    let directory: Arc<dyn SchoolDirectory> = Arc::new(MockDirectory::seeded()?);
    let school = resolve_school(directory.as_ref(), parsed.school_id).await?;

    match cmd {
        Command::Ui => {
            let clock = Clock::default_clock();
            let dashboard = Arc::new(DashboardService::new(clock, Arc::clone(&directory)));
            let roster = Arc::new(RosterService::new(Arc::clone(&directory)));

            let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
                school_id: school.id(),
                focus_config: parsed.focus,
                dashboard,
                roster,
            });
            let context = build_app_context(&app);

            // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
            // Explicitly disable it so the app doesn't behave like a modal window.
            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title("Bloom")
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(())
        }
        Command::Roster => {
            let roster = RosterService::new(Arc::clone(&directory));
            let members = roster.members(school.id(), RosterQuery::any()).await?;

            println!("{} roster ({} people)", school.name(), members.len());
            for member in &members {
                println!(
                    "  {:<24} {:<10} {}",
                    member.name(),
                    member.role().label(),
                    member.status().label()
                );
            }
            Ok(())
        }
    }
}

/// Pick the school the session scopes to, falling back to the first one the
/// directory lists when the requested ID does not exist.
async fn resolve_school(
    directory: &dyn SchoolDirectory,
    preferred: SchoolId,
) -> Result<School, Box<dyn std::error::Error>> {
    match directory.school(preferred).await {
        Ok(school) => Ok(school),
        Err(DirectoryError::UnknownSchool(_)) => {
            let schools = directory.schools().await?;
            let Some(first) = schools.into_iter().next() else {
                return Err("the directory lists no schools".into());
            };
            eprintln!(
                "school {} not found; using {} (id {})",
                preferred.value(),
                first.name(),
                first.id().value()
            );
            Ok(first)
        }
        Err(err) => Err(err.into()),
    }
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
