//! Colorful console output for planner runs.
//!
//! Provides a custom `tracing` layer that formats planner events with colors.
//!
//! ## Log Levels
//!
//! - **INFO**: Lifecycle events (plan and batch start/end)
//! - **DEBUG**: Progress updates every `progress_interval` expansions
//! - **TRACE**: Individual node expansions

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;
use std::time::Instant;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();
static EPOCH: OnceLock<Instant> = OnceLock::new();
static PLAN_START_NANOS: AtomicU64 = AtomicU64::new(0);

/// Package version for banner display.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initializes console output.
///
/// Safe to call multiple times - only the first call has effect.
/// Prints the banner and sets up tracing. `RUST_LOG` overrides the default
/// `info` level.
pub fn init() {
    INIT.get_or_init(|| {
        print_banner();

        let filter = EnvFilter::builder()
            .with_default_directive(LevelFilter::INFO.into())
            .from_env_lossy();

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(StowageConsoleLayer)
            .try_init();
    });
}

// Marks the start of a plan for elapsed time tracking.
fn mark_plan_start() {
    let epoch = EPOCH.get_or_init(Instant::now);
    let nanos = epoch.elapsed().as_nanos() as u64;
    PLAN_START_NANOS.store(nanos, Ordering::Relaxed);
}

// Returns elapsed time since the last plan start.
fn elapsed_secs() -> f64 {
    let Some(epoch) = EPOCH.get() else {
        return 0.0;
    };
    let start_nanos = PLAN_START_NANOS.load(Ordering::Relaxed);
    let now_nanos = epoch.elapsed().as_nanos() as u64;
    now_nanos.saturating_sub(start_nanos) as f64 / 1_000_000_000.0
}

fn print_banner() {
    let banner = r#"
     _                                
 ___| |_ _____      ____ _  __ _  ___ 
/ __| __/ _ \ \ /\ / / _` |/ _` |/ _ \
\__ \ || (_) \ V  V / (_| | (_| |  __/
|___/\__\___/ \_/\_/ \__,_|\__, |\___|
                           |___/      
"#;

    let version_line = format!("        v{} - Ship Balance Planner\n", VERSION);

    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{}", banner.bright_cyan());
    let _ = writeln!(stdout, "{}", version_line.bright_white().bold());
    let _ = stdout.flush();
}

/// A tracing layer that formats planner events with colors.
pub struct StowageConsoleLayer;

impl<S: Subscriber> Layer<S> for StowageConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let target = metadata.target();

        // Accept events from stowage crates
        if !target.starts_with("stowage") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let level = *metadata.level();
        let output = format_event(&visitor, level);
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{}", output);
        } else if level <= Level::WARN {
            if let Some(message) = visitor.message.as_deref() {
                let _ = writeln!(
                    io::stdout(),
                    "{} {} {}",
                    format_elapsed(),
                    "!".bright_yellow().bold(),
                    message.yellow()
                );
            }
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    message: Option<String>,
    result: Option<String>,
    reason: Option<String>,
    containers: Option<u64>,
    port_weight: Option<u64>,
    starboard_weight: Option<u64>,
    imbalance: Option<u64>,
    best_imbalance: Option<u64>,
    max_expansions: Option<u64>,
    moves: Option<u64>,
    cost: Option<u64>,
    expansions: Option<u64>,
    expansion: Option<u64>,
    generated: Option<u64>,
    pruned: Option<u64>,
    frontier: Option<u64>,
    visited: Option<u64>,
    depth: Option<u64>,
    priority: Option<u64>,
    speed: Option<u64>,
    duration_ms: Option<u64>,
    plans: Option<u64>,
    balanced: Option<u64>,
    move_cost: Option<u64>,
    total_crane_time: Option<u64>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        match field.name() {
            "event" => self.event = Some(s.trim_matches('"').to_string()),
            "message" => self.message = Some(s.trim_matches('"').to_string()),
            "result" => self.result = Some(s.trim_matches('"').to_string()),
            "reason" => self.reason = Some(s.trim_matches('"').to_string()),
            _ => {}
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "containers" => self.containers = Some(value),
            "port_weight" => self.port_weight = Some(value),
            "starboard_weight" => self.starboard_weight = Some(value),
            "imbalance" => self.imbalance = Some(value),
            "best_imbalance" => self.best_imbalance = Some(value),
            "max_expansions" => self.max_expansions = Some(value),
            "moves" => self.moves = Some(value),
            "cost" => self.cost = Some(value),
            "expansions" => self.expansions = Some(value),
            "expansion" => self.expansion = Some(value),
            "generated" => self.generated = Some(value),
            "pruned" => self.pruned = Some(value),
            "frontier" => self.frontier = Some(value),
            "visited" => self.visited = Some(value),
            "depth" => self.depth = Some(value),
            "priority" => self.priority = Some(value),
            "speed" => self.speed = Some(value),
            "duration_ms" => self.duration_ms = Some(value),
            "plans" => self.plans = Some(value),
            "balanced" => self.balanced = Some(value),
            "move_cost" => self.move_cost = Some(value),
            "total_crane_time" => self.total_crane_time = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value as u64);
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "event" => self.event = Some(value.to_string()),
            "message" => self.message = Some(value.to_string()),
            "result" => self.result = Some(value.to_string()),
            "reason" => self.reason = Some(value.to_string()),
            _ => {}
        }
    }
}

fn format_event(v: &EventVisitor, level: Level) -> String {
    let event = v.event.as_deref().unwrap_or("");

    match event {
        "plan_start" => format_plan_start(v),
        "plan_end" => format_plan_end(v),
        "progress" => format_progress(v),
        "expansion" => format_expansion(v, level),
        "batch_start" => format_batch_start(v),
        "batch_end" => format_batch_end(v),
        "session_end" => format_session_end(v),
        _ => String::new(),
    }
}

fn format_elapsed() -> String {
    format!("{:>7.3}s", elapsed_secs())
        .bright_black()
        .to_string()
}

fn kg(value: u64) -> String {
    format!("{} kg", value.to_formatted_string(&Locale::en))
}

fn format_plan_start(v: &EventVisitor) -> String {
    mark_plan_start();
    let containers = v.containers.unwrap_or(0);
    let port = v.port_weight.unwrap_or(0);
    let starboard = v.starboard_weight.unwrap_or(0);
    let imbalance = v.imbalance.unwrap_or(0);

    let mut output = format!(
        "{} {} Planning │ {} containers │ port {} │ starboard {} │ imbalance {}",
        format_elapsed(),
        "▶".bright_green().bold(),
        containers.to_formatted_string(&Locale::en).bright_yellow(),
        kg(port).bright_yellow(),
        kg(starboard).bright_yellow(),
        kg(imbalance).bright_magenta()
    );

    if let Some(limit) = v.max_expansions {
        output.push_str(&format!(
            " │ {} expansion limit",
            limit.to_formatted_string(&Locale::en).bright_yellow()
        ));
    }

    output
}

fn format_plan_end(v: &EventVisitor) -> String {
    let expansions = v.expansions.unwrap_or(0);
    let duration = v.duration_ms.unwrap_or(0);

    let headline = match v.result.as_deref() {
        Some("balanced") => format!(
            "{} │ {} moves │ {} min │ imbalance {}",
            "BALANCED".bright_green().bold(),
            v.moves.unwrap_or(0).to_formatted_string(&Locale::en).white(),
            v.cost.unwrap_or(0).to_formatted_string(&Locale::en).bright_yellow(),
            kg(v.imbalance.unwrap_or(0)).bright_magenta()
        ),
        _ => format!(
            "{} │ {}",
            "NO SOLUTION".bright_red().bold(),
            v.reason.as_deref().unwrap_or("unknown").yellow()
        ),
    };

    format!(
        "{} {} Planning complete │ {} │ {} │ {} expansions │ {} pruned",
        format_elapsed(),
        "■".bright_cyan().bold(),
        headline,
        format_duration_ms(duration).yellow(),
        expansions.to_formatted_string(&Locale::en).white(),
        v.pruned.unwrap_or(0).to_formatted_string(&Locale::en).bright_black()
    )
}

fn format_progress(v: &EventVisitor) -> String {
    let expansions = v.expansions.unwrap_or(0);
    let frontier = v.frontier.unwrap_or(0);
    let speed = v.speed.unwrap_or(0);
    let best = v.best_imbalance.unwrap_or(0);

    format!(
        "{} {} {:>10} expansions │ {:>10} open │ {:>10}/s │ best {}",
        format_elapsed(),
        "⚡".bright_cyan(),
        expansions.to_formatted_string(&Locale::en).white(),
        frontier.to_formatted_string(&Locale::en).white(),
        speed
            .to_formatted_string(&Locale::en)
            .bright_magenta()
            .bold(),
        kg(best).bright_magenta()
    )
}

fn format_expansion(v: &EventVisitor, level: Level) -> String {
    if level != Level::TRACE {
        return String::new();
    }

    format!(
        "{} {} Node {:>10} │ depth {:>3} │ g {:>6} │ f {:>6} │ {}",
        format_elapsed(),
        "·".bright_black(),
        v.expansion
            .unwrap_or(0)
            .to_formatted_string(&Locale::en)
            .bright_black(),
        v.depth.unwrap_or(0),
        v.cost.unwrap_or(0),
        v.priority.unwrap_or(0),
        kg(v.imbalance.unwrap_or(0)).bright_black()
    )
}

fn format_batch_start(v: &EventVisitor) -> String {
    format!(
        "{} {} Batch │ {} plans",
        format_elapsed(),
        "▶".bright_blue(),
        v.plans.unwrap_or(0).to_formatted_string(&Locale::en).bright_yellow()
    )
}

fn format_batch_end(v: &EventVisitor) -> String {
    let plans = v.plans.unwrap_or(0);
    let balanced = v.balanced.unwrap_or(0);
    let summary = format!("{}/{} balanced", balanced, plans);
    let summary = if balanced == plans {
        summary.bright_green().to_string()
    } else {
        summary.bright_red().to_string()
    };
    format!("{} {} Batch complete │ {}", format_elapsed(), "◀".bright_blue(), summary)
}

fn format_session_end(v: &EventVisitor) -> String {
    format!(
        "{} {} Session │ {} moves │ {} min moving │ {} min with PARK legs",
        format_elapsed(),
        "⚓".bright_cyan(),
        v.moves.unwrap_or(0).to_formatted_string(&Locale::en).white(),
        v.move_cost.unwrap_or(0).to_formatted_string(&Locale::en).bright_yellow(),
        v.total_crane_time
            .unwrap_or(0)
            .to_formatted_string(&Locale::en)
            .bright_green()
            .bold()
    )
}

fn format_duration_ms(ms: u64) -> String {
    if ms < 1000 {
        format!("{}ms", ms)
    } else if ms < 60_000 {
        format!("{:.2}s", ms as f64 / 1000.0)
    } else {
        let mins = ms / 60_000;
        let secs = (ms % 60_000) / 1000;
        format!("{}m {}s", mins, secs)
    }
}
