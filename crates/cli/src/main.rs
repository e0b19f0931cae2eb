//! Study tracker CLI - tasks, reminders and progress charts.

use std::path::PathBuf;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tokio::sync::mpsc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use studytrack_core::{
    EditSession, ReminderForm, ReminderId, TaskForm, TaskId, TrackerData, TrackerState,
};
use studytrack_progress::ChartProjector;
use studytrack_storage::{load_data, save_data, JsonStorage};

#[derive(Parser)]
#[command(name = "studytrack")]
#[command(about = "Personal study tracker: tasks, reminders and progress", long_about = None)]
struct Cli {
    /// Directory holding the tracker data
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage tasks
    Task {
        #[command(subcommand)]
        command: TaskCommand,
    },
    /// Manage reminders
    Reminder {
        #[command(subcommand)]
        command: ReminderCommand,
    },
    /// Show chart data
    Chart {
        #[command(subcommand)]
        command: ChartCommand,
    },
    /// Show status
    Status,
}

#[derive(Subcommand)]
enum TaskCommand {
    /// Add a new task
    Add {
        /// Task text
        text: String,
        /// Study, Assignment, Project or Personal
        #[arg(long, short)]
        category: Option<String>,
        /// Due date (YYYY-MM-DD)
        #[arg(long)]
        due: Option<String>,
    },
    /// Edit a task's text, category or due date
    Edit {
        /// Task ID
        id: TaskId,
        /// New text
        #[arg(long)]
        text: Option<String>,
        /// New category
        #[arg(long, short)]
        category: Option<String>,
        /// New due date (empty string clears it)
        #[arg(long)]
        due: Option<String>,
    },
    /// Mark a task done, or not done
    Toggle {
        /// Task ID
        id: TaskId,
    },
    /// Delete a task
    Delete {
        /// Task ID
        id: TaskId,
    },
    /// List tasks
    List,
}

#[derive(Subcommand)]
enum ReminderCommand {
    /// Add a reminder
    Add {
        /// Reminder message
        message: String,
        /// When (YYYY-MM-DDTHH:MM)
        #[arg(long)]
        at: Option<String>,
    },
    /// Delete a reminder
    Delete {
        /// Reminder ID
        id: ReminderId,
    },
    /// List reminders
    List,
}

#[derive(Subcommand)]
enum ChartCommand {
    /// Completed vs. pending tasks
    Summary {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Completions per day
    Daily {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Host-level settings.
#[derive(Debug, Clone)]
struct HostConfig {
    data_dir: PathBuf,
    verbosity: u8,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(".studytrack"),
            verbosity: 0,
        }
    }
}

impl HostConfig {
    fn with_data_dir(mut self, dir: Option<PathBuf>) -> Self {
        if let Some(dir) = dir {
            self.data_dir = dir;
        }
        self
    }

    fn with_verbosity(mut self, verbosity: u8) -> Self {
        self.verbosity = verbosity;
        self
    }

    fn default_filter(&self) -> &'static str {
        match self.verbosity {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = HostConfig::default()
        .with_data_dir(cli.data_dir)
        .with_verbosity(cli.verbose);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.default_filter()));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // Open storage
    let mut storage = JsonStorage::new(&config.data_dir)
        .await
        .with_context(|| format!("cannot open data dir {}", config.data_dir.display()))?;
    let data = load_data(&storage)
        .await
        .context("stored tracker data is unreadable")?;

    let mut state = TrackerState::from_data(data);
    let (tx, mut rx) = mpsc::unbounded_channel::<TrackerData>();
    state.subscribe(move |data: &TrackerData| {
        let _ = tx.send(data.clone());
    });

    match cli.command {
        Commands::Task { command } => run_task(&mut state, command),
        Commands::Reminder { command } => run_reminder(&mut state, command),
        Commands::Chart { command } => run_chart(&state, command)?,
        Commands::Status => print_status(&state),
    }

    // Persist the latest snapshot, if anything changed.
    let mut latest = None;
    while let Ok(data) = rx.try_recv() {
        latest = Some(data);
    }
    if let Some(data) = latest {
        if let Err(e) = save_data(&mut storage, &data).await {
            warn!(error = %e, "failed to save tracker data");
        }
    }

    Ok(())
}

fn run_task(state: &mut TrackerState, command: TaskCommand) {
    match command {
        TaskCommand::Add { text, category, due } => {
            let form = TaskForm::new(text, category.unwrap_or_default(), due.unwrap_or_default());
            match state.add_task(&form) {
                Some(task) => {
                    info!(id = %task.id, "task added");
                    println!("Added task: {} - {}", task.id, task);
                }
                None => report_rejection(form.parse().err()),
            }
        }
        TaskCommand::Edit { id, text, category, due } => {
            let Some(task) = state.task(id) else {
                println!("Task not found");
                return;
            };

            let mut session = EditSession::new();
            session.begin(task);
            let Some(form) = session.form_mut() else {
                return;
            };
            if let Some(text) = text {
                form.text = text;
            }
            if let Some(category) = category {
                form.category = category;
            }
            if let Some(due) = due {
                form.due_date = due;
            }
            let submitted = form.clone();

            match session.commit(state) {
                Some(task) => {
                    info!(id = %task.id, "task updated");
                    println!("Updated task: {} - {}", task.id, task);
                }
                None => report_rejection(submitted.parse().err()),
            }
        }
        TaskCommand::Toggle { id } => match state.toggle_task(id) {
            Some(task) => {
                info!(%id, completed = task.completed, "task toggled");
                let mark = if task.completed { "done" } else { "not done" };
                println!("Task {} marked {}", task.id, mark);
            }
            None => println!("Task not found"),
        },
        TaskCommand::Delete { id } => match state.delete_task(id) {
            Some(task) => {
                info!(%id, "task deleted");
                println!("Deleted task: {} - {}", task.id, task);
            }
            None => println!("Task not found"),
        },
        TaskCommand::List => {
            println!("Tasks ({})", state.tasks().len());
            for task in state.tasks() {
                let mark = if task.completed { "x" } else { " " };
                println!("  {} | [{}] | {}", task.id, mark, task);
            }
        }
    }
}

fn run_reminder(state: &mut TrackerState, command: ReminderCommand) {
    match command {
        ReminderCommand::Add { message, at } => {
            let form = ReminderForm::new(message, at.unwrap_or_default());
            match state.add_reminder(&form) {
                Some(reminder) => {
                    info!(id = %reminder.id, "reminder added");
                    println!("Added reminder: {} - {}", reminder.id, reminder);
                }
                None => report_rejection(form.parse().err()),
            }
        }
        ReminderCommand::Delete { id } => match state.delete_reminder(id) {
            Some(reminder) => {
                info!(%id, "reminder deleted");
                println!("Deleted reminder: {} - {}", reminder.id, reminder);
            }
            None => println!("Reminder not found"),
        },
        ReminderCommand::List => {
            if state.reminders().is_empty() {
                println!("No reminders set yet.");
                return;
            }
            println!("Reminders ({})", state.reminders().len());
            for reminder in state.reminders() {
                println!("  {} | {}", reminder.id, reminder);
            }
        }
    }
}

fn run_chart(state: &TrackerState, command: ChartCommand) -> Result<()> {
    let projector = ChartProjector;
    match command {
        ChartCommand::Summary { json } => {
            if json {
                let rows = projector.bar_rows(state.tasks());
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else {
                let summary = projector.completion_summary(state.tasks());
                println!("Completed: {}", summary.completed_count);
                println!("Pending:   {}", summary.pending_count);
            }
        }
        ChartCommand::Daily { json } => {
            let series = projector.daily_series(state.ledger());
            if json {
                println!("{}", serde_json::to_string_pretty(&series)?);
            } else if series.is_empty() {
                println!("No completions recorded yet.");
            } else {
                for point in series {
                    println!("  {} | {:>3} | {}", point.date, point.count, "#".repeat(point.count as usize));
                }
            }
        }
    }
    Ok(())
}

fn print_status(state: &TrackerState) {
    let summary = ChartProjector.completion_summary(state.tasks());
    println!("Study Tracker Status");
    println!("  Tasks:       {}", summary.total());
    println!("    completed: {}", summary.completed_count);
    println!("    pending:   {}", summary.pending_count);
    println!("  Reminders:   {}", state.reminders().len());
    println!("  Completions: {}", state.ledger().total());
}

fn report_rejection(reason: Option<studytrack_core::ValidationError>) {
    match reason {
        Some(e) => println!("Rejected: {}", e),
        None => println!("Task not found"),
    }
}
