//! HotelPulse CLI
//!
//! Terminal host for the chat widget and the analytics dashboard:
//! - Chat with the backend interactively
//! - Ask a single question
//! - Fetch the analytics snapshot and save the charts
//! - Print today's date label
//! - Generate a default config file

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::{Path, PathBuf};
use tokio::io::{AsyncBufReadExt, BufReader};

use hotelpulse::config::{generate_default_config, Config, DefaultConfig};
use hotelpulse::{
    Backend, CannedBackend, ChartSlot, ChatController, ChatMessage, ChatSurface, DashboardController,
    DashboardSurface, EntryId, FetchReport, HttpBackend, MemoryTranscript, MessageStatus, Origin,
    TurnOutcome,
};

#[derive(Parser)]
#[command(name = "hotelpulse")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Chat and analytics client for the hotel bookings dashboard")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: search the standard locations)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Backend base URL, overrides the config file
    #[arg(long, global = true)]
    pub backend_url: Option<String>,

    /// Answer chat locally without contacting the backend
    #[arg(long, global = true)]
    pub offline: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Chat interactively; one line per message, /quit or EOF to leave
    Chat {
        /// Write the transcript as HTML when the session ends
        #[arg(short, long)]
        transcript: Option<PathBuf>,
    },

    /// Send one message and print the reply
    Ask {
        /// Message text
        #[arg(required = true)]
        message: Vec<String>,
    },

    /// Fetch the analytics snapshot
    Analytics {
        /// Directory to save the chart images into
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Print today's date as shown in the dashboard header
    Date,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (mut config, loaded) = match &cli.config {
        Some(path) => (Config::load_with_env(path)?, None),
        None => {
            let loaded = Config::load_default();
            (loaded.config.clone(), Some(loaded))
        }
    };
    if let Some(url) = &cli.backend_url {
        config.backend.url = url.clone();
    }
    if cli.offline {
        config.backend.offline = true;
    }

    hotelpulse::logging::init(&config.logging)?;

    if let Some(loaded) = loaded {
        report_default_config(&loaded);
    }

    match cli.command {
        Commands::Chat { transcript } => {
            let backend = build_backend(&config)?;
            run_chat(backend, &config, transcript.as_deref()).await?;
        }

        Commands::Ask { message } => {
            let backend = build_backend(&config)?;
            let mut surface = TerminalChat::new();
            surface.inner.set_input(message.join(" "));

            let mut chat =
                ChatController::new(backend, surface).with_settings(config.chat.settings());

            match chat.send_message().await {
                TurnOutcome::Errored(_) => std::process::exit(1),
                TurnOutcome::Ignored => {
                    eprintln!("Nothing to send");
                    std::process::exit(1);
                }
                _ => {}
            }
        }

        Commands::Analytics { out } => {
            let backend = build_backend(&config)?;
            let mut dashboard = DashboardController::new(backend, TerminalDashboard);

            match dashboard.fetch_analytics().await {
                FetchReport::Applied(applied) => {
                    if let Some(dir) = out {
                        std::fs::create_dir_all(&dir)
                            .with_context(|| format!("creating {:?}", dir))?;

                        for chart in applied.snapshot.charts() {
                            let Some(bytes) = chart.png_bytes() else {
                                eprintln!("Skipping {}: image is not valid base64", chart.slot());
                                continue;
                            };
                            let path = dir.join(format!("{}.png", chart.slot().element_id()));
                            std::fs::write(&path, bytes)
                                .with_context(|| format!("writing {:?}", path))?;
                        }
                        println!("Charts written to {:?}", dir);
                    }
                }
                FetchReport::Failed(err) => {
                    eprintln!("Analytics unavailable: {}", err);
                    eprintln!();
                    eprintln!("Make sure the analytics server is running at {}", config.backend.url);
                    std::process::exit(1);
                }
            }
        }

        Commands::Date => {
            println!("{}", hotelpulse::dashboard::today_long_date());
        }

        Commands::Config { output } => {
            let content = generate_default_config();

            match output {
                Some(path) => {
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&path, &content)?;
                    println!("Config written to {:?}", path);
                }
                None => {
                    print!("{}", content);
                }
            }
        }
    }

    Ok(())
}

fn report_default_config(loaded: &DefaultConfig) {
    for err in &loaded.skipped {
        tracing::warn!("{}, ignoring it", err);
    }
    match &loaded.source {
        Some(path) => tracing::info!("Loaded config from {:?}", path),
        None => tracing::info!("Using default config with environment overrides"),
    }
}

fn build_backend(config: &Config) -> anyhow::Result<Box<dyn Backend>> {
    if config.backend.offline {
        tracing::info!("Offline mode, chat answers are canned");
        return Ok(Box::new(CannedBackend::with_reply(
            config.chat.offline_reply.clone(),
        )));
    }

    tracing::info!("Using backend at {}", config.backend.url);
    Ok(Box::new(HttpBackend::new(&config.backend)?))
}

async fn run_chat(
    backend: Box<dyn Backend>,
    config: &Config,
    transcript: Option<&Path>,
) -> anyhow::Result<()> {
    println!("{}", hotelpulse::dashboard::today_long_date());
    println!("Type a message and press Enter. /quit to leave.");
    println!();

    let mut chat =
        ChatController::new(backend, TerminalChat::new()).with_settings(config.chat.settings());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim() == "/quit" {
            break;
        }

        chat.surface_mut().inner.set_input(line);
        chat.send_message().await;
    }

    if let Some(path) = transcript {
        std::fs::write(path, chat.surface().inner.to_html())
            .with_context(|| format!("writing transcript {:?}", path))?;
        println!("Transcript written to {:?}", path);
    }

    Ok(())
}

/// Chat surface printing each transcript change to a terminal
struct TerminalChat<W: Write = std::io::Stdout> {
    inner: MemoryTranscript,
    out: W,
    /// Width of the loading line currently on screen
    loading_width: Option<usize>,
}

impl TerminalChat {
    fn new() -> Self {
        Self::with_writer(std::io::stdout())
    }
}

impl<W: Write> TerminalChat<W> {
    fn with_writer(out: W) -> Self {
        Self {
            inner: MemoryTranscript::new(),
            out,
            loading_width: None,
        }
    }

    fn erase_loading_line(&mut self) {
        if let Some(width) = self.loading_width.take() {
            let _ = write!(self.out, "\r{}\r", " ".repeat(width));
            let _ = self.out.flush();
        }
    }
}

impl<W: Write> ChatSurface for TerminalChat<W> {
    fn input(&self) -> String {
        self.inner.input()
    }

    fn clear_input(&mut self) {
        self.inner.clear_input();
    }

    fn append(&mut self, message: ChatMessage) -> EntryId {
        let _ = match (message.origin, message.status) {
            (Origin::User, _) => writeln!(self.out, "you: {}", message.text),
            (Origin::Bot, MessageStatus::Loading) => {
                let line = format!("bot: {}...", message.text);
                self.loading_width = Some(line.chars().count());
                write!(self.out, "{}", line).and_then(|_| self.out.flush())
            }
            (Origin::Bot, MessageStatus::Normal) => writeln!(self.out, "bot: {}", message.text),
            (Origin::Bot, MessageStatus::Error) => {
                writeln!(self.out, "bot (error): {}", message.text)
            }
        };
        self.inner.append(message)
    }

    fn remove(&mut self, id: EntryId) -> bool {
        let was_loading = self
            .inner
            .entries()
            .iter()
            .any(|(entry, message)| *entry == id && message.is_loading());
        if was_loading {
            self.erase_loading_line();
        }
        self.inner.remove(id)
    }

    fn remove_loading(&mut self) -> usize {
        self.erase_loading_line();
        self.inner.remove_loading()
    }

    fn scroll_to_end(&mut self) {
        let _ = writeln!(self.out);
        self.inner.scroll_to_end();
    }

    fn send_enabled(&self) -> bool {
        self.inner.send_enabled()
    }

    fn set_send_enabled(&mut self, enabled: bool) {
        self.inner.set_send_enabled(enabled);
    }
}

/// Dashboard surface printing labels and chart arrivals
struct TerminalDashboard;

impl DashboardSurface for TerminalDashboard {
    fn set_date_label(&mut self, text: &str) -> bool {
        println!("{}", text);
        true
    }

    fn set_chart_image(&mut self, slot: ChartSlot, data_uri: &str) -> bool {
        println!(
            "{:<20} {:<20} {} chars",
            slot.title(),
            slot.element_id(),
            data_uri.len()
        );
        true
    }

    fn set_cancellation_rate(&mut self, text: &str) -> bool {
        println!();
        println!("Cancellation rate: {}", text);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(chat: &TerminalChat<Vec<u8>>) -> String {
        String::from_utf8(chat.out.clone()).unwrap()
    }

    #[test]
    fn test_remove_erases_loading_line() {
        let mut chat = TerminalChat::with_writer(Vec::new());
        chat.append(ChatMessage::user("Hi"));
        let placeholder = chat.append(ChatMessage::loading("Thinking"));
        assert_eq!(chat.loading_width, Some("bot: Thinking...".len()));

        assert!(chat.remove(placeholder));
        chat.append(ChatMessage::bot("Hello"));

        assert_eq!(chat.loading_width, None);
        assert_eq!(
            output(&chat),
            format!("you: Hi\nbot: Thinking...\r{}\rbot: Hello\n", " ".repeat(16))
        );
    }

    #[test]
    fn test_remove_loading_erases_loading_line() {
        let mut chat = TerminalChat::with_writer(Vec::new());
        chat.append(ChatMessage::loading("Wait"));

        assert_eq!(chat.remove_loading(), 1);
        assert_eq!(chat.loading_width, None);
        assert!(output(&chat).ends_with(&format!("\r{}\r", " ".repeat("bot: Wait...".len()))));

        // Nothing left to erase
        let written = chat.out.len();
        assert_eq!(chat.remove_loading(), 0);
        assert_eq!(chat.out.len(), written);
    }

    #[test]
    fn test_removing_other_entries_keeps_loading_line() {
        let mut chat = TerminalChat::with_writer(Vec::new());
        let user = chat.append(ChatMessage::user("Hi"));
        chat.append(ChatMessage::loading("Thinking"));

        assert!(chat.remove(user));
        assert_eq!(chat.loading_width, Some(16));
        assert_eq!(output(&chat), "you: Hi\nbot: Thinking...");
    }
}
