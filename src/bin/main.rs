use anyhow::{Context, Result};
use embassy_executor::Spawner;
use embassy_futures::select::{Either, select};
use embassy_time::{Duration, Instant, Timer};
use log::{error, info};
use steno_core::{
    app::{Player, TickResult},
    input::mock::QueuedInput,
    wake_lock::NoWakeLock,
};

use commands::{CommandChannel, HELP, HostCommand};
use config::HostConfig;
use scan_host::{ImageFileCamera, TesseractRecognizer};
use settings_file::JsonFileSettings;
use speech_cmd::CommandSpeech;
use terminal::TerminalDisplay;

#[path = "main/commands.rs"]
mod commands;
#[path = "main/config.rs"]
mod config;
#[path = "main/scan_host.rs"]
mod scan_host;
#[path = "main/settings_file.rs"]
mod settings_file;
#[path = "main/speech_cmd.rs"]
mod speech_cmd;
#[path = "main/terminal.rs"]
mod terminal;

/// How often to wake while idle so a late voice list gets picked up.
const IDLE_POLL_MS: u64 = 250;
const REPORT_INTERVAL_SECS: u64 = 5;

static COMMANDS: CommandChannel = CommandChannel::new();

type HostPlayer =
    Player<QueuedInput, CommandSpeech, TerminalDisplay, NoWakeLock, JsonFileSettings>;

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = run().await {
        error!("steno: {:#}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let config = HostConfig::from_env()?;
    info!(
        "boot: speech={} ocr={} settings={}",
        config.speech_command,
        config.ocr_command,
        config.settings_path.display()
    );

    let settings = JsonFileSettings::open(config.settings_path.clone());
    let mut player: HostPlayer = Player::new(
        QueuedInput::new(),
        CommandSpeech::new(config.speech_command.clone()),
        TerminalDisplay::new(),
        NoWakeLock::new(),
        settings,
        config.player_config(),
    );

    if let Some(path) = &config.text_file {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        player.set_text(&text);
    }

    let mut recognizer = TesseractRecognizer::new(config.ocr_command.clone());
    commands::spawn_stdin_reader(&COMMANDS).context("starting stdin reader")?;
    println!("{HELP}");

    let loop_start = Instant::now();
    let mut report_start = Instant::now();
    let mut report_words = 0u64;

    loop {
        let now_ms = loop_start.elapsed().as_millis();
        if player.tick(now_ms) == TickResult::Completed {
            info!("player: finished");
        }

        report_words = report_words.saturating_add(player.drain_word_updates() as u64);
        let elapsed = report_start.elapsed();
        if elapsed >= Duration::from_secs(REPORT_INTERVAL_SECS) {
            if report_words > 0 {
                let elapsed_ms = elapsed.as_millis().max(1);
                let wpm_x100 = report_words * 6_000_000 / elapsed_ms;
                info!(
                    "effective_wpm={}.{:02} words={} elapsed_ms={}",
                    wpm_x100 / 100,
                    wpm_x100 % 100,
                    report_words,
                    elapsed_ms
                );
            }
            report_words = 0;
            report_start = Instant::now();
        }

        let wake_at = match player.next_deadline_ms() {
            Some(due_ms) => loop_start + Duration::from_millis(due_ms),
            None => Instant::now() + Duration::from_millis(IDLE_POLL_MS),
        };

        let command = match select(COMMANDS.receive(), Timer::at(wake_at)).await {
            Either::First(command) => command,
            Either::Second(()) => continue,
        };

        match command {
            HostCommand::Control(event) => player.input_mut().push(event),
            HostCommand::Scan(path) => {
                let mut camera = ImageFileCamera::new(path);
                // Failures were already shown as a notice.
                let _ = player.scan(&mut camera, &mut recognizer);
            }
            HostCommand::ListVoices => list_voices(&player),
            HostCommand::Help => println!("{HELP}"),
            HostCommand::Quit => {
                player.reset();
                info!("steno: bye");
                return Ok(());
            }
        }
    }
}

fn list_voices(player: &HostPlayer) {
    let speech = player.speech();
    let selected = speech.resolve_voice().map(|voice| voice.name.as_str());
    let mut any = false;

    for voice in speech.selectable_voices() {
        any = true;
        let marker = if Some(voice.name.as_str()) == selected {
            '*'
        } else {
            ' '
        };
        println!("{marker} {} ({})", voice.name, voice.language);
    }

    if !any {
        println!("no voices available yet");
    }
}
