use std::{
    io,
    process::{Child, Command, Stdio},
    sync::mpsc::{self, Receiver},
    thread,
};

use log::{info, warn};
use steno_core::speech::{NarrationBackend, Voice};

/// Speaking rate of the command at multiplier 1.0, in its own words per
/// minute.
const BASE_RATE_WPM: f32 = 175.0;

/// Narration through an espeak-compatible command line synthesizer, one child
/// process per word.
pub(super) struct CommandSpeech {
    program: String,
    child: Option<Child>,
    voices: Option<Receiver<Vec<Voice>>>,
    missing: bool,
}

impl CommandSpeech {
    /// Start enumerating voices in the background; they show up through
    /// [`NarrationBackend::poll_voices`] once the command answers.
    pub(super) fn new(program: String) -> Self {
        let (tx, rx) = mpsc::channel();
        let list_program = program.clone();
        let spawned = thread::Builder::new()
            .name("voice-list".into())
            .spawn(move || match list_voices(&list_program) {
                Ok(voices) => {
                    let _ = tx.send(voices);
                }
                Err(err) => {
                    warn!("speech: listing voices failed program={} err={}", list_program, err)
                }
            });

        let voices = match spawned {
            Ok(_) => Some(rx),
            Err(err) => {
                warn!("speech: voice list thread failed err={}", err);
                None
            }
        };

        Self {
            program,
            child: None,
            voices,
            missing: false,
        }
    }

    fn speak_command(&self, text: &str, voice: Option<&Voice>, rate: f32) -> Command {
        let mut command = Command::new(&self.program);
        command
            .arg("-s")
            .arg(format!("{}", (BASE_RATE_WPM * rate).round() as u32));
        if let Some(voice) = voice {
            command.arg("-v").arg(&voice.id);
        }
        command
            .arg("--")
            .arg(text)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        command
    }
}

impl NarrationBackend for CommandSpeech {
    type Error = io::Error;

    fn poll_voices(&mut self) -> Option<Vec<Voice>> {
        let voices = self.voices.as_ref()?.try_recv().ok()?;
        self.voices = None;
        Some(voices)
    }

    fn speak(&mut self, text: &str, voice: Option<&Voice>, rate: f32) -> Result<(), Self::Error> {
        if self.missing {
            return Ok(());
        }

        let mut command = self.speak_command(text, voice, rate);
        match command.spawn() {
            Ok(child) => {
                self.child = Some(child);
                Ok(())
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                warn!(
                    "speech: {} not found, continuing without audio",
                    self.program
                );
                self.missing = true;
                Err(err)
            }
            Err(err) => Err(err),
        }
    }

    fn cancel_all(&mut self) -> Result<(), Self::Error> {
        let Some(mut child) = self.child.take() else {
            return Ok(());
        };

        if child.try_wait()?.is_none() {
            child.kill()?;
        }
        child.wait()?;
        Ok(())
    }
}

impl Drop for CommandSpeech {
    fn drop(&mut self) {
        let _ = self.cancel_all();
    }
}

fn list_voices(program: &str) -> io::Result<Vec<Voice>> {
    let output = Command::new(program)
        .arg("--voices")
        .stdin(Stdio::null())
        .stderr(Stdio::null())
        .output()?;
    let voices = parse_voice_table(&String::from_utf8_lossy(&output.stdout));
    info!("speech: {} reported {} voices", program, voices.len());
    Ok(voices)
}

/// Parse the `--voices` table: `Pty Language Age/Gender VoiceName File ...`.
/// The `File` column is what `-v` accepts.
fn parse_voice_table(table: &str) -> Vec<Voice> {
    table
        .lines()
        .skip(1)
        .filter_map(|line| {
            let mut columns = line.split_whitespace();
            let _priority = columns.next()?;
            let language = columns.next()?;
            let _age_gender = columns.next()?;
            let name = columns.next()?;
            let file = columns.next()?;
            Some(Voice::new(name, language).with_id(file))
        })
        .collect()
}
