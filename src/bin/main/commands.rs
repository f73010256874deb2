use std::{
    io::{self, BufRead},
    path::PathBuf,
    thread,
};

use embassy_sync::{blocking_mutex::raw::CriticalSectionRawMutex, channel::Channel};
use log::{debug, warn};
use steno_core::input::ControlEvent;
use thiserror::Error;

pub(super) const COMMAND_QUEUE_DEPTH: usize = 8;

pub(super) type CommandChannel =
    Channel<CriticalSectionRawMutex, HostCommand, COMMAND_QUEUE_DEPTH>;

/// One line typed at the prompt.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(super) enum HostCommand {
    Control(ControlEvent),
    Scan(PathBuf),
    ListVoices,
    Help,
    Quit,
}

#[derive(Debug, Error, Eq, PartialEq)]
pub(super) enum CommandError {
    #[error("unknown command {0:?}, type `help`")]
    Unknown(String),
    #[error("`{0}` needs an argument")]
    MissingArgument(&'static str),
    #[error("not a number: {0:?}")]
    NotANumber(String),
    #[error("word numbers start at 1")]
    ZeroWord,
    #[error("cannot read {path}: {reason}")]
    Unreadable { path: String, reason: String },
}

pub(super) const HELP: &str = "\
commands:
  <enter> | p          play / pause / resume
  + | -                speed up / down by one step
  wpm <n>              set words per minute (15-250)
  seek <n>             jump to word n (while paused)
  text <words...>      replace the text
  load <file>          replace the text with a file's contents
  scan <image>         recognize text in an image
  voice <name>         select a voice, `voices` lists them
  theme                toggle light / night
  reset                stop and rewind
  quit";

pub(super) fn parse_line(line: &str) -> Result<HostCommand, CommandError> {
    let line = line.trim();
    let (head, rest) = match line.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (line, ""),
    };

    let command = match head {
        "" | "p" | "play" | "pause" => HostCommand::Control(ControlEvent::TogglePlay),
        "+" | "faster" => HostCommand::Control(ControlEvent::SpeedUp),
        "-" | "slower" => HostCommand::Control(ControlEvent::SpeedDown),
        "wpm" => HostCommand::Control(ControlEvent::SetSpeed(parse_number(rest, "wpm")?)),
        "seek" | "g" => {
            let word: usize = parse_number(rest, "seek")?;
            let index = word.checked_sub(1).ok_or(CommandError::ZeroWord)?;
            HostCommand::Control(ControlEvent::Seek(index))
        }
        "text" => HostCommand::Control(ControlEvent::SetText(rest.to_owned())),
        "load" => {
            let path = required(rest, "load")?;
            let text = std::fs::read_to_string(path).map_err(|err| CommandError::Unreadable {
                path: path.to_owned(),
                reason: err.to_string(),
            })?;
            HostCommand::Control(ControlEvent::SetText(text))
        }
        "scan" => HostCommand::Scan(PathBuf::from(required(rest, "scan")?)),
        "voice" => HostCommand::Control(ControlEvent::SelectVoice(
            required(rest, "voice")?.to_owned(),
        )),
        "voices" => HostCommand::ListVoices,
        "theme" | "t" => HostCommand::Control(ControlEvent::ToggleTheme),
        "reset" | "r" => HostCommand::Control(ControlEvent::Reset),
        "help" | "h" | "?" => HostCommand::Help,
        "quit" | "q" | "exit" => HostCommand::Quit,
        other => return Err(CommandError::Unknown(other.to_owned())),
    };

    Ok(command)
}

fn required<'a>(rest: &'a str, command: &'static str) -> Result<&'a str, CommandError> {
    if rest.is_empty() {
        Err(CommandError::MissingArgument(command))
    } else {
        Ok(rest)
    }
}

fn parse_number<T: core::str::FromStr>(
    rest: &str,
    command: &'static str,
) -> Result<T, CommandError> {
    required(rest, command)?
        .parse()
        .map_err(|_| CommandError::NotANumber(rest.to_owned()))
}

/// Read stdin on a dedicated thread and feed parsed commands into `channel`.
/// End of input becomes [`HostCommand::Quit`].
pub(super) fn spawn_stdin_reader(channel: &'static CommandChannel) -> io::Result<()> {
    thread::Builder::new()
        .name("stdin-commands".into())
        .spawn(move || {
            let stdin = io::stdin();
            for line in stdin.lock().lines() {
                let line = match line {
                    Ok(line) => line,
                    Err(err) => {
                        warn!("input: stdin read failed err={}", err);
                        break;
                    }
                };

                match parse_line(&line) {
                    Ok(command) => {
                        debug!("input: command={:?}", command);
                        let quit = command == HostCommand::Quit;
                        embassy_futures::block_on(channel.send(command));
                        if quit {
                            return;
                        }
                    }
                    Err(err) => eprintln!("{err}"),
                }
            }

            embassy_futures::block_on(channel.send(HostCommand::Quit));
        })?;

    Ok(())
}
