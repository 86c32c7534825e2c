//! Interactive timer loop.
//!
//! Reads one command per line from stdin and prints every resulting event
//! as a JSON line on stdout. A one-second interval drives the clock while it
//! runs; pausing or resetting drops the interval so no stale tick fires.

use std::io::Write;
use std::time::Duration;

use antidoom_core::{Config, Controller, DailyStore, Database, Event, KvStore, Settings, SystemClock};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time::{interval_at, Instant, Interval, MissedTickBehavior};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Start,
    Pause,
    Toggle,
    Reset,
    Apply { focus: String, brk: String },
    Distract { note: Option<String> },
    Note { text: String },
    Skip,
    Status,
    Sound,
    Quit,
}

impl std::str::FromStr for Command {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        let command = match verb.to_ascii_lowercase().as_str() {
            "start" => Command::Start,
            "pause" => Command::Pause,
            "toggle" | "space" => Command::Toggle,
            "reset" => Command::Reset,
            "apply" => {
                let mut args = rest.split_whitespace();
                Command::Apply {
                    focus: args.next().unwrap_or_default().to_string(),
                    brk: args.next().unwrap_or_default().to_string(),
                }
            }
            "distract" | "d" => Command::Distract {
                note: (!rest.is_empty()).then(|| rest.to_string()),
            },
            "note" => Command::Note {
                text: rest.to_string(),
            },
            "skip" => Command::Skip,
            "status" => Command::Status,
            "sound" => Command::Sound,
            "quit" | "exit" => Command::Quit,
            other => return Err(format!("unknown command: {other}")),
        };
        Ok(command)
    }
}

/// Mutable bits of the session that live outside the core.
struct Session<S: KvStore> {
    controller: Controller<S, SystemClock>,
    config: Config,
    sound_on: bool,
}

impl<S: KvStore> Session<S> {
    /// Apply one command. Returns `Ok(false)` on quit.
    fn handle(&mut self, command: Command) -> std::io::Result<bool> {
        let events: Vec<Event> = match command {
            Command::Start => self.controller.start().into_iter().collect(),
            Command::Pause => self.controller.pause().into_iter().collect(),
            Command::Toggle => self.controller.toggle().into_iter().collect(),
            Command::Reset => vec![self.controller.reset()],
            Command::Apply { focus, brk } => {
                let settings = Settings::from_input(&focus, &brk);
                self.remember(settings);
                vec![self.controller.apply_settings(settings)]
            }
            Command::Distract { note } => self.controller.log_distraction(note.as_deref()),
            Command::Note { text } => self.controller.attach_note(&text).into_iter().collect(),
            Command::Skip => self.controller.skip_note().into_iter().collect(),
            Command::Status => vec![self.controller.snapshot()],
            Command::Sound => {
                self.sound_on = !self.sound_on;
                tracing::info!(sound_on = self.sound_on, "sound toggled");
                vec![Event::SoundToggled {
                    enabled: self.sound_on,
                }]
            }
            Command::Quit => return Ok(false),
        };
        self.emit(&events)?;
        Ok(true)
    }

    fn tick(&mut self) -> std::io::Result<()> {
        let events = self.controller.tick();
        self.emit(&events)
    }

    /// Keep applied durations for the next run.
    fn remember(&mut self, settings: Settings) {
        self.config.set_settings(settings);
        if let Err(e) = self.config.save() {
            tracing::warn!(error = %e, "could not save settings");
        }
    }

    fn emit(&self, events: &[Event]) -> std::io::Result<()> {
        write_events(&mut std::io::stdout().lock(), events, self.sound_on)
    }
}

/// One JSON line per event. A failed write ends the session.
fn write_events<W: Write>(out: &mut W, events: &[Event], sound_on: bool) -> std::io::Result<()> {
    for event in events {
        match serde_json::to_string(event) {
            Ok(line) => writeln!(out, "{line}")?,
            Err(e) => tracing::warn!(error = %e, "failed to serialize event"),
        }
        if sound_on && event.cue().is_some() {
            // Terminal bell on stderr so stdout stays parseable.
            eprint!("\x07");
        }
    }
    out.flush()
}

async fn next_tick(ticker: &mut Option<Interval>) {
    match ticker {
        Some(interval) => {
            interval.tick().await;
        }
        None => std::future::pending().await,
    }
}

/// First tick one second from now, like a freshly armed interval timer.
fn arm() -> Interval {
    let period = Duration::from_secs(1);
    let mut interval = interval_at(Instant::now() + period, period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    interval
}

async fn event_loop<S: KvStore>(mut session: Session<S>) -> std::io::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut ticker: Option<Interval> = None;

    session.emit(&[session.controller.snapshot()])?;

    loop {
        match (session.controller.session().is_running(), ticker.is_some()) {
            (true, false) => ticker = Some(arm()),
            (false, true) => ticker = None,
            _ => {}
        }

        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                if line.trim().is_empty() {
                    continue;
                }
                match line.parse::<Command>() {
                    Ok(command) => {
                        if !session.handle(command)? {
                            break;
                        }
                    }
                    Err(e) => eprintln!("{e}"),
                }
            }
            _ = next_tick(&mut ticker) => session.tick()?,
        }
    }
    Ok(())
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let db = Database::open()?;
    let store = DailyStore::with_namespace(db, SystemClock, config.storage.namespace.clone());
    let session = Session {
        controller: Controller::new(config.settings(), store),
        sound_on: config.sound.enabled,
        config,
    };

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;
    runtime.block_on(event_loop(session))?;
    Ok(())
}
