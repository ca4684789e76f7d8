use std::io::{self, BufRead, Write};
use std::ops::ControlFlow;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use jobsearch_core::{update, AppState, Msg, Route, Session};
use jobsearch_engine::{EngineCommand, EngineHandle, SessionStore};
use search_logging::{search_debug, search_error, search_info, search_warn};

use super::commands::{parse_command, Command, HELP};
use super::config::AppConfig;
use super::effects::{translate_event, EffectRunner, Incoming};
use super::render::render;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

pub fn run_app() -> Result<()> {
    let config = AppConfig::load().context("loading configuration")?;
    search_logging::initialize(
        config.log_destination()?,
        config.log_level()?,
        &config.log_file,
    );
    search_info!("Starting against {}", config.api_origin);

    let sessions = SessionStore::new(config.session_file.clone());
    let session = sessions.load().unwrap_or_else(|err| {
        search_warn!("Ignoring unreadable session file {:?}: {}", sessions.path(), err);
        None
    });

    let engine = EngineHandle::new(config.engine_settings()).context("starting engine")?;
    engine.submit(EngineCommand::SessionChanged(session.clone()));

    let (line_tx, line_rx) = mpsc::channel::<String>();
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            match line {
                Ok(line) => {
                    if line_tx.send(line).is_err() {
                        break;
                    }
                }
                Err(err) => {
                    search_error!("Failed to read input: {}", err);
                    break;
                }
            }
        }
    });

    let mut shell = Shell {
        state: AppState::with_session(session),
        runner: EffectRunner::new(engine),
        sessions,
    };
    println!("Type `help` for commands.");
    shell.dispatch(Msg::HomeOpened);

    loop {
        match line_rx.recv_timeout(POLL_INTERVAL) {
            Ok(line) => {
                if shell.handle_line(&line).is_break() {
                    break;
                }
            }
            Err(mpsc::RecvTimeoutError::Timeout) => {}
            Err(mpsc::RecvTimeoutError::Disconnected) => break,
        }
        shell.drain_engine();
    }

    search_info!("Shutting down");
    Ok(())
}

struct Shell {
    state: AppState,
    runner: EffectRunner,
    sessions: SessionStore,
}

impl Shell {
    fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        self.runner.run(effects);
        if state.consume_dirty() {
            print_lines(&render(&state.view()));
        }
        self.state = state;
    }

    fn handle_line(&mut self, line: &str) -> ControlFlow<()> {
        let command = match parse_command(line) {
            Ok(Some(command)) => command,
            Ok(None) => return ControlFlow::Continue(()),
            Err(err) => {
                println!("{err}");
                return ControlFlow::Continue(());
            }
        };

        match command {
            Command::Dispatch(msgs) => {
                for msg in msgs {
                    self.dispatch(msg);
                }
            }
            Command::Login { email, password } => {
                self.runner
                    .engine()
                    .submit(EngineCommand::Login { email, password });
            }
            Command::Register(registration) => {
                self.runner
                    .engine()
                    .submit(EngineCommand::Register(registration));
            }
            Command::Publish { job_id, posting } => match self.state.session() {
                Some(session) if session.user.can_manage_postings() => {
                    self.runner
                        .engine()
                        .submit(EngineCommand::PublishJob { job_id, posting });
                }
                Some(_) => println!("Only company or admin accounts can post jobs."),
                None => println!("Sign in to post jobs."),
            },
            Command::Logout => self.replace_session(None),
            Command::Help => println!("{HELP}"),
            Command::Quit => return ControlFlow::Break(()),
        }
        ControlFlow::Continue(())
    }

    fn drain_engine(&mut self) {
        while let Some(event) = self.runner.engine().try_recv() {
            search_debug!("Engine event {:?}", event);
            match translate_event(event) {
                Incoming::Core(msg) => self.dispatch(msg),
                Incoming::LoggedIn(Ok(session)) => {
                    println!("Signed in as {}.", session.user.display_name());
                    self.replace_session(Some(session));
                }
                Incoming::LoggedIn(Err(err)) => println!("Sign-in failed: {err}"),
                Incoming::Registered(Ok(())) => println!("Account created, you can sign in now."),
                Incoming::Registered(Err(err)) => println!("Registration failed: {err}"),
                Incoming::Published(Ok(())) => println!("Job saved."),
                Incoming::Published(Err(err)) => println!("Posting failed: {err}"),
            }
        }
    }

    /// Persists the identity and hands it to both pipelines.
    fn replace_session(&mut self, session: Option<Session>) {
        let stored = match &session {
            Some(session) => self.sessions.save(session),
            None => self.sessions.clear(),
        };
        if let Err(err) = stored {
            search_warn!("Session file {:?} not updated: {}", self.sessions.path(), err);
        }

        let return_home = session.is_some() && self.state.route() == Route::Auth;
        self.runner
            .engine()
            .submit(EngineCommand::SessionChanged(session.clone()));
        self.dispatch(Msg::SessionChanged(session));
        if return_home {
            self.dispatch(Msg::HomeOpened);
        }
    }
}

fn print_lines(lines: &[String]) {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for line in lines {
        let _ = writeln!(out, "{line}");
    }
    let _ = out.flush();
}
