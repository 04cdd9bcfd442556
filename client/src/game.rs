//! The game loop

use anyhow::Result;
use pokeclash_battle::{BattleEvent, BattleSession, Intent, Roster, Rules};
use tokio::sync::mpsc;

use crate::config::ClientConfig;
use crate::handle::GameHandle;
use crate::presenter::Presenter;
use crate::roster::fetch_roster;
use crate::sounds::SoundBank;
use crate::source::CreatureSource;
use crate::stage::{Cue, LOAD_FAILED, Stage};
use crate::timers::{TimerKind, Timers};

/// How a finished session hands control back to [`Game::run`]
enum Flow {
    Restart,
    Quit,
}

/// Runs games: loads the roster, feeds intents to the session and shows the
/// resulting events on the presenter.
pub struct Game<S, P> {
    source: S,
    stage: Stage<P>,
    config: ClientConfig,
    rules: Rules,
    seed: Option<u64>,
    intents: mpsc::UnboundedReceiver<Intent>,
    timers: Timers,
}

impl<S, P> Game<S, P>
where
    S: CreatureSource,
    P: Presenter,
{
    /// Create a game and the handle used to send it intents
    pub fn new(source: S, presenter: P, config: ClientConfig) -> (Self, GameHandle) {
        let (tx, rx) = mpsc::unbounded_channel();
        let stage = Stage::new(presenter, SoundBank::new(config.sounds.dir.clone()));

        let game = Self {
            source,
            stage,
            config,
            rules: Rules::default(),
            seed: None,
            intents: rx,
            timers: Timers::new(),
        };

        (game, GameHandle::new(tx))
    }

    pub fn with_rules(mut self, rules: Rules) -> Self {
        self.rules = rules;
        self
    }

    /// Seed every session's random source
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn presenter(&self) -> &P {
        self.stage.presenter()
    }

    /// Play until every handle is dropped, or until the first game ends when
    /// auto restart is off.
    ///
    /// A roster that fails to load is reported on the presenter and returned
    /// as an error; there is no retry.
    pub async fn run(&mut self) -> Result<()> {
        loop {
            let mut session = match self.start_session().await {
                Ok(session) => session,
                Err(e) => {
                    tracing::error!(error = %e, "Failed to start game");
                    self.stage.alert(LOAD_FAILED);
                    return Err(e);
                }
            };

            let flow = self.play(&mut session).await;
            self.timers.cancel_all();

            match flow {
                Flow::Restart => tracing::info!("Starting a new game"),
                Flow::Quit => return Ok(()),
            }
        }
    }

    async fn start_session(&mut self) -> Result<BattleSession> {
        let creatures = fetch_roster(&self.source, self.config.roster_limit).await?;
        let roster = Roster::new(creatures);

        let session = match self.seed {
            Some(seed) => BattleSession::with_seed(roster, self.rules, seed)?,
            None => BattleSession::new(roster, self.rules)?,
        };
        Ok(session)
    }

    async fn play(&mut self, session: &mut BattleSession) -> Flow {
        tracing::info!(roster = session.roster().len(), "Game started");

        let opening = session.drain_events();
        self.show_all(&opening);

        loop {
            tokio::select! {
                intent = self.intents.recv() => {
                    let Some(intent) = intent else {
                        tracing::info!("All handles dropped, stopping");
                        return Flow::Quit;
                    };

                    tracing::debug!(?intent, round = session.round(), "Dispatching intent");
                    match session.dispatch(intent) {
                        Ok(events) => self.show_all(&events),
                        Err(e) => tracing::warn!(error = %e, "Intent rejected"),
                    }
                }
                kind = self.timers.next() => match kind {
                    TimerKind::HideFlash => self.stage.hide_flash(),
                    TimerKind::Restart => {
                        return if self.config.timing.auto_restart {
                            Flow::Restart
                        } else {
                            Flow::Quit
                        };
                    }
                },
            }
        }
    }

    fn show_all(&mut self, events: &[BattleEvent]) {
        for event in events {
            for cue in self.stage.show(event) {
                match cue {
                    Cue::Flash => self
                        .timers
                        .schedule(TimerKind::HideFlash, self.config.timing.flash_duration),
                    Cue::GameOver => self
                        .timers
                        .schedule(TimerKind::Restart, self.config.timing.restart_delay),
                }
            }
        }
    }
}
