//! Quiz flow: the state machine driving Title and Question views.
//!
//! Input arrives as `QuizEvent`s (pointer taps in logical canvas pixels and
//! elapsed timers). `dispatch` updates the active screen and returns the timer
//! `Effect`s the host must carry out. The correct-answer delay is a token-keyed
//! deferred action: leaving the question view cancels it, and a token that no
//! longer matches the live view is dropped when it fires.

use log::{debug, info};
use rand::Rng;

use crate::bank::{QuestionBank, QuestionRecord};
use crate::config::QuizConfig;
use crate::error::QuizError;
use crate::session::QuestionSession;
use crate::view::{Bounds, Notice, QuestionHit, QuestionView, Screen, TitleView};

/// Identifies one scheduled feedback delay.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimerToken(pub u64);

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum QuizEvent {
    Pointer { x: f64, y: f64 },
    TimerElapsed(TimerToken),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effect {
    Schedule { token: TimerToken, delay_ms: u32 },
    Cancel(TimerToken),
}

pub struct Quiz<R: Rng> {
    config: QuizConfig,
    bank: QuestionBank,
    rng: R,
    screen: Screen,
    next_token: u64,
}

impl<R: Rng> Quiz<R> {
    pub fn new(config: QuizConfig, rng: R) -> Result<Self, QuizError> {
        config.validate()?;
        let bank = config.bank()?;
        let screen = Screen::Title(TitleView::new(&config));
        Ok(Self {
            config,
            bank,
            rng,
            screen,
            next_token: 0,
        })
    }

    pub fn config(&self) -> &QuizConfig {
        &self.config
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn question_view(&self) -> Option<&QuestionView> {
        match &self.screen {
            Screen::Question(view) => Some(view),
            Screen::Title(_) => None,
        }
    }

    pub fn current_question(&self) -> Option<&QuestionRecord> {
        self.question_view().and_then(|v| v.session.current().ok())
    }

    pub fn current_index(&self) -> Option<usize> {
        self.question_view().map(|v| v.session.current_index())
    }

    /// Hit box of the start control while the title screen is up.
    pub fn start_bounds(&self) -> Option<Bounds> {
        match &self.screen {
            Screen::Title(view) => Some(view.start_bounds()),
            Screen::Question(_) => None,
        }
    }

    pub fn dispatch(&mut self, event: QuizEvent) -> Result<Vec<Effect>, QuizError> {
        match event {
            QuizEvent::Pointer { x, y } => self.on_pointer(x, y),
            QuizEvent::TimerElapsed(token) => self.on_timer(token),
        }
    }

    fn on_pointer(&mut self, x: f64, y: f64) -> Result<Vec<Effect>, QuizError> {
        let hit = match &self.screen {
            Screen::Title(view) => {
                if view.hits_start(x, y) {
                    self.enter_question(None)?;
                }
                return Ok(Vec::new());
            }
            Screen::Question(view) => view.hit(x, y),
        };
        match hit {
            Some(QuestionHit::Exit) => Ok(self.exit_to_title()),
            Some(QuestionHit::Notice) => {
                if let Screen::Question(view) = &mut self.screen {
                    view.notice = None;
                }
                Ok(Vec::new())
            }
            Some(QuestionHit::Option(index)) => Ok(self.choose(index)),
            None => Ok(Vec::new()),
        }
    }

    fn choose(&mut self, index: usize) -> Vec<Effect> {
        let correct = match &mut self.screen {
            Screen::Question(view) => {
                let picked = view.options.select(index).map(str::to_string);
                view.notice = None;
                debug!(
                    "question {} picked {:?}",
                    view.session.current_index() + 1,
                    picked
                );
                view.options.is_correct()
            }
            Screen::Title(_) => return Vec::new(),
        };

        if !correct {
            let notice = Notice::incorrect(&self.config);
            if let Screen::Question(view) = &mut self.screen {
                view.notice = Some(notice);
            }
            return Vec::new();
        }

        let token = TimerToken(self.next_token);
        self.next_token += 1;
        if let Screen::Question(view) = &mut self.screen {
            view.pending = Some(token);
        }
        vec![Effect::Schedule {
            token,
            delay_ms: self.config.feedback_delay_ms,
        }]
    }

    fn on_timer(&mut self, token: TimerToken) -> Result<Vec<Effect>, QuizError> {
        let live = matches!(&self.screen, Screen::Question(v) if v.pending == Some(token));
        if !live {
            debug!("dropping stale timer {:?}", token);
            return Ok(Vec::new());
        }
        let title = Screen::Title(TitleView::new(&self.config));
        if let Screen::Question(view) = std::mem::replace(&mut self.screen, title) {
            let mut session = view.session;
            if session.is_finished() {
                session.reset();
                info!("all {} questions answered, back to title", session.len());
            } else {
                session.advance();
                self.enter_question(Some(session))?;
            }
        }
        Ok(Vec::new())
    }

    /// Leaves the question view, discarding its session and cancelling any
    /// scheduled advance.
    fn exit_to_title(&mut self) -> Vec<Effect> {
        let title = Screen::Title(TitleView::new(&self.config));
        let mut effects = Vec::new();
        if let Screen::Question(mut view) = std::mem::replace(&mut self.screen, title) {
            view.session.reset();
            if let Some(token) = view.pending.take() {
                effects.push(Effect::Cancel(token));
            }
            info!("exit to title");
        }
        effects
    }

    /// Builds a question view. A carried-over session is kept only if it is
    /// mid-game; otherwise a fresh shuffle is drawn from the bank.
    fn enter_question(&mut self, previous: Option<QuestionSession>) -> Result<(), QuizError> {
        let session = match previous {
            Some(session) if session.current_index() != 0 => session,
            _ => QuestionSession::new(&self.bank, &mut self.rng),
        };
        let view = QuestionView::new(session, &self.config, &mut self.rng)?;
        info!(
            "question {} of {}",
            view.session.current_index() + 1,
            view.session.len()
        );
        self.screen = Screen::Question(view);
        Ok(())
    }
}
