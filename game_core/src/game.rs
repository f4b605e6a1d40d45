use glam::Vec2;
use hecs::World;

use crate::{
    create_ball, create_paddle, step, Action, Ball, Command, Config, Court, Events, GameRng,
    InputState, MatchFsm, Paddle, Phase, Score, Side, Time, TransitionResult,
};

/// One two-player match: entities, resources and lifecycle
pub struct Match {
    pub world: World,
    pub time: Time,
    pub court: Court,
    pub config: Config,
    pub score: Score,
    pub events: Events,
    pub rng: GameRng,
    fsm: MatchFsm,
}

impl Match {
    pub fn new(config: Config, seed: u64) -> Self {
        let mut game = Self {
            world: World::new(),
            time: Time::default(),
            court: Court::from_config(&config),
            config,
            score: Score::new(),
            events: Events::new(),
            rng: GameRng::new(seed),
            fsm: MatchFsm::new(),
        };
        game.setup_objects();
        game
    }

    /// Place paddles and ball for a fresh match and clear the score
    fn setup_objects(&mut self) {
        self.world.clear();
        create_paddle(&mut self.world, Side::Left, &self.court, &self.config);
        create_paddle(&mut self.world, Side::Right, &self.court, &self.config);
        create_ball(
            &mut self.world,
            self.court.ball_spawn(),
            Vec2::new(self.config.serve_speed, self.config.opening_spin),
            self.config.ball_radius,
        );

        self.score = Score::new();
        self.events.clear();
        self.time = Time::new(self.time.dt);
    }

    pub fn phase(&self) -> Phase {
        self.fsm.phase()
    }

    /// A match is in progress, paused or not
    pub fn is_running(&self) -> bool {
        self.fsm.is_running()
    }

    pub fn is_paused(&self) -> bool {
        self.fsm.is_paused()
    }

    /// Apply a lifecycle action; starting a match rebuilds it
    pub fn apply(&mut self, action: Action) -> TransitionResult {
        let result = self.fsm.transition(action);
        if result.starts_match() {
            self.setup_objects();
        }
        if result.success() {
            self.time.discard_pending();
        }
        result
    }

    /// Map a key command onto the action it means in the current phase
    pub fn handle_command(&mut self, command: Command) -> Option<TransitionResult> {
        let action = match (self.phase(), command) {
            (Phase::Running | Phase::Paused, Command::TogglePause) => Action::TogglePause,
            (Phase::Menu, Command::Confirm) => Action::Start,
            (Phase::Ended, Command::Confirm) => Action::PlayAgain,
            (Phase::Running | Phase::Paused | Phase::Ended, Command::Back) => Action::Quit,
            _ => return None,
        };
        Some(self.apply(action))
    }

    /// Click or tap on the surface outside of paddle control
    pub fn click(&mut self, point: Vec2) -> Option<TransitionResult> {
        match self.phase() {
            Phase::Menu if self.court.start_button().contains(point) => {
                Some(self.apply(Action::Start))
            }
            Phase::Ended => Some(self.apply(Action::PlayAgain)),
            _ => None,
        }
    }

    /// Run exactly one tick; a no-op unless the match is running and unpaused
    pub fn update(&mut self, input: &InputState) -> bool {
        self.events.clear();
        self.tick(input)
    }

    /// Feed measured frame time and run the ticks that are due
    ///
    /// Events from every tick run are merged; returns the tick count.
    pub fn advance(&mut self, elapsed: f32, input: &InputState) -> u32 {
        self.events.clear();
        if !self.is_running() || self.is_paused() {
            self.time.discard_pending();
            return 0;
        }

        let due = self.time.accumulate(elapsed);
        let mut ran = 0;
        for _ in 0..due {
            if !self.tick(input) {
                // Match ended mid-frame
                self.time.discard_pending();
                break;
            }
            ran += 1;
        }
        ran
    }

    fn tick(&mut self, input: &InputState) -> bool {
        if !self.is_running() || self.is_paused() {
            return false;
        }

        step(
            &mut self.world,
            &self.court,
            &self.config,
            input,
            &mut self.score,
            &mut self.events,
            &mut self.rng,
        );
        self.time.tick();

        if let Some(win_score) = self.config.win_score {
            if self.score.has_winner(win_score).is_some() {
                self.fsm.transition(Action::GameOver);
            }
        }
        true
    }

    pub fn ball(&self) -> Option<Ball> {
        self.world.query::<&Ball>().iter().next().map(|(_e, ball)| *ball)
    }

    pub fn paddle(&self, side: Side) -> Option<Paddle> {
        self.world
            .query::<&Paddle>()
            .iter()
            .find(|(_e, paddle)| paddle.side == side)
            .map(|(_e, paddle)| *paddle)
    }

    /// Side that took the match, once it has ended
    pub fn winner(&self) -> Option<Side> {
        if !self.fsm.is_game_over() {
            return None;
        }
        self.config
            .win_score
            .and_then(|win_score| self.score.has_winner(win_score))
    }
}

impl Default for Match {
    fn default() -> Self {
        Self::new(Config::default(), 12345)
    }
}
