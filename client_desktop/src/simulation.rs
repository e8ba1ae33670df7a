use game_core::{
    setup_world, snapshot, step, Config, Events, GameMap, Input, Score, Snapshot, Time,
};
use hecs::World;
use tracing::{debug, trace};

/// The single-player game running inside the desktop client
pub struct LocalGame {
    pub world: World,
    pub time: Time,
    pub map: GameMap,
    pub config: Config,
    pub score: Score,
    pub events: Events,
}

impl LocalGame {
    pub fn new(config: Config) -> Self {
        Self {
            world: setup_world(&config),
            time: Time::new(),
            map: config.map(),
            config,
            score: Score::new(),
            events: Events::new(),
        }
    }

    /// Run one fixed tick with this tick's keyboard state
    pub fn tick(&mut self, input: Input) -> &Events {
        step(
            &mut self.world,
            &mut self.time,
            &self.map,
            &self.config,
            &input,
            &mut self.score,
            &mut self.events,
        );

        let tick = self.time.tick;
        if self.events.ball_hit_paddle {
            debug!(
                tick,
                score = self.score.current,
                high = self.score.high,
                "ball returned"
            );
        }
        if self.events.ball_missed {
            debug!(tick, high = self.score.high, "ball missed, rally reset");
        }
        if self.events.ball_hit_wall {
            trace!(tick, "wall bounce");
        }

        &self.events
    }

    pub fn snapshot(&self) -> Option<Snapshot> {
        snapshot(&self.world, &self.score)
    }
}
