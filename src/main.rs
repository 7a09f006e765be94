//! Ocean Hunter entry point
//!
//! Runs the simulation headless with the autopilot at the wheel. Rendering
//! and real input live outside this crate; this runner exercises the fixed
//! tick loop, the event stream and the audio boundary.

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::path::PathBuf;
    use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

    use clap::Parser;

    use ocean_hunter::Settings;
    use ocean_hunter::audio::{AudioManager, LogBackend};
    use ocean_hunter::autopilot;
    use ocean_hunter::consts::MAX_SUBSTEPS;
    use ocean_hunter::sim::{GameEvent, GamePhase, GameState, TickInput, tick};

    /// Headless Ocean Hunter runner
    #[derive(Parser, Debug)]
    #[command(author, version, about, long_about = None)]
    struct Args {
        /// Ticks to simulate (defaults to one minute at the configured tick rate)
        #[arg(long)]
        ticks: Option<u64>,
        /// RNG seed; overrides the config file
        #[arg(long)]
        seed: Option<u64>,
        /// JSON settings file
        #[arg(long)]
        config: Option<PathBuf>,
        /// Pace ticks against the wall clock
        #[arg(long)]
        realtime: bool,
        /// Print the final render snapshot as JSON
        #[arg(long)]
        snapshot: bool,
    }

    fn seed_from_time() -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0)
    }

    /// Game instance holding all state
    struct Game {
        state: GameState,
        audio: AudioManager,
        ticks_run: u64,
        games_over: u32,
        best_score: u64,
    }

    impl Game {
        /// What the autopilot "presses" this tick
        fn next_input(&self) -> TickInput {
            match self.state.phase {
                GamePhase::Menu => TickInput {
                    start: true,
                    ..Default::default()
                },
                GamePhase::GameOver => TickInput {
                    restart: true,
                    ..Default::default()
                },
                GamePhase::Paused => TickInput {
                    pause: true,
                    ..Default::default()
                },
                GamePhase::Playing => TickInput::moving(autopilot::intent(&self.state)),
            }
        }

        fn step(&mut self) {
            let input = self.next_input();
            tick(&mut self.state, &input);
            self.ticks_run += 1;

            self.audio.dispatch(self.state.events());
            if self.state.events().contains(&GameEvent::Hurt) {
                self.games_over += 1;
            }
            self.best_score = self.best_score.max(self.state.score);
        }
    }

    pub fn run() {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

        let args = Args::parse();

        let settings = args
            .config
            .as_deref()
            .map(Settings::load_or_default)
            .unwrap_or_default();
        let seed = args.seed.or(settings.seed).unwrap_or_else(seed_from_time);
        let total_ticks = args.ticks.unwrap_or(settings.tick_rate as u64 * 60);

        log::info!("Ocean Hunter (headless) starting, seed {seed}, {total_ticks} ticks");

        let mut audio = AudioManager::new(Some(Box::new(LogBackend)));
        audio.apply_settings(&settings);
        let mut game = Game {
            state: GameState::new(settings.sim_config(seed)),
            audio,
            ticks_run: 0,
            games_over: 0,
            best_score: 0,
        };

        if args.realtime {
            let dt = settings.sim_dt();
            let mut accumulator = 0.0f32;
            let mut last = Instant::now();
            while game.ticks_run < total_ticks && !game.state.quit_requested() {
                let now = Instant::now();
                accumulator += now.duration_since(last).as_secs_f32().min(0.1);
                last = now;

                let mut substeps = 0;
                while accumulator >= dt && substeps < MAX_SUBSTEPS && game.ticks_run < total_ticks {
                    game.step();
                    accumulator -= dt;
                    substeps += 1;
                }
                std::thread::sleep(Duration::from_millis(1));
            }
        } else {
            while game.ticks_run < total_ticks && !game.state.quit_requested() {
                game.step();
            }
        }

        log::info!(
            "Ran {} ticks: level {}, score {}, best {}, eaten {} times, {} achievements",
            game.ticks_run,
            game.state.level,
            game.state.score,
            game.best_score,
            game.games_over,
            game.state.achievements.unlocked.len()
        );

        if args.snapshot {
            match serde_json::to_string_pretty(&game.state.snapshot()) {
                Ok(json) => println!("{json}"),
                Err(e) => log::error!("Failed to serialize snapshot: {e}"),
            }
        }
    }

}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    native::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // No web front end; the library is the product on wasm
}
