//! Simulation configuration with documented constants
//!
//! All tuning values are collected here with explanations of their purpose
//! and how they interact with each other.

/// Configuration for the park simulation systems
///
/// These values have been tuned to produce believable park pacing.
/// Changing them will affect gameplay feel more than correctness.
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    // === TIME ===
    /// Minimum allowed game-speed multiplier
    pub min_game_speed: f32,

    /// Maximum allowed game-speed multiplier
    ///
    /// Speed is a single multiplier applied to elapsed time before any
    /// subsystem runs, so every system observes the same accelerated clock.
    pub max_game_speed: f32,

    // === VISITORS ===
    /// Base decay per game-second for the hunger need (0-100 scale)
    ///
    /// At 0.02/s an un-fed visitor goes from full to empty in about
    /// 83 game-minutes, which forces roughly one meal per park visit.
    pub hunger_decay_rate: f32,

    /// Base decay per game-second for the thirst need
    ///
    /// Slightly faster than hunger so drink stalls see more traffic.
    pub thirst_decay_rate: f32,

    /// Base decay per game-second for the toilet need
    pub toilet_decay_rate: f32,

    /// Base decay per game-second for the energy need
    pub energy_decay_rate: f32,

    /// Base decay per game-second for the fun need while idle
    pub fun_decay_rate: f32,

    /// Extra fun decay per game-second while standing in a queue (boredom)
    pub queue_boredom_rate: f32,

    /// Need level below which a need is considered urgent
    ///
    /// Urgent needs preempt personality-driven goal selection.
    pub urgent_need_threshold: f32,

    /// Happiness below which a visitor may start complaining
    pub complaint_threshold: f32,

    /// Happiness below which a visitor gives up and leaves the park
    pub leave_happiness_threshold: f32,

    /// Money balance below which a visitor heads for the exit
    pub leave_money_threshold: f64,

    /// Seconds between goal re-evaluations for one visitor
    ///
    /// Keeps visitors committed to a chosen goal long enough to reach it
    /// instead of re-rolling every tick.
    pub decision_cooldown: f32,

    /// Walking speed in meters per game-second
    pub walk_speed: f32,

    /// Distance below which a movement target counts as reached
    pub arrival_epsilon: f32,

    /// Consecutive near-stationary ticks before the anti-stuck kick fires
    pub stuck_tick_limit: u32,

    // === SPAWNING ===
    /// Baseline visitor arrivals per game-second at neutral reputation
    ///
    /// The effective rate scales with reputation, happiness, weather and
    /// remaining capacity; one visitor spawns per whole unit accumulated.
    pub base_spawn_rate: f32,

    /// Park capacity contributed by each built ride
    pub capacity_per_ride: u32,

    /// Park capacity contributed by each facility
    pub capacity_per_facility: u32,

    /// Hard ceiling on simultaneous visitors regardless of construction
    pub max_visitors: u32,

    // === RIDES ===
    /// Base probability per game-second that an operating ride breaks down
    ///
    /// At 0.0002/s a ride averages one breakdown per ~80 game-minutes of
    /// continuous operation.
    pub breakdown_rate: f32,

    // === ECONOMY ===
    /// Whether the park balance may go negative from operating expenses
    ///
    /// Discrete purchases are always all-or-nothing regardless of this
    /// flag; it only controls whether the recurring economic step clamps
    /// the balance at zero.
    pub allow_debt: bool,

    /// Fraction of a ride's purchase cost refunded on demolition
    pub demolition_refund_fraction: f64,

    // === REPUTATION / STATS ===
    /// Upper bound of the reputation scale
    pub reputation_max: f32,

    /// Aggregate happiness reported while the park is empty
    ///
    /// Avoids a divide-by-zero and gives new parks a neutral baseline.
    pub empty_park_happiness: f32,

    // === WEATHER ===
    /// Game-seconds between forced weather rotations
    pub weather_rotation_interval: f32,

    // === EVENTS ===
    /// Probability per game-second of a rare random park event
    pub random_event_rate: f32,

    // === ACHIEVEMENTS ===
    /// Wall-clock seconds between achievement predicate sweeps
    pub achievement_check_interval: f32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            min_game_speed: 1.0,
            max_game_speed: 4.0,

            hunger_decay_rate: 0.020,
            thirst_decay_rate: 0.025,
            toilet_decay_rate: 0.015,
            energy_decay_rate: 0.012,
            fun_decay_rate: 0.018,
            queue_boredom_rate: 0.010,
            urgent_need_threshold: 25.0,
            complaint_threshold: 40.0,
            leave_happiness_threshold: 15.0,
            leave_money_threshold: 5.0,
            decision_cooldown: 3.0,
            walk_speed: 2.0,
            arrival_epsilon: 0.5,
            stuck_tick_limit: 5,

            base_spawn_rate: 0.05,
            capacity_per_ride: 15,
            capacity_per_facility: 5,
            max_visitors: 200,

            breakdown_rate: 0.0002,

            allow_debt: true,
            demolition_refund_fraction: 0.3,

            reputation_max: 1000.0,
            empty_park_happiness: 75.0,

            weather_rotation_interval: 2400.0,

            random_event_rate: 0.00005,

            achievement_check_interval: 5.0,
        }
    }
}

impl SimulationConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<(), String> {
        if self.min_game_speed <= 0.0 || self.max_game_speed < self.min_game_speed {
            return Err(format!(
                "game speed range [{}, {}] is invalid",
                self.min_game_speed, self.max_game_speed
            ));
        }

        if self.urgent_need_threshold <= 0.0 || self.urgent_need_threshold >= 100.0 {
            return Err(format!(
                "urgent_need_threshold ({}) must be inside (0, 100)",
                self.urgent_need_threshold
            ));
        }

        if self.leave_happiness_threshold >= self.complaint_threshold {
            return Err(format!(
                "leave_happiness_threshold ({}) should be < complaint_threshold ({})",
                self.leave_happiness_threshold, self.complaint_threshold
            ));
        }

        if !(0.0..=1.0).contains(&self.demolition_refund_fraction) {
            return Err("demolition_refund_fraction must be within [0, 1]".into());
        }

        if self.hunger_decay_rate <= 0.0 || self.thirst_decay_rate <= 0.0 {
            return Err("Need decay rates must be positive".into());
        }

        Ok(())
    }

    /// Apply overrides from a TOML `[tuning]` table
    ///
    /// Only recognized keys are applied; unknown keys are ignored so tuning
    /// files can carry comments and experimental values.
    pub fn apply_overrides(&mut self, content: &str) -> Result<(), String> {
        let value: toml::Value = content
            .parse()
            .map_err(|e| format!("Invalid TOML: {}", e))?;

        let Some(table) = value.get("tuning").and_then(|v| v.as_table()) else {
            return Ok(());
        };

        let mut float = |key: &str, slot: &mut f32| {
            if let Some(v) = table.get(key).and_then(|v| v.as_float()) {
                *slot = v as f32;
            }
        };

        float("base_spawn_rate", &mut self.base_spawn_rate);
        float("breakdown_rate", &mut self.breakdown_rate);
        float("hunger_decay_rate", &mut self.hunger_decay_rate);
        float("thirst_decay_rate", &mut self.thirst_decay_rate);
        float("toilet_decay_rate", &mut self.toilet_decay_rate);
        float("energy_decay_rate", &mut self.energy_decay_rate);
        float("fun_decay_rate", &mut self.fun_decay_rate);
        float("random_event_rate", &mut self.random_event_rate);
        float("weather_rotation_interval", &mut self.weather_rotation_interval);

        if let Some(v) = table.get("allow_debt").and_then(|v| v.as_bool()) {
            self.allow_debt = v;
        }
        if let Some(v) = table.get("max_visitors").and_then(|v| v.as_integer()) {
            self.max_visitors = v.max(0) as u32;
        }

        self.validate()
    }
}

// === GLOBAL CONFIG ACCESS ===

use std::sync::OnceLock;

static CONFIG: OnceLock<SimulationConfig> = OnceLock::new();

/// Get the global simulation config (initializes with defaults if not set)
pub fn config() -> &'static SimulationConfig {
    CONFIG.get_or_init(SimulationConfig::default)
}

/// Set the global simulation config (can only be called once)
///
/// Returns Err if config was already set.
pub fn set_config(config: SimulationConfig) -> Result<(), SimulationConfig> {
    CONFIG.set(config)
}
