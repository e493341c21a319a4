//! The `World` struct and its tick loop.

use sn_behavior::{
    Agent, AgentKind, WorldContext, compute_steering, create_agent_with, formation_step,
    word_points,
};
use sn_chain::SegmentedBody;
use sn_core::{
    AgentId, AgentRng, Arena, EdgeMode, Food, FoodId, IdAlloc, Obstacle, ObstacleId, SimRng,
    Tick, Vec2,
};
use sn_steer::{clamp_to_arena, wrap_around};
use tracing::{debug, info};

use crate::collision::{Contact, chain_touches, collides, head_touches_chain};
use crate::spawn::{agent_position, food_position, obstacle_placement};
use crate::{
    CursorSource, LevelConfig, LossCause, TickSummary, WorldConfig, WorldEvent, WorldObserver,
};

// ── Mode / Status ─────────────────────────────────────────────────────────────

/// How the player snake is driven.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Mode {
    /// The head chases the cursor and the chain follows it.
    Chase,
    /// Every body arrives at its own point; the rest of the world is frozen.
    Formation(Vec<Vec2>),
}

/// Whether the game is still being played.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    Running,
    Lost,
    Won,
}

// ── Actor ─────────────────────────────────────────────────────────────────────

/// An agent together with the RNG stream its policy draws from.
#[derive(Clone, Debug)]
pub struct Actor {
    pub agent: Agent,
    pub rng:   AgentRng,
}

// ── World ─────────────────────────────────────────────────────────────────────

/// The headless game.
///
/// `World` owns every entity and drives the per-tick loop:
///
/// 1. **AI agents**, in spawn order: build a [`WorldContext`] from the
///    current state, compute the steering force, apply it, step the chain,
///    apply the edge mode.  Later agents see earlier agents' new positions.
/// 2. **Player**: the same in chase mode, or a formation step.
/// 3. **Collisions**: food, food top-up, lethal and solid obstacles, prey,
///    predators, enemies eating food.
/// 4. **Level progress**: level complete, game won.
///
/// Create via [`WorldBuilder`][crate::WorldBuilder].
pub struct World {
    config:       WorldConfig,
    tick:         Tick,
    rng:          SimRng,
    ids:          IdAlloc,
    player:       Actor,
    npcs:         Vec<Actor>,
    obstacles:    Vec<Obstacle>,
    food:         Vec<Food>,
    score:        u32,
    level:        u32,
    mode:         Mode,
    status:       Status,
    /// Frozen ticks left before the next level starts.
    transition:   Option<u32>,
    cursor:       Vec2,
    player_start: Vec2,
    populate:     bool,
    events:       Vec<WorldEvent>,
}

impl World {
    /// Assemble a world and start `level`.  The caller has validated
    /// `config` and checked that `level` is in the table.
    pub(crate) fn start(
        config:       WorldConfig,
        level:        u32,
        populate:     bool,
        player_start: Option<Vec2>,
    ) -> World {
        let mut ids = IdAlloc::new();
        let start = player_start.unwrap_or_else(|| config.spawn.player_start(&config.sim.arena));
        let player = new_player(&mut ids, &config, start);

        let mut world = World {
            rng: SimRng::new(config.sim.seed),
            ids,
            player,
            npcs: Vec::new(),
            obstacles: Vec::new(),
            food: Vec::new(),
            score: 0,
            level,
            mode: Mode::Chase,
            status: Status::Running,
            transition: None,
            cursor: start,
            player_start: start,
            populate,
            events: Vec::new(),
            tick: Tick::ZERO,
            config,
        };
        world.start_level(level);
        world
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Advance one tick with the cursor at `cursor`.  Returns the events of
    /// the tick.
    ///
    /// A cursor outside the arena leaves the player's target where it was,
    /// pulled `rules.cursor_inset` inside the edges.  Once the game is lost
    /// or won, ticks only advance the clock.
    pub fn tick(&mut self, cursor: Vec2) -> Vec<WorldEvent> {
        if self.status == Status::Running {
            if let Some(left) = self.transition {
                self.advance_transition(left);
            } else if matches!(self.mode, Mode::Formation(_)) {
                self.update_formation();
                self.check_lethal();
            } else {
                self.cursor = self.eye(cursor);
                self.update_npcs();
                self.update_player();
                self.resolve_collisions();
                self.check_progress();
            }
        }
        self.tick = self.tick.next();
        std::mem::take(&mut self.events)
    }

    /// Run `ticks` ticks, or fewer if the game ends first.
    ///
    /// Calls observer hooks at every tick boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<C: CursorSource, O: WorldObserver>(
        &mut self,
        ticks:    u64,
        cursor:   &mut C,
        observer: &mut O,
    ) -> Status {
        let interval = self.config.sim.snapshot_interval_ticks;
        for _ in 0..ticks {
            if self.status != Status::Running {
                break;
            }
            let now = self.tick;
            observer.on_tick_start(now);

            let target = cursor.cursor(now, self.player.agent.head().pos);
            for event in self.tick(target) {
                observer.on_event(now, &event);
            }

            observer.on_tick_end(&self.summary_at(now));
            if interval > 0 && now.0.is_multiple_of(interval) {
                observer.on_snapshot(now, self);
            }
        }
        observer.on_sim_end(self.tick);
        self.status
    }

    /// Run until `sim.total_ticks` or the end of the game.
    pub fn run_to_end<C: CursorSource, O: WorldObserver>(
        &mut self,
        cursor:   &mut C,
        observer: &mut O,
    ) -> Status {
        let left = self.config.sim.total_ticks.saturating_sub(self.tick.0);
        self.run(left, cursor, observer)
    }

    /// Start over at level 1 with a fresh player and score 0.
    ///
    /// The clock and the world RNG keep running, so a reset game is not a
    /// replay of the first one.
    pub fn reset(&mut self) {
        self.player = new_player(&mut self.ids, &self.config, self.player_start);
        self.score = 0;
        self.status = Status::Running;
        self.mode = Mode::Chase;
        self.transition = None;
        self.cursor = self.player_start;
        info!(tick = %self.tick, "world reset");
        self.events.push(WorldEvent::Reset);
        self.start_level(1);
    }

    /// Switch to formation mode, spelling `rules.formation_word` across the
    /// arena centre.
    pub fn enter_formation(&mut self) {
        let rules = &self.config.rules;
        let points =
            word_points(&rules.formation_word, self.config.sim.arena.center(), rules.formation_pitch);
        debug!(points = points.len(), "formation mode");
        self.mode = Mode::Formation(points);
        self.events.push(WorldEvent::ModeChanged { formation: true });
    }

    pub fn enter_chase(&mut self) {
        debug!("chase mode");
        self.mode = Mode::Chase;
        self.events.push(WorldEvent::ModeChanged { formation: false });
    }

    pub fn toggle_mode(&mut self) {
        match self.mode {
            Mode::Chase => self.enter_formation(),
            Mode::Formation(_) => self.enter_chase(),
        }
    }

    /// Add an AI snake with `followers` bodies behind its head.
    pub fn spawn_agent(&mut self, kind: AgentKind, position: Vec2, followers: usize) -> AgentId {
        let id = self.ids.agent();
        let mut rng = AgentRng::new(self.config.sim.seed, id);
        let agent = create_agent_with(
            id,
            kind,
            position,
            followers,
            self.config.chain,
            self.config.policy.enemy.retarget_period,
            &mut rng,
        );
        debug!(%id, %kind, %position, followers, "agent spawned");
        self.npcs.push(Actor { agent, rng });
        id
    }

    pub fn add_obstacle(&mut self, position: Vec2, radius: f32, lethal: bool) -> ObstacleId {
        let id = self.ids.obstacle();
        let obstacle = if lethal {
            Obstacle::lethal(id, position, radius)
        } else {
            Obstacle::solid(id, position, radius)
        };
        self.obstacles.push(obstacle);
        id
    }

    pub fn add_food(&mut self, position: Vec2) -> FoodId {
        let id = self.ids.food();
        self.food.push(Food::new(id, position));
        id
    }

    /// Place a pellet at a random free spot.
    pub fn spawn_food(&mut self) -> FoodId {
        let pos = food_position(
            &mut self.rng,
            &self.config.sim.arena,
            &self.config.spawn,
            &self.obstacles,
            &self.player.agent.chain,
            self.npcs.iter().map(|a| a.agent.head()),
        );
        self.add_food(pos)
    }

    /// Remove every AI snake, obstacle, and pellet.  The player stays.
    pub fn clear_level(&mut self) {
        self.npcs.clear();
        self.obstacles.clear();
        self.food.clear();
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    /// The next tick to be processed.
    pub fn now(&self) -> Tick {
        self.tick
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    /// `true` during the frozen pause between two levels.
    pub fn in_transition(&self) -> bool {
        self.transition.is_some()
    }

    /// Where the player was steered to on the last chase tick.
    pub fn cursor(&self) -> Vec2 {
        self.cursor
    }

    pub fn player(&self) -> &Agent {
        &self.player.agent
    }

    pub fn player_mut(&mut self) -> &mut Agent {
        &mut self.player.agent
    }

    /// AI snakes in update order.
    pub fn npcs(&self) -> impl Iterator<Item = &Agent> + '_ {
        self.npcs.iter().map(|a| &a.agent)
    }

    /// Every snake, the player first.
    pub fn agents(&self) -> impl Iterator<Item = &Agent> + '_ {
        std::iter::once(&self.player.agent).chain(self.npcs())
    }

    pub fn agent(&self, id: AgentId) -> Option<&Agent> {
        self.agents().find(|a| a.id == id)
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn food(&self) -> &[Food] {
        &self.food
    }

    pub fn summary(&self) -> TickSummary {
        self.summary_at(self.tick)
    }

    fn summary_at(&self, tick: Tick) -> TickSummary {
        TickSummary {
            tick,
            score:  self.score,
            level:  self.level,
            agents: self.npcs.len() + 1,
            food:   self.food.len(),
            status: self.status,
        }
    }

    // ── Levels ────────────────────────────────────────────────────────────

    fn level_config(&self) -> LevelConfig {
        self.config.levels[(self.level - 1) as usize]
    }

    fn start_level(&mut self, level: u32) {
        self.level = level;
        let cfg = self.level_config();
        self.clear_level();
        self.player.agent.chain.head_mut().max_speed = cfg.player_speed;

        if self.populate {
            self.populate_level(&cfg);
        }

        info!(
            level,
            obstacles = self.obstacles.len(),
            agents = self.npcs.len(),
            food = self.food.len(),
            "level started"
        );
        self.events.push(WorldEvent::LevelStarted { level });
    }

    fn populate_level(&mut self, cfg: &LevelConfig) {
        for _ in 0..cfg.solid_obstacles {
            self.spawn_obstacle(false);
        }
        for _ in 0..cfg.lethal_obstacles {
            self.spawn_obstacle(true);
        }

        let kinds = [
            (AgentKind::Prey, cfg.prey),
            (AgentKind::Predator, cfg.predators),
            (AgentKind::Enemy, cfg.enemies),
        ];
        for (kind, count) in kinds {
            for _ in 0..count {
                let pos = agent_position(&mut self.rng, &self.config.sim.arena, &self.config.spawn);
                let followers = self.config.spawn.followers(kind, &mut self.rng);
                self.spawn_agent(kind, pos, followers);
            }
        }

        for _ in 0..cfg.food {
            self.spawn_food();
        }
    }

    fn spawn_obstacle(&mut self, lethal: bool) -> ObstacleId {
        let (pos, radius) = obstacle_placement(
            &mut self.rng,
            &self.config.sim.arena,
            &self.config.spawn,
            &self.player.agent.chain,
            self.player_start,
            lethal,
        );
        self.add_obstacle(pos, radius, lethal)
    }

    fn check_progress(&mut self) {
        if self.status != Status::Running {
            return;
        }
        let goal = self.level * self.config.rules.points_per_level;
        if self.score < goal {
            return;
        }

        if self.level < self.config.max_level() {
            info!(level = self.level, score = self.score, "level complete");
            self.events.push(WorldEvent::LevelComplete { level: self.level, score: self.score });
            match self.config.rules.transition_ticks {
                0 => self.start_level(self.level + 1),
                n => self.transition = Some(n),
            }
        } else {
            info!(level = self.level, score = self.score, "game won");
            self.status = Status::Won;
            self.events.push(WorldEvent::Won { score: self.score });
        }
    }

    fn advance_transition(&mut self, left: u32) {
        if left <= 1 {
            self.transition = None;
            self.start_level(self.level + 1);
        } else {
            self.transition = Some(left - 1);
        }
    }

    // ── Movement ──────────────────────────────────────────────────────────

    fn eye(&self, cursor: Vec2) -> Vec2 {
        let arena = &self.config.sim.arena;
        if arena.contains(cursor) {
            cursor
        } else {
            arena.clamp(self.cursor, self.config.rules.cursor_inset)
        }
    }

    fn predator_heads(&self) -> Vec<Vec2> {
        self.npcs
            .iter()
            .filter(|a| a.agent.kind == AgentKind::Predator)
            .map(|a| a.agent.head().pos)
            .collect()
    }

    fn update_npcs(&mut self) {
        let arena = self.config.sim.arena;
        let edge = self.config.sim.edge_mode;
        let inset = self.config.sim.clamp_inset;

        for i in 0..self.npcs.len() {
            let predators = self.predator_heads();
            let ctx = WorldContext {
                arena,
                edge_mode: edge,
                obstacles: &self.obstacles,
                food:      &self.food,
                player:    Some(self.player.agent.kinematics()),
                predators: &predators,
                cursor:    self.cursor,
                tuning:    &self.config.policy,
            };

            let actor = &mut self.npcs[i];
            let force = compute_steering(&mut actor.agent, &ctx, &mut actor.rng);
            actor.agent.chain.head_mut().apply_force(force);
            actor.agent.chain.step();
            apply_edge(&mut actor.agent.chain, &arena, edge, inset);
        }
    }

    fn update_player(&mut self) {
        let arena = self.config.sim.arena;
        let predators = self.predator_heads();
        let ctx = WorldContext {
            arena,
            edge_mode: self.config.sim.edge_mode,
            obstacles: &self.obstacles,
            food:      &self.food,
            player:    Some(self.player.agent.kinematics()),
            predators: &predators,
            cursor:    self.cursor,
            tuning:    &self.config.policy,
        };

        let actor = &mut self.player;
        let force = compute_steering(&mut actor.agent, &ctx, &mut actor.rng);
        actor.agent.chain.head_mut().apply_force(force);
        actor.agent.chain.step();
        apply_edge(
            &mut actor.agent.chain,
            &arena,
            self.config.sim.edge_mode,
            self.config.sim.clamp_inset,
        );
    }

    fn update_formation(&mut self) {
        let Mode::Formation(points) = &self.mode else { return };
        let radius = self.config.rules.formation_slowing_radius;
        formation_step(&mut self.player.agent.chain, points, radius);
        apply_edge(
            &mut self.player.agent.chain,
            &self.config.sim.arena,
            self.config.sim.edge_mode,
            self.config.sim.clamp_inset,
        );
    }

    // ── Collisions ────────────────────────────────────────────────────────

    fn resolve_collisions(&mut self) {
        self.eat_food();
        self.top_up_food();
        if self.check_lethal() {
            return;
        }
        self.scrape_solid();
        self.eat_prey();
        if self.check_predators() {
            return;
        }
        self.feed_enemies();
    }

    fn eat_food(&mut self) {
        let margin = self.config.margins.margin(Contact::Food);
        let points = self.config.rules.food_points;
        let growth = self.config.rules.food_growth;
        let respawn = self.config.rules.food_respawn;

        for i in (0..self.food.len()).rev() {
            if !collides(self.player.agent.head(), &self.food[i], margin) {
                continue;
            }
            let eaten = self.food.remove(i);
            self.score += points;
            self.player.agent.chain.grow_by(growth);
            for _ in 0..respawn {
                self.spawn_food();
            }
            debug!(food = %eaten.id, score = self.score, "food eaten");
            self.events.push(WorldEvent::FoodEaten { food: eaten.id, score: self.score });
        }
    }

    fn top_up_food(&mut self) {
        let min = self.level_config().min_food;
        while self.food.len() < min {
            self.spawn_food();
        }
    }

    /// Lethal obstacles against every player body.  Returns `true` if the
    /// game was lost.
    fn check_lethal(&mut self) -> bool {
        let margin = self.config.margins.margin(Contact::Lethal);
        let hit = self
            .obstacles
            .iter()
            .find(|o| o.lethal && chain_touches(&self.player.agent.chain, *o, margin))
            .map(|o| o.id);
        match hit {
            Some(id) => {
                self.lose(LossCause::LethalObstacle(id));
                true
            }
            None => false,
        }
    }

    fn scrape_solid(&mut self) {
        let margin = self.config.margins.margin(Contact::Solid);
        let chain = &self.player.agent.chain;
        let touching = self.obstacles.iter().any(|o| !o.lethal && chain_touches(chain, o, margin));
        if !touching {
            return;
        }

        let (factor, ticks) = (self.config.rules.slowdown_factor, self.config.rules.slowdown_ticks);
        let head = self.player.agent.chain.head_mut();
        let fresh = head.slowdown().is_none();
        head.slow_down(factor, ticks);
        if fresh {
            debug!(factor, ticks, "player slowed");
            self.events.push(WorldEvent::Slowed);
        }
    }

    fn eat_prey(&mut self) {
        let margin = self.config.margins.margin(Contact::Agent);
        let points = self.config.rules.prey_points;
        let growth = self.config.rules.prey_growth;

        for i in (0..self.npcs.len()).rev() {
            let prey = &self.npcs[i].agent;
            if prey.kind != AgentKind::Prey
                || !head_touches_chain(self.player.agent.head(), &prey.chain, margin)
            {
                continue;
            }
            let eaten = self.npcs.remove(i);
            self.score += points;
            self.player.agent.chain.grow_by(growth);
            debug!(prey = %eaten.agent.id, score = self.score, "prey eaten");
            self.events.push(WorldEvent::PreyEaten { prey: eaten.agent.id, score: self.score });
        }
    }

    fn check_predators(&mut self) -> bool {
        let margin = self.config.margins.margin(Contact::Agent);
        let head = self.player.agent.head();
        let hit = self
            .npcs
            .iter()
            .find(|a| {
                a.agent.kind == AgentKind::Predator && head_touches_chain(head, &a.agent.chain, margin)
            })
            .map(|a| a.agent.id);
        match hit {
            Some(id) => {
                self.lose(LossCause::Predator(id));
                true
            }
            None => false,
        }
    }

    fn feed_enemies(&mut self) {
        let margin = self.config.margins.margin(Contact::Food);
        let growth = self.config.rules.enemy_food_growth;

        for actor in self.npcs.iter_mut().filter(|a| a.agent.kind == AgentKind::Enemy) {
            for i in (0..self.food.len()).rev() {
                if !collides(actor.agent.head(), &self.food[i], margin) {
                    continue;
                }
                let eaten = self.food.remove(i);
                actor.agent.chain.grow_by(growth);
                debug!(by = %actor.agent.id, food = %eaten.id, "food stolen");
                self.events.push(WorldEvent::FoodStolen { by: actor.agent.id, food: eaten.id });
            }
        }
    }

    fn lose(&mut self, cause: LossCause) {
        info!(?cause, level = self.level, score = self.score, "game over");
        self.status = Status::Lost;
        self.events.push(WorldEvent::Lost { cause });
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn new_player(ids: &mut IdAlloc, config: &WorldConfig, start: Vec2) -> Actor {
    let id = ids.agent();
    let mut rng = AgentRng::new(config.sim.seed, id);
    let agent = create_agent_with(
        id,
        AgentKind::Player,
        start,
        config.spawn.player_followers,
        config.chain,
        config.policy.enemy.retarget_period,
        &mut rng,
    );
    Actor { agent, rng }
}

/// Keep a snake on the board after it moved.
///
/// Bounce clamps the head.  Wrap moves the whole chain by the head's wrap
/// offset so the followers come along instead of stretching across the arena.
pub(crate) fn apply_edge(chain: &mut SegmentedBody, arena: &Arena, mode: EdgeMode, inset: f32) {
    match mode {
        EdgeMode::Bounce => clamp_to_arena(chain.head_mut(), arena, inset),
        EdgeMode::Wrap => {
            let before = chain.head().pos;
            wrap_around(chain.head_mut(), arena);
            let shift = chain.head().pos - before;
            if !shift.is_zero() {
                chain.head_mut().pos = before;
                chain.translate(shift);
            }
        }
    }
}
