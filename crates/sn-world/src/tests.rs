//! Unit and integration tests for sn-world.

use sn_behavior::AgentKind;
use sn_body::Body;
use sn_chain::{ChainTuning, SegmentedBody};
use sn_core::{Arena, Tick, Vec2};

use crate::{
    LevelConfig, NoopObserver, TickSummary, World, WorldBuilder, WorldConfig, WorldEvent,
    WorldObserver,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Default arena (20, 20, 1200 × 800): the player starts at (620, 520).
const START: Vec2 = Vec2::new(620.0, 520.0);

/// Stock rules without the level pause or the food floor.
fn quiet_config() -> WorldConfig {
    let mut cfg = WorldConfig::default();
    cfg.rules.transition_ticks = 0;
    for level in &mut cfg.levels {
        level.min_food = 0;
    }
    cfg
}

/// Only the player, parked at `START`.
fn empty_world() -> World {
    WorldBuilder::new(quiet_config()).populate(false).build().unwrap()
}

fn empty_world_with(cfg: WorldConfig) -> World {
    WorldBuilder::new(cfg).populate(false).build().unwrap()
}

fn player_chain(at: Vec2) -> SegmentedBody {
    SegmentedBody::new(Body::new(at, 4.0, 0.4, 10.0), 3, 15.0, 8.0, ChainTuning::default())
}

fn has(events: &[WorldEvent], pred: impl Fn(&WorldEvent) -> bool) -> bool {
    events.iter().any(pred)
}

#[derive(Default)]
struct Recorder {
    starts:    usize,
    ends:      Vec<TickSummary>,
    snapshots: Vec<(Tick, usize)>,
    events:    Vec<(Tick, WorldEvent)>,
    end:       Option<Tick>,
}

impl WorldObserver for Recorder {
    fn on_tick_start(&mut self, _tick: Tick) {
        self.starts += 1;
    }

    fn on_event(&mut self, tick: Tick, event: &WorldEvent) {
        self.events.push((tick, event.clone()));
    }

    fn on_tick_end(&mut self, summary: &TickSummary) {
        self.ends.push(*summary);
    }

    fn on_snapshot(&mut self, tick: Tick, world: &World) {
        self.snapshots.push((tick, world.agents().count()));
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        self.end = Some(final_tick);
    }
}

// ── Collision queries ─────────────────────────────────────────────────────────

#[cfg(test)]
mod collision_tests {
    use sn_core::{Food, FoodId, Obstacle, ObstacleId};

    use super::*;
    use crate::{CollisionMargins, Contact, chain_touches, collides, distance, head_touches_chain};

    #[test]
    fn distance_between_points() {
        assert_eq!(distance(&Vec2::ZERO, &Vec2::new(3.0, 4.0)), 5.0);
    }

    #[test]
    fn collides_uses_radius_sum_plus_margin() {
        let rock = Obstacle::solid(ObstacleId(0), Vec2::ZERO, 5.0);
        let pellet = Food::new(FoodId(1), Vec2::new(12.0, 0.0));
        assert!(collides(&rock, &pellet, 5.0));
        assert!(!collides(&rock, &pellet, 1.0));
    }

    #[test]
    fn chain_touches_checks_followers() {
        let chain = player_chain(Vec2::ZERO);
        let rock = Obstacle::lethal(ObstacleId(0), Vec2::new(-45.0, 12.0), 5.0);
        assert!(!collides(chain.head(), &rock, 2.0));
        assert!(chain_touches(&chain, &rock, 2.0));
    }

    #[test]
    fn head_touches_chain_checks_segments() {
        let chain = player_chain(Vec2::ZERO);
        let head = Body::new(Vec2::new(-30.0, 15.0), 4.0, 0.4, 10.0);
        assert!(head_touches_chain(&head, &chain, 2.0));
        let far = Body::new(Vec2::new(-30.0, 25.0), 4.0, 0.4, 10.0);
        assert!(!head_touches_chain(&far, &chain, 2.0));
    }

    #[test]
    fn default_margins() {
        let m = CollisionMargins::default();
        assert_eq!(m.margin(Contact::Food), 5.0);
        assert_eq!(m.margin(Contact::Lethal), 2.0);
        assert_eq!(m.margin(Contact::Solid), 1.0);
        assert_eq!(m.margin(Contact::Agent), 2.0);
    }
}

// ── Level table and configuration ─────────────────────────────────────────────

#[cfg(test)]
mod config_tests {
    use super::*;
    use crate::{WorldError, default_levels};

    #[test]
    fn stock_level_table() {
        let levels = default_levels();
        assert_eq!(levels.len(), 5);
        assert_eq!(levels[2], LevelConfig::new(5, 7, 10, 7, 5.0, 3, 2));
        assert!(levels.iter().all(|l| l.enemies == 0));
        assert_eq!(levels[4].with_enemies(2).enemies, 2);
    }

    #[test]
    fn level_lookup_is_one_based() {
        let cfg = WorldConfig::default();
        assert_eq!(cfg.level(1).unwrap().food, 15);
        assert_eq!(cfg.level(5).unwrap().predators, 3);
        assert!(matches!(cfg.level(0), Err(WorldError::UnknownLevel { level: 0, max: 5 })));
        assert!(cfg.level(6).is_err());
    }

    #[test]
    fn default_is_valid() {
        WorldConfig::default().validate().unwrap();
    }

    #[test]
    fn rejects_empty_level_table() {
        let cfg = WorldConfig { levels: Vec::new(), ..Default::default() };
        assert!(matches!(cfg.validate(), Err(WorldError::Config(_))));
    }

    #[test]
    fn rejects_bad_arena_as_core_error() {
        let mut cfg = WorldConfig::default();
        cfg.sim.arena = Arena::new(0.0, 0.0, -5.0, 100.0);
        assert!(matches!(cfg.validate(), Err(WorldError::Core(_))));
    }

    #[test]
    fn rejects_bad_rules_and_ranges() {
        let mut cfg = WorldConfig::default();
        cfg.rules.slowdown_factor = 0.0;
        assert!(cfg.validate().is_err());

        let mut cfg = WorldConfig::default();
        cfg.spawn.solid_radius_min = 30.0;
        assert!(cfg.validate().is_err());

        let mut cfg = WorldConfig::default();
        cfg.chain.hard_min = 0.9;
        assert!(cfg.validate().is_err());

        let mut cfg = WorldConfig::default();
        cfg.levels[1].player_speed = 0.0;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_non_positive_follower_limits() {
        let mut cfg = WorldConfig::default();
        cfg.chain.follower_speed = 0.0;
        assert!(matches!(cfg.validate(), Err(WorldError::Config(_))));
        assert!(WorldBuilder::new(cfg).build().is_err());

        let mut cfg = WorldConfig::default();
        cfg.chain.follower_force = -1.0;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_non_finite_chain_tuning() {
        let mut cfg = WorldConfig::default();
        cfg.chain.damping = f32::NAN;
        assert!(cfg.validate().is_err());

        let mut cfg = WorldConfig::default();
        cfg.chain.hard_max = f32::INFINITY;
        assert!(cfg.validate().is_err());

        let mut cfg = WorldConfig::default();
        cfg.chain.urgent_speed = -0.5;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_bad_policy_radii_and_weights() {
        let mut cfg = WorldConfig::default();
        cfg.policy.prey.evade_radius = 0.0;
        assert!(cfg.validate().is_err());

        let mut cfg = WorldConfig::default();
        cfg.policy.predator.separate_weight = -0.8;
        assert!(cfg.validate().is_err());

        let mut cfg = WorldConfig::default();
        cfg.policy.wander.jitter = f32::NAN;
        assert!(cfg.validate().is_err());

        let mut cfg = WorldConfig::default();
        cfg.policy.steer.lookahead = f32::INFINITY;
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("steer.lookahead"), "{err}");
    }

    #[test]
    fn zero_weights_are_allowed() {
        let mut cfg = WorldConfig::default();
        cfg.policy.player.boundary_weight = 0.0;
        cfg.policy.enemy.flee_weight = 0.0;
        cfg.validate().unwrap();
    }

    #[test]
    fn builder_rejects_unknown_level() {
        let result = WorldBuilder::new(WorldConfig::default()).level(9).build();
        assert!(matches!(result, Err(WorldError::UnknownLevel { level: 9, .. })));
    }
}

// ── Spawning ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod spawn_tests {
    use sn_core::{FOOD_RADIUS, Obstacle, ObstacleId, SimRng};

    use super::*;
    use crate::SpawnTuning;
    use crate::spawn::{food_position, obstacle_placement};

    #[test]
    fn food_keeps_its_clearances() {
        let arena = Arena::default();
        let tuning = SpawnTuning::default();
        let rocks = [Obstacle::solid(ObstacleId(0), arena.center(), 20.0)];
        let player = player_chain(START);
        let ai = Body::new(Vec2::new(300.0, 300.0), 2.0, 0.2, 6.0);
        let mut rng = SimRng::new(3);

        for _ in 0..200 {
            let p = food_position(&mut rng, &arena, &tuning, &rocks, &player, [&ai]);
            assert!(p.x >= 80.0 && p.x <= 1160.0 && p.y >= 80.0 && p.y <= 760.0, "{p}");
            assert!(p.distance(rocks[0].pos) >= 20.0 + FOOD_RADIUS + 20.0);
            assert!(player.bodies().iter().all(|b| p.distance(b.pos) >= b.radius + FOOD_RADIUS + 30.0));
            assert!(p.distance(ai.pos) >= 6.0 + FOOD_RADIUS + 25.0);
        }
    }

    #[test]
    fn solid_obstacles_keep_clear_of_start_and_player() {
        let arena = Arena::default();
        let tuning = SpawnTuning::default();
        let player = player_chain(START);
        let mut rng = SimRng::new(11);

        for _ in 0..200 {
            let (p, r) = obstacle_placement(&mut rng, &arena, &tuning, &player, START, false);
            assert!((12.0..=20.0).contains(&r));
            assert!(p.distance(START) >= r + 80.0);
            assert!(player.bodies().iter().all(|b| p.distance(b.pos) >= r + b.radius + 50.0));
        }
    }

    #[test]
    fn lethal_radius_range() {
        let arena = Arena::default();
        let tuning = SpawnTuning::default();
        let player = player_chain(START);
        let mut rng = SimRng::new(5);
        for _ in 0..100 {
            let (_, r) = obstacle_placement(&mut rng, &arena, &tuning, &player, START, true);
            assert!((10.0..=16.0).contains(&r));
        }
    }

    #[test]
    fn follower_counts_per_kind() {
        let tuning = SpawnTuning::default();
        let mut rng = SimRng::new(1);
        for _ in 0..50 {
            assert!((2..=3).contains(&tuning.followers(AgentKind::Prey, &mut rng)));
            assert!((8..=12).contains(&tuning.followers(AgentKind::Predator, &mut rng)));
            assert_eq!(tuning.followers(AgentKind::Enemy, &mut rng), 3);
        }
    }
}

// ── World construction ────────────────────────────────────────────────────────

#[cfg(test)]
mod build_tests {
    use super::*;
    use crate::{Mode, Status};

    #[test]
    fn level_one_population() {
        let world = WorldBuilder::new(WorldConfig::default()).build().unwrap();
        assert_eq!(world.level(), 1);
        assert_eq!(world.score(), 0);
        assert_eq!(world.status(), Status::Running);
        assert_eq!(*world.mode(), Mode::Chase);
        assert_eq!(world.obstacles().len(), 6);
        assert_eq!(world.obstacles().iter().filter(|o| o.lethal).count(), 3);
        assert_eq!(world.food().len(), 15);
        assert_eq!(world.npcs().count(), 2);
        assert!(world.npcs().all(|a| a.kind == AgentKind::Prey));
        assert_eq!(world.player().chain.follower_count(), 3);
        assert_eq!(world.player().head().pos, START);
        assert_eq!(world.player().head().max_speed, 4.0);
    }

    #[test]
    fn start_at_later_level_sets_player_speed() {
        let world = WorldBuilder::new(WorldConfig::default()).level(3).build().unwrap();
        assert_eq!(world.level(), 3);
        assert_eq!(world.player().head().max_speed, 5.0);
        let predators = world.npcs().filter(|a| a.kind == AgentKind::Predator).count();
        assert_eq!(predators, 2);
        for p in world.npcs().filter(|a| a.kind == AgentKind::Predator) {
            assert!((8..=12).contains(&p.chain.follower_count()));
        }
    }

    #[test]
    fn same_seed_same_layout() {
        let a = WorldBuilder::new(WorldConfig::default()).build().unwrap();
        let b = WorldBuilder::new(WorldConfig::default()).build().unwrap();
        assert_eq!(a.obstacles(), b.obstacles());
        assert_eq!(a.food(), b.food());

        let mut cfg = WorldConfig::default();
        cfg.sim.seed = 7;
        let c = WorldBuilder::new(cfg).build().unwrap();
        assert_ne!(a.food(), c.food());
    }

    #[test]
    fn unpopulated_world_has_only_the_player() {
        let world = empty_world();
        assert_eq!(world.agents().count(), 1);
        assert!(world.obstacles().is_empty());
        assert!(world.food().is_empty());
    }
}

// ── Tick: eating, obstacles, agents ───────────────────────────────────────────

#[cfg(test)]
mod tick_tests {
    use super::*;
    use crate::{LossCause, Status};

    #[test]
    fn first_tick_reports_level_start() {
        let mut world = empty_world();
        let events = world.tick(START);
        assert!(has(&events, |e| *e == WorldEvent::LevelStarted { level: 1 }));
        assert_eq!(world.now(), Tick(1));
        assert!(world.tick(START).is_empty());
    }

    #[test]
    fn eating_food_scores_grows_and_respawns() {
        let mut world = empty_world();
        let pellet = world.add_food(START + Vec2::new(5.0, 0.0));

        let events = world.tick(START);

        assert!(has(&events, |e| *e == WorldEvent::FoodEaten { food: pellet, score: 1 }));
        assert_eq!(world.score(), 1);
        assert_eq!(world.player().chain.follower_count(), 4);
        assert_eq!(world.food().len(), 2);
        assert!(world.food().iter().all(|f| f.id != pellet));
    }

    #[test]
    fn food_reach_follows_configured_margin() {
        let mut world = empty_world();
        let pellet = world.add_food(START + Vec2::new(0.0, -40.0));
        world.tick(START);
        assert!(world.food().iter().any(|f| f.id == pellet));

        let mut cfg = quiet_config();
        cfg.margins.food = 30.0;
        let mut world = empty_world_with(cfg);
        let pellet = world.add_food(START + Vec2::new(0.0, -40.0));
        let events = world.tick(START);
        assert!(has(&events, |e| matches!(e, WorldEvent::FoodEaten { food, .. } if *food == pellet)));
    }

    #[test]
    fn food_floor_is_topped_up() {
        let mut cfg = quiet_config();
        cfg.levels[0].min_food = 4;
        let mut world = empty_world_with(cfg);
        assert!(world.food().is_empty());
        world.tick(START);
        assert_eq!(world.food().len(), 4);
    }

    #[test]
    fn solid_obstacle_slows_the_player() {
        let mut world = empty_world();
        world.add_obstacle(START + Vec2::new(0.0, 18.0), 12.0, false);

        let events = world.tick(START);
        assert!(has(&events, |e| *e == WorldEvent::Slowed));
        let slowdown = world.player().head().slowdown().unwrap();
        assert_eq!(slowdown.factor, 0.5);
        assert_eq!(world.status(), Status::Running);

        let events = world.tick(START);
        assert!(!has(&events, |e| *e == WorldEvent::Slowed));
    }

    #[test]
    fn lethal_obstacle_on_a_follower_loses() {
        let mut world = empty_world();
        let rock = world.add_obstacle(Vec2::new(590.0, 520.0), 10.0, true);

        let events = world.tick(START);

        assert_eq!(world.status(), Status::Lost);
        assert!(has(&events, |e| *e
            == WorldEvent::Lost { cause: LossCause::LethalObstacle(rock) }));

        let head = world.player().head().pos;
        world.tick(Vec2::new(100.0, 100.0));
        assert_eq!(world.player().head().pos, head);
        assert_eq!(world.now(), Tick(2));
    }

    #[test]
    fn prey_is_eaten_for_five_points() {
        let mut world = empty_world();
        let prey = world.spawn_agent(AgentKind::Prey, START + Vec2::new(10.0, 0.0), 2);

        let events = world.tick(START);

        assert!(has(&events, |e| *e == WorldEvent::PreyEaten { prey, score: 5 }));
        assert_eq!(world.score(), 5);
        assert_eq!(world.player().chain.follower_count(), 5);
        assert!(world.agent(prey).is_none());
        assert_eq!(world.npcs().count(), 0);
    }

    #[test]
    fn predator_contact_loses() {
        let mut world = empty_world();
        let predator = world.spawn_agent(AgentKind::Predator, START + Vec2::new(20.0, 0.0), 8);

        let events = world.tick(START);

        assert_eq!(world.status(), Status::Lost);
        assert!(has(&events, |e| *e == WorldEvent::Lost { cause: LossCause::Predator(predator) }));
    }

    #[test]
    fn enemies_eat_food_and_grow() {
        let mut world = empty_world();
        let enemy = world.spawn_agent(AgentKind::Enemy, Vec2::new(300.0, 300.0), 3);
        let pellet = world.add_food(Vec2::new(303.0, 300.0));

        let events = world.tick(START);

        assert!(has(&events, |e| *e == WorldEvent::FoodStolen { by: enemy, food: pellet }));
        assert!(world.food().is_empty());
        assert_eq!(world.agent(enemy).unwrap().chain.follower_count(), 4);
        assert_eq!(world.score(), 0);
    }

    #[test]
    fn cursor_outside_the_arena_holds_the_last_target() {
        let mut world = empty_world();
        world.tick(Vec2::new(-500.0, -500.0));
        assert_eq!(world.cursor(), START);

        world.tick(Vec2::new(100.0, 100.0));
        assert_eq!(world.cursor(), Vec2::new(100.0, 100.0));

        world.tick(Vec2::new(5_000.0, 100.0));
        assert_eq!(world.cursor(), Vec2::new(100.0, 100.0));

        world.tick(Vec2::new(f32::NAN, 0.0));
        assert_eq!(world.cursor(), Vec2::new(100.0, 100.0));
    }

    #[test]
    fn enemies_feed_in_spawn_order() {
        let mut world = empty_world();
        let first = world.spawn_agent(AgentKind::Enemy, Vec2::new(300.0, 300.0), 3);
        let second = world.spawn_agent(AgentKind::Enemy, Vec2::new(306.0, 300.0), 3);
        let pellet = world.add_food(Vec2::new(303.0, 300.0));

        let events = world.tick(START);

        assert!(has(&events, |e| *e == WorldEvent::FoodStolen { by: first, food: pellet }));
        assert!(!has(&events, |e| matches!(e, WorldEvent::FoodStolen { by, .. } if *by == second)));
    }
}

// ── Levels, winning, reset ────────────────────────────────────────────────────

#[cfg(test)]
mod progress_tests {
    use super::*;
    use crate::Status;

    fn two_prey_at_head(world: &mut World) {
        world.spawn_agent(AgentKind::Prey, START + Vec2::new(10.0, 0.0), 2);
        world.spawn_agent(AgentKind::Prey, START + Vec2::new(0.0, 10.0), 2);
    }

    #[test]
    fn ten_points_complete_level_one() {
        let mut world = empty_world();
        two_prey_at_head(&mut world);

        let events = world.tick(START);

        assert_eq!(world.score(), 10);
        assert!(has(&events, |e| *e == WorldEvent::LevelComplete { level: 1, score: 10 }));
        assert!(has(&events, |e| *e == WorldEvent::LevelStarted { level: 2 }));
        assert_eq!(world.level(), 2);
        assert_eq!(world.player().head().max_speed, 4.5);
    }

    #[test]
    fn transition_pause_freezes_the_world() {
        let mut cfg = quiet_config();
        cfg.rules.transition_ticks = 3;
        let mut world = empty_world_with(cfg);
        two_prey_at_head(&mut world);

        world.tick(START);
        assert_eq!(world.level(), 1);
        assert!(world.in_transition());

        let head = world.player().head().pos;
        world.tick(Vec2::new(100.0, 100.0));
        world.tick(Vec2::new(100.0, 100.0));
        assert_eq!(world.level(), 1);
        assert_eq!(world.player().head().pos, head);

        let events = world.tick(START);
        assert!(has(&events, |e| *e == WorldEvent::LevelStarted { level: 2 }));
        assert_eq!(world.level(), 2);
        assert!(!world.in_transition());
    }

    #[test]
    fn clearing_the_last_level_wins() {
        let mut cfg = quiet_config();
        cfg.levels = vec![LevelConfig::new(0, 0, 0, 0, 4.0, 0, 0)];
        cfg.rules.points_per_level = 5;
        let mut world = empty_world_with(cfg);
        world.spawn_agent(AgentKind::Prey, START + Vec2::new(10.0, 0.0), 2);

        let events = world.tick(START);

        assert_eq!(world.status(), Status::Won);
        assert!(has(&events, |e| *e == WorldEvent::Won { score: 5 }));
    }

    #[test]
    fn reset_rebuilds_level_one() {
        let mut world = WorldBuilder::new(quiet_config()).level(2).populate(false).build().unwrap();
        let old_player = world.player().id;
        world.add_obstacle(Vec2::new(590.0, 520.0), 10.0, true);
        world.tick(START);
        assert_eq!(world.status(), Status::Lost);

        world.reset();

        assert_eq!(world.status(), Status::Running);
        assert_eq!(world.level(), 1);
        assert_eq!(world.score(), 0);
        assert!(world.obstacles().is_empty());
        assert_ne!(world.player().id, old_player);
        assert_eq!(world.player().head().pos, START);
        assert_eq!(world.player().chain.follower_count(), 3);

        let events = world.tick(START);
        assert!(has(&events, |e| *e == WorldEvent::Reset));
        assert!(has(&events, |e| *e == WorldEvent::LevelStarted { level: 1 }));
    }
}

// ── Formation mode and edges ──────────────────────────────────────────────────

#[cfg(test)]
mod mode_tests {
    use sn_core::EdgeMode;

    use super::*;
    use crate::Mode;
    use crate::world::apply_edge;

    #[test]
    fn formation_moves_the_player_and_freezes_the_rest() {
        let mut world = empty_world();
        let prey = world.spawn_agent(AgentKind::Prey, Vec2::new(300.0, 300.0), 2);
        world.enter_formation();

        let Mode::Formation(points) = world.mode().clone() else {
            panic!("expected formation mode");
        };
        assert!(points.len() > world.player().chain.len());

        let before = world.player().head().pos.distance(points[0]);
        let events = world.tick(START);
        assert!(has(&events, |e| *e == WorldEvent::ModeChanged { formation: true }));
        assert!(world.player().head().pos.distance(points[0]) < before);
        assert_eq!(world.agent(prey).unwrap().head().pos, Vec2::new(300.0, 300.0));

        world.toggle_mode();
        assert_eq!(*world.mode(), Mode::Chase);
    }

    #[test]
    fn wrap_moves_the_whole_chain() {
        let arena = Arena::default();
        let mut chain = player_chain(Vec2::new(1_235.0, 400.0));

        apply_edge(&mut chain, &arena, EdgeMode::Wrap, 10.0);

        assert_eq!(chain.head().pos, Vec2::new(10.0, 400.0));
        assert!((chain.gap(0) - 15.0).abs() < 1e-3);
        assert!((chain.tail().pos.x - -35.0).abs() < 1e-3);
    }

    #[test]
    fn bounce_clamps_only_the_head() {
        let arena = Arena::default();
        let mut chain = player_chain(Vec2::new(1_235.0, 400.0));

        apply_edge(&mut chain, &arena, EdgeMode::Bounce, 10.0);

        assert_eq!(chain.head().pos, Vec2::new(1_210.0, 400.0));
        assert_eq!(chain.tail().pos, Vec2::new(1_190.0, 400.0));
    }
}

// ── run() and observers ───────────────────────────────────────────────────────

#[cfg(test)]
mod run_tests {
    use super::*;
    use crate::{FixedCursor, Status, Waypoints};

    #[test]
    fn observer_hooks_fire_in_order() {
        let mut cfg = quiet_config();
        cfg.sim.snapshot_interval_ticks = 10;
        let mut world = empty_world_with(cfg);
        let mut rec = Recorder::default();

        let status = world.run(25, &mut FixedCursor(START), &mut rec);

        assert_eq!(status, Status::Running);
        assert_eq!(rec.starts, 25);
        assert_eq!(rec.ends.len(), 25);
        assert_eq!(rec.ends[0].tick, Tick(0));
        assert_eq!(rec.ends[24].tick, Tick(24));
        assert_eq!(rec.snapshots, vec![(Tick(0), 1), (Tick(10), 1), (Tick(20), 1)]);
        assert_eq!(rec.events, vec![(Tick(0), WorldEvent::LevelStarted { level: 1 })]);
        assert_eq!(rec.end, Some(Tick(25)));
    }

    #[test]
    fn run_stops_when_the_game_ends() {
        let mut world = empty_world();
        world.add_obstacle(Vec2::new(590.0, 520.0), 10.0, true);
        let mut rec = Recorder::default();

        let status = world.run(100, &mut FixedCursor(START), &mut rec);

        assert_eq!(status, Status::Lost);
        assert_eq!(rec.starts, 1);
        assert_eq!(world.now(), Tick(1));
        assert_eq!(rec.end, Some(Tick(1)));
    }

    #[test]
    fn run_to_end_honours_total_ticks() {
        let mut cfg = quiet_config();
        cfg.sim.total_ticks = 40;
        let mut world = empty_world_with(cfg);
        world.run(15, &mut FixedCursor(START), &mut NoopObserver);
        world.run_to_end(&mut FixedCursor(START), &mut NoopObserver);
        assert_eq!(world.now(), Tick(40));
    }

    #[test]
    fn closures_are_cursor_sources() {
        let mut world = empty_world();
        let mut calls = 0;
        let mut cursor = |_tick: Tick, head: Vec2| {
            calls += 1;
            head + Vec2::new(50.0, 0.0)
        };
        world.run(30, &mut cursor, &mut NoopObserver);
        assert_eq!(calls, 30);
        assert!(world.player().head().pos.x > START.x);
    }

    #[test]
    fn waypoints_advance_when_reached() {
        use crate::CursorSource;

        let mut w = Waypoints::new(vec![Vec2::new(0.0, 0.0), Vec2::new(100.0, 0.0)], 5.0);
        assert_eq!(w.cursor(Tick(0), Vec2::new(50.0, 50.0)), Vec2::new(0.0, 0.0));
        assert_eq!(w.cursor(Tick(1), Vec2::new(1.0, 1.0)), Vec2::new(100.0, 0.0));
        assert_eq!(w.current(), 1);
        assert_eq!(w.cursor(Tick(2), Vec2::new(99.0, 0.0)), Vec2::new(0.0, 0.0));
    }

    #[test]
    fn replays_are_deterministic() {
        let path = vec![
            Vec2::new(200.0, 200.0),
            Vec2::new(1_000.0, 200.0),
            Vec2::new(1_000.0, 700.0),
            Vec2::new(200.0, 700.0),
        ];
        let play = || {
            let mut world = WorldBuilder::new(WorldConfig::default()).build().unwrap();
            let mut rec = Recorder::default();
            world.run(400, &mut Waypoints::new(path.clone(), 30.0), &mut rec);
            let bodies: Vec<Vec2> = world.agents().flat_map(|a| a.chain.positions()).collect();
            (rec.ends, rec.events, bodies)
        };
        assert_eq!(play(), play());
    }
}

// ── Properties ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod properties {
    use proptest::prelude::*;

    use super::*;
    use crate::Status;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(12))]

        #[test]
        fn heads_stay_inside_and_speeds_stay_capped(seed in 0u64..10_000) {
            let mut cfg = WorldConfig::default();
            cfg.sim.seed = seed;
            cfg.rules.transition_ticks = 0;
            let mut world = WorldBuilder::new(cfg).level(3).build().unwrap();
            let arena = world.config().sim.arena;
            let inset = world.config().sim.clamp_inset;

            for t in 0..200u64 {
                let angle = t as f32 * 0.05;
                world.tick(arena.center() + Vec2::from_angle(angle) * 250.0);
                if world.status() != Status::Running {
                    break;
                }
                for agent in world.agents() {
                    let h = agent.head().pos;
                    prop_assert!(h.x >= arena.x + inset - 1e-3 && h.x <= arena.right() - inset + 1e-3);
                    prop_assert!(h.y >= arena.y + inset - 1e-3 && h.y <= arena.bottom() - inset + 1e-3);
                    for body in agent.chain.bodies() {
                        prop_assert!(body.pos.is_finite());
                        prop_assert!(body.vel.length() <= body.max_speed * (1.0 + 1e-4));
                    }
                }
            }
        }
    }
}
