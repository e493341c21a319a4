//! Per-kind steering policies.
//!
//! Each policy is a weighted sum of library behaviors evaluated against the
//! agent's head.  Obstacle avoidance always takes the followers into account
//! when picking the most threatening obstacle.  Boundary steering applies
//! only when the world bounces; a wrapping world lets heads cross the edge.

use sn_body::Body;
use sn_core::{AgentRng, EdgeMode, Food, FoodId, Kinematics, Vec2};
use sn_steer::{arrive, avoid_obstacles, boundaries, evade, flee, pursue, seek, separate};

use crate::{Agent, AgentKind, PolicyMemory, WorldContext};

/// Net steering force for `agent`'s head this tick.
///
/// Mutates nothing but `agent.memory`.  `rng` feeds the wander jitter.
pub fn compute_steering(agent: &mut Agent, ctx: &WorldContext<'_>, rng: &mut AgentRng) -> Vec2 {
    let Agent { kind, chain, memory, .. } = agent;
    let head = chain.head();
    let followers = chain.followers();

    let mut force = match kind {
        AgentKind::Player   => player(head, followers, ctx),
        AgentKind::Prey     => prey(head, memory, ctx, rng),
        AgentKind::Predator => predator(head, memory, ctx, rng),
        AgentKind::Enemy    => enemy(head, followers, memory, ctx, rng),
    };

    let (avoid_w, bound_w) = shared_weights(*kind, ctx);
    force += avoid_obstacles(head, ctx.obstacles, followers, &ctx.tuning.steer) * avoid_w;
    if ctx.edge_mode == EdgeMode::Bounce {
        force += boundaries(head, &ctx.arena, ctx.tuning.steer.boundary_margin) * bound_w;
    }
    force
}

/// Avoidance and boundary weights, which every kind applies.
fn shared_weights(kind: AgentKind, ctx: &WorldContext<'_>) -> (f32, f32) {
    let t = ctx.tuning;
    match kind {
        AgentKind::Player   => (t.player.avoid_weight, t.player.boundary_weight),
        AgentKind::Prey     => (t.prey.avoid_weight, t.prey.boundary_weight),
        AgentKind::Predator => (t.predator.avoid_weight, t.predator.boundary_weight),
        AgentKind::Enemy    => (t.enemy.avoid_weight, t.enemy.boundary_weight),
    }
}

/// Linear map of `d ∈ [0, radius]` onto `[near, far]`.
#[inline]
fn ramp(d: f32, radius: f32, near: f32, far: f32) -> f32 {
    near + (far - near) * (d / radius).clamp(0.0, 1.0)
}

fn own_followers(followers: &[Body]) -> impl Iterator<Item = Vec2> + '_ {
    followers.iter().map(|b| b.pos)
}

fn player(head: &Body, followers: &[Body], ctx: &WorldContext<'_>) -> Vec2 {
    let t = &ctx.tuning.player;
    arrive(head, ctx.cursor, t.arrive_radius) * t.arrive_weight
        + separate(head, own_followers(followers), head.radius * t.separation_factor)
            * t.separate_weight
}

fn prey(head: &Body, memory: &mut PolicyMemory, ctx: &WorldContext<'_>, rng: &mut AgentRng) -> Vec2 {
    let t = &ctx.tuning.prey;
    let mut force = memory.wander.force(head, &ctx.tuning.wander, rng) * t.wander_weight;

    if let Some(player) = ctx.player {
        let d = head.pos.distance(player.pos);
        if d < t.evade_radius {
            force += evade(head, &player) * ramp(d, t.evade_radius, t.evade_near, t.evade_far);
        }
    }

    for &p in ctx.predators {
        if head.pos.distance(p) < t.flee_radius {
            force += flee(head, p) * t.flee_weight;
        }
    }
    force
}

fn predator(head: &Body, memory: &mut PolicyMemory, ctx: &WorldContext<'_>, rng: &mut AgentRng) -> Vec2 {
    let t = &ctx.tuning.predator;
    let wander = &ctx.tuning.wander;

    let mut force = match ctx.player {
        Some(player) => hunt(head, &player, memory, ctx, rng),
        None => memory.wander.force(head, wander, rng) * t.roam_wander,
    };

    force += separate(head, ctx.predators.iter().copied(), t.separation_gap) * t.separate_weight;
    force
}

/// The three range tiers of the predator against the player.
fn hunt(
    head:   &Body,
    player: &Kinematics,
    memory: &mut PolicyMemory,
    ctx:    &WorldContext<'_>,
    rng:    &mut AgentRng,
) -> Vec2 {
    let t = &ctx.tuning.predator;
    let d = head.pos.distance(player.pos);

    if d < t.pursue_radius {
        let mut f = pursue(head, player) * ramp(d, t.pursue_radius, t.pursue_near, t.pursue_far);
        if d < t.strike_radius {
            f += seek(head, player.pos) * t.strike_weight;
        }
        f
    } else if d < t.patrol_radius {
        seek(head, player.pos) * t.patrol_seek
            + memory.wander.force(head, &ctx.tuning.wander, rng) * t.patrol_wander
    } else {
        memory.wander.force(head, &ctx.tuning.wander, rng) * t.roam_wander
    }
}

fn enemy(
    head:      &Body,
    followers: &[Body],
    memory:    &mut PolicyMemory,
    ctx:       &WorldContext<'_>,
    rng:       &mut AgentRng,
) -> Vec2 {
    let t = &ctx.tuning.enemy;

    if memory.retarget.tick() {
        memory.target = nearest_food(head.pos, ctx.food);
    }

    let held = memory
        .target
        .and_then(|id| ctx.food.iter().find(|f| f.id == id))
        .filter(|f| head.pos.distance(f.pos) < t.capture_radius);

    let mut force = match held {
        Some(food) => arrive(head, food.pos, t.arrive_radius) * t.arrive_weight,
        None => {
            memory.target = None;
            memory.wander.force(head, &ctx.tuning.wander, rng) * t.wander_weight
        }
    };

    if let Some(player) = ctx.player {
        if head.pos.distance(player.pos) < t.flee_radius {
            force += flee(head, player.pos) * t.flee_weight;
        }
    }

    force += separate(head, own_followers(followers), head.radius * t.separation_factor)
        * t.separate_weight;
    force
}

/// Closest food to `from`, ties going to the earlier entry.
pub fn nearest_food(from: Vec2, food: &[Food]) -> Option<FoodId> {
    food.iter()
        .map(|f| (f.id, from.distance(f.pos)))
        .fold(None, |best: Option<(FoodId, f32)>, (id, d)| match best {
            Some((_, bd)) if bd <= d => best,
            _ => Some((id, d)),
        })
        .map(|(id, _)| id)
}
