//! Distance and overlap queries between steerable things.
//!
//! Every collision in the game is circle against circle with a small extra
//! margin that depends on what is touching what.  The margins differ (food is
//! generous, solid obstacles are tight), so they live in [`CollisionMargins`]
//! keyed by [`Contact`].

use sn_body::Body;
use sn_chain::SegmentedBody;
use sn_core::{Circle, Target};

/// Distance between the positions of two targets.
#[inline]
pub fn distance<A: Target + ?Sized, B: Target + ?Sized>(a: &A, b: &B) -> f32 {
    a.position().distance(b.position())
}

/// `true` when the two circles, each grown by `margin / 2`, overlap:
/// `dist < a.r + b.r + margin`.
#[inline]
pub fn collides<A: Circle + ?Sized, B: Circle + ?Sized>(a: &A, b: &B, margin: f32) -> bool {
    a.center().distance(b.center()) < a.radius() + b.radius() + margin
}

/// `true` when the head or any follower of `chain` collides with `circle`.
pub fn chain_touches<C: Circle + ?Sized>(chain: &SegmentedBody, circle: &C, margin: f32) -> bool {
    chain.bodies().iter().any(|b| collides(b, circle, margin))
}

/// `true` when `head` collides with any body of `chain`, head included.
pub fn head_touches_chain(head: &Body, chain: &SegmentedBody, margin: f32) -> bool {
    chain_touches(chain, head, margin)
}

/// What a player body ran into.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Contact {
    Food,
    Lethal,
    Solid,
    Agent,
}

/// Extra distance added to the radius sum, per kind of contact.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CollisionMargins {
    pub food:   f32,
    pub lethal: f32,
    pub solid:  f32,
    pub agent:  f32,
}

impl Default for CollisionMargins {
    fn default() -> Self {
        Self { food: 5.0, lethal: 2.0, solid: 1.0, agent: 2.0 }
    }
}

impl CollisionMargins {
    #[inline]
    pub fn margin(&self, contact: Contact) -> f32 {
        match contact {
            Contact::Food   => self.food,
            Contact::Lethal => self.lethal,
            Contact::Solid  => self.solid,
            Contact::Agent  => self.agent,
        }
    }

    pub(crate) fn is_finite(&self) -> bool {
        [self.food, self.lethal, self.solid, self.agent].iter().all(|m| m.is_finite())
    }
}
