//! Row-level permission policy shared by every log type: an ordered list of
//! predicates evaluated until one grants. Anonymous writers may create logs
//! that name no owner, owners may do anything to their own logs, admins get
//! full access and coaches read access.

use crate::user::Role;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Create,
    Read,
    Update,
    Delete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Actor {
    Anonymous,
    User { id: Uuid, role: Role },
}

/// A log record with a direct owning-user field. MasteryLog has none; its
/// owner is resolved through the parent summary log before evaluation.
pub trait Owned {
    fn owner(&self) -> Option<Uuid>;
}

type Policy = fn(Operation, &Actor, Option<Uuid>) -> bool;

fn anyone_can_write_anonymous(op: Operation, _actor: &Actor, owner: Option<Uuid>) -> bool {
    owner.is_none() && op == Operation::Create
}

fn is_own(_op: Operation, actor: &Actor, owner: Option<Uuid>) -> bool {
    matches!((actor, owner), (Actor::User { id, .. }, Some(owner)) if *id == owner)
}

fn role_based(op: Operation, actor: &Actor, _owner: Option<Uuid>) -> bool {
    match actor {
        Actor::User { role: Role::Admin, .. } => true,
        Actor::User { role: Role::Coach, .. } => op == Operation::Read,
        _ => false,
    }
}

const LOG_POLICIES: [Policy; 3] = [anyone_can_write_anonymous, is_own, role_based];

/// First-grant evaluation of the log policy chain.
pub fn is_allowed(op: Operation, actor: &Actor, owner: Option<Uuid>) -> bool {
    LOG_POLICIES.iter().any(|policy| policy(op, actor, owner))
}

pub fn is_allowed_on(op: Operation, actor: &Actor, target: &impl Owned) -> bool {
    is_allowed(op, actor, target.owner())
}

impl Owned for crate::content::session::Model {
    fn owner(&self) -> Option<Uuid> {
        self.user_id
    }
}

impl Owned for crate::content::summary::Model {
    fn owner(&self) -> Option<Uuid> {
        Some(self.user_id)
    }
}

impl Owned for crate::content::rating::Model {
    fn owner(&self) -> Option<Uuid> {
        self.user_id
    }
}

impl Owned for crate::user_session::Model {
    fn owner(&self) -> Option<Uuid> {
        Some(self.user_id)
    }
}

impl Owned for crate::attempt::Model {
    fn owner(&self) -> Option<Uuid> {
        Some(self.user_id)
    }
}

impl Owned for crate::exam::Model {
    fn owner(&self) -> Option<Uuid> {
        Some(self.user_id)
    }
}

impl Owned for crate::exam::attempt::Model {
    fn owner(&self) -> Option<Uuid> {
        Some(self.user_id)
    }
}
