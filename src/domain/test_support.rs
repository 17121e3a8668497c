//! Deterministic capabilities and fixtures shared by the unit tests.

use crate::domain::board::BoardState;
use crate::domain::column::{Column, ColumnName};
use crate::domain::ids::{ColumnId, IdGenerator, ProjectId};
use crate::domain::project::Project;
use chrono::{DateTime, Duration, Local, TimeZone, Utc};
use mockable::Clock;
use std::sync::atomic::{AtomicI64, AtomicU64, Ordering};
use uuid::Uuid;

pub(crate) fn fixed_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 8, 25, 9, 0, 0).unwrap()
}

/// Clock that only moves when told to
#[derive(Debug, Default)]
pub(crate) struct FixedClock {
    offset_secs: AtomicI64,
}

impl FixedClock {
    pub(crate) fn advance(&self, secs: i64) {
        self.offset_secs.fetch_add(secs, Ordering::SeqCst);
    }
}

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        fixed_time() + Duration::seconds(self.offset_secs.load(Ordering::SeqCst))
    }
}

/// Hands out `00000000-0000-0000-0000-00000000100n` style ids in order
#[derive(Debug)]
pub(crate) struct SequentialIds {
    next: AtomicU64,
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self {
            next: AtomicU64::new(0x1000),
        }
    }
}

impl IdGenerator for SequentialIds {
    fn next_uuid(&self) -> Uuid {
        Uuid::from_u128(u128::from(self.next.fetch_add(1, Ordering::SeqCst)))
    }
}

pub(crate) fn project_id() -> ProjectId {
    ProjectId::from_uuid(Uuid::from_u128(1))
}

/// Project `p1` with Backlog (0) and In Progress (1), no tickets
pub(crate) fn seed_state() -> (BoardState, ColumnId, ColumnId) {
    let backlog = ColumnId::from_uuid(Uuid::from_u128(10));
    let in_progress = ColumnId::from_uuid(Uuid::from_u128(11));
    let state = BoardState::new(
        Project::new(project_id(), "Project 1".to_string(), fixed_time()),
        vec![
            Column::new(backlog, project_id(), ColumnName::Backlog, 0),
            Column::new(in_progress, project_id(), ColumnName::InProgress, 1),
        ],
        Vec::new(),
    );
    (state, backlog, in_progress)
}
