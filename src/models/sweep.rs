// Retention decisions and sweep outcomes
use super::log_file::{LogFileName, PointerLevel};
use std::collections::BTreeSet;

/// What a single directory entry means to the sweep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    LogCandidate(LogFileName),
    Pointer {
        level: PointerLevel,
        target: Option<String>,
    },
    Irrelevant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeepReason {
    Protected,
    WithinRetention,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetentionDecision {
    Keep(KeepReason),
    Delete,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateDecision {
    pub name: String,
    pub log: LogFileName,
    pub decision: RetentionDecision,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SweepPlan {
    pub protected: BTreeSet<String>,
    pub candidates: Vec<CandidateDecision>,
    pub irrelevant: usize,
}

impl SweepPlan {
    pub fn deletions(&self) -> impl Iterator<Item = &CandidateDecision> {
        self.candidates
            .iter()
            .filter(|c| c.decision == RetentionDecision::Delete)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SweepReport {
    pub deleted: Vec<String>,
    pub retained: usize,
    pub protected: usize,
    pub ignored: usize,
}
