//! Vote and comment targets
//!
//! The wire payloads carry two optional references. Before anything reaches
//! the database they are narrowed to a [`PostTarget`], which can only hold
//! one of them.

use super::models::{CommentRequest, VoteRequest};

pub const EXCLUSIVE_TARGET_MESSAGE: &str = "Provide exactly one of question_id or answer_id";

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Provide exactly one of question_id or answer_id")]
pub struct TargetError;

/// What a vote or comment is attached to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostTarget {
    Question(i64),
    Answer(i64),
}

impl PostTarget {
    /// Exclusive-or on presence. The values themselves are not inspected.
    pub fn from_pair(question_id: Option<i64>, answer_id: Option<i64>) -> Result<Self, TargetError> {
        match (question_id, answer_id) {
            (Some(q), None) => Ok(Self::Question(q)),
            (None, Some(a)) => Ok(Self::Answer(a)),
            _ => Err(TargetError),
        }
    }

    pub fn question_id(&self) -> Option<i64> {
        match self {
            Self::Question(id) => Some(*id),
            Self::Answer(_) => None,
        }
    }

    pub fn answer_id(&self) -> Option<i64> {
        match self {
            Self::Question(_) => None,
            Self::Answer(id) => Some(*id),
        }
    }
}

/// Vote with a resolved target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoteCommand {
    pub voter_id: i64,
    pub target: PostTarget,
    pub vote: i64,
}

impl TryFrom<VoteRequest> for VoteCommand {
    type Error = TargetError;

    fn try_from(req: VoteRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            voter_id: req.voter_id,
            target: PostTarget::from_pair(req.question_id, req.answer_id)?,
            vote: req.vote,
        })
    }
}

/// Comment with a resolved target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentCommand {
    pub author_id: i64,
    pub target: PostTarget,
    pub body: String,
}

impl TryFrom<CommentRequest> for CommentCommand {
    type Error = TargetError;

    fn try_from(req: CommentRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            author_id: req.author_id,
            target: PostTarget::from_pair(req.question_id, req.answer_id)?,
            body: req.body,
        })
    }
}
