use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Which anatomical model is on screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Subject {
    #[default]
    Heart,
    Brain,
    Liver,
    Cells,
}

/// Per-frame animation applied on top of the constant group spin.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimationRule {
    /// Group spin only.
    Rotate,
    /// Uniform group scale oscillating around 1.0.
    Pulse,
    /// Every object bobs with its own phase and spins about X.
    Cluster,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubjectError {
    #[error("unknown organ tag {0:?}")]
    Unknown(String),
}

impl Subject {
    pub const ALL: [Subject; 4] = [
        Subject::Heart,
        Subject::Brain,
        Subject::Liver,
        Subject::Cells,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Subject::Heart => "heart",
            Subject::Brain => "brain",
            Subject::Liver => "liver",
            Subject::Cells => "cells",
        }
    }

    pub fn rule(self) -> AnimationRule {
        match self {
            Subject::Heart => AnimationRule::Pulse,
            Subject::Cells => AnimationRule::Cluster,
            Subject::Brain | Subject::Liver => AnimationRule::Rotate,
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Subject {
    type Err = SubjectError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        let tag = tag.trim();
        Subject::ALL
            .into_iter()
            .find(|s| s.as_str().eq_ignore_ascii_case(tag))
            .ok_or_else(|| SubjectError::Unknown(tag.to_string()))
    }
}
