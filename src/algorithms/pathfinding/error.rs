use std::fmt;

/// configuration problems caught before a search takes its first step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// a goal-directed runner was handed a grid without a goal
    MissingGoal { algorithm: &'static str },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingGoal { algorithm } => {
                write!(f, "{} needs a goal but the grid has none", algorithm)
            }
        }
    }
}

impl std::error::Error for SearchError {}
