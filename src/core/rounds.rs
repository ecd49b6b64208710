use thiserror::Error;

/// Number of tag-card rounds in a full session
pub const TOTAL_ROUNDS: usize = 7;

/// Round-count precondition failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoundError {
    #[error("All rounds completed")]
    AllRoundsCompleted,

    #[error("Please complete all rounds before requesting recommendations")]
    RoundsIncomplete { completed: usize },
}

/// Returns the 1-based number of the round that follows `history`
pub fn next_round(history: &[String]) -> Result<usize, RoundError> {
    if history.len() >= TOTAL_ROUNDS {
        return Err(RoundError::AllRoundsCompleted);
    }
    Ok(history.len() + 1)
}

/// Fails unless every round has been played
pub fn ensure_complete(history: &[String]) -> Result<(), RoundError> {
    if history.len() < TOTAL_ROUNDS {
        return Err(RoundError::RoundsIncomplete {
            completed: history.len(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn history(len: usize) -> Vec<String> {
        (0..len).map(|i| format!("tag{}", i)).collect()
    }

    #[test]
    fn test_next_round_numbering() {
        assert_eq!(next_round(&history(0)), Ok(1));
        assert_eq!(next_round(&history(6)), Ok(7));
        assert_eq!(next_round(&history(7)), Err(RoundError::AllRoundsCompleted));
        assert_eq!(next_round(&history(9)), Err(RoundError::AllRoundsCompleted));
    }

    #[test]
    fn test_ensure_complete() {
        for len in 0..TOTAL_ROUNDS {
            assert_eq!(
                ensure_complete(&history(len)),
                Err(RoundError::RoundsIncomplete { completed: len })
            );
        }
        assert!(ensure_complete(&history(7)).is_ok());
        assert!(ensure_complete(&history(8)).is_ok());
    }
}
