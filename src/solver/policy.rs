use crate::prelude::*;

/// Iteration caps for the solving phases. Every adaptive phase stops after its
/// cap whether or not it converged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttemptPolicy {
    /// Placement attempts per white cross edge.
    pub cross_attempts: usize,
    /// Attempts per white corner slot.
    pub corner_attempts: usize,
    /// Insertions applied to a located corner before looking again.
    pub corner_insertions: usize,
    /// Sweeps of the top layer while inserting middle edges.
    pub middle_sweeps: usize,
    pub yellow_cross_attempts: usize,
    /// Sweeps of the top layer while twisting yellow corners.
    pub orientation_sweeps: usize,
    /// Orientation triggers per corner visit.
    pub orientation_triggers: usize,
}

impl Default for AttemptPolicy {
    fn default() -> Self {
        AttemptPolicy {
            cross_attempts: 12,
            corner_attempts: 18,
            corner_insertions: 3,
            middle_sweeps: 4,
            yellow_cross_attempts: 4,
            orientation_sweeps: 6,
            orientation_triggers: 3,
        }
    }
}

impl AttemptPolicy {
    pub fn uniform(attempts: usize) -> Self {
        AttemptPolicy {
            cross_attempts: attempts,
            corner_attempts: attempts,
            corner_insertions: attempts,
            middle_sweeps: attempts,
            yellow_cross_attempts: attempts,
            orientation_sweeps: attempts,
            orientation_triggers: attempts,
        }
    }

    /// Most moves a full solve can emit under this policy.
    pub fn move_ceiling(&self) -> usize {
        enum_iterator::all::<Phase>()
            .map(|phase| phase.max_moves(self))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_ceiling() {
        assert_eq!(AttemptPolicy::default().move_ceiling(), 1_816);
    }

    #[test]
    fn zero_policy_leaves_fixed_phases() {
        // Cross alignment, corner positioning and the final edge algorithms.
        assert_eq!(AttemptPolicy::uniform(0).move_ceiling(), 3 + 8 + 21);
    }

    #[test]
    fn ceiling_grows_with_attempts() {
        assert!(
            AttemptPolicy::uniform(2).move_ceiling() < AttemptPolicy::uniform(3).move_ceiling()
        );
    }
}
