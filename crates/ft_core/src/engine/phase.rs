/// Where a match is in its lifecycle.
///
/// Regulation runs `FirstHalf` → `HalfTimeBreak` → `SecondHalf`. A level
/// score after regulation detours through `TiedAfterRegulation` into two
/// overtime periods. `Finished` and `TechnicalDefeat` are terminal: a
/// terminal match never plays another minute, whatever is asked of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchPhase {
    NotStarted,
    FirstHalf,
    HalfTimeBreak,
    SecondHalf,
    TiedAfterRegulation,
    Overtime1,
    OvertimeBreak,
    Overtime2,
    Finished,
    TechnicalDefeat,
}

impl MatchPhase {
    pub fn is_terminal(&self) -> bool {
        matches!(self, MatchPhase::Finished | MatchPhase::TechnicalDefeat)
    }

    /// True while minutes are actually being played.
    pub fn is_live(&self) -> bool {
        matches!(
            self,
            MatchPhase::FirstHalf
                | MatchPhase::SecondHalf
                | MatchPhase::Overtime1
                | MatchPhase::Overtime2
        )
    }

    pub fn is_break(&self) -> bool {
        matches!(
            self,
            MatchPhase::HalfTimeBreak | MatchPhase::TiedAfterRegulation | MatchPhase::OvertimeBreak
        )
    }

    pub fn is_overtime(&self) -> bool {
        matches!(
            self,
            MatchPhase::Overtime1 | MatchPhase::OvertimeBreak | MatchPhase::Overtime2
        )
    }

    pub fn label(&self) -> &'static str {
        match self {
            MatchPhase::NotStarted => "not started",
            MatchPhase::FirstHalf => "first half",
            MatchPhase::HalfTimeBreak => "half-time break",
            MatchPhase::SecondHalf => "second half",
            MatchPhase::TiedAfterRegulation => "tied after regulation",
            MatchPhase::Overtime1 => "first overtime",
            MatchPhase::OvertimeBreak => "overtime break",
            MatchPhase::Overtime2 => "second overtime",
            MatchPhase::Finished => "finished",
            MatchPhase::TechnicalDefeat => "technical defeat",
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [MatchPhase; 10] = [
        MatchPhase::NotStarted,
        MatchPhase::FirstHalf,
        MatchPhase::HalfTimeBreak,
        MatchPhase::SecondHalf,
        MatchPhase::TiedAfterRegulation,
        MatchPhase::Overtime1,
        MatchPhase::OvertimeBreak,
        MatchPhase::Overtime2,
        MatchPhase::Finished,
        MatchPhase::TechnicalDefeat,
    ];

    #[test]
    fn every_phase_has_exactly_one_class() {
        for phase in ALL {
            let classes = [
                phase.is_live(),
                phase.is_break(),
                phase.is_terminal(),
                phase == MatchPhase::NotStarted,
            ];
            assert_eq!(
                classes.iter().filter(|c| **c).count(),
                1,
                "phase {:?} classified wrongly",
                phase
            );
        }
    }

    #[test]
    fn overtime_phases_are_flagged() {
        assert!(MatchPhase::Overtime1.is_overtime());
        assert!(MatchPhase::OvertimeBreak.is_overtime());
        assert!(MatchPhase::Overtime2.is_overtime());
        assert!(!MatchPhase::SecondHalf.is_overtime());
        assert!(!MatchPhase::TiedAfterRegulation.is_terminal());
    }
}
