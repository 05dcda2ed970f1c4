//! Score/winner consistency rule applied to every match result before it is persisted.

use std::cmp::Ordering;

use crate::dto::matches::UpdateMatchRequest;

/// Borrowed view of a result submission, as seen by a [`ScoreConsistencyRule`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultSubmission<'a> {
    /// Code of the match.
    pub code: i64,
    /// First team.
    pub team_a: &'a str,
    /// Goals of the first team.
    pub score_team_a: u32,
    /// Second team.
    pub team_b: &'a str,
    /// Goals of the second team.
    pub score_team_b: u32,
    /// Declared winner label.
    pub winner: &'a str,
}

impl<'a> From<&'a UpdateMatchRequest> for ResultSubmission<'a> {
    fn from(request: &'a UpdateMatchRequest) -> Self {
        Self {
            code: request.code,
            team_a: &request.team_a,
            score_team_a: request.score_team_a,
            team_b: &request.team_b,
            score_team_b: request.score_team_b,
            winner: &request.winner,
        }
    }
}

/// Decides whether a declared winner agrees with the submitted scores.
///
/// Implementations must be pure: no I/O, no hidden state, and invalid combinations yield
/// `false` rather than an error.
pub trait ScoreConsistencyRule: Send + Sync {
    /// Whether the declared winner is the one implied by the scores.
    fn is_consistent(&self, submission: &ResultSubmission<'_>) -> bool;
}

/// Outcome implied by a score pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The first team scored more.
    TeamA,
    /// The second team scored more.
    TeamB,
    /// Both teams scored the same.
    Draw,
}

impl Outcome {
    /// Outcome implied by the two scores.
    pub fn from_scores(score_team_a: u32, score_team_b: u32) -> Self {
        match score_team_a.cmp(&score_team_b) {
            Ordering::Greater => Outcome::TeamA,
            Ordering::Less => Outcome::TeamB,
            Ordering::Equal => Outcome::Draw,
        }
    }
}

/// Standard rule: the strictly higher score wins, equal scores (0–0 included) are a draw.
#[derive(Debug, Clone)]
pub struct CountScore {
    draw_label: String,
}

impl CountScore {
    /// Rule accepting `draw_label` for equal scores.
    pub fn new(draw_label: impl Into<String>) -> Self {
        Self {
            draw_label: draw_label.into(),
        }
    }

    /// The only winner label accepted for `submission`'s scores.
    pub fn expected_winner<'a>(&'a self, submission: &ResultSubmission<'a>) -> &'a str {
        match Outcome::from_scores(submission.score_team_a, submission.score_team_b) {
            Outcome::TeamA => submission.team_a,
            Outcome::TeamB => submission.team_b,
            Outcome::Draw => &self.draw_label,
        }
    }
}

impl ScoreConsistencyRule for CountScore {
    fn is_consistent(&self, submission: &ResultSubmission<'_>) -> bool {
        submission.winner == self.expected_winner(submission)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(score_team_a: u32, score_team_b: u32, winner: &str) -> ResultSubmission<'_> {
        ResultSubmission {
            code: 2,
            team_a: "A",
            score_team_a,
            team_b: "B",
            score_team_b,
            winner,
        }
    }

    fn rule() -> CountScore {
        CountScore::new("draw")
    }

    #[test]
    fn higher_score_of_team_a_requires_team_a() {
        for (a, b) in [(1, 0), (5, 4), (10, 0)] {
            assert!(rule().is_consistent(&submission(a, b, "A")));
            assert!(!rule().is_consistent(&submission(a, b, "B")));
            assert!(!rule().is_consistent(&submission(a, b, "draw")));
        }
    }

    #[test]
    fn higher_score_of_team_b_requires_team_b() {
        assert!(rule().is_consistent(&submission(1, 2, "B")));
        assert!(!rule().is_consistent(&submission(1, 2, "A")));
        assert!(!rule().is_consistent(&submission(1, 2, "draw")));
    }

    #[test]
    fn equal_scores_require_the_draw_label() {
        for score in [0, 1, 3] {
            assert!(rule().is_consistent(&submission(score, score, "draw")));
            assert!(!rule().is_consistent(&submission(score, score, "A")));
            assert!(!rule().is_consistent(&submission(score, score, "B")));
        }
    }

    #[test]
    fn unknown_winner_is_never_consistent() {
        assert!(!rule().is_consistent(&submission(2, 1, "C")));
        assert!(!rule().is_consistent(&submission(1, 1, "undecided")));
    }

    #[test]
    fn winner_must_match_the_team_name_exactly() {
        assert!(!rule().is_consistent(&submission(2, 1, " A ")));
        assert!(!rule().is_consistent(&submission(1, 1, "draw ")));
    }

    #[test]
    fn draw_label_is_configurable() {
        let rule = CountScore::new("empate");
        assert!(rule.is_consistent(&submission(2, 2, "empate")));
        assert!(!rule.is_consistent(&submission(2, 2, "draw")));
    }

    #[test]
    fn repeated_evaluation_gives_the_same_answer() {
        let rule = rule();
        let input = submission(3, 1, "A");
        let first = rule.is_consistent(&input);
        assert!((0..10).all(|_| rule.is_consistent(&input) == first));
    }

    #[test]
    fn outcome_follows_score_ordering() {
        assert_eq!(Outcome::from_scores(2, 1), Outcome::TeamA);
        assert_eq!(Outcome::from_scores(0, 3), Outcome::TeamB);
        assert_eq!(Outcome::from_scores(0, 0), Outcome::Draw);
    }
}
