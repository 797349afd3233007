use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::{PayrollError, PayrollResult};

use super::questions::{OPTIONS, QUESTIONS, question};

/// Readiness band for an average score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReadinessLabel {
    /// Band name.
    pub title: &'static str,
    /// One-line advice for the band.
    pub hint: &'static str,
}

/// The scored result of a set of answers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReadinessReport {
    /// Number of questions answered.
    pub answered: usize,
    /// Sum of the answered scores.
    pub total_score: u32,
    /// Mean answered score, 0 when nothing was answered.
    pub average: f64,
    /// Average mapped onto 0 to 100.
    pub percent: u32,
    /// Readiness band for the average.
    pub label: ReadinessLabel,
    /// Area of the lowest-scoring answered question.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lowest_area: Option<&'static str>,
}

/// Returns the readiness band for `average`.
pub fn readiness_label(average: f64) -> ReadinessLabel {
    if average >= 4.2 {
        ReadinessLabel {
            title: "Digitally Ready",
            hint: "You're running tight systems. Nice.",
        }
    } else if average >= 3.2 {
        ReadinessLabel {
            title: "Getting There",
            hint: "You've got momentum, with a few gaps to tighten.",
        }
    } else if average >= 2.2 {
        ReadinessLabel {
            title: "Needs Structure",
            hint: "You'll feel big wins by centralizing your workflows.",
        }
    } else {
        ReadinessLabel {
            title: "Early Stage",
            hint: "Start simple: one system at a time.",
        }
    }
}

/// Scores a map of question id to answer.
///
/// Unanswered questions are ignored. Ties for the lowest score go to the
/// question asked first.
///
/// # Errors
///
/// Returns [`PayrollError::UnknownQuestion`] for an id outside the quiz and
/// [`PayrollError::InvalidAnswer`] for a score outside 1 to 5.
///
/// # Example
///
/// ```
/// use std::collections::BTreeMap;
/// use prominent_payroll::quiz::score_answers;
///
/// let answers = BTreeMap::from([(1, 5), (2, 3), (7, 1)]);
/// let report = score_answers(&answers).unwrap();
///
/// assert_eq!(report.total_score, 9);
/// assert_eq!(report.percent, 50);
/// assert_eq!(report.lowest_area, Some("Payroll"));
/// ```
pub fn score_answers(answers: &BTreeMap<u32, u8>) -> PayrollResult<ReadinessReport> {
    let max_score = OPTIONS.iter().map(|o| o.score).max().unwrap_or(5);
    for (&question_id, &score) in answers {
        if question(question_id).is_none() {
            return Err(PayrollError::UnknownQuestion { question_id });
        }
        if !(1..=max_score).contains(&score) {
            return Err(PayrollError::InvalidAnswer { question_id, score });
        }
    }

    let mut answered = 0usize;
    let mut total_score = 0u32;
    let mut lowest: Option<(&'static str, u8)> = None;

    for q in &QUESTIONS {
        let Some(&score) = answers.get(&q.id) else {
            continue;
        };
        answered += 1;
        total_score += u32::from(score);
        if lowest.is_none_or(|(_, low)| score < low) {
            lowest = Some((q.area, score));
        }
    }

    let average = if answered == 0 {
        0.0
    } else {
        f64::from(total_score) / answered as f64
    };
    let percent = if answered == 0 {
        0
    } else {
        (((average - 1.0) / 4.0) * 100.0 + 0.5).floor() as u32
    };

    Ok(ReadinessReport {
        answered,
        total_score,
        average,
        percent,
        label: readiness_label(average),
        lowest_area: lowest.map(|(area, _)| area),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all(score: u8) -> BTreeMap<u32, u8> {
        QUESTIONS.iter().map(|q| (q.id, score)).collect()
    }

    #[test]
    fn test_nothing_answered() {
        let report = score_answers(&BTreeMap::new()).unwrap();
        assert_eq!(report.answered, 0);
        assert_eq!(report.total_score, 0);
        assert_eq!(report.average, 0.0);
        assert_eq!(report.percent, 0);
        assert_eq!(report.label.title, "Early Stage");
        assert_eq!(report.lowest_area, None);
    }

    #[test]
    fn test_all_top_scores() {
        let report = score_answers(&all(5)).unwrap();
        assert_eq!(report.answered, 8);
        assert_eq!(report.total_score, 40);
        assert_eq!(report.percent, 100);
        assert_eq!(report.label.title, "Digitally Ready");
        // Every score ties, so the first question wins.
        assert_eq!(report.lowest_area, Some("Files"));
    }

    #[test]
    fn test_all_bottom_scores() {
        let report = score_answers(&all(1)).unwrap();
        assert_eq!(report.percent, 0);
        assert_eq!(report.label.title, "Early Stage");
    }

    #[test]
    fn test_percent_rounds_half_up() {
        // Average 1.5 maps to 12.5%.
        let answers = BTreeMap::from([(1, 1), (2, 2)]);
        assert_eq!(score_answers(&answers).unwrap().percent, 13);

        // Average 2.5 maps to 37.5%.
        let answers = BTreeMap::from([(1, 2), (2, 3)]);
        assert_eq!(score_answers(&answers).unwrap().percent, 38);
    }

    #[test]
    fn test_label_thresholds() {
        assert_eq!(readiness_label(4.2).title, "Digitally Ready");
        assert_eq!(readiness_label(4.19).title, "Getting There");
        assert_eq!(readiness_label(3.2).title, "Getting There");
        assert_eq!(readiness_label(3.19).title, "Needs Structure");
        assert_eq!(readiness_label(2.2).title, "Needs Structure");
        assert_eq!(readiness_label(2.19).title, "Early Stage");
    }

    #[test]
    fn test_average_exactly_on_threshold() {
        // 4 + 4 + 4 + 4 + 5 = 21 over 5 answers.
        let answers = BTreeMap::from([(1, 4), (2, 4), (3, 4), (4, 4), (5, 5)]);
        let report = score_answers(&answers).unwrap();
        assert_eq!(report.average, 4.2);
        assert_eq!(report.label.title, "Digitally Ready");
        assert_eq!(report.percent, 80);
    }

    #[test]
    fn test_lowest_area_is_first_strictly_lowest() {
        let answers = BTreeMap::from([(2, 4), (4, 2), (6, 2), (8, 3)]);
        let report = score_answers(&answers).unwrap();
        assert_eq!(report.lowest_area, Some("Customers"));
    }

    #[test]
    fn test_unknown_question_is_rejected() {
        let answers = BTreeMap::from([(1, 3), (9, 3)]);
        assert!(matches!(
            score_answers(&answers),
            Err(PayrollError::UnknownQuestion { question_id: 9 })
        ));
    }

    #[test]
    fn test_out_of_range_score_is_rejected() {
        for bad in [0u8, 6, 255] {
            let answers = BTreeMap::from([(3, bad)]);
            assert!(matches!(
                score_answers(&answers),
                Err(PayrollError::InvalidAnswer { question_id: 3, score }) if score == bad
            ));
        }
    }

    #[test]
    fn test_report_serializes_without_missing_area() {
        let json = serde_json::to_value(score_answers(&BTreeMap::new()).unwrap()).unwrap();
        assert!(json.get("lowest_area").is_none());
        assert_eq!(json["label"]["title"], "Early Stage");
    }
}
