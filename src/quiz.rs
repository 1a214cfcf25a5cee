//! Quiz grading core: turns a topic's question bank into a gradable quiz,
//! scores a finished attempt and yields the side effects a pass owes.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use thiserror::Error;

use crate::api::ApiCmd;

/// Every quiz is exactly this long, regardless of bank size.
pub const QUIZ_LEN: usize = 10;
pub const POINTS_PER_QUESTION: u32 = 10;
/// Highest correct count that still fails. The boundary is strictly
/// greater-than: 4/10 (40%) fails even though the learner-facing copy
/// says 50%.
pub const PASS_FLOOR: u32 = 4;

/// One entry of the source question bank: a prompt, four options and the
/// letter of the correct one.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BankQuestion {
    pub question: String,
    pub options: [String; 4],
    pub answer: char,
}

/// Nested question bank keyed by topic group. Group order matters (only
/// the first group feeds a quiz), so deserialization preserves document
/// order instead of going through a sorted map.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct QuestionBank {
    groups: Vec<(String, Vec<BankQuestion>)>,
}

impl QuestionBank {
    pub fn new(groups: Vec<(String, Vec<BankQuestion>)>) -> Self {
        Self { groups }
    }

    pub fn first_group(&self) -> Option<(&str, &[BankQuestion])> {
        self.groups
            .first()
            .map(|(key, questions)| (key.as_str(), questions.as_slice()))
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl<'de> Deserialize<'de> for QuestionBank {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct BankVisitor;

        impl<'de> Visitor<'de> for BankVisitor {
            type Value = QuestionBank;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of topic groups to question lists")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut groups = Vec::new();
                while let Some((key, questions)) = map.next_entry::<String, Vec<BankQuestion>>()? {
                    groups.push((key, questions));
                }
                Ok(QuestionBank { groups })
            }
        }

        deserializer.deserialize_map(BankVisitor)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    #[error("question bank has no topic groups")]
    EmptyBank,

    #[error("topic group {group:?} has {found} questions, a quiz needs {needed}")]
    NotEnoughQuestions {
        group: String,
        found: usize,
        needed: usize,
    },

    #[error("question {index} has an unknown answer key {letter:?}")]
    InvalidAnswerKey { index: usize, letter: char },
}

/// Flat, gradable quiz derived from the first bank group.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizSpec {
    pub title: String,
    pub question_count: usize,
    pub questions: Vec<QuizQuestion>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuizQuestion {
    pub prompt: String,
    pub options: [String; 4],
    /// 1-based index of the correct option.
    pub correct_option: u8,
    pub points: u32,
}

/// A..D map to option indexes 1..4. Anything else violates the bank
/// contract and is rejected rather than mapped.
pub fn answer_index(letter: char) -> Option<u8> {
    match letter {
        'A' => Some(1),
        'B' => Some(2),
        'C' => Some(3),
        'D' => Some(4),
        _ => None,
    }
}

pub fn build_quiz(topic: &str, bank: &QuestionBank) -> Result<QuizSpec, QuizError> {
    let (group, questions) = bank.first_group().ok_or(QuizError::EmptyBank)?;
    if questions.len() < QUIZ_LEN {
        return Err(QuizError::NotEnoughQuestions {
            group: group.to_string(),
            found: questions.len(),
            needed: QUIZ_LEN,
        });
    }

    let questions = questions
        .iter()
        .take(QUIZ_LEN)
        .enumerate()
        .map(|(index, q)| {
            let correct_option = answer_index(q.answer).ok_or(QuizError::InvalidAnswerKey {
                index,
                letter: q.answer,
            })?;
            Ok(QuizQuestion {
                prompt: q.question.clone(),
                options: q.options.clone(),
                correct_option,
                points: POINTS_PER_QUESTION,
            })
        })
        .collect::<Result<Vec<_>, QuizError>>()?;

    Ok(QuizSpec {
        title: format!("{topic} Quiz"),
        question_count: QUIZ_LEN,
        questions,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizResult {
    pub correct: u32,
    pub percentage: u32,
    pub passed: bool,
}

/// Score a finished attempt from its correct-answer count. Counts above
/// [`QUIZ_LEN`] clamp so the function stays total.
pub fn grade(correct_count: u32) -> QuizResult {
    let correct = correct_count.min(QUIZ_LEN as u32);
    QuizResult {
        correct,
        percentage: correct * POINTS_PER_QUESTION,
        passed: correct > PASS_FLOOR,
    }
}

/// Who took the quiz, for the result mail.
#[derive(Debug, Clone, PartialEq)]
pub struct Learner {
    pub name: String,
    pub email: String,
}

/// Everything the exam page needs, handed over via navigation state.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizSource {
    pub topic: String,
    pub course_id: String,
    pub bank: QuestionBank,
    pub learner: Learner,
}

/// The backend calls a graded attempt owes: one result write and one mail
/// on pass, nothing on fail. Unpassed attempts are never recorded.
pub fn completion_commands(
    result: &QuizResult,
    course_id: &str,
    topic: &str,
    learner: &Learner,
) -> Vec<ApiCmd> {
    if !result.passed {
        return Vec::new();
    }
    vec![
        ApiCmd::RecordQuizResult {
            course_id: course_id.to_string(),
            marks: result.percentage.to_string(),
        },
        ApiCmd::SendResultMail {
            email: learner.email.clone(),
            subjects: format!("{topic} Quiz result"),
            html: pass_mail_html(&learner.name, topic, result.percentage),
        },
    ]
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Pre-rendered notification document for `/api/sendexammail`.
pub fn pass_mail_html(name: &str, topic: &str, percentage: u32) -> String {
    let mut html = String::new();
    html.push_str(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head><meta charset=\"utf-8\"></head>\n<body>\n",
    );
    html.push_str(&format!(
        "<h2>Congratulations, {}!</h2>\n",
        html_escape(name)
    ));
    html.push_str(&format!(
        "<p>You passed the {} quiz with a score of {}%.</p>\n",
        html_escape(topic),
        percentage
    ));
    html.push_str(
        "<p>Keep up the momentum. Your next course is waiting for you on CourseForge.</p>\n",
    );
    html.push_str("</body>\n</html>\n");
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bank_question(n: usize, answer: char) -> BankQuestion {
        BankQuestion {
            question: format!("Question {n}"),
            options: [
                format!("{n}-a"),
                format!("{n}-b"),
                format!("{n}-c"),
                format!("{n}-d"),
            ],
            answer,
        }
    }

    fn ten_question_bank(topic_group: &str) -> QuestionBank {
        let questions = (0..10).map(|n| bank_question(n, 'A')).collect();
        QuestionBank::new(vec![(topic_group.to_string(), questions)])
    }

    #[test]
    fn bank_deserialization_preserves_group_order() {
        let json = r#"{
            "set-b": [],
            "set-a": []
        }"#;
        let bank: QuestionBank = serde_json::from_str(json).unwrap();
        assert_eq!(bank.first_group().unwrap().0, "set-b");
    }

    #[test]
    fn bank_questions_deserialize_from_backend_json() {
        let json = r#"{
            "group-1": [
                {
                    "question": "2 + 2?",
                    "options": ["3", "4", "5", "6"],
                    "answer": "B"
                }
            ]
        }"#;
        let bank: QuestionBank = serde_json::from_str(json).unwrap();
        let (_, questions) = bank.first_group().unwrap();
        assert_eq!(questions[0].answer, 'B');
    }

    #[test]
    fn answer_letters_map_to_one_based_indexes() {
        assert_eq!(answer_index('A'), Some(1));
        assert_eq!(answer_index('B'), Some(2));
        assert_eq!(answer_index('C'), Some(3));
        assert_eq!(answer_index('D'), Some(4));
        assert_eq!(answer_index('E'), None);
        assert_eq!(answer_index('a'), None);
    }

    #[test]
    fn ten_question_bank_builds_a_full_spec() {
        let spec = build_quiz("Algebra", &ten_question_bank("week-1")).unwrap();
        assert_eq!(spec.title, "Algebra Quiz");
        assert_eq!(spec.question_count, 10);
        assert_eq!(spec.questions.len(), 10);
        for q in &spec.questions {
            assert_eq!(q.options.len(), 4);
            assert_eq!(q.points, 10);
            assert_eq!(q.correct_option, 1);
        }
    }

    #[test]
    fn only_the_first_group_feeds_the_quiz() {
        let first: Vec<_> = (0..10).map(|n| bank_question(n, 'C')).collect();
        let second: Vec<_> = (0..10).map(|n| bank_question(n + 100, 'A')).collect();
        let bank = QuestionBank::new(vec![
            ("basics".to_string(), first),
            ("advanced".to_string(), second),
        ]);

        let spec = build_quiz("Algebra", &bank).unwrap();
        assert!(spec.questions.iter().all(|q| q.correct_option == 3));
        assert_eq!(spec.questions[0].prompt, "Question 0");
    }

    #[test]
    fn oversized_groups_are_cut_to_ten() {
        let questions = (0..14).map(|n| bank_question(n, 'D')).collect();
        let bank = QuestionBank::new(vec![("big".to_string(), questions)]);
        let spec = build_quiz("Algebra", &bank).unwrap();
        assert_eq!(spec.questions.len(), 10);
        assert_eq!(spec.questions.last().unwrap().prompt, "Question 9");
    }

    #[test]
    fn short_and_empty_banks_are_rejected() {
        assert_eq!(
            build_quiz("Algebra", &QuestionBank::default()),
            Err(QuizError::EmptyBank)
        );

        let questions = (0..7).map(|n| bank_question(n, 'A')).collect();
        let bank = QuestionBank::new(vec![("short".to_string(), questions)]);
        assert_eq!(
            build_quiz("Algebra", &bank),
            Err(QuizError::NotEnoughQuestions {
                group: "short".to_string(),
                found: 7,
                needed: 10,
            })
        );
    }

    #[test]
    fn unknown_answer_keys_are_contract_violations() {
        let mut questions: Vec<_> = (0..10).map(|n| bank_question(n, 'A')).collect();
        questions[6].answer = 'E';
        let bank = QuestionBank::new(vec![("week-1".to_string(), questions)]);
        assert_eq!(
            build_quiz("Algebra", &bank),
            Err(QuizError::InvalidAnswerKey {
                index: 6,
                letter: 'E',
            })
        );
    }

    #[test]
    fn pass_boundary_is_strictly_greater_than_four() {
        let four = grade(4);
        assert_eq!(four.percentage, 40);
        assert!(!four.passed);

        let five = grade(5);
        assert_eq!(five.percentage, 50);
        assert!(five.passed);

        let ten = grade(10);
        assert_eq!(ten.percentage, 100);
        assert!(ten.passed);
    }

    #[test]
    fn percentage_is_total_over_the_whole_range() {
        for correct in 0..=10 {
            assert_eq!(grade(correct).percentage, correct * 10);
        }
        // Out-of-range counts clamp instead of overflowing the scale.
        assert_eq!(grade(37).percentage, 100);
    }

    fn learner() -> Learner {
        Learner {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
        }
    }

    #[test]
    fn passing_owes_one_result_write_and_one_mail() {
        let cmds = completion_commands(&grade(6), "course-9", "Algebra", &learner());
        assert_eq!(cmds.len(), 2);
        assert_eq!(
            cmds[0],
            ApiCmd::RecordQuizResult {
                course_id: "course-9".to_string(),
                marks: "60".to_string(),
            }
        );
        match &cmds[1] {
            ApiCmd::SendResultMail {
                email,
                subjects,
                html,
            } => {
                assert_eq!(email, "ada@example.com");
                assert_eq!(subjects, "Algebra Quiz result");
                assert!(html.contains("Ada Lovelace"));
                assert!(html.contains("60%"));
            }
            other => panic!("expected SendResultMail, got {other:?}"),
        }
    }

    #[test]
    fn failing_owes_nothing() {
        let cmds = completion_commands(&grade(3), "course-9", "Algebra", &learner());
        assert!(cmds.is_empty());
    }

    #[test]
    fn mail_html_escapes_learner_input() {
        let html = pass_mail_html("<script>alert(1)</script>", "Algebra", 50);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
