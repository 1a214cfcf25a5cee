use dioxus::prelude::*;

use crate::api::ApiCmd;
use crate::components::common::ScoreRing;
use crate::components::AppState;
use crate::quiz::{build_quiz, completion_commands, grade, QuizResult, QUIZ_LEN};
use crate::Route;

/// Quiz-taking flow. The source bank arrives via navigation state
/// (`AppState::active_quiz`); grading happens locally and a pass fires the
/// result write and the mail exactly once.
#[component]
pub fn ExamComponent() -> Element {
    let app_state = use_context::<AppState>();
    let cmd_tx = use_context::<tokio::sync::mpsc::UnboundedSender<ApiCmd>>();

    let mut current_idx = use_signal(|| 0usize);
    let mut answers = use_signal(|| vec![None::<u8>; QUIZ_LEN]);
    let mut result = use_signal(|| None::<QuizResult>);

    let source = app_state.active_quiz.read().clone();
    let Some(source) = source else {
        // Precondition violation: the page was reached without a quiz.
        return rsx! {
            div { class: "page-container py-8 animate-fade-in",
                div { class: "panel text-center",
                    div { class: "empty-state-icon", "📝" }
                    h2 { class: "panel-title mb-2", "No quiz selected" }
                    p { class: "text-secondary mb-4",
                        "This page needs a topic and its question bank. Open a course and start its quiz from there."
                    }
                    Link { to: Route::CoursesComponent {}, class: "btn btn-primary", "Browse courses" }
                }
            }
        };
    };

    let spec = match build_quiz(&source.topic, &source.bank) {
        Ok(spec) => spec,
        Err(e) => {
            return rsx! {
                div { class: "page-container py-8 animate-fade-in",
                    div { class: "panel text-center",
                        div { class: "empty-state-icon", "⚠️" }
                        h2 { class: "panel-title mb-2", "This quiz cannot be started" }
                        p { class: "text-secondary mb-4", "{e}" }
                        Link { to: Route::CoursesComponent {}, class: "btn btn-primary", "Back to courses" }
                    }
                }
            };
        }
    };

    let answer_key: Vec<u8> = spec.questions.iter().map(|q| q.correct_option).collect();
    let course_id = source.course_id.clone();
    let topic = source.topic.clone();
    let learner = source.learner.clone();
    let cmd_tx_submit = cmd_tx.clone();

    let on_submit = move |_| {
        let correct = {
            let given = answers.read();
            answer_key
                .iter()
                .zip(given.iter())
                .filter(|(key, answer)| **answer == Some(**key))
                .count() as u32
        };

        let graded = grade(correct);
        for cmd in completion_commands(&graded, &course_id, &topic, &learner) {
            if let Err(e) = cmd_tx_submit.send(cmd) {
                tracing::warn!(%e, "failed to queue quiz side effect");
            }
        }
        result.set(Some(graded));
    };

    // Retaking starts over from the same source bank.
    let on_retake = move |_| {
        answers.set(vec![None; QUIZ_LEN]);
        current_idx.set(0);
        result.set(None);
    };

    if let Some(res) = result() {
        let headline = if res.passed {
            "Congratulations!"
        } else {
            "Keep practicing!"
        };
        let detail = if res.passed {
            format!("You passed the {}.", spec.title)
        } else {
            "You need 50% to pass. Give it another try.".to_string()
        };

        return rsx! {
            div { class: "page-container py-8 animate-fade-in",
                div { class: "panel text-center quiz-panel",
                    div { class: "empty-state-icon", if res.passed { "🎉" } else { "📚" } }
                    h2 {
                        class: if res.passed { "result-title pass" } else { "result-title fail" },
                        "{headline}"
                    }
                    p { class: "text-secondary mb-6", "{detail}" }

                    div { class: "flex justify-center mb-6",
                        ScoreRing { percentage: res.percentage, passed: res.passed }
                    }

                    p { class: "text-secondary mb-6", "{res.correct} of {spec.question_count} answers correct" }

                    div { class: "flex gap-2 justify-center",
                        button { class: "btn btn-secondary", onclick: on_retake, "Retake Quiz" }
                        Link { to: Route::CoursesComponent {}, class: "btn btn-primary", "Back to courses" }
                    }
                }
            }
        };
    }

    let current = current_idx();
    let total = spec.question_count;
    let question = spec.questions[current].clone();
    let selected = answers.read().get(current).copied().flatten();
    let all_answered = answers.read().iter().all(|a| a.is_some());
    let is_first = current == 0;
    let is_last = current == total - 1;
    let progress = ((current + 1) * 100) / total;

    rsx! {
        div { class: "page-container py-8 animate-fade-in",
            div { class: "panel quiz-panel",
                div { class: "flex justify-between items-center mb-6",
                    div {
                        h2 { class: "panel-title", "{spec.title}" }
                        p { class: "text-secondary text-sm", "Question {current + 1} of {total}" }
                    }
                    span { class: "badge badge-primary", "{question.points} points" }
                }

                div { class: "progress-track mb-6",
                    div { class: "progress-fill", style: "width: {progress}%" }
                }

                h3 { class: "question-prompt mb-4", "{question.prompt}" }

                div { class: "option-list mb-6",
                    for (idx, option) in question.options.iter().enumerate() {
                        {
                            let option_number = (idx + 1) as u8;
                            let is_selected = selected == Some(option_number);
                            let option_text = option.clone();

                            rsx! {
                                button {
                                    key: "{idx}",
                                    class: if is_selected { "option-button selected" } else { "option-button" },
                                    onclick: move |_| {
                                        let mut given = answers.write();
                                        if current < given.len() {
                                            given[current] = Some(option_number);
                                        }
                                    },
                                    div { class: "flex items-center gap-3",
                                        div { class: if is_selected { "option-dot selected" } else { "option-dot" } }
                                        span { "{option_text}" }
                                    }
                                }
                            }
                        }
                    }
                }

                div { class: "flex justify-between gap-4",
                    if !is_first {
                        button {
                            class: "btn btn-secondary",
                            onclick: move |_| {
                                if current_idx() > 0 {
                                    current_idx.set(current_idx() - 1);
                                }
                            },
                            "← Previous"
                        }
                    } else {
                        div {}
                    }

                    if is_last {
                        button {
                            class: "btn btn-primary",
                            disabled: !all_answered,
                            onclick: on_submit,
                            if all_answered { "Submit Quiz ✓" } else { "Answer all questions" }
                        }
                    } else {
                        button {
                            class: "btn btn-primary",
                            onclick: move |_| {
                                if current_idx() < total - 1 {
                                    current_idx.set(current_idx() + 1);
                                }
                            },
                            "Next →"
                        }
                    }
                }
            }
        }
    }
}
