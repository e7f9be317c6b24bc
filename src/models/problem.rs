use std::ops::Index;
use std::slice;

use serde::Deserialize;

/// One question and its expected answer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Problem {
    pub question: String,
    pub answer: String,
}

impl Problem {
    /// Builds a problem, trimming whitespace around the expected answer.
    pub fn new(question: impl Into<String>, answer: &str) -> Self {
        Self {
            question: question.into(),
            answer: answer.trim().to_string(),
        }
    }

    /// Exact, case-sensitive comparison after trimming the reply.
    pub fn is_answered_by(&self, reply: &str) -> bool {
        reply.trim() == self.answer
    }
}

/// Ordered, read-only list of problems.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProblemSet {
    problems: Vec<Problem>,
}

impl ProblemSet {
    pub fn new(problems: Vec<Problem>) -> Self {
        Self { problems }
    }

    pub fn len(&self) -> usize {
        self.problems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.problems.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Problem> {
        self.problems.get(index)
    }

    pub fn iter(&self) -> slice::Iter<'_, Problem> {
        self.problems.iter()
    }
}

impl Index<usize> for ProblemSet {
    type Output = Problem;

    fn index(&self, index: usize) -> &Self::Output {
        &self.problems[index]
    }
}

impl<'a> IntoIterator for &'a ProblemSet {
    type Item = &'a Problem;
    type IntoIter = slice::Iter<'a, Problem>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Problem> for ProblemSet {
    fn from_iter<I: IntoIterator<Item = Problem>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_answer_is_trimmed_on_construction() {
        let problem = Problem::new("5+5", "  10 \t");
        assert_eq!(problem.answer, "10");
    }

    #[test]
    fn test_is_answered_by() {
        let problem = Problem::new("5+5", "10");
        assert!(problem.is_answered_by("10"));
        assert!(problem.is_answered_by("  10 "));
        assert!(problem.is_answered_by("10\n"));
        assert!(!problem.is_answered_by("1 0"));
        assert!(!problem.is_answered_by(""));
    }

    #[test]
    fn test_is_answered_by_is_case_sensitive() {
        let problem = Problem::new("capital of France?", "Paris");
        assert!(problem.is_answered_by("Paris"));
        assert!(!problem.is_answered_by("paris"));
        assert!(!problem.is_answered_by("PARIS"));
    }

    #[test]
    fn test_problem_set_preserves_order() {
        let set: ProblemSet = vec![Problem::new("a", "1"), Problem::new("b", "2")]
            .into_iter()
            .collect();
        assert_eq!(set.len(), 2);
        assert_eq!(set[0].question, "a");
        assert_eq!(set.get(1).map(|p| p.answer.as_str()), Some("2"));
        assert!(set.get(2).is_none());
    }
}
