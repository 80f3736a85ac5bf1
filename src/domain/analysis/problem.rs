//! Decision problem - the validated input bundle for one calculation run.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{CriterionSpec, ValidationError};
use crate::domain::judgment::{JudgmentCube, JudgmentMatrix, MAX_DIMENSION};
use crate::domain::vocabulary::{
    default_alternative_vocabulary, default_criteria_vocabulary, TermVocabulary,
    DEFAULT_ALTERNATIVE_CODE, DEFAULT_CRITERIA_CODE,
};

/// Everything one calculation run consumes.
///
/// Rebuilt from the current configuration for each run and never mutated
/// mid-computation. Construction goes through [`DecisionProblem::builder`],
/// which resizes the judgment containers to the declared shape, so a
/// well-formed problem always carries complete matrices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionProblem {
    criteria: Vec<CriterionSpec>,
    alternative_labels: Vec<String>,
    expert_count: usize,
    criteria_vocabulary: TermVocabulary,
    alternative_vocabulary: TermVocabulary,
    criteria_judgments: JudgmentMatrix,
    alternative_judgments: JudgmentCube,
}

impl DecisionProblem {
    /// Creates a builder.
    pub fn builder() -> DecisionProblemBuilder {
        DecisionProblemBuilder::new()
    }

    /// Criterion specifications, one per column.
    pub fn criteria(&self) -> &[CriterionSpec] {
        &self.criteria
    }

    /// Alternative display labels.
    pub fn alternative_labels(&self) -> &[String] {
        &self.alternative_labels
    }

    /// Number of criteria.
    pub fn criterion_count(&self) -> usize {
        self.criteria.len()
    }

    /// Number of alternatives.
    pub fn alternative_count(&self) -> usize {
        self.alternative_labels.len()
    }

    /// Number of judging experts.
    pub fn expert_count(&self) -> usize {
        self.expert_count
    }

    /// Vocabulary for criterion importance judgments.
    pub fn criteria_vocabulary(&self) -> &TermVocabulary {
        &self.criteria_vocabulary
    }

    /// Vocabulary for alternative performance judgments.
    pub fn alternative_vocabulary(&self) -> &TermVocabulary {
        &self.alternative_vocabulary
    }

    /// Expert-by-criterion importance codes.
    pub fn criteria_judgments(&self) -> &JudgmentMatrix {
        &self.criteria_judgments
    }

    /// Expert-by-alternative-by-criterion performance codes.
    pub fn alternative_judgments(&self) -> &JudgmentCube {
        &self.alternative_judgments
    }
}

/// Builder for [`DecisionProblem`].
///
/// Vocabularies default to the built-in seven-term scales. Judgment
/// containers are resized to the declared shape on `build`, preserving
/// supplied cells and padding the rest with the default fill codes.
#[derive(Debug, Default)]
pub struct DecisionProblemBuilder {
    criteria: Vec<CriterionSpec>,
    alternative_labels: Vec<String>,
    expert_count: usize,
    criteria_vocabulary: Option<TermVocabulary>,
    alternative_vocabulary: Option<TermVocabulary>,
    criteria_judgments: Option<JudgmentMatrix>,
    alternative_judgments: Option<JudgmentCube>,
}

impl DecisionProblemBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the criterion specifications.
    pub fn criteria(mut self, criteria: Vec<CriterionSpec>) -> Self {
        self.criteria = criteria;
        self
    }

    /// Appends one criterion.
    pub fn criterion(mut self, spec: CriterionSpec) -> Self {
        self.criteria.push(spec);
        self
    }

    /// Sets the alternative labels.
    pub fn alternatives(mut self, labels: Vec<impl Into<String>>) -> Self {
        self.alternative_labels = labels.into_iter().map(|l| l.into()).collect();
        self
    }

    /// Sets the number of judging experts.
    pub fn experts(mut self, count: usize) -> Self {
        self.expert_count = count;
        self
    }

    /// Overrides the criterion importance vocabulary.
    pub fn criteria_vocabulary(mut self, vocabulary: TermVocabulary) -> Self {
        self.criteria_vocabulary = Some(vocabulary);
        self
    }

    /// Overrides the alternative performance vocabulary.
    pub fn alternative_vocabulary(mut self, vocabulary: TermVocabulary) -> Self {
        self.alternative_vocabulary = Some(vocabulary);
        self
    }

    /// Sets the criteria judgment matrix.
    pub fn criteria_judgments(mut self, judgments: JudgmentMatrix) -> Self {
        self.criteria_judgments = Some(judgments);
        self
    }

    /// Sets the alternative judgment cube.
    pub fn alternative_judgments(mut self, judgments: JudgmentCube) -> Self {
        self.alternative_judgments = Some(judgments);
        self
    }

    /// Builds the problem.
    ///
    /// # Errors
    /// Rejects dimension counts above [`MAX_DIMENSION`]. A zero count is
    /// allowed: the pipeline answers an incomplete setup with the neutral
    /// empty result instead of an error.
    pub fn build(self) -> Result<DecisionProblem, ValidationError> {
        Self::check_dimension("criteria", self.criteria.len())?;
        Self::check_dimension("alternatives", self.alternative_labels.len())?;
        Self::check_dimension("experts", self.expert_count)?;

        let experts = self.expert_count;
        let criterion_count = self.criteria.len();
        let alternative_count = self.alternative_labels.len();

        let criteria_judgments = self
            .criteria_judgments
            .unwrap_or_default()
            .resized(experts, criterion_count, DEFAULT_CRITERIA_CODE);
        let alternative_judgments = self.alternative_judgments.unwrap_or_default().resized(
            experts,
            alternative_count,
            criterion_count,
            DEFAULT_ALTERNATIVE_CODE,
        );

        Ok(DecisionProblem {
            criteria: self.criteria,
            alternative_labels: self.alternative_labels,
            expert_count: experts,
            criteria_vocabulary: self
                .criteria_vocabulary
                .unwrap_or_else(|| default_criteria_vocabulary().clone()),
            alternative_vocabulary: self
                .alternative_vocabulary
                .unwrap_or_else(|| default_alternative_vocabulary().clone()),
            criteria_judgments,
            alternative_judgments,
        })
    }

    fn check_dimension(field: &str, actual: usize) -> Result<(), ValidationError> {
        if actual > MAX_DIMENSION {
            return Err(ValidationError::out_of_range(field, 0, MAX_DIMENSION, actual));
        }
        Ok(())
    }
}
