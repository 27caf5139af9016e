//! Typed props for every generative component.
//!
//! DESIGN
//! ======
//! The hosted assistant sends untyped JSON. Each component's props decode
//! into one of these structs exactly once, at [`super::Registry::resolve`],
//! and then pass [`Validate`] for the bounds serde cannot express (array
//! lengths). Enumerated value sets are serde enums, so an unknown variant
//! fails at decode time. Renderers receive only values that passed both.
//! Unknown JSON keys are ignored.

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "props_test.rs"]
mod props_test;

// =============================================================================
// ERRORS + VALIDATION
// =============================================================================

/// Why a component's props were rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PropsError {
    /// The JSON did not match the expected object shape.
    #[error("props shape mismatch: {0}")]
    Shape(String),

    /// An array field fell outside its inclusive length bounds.
    #[error("{field} must have {min}..={max} items, got {len}")]
    Length { field: &'static str, len: usize, min: usize, max: usize },
}

/// Bounds checks applied after a successful decode.
pub trait Validate {
    /// # Errors
    ///
    /// Returns [`PropsError::Length`] for the first array outside its bounds.
    fn validate(&self) -> Result<(), PropsError>;
}

fn check_len(field: &'static str, len: usize, min: usize, max: usize) -> Result<(), PropsError> {
    if (min..=max).contains(&len) {
        Ok(())
    } else {
        Err(PropsError::Length { field, len, min, max })
    }
}

// =============================================================================
// SERVICE CARD
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceCardProps {
    pub services: Vec<Service>,
    #[serde(default)]
    pub intro_text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: String,
    pub title: String,
    pub description: String,
    pub deliverables: Vec<String>,
    pub tags: Vec<String>,
    #[serde(default)]
    pub relevance_note: Option<String>,
}

impl Validate for ServiceCardProps {
    fn validate(&self) -> Result<(), PropsError> {
        check_len("services", self.services.len(), 1, 3)?;
        for service in &self.services {
            check_len("deliverables", service.deliverables.len(), 2, 5)?;
            check_len("tags", service.tags.len(), 1, 4)?;
        }
        Ok(())
    }
}

// =============================================================================
// ROI CALCULATOR
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectType {
    LlmApplication,
    ComputerVision,
    PredictiveAnalytics,
    AiInfrastructure,
    AiStrategy,
    Custom,
}

impl ProjectType {
    /// Human label: the wire slug with dashes turned into spaces.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::LlmApplication => "llm application",
            Self::ComputerVision => "computer vision",
            Self::PredictiveAnalytics => "predictive analytics",
            Self::AiInfrastructure => "ai infrastructure",
            Self::AiStrategy => "ai strategy",
            Self::Custom => "custom",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoiCalculatorProps {
    pub project_type: ProjectType,
    pub estimated_investment: InvestmentRange,
    pub projected_savings: ProjectedSavings,
    pub assumptions: Vec<String>,
    #[serde(default)]
    pub disclaimer: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InvestmentRange {
    pub low: f64,
    pub high: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectedSavings {
    pub annual: f64,
    pub time_to_value: String,
}

impl Validate for RoiCalculatorProps {
    fn validate(&self) -> Result<(), PropsError> {
        check_len("assumptions", self.assumptions.len(), 1, 4)
    }
}

// =============================================================================
// CASE STUDY VIEWER
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseStudyProps {
    pub studies: Vec<CaseStudy>,
    #[serde(default)]
    pub context_note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseStudy {
    pub category: String,
    pub title: String,
    pub description: String,
    pub metrics: Vec<Metric>,
    #[serde(default)]
    pub technologies: Option<Vec<String>>,
    #[serde(default)]
    pub duration: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metric {
    pub value: String,
    pub label: String,
}

impl Validate for CaseStudyProps {
    fn validate(&self) -> Result<(), PropsError> {
        check_len("studies", self.studies.len(), 1, 3)?;
        for study in &self.studies {
            check_len("metrics", study.metrics.len(), 1, 3)?;
        }
        Ok(())
    }
}

// =============================================================================
// CONTACT FORM
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Urgency {
    Exploratory,
    ActiveEvaluation,
    Urgent,
}

impl Urgency {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Exploratory => "exploratory",
            Self::ActiveEvaluation => "active evaluation",
            Self::Urgent => "urgent",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactFormProps {
    #[serde(default)]
    pub prefilled_name: Option<String>,
    #[serde(default)]
    pub prefilled_email: Option<String>,
    #[serde(default)]
    pub prefilled_company: Option<String>,
    pub prefilled_message: String,
    pub suggested_subject: String,
    #[serde(default)]
    pub urgency: Option<Urgency>,
}

impl Validate for ContactFormProps {
    fn validate(&self) -> Result<(), PropsError> {
        Ok(())
    }
}

// =============================================================================
// TIMELINE ESTIMATOR
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineProps {
    pub project_name: String,
    pub total_duration: String,
    pub phases: Vec<Phase>,
    #[serde(default)]
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Phase {
    pub name: String,
    pub duration: String,
    pub description: String,
    pub deliverables: Vec<String>,
    #[serde(default)]
    pub is_current: Option<bool>,
}

impl Validate for TimelineProps {
    fn validate(&self) -> Result<(), PropsError> {
        check_len("phases", self.phases.len(), 3, 6)?;
        for phase in &self.phases {
            check_len("deliverables", phase.deliverables.len(), 1, 3)?;
        }
        Ok(())
    }
}

// =============================================================================
// TECH STACK DISPLAY
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TechCategory {
    Model,
    Framework,
    Infrastructure,
    Database,
    Monitoring,
    Deployment,
    Security,
    DataPipeline,
}

impl TechCategory {
    /// Group heading shown above technologies of this category.
    #[must_use]
    pub fn heading(self) -> &'static str {
        match self {
            Self::Model => "Models",
            Self::Framework => "Frameworks",
            Self::Infrastructure => "Infrastructure",
            Self::Database => "Databases",
            Self::Monitoring => "Monitoring",
            Self::Deployment => "Deployment",
            Self::Security => "Security",
            Self::DataPipeline => "Data Pipeline",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TechStackProps {
    pub use_case: String,
    pub technologies: Vec<Technology>,
    #[serde(default)]
    pub architecture_note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Technology {
    pub name: String,
    pub category: TechCategory,
    pub rationale: String,
    #[serde(default)]
    pub alternatives: Option<Vec<String>>,
}

impl TechStackProps {
    /// Technologies grouped by category, groups ordered by first appearance.
    #[must_use]
    pub fn grouped(&self) -> Vec<(TechCategory, Vec<&Technology>)> {
        let mut groups: Vec<(TechCategory, Vec<&Technology>)> = Vec::new();
        for tech in &self.technologies {
            match groups.iter_mut().find(|(category, _)| *category == tech.category) {
                Some((_, members)) => members.push(tech),
                None => groups.push((tech.category, vec![tech])),
            }
        }
        groups
    }
}

impl Validate for TechStackProps {
    fn validate(&self) -> Result<(), PropsError> {
        check_len("technologies", self.technologies.len(), 3, 8)
    }
}

// =============================================================================
// CHART DISPLAY
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChartType {
    Bar,
    HorizontalBar,
    Line,
    Pie,
    Donut,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartProps {
    pub chart_type: ChartType,
    pub title: String,
    pub data: Vec<DataPoint>,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub value_prefix: Option<String>,
    #[serde(default)]
    pub value_suffix: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub label: String,
    pub value: f64,
    #[serde(default)]
    pub color: Option<String>,
}

impl Validate for ChartProps {
    fn validate(&self) -> Result<(), PropsError> {
        check_len("data", self.data.len(), 2, 12)
    }
}

// =============================================================================
// COMPARISON TABLE
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonProps {
    pub title: String,
    pub row_labels: Vec<String>,
    pub columns: Vec<ComparisonColumn>,
    #[serde(default)]
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonColumn {
    pub header: String,
    #[serde(default)]
    pub subheader: Option<String>,
    pub values: Vec<String>,
    #[serde(default)]
    pub highlighted: Option<bool>,
}

impl ComparisonColumn {
    #[must_use]
    pub fn is_highlighted(&self) -> bool {
        self.highlighted.unwrap_or(false)
    }
}

impl Validate for ComparisonProps {
    fn validate(&self) -> Result<(), PropsError> {
        check_len("rowLabels", self.row_labels.len(), 2, 10)?;
        check_len("columns", self.columns.len(), 2, 4)
    }
}

// =============================================================================
// STATS DASHBOARD
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    #[default]
    Neutral,
}

impl Trend {
    /// CSS modifier suffix for the change badge.
    #[must_use]
    pub fn modifier(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Neutral => "neutral",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsDashboardProps {
    pub title: String,
    pub stats: Vec<Stat>,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    pub label: String,
    pub value: String,
    #[serde(default)]
    pub change: Option<String>,
    #[serde(default)]
    pub trend: Option<Trend>,
    #[serde(default)]
    pub description: Option<String>,
}

impl Validate for StatsDashboardProps {
    fn validate(&self) -> Result<(), PropsError> {
        check_len("stats", self.stats.len(), 2, 8)
    }
}
