//! Component registry: the fixed name → renderer + schema table.
//!
//! ARCHITECTURE
//! ============
//! The hosted assistant chooses a component by name and sends untyped props.
//! [`Registry::resolve`] is the single boundary where those props become a
//! typed [`ComponentProps`]: unknown names and props that fail decode or
//! bounds checks resolve to `None` and render nothing.
//!
//! The table is static. Nine descriptors, fixed order, unique names, no
//! runtime insertion.

pub mod props;
pub mod schemas;

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

use serde::de::DeserializeOwned;
use serde_json::Value;

use props::{
    CaseStudyProps, ChartProps, ComparisonProps, ContactFormProps, PropsError, RoiCalculatorProps,
    ServiceCardProps, StatsDashboardProps, TechStackProps, TimelineProps, Validate,
};

/// Decoded, validated props for one of the registered components.
#[derive(Debug, Clone, PartialEq)]
pub enum ComponentProps {
    ServiceCard(ServiceCardProps),
    RoiCalculator(RoiCalculatorProps),
    CaseStudyViewer(CaseStudyProps),
    ContactForm(ContactFormProps),
    TimelineEstimator(TimelineProps),
    TechStackDisplay(TechStackProps),
    ChartDisplay(ChartProps),
    ComparisonTable(ComparisonProps),
    StatsDashboard(StatsDashboardProps),
}

/// One registry entry.
#[derive(Clone, Copy)]
pub struct ComponentDescriptor {
    pub name: &'static str,
    /// Usage hint read by the hosted assistant.
    pub description: &'static str,
    pub schema: fn() -> Value,
    pub decode: fn(&Value) -> Result<ComponentProps, PropsError>,
}

impl std::fmt::Debug for ComponentDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComponentDescriptor").field("name", &self.name).finish_non_exhaustive()
    }
}

/// Decode `value` as `T` and run its bounds checks.
///
/// # Errors
///
/// Returns [`PropsError::Shape`] on a serde failure and
/// [`PropsError::Length`] when an array is out of bounds.
pub fn decode_props<T: DeserializeOwned + Validate>(value: &Value) -> Result<T, PropsError> {
    let props: T = serde_json::from_value(value.clone()).map_err(|e| PropsError::Shape(e.to_string()))?;
    props.validate()?;
    Ok(props)
}

static BUILTIN: [ComponentDescriptor; 9] = [
    ComponentDescriptor {
        name: "ServiceCard",
        description: schemas::SERVICE_CARD,
        schema: schemas::service_card,
        decode: |v| decode_props(v).map(ComponentProps::ServiceCard),
    },
    ComponentDescriptor {
        name: "ROICalculator",
        description: schemas::ROI_CALCULATOR,
        schema: schemas::roi_calculator,
        decode: |v| decode_props(v).map(ComponentProps::RoiCalculator),
    },
    ComponentDescriptor {
        name: "CaseStudyViewer",
        description: schemas::CASE_STUDY_VIEWER,
        schema: schemas::case_study,
        decode: |v| decode_props(v).map(ComponentProps::CaseStudyViewer),
    },
    ComponentDescriptor {
        name: "ContactForm",
        description: schemas::CONTACT_FORM,
        schema: schemas::contact_form,
        decode: |v| decode_props(v).map(ComponentProps::ContactForm),
    },
    ComponentDescriptor {
        name: "TimelineEstimator",
        description: schemas::TIMELINE_ESTIMATOR,
        schema: schemas::timeline,
        decode: |v| decode_props(v).map(ComponentProps::TimelineEstimator),
    },
    ComponentDescriptor {
        name: "TechStackDisplay",
        description: schemas::TECH_STACK_DISPLAY,
        schema: schemas::tech_stack,
        decode: |v| decode_props(v).map(ComponentProps::TechStackDisplay),
    },
    ComponentDescriptor {
        name: "ChartDisplay",
        description: schemas::CHART_DISPLAY,
        schema: schemas::chart,
        decode: |v| decode_props(v).map(ComponentProps::ChartDisplay),
    },
    ComponentDescriptor {
        name: "ComparisonTable",
        description: schemas::COMPARISON_TABLE,
        schema: schemas::comparison,
        decode: |v| decode_props(v).map(ComponentProps::ComparisonTable),
    },
    ComponentDescriptor {
        name: "StatsDashboard",
        description: schemas::STATS_DASHBOARD,
        schema: schemas::stats_dashboard,
        decode: |v| decode_props(v).map(ComponentProps::StatsDashboard),
    },
];

/// Read-only view over the built-in descriptor table.
#[derive(Debug, Clone, Copy)]
pub struct Registry {
    descriptors: &'static [ComponentDescriptor],
}

impl Default for Registry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Registry {
    #[must_use]
    pub fn builtin() -> Self {
        Self { descriptors: &BUILTIN }
    }

    #[must_use]
    pub fn descriptors(&self) -> &'static [ComponentDescriptor] {
        self.descriptors
    }

    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&'static ComponentDescriptor> {
        self.descriptors.iter().find(|d| d.name == name)
    }

    /// Resolve a component reference into typed props, or `None` when it
    /// must not render.
    #[must_use]
    pub fn resolve(&self, name: &str, props: &Value) -> Option<ComponentProps> {
        let Some(descriptor) = self.lookup(name) else {
            log::debug!("registry: unknown component {name}");
            return None;
        };
        match (descriptor.decode)(props) {
            Ok(resolved) => Some(resolved),
            Err(e) => {
                log::debug!("registry: {name} props rejected: {e}");
                None
            }
        }
    }
}
