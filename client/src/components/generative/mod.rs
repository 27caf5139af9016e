//! Renderers for the components the hosted assistant can place in a reply.
//!
//! SYSTEM CONTEXT
//! ==============
//! `Registry::resolve` has already decoded and validated the props by the
//! time anything here runs, so each renderer takes its typed props by value
//! and never re-checks shape. [`render_component`] is the single dispatch
//! point from a resolved `ComponentProps` to its view.

pub mod case_study;
pub mod chart;
pub mod comparison;
pub mod contact_form;
pub mod roi_calculator;
pub mod service_card;
pub mod stats_dashboard;
pub mod tech_stack;
pub mod timeline;

use leptos::prelude::*;

use crate::registry::ComponentProps;

use case_study::CaseStudyViewer;
use chart::ChartDisplay;
use comparison::ComparisonTable;
use contact_form::ContactForm;
use roi_calculator::RoiCalculator;
use service_card::ServiceCard;
use stats_dashboard::StatsDashboard;
use tech_stack::TechStackDisplay;
use timeline::TimelineEstimator;

/// Render one resolved component reference.
pub fn render_component(props: ComponentProps) -> AnyView {
    match props {
        ComponentProps::ServiceCard(data) => view! { <ServiceCard data=data/> }.into_any(),
        ComponentProps::RoiCalculator(data) => view! { <RoiCalculator data=data/> }.into_any(),
        ComponentProps::CaseStudyViewer(data) => view! { <CaseStudyViewer data=data/> }.into_any(),
        ComponentProps::ContactForm(data) => view! { <ContactForm data=data/> }.into_any(),
        ComponentProps::TimelineEstimator(data) => view! { <TimelineEstimator data=data/> }.into_any(),
        ComponentProps::TechStackDisplay(data) => view! { <TechStackDisplay data=data/> }.into_any(),
        ComponentProps::ChartDisplay(data) => view! { <ChartDisplay data=data/> }.into_any(),
        ComponentProps::ComparisonTable(data) => view! { <ComparisonTable data=data/> }.into_any(),
        ComponentProps::StatsDashboard(data) => view! { <StatsDashboard data=data/> }.into_any(),
    }
}
