//! JSON Schemas advertised to the hosted assistant, one per component.
//!
//! These mirror the typed props in [`super::props`]; the structs are the
//! source of truth for decoding, the schemas only steer generation.

use serde_json::{Value, json};

pub const SERVICE_CARD: &str = "Displays ES Consulting services relevant to the user query. Use when the user asks about what ES Consulting offers, specific AI capabilities, or how they can help with a particular problem.";
pub const ROI_CALCULATOR: &str = "Estimates return on investment for an AI project. Use when the user asks about costs, ROI, pricing, budgets, or the business case for AI.";
pub const CASE_STUDY_VIEWER: &str = "Displays case studies from ES Consulting past work. Use when the user asks for examples, proof, results, track record, or references.";
pub const CONTACT_FORM: &str = "A pre-filled contact form. Use when the user expresses interest in working together, wants to schedule a call, requests a proposal, or indicates intent to engage.";
pub const TIMELINE_ESTIMATOR: &str = "Visualizes an estimated project timeline with phases. Use when the user asks how long a project takes, what the phases are, or wants to understand the engagement process.";
pub const TECH_STACK_DISPLAY: &str = "Shows a recommended technology stack for an AI project. Use when the user asks about technologies, frameworks, models, infrastructure, or technical approach.";
pub const CHART_DISPLAY: &str = "Renders interactive charts and graphs: bar charts, horizontal bar charts, line charts, pie charts, and donut charts. Use this whenever the user asks for any kind of chart, graph, data visualization, visual comparison of numbers, trends, distributions, market data, statistics, benchmarks, or any request that would benefit from a visual data representation. Supports value prefixes ($) and suffixes (%, x, M). ALWAYS prefer rendering a chart over describing numbers in text.";
pub const COMPARISON_TABLE: &str = "Renders a side-by-side comparison table for evaluating options. Use when the user asks to compare technologies, vendors, approaches, frameworks, pricing tiers, service plans, pros/cons, or any scenario involving choosing between multiple options. Supports checkmarks, crosses, and highlighting a recommended column.";
pub const STATS_DASHBOARD: &str = "Renders a dashboard of key metrics with trend indicators. Use when the user asks for KPIs, performance metrics, statistics overview, market stats, industry benchmarks, adoption rates, or any collection of numbers that should be displayed as a clean dashboard with optional up/down trend arrows.";

fn strings(description: &str, min: Option<usize>, max: Option<usize>) -> Value {
    let mut schema = json!({
        "type": "array",
        "items": { "type": "string" },
        "description": description
    });
    if let Some(min) = min {
        schema["minItems"] = json!(min);
    }
    if let Some(max) = max {
        schema["maxItems"] = json!(max);
    }
    schema
}

fn text(description: &str) -> Value {
    json!({ "type": "string", "description": description })
}

#[must_use]
pub fn service_card() -> Value {
    json!({
        "type": "object",
        "properties": {
            "services": {
                "type": "array",
                "minItems": 1,
                "maxItems": 3,
                "description": "1-3 most relevant services",
                "items": {
                    "type": "object",
                    "properties": {
                        "id": text("Unique identifier, e.g. \"llm-genai\""),
                        "title": text("Service name, e.g. \"Foundation Models & GenAI\""),
                        "description": text("1-3 sentence description of what this service delivers"),
                        "deliverables": strings("Concrete deliverables", Some(2), Some(5)),
                        "tags": strings("Short technology/domain tags", Some(1), Some(4)),
                        "relevanceNote": text("Why this service is relevant to the user query")
                    },
                    "required": ["id", "title", "description", "deliverables", "tags"]
                }
            },
            "introText": text("Brief intro contextualizing the recommendations")
        },
        "required": ["services"]
    })
}

#[must_use]
pub fn roi_calculator() -> Value {
    json!({
        "type": "object",
        "properties": {
            "projectType": {
                "type": "string",
                "enum": [
                    "llm-application", "computer-vision", "predictive-analytics",
                    "ai-infrastructure", "ai-strategy", "custom"
                ],
                "description": "Type of AI project being estimated"
            },
            "estimatedInvestment": {
                "type": "object",
                "properties": {
                    "low": { "type": "number", "description": "Low-end investment estimate in USD" },
                    "high": { "type": "number", "description": "High-end investment estimate in USD" }
                },
                "required": ["low", "high"]
            },
            "projectedSavings": {
                "type": "object",
                "properties": {
                    "annual": { "type": "number", "description": "Projected annual savings or revenue impact in USD" },
                    "timeToValue": text("Estimated time to see returns, e.g. \"3-6 months\"")
                },
                "required": ["annual", "timeToValue"]
            },
            "assumptions": strings("Key assumptions behind the estimate", Some(1), Some(4)),
            "disclaimer": text("Brief disclaimer about estimates being illustrative")
        },
        "required": ["projectType", "estimatedInvestment", "projectedSavings", "assumptions"]
    })
}

#[must_use]
pub fn case_study() -> Value {
    json!({
        "type": "object",
        "properties": {
            "studies": {
                "type": "array",
                "minItems": 1,
                "maxItems": 3,
                "items": {
                    "type": "object",
                    "properties": {
                        "category": text("Industry or domain"),
                        "title": text("Project title"),
                        "description": text("2-4 sentence project summary"),
                        "metrics": {
                            "type": "array",
                            "minItems": 1,
                            "maxItems": 3,
                            "items": {
                                "type": "object",
                                "properties": {
                                    "value": text("The metric value, e.g. \"40x\" or \"$12M\""),
                                    "label": text("What the metric measures")
                                },
                                "required": ["value", "label"]
                            }
                        },
                        "technologies": strings("Key technologies used", None, None),
                        "duration": text("Project duration")
                    },
                    "required": ["category", "title", "description", "metrics"]
                }
            },
            "contextNote": text("Why these case studies are relevant")
        },
        "required": ["studies"]
    })
}

#[must_use]
pub fn contact_form() -> Value {
    json!({
        "type": "object",
        "properties": {
            "prefilledName": text("User name if mentioned in conversation"),
            "prefilledEmail": text("User email if mentioned"),
            "prefilledCompany": text("Company name if mentioned"),
            "prefilledMessage": text("Suggested message summarizing the discussion, written in first person"),
            "suggestedSubject": text("Concise subject line for the inquiry"),
            "urgency": {
                "type": "string",
                "enum": ["exploratory", "active-evaluation", "urgent"],
                "description": "Inferred urgency level"
            }
        },
        "required": ["prefilledMessage", "suggestedSubject"]
    })
}

#[must_use]
pub fn timeline() -> Value {
    json!({
        "type": "object",
        "properties": {
            "projectName": text("Name for the estimated project"),
            "totalDuration": text("Total estimated duration"),
            "phases": {
                "type": "array",
                "minItems": 3,
                "maxItems": 6,
                "items": {
                    "type": "object",
                    "properties": {
                        "name": text("Phase name, e.g. \"Discovery & Assessment\""),
                        "duration": text("Duration, e.g. \"2 weeks\""),
                        "description": text("What happens in this phase"),
                        "deliverables": strings("Phase deliverables", Some(1), Some(3)),
                        "isCurrent": { "type": "boolean", "description": "Highlight as the starting phase" }
                    },
                    "required": ["name", "duration", "description", "deliverables"]
                }
            },
            "note": text("Caveat about the timeline being an estimate")
        },
        "required": ["projectName", "totalDuration", "phases"]
    })
}

#[must_use]
pub fn tech_stack() -> Value {
    json!({
        "type": "object",
        "properties": {
            "useCase": text("The use case this stack is recommended for"),
            "technologies": {
                "type": "array",
                "minItems": 3,
                "maxItems": 8,
                "items": {
                    "type": "object",
                    "properties": {
                        "name": text("Technology name, e.g. \"LangChain\""),
                        "category": {
                            "type": "string",
                            "enum": [
                                "model", "framework", "infrastructure", "database",
                                "monitoring", "deployment", "security", "data-pipeline"
                            ]
                        },
                        "rationale": text("Why this technology is recommended"),
                        "alternatives": strings("Alternative options", None, None)
                    },
                    "required": ["name", "category", "rationale"]
                }
            },
            "architectureNote": text("How these technologies fit together")
        },
        "required": ["useCase", "technologies"]
    })
}

#[must_use]
pub fn chart() -> Value {
    json!({
        "type": "object",
        "properties": {
            "chartType": {
                "type": "string",
                "enum": ["bar", "horizontal-bar", "line", "pie", "donut"],
                "description": "Type of chart to render"
            },
            "title": text("Chart title"),
            "data": {
                "type": "array",
                "minItems": 2,
                "maxItems": 12,
                "description": "Data points to visualize",
                "items": {
                    "type": "object",
                    "properties": {
                        "label": text("Label for this data point"),
                        "value": { "type": "number", "description": "Numeric value" },
                        "color": text("Optional CSS color override")
                    },
                    "required": ["label", "value"]
                }
            },
            "subtitle": text("Optional subtitle or context"),
            "valuePrefix": text("Prefix for values, e.g. \"$\""),
            "valueSuffix": text("Suffix for values, e.g. \"%\", \"x\", \"M\""),
            "note": text("Optional footnote or source")
        },
        "required": ["chartType", "title", "data"]
    })
}

#[must_use]
pub fn comparison() -> Value {
    json!({
        "type": "object",
        "properties": {
            "title": text("Title for the comparison"),
            "rowLabels": strings("Row labels (feature names / criteria)", Some(2), Some(10)),
            "columns": {
                "type": "array",
                "minItems": 2,
                "maxItems": 4,
                "description": "Columns to compare (options)",
                "items": {
                    "type": "object",
                    "properties": {
                        "header": text("Column header / option name"),
                        "subheader": text("Subtitle like price or category"),
                        "values": strings("Values for each row, in order matching rowLabels", None, None),
                        "highlighted": { "type": "boolean", "description": "Whether this column is the recommended option" }
                    },
                    "required": ["header", "values"]
                }
            },
            "note": text("Optional conclusion or recommendation note")
        },
        "required": ["title", "rowLabels", "columns"]
    })
}

#[must_use]
pub fn stats_dashboard() -> Value {
    json!({
        "type": "object",
        "properties": {
            "title": text("Dashboard title"),
            "stats": {
                "type": "array",
                "minItems": 2,
                "maxItems": 8,
                "description": "Key metrics to display",
                "items": {
                    "type": "object",
                    "properties": {
                        "label": text("What this stat measures"),
                        "value": text("The display value, e.g. \"94%\", \"$2.4M\", \"3.2x\""),
                        "change": text("Change indicator, e.g. \"+12%\", \"-5%\""),
                        "trend": {
                            "type": "string",
                            "enum": ["up", "down", "neutral"],
                            "description": "Trend direction for color coding"
                        },
                        "description": text("Brief context for this stat")
                    },
                    "required": ["label", "value"]
                }
            },
            "subtitle": text("Context or time period"),
            "note": text("Optional footnote")
        },
        "required": ["title", "stats"]
    })
}
