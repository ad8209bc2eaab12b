//! Confidence badge and cited sources for AI answers.

#[cfg(test)]
#[path = "answer_test.rs"]
mod answer_test;

use leptos::prelude::*;
use records::{AiSource, ConfidenceLevel, confidence_percent};

/// CSS modifier for a confidence score.
pub fn confidence_class(confidence: f64) -> String {
    format!("confidence-badge confidence-badge--{}", ConfidenceLevel::from_score(confidence).as_str())
}

/// Badge text, e.g. `High confidence (86%)`.
pub fn confidence_text(confidence: f64) -> String {
    format!("{} ({}%)", ConfidenceLevel::from_score(confidence).label(), confidence_percent(confidence))
}

/// Shown under every Q&A answer.
pub const LEGAL_DISCLAIMER: &str =
    "This is informational. Consult the official Bulletin Officiel or a licensed lawyer for legal advice.";

#[component]
pub fn LegalDisclaimer() -> impl IntoView {
    view! {
        <p class="legal-disclaimer">
            <strong>"Disclaimer: "</strong>
            {LEGAL_DISCLAIMER}
        </p>
    }
}

#[component]
pub fn ConfidenceBadge(confidence: f64) -> impl IntoView {
    view! { <span class=confidence_class(confidence)>{confidence_text(confidence)}</span> }
}

#[component]
pub fn SourceList(sources: Vec<AiSource>) -> impl IntoView {
    if sources.is_empty() {
        return ().into_any();
    }
    view! {
        <div class="source-list">
            <h4 class="source-list__title">"Sources"</h4>
            <ul>
                {sources
                    .into_iter()
                    .map(|source| {
                        let score = format!("{}% match", confidence_percent(source.match_score));
                        view! {
                            <li class="source-list__item">
                                <span class="source-list__citation">{source.citation()}</span>
                                <span class="source-list__score">{score}</span>
                                <p class="source-list__excerpt">{source.excerpt}</p>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
    .into_any()
}
