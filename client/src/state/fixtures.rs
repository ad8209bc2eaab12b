//! Static records shown when a live request fails.

#[cfg(test)]
#[path = "fixtures_test.rs"]
mod fixtures_test;

use records::{
    AiAnswer, AiSource, Article, BudgetItem, BudgetStatus, Institution, Law, LawSummary, Review, ReviewCategory,
    ReviewStatus,
};

const STAMP: &str = "2024-01-01T00:00:00Z";

fn institution(id: i64, code: &str, name: &str, kind: &str, parent_id: Option<i64>, description: &str) -> Institution {
    Institution {
        id,
        code: code.to_owned(),
        name: name.to_owned(),
        kind: kind.to_owned(),
        parent_id,
        description: Some(description.to_owned()),
        address: Some("Rabat 10000, Morocco".to_owned()),
        phone: None,
        email: None,
        website: None,
        created_at: STAMP.to_owned(),
        updated_at: STAMP.to_owned(),
    }
}

pub fn institutions() -> Vec<Institution> {
    vec![
        institution(1, "MIN-HEALTH-001", "Ministry of Health", "Ministry", None, "Public health policy and healthcare services."),
        institution(2, "MIN-EDU-001", "Ministry of National Education", "Ministry", None, "Primary, secondary and higher education."),
        institution(3, "MIN-INT-001", "Ministry of Interior", "Ministry", None, "Internal security and local administration."),
        institution(4, "MIN-FIN-001", "Ministry of Economy and Finance", "Ministry", None, "National economy and public finances."),
        institution(5, "AGY-DIGITAL-001", "Digital Development Agency", "Agency", Some(4), "Digital transformation and e-government."),
        institution(6, "DEPT-ADMIN-001", "Administrative Reform Department", "Department", Some(3), "Public administration modernization."),
    ]
}

pub fn laws() -> Vec<Law> {
    vec![
        Law {
            law_id: 1,
            law_number: "12-2024".to_owned(),
            title: "Digital Government Services Act".to_owned(),
            effective_date: "2024-03-01".to_owned(),
            issue_date: "2024-01-15".to_owned(),
            source_url: None,
            articles: vec![
                Article {
                    article_id: 1,
                    article_number: "1".to_owned(),
                    content: "This law aims to modernize government services through digital transformation.".to_owned(),
                    law_id: 1,
                },
                Article {
                    article_id: 2,
                    article_number: "2".to_owned(),
                    content: "Public administrations shall offer online access to their services.".to_owned(),
                    law_id: 1,
                },
            ],
        },
        Law {
            law_id: 2,
            law_number: "31-2013".to_owned(),
            title: "Right of Access to Information".to_owned(),
            effective_date: "2018-03-12".to_owned(),
            issue_date: "2018-02-22".to_owned(),
            source_url: None,
            articles: vec![Article {
                article_id: 3,
                article_number: "1".to_owned(),
                content: "Citizens have the right to access information held by public administrations.".to_owned(),
                law_id: 2,
            }],
        },
    ]
}

/// Search rows derived from [`laws`].
pub fn law_summaries() -> Vec<LawSummary> {
    laws()
        .into_iter()
        .map(|law| LawSummary {
            law_id: law.law_id,
            law_number: law.law_number,
            title: law.title,
            publication_date: Some(law.issue_date),
            effective_date: Some(law.effective_date),
            category: None,
            pdf_url: None,
        })
        .collect()
}

#[allow(clippy::too_many_arguments)]
fn review(
    id: i64,
    institution: &str,
    official_name: Option<&str>,
    rating: u8,
    title: &str,
    content: &str,
    category: ReviewCategory,
    status: ReviewStatus,
    user_name: Option<&str>,
) -> Review {
    Review {
        id,
        institution: institution.to_owned(),
        official_name: official_name.map(str::to_owned),
        rating,
        title: title.to_owned(),
        content: content.to_owned(),
        category,
        status,
        is_anonymous: user_name.is_none(),
        user_name: user_name.map(str::to_owned),
        created_at: STAMP.to_owned(),
    }
}

pub fn reviews() -> Vec<Review> {
    vec![
        review(
            1,
            "Ministry of Health",
            Some("Dr. Ahmed Benali"),
            4,
            "Excellent Healthcare Services",
            "The new digital health platform is very user-friendly and efficient.",
            ReviewCategory::Service,
            ReviewStatus::Approved,
            Some("Fatima Alami"),
        ),
        review(
            2,
            "Ministry of Interior",
            None,
            2,
            "Slow document processing",
            "Renewing my national ID card took several weeks.",
            ReviewCategory::Responsiveness,
            ReviewStatus::Approved,
            None,
        ),
        review(
            3,
            "Ministry of Economy and Finance",
            None,
            5,
            "Clear budget publications",
            "Budget documents are published on time and are easy to read.",
            ReviewCategory::Transparency,
            ReviewStatus::Approved,
            Some("Youssef Idrissi"),
        ),
        review(
            4,
            "Ministry of National Education",
            None,
            3,
            "Mixed experience",
            "Registration went well but nobody answered my follow-up questions.",
            ReviewCategory::Service,
            ReviewStatus::Pending,
            Some("Khadija Bennani"),
        ),
    ]
}

fn budget_item(id: i64, ministry: &str, program: &str, amount: f64, category: &str, status: BudgetStatus) -> BudgetItem {
    BudgetItem {
        id,
        ministry: ministry.to_owned(),
        program: program.to_owned(),
        amount,
        year: 2024,
        category: category.to_owned(),
        status,
    }
}

pub fn budget_items() -> Vec<BudgetItem> {
    vec![
        budget_item(1, "Ministry of Health", "Public Health Infrastructure", 2_500_000_000.0, "Infrastructure", BudgetStatus::Executed),
        budget_item(2, "Ministry of National Education", "School Modernization", 1_800_000_000.0, "Education", BudgetStatus::Approved),
        budget_item(3, "Ministry of Interior", "Digital Identity Systems", 1_200_000_000.0, "Technology", BudgetStatus::Pending),
        budget_item(4, "Ministry of Economy and Finance", "Tax Administration Digitalization", 800_000_000.0, "Technology", BudgetStatus::Executed),
        budget_item(5, "Digital Development Agency", "E-Government Platform", 1_500_000_000.0, "Technology", BudgetStatus::Approved),
    ]
}

/// Canned answer used by the Q&A page when the assistant is unreachable.
pub fn ai_fallback_answer() -> AiAnswer {
    AiAnswer {
        answer_text: "I apologize, but I'm currently unable to access the legal database. However, I can provide \
                      general information about Moroccan law. For specific legal advice, please consult the official \
                      Bulletin Officiel or a licensed attorney."
            .to_owned(),
        confidence: 0.3,
        sources: vec![AiSource {
            law_id: 1,
            article_id: Some(1),
            law_number: Some("12-2024".to_owned()),
            article_number: Some("1".to_owned()),
            excerpt: "This law aims to modernize government services through digital transformation.".to_owned(),
            match_score: 0.8,
        }],
        query_id: None,
    }
}

/// Assistant reply appended by the chat page when a question fails.
pub const CHAT_APOLOGY: &str =
    "I apologize, but I encountered an error while processing your question. Please try again.";
