use clap::Parser;
use records::BudgetStatus;

use super::*;

fn item(id: i64, ministry: &str, amount: f64, category: &str, status: BudgetStatus) -> BudgetItem {
    BudgetItem {
        id,
        ministry: ministry.to_owned(),
        program: format!("Program {id}"),
        amount,
        year: 2024,
        category: category.to_owned(),
        status,
    }
}

#[test]
fn global_flags_and_defaults() {
    let cli = Cli::try_parse_from(["civic", "--base-url", "http://api.test/api/v1", "--token", "abc", "ping"]).unwrap();
    assert_eq!(cli.base_url, "http://api.test/api/v1");
    assert_eq!(cli.token.as_deref(), Some("abc"));
    assert!(matches!(cli.command, Command::Ping));
}

#[test]
fn institutions_filters_default_to_all() {
    let cli = Cli::try_parse_from(["civic", "institutions", "--search", "health"]).unwrap();
    let Command::Institutions { search, kind } = cli.command else {
        panic!("expected institutions");
    };
    assert_eq!(search, "health");
    assert_eq!(kind, records::ALL);
}

#[test]
fn ai_ask_joins_words_and_feedback_parses_type() {
    let cli = Cli::try_parse_from(["civic", "ai", "ask", "what", "is", "law", "12-2024?", "--chat"]).unwrap();
    let Command::Ai(AiCommand { command: AiSubcommand::Ask { question, chat } }) = cli.command else {
        panic!("expected ai ask");
    };
    assert_eq!(question.join(" "), "what is law 12-2024?");
    assert!(chat);

    let cli = Cli::try_parse_from(["civic", "ai", "feedback", "q-7", "not_useful"]).unwrap();
    let Command::Ai(AiCommand { command: AiSubcommand::Feedback { query_id, feedback } }) = cli.command else {
        panic!("expected ai feedback");
    };
    assert_eq!(query_id, "q-7");
    assert_eq!(feedback, FeedbackType::NotUseful);
}

#[test]
fn unknown_enum_values_are_rejected() {
    assert!(Cli::try_parse_from(["civic", "ai", "feedback", "q-7", "meh"]).is_err());
    assert!(Cli::try_parse_from(["civic", "reviews", "list", "--sort", "random"]).is_err());
    assert!(Cli::try_parse_from(["civic", "budget", "--year", "2024", "--sort", "size"]).is_err());
}

#[test]
fn reviews_create_defaults_to_service_category() {
    let cli = Cli::try_parse_from([
        "civic",
        "reviews",
        "create",
        "--institution",
        "Ministry of Health",
        "--rating",
        "4",
        "--title",
        "Quick",
        "--content",
        "Helpful staff",
    ])
    .unwrap();
    let Command::Reviews(ReviewsCommand { command: ReviewsSubcommand::Create { category, anonymous, .. } }) =
        cli.command
    else {
        panic!("expected reviews create");
    };
    assert_eq!(category, ReviewCategory::Service);
    assert!(!anonymous);
}

#[test]
fn budget_requires_year() {
    assert!(Cli::try_parse_from(["civic", "budget"]).is_err());
}

#[test]
fn budget_report_filters_sorts_and_summarizes() {
    let items = vec![
        item(1, "Ministry of Health", 100.0, "Infrastructure", BudgetStatus::Executed),
        item(2, "Ministry of Health", 300.0, "Technology", BudgetStatus::Approved),
        item(3, "Ministry of Interior", 50.0, "Technology", BudgetStatus::Pending),
    ];
    let report = budget_report(&items, "Ministry of Health", BudgetSort::AmountAsc).unwrap();

    let ids: Vec<i64> = report["items"].as_array().unwrap().iter().map(|i| i["id"].as_i64().unwrap()).collect();
    assert_eq!(ids, vec![1, 2]);
    assert_eq!(report["summary"]["total"], 400.0);
    assert_eq!(report["summary"]["executed"], 100.0);
    assert_eq!(report["summary"]["ministries"], 1);
    assert_eq!(report["summary"]["categories"][0]["category"], "Technology");
}
