mod api;

#[cfg(test)]
#[path = "main_test.rs"]
mod main_test;

use clap::{Args, Parser, Subcommand};
use records::budget::filter_and_sort;
use records::{
    AiAnswer, AiFeedbackRequest, AiQueryRequest, BudgetItem, BudgetQuery, BudgetSort, BudgetSummary, FeedbackType,
    Institution, InstitutionQuery, Law, LawQuery, LawSummary, LoginForm, NewReview, RegisterRequest, Review,
    ReviewCategory, ReviewQuery, ReviewSort, TokenResponse, ToQuery, endpoints,
};
use serde_json::{Value, json};

use crate::api::ApiClient;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned HTTP {status}: {detail}")]
    Status { status: u16, detail: String },
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error(transparent)]
    Records(#[from] records::RecordsError),
}

#[derive(Parser, Debug)]
#[command(name = "civic", about = "Civic transparency portal API CLI")]
struct Cli {
    #[arg(long, env = "CIVIC_API_URL", default_value = "http://127.0.0.1:8000/api/v1")]
    base_url: String,

    #[arg(long, env = "CIVIC_TOKEN")]
    token: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check that the backend answers.
    Ping,
    /// List government institutions.
    Institutions {
        #[arg(long, default_value = "")]
        search: String,
        #[arg(long = "type", default_value = records::ALL)]
        kind: String,
    },
    Laws(LawsCommand),
    Ai(AiCommand),
    Reviews(ReviewsCommand),
    /// List budget lines for a year and print their totals.
    Budget {
        #[arg(long)]
        year: i32,
        #[arg(long, default_value = records::ALL)]
        ministry: String,
        #[arg(long, default_value = "amount_desc", value_parser = parse_budget_sort)]
        sort: BudgetSort,
    },
    /// Exchange credentials for a bearer token.
    Login {
        email: String,
        #[arg(long, env = "CIVIC_PASSWORD")]
        password: String,
    },
    /// Create a citizen account.
    Register {
        email: String,
        #[arg(long, env = "CIVIC_PASSWORD")]
        password: String,
        #[arg(long = "name")]
        full_name: String,
        #[arg(long, default_value = "")]
        phone: String,
        #[arg(long, default_value = "")]
        address: String,
    },
}

#[derive(Args, Debug)]
struct LawsCommand {
    #[command(subcommand)]
    command: LawsSubcommand,
}

#[derive(Subcommand, Debug)]
enum LawsSubcommand {
    /// List laws; `--page` switches to the paginated search shape.
    List {
        #[arg(long, default_value = "")]
        q: String,
        #[arg(long, default_value = "")]
        from: String,
        #[arg(long, default_value = "")]
        to: String,
        #[arg(long, default_value = "")]
        category: String,
        #[arg(long, default_value = "")]
        ministry: String,
        #[arg(long)]
        page: Option<u32>,
        #[arg(long)]
        page_size: Option<u32>,
    },
    Categories,
}

#[derive(Args, Debug)]
struct AiCommand {
    #[command(subcommand)]
    command: AiSubcommand,
}

#[derive(Subcommand, Debug)]
enum AiSubcommand {
    /// Ask the legal assistant a question.
    Ask {
        #[arg(required = true, num_args = 1..)]
        question: Vec<String>,
        /// Use the chat request shape (more sources, with context).
        #[arg(long)]
        chat: bool,
    },
    /// Rate an answer by its query id.
    Feedback {
        query_id: String,
        #[arg(value_parser = parse_feedback)]
        feedback: FeedbackType,
    },
}

#[derive(Args, Debug)]
struct ReviewsCommand {
    #[command(subcommand)]
    command: ReviewsSubcommand,
}

#[derive(Subcommand, Debug)]
enum ReviewsSubcommand {
    List {
        #[arg(long, default_value = records::ALL)]
        institution: String,
        #[arg(long, default_value = records::ALL)]
        category: String,
        #[arg(long, default_value = "newest", value_parser = parse_review_sort)]
        sort: ReviewSort,
    },
    Create {
        #[arg(long)]
        institution: String,
        #[arg(long)]
        rating: u8,
        #[arg(long)]
        title: String,
        #[arg(long)]
        content: String,
        #[arg(long, default_value = "service", value_parser = parse_review_category)]
        category: ReviewCategory,
        #[arg(long)]
        official: Option<String>,
        #[arg(long)]
        anonymous: bool,
    },
}

fn parse_feedback(raw: &str) -> Result<FeedbackType, String> {
    FeedbackType::parse(raw).ok_or_else(|| format!("expected one of: useful, not_useful, incorrect (got {raw:?})"))
}

fn parse_review_sort(raw: &str) -> Result<ReviewSort, String> {
    ReviewSort::parse(raw).ok_or_else(|| format!("expected one of: newest, oldest, highest, lowest (got {raw:?})"))
}

fn parse_review_category(raw: &str) -> Result<ReviewCategory, String> {
    ReviewCategory::parse(raw)
        .ok_or_else(|| format!("expected one of: service, responsiveness, transparency, corruption (got {raw:?})"))
}

fn parse_budget_sort(raw: &str) -> Result<BudgetSort, String> {
    BudgetSort::parse(raw).ok_or_else(|| format!("expected one of: amount_desc, amount_asc, ministry_asc (got {raw:?})"))
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let api = ApiClient::new(&cli.base_url, cli.token);
    if let Err(e) = run(&api, cli.command).await {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

async fn run(api: &ApiClient, command: Command) -> Result<(), CliError> {
    match command {
        Command::Ping => run_ping(api).await,
        Command::Institutions { search, kind } => {
            let path = InstitutionQuery { search, kind }.to_query().append_to(endpoints::INSTITUTIONS);
            let items: Vec<Institution> = records::decode_list(api.get(&path).await?)?;
            print_json(&serde_json::to_value(items)?)
        }
        Command::Laws(laws) => run_laws(api, laws.command).await,
        Command::Ai(ai) => run_ai(api, ai.command).await,
        Command::Reviews(reviews) => run_reviews(api, reviews.command).await,
        Command::Budget { year, ministry, sort } => {
            let path = BudgetQuery { year, ministry: ministry.clone() }.to_query().append_to(endpoints::BUDGET_ITEMS);
            let items: Vec<BudgetItem> = records::decode_list(api.get(&path).await?)?;
            print_json(&budget_report(&items, &ministry, sort)?)
        }
        Command::Login { email, password } => {
            let form = LoginForm::new(&email, &password);
            let token: TokenResponse = serde_json::from_value(api.post_form(endpoints::CITIZEN_TOKEN, form.encode()).await?)?;
            print_json(&serde_json::to_value(token)?)
        }
        Command::Register { email, password, full_name, phone, address } => {
            let request = RegisterRequest::from_form(&email, &password, &full_name, &phone, &address);
            print_json(&api.post_json(endpoints::CITIZEN_REGISTER, &request).await?)
        }
    }
}

async fn run_ping(api: &ApiClient) -> Result<(), CliError> {
    api.get(endpoints::HEALTH).await?;
    println!("ok");
    Ok(())
}

async fn run_laws(api: &ApiClient, command: LawsSubcommand) -> Result<(), CliError> {
    match command {
        LawsSubcommand::List { q, from, to, category, ministry, page, page_size } => {
            let paged = page.is_some() || page_size.is_some();
            let query = LawQuery { q, from, to, category, ministry, page, page_size };
            let body = api.get(&query.to_query().append_to(endpoints::LAWS)).await?;
            if paged {
                let (items, total) = records::decode_page::<LawSummary>(body)?;
                print_json(&json!({ "items": items, "total": total }))
            } else {
                let items: Vec<Law> = records::decode_list(body)?;
                print_json(&serde_json::to_value(items)?)
            }
        }
        LawsSubcommand::Categories => {
            let categories: Vec<String> = records::decode_list(api.get(endpoints::LAW_CATEGORIES).await?)?;
            print_json(&serde_json::to_value(categories)?)
        }
    }
}

async fn run_ai(api: &ApiClient, command: AiSubcommand) -> Result<(), CliError> {
    match command {
        AiSubcommand::Ask { question, chat } => {
            let question = question.join(" ");
            let request = if chat { AiQueryRequest::chat(&question) } else { AiQueryRequest::legal_qa(&question) };
            let answer: AiAnswer = serde_json::from_value(api.post_json(endpoints::AI_QUERY, &request).await?)?;
            print_json(&serde_json::to_value(answer)?)
        }
        AiSubcommand::Feedback { query_id, feedback } => {
            let request = AiFeedbackRequest { query_id, feedback_type: feedback };
            print_json(&api.post_json(endpoints::AI_FEEDBACK, &request).await?)
        }
    }
}

async fn run_reviews(api: &ApiClient, command: ReviewsSubcommand) -> Result<(), CliError> {
    match command {
        ReviewsSubcommand::List { institution, category, sort } => {
            let path = ReviewQuery { institution, category, sort }.to_query().append_to(endpoints::REVIEWS);
            let items: Vec<Review> = records::decode_list(api.get(&path).await?)?;
            print_json(&serde_json::to_value(items)?)
        }
        ReviewsSubcommand::Create { institution, rating, title, content, category, official, anonymous } => {
            let review = NewReview {
                institution,
                official_name: official.filter(|o| !o.trim().is_empty()),
                rating,
                title,
                content,
                category,
                is_anonymous: anonymous,
            };
            review.validate()?;
            print_json(&api.post_json(endpoints::REVIEWS, &review).await?)
        }
    }
}

/// Filtered, sorted budget rows plus their summary.
fn budget_report(items: &[BudgetItem], ministry: &str, sort: BudgetSort) -> Result<Value, CliError> {
    let rows = filter_and_sort(items, ministry, sort);
    let summary = BudgetSummary::from_items(&rows);
    let categories: Vec<Value> = summary
        .categories
        .iter()
        .map(|c| json!({ "category": c.category, "amount": c.amount, "share": c.share }))
        .collect();
    Ok(json!({
        "items": serde_json::to_value(&rows)?,
        "summary": {
            "total": summary.total,
            "executed": summary.executed,
            "pending": summary.pending,
            "ministries": summary.ministries,
            "execution_rate": summary.execution_rate(),
            "categories": categories,
        },
    }))
}

fn print_json(value: &Value) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
