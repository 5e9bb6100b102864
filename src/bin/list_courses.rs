//! Dev utility: fetch and print one page of the course catalog.
//!
//! Reads `LEARNHUB_BASE_URL` (or `learnhub.yaml`) and prints the first
//! page together with the pagination labels a screen would render.

use std::sync::Arc;

use dotenvy::dotenv;
use learnhub_client::client::http::{HttpClient, HttpResource};
use learnhub_client::controller::{ListController, ViewState};
use learnhub_client::domain::course::Course;
use learnhub_client::models::config::ClientConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    env_logger::init();

    let config = ClientConfig::load()?;
    let page_size = config.page_size;

    let http = Arc::new(HttpClient::new(&config)?);
    let fetcher: HttpResource<Course> = HttpResource::new(http);
    let controller = ListController::new(fetcher).with_page_size(page_size);

    controller.refresh().await;
    let snapshot = controller.snapshot();

    match snapshot.view_state() {
        ViewState::Error => {
            if let Some(err) = &snapshot.error {
                eprintln!("failed to load courses: {err}");
            }
            std::process::exit(1);
        }
        ViewState::Empty => println!("no courses yet"),
        _ => {
            let data = snapshot.data.as_ref().ok_or("missing page data")?;
            println!(
                "page {}/{} ({} courses total)",
                data.current_page, data.total_pages, data.total_records
            );
            for course in &data.items {
                println!("  #{} {}", course.id, course.title);
            }
            let labels: Vec<String> = snapshot
                .page_labels()
                .iter()
                .map(|label| match label {
                    Some(page) => page.to_string(),
                    None => "...".to_string(),
                })
                .collect();
            if !labels.is_empty() {
                println!("pages: {}", labels.join(" "));
            }
        }
    }

    Ok(())
}
