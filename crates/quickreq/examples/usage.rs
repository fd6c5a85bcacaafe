//! Walk through every verb helper against a public JSON placeholder API
//!
//! Run with `RUST_LOG=quickreq=debug` to see request tracing.

use quickreq::{Body, Headers, HttpResult, ResponseEnvelope};
use serde_json::json;
use tracing_subscriber::EnvFilter;

const BASE_URL: &str = "https://jsonplaceholder.typicode.com";

fn report(label: &str, result: HttpResult<ResponseEnvelope>) {
    match result {
        Ok(response) => {
            println!("=== {} ===", label);
            println!("Status: {}", response.status);
            println!("Body: {}", response.text);
        }
        Err(e) => eprintln!("{} failed: {}", label, e),
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let post_url = format!("{}/posts/1", BASE_URL);

    report("GET", quickreq::get(&post_url, None).await);

    let new_post = json!({
        "title": "A title",
        "body": "Some content",
        "userId": 1,
    });
    report(
        "POST",
        quickreq::post(
            &format!("{}/posts", BASE_URL),
            Some(Body::from(new_post)),
            None,
        )
        .await,
    );

    let updated_post = json!({
        "id": 1,
        "title": "An updated title",
        "body": "Updated content",
        "userId": 1,
    });
    report(
        "PUT",
        quickreq::put(&post_url, Some(Body::from(updated_post)), None).await,
    );

    report(
        "PATCH",
        quickreq::patch(&post_url, Some(Body::from(json!({"title": "Patched"}))), None).await,
    );

    report("DELETE", quickreq::delete(&post_url, None).await);

    report("HEAD", quickreq::head(&post_url, None).await);

    let headers = Headers::from([
        ("User-Agent".to_string(), "Custom-Client/1.0".to_string()),
        (
            "Authorization".to_string(),
            "Bearer your-token-here".to_string(),
        ),
    ]);
    report(
        "GET with custom headers",
        quickreq::get("https://httpbin.org/headers", Some(&headers)).await,
    );
}
