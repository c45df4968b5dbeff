use crate::Client;

use std::time::Duration;

fn client(base_url: &str) -> Client {
    Client::new(base_url, Duration::from_secs(30)).unwrap()
}

#[test]
fn test_base_url_trailing_slash_trimmed() {
    let client = client("http://localhost:8052/");
    assert_eq!(client.base_url, "http://localhost:8052");
}

#[test]
fn test_base_url_no_trailing_slash() {
    let client = client("http://localhost:8052");
    assert_eq!(client.base_url, "http://localhost:8052");
}
