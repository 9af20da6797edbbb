use app::app::App;
use app::config::DashboardConfig;
use app::rows::RowKind;
use app::view_state::LOAD_ERROR_MESSAGE;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Serves exactly one HTTP response and returns the url to request.
async fn serve_once(status_line: &'static str, body: String) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = Vec::new();
        let mut buffer = [0u8; 1024];
        while !request.windows(4).any(|window| window == b"\r\n\r\n") {
            let total = socket.read(&mut buffer).await.unwrap();
            if total == 0 {
                break;
            }
            request.extend_from_slice(&buffer[..total]);
        }
        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body,
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.unwrap();
    });
    format!("http://{}/shows", address)
}

fn local_app(shows_url: String) -> App {
    let config = DashboardConfig {
        shows_url,
        ..Default::default()
    };
    let client = reqwest::Client::builder().no_proxy().build().unwrap();
    App::with_client(config, client)
}

async fn run_load(shows_url: String) -> (App, bool) {
    let mut app = local_app(shows_url);
    let is_notified = Arc::new(AtomicBool::new(false));
    app.start_loading(&tokio::runtime::Handle::current(), {
        let is_notified = is_notified.clone();
        move || is_notified.store(true, Ordering::SeqCst)
    });

    let deadline = tokio::time::Instant::now() + tokio::time::Duration::from_secs(10);
    while !app.poll_load() {
        assert!(tokio::time::Instant::now() < deadline, "catalog load did not finish in time");
        tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;
    }
    // the callback runs right after the event is sent, give it a moment
    while !is_notified.load(Ordering::SeqCst) && tokio::time::Instant::now() < deadline {
        tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;
    }
    (app, is_notified.load(Ordering::SeqCst))
}

fn show_json(id: u32, rating: Option<f64>, genres: &[&str]) -> String {
    let rating = match rating {
        Some(rating) => rating.to_string(),
        None => "null".to_string(),
    };
    let genres: Vec<String> = genres.iter().map(|genre| format!("\"{}\"", genre)).collect();
    format!(
        r#"{{"id":{},"name":"Show {}","rating":{{"average":{}}},"genres":[{}],"premiered":"2014-0{}-01","image":null}}"#,
        id, id, rating, genres.join(","), 1 + id % 9,
    )
}

#[tokio::test(flavor = "multi_thread")]
async fn loads_and_truncates_catalog() {
    let shows: Vec<String> = (1..=100)
        .map(|id| match id % 3 {
            0 => show_json(id, Some(8.5), &["Drama"]),
            1 => show_json(id, Some(6.0), &["Science-Fiction"]),
            _ => show_json(id, None, &[]),
        })
        .collect();
    let url = serve_once("200 OK", format!("[{}]", shows.join(","))).await;

    let (app, is_notified) = run_load(url).await;
    assert!(is_notified);

    let catalog = app.get_state().catalog().expect("catalog should be ready");
    assert_eq!(catalog.shows().len(), 80);
    assert_eq!(catalog.row(RowKind::Trending).len(), 20);
    assert_eq!(catalog.row(RowKind::TopRated).len(), 20);
    assert!(catalog.row(RowKind::Drama).iter().all(|show| show.id % 3 == 0));
    assert!(catalog.row(RowKind::SciFi).iter().all(|show| show.id % 3 == 1));
    assert_eq!(catalog.hero().map(|hero| hero.id), Some(1));
}

#[tokio::test(flavor = "multi_thread")]
async fn empty_catalog_is_ready() {
    let url = serve_once("200 OK", "[]".to_string()).await;
    let (app, _) = run_load(url).await;
    let catalog = app.get_state().catalog().expect("catalog should be ready");
    assert!(catalog.hero().is_none());
    assert!(catalog.row(RowKind::Trending).is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn error_status_surfaces_error_state() {
    let body = r#"{"name":"Too Many Requests","message":"Rate limit exceeded","code":0,"status":429}"#;
    let url = serve_once("429 Too Many Requests", body.to_string()).await;
    let (app, is_notified) = run_load(url).await;
    assert!(is_notified);
    assert_eq!(app.get_state().error(), Some(LOAD_ERROR_MESSAGE));
}

#[tokio::test(flavor = "multi_thread")]
async fn malformed_body_surfaces_error_state() {
    let url = serve_once("200 OK", r#"{"unexpected": true}"#.to_string()).await;
    let (app, _) = run_load(url).await;
    assert_eq!(app.get_state().error(), Some(LOAD_ERROR_MESSAGE));
    assert!(app.get_state().catalog().is_none());
}

#[tokio::test(flavor = "multi_thread")]
async fn second_start_is_ignored() {
    let url = serve_once("200 OK", format!("[{}]", show_json(1, Some(9.0), &["Drama"]))).await;
    let mut app = local_app(url);
    let handle = tokio::runtime::Handle::current();
    app.start_loading(&handle, || {});
    // the responder only accepts one connection, a second fetch would never complete
    app.start_loading(&handle, || panic!("second load must not run"));

    let deadline = tokio::time::Instant::now() + tokio::time::Duration::from_secs(10);
    while !app.poll_load() {
        assert!(tokio::time::Instant::now() < deadline, "catalog load did not finish in time");
        tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;
    }
    assert_eq!(app.get_state().hero().map(|hero| hero.id), Some(1));
}
