mod common;

use common::MockServer;
use modpack_finder::api::modpackindex::ModpackIndexClient;
use modpack_finder::api::CatalogSource;
use modpack_finder::commands::list::fetch_modpacks;
use modpack_finder::models::config::ModId;
use modpack_finder::utils::errors::FinderError;
use modpack_finder::utils::Logger;

#[test]
fn test_fetch_all_pages() {
    let server = MockServer::with_page_sizes(vec![100, 100, 37]);
    let client = ModpackIndexClient::new_with_base_url(&server.base_url).unwrap();

    let modpacks =
        fetch_modpacks(&client, &ModId::from(238222), None, &Logger::default()).unwrap();

    assert_eq!(modpacks.len(), 237);
    assert_eq!(
        server.requests(),
        vec![
            "/api/v1/mod/238222/modpacks?limit=100&page=1",
            "/api/v1/mod/238222/modpacks?limit=100&page=2",
            "/api/v1/mod/238222/modpacks?limit=100&page=3",
            "/api/v1/mod/238222/modpacks?limit=100&page=4",
        ]
    );
    assert_eq!(
        modpacks.records()[236].field_text("name").unwrap(),
        "Pack 3-36"
    );
}

#[test]
fn test_fetch_sorted_by_download_count() {
    let server = MockServer::with_page_sizes(vec![3, 2]);
    let client = ModpackIndexClient::new_with_base_url(&server.base_url).unwrap();

    let modpacks = fetch_modpacks(
        &client,
        &ModId::from(1),
        Some("download_count"),
        &Logger::default(),
    )
    .unwrap();

    let names: Vec<String> = modpacks
        .records()
        .iter()
        .map(|r| r.field_text("name").unwrap())
        .collect();
    assert_eq!(names, vec!["Pack 1-2", "Pack 1-1", "Pack 2-1", "Pack 1-0", "Pack 2-0"]);
}

#[test]
fn test_error_status() {
    let server = MockServer::start(|_| (404, r#"{"message": "Not Found"}"#.to_string()));
    let client = ModpackIndexClient::new_with_base_url(&server.base_url).unwrap();

    let err = client.fetch_page(&ModId::from(1), 1).unwrap_err();

    assert!(matches!(
        err.downcast_ref::<FinderError>(),
        Some(FinderError::CatalogApiError(_))
    ));
}

#[test]
fn test_missing_data_key() {
    let server = MockServer::start(|_| (200, r#"{"meta": {"current_page": 1}}"#.to_string()));
    let client = ModpackIndexClient::new_with_base_url(&server.base_url).unwrap();

    let err = fetch_modpacks(&client, &ModId::from(1), None, &Logger::default()).unwrap_err();

    assert!(format!("{:?}", err).contains("Failed to parse modpacks page 1"));
    assert_eq!(server.requests().len(), 1);
}

#[test]
fn test_malformed_json() {
    let server = MockServer::start(|_| (200, "<html>maintenance</html>".to_string()));
    let client = ModpackIndexClient::new_with_base_url(&server.base_url).unwrap();

    assert!(client.fetch_page(&ModId::from(1), 1).is_err());
}

#[test]
fn test_connection_refused() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);
    let client = ModpackIndexClient::new_with_base_url(&base_url).unwrap();

    let err = client.fetch_page(&ModId::from(1), 1).unwrap_err();

    assert!(format!("{:?}", err).contains("Failed to send request"));
}
