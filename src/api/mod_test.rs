use std::net::IpAddr;

use super::{ApiError, Config, Views, run};
use crate::db::{Database, SqliteDatabase};

#[test]
fn test_config_default_binds_localhost() {
    let config = Config::default();
    assert_eq!(config.host, IpAddr::from([127, 0, 0, 1]));
    assert_eq!(config.port, 5000);
}

#[test]
fn test_embedded_templates_compile() {
    assert!(Views::load().is_ok());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_run_reports_bind_failure() {
    // Occupy a port so the server cannot bind it
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();

    let db = SqliteDatabase::in_memory().await.unwrap();
    db.ensure_schema().await.unwrap();

    let result = run(
        Config {
            host: IpAddr::from([127, 0, 0, 1]),
            port,
        },
        db,
    )
    .await;

    assert!(matches!(result, Err(ApiError::Bind { .. })));
}
