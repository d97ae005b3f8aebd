use portfolio_di::{provider, Provides};
use portfolio_extern_contracts::sheets::{SheetsApiService, SheetsTarget};
use portfolio_extern_impl::sheets::{SheetsApiServiceConfig, SheetsApiServiceImpl};
use portfolio_testing::sheets::{AppendedRow, SheetsTestServer};
use pretty_assertions::assert_eq;

const API_KEY: &str = "test-api-key";

#[tokio::test]
async fn append_row() {
    // Arrange
    let (sut, server) = make_sut().await;
    let target = make_target(API_KEY);
    let values = vec![
        "Max Mustermann".to_owned(),
        "max.mustermann@example.de".to_owned(),
        "Hello, I would like to get in touch!".to_owned(),
        "2024-03-01T09:30:00+00:00".to_owned(),
    ];

    // Act
    let result = sut.append_row(&target, &values).await;

    // Assert
    result.unwrap();
    assert_eq!(
        server.rows(),
        [AppendedRow {
            spreadsheet_id: "portfolio-contacts".into(),
            range: "Sheet1!A:D".into(),
            values,
        }]
    );
}

#[tokio::test]
async fn append_multiple_rows() {
    // Arrange
    let (sut, server) = make_sut().await;
    let target = make_target(API_KEY);

    // Act
    sut.append_row(&target, &["first".into()]).await.unwrap();
    sut.append_row(&target, &["second".into()]).await.unwrap();

    // Assert
    let rows = server
        .rows()
        .into_iter()
        .map(|row| row.values)
        .collect::<Vec<_>>();
    assert_eq!(rows, [vec!["first".to_owned()], vec!["second".to_owned()]]);
}

#[tokio::test]
async fn invalid_api_key() {
    // Arrange
    let (sut, server) = make_sut().await;
    let target = make_target("wrong-api-key");

    // Act
    let result = sut.append_row(&target, &["value".into()]).await;

    // Assert
    let err = result.unwrap_err();
    assert!(!format!("{err:?}").contains("wrong-api-key"));
    assert!(server.rows().is_empty());
}

async fn make_sut() -> (SheetsApiServiceImpl, SheetsTestServer) {
    let server = portfolio_testing::sheets::spawn(API_KEY).await.unwrap();

    provider! {
        Provider { sheets_api_service_config: SheetsApiServiceConfig, }
    }

    let mut provider = Provider {
        _cache: Default::default(),
        sheets_api_service_config: SheetsApiServiceConfig::new(Some(server.endpoint())),
    };

    (provider.provide(), server)
}

fn make_target(api_key: &str) -> SheetsTarget {
    SheetsTarget {
        spreadsheet_id: "portfolio-contacts".into(),
        range: "Sheet1!A:D".into(),
        api_key: api_key.into(),
    }
}
