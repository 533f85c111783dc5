use axum_test::TestServer;
use http::StatusCode;
use registry_api::{
    AppState,
    application::views::{PortfolioView, TenantView},
    create_app,
};
use serde_json::{Value, json};
use uuid::Uuid;

fn setup_test_app() -> TestServer {
    let app = create_app(AppState::in_memory());
    TestServer::new(app).expect("Failed to create TestServer")
}

async fn create_tenant(server: &TestServer, name: &str) -> Uuid {
    server
        .post("/api/tenants")
        .json(&json!({ "tenantName": name, "tenantCountry": "NO" }))
        .await
        .json::<TenantView>()
        .tenant_id
}

async fn create_portfolio(server: &TestServer, tenant_id: Uuid, name: &str) -> PortfolioView {
    let response = server
        .post(&format!("/api/tenants/{}/portfolios", tenant_id))
        .json(&json!({ "portfolioName": name }))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);
    response.json::<PortfolioView>()
}

#[tokio::test]
async fn test_create_and_list_portfolios() {
    let server = setup_test_app();
    let tenant_id = create_tenant(&server, "Acme").await;

    // Existing tenant without portfolios lists as empty, not 404
    let empty = server
        .get(&format!("/api/tenants/{}/portfolios", tenant_id))
        .await;
    assert_eq!(empty.status_code(), StatusCode::OK);
    assert!(empty.json::<Vec<PortfolioView>>().is_empty());

    let nordic = create_portfolio(&server, tenant_id, "Nordic").await;
    assert_eq!(nordic.tenant_id, tenant_id);
    assert_eq!(nordic.portfolio_name, "Nordic");

    let listed = server
        .get(&format!("/api/tenants/{}/portfolios", tenant_id))
        .await
        .json::<Vec<PortfolioView>>();
    assert_eq!(listed, vec![nordic]);
}

#[tokio::test]
async fn test_portfolios_are_listed_per_tenant() {
    let server = setup_test_app();
    let acme = create_tenant(&server, "Acme").await;
    let globex = create_tenant(&server, "Globex").await;

    create_portfolio(&server, acme, "Nordic").await;
    create_portfolio(&server, acme, "Baltic").await;
    let solar = create_portfolio(&server, globex, "Solar").await;

    let acme_list = server
        .get(&format!("/api/tenants/{}/portfolios", acme))
        .await
        .json::<Vec<PortfolioView>>();
    assert_eq!(acme_list.len(), 2);
    assert!(acme_list.iter().all(|p| p.tenant_id == acme));

    let globex_list = server
        .get(&format!("/api/tenants/{}/portfolios", globex))
        .await
        .json::<Vec<PortfolioView>>();
    assert_eq!(globex_list, vec![solar]);
}

#[tokio::test]
async fn test_unknown_tenant_is_not_found() {
    let server = setup_test_app();
    let tenant_id = Uuid::new_v4();

    let list = server
        .get(&format!("/api/tenants/{}/portfolios", tenant_id))
        .await;
    assert_eq!(list.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(
        list.json::<Value>()["detail"],
        format!("Tenant with tenantId '{}' was not found", tenant_id)
    );

    let create = server
        .post(&format!("/api/tenants/{}/portfolios", tenant_id))
        .json(&json!({ "portfolioName": "Nordic" }))
        .await;
    assert_eq!(create.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_blank_portfolio_name_is_rejected() {
    let server = setup_test_app();
    let tenant_id = create_tenant(&server, "Acme").await;

    let response = server
        .post(&format!("/api/tenants/{}/portfolios", tenant_id))
        .json(&json!({ "portfolioName": "" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>()["detail"],
        "Portfolio name cannot be empty"
    );
}

#[tokio::test]
async fn test_get_portfolio_is_scoped_to_tenant() {
    let server = setup_test_app();
    let acme = create_tenant(&server, "Acme").await;
    let globex = create_tenant(&server, "Globex").await;
    let nordic = create_portfolio(&server, acme, "Nordic").await;

    let own = server
        .get(&format!(
            "/api/tenants/{}/portfolios/{}",
            acme, nordic.portfolio_id
        ))
        .await;
    assert_eq!(own.status_code(), StatusCode::OK);
    assert_eq!(own.json::<PortfolioView>(), nordic);

    let foreign = server
        .get(&format!(
            "/api/tenants/{}/portfolios/{}",
            globex, nordic.portfolio_id
        ))
        .await;
    assert_eq!(foreign.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(
        foreign.json::<Value>()["detail"],
        format!(
            "Portfolio with tenantId '{}' and portfolioId '{}' was not found",
            globex, nordic.portfolio_id
        )
    );
}

#[tokio::test]
async fn test_delete_portfolio() {
    let server = setup_test_app();
    let acme = create_tenant(&server, "Acme").await;
    let globex = create_tenant(&server, "Globex").await;
    let nordic = create_portfolio(&server, acme, "Nordic").await;

    // Deleting through the wrong tenant leaves the portfolio in place
    let foreign = server
        .delete(&format!(
            "/api/tenants/{}/portfolios/{}",
            globex, nordic.portfolio_id
        ))
        .await;
    assert_eq!(foreign.status_code(), StatusCode::NOT_FOUND);

    let path = format!("/api/tenants/{}/portfolios/{}", acme, nordic.portfolio_id);
    let response = server.delete(&path).await;
    assert_eq!(response.status_code(), StatusCode::NO_CONTENT);

    assert_eq!(server.get(&path).await.status_code(), StatusCode::NOT_FOUND);
    let listed = server
        .get(&format!("/api/tenants/{}/portfolios", acme))
        .await
        .json::<Vec<PortfolioView>>();
    assert!(listed.is_empty());
}

#[tokio::test]
async fn test_deleting_tenant_leaves_portfolios_dangling() {
    let server = setup_test_app();
    let acme = create_tenant(&server, "Acme").await;
    let nordic = create_portfolio(&server, acme, "Nordic").await;

    let deleted = server.delete(&format!("/api/tenants/{}", acme)).await;
    assert_eq!(deleted.status_code(), StatusCode::NO_CONTENT);

    // The tenant is gone, so its routes answer 404 even though the portfolio row survives
    let list = server.get(&format!("/api/tenants/{}/portfolios", acme)).await;
    assert_eq!(list.status_code(), StatusCode::NOT_FOUND);

    // Plants of the orphaned portfolio are still reachable through the portfolio id
    let plants = server
        .get(&format!("/api/portfolios/{}/plants", nordic.portfolio_id))
        .await;
    assert_eq!(plants.status_code(), StatusCode::OK);
}
