//! Integration tests for the HTTP catalog client against a canned local server.

use std::time::Duration;

use testresult::TestResult;
use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::TcpListener,
    task::JoinHandle,
};

use shopfront::prelude::*;
use shopfront_client::{ClientConfig, HttpCatalogApi};

/// Serve one canned JSON response and hand back the raw request that was received.
async fn serve_once(
    status: &'static str,
    body: &'static str,
) -> TestResult<(HttpCatalogApi, JoinHandle<String>)> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;

    let handle = tokio::spawn(async move {
        let Ok((mut stream, _peer)) = listener.accept().await else {
            return String::new();
        };

        let mut request = Vec::new();
        let mut chunk = [0_u8; 4096];

        while !request_complete(&request) {
            match stream.read(&mut chunk).await {
                Ok(0) | Err(_) => break,
                Ok(read) => request.extend_from_slice(&chunk[..read]),
            }
        }

        let response = format!(
            "HTTP/1.1 {status}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
            body.len()
        );

        if stream.write_all(response.as_bytes()).await.is_ok() {
            stream.flush().await.ok();
        }

        String::from_utf8_lossy(&request).into_owned()
    });

    let api = HttpCatalogApi::new(ClientConfig {
        base_url: format!("http://{addr}/api"),
        timeout: Some(Duration::from_secs(5)),
    })?;

    Ok((api, handle))
}

fn request_complete(request: &[u8]) -> bool {
    let text = String::from_utf8_lossy(request);

    let Some(header_end) = text.find("\r\n\r\n") else {
        return false;
    };

    let content_length = text[..header_end]
        .lines()
        .filter_map(|line| line.split_once(':'))
        .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
        .and_then(|(_, value)| value.trim().parse::<usize>().ok())
        .unwrap_or(0);

    request.len() >= header_end + 4 + content_length
}

fn payload(id: Option<&str>) -> ProductWrite {
    ProductWrite {
        id: id.map(ProductId::new),
        shop_id: ShopId::new("1"),
        category_id: CategoryId::new("10"),
        name: "Bàn phím cơ".to_string(),
        price: "1250000".to_string(),
        desc: "Switch đỏ".to_string(),
        base_price: "1250000".to_string(),
        description: "Switch đỏ".to_string(),
    }
}

#[tokio::test]
async fn list_shops_decodes_both_identifier_casings() -> TestResult {
    let (api, server) = serve_once(
        "200 OK",
        r#"[{"ShopID": 1, "shopName": "Kho Hà Nội", "shopStatus": "active"},
            {"shopID": "2", "shopName": "Kho Huế", "shopStatus": "closed"}]"#,
    )
    .await?;

    let shops = api.list_shops().await?;
    let request = server.await?;

    assert!(request.starts_with("GET /api/shops HTTP/1.1"), "{request}");
    assert_eq!(shops.len(), 2);
    assert_eq!(shops[0].id, ShopId::new("1"));
    assert_eq!(shops[1].id, ShopId::new("2"));

    Ok(())
}

#[tokio::test]
async fn list_products_sends_the_raw_filters() -> TestResult {
    let (api, server) = serve_once(
        "200 OK",
        r#"[{"productID": 5, "ProductName": "Chuột", "Catagory": "Phụ kiện",
             "ShopName": "Kho Huế", "Price": 99000}]"#,
    )
    .await?;

    let products = api
        .list_products(&ProductQuery::new("chuột", "10000", ""))
        .await?;
    let request = server.await?;

    assert!(
        request.starts_with("GET /api/products?keyword=chu%E1%BB%99t&min=10000&max= HTTP/1.1"),
        "{request}"
    );
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].category, "Phụ kiện");

    Ok(())
}

#[tokio::test]
async fn list_categories_hits_the_categories_endpoint() -> TestResult {
    let (api, server) =
        serve_once("200 OK", r#"[{"categoryID": 10, "categoryName": "Phụ kiện"}]"#).await?;

    let categories = api.list_categories().await?;
    let request = server.await?;

    assert!(request.starts_with("GET /api/categories HTTP/1.1"), "{request}");
    assert_eq!(categories[0].id, CategoryId::new("10"));

    Ok(())
}

#[tokio::test]
async fn failed_list_status_is_a_transport_error() -> TestResult {
    let (api, server) = serve_once("500 Internal Server Error", r#"{"error": "boom"}"#).await?;

    let result = api.list_shops().await;
    server.await?;

    assert!(matches!(result, Err(ApiError::Transport(_))), "{result:?}");

    Ok(())
}

#[tokio::test]
async fn new_product_is_posted_and_message_returned() -> TestResult {
    let (api, server) = serve_once("201 Created", r#"{"message": "Đã thêm sản phẩm"}"#).await?;

    let result = api.save_product(&payload(None)).await;
    let request = server.await?;

    assert!(request.starts_with("POST /api/products HTTP/1.1"), "{request}");
    assert!(request.contains(r#""basePrice":"1250000""#), "{request}");
    assert!(request.contains(r#""description":"Switch đỏ""#), "{request}");
    assert!(!request.contains(r#""id""#), "{request}");
    assert_eq!(result, Ok("Đã thêm sản phẩm".to_string()));

    Ok(())
}

#[tokio::test]
async fn existing_product_is_put_and_error_is_rejected() -> TestResult {
    let (api, server) = serve_once("400 Bad Request", r#"{"error": "Shop không tồn tại"}"#).await?;

    let result = api.save_product(&payload(Some("42"))).await;
    let request = server.await?;

    assert!(request.starts_with("PUT /api/products/42 HTTP/1.1"), "{request}");
    assert_eq!(
        result,
        Err(ApiError::Rejected("Shop không tồn tại".to_string()))
    );

    Ok(())
}

#[tokio::test]
async fn unreachable_server_is_a_transport_error() -> TestResult {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    drop(listener);

    let api = HttpCatalogApi::new(ClientConfig {
        base_url: format!("http://{addr}/api"),
        timeout: Some(Duration::from_secs(5)),
    })?;

    let result = api.list_products(&ProductQuery::default()).await;

    assert!(matches!(result, Err(ApiError::Transport(_))), "{result:?}");

    Ok(())
}
