use knowledge_articles::{
    application::ports::content::{ArticleFilter, ContentClient, ContentClientProvider, ContentMode},
    domain::article::ArticleSlug,
    infrastructure::contentful::{ContentfulClients, ContentfulSettings},
};
use mockito::{Matcher, Server};
use once_cell::sync::Lazy;
use serde_json::{Value, json};

const ENDPOINT: &str = "/content/v1/spaces/space-id/environments/master";

static COLLECTION: Lazy<Value> = Lazy::new(|| {
    json!({
        "data": {
            "knowledgeArticleCollection": {
                "items": [
                    {
                        "sys": { "id": "entry-1" },
                        "title": "Getting started",
                        "slug": "getting-started",
                        "summary": "First steps",
                        "date": "2024-01-15T00:00:00.000Z",
                        "authorName": "Ada Lovelace",
                        "categoryName": "Guides",
                        "articleImage": { "url": "//images.ctfassets.net/space-id/cover.png" },
                        "details": {
                            "json": {
                                "nodeType": "document",
                                "data": {},
                                "content": [{
                                    "nodeType": "paragraph",
                                    "data": {},
                                    "content": [{ "nodeType": "text", "value": "Hello", "marks": [], "data": {} }]
                                }]
                            },
                            "links": { "assets": { "block": [] } }
                        }
                    },
                    null,
                    { "sys": { "id": "entry-2" }, "title": "No slug yet" }
                ]
            }
        }
    })
});

fn clients(server: &Server) -> ContentfulClients {
    ContentfulClients::new(ContentfulSettings {
        space_id: Some("space-id".into()),
        graphql_url: server.url(),
        access_token: Some("published-token".into()),
        preview_access_token: Some("preview-token".into()),
        ..ContentfulSettings::default()
    })
}

/// 公開モードは公開トークンと preview=false で問い合わせることを確認する
#[tokio::test]
async fn published_client_uses_delivery_token() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", ENDPOINT)
        .match_header("authorization", "Bearer published-token")
        .match_body(Matcher::PartialJson(json!({
            "variables": { "preview": false, "limit": 3, "where": { "slug_exists": true } }
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(COLLECTION.to_string())
        .create_async()
        .await;

    let client = clients(&server).client(ContentMode::Published).unwrap();
    let articles = client
        .fetch_articles(&ArticleFilter::Latest { limit: 3 })
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(articles.len(), 1);
    let article = &articles[0];
    assert_eq!(article.slug.as_str(), "getting-started");
    assert_eq!(
        article.image_url(),
        Some("https://images.ctfassets.net/space-id/cover.png")
    );
    assert_eq!(article.details.document.content.len(), 1);
}

/// プレビューモードはプレビュートークンと preview=true を使うことを確認する
#[tokio::test]
async fn preview_client_uses_preview_token() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", ENDPOINT)
        .match_header("authorization", "Bearer preview-token")
        .match_body(Matcher::PartialJson(json!({
            "variables": { "preview": true, "limit": 1, "where": { "slug": "getting-started" } }
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(COLLECTION.to_string())
        .create_async()
        .await;

    let client = clients(&server).client(ContentMode::Preview).unwrap();
    let slug = ArticleSlug::new("getting-started").unwrap();
    let articles = client
        .fetch_articles(&ArticleFilter::BySlug(slug))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(articles[0].title.as_str(), "Getting started");
}

/// データなしの GraphQL エラーは失敗として扱うことを確認する
#[tokio::test]
async fn graphql_errors_without_data_fail() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", ENDPOINT)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({ "errors": [{ "message": "Unknown field" }] }).to_string())
        .create_async()
        .await;

    let client = clients(&server).client(ContentMode::Published).unwrap();
    let err = client
        .fetch_articles(&ArticleFilter::Latest { limit: 3 })
        .await
        .unwrap_err();
    assert!(err.to_string().contains("Unknown field"));
}

/// 2xx 以外の応答は失敗として扱うことを確認する
#[tokio::test]
async fn non_success_status_fails() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", ENDPOINT)
        .with_status(401)
        .with_body("access token invalid")
        .create_async()
        .await;

    let client = clients(&server).client(ContentMode::Published).unwrap();
    let err = client
        .fetch_articles(&ArticleFilter::Latest { limit: 3 })
        .await
        .unwrap_err();
    assert!(err.to_string().contains("401"));
}

/// プレビュートークン未設定では設定エラーを返すことを確認する
#[tokio::test]
async fn missing_preview_token_is_reported() {
    let clients = ContentfulClients::new(ContentfulSettings {
        space_id: Some("space-id".into()),
        access_token: Some("published-token".into()),
        ..ContentfulSettings::default()
    });

    let err = clients.client(ContentMode::Preview).err().unwrap();
    assert!(err.to_string().contains("CONTENTFUL_PREVIEW_ACCESS_TOKEN must be set"));
    assert!(clients.client(ContentMode::Published).is_ok());
}
