//! Integration tests for the dataset build against a local Danbooru stand-in.

use booru_mock_data::config::DEFAULT_POST_PICTURE_URL;
use booru_mock_data::{
    DanbooruClient, DatasetBuilder, MockPost, SamplerConfig, SamplerError, USER_AGENT,
};
use rand::{rngs::StdRng, SeedableRng};
use serde_json::{json, Value};
use tempfile::TempDir;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn post_json(id: u64, rating: &str, tags: &str, file_url: Option<&str>) -> Value {
    let mut post = json!({
        "id": id,
        "created_at": format!("2020-01-{:02}T00:00:00.000-05:00", id),
        "rating": rating,
        "tag_string": tags,
        "image_width": 100,
        "image_height": 200,
        "md5": "d34e4cf0a437a5d65f8e82b7bcd02606",
        "file_ext": "jpg",
    });

    if let Some(url) = file_url {
        post["file_url"] = json!(url);
    }

    post
}

async fn mount_post(server: &MockServer, id: u64, body: Value) {
    Mock::given(method("GET"))
        .and(path(format!("/posts/{}.json", id)))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

fn test_config(server: &MockServer, out: &TempDir, count: usize, max_id: u64) -> SamplerConfig {
    SamplerConfig {
        base_url: server.uri(),
        target_count: count,
        min_post_id: 1,
        max_post_id: max_id,
        output_dir: out.path().join("mock_data").join("danbooru"),
        ..SamplerConfig::default()
    }
}

fn read_dataset(config: &SamplerConfig) -> Vec<MockPost> {
    let raw = std::fs::read(config.dataset_path()).expect("dataset file missing");
    serde_json::from_slice(&raw).expect("dataset is not a post array")
}

#[tokio::test]
async fn builds_dataset_and_skips_missing_posts() {
    let server = MockServer::start().await;
    let out = TempDir::new().expect("Failed to create temp dir");

    mount_post(&server, 1, post_json(1, "e", "Loli 1girl, masterpiece:", Some("http://x/1.png"))).await;
    mount_post(&server, 2, post_json(2, "s", "solo", None)).await;
    mount_post(&server, 3, post_json(3, "q", "a_tag_with_a_semicolon;_in_it", Some("http://x/3.png"))).await;
    Mock::given(method("GET"))
        .and(path("/posts/5.json"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    // ID 4 isn't mounted and comes back as a 404.

    let config = test_config(&server, &out, 5, 5);
    let builder = DatasetBuilder::new(config.clone()).unwrap();
    let mut rng = StdRng::seed_from_u64(42);

    let summary = builder.run_with_rng(&mut rng).await.unwrap();

    assert_eq!(summary.sampled, 5);
    assert_eq!(summary.written, 3);
    assert_eq!(summary.skipped, 2);
    assert_eq!(summary.output, config.dataset_path());

    let mut posts = read_dataset(&config);
    assert_eq!(posts.len(), 3);
    posts.sort_by(|a, b| a.created_at.cmp(&b.created_at));

    assert_eq!(posts[0].tags, vec!["1girl", "masterpiece"]);
    assert!(posts[0].is_nsfw);
    assert_eq!(posts[0].image_url, "http://x/1.png");

    assert_eq!(posts[1].tags, vec!["solo"]);
    assert!(!posts[1].is_nsfw);
    assert_eq!(posts[1].image_url, DEFAULT_POST_PICTURE_URL);

    assert_eq!(posts[2].tags, vec!["a_tag_with_a_semicolon_in_it"]);
    assert!(!posts[2].is_nsfw);

    for post in &posts {
        assert!((1..=110).contains(&post.views));
        assert!((1..=210).contains(&post.likes));
    }
}

#[tokio::test]
async fn dataset_file_uses_camel_case_keys() {
    let server = MockServer::start().await;
    let out = TempDir::new().unwrap();
    mount_post(&server, 1, post_json(1, "g", "tag1 tag2", Some("http://x/img.png"))).await;

    let config = test_config(&server, &out, 1, 1);
    DatasetBuilder::new(config.clone()).unwrap().run().await.unwrap();

    let raw: Value = serde_json::from_slice(&std::fs::read(config.dataset_path()).unwrap()).unwrap();
    let entry = &raw.as_array().unwrap()[0];

    assert_eq!(entry["createdAt"], "2020-01-01T00:00:00.000-05:00");
    assert_eq!(entry["tags"], json!(["tag1", "tag2"]));
    assert_eq!(entry["isNsfw"], false);
    assert_eq!(entry["imageUrl"], "http://x/img.png");
    assert!(entry["views"].is_u64());
    assert!(entry["likes"].is_u64());
}

#[tokio::test]
async fn empty_result_writes_empty_array() {
    let server = MockServer::start().await;
    let out = TempDir::new().unwrap();

    let config = test_config(&server, &out, 3, 3);
    let summary = DatasetBuilder::new(config.clone()).unwrap().run().await.unwrap();

    assert_eq!(summary.written, 0);
    assert_eq!(summary.skipped, 3);
    assert!(read_dataset(&config).is_empty());
}

#[tokio::test]
async fn sequential_collect_keeps_id_order() {
    let server = MockServer::start().await;
    let out = TempDir::new().unwrap();
    for id in 1..=3 {
        mount_post(&server, id, post_json(id, "g", "solo", None)).await;
    }

    let builder = DatasetBuilder::new(test_config(&server, &out, 3, 3)).unwrap();
    let mut rng = StdRng::seed_from_u64(0);
    let collected = builder.collect(vec![3, 1, 2], &mut rng).await.unwrap();

    let dates: Vec<&str> = collected.posts.iter().map(|p| p.created_at.as_str()).collect();
    assert_eq!(
        dates,
        vec![
            "2020-01-03T00:00:00.000-05:00",
            "2020-01-01T00:00:00.000-05:00",
            "2020-01-02T00:00:00.000-05:00",
        ]
    );
}

#[tokio::test]
async fn repeated_ids_are_fetched_once() {
    let server = MockServer::start().await;
    let out = TempDir::new().unwrap();

    Mock::given(method("GET"))
        .and(path("/posts/7.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(post_json(7, "e", "solo", None)))
        .expect(1)
        .mount(&server)
        .await;

    let builder = DatasetBuilder::new(test_config(&server, &out, 1, 10)).unwrap();
    let mut rng = StdRng::seed_from_u64(0);
    let collected = builder.collect(vec![7, 7, 7], &mut rng).await.unwrap();

    assert_eq!(collected.posts.len(), 1);
    assert_eq!(collected.skipped, 0);
}

#[tokio::test]
async fn simultaneous_fetches_collect_every_post() {
    let server = MockServer::start().await;
    let out = TempDir::new().unwrap();
    for id in 1..=8 {
        mount_post(&server, id, post_json(id, "g", "solo", None)).await;
    }

    let config = SamplerConfig {
        simultaneous_fetches: 4,
        ..test_config(&server, &out, 8, 8)
    };
    let summary = DatasetBuilder::new(config.clone()).unwrap().run().await.unwrap();

    assert_eq!(summary.written, 8);

    let mut dates: Vec<String> = read_dataset(&config).into_iter().map(|p| p.created_at).collect();
    dates.sort();
    dates.dedup();
    assert_eq!(dates.len(), 8);
}

#[tokio::test]
async fn malformed_body_aborts_without_writing() {
    let server = MockServer::start().await;
    let out = TempDir::new().unwrap();

    Mock::given(method("GET"))
        .and(path("/posts/1.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let config = test_config(&server, &out, 1, 1);
    let result = DatasetBuilder::new(config.clone()).unwrap().run().await;

    assert!(matches!(
        result,
        Err(SamplerError::InvalidServerResponse { id: 1, .. })
    ));
    assert!(!config.dataset_path().exists());
}

#[tokio::test]
async fn missing_required_field_aborts() {
    let server = MockServer::start().await;
    let out = TempDir::new().unwrap();

    let mut body = post_json(1, "e", "solo", None);
    body.as_object_mut().unwrap().remove("image_height");
    mount_post(&server, 1, body).await;

    let config = test_config(&server, &out, 1, 1);
    let result = DatasetBuilder::new(config.clone()).unwrap().run().await;

    assert!(matches!(
        result,
        Err(SamplerError::MissingField {
            id: 1,
            field: "image_height"
        })
    ));
    assert!(!config.dataset_path().exists());
}

#[tokio::test]
async fn missing_field_names_requested_post() {
    let server = MockServer::start().await;
    let out = TempDir::new().unwrap();

    let mut body = post_json(9, "e", "solo", None);
    let fields = body.as_object_mut().unwrap();
    fields.remove("id");
    fields.remove("rating");
    mount_post(&server, 9, body).await;

    let builder = DatasetBuilder::new(test_config(&server, &out, 1, 10)).unwrap();
    let mut rng = StdRng::seed_from_u64(0);
    let result = builder.collect(vec![9], &mut rng).await;

    assert!(matches!(
        result,
        Err(SamplerError::MissingField {
            id: 9,
            field: "rating"
        })
    ));
}

#[tokio::test]
async fn infeasible_sample_is_rejected_up_front() {
    let config = SamplerConfig {
        target_count: 20,
        min_post_id: 1,
        max_post_id: 10,
        ..SamplerConfig::default()
    };

    assert!(matches!(
        DatasetBuilder::new(config),
        Err(SamplerError::InfeasibleSample { .. })
    ));
}

#[tokio::test]
async fn fetcher_sends_user_agent_and_reports_absence() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/posts/10.json"))
        .and(header("user-agent", USER_AGENT))
        .respond_with(ResponseTemplate::new(200).set_body_json(post_json(10, "q", "solo", None)))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/posts/11.json"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let client = DanbooruClient::new(&format!("{}/", server.uri())).unwrap();

    let found = client.fetch_post(10).await.unwrap().expect("post 10 should exist");
    assert_eq!(found.id, Some(10));
    assert_eq!(found.rating.as_deref(), Some("q"));
    assert_eq!(found.file_url, None);

    assert!(client.fetch_post(11).await.unwrap().is_none());
}

#[tokio::test]
async fn transport_failure_is_an_error() {
    // Nothing listens on port 1.
    let client = DanbooruClient::new("http://127.0.0.1:1").unwrap();

    assert!(matches!(
        client.fetch_post(1).await,
        Err(SamplerError::ConnectionError { .. })
    ));
}
