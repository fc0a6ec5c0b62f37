//! End-to-end command dispatch against a mocked backend.

use std::sync::Arc;

use contentai_application::{Command, CommandOutcome, Dispatcher, GenerationOutcome, assemble, bootstrap};
use contentai_core::ContentAiError;
use contentai_core::admin::{PlanFilter, UserFilter};
use contentai_core::config::ClientConfig;
use contentai_core::history::{HistoryKind, HistoryPayload};
use contentai_infrastructure::{InMemoryHistoryRepository, InMemoryTokenStore};
use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn user_json(id: i64, email: &str, premium: bool, admin: bool) -> serde_json::Value {
    json!({
        "id": id,
        "email": email,
        "name": null,
        "is_premium": premium,
        "is_admin": admin,
        "created_at": "2024-05-01T12:00:00"
    })
}

fn dispatcher_for(uri: &str) -> Dispatcher {
    let config = ClientConfig {
        api_base_url: uri.to_string(),
        request_timeout_secs: 5,
        ..ClientConfig::default()
    };
    assemble(
        &config,
        Arc::new(InMemoryTokenStore::new()),
        Arc::new(InMemoryHistoryRepository::new()),
    )
}

async fn mount_login(server: &MockServer, admin: bool) {
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "T1",
            "user": user_json(1, "a@b.com", false, admin)
        })))
        .mount(server)
        .await;
}

fn login() -> Command {
    Command::Login {
        email: "a@b.com".to_string(),
        password: "pw".to_string(),
    }
}

async fn mount_ideas(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/api/generate-ideas"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ideas": [{"title": "X", "description": "Y", "hashtags": "#z"}]
        })))
        .mount(server)
        .await;
}

fn ideas_command() -> Command {
    Command::GenerateIdeas {
        niche: "gatos".to_string(),
        audience: "jovens".to_string(),
        count: None,
    }
}

#[tokio::test]
async fn test_login_generate_and_read_history() {
    let server = MockServer::start().await;
    mount_login(&server, false).await;
    mount_ideas(&server).await;
    let dispatcher = dispatcher_for(&server.uri());

    match dispatcher.dispatch(login()).await.unwrap() {
        CommandOutcome::LoggedIn(user) => assert_eq!(user.email, "a@b.com"),
        other => panic!("unexpected outcome: {other:?}"),
    }

    match dispatcher.dispatch(ideas_command()).await.unwrap() {
        CommandOutcome::Ideas(GenerationOutcome::Generated(ideas)) => assert_eq!(ideas[0].title, "X"),
        other => panic!("unexpected outcome: {other:?}"),
    }

    match dispatcher
        .dispatch(Command::History {
            kind: Some(HistoryKind::Ideas),
            limit: None,
        })
        .await
        .unwrap()
    {
        CommandOutcome::History(entries) => {
            assert_eq!(entries.len(), 1);
            match &entries[0].payload {
                HistoryPayload::Ideas { niche, ideas, .. } => {
                    assert_eq!(niche, "gatos");
                    assert_eq!(ideas[0].hashtags, "#z");
                }
                other => panic!("unexpected payload: {other:?}"),
            }
        }
        other => panic!("unexpected outcome: {other:?}"),
    }

    assert_eq!(
        dispatcher.dispatch(Command::Logout).await.unwrap(),
        CommandOutcome::LoggedOut
    );
    assert_eq!(
        dispatcher.dispatch(Command::WhoAmI).await.unwrap(),
        CommandOutcome::CurrentUser(None)
    );
}

#[tokio::test]
async fn test_unreachable_backend_yields_unrecorded_fallback() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let uri = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);
    let dispatcher = dispatcher_for(&uri);

    match dispatcher.dispatch(ideas_command()).await.unwrap() {
        CommandOutcome::Ideas(GenerationOutcome::Fallback { content, reason }) => {
            assert_eq!(content.len(), 5);
            assert!(reason.is_network());
        }
        other => panic!("unexpected outcome: {other:?}"),
    }

    assert_eq!(
        dispatcher
            .dispatch(Command::History {
                kind: None,
                limit: None
            })
            .await
            .unwrap(),
        CommandOutcome::History(Vec::new())
    );
}

#[tokio::test]
async fn test_register_mismatch_is_rejected_locally() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/register"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;
    let dispatcher = dispatcher_for(&server.uri());

    let err = dispatcher
        .dispatch(Command::Register {
            email: "a@b.com".to_string(),
            password: "pw1".to_string(),
            name: "Ana".to_string(),
            confirm_password: Some("pw2".to_string()),
        })
        .await
        .unwrap_err();

    assert_eq!(err, ContentAiError::PasswordMismatch);
}

#[tokio::test]
async fn test_admin_commands_need_a_session() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    let dispatcher = dispatcher_for(&server.uri());

    let err = dispatcher.dispatch(Command::AdminDashboard).await.unwrap_err();
    assert!(err.is_auth_required());
}

#[tokio::test]
async fn test_admin_users_are_filtered_client_side() {
    let server = MockServer::start().await;
    mount_login(&server, true).await;
    Mock::given(method("GET"))
        .and(path("/admin/users"))
        .and(header("authorization", "Bearer T1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "users": [
                user_json(1, "a@b.com", false, true),
                user_json(2, "p@b.com", true, false),
                user_json(3, "q@b.com", true, false)
            ]
        })))
        .mount(&server)
        .await;
    let dispatcher = dispatcher_for(&server.uri());
    dispatcher.dispatch(login()).await.unwrap();

    let outcome = dispatcher
        .dispatch(Command::AdminUsers {
            filter: UserFilter {
                plan: PlanFilter::Premium,
                query: Some("Q@".to_string()),
                ..UserFilter::default()
            },
        })
        .await
        .unwrap();

    match outcome {
        CommandOutcome::Users(users) => {
            assert_eq!(users.len(), 1);
            assert_eq!(users[0].id, 3);
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
}

#[tokio::test]
async fn test_bootstrap_uses_config_capacity_and_files() {
    let server = MockServer::start().await;
    mount_ideas(&server).await;

    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join("config.toml"),
        "history_capacity = 2\ndefault_idea_count = 1\n",
    )
    .unwrap();

    let (dispatcher, config) = bootstrap(Some(temp_dir.path()), Some(&server.uri())).unwrap();
    assert_eq!(config.history_capacity, 2);
    dispatcher.session().initialize().await;

    for _ in 0..3 {
        dispatcher.dispatch(ideas_command()).await.unwrap();
    }

    let raw = std::fs::read_to_string(temp_dir.path().join("history.json")).unwrap();
    let persisted: Vec<serde_json::Value> = serde_json::from_str(&raw).unwrap();
    assert_eq!(persisted.len(), 2);
}

#[tokio::test]
async fn test_configured_capacity_above_fifty_is_capped() {
    let server = MockServer::start().await;
    mount_ideas(&server).await;

    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("config.toml"), "history_capacity = 80\n").unwrap();

    let (dispatcher, _config) = bootstrap(Some(temp_dir.path()), Some(&server.uri())).unwrap();
    for _ in 0..60 {
        dispatcher.dispatch(ideas_command()).await.unwrap();
    }

    match dispatcher
        .dispatch(Command::History {
            kind: None,
            limit: None,
        })
        .await
        .unwrap()
    {
        CommandOutcome::History(entries) => assert_eq!(entries.len(), 50),
        other => panic!("unexpected outcome: {other:?}"),
    }

    let raw = std::fs::read_to_string(temp_dir.path().join("history.json")).unwrap();
    let persisted: Vec<serde_json::Value> = serde_json::from_str(&raw).unwrap();
    assert_eq!(persisted.len(), 50);
}
