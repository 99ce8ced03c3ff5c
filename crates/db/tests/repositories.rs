//! Repository-level tests against a real Postgres database.
//!
//! These exercise the SQL directly, below the HTTP layer: dynamic filter
//! assembly, the fixed list ordering, and the foreign-key behavior of
//! deletes.

use punchlist_db::models::project::UpdateProject;
use punchlist_db::models::todo::{CreateTodo, TodoFilter, UpdateTodo};
use punchlist_db::repositories::{CommentRepo, ProjectRepo, StatsRepo, TodoRepo};
use sqlx::PgPool;

fn todo(title: &str) -> CreateTodo {
    CreateTodo {
        title: title.to_string(),
        author: "sam".to_string(),
        ..Default::default()
    }
}

#[sqlx::test]
async fn list_orders_incomplete_then_severity_then_newest(pool: PgPool) {
    let low = TodoRepo::create(&pool, &todo("low"), "low").await.unwrap();
    let high = TodoRepo::create(&pool, &todo("high"), "high").await.unwrap();
    let medium = TodoRepo::create(&pool, &todo("medium"), "medium")
        .await
        .unwrap();
    let done = TodoRepo::create(&pool, &todo("done"), "high").await.unwrap();
    TodoRepo::set_completed(&pool, done, true).await.unwrap();

    let todos = TodoRepo::list(&pool, &TodoFilter::default()).await.unwrap();
    let ids: Vec<i64> = todos.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![high, medium, low, done]);
}

#[sqlx::test]
async fn search_matches_title_or_description(pool: PgPool) {
    TodoRepo::create(&pool, &todo("fix the login page"), "medium")
        .await
        .unwrap();
    TodoRepo::create(
        &pool,
        &CreateTodo {
            title: "cleanup".to_string(),
            description: Some("remove login dead code".to_string()),
            author: "sam".to_string(),
            ..Default::default()
        },
        "medium",
    )
    .await
    .unwrap();
    TodoRepo::create(&pool, &todo("unrelated"), "medium")
        .await
        .unwrap();

    let filter = TodoFilter {
        search: Some("login".to_string()),
        ..Default::default()
    };
    let todos = TodoRepo::list(&pool, &filter).await.unwrap();
    assert_eq!(todos.len(), 2);
}

#[sqlx::test]
async fn filters_combine_conjunctively(pool: PgPool) {
    TodoRepo::create(
        &pool,
        &CreateTodo {
            title: "by kim".to_string(),
            author: "kim".to_string(),
            ..Default::default()
        },
        "high",
    )
    .await
    .unwrap();
    TodoRepo::create(&pool, &todo("by sam high"), "high")
        .await
        .unwrap();
    TodoRepo::create(&pool, &todo("by sam low"), "low")
        .await
        .unwrap();

    let filter = TodoFilter {
        author: Some("sam".to_string()),
        priority: Some("high".to_string()),
        ..Default::default()
    };
    let todos = TodoRepo::list(&pool, &filter).await.unwrap();
    assert_eq!(todos.len(), 1);
    assert_eq!(todos[0].title, "by sam high");
}

#[sqlx::test]
async fn limit_and_offset_page_through_results(pool: PgPool) {
    for i in 0..5 {
        TodoRepo::create(&pool, &todo(&format!("t{i}")), "medium")
            .await
            .unwrap();
    }

    let filter = TodoFilter {
        limit: 2,
        offset: 2,
        ..Default::default()
    };
    let page = TodoRepo::list(&pool, &filter).await.unwrap();
    assert_eq!(page.len(), 2);

    let filter = TodoFilter {
        limit: 2,
        offset: 4,
        ..Default::default()
    };
    let tail = TodoRepo::list(&pool, &filter).await.unwrap();
    assert_eq!(tail.len(), 1);
}

#[sqlx::test]
async fn update_applies_only_present_fields(pool: PgPool) {
    let id = TodoRepo::create(
        &pool,
        &CreateTodo {
            title: "original".to_string(),
            description: Some("keep me".to_string()),
            author: "sam".to_string(),
            ..Default::default()
        },
        "low",
    )
    .await
    .unwrap();

    let affected = TodoRepo::update(
        &pool,
        id,
        &UpdateTodo {
            title: Some("renamed".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(affected, 1);

    let updated = TodoRepo::find_by_id(&pool, id).await.unwrap().unwrap();
    assert_eq!(updated.title, "renamed");
    assert_eq!(updated.description.as_deref(), Some("keep me"));
    assert_eq!(updated.priority, "low");
    assert!(updated.updated_at >= updated.created_at);
}

#[sqlx::test]
async fn update_missing_id_affects_zero_rows(pool: PgPool) {
    let affected = TodoRepo::update(
        &pool,
        999_999,
        &UpdateTodo {
            completed: Some(true),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(affected, 0);
}

#[sqlx::test]
async fn duplicate_slug_is_a_unique_violation(pool: PgPool) {
    ProjectRepo::create(&pool, "work", "Work", None, "#3b82f6")
        .await
        .unwrap();
    let err = ProjectRepo::create(&pool, "work", "Work Again", None, "#3b82f6")
        .await
        .unwrap_err();
    assert!(punchlist_db::is_unique_violation(&err));
}

#[sqlx::test]
async fn project_update_by_slug_is_partial(pool: PgPool) {
    ProjectRepo::create(&pool, "work", "Work", Some("desc"), "#3b82f6")
        .await
        .unwrap();

    let affected = ProjectRepo::update_by_slug(
        &pool,
        "work",
        &UpdateProject {
            color: Some("#ff0000".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(affected, 1);

    let project = ProjectRepo::find_by_slug(&pool, "work").await.unwrap().unwrap();
    assert_eq!(project.color, "#ff0000");
    assert_eq!(project.name, "Work");
    assert_eq!(project.description.as_deref(), Some("desc"));
}

#[sqlx::test]
async fn deleting_project_orphans_its_todos(pool: PgPool) {
    let project_id = ProjectRepo::create(&pool, "work", "Work", None, "#3b82f6")
        .await
        .unwrap();
    let todo_id = TodoRepo::create(
        &pool,
        &CreateTodo {
            title: "attached".to_string(),
            author: "sam".to_string(),
            project_id: Some(project_id),
            ..Default::default()
        },
        "medium",
    )
    .await
    .unwrap();

    let removed = ProjectRepo::delete_by_slug(&pool, "work").await.unwrap();
    assert_eq!(removed, 1);

    let orphan = TodoRepo::find_by_id(&pool, todo_id).await.unwrap().unwrap();
    assert!(orphan.project_id.is_none());
    assert!(orphan.project.is_none());
}

#[sqlx::test]
async fn dangling_comment_todo_id_is_a_foreign_key_violation(pool: PgPool) {
    let err = CommentRepo::create(&pool, 999_999, "orphan", "kim")
        .await
        .unwrap_err();
    assert!(punchlist_db::is_foreign_key_violation(&err));
    assert!(!punchlist_db::is_unique_violation(&err));
}

#[sqlx::test]
async fn deleting_todo_cascades_comments(pool: PgPool) {
    let todo_id = TodoRepo::create(&pool, &todo("host"), "medium").await.unwrap();
    CommentRepo::create(&pool, todo_id, "first", "kim").await.unwrap();
    CommentRepo::create(&pool, todo_id, "second", "kim").await.unwrap();

    TodoRepo::delete(&pool, todo_id).await.unwrap();

    let comments = CommentRepo::list_for_todo(&pool, todo_id).await.unwrap();
    assert!(comments.is_empty());
}

#[sqlx::test]
async fn stats_scope_to_project(pool: PgPool) {
    let project_id = ProjectRepo::create(&pool, "work", "Work", None, "#3b82f6")
        .await
        .unwrap();
    TodoRepo::create(
        &pool,
        &CreateTodo {
            title: "in".to_string(),
            author: "sam".to_string(),
            project_id: Some(project_id),
            ..Default::default()
        },
        "high",
    )
    .await
    .unwrap();
    TodoRepo::create(&pool, &todo("out"), "low").await.unwrap();

    let global = StatsRepo::global(&pool).await.unwrap();
    assert_eq!(global.total, 2);
    assert_eq!(global.high_priority, 1);

    let scoped = StatsRepo::for_project(&pool, project_id).await.unwrap();
    assert_eq!(scoped.total, 1);
    assert_eq!(scoped.high_priority, 1);
}
