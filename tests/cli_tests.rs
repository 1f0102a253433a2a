use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn app_cmd(dir: &TempDir) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("graphql-basics"));
    cmd.current_dir(dir.path()).env_remove("GRAPHQL_BASICS_CONFIG");
    cmd
}

fn write_config(dir: &TempDir, content: &str) {
    std::fs::write(dir.path().join("graphql-basics.yml"), content).unwrap();
}

// =============================================================================
// Basic CLI
// =============================================================================

#[test]
fn test_help() {
    let temp_dir = TempDir::new().unwrap();
    app_cmd(&temp_dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("GraphQL"));
}

#[test]
fn test_version() {
    let temp_dir = TempDir::new().unwrap();
    app_cmd(&temp_dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("graphql-basics"));
}

#[test]
fn test_schema_prints_sdl() {
    let temp_dir = TempDir::new().unwrap();
    app_cmd(&temp_dir)
        .arg("schema")
        .assert()
        .success()
        .stdout(predicate::str::contains("type Query"))
        .stdout(predicate::str::contains("type Mutation"))
        .stdout(predicate::str::contains("comments: [Comment!]!"));
}

// =============================================================================
// Query and Mutate
// =============================================================================

#[test]
fn test_query_demo_data() {
    let temp_dir = TempDir::new().unwrap();
    app_cmd(&temp_dir)
        .args(["query", r#"{ users(query: "da") { name } }"#])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"Dafo\""))
        .stdout(predicate::str::contains("Pietro").not());
}

#[test]
fn test_query_with_variables() {
    let temp_dir = TempDir::new().unwrap();
    app_cmd(&temp_dir)
        .args([
            "query",
            "query($q: String) { posts(query: $q) { title } }",
            "--variables",
            r#"{"q": "post 2"}"#,
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Post 2"))
        .stdout(predicate::str::contains("Post 1").not());
}

#[test]
fn test_invalid_variables_fail() {
    let temp_dir = TempDir::new().unwrap();
    app_cmd(&temp_dir)
        .args(["query", "{ me { id } }", "--variables", "not json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid --variables JSON"));
}

#[test]
fn test_mutate_create_user() {
    let temp_dir = TempDir::new().unwrap();
    app_cmd(&temp_dir)
        .args([
            "mutate",
            r#"createUser(name: "Ann", email: "ann@x.com", age: 30) { name email age }"#,
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"ann@x.com\""));
}

#[test]
fn test_mutate_conflict_prints_errors_and_fails() {
    let temp_dir = TempDir::new().unwrap();
    app_cmd(&temp_dir)
        .args([
            "mutate",
            r#"createUser(name: "P", email: "pietro@balestra.dev") { id }"#,
        ])
        .assert()
        .failure()
        .stdout(predicate::str::contains("CONFLICT"))
        .stderr(predicate::str::contains("error"));
}

// =============================================================================
// Configuration
// =============================================================================

#[test]
fn test_config_without_seed_starts_empty() {
    let temp_dir = TempDir::new().unwrap();
    write_config(&temp_dir, "store:\n  seed: false\n");

    app_cmd(&temp_dir)
        .args(["query", "{ users { id } }"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"users\": []"));
}

#[test]
fn test_config_sequential_ids() {
    let temp_dir = TempDir::new().unwrap();
    write_config(&temp_dir, "store:\n  id_mode: sequential\n");

    app_cmd(&temp_dir)
        .args([
            "mutate",
            r#"createPost(title: "T", body: "B", published: false, author: "3") { id }"#,
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"id\": \"4\""));
}

#[test]
fn test_config_fixtures_file() {
    let temp_dir = TempDir::new().unwrap();
    write_config(&temp_dir, "store:\n  fixtures: data.yml\n");
    std::fs::write(
        temp_dir.path().join("data.yml"),
        "users:\n  - id: \"u1\"\n    name: Grace\n    email: grace@example.com\n",
    )
    .unwrap();

    app_cmd(&temp_dir)
        .args(["query", "{ users { name } }"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Grace"))
        .stdout(predicate::str::contains("Pietro").not());
}

#[test]
fn test_config_fixtures_with_dangling_author_fail() {
    let temp_dir = TempDir::new().unwrap();
    write_config(&temp_dir, "store:\n  fixtures: data.yml\n");
    std::fs::write(
        temp_dir.path().join("data.yml"),
        "posts:\n  - id: \"p1\"\n    title: Orphan\n    author: \"ghost\"\n",
    )
    .unwrap();

    app_cmd(&temp_dir)
        .args(["query", "{ posts { id } }"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown author ghost"));
}

#[test]
fn test_explicit_missing_config_fails() {
    let temp_dir = TempDir::new().unwrap();
    app_cmd(&temp_dir)
        .args(["--config", "missing.yml", "query", "{ me { id } }"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load configuration"));
}
