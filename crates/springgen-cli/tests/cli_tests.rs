//! End-to-end tests of the `springgen` binary.

use std::{fs, path::Path};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Binary isolated from the user's config, environment and `.env`.
fn springgen(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("springgen").unwrap();
    cmd.current_dir(home.path())
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join("config"))
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .env_remove("SPRINGGEN_GENERATION__BASE_PACKAGE")
        .env_remove("SPRINGGEN_GENERATION__OUTPUT_PATH")
        .env_remove("SPRINGGEN_LAYOUT__ENTITY_PLACEMENT")
        .env_remove("SPRINGGEN_LAYOUT__INCLUDE_MAPPER")
        .env_remove("SPRINGGEN_TEMPLATES__DIRECTORY");
    cmd
}

/// Answers for a `Post` entity with a required `title` in the DTO and an
/// optional `publishedOn` kept out of it.
fn post_answers(out: &Path, package: &str) -> String {
    format!(
        "{}\n{package}\nPost\ny\ntitle\nString\ny\ny\ny\npublishedOn\nLocalDate\nn\nn\nn\n",
        out.display()
    )
}

// ── help / version ───────────────────────────────────────────────────────────

#[test]
fn help_lists_subcommands() {
    let home = TempDir::new().unwrap();
    springgen(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("generate"))
        .stdout(predicate::str::contains("types"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn version_flag() {
    let home = TempDir::new().unwrap();
    springgen(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn unknown_subcommand_is_usage_error() {
    let home = TempDir::new().unwrap();
    springgen(&home).arg("frobnicate").assert().code(2);
}

// ── types ────────────────────────────────────────────────────────────────────

#[test]
fn types_list_prints_vocabulary() {
    let home = TempDir::new().unwrap();
    springgen(&home)
        .args(["types", "--format", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("String\nint\nlong\n"))
        .stdout(predicate::str::contains("LocalDateTime"));
}

#[test]
fn types_json_is_parseable() {
    let home = TempDir::new().unwrap();
    let out = springgen(&home)
        .args(["types", "--format", "json"])
        .output()
        .unwrap();
    assert!(out.status.success());

    let value: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    let names: Vec<_> = value
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names.len(), 11);
    assert!(names.contains(&"UUID".to_string()));
}

// ── generate ─────────────────────────────────────────────────────────────────

#[test]
fn generate_writes_six_files() {
    let home = TempDir::new().unwrap();
    let out = home.path().join("src");

    springgen(&home)
        .arg("generate")
        .write_stdin(post_answers(&out, "com.example"))
        .assert()
        .success()
        .stderr(predicate::str::contains("Generating components..."))
        .stderr(predicate::str::contains("Generated:"))
        .stdout(predicate::str::contains("Post generated in package com.example.post"));

    let pkg = out.join("com/example/post");
    for rel in [
        "Post.java",
        "dto/PostDTO.java",
        "mapper/PostMapper.java",
        "repository/PostRepository.java",
        "service/PostService.java",
        "controller/PostController.java",
    ] {
        assert!(pkg.join(rel).is_file(), "missing {rel}");
    }

    let entity = fs::read_to_string(pkg.join("Post.java")).unwrap();
    assert!(entity.contains("package com.example.post;"));
    assert!(entity.contains("private LocalDate publishedOn;"));

    let dto = fs::read_to_string(pkg.join("dto/PostDTO.java")).unwrap();
    assert!(dto.contains("title"));
    assert!(!dto.contains("publishedOn"));
}

#[test]
fn generate_uses_defaults_on_empty_answers() {
    let home = TempDir::new().unwrap();

    springgen(&home)
        .args(["generate", "--output", "java", "--package", "org.shop"])
        .write_stdin("\n\nOrder\nn\n")
        .assert()
        .success();

    assert!(
        home.path()
            .join("java/org/shop/order/controller/OrderController.java")
            .is_file()
    );
}

#[test]
fn generate_skips_rejected_fields() {
    let home = TempDir::new().unwrap();
    let out = home.path().join("src");
    let answers = format!(
        "{}\ncom.example\nPost\ny\nid\ny\ntitle\nstring\ny\ntitle\nString\nn\ny\nn\n",
        out.display()
    );

    springgen(&home)
        .arg("generate")
        .write_stdin(answers)
        .assert()
        .success()
        .stderr(predicate::str::contains("Skipping field."));

    let entity = fs::read_to_string(out.join("com/example/post/Post.java")).unwrap();
    assert!(entity.contains("private String title;"));
}

#[test]
fn garbled_field_name_costs_only_that_field() {
    let home = TempDir::new().unwrap();
    let out = home.path().join("src");
    let mut answers = format!("{}\ncom.example\nPost\ny\n", out.display()).into_bytes();
    answers.extend_from_slice(b"ti\xfftle\ny\nbody\nString\nn\ny\nn\n");

    springgen(&home)
        .arg("generate")
        .write_stdin(answers)
        .assert()
        .success()
        .stderr(predicate::str::contains("Skipping field."));

    let pkg = out.join("com/example/post");
    let entity = fs::read_to_string(pkg.join("Post.java")).unwrap();
    assert!(entity.contains("private String body;"));
    assert!(!entity.contains("tle;"));
    assert!(pkg.join("controller/PostController.java").is_file());
}

#[test]
fn quiet_keeps_prompts_and_hides_summary() {
    let home = TempDir::new().unwrap();
    let out = home.path().join("src");

    springgen(&home)
        .args(["-q", "generate"])
        .write_stdin(post_answers(&out, "com.example"))
        .assert()
        .success()
        .stderr(predicate::str::contains("? Entity name"))
        .stderr(predicate::str::contains("Generating components...").not())
        .stdout(predicate::str::is_empty());

    assert!(out.join("com/example/post/Post.java").is_file());
}

#[test]
fn invalid_package_aborts_before_writing() {
    let home = TempDir::new().unwrap();
    let out = home.path().join("src");

    springgen(&home)
        .arg("generate")
        .write_stdin(format!("{}\nCom.Example\nPost\nn\n", out.display()))
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid base package 'Com.Example'"));

    assert!(!out.exists());
}

#[test]
fn empty_entity_name_is_user_error() {
    let home = TempDir::new().unwrap();
    springgen(&home)
        .arg("generate")
        .write_stdin("\n\n\n")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("entity name cannot be empty"));
}

#[test]
fn generate_json_report() {
    let home = TempDir::new().unwrap();
    let out = home.path().join("src");

    let output = springgen(&home)
        .args(["--output-format", "json", "generate"])
        .write_stdin(post_answers(&out, "com.example"))
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["entity"], "Post");
    assert_eq!(value["package"], "com.example.post");
    assert_eq!(value["fields"], 3);
    assert_eq!(value["success"], true);
    assert_eq!(value["written"].as_array().unwrap().len(), 6);
    assert_eq!(value["written"][0]["kind"], "entity");
}

#[test]
fn partial_template_directory_stops_at_first_gap() {
    let home = TempDir::new().unwrap();
    let tpl = home.path().join("tpl");
    fs::create_dir_all(&tpl).unwrap();
    fs::write(tpl.join("Entity.java.hbs"), "class {{entityName}} {}").unwrap();
    fs::write(tpl.join("DTO.java.hbs"), "class {{entityName}}DTO {}").unwrap();
    let out = home.path().join("src");

    springgen(&home)
        .args(["generate", "--templates"])
        .arg(&tpl)
        .write_stdin(format!("{}\ncom.example\nPost\nn\n", out.display()))
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Mapper.java.hbs"));

    let pkg = out.join("com/example/post");
    assert_eq!(
        fs::read_to_string(pkg.join("Post.java")).unwrap(),
        "class Post {}"
    );
    assert!(pkg.join("dto/PostDTO.java").is_file());
    assert!(!pkg.join("mapper").exists());
}

#[test]
fn missing_template_directory_is_rejected() {
    let home = TempDir::new().unwrap();
    springgen(&home)
        .args(["generate", "--templates", "does-not-exist"])
        .write_stdin("")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("does-not-exist"));
}

#[test]
fn layout_from_environment() {
    let home = TempDir::new().unwrap();
    let out = home.path().join("src");

    springgen(&home)
        .env("SPRINGGEN_LAYOUT__ENTITY_PLACEMENT", "subpackage")
        .env("SPRINGGEN_LAYOUT__INCLUDE_MAPPER", "false")
        .arg("generate")
        .write_stdin(format!("{}\ncom.example\nPost\nn\n", out.display()))
        .assert()
        .success();

    let pkg = out.join("com/example/post");
    assert!(pkg.join("entity/Post.java").is_file());
    assert!(!pkg.join("mapper").exists());
    let service = fs::read_to_string(pkg.join("service/PostService.java")).unwrap();
    assert!(service.contains("import com.example.post.entity.Post;"));
}

// ── init / config ────────────────────────────────────────────────────────────

#[test]
fn init_writes_config_then_refuses_without_force() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("springgen.toml");

    springgen(&home)
        .args(["--config", "springgen.toml", "init"])
        .assert()
        .success();

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.contains("base_package = \"com.example\""));

    fs::write(&path, "[generation]\nbase_package = \"org.kept\"\n").unwrap();
    springgen(&home)
        .args(["--config", "springgen.toml", "init"])
        .assert()
        .success();
    assert!(fs::read_to_string(&path).unwrap().contains("org.kept"));

    springgen(&home)
        .args(["--config", "springgen.toml", "init", "--force"])
        .assert()
        .success();
    assert!(fs::read_to_string(&path).unwrap().contains("com.example"));
}

#[test]
fn config_file_supplies_defaults() {
    let home = TempDir::new().unwrap();
    fs::write(
        home.path().join("springgen.toml"),
        "[generation]\noutput_path = \"java\"\nbase_package = \"org.blog\"\n",
    )
    .unwrap();

    springgen(&home)
        .args(["--config", "springgen.toml", "generate"])
        .write_stdin("\n\nPost\nn\n")
        .assert()
        .success();

    assert!(home.path().join("java/org/blog/post/Post.java").is_file());
}

#[test]
fn config_get_reads_environment() {
    let home = TempDir::new().unwrap();
    springgen(&home)
        .env("SPRINGGEN_GENERATION__BASE_PACKAGE", "org.env")
        .args(["config", "get", "generation.base_package"])
        .assert()
        .success()
        .stdout("org.env\n");
}

#[test]
fn config_get_unknown_key_exits_4() {
    let home = TempDir::new().unwrap();
    springgen(&home)
        .args(["config", "get", "nope.nothing"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Unknown config key"));
}

#[test]
fn malformed_config_exits_4() {
    let home = TempDir::new().unwrap();
    fs::write(
        home.path().join("bad.toml"),
        "[layout]\nentity_placement = \"sideways\"\n",
    )
    .unwrap();

    springgen(&home)
        .args(["--config", "bad.toml", "types"])
        .assert()
        .code(4);
}

#[test]
fn config_path_follows_flag() {
    let home = TempDir::new().unwrap();
    springgen(&home)
        .args(["--config", "custom.toml", "config", "path"])
        .assert()
        .success()
        .stdout("custom.toml\n");
}

// ── completions ──────────────────────────────────────────────────────────────

#[test]
fn bash_completions() {
    let home = TempDir::new().unwrap();
    springgen(&home)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("springgen"));
}
