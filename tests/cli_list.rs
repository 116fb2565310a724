//! `ssh-sftp list` previews the plan without touching the remote when it
//! does not need to.

mod common;

use common::{unreachable_config, TestProject};

fn site() -> TestProject {
    let project = TestProject::named("deploy-site");
    project.write("dist/index.html", "<h1>hi</h1>");
    project.write("dist/css/site.css", "body {}");
    project.write("dist/app.js.map", "{}");
    let mut config = unreachable_config("/var/www/deploy-site/");
    config["ignore"] = serde_json::json!("*.map");
    project.write_config(config);
    project
}

#[test]
fn list_shows_uploads_and_ignored_without_connecting() {
    let project = site();

    let result = project.run(&["list"]);
    assert!(result.is_success(), "{}", result.combined_output());

    let out = &result.stdout;
    assert!(out.contains("Uploads (3)"), "{}", out);
    assert!(out.contains("/var/www/deploy-site/css\n"));
    assert!(out.contains("/var/www/deploy-site/css/site.css"));
    assert!(out.contains("/var/www/deploy-site/index.html"));
    assert!(out.contains("Ignored (1)"));
    assert!(out.contains("app.js.map"));
    assert!(out.contains("cleanRemoteFiles is off"));
}

#[test]
fn ls_alias_with_flags_selects_sections() {
    let project = site();

    let result = project.run(&["ls", "-i"]);
    assert!(result.is_success(), "{}", result.stderr);
    assert!(!result.stdout.contains("Uploads"));
    assert!(result.stdout.contains("Ignored (1)"));
}

#[test]
fn list_json_lists_remote_paths() {
    let project = site();

    let result = project.run(&["list", "-u", "--json"]);
    assert!(result.is_success(), "{}", result.stderr);

    let events = result.events();
    let preview = events.iter().find(|e| e["event"] == "preview").unwrap();
    let uploads = preview["uploads"].as_array().unwrap();
    assert_eq!(uploads.len(), 3);
    assert_eq!(uploads[0]["path"], "/var/www/deploy-site/css");
    assert_eq!(uploads[0]["type"], "directory");
    assert!(preview.get("ignored").is_none());
}

#[test]
fn list_deletions_with_pruning_needs_the_server() {
    let project = site();
    let mut config = unreachable_config("/var/www/deploy-site");
    config["cleanRemoteFiles"] = serde_json::json!(true);
    project.write_config(config);

    let result = project.run(&["list", "-d"]);
    assert_eq!(result.exit_code, 1);
    assert!(result.stderr.contains("failed to connect"), "{}", result.stderr);
}

#[test]
fn missing_local_path_is_reported() {
    let project = TestProject::named("deploy-site");
    project.write_config(unreachable_config("/var/www/deploy-site"));

    let result = project.run(&["list"]);
    assert_eq!(result.exit_code, 1);
    assert!(result.stderr.contains("local path not found"), "{}", result.stderr);
}
