use broadsheet_testing::TestWorld;
use predicates::prelude::*;

#[test]
fn show_prints_header_and_fetched_body() {
    let world = TestWorld::new().unwrap();

    world
        .command()
        .arg("show")
        .arg("2")
        .assert()
        .success()
        .stdout(predicate::str::contains("Understanding Big-O Notation"))
        .stdout(predicate::str::contains("January 28, 2025"))
        .stdout(predicate::str::contains("complexity, fundamentals"))
        .stdout(predicate::str::contains("<p>Body of post 2</p>"));
}

#[test]
fn show_renders_fetch_failure_inline_and_still_succeeds() {
    let world = TestWorld::new().unwrap();
    world.remove_content("posts/post-1.html").unwrap();

    world
        .command()
        .arg("show")
        .arg("1")
        .assert()
        .success()
        .stdout(predicate::str::contains("Could not load post content."));
}

#[test]
fn show_fails_for_an_unknown_id() {
    let world = TestWorld::new().unwrap();

    world
        .command()
        .arg("show")
        .arg("99")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no post with id 99"));
}

#[test]
fn show_json_format_marks_fetch_failures() {
    let world = TestWorld::new().unwrap();
    world.remove_content("posts/post-3.html").unwrap();

    let output = world
        .command()
        .arg("show")
        .arg("3")
        .arg("--format")
        .arg("json")
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let value: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");

    assert_eq!(value["id"], 3);
    assert_eq!(value["body_is_error"], true);
    assert!(value["body"]
        .as_str()
        .unwrap()
        .contains("Could not load post content."));
}

#[test]
fn show_json_format_carries_the_body_verbatim() {
    let world = TestWorld::new().unwrap();
    world
        .write_content("posts/post-1.html", "<h2>Invariants</h2>")
        .unwrap();

    let output = world
        .command()
        .arg("show")
        .arg("1")
        .arg("--format")
        .arg("json")
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value =
        serde_json::from_str(&String::from_utf8_lossy(&output.stdout)).unwrap();
    assert_eq!(value["body"], "<h2>Invariants</h2>");
    assert_eq!(value["body_is_error"], false);
}
