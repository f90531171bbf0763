use broadsheet_testing::TestWorld;
use predicates::prelude::*;
use std::fs;

#[test]
fn render_emits_the_card_grid_markup() {
    let world = TestWorld::new().unwrap();

    world
        .command()
        .arg("render")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"<p id="post-count">3 posts</p>"#))
        .stdout(predicate::str::contains(r#"<article class="card" data-id="1">"#))
        .stdout(predicate::str::contains("Read more →"));
}

#[test]
fn render_escapes_untrusted_registry_fields() {
    let world = TestWorld::new().unwrap();
    world
        .write_content(
            "posts.json",
            r#"[{
                "id": 1,
                "title": "<script>alert(1)</script>",
                "date": "2025-02-10",
                "tags": ["systems"],
                "excerpt": "Plain & simple",
                "content_ref": "posts/post-1.html"
            }]"#,
        )
        .unwrap();

    world
        .command()
        .arg("render")
        .assert()
        .success()
        .stdout(predicate::str::contains("&lt;script&gt;alert(1)&lt;/script&gt;"))
        .stdout(predicate::str::contains("Plain &amp; simple"))
        .stdout(predicate::str::contains("<script>").not());
}

#[test]
fn render_with_query_writes_the_filtered_grid_to_a_file() {
    let world = TestWorld::new().unwrap();

    world
        .command()
        .arg("render")
        .arg("--query")
        .arg("networking")
        .arg("--output")
        .arg("grid.html")
        .assert()
        .success();

    let html = fs::read_to_string(world.root().join("grid.html")).unwrap();
    assert!(html.contains(r#"<p id="post-count">1 post</p>"#));
    assert!(html.contains(r#"data-id="3""#));
    assert!(!html.contains(r#"data-id="1""#));
}

#[test]
fn render_empty_result_emits_the_placeholder() {
    let world = TestWorld::new().unwrap();

    world
        .command()
        .arg("render")
        .arg("--query")
        .arg("quantum")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            r#"<p class="empty-msg">No posts match your search.</p>"#,
        ));
}
