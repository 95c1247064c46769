// Integration tests for hydrating collections from the filesystem adapter
// Covers: restart round-trip, corrupt-file fallback, key independence

use std::fs;
use std::rc::Rc;

use tempfile::TempDir;
use veosuite_core::suite::{COOKIES_KEY, STORIES_KEY};
use veosuite_core::{Story, StoryPatch, Suite, UserCookie};
use veosuite_store::FsKvStore;

fn load_suite(dir: &TempDir) -> Suite {
    Suite::load(Rc::new(FsKvStore::new(dir.path())))
}

#[test]
fn test_suite_survives_process_restart() {
    let dir = TempDir::new().unwrap();

    // First "process": create some records
    {
        let mut suite = load_suite(&dir);
        suite
            .stories_mut()
            .add(Story::new("First", "Once upon a time"))
            .unwrap();
        suite
            .stories_mut()
            .add(Story::new("Second", "And then"))
            .unwrap();
        suite
            .cookies_mut()
            .add(UserCookie::new("Main account", "SID=abc"))
            .unwrap();
    }

    // Second "process": everything is back, most recent first
    let suite = load_suite(&dir);
    let titles: Vec<&str> = suite
        .stories()
        .records()
        .iter()
        .map(|s| s.title.as_str())
        .collect();
    assert_eq!(titles, vec!["Second", "First"]);
    assert_eq!(suite.cookies().len(), 1);
}

#[test]
fn test_mutations_survive_restart() {
    let dir = TempDir::new().unwrap();
    let story_id;
    {
        let mut suite = load_suite(&dir);
        suite
            .stories_mut()
            .add(Story::new("Draft", "Text"))
            .unwrap();
        story_id = suite.stories().records()[0].id.clone();
        suite
            .stories_mut()
            .update(
                &story_id,
                StoryPatch {
                    title: Some("Final".to_string()),
                    content: None,
                },
            )
            .unwrap();
    }

    let suite = load_suite(&dir);
    assert_eq!(suite.stories().get(&story_id).unwrap().title, "Final");
}

#[test]
fn test_corrupt_file_degrades_to_empty_collection() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join(format!("{}.json", STORIES_KEY)),
        "{this is not json",
    )
    .unwrap();

    let suite = load_suite(&dir);
    assert!(suite.stories().is_empty());
}

#[test]
fn test_corrupt_collection_does_not_affect_others() {
    let dir = TempDir::new().unwrap();
    {
        let mut suite = load_suite(&dir);
        suite
            .cookies_mut()
            .add(UserCookie::new("Main account", "SID=abc"))
            .unwrap();
    }
    fs::write(
        dir.path().join(format!("{}.json", STORIES_KEY)),
        "[{\"truncated\":",
    )
    .unwrap();

    let suite = load_suite(&dir);
    assert!(suite.stories().is_empty());
    assert_eq!(suite.cookies().len(), 1);
}

#[test]
fn test_recovery_after_corruption_overwrites_bad_value() {
    let dir = TempDir::new().unwrap();
    let cookies_path = dir.path().join(format!("{}.json", COOKIES_KEY));
    fs::write(&cookies_path, "garbage").unwrap();

    {
        let mut suite = load_suite(&dir);
        suite
            .cookies_mut()
            .add(UserCookie::new("Main account", "SID=abc"))
            .unwrap();
    }

    // The next successful write reconciled the medium
    let raw = fs::read_to_string(&cookies_path).unwrap();
    let stored: Vec<UserCookie> = serde_json::from_str(&raw).unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].name, "Main account");
}
