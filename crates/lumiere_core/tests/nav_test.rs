use lumiere_core::{Navigation, Scene, SceneId, StructuredPrompt, nav_items};
use lumiere_error::PipelineErrorKind;
use std::collections::BTreeMap;

fn pending_scenes(total_pages: u32) -> BTreeMap<SceneId, Scene> {
    nav_items(total_pages)
        .into_iter()
        .map(|id| (id, Scene::pending(None)))
        .collect()
}

fn complete(scenes: &mut BTreeMap<SceneId, Scene>, id: SceneId) {
    let scene = scenes.remove(&id).unwrap_or_else(|| Scene::pending(None));
    scenes.insert(id, scene.complete(StructuredPrompt::default(), "video.mp4"));
}

#[test]
fn nav_items_length_tracks_page_count() {
    for n in 1..=12 {
        let items = nav_items(n);
        assert_eq!(items.len(), n as usize + 2);
        assert_eq!(items.first(), Some(&SceneId::Cover));
        assert_eq!(items.last(), Some(&SceneId::End));
    }
    assert!(nav_items(0).is_empty());
}

#[test]
fn nav_items_are_sorted_in_reading_order() {
    let items = nav_items(11);
    let mut sorted = items.clone();
    sorted.sort();
    assert_eq!(items, sorted);
}

#[test]
fn compute_fails_before_ingestion() {
    let err = Navigation::compute(0, &BTreeMap::new()).unwrap_err();
    assert_eq!(err.kind, PipelineErrorKind::NotIngested);
}

#[test]
fn fresh_project_only_reaches_cover() {
    let nav = Navigation::compute(3, &pending_scenes(3)).unwrap();
    assert_eq!(nav.current(), &SceneId::Cover);
    assert_eq!(*nav.first_pending_index(), Some(0));
    assert!(nav.is_reachable(&SceneId::Cover));
    assert!(!nav.is_reachable(&SceneId::Page(1)));
    assert!(!nav.is_reachable(&SceneId::End));
}

#[test]
fn reachable_set_is_prefix_through_first_pending() {
    let mut scenes = pending_scenes(4);
    let items = nav_items(4);

    for done in 0..items.len() {
        let nav = Navigation::compute(4, &scenes).unwrap();
        let expected: Vec<SceneId> = items[..=done].to_vec();
        let actual: Vec<SceneId> = nav.reachable().iter().copied().collect();
        assert_eq!(actual, expected);
        for locked in &items[done + 1..] {
            assert!(nav.check_reachable(locked).is_err());
        }
        complete(&mut scenes, items[done]);
    }

    let nav = Navigation::compute(4, &scenes).unwrap();
    assert!(nav.is_finished());
    assert_eq!(nav.current(), &SceneId::End);
    assert_eq!(nav.reachable().len(), items.len());
}

#[test]
fn missing_scene_counts_as_pending() {
    let mut scenes = pending_scenes(2);
    complete(&mut scenes, SceneId::Cover);
    scenes.remove(&SceneId::Page(1));

    let nav = Navigation::compute(2, &scenes).unwrap();
    assert_eq!(nav.current(), &SceneId::Page(1));
    assert!(!nav.is_reachable(&SceneId::Page(2)));
}

#[test]
fn compute_is_idempotent() {
    let mut scenes = pending_scenes(3);
    complete(&mut scenes, SceneId::Cover);
    complete(&mut scenes, SceneId::Page(1));

    let first = Navigation::compute(3, &scenes).unwrap();
    let second = Navigation::compute(3, &scenes).unwrap();
    assert_eq!(first, second);
}

#[test]
fn check_reachable_reports_scene() {
    let nav = Navigation::compute(2, &pending_scenes(2)).unwrap();
    let err = nav.check_reachable(&SceneId::Page(2)).unwrap_err();
    assert_eq!(
        err.kind,
        PipelineErrorKind::SceneNotReachable("2".to_string())
    );
}

#[test]
fn resolve_active_advances_unless_reviewing() {
    let mut scenes = pending_scenes(2);
    complete(&mut scenes, SceneId::Cover);
    let nav = Navigation::compute(2, &scenes).unwrap();

    // Reviewing a completed scene keeps it on screen.
    assert_eq!(
        nav.resolve_active(Some(SceneId::Cover), true, &scenes),
        SceneId::Cover
    );
    // Not reviewing jumps to the current scene.
    assert_eq!(
        nav.resolve_active(Some(SceneId::Cover), false, &scenes),
        SceneId::Page(1)
    );
    // Pending or locked scenes never stick.
    assert_eq!(
        nav.resolve_active(Some(SceneId::Page(2)), true, &scenes),
        SceneId::Page(1)
    );
    assert_eq!(nav.resolve_active(None, true, &scenes), SceneId::Page(1));
}
