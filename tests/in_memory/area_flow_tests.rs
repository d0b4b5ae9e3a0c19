//! End-to-end area navigation and catch-up flows over in-memory adapters.

use super::helpers::{AreaBoard, board, post};
use message_areas::area::{
    domain::{AreaName, MessageId, UserId, UserIdentity},
    ports::SessionStore,
    services::AreaSwitchError,
};
use rstest::rstest;

fn ids(listed: &[message_areas::area::domain::MessageSummary]) -> Vec<i64> {
    listed.iter().map(|summary| summary.id.value()).collect()
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn staff_switch_persists_selection(board: AreaBoard) {
    let staff = UserIdentity::new(UserId::new(1)).with_groups(["staff"]);

    let area = board
        .switcher
        .change_area(&staff, "restricted_area")
        .await
        .expect("staff may enter");

    assert_eq!(area.name().as_str(), "restricted_area");
    let persisted = board
        .sessions
        .current_area(UserId::new(1))
        .await
        .expect("session lookup");
    assert_eq!(persisted, Some(area.name().clone()));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn denied_switch_leaves_no_selection(board: AreaBoard) {
    let outsider = UserIdentity::new(UserId::new(2));

    let result = board
        .switcher
        .change_area(&outsider, "restricted_area")
        .await;

    assert!(matches!(result, Err(AreaSwitchError::AccessDenied(_))));
    let persisted = board
        .sessions
        .current_area(UserId::new(2))
        .await
        .expect("session lookup");
    assert!(persisted.is_none());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn reader_catches_up_then_sees_only_new_posts(board: AreaBoard) {
    let user = UserId::new(3);
    let music = AreaName::new("Local_Music").expect("valid name");
    post(&board, &music, &[1, 2, 3]);

    let first_visit = board
        .feed
        .list_new_for_user(user, &music)
        .await
        .expect("listing");
    assert_eq!(ids(&first_visit), [1, 2, 3]);

    let newest = first_visit.last().map_or(MessageId::ZERO, |summary| summary.id);
    board
        .read_state
        .advance(user, &music, newest)
        .await
        .expect("advance");
    post(&board, &music, &[5, 8]);

    let second_visit = board
        .feed
        .list_new_for_user(user, &music)
        .await
        .expect("listing");
    assert_eq!(ids(&second_visit), [5, 8]);

    let everything = board.feed.list_all(&music).await.expect("listing");
    assert_eq!(ids(&everything), [1, 2, 3, 5, 8]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn private_mail_is_isolated_per_recipient(board: AreaBoard) {
    let alice = UserId::new(10);
    let bob = UserId::new(11);
    let private = board
        .catalog
        .private_area()
        .expect("private area configured")
        .name()
        .clone();
    post(&board, &private, &[10, 11, 12]);
    for (id, recipient) in [(10, alice), (11, bob), (12, alice)] {
        board
            .messages
            .link_recipient(MessageId::new(id), recipient)
            .expect("link");
    }

    let alice_mail = board
        .feed
        .list_new_for_user(alice, &private)
        .await
        .expect("listing");

    assert_eq!(ids(&alice_mail), [10, 12]);
}

#[rstest]
fn default_area_is_first_public_area(board: AreaBoard) {
    let default = board.catalog.default_area().expect("default area");
    assert_eq!(default.name().as_str(), "local_music");
    assert_eq!(board.catalog.list_areas(false).len(), 2);
    assert_eq!(board.catalog.list_areas(true).len(), 3);
}
