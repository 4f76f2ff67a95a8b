//! Merge semantics of the slice patches.

use super::*;

fn sample_version() -> VersionInfo {
    VersionInfo {
        version: "1.2.3".to_string(),
        build_time: "t".to_string(),
        go_version: "g".to_string(),
    }
}

#[test]
fn test_empty_patches_change_nothing() {
    let mut user = UserContract::default();
    UserPatch::new().apply(&mut user);
    assert_eq!(user, UserContract::default());

    let mut page = PageContract {
        is_editable: true,
        in_edit: true,
        is_dirty: true,
        error_message: Some(ErrorMessage::new("t", "m")),
        ..PageContract::default()
    };
    let before = page.clone();
    PagePatch::new().apply(&mut page);
    assert_eq!(page, before);
}

#[test]
fn test_user_patch_overwrites_only_named_fields() {
    let mut user = UserContract::default();
    UserPatch::new().username("operator").apply(&mut user);
    assert_eq!(user.username, "operator");
    assert!(user.is_admin);

    UserPatch::new().is_admin(false).apply(&mut user);
    assert_eq!(user.username, "operator");
    assert!(!user.is_admin);
}

#[test]
fn test_data_patch_keeps_publish_handler() {
    let mut data = DataContract::default();
    let publish = data.publish.clone();

    DataPatch::new().version(sample_version()).apply(&mut data);
    assert_eq!(data.version, Some(sample_version()));
    assert!(!data.is_dirty);
    assert_eq!(data.publish, publish);

    DataPatch::new().is_dirty(true).apply(&mut data);
    assert_eq!(data.version, Some(sample_version()));
    assert!(data.is_dirty);
}

#[test]
fn test_clear_version_differs_from_leaving_it() {
    let mut data = DataContract::default();
    DataPatch::new().version(sample_version()).apply(&mut data);

    DataPatch::new().is_dirty(false).apply(&mut data);
    assert!(data.version.is_some());

    DataPatch::new().clear_version().apply(&mut data);
    assert!(data.version.is_none());
}

#[test]
fn test_banner_set_and_clear() {
    let mut page = PageContract::default();
    PagePatch::new().banner(ErrorMessage::new("Loading", "Please wait...")).apply(&mut page);
    assert_eq!(page.error_message, Some(ErrorMessage::new("Loading", "Please wait...")));

    PagePatch::new().is_editable(true).apply(&mut page);
    assert!(page.error_message.is_some());

    PagePatch::new().clear_banner().apply(&mut page);
    assert!(page.error_message.is_none());
    assert!(page.is_editable);
}

#[test]
fn test_page_handlers_replace_and_remove() {
    let mut page = PageContract::default();
    let save = Handler::new(|| true);

    PagePatch::new().on_save(Some(save.clone())).apply(&mut page);
    assert_eq!(page.on_save, Some(save));
    assert!(page.on_cancel.is_none());

    PagePatch::new().on_save(None).apply(&mut page);
    assert!(page.on_save.is_none());
}

#[test]
fn test_end_edit_touches_only_edit_flags() {
    let mut page = PageContract {
        is_editable: true,
        in_edit: true,
        is_dirty: true,
        error_message: Some(ErrorMessage::new("t", "m")),
        ..PageContract::default()
    };

    PagePatch::end_edit().apply(&mut page);

    assert!(page.is_editable);
    assert!(!page.in_edit);
    assert!(!page.is_dirty);
    assert_eq!(page.error_message, Some(ErrorMessage::new("t", "m")));
}
