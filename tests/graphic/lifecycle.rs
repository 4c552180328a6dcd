use slotgrid::graphic::{Graphic, Icon, Rows, ViewerId};
use slotgrid::host::{Host, HostCall};
use slotgrid::GraphicError;

use super::{host, inventory};

#[test]
fn test_subscription_is_lazy() {
    let host = host();
    let mut graphic = inventory(&host, Rows::Minimal);
    let listener = graphic.listener_id();
    assert!(!host.is_subscribed(listener));

    graphic.open(&[]).unwrap();
    assert!(!host.is_subscribed(listener));
    assert!(!graphic.is_listener_active());

    let viewer = ViewerId::new();
    graphic.open(&[viewer]).unwrap();
    assert!(host.is_subscribed(listener));
    assert!(graphic.is_viewing(viewer));
}

#[test]
fn test_last_viewer_leaving_unsubscribes() {
    let host = host();
    let mut graphic = inventory(&host, Rows::Minimal);
    let (first, second) = (ViewerId::new(), ViewerId::new());
    graphic.open(&[first, second]).unwrap();

    graphic.close_viewers(&[first]);
    assert!(host.is_subscribed(graphic.listener_id()));

    graphic.close_viewers(&[second]);
    assert!(!host.is_subscribed(graphic.listener_id()));
    assert!(!graphic.is_closed());

    // Still usable, and opening again subscribes again
    graphic.set_icon(Icon::new("x"), &[0]).unwrap();
    graphic.open(&[first]).unwrap();
    assert!(host.is_subscribed(graphic.listener_id()));
}

#[test]
fn test_close_viewers_ignores_strangers() {
    let host = host();
    let mut graphic = inventory(&host, Rows::Minimal);
    graphic.open(&[ViewerId::new()]).unwrap();
    host.clear_calls();

    graphic.close_viewers(&[ViewerId::new()]);
    assert!(host.calls().is_empty());
}

#[test]
fn test_close_is_idempotent() {
    let host = host();
    let mut graphic = inventory(&host, Rows::Minimal);
    graphic.open(&[ViewerId::new(), ViewerId::new()]).unwrap();

    graphic.close();
    graphic.close();

    assert!(graphic.is_closed());
    assert_eq!(host.count(|call| matches!(call, HostCall::Closed { .. })), 2);
    assert_eq!(host.count(|call| matches!(call, HostCall::Unsubscribed(_))), 1);
    assert_eq!(graphic.viewers().count(), 0);
}

#[test]
fn test_closed_graphic_rejects_mutation() {
    let host = host();
    let mut graphic = inventory(&host, Rows::Minimal);
    graphic.close();

    assert!(matches!(graphic.open(&[ViewerId::new()]), Err(GraphicError::Closed)));
    assert!(matches!(graphic.set_icon(Icon::new("x"), &[0]), Err(GraphicError::Closed)));
    assert!(matches!(graphic.actions_mut(None), Err(GraphicError::Closed)));
    assert!(matches!(graphic.set_size(18), Err(GraphicError::Closed)));
    assert!(matches!(graphic.set_title(None), Err(GraphicError::Closed)));
    assert!(matches!(graphic.cancel_on_click(), Err(GraphicError::Closed)));
}

#[test]
fn test_close_without_viewers_never_subscribed() {
    let host = host();
    let mut graphic = inventory(&host, Rows::Minimal);
    graphic.close();
    assert!(host.calls().is_empty());
}

#[test]
fn test_close_leaves_a_viewer_who_moved_on() {
    let host = host();
    let mut first = inventory(&host, Rows::Minimal);
    let mut second = inventory(&host, Rows::Minimal);
    let viewer = ViewerId::new();

    first.open(&[viewer]).unwrap();
    second.open(&[viewer]).unwrap();
    host.clear_calls();

    first.close();

    assert_eq!(host.viewing(viewer), Some(second.handle().id()));
    assert!(second.is_viewing(viewer));
    assert!(host.is_subscribed(second.listener_id()));
    assert!(!first.is_listener_active());
    assert!(!host.is_subscribed(first.listener_id()));
    assert_eq!(host.count(|call| matches!(call, HostCall::Closed { .. })), 0);
}

#[test]
fn test_resize_leaves_a_viewer_who_moved_on() {
    let host = host();
    let mut first = inventory(&host, Rows::Minimal);
    let mut second = inventory(&host, Rows::Minimal);
    let viewer = ViewerId::new();

    first.open(&[viewer]).unwrap();
    second.open(&[viewer]).unwrap();

    first.set_size(18).unwrap();

    assert_eq!(first.size(), 18);
    assert_eq!(host.viewing(viewer), Some(second.handle().id()));
    assert!(!first.is_viewing(viewer));
    assert!(!first.is_listener_active());
    assert!(!host.is_subscribed(first.listener_id()));

    first.set_title(Some("Renamed".to_string())).unwrap();
    assert_eq!(host.viewing(viewer), Some(second.handle().id()));
}

#[test]
fn test_close_viewers_keeps_the_other_graphic_open() {
    let host = host();
    let mut first = inventory(&host, Rows::Minimal);
    let mut second = inventory(&host, Rows::Minimal);
    let (moved, stayed) = (ViewerId::new(), ViewerId::new());

    first.open(&[moved, stayed]).unwrap();
    second.open(&[moved]).unwrap();

    first.close_viewers(&[moved]);
    assert_eq!(host.viewing(moved), Some(second.handle().id()));
    assert!(first.is_listener_active());

    first.close_viewers(&[stayed]);
    assert_eq!(host.viewing(stayed), None);
    assert!(!first.is_listener_active());
}
