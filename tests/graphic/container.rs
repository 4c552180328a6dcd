use slotgrid::graphic::{Action, EventKinds, Graphic, Icon, InteractionEvent, InventoryGraphic, Rows, ViewerId};
use slotgrid::host::{Host, HostCall, ThreadAffinity};
use slotgrid::GraphicError;

use super::{counter, host, inventory};

fn fill(graphic: &mut InventoryGraphic) {
    for slot in 0..graphic.size() {
        graphic.set_icon(Icon::new(slot.to_string()), &[slot]).unwrap();
    }
}

#[test]
fn test_resize_preserves_overlap_for_every_size_pair() {
    for from in Rows::ALL {
        for to in Rows::ALL {
            let host = host();
            let mut graphic = inventory(&host, from);
            fill(&mut graphic);

            graphic.set_rows(to).unwrap();

            assert_eq!(graphic.size(), to.slots());
            let overlap = from.slots().min(to.slots());
            for slot in 0..to.slots() {
                let expected = (slot < overlap).then(|| Icon::new(slot.to_string()));
                assert_eq!(graphic.item(slot), expected.as_ref(), "{from:?} -> {to:?}, slot {slot}");
            }
        }
    }
}

#[test]
fn test_resize_to_invalid_size_is_rejected() {
    let host = host();
    let mut graphic = inventory(&host, Rows::Small);
    let handle = graphic.handle().id();

    assert!(matches!(graphic.set_size(20), Err(GraphicError::InvalidSize(20))));
    assert_eq!(graphic.handle().id(), handle);
}

#[test]
fn test_resize_to_same_size_keeps_the_handle() {
    let host = host();
    let mut graphic = inventory(&host, Rows::Small);
    let handle = graphic.handle().id();

    graphic.set_size(18).unwrap();
    graphic.set_title(Some("Test".to_string())).unwrap();
    assert_eq!(graphic.handle().id(), handle);
}

#[test]
fn test_retitle_keeps_viewers_and_swallows_reopen_events() {
    let host = host();
    let mut graphic = inventory(&host, Rows::Small);
    let (on_open, opened) = counter(EventKinds::OPEN);
    let (on_close, closed) = counter(EventKinds::CLOSE);
    graphic.actions_mut(None).unwrap().add(on_open);
    graphic.actions_mut(None).unwrap().add(on_close);

    let viewer = ViewerId::new();
    graphic.open(&[viewer]).unwrap();
    assert_eq!(opened.get(), 1);

    let old = graphic.handle().id();
    graphic.set_title(Some("Renamed".to_string())).unwrap();

    assert_eq!(graphic.title(), Some("Renamed"));
    assert_ne!(graphic.handle().id(), old);
    assert_eq!(host.viewing(viewer), Some(graphic.handle().id()));
    assert!(graphic.is_viewing(viewer));
    assert!(graphic.is_listening());
    assert!(graphic.is_listener_active());
    assert_eq!(opened.get(), 1);
    assert_eq!(closed.get(), 0);
}

#[test]
fn test_events_for_an_old_handle_are_ignored() {
    let host = host();
    let mut graphic = inventory(&host, Rows::Small);
    let (action, count) = counter(EventKinds::all());
    graphic.actions_mut(None).unwrap().add(action);

    let old = graphic.handle().id();
    graphic.set_rows(Rows::Medium).unwrap();

    let report = graphic.handle_event(&mut InteractionEvent::click(old, ViewerId::new(), 0));
    assert_eq!(report.invoked, 0);
    assert_eq!(count.get(), 0);
}

#[test]
fn test_resize_off_the_primary_context_fails() {
    let host = host();
    let mut graphic = inventory(&host, Rows::Small);
    host.set_primary_thread(Some(false));

    assert!(matches!(
        graphic.set_size(27),
        Err(GraphicError::ThreadAffinity { operation: "set_size" })
    ));
    assert!(matches!(
        graphic.set_title(None),
        Err(GraphicError::ThreadAffinity { operation: "set_title" })
    ));
    assert_eq!(graphic.size(), 18);

    // Plain writes do not check the context
    graphic.set_icon(Icon::new("x"), &[0]).unwrap();

    host.set_primary_thread(None);
    graphic.set_size(27).unwrap();
    assert_eq!(graphic.size(), 27);
}

#[test]
fn test_thread_affinity_detects_other_threads() {
    let affinity = ThreadAffinity::current();
    assert!(affinity.is_primary());

    let elsewhere = std::thread::spawn(move || affinity.is_primary()).join().unwrap();
    assert!(!elsewhere);
}

#[test]
fn test_set_item_validates_every_slot_first() {
    let host = host();
    let mut graphic = inventory(&host, Rows::Minimal);
    let (action, _) = counter(EventKinds::ANY_CLICK);

    let result = graphic.set_item(Some(Icon::new("x")), Some(action), &[0, 9]);
    assert!(matches!(result, Err(GraphicError::SlotOutOfRange { slot: 9, size: 9 })));
    assert!(graphic.item(0).is_none());
    assert!(graphic.actions().get(Some(0)).is_none());
}

#[test]
fn test_set_item_binds_the_action_to_each_slot() {
    let host = host();
    let mut graphic = inventory(&host, Rows::Minimal);
    let action = Action::on_click(|_: &mut InventoryGraphic, _| Ok(()));

    graphic.set_item(Some(Icon::new("x")), Some(action.clone()), &[1, 2]).unwrap();
    assert!(graphic.actions().get(Some(1)).unwrap().contains(action.id()));
    assert!(graphic.actions().get(Some(2)).unwrap().contains(action.id()));

    graphic.clear(&[1]).unwrap();
    assert!(graphic.item(1).is_none());
    assert!(graphic.item(2).is_some());
}

#[test]
fn test_equality_follows_the_handle() {
    let host = host();
    let a = inventory(&host, Rows::Minimal);
    let b = inventory(&host, Rows::Minimal);
    assert_ne!(a, b);
    assert_eq!(a.handle(), a.handle());
}

#[test]
fn test_resize_reopens_for_every_viewer() {
    let host = host();
    let mut graphic = inventory(&host, Rows::Small);
    let viewers = [ViewerId::new(), ViewerId::new()];
    graphic.open(&viewers).unwrap();
    host.clear_calls();

    graphic.set_rows(Rows::Large).unwrap();

    let new_handle = graphic.handle().id();
    for viewer in viewers {
        assert_eq!(host.viewing(viewer), Some(new_handle));
    }
    assert_eq!(host.count(|call| matches!(call, HostCall::Opened { .. })), 2);
    assert_eq!(host.count(|call| matches!(call, HostCall::Unsubscribed(_))), 0);
}
