use std::cell::Cell;
use std::rc::Rc;

use slotgrid::graphic::{Action, ActionKind, Graphic, Icon, InteractionEvent, Rows, ViewerId};
use slotgrid::paged::{Element, PagedGraphic};
use slotgrid::GraphicError;

use super::{click, elements, glyph, host, paged};

#[test]
fn test_last_page_of_twenty_elements_over_eight_cells() {
    let host = host();
    let mut graphic = paged(&host, Rows::Medium);
    graphic.set_bounds_range(10, 18).unwrap();
    graphic.set_elements(elements(20)).unwrap();

    assert_eq!(graphic.available_pages(), 3);
    let last: Vec<&str> = graphic.elements_on_page(2).iter().map(|e| e.icon().glyph()).collect();
    assert_eq!(last, vec!["e16", "e17", "e18", "e19"]);

    graphic.set_page(2).unwrap();
    for (slot, expected) in (10..14).zip(["e16", "e17", "e18", "e19"]) {
        assert_eq!(glyph(&graphic, slot), Some(expected));
    }
    for slot in 14..18 {
        assert_eq!(glyph(&graphic, slot), None, "slot {slot}");
        let set = graphic.actions().get(Some(slot));
        assert!(set.map_or(true, |set| !set.contains_kind(ActionKind::Element)));
    }
}

#[test]
fn test_page_stays_in_range() {
    let host = host();
    let mut graphic = paged(&host, Rows::Medium);
    graphic.set_bounds_range(10, 18).unwrap();
    graphic.set_elements(elements(20)).unwrap();
    graphic.set_page(2).unwrap();

    let check = |graphic: &PagedGraphic| assert!(graphic.page() < graphic.available_pages());

    for _ in 0..15 {
        graphic.remove_element(0).unwrap();
        check(&graphic);
    }
    assert_eq!(graphic.page(), 0);

    graphic.set_bounds_count(2).unwrap();
    graphic.set_page(10).unwrap();
    assert_eq!(graphic.page(), 2);

    graphic.set_bounds(Vec::<usize>::new()).unwrap();
    assert_eq!(graphic.available_pages(), 1);
    assert_eq!(graphic.page(), 0);

    graphic.clear_elements().unwrap();
    check(&graphic);
}

#[test]
fn test_bounds_survive_a_shrink() {
    let host = host();
    let mut graphic = paged(&host, Rows::Full);
    graphic.set_bounds_range(40, 50).unwrap();
    graphic.set_elements(elements(4)).unwrap();
    assert_eq!(glyph(&graphic, 40), Some("e0"));

    graphic.set_rows(Rows::Medium).unwrap();
    assert_eq!(graphic.bounds().len(), 10);
    assert!(graphic.available_bounds().is_empty());
    assert!(graphic.elements_on_page(0).is_empty());

    graphic.set_rows(Rows::Full).unwrap();
    assert_eq!(graphic.available_bounds().len(), 10);
    assert_eq!(glyph(&graphic, 40), Some("e0"));
}

#[test]
fn test_shrink_strips_element_actions_of_lost_cells() {
    let host = host();
    let mut graphic = paged(&host, Rows::Large);
    graphic.set_bounds_range(27, 36).unwrap();
    graphic.set_elements(elements(9)).unwrap();
    assert!(graphic.actions().get(Some(27)).unwrap().contains_kind(ActionKind::Element));

    graphic.set_rows(Rows::Medium).unwrap();
    for slot in 27..36 {
        let set = graphic.actions().get(Some(slot));
        assert!(set.map_or(true, |set| !set.contains_kind(ActionKind::Element)), "slot {slot}");
    }
}

#[test]
fn test_invalid_bounds_are_rejected() {
    let host = host();
    let mut graphic = paged(&host, Rows::Minimal);

    assert!(matches!(
        graphic.set_bounds([3, 9]),
        Err(GraphicError::SlotOutOfRange { slot: 9, size: 9 })
    ));
    assert!(graphic.bounds().is_empty());
    assert!(matches!(
        graphic.set_bounds_range(5, 3),
        Err(GraphicError::InvalidRange { start: 5, end: 3 })
    ));
}

#[test]
fn test_index_of_maps_cells_to_elements() {
    let host = host();
    let mut graphic = paged(&host, Rows::Medium);
    graphic.set_bounds([1, 3, 5, 7]).unwrap();
    graphic.set_elements(elements(10)).unwrap();
    graphic.set_page(1).unwrap();

    assert_eq!(graphic.index_of(1), Some(4));
    assert_eq!(graphic.index_of(7), Some(7));
    assert_eq!(graphic.index_of(2), None);
    assert_eq!(graphic.element_at(3).map(|e| e.icon().glyph()), Some("e5"));
}

#[test]
fn test_element_click_fans_out_by_event_kind() {
    let host = host();
    let mut graphic = paged(&host, Rows::Medium);
    graphic.set_bounds_range(0, 9).unwrap();

    let clicks = Rc::new(Cell::new(0));
    let drags = Rc::new(Cell::new(0));
    let (click_seen, drag_seen) = (Rc::clone(&clicks), Rc::clone(&drags));
    let element = Element::new(Icon::new("target"))
        .with_action(Action::on_click(move |_: &mut PagedGraphic, _| {
            click_seen.set(click_seen.get() + 1);
            Ok(())
        }))
        .with_action(Action::on_drag(move |_: &mut PagedGraphic, _| {
            drag_seen.set(drag_seen.get() + 1);
            Ok(())
        }));
    graphic.add_element(element).unwrap();

    let viewer = ViewerId::new();
    let (event, report) = click(&mut graphic, viewer, 0);
    assert!(event.is_cancelled());
    assert!(report.is_clean());

    let mut edit = InteractionEvent::creative_edit(graphic.handle().id(), viewer, 0);
    graphic.handle_event(&mut edit);

    assert_eq!(clicks.get(), 2);
    assert_eq!(drags.get(), 0);
}

#[test]
fn test_element_action_can_change_the_page_layout() {
    let host = host();
    let mut graphic = paged(&host, Rows::Medium);
    graphic.set_bounds_range(0, 3).unwrap();

    let removing = Element::new(Icon::new("gone")).with_action(Action::on_click(|graphic: &mut PagedGraphic, event| {
        if let Some(index) = event.slot().and_then(|slot| graphic.index_of(slot)) {
            graphic.remove_element(index)?;
        }
        Ok(())
    }));
    graphic.add_element(removing).unwrap();
    graphic.add_elements(elements(2)).unwrap();

    let (_, report) = click(&mut graphic, ViewerId::new(), 0);
    assert!(report.is_clean());
    assert_eq!(graphic.elements().len(), 2);
    assert_eq!(glyph(&graphic, 0), Some("e0"));
    assert_eq!(glyph(&graphic, 2), None);
}

#[test]
fn test_failing_element_action_reports_the_cell() {
    let host = host();
    let mut graphic = paged(&host, Rows::Medium);
    graphic.set_bounds_range(0, 3).unwrap();
    graphic
        .add_element(
            Element::new(Icon::new("bad")).with_action(Action::on_click(|_: &mut PagedGraphic, _| anyhow::bail!("nope"))),
        )
        .unwrap();

    let (event, report) = click(&mut graphic, ViewerId::new(), 0);
    assert!(event.is_cancelled());
    assert!(matches!(
        report.failures.as_slice(),
        [GraphicError::ActionFailed { slot: Some(0), .. }]
    ));
}

#[test]
fn test_sync_is_idempotent() {
    let host = host();
    let mut graphic = paged(&host, Rows::Medium);
    graphic.set_bounds_range(10, 18).unwrap();
    graphic.set_elements(elements(12)).unwrap();

    let before: Vec<Option<Icon>> = graphic.handle().slots().to_vec();
    let actions_before = graphic.actions().len();
    graphic.sync().unwrap();
    graphic.sync().unwrap();

    assert_eq!(graphic.handle().slots(), before.as_slice());
    assert_eq!(graphic.actions().len(), actions_before);
}

#[test]
fn test_closed_paged_graphic_rejects_setters() {
    let host = host();
    let mut graphic = paged(&host, Rows::Medium);
    graphic.close();

    assert!(matches!(graphic.add_element(Element::new(Icon::new("x"))), Err(GraphicError::Closed)));
    assert!(matches!(graphic.set_bounds_count(3), Err(GraphicError::Closed)));
    assert!(matches!(graphic.sync(), Err(GraphicError::Closed)));
    assert_eq!(graphic.page(), 0);
    assert!(matches!(graphic.set_page(0), Err(GraphicError::Closed)));
}
