use slotgrid::graphic::{ActionKind, Graphic, Icon, Rows, ViewerId};
use slotgrid::host::Notice;

use super::{click, elements, glyph, host, paged, NEXT, PREVIOUS};

fn three_pages(host: &std::rc::Rc<slotgrid::host::MemoryHost>) -> slotgrid::paged::PagedGraphic {
    let mut graphic = paged(host, Rows::Medium);
    graphic.set_bounds_range(0, 9).unwrap();
    graphic.set_elements(elements(25)).unwrap();
    graphic
}

#[test]
fn test_default_controls_describe_the_page() {
    let host = host();
    let graphic = three_pages(&host);

    let next = graphic.item(NEXT).unwrap();
    assert_eq!(next.display_name(), Some("Next Page"));
    assert!(next.lore_lines().iter().any(|line| line == "The actual page is 1/3."));
    assert_eq!(graphic.item(PREVIOUS).unwrap().display_name(), Some("Previous Page"));
}

#[test]
fn test_supplier_follows_the_page() {
    let host = host();
    let mut graphic = three_pages(&host);
    graphic
        .set_next_item(|info| Some(Icon::new(format!("{}/{}", info.page + 1, info.available_pages))))
        .unwrap();
    assert_eq!(glyph(&graphic, NEXT), Some("1/3"));

    graphic.set_page(1).unwrap();
    assert_eq!(glyph(&graphic, NEXT), Some("2/3"));
    assert_eq!(graphic.elements().len(), 25);
}

#[test]
fn test_next_control_advances_until_the_last_page() {
    let host = host();
    let mut graphic = three_pages(&host);
    let viewer = ViewerId::new();

    let (event, _) = click(&mut graphic, viewer, NEXT);
    assert!(event.is_cancelled());
    assert_eq!(graphic.page(), 1);
    assert_eq!(glyph(&graphic, 0), Some("e9"));

    click(&mut graphic, viewer, NEXT);
    assert_eq!(graphic.page(), 2);
    assert!(host.notices(viewer).is_empty());

    let (event, _) = click(&mut graphic, viewer, NEXT);
    assert!(event.is_cancelled());
    assert_eq!(graphic.page(), 2);
    assert_eq!(host.notices(viewer), vec![Notice::NoNextPage]);
}

#[test]
fn test_previous_control_stops_at_the_first_page() {
    let host = host();
    let mut graphic = three_pages(&host);
    graphic.set_page(1).unwrap();
    let viewer = ViewerId::new();

    click(&mut graphic, viewer, PREVIOUS);
    assert_eq!(graphic.page(), 0);

    let (event, report) = click(&mut graphic, viewer, PREVIOUS);
    assert!(event.is_cancelled());
    assert!(report.is_clean());
    assert_eq!(graphic.page(), 0);
}

#[test]
fn test_moving_a_control_releases_its_old_slot() {
    let host = host();
    let mut graphic = three_pages(&host);

    graphic.set_next_slot(25).unwrap();

    assert_eq!(graphic.next_slot(), 25);
    assert!(graphic.item(NEXT).is_none());
    assert!(!graphic.actions().get(Some(NEXT)).unwrap().contains_kind(ActionKind::NextPage));
    assert!(graphic.item(25).is_some());
    assert!(graphic.actions().get(Some(25)).unwrap().contains_kind(ActionKind::NextPage));

    graphic.set_previous_slot(19).unwrap();
    assert!(graphic.item(PREVIOUS).is_none());
    assert!(graphic.actions().get(Some(19)).unwrap().contains_kind(ActionKind::PreviousPage));
}

#[test]
fn test_empty_supplier_clears_the_control() {
    let host = host();
    let mut graphic = three_pages(&host);
    graphic.set_previous_item(|info| info.has_previous().then(|| Icon::new("<"))).unwrap();
    assert!(graphic.item(PREVIOUS).is_none());

    graphic.set_page(1).unwrap();
    assert_eq!(glyph(&graphic, PREVIOUS), Some("<"));

    graphic.set_page(0).unwrap();
    assert!(graphic.item(PREVIOUS).is_none());
}

#[test]
fn test_controls_beyond_the_grid_are_skipped() {
    let host = host();
    let mut graphic = paged(&host, Rows::Small);
    graphic.set_bounds_range(0, 9).unwrap();

    assert!(graphic.item(17).is_none());
    assert!(graphic.actions().get(Some(PREVIOUS)).is_none());
    assert!(graphic.actions().get(Some(NEXT)).is_none());

    graphic.set_rows(Rows::Medium).unwrap();
    assert!(graphic.item(PREVIOUS).is_some());
    assert!(graphic.item(NEXT).is_some());
}

#[test]
fn test_shrinking_drops_controls_past_the_grid() {
    let host = host();
    let mut graphic = three_pages(&host);
    assert!(graphic.actions().get(Some(NEXT)).unwrap().contains_kind(ActionKind::NextPage));

    graphic.set_rows(Rows::Small).unwrap();

    for slot in [PREVIOUS, NEXT] {
        let set = graphic.actions().get(Some(slot)).unwrap();
        assert!(!set.iter().any(|action| action.kind().is_paged()), "slot {slot}");
    }
}

#[test]
fn test_controls_survive_a_retitle() {
    let host = host();
    let mut graphic = three_pages(&host);
    graphic.set_title(Some("Renamed".to_string())).unwrap();

    let viewer = ViewerId::new();
    click(&mut graphic, viewer, NEXT);
    assert_eq!(graphic.page(), 1);
}
