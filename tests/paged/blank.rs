use slotgrid::graphic::{ActionKind, Graphic, Icon, Rows, ViewerId};
use slotgrid::host::Notice;
use slotgrid::paged::{BlankItem, Element};

use super::{click, elements, glyph, host, paged};

fn has_filler_action(graphic: &slotgrid::paged::PagedGraphic, slot: usize) -> bool {
    graphic
        .actions()
        .get(Some(slot))
        .is_some_and(|set| set.contains_kind(ActionKind::Filler))
}

#[test]
fn test_filler_replaces_an_empty_page() {
    let host = host();
    let mut graphic = paged(&host, Rows::Medium);
    graphic.set_bounds_range(10, 18).unwrap();
    graphic.set_blank_item(Some(BlankItem::new(22).unwrap())).unwrap();

    assert_eq!(graphic.blank_slot(), Some(22));
    assert_eq!(graphic.item(22).and_then(Icon::display_name), Some("Empty!"));
    assert!(has_filler_action(&graphic, 22));
    for slot in 10..18 {
        assert!(graphic.item(slot).is_none(), "slot {slot}");
    }

    graphic.add_element(Element::new(Icon::new("first"))).unwrap();

    assert_eq!(graphic.blank_slot(), None);
    assert!(graphic.item(22).is_none());
    assert!(!has_filler_action(&graphic, 22));
    assert_eq!(glyph(&graphic, 10), Some("first"));
}

#[test]
fn test_filler_inside_the_bounds() {
    let host = host();
    let mut graphic = paged(&host, Rows::Medium);
    graphic.set_bounds_range(10, 18).unwrap();
    graphic.set_elements(elements(3)).unwrap();
    graphic.set_blank_item(Some(BlankItem::new(13).unwrap())).unwrap();
    assert_eq!(graphic.blank_slot(), None);

    graphic.clear_elements().unwrap();
    assert_eq!(graphic.blank_slot(), Some(13));
    assert_eq!(graphic.item(13).and_then(Icon::display_name), Some("Empty!"));
    for slot in (10..18).filter(|&slot| slot != 13) {
        assert!(graphic.item(slot).is_none(), "slot {slot}");
    }

    graphic.set_elements(elements(8)).unwrap();
    assert_eq!(glyph(&graphic, 13), Some("e3"));
    assert!(!has_filler_action(&graphic, 13));
}

#[test]
fn test_clicking_the_filler_says_nothing_is_here() {
    let host = host();
    let mut graphic = paged(&host, Rows::Medium);
    graphic.set_blank_item(Some(BlankItem::new(4).unwrap())).unwrap();

    let viewer = ViewerId::new();
    let (event, report) = click(&mut graphic, viewer, 4);

    assert!(event.is_cancelled());
    assert!(report.is_clean());
    assert_eq!(host.notices(viewer), vec![Notice::NothingHere]);
}

#[test]
fn test_moving_and_removing_the_filler() {
    let host = host();
    let mut graphic = paged(&host, Rows::Medium);
    graphic.set_blank_item(Some(BlankItem::new(4).unwrap())).unwrap();

    graphic.set_blank_item(Some(BlankItem::new(5).unwrap())).unwrap();
    assert!(graphic.item(4).is_none());
    assert!(!has_filler_action(&graphic, 4));
    assert_eq!(graphic.blank_slot(), Some(5));

    let custom = BlankItem::with_icon(5, Icon::new("~")).unwrap();
    graphic.set_blank_item(Some(custom)).unwrap();
    assert_eq!(glyph(&graphic, 5), Some("~"));
    assert_eq!(graphic.actions().get(Some(5)).map(|set| set.len()), Some(1));

    graphic.set_blank_item(None).unwrap();
    assert_eq!(graphic.blank_slot(), None);
    assert!(graphic.item(5).is_none());
    assert!(!has_filler_action(&graphic, 5));
}

#[test]
fn test_filler_outside_a_shrunk_grid_is_dropped() {
    let host = host();
    let mut graphic = paged(&host, Rows::Medium);
    graphic.set_blank_item(Some(BlankItem::new(22).unwrap())).unwrap();
    assert_eq!(graphic.blank_slot(), Some(22));

    graphic.set_rows(Rows::Small).unwrap();
    assert_eq!(graphic.blank_slot(), None);

    graphic.set_rows(Rows::Medium).unwrap();
    assert_eq!(graphic.blank_slot(), Some(22));
    assert!(has_filler_action(&graphic, 22));
}
