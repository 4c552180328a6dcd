//! Application state of the terminal demo

use std::rc::Rc;

use anyhow::Result;

use super::host::TerminalHost;
use crate::config::Config;
use crate::constants::{DEMO_ELEMENT_COUNT, DEMO_TITLES, GRID_COLUMNS};
use crate::graphic::{Action, Graphic, Icon, InteractionEvent, ViewerId};
use crate::host::{Host, Notice};
use crate::icons::IconService;
use crate::logger::Logger;
use crate::paged::{BlankItem, Element, PagedGraphic};

pub struct App {
    pub host: Rc<TerminalHost>,
    pub graphic: PagedGraphic,
    pub icons: IconService,
    pub logger: Logger,
    pub cursor: usize,
    pub show_logs: bool,
    pub show_slot_numbers: bool,
    pub status: Option<String>,
    pub error_message: Option<String>,
    pub should_quit: bool,
    blank_slot: Option<usize>,
    title_index: usize,
    created: usize,
}

impl App {
    /// Build the demo graphic from `config`, fill it and open it to the
    /// local viewer.
    pub fn new(config: &Config, logger: Logger) -> Result<Self> {
        let host = Rc::new(TerminalHost::new(ViewerId::new()));
        let shared: Rc<dyn Host> = host.clone();
        let graphic = PagedGraphic::from_config(shared, config)?;

        let mut app = Self {
            host,
            graphic,
            icons: IconService::new(config.display.icon_theme),
            logger,
            cursor: 0,
            show_logs: false,
            show_slot_numbers: config.display.show_slot_numbers,
            status: None,
            error_message: None,
            should_quit: false,
            blank_slot: config.pagination.blank_slot,
            title_index: 0,
            created: 0,
        };

        let elements: Vec<Element> = (0..DEMO_ELEMENT_COUNT).map(|_| app.next_element()).collect();
        app.graphic.add_elements(elements)?;
        app.graphic.cancel_on_drag()?;
        app.graphic.open(&[app.host.viewer()])?;
        Ok(app)
    }

    fn next_element(&mut self) -> Element {
        let number = self.created;
        self.created += 1;

        let name = format!("Item #{}", number + 1);
        let icon = Icon::new(self.icons.element(number))
            .name(name.clone())
            .lore([format!("Created as element {}.", number + 1)]);

        Element::new(icon).with_action(Action::on_click(move |graphic: &mut PagedGraphic, event| {
            graphic
                .host()
                .notify(event.viewer(), Notice::Message(format!("You picked {name}.")));
            Ok(())
        }))
    }

    // Cursor

    pub fn move_cursor(&mut self, columns: isize, rows: isize) {
        let size = self.graphic.size() as isize;
        let width = GRID_COLUMNS as isize;
        let cursor = self.cursor as isize;

        let column = (cursor % width + columns).clamp(0, width - 1);
        let row = (cursor / width + rows).clamp(0, size / width - 1);
        self.cursor = (row * width + column) as usize;
    }

    pub fn set_cursor(&mut self, slot: usize) {
        if slot < self.graphic.size() {
            self.cursor = slot;
        }
    }

    fn clamp_cursor(&mut self) {
        self.cursor = self.cursor.min(self.graphic.size().saturating_sub(1));
    }

    // Graphic operations

    /// Click the slot under the cursor, like a real viewer would.
    pub fn click(&mut self) {
        if !self.host.is_delivering() {
            self.status = Some("Nobody is listening".to_string());
            return;
        }

        let mut event = InteractionEvent::click(self.graphic.handle().id(), self.host.viewer(), self.cursor);
        let report = self.graphic.handle_event(&mut event);
        if let Some(failure) = report.failures.first() {
            self.error_message = Some(failure.to_string());
        }
        self.drain_notices();
    }

    pub fn grow(&mut self) -> Result<()> {
        match self.graphic.rows().grow() {
            Some(rows) => self.graphic.set_rows(rows)?,
            None => self.status = Some("The grid is already at its largest".to_string()),
        }
        Ok(())
    }

    pub fn shrink(&mut self) -> Result<()> {
        match self.graphic.rows().shrink() {
            Some(rows) => {
                self.graphic.set_rows(rows)?;
                self.clamp_cursor();
            }
            None => self.status = Some("The grid is already at its smallest".to_string()),
        }
        Ok(())
    }

    pub fn retitle(&mut self) -> Result<()> {
        self.title_index = (self.title_index + 1) % DEMO_TITLES.len();
        self.graphic.set_title(Some(DEMO_TITLES[self.title_index].to_string()))?;
        Ok(())
    }

    pub fn cycle_icon_theme(&mut self) -> Result<()> {
        self.icons.cycle_icon_theme();
        let theme = self.icons.theme();
        if let Some(slot) = self.graphic.blank_item().map(BlankItem::slot) {
            let rethemed = BlankItem::themed(slot, theme)?;
            self.graphic.set_blank_item(Some(rethemed))?;
        }
        self.graphic.set_icon_theme(theme)?;
        Ok(())
    }

    pub fn add_element(&mut self) -> Result<()> {
        let element = self.next_element();
        self.graphic.add_element(element)?;
        self.status = Some(format!("{} elements", self.graphic.elements().len()));
        Ok(())
    }

    /// Delete the element under the cursor
    pub fn delete_element(&mut self) -> Result<()> {
        let Some(index) = self.graphic.index_of(self.cursor) else {
            self.status = Some("No element under the cursor".to_string());
            return Ok(());
        };

        if self.graphic.remove_element(index)?.is_some() {
            self.status = Some(format!("{} elements", self.graphic.elements().len()));
        }
        Ok(())
    }

    pub fn toggle_blank(&mut self) -> Result<()> {
        if self.graphic.blank_item().is_some() {
            self.graphic.set_blank_item(None)?;
            return Ok(());
        }

        let slot = self.blank_slot.or_else(|| self.graphic.available_bounds().first().copied());
        match slot {
            Some(slot) => {
                self.blank_slot = Some(slot);
                let blank = BlankItem::themed(slot, self.icons.theme())?;
                self.graphic.set_blank_item(Some(blank))?;
            }
            None => self.status = Some("There is no slot for the filler".to_string()),
        }
        Ok(())
    }

    pub fn toggle_logs(&mut self) {
        self.show_logs = !self.show_logs;
    }

    /// Move pending host notices into the status line
    pub fn drain_notices(&mut self) {
        for notice in self.host.take_notices() {
            log::info!("{notice}");
            self.status = Some(notice.to_string());
        }
    }

    /// Show a failed operation instead of aborting the demo
    pub fn report(&mut self, result: Result<()>) {
        if let Err(e) = result {
            log::error!("{e:#}");
            self.error_message = Some(format!("{e:#}"));
        }
    }

    pub fn quit(&mut self) {
        self.graphic.close();
        self.should_quit = true;
    }
}
