use crossterm::event::{poll, Event, KeyEvent, KeyEventKind, MouseEvent};
use tokio::time::{interval, Duration, Interval, MissedTickBehavior};

pub struct EventHandler {
    tick_interval: Interval,
}

impl EventHandler {
    pub fn new() -> Self {
        let mut tick_interval = interval(Duration::from_millis(100)); // 10 Hz for application ticks
        tick_interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        Self { tick_interval }
    }

    pub async fn next_event(&mut self) -> anyhow::Result<EventType> {
        // Check for terminal events without blocking first
        if poll(Duration::from_millis(0))? {
            let event = match crossterm::event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => EventType::Key(key),
                Event::Mouse(mouse) => EventType::Mouse(mouse),
                Event::Resize(w, h) => EventType::Resize(w, h),
                _ => EventType::Other,
            };
            return Ok(event);
        }

        // If no immediate event, wait for the next tick
        self.tick_interval.tick().await;
        Ok(EventType::Tick)
    }
}

#[derive(Debug, Clone)]
pub enum EventType {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
    Tick,
    Other,
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}
