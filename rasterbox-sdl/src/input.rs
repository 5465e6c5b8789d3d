use rasterbox_core::InputSource;
use sdl2::EventPump;
use sdl2::event::Event;
use sdl2::keyboard::Keycode;

fn is_quit_request(event: &Event) -> bool {
    matches!(
        event,
        Event::Quit { .. }
            | Event::KeyDown {
                keycode: Some(Keycode::Escape),
                ..
            }
    )
}

/// Drains the SDL event queue once per frame. Anything but a quit request is ignored.
pub struct SdlInput<'a> {
    event_pump: &'a mut EventPump,
}

impl<'a> SdlInput<'a> {
    pub fn new(event_pump: &'a mut EventPump) -> Self {
        Self { event_pump }
    }
}

impl InputSource for SdlInput<'_> {
    fn keep_running(&mut self) -> bool {
        // drain everything, stale events would otherwise pile up
        let quit_requests = self
            .event_pump
            .poll_iter()
            .filter(is_quit_request)
            .count();

        quit_requests == 0
    }
}
