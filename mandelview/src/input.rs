use shared::Navigation;
use winit::keyboard::KeyCode;

/// Keys currently held down. Every held key applies once per frame, so
/// opposing keys cancel out step by step rather than suppressing each other.
#[derive(Clone, Copy, Debug, Default)]
pub struct InputState {
    pan_up: bool,
    pan_down: bool,
    pan_left: bool,
    pan_right: bool,
    zoom_in: bool,
    zoom_out: bool,
}

impl InputState {
    pub fn handle_key(&mut self, code: KeyCode, pressed: bool) {
        match code {
            KeyCode::KeyW => self.pan_up = pressed,
            KeyCode::KeyS => self.pan_down = pressed,
            KeyCode::KeyA => self.pan_left = pressed,
            KeyCode::KeyD => self.pan_right = pressed,
            KeyCode::KeyQ => self.zoom_in = pressed,
            KeyCode::KeyE => self.zoom_out = pressed,
            _ => {}
        }
    }

    pub fn apply(&self, nav: &mut Navigation) {
        if self.pan_up {
            nav.pan_up();
        }
        if self.pan_down {
            nav.pan_down();
        }
        if self.pan_left {
            nav.pan_left();
        }
        if self.pan_right {
            nav.pan_right();
        }
        if self.zoom_in {
            nav.zoom_in();
        }
        if self.zoom_out {
            nav.zoom_out();
        }
    }
}

#[cfg(test)]
mod tests {
    use shared::navigation::PAN_SPEED;

    use super::*;

    #[test]
    fn press_and_release_track_held_keys() {
        let mut input = InputState::default();
        let mut nav = Navigation::default();

        input.handle_key(KeyCode::KeyD, true);
        input.apply(&mut nav);
        assert_eq!(nav.center_x, PAN_SPEED);

        input.handle_key(KeyCode::KeyD, false);
        input.apply(&mut nav);
        assert_eq!(nav.center_x, PAN_SPEED);
    }

    #[test]
    fn pan_keys_follow_screen_directions() {
        let mut input = InputState::default();
        let mut nav = Navigation::default();

        input.handle_key(KeyCode::KeyW, true);
        input.handle_key(KeyCode::KeyA, true);
        input.apply(&mut nav);

        assert_eq!(nav.center_y, -PAN_SPEED);
        assert_eq!(nav.center_x, -PAN_SPEED);
    }

    #[test]
    fn unbound_keys_are_ignored() {
        let mut input = InputState::default();
        let mut nav = Navigation::default();

        input.handle_key(KeyCode::KeyZ, true);
        input.apply(&mut nav);

        assert_eq!(nav, Navigation::default());
    }

    #[test]
    fn no_input_leaves_navigation_untouched() {
        let input = InputState::default();
        let mut nav = Navigation::default();
        nav.pan_right();
        let before = nav;

        input.apply(&mut nav);
        assert_eq!(nav, before);
    }

    #[test]
    fn both_zoom_keys_apply_every_frame() {
        let mut input = InputState::default();
        let mut nav = Navigation::default();

        input.handle_key(KeyCode::KeyQ, true);
        input.handle_key(KeyCode::KeyE, true);
        input.apply(&mut nav);

        let mut expected = Navigation::default();
        expected.zoom_in();
        expected.zoom_out();
        assert_eq!(nav.zoom, expected.zoom);
    }
}
