use super::input::{ActionStates, InputAction};
use super::rendering::Frame;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneCommand {
    None,
    Quit,
}

/// Input as seen by one simulation tick.
///
/// Directions are level state. `toggle_colliders_pressed` is an edge and is
/// true for exactly one tick per key press.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputSnapshot {
    quit_requested: bool,
    toggle_colliders_pressed: bool,
    actions: ActionStates,
}

impl InputSnapshot {
    pub fn empty() -> Self {
        Self::default()
    }

    pub(crate) fn new(
        quit_requested: bool,
        toggle_colliders_pressed: bool,
        actions: ActionStates,
    ) -> Self {
        Self {
            quit_requested,
            toggle_colliders_pressed,
            actions,
        }
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    pub fn toggle_colliders_pressed(&self) -> bool {
        self.toggle_colliders_pressed
    }

    pub fn is_down(&self, action: InputAction) -> bool {
        self.actions.is_down(action)
    }

    pub fn with_action_down(mut self, action: InputAction, is_down: bool) -> Self {
        self.actions.set(action, is_down);
        self
    }

    pub fn with_toggle_colliders_pressed(mut self, pressed: bool) -> Self {
        self.toggle_colliders_pressed = pressed;
        self
    }

    pub fn with_quit_requested(mut self, quit_requested: bool) -> Self {
        self.quit_requested = quit_requested;
        self
    }
}

/// Game-side hooks driven by the frame loop.
///
/// Every tick runs `update` to completion; `render` runs once per presented
/// frame, after all of that frame's ticks.
pub trait Scene {
    fn load(&mut self) {}
    fn update(&mut self, input: &InputSnapshot) -> SceneCommand;
    fn render(&self, frame: &mut Frame<'_>);
    fn unload(&mut self) {}
}
