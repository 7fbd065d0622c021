//! Frame-level flight input.
//!
//! The windowing layer translates raw device events into this state; the
//! simulation only reads it. Pulses (camera cycle, restart, pause, quit)
//! are edge-triggered and last one frame.

use glam::Vec2;

/// Manages flight input state for the current frame.
#[derive(Debug, Default)]
pub struct FlightInput {
    /// Per-thruster hold state, matching the craft's thruster order.
    thrusters: [bool; 4],
    /// Analog camera look axis, each component in [-1, 1].
    camera_axis: Vec2,
    /// Pointer position in window coordinates.
    pointer_position: Vec2,
    /// Pointer movement delta this frame.
    pointer_delta: Vec2,
    /// Accumulated pointer delta (flushed into `pointer_delta` each frame).
    accumulated_delta: Vec2,
    /// Whether a camera drag is in progress.
    dragging: bool,

    // Edge-triggered pulses.
    cycle_camera: bool,
    restart: bool,
    pause: bool,
    quit: bool,
}

impl FlightInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear per-frame state. Call at the start of each frame.
    pub fn begin_frame(&mut self) {
        self.pointer_delta = self.accumulated_delta;
        self.accumulated_delta = Vec2::ZERO;
        self.cycle_camera = false;
        self.restart = false;
        self.pause = false;
        self.quit = false;
    }

    /// Set a thruster hold state by index. Out-of-range indices are ignored.
    pub fn set_thruster(&mut self, index: usize, held: bool) {
        if let Some(slot) = self.thrusters.get_mut(index) {
            *slot = held;
        }
    }

    /// Set the analog camera look axis.
    pub fn set_camera_axis(&mut self, axis: Vec2) {
        self.camera_axis = axis;
    }

    /// Process pointer movement.
    pub fn process_pointer_motion(&mut self, delta: (f64, f64)) {
        self.accumulated_delta.x += delta.0 as f32;
        self.accumulated_delta.y += delta.1 as f32;
    }

    /// Process pointer position update.
    pub fn process_pointer_position(&mut self, position: (f64, f64)) {
        self.pointer_position = Vec2::new(position.0 as f32, position.1 as f32);
    }

    /// Set whether a camera drag is in progress.
    pub fn set_dragging(&mut self, dragging: bool) {
        self.dragging = dragging;
    }

    /// Pulse the camera-cycle action for this frame.
    pub fn pulse_cycle_camera(&mut self) {
        self.cycle_camera = true;
    }

    /// Pulse the restart action for this frame.
    pub fn pulse_restart(&mut self) {
        self.restart = true;
    }

    /// Pulse the pause toggle for this frame.
    pub fn pulse_pause(&mut self) {
        self.pause = true;
    }

    /// Pulse the quit action for this frame.
    pub fn pulse_quit(&mut self) {
        self.quit = true;
    }

    // Query methods

    /// Per-thruster hold state.
    pub fn thrusters(&self) -> [bool; 4] {
        self.thrusters
    }

    /// Analog camera look axis.
    pub fn camera_axis(&self) -> Vec2 {
        self.camera_axis
    }

    /// Pointer position in window coordinates.
    pub fn pointer_position(&self) -> Vec2 {
        self.pointer_position
    }

    /// Pointer movement delta this frame.
    pub fn pointer_delta(&self) -> Vec2 {
        self.pointer_delta
    }

    /// Whether a camera drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Whether the camera-cycle action was pulsed this frame.
    pub fn cycle_camera(&self) -> bool {
        self.cycle_camera
    }

    /// Whether the restart action was pulsed this frame.
    pub fn restart(&self) -> bool {
        self.restart
    }

    /// Whether the pause toggle was pulsed this frame.
    pub fn pause(&self) -> bool {
        self.pause
    }

    /// Whether the quit action was pulsed this frame.
    pub fn quit(&self) -> bool {
        self.quit
    }
}
