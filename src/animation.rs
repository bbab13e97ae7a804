//! Vector-animation backend seam and the scene loader that falls back to the
//! placeholder renderer
//!
//! The shipped backend never loads, so in practice every scene is the
//! hand-drawn placeholder.

use crate::config::SurfaceConfig;
use crate::errors::RenderError;
use crate::games::types::GameMode;
use crate::scene::{Dimensions, PlaceholderRenderer, Scene};
use tracing::{error, info};

/// Construction options handed to the backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendOptions {
    pub canvas_id: String,
    pub autoplay: bool,
    pub state_machine: String,
}

impl BackendOptions {
    pub fn from_surface(canvas_id: &str, surface: &SurfaceConfig) -> Self {
        Self {
            canvas_id: canvas_id.to_string(),
            autoplay: surface.autoplay,
            state_machine: surface.state_machine.clone(),
        }
    }
}

/// Boolean inputs exposed by the backend's state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendInput {
    Trigger,
    Reset,
}

/// Current values of the backend inputs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BackendInputs {
    pub trigger: bool,
    pub reset: bool,
}

impl BackendInputs {
    pub fn set(&mut self, input: BackendInput, value: bool) {
        match input {
            BackendInput::Trigger => self.trigger = value,
            BackendInput::Reset => self.reset = value,
        }
    }
}

/// A vector-animation runtime bound to the canvas
pub trait AnimationBackend {
    /// Construct an instance for `mode`
    fn load(&mut self, mode: GameMode, options: &BackendOptions) -> Result<(), RenderError>;

    /// Release the running instance
    fn cleanup(&mut self);

    /// Forward an input value to the running state machine
    fn set_input(&mut self, input: BackendInput, value: bool);
}

/// Backend for builds without a vector-animation runtime
#[derive(Debug, Default)]
pub struct UnavailableBackend;

impl AnimationBackend for UnavailableBackend {
    fn load(&mut self, mode: GameMode, _options: &BackendOptions) -> Result<(), RenderError> {
        Err(RenderError::BackendUnavailable(format!(
            "no animation runtime compiled in for {}",
            mode
        )))
    }

    fn cleanup(&mut self) {}

    fn set_input(&mut self, _input: BackendInput, _value: bool) {}
}

/// Builds scenes, trying the backend first
pub struct SceneLoader<B: AnimationBackend> {
    backend: B,
    options: BackendOptions,
    surface: SurfaceConfig,
    generation: u64,
    backend_active: bool,
}

impl<B: AnimationBackend> SceneLoader<B> {
    pub fn new(backend: B, canvas_id: &str, surface: SurfaceConfig) -> Self {
        Self {
            backend,
            options: BackendOptions::from_surface(canvas_id, &surface),
            surface,
            generation: 0,
            backend_active: false,
        }
    }

    /// Discard the previous scene and build one for `mode`.
    ///
    /// Backend failures are logged and never reach the caller. The overlay
    /// elements always come from the placeholder renderer.
    pub fn load(&mut self, mode: GameMode, client_width: f64, client_height: f64) -> Scene {
        if self.backend_active {
            self.backend.cleanup();
            self.backend_active = false;
        }

        self.generation += 1;
        let dims = Dimensions::measure(client_width, client_height, &self.surface);

        match self.backend.load(mode, &self.options) {
            Ok(()) => {
                info!(game = %mode, "{} animation loaded", mode);
                self.backend_active = true;
            }
            Err(e) => {
                error!(game = %mode, error = %e, "Error loading animation, using placeholder");
            }
        }

        PlaceholderRenderer::render(mode, dims, self.generation)
    }

    pub fn set_input(&mut self, input: BackendInput, value: bool) {
        if self.backend_active {
            self.backend.set_input(input, value);
        }
    }
}
