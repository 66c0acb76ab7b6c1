//! Platform-free logic behind the folio site: page interaction state
//! machines and the animated background scene.

pub mod config;
pub mod constants;
pub mod counter;
pub mod cursor;
pub mod easing;
pub mod error;
pub mod menu;
pub mod navbar;
pub mod parallax;
pub mod projects;
pub mod reveal;
pub mod scene;
pub mod theme;

pub use config::*;
pub use counter::*;
pub use cursor::*;
pub use easing::*;
pub use error::{FolioError, Result};
pub use menu::*;
pub use navbar::*;
pub use parallax::*;
pub use projects::*;
pub use reveal::*;
pub use scene::{
    Camera, CameraRig, MeshKind, ObjectKind, PointerState, PolyhedronKind, RendererPhase, Scene,
    SceneObject,
};
pub use theme::*;
