//! Camera Controller Module
//!
//! Follow camera that trails the player capsule from a fixed height and a
//! fixed distance behind (+Z). The transform is recomputed from the character
//! position every tick with no smoothing, so the camera never lags but does
//! jump if the character teleports.
//! This is window-system agnostic - it only manages camera state and math.

use glam::{Mat4, Vec3};

use crate::config::CameraConfig;
use crate::player::CharacterState;

/// Derived camera transform for the renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraState {
    pub position: Vec3,
    pub look_at: Vec3,
}

/// Camera that snaps to a fixed offset from the character every tick.
#[derive(Clone, Debug)]
pub struct FollowCamera {
    /// Fixed world-space Y of the camera
    height: f32,
    /// Fixed distance behind the character along +Z
    back_offset: f32,
    /// Vertical field of view (radians)
    fov_y: f32,
    near: f32,
    far: f32,
    state: CameraState,
}

impl Default for FollowCamera {
    fn default() -> Self {
        Self::new(&CameraConfig::default())
    }
}

impl FollowCamera {
    /// Create a camera framing the world origin.
    pub fn new(config: &CameraConfig) -> Self {
        let mut camera = Self {
            height: config.height,
            back_offset: config.back_offset,
            fov_y: config.fov_degrees.to_radians(),
            near: config.near,
            far: config.far,
            state: CameraState {
                position: Vec3::ZERO,
                look_at: Vec3::ZERO,
            },
        };
        camera.follow_point(Vec3::ZERO);
        camera
    }

    /// Recompute the transform from the character's current position.
    pub fn follow(&mut self, character: &CharacterState) {
        self.follow_point(character.position);
    }

    /// Recompute the transform for an arbitrary target point.
    pub fn follow_point(&mut self, target: Vec3) {
        self.state = CameraState {
            position: Vec3::new(target.x, self.height, target.z + self.back_offset),
            look_at: target,
        };
    }

    pub fn state(&self) -> CameraState {
        self.state
    }

    /// Camera position in world space.
    pub fn get_position(&self) -> Vec3 {
        self.state.position
    }

    /// Point the camera looks at (the character).
    pub fn get_look_at(&self) -> Vec3 {
        self.state.look_at
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn back_offset(&self) -> f32 {
        self.back_offset
    }

    /// Unit view direction. Falls back to straight down when the camera sits
    /// on its target.
    #[inline]
    pub fn get_forward(&self) -> Vec3 {
        let to_target = self.state.look_at - self.state.position;
        if to_target.length_squared() < 1e-8 {
            return Vec3::NEG_Y;
        }
        to_target.normalize()
    }

    /// Up vector for the view matrix.
    ///
    /// World +Y, except when looking straight down where +Y is parallel to the
    /// view direction; -Z is used there instead.
    #[inline]
    pub fn get_up(&self) -> Vec3 {
        let forward = self.get_forward();
        if forward.cross(Vec3::Y).length_squared() < 1e-8 {
            Vec3::NEG_Z
        } else {
            Vec3::Y
        }
    }

    /// Horizontal angle (radians) of the view direction, 0 looking toward -Z.
    pub fn get_yaw(&self) -> f32 {
        let forward = self.get_forward();
        forward.x.atan2(-forward.z)
    }

    /// Vertical angle (radians) of the view direction, negative looking down.
    pub fn get_pitch(&self) -> f32 {
        self.get_forward().y.clamp(-1.0, 1.0).asin()
    }

    /// Right-handed view matrix.
    pub fn view_matrix(&self) -> Mat4 {
        let up = self.get_up();
        let eye = self.state.position;
        let target = if (self.state.look_at - eye).length_squared() < 1e-8 {
            eye + Vec3::NEG_Y
        } else {
            self.state.look_at
        };
        Mat4::look_at_rh(eye, target, up)
    }

    /// Right-handed perspective projection (depth 0..1) for `aspect` = width / height.
    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        let aspect = if aspect > 0.0 && aspect.is_finite() { aspect } else { 1.0 };
        Mat4::perspective_rh(self.fov_y, aspect, self.near, self.far)
    }

    /// `projection * view`.
    pub fn view_projection(&self, aspect: f32) -> Mat4 {
        self.projection_matrix(aspect) * self.view_matrix()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_frames_origin() {
        let camera = FollowCamera::default();
        assert_eq!(camera.get_position(), Vec3::new(0.0, 20.0, 15.0));
        assert_eq!(camera.get_look_at(), Vec3::ZERO);
    }

    #[test]
    fn test_follow_snaps_without_lag() {
        let mut camera = FollowCamera::default();
        let character = CharacterState::new(Vec3::new(100.0, 0.5, -40.0));
        camera.follow(&character);
        assert_eq!(camera.get_position(), Vec3::new(100.0, 20.0, -25.0));
        assert_eq!(camera.get_look_at(), character.position);
    }

    #[test]
    fn test_forward_looks_down_and_forward() {
        let camera = FollowCamera::default();
        let forward = camera.get_forward();
        assert!((forward.length() - 1.0).abs() < 1e-5);
        assert!(forward.y < 0.0);
        assert!(forward.z < 0.0);
        assert!(camera.get_yaw().abs() < 1e-5);
        assert!(camera.get_pitch() < 0.0);
    }

    #[test]
    fn test_top_down_camera_has_valid_view() {
        let mut camera = FollowCamera::new(&CameraConfig {
            back_offset: 0.0,
            ..CameraConfig::default()
        });
        camera.follow_point(Vec3::new(3.0, 0.0, 4.0));
        assert_eq!(camera.get_up(), Vec3::NEG_Z);
        let view = camera.view_matrix();
        assert!(view.is_finite());
    }

    #[test]
    fn test_view_projection_puts_target_in_front() {
        let mut camera = FollowCamera::default();
        camera.follow_point(Vec3::new(5.0, 0.5, 5.0));
        let clip = camera.view_projection(16.0 / 9.0) * camera.get_look_at().extend(1.0);
        assert!(clip.w > 0.0);
        let ndc = clip.truncate() / clip.w;
        assert!(ndc.x.abs() < 1e-4);
        assert!(ndc.y.abs() < 1e-4);
        assert!(ndc.z > 0.0 && ndc.z < 1.0);
    }
}
