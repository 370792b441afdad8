//! Drawing surface abstraction with a stack of 2d transforms.

use std::ops::{Deref, DerefMut};

use nalgebra::{Matrix3, Rotation2, Translation2};
use placemark_types::cartesian::{Point2d, Vector2d};

/// Surface that symbols are drawn onto.
///
/// The surface keeps a current transform and a stack of saved transforms, like a canvas 2d context does.
pub trait DrawingSurface {
    /// Pushes the current transform to the stack.
    fn save(&mut self);
    /// Pops the last saved transform from the stack and makes it current.
    fn restore(&mut self);
    /// Moves the origin of the current transform.
    fn translate(&mut self, x: f64, y: f64);
    /// Rotates the current transform by `angle` radians, clockwise on a surface with the y axis pointing down.
    fn rotate(&mut self, angle: f64);
}

/// Surface with a rotation transform applied to it.
///
/// The transform is applied when the guard is created and is undone exactly once when the guard is dropped, so the
/// state of the surface does not leak into the following draw calls even if drawing panics. The symbol is supposed
/// to be drawn through this guard at the [offset](RotatedSurface::offset) position.
pub struct RotatedSurface<'a, S: DrawingSurface + ?Sized> {
    surface: &'a mut S,
    offset: Vector2d,
}

impl<'a, S: DrawingSurface + ?Sized> RotatedSurface<'a, S> {
    pub(crate) fn new(
        surface: &'a mut S,
        origin: Point2d,
        offset: Vector2d,
        rotation: f64,
    ) -> Self {
        let base = origin - offset;
        surface.save();
        surface.translate(base.x, base.y);
        surface.rotate(rotation);

        Self { surface, offset }
    }

    /// Offset of the symbol that was subtracted from the origin before rotation. Drawing a symbol at this position
    /// puts it at the symbol position rotated around the anchor point.
    pub fn offset(&self) -> Vector2d {
        self.offset
    }

    /// Restores the surface transform.
    pub fn release(self) {}
}

impl<S: DrawingSurface + ?Sized> Deref for RotatedSurface<'_, S> {
    type Target = S;

    fn deref(&self) -> &S {
        &*self.surface
    }
}

impl<S: DrawingSurface + ?Sized> DerefMut for RotatedSurface<'_, S> {
    fn deref_mut(&mut self) -> &mut S {
        &mut *self.surface
    }
}

impl<S: DrawingSurface + ?Sized> Drop for RotatedSurface<'_, S> {
    fn drop(&mut self) {
        self.surface.restore();
    }
}

/// Drawing surface that only tracks its transforms. Can be used to calculate where a symbol ends up on the screen.
#[derive(Debug, Clone)]
pub struct MatrixSurface {
    transform: Matrix3<f64>,
    stack: Vec<Matrix3<f64>>,
    mutations: usize,
}

impl Default for MatrixSurface {
    fn default() -> Self {
        Self {
            transform: Matrix3::identity(),
            stack: vec![],
            mutations: 0,
        }
    }
}

impl MatrixSurface {
    /// Creates a surface with identity transform.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current transform.
    pub fn transform(&self) -> &Matrix3<f64> {
        &self.transform
    }

    /// Number of saved transforms.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Number of calls that changed the state of the surface.
    pub fn mutations(&self) -> usize {
        self.mutations
    }

    /// Applies the current transform to the point.
    pub fn apply(&self, point: &Point2d) -> Point2d {
        self.transform.transform_point(point)
    }
}

impl DrawingSurface for MatrixSurface {
    fn save(&mut self) {
        self.mutations += 1;
        self.stack.push(self.transform);
    }

    fn restore(&mut self) {
        self.mutations += 1;
        match self.stack.pop() {
            Some(transform) => self.transform = transform,
            None => log::warn!("Surface restore called without matching save"),
        }
    }

    fn translate(&mut self, x: f64, y: f64) {
        self.mutations += 1;
        self.transform *= Translation2::new(x, y).to_homogeneous();
    }

    fn rotate(&mut self, angle: f64) {
        self.mutations += 1;
        self.transform *= Rotation2::new(angle).to_homogeneous();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn save_and_restore() {
        let mut surface = MatrixSurface::new();
        surface.save();
        surface.translate(10.0, 5.0);
        assert_eq!(surface.depth(), 1);
        assert_abs_diff_eq!(
            surface.apply(&Point2d::new(1.0, 1.0)),
            Point2d::new(11.0, 6.0)
        );

        surface.restore();
        assert_eq!(surface.depth(), 0);
        assert_eq!(surface.transform(), &Matrix3::identity());
    }

    #[test]
    fn unbalanced_restore_is_ignored() {
        let mut surface = MatrixSurface::new();
        surface.translate(1.0, 0.0);
        surface.restore();
        assert_abs_diff_eq!(surface.apply(&Point2d::origin()), Point2d::new(1.0, 0.0));
    }

    #[test]
    fn rotated_surface_restores_on_drop() {
        let mut surface = MatrixSurface::new();
        {
            let rotated = RotatedSurface::new(
                &mut surface,
                Point2d::new(10.0, 10.0),
                Vector2d::new(2.0, 0.0),
                std::f64::consts::FRAC_PI_2,
            );
            assert_eq!(rotated.depth(), 1);
            // Offset position rotated around `origin - offset`.
            assert_abs_diff_eq!(
                rotated.apply(&Point2d::from(rotated.offset())),
                Point2d::new(8.0, 12.0),
                epsilon = 1e-9
            );
        }

        assert_eq!(surface.depth(), 0);
        assert_eq!(surface.transform(), &Matrix3::identity());
        assert_eq!(surface.mutations(), 4);
    }

    #[test]
    fn rotated_surface_restores_on_panic() {
        let mut surface = MatrixSurface::new();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _rotated =
                RotatedSurface::new(&mut surface, Point2d::origin(), Vector2d::zeros(), 1.0);
            panic!("drawing failed");
        }));

        assert!(result.is_err());
        assert_eq!(surface.depth(), 0);
    }
}
