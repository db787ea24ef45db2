use cgmath::{Deg, InnerSpace, Matrix4, SquareMatrix, Vector3, Vector4};

/// A 4x4 affine transform with matrix-stack semantics: every operation
/// post-multiplies, so the most recently applied operation acts first on
/// object-space vertices.
///
/// `Transform` is `Copy`. Deriving a child's pose from a parent is always a
/// copy of the parent's value at that moment, never a reference to it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform(Matrix4<f32>);

impl Transform {
    pub fn identity() -> Self {
        Transform(Matrix4::identity())
    }

    pub fn from_matrix(matrix: Matrix4<f32>) -> Self {
        Transform(matrix)
    }

    pub fn matrix(&self) -> &Matrix4<f32> {
        &self.0
    }

    /// Column-major elements, ready to be handed to a shader uniform.
    pub fn elements(&self) -> &[f32; 16] {
        self.0.as_ref()
    }

    pub fn translate(&mut self, x: f32, y: f32, z: f32) -> &mut Self {
        self.0 = self.0 * Matrix4::from_translation(Vector3::new(x, y, z));
        self
    }

    /// Rotate by `degrees` about the axis `(x, y, z)`. A zero axis is a no-op.
    pub fn rotate(&mut self, degrees: f32, x: f32, y: f32, z: f32) -> &mut Self {
        let axis = Vector3::new(x, y, z);
        if axis.magnitude2() > 0.0 {
            self.0 = self.0 * Matrix4::from_axis_angle(axis.normalize(), Deg(degrees));
        }
        self
    }

    pub fn scale(&mut self, x: f32, y: f32, z: f32) -> &mut Self {
        self.0 = self.0 * Matrix4::from_nonuniform_scale(x, y, z);
        self
    }

    /// Consuming variants of the operations above, for building values inline.
    #[must_use]
    pub fn translated(mut self, x: f32, y: f32, z: f32) -> Self {
        self.translate(x, y, z);
        self
    }

    #[must_use]
    pub fn rotated(mut self, degrees: f32, x: f32, y: f32, z: f32) -> Self {
        self.rotate(degrees, x, y, z);
        self
    }

    #[must_use]
    pub fn scaled(mut self, x: f32, y: f32, z: f32) -> Self {
        self.scale(x, y, z);
        self
    }

    pub fn origin(&self) -> Vector3<f32> {
        self.0.w.truncate()
    }

    /// World-space length of each local axis, i.e. the scale this transform
    /// applies along its own x, y and z.
    pub fn axis_scale(&self) -> Vector3<f32> {
        Vector3::new(
            self.0.x.truncate().magnitude(),
            self.0.y.truncate().magnitude(),
            self.0.z.truncate().magnitude(),
        )
    }

    pub fn apply(&self, point: Vector3<f32>) -> Vector3<f32> {
        (self.0 * Vector4::new(point.x, point.y, point.z, 1.0)).truncate()
    }
}

impl Default for Transform {
    fn default() -> Self {
        Transform::identity()
    }
}

impl From<Matrix4<f32>> for Transform {
    fn from(matrix: Matrix4<f32>) -> Self {
        Transform(matrix)
    }
}
