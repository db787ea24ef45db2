use cgmath::{Point3, Vector3};

use crate::animation::Animator;
use crate::camera::{Camera, GlobalRotation};
use crate::creature::turtle;
use crate::pose::{Angle, Part};
use crate::render::{BufferId, DrawCall, Primitive, Renderer, TextureSelect};
use crate::shapes::{Circle, Cube, Cylinder, Point, Triangle};
use crate::{
    BlockPos, Colour, Command, GridDims, Joint, Map, PoseAngles, Settings, Skeleton, Stage,
    Transform, World, WorldError,
};

const EPSILON: f32 = 1e-4;

pub fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

pub fn approx_v3(v: Vector3<f32>, expected: [f32; 3]) -> bool {
    approx(v.x, expected[0]) && approx(v.y, expected[1]) && approx(v.z, expected[2])
}

#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    CreateBuffer(BufferId),
    Clear(Colour),
    ClearDepth,
    UseProgram,
    View(Transform, Transform),
    GlobalRotation(Transform),
    Model(Transform),
    Colour(Colour),
    Texture(TextureSelect),
    PointSize(f32),
    Draw {
        buffer: BufferId,
        positions: Vec<f32>,
        components: i32,
        uv: Option<BufferId>,
        primitive: Primitive,
    },
}

/// Renderer that records every call made on it.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub calls: Vec<Call>,
    pub refuse_buffers: bool,
    next_buffer: BufferId,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn take(&mut self) -> Vec<Call> {
        std::mem::take(&mut self.calls)
    }

    pub fn buffers_created(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, Call::CreateBuffer(_)))
            .count()
    }

    pub fn draws(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, Call::Draw { .. }))
            .count()
    }

    pub fn colours(&self) -> Vec<Colour> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::Colour(colour) => Some(*colour),
                _ => None,
            })
            .collect()
    }
}

impl Renderer for RecordingRenderer {
    fn create_buffer(&mut self) -> Option<BufferId> {
        if self.refuse_buffers {
            return None;
        }
        let id = self.next_buffer;
        self.next_buffer += 1;
        self.calls.push(Call::CreateBuffer(id));
        Some(id)
    }

    fn clear(&mut self, colour: Colour) {
        self.calls.push(Call::Clear(colour));
    }

    fn clear_depth(&mut self) {
        self.calls.push(Call::ClearDepth);
    }

    fn use_program(&mut self) {
        self.calls.push(Call::UseProgram);
    }

    fn set_view(&mut self, view: &Transform, projection: &Transform) {
        self.calls.push(Call::View(*view, *projection));
    }

    fn set_global_rotation(&mut self, rotation: &Transform) {
        self.calls.push(Call::GlobalRotation(*rotation));
    }

    fn set_model(&mut self, model: &Transform) {
        self.calls.push(Call::Model(*model));
    }

    fn set_colour(&mut self, colour: Colour) {
        self.calls.push(Call::Colour(colour));
    }

    fn set_texture(&mut self, select: TextureSelect) {
        self.calls.push(Call::Texture(select));
    }

    fn set_point_size(&mut self, size: f32) {
        self.calls.push(Call::PointSize(size));
    }

    fn draw(&mut self, call: DrawCall) {
        self.calls.push(Call::Draw {
            buffer: call.buffer,
            positions: call.positions.to_vec(),
            components: call.components,
            uv: call.uv.map(|(buffer, _)| buffer),
            primitive: call.primitive,
        });
    }
}

fn render_twice<F: FnMut(&mut RecordingRenderer)>(mut render: F) -> (Vec<Call>, Vec<Call>) {
    let mut renderer = RecordingRenderer::new();
    render(&mut renderer);
    let first = renderer.take();
    render(&mut renderer);
    let second = renderer.take();
    (first, second)
}

fn without_allocations(calls: &[Call]) -> Vec<Call> {
    calls
        .iter()
        .filter(|c| !matches!(c, Call::CreateBuffer(_)))
        .cloned()
        .collect()
}

fn count_allocations(calls: &[Call]) -> usize {
    calls.len() - without_allocations(calls).len()
}

#[test]
fn test_shapes_render_idempotently() {
    let mut cube = Cube::new(Colour::rgb(0.2, 0.4, 0.6));
    let mut cylinder = Cylinder::new(Colour::WHITE, 12);
    let mut triangle = Triangle::new([0.1, 0.2], 20.0, Colour::WHITE);
    let mut point = Point::new([0.0, 0.0], 5.0, Colour::WHITE);
    let mut circle = Circle::new([0.0, 0.0], 10.0, Circle::DEFAULT_SEGMENTS, Colour::WHITE);

    let cases = [
        render_twice(|r| cube.render(r)),
        render_twice(|r| cylinder.render(r)),
        render_twice(|r| triangle.render(r)),
        render_twice(|r| point.render(r)),
        render_twice(|r| circle.render(r)),
    ];

    for (first, second) in cases {
        assert!(count_allocations(&first) > 0);
        assert_eq!(count_allocations(&second), 0);
        assert_eq!(without_allocations(&first), second);
    }
}

#[test]
fn test_geometry_generated_once() {
    let mut cube = Cube::default();
    assert!(cube.geometry().is_none());

    let mut renderer = RecordingRenderer::new();
    cube.render(&mut renderer);
    let generated = cube.geometry().cloned();
    cube.render(&mut renderer);

    assert_eq!(cube.geometry().cloned(), generated);
    assert_eq!(renderer.buffers_created(), 2);
}

#[test]
fn test_cube_face_shading() {
    let colour = Colour([1.0, 0.5, 0.25, 0.5]);
    let mut cube = Cube::new(colour);
    let mut renderer = RecordingRenderer::new();
    cube.render(&mut renderer);

    let expected: Vec<Colour> = [1.0, 0.9, 0.8, 0.7, 0.6, 0.8]
        .iter()
        .map(|&f| colour.shaded(f))
        .collect();
    assert_eq!(renderer.colours(), expected);
    assert_eq!(renderer.draws(), 6);
    assert!(renderer.colours().iter().all(|c| c.a() == 0.5));
}

#[test]
fn test_textured_cube_unshaded() {
    let mut cube = Cube::new(Colour::WHITE).textured(TextureSelect::Unit(0));
    let mut renderer = RecordingRenderer::new();
    cube.render(&mut renderer);

    assert!(renderer.colours().iter().all(|c| *c == Colour::WHITE));
    assert!(renderer
        .calls
        .iter()
        .any(|c| *c == Call::Texture(TextureSelect::Unit(0))));
    assert!(renderer
        .calls
        .iter()
        .all(|c| !matches!(c, Call::Draw { uv: None, .. })));
}

#[test]
fn test_cylinder_groups() {
    let mut cylinder = Cylinder::new(Colour::WHITE, 8);
    let mut renderer = RecordingRenderer::new();
    cylinder.render(&mut renderer);

    let geometry = cylinder.geometry().unwrap();
    assert_eq!(geometry.groups.len(), 3);
    assert_eq!(geometry.vertex_count(), 8 * 12);
    assert_eq!(renderer.draws(), 3);

    // Every rim vertex lies on the radius.
    for v in geometry.positions.chunks(3) {
        let r = (v[0] * v[0] + v[2] * v[2]).sqrt();
        assert!(approx(r, 0.5) || approx(r, 0.0));
        assert!(v[1] == 0.0 || v[1] == 1.0);
    }
}

#[test]
fn test_point_draws_points() {
    let mut point = Point::new([0.5, -0.5], 7.0, Colour::WHITE);
    let mut renderer = RecordingRenderer::new();
    point.render(&mut renderer);

    assert!(renderer.calls.contains(&Call::PointSize(7.0)));
    assert!(renderer.calls.iter().any(|c| matches!(
        c,
        Call::Draw {
            primitive: Primitive::Points,
            components: 2,
            ..
        }
    )));
}

#[test]
fn test_failed_allocation_abandons_render() {
    let mut cube = Cube::default();
    let mut renderer = RecordingRenderer {
        refuse_buffers: true,
        ..Default::default()
    };
    cube.render(&mut renderer);
    assert!(renderer.calls.is_empty());

    renderer.refuse_buffers = false;
    cube.render(&mut renderer);
    assert_eq!(renderer.draws(), 6);
}

#[test]
fn test_scale_not_inherited() {
    let mut sk = Skeleton::new();
    let parent = sk.add(
        None,
        Part::cube("parent", Colour::WHITE)
            .translate(1.0, 0.0, 0.0)
            .rotate(Angle::fixed(30.0), [0.0, 0.0, 1.0])
            .scale(4.0, 0.5, 2.0),
    );
    let child = sk.add(
        Some(parent),
        Part::cube("child", Colour::WHITE)
            .translate(0.0, 1.0, 0.0)
            .scale(0.1, 0.2, 0.3),
    );

    let angles = PoseAngles::default();
    let before = sk.pose(Transform::identity(), &angles);
    assert!(approx_v3(before[child].transform.axis_scale(), [0.1, 0.2, 0.3]));

    sk.part_mut(parent).unwrap().scale = [10.0, 10.0, 10.0];
    let after = sk.pose(Transform::identity(), &angles);
    assert_eq!(before[child], after[child]);
    assert!(approx_v3(after[parent].transform.axis_scale(), [10.0, 10.0, 10.0]));
}

#[test]
fn test_rotation_and_translation_inherited() {
    let mut sk = Skeleton::new();
    let parent = sk.add(
        None,
        Part::frame("parent")
            .translate(1.0, 0.0, 0.0)
            .rotate(Angle::driven(0.0, 1.0, Joint::Joint1), [0.0, 0.0, 1.0]),
    );
    let child = sk.add(Some(parent), Part::cube("child", Colour::WHITE).translate(1.0, 0.0, 0.0));

    let mut angles = PoseAngles::default();
    angles.joint1 = 90.0;
    let posed = sk.pose(Transform::identity(), &angles);
    assert!(approx_v3(posed[child].transform.origin(), [1.0, 1.0, 0.0]));
}

#[test]
fn test_turtle_parts_keep_own_scale() {
    let sk = turtle();
    let mut angles = PoseAngles::default();
    angles.joint1 = 12.0;
    angles.joint2 = -7.0;
    angles.joint3 = 3.0;

    for posed in sk.pose(Transform::identity().translated(0.0, -0.2, 0.0), &angles) {
        let part = sk.part(posed.part).unwrap();
        assert!(
            approx_v3(posed.transform.axis_scale(), part.scale),
            "{} inherited scale",
            part.name
        );
    }
}

#[test]
fn test_turtle_head_follows_neck() {
    let sk = turtle();
    let head = sk.find("head").unwrap();
    let neck = sk.find("neck").unwrap();

    let mut angles = PoseAngles::default();
    let rest = sk.pose(Transform::identity(), &angles);
    angles.neck = 30.0;
    let moved = sk.pose(Transform::identity(), &angles);

    assert_ne!(rest[neck].snapshot, moved[neck].snapshot);
    assert_ne!(rest[head].transform.origin(), moved[head].transform.origin());
}

#[test]
fn test_invalid_parent_attaches_to_root() {
    let mut sk = Skeleton::new();
    let i = sk.add(Some(5), Part::cube("orphan", Colour::WHITE).translate(1.0, 2.0, 3.0));
    assert_eq!(sk.part(i).unwrap().parent, None);

    let posed = sk.pose(Transform::identity(), &PoseAngles::default());
    assert!(approx_v3(posed[i].transform.origin(), [1.0, 2.0, 3.0]));
}

#[test]
fn test_animation_toggle_keeps_last_value() {
    let mut animator = Animator::default();
    let mut angles = PoseAngles::default();
    angles.joint1 = 42.0;

    assert!(animator.toggle(Joint::Joint1));
    animator.update(&mut angles, 1.0);
    let animated = angles.joint1;
    assert_eq!(animated, (15.0 * 1.0f32.sin()).abs());

    assert!(!animator.toggle(Joint::Joint1));
    animator.update(&mut angles, 2.0);
    assert_eq!(angles.joint1, animated);
}

#[test]
fn test_animation_only_touches_running_joints() {
    let mut animator = Animator::default();
    animator.set_running(Joint::Neck, true);

    let mut angles = PoseAngles::default();
    angles.joint2 = 17.0;
    animator.update(&mut angles, 0.25);

    assert_eq!(angles.joint2, 17.0);
    assert!(approx(angles.neck, 55.0 + 10.0 * 0.5f32.sin()));
}

#[test]
fn test_waves() {
    assert_eq!(Animator::wave(Joint::Neck, 0.0), PoseAngles::REST_NECK);
    for t in [0.0, 0.7, 1.9, 5.3] {
        assert!(Animator::wave(Joint::Joint1, t) >= 0.0);
        assert!(Animator::wave(Joint::Joint2, t) <= 10.0);
        assert!(Animator::wave(Joint::Joint3, t) <= 5.0);
    }
}

#[test]
fn test_place_remove_restores() {
    let mut map = Map::new(GridDims::default(), 0.5);
    let pos = BlockPos::new(3, 2, 9);
    assert_eq!(map.get(pos), None);

    assert!(map.place(pos));
    assert_eq!(map.get(pos), Some(map.block_transform(pos)));
    assert!(map.remove(pos));
    assert_eq!(map.get(pos), None);
    assert_eq!(map.count(), 0);
}

#[test]
fn test_out_of_range_cells() {
    let mut map = Map::new(GridDims::default(), 0.5);
    let pos = BlockPos::new(32, 0, 0);
    assert!(!map.contains(pos));
    assert!(!map.place(pos));
    assert!(!map.remove(pos));
    assert_eq!(map.get(BlockPos::new(0, 4, 0)), None);
}

#[test]
fn test_block_transform_centred() {
    let map = Map::new(GridDims::default(), 0.5);
    assert_eq!(map.centre(), BlockPos::new(16, 0, 16));

    let t = map.block_transform(BlockPos::new(17, 0, 16));
    assert!(approx_v3(t.origin(), [0.5, -0.5, 0.0]));
    assert!(approx_v3(t.axis_scale(), [0.5, 0.5, 0.5]));
}

#[test]
fn test_perimeter_wall() {
    let mut map = Map::new(GridDims::default(), 0.5);
    map.build_perimeter_wall(2);
    assert_eq!(map.count(), (32 * 4 - 4) * 2);
    assert!(map.get(BlockPos::new(0, 1, 7)).is_some());
    assert!(map.get(BlockPos::new(0, 2, 7)).is_none());
    assert!(map.get(BlockPos::new(5, 0, 5)).is_none());
}

#[test]
fn test_nearest_block_one_step() {
    let map = Map::new(GridDims::default(), 0.5);
    let camera = Camera::new(Point3::new(0.0, 0.0, 0.0), Point3::new(10.0, 0.0, 0.0));
    assert_eq!(map.nearest_to(&camera, 0.5), BlockPos::new(17, 0, 16));
}

#[test]
fn test_nearest_block_clamps() {
    let map = Map::new(GridDims::default(), 0.5);

    let far = Camera::new(Point3::new(100.0, 0.0, 0.0), Point3::new(200.0, 0.0, 0.0));
    assert_eq!(map.nearest_to(&far, 0.5).x, 31);

    let behind = Camera::new(Point3::new(-100.0, -5.0, -100.0), Point3::new(-200.0, -5.0, -100.0));
    assert_eq!(map.nearest_to(&behind, 0.5), BlockPos::new(0, 0, 0));

    let high = Camera::new(Point3::new(0.0, 50.0, 0.0), Point3::new(0.0, 60.0, 0.0));
    assert_eq!(map.nearest_to(&high, 0.5).y, 3);
}

#[test]
fn test_world_targets_in_front_of_camera() {
    let mut world = World::new(&Settings::default());
    world.camera = Camera::new(Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 0.0, 0.0));
    // One world unit ahead is two cells at the default block size.
    let target = BlockPos::new(18, 0, 16);

    assert_eq!(world.nearest_block_position(), target);
    assert_eq!(world.nearest_block(), None);
    assert!(world.place_at_target());
    assert!(world.nearest_block().is_some());
    assert!(world.remove_at_target());
    assert_eq!(world.nearest_block(), None);
}

#[test]
fn test_world_export_import() {
    let settings = Settings::default();
    let mut world = World::new(&settings);
    world.map.clear();
    world.place_block(BlockPos::new(1, 2, 3));
    world.place_block(BlockPos::new(20, 0, 5));
    let saved = world.export_base64().unwrap();

    let mut other = World::new(&settings);
    assert_eq!(other.import_base64(&saved).unwrap(), 2);
    assert!(other.map.get(BlockPos::new(1, 2, 3)).is_some());
    assert!(other.map.get(BlockPos::new(20, 0, 5)).is_some());
    assert!(other.map.get(BlockPos::new(0, 0, 0)).is_none());
}

#[test]
fn test_world_import_rejects_mismatch() {
    let small = Settings {
        grid: GridDims {
            width: 4,
            depth: 4,
            height: 2,
        },
        ..Default::default()
    };
    let bytes = World::new(&small).export().unwrap();

    let mut world = World::new(&Settings::default());
    let before = world.map.count();
    assert!(matches!(
        world.import(&bytes),
        Err(WorldError::Dimensions { .. })
    ));
    assert_eq!(world.map.count(), before);

    assert!(matches!(
        world.import_base64("not base64!"),
        Err(WorldError::Encoding(_))
    ));
    assert!(matches!(world.import(&[1, 2]), Err(WorldError::Decode(_))));
}

#[test]
fn test_rotation_inputs_independent() {
    let mut rotation = GlobalRotation::with_slider(5.0);
    rotation.set_pointer(0.5, -0.5);
    assert_eq!(rotation.slider, 5.0);
    assert_eq!(rotation.pointer_y, 90.0);
    assert_eq!(rotation.pointer_x, -45.0);

    rotation.set_slider(20.0);
    assert_eq!(rotation.pointer_y, 90.0);
    assert_eq!(rotation.pointer_x, -45.0);

    let expected = Transform::identity()
        .rotated(20.0, 0.0, 1.0, 0.0)
        .rotated(-45.0, 1.0, 0.0, 0.0)
        .rotated(90.0, 0.0, 1.0, 0.0);
    assert_eq!(rotation.transform(), expected);
}

#[test]
fn test_camera_moves() {
    let mut camera = Camera::default();
    camera.move_forward(1.0);
    assert!(approx(camera.eye.z, 2.0));

    camera.move_left(1.0);
    assert!(approx(camera.eye.x, -1.0));
    camera.move_right(2.0);
    assert!(approx(camera.eye.x, 1.0));

    assert!(approx(camera.yaw(), 0.0));
    camera.pan_left(90.0);
    assert!(approx(camera.yaw(), 90.0));
    assert!(approx_v3(camera.direction(), [-1.0, 0.0, 0.0]));
    camera.pan_right(90.0);
    assert!(approx(camera.yaw(), 0.0));
}

#[test]
fn test_keys() {
    assert_eq!(Command::from_key("W"), Some(Command::MoveForward));
    assert_eq!(Command::from_key("q"), Some(Command::PanLeft));
    assert_eq!(Command::from_key("g"), Some(Command::RemoveBlock));
    assert_eq!(Command::from_key("Shift"), None);
}

#[test]
fn test_settings_defaults_fill_gaps() {
    let settings: Settings = serde_json::from_str(r#"{"block_size": 1.0, "grid": {"width": 8, "depth": 8, "height": 2}}"#).unwrap();
    assert_eq!(settings.block_size, 1.0);
    assert_eq!(settings.grid.width, 8);
    assert_eq!(settings.canvas_id, "webgl");
    assert_eq!(settings.reach, 1.0);
    assert_eq!(settings.angles.neck, PoseAngles::REST_NECK);
}

#[test]
fn test_settings_sanitised() {
    let settings = Settings {
        block_size: 0.0,
        cylinder_segments: 1,
        ..Default::default()
    }
    .sanitised();
    assert_eq!(settings.block_size, 0.5);
    assert_eq!(settings.cylinder_segments, 3);
}

#[test]
fn test_settings_sanitised_rejects_oversized_grid() {
    let settings: Settings = serde_json::from_str(
        r#"{"grid": {"width": 4294967296, "depth": 4294967296, "height": 4}}"#,
    )
    .unwrap();
    assert_eq!(settings.grid.cell_count(), None);
    assert_eq!(settings.clone().sanitised().grid, GridDims::default());

    let big = GridDims {
        width: 2048,
        depth: 2048,
        height: 1,
    };
    assert_eq!(big.cell_count(), None);
    assert_eq!(Map::new(big, 0.5).dims(), GridDims::default());

    let stage = Stage::new(settings);
    assert_eq!(stage.world.map.dims(), GridDims::default());
}

#[test]
fn test_settings_sanitised_replaces_non_finite() {
    let settings = Settings {
        reach: f32::NAN,
        move_speed: f32::INFINITY,
        pan_degrees: f32::NEG_INFINITY,
        fov: 180.0,
        block_size: f32::INFINITY,
        ..Default::default()
    }
    .sanitised();
    let defaults = Settings::default();
    assert_eq!(settings.reach, defaults.reach);
    assert_eq!(settings.move_speed, defaults.move_speed);
    assert_eq!(settings.pan_degrees, defaults.pan_degrees);
    assert_eq!(settings.fov, defaults.fov);
    assert_eq!(settings.block_size, defaults.block_size);
}

#[test]
fn test_stage_frame() {
    let mut stage = Stage::default();
    let mut renderer = RecordingRenderer::new();
    stage.frame(&mut renderer, 0.0);

    assert_eq!(renderer.calls[0], Call::Clear(Colour::BACKGROUND));
    let hud_start = renderer
        .calls
        .iter()
        .position(|c| *c == Call::ClearDepth)
        .unwrap();
    assert!(renderer.calls[..hud_start]
        .iter()
        .any(|c| matches!(c, Call::Draw { .. })));
    assert!(renderer.calls[hud_start..]
        .iter()
        .any(|c| matches!(c, Call::Draw { primitive: Primitive::Points, .. })));

    let first = without_allocations(&renderer.take());
    stage.frame(&mut renderer, 0.0);
    assert_eq!(renderer.buffers_created(), 0);
    assert_eq!(renderer.calls, first);
}

#[test]
fn test_stage_manual_and_animated_joints() {
    let mut stage = Stage::default();
    stage.set_joint_angle(Joint::Joint2, 30.0);
    stage.tick(1.0);
    assert_eq!(stage.angles.joint2, 30.0);

    stage.toggle_animation(Joint::Joint2);
    stage.set_joint_angle(Joint::Joint2, 45.0);
    stage.tick(1.0);
    let animated = (10.0 * 3.0f32.sin()).abs();
    assert_eq!(stage.angles.joint2, animated);

    stage.toggle_animation(Joint::Joint2);
    stage.tick(4.0);
    assert_eq!(stage.angles.joint2, animated);
}

#[test]
fn test_stage_pointer() {
    let mut stage = Stage::default();
    stage.pointer(1.0, 1.0, false);
    assert_eq!(stage.rotation.pointer_y, 180.0);
    assert_eq!(stage.rotation.pointer_x, 90.0);
    assert_eq!(stage.rotation.slider, 5.0);

    stage.pointer(0.0, 0.0, true);
    assert!(stage.animator.is_running(Joint::Neck));
    assert_eq!(stage.rotation.pointer_y, 180.0);
}

#[test]
fn test_stage_block_commands() {
    let mut stage = Stage::default();
    stage.world.camera = Camera::new(Point3::new(0.0, 0.0, 0.0), Point3::new(0.0, 0.0, -1.0));
    let before = stage.world.map.count();

    stage.apply(Command::PlaceBlock);
    assert_eq!(stage.world.map.count(), before + 1);
    assert!(stage.world.map.get(BlockPos::new(16, 0, 14)).is_some());

    stage.apply(Command::RemoveBlock);
    assert_eq!(stage.world.map.count(), before);
}

#[test]
fn test_draw_call_constructors() {
    assert_eq!(TextureSelect::default(), TextureSelect::Colour);
    assert_eq!(TextureSelect::default().uniform(), -2);

    let flat = [0.0, 0.0, 0.5, 0.5];
    let points = DrawCall::points(0, &flat, 2);
    assert_eq!(points.primitive, Primitive::Points);
    assert_eq!(points.vertex_count(), 2);

    let tris = DrawCall::triangles(1, &flat).with_components(2);
    assert_eq!(tris.primitive, Primitive::Triangles);
    assert_eq!(tris.vertex_count(), 2);
}
